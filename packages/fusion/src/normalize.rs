//! Market-question normalization for cross-cycle continuity.
//!
//! Prediction markets re-list near-identical questions with shifting
//! date phrases ("...by March 2026?", "...on June 15?"). The raw text
//! is therefore a poor continuity key: yesterday's record would never
//! match today's re-listed question. Normalization strips the date
//! phrase, punctuation, and case before the question is used as a key.
//!
//! The fragment patterns are heuristic and known to be incomplete;
//! they can mis-merge questions that differ only in their deadline.
//! That trade-off is accepted: merging "strike by March" with "strike
//! by April" is more useful for trend continuity than treating them as
//! unrelated.

use std::sync::LazyLock;

use regex::Regex;

/// Date phrases: "by march 2026", "on june 15", "before 2027",
/// "in 2026", "by march 15 2026", "by end of 2026".
static DATE_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:by|on|before|in|until)\s+
        (?:end\s+of\s+)?
        (?:(?:january|february|march|april|may|june|july|august|
            september|october|november|december)\s*)?
        (?:\d{1,2}\s*,?\s*)?
        (?:\d{4})?\s*$",
    )
    .expect("valid regex")
});

/// Apostrophes are deleted outright so "Iran's" folds to "irans".
static APOSTROPHE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['\u{2019}]").expect("valid regex"));

/// Punctuation that does not contribute to question identity.
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?!.,:;\u{201c}\u{201d}\x22]+").expect("valid regex"));

/// Collapses runs of whitespace left by the other passes.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Normalizes a market question into a stable continuity key.
///
/// The pipeline: lowercase, strip punctuation, strip a trailing date
/// phrase, collapse whitespace, trim.
#[must_use]
pub fn market_key(question: &str) -> String {
    let lower = question.to_lowercase();
    let no_apostrophe = APOSTROPHE_RE.replace_all(&lower, "");
    let no_punct = PUNCTUATION_RE.replace_all(&no_apostrophe, " ");
    let no_date = DATE_PHRASE_RE.replace(no_punct.trim(), "");
    WHITESPACE_RE.replace_all(no_date.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_month_year_phrase() {
        assert_eq!(
            market_key("US strikes Iran by March 2026?"),
            "us strikes iran"
        );
    }

    #[test]
    fn strips_full_date_with_day_and_year() {
        assert_eq!(
            market_key("Ceasefire holds by March 15, 2026?"),
            "ceasefire holds"
        );
    }

    #[test]
    fn strips_trailing_date_phrase() {
        assert_eq!(market_key("US strikes Iran on June 15?"), "us strikes iran");
    }

    #[test]
    fn relisted_questions_share_a_key() {
        assert_eq!(
            market_key("Will the US strike Iran by April 2026?"),
            market_key("Will the US strike Iran by May 2026?")
        );
    }

    #[test]
    fn strips_punctuation_and_case() {
        assert_eq!(
            market_key("Will Iran's enrichment exceed 60%, before 2027?"),
            market_key("will irans enrichment exceed 60%")
        );
    }

    #[test]
    fn mid_sentence_dates_are_left_alone() {
        // Only a trailing date phrase is a deadline; "in 2026" in the
        // middle of the question is part of its meaning.
        assert_eq!(
            market_key("Will the 2026 talks in Vienna resume?"),
            "will the 2026 talks in vienna resume"
        );
    }

    #[test]
    fn plain_question_is_only_case_folded() {
        assert_eq!(
            market_key("Will Iran close the Strait of Hormuz"),
            "will iran close the strait of hormuz"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = market_key("US strikes Iran by March 2026?");
        assert_eq!(market_key(&once), once);
    }
}
