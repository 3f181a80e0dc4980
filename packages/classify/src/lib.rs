#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Airframe classification from raw identifiers.
//!
//! Maps military callsign prefixes (e.g. "RCH" -> C-17) and ICAO type
//! codes (e.g. "K35R" -> KC-135R) to an airframe name and mission role.
//! Classification is a pure lookup over immutable tables injected at
//! construction; there is no shared mutable state, so a [`Classifier`]
//! can be queried from any number of threads.
//!
//! Table order is semantically meaningful in both tables: some prefixes
//! are substrings of others, and the first declared match wins.

pub mod hex;
pub mod tables;

use skywatch_models::Classification;

/// Lookup tables for a [`Classifier`], in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ClassifierTables {
    /// Callsign prefix -> classification, ordered.
    pub callsign_prefixes: Vec<(&'static str, Classification)>,
    /// Normalized ICAO type code -> classification, ordered.
    pub type_codes: Vec<(&'static str, Classification)>,
    /// Callsign prefixes that mark an aircraft as military, used by
    /// feeds that do not pre-tag military traffic.
    pub military_prefixes: Vec<&'static str>,
}

/// Immutable identifier-to-airframe classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: ClassifierTables,
}

impl Classifier {
    #[must_use]
    pub fn new(tables: ClassifierTables) -> Self {
        log::debug!(
            "Classifier: {} callsign prefixes, {} type codes",
            tables.callsign_prefixes.len(),
            tables.type_codes.len()
        );
        Self { tables }
    }

    /// Classifier over the bundled production tables.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(tables::bundled())
    }

    /// Classifies a callsign by case-insensitive prefix match.
    ///
    /// First declared prefix wins. Empty or whitespace callsigns yield
    /// `None`, never an error.
    #[must_use]
    pub fn classify_callsign(&self, callsign: &str) -> Option<Classification> {
        let callsign = callsign.trim().to_uppercase();
        if callsign.is_empty() {
            return None;
        }
        self.tables
            .callsign_prefixes
            .iter()
            .find(|(prefix, _)| callsign.starts_with(prefix))
            .map(|(_, classification)| classification.clone())
    }

    /// Classifies an ICAO type code.
    ///
    /// The code is uppercased and stripped of hyphens, then matched
    /// exactly; failing that, the first table entry that is a prefix of
    /// the code (or vice versa) wins. "C17A" therefore resolves via the
    /// "C17" entry.
    #[must_use]
    pub fn classify_type_code(&self, type_code: &str) -> Option<Classification> {
        let code = type_code.trim().to_uppercase().replace('-', "");
        if code.is_empty() {
            return None;
        }
        if let Some((_, classification)) =
            self.tables.type_codes.iter().find(|(key, _)| *key == code)
        {
            return Some(classification.clone());
        }
        self.tables
            .type_codes
            .iter()
            .find(|(key, _)| code.starts_with(key) || key.starts_with(code.as_str()))
            .map(|(_, classification)| classification.clone())
    }

    /// Classifies an observation, preferring the feed's type code over
    /// the callsign prefix.
    #[must_use]
    pub fn classify(&self, type_code: Option<&str>, callsign: &str) -> Option<Classification> {
        type_code
            .and_then(|code| self.classify_type_code(code))
            .or_else(|| self.classify_callsign(callsign))
    }

    /// Whether a callsign matches a known military prefix.
    #[must_use]
    pub fn is_military_callsign(&self, callsign: &str) -> bool {
        let callsign = callsign.trim().to_uppercase();
        !callsign.is_empty()
            && self
                .tables
                .military_prefixes
                .iter()
                .any(|prefix| callsign.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_airlift_callsign() {
        let classifier = Classifier::bundled();
        let c = classifier.classify_callsign("RCH4521").unwrap();
        assert!(c.airframe.starts_with("C-17"));
        assert_eq!(c.role, "Strategic airlift");
    }

    #[test]
    fn classifies_tanker_callsign_role() {
        let classifier = Classifier::bundled();
        let c = classifier.classify_callsign("ETHYL21").unwrap();
        assert!(c.role.to_lowercase().contains("refueling"));
    }

    #[test]
    fn callsign_match_is_case_insensitive() {
        let classifier = Classifier::bundled();
        assert_eq!(
            classifier.classify_callsign("rch4521"),
            classifier.classify_callsign("RCH4521")
        );
    }

    #[test]
    fn empty_callsign_is_none() {
        let classifier = Classifier::bundled();
        assert_eq!(classifier.classify_callsign(""), None);
        assert_eq!(classifier.classify_callsign("   "), None);
    }

    #[test]
    fn unknown_callsign_is_none() {
        let classifier = Classifier::bundled();
        assert_eq!(classifier.classify_callsign("UAL123"), None);
    }

    #[test]
    fn type_code_exact_match() {
        let classifier = Classifier::bundled();
        let c = classifier.classify_type_code("K35R").unwrap();
        assert_eq!(c.airframe, "KC-135R Stratotanker");
    }

    #[test]
    fn type_code_partial_match() {
        let classifier = Classifier::bundled();
        let c = classifier.classify_type_code("C17A").unwrap();
        assert!(c.airframe.starts_with("C-17"));
    }

    #[test]
    fn type_code_strips_hyphens() {
        let classifier = Classifier::bundled();
        assert_eq!(
            classifier.classify_type_code("C-17"),
            classifier.classify_type_code("C17")
        );
    }

    #[test]
    fn type_code_wins_over_callsign() {
        let classifier = Classifier::bundled();
        // Callsign says tanker, type code says bomber; the feed's type
        // code is the stronger signal.
        let c = classifier.classify(Some("B52"), "ETHYL21").unwrap();
        assert!(c.airframe.starts_with("B-52"));
    }

    #[test]
    fn falls_back_to_callsign_without_type_code() {
        let classifier = Classifier::bundled();
        let c = classifier.classify(None, "DOOM91").unwrap();
        assert!(c.airframe.starts_with("B-2"));
    }

    #[test]
    fn military_prefix_detection() {
        let classifier = Classifier::bundled();
        assert!(classifier.is_military_callsign("RCH4521"));
        assert!(classifier.is_military_callsign("ascot62"));
        assert!(!classifier.is_military_callsign("UAL123"));
        assert!(!classifier.is_military_callsign(""));
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = Classifier::bundled();
        assert_eq!(
            classifier.classify(Some("C17"), "RCH4521"),
            classifier.classify(Some("C17"), "RCH4521")
        );
    }
}
