//! New-vs-returning partition of the current cycle's identifiers.

use std::collections::BTreeSet;

use skywatch_models::DiffResult;

/// Partitions current identifiers against the previous snapshot's set.
///
/// `new` is the set difference, `returning` the intersection.
/// Identifiers present only in `previous` departed since the last
/// cycle and are not part of the result; a caller that wants them can
/// difference the other way.
#[must_use]
pub fn partition(current: &BTreeSet<String>, previous: &BTreeSet<String>) -> DiffResult {
    DiffResult {
        new: current.difference(previous).cloned().collect(),
        returning: current.intersection(previous).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_models::Presence;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn partitions_new_and_returning() {
        let result = partition(&set(&["A", "B"]), &set(&["B", "C"]));
        assert_eq!(result.new, set(&["A"]));
        assert_eq!(result.returning, set(&["B"]));
    }

    #[test]
    fn departed_identifiers_are_absent() {
        let result = partition(&set(&["A", "B"]), &set(&["B", "C"]));
        assert!(!result.new.contains("C"));
        assert!(!result.returning.contains("C"));
    }

    #[test]
    fn empty_previous_marks_everything_new() {
        let result = partition(&set(&["A", "B"]), &BTreeSet::new());
        assert_eq!(result.new, set(&["A", "B"]));
        assert!(result.returning.is_empty());
    }

    #[test]
    fn presence_tagging_follows_the_partition() {
        let result = partition(&set(&["A", "B"]), &set(&["B"]));
        assert_eq!(result.presence_of("A"), Presence::New);
        assert_eq!(result.presence_of("B"), Presence::Returning);
    }
}
