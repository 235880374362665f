//! Consistency checks between tables
//!
//! Nothing here is fatal. Duplicate ids are emitted as-is and the consumer
//! decides which one wins.

use std::collections::HashSet;

/// Ids that occur more than once, each reported once, in first-repeat order
pub fn duplicate_ids<'a, I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}

/// Ids in `metadata` that have no counterpart in `strings`
pub fn unmatched_ids<'a, S, M>(strings: S, metadata: M) -> Vec<String>
where
    S: IntoIterator<Item = &'a str>,
    M: IntoIterator<Item = &'a str>,
{
    let known: HashSet<&str> = strings.into_iter().collect();
    metadata
        .into_iter()
        .filter(|id| !known.contains(id))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids() {
        assert_eq!(
            duplicate_ids(["a", "b", "a", "c", "a", "b"]),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(duplicate_ids(["a", "b"]).is_empty());
    }

    #[test]
    fn test_unmatched_ids() {
        assert_eq!(unmatched_ids(["a", "b"], ["b", "z"]), vec!["z".to_string()]);
        assert!(unmatched_ids(["a"], Vec::<&str>::new()).is_empty());
    }
}
