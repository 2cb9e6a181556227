//! Anagram index construction.
//!
//! The index maps a canonical key (the case-folded, code-point-sorted
//! letters of a word) to every dictionary word sharing that key. It is
//! built once at startup and never mutated afterwards, so readers may
//! share it across threads without coordination.

use std::collections::HashMap;

/// Compute the canonical key for a word or query string.
///
/// Lower-cases every character and sorts the characters in code-point
/// order. Two strings are anagrams of each other exactly when their
/// canonical keys are equal.
pub fn canonical_key(s: &str) -> String {
    let mut chars: Vec<char> = s.to_lowercase().chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Immutable mapping from canonical key to the dictionary words sharing it.
#[derive(Clone, Debug)]
pub struct AnagramIndex {
    entries: HashMap<String, Vec<String>>,
    word_count: usize,
}

impl AnagramIndex {
    /// Build an index from a word list.
    ///
    /// Words keep their original casing. Each key's group is sorted
    /// ascending case-insensitively, with the original form as a tie-break
    /// so repeated builds over the same list produce identical orderings.
    /// Duplicate source words are kept.
    pub fn build(words: Vec<String>) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        let word_count = words.len();

        for word in words {
            entries.entry(canonical_key(&word)).or_default().push(word);
        }

        for group in entries.values_mut() {
            group.sort_by(|a, b| {
                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| a.cmp(b))
            });
        }

        Self {
            entries,
            word_count,
        }
    }

    /// Get the words stored under a canonical key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of words in the source list, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct canonical keys.
    pub fn group_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_canonical_key_sorts_letters() {
        assert_eq!(canonical_key("cat"), "act");
        assert_eq!(canonical_key("dog"), "dgo");
    }

    #[test]
    fn test_canonical_key_case_folds() {
        assert_eq!(canonical_key("CAT"), canonical_key("cat"));
        assert_eq!(canonical_key("TaB"), canonical_key("bat"));
    }

    #[test]
    fn test_canonical_key_is_pure() {
        let first = canonical_key("listen");
        let second = canonical_key("listen");
        assert_eq!(first, second);
        assert_eq!(first, "eilnst");
    }

    #[test]
    fn test_build_groups_anagrams() {
        let index = AnagramIndex::build(words(&["cat", "act", "dog", "god", "tac"]));

        assert_eq!(index.get("act"), Some(&words(&["act", "cat", "tac"])[..]));
        assert_eq!(index.get("dgo"), Some(&words(&["dog", "god"])[..]));
        assert_eq!(index.get("zzz"), None);
    }

    #[test]
    fn test_groups_sorted_case_insensitively() {
        let index = AnagramIndex::build(words(&["Tab", "Bat", "act", "cat"]));

        // "Bat" sorts before "Tab" under case folding even though 'T' < 'b'
        // in code-point order.
        assert_eq!(index.get("abt"), Some(&words(&["Bat", "Tab"])[..]));
        assert_eq!(index.get("act"), Some(&words(&["act", "cat"])[..]));
    }

    #[test]
    fn test_case_fold_ties_break_on_original_form() {
        let index = AnagramIndex::build(words(&["act", "Act", "ACT"]));
        assert_eq!(index.get("act"), Some(&words(&["ACT", "Act", "act"])[..]));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let index = AnagramIndex::build(words(&["cat", "cat", "act"]));
        assert_eq!(index.get("act"), Some(&words(&["act", "cat", "cat"])[..]));
        assert_eq!(index.word_count(), 3);
        assert_eq!(index.group_count(), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let list = words(&["Tab", "Bat", "cat", "act", "tac", "dog", "god"]);
        let a = AnagramIndex::build(list.clone());
        let b = AnagramIndex::build(list);

        assert_eq!(a.group_count(), b.group_count());
        for key in ["abt", "act", "dgo"] {
            assert_eq!(a.get(key), b.get(key));
        }
    }

    #[test]
    fn test_counts() {
        let index = AnagramIndex::build(words(&["cat", "act", "dog"]));
        assert_eq!(index.word_count(), 3);
        assert_eq!(index.group_count(), 2);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_empty_list_builds_empty_index() {
        let index = AnagramIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.word_count(), 0);
    }
}
