//! Point lookups against a prebuilt [`AnagramIndex`].

use crate::index::{canonical_key, AnagramIndex};

/// Return every dictionary word that is an anagram of `input`.
///
/// The input is trimmed first; an input that is empty after trimming
/// yields an empty slice. The lookup key is computed with the same
/// function the builder used, so a query matches an entry exactly when
/// their canonical keys are equal. Absence of a match is a normal empty
/// result, never an error.
pub fn lookup<'a>(index: &'a AnagramIndex, input: &str) -> &'a [String] {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return &[];
    }
    index.get(&canonical_key(trimmed)).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> AnagramIndex {
        AnagramIndex::build(
            ["cat", "act", "dog", "god", "tac"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_lookup_returns_sorted_group() {
        let index = sample_index();
        assert_eq!(lookup(&index, "atc"), ["act", "cat", "tac"]);
        assert_eq!(lookup(&index, "ogd"), ["dog", "god"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = sample_index();
        let lower = lookup(&index, "cat").to_vec();
        assert_eq!(lookup(&index, "CAT"), &lower[..]);
        assert_eq!(lookup(&index, "Act"), &lower[..]);
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        let index = sample_index();
        assert_eq!(lookup(&index, "  tac  "), ["act", "cat", "tac"]);
    }

    #[test]
    fn test_empty_and_whitespace_input_yield_empty() {
        let index = sample_index();
        assert!(lookup(&index, "").is_empty());
        assert!(lookup(&index, "   ").is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let index = sample_index();
        assert!(lookup(&index, "zzqx").is_empty());
    }

    #[test]
    fn test_non_alphabetic_input_degrades_to_empty() {
        let index = sample_index();
        assert!(lookup(&index, "c4t!").is_empty());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let index = sample_index();
        let first = lookup(&index, "atc").to_vec();
        for _ in 0..10 {
            assert_eq!(lookup(&index, "atc"), &first[..]);
        }
    }
}
