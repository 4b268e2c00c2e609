//! Canonical test dictionary
//!
//! Immutable bundle of the clinical configuration tables (entries, aliases,
//! reference ranges, units, notes). A [`Dictionary`] is built once and
//! passed explicitly to the pure resolver/classifier/extractor functions;
//! there is no global mutable state, and tests can substitute alternate
//! tables via [`Dictionary::new`].

pub mod resolve;
pub mod tables;
pub mod units;

use std::sync::OnceLock;

use crate::types::{RangeStatus, ReferenceRange};
pub use tables::{AliasEntry, TestEntry};

/// Immutable clinical dictionary bound to a set of configuration tables
///
/// Holds the canonical entries, aliases, reference ranges, and note tables,
/// plus the precomputed longest-first iteration orders used by the
/// resolver's substring fallback.
#[derive(Debug)]
pub struct Dictionary {
    entries: &'static [TestEntry],
    aliases: &'static [AliasEntry],
    ranges: &'static [(&'static str, ReferenceRange)],
    specific_notes: &'static [(&'static str, RangeStatus, &'static str)],
    generic_notes: &'static [(RangeStatus, &'static str)],

    // Indices into `entries`/`aliases`, longest key first, declaration
    // order as tie-break. Fixes the substring-match policy explicitly
    // instead of relying on incidental table order.
    key_order: Vec<usize>,
    alias_order: Vec<usize>,
}

impl Dictionary {
    /// Creates a dictionary from explicit tables
    pub fn new(
        entries: &'static [TestEntry],
        aliases: &'static [AliasEntry],
        ranges: &'static [(&'static str, ReferenceRange)],
        specific_notes: &'static [(&'static str, RangeStatus, &'static str)],
        generic_notes: &'static [(RangeStatus, &'static str)],
    ) -> Self {
        let mut key_order: Vec<usize> = (0..entries.len()).collect();
        key_order.sort_by(|&a, &b| {
            entries[b]
                .key
                .len()
                .cmp(&entries[a].key.len())
                .then(a.cmp(&b))
        });

        let mut alias_order: Vec<usize> = (0..aliases.len()).collect();
        alias_order.sort_by(|&a, &b| {
            aliases[b]
                .alias
                .len()
                .cmp(&aliases[a].alias.len())
                .then(a.cmp(&b))
        });

        Self {
            entries,
            aliases,
            ranges,
            specific_notes,
            generic_notes,
            key_order,
            alias_order,
        }
    }

    /// Returns the standard clinical dictionary
    pub fn standard() -> &'static Dictionary {
        static STANDARD: OnceLock<Dictionary> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Dictionary::new(
                tables::TEST_ENTRIES,
                tables::TEST_ALIASES,
                tables::TEST_RANGES,
                tables::SPECIFIC_NOTES,
                tables::GENERIC_NOTES,
            )
        })
    }

    /// Canonical entries in table declaration order
    pub fn entries(&self) -> impl Iterator<Item = &TestEntry> {
        self.entries.iter()
    }

    /// Returns whether `key` is a canonical key
    pub fn is_canonical(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Human-readable name for a canonical key
    pub fn display_name(&self, key: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.key == key).map(|e| e.name)
    }

    /// Position of a canonical key in table declaration order
    ///
    /// Used to present report rows in the order clinicians expect.
    pub fn key_index(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Reference range for a canonical key, if one is configured
    pub fn range_for(&self, key: &str) -> Option<&ReferenceRange> {
        self.ranges.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    /// Exact alias lookup on an already-normalized label
    pub fn alias_target(&self, normalized: &str) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|a| a.alias == normalized)
            .map(|a| a.key)
    }

    /// Canonical keys, longest first (substring-fallback iteration order)
    pub(crate) fn keys_longest_first(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.key_order.iter().map(|&i| self.entries[i].key)
    }

    /// Aliases, longest first (substring-fallback iteration order)
    pub(crate) fn aliases_longest_first(
        &self,
    ) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.alias_order
            .iter()
            .map(|&i| (self.aliases[i].alias, self.aliases[i].key))
    }

    /// Per-key note override for a status
    pub fn specific_note(&self, key: &str, status: RangeStatus) -> Option<&'static str> {
        self.specific_notes
            .iter()
            .find(|(k, s, _)| *k == key && *s == status)
            .map(|(_, _, n)| *n)
    }

    /// Generic note keyed by status alone
    pub fn generic_note(&self, status: RangeStatus) -> Option<&'static str> {
        self.generic_notes
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dictionary_lookups() {
        let dict = Dictionary::standard();
        assert!(dict.is_canonical("HGB"));
        assert!(dict.is_canonical("RDWCV"));
        assert!(!dict.is_canonical("HB")); // alias, not canonical
        assert_eq!(dict.display_name("HGB"), Some("Hemoglobin"));
        assert_eq!(dict.alias_target("HB"), Some("HGB"));
        assert_eq!(dict.alias_target("HEMOGLOBIN"), Some("HGB"));
    }

    #[test]
    fn test_range_lookup() {
        let dict = Dictionary::standard();
        let r = dict.range_for("WBC").unwrap();
        assert_eq!(r.min, 4.0);
        assert_eq!(r.max, 11.0);
        assert_eq!(r.unit, "x10^9/L");
        assert!(dict.range_for("NOSUCH").is_none());
    }

    #[test]
    fn test_keys_longest_first() {
        let dict = Dictionary::standard();
        let keys: Vec<_> = dict.keys_longest_first().collect();
        // Longer keys come before any of their substrings
        let pos = |k: &str| keys.iter().position(|&x| x == k).unwrap();
        assert!(pos("NEUTROPHILSABS") < pos("NEUTROPHILS"));
        assert!(pos("MCHC") < pos("MCH"));
        // Order covers every entry exactly once
        assert_eq!(keys.len(), dict.entries().count());
    }

    #[test]
    fn test_key_index_follows_declaration_order() {
        let dict = Dictionary::standard();
        assert!(dict.key_index("HGB").unwrap() < dict.key_index("WBC").unwrap());
        assert!(dict.key_index("WBC").unwrap() < dict.key_index("GLUCOSE").unwrap());
        assert!(dict.key_index("NOSUCH").is_none());
    }

    #[test]
    fn test_note_lookups() {
        let dict = Dictionary::standard();
        assert!(dict.specific_note("WBC", RangeStatus::High).is_some());
        assert!(dict.specific_note("WBC", RangeStatus::BorderlineLow).is_none());
        assert!(dict.generic_note(RangeStatus::Low).is_some());
        assert!(dict.generic_note(RangeStatus::Normal).is_none());
    }
}
