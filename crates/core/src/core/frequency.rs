//! Insertion-ordered token frequency table.
//!
//! Vocabulary indices are assigned in first-seen order, so the table keeps
//! keys in the order they were first inserted and never reorders them when
//! counts change.

use ahash::AHashMap;
use compact_str::CompactString;
use regex::Regex;

/// Token -> count mapping that iterates in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Entries in insertion order
    entries: Vec<(CompactString, u64)>,
    /// Token -> position in `entries`
    index: AHashMap<CompactString, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `token`.
    ///
    /// A new token is appended at the end; an existing one only has its
    /// count incremented.
    pub fn add(&mut self, token: &str, count: u64) {
        match self.index.get(token).copied() {
            Some(pos) => self.entries[pos].1 += count,
            None => {
                let token = CompactString::new(token);
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, count));
            }
        }
    }

    /// Merge another table into this one.
    ///
    /// Keys new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (token, count) in other.iter() {
            self.add(token, count);
        }
    }

    /// Count for a token.
    #[inline]
    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Iterate `(token, count)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrequencyTable {}

impl<'a> FromIterator<(&'a str, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (token, count) in iter {
            table.add(token, count);
        }
        table
    }
}

/// Count every match of `pattern` in `equation` and merge into `table`.
///
/// Matches are counted per distinct string within this call first, in
/// order of first appearance, then merged so that only tokens new to
/// `table` extend its key order.
pub fn extract(equation: &str, table: &mut FrequencyTable, pattern: &Regex) {
    let mut local = FrequencyTable::new();
    for m in pattern.find_iter(equation) {
        local.add(m.as_str(), 1);
    }
    table.merge(&local);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_first_seen_order() {
        let mut table = FrequencyTable::new();
        table.add("b", 1);
        table.add("a", 5);
        table.add("b", 10);

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(table.get("b"), Some(11));
        assert_eq!(table.get("a"), Some(5));
        assert_eq!(table.total(), 16);
    }

    #[test]
    fn test_merge_appends_new_keys_only() {
        let mut left: FrequencyTable = [("x", 1), ("y", 1)].into_iter().collect();
        let right: FrequencyTable = [("z", 2), ("x", 3)].into_iter().collect();
        left.merge(&right);

        assert_eq!(left.keys().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(left.get("x"), Some(4));
        assert_eq!(left.get("z"), Some(2));
    }

    #[test]
    fn test_extract_order_across_equations() {
        let identifier = Regex::new(r"[a-zA-Z_][a-zA-Z_0-9]*").unwrap();
        let mut table = FrequencyTable::new();
        extract("a+b", &mut table, &identifier);
        extract("b+c", &mut table, &identifier);

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(table.get("b"), Some(2));
    }

    #[test]
    fn test_extract_order_ignores_counts() {
        let identifier = Regex::new(r"[a-zA-Z_][a-zA-Z_0-9]*").unwrap();
        let mut table = FrequencyTable::new();
        extract("p", &mut table, &identifier);
        extract("q q q q p", &mut table, &identifier);

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["p", "q"]);
        assert_eq!(table.get("q"), Some(4));
    }

    #[test]
    fn test_extract_no_match_leaves_table() {
        let operator = Regex::new(r"\^|[-+*/=<>()]").unwrap();
        let mut table = FrequencyTable::new();
        extract("abc", &mut table, &operator);
        assert!(table.is_empty());
    }
}
