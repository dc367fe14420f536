//! Frequency-ordered token interning.

use std::{cmp::Reverse, collections::HashMap};

/// Distinct tokens of one font group, most frequent first.
///
/// Ties are broken by byte-wise order of the token string, so the index of a
/// token depends only on the multiset of tokens it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    tokens: Vec<String>,
    occurrences: Vec<usize>,
    index: HashMap<String, usize>,
}

impl TokenTable {
    /// Intern every token of every name sequence.
    pub fn build<'a, I, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in sequences.into_iter().flatten() {
            *counts.entry(token).or_default() += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_unstable_by_key(|&(token, count)| (Reverse(count), token));

        let tokens: Vec<String> = ranked.iter().map(|(t, _)| (*t).to_owned()).collect();
        let occurrences = ranked.iter().map(|&(_, c)| c).collect();
        let index = tokens.iter().enumerate().map(|(i, t)| (t.clone(), i)).collect();

        Self { tokens, occurrences, index }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token strings in index order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Index of a token, if interned.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Token string at an index.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Total occurrences of the token at an index across all names.
    pub fn occurrences(&self, index: usize) -> Option<usize> {
        self.occurrences.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_then_alpha() {
        let table = TokenTable::build([
            vec!["B", "A", "C"],
            vec!["A", "B"],
            vec!["B", "A"],
        ]);
        assert_eq!(table.tokens(), ["A", "B", "C"]);
        assert_eq!(table.occurrences(0), Some(3));
        assert_eq!(table.occurrences(2), Some(1));
    }

    #[test]
    fn test_most_frequent_first() {
        let table = TokenTable::build([vec!["Zoom", "In"], vec!["Zoom", "Out"]]);
        assert_eq!(table.tokens(), ["Zoom", "In", "Out"]);
        assert_eq!(table.get("Zoom"), Some(0));
        assert_eq!(table.get("Out"), Some(2));
        assert_eq!(table.get("Missing"), None);
    }

    #[test]
    fn test_byte_order_ties() {
        // Digits sort before uppercase, uppercase before lowercase.
        let table = TokenTable::build([vec!["alt", "Home", "16"]]);
        assert_eq!(table.tokens(), ["16", "Home", "alt"]);
    }

    #[test]
    fn test_permutation_invariant() {
        let a = TokenTable::build([vec!["Up", "Arrow"], vec!["Down"], vec!["Arrow", "Left"]]);
        let b = TokenTable::build([vec!["Left", "Arrow"], vec!["Arrow", "Up"], vec!["Down"]]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty() {
        let table = TokenTable::build(Vec::<Vec<&str>>::new());
        assert!(table.is_empty());
        assert_eq!(table.token(0), None);
    }
}
