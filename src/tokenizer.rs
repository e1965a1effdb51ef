use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Split raw text into normalized word tokens.
///
/// Normalization, in order:
/// 1. lowercase the whole text
/// 2. replace every character outside `[a-z]` and whitespace with a space
/// 3. split on runs of whitespace
/// 4. drop tokens of length ≤ 1
///
/// Pure function of its input: any string, including empty, yields a
/// (possibly empty) token sequence.
///
/// # Examples
/// ```
/// use docsim::tokenize;
/// let tokens: Vec<String> = tokenize("Hello, World! a").collect();
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> {
    let sanitized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    sanitized
        .split_whitespace()
        .filter(|w| w.len() > 1)
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}

/// Aggregate a token sequence into a [`TermCounts`] table.
///
/// # Arguments
/// * `tokens` - the token sequence to count
pub fn count_terms<I, T>(tokens: I) -> TermCounts
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut counts = TermCounts::new();
    counts.add_terms(tokens);
    counts
}

/// TermCounts struct
/// Keeps the occurrence count of each term in one document.
/// Insertion order is preserved so downstream iteration is deterministic.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

impl TermCounts {
    /// Create an empty TermCounts
    pub fn new() -> Self {
        TermCounts {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add one occurrence of a term
    ///
    /// # Arguments
    /// * `term` - the term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add one occurrence of each term in the sequence
    ///
    /// # Arguments
    /// * `terms` - the terms to add
    #[inline]
    pub fn add_terms<I, T>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Get the occurrence count of a term (0 if absent)
    #[inline]
    pub fn count(&self, term: &str) -> u32 {
        *self.term_count.get(term).unwrap_or(&0)
    }

    /// Check whether the term occurs at least once
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Number of distinct terms
    #[inline]
    pub fn len(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Sum of all occurrence counts
    #[inline]
    pub fn total(&self) -> u64 {
        self.total_term_count
    }

    /// Iterate over (term, count) pairs in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Iterate over the distinct terms in insertion order
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_count.keys().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_folds_case_and_strips_punctuation() {
        let tokens: Vec<String> = tokenize("Hello, World! a").collect();
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn tokenize_empty_and_noise_only_inputs() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   \t\n ").count(), 0);
        assert_eq!(tokenize("42 + 17 = ???").count(), 0);
        // single letters survive sanitization but are dropped by length
        assert_eq!(tokenize("a b c d").count(), 0);
    }

    #[test]
    fn tokenize_replaces_digits_and_symbols_with_spaces() {
        let tokens: Vec<String> = tokenize("foo3bar baz-qux").collect();
        // the digit splits "foo3bar" into two tokens
        assert_eq!(tokens, vec!["foo", "bar", "baz", "qux"]);
    }

    #[test]
    fn tokenize_is_restartable() {
        let first: Vec<String> = tokenize("one two three").collect();
        let second: Vec<String> = tokenize("one two three").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn count_terms_aggregates_duplicates() {
        let counts = count_terms(tokenize("the cat and the hat"));
        assert_eq!(counts.count("the"), 2);
        assert_eq!(counts.count("cat"), 1);
        assert_eq!(counts.count("hat"), 1);
        assert_eq!(counts.count("missing"), 0);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn count_terms_of_empty_sequence_is_empty() {
        let counts = count_terms(std::iter::empty::<&str>());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn term_counts_preserves_insertion_order() {
        let counts = count_terms(["banana", "apple", "banana", "cherry"]);
        let terms: Vec<&str> = counts.terms().collect();
        assert_eq!(terms, vec!["banana", "apple", "cherry"]);
    }
}
