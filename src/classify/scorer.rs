//! Weighted keyword scoring shared by every classifier.
//!
//! A [`PatternTable`] maps a `|`-delimited keyword key to a payload. Scoring a
//! text against the table credits each keyword with
//! `occurrences × keyword length`, so longer and more frequent keywords weigh
//! more. Matching is plain substring containment; callers lower-case the text.

/// One row of a pattern table: the split keywords of a key and its payload.
#[derive(Debug, Clone)]
pub struct PatternEntry<T> {
    keywords: Vec<String>,
    pub payload: T,
}

impl<T> PatternEntry<T> {
    pub fn new(key: &str, payload: T) -> Self {
        let keywords = key
            .split('|')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        Self { keywords, payload }
    }

    /// Score of this entry against `text`.
    pub fn score(&self, text: &str) -> usize {
        self.keywords
            .iter()
            .map(|keyword| text.matches(keyword.as_str()).count() * keyword.len())
            .sum()
    }
}

/// Ordered keyword table. Entry order is the tie-break order.
#[derive(Debug, Clone)]
pub struct PatternTable<T = String> {
    entries: Vec<PatternEntry<T>>,
}

impl<T> Default for PatternTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> PatternTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, payload: T) -> Self {
        self.push(key, payload);
        self
    }

    pub fn push(&mut self, key: &str, payload: T) {
        self.entries.push(PatternEntry::new(key, payload));
    }

    pub fn entries(&self) -> &[PatternEntry<T>] {
        &self.entries
    }
}

impl<K: AsRef<str>, P: Into<String>> FromIterator<(K, P)> for PatternTable<String> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut table = PatternTable::new();
        for (key, payload) in iter {
            table.push(key.as_ref(), payload.into());
        }
        table
    }
}

/// Winner of a scoring pass. `payload` is `None` when nothing scored.
#[derive(Debug, PartialEq, Eq)]
pub struct BestMatch<'a, T> {
    pub payload: Option<&'a T>,
    pub score: usize,
}

impl<T> Clone for BestMatch<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BestMatch<'_, T> {}

impl<'a, T> BestMatch<'a, T> {
    pub fn none() -> Self {
        Self {
            payload: None,
            score: 0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Pick the highest-scoring entry of `table` for `text`.
///
/// Only a strictly greater score replaces the current best, so ties go to the
/// entry that appears first in the table.
pub fn best_match<'a, T>(text: &str, table: &'a PatternTable<T>) -> BestMatch<'a, T> {
    let mut best = BestMatch::none();

    for entry in table.entries() {
        let score = entry.score(text);
        if score > best.score {
            best = BestMatch {
                payload: Some(&entry.payload),
                score,
            };
        }
    }

    best
}
