use std::collections::HashMap;

use crate::Segmentation;

/// Occurrence counts of the symbols of a text.
///
/// Symbols are kept in the order of their first occurrence. Tree construction
/// breaks frequency ties by that order, so the same text always yields the
/// same codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the symbols of `text`, split according to `segmentation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_compressor::{FrequencyTable, Segmentation};
    ///
    /// let freqs = FrequencyTable::from_text("huffman", Segmentation::Chars);
    /// let mut iter = freqs.iter();
    ///
    /// assert_eq!(iter.next(), Some(("h", 1)));
    /// assert_eq!(iter.next(), Some(("u", 1)));
    /// assert_eq!(iter.next(), Some(("f", 2)));
    /// assert_eq!(iter.next(), Some(("m", 1)));
    /// assert_eq!(iter.next(), Some(("a", 1)));
    /// assert_eq!(iter.next(), Some(("n", 1)));
    /// assert_eq!(iter.next(), None);
    /// assert_eq!(freqs.total(), 7);
    /// ```
    pub fn from_text(text: &str, segmentation: Segmentation) -> Self {
        let mut table = Self::new();
        for symbol in segmentation.symbols(text) {
            table.record(symbol);
        }
        log::trace!(
            "counted {} symbols, {} distinct",
            table.total,
            table.entries.len()
        );
        table
    }

    /// Counts one more occurrence of `symbol`.
    pub fn record(&mut self, symbol: &str) {
        match self.index.get(symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol.to_string(), self.entries.len());
                self.entries.push((symbol.to_string(), 1));
            }
        }
        self.total += 1;
    }

    pub fn get(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of symbols counted, i.e. the sum of all frequencies.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Observed probability of `symbol`, zero when it was never counted.
    pub fn probability(&self, symbol: &str) -> f64 {
        match self.get(symbol) {
            Some(count) => count as f64 / self.total as f64,
            None => 0.0,
        }
    }

    /// Iterates over `(symbol, frequency)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(s, f)| (s.as_str(), *f))
    }
}
