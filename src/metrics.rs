use crate::{CodeTable, FrequencyTable};

/// Information-theoretic measures of a code table against the frequencies
/// it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// `log2` of the number of distinct symbols: the entropy of a uniform
    /// distribution over the alphabet.
    pub max_entropy: f64,
    /// Shannon entropy of the observed distribution.
    pub entropy: f64,
    /// Expected code length in bits per symbol.
    pub average_code_length: f64,
}

impl Metrics {
    /// # Examples
    ///
    /// ```
    /// use huffman_compressor::*;
    ///
    /// let (codebook, _) = encode("aaab").unwrap();
    /// let metrics = Metrics::measure(codebook.frequencies(), codebook.codes());
    ///
    /// assert_eq!(metrics.max_entropy, 1.0);
    /// assert_eq!(metrics.average_code_length, 1.0);
    /// assert!((metrics.entropy - 0.8112781244591328).abs() < 1e-12);
    /// ```
    pub fn measure(frequencies: &FrequencyTable, codes: &CodeTable) -> Self {
        if frequencies.is_empty() {
            return Metrics::default();
        }
        let total = frequencies.total() as f64;
        let mut entropy = 0.0;
        let mut average_code_length = 0.0;
        for (symbol, frequency) in frequencies.iter() {
            let p = frequency as f64 / total;
            entropy -= p * p.log2();
            average_code_length += p * codes.get(symbol).map_or(0, |c| c.len()) as f64;
        }
        Metrics {
            max_entropy: (frequencies.len() as f64).log2(),
            entropy,
            average_code_length,
        }
    }

    /// `max_entropy / average_code_length`, zero without codes.
    pub fn compression_ratio(&self) -> f64 {
        if self.average_code_length == 0.0 {
            return 0.0;
        }
        self.max_entropy / self.average_code_length
    }

    /// `entropy / average_code_length`, zero without codes. At most one for
    /// any prefix-free code.
    pub fn efficiency(&self) -> f64 {
        if self.average_code_length == 0.0 {
            return 0.0;
        }
        self.entropy / self.average_code_length
    }
}
