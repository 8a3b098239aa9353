use crate::{CodeTable, Config, FrequencyTable, HuffmanTree, Metrics, Result, Segmentation};

/// Everything derived from one input text: its frequency table, the Huffman
/// tree built from it and the code table read off the tree.
///
/// A codebook never changes once built. Encoding and decoding only borrow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Codebook {
    segmentation: Segmentation,
    frequencies: FrequencyTable,
    tree: Option<HuffmanTree>,
    codes: CodeTable,
}

impl Codebook {
    /// Builds the codebook of `text`. An empty text yields a codebook without
    /// a tree and without codes.
    pub fn build(text: &str, segmentation: Segmentation) -> Result<Self> {
        let frequencies = FrequencyTable::from_text(text, segmentation);
        if frequencies.is_empty() {
            return Ok(Codebook {
                segmentation,
                ..Codebook::default()
            });
        }
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = tree.codes();
        log::debug!("derived {} codes", codes.len());
        Ok(Codebook {
            segmentation,
            frequencies,
            tree: Some(tree),
            codes,
        })
    }

    pub fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::measure(&self.frequencies, &self.codes)
    }

    /// See [`CodeTable::encode`].
    pub fn encode(&self, text: &str) -> Result<String> {
        self.codes.encode(text, self.segmentation)
    }

    /// See [`HuffmanTree::decode`]. Without a tree, the result is empty.
    pub fn decode(&self, bits: &str) -> Result<String> {
        match &self.tree {
            Some(tree) => tree.decode(bits),
            None => Ok(String::new()),
        }
    }

    /// See [`HuffmanTree::decode_lossy`]. Without a tree, the result is empty.
    pub fn decode_lossy(&self, bits: &str) -> String {
        self.tree
            .as_ref()
            .map(|tree| tree.decode_lossy(bits))
            .unwrap_or_default()
    }
}

/// A Huffman compressor that keeps the codebook of the last text it
/// compressed, so that output can be decompressed and measured afterwards.
///
/// Every call to [`compress`](Self::compress) starts from a fresh frequency
/// table; earlier inputs never influence the codes.
///
/// # Examples
///
/// ```
/// use huffman_compressor::HuffmanCompressor;
///
/// let mut compressor = HuffmanCompressor::new();
/// let compressed = compressor.compress("aaab").unwrap();
///
/// assert_eq!(compressed, "1110");
/// assert_eq!(compressor.decompress(&compressed).unwrap(), "aaab");
/// assert_eq!(compressor.codes().code_string("a").as_deref(), Some("1"));
/// assert_eq!(compressor.codes().code_string("b").as_deref(), Some("0"));
/// assert_eq!(compressor.compression_ratio(), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HuffmanCompressor {
    config: Config,
    codebook: Codebook,
}

impl HuffmanCompressor {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        HuffmanCompressor {
            config,
            codebook: Codebook {
                segmentation: config.segmentation,
                ..Codebook::default()
            },
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rebuilds the codebook from `text` and returns `text` encoded as a
    /// string of `'0'` and `'1'` characters.
    ///
    /// On error the previous codebook is kept.
    pub fn compress(&mut self, text: &str) -> Result<String> {
        let codebook = Codebook::build(text, self.config.segmentation)?;
        let compressed = codebook.encode(text)?;
        log::debug!(
            "compressed {} symbols into {} bits",
            codebook.frequencies().total(),
            compressed.len()
        );
        self.codebook = codebook;
        Ok(compressed)
    }

    /// Decodes `bits` with the tree of the last compressed text.
    ///
    /// # Errors
    ///
    /// Fails on input that does not decode with that tree; see
    /// [`HuffmanTree::decode`].
    pub fn decompress(&self, bits: &str) -> Result<String> {
        self.codebook.decode(bits)
    }

    /// Decodes `bits` as far as they decode with the tree of the last
    /// compressed text; see [`HuffmanTree::decode_lossy`].
    pub fn decompress_lossy(&self, bits: &str) -> String {
        self.codebook.decode_lossy(bits)
    }

    pub fn codebook(&self) -> &Codebook {
        &self.codebook
    }

    pub fn codes(&self) -> &CodeTable {
        self.codebook.codes()
    }

    pub fn metrics(&self) -> Metrics {
        self.codebook.metrics()
    }

    /// See [`Metrics::compression_ratio`].
    pub fn compression_ratio(&self) -> f64 {
        self.metrics().compression_ratio()
    }

    /// See [`Metrics::efficiency`].
    pub fn compression_efficiency(&self) -> f64 {
        self.metrics().efficiency()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn fresh_compressor() {
        let compressor = HuffmanCompressor::new();
        assert!(compressor.codes().is_empty());
        assert_eq!(compressor.decompress("0101").unwrap(), "");
        assert_eq!(compressor.decompress_lossy("0101"), "");
        assert_eq!(compressor.compression_ratio(), 0.0);
        assert_eq!(compressor.compression_efficiency(), 0.0);
    }

    #[test]
    fn compress_empty() {
        let mut compressor = HuffmanCompressor::new();
        assert_eq!(compressor.compress("").unwrap(), "");
        assert!(compressor.codes().is_empty());
        assert!(compressor.codebook().tree().is_none());
        assert_eq!(compressor.compression_ratio(), 0.0);
        assert_eq!(compressor.compression_efficiency(), 0.0);
    }

    #[test]
    fn compress_two_symbols() {
        let mut compressor = HuffmanCompressor::new();
        assert_eq!(compressor.compress("aaab").unwrap(), "1110");
        assert_eq!(compressor.decompress("1110").unwrap(), "aaab");
        assert_eq!(compressor.codebook().frequencies().get("a"), Some(3));
        assert_eq!(compressor.codebook().frequencies().get("b"), Some(1));
        assert_eq!(compressor.compression_ratio(), 1.0);
        let efficiency = compressor.compression_efficiency();
        assert!(efficiency > 0.81 && efficiency < 0.82);
    }

    #[test]
    fn compress_single_symbol() {
        let mut compressor = HuffmanCompressor::new();
        assert_eq!(compressor.compress("aaaa").unwrap(), "0000");
        assert_eq!(compressor.codes().code_string("a").as_deref(), Some("0"));
        assert_eq!(compressor.decompress("0000").unwrap(), "aaaa");
        assert_eq!(
            compressor.decompress("01"),
            Err(Error::InvalidSequence { position: 1 })
        );
    }

    #[test]
    fn compress_does_not_accumulate() {
        let mut compressor = HuffmanCompressor::new();
        let first = compressor.compress("abracadabra").unwrap();
        let first_codes = compressor.codes().clone();
        compressor.compress("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").unwrap();
        assert_eq!(compressor.codebook().frequencies().len(), 1);
        assert_eq!(compressor.compress("abracadabra").unwrap(), first);
        assert_eq!(compressor.codes(), &first_codes);
        assert_eq!(compressor.codebook().frequencies().total(), 11);
    }

    #[test]
    fn decompress_uses_last_tree() {
        let mut compressor = HuffmanCompressor::new();
        let compressed = compressor.compress("hello").unwrap();
        assert_eq!(compressed, "0001111110");
        assert_eq!(compressor.decompress(&compressed).unwrap(), "hello");
        assert_eq!(
            compressor.decompress("0001111"),
            Err(Error::Truncated { pending: 1 })
        );
        assert_eq!(compressor.decompress_lossy("0001111"), "hel");
    }

    #[test]
    fn graphemes() {
        let text = "e\u{301}e\u{301}e";
        let mut chars = HuffmanCompressor::new();
        let mut graphemes =
            HuffmanCompressor::with_config(Config::new().segmentation(Segmentation::Graphemes));
        chars.compress(text).unwrap();
        let compressed = graphemes.compress(text).unwrap();
        assert_eq!(chars.codes().len(), 2);
        assert_eq!(graphemes.codes().len(), 2);
        assert_eq!(chars.codebook().frequencies().get("e"), Some(3));
        assert_eq!(graphemes.codebook().frequencies().get("e\u{301}"), Some(2));
        assert_eq!(compressed.len(), 3);
        assert_eq!(graphemes.config().segmentation, Segmentation::Graphemes);
        assert_eq!(graphemes.codebook().segmentation(), Segmentation::Graphemes);
        assert_eq!(graphemes.decompress(&compressed).unwrap(), text);
    }
}
