use unicode_segmentation::UnicodeSegmentation;

/// How an input text is split into symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segmentation {
    /// Every Unicode scalar value is a symbol.
    #[default]
    Chars,
    /// Every extended [grapheme cluster](http://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundaries)
    /// is a symbol, so that e.g. a letter and its combining marks share one code.
    Graphemes,
}

impl Segmentation {
    /// Splits `text` into its symbols, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_compressor::Segmentation;
    ///
    /// let text = "ضَا";
    /// assert_eq!(Segmentation::Chars.symbols(text).count(), 3);
    /// assert_eq!(Segmentation::Graphemes.symbols(text).count(), 2);
    /// ```
    pub fn symbols<'a>(self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            Segmentation::Chars => Box::new(
                text.char_indices()
                    .map(move |(i, c)| &text[i..i + c.len_utf8()]),
            ),
            Segmentation::Graphemes => Box::new(UnicodeSegmentation::graphemes(text, true)),
        }
    }
}

/// Settings of a [`HuffmanCompressor`](crate::HuffmanCompressor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// How input text is split into symbols.
    pub segmentation: Segmentation,
}

impl Config {
    /// The default configuration: one symbol per `char`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how input text is split into symbols.
    pub fn segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }
}
