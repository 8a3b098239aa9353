use std::collections::HashMap;

use bitvec::prelude::*;

use crate::{Error, Result, Segmentation};

/// The code of a symbol, a contiguous array of bits.
pub type Code = BitVec;

/// Maps every symbol of a Huffman tree to its [`Code`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<String, Code>,
}

/// Renders bits as a string of `'0'` and `'1'` characters.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
///
/// assert_eq!(huffman_compressor::to_bit_string(&bitvec![1, 0, 1]), "101");
/// ```
pub fn to_bit_string(bits: &BitSlice) -> String {
    bits.iter().map(|b| if *b { '1' } else { '0' }).collect()
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, symbol: String, code: Code) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: &str) -> Option<&BitSlice> {
        self.codes.get(symbol).map(|c| c.as_bitslice())
    }

    /// The code of `symbol` as a string of `'0'` and `'1'` characters.
    pub fn code_string(&self, symbol: &str) -> Option<String> {
        self.get(symbol).map(to_bit_string)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BitSlice)> + '_ {
        self.codes
            .iter()
            .map(|(s, c)| (s.as_str(), c.as_bitslice()))
    }

    /// A copy of the table with every code rendered by [`to_bit_string`].
    pub fn to_strings(&self) -> HashMap<String, String> {
        self.codes
            .iter()
            .map(|(s, c)| (s.clone(), to_bit_string(c)))
            .collect()
    }

    /// Concatenates the codes of the symbols of `text` into a string of
    /// `'0'` and `'1'` characters, one character per bit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCode`] for the first symbol without a code.
    pub fn encode(&self, text: &str, segmentation: Segmentation) -> Result<String> {
        let mut encoded = String::new();
        for symbol in segmentation.symbols(text) {
            let code = self.codes.get(symbol).ok_or_else(|| Error::MissingCode {
                symbol: symbol.to_string(),
            })?;
            encoded.extend(code.iter().map(|b| if *b { '1' } else { '0' }));
        }
        Ok(encoded)
    }
}
