//! # Huffman compressor
//!
//! `huffman-compressor` is a crate to compress text with minimum-redundancy codes
//! using the [Huffman coding](https://en.wikipedia.org/wiki/Huffman_coding)
//! algorithm, and to measure how close those codes come to the entropy of the
//! text.
//!
//! Compressed text is a string of `'0'` and `'1'` characters, one character per
//! bit. It carries no code table: decoding needs the [`Codebook`] (or the
//! [`HuffmanCompressor`]) that produced it.
//!
//! ```
//! use huffman_compressor::HuffmanCompressor;
//!
//! let mut compressor = HuffmanCompressor::new();
//! let compressed = compressor.compress("abracadabra").unwrap();
//! assert_eq!(compressor.decompress(&compressed).unwrap(), "abracadabra");
//! assert!(compressor.compression_efficiency() <= 1.0);
//! ```
//!
//! ## References
//!
//! * _Hamming, R.R., 1997. Art of doing science and engineering: Learning to learn. CRC Press._
//! * _Huffman, D.A., 1952. A method for the construction of minimum-redundancy codes. Proceedings of the IRE, 40(9), pp.1098-1101._

mod codes;
mod compressor;
mod config;
mod error;
mod frequency;
mod metrics;
mod queue;
mod tree;

pub use codes::{to_bit_string, Code, CodeTable};
pub use compressor::{Codebook, HuffmanCompressor};
pub use config::{Config, Segmentation};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use metrics::Metrics;
pub use queue::MinQueue;
pub use tree::{HuffmanTree, Node};

/// Creates and returns the list of pairs of the characters found in the
/// input with their count, ordered by decreasing frequency. Characters of
/// equal frequency are ordered by first occurrence.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// let freqs = huffman_compressor::frequencies("huffman");
/// let mut iter = freqs.iter();
///
/// assert_eq!(iter.next(), Some(&("f", 2)));
/// assert_eq!(iter.next(), Some(&("h", 1)));
/// assert_eq!(iter.next(), Some(&("u", 1)));
/// assert_eq!(iter.next(), Some(&("m", 1)));
/// assert_eq!(iter.next(), Some(&("a", 1)));
/// assert_eq!(iter.next(), Some(&("n", 1)));
/// assert_eq!(iter.next(), None);
/// ```
pub fn frequencies(s: &str) -> Vec<(&str, usize)> {
    let mut freq = ::std::collections::HashMap::new();
    let mut order = Vec::new();

    for c in Segmentation::Chars.symbols(s) {
        let n = freq.entry(c).or_insert(0);
        if *n == 0 {
            order.push(c);
        }
        *n += 1;
    }
    let mut symbols = order
        .into_iter()
        .map(|c| (c, freq[c]))
        .collect::<Vec<(&str, usize)>>();
    // Stable, so ties keep their first-occurrence order.
    symbols.sort_by(|a, b| b.1.cmp(&a.1));
    symbols
}

/// Encodes an input string using [Huffman's coding](https://en.wikipedia.org/wiki/Huffman_coding)
/// for minimum-redundancy codes of variable length, one symbol per character.
/// Returns the codebook built for the input along with the encoded input.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use huffman_compressor::*;
///
/// let (codebook, encoded) = encode("baba").unwrap();
/// assert_eq!(encoded, "0101");
/// assert_eq!(codebook.codes().code_string("b").as_deref(), Some("0"));
/// assert_eq!(codebook.codes().code_string("a").as_deref(), Some("1"));
/// ```
pub fn encode(s: &str) -> Result<(Codebook, String)> {
    let codebook = Codebook::build(s, Segmentation::Chars)?;
    let encoded = codebook.encode(s)?;
    Ok((codebook, encoded))
}

/// Decodes an `encoded` string given the `codebook` it was encoded with.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use huffman_compressor::*;
///
/// let (codebook, encoded) = encode("huffman").unwrap();
/// let decoded = decode(&codebook, &encoded).unwrap();
/// assert_eq!(decoded, "huffman");
/// ```
///
/// # Errors
///
/// Returns an [`Error::Truncated`] with the number of trailing bits that
/// could not be decoded.
///
/// ```
/// use huffman_compressor::*;
///
/// let (codebook, mut encoded) = encode("huffman").unwrap();
/// encoded.pop();
/// assert_eq!(
///     decode(&codebook, &encoded)
///         .expect_err("should find no code for the final bits of 'n'"),
///     Error::Truncated {
///         pending: codebook.codes().get("n").unwrap().len() - 1
///     }
/// );
/// ```
pub fn decode(codebook: &Codebook, encoded: &str) -> Result<String> {
    codebook.decode(encoded)
}
