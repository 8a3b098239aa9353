use thiserror::Error;

/// Errors reported while building, encoding or decoding with a Huffman code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An item was requested from a [`MinQueue`](crate::MinQueue) holding none.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// A tree was requested for a frequency table without any symbol.
    #[error("cannot build a Huffman tree without symbols")]
    EmptyAlphabet,

    /// The code table has no code for a symbol of the input.
    #[error("no code for symbol {symbol:?}")]
    MissingCode {
        /// The symbol without a code
        symbol: String,
    },

    /// The encoded input holds a character other than `'0'` or `'1'`.
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Its position, counted in characters
        position: usize,
    },

    /// The encoded input follows a branch the tree does not have.
    #[error("no branch for the bit at position {position}")]
    InvalidSequence {
        /// Position of the bit, counted in characters
        position: usize,
    },

    /// The encoded input stops in the middle of a code.
    #[error("input ends with {pending} bits of an incomplete code")]
    Truncated {
        /// Number of trailing bits that did not reach a symbol
        pending: usize,
    },
}

/// Result type for the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;
