use bitvec::prelude::*;

use crate::{Code, CodeTable, Error, FrequencyTable, MinQueue, Result};

const ZERO: bool = false;
const ONE: bool = true;

/// A node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: String,
        frequency: usize,
    },
    /// Its frequency is the sum of the frequencies of its two children.
    Internal {
        frequency: usize,
        zero: Box<Node>,
        one: Box<Node>,
    },
}

impl Node {
    fn merge(zero: Node, one: Node) -> Node {
        Node::Internal {
            frequency: zero.frequency() + one.frequency(),
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn frequency(&self) -> usize {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol.as_str()),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The child on the `'1'` branch if `bit` is set, on the `'0'` branch otherwise.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { zero, one, .. } => Some(if bit { one } else { zero }),
        }
    }
}

/// A Huffman tree, built once from a frequency table and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two least frequent nodes into
    /// one whose frequency is the sum of its parts, until a single node is
    /// left. The first node taken goes to the `'0'` branch, the second to the
    /// `'1'` branch. Among nodes of equal frequency, symbols are taken in
    /// first-occurrence order and merged nodes after every node created
    /// before them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAlphabet`] if the table holds no symbol.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut queue = MinQueue::with_capacity(frequencies.len());
        for (symbol, frequency) in frequencies.iter() {
            queue.push(
                frequency,
                Node::Leaf {
                    symbol: symbol.to_string(),
                    frequency,
                },
            );
        }
        if queue.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        while queue.len() > 1 {
            let (_, zero) = queue.pop()?;
            let (_, one) = queue.pop()?;
            let node = Node::merge(zero, one);
            queue.push(node.frequency(), node);
        }
        let (_, root) = queue.pop()?;
        log::debug!(
            "built Huffman tree over {} symbols, root frequency {}",
            frequencies.len(),
            root.frequency()
        );
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walks the tree depth-first, `'0'` branches before `'1'` branches, and
    /// emits the path to every leaf as the code of its symbol.
    ///
    /// A tree made of a single leaf has no path to walk; its symbol is
    /// given the one-bit code `0`.
    pub fn codes(&self) -> CodeTable {
        let mut table = CodeTable::new();
        if let Node::Leaf { symbol, .. } = &self.root {
            table.insert(symbol.clone(), bitvec![0]);
            return table;
        }
        let mut stack = vec![(&self.root, Code::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => table.insert(symbol.clone(), prefix),
                Node::Internal { zero, one, .. } => {
                    let mut one_prefix = prefix.clone();
                    one_prefix.push(ONE);
                    let mut zero_prefix = prefix;
                    zero_prefix.push(ZERO);
                    // Pushed last, popped first.
                    stack.push((one, one_prefix));
                    stack.push((zero, zero_prefix));
                }
            }
        }
        table
    }

    // Moves the decoding cursor one bit down the tree. In a one-leaf tree the
    // leaf is its own `'0'` branch.
    fn step<'a>(&'a self, cursor: &'a Node, bit: bool) -> Option<&'a Node> {
        match cursor {
            Node::Internal { .. } => cursor.child(bit),
            Node::Leaf { .. } if bit == ZERO => Some(cursor),
            Node::Leaf { .. } => None,
        }
    }

    /// Decodes a string of `'0'` and `'1'` characters by following it from
    /// the root down to a leaf, emitting the leaf's symbol and starting over
    /// from the root.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidDigit`] on a character other than `'0'` or `'1'`.
    /// * [`Error::InvalidSequence`] when a bit names a branch the tree does not have.
    /// * [`Error::Truncated`] when the input ends before reaching a leaf.
    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut decoded = String::new();
        let mut cursor = &self.root;
        let mut pending = 0;
        for (position, digit) in bits.chars().enumerate() {
            let bit = match digit {
                '0' => ZERO,
                '1' => ONE,
                _ => return Err(Error::InvalidDigit { digit, position }),
            };
            cursor = self
                .step(cursor, bit)
                .ok_or(Error::InvalidSequence { position })?;
            pending += 1;
            if let Some(symbol) = cursor.symbol() {
                decoded.push_str(symbol);
                cursor = &self.root;
                pending = 0;
            }
        }
        if pending > 0 {
            return Err(Error::Truncated { pending });
        }
        Ok(decoded)
    }

    /// Like [`decode`](Self::decode) but never fails: decoding stops at the
    /// first character that is not a valid branch, and bits left over after
    /// the last complete code are dropped.
    ///
    /// Any character other than `'0'` or `'1'` also stops decoding; it is
    /// never read as a `'1'`.
    pub fn decode_lossy(&self, bits: &str) -> String {
        let mut decoded = String::new();
        let mut cursor = &self.root;
        for (position, digit) in bits.chars().enumerate() {
            let next = match digit {
                '0' => self.step(cursor, ZERO),
                '1' => self.step(cursor, ONE),
                _ => None,
            };
            match next {
                Some(node) => match node.symbol() {
                    Some(symbol) => {
                        decoded.push_str(symbol);
                        cursor = &self.root;
                    }
                    None => cursor = node,
                },
                None => {
                    log::debug!("decoding stopped at bit {}", position);
                    break;
                }
            }
        }
        decoded
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use bitvec::prelude::*;

    fn leaf(symbol: &str, frequency: usize) -> Box<Node> {
        Box::new(Node::Leaf {
            symbol: symbol.to_string(),
            frequency,
        })
    }

    fn tree_of(text: &str) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_text(text, Segmentation::Chars)).unwrap()
    }

    #[test]
    fn frequency() {
        assert_eq!(leaf("s", 3).frequency(), 3);
        assert_eq!(
            Node::Internal {
                frequency: 4,
                zero: leaf("a", 2),
                one: Box::new(Node::Internal {
                    frequency: 2,
                    zero: leaf("b", 1),
                    one: leaf("c", 1),
                }),
            }
            .frequency(),
            4
        );
    }

    #[test]
    fn build() {
        assert_eq!(
            HuffmanTree::build(&FrequencyTable::new()),
            Err(Error::EmptyAlphabet)
        );
        assert_eq!(tree_of("aaaa").root(), &*leaf("a", 4));
        assert!(tree_of("aaaa").root().is_leaf());
        assert_eq!(tree_of("aaaa").root().symbol(), Some("a"));
        assert_eq!(
            tree_of("aaab").root(),
            &Node::Internal {
                frequency: 4,
                zero: leaf("b", 1),
                one: leaf("a", 3),
            }
        );
        assert_eq!(
            tree_of("aaabc").root(),
            &Node::Internal {
                frequency: 5,
                zero: Box::new(Node::Internal {
                    frequency: 2,
                    zero: leaf("b", 1),
                    one: leaf("c", 1),
                }),
                one: leaf("a", 3),
            }
        );
    }

    #[test]
    fn build_breaks_ties_by_age() {
        // h, e merge first; the merged node (2) is younger than l (2).
        assert_eq!(
            tree_of("hello").root(),
            &Node::Internal {
                frequency: 5,
                zero: Box::new(Node::Internal {
                    frequency: 2,
                    zero: leaf("h", 1),
                    one: leaf("e", 1),
                }),
                one: Box::new(Node::Internal {
                    frequency: 3,
                    zero: leaf("o", 1),
                    one: leaf("l", 2),
                }),
            }
        );
    }

    #[test]
    fn codes() {
        let codes = tree_of("aaaabbcc").codes();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes.get("a"), Some(bitvec![0].as_bitslice()));
        assert_eq!(codes.get("b"), Some(bitvec![1, 0].as_bitslice()));
        assert_eq!(codes.get("c"), Some(bitvec![1, 1].as_bitslice()));

        let codes = tree_of("hello").codes();
        assert_eq!(codes.code_string("h").as_deref(), Some("00"));
        assert_eq!(codes.code_string("e").as_deref(), Some("01"));
        assert_eq!(codes.code_string("o").as_deref(), Some("10"));
        assert_eq!(codes.code_string("l").as_deref(), Some("11"));
    }

    #[test]
    fn codes_of_single_leaf() {
        let codes = tree_of("aaaa").codes();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.code_string("a").as_deref(), Some("0"));
    }

    #[test]
    fn decode() {
        let tree = tree_of("hello");
        assert_eq!(tree.decode("").unwrap(), "");
        assert_eq!(tree.decode("0001111110").unwrap(), "hello");
        assert_eq!(tree.decode("101100").unwrap(), "olh");
        assert_eq!(tree.decode("00011"), Err(Error::Truncated { pending: 1 }));
        assert_eq!(
            tree.decode("0001x1"),
            Err(Error::InvalidDigit {
                digit: 'x',
                position: 4
            })
        );
    }

    #[test]
    fn decode_single_leaf() {
        let tree = tree_of("aaaa");
        assert_eq!(tree.decode("0000").unwrap(), "aaaa");
        assert_eq!(
            tree.decode("0010"),
            Err(Error::InvalidSequence { position: 2 })
        );
    }

    #[test]
    fn decode_lossy() {
        let tree = tree_of("hello");
        assert_eq!(tree.decode_lossy("0001111110"), "hello");
        // trailing partial code is dropped
        assert_eq!(tree.decode_lossy("000111111"), "hell");
        // decoding stops at the first invalid digit, which is not read as a one
        assert_eq!(tree.decode_lossy("0001x11"), "he");
        assert_eq!(tree.decode_lossy("00x1111110"), "h");

        let tree = tree_of("aaaa");
        assert_eq!(tree.decode_lossy("00100"), "aa");
    }
}
