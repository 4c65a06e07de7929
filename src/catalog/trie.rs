//! Fixed-length prefix tree over the base alphabet.
//!
//! Nodes live in a single arena (`Vec<Node>`) and refer to their children by
//! index, so the whole tree is released in one drop. Values are only stored
//! at leaves, which sit exactly `key_length` symbols below the root.

use thiserror::Error;

use crate::core::ALPHABET;

const ROOT: NodeId = 0;

/// Index of a node in the arena
pub type NodeId = usize;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("Key has length {actual}, index expects {expected}")]
    KeyLength { expected: usize, actual: usize },

    #[error("Invalid symbol '{symbol}' at key offset {offset}")]
    InvalidSymbol { symbol: char, offset: usize },
}

#[derive(Debug, Clone)]
struct Node<V> {
    /// Children in creation order
    children: Vec<(u8, NodeId)>,
    /// Only populated at leaf depth
    values: Vec<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            values: Vec::new(),
        }
    }

    fn child(&self, symbol: u8) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, id)| id)
    }
}

/// Traversal state for the one-substitution search
#[derive(Debug, Clone, Copy)]
struct SearchState {
    node: NodeId,
    depth: usize,
    substitution_used: bool,
}

/// Maps fixed-length keys to the ordered list of values inserted under them.
///
/// Supports exact lookup and lookup tolerating a single substituted symbol
/// (Hamming distance at most one). Results are never deduplicated.
#[derive(Debug, Clone)]
pub struct PrefixIndex<V> {
    nodes: Vec<Node<V>>,
    key_length: usize,
    value_count: usize,
}

impl<V: Clone> PrefixIndex<V> {
    /// Create an empty index for keys of exactly `key_length` symbols
    pub fn new(key_length: usize) -> Self {
        Self {
            nodes: vec![Node::new()],
            key_length,
            value_count: 0,
        }
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Number of nodes in the tree, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.value_count
    }

    pub fn is_empty(&self) -> bool {
        self.value_count == 0
    }

    /// Append `value` to the list stored under `key`, creating any missing
    /// nodes along the way.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::KeyLength` if the key is not `key_length` symbols
    /// long, or `IndexError::InvalidSymbol` if it contains a symbol outside
    /// the base alphabet. The index is unchanged on error.
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<(), IndexError> {
        self.check_key(key)?;

        let mut node = ROOT;
        for &symbol in key {
            node = match self.nodes[node].child(symbol) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[node].children.push((symbol, child));
                    child
                }
            };
        }
        self.nodes[node].values.push(value);
        self.value_count += 1;
        Ok(())
    }

    /// Look up `key`.
    ///
    /// With `exact_match_only` the key must be present verbatim. Otherwise
    /// every stored key differing from `key` in at most one position matches,
    /// and the values of all matching keys are concatenated in depth-first
    /// order over children in creation order.
    ///
    /// A key of the wrong length matches nothing.
    pub fn find(&self, key: &[u8], exact_match_only: bool) -> Vec<V> {
        if key.len() != self.key_length {
            return Vec::new();
        }
        if exact_match_only {
            self.find_exact(key)
        } else {
            self.find_with_one_substitution(key)
        }
    }

    /// Discard every node and value, leaving an empty root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::new());
        self.value_count = 0;
    }

    fn find_exact(&self, key: &[u8]) -> Vec<V> {
        let mut node = ROOT;
        for &symbol in key {
            match self.nodes[node].child(symbol) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }
        self.nodes[node].values.clone()
    }

    fn find_with_one_substitution(&self, key: &[u8]) -> Vec<V> {
        let mut hits = Vec::new();
        let mut stack = vec![SearchState {
            node: ROOT,
            depth: 0,
            substitution_used: false,
        }];

        while let Some(state) = stack.pop() {
            let node = &self.nodes[state.node];
            if state.depth == key.len() {
                hits.extend(node.values.iter().cloned());
                continue;
            }

            let wanted = key[state.depth];
            // Reversed so the first-created child is popped first
            for &(symbol, child) in node.children.iter().rev() {
                let substitution_used = if symbol == wanted {
                    state.substitution_used
                } else if state.substitution_used {
                    continue;
                } else {
                    true
                };
                stack.push(SearchState {
                    node: child,
                    depth: state.depth + 1,
                    substitution_used,
                });
            }
        }

        hits
    }

    fn check_key(&self, key: &[u8]) -> Result<(), IndexError> {
        if key.len() != self.key_length {
            return Err(IndexError::KeyLength {
                expected: self.key_length,
                actual: key.len(),
            });
        }
        if let Some(offset) = key.iter().position(|b| !ALPHABET.contains(b)) {
            return Err(IndexError::InvalidSymbol {
                symbol: char::from(key[offset]),
                offset,
            });
        }
        Ok(())
    }
}
