//! Prefix trie with "last product seen" longest-match scanning.
//!
//! Nodes live in an arena and refer to each other by index. Each node maps
//! the next character (or the end-of-input sentinel) to a child and may carry
//! a product. Nodes without a product exist only to reach longer literals.
//!
//! # Scanning
//!
//! The walk remembers the last product it passed together with the number of
//! characters consumed up to it, and keeps walking while transitions exist.
//! The answer is that remembered product, not the deepest node reached: a
//! longer path may run into a dead end before completing any literal.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::Cursor;

/// Index of a node in the arena.
type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Debug)]
struct Node<P> {
    /// `None` keys the end-of-input transition.
    next: FxHashMap<Option<char>, NodeId>,
    product: Option<P>,
}

impl<P> Node<P> {
    fn empty() -> Self {
        Self {
            next: FxHashMap::default(),
            product: None,
        }
    }
}

/// Error building a [`Trie`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// Two products were registered for the same literal.
    #[error("literal `{literal}` is registered twice")]
    Collision { literal: String },
}

/// Character-indexed prefix tree.
#[derive(Clone, Debug)]
pub struct Trie<P> {
    nodes: Vec<Node<P>>,
}

impl<P: Copy> Trie<P> {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::empty()],
        }
    }

    /// Register `product` for `literal`.
    ///
    /// Fails if `literal` already carries a product.
    pub fn insert(&mut self, literal: &str, product: P) -> Result<(), TrieError> {
        self.insert_path(literal.chars().map(Some), product)
            .map_err(|()| TrieError::Collision {
                literal: literal.to_owned(),
            })
    }

    /// Register `product` for the end-of-input sentinel at the root.
    pub fn insert_end_of_input(&mut self, product: P) -> Result<(), TrieError> {
        self.insert_path([None], product)
            .map_err(|()| TrieError::Collision {
                literal: "<end of input>".to_owned(),
            })
    }

    fn insert_path(
        &mut self,
        path: impl IntoIterator<Item = Option<char>>,
        product: P,
    ) -> Result<(), ()> {
        let mut node = ROOT;
        for c in path {
            node = match self.nodes[node].next.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::empty());
                    self.nodes[node].next.insert(c, child);
                    child
                }
            };
        }
        let slot = &mut self.nodes[node].product;
        if slot.is_some() {
            return Err(());
        }
        *slot = Some(product);
        Ok(())
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The product registered for exactly `literal`, if any.
    pub fn get(&self, literal: &str) -> Option<P> {
        let mut node = ROOT;
        for c in literal.chars() {
            node = *self.nodes[node].next.get(&Some(c))?;
        }
        self.nodes[node].product
    }

    /// Longest recognized product at the cursor and its length in
    /// characters, without consuming anything.
    ///
    /// An end-of-input product has length 0.
    pub fn longest_match(&self, cursor: &Cursor<'_>) -> Option<(P, u32)> {
        let mut node = ROOT;
        let mut best = None;
        let mut size = 0;
        loop {
            let c = cursor.character(size);
            let Some(&child) = self.nodes[node].next.get(&c) else {
                break;
            };
            node = child;
            if c.is_none() {
                if let Some(product) = self.nodes[node].product {
                    best = Some((product, size));
                }
                break;
            }
            size += 1;
            if let Some(product) = self.nodes[node].product {
                best = Some((product, size));
            }
        }
        best
    }

    /// Like [`longest_match`](Self::longest_match), consuming the matched
    /// characters. Consumes nothing on failure.
    pub fn scan(&self, cursor: &mut Cursor<'_>) -> Option<P> {
        let (product, len) = self.longest_match(cursor)?;
        cursor.advance_n(len);
        Some(product)
    }
}

impl<P: Copy> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}
