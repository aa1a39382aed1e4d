//! Symbolic expression trees and their text syntax.
//!
//! Logical forms arrive as parenthesized trees: leaves are atoms, internal
//! nodes are ordered child lists. `reader` turns text into trees, `writer`
//! is its inverse. Child order is significant and survives a round trip.

use std::fmt;

pub mod reader;
pub mod writer;

pub use reader::read_all;
pub use writer::{write, write_wrapped, DEFAULT_MAX_WIDTH};

/// A node of a symbolic expression.
///
/// A leaf holds `Some(text)` for a regular atom or `None` for the explicit
/// null atom (written `\0`), which is distinct from the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Leaf(Option<String>),
    List(Vec<Expr>),
}

impl Expr {
    /// Leaf atom with the given text
    pub fn leaf(text: impl Into<String>) -> Self {
        Expr::Leaf(Some(text.into()))
    }

    /// The explicit null atom
    pub fn null_leaf() -> Self {
        Expr::Leaf(None)
    }

    pub fn list(children: Vec<Expr>) -> Self {
        Expr::List(children)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Leaf(_))
    }

    /// Children of a list node; empty for leaves
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Leaf(_) => &[],
            Expr::List(children) => children,
        }
    }

    pub fn child(&self, index: usize) -> Option<&Expr> {
        self.children().get(index)
    }

    /// Text of a non-null leaf
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            Expr::Leaf(Some(text)) => Some(text),
            _ => None,
        }
    }

    /// True for a leaf whose text equals `name`
    pub fn is_operator(&self, name: &str) -> bool {
        self.leaf_text() == Some(name)
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::List(children) => children.iter().map(Expr::num_leaves).sum(),
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::List(children) => 1 + children.iter().map(Expr::num_nodes).sum::<usize>(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write(self))
    }
}
