//! fOS DOM - Document Object Model
//!
//! Arena-backed node model used by the value bindings. Elements carry
//! attributes, a class list, an inline style declaration and a bag of IDL
//! properties; text nodes carry character data; host objects are plain
//! keyed stores that live in the arena without a DOM node type.

mod case;
mod classlist;
mod markup;
mod node;
mod style;
mod tree;
mod value;

pub use case::{camelize, hyphenate};
pub use classlist::DOMTokenList;
pub use node::{ElementData, Node, NodeData, NodeType, ObjectData};
pub use style::CssStyleDeclaration;
pub use tree::{Children, DomTree};
pub use value::Value;

use std::fmt;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Build an ID from its raw index, as handed across the script boundary
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw index
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Invalid token: {0:?}")]
    InvalidToken(String),
}
