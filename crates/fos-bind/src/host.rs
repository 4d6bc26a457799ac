//! Node host abstraction
//!
//! Everything the accessors need from a node model, expressed over a
//! copyable node handle. The host owns the nodes; accessors only carry the
//! handle and receive the host on each call.

use std::fmt;

use fos_dom::{DomError, Value};

/// Coarse node kind used as the primary dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Element,
    Text,
    /// Any other DOM node type, carrying its `nodeType` code
    Other(u16),
}

impl NodeCategory {
    pub const ELEMENT_NODE: u16 = 1;
    pub const TEXT_NODE: u16 = 3;

    /// Classify a DOM `nodeType` code
    pub fn from_node_type(code: u16) -> Self {
        match code {
            Self::ELEMENT_NODE => Self::Element,
            Self::TEXT_NODE => Self::Text,
            other => Self::Other(other),
        }
    }

    /// The `nodeType` code
    pub fn code(self) -> u16 {
        match self {
            Self::Element => Self::ELEMENT_NODE,
            Self::Text => Self::TEXT_NODE,
            Self::Other(code) => code,
        }
    }
}

/// Tag identity of an element, as far as dispatch cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Input,
    /// Multi-line text input container
    Textarea,
    Other,
}

impl TagKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") {
            Self::Input
        } else if tag.eq_ignore_ascii_case("textarea") {
            Self::Textarea
        } else {
            Self::Other
        }
    }
}

/// How plain name-based fields of a node are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldShape {
    /// Raw field read/write
    #[default]
    Plain,
    /// The node exposes its own `get(name)`/`set(name, value)`
    Keyed,
}

/// A node model the accessors can operate on
pub trait DomHost {
    /// Copyable node handle
    type Node: Copy + fmt::Debug;

    /// Node category, or `None` when the handle is absent or its kind is not
    /// recognizable as a DOM node.
    fn category(&self, node: Self::Node) -> Option<NodeCategory>;

    /// Tag identity; `TagKind::Other` for non-elements
    fn tag_kind(&self, node: Self::Node) -> TagKind;

    /// Parent, if it is an element
    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    /// Capability shape for plain field access
    fn field_shape(&self, _node: Self::Node) -> FieldShape {
        FieldShape::Plain
    }

    /// Raw field read
    fn property(&self, node: Self::Node, name: &str) -> Result<Value, DomError>;

    /// Raw field write
    fn set_property(&mut self, node: Self::Node, name: &str, value: Value) -> Result<(), DomError>;

    /// `node.get(name)` for nodes with `FieldShape::Keyed`
    fn keyed_get(&self, node: Self::Node, name: &str) -> Result<Value, DomError> {
        self.property(node, name)
    }

    /// `node.set(name, value)` for nodes with `FieldShape::Keyed`
    fn keyed_set(&mut self, node: Self::Node, name: &str, value: Value) -> Result<(), DomError> {
        self.set_property(node, name, value)
    }

    fn attribute(&self, node: Self::Node, name: &str) -> Result<Option<String>, DomError>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    fn remove_attribute(&mut self, node: Self::Node, name: &str) -> Result<(), DomError>;

    fn add_class(&mut self, node: Self::Node, token: &str) -> Result<(), DomError>;

    fn remove_class(&mut self, node: Self::Node, token: &str) -> Result<(), DomError>;

    /// Assign one inline style property; `""` clears it
    fn set_style(&mut self, node: Self::Node, property: &str, value: &str) -> Result<(), DomError>;

    fn text_content(&self, node: Self::Node) -> Result<String, DomError>;

    fn set_text_content(&mut self, node: Self::Node, text: &str) -> Result<(), DomError>;

    fn inner_html(&self, node: Self::Node) -> Result<String, DomError>;

    fn set_inner_html(&mut self, node: Self::Node, html: &str) -> Result<(), DomError>;

    /// Whether the node currently holds input focus
    fn is_focused(&self, node: Self::Node) -> bool;
}
