//! DOM Node
//!
//! Nodes link to each other through `NodeId`s into the tree's arena rather
//! than through pointers.

use std::collections::HashMap;

use crate::{CssStyleDeclaration, DOMTokenList, DomError, NodeId, Value};

/// DOM node type codes, as exposed to script (`Node.nodeType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    Comment = 8,
    Document = 9,
    DocumentFragment = 11,
}

impl NodeType {
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    pub fn comment(content: &str) -> Self {
        Self::with_data(NodeData::Comment(content.to_string()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Verbatim markup assigned through `innerHTML`
    pub fn raw_markup(markup: &str) -> Self {
        Self::with_data(NodeData::RawMarkup(markup.to_string()))
    }

    /// Create a host object (no DOM node type)
    pub fn object() -> Self {
        Self::with_data(NodeData::Object(ObjectData::default()))
    }

    /// DOM node type, or `None` for host objects
    pub fn node_type(&self) -> Option<NodeType> {
        match self.data {
            NodeData::Document => Some(NodeType::Document),
            NodeData::Element(_) => Some(NodeType::Element),
            NodeData::Text(_) => Some(NodeType::Text),
            NodeData::Comment(_) => Some(NodeType::Comment),
            NodeData::RawMarkup(_) => Some(NodeType::DocumentFragment),
            NodeData::Object(_) => None,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Text or unparsed markup
    #[inline]
    pub fn is_character_data(&self) -> bool {
        matches!(self.data, NodeData::Text(_) | NodeData::RawMarkup(_))
    }

    /// Whether this node may have children
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.data, NodeData::Document | NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&ObjectData> {
        match &self.data {
            NodeData::Object(o) => Some(o),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut ObjectData> {
        match &mut self.data {
            NodeData::Object(o) => Some(o),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
    /// Unparsed fragment assigned through `innerHTML`
    RawMarkup(String),
    /// Host object exposing its own keyed fields
    Object(ObjectData),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercase local name
    tag: String,
    /// Attributes in insertion order
    attrs: Vec<(String, String)>,
    /// Mirrors the `class` attribute
    class_list: DOMTokenList,
    /// Mirrors the `style` attribute
    style: CssStyleDeclaration,
    /// Expando and dirty IDL properties
    properties: HashMap<String, Value>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            class_list: DOMTokenList::new(),
            style: CssStyleDeclaration::new(),
            properties: HashMap::new(),
        }
    }

    /// Lowercase tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element with a form value (`input`, `textarea`, `select`)
    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }

    /// Elements serialized without children or end tag
    pub fn is_void(&self) -> bool {
        matches!(
            self.tag.as_str(),
            "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
                | "source" | "track" | "wbr"
        )
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Set an attribute, keeping `class` and `style` facets in sync
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match name {
            "class" => self.class_list.set_value(value),
            "style" => self.style.set_css_text(value),
            _ => {}
        }
        self.store_attribute(name, value.to_string());
    }

    /// Remove an attribute. Returns the old value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(n, _)| n == name)?;
        match name {
            "class" => self.class_list = DOMTokenList::new(),
            "style" => self.style = CssStyleDeclaration::new(),
            _ => {}
        }
        Some(self.attrs.remove(index).1)
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn class_list(&self) -> &DOMTokenList {
        &self.class_list
    }

    /// Add a class token. Returns `true` if the list changed.
    pub fn add_class(&mut self, token: &str) -> Result<bool, DomError> {
        let changed = self.class_list.add(token)?;
        if changed {
            self.sync_class_attribute();
        }
        Ok(changed)
    }

    /// Remove a class token. Returns `true` if the list changed.
    pub fn remove_class(&mut self, token: &str) -> Result<bool, DomError> {
        let changed = self.class_list.remove(token)?;
        if changed {
            self.sync_class_attribute();
        }
        Ok(changed)
    }

    pub fn style(&self) -> &CssStyleDeclaration {
        &self.style
    }

    /// Set one inline style property; an empty value removes it
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        self.style.set_property(property, value);
        let css_text = self.style.css_text();
        if css_text.is_empty() && !self.has_attribute("style") {
            return;
        }
        self.store_attribute("style", css_text);
    }

    /// Stored (expando or dirty) property, without reflection
    pub fn own_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub(crate) fn store_property(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }

    fn sync_class_attribute(&mut self) {
        let value = self.class_list.value();
        self.store_attribute("class", value);
    }

    fn store_attribute(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }
}

/// Host object data: a keyed store reached through get/set
#[derive(Debug, Default)]
pub struct ObjectData {
    fields: HashMap<String, Value>,
}

impl ObjectData {
    /// Read a field; missing fields are `undefined`
    pub fn get(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_types() {
        assert_eq!(Node::element("div").node_type(), Some(NodeType::Element));
        assert_eq!(Node::text("x").node_type(), Some(NodeType::Text));
        assert_eq!(Node::comment("x").node_type().map(NodeType::code), Some(8));
        assert_eq!(Node::document().node_type().map(NodeType::code), Some(9));
        assert_eq!(Node::object().node_type(), None);
    }

    #[test]
    fn test_tag_is_lowercased() {
        let elem = ElementData::new("INPUT");
        assert_eq!(elem.tag(), "input");
        assert!(elem.is_form_control());
        assert!(elem.is_void());
    }

    #[test]
    fn test_class_attribute_sync() {
        let mut elem = ElementData::new("div");
        elem.set_attribute("class", "a b");
        assert!(elem.class_list().contains("b"));

        elem.add_class("c").unwrap();
        assert_eq!(elem.get_attribute("class"), Some("a b c"));

        elem.remove_class("a").unwrap();
        assert_eq!(elem.get_attribute("class"), Some("b c"));

        elem.remove_attribute("class");
        assert!(elem.class_list().is_empty());
    }

    #[test]
    fn test_style_attribute_sync() {
        let mut elem = ElementData::new("div");
        elem.set_style_property("backgroundColor", "red");
        assert_eq!(elem.get_attribute("style"), Some("background-color: red;"));

        elem.set_attribute("style", "color: blue");
        assert_eq!(elem.style().get_property_value("background-color"), "");
        assert_eq!(elem.style().get_property_value("color"), "blue");
    }

    #[test]
    fn test_clearing_unset_style_adds_no_attribute() {
        let mut elem = ElementData::new("div");
        elem.set_style_property("color", "");
        assert!(!elem.has_attribute("style"));
    }

    #[test]
    fn test_object_fields() {
        let mut obj = ObjectData::default();
        assert_eq!(obj.get("missing"), Value::Undefined);
        obj.set("count", Value::Number(3.0));
        assert_eq!(obj.get("count"), Value::Number(3.0));
        assert_eq!(obj.len(), 1);
    }
}
