//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed; removed subtrees stay in the arena detached, so
//! `NodeId`s handed out remain stable for the lifetime of the tree. The
//! exception is character data dropped by a `textContent`/`innerHTML`
//! write: those slots are recycled by later content writes, so repeated
//! writes keep the arena flat.

use crate::markup;
use crate::{DomError, ElementData, Node, NodeData, NodeId, ObjectData, Value};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    /// Element currently holding input focus
    focused: Option<NodeId>,
    /// Detached text/markup slots free for the next content write
    spare: Vec<NodeId>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            focused: None,
            spare: Vec::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of slots in the arena (including detached and spare ones)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a detached host object
    pub fn create_object(&mut self) -> NodeId {
        self.push(Node::object())
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.get(id).ok_or(DomError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.get_mut(id).ok_or(DomError::NodeNotFound(id))
    }

    /// Element data of `id`
    pub fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        self.node(id)?.as_element().ok_or(DomError::NotAnElement(id))
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    /// Host object data of `id`
    pub fn object(&self, id: NodeId) -> Option<&ObjectData> {
        self.get(id)?.as_object()
    }

    pub fn object_mut(&mut self, id: NodeId) -> Option<&mut ObjectData> {
        self.get_mut(id)?.as_object_mut()
    }

    /// Parent node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_valid().then_some(parent)
    }

    /// Parent node if it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        self.get(parent)?.is_element().then_some(parent)
    }

    /// Iterate over the children of `parent`
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Whether `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Whether `id` is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.is_inclusive_ancestor(NodeId::ROOT, id)
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        let insertable = !matches!(child_node.data, NodeData::Document | NodeData::Object(_));
        if !parent_node.is_container() || !insertable || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        Ok(())
    }

    /// Unlink `id` from its parent and siblings
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;

        if self.focused.is_some_and(|f| !self.is_connected(f)) {
            tracing::trace!("focused element detached, blurring");
            self.focused = None;
        }
    }

    /// Detach all children of `parent`
    pub fn remove_children(&mut self, parent: NodeId) {
        let children: Vec<NodeId> = self.children(parent).map(|(id, _)| id).collect();
        for child in children {
            self.detach(child);
        }
    }

    /// Give input focus to an element. Disconnected elements are not focusable.
    pub fn focus(&mut self, id: NodeId) -> Result<(), DomError> {
        self.element(id)?;
        if !self.is_connected(id) {
            tracing::trace!("{} is disconnected, focus ignored", id);
            return Ok(());
        }
        self.focused = Some(id);
        Ok(())
    }

    /// Drop input focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Element holding input focus
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn is_focused(&self, id: NodeId) -> bool {
        self.focused == Some(id)
    }

    /// `textContent`: concatenated descendant text for elements, the data
    /// of character nodes, empty for the document and host objects.
    pub fn text_content(&self, id: NodeId) -> Result<String, DomError> {
        let node = self.node(id)?;
        Ok(match &node.data {
            NodeData::Element(_) => {
                let mut out = String::new();
                self.collect_text(id, &mut out);
                out
            }
            NodeData::Text(text) | NodeData::Comment(text) => text.clone(),
            NodeData::RawMarkup(markup) => markup::fragment_text(markup),
            NodeData::Document | NodeData::Object(_) => String::new(),
        })
    }

    fn collect_text(&self, parent: NodeId, out: &mut String) {
        for (id, node) in self.children(parent) {
            match &node.data {
                NodeData::Text(text) => out.push_str(text),
                NodeData::RawMarkup(markup) => out.push_str(&markup::fragment_text(markup)),
                NodeData::Element(_) => self.collect_text(id, out),
                _ => {}
            }
        }
    }

    /// Set `textContent`. On elements all children are replaced by a
    /// single text node (none when `text` is empty).
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element(_) => {}
            NodeData::Text(data) | NodeData::Comment(data) | NodeData::RawMarkup(data) => {
                *data = text.to_string();
                return Ok(());
            }
            NodeData::Document => return Ok(()),
            NodeData::Object(_) => return Err(DomError::NotAnElement(id)),
        }

        let content = (!text.is_empty()).then(|| Node::text(text));
        self.replace_content(id, content)
    }

    /// Replace the children of `parent` with `content`, a detached text or
    /// raw-markup node. A lone character-data child is rewritten in place;
    /// otherwise dropped character-data children become spare slots.
    fn replace_content(&mut self, parent: NodeId, content: Option<Node>) -> Result<(), DomError> {
        let children: Vec<NodeId> = self.children(parent).map(|(id, _)| id).collect();

        let content = match (content, children.as_slice()) {
            (Some(content), &[only]) if self.nodes[only.index()].is_character_data() => {
                self.nodes[only.index()].data = content.data;
                return Ok(());
            }
            (content, _) => content,
        };

        for child in children {
            self.detach(child);
            if self.nodes[child.index()].is_character_data() {
                self.spare.push(child);
            }
        }

        let Some(content) = content else {
            return Ok(());
        };
        let child = match self.take_spare() {
            Some(slot) => {
                self.nodes[slot.index()] = content;
                slot
            }
            None => self.push(content),
        };
        self.append_child(parent, child)
    }

    /// Pop a spare slot that has not been re-attached since it was dropped
    fn take_spare(&mut self) -> Option<NodeId> {
        while let Some(slot) = self.spare.pop() {
            if !self.nodes[slot.index()].parent.is_valid() {
                return Some(slot);
            }
        }
        None
    }

    /// `innerHTML` of an element
    pub fn inner_html(&self, id: NodeId) -> Result<String, DomError> {
        self.element(id)?;
        Ok(markup::serialize_children(self, id))
    }

    /// Replace the children of an element with an unparsed fragment
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) -> Result<(), DomError> {
        self.element(id)?;
        let content = (!html.is_empty()).then(|| Node::raw_markup(html));
        self.replace_content(id, content)?;
        tracing::debug!("innerHTML of {} set ({} bytes)", id, html.len());
        Ok(())
    }

    /// Read a script-visible property. Stored properties win; otherwise the
    /// common reflected IDL attributes are computed. Unknown names are
    /// `undefined`.
    pub fn property(&self, id: NodeId, name: &str) -> Result<Value, DomError> {
        let node = self.node(id)?;
        match &node.data {
            NodeData::Element(elem) => {
                if let Some(value) = elem.own_property(name) {
                    return Ok(value.clone());
                }
                Ok(match name {
                    "id" => Value::from(elem.get_attribute("id").unwrap_or("")),
                    "className" => Value::from(elem.get_attribute("class").unwrap_or("")),
                    "tagName" | "nodeName" => Value::from(elem.tag().to_ascii_uppercase()),
                    "textContent" => Value::from(self.text_content(id)?),
                    "innerHTML" => Value::from(self.inner_html(id)?),
                    "value" if elem.tag() == "textarea" => Value::from(self.text_content(id)?),
                    "value" if elem.is_form_control() => {
                        Value::from(elem.get_attribute("value").unwrap_or(""))
                    }
                    _ => Value::Undefined,
                })
            }
            NodeData::Text(text) | NodeData::Comment(text) => Ok(match name {
                "data" | "nodeValue" | "textContent" => Value::from(text.as_str()),
                _ => Value::Undefined,
            }),
            NodeData::Object(obj) => Ok(obj.get(name)),
            NodeData::Document | NodeData::RawMarkup(_) => Ok(Value::Undefined),
        }
    }

    /// Write a script-visible property. Reflected attributes write through
    /// to the attribute; form values are stored as strings; anything else
    /// on an element becomes an expando property.
    pub fn set_property(&mut self, id: NodeId, name: &str, value: Value) -> Result<(), DomError> {
        let is_element = self.node(id)?.is_element();
        match name {
            "textContent" => return self.set_text_content(id, &value.to_dom_string()),
            "innerHTML" if is_element => return self.set_inner_html(id, &value.to_dom_string()),
            _ => {}
        }

        match &mut self.node_mut(id)?.data {
            NodeData::Element(elem) => match name {
                "id" => elem.set_attribute("id", &value.to_dom_string()),
                "className" => elem.set_attribute("class", &value.to_dom_string()),
                "tagName" | "nodeName" => {}
                "value" if elem.is_form_control() => {
                    elem.store_property("value", Value::String(value.to_dom_string()))
                }
                _ => elem.store_property(name, value),
            },
            NodeData::Text(text) | NodeData::Comment(text) => match name {
                "data" | "nodeValue" => *text = value.to_dom_string(),
                _ => return Err(DomError::NotAnElement(id)),
            },
            NodeData::Object(obj) => obj.set(name, value),
            NodeData::Document | NodeData::RawMarkup(_) => return Err(DomError::NotAnElement(id)),
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
