//! `DomHost` for the fOS arena DOM

use fos_dom::{DomError, DomTree, NodeData, NodeId, Value};

use crate::host::{DomHost, FieldShape, NodeCategory, TagKind};

impl DomHost for DomTree {
    type Node = NodeId;

    fn category(&self, node: NodeId) -> Option<NodeCategory> {
        let node_type = self.get(node)?.node_type()?;
        Some(NodeCategory::from_node_type(node_type.code()))
    }

    fn tag_kind(&self, node: NodeId) -> TagKind {
        self.get(node)
            .and_then(|n| n.as_element())
            .map_or(TagKind::Other, |e| TagKind::from_tag(e.tag()))
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        DomTree::parent_element(self, node)
    }

    fn field_shape(&self, node: NodeId) -> FieldShape {
        match self.get(node).map(|n| &n.data) {
            Some(NodeData::Object(_)) => FieldShape::Keyed,
            _ => FieldShape::Plain,
        }
    }

    fn property(&self, node: NodeId, name: &str) -> Result<Value, DomError> {
        DomTree::property(self, node, name)
    }

    fn set_property(&mut self, node: NodeId, name: &str, value: Value) -> Result<(), DomError> {
        DomTree::set_property(self, node, name, value)
    }

    fn keyed_get(&self, node: NodeId, name: &str) -> Result<Value, DomError> {
        self.object(node)
            .map(|obj| obj.get(name))
            .ok_or(DomError::NodeNotFound(node))
    }

    fn keyed_set(&mut self, node: NodeId, name: &str, value: Value) -> Result<(), DomError> {
        let obj = self.object_mut(node).ok_or(DomError::NodeNotFound(node))?;
        obj.set(name, value);
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.element(node)?.get_attribute(name).map(str::to_string))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(node)?.set_attribute(name, value);
        Ok(())
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        self.element_mut(node)?.remove_attribute(name);
        Ok(())
    }

    fn add_class(&mut self, node: NodeId, token: &str) -> Result<(), DomError> {
        self.element_mut(node)?.add_class(token)?;
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, token: &str) -> Result<(), DomError> {
        self.element_mut(node)?.remove_class(token)?;
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(node)?.set_style_property(property, value);
        Ok(())
    }

    fn text_content(&self, node: NodeId) -> Result<String, DomError> {
        DomTree::text_content(self, node)
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        DomTree::set_text_content(self, node, text)
    }

    fn inner_html(&self, node: NodeId) -> Result<String, DomError> {
        DomTree::inner_html(self, node)
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) -> Result<(), DomError> {
        DomTree::set_inner_html(self, node, html)
    }

    fn is_focused(&self, node: NodeId) -> bool {
        DomTree::is_focused(self, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let text = tree.create_text("x");
        let comment = tree.create_comment("c");
        let obj = tree.create_object();

        assert_eq!(tree.category(div), Some(NodeCategory::Element));
        assert_eq!(tree.category(text), Some(NodeCategory::Text));
        assert_eq!(tree.category(comment), Some(NodeCategory::Other(8)));
        assert_eq!(tree.category(tree.root()), Some(NodeCategory::Other(9)));
        assert_eq!(tree.category(obj), None);
        assert_eq!(tree.category(NodeId::NONE), None);
    }

    #[test]
    fn test_field_shape() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let obj = tree.create_object();

        assert_eq!(tree.field_shape(div), FieldShape::Plain);
        assert_eq!(tree.field_shape(obj), FieldShape::Keyed);
        assert_eq!(tree.keyed_get(div, "x"), Err(DomError::NodeNotFound(div)));
    }

    #[test]
    fn test_tag_kind_of_non_element() {
        let mut tree = DomTree::new();
        let text = tree.create_text("input");
        assert_eq!(tree.tag_kind(text), TagKind::Other);
    }
}
