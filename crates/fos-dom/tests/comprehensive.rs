//! Comprehensive tests for fos-dom
//!
//! Tree structure, element facets and host objects through the public API.

use fos_dom::{camelize, DomError, DomTree, NodeData, NodeId, NodeType, Value};

#[test]
fn test_dom_tree_creation() {
    let mut tree = DomTree::new();

    // div > span > text
    let div = tree.create_element("div");
    let span = tree.create_element("span");
    let text = tree.create_text("Hello, World!");

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, span).unwrap();
    tree.append_child(span, text).unwrap();

    assert_eq!(tree.len(), 4); // document + div + span + text

    let div_node = tree.get(div).unwrap();
    assert_eq!(div_node.parent, tree.root());
    assert_eq!(div_node.first_child, span);

    let span_node = tree.get(span).unwrap();
    assert_eq!(span_node.parent, div);
    assert_eq!(span_node.first_child, text);

    assert!(tree.is_connected(text));
    assert_eq!(tree.text_content(div).unwrap(), "Hello, World!");
}

#[test]
fn test_dom_tree_siblings() {
    let mut tree = DomTree::new();

    let div = tree.create_element("div");
    let child1 = tree.create_element("p");
    let child2 = tree.create_element("p");
    let child3 = tree.create_element("p");

    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, child1).unwrap();
    tree.append_child(div, child2).unwrap();
    tree.append_child(div, child3).unwrap();

    let node1 = tree.get(child1).unwrap();
    assert_eq!(node1.next_sibling, child2);
    assert!(!node1.prev_sibling.is_valid());

    tree.detach(child2);
    assert_eq!(tree.get(child1).unwrap().next_sibling, child3);
    assert_eq!(tree.get(child3).unwrap().prev_sibling, child1);
    assert!(!tree.is_connected(child2));
}

#[test]
fn test_content_writes_reuse_the_text_child() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.append_child(tree.root(), div).unwrap();
    tree.set_text_content(div, "one").unwrap();

    let text = tree.children(div).next().map(|(id, _)| id).unwrap();
    let len = tree.len();
    tree.set_text_content(div, "two").unwrap();
    tree.set_inner_html(div, "<b>three</b>").unwrap();
    tree.set_text_content(div, "four").unwrap();

    assert_eq!(tree.children(div).map(|(id, _)| id).collect::<Vec<_>>(), vec![text]);
    assert_eq!(tree.get(text).unwrap().as_text(), Some("four"));
    assert_eq!(tree.len(), len);
}

#[test]
fn test_detached_elements_keep_ids() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    let span = tree.create_element("span");
    tree.append_child(tree.root(), div).unwrap();
    tree.append_child(div, span).unwrap();

    tree.set_text_content(div, "replaced").unwrap();
    tree.set_text_content(div, "").unwrap();
    tree.set_text_content(div, "again").unwrap();

    assert!(tree.get(span).unwrap().is_element());
    assert_eq!(tree.parent(span), None);
    assert_eq!(tree.text_content(div).unwrap(), "again");
}

#[test]
fn test_node_type_codes() {
    let mut tree = DomTree::new();
    let div = tree.create_element("DIV");
    let text = tree.create_text("t");
    let comment = tree.create_comment("c");
    let obj = tree.create_object();

    assert_eq!(tree.get(div).unwrap().node_type(), Some(NodeType::Element));
    assert_eq!(tree.get(text).unwrap().node_type().map(NodeType::code), Some(3));
    assert_eq!(tree.get(comment).unwrap().node_type().map(NodeType::code), Some(8));
    assert_eq!(tree.get(tree.root()).unwrap().node_type(), Some(NodeType::Document));
    assert_eq!(tree.get(obj).unwrap().node_type(), None);
    assert!(tree.get(NodeId::NONE).is_none());

    assert_eq!(tree.element(div).unwrap().tag(), "div");
}

#[test]
fn test_element_facets_stay_in_sync() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.append_child(tree.root(), div).unwrap();

    let elem = tree.element_mut(div).unwrap();
    elem.set_attribute("class", "card");
    elem.add_class("active").unwrap();
    elem.set_style_property("marginTop", "4px");

    assert_eq!(elem.get_attribute("class"), Some("card active"));
    assert_eq!(elem.get_attribute("style"), Some("margin-top: 4px;"));

    let attrs: Vec<(&str, &str)> = elem.attributes().collect();
    assert_eq!(attrs, vec![("class", "card active"), ("style", "margin-top: 4px;")]);

    assert_eq!(
        tree.inner_html(tree.root()),
        Err(DomError::NotAnElement(tree.root()))
    );
}

#[test]
fn test_inner_html_nested_serialization() {
    let mut tree = DomTree::new();
    let ul = tree.create_element("ul");
    tree.append_child(tree.root(), ul).unwrap();

    for label in ["one", "two & three"] {
        let li = tree.create_element("li");
        tree.append_child(ul, li).unwrap();
        tree.set_text_content(li, label).unwrap();
    }
    let br = tree.create_element("br");
    tree.append_child(ul, br).unwrap();

    assert_eq!(
        tree.inner_html(ul).unwrap(),
        "<li>one</li><li>two &amp; three</li><br>"
    );
}

#[test]
fn test_raw_markup_child() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.append_child(tree.root(), div).unwrap();

    tree.set_inner_html(div, "<p title=\"a > b\">hi &amp; bye</p><!-- <b>no</b> -->").unwrap();
    let (_, child) = tree.children(div).next().unwrap();
    assert!(matches!(child.data, NodeData::RawMarkup(_)));
    assert_eq!(tree.text_content(div).unwrap(), "hi & bye");
}

#[test]
fn test_focus_tracking() {
    let mut tree = DomTree::new();
    let a = tree.create_element("input");
    let b = tree.create_element("input");
    tree.append_child(tree.root(), a).unwrap();
    tree.append_child(tree.root(), b).unwrap();

    assert_eq!(tree.active_element(), None);
    tree.focus(a).unwrap();
    tree.focus(b).unwrap();
    assert!(!tree.is_focused(a));
    assert_eq!(tree.active_element(), Some(b));

    tree.blur();
    assert_eq!(tree.active_element(), None);
}

#[test]
fn test_host_object_store() {
    let mut tree = DomTree::new();
    let obj = tree.create_object();

    assert_eq!(tree.property(obj, "missing").unwrap(), Value::Undefined);
    tree.object_mut(obj).unwrap().set("title", Value::from("Home"));
    assert_eq!(tree.property(obj, "title").unwrap(), Value::from("Home"));
    assert!(tree.object(tree.root()).is_none());
}

#[test]
fn test_camelize_matches_dataset_keys() {
    assert_eq!(camelize("data-user-id"), "dataUserId");
    assert_eq!(camelize("background_color"), "backgroundColor");
}
