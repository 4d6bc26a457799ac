//! Example: binding values into a small form
//!
//! Run with `RUST_LOG=fos_bind=debug` to see resolution events.

use fos_bind::{BindError, Value};
use fos_dom::DomTree;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BindError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = DomTree::new();
    let form = tree.create_element("form");
    let name = tree.create_element("input");
    let notes = tree.create_element("textarea");
    let notes_text = tree.create_text("");
    tree.append_child(tree.root(), form)?;
    tree.append_child(form, name)?;
    tree.append_child(form, notes)?;
    tree.append_child(notes, notes_text)?;

    fos_bind::set(&mut tree, form, "class.dirty", true)?;
    fos_bind::set(&mut tree, form, "style.border-color", "orange")?;
    fos_bind::set(&mut tree, name, "placeholder$", "Your name")?;
    fos_bind::set(&mut tree, name, "value", "Ada")?;

    // The user is typing into the field; this update is dropped
    tree.focus(name)?;
    fos_bind::set(&mut tree, name, "value", "Grace")?;

    // Writing through the textarea's text node updates the textarea value
    fos_bind::set(&mut tree, notes_text, "text", "Remember the milk")?;

    println!("name  = {}", fos_bind::get(&tree, name, "value")?);
    println!("notes = {}", fos_bind::get(&tree, notes, "value")?);
    println!("form  = {}", fos_bind::get(&tree, form, "html")?);

    let model = tree.create_object();
    fos_bind::set(&mut tree, model, "count", 1)?;
    assert_eq!(fos_bind::get(&tree, model, "count")?, Value::Number(1.0));

    Ok(())
}
