//! fOS Bind - value accessors for DOM nodes
//!
//! Resolves a symbolic name on a node to an accessor that reads and writes
//! the matching facet:
//!
//! | Name           | Element facet                         |
//! |----------------|---------------------------------------|
//! | `foo$`         | attribute `foo`                       |
//! | `text`         | `textContent`                         |
//! | `html`         | `innerHTML`                           |
//! | `value`        | form value of an `<input>`            |
//! | `class.foo`    | membership of class `foo` (write-only)|
//! | `style.color`  | inline style `color` (write-only)     |
//! | anything else  | property, camelized (`foo-bar` → `fooBar`) |
//!
//! Text nodes resolve to their text, except inside a `<textarea>` where they
//! resolve to the textarea's value.
//!
//! ```ignore
//! let mut tree = DomTree::new();
//! let input = tree.create_element("input");
//! fos_bind::set(&mut tree, input, "value", "hello")?;
//! assert_eq!(fos_bind::get(&tree, input, "value")?, Value::from("hello"));
//! ```

mod accessor;
mod config;
mod dom;
mod error;
mod host;
mod resolver;

pub use accessor::{Accessor, AccessorKind};
pub use config::ResolveConfig;
pub use error::BindError;
pub use host::{DomHost, FieldShape, NodeCategory, TagKind};
pub use resolver::Resolver;

pub use fos_dom::Value;

/// Resolve the accessor for `name` on `node` with the default configuration
pub fn resolve<H: DomHost>(
    host: &H,
    node: H::Node,
    name: &str,
) -> Result<Accessor<H::Node>, BindError> {
    Resolver::default().resolve(host, node, name)
}

/// Resolve and read
pub fn get<H: DomHost>(host: &H, node: H::Node, name: &str) -> Result<Value, BindError> {
    resolve(host, node, name)?.get(host)
}

/// Resolve and write
pub fn set<H: DomHost>(
    host: &mut H,
    node: H::Node,
    name: &str,
    value: impl Into<Value>,
) -> Result<(), BindError> {
    let accessor = resolve(&*host, node, name)?;
    accessor.set(host, value)
}
