//! Accessors
//!
//! One variant per native access pattern. An accessor is bound to a node
//! handle and a name when it is resolved and is discarded after use.

use std::fmt;

use fos_dom::Value;

use crate::host::{DomHost, FieldShape};
use crate::BindError;

/// Accessor variant, without its binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Generic,
    Property,
    Text,
    Style,
    Class,
    Html,
    Value,
    Attribute,
}

impl AccessorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Property => "property",
            Self::Text => "text",
            Self::Style => "style",
            Self::Class => "class",
            Self::Html => "html",
            Self::Value => "value",
            Self::Attribute => "attribute",
        }
    }

    /// Whether `get` is supported
    pub fn is_readable(self) -> bool {
        !matches!(self, Self::Class | Self::Style)
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved accessor bound to `(node, name)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor<N> {
    /// Name used verbatim through the node's field capability
    Generic { node: N, name: String },
    /// Generic access with a camelized name
    Property { node: N, name: String },
    /// `textContent`
    Text { node: N },
    /// One inline style property (write-only)
    Style { node: N, property: String },
    /// Membership of one class token (write-only)
    Class { node: N, token: String },
    /// `innerHTML`
    Html { node: N },
    /// Form `value`, guarded against overwriting a focused control
    Value { node: N },
    /// Content attribute
    Attribute { node: N, name: String },
}

impl<N: Copy + fmt::Debug> Accessor<N> {
    pub fn kind(&self) -> AccessorKind {
        match self {
            Self::Generic { .. } => AccessorKind::Generic,
            Self::Property { .. } => AccessorKind::Property,
            Self::Text { .. } => AccessorKind::Text,
            Self::Style { .. } => AccessorKind::Style,
            Self::Class { .. } => AccessorKind::Class,
            Self::Html { .. } => AccessorKind::Html,
            Self::Value { .. } => AccessorKind::Value,
            Self::Attribute { .. } => AccessorKind::Attribute,
        }
    }

    /// The bound node
    pub fn node(&self) -> N {
        match self {
            Self::Generic { node, .. }
            | Self::Property { node, .. }
            | Self::Text { node }
            | Self::Style { node, .. }
            | Self::Class { node, .. }
            | Self::Html { node }
            | Self::Value { node }
            | Self::Attribute { node, .. } => *node,
        }
    }

    /// The effective name the accessor operates on
    pub fn name(&self) -> &str {
        match self {
            Self::Generic { name, .. } | Self::Property { name, .. } | Self::Attribute { name, .. } => {
                name
            }
            Self::Style { property, .. } => property,
            Self::Class { token, .. } => token,
            Self::Text { .. } => "textContent",
            Self::Html { .. } => "innerHTML",
            Self::Value { .. } => "value",
        }
    }

    /// Read the facet
    pub fn get<H>(&self, host: &H) -> Result<Value, BindError>
    where
        H: DomHost<Node = N>,
    {
        match self {
            Self::Generic { node, name } | Self::Property { node, name } => {
                generic_get(host, *node, name)
            }
            Self::Value { node } => generic_get(host, *node, "value"),
            Self::Text { node } => Ok(Value::String(host.text_content(*node)?)),
            Self::Html { node } => Ok(Value::String(host.inner_html(*node)?)),
            Self::Attribute { node, name } => {
                Ok(host.attribute(*node, name)?.map_or(Value::Null, Value::String))
            }
            Self::Style { .. } | Self::Class { .. } => Err(BindError::Unimplemented {
                accessor: self.kind(),
            }),
        }
    }

    /// Write the facet
    pub fn set<H>(&self, host: &mut H, value: impl Into<Value>) -> Result<(), BindError>
    where
        H: DomHost<Node = N>,
    {
        let value = value.into();
        match self {
            Self::Generic { node, name } | Self::Property { node, name } => {
                generic_set(host, *node, name, value)
            }
            Self::Text { node } => {
                host.set_text_content(*node, &value.to_dom_string())?;
                Ok(())
            }
            Self::Html { node } => {
                host.set_inner_html(*node, &value.to_dom_string())?;
                Ok(())
            }
            Self::Class { node, token } => {
                if value.is_truthy() {
                    host.add_class(*node, token)?;
                } else {
                    host.remove_class(*node, token)?;
                }
                Ok(())
            }
            Self::Style { node, property } => {
                let value = if value.is_truthy() {
                    value.to_dom_string()
                } else {
                    String::new()
                };
                host.set_style(*node, property, &value)?;
                Ok(())
            }
            Self::Value { node } => {
                if host.is_focused(*node) {
                    tracing::trace!(node = ?node, "focused control, value write dropped");
                    return Ok(());
                }
                let value = if value.is_undefined() {
                    Value::String(String::new())
                } else {
                    value
                };
                generic_set(host, *node, "value", value)
            }
            Self::Attribute { node, name } => {
                if value.is_truthy() {
                    host.set_attribute(*node, name, &value.to_dom_string())?;
                } else {
                    host.remove_attribute(*node, name)?;
                }
                Ok(())
            }
        }
    }
}

fn generic_get<H: DomHost>(host: &H, node: H::Node, name: &str) -> Result<Value, BindError> {
    let value = match host.field_shape(node) {
        FieldShape::Keyed => host.keyed_get(node, name)?,
        FieldShape::Plain => host.property(node, name)?,
    };
    Ok(value)
}

fn generic_set<H: DomHost>(
    host: &mut H,
    node: H::Node,
    name: &str,
    value: Value,
) -> Result<(), BindError> {
    match host.field_shape(node) {
        FieldShape::Keyed => host.keyed_set(node, name, value)?,
        FieldShape::Plain => host.set_property(node, name, value)?,
    }
    Ok(())
}
