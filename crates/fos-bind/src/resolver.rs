//! Accessor resolution
//!
//! Picks the accessor for a `(node, name)` pair from the node category and
//! the syntax of the name. Resolution only reads the host.

use fos_dom::camelize;

use crate::host::{DomHost, NodeCategory, TagKind};
use crate::{Accessor, BindError, ResolveConfig};

/// Trailing marker selecting the content attribute
const ATTRIBUTE_SUFFIX: char = '$';
const CLASS_PREFIX: &str = "class.";
const STYLE_PREFIX: &str = "style.";

/// Accessor resolver
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolveConfig,
}

impl Resolver {
    pub fn new(config: ResolveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Resolve the accessor for `name` on `node`.
    ///
    /// Checks run most specific first: the `$` suffix wins over the literal
    /// names, which win over the `class.`/`style.` prefixes.
    pub fn resolve<H: DomHost>(
        &self,
        host: &H,
        node: H::Node,
        name: &str,
    ) -> Result<Accessor<H::Node>, BindError> {
        let Some(category) = host.category(node) else {
            if self.config.strict_unknown_nodes {
                return Err(BindError::UnrecognizedNode {
                    name: name.to_string(),
                });
            }
            tracing::warn!(
                target: "fos_bind::resolve",
                node = ?node,
                key = name,
                "node has no recognizable category, using generic accessor"
            );
            return Ok(Accessor::Generic {
                node,
                name: name.to_string(),
            });
        };

        let accessor = match category {
            NodeCategory::Element => resolve_element(host, node, name),
            NodeCategory::Text => resolve_text(host, node),
            NodeCategory::Other(kind) => return Err(BindError::UnsupportedNodeKind { kind }),
        };

        tracing::debug!(
            target: "fos_bind::resolve",
            node = ?node,
            key = name,
            accessor = %accessor.kind(),
            "resolved"
        );
        Ok(accessor)
    }
}

fn resolve_element<H: DomHost>(host: &H, node: H::Node, name: &str) -> Accessor<H::Node> {
    if let Some(attr) = name.strip_suffix(ATTRIBUTE_SUFFIX) {
        return Accessor::Attribute {
            node,
            name: attr.to_string(),
        };
    }

    match name {
        "text" => return Accessor::Text { node },
        "html" => return Accessor::Html { node },
        "value" if host.tag_kind(node) == TagKind::Input => return Accessor::Value { node },
        _ => {}
    }

    if let Some(token) = name.strip_prefix(CLASS_PREFIX) {
        Accessor::Class {
            node,
            token: token.to_string(),
        }
    } else if let Some(property) = name.strip_prefix(STYLE_PREFIX) {
        Accessor::Style {
            node,
            property: property.to_string(),
        }
    } else {
        Accessor::Property {
            node,
            name: camelize(name),
        }
    }
}

fn resolve_text<H: DomHost>(host: &H, node: H::Node) -> Accessor<H::Node> {
    match host.parent_element(node) {
        Some(parent) if host.tag_kind(parent) == TagKind::Textarea => {
            Accessor::Value { node: parent }
        }
        _ => Accessor::Text { node },
    }
}
