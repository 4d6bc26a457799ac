//! Binding errors

use fos_dom::DomError;

use crate::AccessorKind;

/// Binding error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// Node category outside element/text; needs a new dispatch case
    #[error("Unimplemented resolving accessor for node type: {kind}")]
    UnsupportedNodeKind { kind: u16 },

    /// Read on a write-only accessor
    #[error("Unimplemented: {accessor} accessor is write-only")]
    Unimplemented { accessor: AccessorKind },

    /// Unrecognized node under `ResolveConfig::strict_unknown_nodes`
    #[error("Node has no recognizable category (resolving {name:?})")]
    UnrecognizedNode { name: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}
