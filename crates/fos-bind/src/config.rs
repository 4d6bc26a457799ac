//! Resolver configuration

/// Resolver configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveConfig {
    /// Reject nodes without a recognizable category instead of warning and
    /// falling back to a generic accessor.
    pub strict_unknown_nodes: bool,
}

impl ResolveConfig {
    /// Configuration that rejects unrecognized nodes
    pub fn strict() -> Self {
        Self {
            strict_unknown_nodes: true,
        }
    }
}
