use thiserror::Error;

/// Errors surfaced by the clustering core.
///
/// An empty input set is not an error: it produces a store that is
/// terminal from the start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// A merge was requested between indices that do not name two distinct,
    /// live clusters. The store is left untouched.
    #[error("Invalid merge of cluster {source_index} into {target}: {reason}")]
    InvalidMerge {
        target: usize,
        source_index: usize,
        reason: String,
    },

    #[error("Cluster store not initialized. Call initialize() first.")]
    UninitializedStore,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClusterError {
    pub(crate) fn invalid_merge(target: usize, source_index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidMerge {
            target,
            source_index,
            reason: reason.into(),
        }
    }
}
