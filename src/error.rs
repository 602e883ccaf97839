//! Error type shared by the model, the serializer and the parser helpers.

use thiserror::Error;

/// Errors surfaced by `svgtree`.
///
/// Lookups never fail: a missing node is `None`, not an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A coordinate-space wrapper in `objectBoundingBox` mode was asked for
    /// its renderable content before being resolved against a bounding box.
    #[error("node {id:?} uses objectBoundingBox units; resolve it with `into_user_space` first")]
    UnresolvedBoundingBox { id: Option<String> },

    /// One of the fixed parser patterns failed to compile.
    #[error("failed to compile pattern `{name}`: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("invalid transform: {0}")]
    InvalidTransform(String),

    #[error("invalid path data: {0}")]
    InvalidPath(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A JSON scene document could not be decoded.
    #[error("invalid scene document: {0}")]
    Scene(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
