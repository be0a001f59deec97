//! Store error types.
//!
//! Every failure is scoped to the single operation that raised it; nothing
//! here is fatal to the process. Messages are flat strings surfaced to the
//! operator verbatim.

/// Errors raised by live store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A merge or append targeted a document that is not a JSON object.
    #[error("document at {0} is not an object")]
    NotAnObject(String),

    /// A document failed to encode or decode.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file could not be read or written.
    #[error("store file error: {0}")]
    Io(#[from] std::io::Error),
}
