//! Storage error types for vxgraph-storage.
//!
//! [`StorageError`] covers the failure modes of the document layer: XML
//! syntax, file I/O, malformed documents and arena misuse.

use thiserror::Error;
use vxgraph_core::id::ElemId;

/// Errors produced by document and storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The XML reader or writer rejected the input.
    #[error("xml error: {reason}")]
    Xml { reason: String },

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The document parsed but does not have the expected shape.
    #[error("malformed document: {reason}")]
    Malformed { reason: String },

    /// The root element is not `openvx`.
    #[error("unexpected root element '{name}', expected 'openvx'")]
    UnexpectedRoot { name: String },

    /// An element id does not name a live element of the document.
    #[error("element not found: {elem}")]
    ElementNotFound { elem: ElemId },

    /// Attaching `child` under `parent` would put an element inside itself,
    /// or `child` is still attached elsewhere.
    #[error("cannot attach {child} under {parent}: {reason}")]
    InvalidAttach {
        child: ElemId,
        parent: ElemId,
        reason: String,
    },

    /// No stored document under the given key.
    #[error("document not found: '{key}'")]
    NotFound { key: String },
}

impl StorageError {
    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        StorageError::Xml {
            reason: err.to_string(),
        }
    }
}
