//! Editor error types.
//!
//! [`EditError`] covers the four failure classes of an editing session:
//! refused mutations, unresolvable references, dataflow cycles and
//! document I/O. [`ErrorKind`] is the class alone, for callers that only
//! branch on it (the CLI maps it to an exit code).

use serde::Serialize;
use thiserror::Error;

use vxgraph_core::CoreError;
use vxgraph_storage::StorageError;

/// Errors produced by editor operations.
#[derive(Debug, Error)]
pub enum EditError {
    /// A mutation precondition was violated. Nothing was changed.
    #[error("{reason}")]
    Validation { reason: String },

    /// A reference attribute or id did not resolve.
    #[error("unresolved reference: {reason}")]
    Reference { reason: String },

    /// The mutation would introduce a dataflow cycle in the named graph.
    #[error("cycle in graph '{graph}': {reason}")]
    Cycle { graph: String, reason: String },

    /// Parsing, writing or storing a document failed.
    #[error(transparent)]
    Io(#[from] StorageError),

    /// A registry lookup failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Failure class of an [`EditError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Reference,
    Cycle,
    Io,
}

impl EditError {
    pub fn validation(reason: impl Into<String>) -> Self {
        EditError::Validation {
            reason: reason.into(),
        }
    }

    pub fn reference(reason: impl Into<String>) -> Self {
        EditError::Reference {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::Validation { .. } | EditError::Core(_) => ErrorKind::Validation,
            EditError::Reference { .. } => ErrorKind::Reference,
            EditError::Cycle { .. } => ErrorKind::Cycle,
            EditError::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(EditError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(EditError::reference("x").kind(), ErrorKind::Reference);
        let cycle = EditError::Cycle {
            graph: "g".into(),
            reason: "loop".into(),
        };
        assert_eq!(cycle.kind(), ErrorKind::Cycle);
        assert_eq!(cycle.to_string(), "cycle in graph 'g': loop");

        let core: EditError = CoreError::UnknownKernel { name: "k".into() }.into();
        assert_eq!(core.kind(), ErrorKind::Validation);

        let io: EditError = StorageError::Malformed {
            reason: "bad".into(),
        }
        .into();
        assert_eq!(io.kind(), ErrorKind::Io);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::Reference).unwrap();
        assert_eq!(json, "\"reference\"");
    }
}
