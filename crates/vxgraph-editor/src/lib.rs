//! Editing core for OpenVX graph documents.
//!
//! [`EditorService`] owns a session: the [`Document`](vxgraph_storage::Document),
//! the registries, the cross-reference index ([`Xref`]), the derived
//! dependency graphs ([`GraphSet`]) and the undo history. The
//! [`GraphSynchronizer`] rebuilds the index and graphs from the document;
//! the operations in [`ops`] mutate the document.
//!
//! # Modules
//!
//! - [`error`]: EditError and its ErrorKind
//! - [`config`]: EditorConfig and its environment overrides
//! - [`xref`]: cross-reference index with dirty flags
//! - [`graph`]: derived dependency graphs
//! - [`defaults`]: default objects and node defaults
//! - [`sync`]: full rebuild and incremental refresh
//! - [`ops`]: structural mutations
//! - [`undo`]: bounded snapshot history
//! - [`service`]: the session coordinator

pub mod config;
pub mod defaults;
pub mod error;
pub mod graph;
pub mod ops;
pub mod service;
pub mod sync;
pub mod undo;
pub mod xref;

// Re-export commonly used types
pub use config::EditorConfig;
pub use error::{EditError, ErrorKind};
pub use graph::{DerivedGraph, EdgeLabel, EdgeStyle, GraphSet, Vertex, VertexKey, VertexKind};
pub use ops::insert::{OptionalParameter, Scope};
pub use ops::merge::{MergeOutcome, MismatchPolicy};
pub use ops::remove::Removal;
pub use ops::replicate::ReplicationCandidate;
pub use ops::scope::ScopeChange;
pub use service::EditorService;
pub use sync::{BuildDiagnostic, BuildOutput, GraphSynchronizer};
pub use undo::{Checkpoint, UndoStack};
pub use xref::{GraphKey, Owner, ParamLink, Xref, XrefEntry};
