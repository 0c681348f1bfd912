//! Document model and persistence for OpenVX graph documents.
//!
//! Provides the arena [`Document`] (the single source of truth for an
//! editing session), its reference fixup pass and per-document
//! [`NameTable`], the XML wire format, blake3 content hashing, and the
//! [`DocumentStore`] trait with [`InMemoryStore`] and [`FileStore`]
//! backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`document`]: Document and Element, tree and attribute editing
//! - [`names`]: name deduplication
//! - [`fixup`]: dense reference renumbering
//! - [`wire`]: XML parse/serialize
//! - [`hash`]: document and subtree-shape digests
//! - [`traits`]: DocumentStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`file`]: FileStore plus `open`/`save` for single paths

pub mod document;
pub mod error;
pub mod file;
pub mod fixup;
pub mod hash;
pub mod memory;
pub mod names;
pub mod traits;
pub mod wire;

// Re-export key types for ergonomic use.
pub use document::{Document, Element, GLOBALS_NAME};
pub use error::StorageError;
pub use file::{open, save, FileStore};
pub use fixup::FixupReport;
pub use hash::{hash_document, hash_shape, hash_xml};
pub use memory::InMemoryStore;
pub use names::NameTable;
pub use traits::DocumentStore;
