//! The [`DocumentStore`] trait defining where documents are kept.
//!
//! Backends store serialized XML under string keys. `save` runs reference
//! fixup before writing so stored documents always carry dense ids.

use crate::document::Document;
use crate::error::StorageError;

/// The storage contract for OpenVX documents.
///
/// The trait is synchronous; the editor is single-threaded and each call
/// runs to completion.
pub trait DocumentStore {
    // -------------------------------------------------------------------
    // Document-level operations
    // -------------------------------------------------------------------

    /// Loads and parses the document stored under `key`.
    fn load(&self, key: &str) -> Result<Document, StorageError>;

    /// Fixes up references in `doc`, then stores its XML under `key`,
    /// replacing any previous content.
    fn save(&mut self, key: &str, doc: &mut Document) -> Result<(), StorageError>;

    /// Deletes the document stored under `key`.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;

    // -------------------------------------------------------------------
    // Query methods
    // -------------------------------------------------------------------

    /// Lists stored keys in ascending order.
    fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Whether a document is stored under `key`.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.list()?.iter().any(|k| k == key))
    }
}
