//! In-memory implementation of [`DocumentStore`].
//!
//! [`InMemoryStore`] keeps serialized XML in a `BTreeMap`, with the same
//! semantics as the file backend. Used by tests and scratch sessions.

use std::collections::BTreeMap;

use crate::document::Document;
use crate::error::StorageError;
use crate::traits::DocumentStore;

/// Documents held as XML text, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Raw stored XML for `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.documents.get(key).map(String::as_str)
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Document, StorageError> {
        let xml = self.raw(key).ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
        })?;
        Document::from_xml(xml)
    }

    fn save(&mut self, key: &str, doc: &mut Document) -> Result<(), StorageError> {
        doc.fixup_references();
        let xml = doc.to_xml()?;
        self.documents.insert(key.to_string(), xml);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.documents
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.documents.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ATTR_REFERENCE;
    use vxgraph_core::id::RefId;

    #[test]
    fn save_then_load() {
        let mut store = InMemoryStore::new();
        let mut doc = Document::default();
        store.save("a", &mut doc).unwrap();
        let loaded = store.load("a").unwrap();
        assert_eq!(loaded.outline(), doc.outline());
        assert_eq!(store.list().unwrap(), vec!["a".to_string()]);
        assert!(store.exists("a").unwrap());
    }

    #[test]
    fn save_runs_fixup() {
        let mut store = InMemoryStore::new();
        let mut doc = Document::default();
        let root = doc.root();
        let img = doc.create_child(root, "image").unwrap();
        doc.set_attr(img, ATTR_REFERENCE, "12").unwrap();
        store.save("sparse", &mut doc).unwrap();
        let loaded = store.load("sparse").unwrap();
        assert_eq!(loaded.reference_count(), 2);
        assert!(loaded.by_reference(RefId(1)).is_some());
    }

    #[test]
    fn missing_keys_report_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(store.load("x"), Err(StorageError::NotFound { .. })));
        assert!(matches!(store.delete("x"), Err(StorageError::NotFound { .. })));
    }
}
