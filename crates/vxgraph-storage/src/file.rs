//! File-backed storage.
//!
//! [`open`] and [`save`] read and write a single document path.
//! [`FileStore`] implements [`DocumentStore`] over a directory, one file per
//! key.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::StorageError;
use crate::traits::DocumentStore;

/// Reads and parses the document at `path`.
pub fn open(path: impl AsRef<Path>) -> Result<Document, StorageError> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path)?;
    let doc = Document::from_xml(&xml)?;
    tracing::info!(path = %path.display(), "opened document");
    Ok(doc)
}

/// Fixes up references in `doc` and writes it to `path`.
///
/// The XML goes to a sibling temporary file first and is then renamed over
/// `path`, so a failed write leaves any existing file intact.
pub fn save(doc: &mut Document, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let report = doc.fixup_references();
    let xml = doc.to_xml()?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, xml)?;
    fs::rename(&tmp, path)?;
    tracing::info!(path = %path.display(), references = report.count, "saved document");
    Ok(())
}

/// A directory of XML documents.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Uses `dir` as the store, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.contains(['/', '\\'])
            && key != "."
            && key != "..";
        if !valid {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

impl DocumentStore for FileStore {
    fn load(&self, key: &str) -> Result<Document, StorageError> {
        let path = self.path_for(key)?;
        if !path.is_file() {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }
        open(path)
    }

    fn save(&mut self, key: &str, doc: &mut Document) -> Result<(), StorageError> {
        save(doc, self.path_for(key)?)
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if !path.is_file() {
            return Err(StorageError::NotFound {
                key: key.to_string(),
            });
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    if !name.ends_with(".tmp") {
                        keys.push(name.to_string());
                    }
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_open_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.xml");
        let mut doc = Document::default();
        save(&mut doc, &path).unwrap();
        let back = open(&path).unwrap();
        assert_eq!(back.outline(), doc.outline());
        assert!(!dir.path().join("graph.xml.tmp").exists());
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        match open(dir.path().join("nope.xml")) {
            Err(StorageError::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn store_lists_saved_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("docs")).unwrap();
        let mut doc = Document::default();
        store.save("b.xml", &mut doc).unwrap();
        store.save("a.xml", &mut doc).unwrap();
        assert_eq!(store.list().unwrap(), vec!["a.xml", "b.xml"]);
        assert!(store.exists("a.xml").unwrap());
        store.delete("a.xml").unwrap();
        assert_eq!(store.list().unwrap(), vec!["b.xml"]);
        assert!(store.load("b.xml").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.load("../escape"),
            Err(StorageError::NotFound { .. })
        ));
    }
}
