//! Deterministic content hashing with blake3.
//!
//! - [`hash_xml`] / [`hash_document`]: digest of the serialized document,
//!   used to spot identical history checkpoints.
//! - [`hash_shape`]: Merkle digest of an element subtree that ignores the
//!   identity attributes `reference` and `name`. Two containers with equal
//!   shape hashes have the same tags, child counts and attribute values all
//!   the way down.
//!
//! Attributes are hashed in key order so attribute order never matters.

use crate::document::{Document, ATTR_NAME, ATTR_REFERENCE};
use crate::error::StorageError;
use vxgraph_core::id::ElemId;

/// Digest of serialized XML text.
pub fn hash_xml(xml: &str) -> blake3::Hash {
    blake3::hash(xml.as_bytes())
}

/// Digest of the document as it would be written.
pub fn hash_document(doc: &Document) -> Result<blake3::Hash, StorageError> {
    Ok(hash_xml(&doc.to_xml()?))
}

/// Shape digest of `id`'s subtree, ignoring `reference` and `name`.
pub fn hash_shape(doc: &Document, id: ElemId) -> Result<blake3::Hash, StorageError> {
    let el = doc.get(id)?;
    let mut hasher = blake3::Hasher::new();
    hasher.update(el.local_name().as_bytes());
    hasher.update(&[0]);

    let mut attrs: Vec<(&String, &String)> = el
        .attrs()
        .iter()
        .filter(|(k, _)| k.as_str() != ATTR_REFERENCE && k.as_str() != ATTR_NAME)
        .collect();
    attrs.sort();
    for (key, value) in attrs {
        hasher.update(key.as_bytes());
        hasher.update(&[1]);
        hasher.update(value.as_bytes());
        hasher.update(&[2]);
    }
    if let Some(text) = el.text() {
        hasher.update(text.as_bytes());
    }
    hasher.update(&(el.children().len() as u32).to_le_bytes());
    for child in el.children() {
        hasher.update(hash_shape(doc, *child)?.as_bytes());
    }
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay_of_images(doc: &mut Document, first_ref: u32, count: usize, width: &str) -> ElemId {
        let root = doc.root();
        let delay = doc.create_child(root, "delay").unwrap();
        doc.set_attr(delay, "count", count.to_string()).unwrap();
        doc.set_attr(delay, ATTR_REFERENCE, first_ref.to_string()).unwrap();
        for i in 0..count {
            let img = doc.create_child(delay, "image").unwrap();
            doc.set_attr(img, ATTR_REFERENCE, (first_ref + 1 + i as u32).to_string())
                .unwrap();
            doc.set_attr(img, "width", width).unwrap();
            doc.set_attr(img, ATTR_NAME, format!("img{first_ref}_{i}")).unwrap();
        }
        delay
    }

    #[test]
    fn document_hash_is_deterministic() {
        let doc = Document::default();
        assert_eq!(hash_document(&doc).unwrap(), hash_document(&doc.clone()).unwrap());
        let mut changed = doc.clone();
        changed.new_ref();
        assert_ne!(hash_document(&doc).unwrap(), hash_document(&changed).unwrap());
    }

    #[test]
    fn shape_ignores_identity() {
        let mut doc = Document::default();
        let a = delay_of_images(&mut doc, 10, 2, "32");
        let b = delay_of_images(&mut doc, 20, 2, "32");
        assert_eq!(hash_shape(&doc, a).unwrap(), hash_shape(&doc, b).unwrap());
    }

    #[test]
    fn shape_sees_counts_and_attributes() {
        let mut doc = Document::default();
        let a = delay_of_images(&mut doc, 10, 2, "32");
        let b = delay_of_images(&mut doc, 20, 3, "32");
        let c = delay_of_images(&mut doc, 30, 2, "64");
        let a_hash = hash_shape(&doc, a).unwrap();
        assert_ne!(a_hash, hash_shape(&doc, b).unwrap());
        assert_ne!(a_hash, hash_shape(&doc, c).unwrap());
    }

    #[test]
    fn shape_ignores_attribute_order() {
        let mut doc = Document::default();
        let root = doc.root();
        let a = doc.create_child(root, "image").unwrap();
        doc.set_attr(a, "width", "1").unwrap();
        doc.set_attr(a, "height", "2").unwrap();
        let b = doc.create_child(root, "image").unwrap();
        doc.set_attr(b, "height", "2").unwrap();
        doc.set_attr(b, "width", "1").unwrap();
        assert_eq!(hash_shape(&doc, a).unwrap(), hash_shape(&doc, b).unwrap());
    }
}
