//! The mutable document tree.
//!
//! A [`Document`] is an arena of [`Element`]s addressed by [`ElemId`]. Each
//! element carries its qualified name, ordered string attributes, an optional
//! text payload and ordered children. Elements whose `reference` attribute is
//! their identity (everything except parameter links) are indexed by
//! [`RefId`] so lookups do not walk the tree.
//!
//! Ownership is explicit: parent pointers live in the arena, so "which
//! container or graph owns this object" is a walk over [`Document::ancestors`]
//! rather than a search.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::tag::{DataTag, ElementKind};

use crate::error::StorageError;
use crate::names::NameTable;

pub const ATTR_REFERENCE: &str = "reference";
pub const ATTR_REFERENCES: &str = "references";
pub const ATTR_NAME: &str = "name";
pub const ATTR_NODE: &str = "node";
pub const ATTR_INDEX: &str = "index";
pub const ATTR_PARAMETER: &str = "parameter";
pub const ATTR_REPLICATE_FLAG: &str = "replicate_flag";
pub const ATTR_IS_REPLICATED: &str = "is_replicated";
pub const ATTR_BORDERMODE: &str = "bordermode";

/// Reserved name of the global scope.
pub const GLOBALS_NAME: &str = ".globals";

const ROOT_NAME: &str = "openvx";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_NAMESPACE: &str = "https://www.khronos.org/registry/vx/schema";
const SCHEMA_LOCATION: &str =
    "https://www.khronos.org/registry/vx/schema openvx-1-0.xsd";

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    attrs: IndexMap<String, String>,
    text: Option<String>,
    parent: Option<ElemId>,
    children: Vec<ElemId>,
}

impl Element {
    fn new(name: String) -> Self {
        Element {
            name,
            attrs: IndexMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Qualified name as written in the document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without any namespace prefix.
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn kind(&self) -> ElementKind {
        ElementKind::from_local_name(self.local_name())
    }

    pub fn data_tag(&self) -> Option<DataTag> {
        self.kind().data_tag()
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn parent(&self) -> Option<ElemId> {
        self.parent
    }

    pub fn children(&self) -> &[ElemId] {
        &self.children
    }

    /// Parsed `reference` attribute.
    pub fn reference(&self) -> Option<RefId> {
        self.attr(ATTR_REFERENCE).and_then(|r| r.parse().ok())
    }

    /// Whether `reference` names this element rather than pointing elsewhere.
    pub fn carries_identity(&self) -> bool {
        self.kind() != ElementKind::Parameter
    }
}

/// An ordered, attributed element tree plus its name table.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Option<Element>>,
    root: ElemId,
    by_ref: HashMap<RefId, ElemId>,
    names: NameTable,
}

impl Document {
    /// Creates a document holding only a root element named `root_name`.
    pub fn with_root(root_name: &str) -> Self {
        Document {
            slots: vec![Some(Element::new(root_name.to_string()))],
            root: ElemId(0),
            by_ref: HashMap::new(),
            names: NameTable::new(),
        }
    }

    /// The document a new editing session starts from: the schema root with
    /// one empty graph named `graph_name` and a reference count of 1.
    pub fn new_default(graph_name: &str) -> Self {
        let mut doc = Document::with_root(ROOT_NAME);
        let root = doc.root;
        if let Some(el) = doc.slot_mut(root) {
            el.attrs.insert("xmlns:xsi".into(), XSI_NAMESPACE.into());
            el.attrs.insert("xmlns".into(), SCHEMA_NAMESPACE.into());
            el.attrs
                .insert("xsi:schemaLocation".into(), SCHEMA_LOCATION.into());
            el.attrs.insert(ATTR_REFERENCES.into(), "0".into());
        }
        let graph = doc.create("graph");
        let name = doc.names.allocate(graph_name, graph, None);
        if let Some(el) = doc.slot_mut(graph) {
            el.attrs.insert(ATTR_NAME.into(), name);
        }
        let reference = doc.new_ref();
        if let Some(el) = doc.slot_mut(graph) {
            el.attrs.insert(ATTR_REFERENCE.into(), reference.to_string());
        }
        doc.attach_unchecked(root, graph);
        doc.by_ref.insert(reference, graph);
        doc
    }

    pub fn root(&self) -> ElemId {
        self.root
    }

    // -----------------------------------------------------------------------
    // Element access
    // -----------------------------------------------------------------------

    pub fn element(&self, id: ElemId) -> Option<&Element> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn get(&self, id: ElemId) -> Result<&Element, StorageError> {
        self.element(id)
            .ok_or(StorageError::ElementNotFound { elem: id })
    }

    fn slot_mut(&mut self, id: ElemId) -> Option<&mut Element> {
        self.slots.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    fn get_mut(&mut self, id: ElemId) -> Result<&mut Element, StorageError> {
        self.slot_mut(id)
            .ok_or(StorageError::ElementNotFound { elem: id })
    }

    pub fn contains(&self, id: ElemId) -> bool {
        self.element(id).is_some()
    }

    /// Whether `id` is live and reachable from the root.
    pub fn is_attached(&self, id: ElemId) -> bool {
        id == self.root || (self.contains(id) && self.ancestors(id).any(|a| a == self.root))
    }

    pub fn kind(&self, id: ElemId) -> ElementKind {
        self.element(id).map_or(ElementKind::Other, Element::kind)
    }

    pub fn data_tag(&self, id: ElemId) -> Option<DataTag> {
        self.kind(id).data_tag()
    }

    pub fn local_name(&self, id: ElemId) -> Option<&str> {
        self.element(id).map(Element::local_name)
    }

    pub fn attr(&self, id: ElemId, key: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(key))
    }

    pub fn text(&self, id: ElemId) -> Option<&str> {
        self.element(id).and_then(Element::text)
    }

    pub fn name(&self, id: ElemId) -> Option<&str> {
        self.attr(id, ATTR_NAME)
    }

    pub fn reference(&self, id: ElemId) -> Option<RefId> {
        self.element(id).and_then(Element::reference)
    }

    pub fn parent(&self, id: ElemId) -> Option<ElemId> {
        self.element(id).and_then(Element::parent)
    }

    pub fn children(&self, id: ElemId) -> &[ElemId] {
        self.element(id).map_or(&[], Element::children)
    }

    /// Children of `id` with the given kind, in document order.
    pub fn children_of_kind(
        &self,
        id: ElemId,
        kind: ElementKind,
    ) -> impl Iterator<Item = ElemId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |c| self.kind(*c) == kind)
    }

    /// Data object children of `id`, in document order.
    pub fn data_children(&self, id: ElemId) -> impl Iterator<Item = ElemId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.kind(*c).is_data())
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ElemId) -> impl Iterator<Item = ElemId> + '_ {
        std::iter::successors(self.parent(id), move |p| self.parent(*p))
    }

    /// Strict descendants of `id` in preorder.
    pub fn descendants(&self, id: ElemId) -> Vec<ElemId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElemId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Every element reachable from the root, root first, in preorder.
    pub fn preorder(&self) -> Vec<ElemId> {
        let mut out = vec![self.root];
        out.extend(self.descendants(self.root));
        out
    }

    /// True when `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: ElemId, id: ElemId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Position of `id` among its parent's children.
    pub fn position(&self, id: ElemId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|c| *c == id)
    }

    /// Number of live elements, attached or not.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -----------------------------------------------------------------------
    // Structural edits
    // -----------------------------------------------------------------------

    /// Creates a detached element. `local` is qualified with the root's
    /// namespace prefix, if the root has one.
    pub fn create(&mut self, local: &str) -> ElemId {
        let name = match self
            .element(self.root)
            .and_then(|r| r.name().split_once(':'))
        {
            Some((prefix, _)) => format!("{prefix}:{local}"),
            None => local.to_string(),
        };
        let id = ElemId(self.slots.len() as u32);
        self.slots.push(Some(Element::new(name)));
        id
    }

    /// Creates an element and appends it to `parent`.
    pub fn create_child(&mut self, parent: ElemId, local: &str) -> Result<ElemId, StorageError> {
        self.get(parent)?;
        let id = self.create(local);
        self.attach_unchecked(parent, id);
        Ok(id)
    }

    /// Appends a detached element as the last child of `parent`.
    pub fn append(&mut self, parent: ElemId, child: ElemId) -> Result<(), StorageError> {
        let at = self.children(parent).len();
        self.insert(parent, at, child)
    }

    /// Inserts a detached element at position `at` among `parent`'s children.
    pub fn insert(&mut self, parent: ElemId, at: usize, child: ElemId) -> Result<(), StorageError> {
        self.get(parent)?;
        let attached = self.get(child)?.parent.is_some();
        let reason = if attached {
            Some("element is already attached")
        } else if child == parent || child == self.root || self.is_ancestor(child, parent) {
            Some("element would contain itself")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(StorageError::InvalidAttach {
                child,
                parent,
                reason: reason.to_string(),
            });
        }
        let siblings = &mut self.get_mut(parent)?.children;
        let at = at.min(siblings.len());
        siblings.insert(at, child);
        self.get_mut(child)?.parent = Some(parent);
        self.index_subtree(child);
        Ok(())
    }

    fn attach_unchecked(&mut self, parent: ElemId, child: ElemId) {
        if let Some(p) = self.slot_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.slot_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Unlinks `id` from its parent, keeping it alive for reattachment.
    pub fn detach(&mut self, id: ElemId) -> Result<(), StorageError> {
        if id == self.root {
            return Err(StorageError::Malformed {
                reason: "the document root cannot be detached".into(),
            });
        }
        let Some(parent) = self.get(id)?.parent else {
            return Ok(());
        };
        self.get_mut(parent)?.children.retain(|c| *c != id);
        self.get_mut(id)?.parent = None;
        Ok(())
    }

    /// Moves `id` (with its subtree) to the end of `new_parent`.
    pub fn move_to(&mut self, id: ElemId, new_parent: ElemId) -> Result<(), StorageError> {
        if new_parent == id || self.is_ancestor(id, new_parent) {
            return Err(StorageError::InvalidAttach {
                child: id,
                parent: new_parent,
                reason: "element would contain itself".into(),
            });
        }
        self.detach(id)?;
        self.append(new_parent, id)
    }

    /// Detaches `id` and frees it and its whole subtree.
    pub fn remove(&mut self, id: ElemId) -> Result<(), StorageError> {
        self.detach(id)?;
        let mut doomed = vec![id];
        doomed.extend(self.descendants(id));
        for d in doomed {
            if let Some(el) = self.slots.get_mut(d.0 as usize).and_then(Option::take) {
                if let Some(name) = el.attr(ATTR_NAME) {
                    self.names.release(name, d);
                }
                if el.carries_identity() {
                    if let Some(r) = el.reference() {
                        if self.by_ref.get(&r) == Some(&d) {
                            self.by_ref.remove(&r);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Deep copy of `id`'s subtree, detached. Names are copied verbatim and
    /// not registered; callers assign fresh names and references.
    pub fn duplicate(&mut self, id: ElemId) -> Result<ElemId, StorageError> {
        let source = self.get(id)?.clone();
        let copy = ElemId(self.slots.len() as u32);
        self.slots.push(Some(Element {
            children: Vec::new(),
            parent: None,
            ..source.clone()
        }));
        for child in source.children {
            let child_copy = self.duplicate(child)?;
            self.attach_unchecked(copy, child_copy);
        }
        Ok(copy)
    }

    // -----------------------------------------------------------------------
    // Attributes and text
    // -----------------------------------------------------------------------

    /// Sets an attribute. Existing keys keep their position.
    pub fn set_attr(
        &mut self,
        id: ElemId,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), StorageError> {
        let value = value.into();
        let el = self.get_mut(id)?;
        let identity = key == ATTR_REFERENCE && el.carries_identity();
        let old = el.attrs.insert(key.to_string(), value.clone());
        if identity {
            if let Some(old) = old.and_then(|o| o.parse::<RefId>().ok()) {
                if self.by_ref.get(&old) == Some(&id) {
                    self.by_ref.remove(&old);
                }
            }
            if let Ok(new) = value.parse::<RefId>() {
                self.by_ref.insert(new, id);
            }
        }
        Ok(())
    }

    /// Sets every `(key, value)` pair. With `overwrite` false only missing
    /// keys are added.
    pub fn set_attrs<'a>(
        &mut self,
        id: ElemId,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
        overwrite: bool,
    ) -> Result<(), StorageError> {
        for (key, value) in attrs {
            if overwrite || self.attr(id, key).is_none() {
                self.set_attr(id, key, value)?;
            }
        }
        Ok(())
    }

    pub fn remove_attr(&mut self, id: ElemId, key: &str) -> Result<Option<String>, StorageError> {
        let el = self.get_mut(id)?;
        let identity = key == ATTR_REFERENCE && el.carries_identity();
        let old = el.attrs.shift_remove(key);
        if identity {
            if let Some(r) = old.as_deref().and_then(|o| o.parse::<RefId>().ok()) {
                if self.by_ref.get(&r) == Some(&id) {
                    self.by_ref.remove(&r);
                }
            }
        }
        Ok(old)
    }

    pub fn set_text(&mut self, id: ElemId, text: Option<String>) -> Result<(), StorageError> {
        self.get_mut(id)?.text = text;
        Ok(())
    }

    /// Renames the element itself, keeping the namespace prefix.
    pub fn set_local_name(&mut self, id: ElemId, local: &str) -> Result<(), StorageError> {
        let el = self.get_mut(id)?;
        el.name = match el.name.split_once(':') {
            Some((prefix, _)) => format!("{prefix}:{local}"),
            None => local.to_string(),
        };
        Ok(())
    }

    // -----------------------------------------------------------------------
    // References
    // -----------------------------------------------------------------------

    /// The element whose identity is `reference`.
    pub fn by_reference(&self, reference: RefId) -> Option<ElemId> {
        self.by_ref
            .get(&reference)
            .copied()
            .filter(|id| self.contains(*id))
    }

    /// Count stored on the root's `references` attribute.
    pub fn reference_count(&self) -> u32 {
        self.attr(self.root, ATTR_REFERENCES)
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Hands out the next reference id and bumps the stored count. Valid
    /// as long as the count exceeds every id in use, which fixup guarantees.
    pub fn new_ref(&mut self) -> RefId {
        let next = self.reference_count();
        let root = self.root;
        if let Some(el) = self.slot_mut(root) {
            el.attrs
                .insert(ATTR_REFERENCES.into(), (next + 1).to_string());
        }
        RefId(next)
    }

    /// Rebuilds the reference index from the attached tree.
    pub fn reindex(&mut self) {
        self.by_ref.clear();
        self.index_subtree(self.root);
    }

    fn index_subtree(&mut self, id: ElemId) {
        let mut all = vec![id];
        all.extend(self.descendants(id));
        for e in all {
            if let Some(el) = self.element(e) {
                if el.carries_identity() {
                    if let Some(r) = el.reference() {
                        self.by_ref.insert(r, e);
                    }
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Names
    // -----------------------------------------------------------------------

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Forgets every registered name. Elements keep their `name` attributes.
    pub fn clear_names(&mut self) {
        self.names.clear();
    }

    /// Gives `id` a unique name derived from `base` and returns it.
    pub fn assign_name(&mut self, id: ElemId, base: &str) -> Result<String, StorageError> {
        let previous = self.get(id)?.attr(ATTR_NAME).map(str::to_string);
        let name = self.names.allocate(base, id, previous.as_deref());
        self.get_mut(id)?.attrs.insert(ATTR_NAME.into(), name.clone());
        Ok(name)
    }

    /// Registers `id`'s current name (or its tag when unnamed), renaming it
    /// if another element already holds that name.
    pub fn ensure_name(&mut self, id: ElemId) -> Result<String, StorageError> {
        let el = self.get(id)?;
        let base = el
            .attr(ATTR_NAME)
            .unwrap_or_else(|| el.local_name())
            .to_string();
        self.assign_name(id, &base)
    }

    // -----------------------------------------------------------------------
    // Parser support
    // -----------------------------------------------------------------------

    pub(crate) fn push_parsed(
        &mut self,
        parent: ElemId,
        name: String,
        attrs: IndexMap<String, String>,
    ) -> ElemId {
        let id = ElemId(self.slots.len() as u32);
        let mut el = Element::new(name);
        el.attrs = attrs;
        self.slots.push(Some(el));
        self.attach_unchecked(parent, id);
        id
    }

    pub(crate) fn set_root_attrs(&mut self, attrs: IndexMap<String, String>) {
        let root = self.root;
        if let Some(el) = self.slot_mut(root) {
            el.attrs = attrs;
        }
    }

    pub(crate) fn append_text(&mut self, id: ElemId, text: &str) {
        if let Some(el) = self.slot_mut(id) {
            match &mut el.text {
                Some(existing) => existing.push_str(text),
                None => el.text = Some(text.to_string()),
            }
        }
    }

    /// Indented outline of the tree: one line per element with its name and
    /// identity attributes. Stable across runs, used for diagnostics.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(self.root, 0, &mut out);
        out
    }

    fn outline_into(&self, id: ElemId, depth: usize, out: &mut String) {
        let Some(el) = self.element(id) else { return };
        out.push_str(&"  ".repeat(depth));
        out.push_str(el.local_name());
        for key in [ATTR_NAME, ATTR_REFERENCE, ATTR_REFERENCES, ATTR_NODE, ATTR_INDEX] {
            if let Some(v) = el.attr(key) {
                out.push_str(&format!(" {key}={v}"));
            }
        }
        if let Some(text) = el.text() {
            out.push_str(&format!(" \"{text}\""));
        }
        out.push('\n');
        for child in el.children() {
            self.outline_into(*child, depth + 1, out);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new_default("graph")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_shape() {
        let doc = Document::default();
        let root = doc.root();
        assert_eq!(doc.kind(root), ElementKind::Root);
        assert_eq!(doc.reference_count(), 1);
        let graphs: Vec<_> = doc.children_of_kind(root, ElementKind::Graph).collect();
        assert_eq!(graphs.len(), 1);
        assert_eq!(doc.name(graphs[0]), Some("graph"));
        assert_eq!(doc.reference(graphs[0]), Some(RefId(0)));
        assert_eq!(doc.by_reference(RefId(0)), Some(graphs[0]));
        assert_eq!(
            doc.attr(root, "xsi:schemaLocation"),
            Some("https://www.khronos.org/registry/vx/schema openvx-1-0.xsd")
        );
    }

    #[test]
    fn new_ref_bumps_count() {
        let mut doc = Document::default();
        assert_eq!(doc.new_ref(), RefId(1));
        assert_eq!(doc.new_ref(), RefId(2));
        assert_eq!(doc.reference_count(), 3);
    }

    #[test]
    fn create_append_and_remove() {
        let mut doc = Document::default();
        let root = doc.root();
        let image = doc.create_child(root, "image").unwrap();
        doc.set_attr(image, ATTR_REFERENCE, "7").unwrap();
        let roi = doc.create_child(image, "roi").unwrap();
        doc.set_attr(roi, ATTR_REFERENCE, "8").unwrap();
        assert_eq!(doc.by_reference(RefId(8)), Some(roi));
        assert!(doc.is_ancestor(image, roi));
        assert_eq!(doc.descendants(root).len(), 3);

        doc.remove(image).unwrap();
        assert!(!doc.contains(roi));
        assert_eq!(doc.by_reference(RefId(7)), None);
        assert_eq!(doc.by_reference(RefId(8)), None);
    }

    #[test]
    fn parameter_reference_is_not_identity() {
        let mut doc = Document::default();
        let graph = doc.children(doc.root())[0];
        let node = doc.create_child(graph, "node").unwrap();
        doc.set_attr(node, ATTR_REFERENCE, "1").unwrap();
        let param = doc.create_child(node, "parameter").unwrap();
        doc.set_attr(param, ATTR_REFERENCE, "0").unwrap();
        assert_eq!(doc.by_reference(RefId(0)), Some(graph));
        assert_eq!(doc.by_reference(RefId(1)), Some(node));
    }

    #[test]
    fn move_rejects_cycles() {
        let mut doc = Document::default();
        let root = doc.root();
        let outer = doc.create_child(root, "delay").unwrap();
        let inner = doc.create_child(outer, "image").unwrap();
        match doc.move_to(outer, inner) {
            Err(StorageError::InvalidAttach { .. }) => {}
            other => panic!("expected InvalidAttach, got {:?}", other),
        }
        doc.move_to(inner, root).unwrap();
        assert_eq!(doc.parent(inner), Some(root));
        assert!(doc.children(outer).is_empty());
    }

    #[test]
    fn detached_elements_cannot_be_attached_twice() {
        let mut doc = Document::default();
        let root = doc.root();
        let a = doc.create_child(root, "scalar").unwrap();
        assert!(matches!(
            doc.append(root, a),
            Err(StorageError::InvalidAttach { .. })
        ));
        assert!(doc.detach(root).is_err());
    }

    #[test]
    fn names_are_deduplicated_per_document() {
        let mut doc = Document::default();
        let root = doc.root();
        let a = doc.create_child(root, "image").unwrap();
        let b = doc.create_child(root, "image").unwrap();
        assert_eq!(doc.ensure_name(a).unwrap(), "image");
        assert_eq!(doc.ensure_name(b).unwrap(), "image_0");
        // another document starts from an empty table
        let mut other = Document::default();
        let c = other.create_child(other.root(), "image").unwrap();
        assert_eq!(other.ensure_name(c).unwrap(), "image");
    }

    #[test]
    fn duplicate_copies_subtree_detached() {
        let mut doc = Document::default();
        let root = doc.root();
        let tensor = doc.create_child(root, "tensor").unwrap();
        doc.set_attr(tensor, "number_of_dims", "2").unwrap();
        doc.create_child(tensor, "dimension").unwrap();
        doc.create_child(tensor, "dimension").unwrap();
        let copy = doc.duplicate(tensor).unwrap();
        assert_eq!(doc.parent(copy), None);
        assert_eq!(doc.children(copy).len(), 2);
        assert_eq!(doc.attr(copy, "number_of_dims"), Some("2"));
        doc.append(root, copy).unwrap();
        assert_eq!(doc.children(root).len(), 3);
    }

    #[test]
    fn prefixed_roots_prefix_new_elements() {
        let mut doc = Document::with_root("vx:openvx");
        let graph = doc.create("graph");
        assert_eq!(doc.get(graph).unwrap().name(), "vx:graph");
        assert_eq!(doc.kind(graph), ElementKind::Graph);
    }

    #[test]
    fn outline_lists_identity_attributes() {
        let doc = Document::default();
        assert_eq!(
            doc.outline(),
            "openvx references=1\n  graph name=graph reference=0\n"
        );
    }
}
