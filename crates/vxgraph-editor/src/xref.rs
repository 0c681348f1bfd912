//! Cross-reference index: reference id to live document and graph state.
//!
//! [`Xref`] is derived data. The synchronizer clears and repopulates it on
//! every full rebuild; mutations only read it and then mark it dirty.
//! Entries are created on their first [`Xref::update`] and later updates
//! leave unset fields alone.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::kernels::{Direction, ParamState};
use vxgraph_core::tag::ElementKind;

use crate::error::EditError;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Identifies one derived graph: the global graph or the graph element with
/// the given reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GraphKey {
    Globals,
    Graph(RefId),
}

/// Structural owner of a registered element, read off its document parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Direct child of the document root.
    Root,
    /// Direct child of a graph element.
    Graph(RefId),
    /// Structural child of another data object.
    Object(RefId),
}

/// One node parameter position: the node's reference and the parameter
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParamLink {
    pub node: RefId,
    pub index: u32,
}

impl fmt::Display for ParamLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.index)
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Everything known about one referenced element.
#[derive(Debug, Clone)]
pub struct XrefEntry {
    pub elem: ElemId,
    pub owner: Owner,
    pub kind: ElementKind,
    pub name: String,
    /// Derived graphs that show (or showed, before view cleanup) this entry.
    pub graphs: BTreeSet<GraphKey>,
    pub readers: SmallVec<[ParamLink; 4]>,
    pub writer: Option<ParamLink>,
    pub immutable: bool,
    pub is_child: bool,
    pub is_parent: bool,
    /// Node entries only: the `is_replicated` flag.
    pub replicated: bool,
    /// Node entries only: the qualified kernel name.
    pub kernel: Option<String>,
    /// First element shown when paging through large array contents.
    pub data_cursor: usize,
    virtual_cache: Cell<Option<bool>>,
}

impl XrefEntry {
    fn new(elem: ElemId, owner: Owner, kind: ElementKind) -> Self {
        XrefEntry {
            elem,
            owner,
            kind,
            name: String::new(),
            graphs: BTreeSet::new(),
            readers: SmallVec::new(),
            writer: None,
            immutable: false,
            is_child: false,
            is_parent: false,
            replicated: false,
            kernel: None,
            data_cursor: 0,
            virtual_cache: Cell::new(None),
        }
    }

    pub fn is_data(&self) -> bool {
        self.kind.is_data()
    }

    /// Readers followed by the writer, if any.
    pub fn connections(&self) -> impl Iterator<Item = ParamLink> + '_ {
        self.readers.iter().copied().chain(self.writer)
    }
}

/// Partial update for an [`XrefEntry`]. Unset fields are left unchanged;
/// `graph` and `reader` add to their sets.
#[derive(Debug, Clone, Default)]
pub struct XrefUpdate {
    elem: Option<ElemId>,
    owner: Option<Owner>,
    kind: Option<ElementKind>,
    name: Option<String>,
    graph: Option<GraphKey>,
    reader: Option<ParamLink>,
    writer: Option<ParamLink>,
    immutable: Option<bool>,
    is_child: Option<bool>,
    is_parent: Option<bool>,
    replicated: Option<bool>,
    kernel: Option<String>,
}

impl XrefUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything a first update must carry.
    pub fn register(elem: ElemId, owner: Owner, kind: ElementKind) -> Self {
        XrefUpdate {
            elem: Some(elem),
            owner: Some(owner),
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn graph(mut self, graph: GraphKey) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn reader(mut self, link: ParamLink) -> Self {
        self.reader = Some(link);
        self
    }

    pub fn writer(mut self, link: ParamLink) -> Self {
        self.writer = Some(link);
        self
    }

    pub fn immutable(mut self, flag: bool) -> Self {
        self.immutable = Some(flag);
        self
    }

    pub fn is_child(mut self, flag: bool) -> Self {
        self.is_child = Some(flag);
        self
    }

    pub fn is_parent(mut self, flag: bool) -> Self {
        self.is_parent = Some(flag);
        self
    }

    pub fn replicated(mut self, flag: bool) -> Self {
        self.replicated = Some(flag);
        self
    }

    pub fn kernel(mut self, kernel: impl Into<String>) -> Self {
        self.kernel = Some(kernel.into());
        self
    }
}

/// A `parameter` element of a node, resolved against its kernel signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamEntry {
    pub elem: ElemId,
    /// Data object bound to this position.
    pub object: RefId,
    /// Graph containing the node.
    pub graph: RefId,
    pub name: String,
    pub direction: Direction,
    pub state: ParamState,
    pub replicate: bool,
}

/// A graph-level `parameter` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphParamEntry {
    pub elem: ElemId,
    pub graph: RefId,
    pub index: u32,
    pub link: ParamLink,
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

/// The cross-reference index with its two dirty flags.
#[derive(Debug, Clone)]
pub struct Xref {
    entries: BTreeMap<RefId, XrefEntry>,
    params: BTreeMap<ParamLink, ParamEntry>,
    graph_params: BTreeMap<(RefId, u32), GraphParamEntry>,
    document_dirty: bool,
    graph_dirty: BTreeSet<GraphKey>,
}

impl Default for Xref {
    fn default() -> Self {
        Self::new()
    }
}

impl Xref {
    /// An empty index, document-dirty so the first access triggers a build.
    pub fn new() -> Self {
        Xref {
            entries: BTreeMap::new(),
            params: BTreeMap::new(),
            graph_params: BTreeMap::new(),
            document_dirty: true,
            graph_dirty: BTreeSet::new(),
        }
    }

    /// Drops every entry. Dirty flags are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.params.clear();
        self.graph_params.clear();
    }

    pub fn get(&self, reference: RefId) -> Option<&XrefEntry> {
        self.entries.get(&reference)
    }

    /// Like [`Xref::get`] but an unknown reference is an error.
    pub fn entry(&self, reference: RefId) -> Result<&XrefEntry, EditError> {
        self.entries
            .get(&reference)
            .ok_or_else(|| EditError::reference(format!("no object with reference {reference}")))
    }

    pub fn contains(&self, reference: RefId) -> bool {
        self.entries.contains_key(&reference)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RefId, &XrefEntry)> {
        self.entries.iter().map(|(r, e)| (*r, e))
    }

    /// Applies `update`, creating the entry when it does not exist yet.
    pub fn update(
        &mut self,
        reference: RefId,
        update: XrefUpdate,
    ) -> Result<&mut XrefEntry, EditError> {
        use std::collections::btree_map::Entry;

        let entry = match self.entries.entry(reference) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => match (update.elem, update.owner, update.kind) {
                (Some(elem), Some(owner), Some(kind)) => {
                    slot.insert(XrefEntry::new(elem, owner, kind))
                }
                _ => {
                    return Err(EditError::reference(format!(
                        "first update of reference {reference} lacks element, owner or kind"
                    )))
                }
            },
        };

        if let Some(elem) = update.elem {
            entry.elem = elem;
        }
        if let Some(owner) = update.owner {
            if owner != entry.owner {
                entry.virtual_cache.set(None);
            }
            entry.owner = owner;
        }
        if let Some(kind) = update.kind {
            entry.kind = kind;
        }
        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(graph) = update.graph {
            entry.graphs.insert(graph);
        }
        if let Some(reader) = update.reader {
            if !entry.readers.contains(&reader) {
                entry.readers.push(reader);
            }
        }
        if let Some(writer) = update.writer {
            entry.writer = Some(writer);
        }
        if let Some(flag) = update.immutable {
            entry.immutable = flag;
        }
        if let Some(flag) = update.is_child {
            entry.is_child = flag;
        }
        if let Some(flag) = update.is_parent {
            entry.is_parent = flag;
        }
        if let Some(flag) = update.replicated {
            entry.replicated = flag;
        }
        if let Some(kernel) = update.kernel {
            entry.kernel = Some(kernel);
        }
        Ok(entry)
    }

    pub fn remove(&mut self, reference: RefId) -> Option<XrefEntry> {
        let removed = self.entries.remove(&reference);
        if removed.is_some() {
            self.invalidate_virtual();
        }
        removed
    }

    /// Readers and writer of `reference`.
    pub fn connections(&self, reference: RefId) -> Vec<ParamLink> {
        self.entries
            .get(&reference)
            .map(|e| e.connections().collect())
            .unwrap_or_default()
    }

    pub fn set_data_cursor(&mut self, reference: RefId, cursor: usize) -> Result<(), EditError> {
        let entry = self
            .entries
            .get_mut(&reference)
            .ok_or_else(|| EditError::reference(format!("no object with reference {reference}")))?;
        entry.data_cursor = cursor;
        Ok(())
    }

    // -- derived predicates --

    /// True when the object lives inside one graph: its owner is a graph,
    /// or it is the structural child of a virtual object. Cached until the
    /// next [`Xref::mark_dirty`].
    pub fn is_virtual(&self, reference: RefId) -> bool {
        let Some(entry) = self.entries.get(&reference) else {
            return false;
        };
        if let Some(cached) = entry.virtual_cache.get() {
            return cached;
        }
        let answer = match entry.owner {
            Owner::Root => false,
            Owner::Graph(_) => true,
            Owner::Object(parent) if parent != reference => self.is_virtual(parent),
            Owner::Object(_) => false,
        };
        entry.virtual_cache.set(Some(answer));
        answer
    }

    pub fn is_child(&self, reference: RefId) -> bool {
        self.entries.get(&reference).is_some_and(|e| e.is_child)
    }

    pub fn is_parent(&self, reference: RefId) -> bool {
        self.entries.get(&reference).is_some_and(|e| e.is_parent)
    }

    pub fn is_immutable(&self, reference: RefId) -> bool {
        self.entries.get(&reference).is_some_and(|e| e.immutable)
    }

    /// The graph a virtual object belongs to, following structural owners.
    pub fn home_graph(&self, reference: RefId) -> Option<RefId> {
        let mut current = reference;
        for _ in 0..=self.entries.len() {
            match self.entries.get(&current)?.owner {
                Owner::Root => return None,
                Owner::Graph(graph) => return Some(graph),
                Owner::Object(parent) => current = parent,
            }
        }
        None
    }

    /// Walks structural owners up to the outermost object that is not a
    /// structural child.
    pub fn structural_root(&self, reference: RefId) -> RefId {
        let mut current = reference;
        for _ in 0..=self.entries.len() {
            match self.entries.get(&current) {
                Some(entry) if entry.is_child => match entry.owner {
                    Owner::Object(parent) => current = parent,
                    _ => break,
                },
                _ => break,
            }
        }
        current
    }

    // -- parameter links --

    pub fn insert_param(&mut self, link: ParamLink, entry: ParamEntry) {
        self.params.insert(link, entry);
    }

    pub fn param(&self, link: ParamLink) -> Option<&ParamEntry> {
        self.params.get(&link)
    }

    /// Every node parameter link, in (node, index) order.
    pub fn params(&self) -> impl Iterator<Item = (ParamLink, &ParamEntry)> {
        self.params.iter().map(|(l, p)| (*l, p))
    }

    /// Parameter links of one node, in index order.
    pub fn params_of(&self, node: RefId) -> impl Iterator<Item = (ParamLink, &ParamEntry)> {
        let start = ParamLink { node, index: 0 };
        let end = ParamLink {
            node,
            index: u32::MAX,
        };
        self.params.range(start..=end).map(|(l, p)| (*l, p))
    }

    pub fn insert_graph_param(&mut self, entry: GraphParamEntry) {
        self.graph_params.insert((entry.graph, entry.index), entry);
    }

    /// Graph parameters of one graph, in index order.
    pub fn graph_params(&self, graph: RefId) -> impl Iterator<Item = &GraphParamEntry> {
        self.graph_params
            .range((graph, 0)..=(graph, u32::MAX))
            .map(|(_, gp)| gp)
    }

    pub fn all_graph_params(&self) -> impl Iterator<Item = &GraphParamEntry> {
        self.graph_params.values()
    }

    /// True when some graph parameter is bound to `object`.
    pub fn feeds_graph_param(&self, object: RefId) -> bool {
        self.graph_params
            .values()
            .any(|gp| self.params.get(&gp.link).is_some_and(|p| p.object == object))
    }

    // -- dirty flags --

    pub fn is_document_dirty(&self) -> bool {
        self.document_dirty
    }

    /// Forces a full rebuild on next access and drops cached predicates.
    pub fn mark_dirty(&mut self) {
        self.document_dirty = true;
        self.invalidate_virtual();
    }

    pub fn clear_document_dirty(&mut self) {
        self.document_dirty = false;
    }

    pub fn mark_graph_dirty(&mut self, graph: GraphKey) {
        self.graph_dirty.insert(graph);
    }

    pub fn is_graph_dirty(&self, graph: GraphKey) -> bool {
        self.graph_dirty.contains(&graph)
    }

    /// Returns and clears the per-graph dirty set.
    pub fn take_graph_dirty(&mut self) -> Vec<GraphKey> {
        std::mem::take(&mut self.graph_dirty).into_iter().collect()
    }

    fn invalidate_virtual(&self) {
        for entry in self.entries.values() {
            entry.virtual_cache.set(None);
        }
    }
}
