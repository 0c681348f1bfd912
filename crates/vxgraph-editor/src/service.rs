//! EditorService: the single coordinator of an editing session.
//!
//! Owns the document, both registries, the cross-reference index, the
//! derived graphs and the undo history. Every mutation goes through
//! [`EditorService::mutate`]: the document is checkpointed, the operation
//! runs, and on failure the checkpoint is restored so a refused mutation
//! never leaves a half-edited document. Successful mutations are followed
//! by a full rebuild; references an operation returns are translated to
//! their value after the rebuild's renumbering.

use std::path::Path;

use vxgraph_core::id::RefId;
use vxgraph_core::kernels::KernelRegistry;
use vxgraph_core::tag::DataTag;
use vxgraph_core::type_registry::TypeRegistry;
use vxgraph_storage::{Document, DocumentStore};

use crate::config::EditorConfig;
use crate::error::EditError;
use crate::graph::{DerivedGraph, GraphSet};
use crate::ops::insert::{self, OptionalParameter, Scope};
use crate::ops::merge::{self, MergeOutcome, MismatchPolicy};
use crate::ops::remove::{self, Removal};
use crate::ops::replicate::{self, ReplicationCandidate};
use crate::ops::scope::{self, ScopeChange};
use crate::ops::{rename, EditContext};
use crate::sync::{BuildDiagnostic, GraphSynchronizer};
use crate::undo::{Checkpoint, UndoStack};
use crate::xref::{GraphKey, Xref};

/// The central service coordinating document state, derived graphs,
/// mutations and history.
pub struct EditorService {
    doc: Document,
    types: TypeRegistry,
    kernels: KernelRegistry,
    xref: Xref,
    graphs: GraphSet,
    diagnostics: Vec<BuildDiagnostic>,
    history: UndoStack,
    config: EditorConfig,
}

impl EditorService {
    /// A session on the default document: one empty graph.
    pub fn new(config: EditorConfig) -> Result<Self, EditError> {
        let doc = Document::new_default(&config.default_graph_name);
        Self::from_document(doc, config)
    }

    /// A session on `doc`, built once.
    pub fn from_document(doc: Document, config: EditorConfig) -> Result<Self, EditError> {
        let types = TypeRegistry::new();
        let kernels = KernelRegistry::new(&types);
        let mut service = EditorService {
            doc,
            types,
            kernels,
            xref: Xref::new(),
            graphs: GraphSet::new(),
            diagnostics: Vec::new(),
            history: UndoStack::new(config.max_undo),
            config,
        };
        service.build()?;
        Ok(service)
    }

    pub fn open(path: impl AsRef<Path>, config: EditorConfig) -> Result<Self, EditError> {
        let path = path.as_ref();
        let doc = vxgraph_storage::open(path)?;
        tracing::info!(path = %path.display(), "opened document");
        Self::from_document(doc, config)
    }

    pub fn load(store: &impl DocumentStore, key: &str, config: EditorConfig) -> Result<Self, EditError> {
        let doc = store.load(key)?;
        tracing::info!(key, "loaded document");
        Self::from_document(doc, config)
    }

    /// Writes the document to `path`. A built document already carries dense
    /// references, so the save-time fixup leaves the session valid.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), EditError> {
        let path = path.as_ref();
        self.ensure_built()?;
        vxgraph_storage::save(&mut self.doc, path)?;
        tracing::info!(path = %path.display(), "saved document");
        Ok(())
    }

    pub fn save_to_store(&mut self, store: &mut impl DocumentStore, key: &str) -> Result<(), EditError> {
        self.ensure_built()?;
        store.save(key, &mut self.doc)?;
        tracing::info!(key, "stored document");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Derived state
    // -----------------------------------------------------------------------

    /// Full rebuild of the index and the derived graphs.
    pub fn build(&mut self) -> Result<&[BuildDiagnostic], EditError> {
        let output = GraphSynchronizer::new(self.config.show_virtuals).build(
            &mut self.doc,
            &mut self.types,
            &self.kernels,
            &mut self.xref,
        )?;
        self.graphs = output.graphs;
        self.diagnostics = output.diagnostics;
        Ok(&self.diagnostics)
    }

    /// Rebuilds when the document changed since the last build.
    pub fn ensure_built(&mut self) -> Result<(), EditError> {
        if self.xref.is_document_dirty() {
            self.build()?;
        }
        Ok(())
    }

    /// Relabels the graphs flagged dirty by in-place changes such as
    /// renames. Returns the graphs that were refreshed.
    pub fn refresh(&mut self) -> Vec<GraphKey> {
        GraphSynchronizer::new(self.config.show_virtuals).refresh(&mut self.graphs, &mut self.xref)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn xref(&self) -> &Xref {
        &self.xref
    }

    pub fn graphs(&self) -> &GraphSet {
        &self.graphs
    }

    pub fn graph(&self, name: &str) -> Option<&DerivedGraph> {
        self.graphs.get(name)
    }

    pub fn diagnostics(&self) -> &[BuildDiagnostic] {
        &self.diagnostics
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn kernels(&self) -> &KernelRegistry {
        &self.kernels
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Reference of the graph element named `name`.
    pub fn graph_ref(&self, name: &str) -> Option<RefId> {
        match self.graphs.get(name)?.key() {
            GraphKey::Graph(reference) => Some(reference),
            GraphKey::Globals => None,
        }
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Restores the state before the last mutation. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditError> {
        match self.history.undo(&self.doc)? {
            Some(doc) => self.replace_document(doc).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn redo(&mut self) -> Result<bool, EditError> {
        match self.history.redo(&self.doc)? {
            Some(doc) => self.replace_document(doc).map(|_| true),
            None => Ok(false),
        }
    }

    fn replace_document(&mut self, doc: Document) -> Result<(), EditError> {
        self.doc = doc;
        self.xref.mark_dirty();
        self.build()?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Mutation plumbing
    // -----------------------------------------------------------------------

    /// Runs `op` against the document. The state before it is recorded in
    /// the history only when `op` succeeds and changed something; a failure
    /// restores that state whatever the history depth. On success the
    /// document is left dirty for the caller to rebuild.
    fn mutate<T>(
        &mut self,
        what: &str,
        op: impl FnOnce(&mut EditContext<'_>) -> Result<T, EditError>,
    ) -> Result<T, EditError> {
        self.ensure_built()?;
        let before = Checkpoint::capture(&self.doc)?;
        let result = {
            let mut cx = EditContext {
                doc: &mut self.doc,
                xref: &self.xref,
                graphs: &self.graphs,
                types: &self.types,
                kernels: &self.kernels,
                config: &self.config,
            };
            op(&mut cx)
        };
        match result {
            Ok(value) => {
                if before.matches(&self.doc)? {
                    tracing::debug!(op = what, "mutation changed nothing");
                } else {
                    self.history.record(before);
                    self.xref.mark_dirty();
                    tracing::debug!(op = what, "applied mutation");
                }
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(op = what, kind = ?err.kind(), "refused: {}", err);
                if !before.matches(&self.doc)? {
                    self.replace_document(before.restore()?)?;
                }
                Err(err)
            }
        }
    }

    /// Rebuilds and returns the value `reference` was renumbered to.
    fn settle(&mut self, reference: RefId) -> Result<RefId, EditError> {
        let elem = self
            .doc
            .by_reference(reference)
            .ok_or_else(|| EditError::reference(format!("no element with reference {reference}")))?;
        self.ensure_built()?;
        self.doc
            .reference(elem)
            .ok_or_else(|| EditError::reference(format!("element {elem} lost its reference")))
    }

    fn mutate_ref(
        &mut self,
        what: &str,
        op: impl FnOnce(&mut EditContext<'_>) -> Result<RefId, EditError>,
    ) -> Result<RefId, EditError> {
        let reference = self.mutate(what, op)?;
        self.settle(reference)
    }

    fn mutate_built<T>(
        &mut self,
        what: &str,
        op: impl FnOnce(&mut EditContext<'_>) -> Result<T, EditError>,
    ) -> Result<T, EditError> {
        let value = self.mutate(what, op)?;
        self.ensure_built()?;
        Ok(value)
    }

    fn query<T>(&mut self, op: impl FnOnce(&EditContext<'_>) -> Result<T, EditError>) -> Result<T, EditError> {
        self.ensure_built()?;
        let cx = EditContext {
            doc: &mut self.doc,
            xref: &self.xref,
            graphs: &self.graphs,
            types: &self.types,
            kernels: &self.kernels,
            config: &self.config,
        };
        op(&cx)
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    pub fn insert_graph(&mut self) -> Result<RefId, EditError> {
        self.mutate_ref("insert graph", insert::insert_graph)
    }

    pub fn insert_node(&mut self, graph: RefId, kernel: &str) -> Result<RefId, EditError> {
        self.mutate_ref("insert node", |cx| insert::insert_node(cx, graph, kernel))
    }

    pub fn insert_object(&mut self, scope: Scope, tag: DataTag, count: Option<u32>) -> Result<RefId, EditError> {
        self.mutate_ref("insert object", |cx| insert::insert_object(cx, scope, tag, count))
    }

    pub fn insert_image(&mut self, scope: Scope, format: &str, width: u32, height: u32) -> Result<RefId, EditError> {
        self.mutate_ref("insert image", |cx| insert::insert_image(cx, scope, format, width, height))
    }

    pub fn insert_tensor(
        &mut self,
        scope: Scope,
        dims: &[u32],
        data_type: &str,
        fixed_point_position: i32,
    ) -> Result<RefId, EditError> {
        self.mutate_ref("insert tensor", |cx| {
            insert::insert_tensor(cx, scope, dims, data_type, fixed_point_position)
        })
    }

    pub fn insert_pyramid(&mut self, scope: Scope, levels: u32, scale: f64) -> Result<RefId, EditError> {
        self.mutate_ref("insert pyramid", |cx| insert::insert_pyramid(cx, scope, levels, scale))
    }

    pub fn insert_delay(&mut self, scope: Scope, tag: DataTag, count: u32) -> Result<RefId, EditError> {
        self.mutate_ref("insert delay", |cx| insert::insert_delay(cx, scope, tag, count))
    }

    pub fn insert_object_array(&mut self, scope: Scope, tag: DataTag, count: u32) -> Result<RefId, EditError> {
        self.mutate_ref("insert object array", |cx| {
            insert::insert_object_array(cx, scope, tag, count)
        })
    }

    // -----------------------------------------------------------------------
    // Containers
    // -----------------------------------------------------------------------

    pub fn make_object_array(&mut self, obj: RefId, count: u32) -> Result<RefId, EditError> {
        self.mutate_ref("make object array", |cx| insert::make_object_array(cx, obj, count))
    }

    pub fn make_delay(&mut self, obj: RefId, count: u32) -> Result<RefId, EditError> {
        self.mutate_ref("make delay", |cx| insert::make_delay(cx, obj, count))
    }

    pub fn make_pyramid(&mut self, image: RefId, levels: u32, scale: f64) -> Result<RefId, EditError> {
        self.mutate_ref("make pyramid", |cx| insert::make_pyramid(cx, image, levels, scale))
    }

    /// Changes the size of a delay, object array, pyramid or tensor.
    pub fn resize(&mut self, obj: RefId, count: u32) -> Result<(), EditError> {
        self.mutate_built("resize", |cx| insert::resize(cx, obj, count))
    }

    pub fn set_tensor_dims(&mut self, tensor: RefId, dims: u32) -> Result<(), EditError> {
        self.mutate_built("set tensor dimensions", |cx| insert::set_tensor_dims(cx, tensor, dims))
    }

    // -----------------------------------------------------------------------
    // Parameters
    // -----------------------------------------------------------------------

    pub fn insert_graph_parameter(
        &mut self,
        graph: RefId,
        obj: RefId,
        node: Option<RefId>,
    ) -> Result<u32, EditError> {
        self.mutate_built("insert graph parameter", |cx| {
            insert::insert_graph_parameter(cx, graph, obj, node)
        })
    }

    pub fn remove_graph_parameter(&mut self, graph: RefId, index: u32) -> Result<(), EditError> {
        self.mutate_built("remove graph parameter", |cx| {
            insert::remove_graph_parameter(cx, graph, index)
        })
    }

    pub fn optional_parameters(&mut self, node: RefId) -> Result<Vec<OptionalParameter>, EditError> {
        self.query(|cx| insert::optional_parameters(cx, node))
    }

    pub fn add_optional(&mut self, node: RefId, index: u32) -> Result<RefId, EditError> {
        self.mutate_ref("add optional parameter", |cx| insert::add_optional(cx, node, index))
    }

    pub fn connect_data_node(&mut self, obj: RefId, node: RefId, index: Option<u32>) -> Result<u32, EditError> {
        self.mutate_built("connect data to node", |cx| {
            insert::connect_data_node(cx, obj, node, index)
        })
    }

    // -----------------------------------------------------------------------
    // Scope, replication, merge
    // -----------------------------------------------------------------------

    pub fn promote(&mut self, obj: RefId) -> Result<RefId, EditError> {
        self.mutate_ref("promote", |cx| scope::promote(cx, obj))
    }

    pub fn demote(&mut self, obj: RefId) -> Result<RefId, EditError> {
        self.mutate_ref("demote", |cx| scope::demote(cx, obj))
    }

    pub fn toggle_scope(&mut self, obj: RefId) -> Result<ScopeChange, EditError> {
        self.mutate_built("toggle scope", |cx| scope::toggle_scope(cx, obj))
    }

    pub fn possible_replicates(&mut self, node: RefId) -> Result<Vec<ReplicationCandidate>, EditError> {
        self.query(|cx| replicate::possible_replicates(cx, node))
    }

    /// Replicates the selected parameters of `node`. Returns the replication
    /// count, zero when the selection was empty.
    pub fn replicate(
        &mut self,
        node: RefId,
        params: &[u32],
        count: Option<u32>,
        as_pyramid: bool,
    ) -> Result<u32, EditError> {
        self.mutate_built("replicate", |cx| {
            replicate::replicate(cx, node, params, count, as_pyramid)
        })
    }

    /// Merges two data objects. The outcome's references are valid after the
    /// rebuild; `eliminated` no longer names anything.
    pub fn merge(&mut self, a: RefId, b: RefId, policy: MismatchPolicy) -> Result<MergeOutcome, EditError> {
        let mut outcome = self.mutate("merge", |cx| merge::merge(cx, a, b, policy))?;
        outcome.survivor = self.settle(outcome.survivor)?;
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Removal and renaming
    // -----------------------------------------------------------------------

    pub fn remove(&mut self, reference: RefId) -> Result<Removal, EditError> {
        self.mutate_built("remove", |cx| remove::remove(cx, reference))
    }

    pub fn remove_node(&mut self, node: RefId) -> Result<Removal, EditError> {
        self.mutate_built("remove node", |cx| remove::remove_node(cx, node))
    }

    pub fn remove_data(&mut self, obj: RefId) -> Result<Removal, EditError> {
        self.mutate_built("remove data", |cx| remove::remove_data(cx, obj))
    }

    pub fn remove_graph(&mut self, graph: GraphKey) -> Result<Removal, EditError> {
        self.mutate_built("remove graph", |cx| remove::remove_graph(cx, graph))
    }

    /// Renames an element in place; only the affected graphs are flagged
    /// for a refresh. Returns the name given.
    pub fn rename(&mut self, reference: RefId, name: &str) -> Result<String, EditError> {
        self.ensure_built()?;
        let before = Checkpoint::capture(&self.doc)?;
        match rename::rename(&mut self.doc, &mut self.xref, &mut self.graphs, reference, name) {
            Ok(given) => {
                if !before.matches(&self.doc)? {
                    self.history.record(before);
                }
                Ok(given)
            }
            Err(err) => {
                tracing::warn!(op = "rename", kind = ?err.kind(), "refused: {}", err);
                if !before.matches(&self.doc)? {
                    self.replace_document(before.restore()?)?;
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vxgraph_storage::InMemoryStore;

    const BOX: &str = "org.khronos.openvx.box_3x3";

    fn service() -> EditorService {
        EditorService::new(EditorConfig::default()).unwrap()
    }

    #[test]
    fn refused_mutations_leave_no_trace() {
        let mut svc = service();
        let before = svc.document().outline();
        assert!(svc.insert_node(RefId(0), "org.example.nothing").is_err());
        assert_eq!(svc.document().outline(), before);
        assert!(!svc.history().can_undo());
    }

    #[test]
    fn refused_container_counts_insert_nothing() {
        let config = EditorConfig {
            max_undo: 0,
            ..EditorConfig::default()
        };
        let mut svc = EditorService::new(config).unwrap();
        let before = svc.document().outline();
        assert!(svc.insert_delay(Scope::Global, DataTag::Image, 0).is_err());
        assert!(svc.insert_object_array(Scope::Global, DataTag::Image, 0).is_err());
        assert!(svc.insert_pyramid(Scope::Global, 0, 0.5).is_err());
        assert!(svc.insert_pyramid(Scope::Global, 4, 2.0).is_err());
        assert_eq!(svc.document().outline(), before);
    }

    #[test]
    fn late_failure_rolls_back_without_history() {
        let config = EditorConfig {
            max_undo: 0,
            ..EditorConfig::default()
        };
        let mut svc = EditorService::new(config).unwrap();
        let before = svc.document().outline();
        let result: Result<RefId, EditError> = svc.mutate("half edit", |cx| {
            insert::insert_graph(cx)?;
            Err(EditError::validation("refused after a partial change"))
        });
        match result {
            Err(EditError::Validation { .. }) => {}
            other => panic!("expected Validation, got {:?}", other),
        }
        assert_eq!(svc.document().outline(), before);
        assert!(!svc.xref().is_document_dirty());
        assert_eq!(svc.graphs().len(), 2);
        assert!(!svc.history().can_undo());
    }

    #[test]
    fn late_failure_keeps_earlier_history() {
        let mut svc = service();
        let graph = svc.graph_ref("graph").unwrap();
        svc.insert_node(graph, BOX).unwrap();
        let depth = svc.history().undo_depth();
        let before = svc.document().outline();
        let result: Result<(), EditError> = svc.mutate("half edit", |cx| {
            insert::insert_graph(cx)?;
            Err(EditError::validation("refused after a partial change"))
        });
        assert!(result.is_err());
        assert_eq!(svc.document().outline(), before);
        assert_eq!(svc.history().undo_depth(), depth);
        assert!(svc.undo().unwrap());
        assert_eq!(svc.document().reference_count(), 1);
    }

    #[test]
    fn returned_references_are_current() {
        let mut svc = service();
        let graph = svc.graph_ref("graph").unwrap();
        let node = svc.insert_node(graph, BOX).unwrap();
        let elem = svc.document().by_reference(node).unwrap();
        assert_eq!(svc.document().kind(elem), vxgraph_core::tag::ElementKind::Node);
        assert!(svc.xref().entry(node).unwrap().kernel.is_some());
    }

    #[test]
    fn undo_and_redo_rebuild() {
        let mut svc = service();
        let graph = svc.graph_ref("graph").unwrap();
        svc.insert_node(graph, BOX).unwrap();
        assert_eq!(svc.document().reference_count(), 4);
        assert!(svc.undo().unwrap());
        assert_eq!(svc.document().reference_count(), 1);
        assert_eq!(svc.graph("graph").unwrap().vertex_count(), 0);
        assert!(svc.redo().unwrap());
        assert_eq!(svc.document().reference_count(), 4);
        assert!(!svc.redo().unwrap());
    }

    #[test]
    fn unchanged_documents_drop_their_checkpoint() {
        let mut svc = service();
        let graph = svc.graph_ref("graph").unwrap();
        let node = svc.insert_node(graph, BOX).unwrap();
        let input = svc
            .xref()
            .params_of(node)
            .next()
            .map(|(_, p)| p.object)
            .unwrap();
        let depth = svc.history().undo_depth();
        assert_eq!(svc.remove_data(input).unwrap(), Removal::Unchanged);
        assert_eq!(svc.history().undo_depth(), depth);
    }

    #[test]
    fn renames_refresh_one_graph() {
        let mut svc = service();
        let graph = svc.graph_ref("graph").unwrap();
        svc.refresh();
        assert_eq!(svc.rename(graph, "main").unwrap(), "main");
        assert!(svc.graph("main").is_some());
        let refreshed = svc.refresh();
        assert!(refreshed.contains(&GraphKey::Globals));
        assert!(svc.history().can_undo());
    }

    #[test]
    fn store_round_trip() {
        let mut svc = service();
        let graph = svc.graph_ref("graph").unwrap();
        svc.insert_node(graph, BOX).unwrap();
        let mut store = InMemoryStore::new();
        svc.save_to_store(&mut store, "doc").unwrap();
        let again = EditorService::load(&store, "doc", EditorConfig::default()).unwrap();
        assert_eq!(again.document().outline(), svc.document().outline());
        assert!(again.diagnostics().is_empty());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.xml");
        let mut svc = service();
        svc.save(&path).unwrap();
        let again = EditorService::open(&path, EditorConfig::default()).unwrap();
        assert_eq!(again.document().reference_count(), 1);
    }
}
