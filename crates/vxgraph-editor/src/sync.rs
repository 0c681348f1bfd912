//! GraphSynchronizer: rebuilds the index and the derived graphs from the
//! document.
//!
//! A full build runs reference fixup, registers root-scope objects on the
//! global graph, then walks every graph element: its local objects, its
//! nodes (repairing unbound parameters with default objects), its graph
//! parameters, and finally the view cleanup that splices graph-local
//! pass-through objects out and hides immutable ones.
//!
//! Problems that the build can recover from are returned as
//! [`BuildDiagnostic`]s and logged; they never fail the build.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::kernels::{Direction, KernelRegistry, ParameterSignature};
use vxgraph_core::tag::{DataTag, ElementKind};
use vxgraph_core::type_registry::TypeRegistry;
use vxgraph_storage::document::{
    ATTR_INDEX, ATTR_IS_REPLICATED, ATTR_NODE, ATTR_PARAMETER, ATTR_REFERENCE,
    ATTR_REPLICATE_FLAG, GLOBALS_NAME,
};
use vxgraph_storage::Document;

use crate::defaults::{apply_node_defaults, create_from_template, template_for};
use crate::error::{EditError, ErrorKind};
use crate::graph::{DerivedGraph, EdgeLabel, EdgeStyle, GraphSet, VertexKey, VertexKind};
use crate::ops::{attr_ref, attr_u32, kernel_name};
use crate::xref::{GraphKey, GraphParamEntry, Owner, ParamEntry, ParamLink, Xref, XrefUpdate};

/// Kernel name recorded for nodes without a `kernel` child.
pub const UNKNOWN_KERNEL: &str = "unknown";

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// A problem found and worked around during a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "diagnostic", rename_all = "snake_case")]
pub enum BuildDiagnostic {
    /// A graph parameter named a node that does not exist; its `node`
    /// attribute was dropped.
    DanglingNode { elem: ElemId },
    /// Two elements carried the same reference; the later one was given a
    /// fresh id.
    DuplicateReference { elem: ElemId, reference: RefId, replacement: RefId },
    /// The node's kernel is not in the registry; the node has no wiring.
    UnknownKernel { node: RefId, kernel: String },
    /// A node parameter element was ignored.
    InvalidParameter { node: RefId, reason: String },
    /// A binding that did not resolve to a usable object was replaced by a
    /// default object. Filling in an unbound parameter is not reported.
    SynthesizedObject { node: RefId, index: u32, object: RefId },
    /// More than one node parameter writes the same object.
    MultipleWriters { object: RefId, kept: ParamLink, replaced: ParamLink },
    /// A graph parameter could not be wired.
    InvalidGraphParameter { graph: String, reason: String },
    /// The graph's dataflow contains a cycle through the named vertex.
    Cycle { graph: String, vertex: String },
    /// A `struct` element could not be registered as a user type.
    UserStruct { name: String, reason: String },
}

impl BuildDiagnostic {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildDiagnostic::DanglingNode { .. }
            | BuildDiagnostic::DuplicateReference { .. }
            | BuildDiagnostic::SynthesizedObject { .. }
            | BuildDiagnostic::InvalidGraphParameter { .. } => ErrorKind::Reference,
            BuildDiagnostic::Cycle { .. } => ErrorKind::Cycle,
            BuildDiagnostic::UnknownKernel { .. }
            | BuildDiagnostic::InvalidParameter { .. }
            | BuildDiagnostic::MultipleWriters { .. }
            | BuildDiagnostic::UserStruct { .. } => ErrorKind::Validation,
        }
    }
}

impl fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildDiagnostic::DanglingNode { elem } => {
                write!(f, "graph parameter {elem} names no node")
            }
            BuildDiagnostic::DuplicateReference {
                elem,
                reference,
                replacement,
            } => write!(
                f,
                "element {elem} reused reference {reference}; renumbered to {replacement}"
            ),
            BuildDiagnostic::UnknownKernel { node, kernel } => {
                write!(f, "node {node}: unknown kernel '{kernel}'")
            }
            BuildDiagnostic::InvalidParameter { node, reason } => {
                write!(f, "node {node}: {reason}")
            }
            BuildDiagnostic::SynthesizedObject {
                node,
                index,
                object,
            } => write!(
                f,
                "node {node}: parameter {index} bound to new default object {object}"
            ),
            BuildDiagnostic::MultipleWriters {
                object,
                kept,
                replaced,
            } => write!(
                f,
                "object {object} written by both {replaced} and {kept}; keeping {kept}"
            ),
            BuildDiagnostic::InvalidGraphParameter { graph, reason } => {
                write!(f, "graph '{graph}': {reason}")
            }
            BuildDiagnostic::Cycle { graph, vertex } => {
                write!(f, "graph '{graph}': dataflow cycle through '{vertex}'")
            }
            BuildDiagnostic::UserStruct { name, reason } => {
                write!(f, "struct '{name}': {reason}")
            }
        }
    }
}

/// Result of a full build.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub graphs: GraphSet,
    pub diagnostics: Vec<BuildDiagnostic>,
}

// ---------------------------------------------------------------------------
// Synchronizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSynchronizer {
    show_virtuals: bool,
}

impl GraphSynchronizer {
    pub fn new(show_virtuals: bool) -> Self {
        GraphSynchronizer { show_virtuals }
    }

    /// Full rebuild. Repairs the document where needed (dense references,
    /// unique names, node defaults, default objects for unbound parameters),
    /// repopulates `xref` and clears its document-dirty flag.
    pub fn build(
        &self,
        doc: &mut Document,
        types: &mut TypeRegistry,
        kernels: &KernelRegistry,
        xref: &mut Xref,
    ) -> Result<BuildOutput, EditError> {
        let mut build = Build {
            doc,
            types,
            kernels,
            xref,
            show_virtuals: self.show_virtuals,
            diagnostics: Vec::new(),
        };
        let graphs = build.run()?;
        let diagnostics = build.diagnostics;
        for diagnostic in &diagnostics {
            tracing::warn!(kind = ?diagnostic.kind(), "{}", diagnostic);
        }
        tracing::debug!(
            graphs = graphs.len(),
            entries = xref.len(),
            diagnostics = diagnostics.len(),
            "rebuilt derived graphs"
        );
        Ok(BuildOutput {
            graphs,
            diagnostics,
        })
    }

    /// Incremental refresh of the graphs flagged per-graph dirty: vertex
    /// titles are re-read from the index. Returns the refreshed keys.
    pub fn refresh(&self, graphs: &mut GraphSet, xref: &mut Xref) -> Vec<GraphKey> {
        let dirty = xref.take_graph_dirty();
        for key in &dirty {
            let Some(graph) = graphs.by_key_mut(*key) else {
                continue;
            };
            let refs: Vec<RefId> = graph
                .vertices()
                .filter_map(|v| match v.key {
                    VertexKey::Ref(r) => Some(r),
                    VertexKey::GraphParam { .. } => None,
                })
                .collect();
            for r in refs {
                if let Some(entry) = xref.get(r) {
                    graph.relabel(VertexKey::Ref(r), &entry.name);
                }
            }
            tracing::debug!(graph = graph.name(), "refreshed derived graph");
        }
        dirty
    }
}

struct Build<'a> {
    doc: &'a mut Document,
    types: &'a mut TypeRegistry,
    kernels: &'a KernelRegistry,
    xref: &'a mut Xref,
    show_virtuals: bool,
    diagnostics: Vec<BuildDiagnostic>,
}

impl<'a> Build<'a> {
    fn run(&mut self) -> Result<GraphSet, EditError> {
        self.doc.clear_names();
        let report = self.doc.fixup_references();
        for elem in report.dangling_nodes {
            self.diagnostics.push(BuildDiagnostic::DanglingNode { elem });
        }
        self.xref.clear();

        let root = self.doc.root();
        let mut globals = DerivedGraph::new(GraphKey::Globals, GLOBALS_NAME, root);
        for child in self.doc.children(root).to_vec() {
            self.process_datum(child, &mut globals)?;
        }

        let mut built = Vec::new();
        let graph_elems: Vec<ElemId> = self.doc.children_of_kind(root, ElementKind::Graph).collect();
        for elem in graph_elems {
            let mut name = self.doc.ensure_name(elem)?;
            if name == GLOBALS_NAME {
                name = self.doc.assign_name(elem, "graph")?;
            }
            let reference = self.identify(elem)?;
            self.xref.update(
                reference,
                XrefUpdate::register(elem, Owner::Root, ElementKind::Graph)
                    .name(name.as_str())
                    .graph(GraphKey::Globals),
            )?;
            globals.add_vertex(VertexKey::Ref(reference), VertexKind::Graph, name.as_str());

            let mut graph = DerivedGraph::new(GraphKey::Graph(reference), name, elem);
            self.process_graph(reference, elem, &mut graph, &mut globals)?;
            built.push(graph);
        }

        let immutables: Vec<(RefId, Vec<GraphKey>)> = self
            .xref
            .iter()
            .filter(|(_, e)| e.immutable)
            .map(|(r, e)| (r, e.graphs.iter().copied().collect()))
            .collect();
        for (reference, keys) in immutables {
            for key in keys {
                let target = match key {
                    GraphKey::Globals => Some(&mut globals),
                    GraphKey::Graph(_) => built.iter_mut().find(|g| g.key() == key),
                };
                if let Some(graph) = target {
                    graph.remove_vertex(VertexKey::Ref(reference));
                }
            }
        }

        for graph in &built {
            if let Some(vertex) = graph.find_cycle() {
                let label = graph
                    .vertex(vertex)
                    .map(|v| v.title().to_string())
                    .unwrap_or_default();
                self.diagnostics.push(BuildDiagnostic::Cycle {
                    graph: graph.name().to_string(),
                    vertex: label,
                });
            }
        }

        let mut graphs = GraphSet::new();
        self.xref.mark_graph_dirty(globals.key());
        graphs.insert(globals);
        for graph in built {
            self.xref.mark_graph_dirty(graph.key());
            graphs.insert(graph);
        }
        self.xref.clear_document_dirty();
        Ok(graphs)
    }

    /// Reference of `elem`, assigning a fresh one when it has none or when
    /// another element already claimed its value.
    fn identify(&mut self, elem: ElemId) -> Result<RefId, EditError> {
        match self.doc.reference(elem) {
            Some(reference) => match self.xref.get(reference) {
                Some(entry) if entry.elem != elem => {
                    let replacement = self.doc.new_ref();
                    self.doc
                        .set_attr(elem, ATTR_REFERENCE, replacement.to_string())?;
                    self.diagnostics.push(BuildDiagnostic::DuplicateReference {
                        elem,
                        reference,
                        replacement,
                    });
                    Ok(replacement)
                }
                _ => Ok(reference),
            },
            None => {
                let reference = self.doc.new_ref();
                self.doc.set_attr(elem, ATTR_REFERENCE, reference.to_string())?;
                Ok(reference)
            }
        }
    }

    /// Owner read off the document parent. Parents are always registered
    /// before their children.
    fn owner_of(&self, elem: ElemId) -> Owner {
        let Some(parent) = self.doc.parent(elem) else {
            return Owner::Root;
        };
        match (self.doc.kind(parent), self.doc.reference(parent)) {
            (ElementKind::Graph, Some(r)) => Owner::Graph(r),
            (kind, Some(r)) if kind.is_data() => Owner::Object(r),
            _ => Owner::Root,
        }
    }

    /// Registers a data or info element (and its structural children) on
    /// `graph`. Returns its reference, or None for other elements.
    fn process_datum(
        &mut self,
        elem: ElemId,
        graph: &mut DerivedGraph,
    ) -> Result<Option<RefId>, EditError> {
        let kind = self.doc.kind(elem);
        if !(kind.is_data() || kind.is_info()) {
            return Ok(None);
        }
        let name = self.doc.ensure_name(elem)?;
        let reference = self.identify(elem)?;
        let owner = self.owner_of(elem);
        self.xref.update(
            reference,
            XrefUpdate::register(elem, owner, kind)
                .name(name.as_str())
                .graph(graph.key()),
        )?;
        if kind == ElementKind::Struct {
            self.register_struct(elem, &name);
        }

        let local = self.doc.local_name(elem).unwrap_or_default().to_string();
        let vertex_kind = kind.data_tag().map_or(VertexKind::Info, VertexKind::Data);
        graph.add_vertex(VertexKey::Ref(reference), vertex_kind, format!("{name}\n{local}"));

        if let Some(prefix) = kind.data_tag().and_then(DataTag::child_label) {
            let mut count = 0u32;
            for child in self.doc.children(elem).to_vec() {
                if let Some(child_ref) = self.process_datum(child, graph)? {
                    graph.add_edge(
                        VertexKey::Ref(reference),
                        VertexKey::Ref(child_ref),
                        EdgeLabel::head(format!("{prefix}{count}"), EdgeStyle::Container),
                    );
                    self.xref.update(child_ref, XrefUpdate::new().is_child(true))?;
                    count += 1;
                }
            }
            if count > 0 {
                self.xref.update(reference, XrefUpdate::new().is_parent(true))?;
            }
        }
        Ok(Some(reference))
    }

    fn register_struct(&mut self, elem: ElemId, name: &str) {
        let type_name = self.doc.text(elem).map(str::trim).unwrap_or_default().to_string();
        if type_name.is_empty() || self.types.contains(&type_name) {
            return;
        }
        let size = attr_u32(self.doc, elem, "size").map(|s| s as usize);
        let result = match size {
            Some(size) => self
                .types
                .register_user_struct(&type_name, size)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            None => Err("missing or invalid size".to_string()),
        };
        if let Err(reason) = result {
            self.diagnostics.push(BuildDiagnostic::UserStruct {
                name: name.to_string(),
                reason,
            });
        }
    }

    fn process_graph(
        &mut self,
        graph_ref: RefId,
        graph_elem: ElemId,
        graph: &mut DerivedGraph,
        globals: &mut DerivedGraph,
    ) -> Result<(), EditError> {
        for child in self.doc.children(graph_elem).to_vec() {
            self.process_datum(child, graph)?;
        }
        let nodes: Vec<ElemId> = self
            .doc
            .children_of_kind(graph_elem, ElementKind::Node)
            .collect();
        for node in nodes {
            self.process_node(graph_ref, graph_elem, node, graph, globals)?;
        }
        let params: Vec<ElemId> = self
            .doc
            .children_of_kind(graph_elem, ElementKind::Parameter)
            .collect();
        for gp in params {
            self.process_graph_parameter(graph_ref, gp, graph, globals)?;
        }
        self.process_virtuals(graph);
        Ok(())
    }

    /// True when `object` may be bound by a node of `graph_ref`: a
    /// registered data object that is global or local to that graph.
    fn bindable(&self, object: RefId, graph_ref: RefId) -> bool {
        match self.xref.get(object) {
            Some(entry) if entry.is_data() => match self.xref.home_graph(object) {
                None => true,
                Some(home) => home == graph_ref,
            },
            _ => false,
        }
    }

    fn process_node(
        &mut self,
        graph_ref: RefId,
        graph_elem: ElemId,
        node: ElemId,
        graph: &mut DerivedGraph,
        globals: &mut DerivedGraph,
    ) -> Result<(), EditError> {
        apply_node_defaults(self.doc, node)?;
        let name = self.doc.ensure_name(node)?;
        let reference = self.identify(node)?;
        let kernel = kernel_name(self.doc, node).unwrap_or_else(|| UNKNOWN_KERNEL.to_string());
        let replicated = self.doc.attr(node, ATTR_IS_REPLICATED) == Some("true");
        self.xref.update(
            reference,
            XrefUpdate::register(node, Owner::Graph(graph_ref), ElementKind::Node)
                .name(name.as_str())
                .graph(graph.key())
                .replicated(replicated)
                .kernel(kernel.as_str()),
        )?;
        let short = kernel.rsplit('.').next().unwrap_or(&kernel);
        graph.add_vertex(VertexKey::Ref(reference), VertexKind::Node, format!("{name}\n{short}"));

        let kernels = self.kernels;
        let Some(signature) = kernels.get(&kernel) else {
            self.diagnostics.push(BuildDiagnostic::UnknownKernel {
                node: reference,
                kernel,
            });
            return Ok(());
        };

        // index -> (parameter element, bound object, replicate flag)
        let mut bound: BTreeMap<u32, (ElemId, RefId, bool)> = BTreeMap::new();
        let params: Vec<ElemId> = self
            .doc
            .children_of_kind(node, ElementKind::Parameter)
            .collect();
        for param in params {
            let Some(index) = attr_u32(self.doc, param, ATTR_INDEX) else {
                self.invalid_parameter(reference, "parameter without a valid index".into());
                continue;
            };
            let Some(sig) = signature.param(index as usize) else {
                self.invalid_parameter(
                    reference,
                    format!("index {index} is out of range for {}", signature.name),
                );
                continue;
            };
            if bound.contains_key(&index) {
                self.invalid_parameter(reference, format!("index {index} is bound twice"));
                continue;
            }
            let replicate = self.doc.attr(param, ATTR_REPLICATE_FLAG) == Some("true");
            let object = match attr_ref(self.doc, param, ATTR_REFERENCE)
                .filter(|r| self.bindable(*r, graph_ref))
            {
                Some(object) => object,
                None => {
                    let object = self.synthesize(graph_elem, graph, sig)?;
                    self.doc.set_attr(param, ATTR_REFERENCE, object.to_string())?;
                    self.diagnostics.push(BuildDiagnostic::SynthesizedObject {
                        node: reference,
                        index,
                        object,
                    });
                    object
                }
            };
            bound.insert(index, (param, object, replicate));
        }

        for (i, sig) in signature.params.iter().enumerate() {
            let index = i as u32;
            if bound.contains_key(&index) || sig.is_optional() {
                continue;
            }
            let object = self.synthesize(graph_elem, graph, sig)?;
            let param = self.doc.create_child(node, "parameter")?;
            self.doc.set_attr(param, ATTR_INDEX, index.to_string())?;
            self.doc.set_attr(param, ATTR_REFERENCE, object.to_string())?;
            self.doc.set_attr(param, ATTR_REPLICATE_FLAG, "false")?;
            tracing::debug!(node = %reference, index, object = %object, "bound unbound parameter to a default object");
            bound.insert(index, (param, object, false));
        }

        for (index, (param, object, replicate)) in bound {
            let sig = &signature.params[index as usize];
            let on_globals = globals.contains(VertexKey::Ref(object));
            if !graph.contains(VertexKey::Ref(object)) {
                let elem = self.xref.entry(object)?.elem;
                self.process_datum(elem, graph)?;
            }
            let link = ParamLink {
                node: reference,
                index,
            };
            self.xref.insert_param(
                link,
                ParamEntry {
                    elem: param,
                    object,
                    graph: graph_ref,
                    name: sig.name.clone(),
                    direction: sig.direction,
                    state: sig.state,
                    replicate,
                },
            );
            let immutable = self.xref.is_immutable(object) || sig.is_immutable();
            let style = match (replicate, sig.direction) {
                (true, _) => EdgeStyle::Replicated,
                (false, Direction::Bidirectional) => EdgeStyle::Bidirectional,
                (false, _) => EdgeStyle::Data,
            };
            let node_key = VertexKey::Ref(reference);
            let object_key = VertexKey::Ref(object);
            let graph_key = VertexKey::Ref(graph_ref);
            let global_label = format!("{name}:{}", sig.name);

            if sig.direction == Direction::Input {
                self.xref
                    .update(object, XrefUpdate::new().reader(link).immutable(immutable))?;
                graph.add_edge(object_key, node_key, EdgeLabel::head(sig.name.as_str(), style));
                if on_globals {
                    globals.add_edge(object_key, graph_key, EdgeLabel::head(global_label, style));
                }
            } else {
                if let Some(previous) = self.xref.get(object).and_then(|e| e.writer) {
                    if previous != link {
                        self.diagnostics.push(BuildDiagnostic::MultipleWriters {
                            object,
                            kept: link,
                            replaced: previous,
                        });
                    }
                }
                self.xref
                    .update(object, XrefUpdate::new().writer(link).immutable(immutable))?;
                graph.add_edge(node_key, object_key, EdgeLabel::tail(sig.name.as_str(), style));
                if on_globals {
                    globals.add_edge(graph_key, object_key, EdgeLabel::tail(global_label, style));
                }
            }
        }
        Ok(())
    }

    fn invalid_parameter(&mut self, node: RefId, reason: String) {
        self.diagnostics
            .push(BuildDiagnostic::InvalidParameter { node, reason });
    }

    /// Creates and registers a default object for `sig`. Immutable values
    /// live under the root, everything else is local to the graph.
    fn synthesize(
        &mut self,
        graph_elem: ElemId,
        graph: &mut DerivedGraph,
        sig: &ParameterSignature,
    ) -> Result<RefId, EditError> {
        let template = template_for(self.types, &sig.type_name);
        let parent = if sig.is_immutable() {
            self.doc.root()
        } else {
            graph_elem
        };
        let (elem, _) = create_from_template(self.doc, parent, &template, &sig.name)?;
        let reference = self.process_datum(elem, graph)?.ok_or_else(|| {
            EditError::reference(format!("default object for '{}' was not registered", sig.name))
        })?;
        if sig.is_immutable() {
            self.xref
                .update(reference, XrefUpdate::new().immutable(true))?;
        }
        Ok(reference)
    }

    fn process_graph_parameter(
        &mut self,
        graph_ref: RefId,
        gp: ElemId,
        graph: &mut DerivedGraph,
        globals: &mut DerivedGraph,
    ) -> Result<(), EditError> {
        let fields = (
            attr_u32(self.doc, gp, ATTR_INDEX),
            attr_ref(self.doc, gp, ATTR_NODE),
            attr_u32(self.doc, gp, ATTR_PARAMETER),
        );
        let (Some(index), Some(node), Some(pindex)) = fields else {
            self.invalid_graph_parameter(graph, format!("parameter {gp} lacks index, node or parameter"));
            return Ok(());
        };
        let link = ParamLink {
            node,
            index: pindex,
        };
        let Some(param) = self.xref.param(link).cloned() else {
            self.invalid_graph_parameter(graph, format!("graph parameter {index}: node parameter {link} is not bound"));
            return Ok(());
        };
        if param.graph != graph_ref {
            self.invalid_graph_parameter(graph, format!("graph parameter {index}: node {node} is in another graph"));
            return Ok(());
        }
        if self.xref.is_virtual(param.object) {
            self.invalid_graph_parameter(
                graph,
                format!("graph parameter {index}: object {} is graph-local", param.object),
            );
        }

        let node_name = self.xref.get(node).map(|e| e.name.clone()).unwrap_or_default();
        let gp_key = VertexKey::GraphParam {
            graph: graph_ref,
            index,
        };
        graph.add_vertex(
            gp_key,
            VertexKind::GraphParameter,
            format!("Graph Parameter {index}\n{node_name}:{}", param.name),
        );
        self.xref.insert_graph_param(GraphParamEntry {
            elem: gp,
            graph: graph_ref,
            index,
            link,
        });

        let node_key = VertexKey::Ref(node);
        let object_key = VertexKey::Ref(param.object);
        let graph_key = VertexKey::Ref(graph_ref);
        let decoration = format!("Parameter {index}");
        if param.direction == Direction::Input {
            let direct = graph.remove_edge(object_key, node_key).unwrap_or_default();
            graph.add_edge(
                gp_key,
                node_key,
                EdgeLabel {
                    head: direct.head,
                    tail: None,
                    style: direct.style,
                },
            );
            graph.add_edge(object_key, gp_key, EdgeLabel::default());
            if let Some(edge) = globals.edge_mut(object_key, graph_key) {
                edge.head = Some(decoration);
            }
        } else {
            let direct = graph.remove_edge(node_key, object_key).unwrap_or_default();
            graph.add_edge(
                node_key,
                gp_key,
                EdgeLabel {
                    head: None,
                    tail: direct.tail,
                    style: direct.style,
                },
            );
            graph.add_edge(gp_key, object_key, EdgeLabel::default());
            if let Some(edge) = globals.edge_mut(graph_key, object_key) {
                edge.tail = Some(decoration);
            }
        }
        Ok(())
    }

    fn invalid_graph_parameter(&mut self, graph: &DerivedGraph, reason: String) {
        self.diagnostics.push(BuildDiagnostic::InvalidGraphParameter {
            graph: graph.name().to_string(),
            reason,
        });
    }

    /// Splices graph-local pass-through objects out of the view and hides
    /// immutable ones.
    fn process_virtuals(&mut self, graph: &mut DerivedGraph) {
        let objects: Vec<RefId> = graph
            .vertices()
            .filter_map(|v| match (v.key, v.kind) {
                (VertexKey::Ref(r), VertexKind::Data(_)) => Some(r),
                _ => None,
            })
            .collect();
        for reference in objects {
            let Some(entry) = self.xref.get(reference) else {
                continue;
            };
            let key = VertexKey::Ref(reference);
            if entry.immutable {
                graph.remove_vertex(key);
                continue;
            }
            if self.show_virtuals
                || entry.is_parent
                || entry.is_child
                || !self.xref.is_virtual(reference)
            {
                continue;
            }
            let incoming = graph.incoming(key);
            let outgoing = graph.outgoing(key);
            let Some((source, feed)) = incoming.first() else {
                continue;
            };
            if outgoing.is_empty() {
                continue;
            }
            for (target, out) in &outgoing {
                graph.add_edge(
                    *source,
                    *target,
                    EdgeLabel {
                        head: out.head.clone(),
                        tail: feed.tail.clone(),
                        style: feed.style,
                    },
                );
            }
            graph.remove_vertex(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vxgraph_storage::document::ATTR_REFERENCES;

    const BOX: &str = "org.khronos.openvx.box_3x3";

    fn build(doc: &mut Document, show_virtuals: bool) -> (BuildOutput, Xref) {
        let mut types = TypeRegistry::new();
        let kernels = KernelRegistry::new(&types);
        let mut xref = Xref::new();
        let out = GraphSynchronizer::new(show_virtuals)
            .build(doc, &mut types, &kernels, &mut xref)
            .unwrap();
        (out, xref)
    }

    fn add_node(doc: &mut Document, graph: ElemId, kernel: &str) -> ElemId {
        let node = doc.create_child(graph, "node").unwrap();
        let k = doc.create_child(node, "kernel").unwrap();
        doc.set_text(k, Some(kernel.to_string())).unwrap();
        node
    }

    fn bind(doc: &mut Document, node: ElemId, index: u32, object: ElemId) {
        let p = doc.create_child(node, "parameter").unwrap();
        doc.set_attr(p, ATTR_INDEX, index.to_string()).unwrap();
        let r = doc.reference(object).unwrap();
        doc.set_attr(p, ATTR_REFERENCE, r.to_string()).unwrap();
    }

    fn image(doc: &mut Document, parent: ElemId, name: &str) -> ElemId {
        crate::defaults::create_object(doc, parent, DataTag::Image, name)
            .unwrap()
            .0
    }

    #[test]
    fn empty_document_builds_globals_and_one_graph() {
        let mut doc = Document::default();
        let (out, xref) = build(&mut doc, false);
        let names: Vec<&str> = out.graphs.names().collect();
        assert_eq!(names, vec![GLOBALS_NAME, "graph"]);
        assert!(out.diagnostics.is_empty());
        assert_eq!(xref.len(), 1);
        assert!(!xref.is_document_dirty());
        let globals = out.graphs.globals().unwrap();
        assert_eq!(globals.vertex_count(), 1);
    }

    #[test]
    fn unbound_parameters_get_default_objects() {
        let mut doc = Document::default();
        let graph = doc.children(doc.root())[0];
        let node = add_node(&mut doc, graph, BOX);
        let (out, xref) = build(&mut doc, false);

        assert_eq!(doc.attr(doc.root(), ATTR_REFERENCES), Some("4"));
        let params: Vec<_> = crate::ops::node_params(&doc, node);
        assert_eq!(params.len(), 2);
        let input = params[0].2.unwrap();
        let output = params[1].2.unwrap();
        assert!(xref.is_virtual(input));
        assert_eq!(xref.get(input).unwrap().name, "input");
        let node_ref = doc.reference(node).unwrap();
        assert_eq!(xref.get(input).unwrap().readers.as_slice(), &[ParamLink { node: node_ref, index: 0 }]);
        assert_eq!(xref.get(output).unwrap().writer, Some(ParamLink { node: node_ref, index: 1 }));

        let g = out.graphs.get("graph").unwrap();
        assert!(g.edge(VertexKey::Ref(input), VertexKey::Ref(node_ref)).is_some());
        assert!(g.edge(VertexKey::Ref(node_ref), VertexKey::Ref(output)).is_some());
        assert!(out.diagnostics.is_empty());
        assert_eq!(doc.attr(node, "bordermode"), Some("UNDEFINED"));
    }

    #[test]
    fn rebuild_is_stable() {
        let mut doc = Document::default();
        let graph = doc.children(doc.root())[0];
        add_node(&mut doc, graph, BOX);
        build(&mut doc, false);
        let first = doc.outline();
        let (out, _) = build(&mut doc, false);
        assert_eq!(doc.outline(), first);
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn global_objects_link_to_the_graph_on_globals() {
        let mut doc = Document::default();
        let root = doc.root();
        let graph = doc.children(root)[0];
        let input = image(&mut doc, root, "in");
        let node = add_node(&mut doc, graph, BOX);
        bind(&mut doc, node, 0, input);
        let (out, _) = build(&mut doc, false);

        let input_ref = doc.reference(input).unwrap();
        let graph_ref = doc.reference(graph).unwrap();
        let globals = out.graphs.globals().unwrap();
        let edge = globals
            .edge(VertexKey::Ref(input_ref), VertexKey::Ref(graph_ref))
            .unwrap();
        assert_eq!(edge.head.as_deref(), Some("node:input"));
    }

    #[test]
    fn local_pass_through_objects_are_spliced() {
        let mut doc = Document::default();
        let root = doc.root();
        let graph = doc.children(root)[0];
        let input = image(&mut doc, root, "in");
        let middle = image(&mut doc, graph, "mid");
        let output = image(&mut doc, root, "out");
        let first = add_node(&mut doc, graph, BOX);
        bind(&mut doc, first, 0, input);
        bind(&mut doc, first, 1, middle);
        let second = add_node(&mut doc, graph, BOX);
        bind(&mut doc, second, 0, middle);
        bind(&mut doc, second, 1, output);

        let (hidden, xref) = build(&mut doc, false);
        let mid_ref = doc.reference(middle).unwrap();
        let a = VertexKey::Ref(doc.reference(first).unwrap());
        let b = VertexKey::Ref(doc.reference(second).unwrap());
        let g = hidden.graphs.get("graph").unwrap();
        assert!(!g.contains(VertexKey::Ref(mid_ref)));
        let spliced = g.edge(a, b).unwrap();
        assert_eq!(spliced.tail.as_deref(), Some("output"));
        assert_eq!(spliced.head.as_deref(), Some("input"));
        assert!(xref.contains(mid_ref));

        let (shown, _) = build(&mut doc, true);
        assert!(shown.graphs.get("graph").unwrap().contains(VertexKey::Ref(mid_ref)));
    }

    #[test]
    fn immutable_parameters_are_global_but_hidden() {
        let mut doc = Document::default();
        let graph = doc.children(doc.root())[0];
        add_node(&mut doc, graph, "org.khronos.openvx.channel_extract");
        let (out, xref) = build(&mut doc, false);

        let (channel, entry) = xref
            .iter()
            .find(|(_, e)| e.name == "channel")
            .map(|(r, e)| (r, e.clone()))
            .unwrap();
        assert!(entry.immutable);
        assert_eq!(entry.owner, Owner::Root);
        assert_eq!(entry.kind, ElementKind::Data(DataTag::Scalar));
        assert_eq!(doc.attr(entry.elem, "elemType"), Some("VX_TYPE_ENUM"));
        for g in out.graphs.iter() {
            assert!(!g.contains(VertexKey::Ref(channel)));
        }
    }

    #[test]
    fn unknown_kernels_leave_the_node_unwired() {
        let mut doc = Document::default();
        let graph = doc.children(doc.root())[0];
        let node = add_node(&mut doc, graph, "com.example.nothing");
        let (out, xref) = build(&mut doc, false);
        assert!(matches!(
            out.diagnostics.as_slice(),
            [BuildDiagnostic::UnknownKernel { kernel, .. }] if kernel == "com.example.nothing"
        ));
        assert_eq!(out.diagnostics[0].kind(), ErrorKind::Validation);
        let node_ref = doc.reference(node).unwrap();
        assert_eq!(xref.params_of(node_ref).count(), 0);
        assert!(out.graphs.get("graph").unwrap().contains(VertexKey::Ref(node_ref)));
    }

    #[test]
    fn dangling_bindings_are_repaired() {
        let mut doc = Document::default();
        let graph = doc.children(doc.root())[0];
        let node = add_node(&mut doc, graph, BOX);
        let p = doc.create_child(node, "parameter").unwrap();
        doc.set_attr(p, ATTR_INDEX, "0").unwrap();
        doc.set_attr(p, ATTR_REFERENCE, "77").unwrap();
        let (out, _) = build(&mut doc, false);
        let bound = attr_ref(&doc, p, ATTR_REFERENCE).unwrap();
        let target = doc.by_reference(bound).unwrap();
        assert_eq!(doc.data_tag(target), Some(DataTag::Image));
        // only the broken binding is reported, not the unbound output
        match out.diagnostics.as_slice() {
            [BuildDiagnostic::SynthesizedObject { index: 0, object, .. }] => assert_eq!(*object, bound),
            other => panic!("expected one SynthesizedObject, got {:?}", other),
        }
    }

    #[test]
    fn graph_parameters_route_through_their_own_vertex() {
        let mut doc = Document::default();
        let root = doc.root();
        let graph = doc.children(root)[0];
        let input = image(&mut doc, root, "in");
        let node = add_node(&mut doc, graph, BOX);
        bind(&mut doc, node, 0, input);
        let node_ref = doc.new_ref();
        doc.set_attr(node, ATTR_REFERENCE, node_ref.to_string()).unwrap();
        let gp = doc.create_child(graph, "parameter").unwrap();
        doc.set_attr(gp, ATTR_NODE, node_ref.to_string()).unwrap();
        doc.set_attr(gp, ATTR_PARAMETER, "0").unwrap();
        doc.set_attr(gp, ATTR_INDEX, "0").unwrap();
        let (out, xref) = build(&mut doc, false);

        let graph_ref = doc.reference(graph).unwrap();
        let node_key = VertexKey::Ref(doc.reference(node).unwrap());
        let input_key = VertexKey::Ref(doc.reference(input).unwrap());
        let gp_key = VertexKey::GraphParam { graph: graph_ref, index: 0 };
        let g = out.graphs.get("graph").unwrap();
        assert!(g.edge(input_key, node_key).is_none());
        assert_eq!(g.edge(gp_key, node_key).unwrap().head.as_deref(), Some("input"));
        assert!(g.edge(input_key, gp_key).is_some());
        assert_eq!(g.vertex(gp_key).unwrap().label, "Graph Parameter 0\nnode:input");
        let globals = out.graphs.globals().unwrap();
        assert_eq!(
            globals.edge(input_key, VertexKey::Ref(graph_ref)).unwrap().head.as_deref(),
            Some("Parameter 0")
        );
        assert!(xref.feeds_graph_param(doc.reference(input).unwrap()));
    }

    #[test]
    fn containers_mark_children_and_parents() {
        let mut doc = Document::default();
        let root = doc.root();
        let img = image(&mut doc, root, "img");
        crate::ops::containers::wrap(&mut doc, img, DataTag::ObjectArray, 3).unwrap();
        let (out, xref) = build(&mut doc, false);
        let img_ref = doc.reference(img).unwrap();
        let array_ref = doc.reference(doc.parent(img).unwrap()).unwrap();
        assert!(xref.is_child(img_ref));
        assert!(xref.is_parent(array_ref));
        assert_eq!(xref.get(img_ref).unwrap().owner, Owner::Object(array_ref));
        let label = out
            .graphs
            .globals()
            .unwrap()
            .edge(VertexKey::Ref(array_ref), VertexKey::Ref(img_ref))
            .unwrap();
        assert_eq!(label.head.as_deref(), Some("Index 0"));
    }

    #[test]
    fn refresh_relabels_dirty_graphs_only() {
        let mut doc = Document::default();
        let mut types = TypeRegistry::new();
        let kernels = KernelRegistry::new(&types);
        let mut xref = Xref::new();
        let sync = GraphSynchronizer::new(false);
        let mut out = sync.build(&mut doc, &mut types, &kernels, &mut xref).unwrap();
        let refreshed = sync.refresh(&mut out.graphs, &mut xref);
        assert_eq!(refreshed.len(), 2);
        assert!(sync.refresh(&mut out.graphs, &mut xref).is_empty());
    }

    #[test]
    fn user_structs_are_registered() {
        let mut doc = Document::default();
        let root = doc.root();
        let s = doc.create_child(root, "struct").unwrap();
        doc.set_text(s, Some("my_pair_t".into())).unwrap();
        doc.set_attr(s, "size", "8").unwrap();
        let mut types = TypeRegistry::new();
        let kernels = KernelRegistry::new(&types);
        let mut xref = Xref::new();
        let out = GraphSynchronizer::new(false)
            .build(&mut doc, &mut types, &kernels, &mut xref)
            .unwrap();
        assert!(out.diagnostics.is_empty());
        assert!(types.contains("my_pair_t"));
        // a second build finds it registered already
        let again = GraphSynchronizer::new(false)
            .build(&mut doc, &mut types, &kernels, &mut xref)
            .unwrap();
        assert!(again.diagnostics.is_empty());
    }
}
