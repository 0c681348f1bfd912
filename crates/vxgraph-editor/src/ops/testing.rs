//! Test fixture: a built document with its registries, index and graphs.

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::kernels::KernelRegistry;
use vxgraph_core::tag::ElementKind;
use vxgraph_core::type_registry::TypeRegistry;
use vxgraph_storage::Document;

use crate::config::EditorConfig;
use crate::graph::GraphSet;
use crate::sync::{BuildDiagnostic, GraphSynchronizer};
use crate::xref::Xref;

use super::EditContext;

pub(crate) struct Fixture {
    pub doc: Document,
    pub xref: Xref,
    pub graphs: GraphSet,
    pub types: TypeRegistry,
    pub kernels: KernelRegistry,
    pub config: EditorConfig,
    pub diagnostics: Vec<BuildDiagnostic>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_document(Document::default())
    }

    pub fn with_document(doc: Document) -> Self {
        let types = TypeRegistry::new();
        let kernels = KernelRegistry::new(&types);
        let mut fixture = Fixture {
            doc,
            xref: Xref::new(),
            graphs: GraphSet::new(),
            types,
            kernels,
            config: EditorConfig::default(),
            diagnostics: Vec::new(),
        };
        fixture.rebuild();
        fixture
    }

    pub fn rebuild(&mut self) {
        let out = GraphSynchronizer::new(self.config.show_virtuals)
            .build(&mut self.doc, &mut self.types, &self.kernels, &mut self.xref)
            .unwrap();
        self.graphs = out.graphs;
        self.diagnostics = out.diagnostics;
    }

    pub fn cx(&mut self) -> EditContext<'_> {
        EditContext {
            doc: &mut self.doc,
            xref: &self.xref,
            graphs: &self.graphs,
            types: &self.types,
            kernels: &self.kernels,
            config: &self.config,
        }
    }

    /// Reference of the first graph element.
    pub fn graph(&self) -> RefId {
        let root = self.doc.root();
        let graph = self.doc.children_of_kind(root, ElementKind::Graph).next().unwrap();
        self.doc.reference(graph).unwrap()
    }

    pub fn elem(&self, reference: RefId) -> ElemId {
        self.doc.by_reference(reference).unwrap()
    }

    /// Inserts a node in the first graph and rebuilds.
    pub fn node(&mut self, kernel: &str) -> RefId {
        let graph = self.graph();
        let node = super::insert::insert_node(&mut self.cx(), graph, kernel).unwrap();
        self.rebuild_tracking(node)
    }

    /// Rebuilds and returns the reference `reference` was renumbered to.
    pub fn rebuild_tracking(&mut self, reference: RefId) -> RefId {
        let elem = self.elem(reference);
        self.rebuild();
        self.doc.reference(elem).unwrap()
    }

    /// Object bound to parameter `index` of `node`.
    pub fn bound(&self, node: RefId, index: u32) -> RefId {
        super::node_params(&self.doc, self.elem(node))
            .into_iter()
            .find(|(i, _, _)| *i == index)
            .and_then(|(_, _, r)| r)
            .unwrap()
    }

    pub fn name(&self, reference: RefId) -> String {
        self.doc.name(self.elem(reference)).unwrap_or_default().to_string()
    }
}
