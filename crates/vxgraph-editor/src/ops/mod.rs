//! Structural mutation operations.
//!
//! Every operation works on an [`EditContext`]: the document mutably, plus
//! the index, derived graphs and registries as of the last build. Operations
//! validate against that state before touching the document; the caller
//! checkpoints before and rolls back on error.
//!
//! # Modules
//!
//! - [`containers`]: delays, object arrays, pyramids, tensor dimensions
//! - [`insert`]: graphs, nodes, objects, graph parameters, optional parameters
//! - [`scope`]: promote/demote between global and graph-local scope
//! - [`replicate`]: node replication over object arrays and pyramids
//! - [`merge`]: fusing two data objects into one
//! - [`remove`]: node, data and graph removal cascades
//! - [`rename`]: name changes with in-place label updates

use std::collections::BTreeSet;

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::kernels::{KernelRegistry, KernelSignature};
use vxgraph_core::tag::{DataTag, ElementKind};
use vxgraph_core::type_registry::TypeRegistry;
use vxgraph_storage::document::{ATTR_INDEX, ATTR_REFERENCE};
use vxgraph_storage::Document;

use crate::config::EditorConfig;
use crate::error::EditError;
use crate::graph::GraphSet;
use crate::xref::Xref;

pub mod containers;
pub mod insert;
pub mod merge;
pub mod remove;
pub mod rename;
pub mod replicate;
pub mod scope;

#[cfg(test)]
pub(crate) mod testing;

/// Everything a mutation may read, with the document open for writing.
pub struct EditContext<'a> {
    pub doc: &'a mut Document,
    pub xref: &'a Xref,
    pub graphs: &'a GraphSet,
    pub types: &'a TypeRegistry,
    pub kernels: &'a KernelRegistry,
    pub config: &'a EditorConfig,
}

impl<'a> EditContext<'a> {
    /// Element carrying `reference`.
    pub fn elem(&self, reference: RefId) -> Result<ElemId, EditError> {
        self.doc
            .by_reference(reference)
            .ok_or_else(|| EditError::reference(format!("no element with reference {reference}")))
    }

    /// Element and tag of a data object.
    pub fn data(&self, reference: RefId) -> Result<(ElemId, DataTag), EditError> {
        let elem = self.elem(reference)?;
        match self.doc.data_tag(elem) {
            Some(tag) => Ok((elem, tag)),
            None => Err(EditError::validation(format!(
                "reference {reference} is not a data object"
            ))),
        }
    }

    pub fn graph(&self, reference: RefId) -> Result<ElemId, EditError> {
        self.of_kind(reference, ElementKind::Graph, "graph")
    }

    pub fn node(&self, reference: RefId) -> Result<ElemId, EditError> {
        self.of_kind(reference, ElementKind::Node, "node")
    }

    /// Signature of a node's kernel.
    pub fn signature(&self, node: ElemId) -> Result<&'a KernelSignature, EditError> {
        let kernels = self.kernels;
        let name = kernel_name(self.doc, node).unwrap_or_default();
        Ok(kernels.require(&name)?)
    }

    fn of_kind(&self, reference: RefId, kind: ElementKind, what: &str) -> Result<ElemId, EditError> {
        let elem = self.elem(reference)?;
        if self.doc.kind(elem) != kind {
            return Err(EditError::validation(format!(
                "reference {reference} is not a {what}"
            )));
        }
        Ok(elem)
    }
}

// ---------------------------------------------------------------------------
// Document scans shared by the operations
// ---------------------------------------------------------------------------

/// Text of a node's `kernel` child.
pub(crate) fn kernel_name(doc: &Document, node: ElemId) -> Option<String> {
    doc.children_of_kind(node, ElementKind::Kernel)
        .next()
        .and_then(|k| doc.text(k))
        .map(|t| t.trim().to_string())
}

/// Parses an attribute as an unsigned integer.
pub(crate) fn attr_u32(doc: &Document, elem: ElemId, key: &str) -> Option<u32> {
    doc.attr(elem, key).and_then(|v| v.trim().parse().ok())
}

/// Parses a reference-valued attribute.
pub(crate) fn attr_ref(doc: &Document, elem: ElemId, key: &str) -> Option<RefId> {
    doc.attr(elem, key).and_then(|v| v.parse().ok())
}

/// Nearest enclosing graph element.
pub(crate) fn graph_of(doc: &Document, elem: ElemId) -> Option<ElemId> {
    doc.ancestors(elem)
        .find(|a| doc.kind(*a) == ElementKind::Graph)
}

/// `parameter` children of a node as (index, element, bound reference).
pub(crate) fn node_params(doc: &Document, node: ElemId) -> Vec<(u32, ElemId, Option<RefId>)> {
    doc.children_of_kind(node, ElementKind::Parameter)
        .filter_map(|p| {
            let index = attr_u32(doc, p, ATTR_INDEX)?;
            Some((index, p, attr_ref(doc, p, ATTR_REFERENCE)))
        })
        .collect()
}

/// Every node parameter element bound to one of `refs`, as
/// (graph, node, parameter).
pub(crate) fn links_into(doc: &Document, refs: &BTreeSet<RefId>) -> Vec<(ElemId, ElemId, ElemId)> {
    let root = doc.root();
    let mut out = Vec::new();
    for graph in doc.children_of_kind(root, ElementKind::Graph) {
        for node in doc.children_of_kind(graph, ElementKind::Node) {
            for param in doc.children_of_kind(node, ElementKind::Parameter) {
                if attr_ref(doc, param, ATTR_REFERENCE).is_some_and(|r| refs.contains(&r)) {
                    out.push((graph, node, param));
                }
            }
        }
    }
    out
}

/// References of `elem` and every data object below it.
pub(crate) fn subtree_refs(doc: &Document, elem: ElemId) -> BTreeSet<RefId> {
    std::iter::once(elem)
        .chain(doc.descendants(elem))
        .filter(|e| doc.kind(*e).is_data())
        .filter_map(|e| doc.reference(e))
        .collect()
}

/// Graph-level `parameter` children of a graph.
pub(crate) fn graph_params(doc: &Document, graph: ElemId) -> Vec<ElemId> {
    doc.children_of_kind(graph, ElementKind::Parameter).collect()
}

/// Renumbers the graph parameters of `graph` densely in document order.
pub(crate) fn renumber_graph_params(doc: &mut Document, graph: ElemId) -> Result<(), EditError> {
    for (index, gp) in graph_params(doc, graph).into_iter().enumerate() {
        doc.set_attr(gp, ATTR_INDEX, index.to_string())?;
    }
    Ok(())
}

/// Outermost data object enclosing `elem` (itself when not nested).
pub(crate) fn structural_top(doc: &Document, elem: ElemId) -> ElemId {
    let mut top = elem;
    for ancestor in doc.ancestors(elem) {
        if doc.kind(ancestor).is_data() {
            top = ancestor;
        } else {
            break;
        }
    }
    top
}

/// Moves the outermost data object enclosing `elem` under `target`.
pub(crate) fn replant(doc: &mut Document, elem: ElemId, target: ElemId) -> Result<(), EditError> {
    let top = structural_top(doc, elem);
    if doc.parent(top) != Some(target) {
        doc.move_to(top, target)?;
    }
    Ok(())
}
