//! Removal of nodes, data objects and graphs.
//!
//! Removing something that is still connected first disconnects it; a
//! second removal of the now unconnected item deletes it. Graph parameters
//! bound to dropped links go with them and the survivors are renumbered.

use std::collections::BTreeSet;

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::tag::ElementKind;
use vxgraph_storage::document::{ATTR_IS_REPLICATED, ATTR_NODE, ATTR_PARAMETER, ATTR_REFERENCE};

use crate::error::EditError;
use crate::xref::GraphKey;

use super::{
    attr_ref, attr_u32, graph_of, graph_params, kernel_name, node_params, renumber_graph_params,
    subtree_refs, EditContext,
};

/// What a removal did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The item is gone from the document.
    Deleted,
    /// Links were dropped; the item itself remains.
    Disconnected,
    /// Nothing needed changing.
    Unchanged,
}

/// Removes whatever `reference` names: a node, a data object or a graph.
pub fn remove(cx: &mut EditContext<'_>, reference: RefId) -> Result<Removal, EditError> {
    let elem = cx.elem(reference)?;
    match cx.doc.kind(elem) {
        ElementKind::Node => remove_node(cx, reference),
        ElementKind::Graph => remove_graph(cx, GraphKey::Graph(reference)),
        kind if kind.is_data() => remove_data(cx, reference),
        _ => Err(EditError::validation(format!(
            "reference {reference} cannot be removed"
        ))),
    }
}

/// Disconnects a node, or deletes it when there is nothing left to
/// disconnect.
///
/// Graph parameters on the node and links to global objects are dropped. A
/// graph-local object keeps its link when this node is its only user; if no
/// other link had to be dropped the node is deleted together with those
/// objects. Immutable objects are deleted along with their last reader.
pub fn remove_node(cx: &mut EditContext<'_>, node: RefId) -> Result<Removal, EditError> {
    let node_elem = cx.node(node)?;
    let graph_elem = graph_of(cx.doc, node_elem)
        .ok_or_else(|| EditError::reference(format!("node {node} is not inside a graph")))?;
    let mut changes = 0usize;

    for gp in graph_params(cx.doc, graph_elem) {
        if attr_ref(cx.doc, gp, ATTR_NODE) == Some(node) {
            cx.doc.remove(gp)?;
            changes += 1;
        }
    }
    renumber_graph_params(cx.doc, graph_elem)?;

    let mut orphans: Vec<ElemId> = Vec::new();
    for (_, param, bound) in node_params(cx.doc, node_elem) {
        let Some(object) = bound else { continue };
        let Some(object_elem) = cx.doc.by_reference(object) else {
            cx.doc.remove(param)?;
            continue;
        };
        if cx.doc.parent(object_elem) == Some(graph_elem) {
            if link_count(cx, graph_elem, object) > 1 {
                cx.doc.remove(param)?;
                changes += 1;
            } else {
                orphans.push(object_elem);
            }
        } else if cx.xref.is_immutable(object) {
            cx.doc.remove(param)?;
            let sole_reader = cx.xref.get(object).is_some_and(|e| e.readers.len() == 1);
            if sole_reader && !cx.xref.is_child(object) {
                cx.doc.remove(object_elem)?;
            }
        } else {
            cx.doc.remove(param)?;
            changes += 1;
        }
    }

    if changes == 0 {
        cx.doc.remove(node_elem)?;
        for orphan in orphans {
            cx.doc.remove(orphan)?;
        }
        tracing::debug!(node = %node, "deleted node");
        Ok(Removal::Deleted)
    } else {
        cx.doc.set_attr(node_elem, ATTR_IS_REPLICATED, "false")?;
        tracing::debug!(node = %node, links = changes, "disconnected node");
        Ok(Removal::Disconnected)
    }
}

/// Disconnects a data object, or deletes it when it has no links.
///
/// Links to the object and to its structural descendants are dropped in
/// every graph, along with graph parameters on those links. The first link
/// of a graph-local object is kept, so removing a local object that only
/// one node uses changes nothing. Structural children (container slots,
/// pyramid levels) are sized through their parent and are refused here.
pub fn remove_data(cx: &mut EditContext<'_>, obj: RefId) -> Result<Removal, EditError> {
    let (elem, tag) = cx.data(obj)?;
    if cx.xref.is_child(obj) && !tag.is_derivation() {
        return Err(EditError::validation(
            "Cannot delete child objects; change the number of elements in the parent",
        ));
    }
    let is_virtual = cx.xref.is_virtual(obj);
    let refs = subtree_refs(cx.doc, elem);
    let mut kept_one = !is_virtual;
    let mut changes = 0usize;

    let root = cx.doc.root();
    let graphs: Vec<ElemId> = cx.doc.children_of_kind(root, ElementKind::Graph).collect();
    for graph in graphs {
        let mut dropped: BTreeSet<(RefId, u32)> = BTreeSet::new();
        let nodes: Vec<ElemId> = cx.doc.children_of_kind(graph, ElementKind::Node).collect();
        for node in nodes {
            let Some(node_ref) = cx.doc.reference(node) else { continue };
            let signature = kernel_name(cx.doc, node).and_then(|k| cx.kernels.get(&k));
            for (index, param, bound) in node_params(cx.doc, node) {
                let Some(bound) = bound.filter(|b| refs.contains(b)) else { continue };
                dropped.insert((node_ref, index));
                let optional = signature
                    .and_then(|s| s.param(index as usize))
                    .is_some_and(|p| p.is_optional());
                if bound != obj || kept_one || optional {
                    cx.doc.remove(param)?;
                    changes += 1;
                } else {
                    kept_one = true;
                }
            }
        }
        for gp in graph_params(cx.doc, graph) {
            let link = (attr_ref(cx.doc, gp, ATTR_NODE), attr_u32(cx.doc, gp, ATTR_PARAMETER));
            if let (Some(node), Some(index)) = link {
                if dropped.contains(&(node, index)) {
                    cx.doc.remove(gp)?;
                    changes += 1;
                }
            }
        }
        renumber_graph_params(cx.doc, graph)?;
    }

    if changes > 0 {
        tracing::debug!(object = %obj, links = changes, "disconnected data object");
        return Ok(Removal::Disconnected);
    }
    if kept_one && is_virtual {
        return Ok(Removal::Unchanged);
    }
    cx.doc.remove(elem)?;
    tracing::debug!(object = %obj, "deleted data object");
    Ok(Removal::Deleted)
}

/// Deletes a graph element with everything inside it.
pub fn remove_graph(cx: &mut EditContext<'_>, graph: GraphKey) -> Result<Removal, EditError> {
    let GraphKey::Graph(reference) = graph else {
        return Err(EditError::validation("Cannot delete the globals graph"));
    };
    let elem = cx.graph(reference)?;
    cx.doc.remove(elem)?;
    tracing::debug!(graph = %reference, "deleted graph");
    Ok(Removal::Deleted)
}

/// Node parameters inside `graph` bound to `object`.
fn link_count(cx: &EditContext<'_>, graph: ElemId, object: RefId) -> usize {
    let needle = object.to_string();
    cx.doc
        .descendants(graph)
        .into_iter()
        .filter(|e| cx.doc.kind(*e) == ElementKind::Parameter)
        .filter(|e| cx.doc.attr(*e, ATTR_REFERENCE) == Some(needle.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vxgraph_core::tag::DataTag;

    use crate::ops::insert::{insert_graph, insert_graph_parameter, insert_object, Scope};
    use crate::ops::merge::{merge, MismatchPolicy};
    use crate::ops::testing::Fixture;

    const BOX: &str = "org.khronos.openvx.box_3x3";

    fn count_data(fx: &Fixture) -> usize {
        fx.doc
            .preorder()
            .into_iter()
            .filter(|e| fx.doc.kind(*e).is_data())
            .count()
    }

    /// A box filter feeding another through one shared local image.
    /// Returns the fixture and the elements of both nodes.
    fn chain() -> (Fixture, ElemId, ElemId) {
        let mut fx = Fixture::new();
        let a = fx.node(BOX);
        let a_elem = fx.elem(a);
        let b = fx.node(BOX);
        let b_elem = fx.elem(b);
        let a = fx.doc.reference(a_elem).unwrap();
        let (out_a, in_b) = (fx.bound(a, 1), fx.bound(b, 0));
        merge(&mut fx.cx(), out_a, in_b, MismatchPolicy::Reject).unwrap();
        fx.rebuild();
        (fx, a_elem, b_elem)
    }

    #[test]
    fn lone_node_goes_with_its_local_objects() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        assert_eq!(count_data(&fx), 2);
        assert_eq!(remove_node(&mut fx.cx(), node).unwrap(), Removal::Deleted);
        assert_eq!(count_data(&fx), 0);
        fx.rebuild();
        assert_eq!(fx.graphs.get("graph").unwrap().vertex_count(), 0);
    }

    #[test]
    fn shared_links_disconnect_first() {
        let (mut fx, a_elem, b_elem) = chain();
        let a = fx.doc.reference(a_elem).unwrap();
        fx.doc.set_attr(a_elem, ATTR_IS_REPLICATED, "true").unwrap();
        assert_eq!(remove_node(&mut fx.cx(), a).unwrap(), Removal::Disconnected);
        assert_eq!(fx.doc.attr(a_elem, ATTR_IS_REPLICATED), Some("false"));
        // the input stays linked, the shared output does not
        let params = node_params(&fx.doc, a_elem);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].0, 0);
        assert!(fx.doc.contains(b_elem));

        fx.rebuild();
        let a = fx.doc.reference(a_elem).unwrap();
        assert_eq!(remove_node(&mut fx.cx(), a).unwrap(), Removal::Deleted);
        assert!(!fx.doc.is_attached(a_elem));
    }

    #[test]
    fn graph_parameters_on_the_node_are_dropped() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let node_elem = fx.elem(node);
        let input = fx.bound(node, 0);
        let graph = fx.graph();
        insert_graph_parameter(&mut fx.cx(), graph, input, Some(node)).unwrap();
        fx.rebuild();
        let node = fx.doc.reference(node_elem).unwrap();
        assert_eq!(remove_node(&mut fx.cx(), node).unwrap(), Removal::Disconnected);
        let graph_elem = fx.elem(graph);
        assert!(graph_params(&fx.doc, graph_elem).is_empty());
    }

    #[test]
    fn immutables_go_with_their_last_reader() {
        let mut fx = Fixture::new();
        let node = fx.node("org.khronos.openvx.channel_extract");
        let channel = fx.bound(node, 1);
        assert!(fx.xref.is_immutable(channel));
        let channel_elem = fx.elem(channel);
        assert_eq!(remove_node(&mut fx.cx(), node).unwrap(), Removal::Deleted);
        assert!(!fx.doc.is_attached(channel_elem));
        assert_eq!(count_data(&fx), 0);
    }

    #[test]
    fn local_object_with_one_user_is_left_alone() {
        let (mut fx, a_elem, _) = chain();
        let a = fx.doc.reference(a_elem).unwrap();
        let input = fx.bound(a, 0);
        let before = fx.doc.outline();
        assert_eq!(remove_data(&mut fx.cx(), input).unwrap(), Removal::Unchanged);
        assert_eq!(fx.doc.outline(), before);
    }

    #[test]
    fn shared_local_object_keeps_its_first_link() {
        let (mut fx, a_elem, b_elem) = chain();
        let a = fx.doc.reference(a_elem).unwrap();
        let shared = fx.bound(a, 1);
        assert_eq!(remove_data(&mut fx.cx(), shared).unwrap(), Removal::Disconnected);
        assert!(node_params(&fx.doc, a_elem).iter().any(|(i, _, r)| *i == 1 && *r == Some(shared)));
        assert!(node_params(&fx.doc, b_elem).iter().all(|(i, _, _)| *i != 0));
    }

    #[test]
    fn unlinked_global_is_deleted() {
        let mut fx = Fixture::new();
        let lut = insert_object(&mut fx.cx(), Scope::Global, DataTag::Lut, None).unwrap();
        let lut = fx.rebuild_tracking(lut);
        assert_eq!(remove(&mut fx.cx(), lut).unwrap(), Removal::Deleted);
        assert_eq!(count_data(&fx), 0);
    }

    #[test]
    fn pyramid_levels_cannot_be_removed() {
        let mut fx = Fixture::new();
        let pyramid = insert_object(&mut fx.cx(), Scope::Global, DataTag::Pyramid, Some(4)).unwrap();
        let pyramid = fx.rebuild_tracking(pyramid);
        let pyramid_elem = fx.elem(pyramid);
        let level = fx.doc.data_children(pyramid_elem).nth(1).unwrap();
        let level = fx.doc.reference(level).unwrap();
        let before = fx.doc.outline();
        match remove(&mut fx.cx(), level) {
            Err(EditError::Validation { reason }) => assert!(reason.contains("child")),
            other => panic!("expected refusal, got {:?}", other),
        }
        assert_eq!(fx.doc.outline(), before);
    }

    #[test]
    fn graphs_are_removed_but_globals_are_not() {
        let mut fx = Fixture::new();
        let second = insert_graph(&mut fx.cx()).unwrap();
        let second = fx.rebuild_tracking(second);
        assert!(matches!(
            remove_graph(&mut fx.cx(), GraphKey::Globals),
            Err(EditError::Validation { .. })
        ));
        assert_eq!(remove(&mut fx.cx(), second).unwrap(), Removal::Deleted);
        fx.rebuild();
        assert_eq!(fx.graphs.len(), 2);
    }
}
