//! Moving data objects between global and graph-local scope.
//!
//! Structural children never move on their own: every operation here acts
//! on the outermost object enclosing the one named.

use std::collections::BTreeSet;

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_storage::document::{ATTR_NODE, ATTR_PARAMETER};

use crate::error::EditError;

use super::{attr_ref, attr_u32, graph_params, links_into, node_params, structural_top, subtree_refs, EditContext};

/// Direction a [`toggle_scope`] went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeChange {
    Promoted,
    Demoted,
}

struct Target {
    top: ElemId,
    reference: RefId,
    name: String,
    refs: BTreeSet<RefId>,
    local: bool,
}

fn target(cx: &EditContext<'_>, obj: RefId) -> Result<Target, EditError> {
    let (elem, _) = cx.data(obj)?;
    let top = structural_top(cx.doc, elem);
    let reference = cx
        .doc
        .reference(top)
        .ok_or_else(|| EditError::reference(format!("element {top} has no reference")))?;
    Ok(Target {
        top,
        reference,
        name: cx.doc.name(top).unwrap_or_default().to_string(),
        refs: subtree_refs(cx.doc, top),
        local: cx.doc.parent(top) != Some(cx.doc.root()),
    })
}

/// The single graph whose nodes reference the target or its children.
fn only_graph(cx: &EditContext<'_>, t: &Target) -> Result<ElemId, EditError> {
    let graphs: BTreeSet<ElemId> = links_into(cx.doc, &t.refs)
        .into_iter()
        .map(|(graph, _, _)| graph)
        .collect();
    let mut iter = graphs.into_iter();
    match (iter.next(), iter.next()) {
        (Some(graph), None) => Ok(graph),
        (None, _) => Err(EditError::validation(format!(
            "{} is not referenced in any graph",
            t.name
        ))),
        (Some(_), Some(_)) => Err(EditError::validation(format!(
            "{} or one of its parts is referenced in more than one graph",
            t.name
        ))),
    }
}

/// True when a graph parameter of any graph is bound to one of `refs`.
fn bound_to_graph_parameter(cx: &EditContext<'_>, refs: &BTreeSet<RefId>) -> bool {
    let root = cx.doc.root();
    let graphs: Vec<ElemId> = cx
        .doc
        .children_of_kind(root, vxgraph_core::tag::ElementKind::Graph)
        .collect();
    graphs.into_iter().flat_map(|g| graph_params(cx.doc, g)).any(|gp| {
        let node = attr_ref(cx.doc, gp, ATTR_NODE).and_then(|n| cx.doc.by_reference(n));
        let index = attr_u32(cx.doc, gp, ATTR_PARAMETER);
        match (node, index) {
            (Some(node), Some(index)) => node_params(cx.doc, node)
                .into_iter()
                .any(|(i, _, r)| i == index && r.is_some_and(|r| refs.contains(&r))),
            _ => false,
        }
    })
}

/// Moves a graph-local object (with its structural children) to the root.
/// Returns the reference of the object that moved.
pub fn promote(cx: &mut EditContext<'_>, obj: RefId) -> Result<RefId, EditError> {
    let t = target(cx, obj)?;
    if !t.local {
        return Err(EditError::validation(format!("{} is already global", t.name)));
    }
    only_graph(cx, &t)?;
    let root = cx.doc.root();
    cx.doc.move_to(t.top, root)?;
    tracing::debug!(object = %t.reference, "promoted to global scope");
    Ok(t.reference)
}

/// Moves a global object into the one graph that uses it. Immutable
/// objects and objects backing a graph parameter stay global.
pub fn demote(cx: &mut EditContext<'_>, obj: RefId) -> Result<RefId, EditError> {
    let t = target(cx, obj)?;
    if t.local {
        return Err(EditError::validation(format!("{} is already graph-local", t.name)));
    }
    if t.refs.iter().any(|r| cx.xref.is_immutable(*r)) {
        return Err(EditError::validation("Immutable data must be global"));
    }
    if bound_to_graph_parameter(cx, &t.refs) {
        return Err(EditError::validation("Graph parameters must be global"));
    }
    let graph = only_graph(cx, &t)?;
    cx.doc.move_to(t.top, graph)?;
    tracing::debug!(object = %t.reference, "demoted to graph scope");
    Ok(t.reference)
}

/// Promotes a local object or demotes a global one.
pub fn toggle_scope(cx: &mut EditContext<'_>, obj: RefId) -> Result<ScopeChange, EditError> {
    if target(cx, obj)?.local {
        promote(cx, obj).map(|_| ScopeChange::Promoted)
    } else {
        demote(cx, obj).map(|_| ScopeChange::Demoted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::containers::wrap;
    use crate::ops::insert::{insert_graph, insert_graph_parameter, insert_node};
    use crate::ops::testing::Fixture;
    use vxgraph_core::tag::DataTag;

    const BOX: &str = "org.khronos.openvx.box_3x3";
    const EXTRACT: &str = "org.khronos.openvx.channel_extract";

    #[test]
    fn promote_then_demote_round_trips() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let output = fx.bound(node, 1);
        let count = fx.doc.reference_count();

        assert_eq!(promote(&mut fx.cx(), output).unwrap(), output);
        let elem = fx.elem(output);
        assert_eq!(fx.doc.parent(elem), Some(fx.doc.root()));
        let output = fx.rebuild_tracking(output);
        assert_eq!(fx.doc.reference_count(), count);
        assert!(!fx.xref.is_virtual(output));

        assert_eq!(toggle_scope(&mut fx.cx(), output).unwrap(), ScopeChange::Demoted);
        let output = fx.rebuild_tracking(output);
        assert!(fx.xref.is_virtual(output));
    }

    #[test]
    fn global_promote_and_local_demote_are_refused() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let input = fx.bound(node, 0);
        match demote(&mut fx.cx(), input) {
            Err(EditError::Validation { reason }) => assert!(reason.contains("already")),
            other => panic!("expected refusal, got {:?}", other),
        }
        promote(&mut fx.cx(), input).unwrap();
        let input = fx.rebuild_tracking(input);
        assert!(promote(&mut fx.cx(), input).is_err());
    }

    #[test]
    fn immutables_stay_global() {
        let mut fx = Fixture::new();
        fx.node(EXTRACT);
        let channel = fx
            .xref
            .iter()
            .find(|(_, e)| e.name == "channel")
            .map(|(r, _)| r)
            .unwrap();
        match demote(&mut fx.cx(), channel) {
            Err(EditError::Validation { reason }) => assert_eq!(reason, "Immutable data must be global"),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn graph_parameter_objects_stay_global() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let graph = fx.graph();
        let input = fx.bound(node, 0);
        insert_graph_parameter(&mut fx.cx(), graph, input, Some(node)).unwrap();
        let input = fx.rebuild_tracking(input);
        let before = fx.doc.outline();
        match demote(&mut fx.cx(), input) {
            Err(EditError::Validation { reason }) => assert_eq!(reason, "Graph parameters must be global"),
            other => panic!("expected refusal, got {:?}", other),
        }
        assert_eq!(fx.doc.outline(), before);
    }

    #[test]
    fn objects_used_by_two_graphs_cannot_be_demoted() {
        let mut fx = Fixture::new();
        let first = fx.node(BOX);
        let input = fx.bound(first, 0);
        promote(&mut fx.cx(), input).unwrap();
        let second_graph = insert_graph(&mut fx.cx()).unwrap();
        let second = insert_node(&mut fx.cx(), second_graph, BOX).unwrap();
        let second = fx.elem(second);
        let param = fx.doc.create_child(second, "parameter").unwrap();
        fx.doc.set_attr(param, "index", "0").unwrap();
        fx.doc.set_attr(param, "reference", input.to_string()).unwrap();
        let input = fx.rebuild_tracking(input);
        match demote(&mut fx.cx(), input) {
            Err(EditError::Validation { reason }) => assert!(reason.contains("more than one graph")),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn children_redirect_to_their_container() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let input = fx.bound(node, 0);
        let input_elem = fx.elem(input);
        let (array, array_ref) = wrap(&mut fx.doc, input_elem, DataTag::ObjectArray, 2).unwrap();
        let input = fx.rebuild_tracking(input);
        let array_ref = fx.doc.reference(array).unwrap_or(array_ref);
        assert_eq!(promote(&mut fx.cx(), input).unwrap(), array_ref);
        assert_eq!(fx.doc.parent(array), Some(fx.doc.root()));
    }
}
