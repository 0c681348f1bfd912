//! Merging two data objects into one.
//!
//! The merge is planned against the index and document first; nothing is
//! changed unless every check passes. The survivor keeps its identity and
//! every binding of the eliminated object is rewritten to point at it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::kernels::Direction;
use vxgraph_core::tag::DataTag;
use vxgraph_storage::document::{ATTR_NAME, ATTR_REFERENCE};
use vxgraph_storage::{hash_shape, Document};

use crate::defaults::copy_plain_attributes;
use crate::error::EditError;
use crate::xref::{ParamLink, Xref};

use super::{replant, EditContext};

/// What to do when the two objects differ in plain attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    #[default]
    Reject,
    Accept,
}

/// Result of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub survivor: RefId,
    pub eliminated: RefId,
    /// Attributes whose values differed, as (key, survivor-side, other-side).
    pub mismatched: Vec<(String, String, Option<String>)>,
    /// The survivor was moved to global scope because it backs a graph
    /// parameter.
    pub promoted: bool,
}

struct Plan {
    survivor: (RefId, ElemId),
    eliminated: (RefId, ElemId),
    /// A `vx_reference` object that takes the other object's tag and
    /// attributes before merging: (target, exemplar).
    convert: Option<(ElemId, ElemId)>,
    mismatched: Vec<(String, String, Option<String>)>,
    promote: bool,
}

/// Merges `a` and `b`. At most one of them may be written; the writer's
/// node must not be reachable from the other object.
pub fn merge(
    cx: &mut EditContext<'_>,
    a: RefId,
    b: RefId,
    policy: MismatchPolicy,
) -> Result<MergeOutcome, EditError> {
    let plan = plan(cx, a, b, policy)?;
    apply(cx.doc, &plan)?;
    tracing::debug!(
        survivor = %plan.survivor.0,
        eliminated = %plan.eliminated.0,
        promoted = plan.promote,
        "merged data objects"
    );
    Ok(MergeOutcome {
        survivor: plan.survivor.0,
        eliminated: plan.eliminated.0,
        mismatched: plan.mismatched,
        promoted: plan.promote,
    })
}

fn plan(cx: &EditContext<'_>, a: RefId, b: RefId, policy: MismatchPolicy) -> Result<Plan, EditError> {
    if a == b {
        return Err(EditError::validation("cannot merge an object with itself"));
    }
    cx.data(a)?;
    cx.data(b)?;
    let (xa, xb) = (cx.xref.entry(a)?, cx.xref.entry(b)?);
    if xa.writer.is_some() && xb.writer.is_some() {
        return Err(EditError::validation(
            "Cannot merge data objects when both are outputs",
        ));
    }
    // the source holds the writer, if there is one
    let (source, sink) = if xb.writer.is_some() { (b, a) } else { (a, b) };
    if let Some(writer) = cx.xref.entry(source)?.writer {
        if reaches(cx.xref, sink, writer.node) {
            let graph = cx
                .xref
                .param(writer)
                .and_then(|p| cx.xref.get(p.graph))
                .map(|g| g.name.clone())
                .unwrap_or_default();
            return Err(EditError::Cycle {
                graph,
                reason: "merging these objects would create a cycle".into(),
            });
        }
    }

    let (source_elem, source_tag) = cx.data(source)?;
    let (sink_elem, sink_tag) = cx.data(sink)?;
    let doc: &Document = cx.doc;

    let compatible = source_tag == sink_tag || (source_tag.is_image_like() && sink_tag.is_image_like());
    let convert = if compatible {
        None
    } else if source_tag == DataTag::Reference {
        Some((source_elem, sink_elem))
    } else if sink_tag == DataTag::Reference {
        Some((sink_elem, source_elem))
    } else {
        return Err(EditError::validation(format!(
            "Data objects are not compatible: {source_tag} and {sink_tag}"
        )));
    };
    let mismatched = if convert.is_some() {
        Vec::new()
    } else {
        attribute_mismatches(doc, format_holder(doc, source_elem), format_holder(doc, sink_elem))
    };

    let source_child = has_data_ancestor(doc, source_elem);
    let sink_child = has_data_ancestor(doc, sink_elem);
    if source_child && sink_child {
        return Err(EditError::validation("Cannot merge two child data objects"));
    }
    if doc.is_ancestor(source_elem, sink_elem) || doc.is_ancestor(sink_elem, source_elem) {
        return Err(EditError::validation("Cannot merge related data objects"));
    }
    let is_parent = |e: ElemId| doc.data_children(e).next().is_some();
    if is_parent(source_elem) && is_parent(sink_elem) {
        if !mismatched.is_empty() || source_tag != sink_tag {
            return Err(EditError::validation(
                "Cannot merge two parent objects with differing attributes",
            ));
        }
        if hash_shape(doc, source_elem)? != hash_shape(doc, sink_elem)? {
            return Err(EditError::validation(format!(
                "Cannot merge {source_tag}s with differing contents"
            )));
        }
    }
    if !mismatched.is_empty() && policy == MismatchPolicy::Reject {
        let keys: Vec<&str> = mismatched.iter().map(|(k, _, _)| k.as_str()).collect();
        return Err(EditError::validation(format!(
            "the objects differ in {}",
            keys.join(", ")
        )));
    }

    let promote = cx.xref.feeds_graph_param(source) || cx.xref.feeds_graph_param(sink);
    let (survivor, eliminated) = if sink_child {
        ((sink, sink_elem), (source, source_elem))
    } else {
        ((source, source_elem), (sink, sink_elem))
    };
    Ok(Plan {
        survivor,
        eliminated,
        convert,
        mismatched,
        promote,
    })
}

fn apply(doc: &mut Document, plan: &Plan) -> Result<(), EditError> {
    if let Some((target, exemplar)) = plan.convert {
        copy_plain_attributes(doc, target, exemplar, true)?;
        let local = doc.local_name(exemplar).unwrap_or_default().to_string();
        doc.set_local_name(target, &local)?;
    }
    let (survivor, survivor_elem) = plan.survivor;
    let (eliminated, eliminated_elem) = plan.eliminated;

    let derived: Vec<ElemId> = doc
        .data_children(eliminated_elem)
        .filter(|c| doc.data_tag(*c).is_some_and(DataTag::is_derivation))
        .collect();
    for child in derived {
        doc.move_to(child, survivor_elem)?;
    }

    let old = eliminated.to_string();
    let rebind: Vec<ElemId> = doc
        .preorder()
        .into_iter()
        .filter(|e| *e != eliminated_elem && doc.attr(*e, ATTR_REFERENCE) == Some(old.as_str()))
        .collect();
    for elem in rebind {
        doc.set_attr(elem, ATTR_REFERENCE, survivor.to_string())?;
    }
    doc.remove(eliminated_elem)?;

    if plan.promote {
        let root = doc.root();
        replant(doc, survivor_elem, root)?;
    }
    Ok(())
}

/// True when `target` reads, directly or downstream, from `from`. Bidirectional
/// links read their object even when the index records them as its writer.
fn reaches(xref: &Xref, from: RefId, target: RefId) -> bool {
    let mut bidirectional: BTreeMap<RefId, Vec<ParamLink>> = BTreeMap::new();
    for (link, param) in xref.params() {
        if param.direction == Direction::Bidirectional {
            bidirectional.entry(param.object).or_default().push(link);
        }
    }

    let mut seen = BTreeSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(object) = queue.pop_front() {
        let readers = xref.get(object).map(|e| e.readers.as_slice()).unwrap_or_default();
        let shared = bidirectional.get(&object).map(Vec::as_slice).unwrap_or_default();
        for reader in readers.iter().chain(shared) {
            if reader.node == target {
                return true;
            }
            for (_, param) in xref.params_of(reader.node) {
                if param.direction.writes() && seen.insert(param.object) {
                    queue.push_back(param.object);
                }
            }
        }
    }
    false
}

/// ROIs and planes compare by the nearest enclosing element with a `format`.
fn format_holder(doc: &Document, elem: ElemId) -> ElemId {
    match doc.data_tag(elem) {
        Some(DataTag::Roi | DataTag::Plane) => std::iter::once(elem)
            .chain(doc.ancestors(elem))
            .find(|e| doc.attr(*e, "format").is_some())
            .unwrap_or(elem),
        _ => elem,
    }
}

fn attribute_mismatches(doc: &Document, from: ElemId, to: ElemId) -> Vec<(String, String, Option<String>)> {
    let Ok(el) = doc.get(from) else {
        return Vec::new();
    };
    el.attrs()
        .iter()
        .filter(|(k, _)| k.as_str() != ATTR_NAME && k.as_str() != ATTR_REFERENCE)
        .filter(|(k, v)| doc.attr(to, k) != Some(v.as_str()))
        .map(|(k, v)| (k.clone(), v.clone(), doc.attr(to, k).map(str::to_string)))
        .collect()
}

fn has_data_ancestor(doc: &Document, elem: ElemId) -> bool {
    doc.ancestors(elem).any(|a| doc.kind(a).is_data())
}
