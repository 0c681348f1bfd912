//! Node replication: running one node over every element of object arrays
//! or pyramid levels bound to its parameters.

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::kernels::Direction;
use vxgraph_core::tag::DataTag;
use vxgraph_storage::document::{ATTR_IS_REPLICATED, ATTR_REPLICATE_FLAG};

use crate::error::EditError;

use super::containers::{self, MAX_COUNT};
use super::insert::DEFAULT_PYRAMID_SCALE;
use super::{node_params, EditContext};

/// A node parameter that can take part in replication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationCandidate {
    pub index: u32,
    pub name: String,
    pub type_name: String,
    pub direction: Direction,
    pub object: RefId,
    /// Current `replicate_flag` of the binding.
    pub replicated: bool,
    /// Enclosing object array or pyramid and its size, when the object is
    /// its slot 0.
    pub container: Option<(DataTag, u32)>,
    param: ElemId,
    elem: ElemId,
}

/// Mutable, bound parameters of `node` whose object is either free-standing
/// or slot 0 of an object array or pyramid.
pub fn possible_replicates(cx: &EditContext<'_>, node: RefId) -> Result<Vec<ReplicationCandidate>, EditError> {
    let node_elem = cx.node(node)?;
    let signature = cx.signature(node_elem)?;
    let mut out = Vec::new();
    for (index, param, object) in node_params(cx.doc, node_elem) {
        let Some(sig) = signature.param(index as usize) else {
            continue;
        };
        if sig.is_immutable() {
            continue;
        }
        let Some((object, elem)) = object.and_then(|r| cx.doc.by_reference(r).map(|e| (r, e))) else {
            continue;
        };
        let parent = cx.doc.parent(elem);
        let container = match parent.and_then(|p| cx.doc.data_tag(p).map(|t| (p, t))) {
            Some((p, tag @ (DataTag::ObjectArray | DataTag::Pyramid))) => {
                if cx.doc.data_children(p).next() != Some(elem) {
                    continue;
                }
                Some((tag, cx.doc.data_children(p).count() as u32))
            }
            Some(_) => continue,
            None => None,
        };
        out.push(ReplicationCandidate {
            index,
            name: sig.name.clone(),
            type_name: sig.type_name.clone(),
            direction: sig.direction,
            object,
            replicated: cx.doc.attr(param, ATTR_REPLICATE_FLAG) == Some("true"),
            container,
            param,
            elem,
        });
    }
    Ok(out)
}

/// Replicates `node` over the parameters in `params`. Parameters not yet in
/// a container get an object array (or, with `as_pyramid`, a pyramid for
/// images) of the count shared by the selected containers, or `count` when
/// none exists yet. An empty selection turns replication off. Returns the
/// replication count (0 when turned off).
pub fn replicate(
    cx: &mut EditContext<'_>,
    node: RefId,
    params: &[u32],
    count: Option<u32>,
    as_pyramid: bool,
) -> Result<u32, EditError> {
    let node_elem = cx.node(node)?;
    let candidates = possible_replicates(cx, node)?;

    if params.is_empty() {
        for c in &candidates {
            cx.doc.set_attr(c.param, ATTR_REPLICATE_FLAG, "false")?;
        }
        cx.doc.set_attr(node_elem, ATTR_IS_REPLICATED, "false")?;
        tracing::debug!(node = %node, "replication turned off");
        return Ok(0);
    }

    let mut selected = Vec::new();
    let mut existing: Option<u32> = None;
    for &index in params {
        let c = candidates
            .iter()
            .find(|c| c.index == index)
            .ok_or_else(|| EditError::validation(format!("parameter {index} cannot be replicated")))?;
        match c.container {
            Some((tag, size)) => match existing {
                Some(n) if n != size => {
                    let what = if tag == DataTag::Pyramid {
                        "levels"
                    } else {
                        "elements"
                    };
                    return Err(EditError::validation(format!(
                        "the {tag} for parameter {index} has {size} {what}, not {n}"
                    )));
                }
                _ => existing = Some(size),
            },
            None => {
                let tag = cx.doc.data_tag(c.elem).ok_or_else(|| {
                    EditError::validation(format!("parameter {index} is not bound to a data object"))
                })?;
                let pyramid = as_pyramid && tag == DataTag::Image;
                if !pyramid && !DataTag::OBJECT_ARRAY_CHOICES.contains(&tag) {
                    return Err(EditError::validation(format!(
                        "a {tag} cannot be an element of an object array"
                    )));
                }
            }
        }
        selected.push(c);
    }

    let n = match (existing, count) {
        (Some(e), Some(c)) if e != c => {
            return Err(EditError::validation(format!(
                "the selected containers hold {e} elements, not {c}"
            )))
        }
        (Some(e), _) => e,
        (None, Some(c)) => c,
        (None, None) => return Err(EditError::validation("the number of replicates is required")),
    };
    if n == 0 || n > MAX_COUNT {
        return Err(EditError::validation(format!(
            "the number of replicates must be between 1 and {MAX_COUNT}"
        )));
    }

    for c in &candidates {
        cx.doc.set_attr(c.param, ATTR_REPLICATE_FLAG, "false")?;
    }
    for c in selected {
        if c.container.is_none() {
            if as_pyramid && cx.doc.data_tag(c.elem) == Some(DataTag::Image) {
                containers::make_pyramid(cx.doc, c.elem, n, DEFAULT_PYRAMID_SCALE)?;
            } else {
                containers::wrap(cx.doc, c.elem, DataTag::ObjectArray, n)?;
            }
        }
        cx.doc.set_attr(c.param, ATTR_REPLICATE_FLAG, "true")?;
    }
    cx.doc.set_attr(node_elem, ATTR_IS_REPLICATED, "true")?;
    tracing::debug!(node = %node, count = n, params = ?params, "replicated node");
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing::Fixture;

    const BOX: &str = "org.khronos.openvx.box_3x3";
    const EXTRACT: &str = "org.khronos.openvx.channel_extract";

    fn container_of(fx: &Fixture, object: RefId) -> (DataTag, usize) {
        let parent = fx.doc.parent(fx.elem(object)).unwrap();
        (
            fx.doc.data_tag(parent).unwrap(),
            fx.doc.data_children(parent).count(),
        )
    }

    #[test]
    fn candidates_skip_immutables() {
        let mut fx = Fixture::new();
        let node = fx.node(EXTRACT);
        let names: Vec<String> = possible_replicates(&fx.cx(), node)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["input", "output"]);
    }

    #[test]
    fn replicate_wraps_free_objects() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let input = fx.bound(node, 0);
        let output = fx.bound(node, 1);
        assert_eq!(replicate(&mut fx.cx(), node, &[0, 1], Some(4), false).unwrap(), 4);
        assert_eq!(container_of(&fx, input), (DataTag::ObjectArray, 4));
        assert_eq!(container_of(&fx, output), (DataTag::ObjectArray, 4));
        assert_eq!(fx.doc.attr(fx.elem(node), ATTR_IS_REPLICATED), Some("true"));

        let node = fx.rebuild_tracking(node);
        let candidates = possible_replicates(&fx.cx(), node).unwrap();
        assert!(candidates.iter().all(|c| c.replicated));
        assert!(candidates
            .iter()
            .all(|c| c.container == Some((DataTag::ObjectArray, 4))));
    }

    #[test]
    fn existing_containers_set_the_count() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let input = fx.bound(node, 0);
        replicate(&mut fx.cx(), node, &[0], Some(3), true).unwrap();
        assert_eq!(container_of(&fx, input), (DataTag::Pyramid, 3));
        let node = fx.rebuild_tracking(node);

        assert_eq!(replicate(&mut fx.cx(), node, &[0, 1], None, false).unwrap(), 3);
        let output = fx.bound(node, 1);
        assert_eq!(container_of(&fx, output), (DataTag::ObjectArray, 3));
    }

    #[test]
    fn conflicting_counts_are_refused() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        replicate(&mut fx.cx(), node, &[0], Some(3), false).unwrap();
        let node = fx.rebuild_tracking(node);
        let before = fx.doc.outline();
        match replicate(&mut fx.cx(), node, &[0, 1], Some(5), false) {
            Err(EditError::Validation { reason }) => assert!(reason.contains("3")),
            other => panic!("expected refusal, got {:?}", other),
        }
        assert!(replicate(&mut fx.cx(), node, &[1], None, false).is_err());
        assert!(replicate(&mut fx.cx(), node, &[7], Some(2), false).is_err());
        assert_eq!(fx.doc.outline(), before);
    }

    #[test]
    fn empty_selection_turns_replication_off() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        replicate(&mut fx.cx(), node, &[0, 1], Some(2), false).unwrap();
        let node = fx.rebuild_tracking(node);
        assert_eq!(replicate(&mut fx.cx(), node, &[], None, false).unwrap(), 0);
        let elem = fx.elem(node);
        assert_eq!(fx.doc.attr(elem, ATTR_IS_REPLICATED), Some("false"));
        assert!(node_params(&fx.doc, elem)
            .iter()
            .all(|(_, p, _)| fx.doc.attr(*p, ATTR_REPLICATE_FLAG) == Some("false")));
    }

    #[test]
    fn resizing_one_container_resizes_its_siblings() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let input = fx.bound(node, 0);
        let output = fx.bound(node, 1);
        replicate(&mut fx.cx(), node, &[0, 1], Some(4), false).unwrap();
        let array = fx.doc.parent(fx.elem(input)).unwrap();
        containers::resize(&mut fx.doc, array, 6).unwrap();
        assert_eq!(container_of(&fx, input), (DataTag::ObjectArray, 6));
        assert_eq!(container_of(&fx, output), (DataTag::ObjectArray, 6));
    }
}
