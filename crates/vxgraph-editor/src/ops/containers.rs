//! Containers: delays, object arrays, pyramids, and tensor dimensions.
//!
//! All functions here work on the document alone, so the synchronizer can
//! use them while the index is being rebuilt. A count change on a container
//! that feeds a replicated node is propagated to the node's other
//! replicated containers until every one agrees.

use std::collections::BTreeSet;

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::tag::{DataTag, ElementKind};
use vxgraph_storage::document::{ATTR_INDEX, ATTR_REFERENCE, ATTR_REPLICATE_FLAG};
use vxgraph_storage::Document;

use crate::defaults::{copy_plain_attributes, create_object};
use crate::error::EditError;

use super::{attr_ref, attr_u32, links_into};

/// Largest slot count accepted for delays, object arrays and pyramids.
pub const MAX_COUNT: u32 = 1024;

/// Largest `number_of_dims` accepted for a tensor.
pub const MAX_TENSOR_DIMS: u32 = 4;

const ATTR_COUNT: &str = "count";
const ATTR_LEVELS: &str = "levels";

/// The attribute holding a container's size.
fn count_attr(tag: DataTag) -> &'static str {
    match tag {
        DataTag::Pyramid => ATTR_LEVELS,
        _ => ATTR_COUNT,
    }
}

pub(crate) fn check_count(count: u32) -> Result<(), EditError> {
    if count == 0 || count > MAX_COUNT {
        return Err(EditError::validation(format!(
            "count must be between 1 and {MAX_COUNT}, got {count}"
        )));
    }
    Ok(())
}

pub(crate) fn check_pyramid(levels: u32, scale: f64) -> Result<(), EditError> {
    check_count(levels)?;
    if !(scale > 0.0 && scale <= 1.0) {
        return Err(EditError::validation(format!(
            "pyramid scale must be in (0, 1], got {scale}"
        )));
    }
    Ok(())
}

pub(crate) fn check_tensor_dims(dims: u32) -> Result<(), EditError> {
    if dims == 0 || dims > MAX_TENSOR_DIMS {
        return Err(EditError::validation(format!(
            "a tensor has 1 to {MAX_TENSOR_DIMS} dimensions, got {dims}"
        )));
    }
    Ok(())
}

fn tag_of(doc: &Document, elem: ElemId) -> Result<DataTag, EditError> {
    doc.data_tag(elem)
        .ok_or_else(|| EditError::validation(format!("element {elem} is not a data object")))
}

// ---------------------------------------------------------------------------
// Delays and object arrays
// ---------------------------------------------------------------------------

/// Wraps `obj` as slot 0 of a new `wrapper` (delay or object array) with
/// `count` slots. Returns the new container.
/// Checks that `count` objects of `tag` can be held by a `wrapper`.
pub(crate) fn check_wrap(wrapper: DataTag, tag: DataTag, count: u32) -> Result<(), EditError> {
    check_count(count)?;
    let allowed: &[DataTag] = match wrapper {
        DataTag::Delay => &DataTag::DELAY_CHOICES,
        DataTag::ObjectArray => &DataTag::OBJECT_ARRAY_CHOICES,
        other => {
            return Err(EditError::validation(format!(
                "{other} cannot wrap other objects"
            )))
        }
    };
    if !allowed.contains(&tag) {
        return Err(EditError::validation(format!(
            "a {tag} cannot be an element of a {wrapper}"
        )));
    }
    Ok(())
}

pub fn wrap(
    doc: &mut Document,
    obj: ElemId,
    wrapper: DataTag,
    count: u32,
) -> Result<(ElemId, RefId), EditError> {
    let tag = tag_of(doc, obj)?;
    check_wrap(wrapper, tag, count)?;
    let parent = doc
        .parent(obj)
        .ok_or_else(|| EditError::reference(format!("element {obj} is detached")))?;

    let (container, reference) = create_object(doc, parent, wrapper, wrapper.as_str())?;
    doc.set_attr(container, ATTR_COUNT, count.to_string())?;
    doc.move_to(obj, container)?;
    set_container_count(doc, container)?;
    Ok((container, reference))
}

/// Brings the slots of a delay or object array in line with its `count`:
/// trailing slots are dropped, the rest take slot 0's attributes, missing
/// ones are added as copies of slot 0.
pub fn set_container_count(doc: &mut Document, container: ElemId) -> Result<(), EditError> {
    let count = attr_u32(doc, container, ATTR_COUNT).ok_or_else(|| {
        EditError::validation(format!("container {container} has no valid count"))
    })?;
    let slots: Vec<ElemId> = doc.data_children(container).collect();
    let Some(&first) = slots.first() else {
        return Err(EditError::validation(format!(
            "container {container} has no element to copy"
        )));
    };
    let old = slots.len() as u32;

    for (i, &slot) in slots.iter().enumerate() {
        if i as u32 >= count {
            doc.remove(slot)?;
        } else if slot != first {
            copy_attributes(doc, slot, first)?;
        }
    }
    for _ in old..count {
        insert_copy(doc, container, first)?;
    }
    if count != old {
        propagate_replication_count(doc, first, count)?;
    }
    Ok(())
}

/// Appends a copy of `exemplar` to `parent`: fresh reference, a name
/// derived from the exemplar's, the exemplar's plain attributes and
/// non-object children. Nested containers are rebuilt from their slot 0.
pub fn insert_copy(doc: &mut Document, parent: ElemId, exemplar: ElemId) -> Result<ElemId, EditError> {
    let tag = tag_of(doc, exemplar)?;
    let elem = doc.create_child(parent, tag.as_str())?;
    let reference = doc.new_ref();
    doc.set_attr(elem, ATTR_REFERENCE, reference.to_string())?;
    let base = doc.name(exemplar).unwrap_or(tag.as_str()).to_string();
    doc.assign_name(elem, &base)?;
    copy_plain_attributes(doc, elem, exemplar, false)?;
    if let Some(text) = doc.text(exemplar).map(str::to_string) {
        doc.set_text(elem, Some(text))?;
    }

    let children: Vec<ElemId> = doc.children(exemplar).to_vec();
    for child in &children {
        if !doc.kind(*child).is_data() {
            let copy = doc.duplicate(*child)?;
            doc.append(elem, copy)?;
        }
    }
    let first_slot = children.iter().copied().find(|c| doc.kind(*c).is_data());
    match (tag, first_slot) {
        (DataTag::Delay | DataTag::ObjectArray, Some(slot)) => {
            insert_copy(doc, elem, slot)?;
            set_container_count(doc, elem)?;
        }
        (DataTag::Pyramid, Some(level)) => {
            insert_copy(doc, elem, level)?;
            set_pyramid_attributes(doc, elem, false)?;
        }
        _ => {}
    }
    Ok(elem)
}

/// Overwrites `dest`'s plain attributes with `source`'s, descending into
/// containers.
pub fn copy_attributes(doc: &mut Document, dest: ElemId, source: ElemId) -> Result<(), EditError> {
    copy_plain_attributes(doc, dest, source, true)?;
    match doc.data_tag(dest) {
        Some(DataTag::Delay | DataTag::ObjectArray) => {
            let dest_first = doc.data_children(dest).next();
            let source_first = doc.data_children(source).next();
            if let (Some(d), Some(s)) = (dest_first, source_first) {
                copy_attributes(doc, d, s)?;
            }
            set_container_count(doc, dest)?;
        }
        Some(DataTag::Pyramid) => set_pyramid_attributes(doc, dest, false)?,
        _ => {}
    }
    Ok(())
}

/// Copies `elem`'s attributes to its same-tag siblings when it sits in a
/// delay or object array; with `up`, repeats for the enclosing containers.
pub fn propagate_child_attributes(doc: &mut Document, elem: ElemId, up: bool) -> Result<(), EditError> {
    let Some(parent) = doc.parent(elem) else {
        return Ok(());
    };
    if !matches!(
        doc.data_tag(parent),
        Some(DataTag::Delay | DataTag::ObjectArray)
    ) {
        return Ok(());
    }
    let tag = doc.data_tag(elem);
    let siblings: Vec<ElemId> = doc
        .data_children(parent)
        .filter(|s| *s != elem && doc.data_tag(*s) == tag)
        .collect();
    for sibling in siblings {
        copy_attributes(doc, sibling, elem)?;
    }
    if up {
        propagate_child_attributes(doc, parent, up)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pyramids
// ---------------------------------------------------------------------------

/// Wraps an image as level 0 of a new pyramid and generates the other
/// levels. The base is grown so that every level is at least one pixel.
pub fn make_pyramid(
    doc: &mut Document,
    image: ElemId,
    levels: u32,
    scale: f64,
) -> Result<(ElemId, RefId), EditError> {
    check_pyramid(levels, scale)?;
    if doc.data_tag(image) != Some(DataTag::Image) {
        return Err(EditError::validation("only images can become pyramids"));
    }
    let parent = doc
        .parent(image)
        .ok_or_else(|| EditError::reference(format!("element {image} is detached")))?;

    let min_dim = (f64::from(levels) / scale).round() as u32;
    let width = attr_u32(doc, image, "width").unwrap_or(min_dim).max(min_dim);
    let height = attr_u32(doc, image, "height").unwrap_or(min_dim).max(min_dim);
    let format = doc.attr(image, "format").unwrap_or("U008").to_string();
    doc.set_attr(image, "width", width.to_string())?;
    doc.set_attr(image, "height", height.to_string())?;
    doc.set_attr(image, "format", format.as_str())?;

    let (pyramid, reference) = create_object(doc, parent, DataTag::Pyramid, DataTag::Pyramid.as_str())?;
    doc.set_attr(pyramid, ATTR_LEVELS, levels.to_string())?;
    doc.set_attr(pyramid, "scale", scale.to_string())?;
    doc.set_attr(pyramid, "width", width.to_string())?;
    doc.set_attr(pyramid, "height", height.to_string())?;
    doc.set_attr(pyramid, "format", format)?;
    doc.move_to(image, pyramid)?;
    set_pyramid_attributes(doc, pyramid, false)?;
    Ok((pyramid, reference))
}

/// Regenerates a pyramid's levels from its `width`, `height`, `format`,
/// `scale` and `levels` attributes. With `up`, a pyramid inside a delay or
/// object array passes its attributes on to its siblings.
pub fn set_pyramid_attributes(doc: &mut Document, pyramid: ElemId, up: bool) -> Result<(), EditError> {
    let levels = attr_u32(doc, pyramid, ATTR_LEVELS)
        .ok_or_else(|| EditError::validation(format!("pyramid {pyramid} has no valid levels")))?;
    let scale: f64 = doc
        .attr(pyramid, "scale")
        .and_then(|s| s.trim().parse().ok())
        .filter(|s: &f64| *s > 0.0 && *s <= 1.0)
        .ok_or_else(|| EditError::validation(format!("pyramid {pyramid} has no valid scale")))?;
    let mut width = attr_u32(doc, pyramid, "width")
        .ok_or_else(|| EditError::validation(format!("pyramid {pyramid} has no valid width")))?;
    let mut height = attr_u32(doc, pyramid, "height")
        .ok_or_else(|| EditError::validation(format!("pyramid {pyramid} has no valid height")))?;
    let format = doc.attr(pyramid, "format").unwrap_or("U008").to_string();

    let existing: Vec<ElemId> = doc.data_children(pyramid).collect();
    let old = existing.len() as u32;
    let base_name = existing
        .first()
        .and_then(|l| doc.name(*l))
        .unwrap_or(DataTag::Image.as_str())
        .to_string();

    for i in 0..levels {
        let level = match existing.get(i as usize) {
            Some(&level) => level,
            None => {
                let level = doc.create_child(pyramid, DataTag::Image.as_str())?;
                let reference = doc.new_ref();
                doc.set_attr(level, ATTR_REFERENCE, reference.to_string())?;
                doc.assign_name(level, &base_name)?;
                level
            }
        };
        doc.set_attr(level, "width", width.to_string())?;
        doc.set_attr(level, "height", height.to_string())?;
        doc.set_attr(level, "format", format.as_str())?;
        width = scaled(width, scale);
        height = scaled(height, scale);
    }
    for &extra in existing.iter().skip(levels as usize) {
        doc.remove(extra)?;
    }

    if levels != old {
        let first = doc.data_children(pyramid).next();
        if let Some(first) = first {
            propagate_replication_count(doc, first, levels)?;
        }
    }
    if up {
        propagate_child_attributes(doc, pyramid, true)?;
    }
    Ok(())
}

fn scaled(size: u32, scale: f64) -> u32 {
    (f64::from(size) * scale).ceil() as u32
}

// ---------------------------------------------------------------------------
// Tensors
// ---------------------------------------------------------------------------

/// Grows or shrinks a tensor's `dimension` children to `number_of_dims`;
/// new dimensions get size `fill`.
pub fn fit_dimensions(doc: &mut Document, tensor: ElemId, fill: u32) -> Result<(), EditError> {
    let dims = attr_u32(doc, tensor, "number_of_dims").ok_or_else(|| {
        EditError::validation(format!("tensor {tensor} has no valid number_of_dims"))
    })?;
    let mut present = BTreeSet::new();
    for dim in doc.children_of_kind(tensor, ElementKind::Dimension).collect::<Vec<_>>() {
        match attr_u32(doc, dim, ATTR_INDEX) {
            Some(i) if i < dims && present.insert(i) => {}
            _ => doc.remove(dim)?,
        }
    }
    for i in (0..dims).filter(|i| !present.contains(i)) {
        let dim = doc.create_child(tensor, "dimension")?;
        doc.set_attr(dim, ATTR_INDEX, i.to_string())?;
        doc.set_attr(dim, "size", fill.to_string())?;
    }
    Ok(())
}

/// New tensor dimensions added by a resize get this size.
pub const RESIZED_DIM_SIZE: u32 = 1;

// ---------------------------------------------------------------------------
// Resizing and replication
// ---------------------------------------------------------------------------

/// Sets the size of a delay, object array, pyramid or tensor and
/// regenerates its children.
pub fn resize(doc: &mut Document, elem: ElemId, count: u32) -> Result<(), EditError> {
    let tag = tag_of(doc, elem)?;
    match tag {
        DataTag::Delay | DataTag::ObjectArray | DataTag::Pyramid => {
            check_count(count)?;
            doc.set_attr(elem, count_attr(tag), count.to_string())?;
            if tag == DataTag::Pyramid {
                set_pyramid_attributes(doc, elem, true)
            } else {
                set_container_count(doc, elem)?;
                propagate_child_attributes(doc, elem, true)
            }
        }
        DataTag::Tensor => {
            check_tensor_dims(count)?;
            doc.set_attr(elem, "number_of_dims", count.to_string())?;
            fit_dimensions(doc, elem, RESIZED_DIM_SIZE)
        }
        other => Err(EditError::validation(format!("a {other} has no size to change"))),
    }
}

/// After slot 0 of a container changed to `count` slots, resizes every other
/// container bound to a replicated parameter of the nodes `first` feeds.
pub fn propagate_replication_count(doc: &mut Document, first: ElemId, count: u32) -> Result<(), EditError> {
    let Some(reference) = doc.reference(first) else {
        return Ok(());
    };
    let nodes: BTreeSet<ElemId> = links_into(doc, &BTreeSet::from([reference]))
        .into_iter()
        .map(|(_, node, _)| node)
        .collect();

    for node in nodes {
        let replicated: Vec<ElemId> = doc
            .children_of_kind(node, ElementKind::Parameter)
            .filter(|p| doc.attr(*p, ATTR_REPLICATE_FLAG) == Some("true"))
            .collect();
        for param in replicated {
            let Some(obj) = attr_ref(doc, param, ATTR_REFERENCE).and_then(|r| doc.by_reference(r)) else {
                continue;
            };
            let Some(container) = doc.parent(obj) else {
                continue;
            };
            match doc.data_tag(container) {
                Some(tag @ (DataTag::ObjectArray | DataTag::Pyramid)) => {
                    if attr_u32(doc, container, count_attr(tag)) == Some(count) {
                        continue;
                    }
                    doc.set_attr(container, count_attr(tag), count.to_string())?;
                    if tag == DataTag::Pyramid {
                        set_pyramid_attributes(doc, container, true)?;
                    } else {
                        set_container_count(doc, container)?;
                    }
                }
                _ => tracing::warn!(
                    node = %node,
                    param = %param,
                    "replicated parameter is not bound to an object array or pyramid"
                ),
            }
        }
    }
    Ok(())
}
