//! Default objects and node attributes.
//!
//! Used by the synchronizer when it repairs an unbound kernel parameter and
//! by the insert operations.

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::tag::{DataTag, ElementKind};
use vxgraph_core::type_registry::TypeRegistry;
use vxgraph_core::types::TypeKind;
use vxgraph_storage::document::{ATTR_BORDERMODE, ATTR_NAME, ATTR_REFERENCE};
use vxgraph_storage::Document;

use crate::error::EditError;
use crate::ops::containers;

/// Fill value of a node's border constant.
pub const DEFAULT_BORDER_CONST: &str = "#00000000";
/// Scalar element type used when a parameter type has no `VX_TYPE_*` alias.
pub const FALLBACK_ELEM_TYPE: &str = "VX_TYPE_ENUM";
/// Extent of each dimension of a synthesized tensor.
pub const SYNTHESIZED_DIM_SIZE: u32 = 2;

/// What to create for a parameter of a given declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTemplate {
    pub tag: DataTag,
    /// Scalars only: the `elemType` attribute.
    pub elem_type: Option<String>,
}

/// Object types give their own tag, `vx_reference` gives `vx_reference`,
/// everything else becomes a scalar of the type's `VX_TYPE_*` alias.
pub fn template_for(types: &TypeRegistry, type_name: &str) -> ObjectTemplate {
    let is_object = types
        .lookup(type_name)
        .is_some_and(|t| t.kind == TypeKind::Object);
    if type_name == "vx_reference" || is_object {
        let tag = DataTag::for_vx_type(type_name).unwrap_or(DataTag::Reference);
        return ObjectTemplate {
            tag,
            elem_type: None,
        };
    }
    ObjectTemplate {
        tag: DataTag::Scalar,
        elem_type: Some(
            types
                .enum_from_type(type_name)
                .unwrap_or(FALLBACK_ELEM_TYPE)
                .to_string(),
        ),
    }
}

/// Appends a new `tag` element under `parent` with a fresh reference, the
/// tag's default attributes and a unique name derived from `name_base`.
pub fn create_object(
    doc: &mut Document,
    parent: ElemId,
    tag: DataTag,
    name_base: &str,
) -> Result<(ElemId, RefId), EditError> {
    let elem = doc.create_child(parent, tag.as_str())?;
    let reference = doc.new_ref();
    doc.set_attr(elem, ATTR_REFERENCE, reference.to_string())?;
    doc.set_attrs(elem, tag.default_attributes().iter().copied(), true)?;
    doc.assign_name(elem, name_base)?;
    Ok((elem, reference))
}

/// Like [`create_object`], then completes the structure the tag needs:
/// pyramid levels, tensor dimensions, scalar element type.
pub fn create_from_template(
    doc: &mut Document,
    parent: ElemId,
    template: &ObjectTemplate,
    name_base: &str,
) -> Result<(ElemId, RefId), EditError> {
    let (elem, reference) = create_object(doc, parent, template.tag, name_base)?;
    if let Some(elem_type) = &template.elem_type {
        doc.set_attr(elem, "elemType", elem_type.as_str())?;
    }
    match template.tag {
        DataTag::Pyramid => containers::set_pyramid_attributes(doc, elem, false)?,
        DataTag::Tensor => containers::fit_dimensions(doc, elem, SYNTHESIZED_DIM_SIZE)?,
        _ => {}
    }
    Ok((elem, reference))
}

/// Adds `bordermode` and a `borderconst` child when missing.
pub fn apply_node_defaults(doc: &mut Document, node: ElemId) -> Result<(), EditError> {
    if doc.attr(node, ATTR_BORDERMODE).is_none() {
        doc.set_attr(node, ATTR_BORDERMODE, "UNDEFINED")?;
    }
    if doc
        .children_of_kind(node, ElementKind::BorderConst)
        .next()
        .is_none()
    {
        let border = doc.create_child(node, "borderconst")?;
        doc.set_text(border, Some(DEFAULT_BORDER_CONST.to_string()))?;
    }
    Ok(())
}

/// Copies every attribute of `source` except `reference` and `name` onto
/// `dest`. With `overwrite` false only missing keys are added.
pub fn copy_plain_attributes(
    doc: &mut Document,
    dest: ElemId,
    source: ElemId,
    overwrite: bool,
) -> Result<(), EditError> {
    let attrs: Vec<(String, String)> = doc
        .get(source)?
        .attrs()
        .iter()
        .filter(|(k, _)| k.as_str() != ATTR_REFERENCE && k.as_str() != ATTR_NAME)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    doc.set_attrs(
        dest,
        attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        overwrite,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_follow_the_declared_type() {
        let types = TypeRegistry::new();
        assert_eq!(template_for(&types, "vx_image").tag, DataTag::Image);
        assert_eq!(template_for(&types, "vx_pyramid").tag, DataTag::Pyramid);
        assert_eq!(template_for(&types, "vx_reference").tag, DataTag::Reference);

        let scalar = template_for(&types, "vx_float32");
        assert_eq!(scalar.tag, DataTag::Scalar);
        assert_eq!(scalar.elem_type.as_deref(), Some("VX_TYPE_FLOAT32"));

        let policy = template_for(&types, "vx_convert_policy_e");
        assert_eq!(policy.elem_type.as_deref(), Some(FALLBACK_ELEM_TYPE));
    }

    #[test]
    fn created_objects_carry_defaults_and_unique_names() {
        let mut doc = Document::default();
        let root = doc.root();
        let (a, ra) = create_object(&mut doc, root, DataTag::Image, "input").unwrap();
        let (b, rb) = create_object(&mut doc, root, DataTag::Image, "input").unwrap();
        assert_ne!(ra, rb);
        assert_eq!(doc.name(a), Some("input"));
        assert_eq!(doc.name(b), Some("input_0"));
        assert_eq!(doc.attr(a, "format"), Some("U008"));
        assert_eq!(doc.by_reference(rb), Some(b));
        assert_eq!(doc.reference_count(), 3);
    }

    #[test]
    fn synthesized_tensor_gets_dimensions() {
        let mut doc = Document::default();
        let root = doc.root();
        let template = ObjectTemplate {
            tag: DataTag::Tensor,
            elem_type: None,
        };
        let (t, _) = create_from_template(&mut doc, root, &template, "t").unwrap();
        let dims: Vec<_> = doc.children_of_kind(t, ElementKind::Dimension).collect();
        assert_eq!(dims.len(), 3);
        assert_eq!(doc.attr(dims[2], "index"), Some("2"));
        assert_eq!(doc.attr(dims[2], "size"), Some("2"));
    }

    #[test]
    fn node_defaults_are_added_once() {
        let mut doc = Document::default();
        let graph = doc.children(doc.root())[0];
        let node = doc.create_child(graph, "node").unwrap();
        apply_node_defaults(&mut doc, node).unwrap();
        apply_node_defaults(&mut doc, node).unwrap();
        assert_eq!(doc.attr(node, ATTR_BORDERMODE), Some("UNDEFINED"));
        assert_eq!(doc.children(node).len(), 1);
        assert_eq!(doc.text(doc.children(node)[0]), Some(DEFAULT_BORDER_CONST));
    }
}
