//! Insert operations: graphs, nodes, data objects, graph parameters and
//! optional node parameters.
//!
//! Inserts only touch the document. Parameters of a new node are bound to
//! default objects by the next build.

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::kernels::Direction;
use vxgraph_core::tag::{DataTag, IMAGE_FORMATS};
use vxgraph_core::types::TypeKind;
use vxgraph_storage::document::{
    ATTR_INDEX, ATTR_IS_REPLICATED, ATTR_NODE, ATTR_PARAMETER, ATTR_REFERENCE,
    ATTR_REPLICATE_FLAG,
};

use crate::defaults::{apply_node_defaults, create_from_template, create_object, ObjectTemplate, SYNTHESIZED_DIM_SIZE};
use crate::error::EditError;
use crate::xref::ParamLink;

use super::{containers, graph_of, graph_params, node_params, renumber_graph_params, replant, EditContext};

/// Slot count of delays and object arrays, and level count of pyramids,
/// when the caller gives none.
pub const DEFAULT_COUNT: u32 = 3;
pub const DEFAULT_PYRAMID_SCALE: f64 = 0.5;
pub const DEFAULT_TENSOR_DIMS: [u32; 3] = [2, 2, 2];

/// Where a new data object goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Under the document root, shared by every graph.
    Global,
    /// Local to the graph with this reference.
    Graph(RefId),
}

impl Scope {
    fn parent(self, cx: &EditContext<'_>) -> Result<ElemId, EditError> {
        match self {
            Scope::Global => Ok(cx.doc.root()),
            Scope::Graph(graph) => cx.graph(graph),
        }
    }
}

// ---------------------------------------------------------------------------
// Graphs and nodes
// ---------------------------------------------------------------------------

/// Appends a graph named after `config.default_graph_name`.
pub fn insert_graph(cx: &mut EditContext<'_>) -> Result<RefId, EditError> {
    let root = cx.doc.root();
    let elem = cx.doc.create_child(root, "graph")?;
    let reference = cx.doc.new_ref();
    cx.doc.set_attr(elem, ATTR_REFERENCE, reference.to_string())?;
    let name = cx.doc.assign_name(elem, &cx.config.default_graph_name)?;
    tracing::debug!(graph = %name, reference = %reference, "inserted graph");
    Ok(reference)
}

/// Appends a node running `kernel` to a graph.
pub fn insert_node(cx: &mut EditContext<'_>, graph: RefId, kernel: &str) -> Result<RefId, EditError> {
    let graph_elem = cx.graph(graph)?;
    let signature = cx.kernels.require(kernel)?;

    let node = cx.doc.create_child(graph_elem, "node")?;
    let reference = cx.doc.new_ref();
    cx.doc.set_attr(node, ATTR_REFERENCE, reference.to_string())?;
    cx.doc.set_attr(node, ATTR_IS_REPLICATED, "false")?;
    cx.doc.assign_name(node, "node")?;
    let kernel_elem = cx.doc.create_child(node, "kernel")?;
    cx.doc.set_text(kernel_elem, Some(signature.name.clone()))?;
    apply_node_defaults(cx.doc, node)?;
    tracing::debug!(kernel = %signature.name, reference = %reference, "inserted node");
    Ok(reference)
}

// ---------------------------------------------------------------------------
// Data objects
// ---------------------------------------------------------------------------

/// Inserts a default object of any tag. Pyramids, delays and object arrays
/// are built around a default image, with `count` levels or slots.
pub fn insert_object(
    cx: &mut EditContext<'_>,
    scope: Scope,
    tag: DataTag,
    count: Option<u32>,
) -> Result<RefId, EditError> {
    let count = count.unwrap_or(DEFAULT_COUNT);
    match tag {
        DataTag::Pyramid => insert_pyramid(cx, scope, count, DEFAULT_PYRAMID_SCALE),
        DataTag::Delay => insert_delay(cx, scope, DataTag::Image, count),
        DataTag::ObjectArray => insert_object_array(cx, scope, DataTag::Image, count),
        DataTag::Tensor => insert_tensor(cx, scope, &DEFAULT_TENSOR_DIMS, "VX_TYPE_UINT8", 0),
        _ => {
            let parent = scope.parent(cx)?;
            let (_, reference) = create_object(cx.doc, parent, tag, tag.as_str())?;
            Ok(reference)
        }
    }
}

pub fn insert_image(
    cx: &mut EditContext<'_>,
    scope: Scope,
    format: &str,
    width: u32,
    height: u32,
) -> Result<RefId, EditError> {
    if !IMAGE_FORMATS.contains(&format) {
        return Err(EditError::validation(format!("unknown image format '{format}'")));
    }
    if width == 0 || height == 0 {
        return Err(EditError::validation("image width and height must be positive"));
    }
    let parent = scope.parent(cx)?;
    let (elem, reference) = create_object(cx.doc, parent, DataTag::Image, "image")?;
    cx.doc.set_attr(elem, "width", width.to_string())?;
    cx.doc.set_attr(elem, "height", height.to_string())?;
    cx.doc.set_attr(elem, "format", format)?;
    Ok(reference)
}

/// Inserts a tensor with one `dimension` child per entry of `dims`.
pub fn insert_tensor(
    cx: &mut EditContext<'_>,
    scope: Scope,
    dims: &[u32],
    data_type: &str,
    fixed_point_position: i32,
) -> Result<RefId, EditError> {
    if dims.is_empty() || dims.contains(&0) {
        return Err(EditError::validation("tensor dimensions must be non-empty and positive"));
    }
    containers::check_tensor_dims(u32::try_from(dims.len()).unwrap_or(u32::MAX))?;
    if cx.types.type_from_enum(data_type).is_none() {
        return Err(EditError::validation(format!("unknown tensor data type '{data_type}'")));
    }
    let parent = scope.parent(cx)?;
    let (elem, reference) = create_object(cx.doc, parent, DataTag::Tensor, "tensor")?;
    cx.doc.set_attr(elem, "number_of_dims", dims.len().to_string())?;
    cx.doc.set_attr(elem, "data_type", data_type)?;
    cx.doc
        .set_attr(elem, "fixed_point_position", fixed_point_position.to_string())?;
    for (i, size) in dims.iter().enumerate() {
        let dim = cx.doc.create_child(elem, "dimension")?;
        cx.doc.set_attr(dim, ATTR_INDEX, i.to_string())?;
        cx.doc.set_attr(dim, "size", size.to_string())?;
    }
    Ok(reference)
}

pub fn insert_pyramid(
    cx: &mut EditContext<'_>,
    scope: Scope,
    levels: u32,
    scale: f64,
) -> Result<RefId, EditError> {
    containers::check_pyramid(levels, scale)?;
    let image = insert_image(cx, scope, "U008", 32, 32)?;
    make_pyramid(cx, image, levels, scale)
}

/// Inserts a delay of `count` default `tag` objects.
pub fn insert_delay(cx: &mut EditContext<'_>, scope: Scope, tag: DataTag, count: u32) -> Result<RefId, EditError> {
    containers::check_wrap(DataTag::Delay, tag, count)?;
    let exemplar = insert_exemplar(cx, scope, tag)?;
    make_delay(cx, exemplar, count)
}

/// Inserts an object array of `count` default `tag` objects.
pub fn insert_object_array(
    cx: &mut EditContext<'_>,
    scope: Scope,
    tag: DataTag,
    count: u32,
) -> Result<RefId, EditError> {
    containers::check_wrap(DataTag::ObjectArray, tag, count)?;
    let exemplar = insert_exemplar(cx, scope, tag)?;
    make_object_array(cx, exemplar, count)
}

fn insert_exemplar(cx: &mut EditContext<'_>, scope: Scope, tag: DataTag) -> Result<RefId, EditError> {
    if tag.is_container() {
        return Err(EditError::validation(format!(
            "a {tag} cannot be the element type of a container"
        )));
    }
    let parent = scope.parent(cx)?;
    let (elem, reference) = create_from_template(
        cx.doc,
        parent,
        &ObjectTemplate {
            tag,
            elem_type: None,
        },
        tag.as_str(),
    )?;
    if tag == DataTag::Tensor {
        containers::fit_dimensions(cx.doc, elem, SYNTHESIZED_DIM_SIZE)?;
    }
    Ok(reference)
}

fn unwrappable(cx: &EditContext<'_>, obj: RefId) -> Result<ElemId, EditError> {
    let (elem, _) = cx.data(obj)?;
    if cx.xref.is_child(obj) {
        return Err(EditError::validation(format!(
            "{} is part of another object and cannot be wrapped",
            cx.doc.name(elem).unwrap_or_default()
        )));
    }
    Ok(elem)
}

/// Wraps an existing object as slot 0 of a new object array.
pub fn make_object_array(cx: &mut EditContext<'_>, obj: RefId, count: u32) -> Result<RefId, EditError> {
    let elem = unwrappable(cx, obj)?;
    let (_, reference) = containers::wrap(cx.doc, elem, DataTag::ObjectArray, count)?;
    Ok(reference)
}

/// Wraps an existing object as slot 0 of a new delay.
pub fn make_delay(cx: &mut EditContext<'_>, obj: RefId, count: u32) -> Result<RefId, EditError> {
    let elem = unwrappable(cx, obj)?;
    let (_, reference) = containers::wrap(cx.doc, elem, DataTag::Delay, count)?;
    Ok(reference)
}

/// Turns an existing image into level 0 of a new pyramid.
pub fn make_pyramid(cx: &mut EditContext<'_>, image: RefId, levels: u32, scale: f64) -> Result<RefId, EditError> {
    let elem = unwrappable(cx, image)?;
    let (_, reference) = containers::make_pyramid(cx.doc, elem, levels, scale)?;
    Ok(reference)
}

/// Changes the slot count of a delay or object array, the level count of a
/// pyramid, or the dimension count of a tensor.
pub fn resize(cx: &mut EditContext<'_>, obj: RefId, count: u32) -> Result<(), EditError> {
    let (elem, _) = cx.data(obj)?;
    containers::resize(cx.doc, elem, count)
}

pub fn set_tensor_dims(cx: &mut EditContext<'_>, tensor: RefId, dims: u32) -> Result<(), EditError> {
    let (elem, tag) = cx.data(tensor)?;
    if tag != DataTag::Tensor {
        return Err(EditError::validation(format!("reference {tensor} is not a tensor")));
    }
    containers::check_tensor_dims(dims)?;
    containers::resize(cx.doc, elem, dims)
}

// ---------------------------------------------------------------------------
// Graph parameters
// ---------------------------------------------------------------------------

/// Makes the binding of `obj` to `node` a graph parameter of `graph` and
/// moves the object to global scope. Without `node` the object must have
/// exactly one connection in the graph. Returns the new parameter index.
pub fn insert_graph_parameter(
    cx: &mut EditContext<'_>,
    graph: RefId,
    obj: RefId,
    node: Option<RefId>,
) -> Result<u32, EditError> {
    let graph_elem = cx.graph(graph)?;
    let (obj_elem, _) = cx.data(obj)?;
    let entry = cx.xref.entry(obj)?;
    if entry.immutable {
        return Err(EditError::validation(format!(
            "{} is immutable and cannot be a graph parameter",
            entry.name
        )));
    }
    let candidates: Vec<ParamLink> = entry
        .connections()
        .filter(|l| cx.xref.param(*l).is_some_and(|p| p.graph == graph))
        .filter(|l| node.map_or(true, |n| l.node == n))
        .collect();
    let link = match candidates.as_slice() {
        [link] => *link,
        [] => {
            return Err(EditError::validation(format!(
                "{} is not connected to that node in this graph",
                entry.name
            )))
        }
        _ => {
            return Err(EditError::validation(format!(
                "{} has several connections in this graph; name the node",
                entry.name
            )))
        }
    };
    if cx.xref.graph_params(graph).any(|gp| gp.link == link) {
        return Err(EditError::validation(format!("{link} is already a graph parameter")));
    }

    let index = graph_params(cx.doc, graph_elem).len() as u32;
    let root = cx.doc.root();
    replant(cx.doc, obj_elem, root)?;
    let gp = cx.doc.create_child(graph_elem, "parameter")?;
    cx.doc.set_attr(gp, ATTR_NODE, link.node.to_string())?;
    cx.doc.set_attr(gp, ATTR_PARAMETER, link.index.to_string())?;
    cx.doc.set_attr(gp, ATTR_INDEX, index.to_string())?;
    tracing::debug!(graph = %graph, index, link = %link, "inserted graph parameter");
    Ok(index)
}

/// Removes graph parameter `index` of `graph` and renumbers the rest.
pub fn remove_graph_parameter(cx: &mut EditContext<'_>, graph: RefId, index: u32) -> Result<(), EditError> {
    let graph_elem = cx.graph(graph)?;
    let gp = graph_params(cx.doc, graph_elem)
        .into_iter()
        .find(|gp| super::attr_u32(cx.doc, *gp, ATTR_INDEX) == Some(index))
        .ok_or_else(|| EditError::validation(format!("graph has no parameter {index}")))?;
    cx.doc.remove(gp)?;
    renumber_graph_params(cx.doc, graph_elem)
}

// ---------------------------------------------------------------------------
// Optional parameters
// ---------------------------------------------------------------------------

/// An unconnected optional parameter of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalParameter {
    pub index: u32,
    pub name: String,
    pub direction: Direction,
    pub type_name: String,
}

pub fn optional_parameters(cx: &EditContext<'_>, node: RefId) -> Result<Vec<OptionalParameter>, EditError> {
    let node_elem = cx.node(node)?;
    let signature = cx.signature(node_elem)?;
    let bound: Vec<u32> = node_params(cx.doc, node_elem)
        .into_iter()
        .map(|(i, _, _)| i)
        .collect();
    Ok(signature
        .params
        .iter()
        .enumerate()
        .filter(|(i, p)| p.is_optional() && !bound.contains(&(*i as u32)))
        .map(|(i, p)| OptionalParameter {
            index: i as u32,
            name: p.name.clone(),
            direction: p.direction,
            type_name: p.type_name.clone(),
        })
        .collect())
}

fn optional(cx: &EditContext<'_>, node: RefId, index: u32) -> Result<OptionalParameter, EditError> {
    optional_parameters(cx, node)?
        .into_iter()
        .find(|o| o.index == index)
        .ok_or_else(|| {
            EditError::validation(format!("parameter {index} is not an unconnected optional parameter"))
        })
}

fn bind_parameter(cx: &mut EditContext<'_>, node_elem: ElemId, index: u32, object: RefId) -> Result<(), EditError> {
    let param = cx.doc.create_child(node_elem, "parameter")?;
    cx.doc.set_attr(param, ATTR_INDEX, index.to_string())?;
    cx.doc.set_attr(param, ATTR_REFERENCE, object.to_string())?;
    cx.doc.set_attr(param, ATTR_REPLICATE_FLAG, "false")?;
    Ok(())
}

/// Binds optional parameter `index` of `node` to a new graph-local default
/// object named after the parameter.
pub fn add_optional(cx: &mut EditContext<'_>, node: RefId, index: u32) -> Result<RefId, EditError> {
    let opt = optional(cx, node, index)?;
    let is_object = cx
        .types
        .lookup(&opt.type_name)
        .is_some_and(|t| t.kind == TypeKind::Object);
    let tag = match DataTag::for_vx_type(&opt.type_name) {
        Some(tag) if is_object => tag,
        _ if opt.type_name == "vx_reference" => DataTag::Reference,
        _ => {
            return Err(EditError::validation(format!(
                "optional parameter {index} has unsupported type '{}'",
                opt.type_name
            )))
        }
    };
    let node_elem = cx.node(node)?;
    let graph_elem = graph_of(cx.doc, node_elem)
        .ok_or_else(|| EditError::reference(format!("node {node} is not inside a graph")))?;
    let (_, object) = create_from_template(
        cx.doc,
        graph_elem,
        &ObjectTemplate {
            tag,
            elem_type: None,
        },
        &opt.name,
    )?;
    bind_parameter(cx, node_elem, index, object)?;
    Ok(object)
}

/// Binds an existing object to an unconnected optional parameter of
/// `node`. The parameter type must match the object and an output may only
/// be bound to an object without a writer. Without `index` exactly one
/// parameter may fit. Returns the bound index.
pub fn connect_data_node(
    cx: &mut EditContext<'_>,
    obj: RefId,
    node: RefId,
    index: Option<u32>,
) -> Result<u32, EditError> {
    let (_, tag) = cx.data(obj)?;
    let entry = cx.xref.entry(obj)?;
    let node_elem = cx.node(node)?;
    let node_graph = graph_of(cx.doc, node_elem).and_then(|g| cx.doc.reference(g));
    if let Some(home) = cx.xref.home_graph(obj) {
        if Some(home) != node_graph {
            return Err(EditError::validation(format!(
                "{} is local to another graph",
                entry.name
            )));
        }
    }
    let has_writer = entry.writer.is_some();
    let fits: Vec<OptionalParameter> = optional_parameters(cx, node)?
        .into_iter()
        .filter(|o| o.type_name == tag.vx_type())
        .filter(|o| o.direction == Direction::Input || !has_writer)
        .filter(|o| index.map_or(true, |i| o.index == i))
        .collect();
    let chosen = match fits.as_slice() {
        [one] => one.index,
        [] => {
            return Err(EditError::validation(format!(
                "no suitable optional parameter for {}",
                entry.name
            )))
        }
        _ => {
            return Err(EditError::validation(
                "several optional parameters fit; choose an index",
            ))
        }
    };
    bind_parameter(cx, node_elem, chosen, obj)?;
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing::Fixture;
    use vxgraph_core::tag::ElementKind;

    const BOX: &str = "org.khronos.openvx.box_3x3";
    const COMBINE: &str = "org.khronos.openvx.channel_combine";

    #[test]
    fn inserted_graphs_get_unique_names() {
        let mut fx = Fixture::new();
        let g = insert_graph(&mut fx.cx()).unwrap();
        assert_eq!(fx.name(g), "graph_0");
        fx.rebuild();
        let names: Vec<&str> = fx.graphs.names().collect();
        assert_eq!(names, vec![".globals", "graph", "graph_0"]);
    }

    #[test]
    fn inserted_node_is_complete_after_rebuild() {
        let mut fx = Fixture::new();
        let before = fx.doc.reference_count();
        let node = fx.node(BOX);
        assert_eq!(fx.doc.reference_count(), before + 3);
        let elem = fx.elem(node);
        assert_eq!(fx.doc.attr(elem, ATTR_IS_REPLICATED), Some("false"));
        assert_eq!(fx.xref.get(node).unwrap().kernel.as_deref(), Some(BOX));
        assert_eq!(node_params(&fx.doc, elem).len(), 2);
    }

    #[test]
    fn unknown_kernel_is_refused() {
        let mut fx = Fixture::new();
        let graph = fx.graph();
        let before = fx.doc.outline();
        match insert_node(&mut fx.cx(), graph, "org.example.none") {
            Err(EditError::Core(_)) => {}
            other => panic!("expected unknown kernel, got {:?}", other),
        }
        assert_eq!(fx.doc.outline(), before);
    }

    #[test]
    fn nodes_cannot_go_on_the_root() {
        let mut fx = Fixture::new();
        let root = fx.doc.root();
        let fake = fx.doc.new_ref();
        fx.doc.set_attr(root, ATTR_REFERENCE, fake.to_string()).unwrap();
        assert!(matches!(
            insert_node(&mut fx.cx(), fake, BOX),
            Err(EditError::Validation { .. } | EditError::Reference { .. })
        ));
    }

    #[test]
    fn object_kinds() {
        let mut fx = Fixture::new();
        let graph = fx.graph();
        let mut cx = fx.cx();
        let pyramid = insert_object(&mut cx, Scope::Global, DataTag::Pyramid, Some(4)).unwrap();
        let delay = insert_object(&mut cx, Scope::Graph(graph), DataTag::Delay, None).unwrap();
        let tensor = insert_object(&mut cx, Scope::Global, DataTag::Tensor, None).unwrap();
        let lut = insert_object(&mut cx, Scope::Global, DataTag::Lut, None).unwrap();

        let p = fx.elem(pyramid);
        assert_eq!(fx.doc.data_children(p).count(), 4);
        let d = fx.elem(delay);
        assert_eq!(fx.doc.attr(d, "count"), Some("3"));
        assert_eq!(fx.doc.data_children(d).count(), 3);
        assert_eq!(fx.doc.kind(fx.doc.parent(d).unwrap()), ElementKind::Graph);
        let t = fx.elem(tensor);
        assert_eq!(fx.doc.attr(t, "number_of_dims"), Some("3"));
        assert_eq!(fx.doc.children_of_kind(t, ElementKind::Dimension).count(), 3);
        assert_eq!(fx.doc.attr(fx.elem(lut), "count"), Some("256"));
    }

    #[test]
    fn image_and_tensor_arguments_are_checked() {
        let mut fx = Fixture::new();
        let mut cx = fx.cx();
        assert!(insert_image(&mut cx, Scope::Global, "XXXX", 4, 4).is_err());
        assert!(insert_image(&mut cx, Scope::Global, "U008", 0, 4).is_err());
        assert!(insert_tensor(&mut cx, Scope::Global, &[], "VX_TYPE_UINT8", 0).is_err());
        assert!(insert_tensor(&mut cx, Scope::Global, &[2], "VX_TYPE_NOPE", 0).is_err());
        let t = insert_tensor(&mut cx, Scope::Global, &[4, 5], "VX_TYPE_INT16", 8).unwrap();
        let t = fx.elem(t);
        assert_eq!(fx.doc.attr(t, "fixed_point_position"), Some("8"));
        let sizes: Vec<&str> = fx
            .doc
            .children_of_kind(t, ElementKind::Dimension)
            .filter_map(|d| fx.doc.attr(d, "size"))
            .collect();
        assert_eq!(sizes, vec!["4", "5"]);

        let mut cx = fx.cx();
        let image = insert_image(&mut cx, Scope::Global, "U008", 4, 4).unwrap();
        assert!(set_tensor_dims(&mut cx, image, 2).is_err());
        let tensor = fx.doc.reference(t).unwrap();
        let mut cx = fx.cx();
        assert!(set_tensor_dims(&mut cx, tensor, 0).is_err());
        set_tensor_dims(&mut cx, tensor, 4).unwrap();
        let sizes: Vec<&str> = fx
            .doc
            .children_of_kind(t, ElementKind::Dimension)
            .filter_map(|d| fx.doc.attr(d, "size"))
            .collect();
        assert_eq!(sizes, vec!["4", "5", "1", "1"]);

        let mut cx = fx.cx();
        match set_tensor_dims(&mut cx, tensor, u32::MAX) {
            Err(EditError::Validation { reason }) => assert!(reason.contains("dimensions")),
            other => panic!("expected Validation, got {:?}", other),
        }
        assert!(resize(&mut cx, tensor, containers::MAX_TENSOR_DIMS + 1).is_err());
        assert!(insert_tensor(&mut cx, Scope::Global, &[1; 5], "VX_TYPE_UINT8", 0).is_err());
        assert_eq!(fx.doc.attr(t, "number_of_dims"), Some("4"));
        assert_eq!(fx.doc.children_of_kind(t, ElementKind::Dimension).count(), 4);
    }

    #[test]
    fn graph_parameter_makes_the_object_global() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let graph = fx.graph();
        let input = fx.bound(node, 0);
        assert!(fx.xref.is_virtual(input));

        let index = insert_graph_parameter(&mut fx.cx(), graph, input, None).unwrap();
        assert_eq!(index, 0);
        let input_elem = fx.elem(input);
        assert_eq!(fx.doc.parent(input_elem), Some(fx.doc.root()));

        let input = fx.rebuild_tracking(input);
        assert!(!fx.xref.is_virtual(input));
        assert!(fx.xref.feeds_graph_param(input));
        let graph = fx.graph();
        match insert_graph_parameter(&mut fx.cx(), graph, input, None) {
            Err(EditError::Validation { reason }) => assert!(reason.contains("already")),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn removing_graph_parameters_renumbers() {
        let mut fx = Fixture::new();
        let node = fx.node(BOX);
        let graph = fx.graph();
        let input = fx.bound(node, 0);
        let output = fx.bound(node, 1);
        insert_graph_parameter(&mut fx.cx(), graph, input, Some(node)).unwrap();
        insert_graph_parameter(&mut fx.cx(), graph, output, Some(node)).unwrap();
        remove_graph_parameter(&mut fx.cx(), graph, 0).unwrap();
        let g = fx.elem(graph);
        let remaining = graph_params(&fx.doc, g);
        assert_eq!(remaining.len(), 1);
        assert_eq!(fx.doc.attr(remaining[0], ATTR_INDEX), Some("0"));
        assert_eq!(fx.doc.attr(remaining[0], ATTR_PARAMETER), Some("1"));
        assert!(remove_graph_parameter(&mut fx.cx(), graph, 5).is_err());
    }

    #[test]
    fn optional_parameters_can_be_added_and_connected() {
        let mut fx = Fixture::new();
        let node = fx.node(COMBINE);
        let node_elem = fx.elem(node);
        let opts = optional_parameters(&fx.cx(), node).unwrap();
        let indices: Vec<u32> = opts.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![2, 3]);

        let added = add_optional(&mut fx.cx(), node, 2).unwrap();
        assert_eq!(fx.name(added), "plane2");
        assert!(add_optional(&mut fx.cx(), node, 0).is_err());
        let plane = insert_image(&mut fx.cx(), Scope::Global, "U008", 32, 32).unwrap();
        let plane = fx.rebuild_tracking(plane);
        let node = fx.doc.reference(node_elem).unwrap();
        assert_eq!(optional_parameters(&fx.cx(), node).unwrap().len(), 1);

        assert_eq!(connect_data_node(&mut fx.cx(), plane, node, None).unwrap(), 3);
        fx.rebuild();
        let node = fx.doc.reference(node_elem).unwrap();
        assert!(optional_parameters(&fx.cx(), node).unwrap().is_empty());
    }

    #[test]
    fn connect_refuses_mismatched_types() {
        let mut fx = Fixture::new();
        let node = fx.node(COMBINE);
        let lut = insert_object(&mut fx.cx(), Scope::Global, DataTag::Lut, None).unwrap();
        let node_elem = fx.elem(node);
        let lut = fx.rebuild_tracking(lut);
        let node = fx.doc.reference(node_elem).unwrap();
        match connect_data_node(&mut fx.cx(), lut, node, None) {
            Err(EditError::Validation { reason }) => assert!(reason.contains("no suitable")),
            other => panic!("expected refusal, got {:?}", other),
        }
    }
}
