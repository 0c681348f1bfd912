//! End-to-end editing sessions through `EditorService`.

use proptest::prelude::*;

use vxgraph_core::id::{ElemId, RefId};
use vxgraph_core::tag::{DataTag, ElementKind};
use vxgraph_editor::{
    BuildDiagnostic, EditError, EditorConfig, EditorService, GraphKey, Removal, Scope, VertexKey,
};
use vxgraph_storage::Document;

const BOX: &str = "org.khronos.openvx.box_3x3";
const EXTRACT: &str = "org.khronos.openvx.channel_extract";
const COMBINE: &str = "org.khronos.openvx.channel_combine";

fn service() -> EditorService {
    EditorService::new(EditorConfig::default()).unwrap()
}

fn main_graph(svc: &EditorService) -> RefId {
    svc.graph_ref("graph").unwrap()
}

fn bound(svc: &EditorService, node: RefId, index: u32) -> RefId {
    svc.xref()
        .params_of(node)
        .find(|(link, _)| link.index == index)
        .map(|(_, p)| p.object)
        .unwrap()
}

fn elem(svc: &EditorService, reference: RefId) -> ElemId {
    svc.document().by_reference(reference).unwrap()
}

/// Every `reference` or `node` attribute of a parameter element that names
/// nothing.
fn unresolved(doc: &Document) -> Vec<String> {
    let mut out = Vec::new();
    for e in doc.preorder() {
        if doc.kind(e) != ElementKind::Parameter {
            continue;
        }
        for key in ["reference", "node"] {
            if let Some(value) = doc.attr(e, key) {
                let resolves = value
                    .parse::<u32>()
                    .ok()
                    .and_then(|r| doc.by_reference(RefId(r)))
                    .is_some();
                if !resolves {
                    out.push(format!("{e} {key}={value}"));
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn fresh_session_has_one_empty_graph() {
    let svc = service();
    assert_eq!(svc.document().reference_count(), 1);
    let names: Vec<&str> = svc.graphs().names().collect();
    assert_eq!(names, vec![".globals", "graph"]);
    assert_eq!(svc.graph("graph").unwrap().vertex_count(), 0);
    assert_eq!(svc.xref().len(), 1);
    insta::assert_snapshot!(svc.document().outline().trim_end(), @r"
    openvx references=1
      graph name=graph reference=0
    ");
}

#[test]
fn inserted_node_gets_local_objects() {
    let mut svc = service();
    let graph = main_graph(&svc);
    let node = svc.insert_node(graph, BOX).unwrap();
    assert_eq!(svc.document().reference_count(), 4);

    let (input, output) = (bound(&svc, node, 0), bound(&svc, node, 1));
    assert!(svc.xref().is_virtual(input));
    assert!(svc.xref().is_virtual(output));
    let graph_elem = elem(&svc, graph);
    assert_eq!(svc.document().parent(elem(&svc, input)), Some(graph_elem));

    let g = svc.graph("graph").unwrap();
    assert_eq!(g.vertex_count(), 3);
    assert!(g.edge(VertexKey::Ref(input), VertexKey::Ref(node)).is_some());
    assert!(g.edge(VertexKey::Ref(node), VertexKey::Ref(output)).is_some());
    // graph-local objects stay off the globals graph
    let globals = svc.graphs().globals().unwrap();
    assert!(!globals.contains(VertexKey::Ref(input)));
    assert!(svc.diagnostics().is_empty());
}

#[test]
fn promoting_an_output_makes_it_global() {
    let mut svc = service();
    let graph = main_graph(&svc);
    let node = svc.insert_node(graph, BOX).unwrap();
    let output = bound(&svc, node, 1);
    let output_elem = elem(&svc, output);

    let promoted = svc.promote(output).unwrap();
    assert_eq!(svc.document().reference_count(), 4);
    assert_eq!(svc.document().by_reference(promoted), Some(output_elem));
    assert_eq!(svc.document().parent(output_elem), Some(svc.document().root()));
    assert!(!svc.xref().is_virtual(promoted));
    assert!(svc.graphs().globals().unwrap().contains(VertexKey::Ref(promoted)));
}

#[test]
fn pyramid_levels_are_not_removable() {
    let mut svc = service();
    let pyramid = svc.insert_object(Scope::Global, DataTag::Pyramid, Some(4)).unwrap();
    let pyramid_elem = elem(&svc, pyramid);
    let levels: Vec<ElemId> = svc.document().data_children(pyramid_elem).collect();
    assert_eq!(levels.len(), 4);
    let level = svc.document().reference(levels[2]).unwrap();

    let before = svc.document().outline();
    let depth = svc.history().undo_depth();
    match svc.remove(level) {
        Err(EditError::Validation { .. }) => {}
        other => panic!("expected refusal, got {:?}", other),
    }
    assert_eq!(svc.document().outline(), before);
    assert_eq!(svc.history().undo_depth(), depth);
}

#[test]
fn replicating_an_input_wraps_it_in_an_object_array() {
    let mut svc = service();
    let graph = main_graph(&svc);
    let node = svc.insert_node(graph, BOX).unwrap();
    let node_elem = elem(&svc, node);
    let input_elem = elem(&svc, bound(&svc, node, 0));
    let before = svc.document().reference_count();

    assert_eq!(svc.replicate(node, &[0], Some(4), false).unwrap(), 4);
    let doc = svc.document();
    let array = doc.parent(input_elem).unwrap();
    assert_eq!(doc.data_tag(array), Some(DataTag::ObjectArray));
    assert_eq!(doc.attr(array, "count"), Some("4"));
    let slots: Vec<ElemId> = doc.data_children(array).collect();
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0], input_elem);
    for slot in &slots[1..] {
        assert_eq!(doc.attr(*slot, "width"), doc.attr(input_elem, "width"));
        assert_eq!(doc.attr(*slot, "format"), doc.attr(input_elem, "format"));
    }
    // the array and three new slots
    assert_eq!(doc.reference_count(), before + 4);
    assert_eq!(doc.attr(node_elem, "is_replicated"), Some("true"));
}

#[test]
fn history_keeps_the_newest_checkpoints() {
    let mut svc = EditorService::new(EditorConfig {
        max_undo: 5,
        ..EditorConfig::default()
    })
    .unwrap();
    for _ in 0..5 {
        svc.insert_object(Scope::Global, DataTag::Lut, None).unwrap();
    }
    assert_eq!(svc.history().undo_depth(), 5);
    assert!(svc.undo().unwrap());
    assert_eq!(svc.history().redo_depth(), 1);

    svc.insert_object(Scope::Global, DataTag::Scalar, None).unwrap();
    svc.insert_object(Scope::Global, DataTag::Scalar, None).unwrap();
    assert_eq!(svc.history().undo_depth(), 5);
    assert_eq!(svc.history().redo_depth(), 0);

    let mut undone = 0;
    while svc.undo().unwrap() {
        undone += 1;
    }
    assert_eq!(undone, 5);
    // the first insertion is beyond the history
    assert_eq!(svc.document().reference_count(), 2);
}

#[test]
fn merge_then_remove_through_the_service() {
    let mut svc = service();
    let graph = main_graph(&svc);
    let first = svc.insert_node(graph, BOX).unwrap();
    let first_elem = elem(&svc, first);
    let second = svc.insert_node(graph, BOX).unwrap();
    let second_elem = elem(&svc, second);
    let first = svc.document().reference(first_elem).unwrap();

    let out = bound(&svc, first, 1);
    let input = bound(&svc, second, 0);
    let outcome = svc
        .merge(out, input, vxgraph_editor::MismatchPolicy::Reject)
        .unwrap();
    let first = svc.document().reference(first_elem).unwrap();
    let second = svc.document().reference(second_elem).unwrap();
    assert_eq!(bound(&svc, second, 0), outcome.survivor);
    let g = svc.graph("graph").unwrap();
    assert!(g.edge(VertexKey::Ref(first), VertexKey::Ref(second)).is_some());

    assert_eq!(svc.remove(first).unwrap(), Removal::Disconnected);
    let first = svc.document().reference(first_elem).unwrap();
    assert_eq!(svc.remove(first).unwrap(), Removal::Deleted);
    assert!(unresolved(svc.document()).is_empty());
    assert!(matches!(
        svc.remove_graph(GraphKey::Globals),
        Err(EditError::Validation { .. })
    ));
}

#[test]
fn diagnostics_and_config_serialize() {
    let diagnostic = BuildDiagnostic::UnknownKernel {
        node: RefId(1),
        kernel: "com.example.blur".into(),
    };
    insta::assert_snapshot!(
        serde_json::to_string(&diagnostic).unwrap(),
        @r#"{"diagnostic":"unknown_kernel","node":1,"kernel":"com.example.blur"}"#
    );
    insta::assert_snapshot!(
        serde_json::to_string(&EditorConfig::default()).unwrap(),
        @r#"{"max_undo":5,"show_virtuals":false,"default_graph_name":"graph"}"#
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Step {
    Node(usize),
    Object(usize),
    RemoveNode,
    PromoteLocal,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..3usize).prop_map(Step::Node),
        (0..4usize).prop_map(Step::Object),
        Just(Step::RemoveNode),
        Just(Step::PromoteLocal),
    ]
}

fn apply(svc: &mut EditorService, step: &Step) {
    let graph = main_graph(svc);
    // refusals are expected; only the document state matters
    match step {
        Step::Node(k) => {
            let _ = svc.insert_node(graph, [BOX, EXTRACT, COMBINE][*k]);
        }
        Step::Object(t) => {
            let tag = [DataTag::Image, DataTag::Scalar, DataTag::ObjectArray, DataTag::Tensor][*t];
            let _ = svc.insert_object(Scope::Graph(graph), tag, Some(2));
        }
        Step::RemoveNode => {
            let node = svc
                .xref()
                .iter()
                .find(|(_, e)| e.kind == ElementKind::Node)
                .map(|(r, _)| r);
            if let Some(node) = node {
                let _ = svc.remove_node(node);
            }
        }
        Step::PromoteLocal => {
            let local = svc
                .xref()
                .iter()
                .find(|(r, e)| e.is_data() && !e.is_child && svc.xref().is_virtual(*r))
                .map(|(r, _)| r);
            if let Some(local) = local {
                let _ = svc.promote(local);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn references_always_resolve(steps in prop::collection::vec(step(), 1..10)) {
        let mut svc = service();
        for s in &steps {
            apply(&mut svc, s);
            prop_assert!(unresolved(svc.document()).is_empty(), "after {:?}", s);
        }
    }

    #[test]
    fn fixup_is_idempotent(refs in prop::collection::vec(0u32..500, 0..12)) {
        let mut doc = Document::default();
        let root = doc.root();
        for r in &refs {
            let scalar = doc.create_child(root, "scalar").unwrap();
            doc.set_attr(scalar, "reference", r.to_string()).unwrap();
        }
        let first = doc.fixup_references();
        let outline = doc.outline();
        let second = doc.fixup_references();
        prop_assert_eq!(first, second);
        prop_assert_eq!(outline, doc.outline());
    }

    #[test]
    fn virtuality_ignores_sibling_order(
        order in Just((0..5usize).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let mut body = String::new();
        for slot in order {
            if slot == 4 {
                body.push_str(
                    r#"<graph name="g" reference="40"><image name="local" reference="41" width="8" height="8" format="U008"/></graph>"#,
                );
            } else {
                body.push_str(&format!(
                    r#"<scalar name="s{slot}" reference="{}" elemType="VX_TYPE_UINT8"/>"#,
                    slot + 10
                ));
            }
        }
        let xml = format!(r#"<openvx references="42">{body}</openvx>"#);
        let svc = EditorService::from_document(
            Document::from_xml(&xml).unwrap(),
            EditorConfig::default(),
        )
        .unwrap();
        for (reference, entry) in svc.xref().iter() {
            if entry.is_data() {
                prop_assert_eq!(svc.xref().is_virtual(reference), entry.name == "local");
            }
        }
    }

    #[test]
    fn replication_counts_converge(n in 1u32..6, m in 1u32..6) {
        let mut svc = service();
        let graph = main_graph(&svc);
        let node = svc.insert_node(graph, BOX).unwrap();
        let node_elem = elem(&svc, node);
        prop_assert_eq!(svc.replicate(node, &[0, 1], Some(n), false).unwrap(), n);

        let node = svc.document().reference(node_elem).unwrap();
        let input_array = svc.document().parent(elem(&svc, bound(&svc, node, 0))).unwrap();
        let input_array = svc.document().reference(input_array).unwrap();
        svc.resize(input_array, m).unwrap();

        let node = svc.document().reference(node_elem).unwrap();
        for index in [0, 1] {
            let slot = elem(&svc, bound(&svc, node, index));
            let array = svc.document().parent(slot).unwrap();
            let expected = m.to_string();
            prop_assert_eq!(svc.document().attr(array, "count"), Some(expected.as_str()));
            prop_assert_eq!(svc.document().data_children(array).count(), m as usize);
        }
    }
}
