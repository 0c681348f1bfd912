//! Renaming. Names are deduplicated against the document's name table and
//! the derived graphs are relabeled in place, without a rebuild.

use vxgraph_core::id::RefId;
use vxgraph_core::tag::ElementKind;
use vxgraph_storage::{Document, GLOBALS_NAME};

use crate::error::EditError;
use crate::graph::{GraphSet, VertexKey};
use crate::xref::{GraphKey, Xref, XrefUpdate};

/// Renames the element carrying `reference`. Returns the name actually
/// given, which carries a numeric suffix when `name` was taken.
pub fn rename(
    doc: &mut Document,
    xref: &mut Xref,
    graphs: &mut GraphSet,
    reference: RefId,
    name: &str,
) -> Result<String, EditError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditError::validation("names cannot be empty"));
    }
    if name == GLOBALS_NAME {
        return Err(EditError::validation(format!("'{GLOBALS_NAME}' is reserved")));
    }
    let elem = doc
        .by_reference(reference)
        .ok_or_else(|| EditError::reference(format!("no element with reference {reference}")))?;
    if doc.name(elem) == Some(name) {
        return Ok(name.to_string());
    }
    let given = doc.assign_name(elem, name)?;

    xref.update(reference, XrefUpdate::new().name(given.as_str()))?;
    let shown_in: Vec<GraphKey> = xref.entry(reference)?.graphs.iter().copied().collect();
    for key in shown_in {
        if let Some(graph) = graphs.by_key_mut(key) {
            graph.relabel(VertexKey::Ref(reference), &given);
            xref.mark_graph_dirty(key);
        }
    }

    match doc.kind(elem) {
        ElementKind::Graph => {
            graphs.rename(GraphKey::Graph(reference), &given);
        }
        ElementKind::Node => {
            let labels: Vec<(RefId, u32, String)> = xref
                .all_graph_params()
                .filter(|gp| gp.link.node == reference)
                .filter_map(|gp| {
                    let param = xref.param(gp.link)?;
                    Some((gp.graph, gp.index, param.name.clone()))
                })
                .collect();
            for (graph, index, param) in labels {
                let key = GraphKey::Graph(graph);
                if let Some(derived) = graphs.by_key_mut(key) {
                    derived.set_label(
                        VertexKey::GraphParam { graph, index },
                        format!("Graph Parameter {index}\n{given}:{param}"),
                    );
                    xref.mark_graph_dirty(key);
                }
            }
        }
        _ => {}
    }
    tracing::debug!(reference = %reference, name = %given, "renamed");
    Ok(given)
}
