//! Derived dependency graphs.
//!
//! One [`DerivedGraph`] per OpenVX graph element plus one for the global
//! scope, each a `StableGraph` so that the view cleanup pass can remove
//! vertices without invalidating the indices of the rest. Vertices are
//! addressed by [`VertexKey`]; the petgraph indices stay internal.

use std::collections::HashMap;

use indexmap::IndexMap;
use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Directed;
use petgraph::Direction as Flow;
use serde::{Deserialize, Serialize};

use vxgraph_core::id::{ElemId, RefId, VertexId};
use vxgraph_core::tag::DataTag;

use crate::xref::GraphKey;

/// Identity of a vertex across rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexKey {
    /// A data object, node, info element or (on the global graph) a graph.
    Ref(RefId),
    /// The synthetic vertex of a graph-level parameter.
    GraphParam { graph: RefId, index: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    Data(DataTag),
    Info,
    Node,
    Graph,
    GraphParameter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub key: VertexKey,
    pub kind: VertexKind,
    /// Display text; the first line is the element's name.
    pub label: String,
}

impl Vertex {
    /// First label line.
    pub fn title(&self) -> &str {
        self.label.lines().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    #[default]
    Data,
    Bidirectional,
    Replicated,
    Container,
}

/// Decorations of one edge: labels at either end plus a style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeLabel {
    pub head: Option<String>,
    pub tail: Option<String>,
    pub style: EdgeStyle,
}

impl EdgeLabel {
    pub fn head(text: impl Into<String>, style: EdgeStyle) -> Self {
        EdgeLabel {
            head: Some(text.into()),
            tail: None,
            style,
        }
    }

    pub fn tail(text: impl Into<String>, style: EdgeStyle) -> Self {
        EdgeLabel {
            head: None,
            tail: Some(text.into()),
            style,
        }
    }
}

// ---------------------------------------------------------------------------
// DerivedGraph
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DerivedGraph {
    key: GraphKey,
    name: String,
    elem: ElemId,
    graph: StableGraph<Vertex, EdgeLabel, Directed, u32>,
    index: HashMap<VertexKey, NodeIndex<u32>>,
}

impl DerivedGraph {
    pub fn new(key: GraphKey, name: impl Into<String>, elem: ElemId) -> Self {
        DerivedGraph {
            key,
            name: name.into(),
            elem,
            graph: StableGraph::new(),
            index: HashMap::new(),
        }
    }

    pub fn key(&self) -> GraphKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Document element the graph was derived from (the root for the
    /// global graph).
    pub fn elem(&self) -> ElemId {
        self.elem
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Read-only access for traversals.
    pub fn inner(&self) -> &StableGraph<Vertex, EdgeLabel, Directed, u32> {
        &self.graph
    }

    // -- vertices --

    /// Adds a vertex, or updates kind and label of the existing one.
    pub fn add_vertex(
        &mut self,
        key: VertexKey,
        kind: VertexKind,
        label: impl Into<String>,
    ) -> VertexId {
        let label = label.into();
        if let Some(&idx) = self.index.get(&key) {
            if let Some(vertex) = self.graph.node_weight_mut(idx) {
                vertex.kind = kind;
                vertex.label = label;
            }
            return idx.into();
        }
        let idx = self.graph.add_node(Vertex { key, kind, label });
        self.index.insert(key, idx);
        idx.into()
    }

    pub fn contains(&self, key: VertexKey) -> bool {
        self.index.contains_key(&key)
    }

    pub fn vertex(&self, key: VertexKey) -> Option<&Vertex> {
        self.index.get(&key).and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn vertex_id(&self, key: VertexKey) -> Option<VertexId> {
        self.index.get(&key).map(|&idx| idx.into())
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex> {
        self.graph.node_weight(NodeIndex::from(id))
    }

    /// Replaces the first label line. Returns false when the vertex is absent.
    pub fn relabel(&mut self, key: VertexKey, title: &str) -> bool {
        let Some(vertex) = self
            .index
            .get(&key)
            .and_then(|&idx| self.graph.node_weight_mut(idx))
        else {
            return false;
        };
        vertex.label = match vertex.label.split_once('\n') {
            Some((_, rest)) => format!("{title}\n{rest}"),
            None => title.to_string(),
        };
        true
    }

    pub fn set_label(&mut self, key: VertexKey, label: impl Into<String>) -> bool {
        match self.index.get(&key).and_then(|&idx| self.graph.node_weight_mut(idx)) {
            Some(vertex) => {
                vertex.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Removes a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, key: VertexKey) -> Option<Vertex> {
        let idx = self.index.remove(&key)?;
        self.graph.remove_node(idx)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.graph.node_weights()
    }

    // -- edges --

    /// Adds a directed edge between two existing vertices. Parallel edges
    /// are allowed.
    pub fn add_edge(&mut self, from: VertexKey, to: VertexKey, label: EdgeLabel) -> Option<EdgeIndex<u32>> {
        let a = *self.index.get(&from)?;
        let b = *self.index.get(&to)?;
        Some(self.graph.add_edge(a, b, label))
    }

    pub fn edge(&self, from: VertexKey, to: VertexKey) -> Option<&EdgeLabel> {
        let e = self.find_edge(from, to)?;
        self.graph.edge_weight(e)
    }

    pub fn edge_mut(&mut self, from: VertexKey, to: VertexKey) -> Option<&mut EdgeLabel> {
        let e = self.find_edge(from, to)?;
        self.graph.edge_weight_mut(e)
    }

    pub fn remove_edge(&mut self, from: VertexKey, to: VertexKey) -> Option<EdgeLabel> {
        let e = self.find_edge(from, to)?;
        self.graph.remove_edge(e)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges as (source, target, label), in edge index order.
    pub fn edges(&self) -> Vec<(VertexKey, VertexKey, &EdgeLabel)> {
        let mut refs: Vec<_> = self.graph.edge_references().collect();
        refs.sort_by_key(|e| e.id());
        refs.into_iter()
            .filter_map(|e| {
                let source = self.graph.node_weight(e.source())?.key;
                let target = self.graph.node_weight(e.target())?.key;
                Some((source, target, e.weight()))
            })
            .collect()
    }

    /// Edges into `key` as (source, label), in edge index order.
    pub fn incoming(&self, key: VertexKey) -> Vec<(VertexKey, EdgeLabel)> {
        self.adjacent(key, Flow::Incoming)
    }

    /// Edges out of `key` as (target, label), in edge index order.
    pub fn outgoing(&self, key: VertexKey) -> Vec<(VertexKey, EdgeLabel)> {
        self.adjacent(key, Flow::Outgoing)
    }

    /// Vertices adjacent to `key` in either direction.
    pub fn neighbors(&self, key: VertexKey) -> Vec<VertexKey> {
        let Some(&idx) = self.index.get(&key) else {
            return Vec::new();
        };
        self.graph
            .neighbors_undirected(idx)
            .filter_map(|n| self.graph.node_weight(n).map(|v| v.key))
            .collect()
    }

    /// True when a directed path leads from `from` to `to`.
    pub fn has_path(&self, from: VertexKey, to: VertexKey) -> bool {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&a), Some(&b)) => has_path_connecting(&self.graph, a, b, None),
            _ => false,
        }
    }

    /// A vertex on a directed cycle, if there is one.
    pub fn find_cycle(&self) -> Option<VertexKey> {
        match toposort(&self.graph, None) {
            Ok(_) => None,
            Err(cycle) => self.graph.node_weight(cycle.node_id()).map(|v| v.key),
        }
    }

    fn find_edge(&self, from: VertexKey, to: VertexKey) -> Option<EdgeIndex<u32>> {
        let a = *self.index.get(&from)?;
        let b = *self.index.get(&to)?;
        self.graph.find_edge(a, b)
    }

    fn adjacent(&self, key: VertexKey, flow: Flow) -> Vec<(VertexKey, EdgeLabel)> {
        let Some(&idx) = self.index.get(&key) else {
            return Vec::new();
        };
        let mut refs: Vec<_> = self.graph.edges_directed(idx, flow).collect();
        refs.sort_by_key(|e| e.id());
        refs.into_iter()
            .filter_map(|e| {
                let other = match flow {
                    Flow::Incoming => e.source(),
                    Flow::Outgoing => e.target(),
                };
                let vertex = self.graph.node_weight(other)?;
                Some((vertex.key, e.weight().clone()))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// GraphSet
// ---------------------------------------------------------------------------

/// The output of a build: derived graphs by name, the global graph first.
#[derive(Debug, Clone, Default)]
pub struct GraphSet {
    graphs: IndexMap<String, DerivedGraph>,
}

impl GraphSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, graph: DerivedGraph) {
        self.graphs.insert(graph.name().to_string(), graph);
    }

    pub fn globals(&self) -> Option<&DerivedGraph> {
        self.by_key(GraphKey::Globals)
    }

    pub fn get(&self, name: &str) -> Option<&DerivedGraph> {
        self.graphs.get(name)
    }

    pub fn by_key(&self, key: GraphKey) -> Option<&DerivedGraph> {
        self.graphs.values().find(|g| g.key() == key)
    }

    pub fn by_key_mut(&mut self, key: GraphKey) -> Option<&mut DerivedGraph> {
        self.graphs.values_mut().find(|g| g.key() == key)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.graphs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivedGraph> {
        self.graphs.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DerivedGraph> {
        self.graphs.values_mut()
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Re-keys a graph after its element was renamed, keeping its position.
    pub fn rename(&mut self, key: GraphKey, new_name: &str) -> bool {
        let Some(pos) = self.graphs.values().position(|g| g.key() == key) else {
            return false;
        };
        let Some((_, mut graph)) = self.graphs.shift_remove_index(pos) else {
            return false;
        };
        graph.set_name(new_name);
        let (new_pos, _) = self.graphs.insert_full(new_name.to_string(), graph);
        self.graphs.move_index(new_pos, pos);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(n: u32) -> VertexKey {
        VertexKey::Ref(RefId(n))
    }

    fn sample() -> DerivedGraph {
        let mut g = DerivedGraph::new(GraphKey::Graph(RefId(0)), "g", ElemId(1));
        g.add_vertex(obj(1), VertexKind::Data(DataTag::Image), "in\nimage");
        g.add_vertex(obj(2), VertexKind::Node, "n\nbox_3x3");
        g.add_vertex(obj(3), VertexKind::Data(DataTag::Image), "out\nimage");
        g.add_edge(obj(1), obj(2), EdgeLabel::head("input", EdgeStyle::Data));
        g.add_edge(obj(2), obj(3), EdgeLabel::tail("output", EdgeStyle::Data));
        g
    }

    #[test]
    fn add_vertex_is_idempotent_by_key() {
        let mut g = sample();
        let before = g.vertex_id(obj(1)).unwrap();
        let again = g.add_vertex(obj(1), VertexKind::Data(DataTag::Image), "renamed\nimage");
        assert_eq!(before, again);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.vertex(obj(1)).unwrap().title(), "renamed");
    }

    #[test]
    fn edge_list_survives_vertex_removal() {
        let mut g = sample();
        let all = g.edges();
        assert_eq!(all.len(), 2);
        assert_eq!((all[0].0, all[0].1), (obj(1), obj(2)));
        assert_eq!(all[1].2.tail.as_deref(), Some("output"));

        g.add_vertex(obj(4), VertexKind::Data(DataTag::Image), "extra\nimage");
        g.add_edge(obj(4), obj(2), EdgeLabel::head("other", EdgeStyle::Data));
        g.remove_vertex(obj(1));
        let keys: Vec<_> = g.edges().into_iter().map(|(s, t, _)| (s, t)).collect();
        assert_eq!(keys, vec![(obj(2), obj(3)), (obj(4), obj(2))]);
    }

    #[test]
    fn edges_and_paths() {
        let g = sample();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge(obj(1), obj(2)).unwrap().head.as_deref(), Some("input"));
        assert!(g.edge(obj(2), obj(1)).is_none());
        assert!(g.has_path(obj(1), obj(3)));
        assert!(!g.has_path(obj(3), obj(1)));
        assert_eq!(g.incoming(obj(2)).len(), 1);
        assert_eq!(g.outgoing(obj(2))[0].0, obj(3));
        let mut n = g.neighbors(obj(2));
        n.sort_by_key(|k| match k {
            VertexKey::Ref(r) => r.0,
            VertexKey::GraphParam { index, .. } => 1000 + index,
        });
        assert_eq!(n, vec![obj(1), obj(3)]);
        assert!(g.find_cycle().is_none());
    }

    #[test]
    fn removing_a_vertex_drops_its_edges() {
        let mut g = sample();
        g.remove_vertex(obj(2)).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains(obj(2)));
        assert!(g.add_edge(obj(1), obj(2), EdgeLabel::default()).is_none());
        // remaining keys still resolve
        assert_eq!(g.vertex(obj(3)).unwrap().title(), "out");
    }

    #[test]
    fn relabel_keeps_the_tail_lines() {
        let mut g = sample();
        assert!(g.relabel(obj(2), "blur"));
        assert_eq!(g.vertex(obj(2)).unwrap().label, "blur\nbox_3x3");
        assert!(!g.relabel(obj(42), "x"));
    }

    #[test]
    fn cycles_are_found() {
        let mut g = sample();
        g.add_edge(obj(3), obj(1), EdgeLabel::default());
        assert!(g.find_cycle().is_some());
    }

    #[test]
    fn graph_set_rename_keeps_order() {
        let mut set = GraphSet::new();
        set.insert(DerivedGraph::new(GraphKey::Globals, ".globals", ElemId(0)));
        set.insert(sample());
        set.insert(DerivedGraph::new(GraphKey::Graph(RefId(9)), "h", ElemId(7)));
        assert!(set.rename(GraphKey::Graph(RefId(0)), "main"));
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec![".globals", "main", "h"]);
        assert_eq!(set.get("main").unwrap().name(), "main");
        assert!(set.globals().is_some());
    }
}
