//! Stable ID newtypes for document and graph entities.
//!
//! All IDs are distinct newtype wrappers over `u32`, so a `RefId` read from a
//! `reference` attribute cannot be confused with the arena slot of the element
//! that carries it.

use std::fmt;
use std::str::FromStr;

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Dense reference id carried by the `reference` attribute of document elements.
///
/// Renumbered by the fixup pass so that ids are `0..count` in order of first
/// appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RefId(pub u32);

/// Arena slot of an element inside a document. Stable across attribute edits
/// and reference renumbering, invalidated only by removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElemId(pub u32);

/// Vertex of a derived dependency graph. Maps to a petgraph `NodeIndex<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ElemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RefId {
    type Err = std::num::ParseIntError;

    /// Parses the decimal text of a `reference`-valued attribute.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(RefId)
    }
}

// Bridge between VertexId and petgraph's NodeIndex<u32>.

impl From<NodeIndex<u32>> for VertexId {
    fn from(idx: NodeIndex<u32>) -> Self {
        VertexId(idx.index() as u32)
    }
}

impl From<VertexId> for NodeIndex<u32> {
    fn from(id: VertexId) -> Self {
        NodeIndex::new(id.0 as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_to_node_index_roundtrip() {
        let idx = NodeIndex::<u32>::new(42);
        let vertex = VertexId::from(idx);
        assert_eq!(vertex.0, 42);

        let back: NodeIndex<u32> = vertex.into();
        assert_eq!(back.index(), 42);
    }

    #[test]
    fn ref_id_parses_attribute_text() {
        assert_eq!(" 17".parse::<RefId>().unwrap(), RefId(17));
        assert!("seven".parse::<RefId>().is_err());
        assert!("-1".parse::<RefId>().is_err());
    }

    #[test]
    fn ids_are_distinct_types() {
        let r = RefId(3);
        let e = ElemId(3);
        assert_eq!(r.0, e.0);
        assert_eq!(format!("{r}"), "3");
        assert_eq!(format!("{e}"), "#3");
    }

    #[test]
    fn ids_serde_roundtrip() {
        let json = serde_json::to_string(&RefId(9)).unwrap();
        assert_eq!(json, "9");
        let back: RefId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RefId(9));
    }
}
