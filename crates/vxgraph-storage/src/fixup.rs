//! Reference fixup: dense renumbering of every `reference` and `node`
//! attribute.
//!
//! One preorder pass collects `reference` values in order of first
//! appearance and maps each to `0..count`. A second pass rewrites them, plus
//! the `node` attribute of graph parameters (only on elements without a
//! `reference`). The count is stored on the root's `references` attribute.
//!
//! Run after load, before the first graph build, and before serializing a
//! document that has lost elements.

use std::collections::HashMap;

use vxgraph_core::id::{ElemId, RefId};

use crate::document::{Document, ATTR_NODE, ATTR_REFERENCE, ATTR_REFERENCES};

/// Outcome of a fixup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixupReport {
    /// Number of distinct references, now `0..count`.
    pub count: u32,
    /// Elements whose `node` attribute named no reference; the attribute
    /// was dropped.
    pub dangling_nodes: Vec<ElemId>,
}

impl Document {
    /// Renumbers references densely. Idempotent.
    pub fn fixup_references(&mut self) -> FixupReport {
        let order = self.preorder();

        let mut old_to_new: HashMap<String, RefId> = HashMap::new();
        let mut count = 0u32;
        for &id in &order {
            if let Some(old) = self.attr(id, ATTR_REFERENCE) {
                if !old_to_new.contains_key(old) {
                    old_to_new.insert(old.to_string(), RefId(count));
                    count += 1;
                }
            }
        }

        let mut dangling_nodes = Vec::new();
        for &id in &order {
            let reference = self.attr(id, ATTR_REFERENCE).map(str::to_string);
            let node = self.attr(id, ATTR_NODE).map(str::to_string);
            // every id in `order` is live, so the setters cannot fail
            if let Some(old) = reference {
                if let Some(new) = old_to_new.get(&old) {
                    let _ = self.set_attr(id, ATTR_REFERENCE, new.to_string());
                }
            } else if let Some(old) = node {
                match old_to_new.get(&old) {
                    Some(new) => {
                        let _ = self.set_attr(id, ATTR_NODE, new.to_string());
                    }
                    None => {
                        let _ = self.remove_attr(id, ATTR_NODE);
                        dangling_nodes.push(id);
                    }
                }
            }
        }

        let root = self.root();
        let _ = self.set_attr(root, ATTR_REFERENCES, count.to_string());
        self.reindex();

        FixupReport {
            count,
            dangling_nodes,
        }
    }
}
