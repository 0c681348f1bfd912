//! Per-document name table.
//!
//! Every named element owns its name exclusively. Requests for a taken name
//! get a numeric suffix: `base`, `base_0`, `base_1`, ...

use std::collections::HashMap;

use vxgraph_core::id::ElemId;

/// Fallback base for an empty requested name.
pub const FALLBACK_NAME: &str = "object";

/// Maps each assigned name to the element that owns it.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<String, ElemId>,
}

impl NameTable {
    pub fn new() -> Self {
        NameTable::default()
    }

    /// Owner of `name`, if assigned.
    pub fn owner(&self, name: &str) -> Option<ElemId> {
        self.names.get(name).copied()
    }

    /// Assigns a unique name derived from `base` to `elem`, releasing
    /// `previous` if `elem` owned it. Returns the assigned name.
    pub fn allocate(&mut self, base: &str, elem: ElemId, previous: Option<&str>) -> String {
        let base = match base.trim() {
            "" => FALLBACK_NAME,
            trimmed => trimmed,
        };
        let mut trial = base.to_string();
        let mut seq = 0u32;
        while matches!(self.names.get(&trial), Some(owner) if *owner != elem) {
            trial = format!("{base}_{seq}");
            seq += 1;
        }
        if let Some(previous) = previous {
            self.release(previous, elem);
        }
        self.names.insert(trial.clone(), elem);
        trial
    }

    /// Frees `name` if it is owned by `elem`.
    pub fn release(&mut self, name: &str, elem: ElemId) {
        if self.owner(name) == Some(elem) {
            self.names.remove(name);
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collisions_get_numeric_suffixes() {
        let mut names = NameTable::new();
        assert_eq!(names.allocate("image", ElemId(1), None), "image");
        assert_eq!(names.allocate("image", ElemId(2), None), "image_0");
        assert_eq!(names.allocate("image", ElemId(3), None), "image_1");
        assert_eq!(names.owner("image_0"), Some(ElemId(2)));
    }

    #[test]
    fn reassigning_own_name_keeps_it() {
        let mut names = NameTable::new();
        names.allocate("input", ElemId(4), None);
        assert_eq!(names.allocate("input", ElemId(4), Some("input")), "input");
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn rename_releases_previous() {
        let mut names = NameTable::new();
        names.allocate("a", ElemId(1), None);
        assert_eq!(names.allocate("b", ElemId(1), Some("a")), "b");
        assert_eq!(names.owner("a"), None);
        // a name owned by someone else is not released
        names.allocate("c", ElemId(2), None);
        names.allocate("d", ElemId(1), Some("c"));
        assert_eq!(names.owner("c"), Some(ElemId(2)));
    }

    #[test]
    fn blank_names_fall_back() {
        let mut names = NameTable::new();
        assert_eq!(names.allocate("  ", ElemId(0), None), FALLBACK_NAME);
        assert_eq!(names.allocate("", ElemId(1), None), "object_0");
    }
}
