//! Bounded undo/redo history of whole-document snapshots.
//!
//! A [`Checkpoint`] is the serialized XML of a document plus its blake3
//! digest, so two checkpoints of identical states compare equal without
//! reparsing. The undo side holds at most `max_depth` checkpoints and drops
//! the oldest first; taking a new checkpoint clears the redo side.

use std::collections::VecDeque;

use vxgraph_storage::{hash_xml, Document};

use crate::error::EditError;

/// One saved document state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    xml: String,
    digest: blake3::Hash,
}

impl Checkpoint {
    pub fn capture(doc: &Document) -> Result<Self, EditError> {
        let xml = doc.to_xml()?;
        let digest = hash_xml(&xml);
        Ok(Checkpoint { xml, digest })
    }

    /// Parses the saved state back into a document.
    pub fn restore(&self) -> Result<Document, EditError> {
        Ok(Document::from_xml(&self.xml)?)
    }

    pub fn digest(&self) -> blake3::Hash {
        self.digest
    }

    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Whether `doc` serializes to the saved state.
    pub fn matches(&self, doc: &Document) -> Result<bool, EditError> {
        Ok(self.digest == hash_xml(&doc.to_xml()?))
    }
}

#[derive(Debug, Clone)]
pub struct UndoStack {
    undo: VecDeque<Checkpoint>,
    redo: Vec<Checkpoint>,
    max_depth: usize,
}

impl UndoStack {
    pub fn new(max_depth: usize) -> Self {
        UndoStack {
            undo: VecDeque::with_capacity(max_depth),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Saves `doc` before a mutation. Clears the redo side.
    pub fn checkpoint(&mut self, doc: &Document) -> Result<(), EditError> {
        let checkpoint = Checkpoint::capture(doc)?;
        self.record(checkpoint);
        Ok(())
    }

    /// Pushes a checkpoint taken before a mutation that went through.
    /// Clears the redo side.
    pub fn record(&mut self, checkpoint: Checkpoint) {
        self.push_undo(checkpoint);
        self.redo.clear();
    }

    /// Returns the state before the last mutation, saving `current` for
    /// redo. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &Document) -> Result<Option<Document>, EditError> {
        let Some(previous) = self.undo.back() else {
            return Ok(None);
        };
        let restored = previous.restore()?;
        let saved = Checkpoint::capture(current)?;
        self.undo.pop_back();
        self.redo.push(saved);
        tracing::info!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        Ok(Some(restored))
    }

    /// Reapplies the last undone state, saving `current` for undo.
    pub fn redo(&mut self, current: &Document) -> Result<Option<Document>, EditError> {
        let Some(next) = self.redo.last() else {
            return Ok(None);
        };
        let restored = next.restore()?;
        let saved = Checkpoint::capture(current)?;
        self.redo.pop();
        self.push_undo(saved);
        tracing::info!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Ok(Some(restored))
    }

    /// Drops the last checkpoint and returns the state it held. Used to roll
    /// back a mutation that failed part way.
    pub fn rollback(&mut self) -> Result<Option<Document>, EditError> {
        match self.undo.pop_back() {
            Some(checkpoint) => checkpoint.restore().map(Some),
            None => Ok(None),
        }
    }

    /// Discards the last checkpoint, for a mutation that turned out to be a
    /// no-op.
    pub fn scrap_last(&mut self) -> Option<Checkpoint> {
        self.undo.pop_back()
    }

    /// Discards the last checkpoint when it matches `current`. Returns
    /// whether it did.
    pub fn scrap_if_same(&mut self, current: &Document) -> Result<bool, EditError> {
        let Some(last) = self.undo.back() else {
            return Ok(false);
        };
        let same = last.digest == hash_xml(&current.to_xml()?);
        if same {
            self.undo.pop_back();
        }
        Ok(same)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn push_undo(&mut self, checkpoint: Checkpoint) {
        self.undo.push_back(checkpoint);
        while self.undo.len() > self.max_depth {
            self.undo.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(step: usize) -> Document {
        let mut doc = Document::default();
        let root = doc.root();
        doc.set_attr(root, "step", step.to_string()).unwrap();
        doc
    }

    fn step_of(doc: &Document) -> String {
        doc.attr(doc.root(), "step").unwrap_or_default().to_string()
    }

    #[test]
    fn oldest_checkpoint_is_dropped() {
        let mut stack = UndoStack::new(5);
        for step in 0..6 {
            stack.checkpoint(&doc_with(step)).unwrap();
        }
        assert_eq!(stack.undo_depth(), 5);
        assert!(!stack.can_redo());

        let mut current = doc_with(6);
        let mut seen = Vec::new();
        while let Some(previous) = stack.undo(&current).unwrap() {
            seen.push(step_of(&previous));
            current = previous;
        }
        assert_eq!(seen, vec!["5", "4", "3", "2", "1"]);
        assert_eq!(stack.redo_depth(), 5);
    }

    #[test]
    fn undo_then_redo_returns_to_the_same_state() {
        let mut stack = UndoStack::new(5);
        stack.checkpoint(&doc_with(0)).unwrap();
        let after = doc_with(1);
        let before = stack.undo(&after).unwrap().unwrap();
        assert_eq!(step_of(&before), "0");
        let again = stack.redo(&before).unwrap().unwrap();
        assert_eq!(step_of(&again), "1");
        assert_eq!(stack.undo_depth(), 1);
        assert!(stack.redo(&again).unwrap().is_none());
    }

    #[test]
    fn new_checkpoint_clears_redo() {
        let mut stack = UndoStack::new(3);
        stack.checkpoint(&doc_with(0)).unwrap();
        stack.undo(&doc_with(1)).unwrap();
        assert!(stack.can_redo());
        stack.checkpoint(&doc_with(0)).unwrap();
        assert!(!stack.can_redo());
    }

    #[test]
    fn identical_states_are_scrapped() {
        let mut stack = UndoStack::new(3);
        let doc = doc_with(0);
        stack.checkpoint(&doc).unwrap();
        assert!(!stack.scrap_if_same(&doc_with(1)).unwrap());
        assert!(stack.scrap_if_same(&doc).unwrap());
        assert!(!stack.can_undo());
        assert!(stack.scrap_last().is_none());
    }

    #[test]
    fn rollback_restores_without_redo() {
        let mut stack = UndoStack::new(3);
        stack.checkpoint(&doc_with(7)).unwrap();
        let restored = stack.rollback().unwrap().unwrap();
        assert_eq!(step_of(&restored), "7");
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert!(stack.rollback().unwrap().is_none());
    }

    #[test]
    fn zero_depth_keeps_nothing() {
        let mut stack = UndoStack::new(0);
        stack.checkpoint(&doc_with(0)).unwrap();
        assert!(!stack.can_undo());
        stack.clear();
        assert_eq!(stack.max_depth(), 0);
    }
}
