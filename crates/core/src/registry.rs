//! The pass-scoped side table of accumulated attributes.

use crate::ids::NodeId;
use std::collections::HashMap;
use trellis_attributes::AttributeBag;

/// Maps node identities to the attributes modifiers have applied to them.
///
/// Nodes are plain values that get copied, wrapped and discarded while a tree is composed;
/// the registry is what remembers, for the length of one render pass, what has been applied
/// to each logical node. Entries are created on first touch, only ever merged into, and
/// dropped with the registry.
///
/// A registry belongs to exactly one pass. Passes running concurrently each own their own.
#[derive(Debug, Default, Clone)]
pub struct AttributeRegistry {
    entries: HashMap<NodeId, AttributeBag>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches or creates the entry for `id` and merges `bag` into it.
    pub fn merge(&mut self, bag: AttributeBag, id: NodeId) {
        self.entries.entry(id).or_default().merge(bag);
    }

    /// Edits the entry for `id` in place, creating it if needed.
    pub fn update<F>(&mut self, id: NodeId, edit: F)
    where
        F: FnOnce(&mut AttributeBag),
    {
        edit(self.entries.entry(id).or_default());
    }

    /// A snapshot of the attributes stored for `id`; empty if the node was never touched.
    pub fn attributes(&self, id: NodeId) -> AttributeBag {
        self.entries.get(&id).cloned().unwrap_or_default()
    }

    pub fn get(&self, id: NodeId) -> Option<&AttributeBag> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evicts every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
