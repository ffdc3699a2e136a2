//! Opaque node identities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one logical node.
///
/// Identities are generated when a node is constructed and cannot be built from user data,
/// so two distinct nodes never share one. Copies of a node (and the modifier wrappers around
/// it) keep the identity of the node they copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<NodeId> = (0..1000).map(|_| NodeId::next()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..250).map(|_| NodeId::next()).collect::<Vec<_>>()))
            .collect();
        let ids: HashSet<NodeId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_display() {
        let id = NodeId(42);
        assert_eq!(id.to_string(), "node-42");
        assert_eq!(id.get(), 42);
    }
}
