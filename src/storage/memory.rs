//! In-memory activation store.
//!
//! This is the reference implementation of `ActivationStore`: a HashMap
//! keyed by `NodeId` plus the fixed iteration order of its lattice.
//! Sized once at construction; nodes are never added or removed.

use hashbrown::HashMap;

use crate::graph::Lattice;
use crate::model::NodeId;
use super::{ActivationMap, ActivationStore};

// ============================================================================
// MemoryStore
// ============================================================================

/// Activation values for every node of one lattice.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    order: Vec<NodeId>,
    values: HashMap<NodeId, f64>,
}

impl MemoryStore {
    /// A zeroed store over every node of `lattice`.
    pub fn new(lattice: &Lattice) -> Self {
        Self::from_nodes(lattice.nodes().iter().copied())
    }

    /// A zeroed store over an arbitrary node set, kept in the given order.
    /// Duplicate ids are collapsed onto their first position.
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut order = Vec::new();
        let mut values = HashMap::new();
        for id in nodes {
            if values.insert(id, 0.0).is_none() {
                order.push(id);
            }
        }
        Self { order, values }
    }

    /// Values in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.order
            .iter()
            .map(move |id| (*id, self.values.get(id).copied().unwrap_or(0.0)))
    }
}

// ============================================================================
// ActivationStore impl
// ============================================================================

impl ActivationStore for MemoryStore {
    fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    fn get(&self, id: NodeId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    fn set(&mut self, id: NodeId, value: f64) -> bool {
        match self.values.get_mut(&id) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn reset(&mut self) {
        for v in self.values.values_mut() {
            *v = 0.0;
        }
    }

    fn snapshot(&self) -> ActivationMap {
        self.values.clone()
    }

    fn replace(&mut self, snapshot: ActivationMap) {
        for (id, v) in snapshot {
            self.set(id, v);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
