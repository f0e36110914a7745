//! # Activation Store
//!
//! The contract between the resonance propagator and wherever activation
//! values live. The propagator only ever talks to `ActivationStore`.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | HashMap keyed by `NodeId` |

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::model::NodeId;

pub use memory::MemoryStore;

/// Owned copy of every activation, keyed by node.
pub type ActivationMap = hashbrown::HashMap<NodeId, f64>;

// ============================================================================
// Input
// ============================================================================

/// Caller-supplied activations.
///
/// Resolved by the caller: either a plain ordered sequence laid onto the
/// lattice in iteration order, or explicit `(node, value)` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Input {
    /// Values assigned in iteration order until exhausted.
    Sequence(Vec<f64>),
    /// Values assigned to specific nodes. Unknown nodes are skipped.
    Keyed(Vec<(NodeId, f64)>),
}

impl From<Vec<f64>> for Input {
    fn from(values: Vec<f64>) -> Self {
        Input::Sequence(values)
    }
}

impl From<Vec<(NodeId, f64)>> for Input {
    fn from(pairs: Vec<(NodeId, f64)>) -> Self {
        Input::Keyed(pairs)
    }
}

// ============================================================================
// ActivationStore Trait
// ============================================================================

/// Per-node scalar storage over a fixed node set.
///
/// The node set never grows: writes to unknown nodes are dropped, never
/// inserted.
pub trait ActivationStore {
    /// Nodes held by this store, in iteration order.
    fn nodes(&self) -> &[NodeId];

    fn get(&self, id: NodeId) -> Option<f64>;

    /// Write one value. Returns false (and writes nothing) for unknown nodes.
    fn set(&mut self, id: NodeId, value: f64) -> bool;

    /// Set every node to 0.0.
    fn reset(&mut self);

    fn snapshot(&self) -> ActivationMap;

    /// Replace all values from a snapshot. Entries for unknown nodes are
    /// ignored; nodes missing from the snapshot keep their value.
    fn replace(&mut self, snapshot: ActivationMap);

    fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Lay `values` onto the nodes in iteration order. Extra values are
    /// ignored; nodes past the end of `values` keep their prior value.
    /// Returns the number of values written.
    fn apply_sequence(&mut self, values: &[f64]) -> usize {
        let targets: Vec<NodeId> = self.nodes().iter().take(values.len()).copied().collect();
        for (id, &v) in targets.iter().zip(values) {
            self.set(*id, v);
        }
        targets.len()
    }

    /// Write explicit `(node, value)` pairs. Unknown nodes are skipped
    /// silently. Returns the number of values written.
    fn apply_keyed<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (NodeId, f64)>,
        Self: Sized,
    {
        let mut applied = 0;
        for (id, v) in pairs {
            if self.set(id, v) {
                applied += 1;
            } else {
                tracing::trace!(node = %id, "ignoring input for unknown node");
            }
        }
        applied
    }

    fn apply_input(&mut self, input: Input) -> usize
    where
        Self: Sized,
    {
        match input {
            Input::Sequence(values) => self.apply_sequence(&values),
            Input::Keyed(pairs) => self.apply_keyed(pairs),
        }
    }
}
