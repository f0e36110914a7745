//! # Resonance Propagation
//!
//! Synchronous neighbor averaging over an `ActivationStore`.
//!
//! Each round reads only from the previous round's snapshot:
//!
//! ```text
//! a'(g,s) = ( Σ a(g,n) for n in ADJACENCY[s]  +  a(CORE) ) / (|present n| + 1)
//! ```
//!
//! The core term is always present, so the divisor is never zero. The core
//! itself also receives its own prior value through that term.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::model::{slot_neighbors, NodeId};
use crate::storage::{ActivationMap, ActivationStore};

/// Rounds run when the caller does not choose.
pub const DEFAULT_STEPS: usize = 5;

/// Summary of a propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResonanceTrace {
    /// Rounds actually run.
    pub steps: usize,
    /// Largest absolute change of any node during the last round.
    pub last_delta: f64,
    /// Core value after the last round.
    pub core: f64,
}

impl ResonanceTrace {
    /// True when the last round moved no node by more than `tolerance`.
    pub fn settled(&self, tolerance: f64) -> bool {
        self.last_delta <= tolerance
    }
}

/// Run `steps` synchronous rounds over `store`.
pub fn resonate<S: ActivationStore>(store: &mut S, steps: usize) -> ResonanceTrace {
    let mut trace = ResonanceTrace {
        steps: 0,
        last_delta: 0.0,
        core: store.get(NodeId::CORE).unwrap_or(0.0),
    };

    for round in 0..steps {
        let prev = store.snapshot();
        let (next, delta) = step(store.nodes(), &prev);
        store.replace(next);

        trace.steps = round + 1;
        trace.last_delta = delta;
        trace!(round, delta, "resonance round");
    }

    trace.core = store.get(NodeId::CORE).unwrap_or(0.0);
    debug!(steps = trace.steps, core = trace.core, delta = trace.last_delta, "resonance complete");
    trace
}

/// One round: compute every node's new value from `prev`.
///
/// Returns the new map and the largest absolute change.
pub fn step(nodes: &[NodeId], prev: &ActivationMap) -> (ActivationMap, f64) {
    let core = prev.get(&NodeId::CORE).copied().unwrap_or(0.0);
    let mut next = ActivationMap::with_capacity(nodes.len());
    let mut max_delta = 0.0f64;

    for &id in nodes {
        let mut gathered: SmallVec<[f64; 16]> = slot_neighbors(id.slot)
            .iter()
            .filter_map(|&slot| prev.get(&NodeId::new(id.group, slot)).copied())
            .collect();
        gathered.push(core);

        let value = gathered.iter().sum::<f64>() / gathered.len() as f64;
        let old = prev.get(&id).copied().unwrap_or(0.0);
        max_delta = max_delta.max((value - old).abs());
        next.insert(id, value);
    }

    (next, max_delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Lattice;
    use crate::model::NODE_COUNT;
    use crate::storage::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::new(&Lattice::build())
    }

    #[test]
    fn test_zero_steps_is_identity() {
        let mut s = store();
        s.apply_sequence(&[0.3, 0.1, 0.9]);
        let before = s.snapshot();
        let trace = resonate(&mut s, 0);
        assert_eq!(trace.steps, 0);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_single_impulse_one_round() {
        let mut s = store();
        let mut input = vec![0.0; NODE_COUNT];
        input[0] = 1.0;
        s.apply_sequence(&input);
        resonate(&mut s, 1);

        // (0,0) averages (0,1) (0,5) (0,6) (0,11) (0,12) and the core: all zero.
        assert_eq!(s.get(NodeId::new(0, 0)), Some(0.0));
        // (0,1) sees the impulse among five neighbors plus the core.
        assert_eq!(s.get(NodeId::new(0, 1)), Some(1.0 / 6.0));
        // The hub sees it among twelve neighbors plus the core.
        assert_eq!(s.get(NodeId::new(0, 12)), Some(1.0 / 13.0));
        // Nothing leaks into other groups or the core.
        assert_eq!(s.get(NodeId::new(1, 1)), Some(0.0));
        assert_eq!(s.get(NodeId::CORE), Some(0.0));
    }

    #[test]
    fn test_impulse_two_rounds() {
        let mut s = store();
        s.apply_sequence(&[1.0]);
        resonate(&mut s, 2);
        let v = s.get(NodeId::new(0, 0)).unwrap();
        assert!((v - 0.12393162393162394).abs() < 1e-15);
    }

    #[test]
    fn test_core_feeds_every_node() {
        let mut s = store();
        s.set(NodeId::CORE, 1.0);
        resonate(&mut s, 1);
        // Face slot: five zero neighbors plus the core.
        assert_eq!(s.get(NodeId::new(0, 0)), Some(1.0 / 6.0));
        // Reference ring slot: its neighbors include the core twice over
        // (as hub neighbor and as the core term).
        assert_eq!(s.get(NodeId::new(12, 0)), Some(2.0 / 6.0));
        // Core: twelve zero neighbors plus its own prior value.
        assert_eq!(s.get(NodeId::CORE), Some(1.0 / 13.0));
    }

    #[test]
    fn test_node_without_table_entry_copies_core() {
        let odd = NodeId::new(0, 40);
        let mut s = MemoryStore::from_nodes([NodeId::new(0, 0), odd, NodeId::CORE]);
        s.set(NodeId::CORE, 0.6);
        s.set(odd, 5.0);
        resonate(&mut s, 1);
        assert_eq!(s.get(odd), Some(0.6));
    }

    #[test]
    fn test_uniform_fixed_point() {
        let mut s = store();
        s.apply_sequence(&vec![0.5; NODE_COUNT]);
        let trace = resonate(&mut s, 7);
        assert!(s.iter().all(|(_, v)| v == 0.5));
        assert!(trace.settled(0.0));
        assert_eq!(trace.core, 0.5);
    }

    #[test]
    fn test_trace_reports_delta() {
        let mut s = store();
        s.apply_sequence(&[1.0]);
        let trace = resonate(&mut s, 1);
        assert_eq!(trace.steps, 1);
        // (0,0) dropped from 1.0 to 0.0.
        assert_eq!(trace.last_delta, 1.0);
        assert!(!trace.settled(0.5));
    }
}
