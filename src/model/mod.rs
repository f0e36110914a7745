//! # Lattice Model
//!
//! Plain value types shared by every layer: node identifiers,
//! coordinates, and the static adjacency table.
//!
//! Design rule: this module is pure data — no I/O, no state.

pub mod node;
pub mod coord;
pub mod adjacency;

pub use node::{
    NodeId, GROUPS, SLOTS, HUB_SLOT, REFERENCE_GROUP, NODE_COUNT, NOMINAL_NODE_COUNT,
};
pub use coord::Coord;
pub use adjacency::{ADJACENCY, slot_neighbors, edges_per_group};
