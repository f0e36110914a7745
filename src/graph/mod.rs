//! # Lattice Builder
//!
//! Constructs the fixed 13×13 node set with synthetic coordinates.
//!
//! ```text
//! groups 0..=11  face groups   — 12 slots on a small ring around a face
//!                                center at radius 0.8, slot 12 = center
//! group  12      reference     — 12 slots on a 0.4 circle in the XY plane,
//!                                slot 12 = singularity core at the origin
//! ```
//!
//! The node set, coordinates, and adjacency are read-only once built.

use std::f64::consts::TAU;

use hashbrown::HashMap;
use tracing::debug;

use crate::model::*;

/// Radius of the face-center shell.
pub const FACE_RADIUS: f64 = 0.8;
/// Alternating Z tilt of face directions (before normalization).
pub const FACE_TILT: f64 = 0.3;
/// Radius of the slot ring around each face center.
pub const SLOT_RING_RADIUS: f64 = 0.3;
/// Radius of the reference layer ring.
pub const REFERENCE_RADIUS: f64 = 0.4;

/// The immutable node set of one engine instance.
#[derive(Debug, Clone)]
pub struct Lattice {
    /// Nodes in iteration order (group-major).
    order: Vec<NodeId>,
    coords: HashMap<NodeId, Coord>,
}

impl Lattice {
    /// Build every node and its coordinate.
    pub fn build() -> Self {
        let mut order = Vec::with_capacity(NODE_COUNT);
        let mut coords = HashMap::with_capacity(NODE_COUNT);

        for face in 0..REFERENCE_GROUP {
            let center = face_center(face);
            for slot in 0..SLOTS {
                let id = NodeId::new(face, slot);
                let pos = if slot == HUB_SLOT {
                    center
                } else {
                    center.offset(ring_point(slot, SLOT_RING_RADIUS))
                };
                order.push(id);
                coords.insert(id, pos);
            }
        }

        for slot in 0..SLOTS {
            let id = NodeId::new(REFERENCE_GROUP, slot);
            let pos = if id.is_core() {
                Coord::ORIGIN
            } else {
                ring_point(slot, REFERENCE_RADIUS)
            };
            order.push(id);
            coords.insert(id, pos);
        }

        debug_assert!(coords.contains_key(&NodeId::CORE));
        debug!(nodes = order.len(), "lattice built");

        Self { order, coords }
    }

    /// Nodes in iteration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.coords.contains_key(&id)
    }

    pub fn coord(&self, id: NodeId) -> Option<Coord> {
        self.coords.get(&id).copied()
    }

    /// Position of `id` in iteration order.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        if self.contains(id) { id.index() } else { None }
    }

    /// The 13 nodes of one group, in slot order. Empty for unknown groups.
    pub fn group(&self, group: u8) -> &[NodeId] {
        if group >= GROUPS {
            return &[];
        }
        let start = group as usize * SLOTS as usize;
        &self.order[start..start + SLOTS as usize]
    }

    /// Lateral neighbors of `id` inside its own group, in table order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        slot_neighbors(id.slot)
            .iter()
            .map(move |&slot| NodeId::new(id.group, slot))
            .filter(|n| self.contains(*n))
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::build()
    }
}

/// Face center: direction at `2π·face/12` around Z with alternating tilt,
/// normalized onto the face shell.
fn face_center(face: u8) -> Coord {
    let theta = TAU * face as f64 / 12.0;
    let tilt = if face % 2 == 0 { FACE_TILT } else { -FACE_TILT };
    Coord::new(theta.cos(), theta.sin(), tilt)
        .normalized()
        .scale(FACE_RADIUS)
}

fn ring_point(slot: u8, radius: f64) -> Coord {
    let angle = TAU * slot as f64 / 12.0;
    Coord::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Coord, b: Coord) -> bool {
        (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12 && (a.z - b.z).abs() < 1e-12
    }

    #[test]
    fn test_node_count_and_core() {
        let lattice = Lattice::build();
        assert_eq!(lattice.len(), NODE_COUNT);
        assert_eq!(lattice.nodes().iter().filter(|n| n.is_core()).count(), 1);
        assert!(lattice.contains(NodeId::CORE));
        assert_eq!(lattice.coord(NodeId::CORE), Some(Coord::ORIGIN));
    }

    #[test]
    fn test_iteration_order_is_group_major() {
        let lattice = Lattice::build();
        let nodes = lattice.nodes();
        assert_eq!(nodes[0], NodeId::new(0, 0));
        assert_eq!(nodes[12], NodeId::new(0, 12));
        assert_eq!(nodes[13], NodeId::new(1, 0));
        assert_eq!(*nodes.last().unwrap(), NodeId::CORE);
        for (i, id) in nodes.iter().enumerate() {
            assert_eq!(lattice.index_of(*id), Some(i));
        }
    }

    #[test]
    fn test_face_geometry() {
        let lattice = Lattice::build();
        // Face 0 center leans +Z, face 1 leans -Z.
        let c0 = lattice.coord(NodeId::new(0, 12)).unwrap();
        let c1 = lattice.coord(NodeId::new(1, 12)).unwrap();
        assert!((c0.norm() - FACE_RADIUS).abs() < 1e-12);
        assert!(c0.z > 0.0 && c1.z < 0.0);
        assert!(close(c0, Coord::new(0.7662610281769211, 0.0, 0.2298783084530763)));

        // Slot 0 sits 0.3 along +X from its face center.
        let s0 = lattice.coord(NodeId::new(0, 0)).unwrap();
        assert!(close(s0, Coord::new(c0.x + 0.3, c0.y, c0.z)));
    }

    #[test]
    fn test_reference_ring() {
        let lattice = Lattice::build();
        for slot in 0..12 {
            let c = lattice.coord(NodeId::new(REFERENCE_GROUP, slot)).unwrap();
            assert!((c.norm() - REFERENCE_RADIUS).abs() < 1e-12);
            assert_eq!(c.z, 0.0);
        }
    }

    #[test]
    fn test_group_and_neighbors() {
        let lattice = Lattice::build();
        assert_eq!(lattice.group(5).len(), 13);
        assert!(lattice.group(5).iter().all(|n| n.group == 5));
        assert!(lattice.group(13).is_empty());

        let n: Vec<_> = lattice.neighbors(NodeId::new(4, 0)).collect();
        assert_eq!(
            n,
            vec![
                NodeId::new(4, 1),
                NodeId::new(4, 5),
                NodeId::new(4, 6),
                NodeId::new(4, 11),
                NodeId::new(4, 12),
            ]
        );
        assert_eq!(lattice.neighbors(NodeId::CORE).count(), 12);
    }
}
