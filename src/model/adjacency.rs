//! Intra-group adjacency (simplified Metatron's Cube).
//!
//! Every group shares the same 13-slot pattern: slots 0–11 form a ring
//! with cross links, and slot 12 is a hub connected to all of them.
//!
//! ```text
//!   slot  neighbors
//!    0    1  5  6 11 12
//!    1    0  2  6  7 12
//!   ...
//!   12    0 1 2 3 4 5 6 7 8 9 10 11
//! ```

use super::node::SLOTS;

/// Lateral neighbors per slot, in table order.
pub static ADJACENCY: [&[u8]; SLOTS as usize] = [
    &[1, 5, 6, 11, 12],
    &[0, 2, 6, 7, 12],
    &[1, 3, 7, 8, 12],
    &[2, 4, 8, 9, 12],
    &[3, 5, 9, 10, 12],
    &[0, 4, 10, 11, 12],
    &[0, 1, 7, 11, 12],
    &[1, 2, 6, 8, 12],
    &[2, 3, 7, 9, 12],
    &[3, 4, 8, 10, 12],
    &[4, 5, 9, 11, 12],
    &[0, 5, 6, 10, 12],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
];

/// Neighbor slots of `slot`. Slots outside the table have none.
pub fn slot_neighbors(slot: u8) -> &'static [u8] {
    ADJACENCY.get(slot as usize).copied().unwrap_or(&[])
}

/// Number of directed lateral edges within one group.
pub fn edges_per_group() -> usize {
    ADJACENCY.iter().map(|n| n.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_in_range_and_irreflexive() {
        for (slot, neighbors) in ADJACENCY.iter().enumerate() {
            for &n in neighbors.iter() {
                assert!(n < SLOTS, "slot {slot} lists out-of-range neighbor {n}");
                assert_ne!(n as usize, slot, "slot {slot} lists itself");
            }
        }
    }

    #[test]
    fn test_hub_reaches_every_other_slot() {
        assert_eq!(slot_neighbors(12), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        for slot in 0..12u8 {
            assert!(slot_neighbors(slot).contains(&12));
        }
    }

    #[test]
    fn test_table_is_symmetric() {
        for (slot, neighbors) in ADJACENCY.iter().enumerate() {
            for &n in neighbors.iter() {
                assert!(
                    slot_neighbors(n).contains(&(slot as u8)),
                    "{slot} -> {n} has no reverse edge"
                );
            }
        }
    }

    #[test]
    fn test_missing_slot_has_no_neighbors() {
        assert!(slot_neighbors(13).is_empty());
        assert!(slot_neighbors(u8::MAX).is_empty());
        assert_eq!(edges_per_group(), 12 * 5 + 12);
    }
}
