//! Node identifiers on the lattice.

use serde::{Deserialize, Serialize};

/// Number of groups (12 faces + 1 reference layer).
pub const GROUPS: u8 = 13;

/// Number of slots per group. Slot 12 is the group's hub.
pub const SLOTS: u8 = 13;

/// Hub slot index within every group.
pub const HUB_SLOT: u8 = 12;

/// Group index of the reference layer.
pub const REFERENCE_GROUP: u8 = 12;

/// Number of distinct nodes on the lattice.
pub const NODE_COUNT: usize = GROUPS as usize * SLOTS as usize;

/// Node total as historically reported by the engine banner. The core is
/// counted once as a reference layer slot and once as the singularity, so
/// this is one more than the number of distinct identifiers.
pub const NOMINAL_NODE_COUNT: usize = 170;

/// Lattice node identifier: `(group, slot)`.
///
/// Ordering is group-major, which is also the lattice iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    pub group: u8,
    pub slot: u8,
}

impl NodeId {
    /// The singularity core `(12, 12)`: universal neighbor and summary output.
    pub const CORE: NodeId = NodeId { group: REFERENCE_GROUP, slot: HUB_SLOT };

    pub const fn new(group: u8, slot: u8) -> Self {
        Self { group, slot }
    }

    /// True if both indices fall inside the 13×13 identifier space.
    pub const fn is_valid(&self) -> bool {
        self.group < GROUPS && self.slot < SLOTS
    }

    pub const fn is_core(&self) -> bool {
        self.group == REFERENCE_GROUP && self.slot == HUB_SLOT
    }

    pub const fn is_hub(&self) -> bool {
        self.slot == HUB_SLOT
    }

    /// Dense position in iteration order, `None` when out of range.
    pub const fn index(&self) -> Option<usize> {
        if self.is_valid() {
            Some(self.group as usize * SLOTS as usize + self.slot as usize)
        } else {
            None
        }
    }

    /// Inverse of [`NodeId::index`].
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NODE_COUNT {
            Some(Self {
                group: (index / SLOTS as usize) as u8,
                slot: (index % SLOTS as usize) as u8,
            })
        } else {
            None
        }
    }
}

impl From<(u8, u8)> for NodeId {
    fn from((group, slot): (u8, u8)) -> Self {
        Self { group, slot }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.group, self.slot)
    }
}
