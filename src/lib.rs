//! # zerolith — Resonance Engine over a Fixed Lattice
//!
//! A 13×13 lattice of labeled points (12 face groups plus a reference
//! layer) holds one scalar activation per node. Resonance repeatedly
//! averages every node with its intra-group neighbors and the singularity
//! core `(12, 12)`; the core's final value is the engine's output.
//!
//! ## Design Principles
//!
//! 1. **Fixed topology**: nodes, coordinates, and adjacency never change after `Lattice::build()`
//! 2. **Store behind a trait**: `ActivationStore` is the contract between propagator and storage
//! 3. **Synchronous rounds**: every round reads only the previous round's snapshot
//! 4. **Permissive input**: short inputs keep the tail, unknown nodes are skipped
//!
//! ## Quick Start
//!
//! ```rust
//! use zerolith::{NodeId, ResonanceEngine};
//!
//! let mut engine = ResonanceEngine::new();
//! engine.apply_sequence(&[1.0, 0.5, 0.25]);
//! engine.apply_keyed([(NodeId::new(3, 12), 0.8)]);
//! engine.resonate(5);
//! println!("core = {:.6}", engine.summary());
//!
//! let report = engine.refract("Awaken consciousness");
//! print!("{report}");
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod storage;
pub mod resonance;
pub mod config;
pub mod engine;
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Coord, NodeId, NODE_COUNT, NOMINAL_NODE_COUNT};
pub use graph::Lattice;
pub use storage::{ActivationMap, ActivationStore, Input, MemoryStore};
pub use resonance::{resonate, ResonanceTrace, DEFAULT_STEPS};
pub use config::EngineConfig;
pub use engine::{encode_prompt, Refraction, ResonanceEngine};
pub use export::{export_cypher_dump, LatticeSnapshot, NodeSnapshot};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
