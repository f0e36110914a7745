//! Lattice export — Cypher DUMP and JSON snapshots.
//!
//! The Cypher script recreates the lattice as a property graph: one node
//! per lattice point carrying its coordinate and current activation, and
//! one `RESONATES_WITH` relationship per lateral adjacency.
//!
//! ```text
//! ResonanceEngine → export_cypher_dump() → CREATE/MATCH statements
//!   → paste into Neo4j Browser, or pipe into cypher-shell
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::engine::ResonanceEngine;
use crate::model::*;
use crate::{Error, Result};

/// Export the engine's lattice and current activations as Cypher.
pub fn export_cypher_dump(engine: &ResonanceEngine, writer: &mut dyn Write) -> Result<()> {
    let lattice = engine.lattice();

    // Header
    writeln!(writer, "// zerolith lattice Cypher DUMP")?;
    writeln!(writer, "// Nodes: {}", lattice.len())?;
    writeln!(writer, "// Relationships: {}", lattice.nodes().iter().map(|n| lattice.neighbors(*n).count()).sum::<usize>())?;
    writeln!(writer)?;

    for &id in lattice.nodes() {
        let coord = lattice.coord(id).unwrap_or_default();
        let activation = engine.activation(id).unwrap_or(0.0);
        let labels = if id.is_core() { ":Node:Core" } else { ":Node" };
        writeln!(
            writer,
            "CREATE (n{} {{_id: {}, group: {}, slot: {}, x: {}, y: {}, z: {}, activation: {}}});",
            labels,
            id.index().unwrap_or_default(),
            id.group,
            id.slot,
            format_float(coord.x),
            format_float(coord.y),
            format_float(coord.z),
            format_float(activation),
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "// Relationships")?;

    for &id in lattice.nodes() {
        for n in lattice.neighbors(id) {
            writeln!(
                writer,
                "MATCH (a {{_id: {}}}), (b {{_id: {}}}) CREATE (a)-[:RESONATES_WITH]->(b);",
                id.index().unwrap_or_default(),
                n.index().unwrap_or_default(),
            )?;
        }
    }

    Ok(())
}

/// Format a float as a Cypher literal. Non-finite values become null.
fn format_float(v: f64) -> String {
    if v.is_finite() {
        // Debug keeps a trailing ".0" so Cypher sees a float, not an integer.
        format!("{v:?}")
    } else {
        "null".to_string()
    }
}

// ============================================================================
// JSON snapshot
// ============================================================================

/// One lattice point in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub coord: Coord,
    pub activation: f64,
}

/// Serializable view of the lattice and its activations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeSnapshot {
    pub core: f64,
    pub nodes: Vec<NodeSnapshot>,
}

impl LatticeSnapshot {
    pub fn capture(engine: &ResonanceEngine) -> Self {
        let lattice = engine.lattice();
        let nodes = lattice
            .nodes()
            .iter()
            .map(|&id| NodeSnapshot {
                id,
                coord: lattice.coord(id).unwrap_or_default(),
                activation: engine.activation(id).unwrap_or(0.0),
            })
            .collect();
        Self { core: engine.summary(), nodes }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}
