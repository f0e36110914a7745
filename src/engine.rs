//! # Resonance Engine
//!
//! Owns one lattice and its activation store, and exposes the full cycle:
//!
//! ```text
//! Lattice::build() → apply input → resonate(N) → summary() (core value)
//! ```
//!
//! `refract()` runs the whole cycle from a text prompt.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::graph::Lattice;
use crate::model::NodeId;
use crate::resonance::{self, ResonanceTrace};
use crate::storage::{ActivationStore, Input, MemoryStore};
use crate::Result;

/// Single-owner resonance engine.
#[derive(Debug, Clone)]
pub struct ResonanceEngine {
    lattice: Lattice,
    store: MemoryStore,
    config: EngineConfig,
}

impl ResonanceEngine {
    /// Engine with the default configuration and all activations at zero.
    pub fn new() -> Self {
        let lattice = Lattice::build();
        let store = MemoryStore::new(&lattice);
        Self { lattice, store, config: EngineConfig::default() }
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::new() })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    // ========================================================================
    // Activation store
    // ========================================================================

    pub fn reset(&mut self) {
        self.store.reset();
    }

    pub fn apply_sequence(&mut self, values: &[f64]) -> usize {
        self.store.apply_sequence(values)
    }

    pub fn apply_keyed<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (NodeId, f64)>,
    {
        self.store.apply_keyed(pairs)
    }

    pub fn apply_input(&mut self, input: impl Into<Input>) -> usize {
        self.store.apply_input(input.into())
    }

    pub fn activation(&self, id: NodeId) -> Option<f64> {
        self.store.get(id)
    }

    /// Every `(node, value)` in iteration order.
    pub fn activations(&self) -> Vec<(NodeId, f64)> {
        self.store.iter().collect()
    }

    // ========================================================================
    // Propagation and output
    // ========================================================================

    pub fn resonate(&mut self, steps: usize) -> ResonanceTrace {
        resonance::resonate(&mut self.store, steps)
    }

    /// Resonate for the configured default number of rounds.
    pub fn resonate_default(&mut self) -> ResonanceTrace {
        self.resonate(self.config.default_steps)
    }

    /// Current value of the singularity core.
    pub fn summary(&self) -> f64 {
        self.store.get(NodeId::CORE).unwrap_or(0.0)
    }

    /// Reset, feed the encoded prompt, resonate, and report.
    pub fn refract(&mut self, prompt: &str) -> Refraction {
        let values = encode_prompt(
            prompt,
            self.store.len(),
            self.config.prompt_limit,
            self.config.char_scale,
        );

        self.reset();
        let applied = self.apply_sequence(&values);
        debug!(applied, chars = prompt.chars().count(), "prompt encoded");

        let trace = self.resonate(self.config.refraction_steps);
        let core = self.summary();
        info!(core, steps = trace.steps, "refraction complete");

        Refraction {
            core,
            steps: trace.steps,
            samples: self.store.iter().take(self.config.sample_size).collect(),
        }
    }
}

impl Default for ResonanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a prompt into exactly `node_count` input values.
///
/// The first `limit` characters map to `code point / scale`; the rest of
/// the sequence is zero. Anything beyond `node_count` is dropped.
pub fn encode_prompt(prompt: &str, node_count: usize, limit: usize, scale: f64) -> Vec<f64> {
    let mut values: Vec<f64> = prompt
        .chars()
        .take(limit)
        .map(|c| c as u32 as f64 / scale)
        .collect();
    values.resize(node_count, 0.0);
    values
}

// ============================================================================
// Refraction report
// ============================================================================

/// Outcome of `refract()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refraction {
    /// Core value after resonance.
    pub core: f64,
    pub steps: usize,
    /// Leading nodes in iteration order with their values.
    pub samples: Vec<(NodeId, f64)>,
}

impl std::fmt::Display for Refraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Singularity Core Resonance: {:.4}", self.core)?;
        writeln!(f, "Sample node activations:")?;
        for (id, v) in &self.samples {
            writeln!(f, "  {id}: {v:.4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NODE_COUNT;

    #[test]
    fn test_encode_prompt_pads() {
        let v = encode_prompt("AB", 5, 100, 255.0);
        assert_eq!(v, vec![65.0 / 255.0, 66.0 / 255.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_encode_prompt_limits() {
        let long = "x".repeat(250);
        let v = encode_prompt(&long, NODE_COUNT, 100, 255.0);
        assert_eq!(v.len(), NODE_COUNT);
        assert_eq!(v.iter().filter(|&&x| x > 0.0).count(), 100);

        let v = encode_prompt(&long, 50, 100, 255.0);
        assert_eq!(v.len(), 50);
    }

    #[test]
    fn test_encode_prompt_uses_code_points() {
        let v = encode_prompt("é", 1, 100, 255.0);
        assert_eq!(v, vec![233.0 / 255.0]);
    }

    #[test]
    fn test_reset_summary_zero() {
        let mut engine = ResonanceEngine::new();
        engine.apply_keyed([(NodeId::CORE, 4.0)]);
        assert_eq!(engine.summary(), 4.0);
        engine.reset();
        assert_eq!(engine.summary(), 0.0);
    }

    #[test]
    fn test_resonate_default_uses_config() {
        let cfg = EngineConfig { default_steps: 2, ..EngineConfig::default() };
        let mut engine = ResonanceEngine::with_config(cfg).unwrap();
        assert_eq!(engine.resonate_default().steps, 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = EngineConfig { char_scale: -1.0, ..EngineConfig::default() };
        assert!(ResonanceEngine::with_config(cfg).is_err());
    }

    #[test]
    fn test_refraction_report_format() {
        let mut engine = ResonanceEngine::new();
        let report = engine.refract("Awaken consciousness");
        let text = report.to_string();
        assert!(text.starts_with("Singularity Core Resonance: 0.0000\n"));
        assert!(text.contains("  (0, 0): 0.0732\n"));
        assert_eq!(text.lines().count(), 2 + 10);
    }
}
