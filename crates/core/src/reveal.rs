//! Headless model of the scroll-reveal collaborator.
//!
//! The page observes each freshly inserted card node; once a node is
//! sufficiently visible it is revealed permanently and observation stops.
//! The registry tracks which nodes are observed or already revealed so the
//! re-arm call after every render stays idempotent.

use std::collections::HashSet;

/// Minimum intersection ratio before a node counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.12;

#[derive(Debug, Default)]
pub struct RevealRegistry {
    observed: HashSet<String>,
    revealed: HashSet<String>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node for observation. Returns whether observation actually
    /// started; already-observed and already-revealed nodes are skipped.
    pub fn observe(&mut self, id: &str) -> bool {
        if self.revealed.contains(id) || self.observed.contains(id) {
            return false;
        }
        self.observed.insert(id.to_owned());
        true
    }

    /// Observer callback: a node reported `ratio` of itself visible.
    /// Returns whether the node transitioned to revealed. Revealed is
    /// permanent; the node is dropped from observation.
    pub fn on_intersection(&mut self, id: &str, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD || !self.observed.contains(id) {
            return false;
        }
        self.observed.remove(id);
        self.revealed.insert(id.to_owned());
        true
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
