//! Label association graph.
//!
//! Directed adjacency list linking labels that tend to appear together
//! in a deck (tokens -> sacrifice, poison -> proliferate). Cycles are
//! expected; traversal is guarded by a visited set in the expander.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::label::FeatureLabel;

/// Label -> related labels, neighbor order preserved.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociationGraph {
    edges: FxHashMap<FeatureLabel, Vec<FeatureLabel>>,
}

impl AssociationGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge (builder pattern).
    #[must_use]
    pub fn with_edge(mut self, from: &str, to: &str) -> Self {
        self.add_edge(from, to);
        self
    }

    /// Add edges in both directions (builder pattern).
    #[must_use]
    pub fn with_mutual(mut self, a: &str, b: &str) -> Self {
        self.add_edge(a, b);
        self.add_edge(b, a);
        self
    }

    /// Add a directed edge. Duplicate edges and self-loops are ignored.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        let neighbors = self.edges.entry(FeatureLabel::new(from)).or_default();
        if !neighbors.iter().any(|n| n.as_str() == to) {
            neighbors.push(FeatureLabel::new(to));
        }
    }

    /// Related labels, in insertion order.
    #[must_use]
    pub fn neighbors(&self, label: &str) -> &[FeatureLabel] {
        self.edges.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of labels with outgoing edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}
