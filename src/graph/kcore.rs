//! Synergy graph analysis.
//!
//! Builds a `ComboGraph` from the 2-card combos not already claimed by
//! ranking and extracts its maximal k-core: the largest k, up to a fixed
//! ceiling, whose core is non-empty. Cards inside a dense mesh of
//! pairwise interactions tend to be build-arounds even when they have no
//! direct tie to the anchor.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::CardPool;
use crate::combos::{ComboId, ComboIndex, SizeBucket};
use crate::core::AnalysisContext;

use super::combo_graph::ComboGraph;

/// A non-empty k-core.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KCoreResult {
    pub k: usize,
    /// Core members in graph insertion order.
    pub nodes: Vec<String>,
    pub size: usize,
}

/// Outcome of the k-core search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreOutcome {
    Core(KCoreResult),
    /// The maximal core exceeded the size cap: no usable core.
    Oversized { k: usize, size: usize },
    /// No 2-card combos survived, so there is no graph.
    Empty,
}

impl CoreOutcome {
    /// The core, if it is usable.
    #[must_use]
    pub fn usable(&self) -> Option<&KCoreResult> {
        match self {
            CoreOutcome::Core(core) => Some(core),
            _ => None,
        }
    }
}

/// The maximal k-core of `graph` for k in `1..=max_k`.
///
/// Returns `None` when even the 1-core is empty.
#[must_use]
pub fn max_core(graph: &ComboGraph, max_k: usize) -> Option<KCoreResult> {
    let mut best = None;
    for k in 1..=max_k {
        let nodes = graph.k_core(k);
        if nodes.is_empty() {
            // Cores are nested, so every larger k is empty too.
            break;
        }
        debug!(k, size = nodes.len(), "k-core level");
        best = Some(KCoreResult {
            k,
            size: nodes.len(),
            nodes,
        });
    }
    best
}

/// Builds the 2-card combo graph and finds its usable maximal core.
#[derive(Clone, Copy, Debug)]
pub struct SynergyGraphAnalyzer<'a> {
    index: &'a ComboIndex,
    pool: &'a CardPool,
    filter: Option<&'a Regex>,
    max_k: usize,
    size_cap: usize,
}

impl<'a> SynergyGraphAnalyzer<'a> {
    pub fn new(index: &'a ComboIndex, pool: &'a CardPool, max_k: usize, size_cap: usize) -> Self {
        Self {
            index,
            pool,
            filter: None,
            max_k,
            size_cap,
        }
    }

    /// Create an analyzer with the context's filter, ceiling and cap.
    pub fn from_context(ctx: &'a AnalysisContext, index: &'a ComboIndex, pool: &'a CardPool) -> Self {
        let config = ctx.config();
        Self::new(index, pool, config.kcore_max_k, config.kcore_size_cap)
            .with_filter(ctx.effect_filter())
    }

    /// Set the effect filter (builder pattern).
    #[must_use]
    pub fn with_filter(mut self, filter: Option<&'a Regex>) -> Self {
        self.filter = filter;
        self
    }

    /// Graph of legal, filter-matching 2-card combos whose ids are not in
    /// `claimed`.
    #[must_use]
    pub fn build_graph(&self, claimed: &FxHashSet<ComboId>) -> ComboGraph {
        let mut graph = ComboGraph::new();
        let pairs = self
            .index
            .iter()
            .filter(|r| SizeBucket::for_len(r.len()) == SizeBucket::Pair)
            .filter(|r| !claimed.contains(&r.id))
            .filter(|r| self.filter.is_none_or(|f| f.is_match(&r.effect)))
            .filter(|r| r.resolves_in(self.pool));

        for record in pairs {
            graph.add_clique(&record.cards);
        }
        graph
    }

    /// Find the usable maximal core, excluding `claimed` combo ids.
    #[must_use]
    pub fn analyze(&self, claimed: &FxHashSet<ComboId>) -> CoreOutcome {
        let graph = self.build_graph(claimed);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "synergy graph built"
        );

        match max_core(&graph, self.max_k) {
            None => CoreOutcome::Empty,
            Some(core) if core.size > self.size_cap => {
                warn!(k = core.k, size = core.size, cap = self.size_cap, "k-core exceeds size cap");
                CoreOutcome::Oversized {
                    k: core.k,
                    size: core.size,
                }
            }
            Some(core) => CoreOutcome::Core(core),
        }
    }
}
