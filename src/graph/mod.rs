//! Synergy graph: 2-card combo co-occurrence and k-core extraction.

pub mod combo_graph;
pub mod kcore;

pub use combo_graph::ComboGraph;
pub use kcore::{max_core, CoreOutcome, KCoreResult, SynergyGraphAnalyzer};
