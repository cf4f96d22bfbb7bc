//! # deck-synergy
//!
//! Card feature classification, combo ranking and synergy-graph analysis
//! for building a deck around one anchor card.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Classification**: Feature categories are declarative
//!    `FeatureTable` rows interpreted by one generic engine, not per-category
//!    code.
//!
//! 2. **Explicit Context**: Configuration and compiled tables live in an
//!    immutable `AnalysisContext` passed into every component call.
//!
//! 3. **Deterministic Output**: Every list is ordered by insertion or a
//!    stable sort, so identical inputs give identical results.
//!
//! ## Modules
//!
//! - `core`: Configuration, per-run context, errors
//! - `cards`: Card records and the legal card pool
//! - `features`: Feature rules, text classifier, association expansion
//! - `combos`: Combo validation, indexing, ranking, completion analysis
//! - `graph`: Combo co-occurrence graph and k-core search
//! - `selection`: Capped, deduplicated aggregation and deck comparison
//! - `analysis`: End-to-end run for one anchor

pub mod core;
pub mod cards;
pub mod features;
pub mod combos;
pub mod graph;
pub mod selection;
pub mod analysis;

// Re-export commonly used types
pub use crate::core::{AnalysisConfig, AnalysisContext, Result, SynergyError};

pub use crate::cards::{Card, CardPool, CardType, ColorIdentity};

pub use crate::features::{
    AssociationGraph, ExpansionResult, FeatureAssociationExpander, FeatureLabel,
    FeatureRule, FeatureTable, KeywordLabels, LabelMatches, Provenance, TextPatternClassifier,
};

pub use crate::combos::{
    ComboBuckets, ComboCosts, ComboId, ComboIndex, ComboRank, ComboRanker, ComboRanking,
    ComboRecord, CompletionCandidate, IndexDiagnostics, RankedCombo, RawComboRecord, SizeBucket,
};

pub use crate::graph::{ComboGraph, CoreOutcome, KCoreResult, SynergyGraphAnalyzer};

pub use crate::selection::{DeckComparison, Selection, SelectionAggregator};

pub use crate::analysis::{AnalysisReport, SynergyAnalysis};
