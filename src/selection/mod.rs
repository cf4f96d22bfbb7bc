//! Selection aggregation and deck comparison.

pub mod aggregator;

pub use aggregator::{CategorySummary, DeckComparison, SelectedCard, Selection, SelectionAggregator};
