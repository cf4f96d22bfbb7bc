//! Feature labels: rule tables, text classification, and association
//! expansion.
//!
//! ## Key Types
//!
//! - `FeatureTable`: Ordered `FeatureRule`s, each a label with
//!   (include, excludes) pattern pairs
//! - `TextPatternClassifier`: Assigns labels to cards from their text
//! - `KeywordLabels`: Labels implied by keywords
//! - `AssociationGraph`: Directed, possibly cyclic label relations
//! - `FeatureAssociationExpander`: Bounded breadth-first label expansion

pub mod association;
pub mod classifier;
pub mod defaults;
pub mod expander;
pub mod keywords;
pub mod label;
pub mod rule;

pub use association::AssociationGraph;
pub use classifier::{normalize_self_references, FeatureTags, TextPatternClassifier, SELF_TOKEN};
pub use defaults::{default_associations, default_feature_table, default_keywords, default_table_spec};
pub use expander::{ExpansionResult, FeatureAssociationExpander, LabelMatches, Provenance};
pub use keywords::KeywordLabels;
pub use label::FeatureLabel;
pub use rule::{FeatureRule, FeatureRuleSpec, FeatureTable, FeatureTableSpec, RulePair, RulePairSpec};
