//! Immutable per-run context.
//!
//! `AnalysisContext` bundles the validated configuration with everything
//! compiled from it: the effect filter regex, the feature table, the
//! association graph and the keyword map. It is built once and passed by
//! reference into every component call.

use regex::{Regex, RegexBuilder};

use crate::features::{
    default_associations, default_feature_table, default_keywords, AssociationGraph,
    FeatureTable, KeywordLabels,
};

use super::config::AnalysisConfig;
use super::error::{Result, SynergyError};

/// Compile a case-insensitive effect filter.
pub fn compile_effect_filter(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(SynergyError::InvalidFilter)
}

/// Read-only inputs shared by every component of one run.
#[derive(Clone, Debug)]
pub struct AnalysisContext {
    config: AnalysisConfig,
    effect_filter: Option<Regex>,
    features: FeatureTable,
    associations: AssociationGraph,
    keywords: KeywordLabels,
}

impl AnalysisContext {
    /// Validate the config and compile it with the built-in feature data.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let effect_filter = config
            .effect_filter
            .as_deref()
            .map(compile_effect_filter)
            .transpose()?;

        Ok(Self {
            config,
            effect_filter,
            features: default_feature_table()?,
            associations: default_associations(),
            keywords: default_keywords(),
        })
    }

    /// Replace the feature table (builder pattern).
    #[must_use]
    pub fn with_feature_table(mut self, table: FeatureTable) -> Self {
        self.features = table;
        self
    }

    /// Replace the association graph (builder pattern).
    #[must_use]
    pub fn with_associations(mut self, graph: AssociationGraph) -> Self {
        self.associations = graph;
        self
    }

    /// Replace the keyword map (builder pattern).
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordLabels) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    #[must_use]
    pub fn effect_filter(&self) -> Option<&Regex> {
        self.effect_filter.as_ref()
    }

    #[must_use]
    pub fn features(&self) -> &FeatureTable {
        &self.features
    }

    #[must_use]
    pub fn associations(&self) -> &AssociationGraph {
        &self.associations
    }

    #[must_use]
    pub fn keywords(&self) -> &KeywordLabels {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_compiles_filter() {
        let ctx = AnalysisContext::new(AnalysisConfig::default().with_effect_filter("WIN")).unwrap();
        let filter = ctx.effect_filter().unwrap();
        assert!(filter.is_match("You win the game"));
        assert!(!ctx.features().is_empty());
        assert!(!ctx.keywords().is_empty());
    }

    #[test]
    fn test_context_rejects_bad_filter() {
        let err = AnalysisContext::new(AnalysisConfig::default().with_effect_filter("[")).unwrap_err();
        assert!(matches!(err, SynergyError::InvalidFilter(_)));
    }

    #[test]
    fn test_context_rejects_invalid_config() {
        let err = AnalysisContext::new(AnalysisConfig::default().with_kcore_max_k(0)).unwrap_err();
        assert!(matches!(err, SynergyError::InvalidConfig(_)));
    }

    #[test]
    fn test_context_overrides() {
        let ctx = AnalysisContext::new(AnalysisConfig::default())
            .unwrap()
            .with_feature_table(FeatureTable::new())
            .with_associations(AssociationGraph::new().with_edge("a", "b"));
        assert!(ctx.features().is_empty());
        assert_eq!(ctx.associations().edge_count(), 1);
        assert!(ctx.effect_filter().is_none());
    }
}
