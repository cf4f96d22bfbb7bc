//! Analysis configuration.
//!
//! Every tunable of a run lives here. The heuristic constants (k-core
//! ceiling, association hop bound) are configuration, not invariants.

use serde::{Deserialize, Serialize};

use super::error::{Result, SynergyError};

/// Tunable parameters for one analysis run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum cards kept from each category before merging.
    pub per_category_cap: usize,

    /// Optional cap on the merged selection. `None` keeps everything
    /// that survived the per-category caps.
    pub selection_cap: Option<usize>,

    /// A k-core larger than this is treated as "no usable core".
    pub kcore_size_cap: usize,

    /// Highest k tried by the k-core search.
    pub kcore_max_k: usize,

    /// Hop bound for label association expansion.
    pub association_hops: usize,

    /// Case-insensitive regex matched against combo effect descriptions.
    pub effect_filter: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            per_category_cap: 25,
            selection_cap: None,
            kcore_size_cap: 40,
            kcore_max_k: 20,
            association_hops: 2,
            effect_filter: None,
        }
    }
}

impl AnalysisConfig {
    /// Set the per-category cap.
    #[must_use]
    pub fn with_per_category_cap(mut self, cap: usize) -> Self {
        self.per_category_cap = cap;
        self
    }

    /// Set the merged selection cap.
    #[must_use]
    pub fn with_selection_cap(mut self, cap: usize) -> Self {
        self.selection_cap = Some(cap);
        self
    }

    /// Set the k-core size cap.
    #[must_use]
    pub fn with_kcore_size_cap(mut self, cap: usize) -> Self {
        self.kcore_size_cap = cap;
        self
    }

    /// Set the k-core ceiling.
    #[must_use]
    pub fn with_kcore_max_k(mut self, k: usize) -> Self {
        self.kcore_max_k = k;
        self
    }

    /// Set the association hop bound.
    #[must_use]
    pub fn with_association_hops(mut self, hops: usize) -> Self {
        self.association_hops = hops;
        self
    }

    /// Set the effect filter pattern.
    #[must_use]
    pub fn with_effect_filter(mut self, pattern: impl Into<String>) -> Self {
        self.effect_filter = Some(pattern.into());
        self
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.per_category_cap == 0 {
            return Err(SynergyError::InvalidConfig(
                "per_category_cap must be at least 1".to_string(),
            ));
        }
        if self.kcore_max_k == 0 {
            return Err(SynergyError::InvalidConfig(
                "kcore_max_k must be at least 1".to_string(),
            ));
        }
        if self.selection_cap == Some(0) {
            return Err(SynergyError::InvalidConfig(
                "selection_cap must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
