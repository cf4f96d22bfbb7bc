//! Keyword-derived labels.
//!
//! Some roles are announced by a keyword rather than by rules text
//! ("Infect" implies poison, "Lifelink" implies lifegain). `KeywordLabels`
//! maps keywords to the labels they imply.

use rustc_hash::FxHashMap;

use crate::cards::Card;

use super::label::FeatureLabel;

/// Keyword -> label map. Keywords are matched case-insensitively.
#[derive(Clone, Debug, Default)]
pub struct KeywordLabels {
    map: FxHashMap<String, FeatureLabel>,
}

impl KeywordLabels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a keyword to a label (builder pattern).
    #[must_use]
    pub fn with(mut self, keyword: &str, label: impl Into<FeatureLabel>) -> Self {
        self.insert(keyword, label);
        self
    }

    pub fn insert(&mut self, keyword: &str, label: impl Into<FeatureLabel>) {
        self.map.insert(keyword.to_lowercase(), label.into());
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&FeatureLabel> {
        self.map.get(&keyword.to_lowercase())
    }

    /// Labels implied by a card's keywords, in keyword order, deduplicated.
    #[must_use]
    pub fn labels_for(&self, card: &Card) -> Vec<FeatureLabel> {
        let mut labels: Vec<FeatureLabel> = Vec::new();
        for label in card.keywords.iter().filter_map(|k| self.get(k)) {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
        labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
