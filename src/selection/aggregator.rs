//! Selection aggregation.
//!
//! Merges the (category, cards) lists produced upstream into one ordered,
//! deduplicated selection. Each list is capped before merging; a card
//! belongs to the first category that listed it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::CardPool;
use crate::core::AnalysisContext;

/// A selected card and the category that contributed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCard {
    pub name: String,
    pub category: String,
}

/// Per-category counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    /// Cards the category offered after its cap.
    pub listed: usize,
    /// Cards first seen in this category (the displayed count).
    pub contributed: usize,
}

/// Merged selection in category-priority order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Selection {
    pub cards: Vec<SelectedCard>,
    pub categories: Vec<CategorySummary>,
}

impl Selection {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.name == name)
    }

    /// Category that contributed `name`.
    #[must_use]
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.category.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Review-only split of an existing deck list. Never feeds back into
/// ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComparison {
    /// Deck cards the selection also produced.
    pub confirmed: Vec<String>,
    /// Deck cards no analysis produced.
    pub unexplained: Vec<String>,
}

/// Caps, merges and deduplicates category lists.
#[derive(Clone, Debug)]
pub struct SelectionAggregator {
    per_category_cap: usize,
    total_cap: Option<usize>,
    excluded: FxHashSet<String>,
}

impl SelectionAggregator {
    pub fn new(per_category_cap: usize) -> Self {
        Self {
            per_category_cap,
            total_cap: None,
            excluded: FxHashSet::default(),
        }
    }

    /// Aggregator using the context's caps.
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        let config = ctx.config();
        let mut aggregator = Self::new(config.per_category_cap);
        aggregator.total_cap = config.selection_cap;
        aggregator
    }

    /// Cap the merged selection (builder pattern).
    #[must_use]
    pub fn with_total_cap(mut self, cap: usize) -> Self {
        self.total_cap = Some(cap);
        self
    }

    /// Never select `name` (builder pattern). Used for the anchor.
    #[must_use]
    pub fn excluding(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    /// Merge category lists in the order given.
    pub fn aggregate<C, I>(&self, categories: I) -> Selection
    where
        C: Into<String>,
        I: IntoIterator<Item = (C, Vec<String>)>,
    {
        let mut selection = Selection::default();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for (category, cards) in categories {
            let category = category.into();
            let listed: Vec<String> = cards
                .into_iter()
                .filter(|c| !self.excluded.contains(c))
                .take(self.per_category_cap)
                .collect();

            let mut contributed = 0;
            for name in &listed {
                if self.total_cap.is_some_and(|cap| selection.cards.len() >= cap) {
                    break;
                }
                if seen.insert(name.clone()) {
                    selection.cards.push(SelectedCard {
                        name: name.clone(),
                        category: category.clone(),
                    });
                    contributed += 1;
                }
            }

            selection.categories.push(CategorySummary {
                category,
                listed: listed.len(),
                contributed,
            });
        }

        selection
    }

    /// Split a deck list into cards the selection confirms and cards it
    /// does not explain, in deck order.
    ///
    /// Entries are canonicalised through `pool` first, so face names and
    /// loose spellings match their card. Unknown names are kept as given.
    #[must_use]
    pub fn compare_deck(&self, selection: &Selection, deck: &[String], pool: &CardPool) -> DeckComparison {
        let selected: FxHashSet<&str> = selection.names().collect();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut comparison = DeckComparison::default();

        for entry in deck {
            let name = pool.canonical_name(entry).unwrap_or(entry.as_str());
            if self.excluded.contains(name) || !seen.insert(name) {
                continue;
            }
            if selected.contains(name) {
                comparison.confirmed.push(name.to_string());
            } else {
                comparison.unexplained.push(name.to_string());
            }
        }
        comparison
    }
}
