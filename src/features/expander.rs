//! Feature association expansion.
//!
//! Starting from a card's root labels, walk the `AssociationGraph`
//! breadth-first up to a hop bound. Each label is visited at most once,
//! so cycles terminate. Every visited label that has a rule gets one
//! classifier pass over the pool; root labels produce `Direct` matches,
//! labels reached through the graph produce `Associated` ones.

use std::collections::{BTreeMap, VecDeque};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, CardPool, CardType};

use super::association::AssociationGraph;
use super::classifier::TextPatternClassifier;
use super::keywords::KeywordLabels;
use super::label::FeatureLabel;

/// How a label entered the expansion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// Root label: detected on the card itself.
    Direct,
    /// Reached through the association graph from `via`.
    Associated { via: FeatureLabel },
}

impl Provenance {
    #[must_use]
    pub fn is_direct(&self) -> bool {
        matches!(self, Provenance::Direct)
    }
}

/// Pool cards matching one label, grouped by structural type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabelMatches {
    pub label: FeatureLabel,
    pub provenance: Provenance,
    /// Distance from the root set (0 for direct labels).
    pub hop: usize,
    pub by_type: BTreeMap<CardType, Vec<String>>,
}

impl LabelMatches {
    /// All matched card names, grouped in `CardType` order.
    pub fn cards(&self) -> impl Iterator<Item = &str> {
        self.by_type.values().flatten().map(String::as_str)
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }
}

/// Output of one expansion query.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExpansionResult {
    /// Classified labels in visit order.
    pub labels: Vec<LabelMatches>,
    /// Visited labels with no rule in the table.
    pub unclassifiable: Vec<FeatureLabel>,
    /// Labels processed, classifiable or not.
    pub visits: usize,
}

impl ExpansionResult {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&LabelMatches> {
        self.labels.iter().find(|m| m.label.as_str() == label)
    }

    pub fn direct(&self) -> impl Iterator<Item = &LabelMatches> {
        self.labels.iter().filter(|m| m.provenance.is_direct())
    }

    pub fn associated(&self) -> impl Iterator<Item = &LabelMatches> {
        self.labels.iter().filter(|m| !m.provenance.is_direct())
    }
}

/// Breadth-first expander over the association graph.
#[derive(Clone, Copy, Debug)]
pub struct FeatureAssociationExpander<'a> {
    classifier: TextPatternClassifier<'a>,
    graph: &'a AssociationGraph,
    max_hops: usize,
}

impl<'a> FeatureAssociationExpander<'a> {
    pub fn new(
        classifier: TextPatternClassifier<'a>,
        graph: &'a AssociationGraph,
        max_hops: usize,
    ) -> Self {
        Self {
            classifier,
            graph,
            max_hops,
        }
    }

    /// A card's root label set: classified labels first, then any
    /// keyword-derived labels not already present.
    #[must_use]
    pub fn root_labels(&self, card: &Card, keywords: &KeywordLabels) -> Vec<FeatureLabel> {
        let mut roots = self.classifier.classify(card);
        for label in keywords.labels_for(card) {
            if !roots.contains(&label) {
                roots.push(label);
            }
        }
        roots
    }

    /// Expand `roots` over the graph and match each classifiable label
    /// against the pool. `exclude` (typically the anchor) never appears
    /// in the matches.
    #[must_use]
    pub fn expand(
        &self,
        pool: &CardPool,
        roots: &[FeatureLabel],
        exclude: Option<&str>,
    ) -> ExpansionResult {
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        let mut queue: VecDeque<(&FeatureLabel, usize, Provenance)> = VecDeque::new();
        let mut result = ExpansionResult::default();

        for root in roots {
            if visited.insert(root.as_str()) {
                queue.push_back((root, 0, Provenance::Direct));
            }
        }

        while let Some((label, hop, provenance)) = queue.pop_front() {
            result.visits += 1;

            if self.classifier.table().contains(label.as_str()) {
                let mut by_type: BTreeMap<CardType, Vec<String>> = BTreeMap::new();
                for card in self.classifier.cards_with_label(pool, label.as_str()) {
                    if exclude == Some(card.name.as_str()) {
                        continue;
                    }
                    by_type.entry(card.card_type()).or_default().push(card.name.clone());
                }

                debug!(label = %label, hop, cards = by_type.values().map(Vec::len).sum::<usize>(), "label pass");
                result.labels.push(LabelMatches {
                    label: label.clone(),
                    provenance,
                    hop,
                    by_type,
                });
            } else {
                result.unclassifiable.push(label.clone());
            }

            if hop >= self.max_hops {
                continue;
            }
            for next in self.graph.neighbors(label.as_str()) {
                if visited.insert(next.as_str()) {
                    queue.push_back((
                        next,
                        hop + 1,
                        Provenance::Associated { via: label.clone() },
                    ));
                }
            }
        }

        result
    }
}
