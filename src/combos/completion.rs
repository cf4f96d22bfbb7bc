//! "One card away" analysis.
//!
//! A 3-card combo is a completion candidate when exactly one of its cards
//! is missing from the already-preselected set. The missing card is
//! scored by how many such combos it would complete.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::buckets::SizeBucket;
use super::ranker::{RankedCombo, RankedComboSet};
use super::record::ComboId;

/// A card that would complete one or more 3-card combos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCandidate {
    pub card: String,
    /// Number of combos this card completes.
    pub completes: usize,
    pub combos: Vec<ComboId>,
}

/// Cards already selected by ranking: the anchor, every card of a
/// 2-card combo at either rank, and every card of a 3-card rank-1 combo.
#[must_use]
pub fn preselected_cards(
    anchor: &str,
    rank1: &RankedComboSet,
    rank2: &RankedComboSet,
) -> FxHashSet<String> {
    let mut selected: FxHashSet<String> = FxHashSet::default();
    selected.insert(anchor.to_string());

    let pairs = rank1
        .combos
        .iter()
        .chain(&rank2.combos)
        .filter(|c| SizeBucket::for_len(c.cards.len()) == SizeBucket::Pair);
    let rank1_triples = rank1
        .combos
        .iter()
        .filter(|c| SizeBucket::for_len(c.cards.len()) == SizeBucket::Triple);

    for combo in pairs.chain(rank1_triples) {
        selected.extend(combo.cards.iter().cloned());
    }
    selected
}

/// Tally completion candidates among the 3-card combos in `combos`.
///
/// Sorted by `completes` descending; ties keep first-seen order.
#[must_use]
pub fn completion_candidates<'a>(
    preselected: &FxHashSet<String>,
    combos: impl IntoIterator<Item = &'a RankedCombo>,
) -> Vec<CompletionCandidate> {
    let mut candidates: Vec<CompletionCandidate> = Vec::new();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for combo in combos {
        if SizeBucket::for_len(combo.cards.len()) != SizeBucket::Triple {
            continue;
        }

        let mut missing = combo.cards.iter().filter(|c| !preselected.contains(c.as_str()));
        let (Some(card), None) = (missing.next(), missing.next()) else {
            continue;
        };

        let pos = *positions.entry(card.clone()).or_insert_with(|| {
            candidates.push(CompletionCandidate {
                card: card.clone(),
                completes: 0,
                combos: Vec::new(),
            });
            candidates.len() - 1
        });
        candidates[pos].completes += 1;
        candidates[pos].combos.push(combo.id.clone());
    }

    candidates.sort_by(|a, b| b.completes.cmp(&a.completes));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combos::record::ComboCosts;
    use smallvec::SmallVec;

    fn combo(id: &str, cards: &[&str]) -> RankedCombo {
        RankedCombo {
            id: ComboId::new(id),
            cards: cards.iter().map(|c| c.to_string()).collect::<SmallVec<_>>(),
            effect: String::new(),
            costs: ComboCosts::default(),
            via: None,
        }
    }

    fn selected(cards: &[&str]) -> FxHashSet<String> {
        cards.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_single_missing_card_counts() {
        let preselected = selected(&["X", "Y"]);
        let combos = vec![
            combo("1", &["X", "Y", "Z"]),
            combo("2", &["X", "Y", "W"]),
        ];

        let candidates = completion_candidates(&preselected, &combos);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].card, "Z");
        assert_eq!(candidates[0].completes, 1);
        assert_eq!(candidates[1].card, "W");
        assert_eq!(candidates[1].completes, 1);
    }

    #[test]
    fn test_repeat_completion_ranks_first() {
        let preselected = selected(&["X", "Y", "V"]);
        let combos = vec![
            combo("1", &["X", "Y", "W"]),
            combo("2", &["X", "Y", "Z"]),
            combo("3", &["V", "X", "Z"]),
        ];

        let candidates = completion_candidates(&preselected, &combos);
        assert_eq!(candidates[0].card, "Z");
        assert_eq!(candidates[0].completes, 2);
        assert_eq!(candidates[0].combos, vec![ComboId::new("2"), ComboId::new("3")]);
        assert_eq!(candidates[1].card, "W");
    }

    #[test]
    fn test_ignores_non_triples_and_two_missing() {
        let preselected = selected(&["X"]);
        let combos = vec![
            combo("1", &["X", "Y", "Z"]),
            combo("2", &["X", "Q"]),
            combo("3", &["X", "A", "B", "C"]),
        ];
        assert!(completion_candidates(&preselected, &combos).is_empty());
    }

    #[test]
    fn test_fully_preselected_combo_is_not_a_candidate() {
        let preselected = selected(&["X", "Y", "Z"]);
        let combos = vec![combo("1", &["X", "Y", "Z"])];
        assert!(completion_candidates(&preselected, &combos).is_empty());
    }
}
