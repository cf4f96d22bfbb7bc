//! Property tests.
//!
//! Invariants that must hold for any pool, combo database or graph:
//! - Surfaced combos have two or more distinct, resolvable cards
//! - Rank-1 and rank-2 never share a combo id
//! - Ranking and k-core search are deterministic
//! - k-cores are nested
//! - Expansion terminates on cyclic association graphs
//! - Excluded text never yields a label

use deck_synergy::cards::{Card, CardPool};
use deck_synergy::combos::{ComboIndex, ComboRanker, RawComboRecord};
use deck_synergy::features::{
    AssociationGraph, FeatureAssociationExpander, FeatureLabel, FeatureRule, FeatureTable,
    TextPatternClassifier,
};
use deck_synergy::graph::{ComboGraph, SynergyGraphAnalyzer};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

const NAMES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn pool() -> CardPool {
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Card::new(*name).with_mana_value(i as f64))
        .collect()
}

/// Combo records over `NAMES` plus one name outside the pool, so some
/// records fail to resolve.
fn raw_combos() -> impl Strategy<Value = Vec<RawComboRecord>> {
    let card = prop::sample::select(vec!["A", "B", "C", "D", "E", "F", "G", "H", "Missing"]);
    let effect = prop::sample::select(vec!["Infinite mana", "Win the game", "Draw a card"]);
    prop::collection::vec((prop::collection::vec(card, 1..5), effect), 0..24).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, (cards, effect))| RawComboRecord::new(i.to_string(), cards, effect))
            .collect()
    })
}

fn edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NAMES.len(), 0..NAMES.len()), 0..30)
}

proptest! {
    #[test]
    fn prop_surfaced_combos_are_well_formed(raw in raw_combos()) {
        let pool = pool();
        let index = ComboIndex::build(raw, &pool);
        for record in index.iter() {
            let distinct: FxHashSet<&str> = record.cards.iter().map(String::as_str).collect();
            prop_assert!(distinct.len() >= 2);
            prop_assert!(record.resolves_in(&pool));
        }
    }

    #[test]
    fn prop_ranks_are_disjoint(raw in raw_combos(), anchor in prop::sample::select(NAMES.to_vec())) {
        let pool = pool();
        let index = ComboIndex::build(raw, &pool);
        let ranking = ComboRanker::new(&index, &pool).rank(anchor).unwrap();

        let rank1: FxHashSet<_> = ranking.rank1.ids().collect();
        for id in ranking.rank2.ids() {
            prop_assert!(!rank1.contains(id));
        }
    }

    #[test]
    fn prop_ranking_and_core_are_deterministic(raw in raw_combos(), anchor in prop::sample::select(NAMES.to_vec())) {
        let pool = pool();
        let first = ComboIndex::build(raw.clone(), &pool);
        let second = ComboIndex::build(raw, &pool);

        let a = ComboRanker::new(&first, &pool).rank(anchor).unwrap();
        let b = ComboRanker::new(&second, &pool).rank(anchor).unwrap();
        prop_assert_eq!(a.rank1.combos, b.rank1.combos);
        prop_assert_eq!(a.rank2.combos, b.rank2.combos);
        prop_assert_eq!(a.completions, b.completions);

        let claimed = FxHashSet::default();
        let core_a = SynergyGraphAnalyzer::new(&first, &pool, 20, 40).analyze(&claimed);
        let core_b = SynergyGraphAnalyzer::new(&second, &pool, 20, 40).analyze(&claimed);
        prop_assert_eq!(core_a, core_b);
    }

    #[test]
    fn prop_k_cores_are_nested(edges in edges(), k1 in 0usize..6, step in 1usize..4) {
        let mut graph = ComboGraph::new();
        for (a, b) in edges {
            graph.add_edge(NAMES[a], NAMES[b]);
        }

        let outer: FxHashSet<String> = graph.k_core(k1).into_iter().collect();
        for node in graph.k_core(k1 + step) {
            prop_assert!(outer.contains(&node));
        }
    }

    #[test]
    fn prop_expansion_bounded_on_cycles(edges in edges(), hops in 0usize..5) {
        let labels: Vec<String> = NAMES.iter().map(|n| n.to_lowercase()).collect();
        let mut graph = AssociationGraph::new();
        for (a, b) in edges {
            graph.add_edge(&labels[a], &labels[b]);
        }
        let table = FeatureTable::new();
        let expander = FeatureAssociationExpander::new(TextPatternClassifier::new(&table), &graph, hops);

        let result = expander.expand(&pool(), &[FeatureLabel::new("a")], None);
        prop_assert!(result.visits <= labels.len());
        prop_assert!(result.labels.len() + result.unclassifiable.len() == result.visits);
    }

    #[test]
    fn prop_exclude_never_assigns(prefix in "[a-z ]{0,12}", suffix in "[a-z ]{0,12}") {
        let table = FeatureTable::new().with_rule(
            FeatureRule::new("draw")
                .with_pair("draw a card", &["whenever you draw a card, discard"])
                .unwrap(),
        );
        let classifier = TextPatternClassifier::new(&table);
        let text = format!("{prefix}whenever you draw a card, discard{suffix}");
        let card = Card::new("Subject").with_text(text);

        prop_assert!(classifier.classify(&card).is_empty());
    }
}
