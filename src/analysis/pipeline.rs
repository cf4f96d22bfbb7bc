//! End-to-end synergy analysis for one anchor card.
//!
//! Runs every component in order against a shared `AnalysisContext`:
//! classify the anchor, expand its labels, rank combos, search the
//! synergy graph over the combos ranking did not claim, then merge
//! everything into one selection.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::CardPool;
use crate::combos::{ComboBuckets, ComboIndex, ComboRanker, ComboRanking};
use crate::core::{AnalysisContext, Result, SynergyError};
use crate::features::{ExpansionResult, FeatureAssociationExpander, FeatureLabel, TextPatternClassifier};
use crate::graph::{CoreOutcome, SynergyGraphAnalyzer};
use crate::selection::{DeckComparison, Selection, SelectionAggregator};

/// Category for rank-1 combo cards.
pub const CATEGORY_RANK1: &str = "combos:rank1";
/// Category for cards that complete a 3-card combo.
pub const CATEGORY_COMPLETION: &str = "combos:completion";
/// Category for k-core members.
pub const CATEGORY_KCORE: &str = "synergy:k-core";
/// Category for rank-2 combo cards.
pub const CATEGORY_RANK2: &str = "combos:rank2";
/// Prefix for feature categories, one per label and card type
/// (`feature:<label>:<type>`).
pub const FEATURE_PREFIX: &str = "feature:";

/// Every intermediate output of one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Canonical anchor name.
    pub anchor: String,
    pub root_labels: Vec<FeatureLabel>,
    pub expansion: ExpansionResult,
    pub ranking: ComboRanking,
    pub rank1_buckets: ComboBuckets,
    pub rank2_buckets: ComboBuckets,
    pub core: CoreOutcome,
    pub selection: Selection,
    pub deck: Option<DeckComparison>,
}

impl AnalysisReport {
    /// Labeled card lists fed to the aggregator, in priority order.
    #[must_use]
    pub fn category_lists(&self) -> Vec<(String, Vec<String>)> {
        category_lists(&self.rank1_buckets, &self.rank2_buckets, &self.ranking, &self.core, &self.expansion)
    }
}

fn bucket_cards(buckets: &ComboBuckets) -> Vec<String> {
    let mut cards: Vec<String> = Vec::new();
    for (_, combos) in buckets.iter() {
        for card in combos.iter().flat_map(|c| c.cards.iter()) {
            if !cards.contains(card) {
                cards.push(card.clone());
            }
        }
    }
    cards
}

fn category_lists(
    rank1: &ComboBuckets,
    rank2: &ComboBuckets,
    ranking: &ComboRanking,
    core: &CoreOutcome,
    expansion: &ExpansionResult,
) -> Vec<(String, Vec<String>)> {
    let mut lists = vec![
        (CATEGORY_RANK1.to_string(), bucket_cards(rank1)),
        (
            CATEGORY_COMPLETION.to_string(),
            ranking.completions.iter().map(|c| c.card.clone()).collect(),
        ),
        (
            CATEGORY_KCORE.to_string(),
            core.usable().map(|c| c.nodes.clone()).unwrap_or_default(),
        ),
        (CATEGORY_RANK2.to_string(), bucket_cards(rank2)),
    ];

    // Each type group is capped on its own so later types still get a turn.
    for matches in expansion.direct().chain(expansion.associated()) {
        for (card_type, cards) in &matches.by_type {
            lists.push((
                format!("{FEATURE_PREFIX}{}:{}", matches.label, card_type.keyword()),
                cards.clone(),
            ));
        }
    }
    lists
}

/// Entry point for a full analysis run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SynergyAnalysis;

impl SynergyAnalysis {
    /// Analyze `anchor` against a legal pool and combo index.
    ///
    /// `deck`, when given, is only partitioned for review and never
    /// affects the selection.
    pub fn run(
        ctx: &AnalysisContext,
        pool: &CardPool,
        index: &ComboIndex,
        anchor: &str,
        deck: Option<&[String]>,
    ) -> Result<AnalysisReport> {
        let card = pool
            .resolve(anchor)
            .ok_or_else(|| SynergyError::UnknownAnchor(anchor.to_string()))?;
        let config = ctx.config();

        let classifier = TextPatternClassifier::new(ctx.features());
        let expander = FeatureAssociationExpander::new(classifier, ctx.associations(), config.association_hops);
        let root_labels = expander.root_labels(card, ctx.keywords());
        let expansion = expander.expand(pool, &root_labels, Some(card.name.as_str()));

        let ranking = ComboRanker::from_context(ctx, index, pool).rank(&card.name)?;
        let core = SynergyGraphAnalyzer::from_context(ctx, index, pool).analyze(&ranking.claimed_ids());

        let rank1_buckets = ranking.rank1.buckets();
        let rank2_buckets = ranking.rank2.buckets();

        let aggregator = SelectionAggregator::from_context(ctx).excluding(card.name.clone());
        let selection = aggregator.aggregate(category_lists(
            &rank1_buckets,
            &rank2_buckets,
            &ranking,
            &core,
            &expansion,
        ));
        let deck = deck.map(|deck| aggregator.compare_deck(&selection, deck, pool));

        info!(
            anchor = %card.name,
            labels = expansion.labels.len(),
            rank1 = ranking.rank1.len(),
            rank2 = ranking.rank2.len(),
            core = core.usable().map_or(0, |c| c.size),
            selected = selection.len(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            anchor: card.name.clone(),
            root_labels,
            expansion,
            ranking,
            rank1_buckets,
            rank2_buckets,
            core,
            selection,
            deck,
        })
    }
}
