//! Combo ranking against an anchor card.
//!
//! ## Ranks
//!
//! - **Rank 1**: combos containing the anchor.
//! - **Rank 2**: combos not in rank 1 that contain a card from the rank-1
//!   card set (the frontier). Frontier cards are processed in order and a
//!   combo is attributed to the first frontier card that reaches it.
//!
//! Both ranks require every card to resolve in the legal pool and, when a
//! filter is set, the effect description to match it. Each admitted
//! combo is annotated once with its cost summary.

use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::cards::CardPool;
use crate::core::{AnalysisContext, Result, SynergyError};

use super::buckets::ComboBuckets;
use super::completion::{completion_candidates, preselected_cards, CompletionCandidate};
use super::index::ComboIndex;
use super::record::{ComboCosts, ComboId, ComboRecord};

/// How directly a combo connects to the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComboRank {
    /// Contains the anchor.
    Direct,
    /// Reached through a rank-1 participant.
    Indirect,
}

impl ComboRank {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            ComboRank::Direct => 1,
            ComboRank::Indirect => 2,
        }
    }
}

/// An admitted combo with its cached cost annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedCombo {
    pub id: ComboId,
    pub cards: SmallVec<[String; 4]>,
    pub effect: String,
    pub costs: ComboCosts,
    /// Frontier card that first reached this combo (rank 2 only).
    pub via: Option<String>,
}

/// Combos of one rank and the cards they involve.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankedComboSet {
    pub rank: ComboRank,
    pub combos: Vec<RankedCombo>,
    /// Distinct cards across `combos`, first-seen order.
    pub cards: Vec<String>,
}

impl RankedComboSet {
    #[must_use]
    pub fn new(rank: ComboRank) -> Self {
        Self {
            rank,
            combos: Vec::new(),
            cards: Vec::new(),
        }
    }

    fn push(&mut self, combo: RankedCombo) {
        for card in &combo.cards {
            if !self.cards.contains(card) {
                self.cards.push(card.clone());
            }
        }
        self.combos.push(combo);
    }

    pub fn ids(&self) -> impl Iterator<Item = &ComboId> {
        self.combos.iter().map(|c| &c.id)
    }

    #[must_use]
    pub fn contains_id(&self, id: &ComboId) -> bool {
        self.combos.iter().any(|c| &c.id == id)
    }

    /// Combos bucketed by size, each bucket sorted by total cost.
    #[must_use]
    pub fn buckets(&self) -> ComboBuckets {
        ComboBuckets::from_combos(&self.combos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }
}

/// Ranking-time tallies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingDiagnostics {
    /// Indexed combos whose effect matches the filter (all, if unfiltered).
    pub filter_matches: usize,
    /// Candidate combos rejected by the effect filter.
    pub rejected_by_filter: usize,
    /// Candidate combos with a card outside the legal pool.
    pub rejected_not_legal: usize,
    /// A filter was set and matched no indexed combo.
    pub empty_filter: bool,
}

/// Full ranking output for one anchor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComboRanking {
    /// Canonical anchor name.
    pub anchor: String,
    pub rank1: RankedComboSet,
    pub rank2: RankedComboSet,
    pub completions: Vec<CompletionCandidate>,
    pub diagnostics: RankingDiagnostics,
}

impl ComboRanking {
    /// Ids claimed by either rank.
    #[must_use]
    pub fn claimed_ids(&self) -> FxHashSet<ComboId> {
        self.rank1.ids().chain(self.rank2.ids()).cloned().collect()
    }
}

enum Admission {
    Admitted(RankedCombo),
    NotLegal,
    Filtered,
}

/// Ranks combos from a `ComboIndex` against an anchor card.
#[derive(Clone, Copy, Debug)]
pub struct ComboRanker<'a> {
    index: &'a ComboIndex,
    pool: &'a CardPool,
    filter: Option<&'a Regex>,
}

impl<'a> ComboRanker<'a> {
    /// Create a ranker over a legal pool with no effect filter.
    pub fn new(index: &'a ComboIndex, pool: &'a CardPool) -> Self {
        Self {
            index,
            pool,
            filter: None,
        }
    }

    /// Create a ranker using the context's effect filter.
    pub fn from_context(ctx: &'a AnalysisContext, index: &'a ComboIndex, pool: &'a CardPool) -> Self {
        Self::new(index, pool).with_filter(ctx.effect_filter())
    }

    /// Set the effect filter (builder pattern).
    #[must_use]
    pub fn with_filter(mut self, filter: Option<&'a Regex>) -> Self {
        self.filter = filter;
        self
    }

    fn admit(&self, record: &ComboRecord, via: Option<&str>) -> Admission {
        if !record.resolves_in(self.pool) {
            return Admission::NotLegal;
        }
        if self.filter.is_some_and(|f| !f.is_match(&record.effect)) {
            return Admission::Filtered;
        }
        Admission::Admitted(RankedCombo {
            id: record.id.clone(),
            cards: record.cards.clone(),
            effect: record.effect.clone(),
            costs: ComboCosts::compute(record, self.pool),
            via: via.map(str::to_string),
        })
    }

    fn tally(admission: Admission, diagnostics: &mut RankingDiagnostics) -> Option<RankedCombo> {
        match admission {
            Admission::Admitted(combo) => Some(combo),
            Admission::NotLegal => {
                diagnostics.rejected_not_legal += 1;
                None
            }
            Admission::Filtered => {
                diagnostics.rejected_by_filter += 1;
                None
            }
        }
    }

    /// Rank combos for `anchor`.
    ///
    /// Fails only if the anchor does not resolve in the legal pool.
    pub fn rank(&self, anchor: &str) -> Result<ComboRanking> {
        let anchor = self
            .pool
            .canonical_name(anchor)
            .ok_or_else(|| SynergyError::UnknownAnchor(anchor.to_string()))?
            .to_string();

        let mut diagnostics = RankingDiagnostics {
            filter_matches: match self.filter {
                Some(filter) => self.index.iter().filter(|r| filter.is_match(&r.effect)).count(),
                None => self.index.len(),
            },
            ..RankingDiagnostics::default()
        };
        if let Some(filter) = self.filter {
            if diagnostics.filter_matches == 0 {
                diagnostics.empty_filter = true;
                warn!(filter = filter.as_str(), "effect filter matches no combo");
            }
        }

        let mut rank1 = RankedComboSet::new(ComboRank::Direct);
        for record in self.index.combos_with(&anchor) {
            if let Some(combo) = Self::tally(self.admit(record, None), &mut diagnostics) {
                rank1.push(combo);
            }
        }

        // Every anchor combo was already judged at rank 1, admitted or not.
        let mut seen: FxHashSet<&ComboId> = self.index.combos_with(&anchor).map(|r| &r.id).collect();
        let mut rank2 = RankedComboSet::new(ComboRank::Indirect);
        for frontier in rank1.cards.iter().filter(|c| **c != anchor) {
            let before = rank2.len();
            for record in self.index.combos_with(frontier) {
                if !seen.insert(&record.id) {
                    continue;
                }
                if let Some(combo) = Self::tally(self.admit(record, Some(frontier.as_str())), &mut diagnostics) {
                    rank2.push(combo);
                }
            }
            debug!(frontier = %frontier, added = rank2.len() - before, "frontier step");
        }

        let preselected = preselected_cards(&anchor, &rank1, &rank2);
        let completions = completion_candidates(&preselected, &rank2.combos);

        debug!(
            anchor = %anchor,
            rank1 = rank1.len(),
            rank2 = rank2.len(),
            completions = completions.len(),
            "combos ranked"
        );

        Ok(ComboRanking {
            anchor,
            rank1,
            rank2,
            completions,
            diagnostics,
        })
    }
}
