//! Combo index.
//!
//! Built once per run from the raw combo database. Invalid records are
//! dropped here and never resurface; the survivors are indexed by every
//! participating card name. Card names are canonicalised through the
//! pool, so a face name and its full name share one index key.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::CardPool;

use super::record::{ComboId, ComboRecord, RawComboRecord};

/// Why a raw record did not make it into the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComboRejection {
    /// No id, or a blank one.
    MissingId,
    /// Status other than OK (or no status at all).
    StatusNotOk,
    /// Fewer than two distinct card names.
    TooFewCards,
    /// No effect text, or a blank one.
    MissingEffect,
    /// An id already seen earlier in the database.
    DuplicateId,
    /// Names that resolve against no card in the pool.
    Unresolved(Vec<String>),
}

/// Build-time tallies. Diagnostic only, never used for ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDiagnostics {
    /// Records offered to the build.
    pub raw_total: usize,
    pub missing_id: usize,
    pub status_not_ok: usize,
    pub too_few_cards: usize,
    pub missing_effect: usize,
    pub duplicate_ids: usize,
    /// Well-formed records naming at least one card absent from the pool.
    pub unresolved: usize,
    /// Records held by the index.
    pub indexed: usize,
}

impl IndexDiagnostics {
    /// Well-formed records counted leniently, unresolved ones included.
    #[must_use]
    pub fn lenient_total(&self) -> usize {
        self.indexed + self.unresolved
    }

    /// Records dropped as malformed: missing id or effect, bad status,
    /// too few cards.
    #[must_use]
    pub fn malformed(&self) -> usize {
        self.missing_id + self.status_not_ok + self.too_few_cards + self.missing_effect
    }

    fn record(&mut self, rejection: &ComboRejection) {
        match rejection {
            ComboRejection::MissingId => self.missing_id += 1,
            ComboRejection::StatusNotOk => self.status_not_ok += 1,
            ComboRejection::TooFewCards => self.too_few_cards += 1,
            ComboRejection::MissingEffect => self.missing_effect += 1,
            ComboRejection::DuplicateId => self.duplicate_ids += 1,
            ComboRejection::Unresolved(_) => self.unresolved += 1,
        }
    }
}

/// Check the structural validity of a raw record (id, status, card count, effect).
fn check_well_formed(raw: &RawComboRecord) -> Result<(), ComboRejection> {
    if raw.id.as_deref().is_none_or(|id| id.trim().is_empty()) {
        return Err(ComboRejection::MissingId);
    }
    if !raw.status.as_ref().is_some_and(|s| s.is_ok()) {
        return Err(ComboRejection::StatusNotOk);
    }
    if raw.distinct_cards().len() < 2 {
        return Err(ComboRejection::TooFewCards);
    }
    if raw.effect.trim().is_empty() {
        return Err(ComboRejection::MissingEffect);
    }
    Ok(())
}

/// Canonicalise every card name through the pool.
fn resolve_cards(
    raw: &RawComboRecord,
    pool: &CardPool,
) -> Result<SmallVec<[String; 4]>, ComboRejection> {
    let mut cards: SmallVec<[String; 4]> = SmallVec::new();
    let mut unresolved = Vec::new();

    for name in raw.distinct_cards() {
        match pool.canonical_name(name) {
            Some(canonical) => {
                if !cards.iter().any(|c| c == canonical) {
                    cards.push(canonical.to_string());
                }
            }
            None => unresolved.push(name.to_string()),
        }
    }

    if !unresolved.is_empty() {
        return Err(ComboRejection::Unresolved(unresolved));
    }
    // Two face names of one card collapse to a single entry.
    if cards.len() < 2 {
        return Err(ComboRejection::TooFewCards);
    }
    Ok(cards)
}

/// Validated combos indexed by card name.
///
/// ## Example
///
/// ```
/// use deck_synergy::cards::{Card, CardPool};
/// use deck_synergy::combos::{ComboIndex, RawComboRecord};
///
/// let pool = CardPool::from_cards([Card::new("A"), Card::new("B")]);
/// let index = ComboIndex::build(
///     [
///         RawComboRecord::new("1", ["A", "B"], "Infinite mana"),
///         RawComboRecord::new("2", ["A"], "Not a combo"),
///     ],
///     &pool,
/// );
///
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.combos_with("B").count(), 1);
/// assert_eq!(index.diagnostics().too_few_cards, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComboIndex {
    records: Vec<ComboRecord>,
    by_card: FxHashMap<String, Vec<usize>>,
    by_id: FxHashMap<ComboId, usize>,
    diagnostics: IndexDiagnostics,
}

impl ComboIndex {
    /// Validate and index raw records against the full card pool.
    pub fn build(raw: impl IntoIterator<Item = RawComboRecord>, pool: &CardPool) -> Self {
        let mut index = Self::default();
        let mut seen_ids: FxHashSet<String> = FxHashSet::default();

        for record in raw {
            index.diagnostics.raw_total += 1;
            match index.admit(record, pool, &mut seen_ids) {
                Ok(()) => index.diagnostics.indexed += 1,
                Err(rejection) => index.diagnostics.record(&rejection),
            }
        }

        debug!(
            raw = index.diagnostics.raw_total,
            indexed = index.diagnostics.indexed,
            malformed = index.diagnostics.malformed(),
            duplicates = index.diagnostics.duplicate_ids,
            unresolved = index.diagnostics.unresolved,
            "combo index built"
        );
        index
    }

    fn admit(
        &mut self,
        raw: RawComboRecord,
        pool: &CardPool,
        seen_ids: &mut FxHashSet<String>,
    ) -> Result<(), ComboRejection> {
        check_well_formed(&raw)?;

        let id = raw.id.as_deref().unwrap_or_default().trim().to_string();
        if !seen_ids.insert(id.clone()) {
            return Err(ComboRejection::DuplicateId);
        }

        let cards = resolve_cards(&raw, pool)?;
        let position = self.records.len();
        for card in &cards {
            self.by_card.entry(card.clone()).or_default().push(position);
        }

        let id = ComboId::new(id);
        self.by_id.insert(id.clone(), position);
        self.records.push(ComboRecord {
            id,
            cards,
            effect: raw.effect,
        });
        Ok(())
    }

    /// Combos containing `card` (a canonical name), in database order.
    pub fn combos_with<'a>(&'a self, card: &str) -> impl Iterator<Item = &'a ComboRecord> + 'a {
        self.by_card
            .get(card)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&pos| &self.records[pos])
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ComboRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    /// All indexed combos in database order.
    pub fn iter(&self) -> impl Iterator<Item = &ComboRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &IndexDiagnostics {
        &self.diagnostics
    }
}
