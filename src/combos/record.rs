//! Combo records.
//!
//! `RawComboRecord` is a record as the external combo database delivers
//! it; nothing about it is trusted. `ComboRecord` is the validated form
//! held by the index: an OK status, at least two distinct card names,
//! every name canonicalised through the card pool.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardPool;

/// Combo identifier from the external database.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComboId(pub String);

impl ComboId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ComboId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComboId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ComboId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Combo({})", self.0)
    }
}

/// Review status of a combo record. Only `Ok` records are indexed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComboStatus {
    Ok,
    /// Any other status code, kept verbatim for diagnostics.
    Other(String),
}

impl ComboStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, ComboStatus::Ok)
    }
}

impl From<&str> for ComboStatus {
    fn from(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("ok") {
            ComboStatus::Ok
        } else {
            ComboStatus::Other(code.to_string())
        }
    }
}

impl From<String> for ComboStatus {
    fn from(code: String) -> Self {
        ComboStatus::from(code.as_str())
    }
}

impl From<ComboStatus> for String {
    fn from(status: ComboStatus) -> Self {
        match status {
            ComboStatus::Ok => "OK".to_string(),
            ComboStatus::Other(code) => code,
        }
    }
}

/// A combo record as fetched. Missing fields deserialize as empty so
/// malformed records reach the index and are counted there.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawComboRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub cards: Vec<String>,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub status: Option<ComboStatus>,
}

impl RawComboRecord {
    /// Create an OK record (builder entry point, mostly for callers
    /// assembling records by hand).
    pub fn new<I, S>(id: impl Into<String>, cards: I, effect: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Some(id.into()),
            cards: cards.into_iter().map(Into::into).collect(),
            effect: effect.into(),
            status: Some(ComboStatus::Ok),
        }
    }

    /// Set the status (builder pattern).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<ComboStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Distinct, non-blank card names in record order.
    #[must_use]
    pub fn distinct_cards(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.cards.len());
        for name in self.cards.iter().map(|n| n.trim()) {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// Validated combo record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboRecord {
    pub id: ComboId,
    /// Canonical card names, distinct, in record order.
    pub cards: SmallVec<[String; 4]>,
    pub effect: String,
}

impl ComboRecord {
    /// Number of cards in the combo.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &str) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// True if every card resolves in `pool`.
    #[must_use]
    pub fn resolves_in(&self, pool: &CardPool) -> bool {
        self.cards.iter().all(|c| pool.contains(c))
    }
}

/// Mana-cost annotation computed once when a combo is admitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComboCosts {
    pub min: f64,
    pub max: f64,
    pub total: f64,
}

impl ComboCosts {
    /// Costs of the combo's cards in `pool`. Cards missing from the
    /// pool contribute nothing.
    #[must_use]
    pub fn compute(record: &ComboRecord, pool: &CardPool) -> Self {
        let values: SmallVec<[f64; 4]> = record
            .cards
            .iter()
            .filter_map(|name| pool.resolve(name))
            .map(|card| card.mana_value)
            .collect();

        if values.is_empty() {
            return Self::default();
        }

        Self {
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            total: values.iter().sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_status_parsing() {
        assert!(ComboStatus::from("OK").is_ok());
        assert!(ComboStatus::from(" ok ").is_ok());
        assert_eq!(ComboStatus::from("NR"), ComboStatus::Other("NR".to_string()));
    }

    #[test]
    fn test_raw_record_deserialization() {
        let raw: RawComboRecord = serde_json::from_str(
            r#"{"id": "12-34", "cards": ["Dramatic Reversal", "Isochron Scepter"],
                "effect": "Infinite colorless mana", "status": "OK"}"#,
        )
        .unwrap();
        assert_eq!(raw.id.as_deref(), Some("12-34"));
        assert!(raw.status.unwrap().is_ok());

        let sparse: RawComboRecord = serde_json::from_str(r#"{"effect": "nothing"}"#).unwrap();
        assert!(sparse.id.is_none());
        assert!(sparse.cards.is_empty());
        assert!(sparse.status.is_none());
    }

    #[test]
    fn test_distinct_cards() {
        let raw = RawComboRecord::new("1", ["A", " A", "B", ""], "loop");
        assert_eq!(raw.distinct_cards(), vec!["A", "B"]);
    }

    #[test]
    fn test_costs() {
        let pool = CardPool::from_cards([
            Card::new("Dramatic Reversal").with_mana_value(2.0),
            Card::new("Isochron Scepter").with_mana_value(2.0),
            Card::new("Sol Ring").with_mana_value(1.0),
        ]);
        let record = ComboRecord {
            id: ComboId::new("1"),
            cards: SmallVec::from_vec(vec![
                "Dramatic Reversal".to_string(),
                "Isochron Scepter".to_string(),
                "Sol Ring".to_string(),
            ]),
            effect: "Infinite mana".to_string(),
        };

        let costs = ComboCosts::compute(&record, &pool);
        assert_eq!(costs.min, 1.0);
        assert_eq!(costs.max, 2.0);
        assert_eq!(costs.total, 5.0);
        assert!(record.resolves_in(&pool));
        assert!(record.contains("Sol Ring"));
    }
}
