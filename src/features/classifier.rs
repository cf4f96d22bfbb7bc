//! Text pattern classifier.
//!
//! Assigns feature labels to a card by running its lowercase text
//! segments through a `FeatureTable`. Each label is evaluated on its own,
//! so a card may carry any number of labels.
//!
//! Before matching, the card's references to itself are rewritten to the
//! token `this card`, so a pattern such as `when this card enters` anchors
//! on "When Llanowar Visionary enters" and "When Krenko enters" alike.

use crate::cards::{Card, CardPool};

use super::label::FeatureLabel;
use super::rule::FeatureTable;

/// Token that replaces a card's own name in its text.
pub const SELF_TOKEN: &str = "this card";

/// Replace whole-word occurrences of `needle` in `text`.
fn replace_word(text: &str, needle: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for (start, _) in text.match_indices(needle) {
        let end = start + needle.len();
        let bounded_before = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let bounded_after = text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());

        if bounded_before && bounded_after {
            out.push_str(&text[last..start]);
            out.push_str(replacement);
            last = end;
        }
    }

    out.push_str(&text[last..]);
    out
}

/// Rewrite self-references in one lowercase segment.
///
/// `names` must be lowercase and ordered longest first (see
/// `Card::self_references`), so "krenko, mob boss" is replaced before
/// "krenko" can split it.
#[must_use]
pub fn normalize_self_references(segment: &str, names: &[String]) -> String {
    names
        .iter()
        .filter(|name| !SELF_TOKEN.contains(name.as_str()))
        .fold(segment.to_string(), |text, name| replace_word(&text, name, SELF_TOKEN))
}

/// Card labels grouped by label, in table order.
#[derive(Clone, Debug, Default)]
pub struct FeatureTags {
    pub entries: Vec<(FeatureLabel, Vec<String>)>,
}

impl FeatureTags {
    /// Cards tagged with a label.
    #[must_use]
    pub fn cards(&self, label: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(l, _)| l.as_str() == label)
            .map(|(_, cards)| cards.as_slice())
            .unwrap_or_default()
    }
}

/// Rule-interpreting classifier over a `FeatureTable`.
///
/// Pure and deterministic: the same card and table always produce the
/// same labels in the same (table) order.
#[derive(Clone, Copy, Debug)]
pub struct TextPatternClassifier<'a> {
    table: &'a FeatureTable,
}

impl<'a> TextPatternClassifier<'a> {
    pub fn new(table: &'a FeatureTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &'a FeatureTable {
        self.table
    }

    /// Lowercase, self-normalized segments for a card.
    #[must_use]
    pub fn prepare(card: &Card) -> Vec<String> {
        let names = card.self_references();
        card.segments()
            .iter()
            .map(|segment| normalize_self_references(segment, &names))
            .collect()
    }

    /// Labels whose rule is satisfied by already-prepared segments.
    #[must_use]
    pub fn classify_segments(&self, segments: &[String]) -> Vec<&'a FeatureLabel> {
        self.table
            .iter()
            .filter(|rule| rule.matches(segments))
            .map(|rule| &rule.label)
            .collect()
    }

    /// Labels assigned to a card, in table order.
    #[must_use]
    pub fn classify(&self, card: &Card) -> Vec<FeatureLabel> {
        let segments = Self::prepare(card);
        self.classify_segments(&segments).into_iter().cloned().collect()
    }

    /// True if the card satisfies the rule for `label`.
    ///
    /// Labels without a rule never match.
    #[must_use]
    pub fn matches(&self, card: &Card, label: &str) -> bool {
        self.table
            .get(label)
            .is_some_and(|rule| rule.matches(&Self::prepare(card)))
    }

    /// One classifier pass over the pool for a single label.
    #[must_use]
    pub fn cards_with_label<'p>(&self, pool: &'p CardPool, label: &str) -> Vec<&'p Card> {
        let Some(rule) = self.table.get(label) else {
            return Vec::new();
        };
        pool.iter()
            .filter(|card| rule.matches(&Self::prepare(card)))
            .collect()
    }

    /// Tag every card in the pool, grouped by label in table order.
    #[must_use]
    pub fn tag_pool(&self, pool: &CardPool) -> FeatureTags {
        let mut entries: Vec<(FeatureLabel, Vec<String>)> = self
            .table
            .labels()
            .map(|label| (label.clone(), Vec::new()))
            .collect();

        for card in pool.iter() {
            let segments = Self::prepare(card);
            for (idx, rule) in self.table.iter().enumerate() {
                if rule.matches(&segments) {
                    entries[idx].1.push(card.name.clone());
                }
            }
        }

        FeatureTags { entries }
    }
}
