//! Card pool for name lookup.
//!
//! The `CardPool` stores the cards of one run in insertion order and
//! resolves names three ways: exact name, case-insensitive name, and any
//! alternate face name of a multi-face card. Iteration follows insertion
//! order so every pass over the pool is deterministic.

use rustc_hash::FxHashMap;

use super::definition::Card;

/// Ordered, read-only collection of cards.
///
/// ## Example
///
/// ```
/// use deck_synergy::cards::{Card, CardPool};
///
/// let pool = CardPool::from_cards([
///     Card::new("Delver of Secrets // Insectile Aberration"),
///     Card::new("Counterspell"),
/// ]);
///
/// let delver = pool.resolve("Insectile Aberration").unwrap();
/// assert_eq!(delver.name, "Delver of Secrets // Insectile Aberration");
/// assert!(pool.contains("counterspell"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Card>,
    by_name: FxHashMap<String, usize>,
    by_folded: FxHashMap<String, usize>,
}

impl CardPool {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from cards. Later duplicates of a name are ignored.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut pool = Self::new();
        for card in cards {
            pool.insert(card);
        }
        pool
    }

    /// Add a card. Returns `false` if a card with the same name exists.
    pub fn insert(&mut self, card: Card) -> bool {
        if self.by_name.contains_key(&card.name) {
            return false;
        }

        let idx = self.cards.len();
        self.by_name.insert(card.name.clone(), idx);
        self.by_folded.entry(card.name.to_lowercase()).or_insert(idx);
        for face in card.face_names() {
            self.by_folded.entry(face.to_lowercase()).or_insert(idx);
        }
        self.cards.push(card);
        true
    }

    /// Resolve a name, falling back to case-insensitive and face-name lookup.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Card> {
        self.by_name
            .get(name)
            .or_else(|| self.by_folded.get(&name.trim().to_lowercase()))
            .map(|&idx| &self.cards[idx])
    }

    /// The pool's own spelling of a name, if it resolves.
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.resolve(name).map(|card| card.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find cards matching a predicate, in insertion order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// A new pool holding only the cards that match the predicate.
    ///
    /// Used by callers that narrow a full pool to its legal subset.
    #[must_use]
    pub fn subset<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Card) -> bool,
    {
        Self::from_cards(self.find(predicate).cloned())
    }
}

impl FromIterator<Card> for CardPool {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self::from_cards(iter)
    }
}
