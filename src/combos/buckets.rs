//! Cardinality buckets for ranked combos.

use serde::{Deserialize, Serialize};

use super::ranker::RankedCombo;

/// Combo size class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeBucket {
    Pair,
    Triple,
    /// Four or more cards.
    Larger,
}

impl SizeBucket {
    /// Bucket for a combo of `len` cards. Anything below three is a pair;
    /// indexed combos always have at least two cards.
    #[must_use]
    pub const fn for_len(len: usize) -> Self {
        match len {
            0..=2 => SizeBucket::Pair,
            3 => SizeBucket::Triple,
            _ => SizeBucket::Larger,
        }
    }
}

impl std::fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeBucket::Pair => write!(f, "2 cards"),
            SizeBucket::Triple => write!(f, "3 cards"),
            SizeBucket::Larger => write!(f, "4+ cards"),
        }
    }
}

/// Ranked combos split by size, each list sorted ascending by total
/// mana cost. Ties keep discovery order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ComboBuckets {
    pub pairs: Vec<RankedCombo>,
    pub triples: Vec<RankedCombo>,
    pub larger: Vec<RankedCombo>,
}

impl ComboBuckets {
    /// Bucket and sort combos. Uses each combo's cached cost annotation.
    pub fn from_combos<'a>(combos: impl IntoIterator<Item = &'a RankedCombo>) -> Self {
        let mut buckets = Self::default();
        for combo in combos {
            buckets.bucket_mut(SizeBucket::for_len(combo.cards.len())).push(combo.clone());
        }
        for list in [&mut buckets.pairs, &mut buckets.triples, &mut buckets.larger] {
            list.sort_by(|a, b| a.costs.total.total_cmp(&b.costs.total));
        }
        buckets
    }

    fn bucket_mut(&mut self, bucket: SizeBucket) -> &mut Vec<RankedCombo> {
        match bucket {
            SizeBucket::Pair => &mut self.pairs,
            SizeBucket::Triple => &mut self.triples,
            SizeBucket::Larger => &mut self.larger,
        }
    }

    #[must_use]
    pub fn get(&self, bucket: SizeBucket) -> &[RankedCombo] {
        match bucket {
            SizeBucket::Pair => &self.pairs,
            SizeBucket::Triple => &self.triples,
            SizeBucket::Larger => &self.larger,
        }
    }

    /// Buckets in size order.
    pub fn iter(&self) -> impl Iterator<Item = (SizeBucket, &[RankedCombo])> {
        [SizeBucket::Pair, SizeBucket::Triple, SizeBucket::Larger]
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len() + self.triples.len() + self.larger.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combos::record::{ComboCosts, ComboId};
    use smallvec::SmallVec;

    fn combo(id: &str, size: usize, total: f64) -> RankedCombo {
        RankedCombo {
            id: ComboId::new(id),
            cards: (0..size).map(|i| format!("{id}-{i}")).collect::<SmallVec<_>>(),
            effect: String::new(),
            costs: ComboCosts { min: 0.0, max: total, total },
            via: None,
        }
    }

    #[test]
    fn test_size_bucket() {
        assert_eq!(SizeBucket::for_len(2), SizeBucket::Pair);
        assert_eq!(SizeBucket::for_len(3), SizeBucket::Triple);
        assert_eq!(SizeBucket::for_len(7), SizeBucket::Larger);
        assert_eq!(SizeBucket::Larger.to_string(), "4+ cards");
    }

    #[test]
    fn test_buckets_sorted_by_total_cost() {
        let combos = vec![
            combo("a", 2, 6.0),
            combo("b", 3, 4.0),
            combo("c", 2, 3.0),
            combo("d", 5, 9.0),
            combo("e", 2, 3.0),
        ];
        let buckets = ComboBuckets::from_combos(&combos);

        let pairs: Vec<_> = buckets.pairs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(pairs, vec!["c", "e", "a"]);
        assert_eq!(buckets.get(SizeBucket::Triple).len(), 1);
        assert_eq!(buckets.get(SizeBucket::Larger).len(), 1);
        assert_eq!(buckets.len(), 5);

        let sizes: Vec<_> = buckets.iter().map(|(b, list)| (b, list.len())).collect();
        assert_eq!(
            sizes,
            vec![(SizeBucket::Pair, 3), (SizeBucket::Triple, 1), (SizeBucket::Larger, 1)]
        );
    }
}
