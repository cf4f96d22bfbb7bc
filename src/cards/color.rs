//! Color identity as a compact five-bit set.

use serde::{Deserialize, Serialize};

/// WUBRG color identity.
///
/// ## Example
///
/// ```
/// use deck_synergy::cards::ColorIdentity;
///
/// let golgari = ColorIdentity::parse("BG");
/// assert!(ColorIdentity::parse("G").is_subset_of(golgari));
/// assert_eq!(golgari.to_string(), "BG");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorIdentity(u8);

impl ColorIdentity {
    pub const WHITE: Self = Self(1);
    pub const BLUE: Self = Self(1 << 1);
    pub const BLACK: Self = Self(1 << 2);
    pub const RED: Self = Self(1 << 3);
    pub const GREEN: Self = Self(1 << 4);

    const LETTERS: [(char, ColorIdentity); 5] = [
        ('W', Self::WHITE),
        ('U', Self::BLUE),
        ('B', Self::BLACK),
        ('R', Self::RED),
        ('G', Self::GREEN),
    ];

    /// Colorless identity.
    #[must_use]
    pub const fn colorless() -> Self {
        Self(0)
    }

    /// Parse color letters, ignoring anything that is not W, U, B, R or G.
    #[must_use]
    pub fn parse(letters: &str) -> Self {
        letters
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter_map(|c| Self::LETTERS.iter().find(|(l, _)| *l == c).map(|(_, color)| *color))
            .fold(Self::colorless(), Self::union)
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        other.contains(self)
    }

    #[must_use]
    pub const fn is_colorless(self) -> bool {
        self.0 == 0
    }

    /// Number of colors.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }
}

impl std::fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_colorless() {
            return write!(f, "C");
        }
        for (letter, color) in Self::LETTERS {
            if self.contains(color) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
