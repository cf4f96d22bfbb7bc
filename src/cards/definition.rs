//! Card records - read-only snapshots supplied by the loader.
//!
//! A `Card` holds everything the analysis reads: one text segment per
//! printed face, mana value, color identity, keywords and type line.
//! Nothing in the crate mutates a card after the pool is built.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::ColorIdentity;

/// Separator between face names and face type lines on multi-face cards.
pub const FACE_SEPARATOR: &str = " // ";

/// Structural card type, used to group matches for display.
///
/// Variant order is the priority order used by `from_type_line`: an
/// "Artifact Creature" is a Creature, a "Land Creature" is a Creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Planeswalker,
    Battle,
    Instant,
    Sorcery,
    Artifact,
    Enchantment,
    Land,
    Other,
}

impl CardType {
    const ALL: [CardType; 8] = [
        CardType::Creature,
        CardType::Planeswalker,
        CardType::Battle,
        CardType::Instant,
        CardType::Sorcery,
        CardType::Artifact,
        CardType::Enchantment,
        CardType::Land,
    ];

    /// Derive the structural type from the front face of a type line.
    #[must_use]
    pub fn from_type_line(type_line: &str) -> Self {
        let front = type_line
            .split(FACE_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        // Types precede the subtype dash.
        let types = front.split('—').next().unwrap_or_default();

        Self::ALL
            .into_iter()
            .find(|t| types.split_whitespace().any(|word| word == t.keyword()))
            .unwrap_or(CardType::Other)
    }

    /// Lowercase type-line keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            CardType::Creature => "creature",
            CardType::Planeswalker => "planeswalker",
            CardType::Battle => "battle",
            CardType::Instant => "instant",
            CardType::Sorcery => "sorcery",
            CardType::Artifact => "artifact",
            CardType::Enchantment => "enchantment",
            CardType::Land => "land",
            CardType::Other => "other",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Read-only card snapshot.
///
/// ## Example
///
/// ```
/// use deck_synergy::cards::{Card, CardType};
///
/// let card = Card::new("Llanowar Elves")
///     .with_type_line("Creature — Elf Druid")
///     .with_text("{T}: Add {G}.")
///     .with_mana_value(1.0)
///     .with_colors("G");
///
/// assert_eq!(card.card_type(), CardType::Creature);
/// assert_eq!(card.segments(), vec!["{t}: add {g}.".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique name. Multi-face cards use "Front // Back".
    pub name: String,

    /// Printed type line, faces joined by " // ".
    #[serde(default)]
    pub type_line: String,

    /// Rules text, one entry per printed face.
    #[serde(default)]
    pub faces: SmallVec<[String; 2]>,

    /// Converted mana cost.
    #[serde(default)]
    pub mana_value: f64,

    #[serde(default)]
    pub color_identity: ColorIdentity,

    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Card {
    /// Create a card with no text, type, or cost.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_line: String::new(),
            faces: SmallVec::new(),
            mana_value: 0.0,
            color_identity: ColorIdentity::colorless(),
            keywords: Vec::new(),
        }
    }

    /// Add a face's rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.faces.push(text.into());
        self
    }

    #[must_use]
    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = type_line.into();
        self
    }

    #[must_use]
    pub fn with_mana_value(mut self, mana_value: f64) -> Self {
        self.mana_value = mana_value;
        self
    }

    /// Set color identity from letters ("WUBRG").
    #[must_use]
    pub fn with_colors(mut self, letters: &str) -> Self {
        self.color_identity = ColorIdentity::parse(letters);
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Structural type of the front face.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        CardType::from_type_line(&self.type_line)
    }

    /// Individual face names. Single-faced cards yield just their name.
    pub fn face_names(&self) -> impl Iterator<Item = &str> {
        self.name.split(FACE_SEPARATOR).map(str::trim)
    }

    /// Lowercase rules text, one segment per face.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        self.faces.iter().map(|text| text.to_lowercase()).collect()
    }

    /// Lowercase names the card uses to refer to itself, longest first.
    ///
    /// Includes the full name, every face name, and the short form of
    /// legendary names ("krenko, mob boss" -> "krenko").
    #[must_use]
    pub fn self_references(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let mut push = |name: &str| {
            let name = name.trim().to_lowercase();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        };

        push(&self.name);
        for face in self.face_names() {
            push(face);
            if let Some((short, _)) = face.split_once(',') {
                push(short);
            }
        }

        names.sort_by(|a, b| b.len().cmp(&a.len()));
        names
    }
}
