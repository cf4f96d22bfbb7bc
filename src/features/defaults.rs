//! Built-in feature table, association graph and keyword map.
//!
//! Patterns run against lowercase text in which the card's own name has
//! been replaced by `this card`.

use crate::core::Result;

use super::association::AssociationGraph;
use super::keywords::KeywordLabels;
use super::rule::{FeatureRuleSpec, FeatureTable, FeatureTableSpec, RulePairSpec};

type PairData = (&'static str, &'static [&'static str]);

const DEFAULT_RULES: &[(&str, &[PairData])] = &[
    (
        "ramp",
        &[
            (
                r"search your library for [^.]*\bland cards?\b",
                &[r"put (?:it|them|that card|those cards) into your hand"],
            ),
            (
                r"add (?:\{[wubrgc]\}|one mana|two mana|three mana|mana of any|an amount of)",
                &[r"spend this mana only to cast", r"^\(\{t\}: add \{[wubrgc]\}\.\)$"],
            ),
            (r"you may play (?:an|two) additional lands?", &[]),
        ],
    ),
    (
        "removal",
        &[
            (
                r"destroy (?:target|up to \w+ target) (?:creature|artifact|enchantment|planeswalker|permanent|nonland permanent)",
                &[r"destroy target (?:creature|permanent) you control"],
            ),
            (
                r"exile (?:target|up to \w+ target) (?:creature|artifact|enchantment|planeswalker|permanent|nonland permanent)",
                &[r"return (?:it|that card|the exiled card) to the battlefield"],
            ),
            (
                r"deals? (?:\d+|x) damage to (?:any target|target creature)",
                &[],
            ),
        ],
    ),
    (
        "draw",
        &[(
            r"draws? (?:a|two|three|four|x|that many) cards?",
            &[r"whenever (?:you|a player|an opponent) draws? (?:a|your \w+) card, discard"],
        )],
    ),
    (
        "counterspell",
        &[(
            r"counter target (?:spell|noncreature spell|creature spell|instant|activated|triggered)",
            &[],
        )],
    ),
    (
        "board_wipe",
        &[
            (
                r"(?:destroy|exile) all (?:other )?(?:creatures|nonland permanents|permanents|artifacts|enchantments)",
                &[],
            ),
            (r"all (?:other )?creatures get -(?:\d+|x)/-(?:\d+|x)", &[]),
        ],
    ),
    (
        "tutor",
        &[(
            r"search your library for (?:a|an|up to \w+) (?:card|creature|artifact|enchantment|instant|sorcery|legendary)",
            &[r"basic land"],
        )],
    ),
    (
        "recursion",
        &[
            (
                r"return [^.]*cards? from your graveyard to (?:your hand|the battlefield)",
                &[],
            ),
            (r"you may cast [^.]* from your graveyard", &[]),
        ],
    ),
    (
        "tokens",
        &[(
            r"create (?:a|an|one|two|three|four|five|x|that many) [^.]*tokens?",
            &[r"target opponent creates", r"its controller creates"],
        )],
    ),
    (
        "sacrifice",
        &[(
            r"sacrifice (?:a|another|an|two|x) (?:creature|artifact|permanent|token)",
            &[r"at the beginning of your upkeep, sacrifice"],
        )],
    ),
    (
        "aristocrats",
        &[(
            r"whenever (?:a|another|one or more) (?:nontoken )?creatures? (?:you control )?(?:dies|die)",
            &[],
        )],
    ),
    (
        "lifegain",
        &[(r"you gain (?:\d+|x|that much) life", &[r"lose \d+ life and you gain"])],
    ),
    ("poison", &[(r"poison counters?|\btoxic \d", &[])]),
    ("proliferate", &[(r"\bproliferate\b", &[])]),
    (
        "counters",
        &[(
            r"\+1/\+1 counters? on",
            &[r"remove (?:a|an|all|\w+) \+1/\+1 counters?"],
        )],
    ),
    (
        "protection",
        &[(
            r"(?:gains?|have|has) (?:hexproof|indestructible|shroud|protection from)",
            &[],
        )],
    ),
    (
        "etb",
        &[(r"when(?:ever)? this card enters", &[])],
    ),
    (
        "flicker",
        &[(
            r"exile (?:another )?target [^.]*(?:creature|permanent) you (?:control|own)[^.]*\. return (?:it|that card|the exiled card) to the battlefield",
            &[],
        )],
    ),
    (
        "landfall",
        &[(r"whenever a land (?:you control )?enters|\blandfall\b", &[])],
    ),
    (
        "graveyard",
        &[(
            r"\bmills? (?:a|one|two|three|\d+|x) cards?|cards? from the top of [^.]*library into [^.]*graveyard",
            &[],
        )],
    ),
];

const DEFAULT_ASSOCIATIONS: &[(&str, &str)] = &[
    ("poison", "proliferate"),
    ("proliferate", "poison"),
    ("counters", "proliferate"),
    ("proliferate", "counters"),
    ("tokens", "sacrifice"),
    ("tokens", "anthem"),
    ("sacrifice", "tokens"),
    ("sacrifice", "aristocrats"),
    ("aristocrats", "tokens"),
    ("sacrifice", "recursion"),
    ("graveyard", "recursion"),
    ("recursion", "graveyard"),
    ("etb", "flicker"),
    ("flicker", "etb"),
    ("landfall", "ramp"),
    ("ramp", "landfall"),
    ("lifegain", "lifedrain"),
];

const DEFAULT_KEYWORDS: &[(&str, &str)] = &[
    ("infect", "poison"),
    ("toxic", "poison"),
    ("poisonous", "poison"),
    ("proliferate", "proliferate"),
    ("lifelink", "lifegain"),
    ("landfall", "landfall"),
    ("populate", "tokens"),
    ("fabricate", "tokens"),
    ("amass", "tokens"),
    ("afterlife", "tokens"),
    ("flashback", "recursion"),
    ("escape", "recursion"),
    ("unearth", "recursion"),
    ("embalm", "recursion"),
    ("mill", "graveyard"),
    ("surveil", "graveyard"),
    ("evolve", "counters"),
    ("outlast", "counters"),
    ("adapt", "counters"),
    ("hexproof", "protection"),
    ("indestructible", "protection"),
    ("ward", "protection"),
    ("exploit", "sacrifice"),
    ("emerge", "sacrifice"),
    ("casualty", "sacrifice"),
];

/// Serializable form of the built-in table.
#[must_use]
pub fn default_table_spec() -> FeatureTableSpec {
    FeatureTableSpec {
        rules: DEFAULT_RULES
            .iter()
            .map(|(label, pairs)| FeatureRuleSpec {
                label: (*label).to_string(),
                pairs: pairs
                    .iter()
                    .map(|(include, excludes)| RulePairSpec {
                        include: (*include).to_string(),
                        exclude: excludes.iter().map(|e| (*e).to_string()).collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Compiled built-in table.
pub fn default_feature_table() -> Result<FeatureTable> {
    FeatureTable::compile(&default_table_spec())
}

#[must_use]
pub fn default_associations() -> AssociationGraph {
    DEFAULT_ASSOCIATIONS
        .iter()
        .fold(AssociationGraph::new(), |graph, (from, to)| graph.with_edge(from, to))
}

#[must_use]
pub fn default_keywords() -> KeywordLabels {
    DEFAULT_KEYWORDS
        .iter()
        .fold(KeywordLabels::new(), |map, (keyword, label)| map.with(keyword, *label))
}
