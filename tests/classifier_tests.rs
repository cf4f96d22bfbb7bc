//! Classifier tests.
//!
//! Feature tables loaded from JSON, multi-face cards, and self-reference
//! normalization against the built-in table.

use deck_synergy::cards::{Card, CardPool};
use deck_synergy::core::SynergyError;
use deck_synergy::features::{
    default_feature_table, FeatureLabel, FeatureTable, FeatureTableSpec, TextPatternClassifier,
};

fn labels(table: &FeatureTable, card: &Card) -> Vec<String> {
    TextPatternClassifier::new(table)
        .classify(card)
        .into_iter()
        .map(|label| label.0)
        .collect()
}

const TABLE_JSON: &str = r#"{
    "rules": [
        { "label": "draw", "pairs": [
            { "include": "draw a card", "exclude": ["whenever you draw a card, discard"] },
            { "include": "draws? (?:two|three) cards" }
        ] },
        { "label": "etb", "pairs": [ { "include": "when this card enters" } ] }
    ]
}"#;

/// A table deserialized from JSON compiles and classifies.
#[test]
fn test_table_from_json() {
    let spec: FeatureTableSpec = serde_json::from_str(TABLE_JSON).unwrap();
    let table = FeatureTable::compile(&spec).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("draw").unwrap().pairs().len(), 2);

    let divination = Card::new("Divination").with_text("Draw two cards.");
    assert_eq!(labels(&table, &divination), vec!["draw"]);
}

/// A bad pattern names its label.
#[test]
fn test_invalid_pattern_reports_label() {
    let spec: FeatureTableSpec = serde_json::from_str(
        r#"{ "rules": [ { "label": "broken", "pairs": [ { "include": "(unclosed" } ] } ] }"#,
    )
    .unwrap();

    match FeatureTable::compile(&spec) {
        Err(SynergyError::InvalidPattern { label, .. }) => assert_eq!(label, "broken"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

/// Later pairs still count when an earlier pair is vetoed.
#[test]
fn test_second_pair_rescues_label() {
    let spec: FeatureTableSpec = serde_json::from_str(TABLE_JSON).unwrap();
    let table = FeatureTable::compile(&spec).unwrap();

    let card = Card::new("Mixed").with_text("Whenever you draw a card, discard a card. Draw three cards.");
    assert_eq!(labels(&table, &card), vec!["draw"]);
}

/// Each face is its own segment, and either face's own name counts as a
/// self-reference.
#[test]
fn test_multi_face_self_reference() {
    let spec: FeatureTableSpec = serde_json::from_str(TABLE_JSON).unwrap();
    let table = FeatureTable::compile(&spec).unwrap();

    let card = Card::new("Delver of Secrets // Insectile Aberration")
        .with_text("At the beginning of your upkeep, look at the top card of your library.")
        .with_text("Flying. When Insectile Aberration enters, you may draw a card.");
    assert_eq!(labels(&table, &card), vec!["draw", "etb"]);
}

/// The short form of a legendary name is a self-reference, other names
/// are not.
#[test]
fn test_legendary_short_name() {
    let table = default_feature_table().unwrap();

    let krenko = Card::new("Krenko, Tin Street Kingpin")
        .with_text("Whenever Krenko attacks, put a +1/+1 counter on it. When Krenko enters, create a 1/1 red Goblin creature token.");
    let found = labels(&table, &krenko);
    assert!(found.contains(&"etb".to_string()));
    assert!(found.contains(&"tokens".to_string()));

    let other = Card::new("Goblin Instigator").with_text("When Krenko enters, do nothing.");
    assert!(!labels(&table, &other).contains(&"etb".to_string()));
}

/// Pool tagging groups card names by label in table order.
#[test]
fn test_tag_pool() {
    let table = default_feature_table().unwrap();
    let pool = CardPool::from_cards([
        Card::new("Sol Ring").with_text("{T}: Add {C}{C}."),
        Card::new("Counterspell").with_text("Counter target spell."),
        Card::new("Arcane Signet").with_text("{T}: Add one mana of any color in your commander's color identity."),
    ]);

    let tags = TextPatternClassifier::new(&table).tag_pool(&pool);
    assert_eq!(tags.cards("ramp"), ["Sol Ring", "Arcane Signet"]);
    assert_eq!(tags.cards("counterspell"), ["Counterspell"]);
    assert!(tags.cards("removal").is_empty());
    assert!(tags.cards("not-a-label").is_empty());

    let classifier = TextPatternClassifier::new(&table);
    let counterspell = pool.resolve("counterspell").unwrap();
    assert!(classifier.matches(counterspell, "counterspell"));
    assert_eq!(classifier.classify(counterspell), vec![FeatureLabel::new("counterspell")]);
}
