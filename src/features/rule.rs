//! Declarative feature rules.
//!
//! A `FeatureRule` is a label plus one or more `RulePair`s. A pair is an
//! include pattern and the exclude patterns that veto it. A `FeatureTable`
//! is the ordered list of rules, at most one per label.
//!
//! Tables are data. `FeatureTableSpec` is the serializable form holding
//! raw pattern strings; `FeatureTable::compile` turns it into regexes.

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Result, SynergyError};

use super::label::FeatureLabel;

fn compile(label: &FeatureLabel, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| SynergyError::InvalidPattern {
            label: label.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

/// Include pattern with its paired exclude patterns.
#[derive(Clone, Debug)]
pub struct RulePair {
    include: Regex,
    excludes: Vec<Regex>,
}

impl RulePair {
    /// True if the include matches the segment and no exclude does.
    ///
    /// Excludes are checked against the same segment that satisfied the
    /// include, never against other faces.
    #[must_use]
    pub fn matches_segment(&self, segment: &str) -> bool {
        self.include.is_match(segment) && !self.excludes.iter().any(|e| e.is_match(segment))
    }

    /// True if any segment satisfies the pair.
    #[must_use]
    pub fn matches(&self, segments: &[String]) -> bool {
        segments.iter().any(|s| self.matches_segment(s))
    }

    #[must_use]
    pub fn include(&self) -> &str {
        self.include.as_str()
    }

    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.excludes.iter().map(Regex::as_str)
    }
}

/// A label and the pairs that can assign it.
#[derive(Clone, Debug)]
pub struct FeatureRule {
    pub label: FeatureLabel,
    pairs: Vec<RulePair>,
}

impl FeatureRule {
    /// Create a rule with no pairs. It matches nothing until one is added.
    pub fn new(label: impl Into<FeatureLabel>) -> Self {
        Self {
            label: label.into(),
            pairs: Vec::new(),
        }
    }

    /// Add an (include, excludes) pair (builder pattern).
    ///
    /// ## Example
    ///
    /// ```
    /// use deck_synergy::features::FeatureRule;
    ///
    /// let draw = FeatureRule::new("draw")
    ///     .with_pair("draw a card", &["whenever you draw a card, discard"])
    ///     .unwrap();
    ///
    /// assert!(draw.matches(&["draw a card.".to_string()]));
    /// assert!(!draw.matches(&["whenever you draw a card, discard a card.".to_string()]));
    /// ```
    pub fn with_pair(mut self, include: &str, excludes: &[&str]) -> Result<Self> {
        let include = compile(&self.label, include)?;
        let excludes = excludes
            .iter()
            .map(|pattern| compile(&self.label, pattern))
            .collect::<Result<Vec<_>>>()?;
        self.pairs.push(RulePair { include, excludes });
        Ok(self)
    }

    /// True if any pair is satisfied. Pairs are tried in order and the
    /// first satisfied one decides.
    #[must_use]
    pub fn matches(&self, segments: &[String]) -> bool {
        self.pairs.iter().any(|pair| pair.matches(segments))
    }

    #[must_use]
    pub fn pairs(&self) -> &[RulePair] {
        &self.pairs
    }
}

/// Ordered rule table, one rule per label.
#[derive(Clone, Debug, Default)]
pub struct FeatureTable {
    rules: Vec<FeatureRule>,
    by_label: FxHashMap<FeatureLabel, usize>,
}

impl FeatureTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule (builder pattern). See `push`.
    #[must_use]
    pub fn with_rule(mut self, rule: FeatureRule) -> Self {
        self.push(rule);
        self
    }

    /// Add a rule. A rule for an existing label appends its pairs to the
    /// existing rule, keeping the label's original position.
    pub fn push(&mut self, rule: FeatureRule) {
        if let Some(&idx) = self.by_label.get(&rule.label) {
            self.rules[idx].pairs.extend(rule.pairs);
        } else {
            self.by_label.insert(rule.label.clone(), self.rules.len());
            self.rules.push(rule);
        }
    }

    /// Compile a table from its serializable form.
    pub fn compile(spec: &FeatureTableSpec) -> Result<Self> {
        let mut table = Self::new();
        for rule_spec in &spec.rules {
            let mut rule = FeatureRule::new(rule_spec.label.as_str());
            for pair in &rule_spec.pairs {
                let excludes: Vec<&str> = pair.exclude.iter().map(String::as_str).collect();
                rule = rule.with_pair(&pair.include, &excludes)?;
            }
            table.push(rule);
        }
        Ok(table)
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&FeatureRule> {
        self.by_label.get(label).map(|&idx| &self.rules[idx])
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Iterate rules in table order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureRule> {
        self.rules.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &FeatureLabel> {
        self.rules.iter().map(|r| &r.label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Serializable (include, excludes) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePairSpec {
    pub include: String,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Serializable feature rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRuleSpec {
    pub label: String,
    pub pairs: Vec<RulePairSpec>,
}

/// Serializable feature table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTableSpec {
    pub rules: Vec<FeatureRuleSpec>,
}
