//! Feature labels.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Short tag for a functional role ("ramp", "removal", "draw", ...).
///
/// Labels are plain strings: tables, keyword maps and association graphs
/// are data, so the set of labels is open.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureLabel(pub String);

impl FeatureLabel {
    /// Create a new label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FeatureLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeatureLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FeatureLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for FeatureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_label_from() {
        let a = FeatureLabel::new("ramp");
        let b: FeatureLabel = "ramp".into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "ramp");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map: FxHashMap<FeatureLabel, u32> = FxHashMap::default();
        map.insert("draw".into(), 3);
        assert_eq!(map.get("draw"), Some(&3));
    }
}
