//! Crate error type.
//!
//! Only structural failures are errors: a pattern that does not compile,
//! an anchor that is not in the pool, an invalid configuration. Degraded
//! inputs (malformed combos, unresolved names, empty filters, oversized
//! cores) are counted in diagnostics instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynergyError {
    #[error("invalid pattern `{pattern}` for label `{label}`: {source}")]
    InvalidPattern {
        label: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid effect filter: {0}")]
    InvalidFilter(#[source] regex::Error),

    #[error("anchor card not found in pool: {0}")]
    UnknownAnchor(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SynergyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SynergyError::UnknownAnchor("Krenko, Mob Boss".to_string());
        assert_eq!(err.to_string(), "anchor card not found in pool: Krenko, Mob Boss");

        let err = SynergyError::InvalidConfig("kcore_max_k must be at least 1".to_string());
        assert!(err.to_string().contains("kcore_max_k"));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = SynergyError::InvalidPattern {
            label: "draw".to_string(),
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid pattern `(unclosed` for label `draw`"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
