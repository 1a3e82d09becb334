//! Generation errors
//!
//! Bad options are rejected before any carving starts. The only error the
//! algorithms themselves raise is a broken dead-end invariant in the pruner.

use thiserror::Error;

/// Errors returned by dungeon generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("dead end at ({x}, {y}) has no open side")]
    DeadEndWithoutOpening { x: usize, y: usize },
}

impl GenerateError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenerateError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = GenerateError::invalid("width", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: width must be at least 1"
        );
    }

    #[test]
    fn test_dead_end_message() {
        let err = GenerateError::DeadEndWithoutOpening { x: 3, y: 4 };
        assert_eq!(err.to_string(), "dead end at (3, 4) has no open side");
    }
}
