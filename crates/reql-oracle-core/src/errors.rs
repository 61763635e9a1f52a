//! Error types for the oracle.
//!
//! Mismatches are never errors: the matcher reports them as an ordering. The
//! types here cover malformed test definitions and unreadable suites.

/// Fault raised while comparing values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// A regex `ErrorValue` carried a pattern the regex engine rejects.
    #[error("invalid {field} pattern {pattern:?}: {reason}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        reason: String,
    },
}

/// Syntax error in an expected-value literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid expected literal at offset {offset}: {message}")]
pub struct LiteralError {
    pub offset: usize,
    pub message: String,
}

impl LiteralError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        let err = MatchError::InvalidPattern {
            field: "message",
            pattern: "(".into(),
            reason: "unclosed group".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid message pattern \"(\": unclosed group"
        );
        assert_eq!(
            LiteralError::new(4, "expected ']'").to_string(),
            "invalid expected literal at offset 4: expected ']'"
        );
        assert_eq!(
            ConfigError("config has no tests".into()).to_string(),
            "ConfigError: config has no tests"
        );
    }
}
