//! Error handling for the event dispatcher
//!
//! Plain registration and dispatch never fail. The error types here cover
//! the validated surface only: strict channel registration and dispatcher
//! configuration.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Dispatcher error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Channel name was empty
    #[error("Channel name is empty")]
    EmptyName,

    /// Wildcard marker used somewhere other than a trailing namespace segment
    #[error("Wildcard must be the last segment of the channel name: {name:?}")]
    MisplacedWildcard {
        /// The rejected channel name.
        name: String,
    },

    /// Exact channel name ending in a separator, which dispatch can never reach
    #[error("Channel name ends with a namespace separator: {name:?}")]
    TrailingSeparator {
        /// The rejected channel name.
        name: String,
    },

    /// Dispatcher configuration is unusable
    #[error("Invalid dispatcher configuration: {reason}")]
    InvalidConfig {
        /// The reason the configuration was rejected.
        reason: String,
    },
}

impl DispatchError {
    /// Check if this error came from channel name validation
    pub fn is_name_error(&self) -> bool {
        matches!(
            self,
            DispatchError::EmptyName
                | DispatchError::MisplacedWildcard { .. }
                | DispatchError::TrailingSeparator { .. }
        )
    }
}

/// Result type using DispatchError
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DispatchError::MisplacedWildcard {
            name: "user.cre*".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Wildcard must be the last segment of the channel name: \"user.cre*\""
        );

        let err = DispatchError::InvalidConfig {
            reason: "separator and wildcard are both '.'".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid dispatcher configuration"));
    }

    #[test]
    fn test_is_name_error() {
        assert!(DispatchError::EmptyName.is_name_error());
        assert!(DispatchError::MisplacedWildcard {
            name: "*".to_string()
        }
        .is_name_error());
        assert!(!DispatchError::InvalidConfig {
            reason: String::new()
        }
        .is_name_error());
    }
}
