// Centralized error handling using thiserror
//
// Design Decision: One small error enum shared by the whole crate
//
// Lookup failures all collapse into a single RepositoryError variant. The
// service layer never inspects or rewraps it, so callers see exactly what
// the repository produced.

use thiserror::Error;

/// Main error type for the user directory
///
/// Usage:
///     fn get_user(&self, id: i64) -> Result<User> {
///         Err(UserDirectoryError::RepositoryError(
///             format!("no user with id {}", id)
///         ))
///     }
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// A repository could not satisfy a lookup
    ///
    /// Raised only by UserRepository implementations. The bundled
    /// RealUserRepository never returns it.
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Dependency wiring was incomplete
    ///
    /// Returned by AppBuilder::build when a required dependency is missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Result with UserDirectoryError
pub type Result<T> = std::result::Result<T, UserDirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UserDirectoryError::RepositoryError("connection refused".to_string());
        assert_eq!(err.to_string(), "Repository error: connection refused");

        let err = UserDirectoryError::ConfigError("missing repository".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing repository");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<i64> {
            Err(UserDirectoryError::RepositoryError("test error".to_string()))
        }

        let result = returns_error();
        assert!(result.is_err());
    }
}
