// AppBuilder pattern for dependency construction and injection
//
// Design Decision: Builder that wires the repository into the service
//
// Production and test setups differ only in which UserRepository goes in.
// The builder keeps that choice in one place and validates it before
// anything is constructed.
//
// Usage Example:
//     // Production
//     let deps = AppBuilder::new()
//         .with_production_deps()
//         .build()?;
//
//     // Testing
//     let deps = AppBuilder::new()
//         .with_repository(Arc::new(mock))
//         .build()?;

use crate::error::{Result, UserDirectoryError};
use crate::services::{RealUserRepository, UserRepository, UserService};
use std::sync::Arc;

/// Builder for the application dependency graph
///
/// # Examples
///
/// ```
/// use user_directory::AppBuilder;
///
/// let deps = AppBuilder::new().with_production_deps().build().unwrap();
/// let name = deps.user_service.get_user_name(1).unwrap();
/// assert_eq!(name, user_directory::REAL_USER_NAME);
/// ```
pub struct AppBuilder {
    repository: Option<Arc<dyn UserRepository>>,
}

impl AppBuilder {
    /// Create a new AppBuilder with nothing configured
    pub fn new() -> Self {
        Self { repository: None }
    }

    /// Use production dependencies
    ///
    /// Installs RealUserRepository.
    pub fn with_production_deps(mut self) -> Self {
        tracing::debug!("Wiring production user repository");
        self.repository = Some(Arc::new(RealUserRepository::new()) as Arc<dyn UserRepository>);
        self
    }

    /// Use test dependencies (mocks)
    #[cfg(test)]
    pub fn with_test_deps(mut self) -> Self {
        use crate::services::mocks::test_helpers::*;

        self.repository = Some(Arc::new(create_mock_repository()) as Arc<dyn UserRepository>);
        self
    }

    /// Override the user repository
    pub fn with_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the configured dependencies
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no repository was configured.
    pub fn build(self) -> Result<AppDependencies> {
        let repository = self.repository.ok_or_else(|| {
            UserDirectoryError::ConfigError("User repository not configured".to_string())
        })?;

        Ok(AppDependencies {
            user_service: UserService::new(repository.clone()),
            repository,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for the wired application dependencies
///
/// `user_service` holds the same repository instance as `repository`.
pub struct AppDependencies {
    pub repository: Arc<dyn UserRepository>,
    pub user_service: UserService,
}
