// User service: business-facing lookups on top of a UserRepository
//
// Design Decision: Constructor injection of Arc<dyn UserRepository>
//
// The repository is the only seam. Production passes RealUserRepository,
// tests pass MockUserRepository; this file is identical in both cases.
// Errors from the repository are returned untouched.

use super::traits::UserRepository;
use crate::error::Result;
use std::sync::Arc;

/// Service exposing derived user lookups
///
/// Usage:
///     let repo = Arc::new(RealUserRepository::new());
///     let service = UserService::new(repo);
///     let name = service.get_user_name(1)?;
pub struct UserService {
    /// Injected once at construction, never replaced
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Look up a user's display name
    ///
    /// # Errors
    /// Whatever the repository returned, unchanged.
    pub fn get_user_name(&self, id: i64) -> Result<String> {
        tracing::debug!("Resolving user name for id {}", id);

        match self.repository.get_user(id) {
            Ok(user) => Ok(user.name),
            Err(e) => {
                tracing::warn!("User lookup failed for id {}: {}", id, e);
                Err(e)
            }
        }
    }
}
