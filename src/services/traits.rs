// Core trait definitions for the service layer
//
// Design Decision: Data access behind a Send + Sync trait
//
// UserService only ever sees `Arc<dyn UserRepository>`, so the real
// repository and test doubles are interchangeable without touching the
// service. Unit tests get MockUserRepository from automock.

use crate::error::Result;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// A user record as returned by a repository
///
/// No invariants are enforced: any id/name pair is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied identifier
    pub id: i64,

    /// Display name
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Data access abstraction for user records
///
/// Each implementation decides how (and whether) to validate `id`.
///
/// Usage:
///     let repo: Arc<dyn UserRepository> = Arc::new(RealUserRepository::new());
///     let user = repo.get_user(42)?;
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    /// Fetch the user with the given identifier
    ///
    /// # Errors
    /// - `RepositoryError` when the lookup cannot be satisfied
    fn get_user(&self, id: i64) -> Result<User>;
}
