// Stand-in repository for production wiring
//
// No storage is touched. Every lookup synthesises a record on the spot,
// echoing the requested id with a fixed name. Swap in a real store by
// implementing UserRepository; UserService does not change.

use super::traits::{User, UserRepository};
use crate::error::Result;

/// Name returned by RealUserRepository for every lookup
pub const REAL_USER_NAME: &str = "Real User";

/// Repository that always "finds" the requested user
///
/// Never fails. Repeated lookups for the same id return equal records.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealUserRepository;

impl RealUserRepository {
    pub fn new() -> Self {
        Self
    }
}

impl UserRepository for RealUserRepository {
    fn get_user(&self, id: i64) -> Result<User> {
        tracing::debug!("RealUserRepository lookup for id {}", id);
        Ok(User::new(id, REAL_USER_NAME))
    }
}
