// Mock test helpers and common mock patterns
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let mut mock = create_mock_repository();
//     let service = UserService::new(Arc::new(mock));

#[cfg(test)]
pub mod test_helpers {
    use super::super::traits::*;
    use crate::error::UserDirectoryError;

    /// Name handed out by create_mock_repository
    pub const TEST_USER_NAME: &str = "Test User";

    /// Create a mock repository that resolves every id
    ///
    /// Default behavior:
    /// - get_user(id) returns User { id, name: TEST_USER_NAME }
    pub fn create_mock_repository() -> MockUserRepository {
        let mut mock = MockUserRepository::new();

        mock.expect_get_user()
            .returning(|id| Ok(User::new(id, TEST_USER_NAME)));

        mock
    }

    /// Create a mock repository whose lookups always fail
    pub fn create_failing_repository(message: &str) -> MockUserRepository {
        let mut mock = MockUserRepository::new();
        let message = message.to_string();

        mock.expect_get_user()
            .returning(move |_| Err(UserDirectoryError::RepositoryError(message.clone())));

        mock
    }

    /// Create a test User
    pub fn create_test_user(id: i64) -> User {
        User::new(id, format!("Test User {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::traits::*;
    use super::test_helpers::*;

    #[test]
    fn test_create_mock_repository() {
        let mock = create_mock_repository();
        let user = mock.get_user(3).unwrap();
        assert_eq!(user, User::new(3, TEST_USER_NAME));
    }

    #[test]
    fn test_create_failing_repository() {
        let mock = create_failing_repository("boom");
        let err = mock.get_user(3).unwrap_err();
        assert_eq!(err.to_string(), "Repository error: boom");
    }

    #[test]
    fn test_create_test_user() {
        let user = create_test_user(12);
        assert_eq!(user.id, 12);
        assert_eq!(user.name, "Test User 12");
    }
}
