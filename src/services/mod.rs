// Service layer for dependency injection and testability
//
// Design Decision: Ports and adapters with constructor injection
//
// - UserRepository is the port (trait in traits.rs)
// - RealUserRepository is the production adapter
// - UserService holds the business logic and depends only on the port
//
// Usage Example:
//     // Production code
//     let repo = Arc::new(RealUserRepository::new());
//     let service = UserService::new(repo);
//     let name = service.get_user_name(1)?;
//
//     // Test code
//     let mock = Arc::new(MockUserRepository::new());
//     let service = UserService::new(mock);

#[cfg(test)]
pub mod mocks;
pub mod repository;
pub mod traits;
pub mod user_service;

// Re-export commonly used types
pub use repository::{RealUserRepository, REAL_USER_NAME};
pub use traits::{User, UserRepository};
pub use user_service::UserService;
