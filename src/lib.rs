// Library interface for user-directory
// Exposes the repository/service layer so it can be:
// - Wired by the binary in src/main.rs
// - Exercised from integration tests with substitute repositories

pub mod app_builder;
pub mod error;
pub mod runner;
pub mod services;

// Re-export commonly used types for convenience
pub use app_builder::{AppBuilder, AppDependencies};
pub use error::{Result, UserDirectoryError};
pub use runner::report_user_name;
pub use services::{RealUserRepository, User, UserRepository, UserService, REAL_USER_NAME};
