pub mod tokens;
pub mod users;

// 공통 re-exports
pub use tokens::{TokenRequest, TokenResponse};
pub use users::{CreateUserRequest, UserResponse};
