pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
