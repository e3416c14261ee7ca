pub mod token;

pub use token::{AccessTokenClaims, IssuedToken};
