//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, API 계약과 핵심 비즈니스 객체를 담당합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 핵심 비즈니스 객체 (User)
//! ├── DTOs      - 데이터 전송 객체 (Request/Response)
//! └── Models    - 토큰 클레임, 인증된 클라이언트 등 내부 모델
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::user::User;
pub use dto::{CreateUserRequest, TokenRequest, TokenResponse, UserResponse};
pub use models::{AccessTokenClaims, AuthenticatedClient, IssuedToken};
