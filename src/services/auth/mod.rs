//! 인증 서비스 모듈
//!
//! - [`token_service`] - HS256 서명 기반의 토큰 생성/검증
//! - [`access_control_service`] - 발급/검증 프로토콜 오케스트레이션

pub mod token_service;
pub mod access_control_service;

pub use token_service::TokenService;
pub use access_control_service::AccessControlService;
