//! OAuth2 클라이언트 자격증명 토큰 서비스
//!
//! Rust 기반의 OAuth 2.0 client_credentials 그랜트 토큰 발급/검증 서비스입니다.
//! HS256 서명 기반의 베어러 토큰 발급, 서버측 토큰 레지스트리(이중 인덱스),
//! 그리고 2단계 검증 프로토콜(서명 검증 + 저장소 교차 확인)을 제공합니다.
//!
//! # Features
//!
//! - **토큰 발급**: client_credentials 그랜트 기반 액세스 토큰 발급
//! - **토큰 검증**: 서명 검증과 저장소 jti 교차 확인의 2단계 프로토콜
//! - **토큰 레지스트리**: 만료 기반 정리(prune)를 수행하는 인메모리 이중 인덱스 저장소
//! - **보호된 사용자 API**: Bearer 토큰이 필요한 사용자 CRUD 데모 엔드포인트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 발급/검증 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 토큰/사용자 인메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use oauth_service_backend::config::OAuthConfig;
//! use oauth_service_backend::core::clock::SystemClock;
//! use oauth_service_backend::core::state::AppState;
//!
//! // 프로세스당 한 번 상태를 구성하고 핸들러에 주입합니다
//! let state = AppState::new(OAuthConfig::from_env(), Arc::new(SystemClock));
//! let response = state.access_control.issue_token(&request)?;
//! let claims = state.access_control.verify_bearer(&response.access_token)?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
