//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### Bearer 인증 미들웨어 (BearerAuth)
//! - Authorization 헤더에서 Bearer 토큰 추출
//! - 접근 제어 서비스의 2단계 검증 프로토콜 위임
//! - 검증된 클라이언트 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::BearerAuth;
//!
//! App::new()
//!     .service(
//!         web::scope("/users")
//!             .wrap(BearerAuth) // 보호된 라우트에 인증 적용
//!             .route("", web::get().to(list_users))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::BearerAuth;
