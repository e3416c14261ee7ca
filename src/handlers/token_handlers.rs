//! # OAuth 토큰 엔드포인트 핸들러
//!
//! client_credentials 그랜트의 토큰 발급 HTTP 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/oauth/tokens` | 토큰 발급 (form-encoded) | 200 OK |
//!
//! ## 에러 응답
//!
//! | 상황 | 종류 | 상태 코드 |
//! |------|------|-----------|
//! | grant_type 누락 | `invalid_request` | 400 |
//! | 지원하지 않는 그랜트 | `unsupported_grant_type` | 400 |
//! | 자격증명 누락 | `invalid_request` | 400 |
//! | 자격증명 불일치 | `invalid_client` | 401 (+ WWW-Authenticate) |

use actix_web::{post, web, HttpResponse};

use crate::core::state::AppState;
use crate::domain::dto::tokens::TokenRequest;
use crate::errors::errors::AppError;

/// 토큰 발급 핸들러
///
/// 클라이언트 자격증명을 Bearer 액세스 토큰으로 교환합니다.
///
/// # 요청 (application/x-www-form-urlencoded)
///
/// ```text
/// grant_type=client_credentials&client_id=my-client&client_secret=supersecret&scope=read:users
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "Bearer",
///   "expires_in": 3600,
///   "scope": "read:users"
/// }
/// ```
#[post("/tokens")]
pub async fn issue_token(
    state: web::Data<AppState>,
    form: web::Form<TokenRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.access_control.issue_token(&form)?;
    Ok(HttpResponse::Ok().json(response))
}
