//! 토큰 발급 응답 DTO
//!
//! RFC 6749 §5.1의 토큰 응답 형식을 따릅니다.

use serde::{Deserialize, Serialize};

/// 토큰 발급 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// 발급된 액세스 토큰 (서명된 JWT)
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 토큰 수명 (초)
    pub expires_in: i64,
    /// 부여된 스코프
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
