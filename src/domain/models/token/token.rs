//! JWT 액세스 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 발급 결과 구조체를 정의합니다.

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// RFC 7519 표준 클레임만 사용하며, 서버측 저장소와의 교차 확인을 위해
/// `jti`(토큰 고유 식별자)를 반드시 포함합니다.
///
/// ## 클레임 구성
///
/// - `iss`: 발급자
/// - `aud`: 대상 (API 식별자)
/// - `sub`: 토큰의 주체 (인증된 클라이언트 ID)
/// - `scope`: 부여된 스코프 (공백 구분 문자열, 선택사항)
/// - `jti`: 토큰 고유 식별자 (UUID v4, 저장소 기본 키)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// 발급자
    pub iss: String,
    /// 토큰 대상
    pub aud: String,
    /// 토큰의 주체 (클라이언트 ID)
    pub sub: String,
    /// 부여된 스코프
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// 토큰 고유 식별자
    pub jti: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 토큰 발급 결과
///
/// 서명된 토큰 문자열과 저장소 섀도 레코드 작성에 필요한 메타데이터를 담습니다.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// 서명된 토큰 문자열
    pub token: String,
    /// 토큰에 내장된 고유 식별자
    pub jti: String,
    /// 발급 시간 (Unix timestamp)
    pub issued_at: i64,
    /// 만료 시간 (Unix timestamp)
    pub expires_at: i64,
}
