//! 토큰 발급 요청 DTO
//!
//! `POST /oauth/tokens` 엔드포인트의 form-encoded 요청 본문을 정의합니다.

use serde::Deserialize;

/// 토큰 발급 요청 (RFC 6749 §4.4 Client Credentials Grant)
///
/// 모든 필드를 Option으로 받아 누락 여부를 서비스 계층에서 판정합니다.
/// 필드 누락은 역직렬화 실패가 아니라 `invalid_request` 분류 대상이기 때문입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    /// 그랜트 타입 ("client_credentials"만 지원)
    pub grant_type: Option<String>,
    /// 클라이언트 식별자
    pub client_id: Option<String>,
    /// 클라이언트 시크릿
    pub client_secret: Option<String>,
    /// 요청 스코프 (공백 구분 문자열, 선택사항)
    pub scope: Option<String>,
}

impl TokenRequest {
    /// client_credentials 그랜트 요청을 생성합니다 (테스트 편의용).
    pub fn client_credentials(client_id: &str, client_secret: &str, scope: Option<&str>) -> Self {
        Self {
            grant_type: Some("client_credentials".to_string()),
            client_id: Some(client_id.to_string()),
            client_secret: Some(client_secret.to_string()),
            scope: scope.map(|s| s.to_string()),
        }
    }
}
