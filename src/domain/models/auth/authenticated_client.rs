use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::AccessTokenClaims;

/// 검증된 Bearer 토큰에서 추출된 클라이언트 정보
///
/// 인증 미들웨어가 검증을 마친 뒤 request extensions에 저장하며,
/// 핸들러에서는 extractor로 꺼내 사용합니다. 스코프는 전달만 할 뿐
/// 권한 집행에는 사용하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedClient {
    /// 인증된 클라이언트 ID (토큰의 `sub` 클레임)
    pub client_id: String,

    /// 부여된 스코프 (공백 구분 문자열)
    pub scope: Option<String>,

    /// 토큰 고유 식별자
    pub jti: String,
}

impl AuthenticatedClient {
    /// 스코프 문자열을 개별 스코프 목록으로 분해합니다.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|s| s.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// 특정 스코프를 보유하고 있는지 확인
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes().contains(&scope)
    }
}

impl From<AccessTokenClaims> for AuthenticatedClient {
    fn from(claims: AccessTokenClaims) -> Self {
        Self {
            client_id: claims.sub,
            scope: claims.scope,
            jti: claims.jti,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedClient {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedClient>() {
            Some(client) => ready(Ok(client.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}
