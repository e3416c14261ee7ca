//! JWT 토큰 서명/검증 서비스 구현
//!
//! HMAC-SHA256 서명을 사용하여 자기완결형(self-contained) 액세스 토큰을
//! 생성하고 검증합니다. 알고리즘과 시크릿, 발급자/대상 클레임 정책은 모두
//! 설정값이며 이 서비스는 설정된 키 외의 상태를 갖지 않습니다.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::OAuthConfig;
use crate::domain::models::token::{AccessTokenClaims, IssuedToken};
use crate::errors::errors::{AppError, ErrorContext};

/// JWT 토큰 서명/검증 서비스
///
/// 발급 시 매번 새로운 UUID v4 `jti`를 생성하여 클레임에 내장합니다.
/// 검증은 서명, 발급자, 대상, 만료를 모두 확인하며 허용 오차(leeway)는
/// 0초로 설정하여 저장소측 만료 판정과 경계가 일치하도록 합니다.
pub struct TokenService {
    issuer: String,
    audience: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// 설정으로부터 서명/검증 키와 검증 정책을 구성합니다.
    pub fn new(config: &OAuthConfig) -> Self {
        let mut validation = Validation::default();
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = 0;

        Self {
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// 서명된 액세스 토큰을 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `subject` - 토큰의 주체 (인증된 클라이언트 ID)
    /// * `scope` - 부여할 스코프 (선택사항)
    /// * `now` - 발급 기준 시각 (seconds since epoch, 주입된 시계에서 공급)
    /// * `ttl` - 토큰 수명 (초)
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - 서명된 토큰과 저장소 레코드용 메타데이터
    ///
    /// # Errors
    ///
    /// * `AppError::ServerError` - 서명 실패
    pub fn issue(
        &self,
        subject: &str,
        scope: Option<&str>,
        now: i64,
        ttl: i64,
    ) -> Result<IssuedToken, AppError> {
        let jti = Uuid::new_v4().to_string();
        let expires_at = now + ttl;

        let claims = AccessTokenClaims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: subject.to_string(),
            scope: scope.map(|s| s.to_string()),
            jti: jti.clone(),
            iat: now,
            exp: expires_at,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .context("JWT 토큰 서명 실패")?;

        Ok(IssuedToken {
            token,
            jti,
            issued_at: now,
            expires_at,
        })
    }

    /// 토큰의 서명과 클레임을 검증합니다.
    ///
    /// 서명, 발급자, 대상, 만료를 확인합니다. 클레임상 만료는 저장소측
    /// 정리와는 독립적인 유효한 거부 사유입니다.
    ///
    /// # Returns
    ///
    /// * `Ok(AccessTokenClaims)` - 검증된 클레임
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 서명/발급자/대상/만료 검증 실패 (사유 불문 단일 종류)
    pub fn verify_signature(&self, token: &str) -> Result<AccessTokenClaims, AppError> {
        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::InvalidToken("Token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::InvalidToken("Invalid issuer".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                    AppError::InvalidToken("Invalid audience".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::InvalidToken("Invalid signature".to_string())
                }
                _ => AppError::InvalidToken(format!("Token verification failed: {}", e)),
            })
    }
}
