//! 접근 제어 서비스 구현
//!
//! client_credentials 그랜트의 토큰 발급과 Bearer 토큰 검증을
//! 오케스트레이션하는 핵심 서비스입니다.
//!
//! ## 토큰 상태 전이 (서버 관점)
//!
//! ```text
//! Active ──(TTL 경과)──▶ Expired ──(정리)──▶ Pruned
//!   │
//!   └──(저장 레코드의 jti 변조)──▶ Mismatched  ← 검증 영구 실패
//! ```
//!
//! - **Active**: 저장소에 존재하고 클레임도 유효함
//! - **Expired**: `expires_at` 경과. 정리 또는 검증 시점에 지연 발견되며 재활성화되지 않음
//! - **Pruned**: 저장소에서 제거됨. 미확인 토큰과 구별 불가
//! - **Mismatched**: 저장 레코드의 식별자가 토큰에 내장된 식별자와 다름
//!   (외부 변조/폐기 모델링). 서명이 유효해도 검증은 영구 실패
//!
//! ## 검증 프로토콜 (2단계)
//!
//! 1. 상태 조회: 저장소에서 토큰 문자열로 레코드 검색 (정리 선행)
//! 2. 암호 검증: 서명/발급자/대상/만료 확인 후 내장 식별자를 레코드와 교차 확인
//!
//! 두 단계가 모두 통과해야 검증 성공입니다.

use std::sync::Arc;

use crate::config::OAuthConfig;
use crate::core::clock::Clock;
use crate::domain::dto::tokens::{TokenRequest, TokenResponse};
use crate::domain::models::token::AccessTokenClaims;
use crate::errors::errors::AppError;
use crate::repositories::tokens::token_repository::{StoredToken, TokenRepository};
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::clean_optional_string;

/// 그랜트 타입 상수
const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";

/// 접근 제어 오케스트레이션 서비스
///
/// 발급 경로: 클라이언트 인증 → 정리 → 서명 토큰 생성 → 섀도 레코드 저장.
/// 검증 경로: 정리 → 저장소 조회 → 서명 검증 → 식별자 교차 확인.
///
/// 시간 소스와 토큰 저장소는 생성자에서 주입되며, 이 서비스는
/// `web::Data`를 통해 프로세스당 하나의 인스턴스로 공유됩니다.
pub struct AccessControlService {
    tokens: Arc<TokenRepository>,
    signer: TokenService,
    clock: Arc<dyn Clock>,
    client_id: String,
    client_secret: String,
    default_scope: String,
    access_token_ttl: i64,
}

impl AccessControlService {
    /// 설정, 토큰 저장소, 시간 소스로 서비스를 구성합니다.
    pub fn new(config: OAuthConfig, tokens: Arc<TokenRepository>, clock: Arc<dyn Clock>) -> Self {
        let signer = TokenService::new(&config);

        Self {
            tokens,
            signer,
            clock,
            client_id: config.client_id,
            client_secret: config.client_secret,
            default_scope: config.default_scope,
            access_token_ttl: config.access_token_ttl,
        }
    }

    /// 제시된 클라이언트 자격증명 쌍을 설정값과 비교합니다.
    ///
    /// 설정상 단 하나의 클라이언트만 지원합니다 (데이터베이스 조회 없음).
    /// 값이 누락되었거나 일치하지 않으면 false를 반환하며, 절대 에러를
    /// 반환하지 않습니다.
    pub fn validate_client(&self, id: Option<&str>, secret: Option<&str>) -> bool {
        match (id, secret) {
            (Some(id), Some(secret)) => id == self.client_id && secret == self.client_secret,
            _ => false,
        }
    }

    /// client_credentials 그랜트로 액세스 토큰을 발급합니다.
    ///
    /// # 프로토콜
    ///
    /// 1. `grant_type` 누락 → `invalid_request`
    /// 2. `grant_type != client_credentials` → `unsupported_grant_type`
    /// 3. 클라이언트 식별자/시크릿 누락 → `invalid_request`
    /// 4. 클라이언트 인증 실패 → `invalid_client`
    /// 5. 현재 시각 기준 만료 토큰 정리 (무한 성장 방지)
    /// 6. 서명 토큰 생성 및 섀도 레코드 저장
    /// 7. Bearer 타입, TTL, 유효 스코프(요청 스코프 또는 설정 기본값) 반환
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidRequest` - 필수 필드 누락
    /// * `AppError::UnsupportedGrantType` - 지원하지 않는 그랜트
    /// * `AppError::InvalidClient` - 자격증명 불일치
    /// * `AppError::ServerError` - 저장소 변경 또는 서명 실패
    pub fn issue_token(&self, request: &TokenRequest) -> Result<TokenResponse, AppError> {
        let grant_type = clean_optional_string(request.grant_type.clone());
        let Some(grant_type) = grant_type else {
            return Err(AppError::InvalidRequest(
                "grant_type is required".to_string(),
            ));
        };
        if grant_type != GRANT_CLIENT_CREDENTIALS {
            return Err(AppError::UnsupportedGrantType(
                "Only client_credentials is supported".to_string(),
            ));
        }

        let client_id = clean_optional_string(request.client_id.clone());
        let client_secret = clean_optional_string(request.client_secret.clone());
        let (Some(client_id), Some(client_secret)) = (client_id, client_secret) else {
            return Err(AppError::InvalidRequest(
                "client_id and client_secret are required for client_credentials".to_string(),
            ));
        };

        if !self.validate_client(Some(&client_id), Some(&client_secret)) {
            log::warn!("클라이언트 인증 실패: client_id={}", client_id);
            return Err(AppError::InvalidClient(
                "Client authentication failed".to_string(),
            ));
        }

        let now = self.clock.now();
        self.tokens.prune_expired(now)?;

        let scope = clean_optional_string(request.scope.clone())
            .unwrap_or_else(|| self.default_scope.clone());

        let issued = self
            .signer
            .issue(&client_id, Some(&scope), now, self.access_token_ttl)?;

        self.tokens.save(StoredToken {
            token: issued.token.clone(),
            jti: issued.jti,
            sub: client_id.clone(),
            scope: Some(scope.clone()),
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
        })?;

        log::debug!("액세스 토큰 발급됨: sub={}, scope={}", client_id, scope);

        Ok(TokenResponse {
            access_token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_ttl,
            scope: Some(scope),
        })
    }

    /// Bearer 토큰을 2단계 프로토콜로 검증합니다.
    ///
    /// # 프로토콜
    ///
    /// 1. 현재 시각 기준 만료 토큰 정리
    /// 2. 토큰 문자열로 저장소 조회; 없으면 `invalid_token`.
    ///    미확인 토큰과 이미 정리된 토큰은 호출자 입장에서 구별되지 않음
    /// 3. 서명과 발급자/대상/만료 클레임 검증; 실패는 일괄 `invalid_token`
    /// 4. 검증된 페이로드의 `jti`와 저장 레코드의 `jti` 비교; 불일치 →
    ///    `invalid_token` (외부 변조로만 도달 가능한 Mismatched 상태)
    ///
    /// # Returns
    ///
    /// * `Ok(AccessTokenClaims)` - 다운스트림 인가에 사용할 검증된 클레임
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` - 미확인/만료/서명 오류/식별자 불일치
    /// * `AppError::ServerError` - 저장소 정리 실패
    pub fn verify_bearer(&self, token: &str) -> Result<AccessTokenClaims, AppError> {
        self.tokens.prune_expired(self.clock.now())?;

        let record = self
            .tokens
            .get_by_token(token)?
            .ok_or_else(|| AppError::InvalidToken("Unknown token".to_string()))?;

        let claims = self.signer.verify_signature(token)?;

        if claims.jti != record.jti {
            log::warn!("토큰 식별자 불일치: sub={}", record.sub);
            return Err(AppError::InvalidToken("Token mismatch".to_string()));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use chrono::Utc;

    const TTL: i64 = 3600;

    fn test_config() -> OAuthConfig {
        OAuthConfig {
            issuer: "http://localhost".to_string(),
            audience: "https://your.api".to_string(),
            access_token_ttl: TTL,
            client_id: "my-client".to_string(),
            client_secret: "supersecret".to_string(),
            default_scope: "read:users".to_string(),
            jwt_secret: "test-secret".to_string(),
        }
    }

    /// 서명 검증은 실제 시스템 시간으로 exp를 확인하므로
    /// 수동 시계는 현재 시각에서 시작해야 한다.
    fn test_service() -> (AccessControlService, Arc<TokenRepository>, Arc<ManualClock>) {
        let tokens = Arc::new(TokenRepository::new());
        let clock = Arc::new(ManualClock::new(Utc::now().timestamp()));
        let service = AccessControlService::new(
            test_config(),
            Arc::clone(&tokens),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );
        (service, tokens, clock)
    }

    fn valid_request() -> TokenRequest {
        TokenRequest::client_credentials("my-client", "supersecret", Some("read:users"))
    }

    #[test]
    fn test_issue_then_verify_succeeds() {
        let (service, tokens, _clock) = test_service();

        let response = service.issue_token(&valid_request()).unwrap();
        assert!(!response.access_token.is_empty());
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, TTL);
        assert_eq!(response.scope.as_deref(), Some("read:users"));
        assert_eq!(tokens.len().unwrap(), 1);

        let claims = service.verify_bearer(&response.access_token).unwrap();
        assert_eq!(claims.sub, "my-client");
        assert_eq!(claims.scope.as_deref(), Some("read:users"));
    }

    #[test]
    fn test_verified_claims_match_issuance_inputs() {
        let (service, _tokens, _clock) = test_service();

        let request =
            TokenRequest::client_credentials("my-client", "supersecret", Some("read:users write:users"));
        let response = service.issue_token(&request).unwrap();

        // 발급 시 제공한 값이 검증 후에도 그대로여야 함 (무단 변형 없음)
        let claims = service.verify_bearer(&response.access_token).unwrap();
        assert_eq!(claims.sub, "my-client");
        assert_eq!(claims.scope.as_deref(), Some("read:users write:users"));
    }

    #[test]
    fn test_missing_scope_falls_back_to_default() {
        let (service, _tokens, _clock) = test_service();

        let request = TokenRequest::client_credentials("my-client", "supersecret", None);
        let response = service.issue_token(&request).unwrap();

        assert_eq!(response.scope.as_deref(), Some("read:users"));
    }

    #[test]
    fn test_missing_grant_type_is_invalid_request() {
        let (service, _tokens, _clock) = test_service();

        let mut request = valid_request();
        request.grant_type = None;

        let err = service.issue_token(&request).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_unknown_grant_type_is_rejected_regardless_of_credentials() {
        let (service, _tokens, _clock) = test_service();

        let mut request = valid_request();
        request.grant_type = Some("authorization_code".to_string());

        let err = service.issue_token(&request).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedGrantType(_)));
    }

    #[test]
    fn test_missing_credentials_is_invalid_request() {
        let (service, _tokens, _clock) = test_service();

        let mut request = valid_request();
        request.client_secret = None;

        let err = service.issue_token(&request).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_wrong_secret_is_invalid_client_regardless_of_scope() {
        let (service, _tokens, _clock) = test_service();

        let request =
            TokenRequest::client_credentials("my-client", "wrong-secret", Some("read:users"));

        let err = service.issue_token(&request).unwrap_err();
        assert!(matches!(err, AppError::InvalidClient(_)));
    }

    #[test]
    fn test_validate_client_handles_missing_values() {
        let (service, _tokens, _clock) = test_service();

        assert!(service.validate_client(Some("my-client"), Some("supersecret")));
        assert!(!service.validate_client(Some("my-client"), Some("wrong")));
        assert!(!service.validate_client(None, Some("supersecret")));
        assert!(!service.validate_client(Some("my-client"), None));
        assert!(!service.validate_client(None, None));
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let (service, _tokens, _clock) = test_service();

        let err = service.verify_bearer("no-such-token").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[test]
    fn test_verification_after_ttl_fails() {
        let (service, tokens, clock) = test_service();

        let response = service.issue_token(&valid_request()).unwrap();
        assert!(service.verify_bearer(&response.access_token).is_ok());

        // TTL + 1초 경과: 검증 진입 시 정리로 레코드가 사라져야 함
        clock.advance(TTL + 1);

        let err = service.verify_bearer(&response.access_token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
        assert_eq!(tokens.len().unwrap(), 0);
    }

    #[test]
    fn test_expired_token_never_reactivates() {
        let (service, _tokens, clock) = test_service();

        let response = service.issue_token(&valid_request()).unwrap();
        clock.advance(TTL + 1);
        assert!(service.verify_bearer(&response.access_token).is_err());

        // 시계를 다시 되돌려도 정리된 토큰은 되살아나지 않음
        clock.advance(-(TTL + 1));
        assert!(service.verify_bearer(&response.access_token).is_err());
    }

    #[test]
    fn test_issuance_prunes_expired_records() {
        let (service, tokens, clock) = test_service();

        service.issue_token(&valid_request()).unwrap();
        assert_eq!(tokens.len().unwrap(), 1);

        clock.advance(TTL + 1);

        // 다음 발급이 만료 레코드를 기회적으로 정리해야 함
        service.issue_token(&valid_request()).unwrap();
        assert_eq!(tokens.len().unwrap(), 1);
    }

    #[test]
    fn test_tampered_jti_fails_verification_before_expiry() {
        let (service, tokens, _clock) = test_service();

        let response = service.issue_token(&valid_request()).unwrap();
        assert!(service.verify_bearer(&response.access_token).is_ok());

        // 저장 레코드의 식별자 변조 (폐기/손상 시뮬레이션)
        assert!(tokens.overwrite_jti(&response.access_token, "tampered").unwrap());

        // 시계가 만료 전이고 서명도 유효하지만 검증은 영구 실패해야 함
        let err = service.verify_bearer(&response.access_token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));

        let err = service.verify_bearer(&response.access_token).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }
}
