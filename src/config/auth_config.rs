//! # Authentication Configuration Module
//!
//! OAuth 클라이언트 자격증명과 JWT 서명 관련 설정을 관리하는 모듈입니다.
//! 토큰 발급/검증에 필요한 모든 값(발급자, 대상, TTL, 시크릿)을
//! 환경 변수에서 읽어 하나의 구조체로 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 서명 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_ISSUER="http://localhost"
//! export JWT_AUDIENCE="https://your.api"
//! export ACCESS_TOKEN_TTL="3600"
//! ```
//!
//! ### 클라이언트 자격증명 설정
//! ```bash
//! export CLIENT_ID="my-client"
//! export CLIENT_SECRET="supersecret"
//! export CLIENT_SCOPE="read:users"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::OAuthConfig;
//!
//! // 프로세스 시작 시 한 번 읽어서 서비스에 주입
//! let config = OAuthConfig::from_env();
//! let service = AccessControlService::new(config, tokens, clock);
//! ```

use std::env;

use crate::config::data_config::Environment;

/// OAuth 토큰 발급/검증 설정
///
/// 서명 알고리즘은 HS256 고정이며 시크릿과 클레임 정책(발급자, 대상, TTL)은
/// 모두 설정값입니다. 단일 클라이언트만 지원하므로 자격증명 쌍도 설정으로
/// 관리합니다 (데이터베이스 조회 없음).
///
/// 테스트에서는 `from_env` 대신 구조체를 직접 구성하여 시크릿과 TTL을
/// 자유롭게 제어할 수 있습니다.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// 토큰 `iss` 클레임 값
    pub issuer: String,
    /// 토큰 `aud` 클레임 값
    pub audience: String,
    /// 액세스 토큰 수명 (초)
    pub access_token_ttl: i64,
    /// 허용된 클라이언트 식별자
    pub client_id: String,
    /// 허용된 클라이언트 시크릿
    pub client_secret: String,
    /// 요청에 scope가 없을 때 부여하는 기본 스코프
    pub default_scope: String,
    /// HS256 서명 시크릿
    pub jwt_secret: String,
}

impl OAuthConfig {
    /// 환경 변수에서 설정을 읽어옵니다.
    ///
    /// 모든 값에 개발용 기본값이 있습니다. 운영 환경에서 기본 JWT 시크릿을
    /// 그대로 사용하면 경고 로그가 출력됩니다.
    ///
    /// # 환경 변수
    ///
    /// | 변수 | 기본값 |
    /// |------|--------|
    /// | `JWT_ISSUER` | `http://localhost` |
    /// | `JWT_AUDIENCE` | `https://your.api` |
    /// | `ACCESS_TOKEN_TTL` | `3600` |
    /// | `CLIENT_ID` | `my-client` |
    /// | `CLIENT_SECRET` | `supersecret` |
    /// | `CLIENT_SCOPE` | `read:users` |
    /// | `JWT_SECRET` | `dev-secret-change-me` |
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if Environment::current() == Environment::Production {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            }
            "dev-secret-change-me".to_string()
        });

        Self {
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "http://localhost".to_string()),
            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "https://your.api".to_string()),
            access_token_ttl: env::var("ACCESS_TOKEN_TTL")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            client_id: env::var("CLIENT_ID").unwrap_or_else(|_| "my-client".to_string()),
            client_secret: env::var("CLIENT_SECRET").unwrap_or_else(|_| "supersecret".to_string()),
            default_scope: env::var("CLIENT_SCOPE").unwrap_or_else(|_| "read:users".to_string()),
            jwt_secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        // 환경 변수가 없을 때 개발용 기본값이 적용되는지 확인
        let config = OAuthConfig::from_env();

        assert!(config.access_token_ttl > 0);
        assert!(!config.client_id.is_empty());
        assert!(!config.client_secret.is_empty());
        assert!(!config.jwt_secret.is_empty());
        assert!(!config.default_scope.is_empty());
    }
}
