//! 애플리케이션 상태 구성
//!
//! 토큰 저장소, 시간 소스, 서비스들을 프로세스당 한 번 구성하여
//! `actix_web::web::Data`로 핸들러와 미들웨어에 주입합니다.
//! 숨겨진 전역 상태 없이 모든 의존성이 이 구조체를 통해 흐르므로
//! 테스트에서 저장소와 시계를 자유롭게 교체할 수 있습니다.

use std::sync::Arc;

use crate::config::OAuthConfig;
use crate::core::clock::{Clock, SystemClock};
use crate::repositories::tokens::token_repository::TokenRepository;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::access_control_service::AccessControlService;
use crate::services::users::user_service::UserService;

/// 프로세스 전역 애플리케이션 상태
///
/// 발급/검증 경로가 공유하는 유일한 가변 자원은 토큰 저장소이며,
/// `tokens` 핸들은 테스트의 결함 주입(식별자 덮어쓰기)을 위해 노출됩니다.
pub struct AppState {
    /// 발급/검증 오케스트레이션 서비스
    pub access_control: Arc<AccessControlService>,
    /// 사용자 비즈니스 로직 서비스
    pub users: Arc<UserService>,
    /// 서버측 토큰 레지스트리 (access_control과 동일 인스턴스)
    pub tokens: Arc<TokenRepository>,
}

impl AppState {
    /// 설정과 시간 소스로 상태를 구성합니다.
    ///
    /// # Arguments
    ///
    /// * `config` - OAuth 발급/검증 설정
    /// * `clock` - 주입할 시간 소스 (운영: `SystemClock`, 테스트: `ManualClock`)
    pub fn new(config: OAuthConfig, clock: Arc<dyn Clock>) -> Self {
        let tokens = Arc::new(TokenRepository::new());
        let access_control = Arc::new(AccessControlService::new(
            config,
            Arc::clone(&tokens),
            clock,
        ));
        let users = Arc::new(UserService::new(Arc::new(UserRepository::with_seed_data())));

        Self {
            access_control,
            users,
            tokens,
        }
    }

    /// 환경 변수 설정과 시스템 시계로 상태를 구성합니다.
    pub fn from_env() -> Self {
        Self::new(OAuthConfig::from_env(), Arc::new(SystemClock))
    }
}
