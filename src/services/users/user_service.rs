//! 사용자 관리 서비스 구현
//!
//! 보호된 사용자 API의 비즈니스 로직을 담당합니다.
//! 데모 수준의 단순한 CRUD이며, 접근 제어의 피검증 대상(보호 리소스)
//! 역할을 합니다.

use std::sync::Arc;

use crate::domain::dto::users::{request::CreateUserRequest, response::UserResponse};
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserRepository;
use crate::utils::string_utils::validate_required_string;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repository: Arc<UserRepository>,
}

impl UserService {
    /// 리포지토리를 주입받아 서비스를 생성합니다.
    pub fn new(user_repository: Arc<UserRepository>) -> Self {
        Self { user_repository }
    }

    /// 모든 사용자를 조회합니다.
    pub fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repository.list()?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없는 경우
    pub fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        self.user_repository
            .get(id)?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 입력 문자열의 앞뒤 공백을 정리한 뒤 저장합니다.
    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let email = validate_required_string(&request.email, "email")?;
        let name = validate_required_string(&request.name, "name")?;

        let user = self.user_repository.create(User::new(email, name))?;
        Ok(UserResponse::from(user))
    }
}
