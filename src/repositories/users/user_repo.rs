//! 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 데모 목적의 인메모리 맵을 저장소로 사용합니다 (영속성 없음).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당합니다.
/// 토큰 레지스트리와 동일하게 단일 뮤텍스로 가변 상태를 보호합니다.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl UserRepository {
    /// 빈 리포지토리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 데모 사용자 한 명이 시드된 리포지토리를 생성합니다.
    pub fn with_seed_data() -> Self {
        let repo = Self::new();
        let seeded = User::with_id(
            "a12f5bd2-5c1a-4f6e-9b3d-7e8a2c4d6f01".to_string(),
            "mona.lisa@example.com".to_string(),
            "Mona Lisa".to_string(),
        );

        if let Ok(mut users) = repo.users.lock() {
            users.insert(seeded.id.clone(), seeded);
        }
        repo
    }

    /// 모든 사용자를 반환합니다.
    pub fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    /// ID로 사용자를 조회합니다.
    pub fn get(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.lock()?.get(id).cloned())
    }

    /// 새 사용자를 저장합니다.
    pub fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.lock()?;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, User>>> {
        self.users
            .lock()
            .map_err(|_| AppError::ServerError("user store lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data_contains_demo_user() {
        let repo = UserRepository::with_seed_data();
        let users = repo.list().unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "mona.lisa@example.com");
    }

    #[test]
    fn test_create_then_get() {
        let repo = UserRepository::new();
        let user = User::new("new@example.com".to_string(), "New User".to_string());
        let id = user.id.clone();

        repo.create(user).unwrap();

        let found = repo.get(&id).unwrap().unwrap();
        assert_eq!(found.email, "new@example.com");
    }

    #[test]
    fn test_get_unknown_user_returns_none() {
        let repo = UserRepository::new();
        assert!(repo.get("missing").unwrap().is_none());
    }
}
