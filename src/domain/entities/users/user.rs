//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 보호된 사용자 API가 다루는 데모용 인메모리 사용자 모델을 제공합니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 시스템의 사용자를 표현하는 도메인 엔티티입니다.
/// 영속 저장소 없이 인메모리 레지스트리에만 존재합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID
    pub id: String,
    /// 사용자 이메일
    pub email: String,
    /// 사용자 이름
    pub name: String,
}

impl User {
    /// 새 사용자를 생성합니다.
    ///
    /// ID는 UUID v4로 자동 생성됩니다.
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
        }
    }

    /// 지정된 ID로 사용자를 생성합니다 (시드 데이터용).
    pub fn with_id(id: String, email: String, name: String) -> Self {
        Self { id, email, name }
    }
}
