//! 발급된 토큰의 서버측 레지스트리
//!
//! 발급된 모든 액세스 토큰의 섀도 레코드를 이중 인덱스로 관리합니다:
//!
//! - `by_jti`: 레코드를 소유하는 기본 맵 (jti → 레코드)
//! - `by_token`: 토큰 문자열 → jti 조회 맵
//!
//! 두 인덱스는 항상 함께 삽입/삭제되며, 모든 변경은 단일 뮤텍스 아래의
//! `save`/`prune_expired`/`clear`를 통해서만 이뤄집니다. 원시 맵 핸들은
//! 절대 외부에 노출하지 않습니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::errors::errors::{AppError, AppResult};

/// 발급된 토큰 하나의 서버측 섀도 레코드
///
/// 발급 성공 시에만 생성되며, 정리(prune)로 삭제되거나
/// 테스트 훅 `overwrite_jti`로 식별자가 변조되는 것 외에는 불변입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    /// 서명된 토큰 문자열 전체
    pub token: String,
    /// 토큰에 내장된 고유 식별자 (기본 키)
    pub jti: String,
    /// 인증된 클라이언트 ID
    pub sub: String,
    /// 부여된 스코프 (공백 구분 문자열)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// 발급 시간 (Unix timestamp)
    pub issued_at: i64,
    /// 만료 시간 (Unix timestamp)
    pub expires_at: i64,
}

/// 이중 인덱스 본체. 뮤텍스 내부에서만 접근합니다.
#[derive(Debug, Default)]
struct TokenIndex {
    /// 레코드를 소유하는 기본 맵 (jti 키)
    by_jti: HashMap<String, StoredToken>,
    /// 토큰 문자열 → jti 조회 맵
    by_token: HashMap<String, String>,
}

/// 발급 토큰 레지스트리
///
/// 발급/검증 경로가 공유하는 유일한 가변 자원입니다.
/// 두 인덱스의 일관성은 단일 락으로 보장합니다. 정리는 전체 순회(O(n))이며
/// 발급과 검증마다 호출됩니다. 소규모에서는 충분하고, 규모가 커지면
/// 시간순 구조로 교체해야 하는 알려진 한계입니다.
#[derive(Debug, Default)]
pub struct TokenRepository {
    index: Mutex<TokenIndex>,
}

impl TokenRepository {
    /// 빈 레지스트리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 레코드를 두 인덱스에 삽입합니다.
    ///
    /// 동일한 `jti` 또는 `token`을 가진 기존 레코드가 있으면 양쪽 인덱스에서
    /// 먼저 제거한 뒤 삽입합니다. 재발급은 기대되는 흐름이 아니지만
    /// 인덱스가 깨져서는 안 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ServerError` - 락 오염 (저장소 변경 실패는 요청에 치명적)
    pub fn save(&self, record: StoredToken) -> AppResult<()> {
        let mut index = self.lock()?;

        if let Some(previous) = index.by_jti.remove(&record.jti) {
            index.by_token.remove(&previous.token);
        }
        if let Some(previous_jti) = index.by_token.remove(&record.token) {
            index.by_jti.remove(&previous_jti);
        }

        index.by_token.insert(record.token.clone(), record.jti.clone());
        index.by_jti.insert(record.jti.clone(), record);
        Ok(())
    }

    /// 토큰 문자열로 레코드를 조회합니다 (O(1)).
    pub fn get_by_token(&self, token: &str) -> AppResult<Option<StoredToken>> {
        let index = self.lock()?;

        Ok(index
            .by_token
            .get(token)
            .and_then(|jti| index.by_jti.get(jti))
            .cloned())
    }

    /// `expires_at <= now`인 모든 레코드를 양쪽 인덱스에서 제거합니다.
    ///
    /// 만료 레코드가 없으면 아무 일도 하지 않습니다.
    ///
    /// # Returns
    ///
    /// 제거된 레코드 수
    pub fn prune_expired(&self, now: i64) -> AppResult<usize> {
        let mut index = self.lock()?;

        let expired: Vec<String> = index
            .by_jti
            .values()
            .filter(|record| record.expires_at <= now)
            .map(|record| record.jti.clone())
            .collect();

        for jti in &expired {
            if let Some(record) = index.by_jti.remove(jti) {
                index.by_token.remove(&record.token);
            }
        }

        if !expired.is_empty() {
            log::debug!("만료 토큰 {}건 정리됨", expired.len());
        }
        Ok(expired.len())
    }

    /// 양쪽 인덱스를 모두 비웁니다 (테스트/리셋 훅).
    pub fn clear(&self) -> AppResult<()> {
        let mut index = self.lock()?;
        index.by_jti.clear();
        index.by_token.clear();
        Ok(())
    }

    /// 저장된 레코드 수를 반환합니다.
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.by_jti.len())
    }

    /// 레지스트리가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.lock()?.by_jti.is_empty())
    }

    /// 저장된 레코드의 `jti` 필드를 덮어씁니다 (결함 주입 전용 테스트 훅).
    ///
    /// 폐기/손상된 토큰을 시뮬레이션합니다. 인덱스 키는 그대로 두고
    /// 레코드에 내장된 식별자만 바꾸므로, 토큰 문자열로는 여전히 조회되지만
    /// 이후 모든 검증은 식별자 불일치로 영구히 실패합니다.
    ///
    /// # Returns
    ///
    /// * `true` - 해당 토큰의 레코드를 찾아 덮어쓴 경우
    /// * `false` - 토큰이 저장소에 없는 경우
    pub fn overwrite_jti(&self, token: &str, new_jti: &str) -> AppResult<bool> {
        let mut index = self.lock()?;

        let Some(jti_key) = index.by_token.get(token).cloned() else {
            return Ok(false);
        };

        match index.by_jti.get_mut(&jti_key) {
            Some(record) => {
                record.jti = new_jti.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, TokenIndex>> {
        self.index
            .lock()
            .map_err(|_| AppError::ServerError("token index lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(token: &str, jti: &str, expires_at: i64) -> StoredToken {
        StoredToken {
            token: token.to_string(),
            jti: jti.to_string(),
            sub: "my-client".to_string(),
            scope: Some("read:users".to_string()),
            issued_at: 0,
            expires_at,
        }
    }

    #[test]
    fn test_save_and_get_by_token() {
        let repo = TokenRepository::new();
        repo.save(record("token-a", "jti-a", 100)).unwrap();

        let found = repo.get_by_token("token-a").unwrap().unwrap();
        assert_eq!(found.jti, "jti-a");
        assert_eq!(found.sub, "my-client");

        assert!(repo.get_by_token("token-b").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_same_jti_without_corrupting_indices() {
        let repo = TokenRepository::new();
        repo.save(record("token-a", "jti-a", 100)).unwrap();
        repo.save(record("token-b", "jti-a", 200)).unwrap();

        // 같은 jti의 이전 토큰 문자열은 양쪽 인덱스에서 사라져야 함
        assert!(repo.get_by_token("token-a").unwrap().is_none());
        let found = repo.get_by_token("token-b").unwrap().unwrap();
        assert_eq!(found.expires_at, 200);
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn test_save_overwrites_same_token_without_corrupting_indices() {
        let repo = TokenRepository::new();
        repo.save(record("token-a", "jti-a", 100)).unwrap();
        repo.save(record("token-a", "jti-b", 200)).unwrap();

        let found = repo.get_by_token("token-a").unwrap().unwrap();
        assert_eq!(found.jti, "jti-b");
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn test_prune_expired_removes_from_both_indices() {
        let repo = TokenRepository::new();
        repo.save(record("token-a", "jti-a", 100)).unwrap();
        repo.save(record("token-b", "jti-b", 200)).unwrap();

        // 경계값: expires_at == now 도 만료로 취급
        let pruned = repo.prune_expired(100).unwrap();
        assert_eq!(pruned, 1);

        assert!(repo.get_by_token("token-a").unwrap().is_none());
        assert!(repo.get_by_token("token-b").unwrap().is_some());
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[test]
    fn test_prune_with_no_expired_entries_is_noop() {
        let repo = TokenRepository::new();
        repo.save(record("token-a", "jti-a", 100)).unwrap();

        let pruned = repo.prune_expired(50).unwrap();
        assert_eq!(pruned, 0);
        assert_eq!(repo.len().unwrap(), 1);

        // 빈 저장소에서도 안전해야 함
        repo.clear().unwrap();
        assert_eq!(repo.prune_expired(1_000).unwrap(), 0);
    }

    #[test]
    fn test_clear_empties_both_indices() {
        let repo = TokenRepository::new();
        repo.save(record("token-a", "jti-a", 100)).unwrap();
        repo.save(record("token-b", "jti-b", 200)).unwrap();

        repo.clear().unwrap();
        assert!(repo.is_empty().unwrap());
        assert!(repo.get_by_token("token-a").unwrap().is_none());
    }

    #[test]
    fn test_overwrite_jti_mutates_record_but_keeps_lookup() {
        let repo = TokenRepository::new();
        repo.save(record("token-a", "jti-a", 100)).unwrap();

        assert!(repo.overwrite_jti("token-a", "tampered").unwrap());

        // 토큰 문자열로는 여전히 조회되지만 내장 식별자는 달라져 있어야 함
        let found = repo.get_by_token("token-a").unwrap().unwrap();
        assert_eq!(found.jti, "tampered");
    }

    #[test]
    fn test_overwrite_jti_on_unknown_token_returns_false() {
        let repo = TokenRepository::new();
        assert!(!repo.overwrite_jti("missing", "whatever").unwrap());
    }
}
