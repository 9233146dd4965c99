//! SQLite 저장소 어댑터.
//!
//! `local_storage` 테이블 위의 키-값 API와 `TokenStore` 포트 구현.
//!
//! # 모듈 구조
//! - `token`: 세션 토큰 저장 (TokenStore 포트)

mod token;

use rsvp_core::error::CoreError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::migration;

/// SQLite 키-값 저장소 — `TokenStore` 포트 구현
pub struct SqliteStorage {
    pub(super) conn: Mutex<Connection>,
    pub(super) token_key: String,
}

impl SqliteStorage {
    /// 파일 기반 SQLite 저장소 생성
    ///
    /// 상위 디렉토리가 없으면 생성한다.
    pub fn open(path: &Path, token_key: &str) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Storage(format!("데이터 디렉토리 생성 실패: {}: {e}", parent.display()))
                })?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| CoreError::Storage(format!("SQLite 열기 실패: {e}")))?;

        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            ",
        )
        .map_err(|e| CoreError::Storage(format!("PRAGMA 설정 실패: {e}")))?;

        migration::run_migrations(&conn)
            .map_err(|e| CoreError::Storage(format!("마이그레이션 실패: {e}")))?;

        info!("SQLite 저장소 초기화: {}", path.display());

        Ok(Self {
            conn: Mutex::new(conn),
            token_key: token_key.to_string(),
        })
    }

    /// 인메모리 SQLite 저장소 생성 (테스트용)
    pub fn open_in_memory(token_key: &str) -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CoreError::Storage(format!("인메모리 SQLite 생성 실패: {e}")))?;

        migration::run_migrations(&conn)
            .map_err(|e| CoreError::Storage(format!("마이그레이션 실패: {e}")))?;

        Ok(Self {
            conn: Mutex::new(conn),
            token_key: token_key.to_string(),
        })
    }

    /// 토큰 저장 키
    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, CoreError> {
        self.conn
            .lock()
            .map_err(|_| CoreError::Storage("SQLite 연결 잠금 실패".to_string()))
    }

    /// 키로 값 조회 (localStorage.getItem)
    pub fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM local_storage WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| CoreError::Storage(format!("값 조회 실패 ({key}): {e}")))
    }

    /// 값 저장 (localStorage.setItem)
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )
        .map_err(|e| CoreError::Storage(format!("값 저장 실패 ({key}): {e}")))?;
        debug!("local_storage 저장: {key}");
        Ok(())
    }

    /// 값 삭제 (localStorage.removeItem) — 삭제된 행이 있으면 true
    pub fn remove_item(&self, key: &str) -> Result<bool, CoreError> {
        let conn = self.lock()?;
        let deleted = conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])
            .map_err(|e| CoreError::Storage(format!("값 삭제 실패 ({key}): {e}")))?;
        debug!("local_storage 삭제: {key} ({deleted}건)");
        Ok(deleted > 0)
    }
}
