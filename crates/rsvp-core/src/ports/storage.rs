//! 토큰 저장소 포트.
//!
//! 브라우저 localStorage에 해당하는 내구성 있는 키-값 저장소.
//! 구현: `rsvp-storage` crate (rusqlite, 인메모리)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::session::AccessToken;

/// 고정 키 하나에 토큰을 보관하는 저장소
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 저장된 토큰 로드 (없으면 None)
    async fn load_token(&self) -> Result<Option<AccessToken>, CoreError>;

    /// 토큰 저장 (기존 값 덮어쓰기)
    async fn save_token(&self, token: &AccessToken) -> Result<(), CoreError>;

    /// 토큰 삭제 (없어도 성공)
    async fn clear_token(&self) -> Result<(), CoreError>;
}
