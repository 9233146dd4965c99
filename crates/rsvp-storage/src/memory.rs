//! 인메모리 토큰 저장소.
//!
//! 프로세스가 끝나면 사라진다 (`--ephemeral` 실행, 테스트).

use async_trait::async_trait;
use rsvp_core::error::CoreError;
use rsvp_core::models::session::AccessToken;
use rsvp_core::ports::storage::TokenStore;
use tokio::sync::RwLock;

/// 인메모리 `TokenStore` 구현
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<AccessToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰이 미리 들어있는 저장소 (재시작 시나리오 테스트용)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(AccessToken::new(token))),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load_token(&self) -> Result<Option<AccessToken>, CoreError> {
        Ok(self.token.read().await.clone())
    }

    async fn save_token(&self, token: &AccessToken) -> Result<(), CoreError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), CoreError> {
        *self.token.write().await = None;
        Ok(())
    }
}
