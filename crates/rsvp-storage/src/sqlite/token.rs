//! 세션 토큰 스토리지 (TokenStore 포트 구현).

use async_trait::async_trait;
use rsvp_core::error::CoreError;
use rsvp_core::models::session::AccessToken;
use rsvp_core::ports::storage::TokenStore;

use super::SqliteStorage;

#[async_trait]
impl TokenStore for SqliteStorage {
    async fn load_token(&self) -> Result<Option<AccessToken>, CoreError> {
        Ok(self
            .get_item(&self.token_key)?
            .filter(|t| !t.is_empty())
            .map(AccessToken::new))
    }

    async fn save_token(&self, token: &AccessToken) -> Result<(), CoreError> {
        self.set_item(&self.token_key, token.expose())
    }

    async fn clear_token(&self) -> Result<(), CoreError> {
        self.remove_item(&self.token_key).map(|_| ())
    }
}
