//! 세션 토큰 관리.
//!
//! 서버 로그인(`POST /token`, form 인코딩), 로그아웃, 토큰 영속화를 담당한다.
//! 토큰 갱신/만료 처리는 하지 않는다. 만료된 토큰은 서버의 401로 드러난다.

use rsvp_core::error::CoreError;
use rsvp_core::models::session::{AccessToken, SessionState};
use rsvp_core::ports::storage::TokenStore;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};
use url::Url;

use crate::endpoint;

/// 서버 응답 — 로그인
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// 세션 토큰 매니저 — 로그인/로그아웃/영속화
///
/// 메모리의 토큰은 항상 저장소와 같은 값을 가진다.
/// 로그인은 내부 뮤텍스로 직렬화되며, 마지막으로 완료된 로그인이 이긴다.
#[derive(Clone)]
pub struct TokenManager {
    base_url: Url,
    client: reqwest::Client,
    state: Arc<RwLock<Option<AccessToken>>>,
    store: Arc<dyn TokenStore>,
    login_lock: Arc<Mutex<()>>,
}

impl TokenManager {
    /// 새 토큰 매니저 생성 (Anonymous 상태)
    ///
    /// 저장된 토큰을 불러오려면 [`TokenManager::restore`]를 호출한다.
    pub fn new(
        base_url: &str,
        store: Arc<dyn TokenStore>,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            base_url: endpoint::parse_base_url(base_url)?,
            client,
            state: Arc::new(RwLock::new(None)),
            store,
            login_lock: Arc::new(Mutex::new(())),
        })
    }

    /// 저장소의 토큰으로 세션 복원 (시작 시 1회)
    pub async fn restore(&self) -> Result<SessionState, CoreError> {
        let stored = self.store.load_token().await?;
        let restored = if stored.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        };

        *self.state.write().await = stored;
        debug!("세션 복원: {restored}");
        Ok(restored)
    }

    /// 사용자명/비밀번호 로그인 → 액세스 토큰 획득 및 저장
    ///
    /// # Errors
    /// - 2xx가 아니거나 `access_token`이 없는 응답: `CoreError::Auth`
    /// - 전송 실패: `CoreError::Network`
    /// - 토큰 저장 실패: `CoreError::Storage` (세션은 바뀌지 않음)
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionState, CoreError> {
        let _guard = self.login_lock.lock().await;

        let url = endpoint::join(&self.base_url, &["token"])?;
        debug!("로그인 요청: {url} (username={username})");

        let resp = self
            .client
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("로그인 요청 실패: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(CoreError::Auth(format!("로그인 실패 ({status}): {text}")));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("로그인 응답 읽기 실패: {e}")))?;

        let token_resp: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| CoreError::Auth(format!("토큰 응답 파싱 실패: {e}")))?;

        if token_resp.access_token.is_empty() {
            return Err(CoreError::Auth("빈 access_token 응답".to_string()));
        }

        let token = AccessToken::new(token_resp.access_token);
        self.store.save_token(&token).await?;
        *self.state.write().await = Some(token.clone());

        info!("로그인 성공: username={username}, token={token}");
        Ok(SessionState::Authenticated)
    }

    /// 로그아웃 — 메모리와 저장소의 토큰 삭제
    ///
    /// 멱등이며 실패하지 않는다. 저장소 삭제 실패는 경고 로그만 남긴다.
    pub async fn logout(&self) {
        let _guard = self.login_lock.lock().await;

        *self.state.write().await = None;

        if let Err(e) = self.store.clear_token().await {
            warn!("저장된 토큰 삭제 실패: {e}");
        }

        info!("로그아웃 완료");
    }

    /// 현재 액세스 토큰 (호출 시점 값)
    pub async fn get_token(&self) -> Result<AccessToken, CoreError> {
        self.state
            .read()
            .await
            .clone()
            .ok_or_else(|| CoreError::Auth("인증되지 않음: 먼저 로그인하세요".to_string()))
    }

    /// 현재 세션 상태
    pub async fn state(&self) -> SessionState {
        if self.state.read().await.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// 현재 인증 상태 확인
    pub async fn is_authenticated(&self) -> bool {
        self.state().await == SessionState::Authenticated
    }

    /// 서버 기본 URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
