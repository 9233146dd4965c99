//! HTTP REST API 클라이언트.
//!
//! `ApiClient` 포트 구현. 호출 시점의 세션 토큰으로 Bearer 헤더를 붙인다.
//! 재시도/백오프는 하지 않으며 모든 에러를 그대로 호출자에게 돌려준다.

use async_trait::async_trait;
use rsvp_core::error::CoreError;
use rsvp_core::models::event::Event;
use rsvp_core::models::guest::Guest;
use rsvp_core::models::stats::Stats;
use rsvp_core::models::user::User;
use rsvp_core::ports::api_client::ApiClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::auth::TokenManager;
use crate::endpoint;

/// 식별자 인자 검증
///
/// 빈 문자열/공백만 있는 문자열과 `.`/`..`을 거부한다.
/// 점 세그먼트는 URL 정규화로 경로가 바뀌므로 식별자로 쓸 수 없다.
fn require_id<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "비어 있을 수 없습니다"));
    }
    if matches!(value, "." | "..") {
        return Err(CoreError::validation(
            field,
            format!("경로 세그먼트로 쓸 수 없는 값: {value}"),
        ));
    }
    Ok(value)
}

/// 전송 계층 에러 매핑
fn transport_error(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        CoreError::Network(format!("요청 시간 초과: {e}"))
    } else {
        CoreError::Network(format!("요청 실패: {e}"))
    }
}

/// REST API 클라이언트 — `ApiClient` 포트 구현
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: Url,
    token_manager: Arc<TokenManager>,
    timeout: Duration,
}

impl HttpApiClient {
    /// 새 HTTP API 클라이언트 생성
    pub fn new(
        base_url: &str,
        token_manager: Arc<TokenManager>,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {e}")))?;

        Ok(Self {
            client,
            base_url: endpoint::parse_base_url(base_url)?,
            token_manager,
            timeout,
        })
    }

    /// 요청별 타임아웃 설정
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 세션 토큰 매니저
    pub fn token_manager(&self) -> &Arc<TokenManager> {
        &self.token_manager
    }

    /// 인증된 GET 요청
    ///
    /// 토큰이 없으면 요청을 만들지 않고 `CoreError::Auth`로 실패한다.
    async fn authorized_get(&self, segments: &[&str]) -> Result<reqwest::Response, CoreError> {
        let token = self.token_manager.get_token().await?;
        let url = endpoint::join(&self.base_url, segments)?;
        debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .bearer_auth(token.expose())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        self.check_response(resp).await
    }

    /// 응답 상태 코드 확인 및 에러 매핑
    ///
    /// 401/403 → `Auth`, 그 외 비 2xx → `Network`
    async fn check_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_else(|e| {
            tracing::warn!("응답 본문 읽기 실패: {e}");
            String::new()
        });

        match status.as_u16() {
            401 | 403 => Err(CoreError::Auth(format!("인증 실패 ({status}): {text}"))),
            _ => Err(CoreError::Network(format!("API 에러 ({status}): {text}"))),
        }
    }

    /// GET 후 JSON 본문을 `T`로 디코딩
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        what: &str,
        segments: &[&str],
    ) -> Result<T, CoreError> {
        let resp = self.authorized_get(segments).await?;
        let body = resp.text().await.map_err(transport_error)?;

        serde_json::from_str(&body)
            .map_err(|e| CoreError::Decode(format!("{what} 응답 파싱 실패: {e}")))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get_users(&self) -> Result<Vec<User>, CoreError> {
        let users: Vec<User> = self.fetch_json("사용자 목록", &["users"]).await?;
        debug!("사용자 {}명 수신", users.len());
        Ok(users)
    }

    async fn get_current_user(&self) -> Result<User, CoreError> {
        let user: User = self.fetch_json("현재 사용자", &["users", "me"]).await?;
        debug!("현재 사용자 역할: {:?}", user.role);
        Ok(user)
    }

    async fn get_events(&self) -> Result<Vec<Event>, CoreError> {
        let events: Vec<Event> = self.fetch_json("이벤트 목록", &["events"]).await?;
        debug!("이벤트 {}개 수신", events.len());
        Ok(events)
    }

    async fn get_event(&self, event_uuid: &str) -> Result<Event, CoreError> {
        let uuid = require_id("event_uuid", event_uuid)?;
        self.fetch_json("이벤트", &["events", uuid]).await
    }

    async fn get_event_stats(&self, event_uuid: &str) -> Result<Stats, CoreError> {
        let uuid = require_id("event_uuid", event_uuid)?;
        self.fetch_json("이벤트 통계", &["events", uuid, "stats"])
            .await
    }

    async fn get_event_guests(&self, event_uuid: &str) -> Result<Vec<Guest>, CoreError> {
        let uuid = require_id("event_uuid", event_uuid)?;
        let guests: Vec<Guest> = self
            .fetch_json("게스트 목록", &["events", uuid, "guests"])
            .await?;
        debug!("이벤트 {uuid}: 게스트 {}명 수신", guests.len());
        Ok(guests)
    }

    async fn get_guest(&self, guest_uuid: &str) -> Result<Guest, CoreError> {
        let uuid = require_id("guest_uuid", guest_uuid)?;
        self.fetch_json("게스트", &["guests", uuid]).await
    }
}
