//! API 클라이언트 포트.
//!
//! 구현: `rsvp-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::event::Event;
use crate::models::guest::Guest;
use crate::models::stats::Stats;
use crate::models::user::User;

/// 인증이 필요한 조회 API
///
/// 모든 메서드는 호출 시점의 세션 토큰을 사용한다.
/// 토큰이 없으면 요청을 보내지 않고 `CoreError::Auth`로 실패한다.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// 전체 사용자 목록
    async fn get_users(&self) -> Result<Vec<User>, CoreError>;

    /// 현재 로그인한 사용자
    async fn get_current_user(&self) -> Result<User, CoreError>;

    /// 이벤트 목록 (빈 목록도 정상)
    async fn get_events(&self) -> Result<Vec<Event>, CoreError>;

    /// 단일 이벤트
    async fn get_event(&self, event_uuid: &str) -> Result<Event, CoreError>;

    /// 이벤트 통계
    ///
    /// `event_uuid`가 비어 있으면 `CoreError::Validation`.
    async fn get_event_stats(&self, event_uuid: &str) -> Result<Stats, CoreError>;

    /// 이벤트 게스트 목록
    ///
    /// `event_uuid`가 비어 있으면 `CoreError::Validation`.
    async fn get_event_guests(&self, event_uuid: &str) -> Result<Vec<Guest>, CoreError>;

    /// 단일 게스트
    async fn get_guest(&self, guest_uuid: &str) -> Result<Guest, CoreError>;
}
