//! 서버 통합 테스트
//!
//! Mock 서버와 실제 클라이언트 코드(세션 + REST 클라이언트 + 토큰 저장소)를 연결하여 검증합니다.
//!
//! 실행:
//! ```
//! cargo test -p rsvp-app --test server_integration_test -- --nocapture
//! ```


use mock_server::{MockServer, EVENT_UUID, GUEST_UUID};
use rsvp_core::error::CoreError;
use rsvp_core::models::session::SessionState;
use rsvp_core::ports::api_client::ApiClient;
use rsvp_core::ports::storage::TokenStore;
use rsvp_network::auth::TokenManager;
use rsvp_network::http_client::HttpApiClient;
use rsvp_storage::memory::MemoryTokenStore;
use rsvp_storage::sqlite::SqliteStorage;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const TIMEOUT: Duration = Duration::from_secs(5);

fn connect(server: &MockServer, store: Arc<dyn TokenStore>) -> (Arc<TokenManager>, HttpApiClient) {
    let session = Arc::new(TokenManager::new(server.url(), store, TIMEOUT).unwrap());
    let api = HttpApiClient::new(server.url(), session.clone(), TIMEOUT).unwrap();
    (session, api)
}

#[tokio::test]
async fn login_then_requests_carry_bearer_token() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());
    let (session, api) = connect(&server, store.clone());

    let state = session.login("alice", "hunter2").await.unwrap();
    assert_eq!(state, SessionState::Authenticated);
    assert_eq!(store.load_token().await.unwrap().unwrap().expose(), "abc123");

    let me = api.get_current_user().await.unwrap();
    assert_eq!(me.email.as_deref(), Some("alice@example.com"));
    assert_eq!(me.user_id, Some(1));
    assert_eq!(me.role, None);
    assert!(me.extra.contains_key("events"));

    let users = api.get_users().await.unwrap();
    assert_eq!(users.len(), 3);

    assert_eq!(server.seen_tokens(), vec!["abc123", "abc123"]);
}

#[tokio::test]
async fn wrong_password_leaves_session_anonymous() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());
    let (session, api) = connect(&server, store.clone());

    let err = session.login("alice", "wrong").await.unwrap_err();
    assert!(err.is_auth(), "인증 에러가 아님: {err:?}");
    assert_eq!(session.state().await, SessionState::Anonymous);
    assert!(store.load_token().await.unwrap().is_none());

    let before = server.request_count();
    let err = api.get_events().await.unwrap_err();
    assert!(err.is_auth());
    assert_eq!(server.request_count(), before, "토큰 없이 요청이 나감");
}

#[tokio::test]
async fn logout_stops_sending_old_token() {
    let server = MockServer::start().await;
    let (session, api) = connect(&server, Arc::new(MemoryTokenStore::new()));

    session.login("alice", "hunter2").await.unwrap();
    api.get_events().await.unwrap();
    session.logout().await;

    let before = server.request_count();
    assert!(api.get_events().await.unwrap_err().is_auth());
    assert!(api.get_current_user().await.unwrap_err().is_auth());
    assert_eq!(server.request_count(), before);
    assert_eq!(server.seen_tokens(), vec!["abc123"]);
}

#[tokio::test]
async fn token_survives_restart_with_sqlite_store() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("rsvp.db");

    {
        let storage = Arc::new(SqliteStorage::open(&db_path, "token").unwrap());
        let (session, _api) = connect(&server, storage);
        session.login("alice", "hunter2").await.unwrap();
    }

    // 프로세스 재시작 흉내 — 새 저장소/세션
    let storage = Arc::new(SqliteStorage::open(&db_path, "token").unwrap());
    let (session, api) = connect(&server, storage);
    assert_eq!(session.restore().await.unwrap(), SessionState::Authenticated);

    let me = api.get_current_user().await.unwrap();
    assert_eq!(me.email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn logout_survives_restart_with_sqlite_store() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("rsvp.db");

    {
        let storage = Arc::new(SqliteStorage::open(&db_path, "token").unwrap());
        let (session, _api) = connect(&server, storage);
        session.login("alice", "hunter2").await.unwrap();
        session.logout().await;
    }

    let storage = Arc::new(SqliteStorage::open(&db_path, "token").unwrap());
    let (session, _api) = connect(&server, storage);
    assert_eq!(session.restore().await.unwrap(), SessionState::Anonymous);
}

#[tokio::test]
async fn revoked_token_is_auth_error_and_session_is_kept() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());
    let (session, api) = connect(&server, store.clone());

    session.login("alice", "hunter2").await.unwrap();
    server.revoke("abc123");

    let err = api.get_current_user().await.unwrap_err();
    assert!(matches!(err, CoreError::Auth(_)), "{err:?}");

    // 자동 재인증/토큰 삭제 없음
    assert_eq!(session.state().await, SessionState::Authenticated);
    assert!(store.load_token().await.unwrap().is_some());
}

#[tokio::test]
async fn relogin_as_other_user_replaces_token() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());
    let (session, api) = connect(&server, store.clone());

    session.login("alice", "hunter2").await.unwrap();
    session.login("bob", "s3cret").await.unwrap();

    let me = api.get_current_user().await.unwrap();
    assert_eq!(me.email.as_deref(), Some("bob@example.com"));
    assert_eq!(store.load_token().await.unwrap().unwrap().expose(), "bob-token");
    assert_eq!(server.seen_tokens(), vec!["bob-token"]);
}

#[tokio::test]
async fn concurrent_logins_keep_memory_and_store_consistent() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryTokenStore::new());
    let (session, _api) = connect(&server, store.clone());

    let a = {
        let session = session.clone();
        tokio::spawn(async move { session.login("alice", "hunter2").await })
    };
    let b = {
        let session = session.clone();
        tokio::spawn(async move { session.login("bob", "s3cret").await })
    };
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    let in_memory = session.get_token().await.unwrap();
    let stored = store.load_token().await.unwrap().unwrap();
    assert_eq!(in_memory, stored);
}

#[tokio::test]
async fn event_details_stats_and_guests() {
    let server = MockServer::start().await;
    let (session, api) = connect(&server, Arc::new(MemoryTokenStore::new()));
    session.login("bob", "s3cret").await.unwrap();

    let events = api.get_events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].uuid, EVENT_UUID);

    let event = api.get_event(EVENT_UUID).await.unwrap();
    assert_eq!(event.menu_options(), vec!["ryba", "mięso", "wege"]);
    assert!(event.start_time.is_some());

    let stats = api.get_event_stats(EVENT_UUID).await.unwrap();
    let summary = stats.summary().unwrap();
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.menu_answers.get("wege"), Some(&1));

    let guests = api.get_event_guests(EVENT_UUID).await.unwrap();
    let names: Vec<String> = guests.iter().map(|g| g.full_name()).collect();
    assert_eq!(names, vec!["Anna Nowak", "Jan Kowalski", "Ewa Wiśniewska"]);
    assert_eq!(guests[2].answer, None);

    let guest = api.get_guest(GUEST_UUID).await.unwrap();
    assert_eq!(guest.comments.as_deref(), Some("Bez orzechów"));
}

#[tokio::test]
async fn unknown_event_is_network_error() {
    let server = MockServer::start().await;
    let (session, api) = connect(&server, Arc::new(MemoryTokenStore::new()));
    session.login("alice", "hunter2").await.unwrap();

    let err = api.get_event("does-not-exist").await.unwrap_err();
    match err {
        CoreError::Network(message) => assert!(message.contains("404"), "{message}"),
        other => panic!("Network 에러 기대: {other:?}"),
    }

    // 존재하지 않는 이벤트의 게스트 목록은 빈 배열
    assert!(api.get_event_guests("does-not-exist").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_uuid_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    let (session, api) = connect(&server, Arc::new(MemoryTokenStore::new()));
    session.login("alice", "hunter2").await.unwrap();

    let before = server.request_count();
    let err = api.get_event_stats("  ").await.unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }), "{err:?}");

    // 점 세그먼트는 `/events/stats` 같은 다른 경로로 정규화되므로 거부
    let err = api.get_event_stats("..").await.unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }), "{err:?}");
    let err = api.get_event_guests(".").await.unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }), "{err:?}");

    assert_eq!(server.request_count(), before);
}
