//! # rsvp-core
//!
//! RSVP 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 원격 API 엔티티 (serde Deserialize)
//! - [`ports`] — 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::event::Event;
    use crate::models::guest::Guest;

    #[test]
    fn event_list_decodes_from_server_payload() {
        let json = r#"[
            {"name":"Wesele","uuid":"e-1","event_id":1,"organizer_id":2,
             "location":"Kraków","menu":"mięso;ryba","start_time":"2024-09-15T16:00:00",
             "decision_deadline":"2024-09-01T00:00:00","description":null}
        ]"#;

        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].uuid, "e-1");
        assert_eq!(events[0].menu_options(), vec!["mięso", "ryba"]);
    }

    #[test]
    fn guest_requires_surname() {
        let result: Result<Guest, _> = serde_json::from_str(r#"{"name":"Jan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.storage.token_key, "token");
        assert!(config.storage.db_path.is_none());
    }
}
