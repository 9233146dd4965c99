//! 이벤트 모델.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 서버 이벤트 (`/events`, `/events/{uuid}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// 공개 식별자 — stats/guests 조회 키
    pub uuid: String,
    /// 이벤트 이름
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 메뉴 목록 (`;` 구분)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    /// 시작 시각 (서버 로컬 시간, 타임존 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    /// 참석 응답 마감 시각
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_deadline: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// 알려지지 않은 나머지 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// 메뉴 문자열을 항목별로 분리 (빈 항목 제외)
    pub fn menu_options(&self) -> Vec<&str> {
        self.menu
            .as_deref()
            .map(|m| {
                m.split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_event() {
        let event: Event = serde_json::from_str(r#"{"uuid":"u1","name":"Urodziny"}"#).unwrap();
        assert_eq!(event.name, "Urodziny");
        assert!(event.start_time.is_none());
        assert!(event.menu_options().is_empty());
    }

    #[test]
    fn missing_uuid_is_rejected() {
        let result: Result<Event, _> = serde_json::from_str(r#"{"name":"Urodziny"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn menu_options_skip_blanks() {
        let event: Event =
            serde_json::from_str(r#"{"uuid":"u1","name":"x","menu":"wege; ;ryba;"}"#).unwrap();
        assert_eq!(event.menu_options(), vec!["wege", "ryba"]);
    }

    #[test]
    fn datetimes_with_fraction() {
        let event: Event = serde_json::from_str(
            r#"{"uuid":"u1","name":"x","start_time":"2024-09-15T16:00:00.123456"}"#,
        )
        .unwrap();
        assert!(event.start_time.is_some());
    }
}
