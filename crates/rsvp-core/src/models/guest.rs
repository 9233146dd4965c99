//! 게스트 모델.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 이벤트 게스트 (`/events/{uuid}/guests`, `/guests/{uuid}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 참석 응답 (None = 아직 응답 없음)
    #[serde(default)]
    pub answer: Option<bool>,
    /// 선택한 메뉴
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// 알려지지 않은 나머지 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Guest {
    /// "이름 성" 형식의 표시 이름
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_space() {
        let guest: Guest =
            serde_json::from_str(r#"{"name":"Anna","surname":"Nowak","answer":null}"#).unwrap();
        assert_eq!(guest.full_name(), "Anna Nowak");
        assert_eq!(guest.answer, None);
    }

    #[test]
    fn answered_guest() {
        let guest: Guest = serde_json::from_str(
            r#"{"name":"Jan","surname":"Kowalski","answer":true,"menu":"ryba","companion_id":3}"#,
        )
        .unwrap();
        assert_eq!(guest.answer, Some(true));
        assert_eq!(guest.menu.as_deref(), Some("ryba"));
        assert!(guest.extra.contains_key("companion_id"));
    }
}
