//! 사용자 모델.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 서버 사용자 (`/users`, `/users/me`)
///
/// 서버의 기본 사용자 스키마는 `{email, user_id, events}`이며 `role`을 보내지 않을 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 역할 (예: "user", "admin")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// 내부 사용자 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 알려지지 않은 나머지 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
