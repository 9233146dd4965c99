//! 세션 모델.
//!
//! 클라이언트 인증 상태와 Bearer 토큰을 표현.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 세션 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// 토큰 없음
    Anonymous,
    /// 토큰 보유
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Anonymous => f.write_str("Anonymous"),
            SessionState::Authenticated => f.write_str("Authenticated"),
        }
    }
}

/// Bearer 액세스 토큰
///
/// `Debug`/`Display`는 앞 4자만 노출한다. 원문은 [`AccessToken::expose`]로만 접근.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 토큰 원문 (Authorization 헤더/저장소 기록용)
    pub fn expose(&self) -> &str {
        &self.0
    }

    fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{prefix}…")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.redacted()).finish()
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}
