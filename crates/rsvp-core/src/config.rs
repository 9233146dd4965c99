//! 애플리케이션 설정 구조체.
//!
//! 서버 URL, 요청 타임아웃, 토큰 저장소 경로/키 등 런타임 설정을 정의한다.
//! `ConfigManager`를 통해 JSON 파일에서 로드하고 CLI 인자로 덮어쓴다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::CoreError;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 서버 연결 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로컬 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 서버 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API 서버 기본 URL (예: "http://127.0.0.1:8000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// 로컬 저장소 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite DB 파일 경로 (None이면 플랫폼 기본 경로)
    #[serde(default)]
    pub db_path: Option<PathBuf>,
    /// 토큰을 저장하는 고정 키
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            token_key: default_token_key(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_token_key() -> String {
    "token".to_string()
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    /// 서버 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.server.request_timeout_ms)
    }

    /// 설정값 검증
    ///
    /// base_url은 http/https 스킴의 절대 URL이어야 한다.
    pub fn validate(&self) -> Result<(), CoreError> {
        let url = Url::parse(&self.server.base_url).map_err(|e| {
            CoreError::Config(format!("잘못된 서버 URL '{}': {e}", self.server.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "지원하지 않는 URL 스킴: {}",
                url.scheme()
            )));
        }

        if self.server.request_timeout_ms == 0 {
            return Err(CoreError::Config(
                "request_timeout_ms는 0보다 커야 합니다".to_string(),
            ));
        }

        if self.storage.token_key.trim().is_empty() {
            return Err(CoreError::Config("token_key가 비어 있습니다".to_string()));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = AppConfig::default_config();
        config.server.base_url = "ftp://127.0.0.1".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_garbage_url() {
        let mut config = AppConfig::default_config();
        config.server.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_zero_timeout_and_empty_key() {
        let mut config = AppConfig::default_config();
        config.server.request_timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default_config();
        config.storage.token_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server":{"base_url":"http://api.local"}}"#).unwrap();
        assert_eq!(config.server.base_url, "http://api.local");
        assert_eq!(config.server.request_timeout_ms, 30_000);
        assert_eq!(config.storage.token_key, "token");
    }

    #[test]
    fn storage_only_json_uses_server_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"storage":{"token_key":"staging_token"}}"#).unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.request_timeout_ms, 30_000);
        assert_eq!(config.storage.token_key, "staging_token");
    }

    #[test]
    fn empty_json_is_default_config() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.base_url, AppConfig::default_config().server.base_url);
        assert!(config.validate().is_ok());
    }
}
