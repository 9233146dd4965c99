//! CLI 서브커맨드 정의 및 실행.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use rsvp_core::config::AppConfig;
use rsvp_core::config_manager::ConfigManager;
use rsvp_core::ports::api_client::ApiClient;
use rsvp_network::auth::TokenManager;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::render::Renderer;

/// 사용자명 환경 변수
pub const USERNAME_ENV: &str = "RSVP_USERNAME";
/// 비밀번호 환경 변수
pub const PASSWORD_ENV: &str = "RSVP_PASSWORD";

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 로그인 후 토큰 저장
    Login {
        /// 사용자명 (기본: RSVP_USERNAME)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// 비밀번호 (기본: RSVP_PASSWORD)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },
    /// 저장된 토큰 삭제
    Logout,
    /// 현재 세션 상태
    Status,
    /// 전체 사용자 수
    Users,
    /// 현재 사용자 역할
    Whoami,
    /// 이벤트 목록
    Events,
    /// 이벤트 상세
    Event { uuid: String },
    /// 이벤트 응답 통계
    Stats { uuid: String },
    /// 이벤트 게스트 목록
    Guests { uuid: String },
    /// 게스트 상세
    Guest { uuid: String },
    /// 설정 파일 조회/변경
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// 현재 설정 파일 내용
    Show,
    /// 설정 값 변경 후 저장 (검증 실패 시 저장하지 않음)
    Set { key: ConfigKey, value: String },
}

/// 변경 가능한 설정 키
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    BaseUrl,
    RequestTimeoutMs,
    TokenKey,
    /// 빈 값이면 플랫폼 기본 경로로 되돌린다
    DbPath,
}

fn apply_setting(config: &mut AppConfig, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::BaseUrl => config.server.base_url = value.to_string(),
        ConfigKey::RequestTimeoutMs => {
            config.server.request_timeout_ms = value
                .parse()
                .with_context(|| format!("밀리초 숫자가 아닙니다: {value}"))?;
        }
        ConfigKey::TokenKey => config.storage.token_key = value.to_string(),
        ConfigKey::DbPath => {
            config.storage.db_path = (!value.is_empty()).then(|| PathBuf::from(value));
        }
    }
    Ok(())
}

/// 설정 서브커맨드 실행 (세션/서버 불필요)
///
/// CLI 덮어쓰기 인자(`--server` 등)는 반영하지 않고 파일 내용만 다룬다.
pub fn run_config<W: Write>(
    action: ConfigAction,
    manager: &ConfigManager,
    out: &mut Renderer<W>,
) -> Result<()> {
    match action {
        ConfigAction::Show => {}
        ConfigAction::Set { key, value } => {
            let mut config = manager.get();
            apply_setting(&mut config, key, &value)?;
            manager.update(config).context("설정 저장 실패")?;
            info!("설정 변경: {key:?}");
        }
    }
    out.config(manager.config_path(), &manager.get())?;
    Ok(())
}

/// 로그인 자격 증명 결정 — 인자 우선, 없으면 환경 변수
fn resolve_credentials(
    username: Option<String>,
    password: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(String, String)> {
    let username = username
        .or_else(|| env(USERNAME_ENV))
        .ok_or_else(|| anyhow!("사용자명이 필요합니다 (--username 또는 {USERNAME_ENV})"))?;
    let password = password
        .or_else(|| env(PASSWORD_ENV))
        .ok_or_else(|| anyhow!("비밀번호가 필요합니다 (--password 또는 {PASSWORD_ENV})"))?;
    Ok((username, password))
}

/// 서브커맨드 실행
pub async fn run<W: Write>(
    command: Command,
    session: &TokenManager,
    api: &dyn ApiClient,
    out: &mut Renderer<W>,
) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            let (username, password) =
                resolve_credentials(username, password, |key| std::env::var(key).ok())?;
            session
                .login(&username, &password)
                .await
                .context("로그인 실패")?;
            info!("로그인 완료: {username}");
            out.logged_in(&username)?;
        }
        Command::Logout => {
            session.logout().await;
            out.logged_out()?;
        }
        Command::Status => out.session(session.state().await)?,
        Command::Users => out.user_count(&api.get_users().await?)?,
        Command::Whoami => out.role(&api.get_current_user().await?)?,
        Command::Events => out.events(&api.get_events().await?)?,
        Command::Event { uuid } => out.event(&api.get_event(&uuid).await?)?,
        Command::Stats { uuid } => out.stats(&api.get_event_stats(&uuid).await?)?,
        Command::Guests { uuid } => out.guests(&api.get_event_guests(&uuid).await?)?,
        Command::Guest { uuid } => out.guest(&api.get_guest(&uuid).await?)?,
        Command::Config { .. } => bail!("설정 명령은 run_config로 실행합니다"),
    }
    Ok(())
}
