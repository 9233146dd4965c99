//! # rsvp-app
//!
//! RSVP 클라이언트 바이너리 진입점.
//! 설정 로드, 토큰 저장소/세션/API 클라이언트 와이어링, 서브커맨드 실행.

mod commands;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use rsvp_core::config::AppConfig;
use rsvp_core::config_manager::ConfigManager;
use rsvp_core::ports::storage::TokenStore;
use rsvp_network::auth::TokenManager;
use rsvp_network::http_client::HttpApiClient;
use rsvp_storage::memory::MemoryTokenStore;
use rsvp_storage::sqlite::SqliteStorage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::render::{OutputFormat, Renderer};

/// 토큰 DB 파일 이름
const DB_FILE_NAME: &str = "rsvp.db";

/// RSVP 이벤트/게스트 관리 클라이언트
#[derive(Parser, Debug)]
#[command(name = "rsvp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 서버 URL 지정 (기본: 설정 파일, 없으면 http://127.0.0.1:8000)
    #[arg(long, short = 's', global = true)]
    server: Option<String>,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 데이터 저장 경로 (토큰 DB 위치)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// 요청 타임아웃 (밀리초)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    log_level: String,

    /// 토큰을 디스크에 저장하지 않음 (프로세스 종료 시 세션 소멸)
    #[arg(long, global = true)]
    ephemeral: bool,

    /// JSON으로 출력
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// 설정 파일 열기 (없으면 기본 설정으로 생성)
fn open_config(args: &Args) -> Result<ConfigManager> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    debug!("설정 파일: {}", manager.config_path().display());
    Ok(manager)
}

/// 이번 실행에 쓸 설정 — 파일 설정에 CLI 인자 적용
///
/// CLI 인자는 이번 실행에만 적용되고 설정 파일에는 기록하지 않는다.
fn load_config(args: &Args, manager: &ConfigManager) -> Result<AppConfig> {
    let mut config = manager.get();
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.server.request_timeout_ms = timeout_ms;
    }
    config.validate().context("잘못된 설정")?;
    Ok(config)
}

/// 데이터베이스 경로 결정
///
/// `--data-dir` > 설정 파일의 `storage.db_path` > 플랫폼 데이터 디렉토리 > 현재 디렉토리
///
/// # 플랫폼별 기본 경로:
/// - macOS: `~/Library/Application Support/com.rsvp.rsvp/rsvp.db`
/// - Windows: `%APPDATA%\rsvp\rsvp\data\rsvp.db`
/// - Linux: `~/.local/share/rsvp/rsvp.db`
fn resolve_db_path(data_dir: Option<&Path>, configured: Option<&Path>) -> PathBuf {
    data_dir
        .map(|d| d.join(DB_FILE_NAME))
        .or_else(|| configured.map(Path::to_path_buf))
        .or_else(|| {
            ConfigManager::data_dir()
                .ok()
                .map(|d| d.join(DB_FILE_NAME))
        })
        .unwrap_or_else(|| PathBuf::from(".").join(DB_FILE_NAME))
}

/// 토큰 저장소 생성
fn open_token_store(args: &Args, config: &AppConfig) -> Result<Arc<dyn TokenStore>> {
    if args.ephemeral {
        info!("인메모리 토큰 저장소 사용");
        return Ok(Arc::new(MemoryTokenStore::new()));
    }

    let db_path = resolve_db_path(args.data_dir.as_deref(), config.storage.db_path.as_deref());
    let storage = SqliteStorage::open(&db_path, &config.storage.token_key)
        .with_context(|| format!("토큰 저장소 열기 실패: {}", db_path.display()))?;
    debug!("토큰 저장소: {}", db_path.display());
    Ok(Arc::new(storage))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "rsvp={},rsvp_app={},rsvp_core={},rsvp_network={},rsvp_storage={}",
        args.log_level, args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut renderer = Renderer::new(std::io::stdout(), format);

    let manager = open_config(&args)?;
    if let Command::Config { action } = &args.command {
        return commands::run_config(action.clone(), &manager, &mut renderer);
    }

    let config = load_config(&args, &manager)?;
    let store = open_token_store(&args, &config)?;

    let session = Arc::new(TokenManager::new(
        &config.server.base_url,
        store,
        config.request_timeout(),
    )?);
    let restored = session.restore().await?;
    info!("서버: {} (세션: {restored})", config.server.base_url);

    let api = HttpApiClient::new(
        &config.server.base_url,
        session.clone(),
        config.request_timeout(),
    )?;

    commands::run(args.command, &session, &api, &mut renderer).await
}
