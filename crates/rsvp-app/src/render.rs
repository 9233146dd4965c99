//! 터미널 렌더러.
//!
//! 클라이언트가 반환한 타입 데이터를 사람이 읽는 텍스트 또는 JSON으로 출력한다.
//! 네트워크/세션 로직은 알지 못한다.

use rsvp_core::config::AppConfig;
use rsvp_core::models::event::Event;
use rsvp_core::models::guest::Guest;
use rsvp_core::models::session::SessionState;
use rsvp_core::models::stats::Stats;
use rsvp_core::models::user::User;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 출력 대상(`W`)에 엔티티를 그린다
pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
}

fn answer_label(answer: Option<bool>) -> &'static str {
    match answer {
        Some(true) => "참석",
        Some(false) => "불참",
        None => "미응답",
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// 출력 대상 반환 (테스트용)
    pub fn into_inner(self) -> W {
        self.out
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)
    }

    pub fn session(&mut self, state: SessionState) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&serde_json::json!({ "session": state })),
            OutputFormat::Text => writeln!(self.out, "세션: {state}"),
        }
    }

    pub fn logged_in(&mut self, username: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&serde_json::json!({
                "session": SessionState::Authenticated,
                "username": username,
            })),
            OutputFormat::Text => writeln!(self.out, "✅ 로그인 성공: {username}"),
        }
    }

    pub fn logged_out(&mut self) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(&serde_json::json!({ "session": SessionState::Anonymous })),
            OutputFormat::Text => writeln!(self.out, "로그아웃되었습니다"),
        }
    }

    /// 사용자 수
    pub fn user_count(&mut self, users: &[User]) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(users),
            OutputFormat::Text => writeln!(self.out, "사용자 수: {}", users.len()),
        }
    }

    /// 현재 사용자 역할
    ///
    /// 서버가 역할을 보내지 않으면 이메일로 대신 표시한다.
    pub fn role(&mut self, user: &User) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(user);
        }

        match (&user.role, &user.email) {
            (Some(role), _) => writeln!(self.out, "역할: {role}"),
            (None, Some(email)) => writeln!(self.out, "역할: 없음 ({email})"),
            (None, None) => writeln!(self.out, "역할: 없음"),
        }
    }

    pub fn events(&mut self, events: &[Event]) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(events);
        }

        if events.is_empty() {
            return writeln!(self.out, "이벤트 없음");
        }

        writeln!(self.out, "이벤트 {}개", events.len())?;
        for event in events {
            writeln!(self.out, "- {} ({})", event.name, event.uuid)?;
        }
        Ok(())
    }

    pub fn event(&mut self, event: &Event) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(event);
        }

        writeln!(self.out, "{} ({})", event.name, event.uuid)?;
        if let Some(location) = &event.location {
            writeln!(self.out, "  장소: {location}")?;
        }
        if let Some(start) = event.start_time {
            writeln!(self.out, "  시작: {}", start.format("%Y-%m-%d %H:%M"))?;
        }
        if let Some(deadline) = event.decision_deadline {
            writeln!(self.out, "  응답 마감: {}", deadline.format("%Y-%m-%d %H:%M"))?;
        }
        let menu = event.menu_options();
        if !menu.is_empty() {
            writeln!(self.out, "  메뉴: {}", menu.join(", "))?;
        }
        if let Some(description) = &event.description {
            writeln!(self.out, "  {description}")?;
        }
        Ok(())
    }

    /// 통계 — 원본 JSON을 그대로 출력하고, 알려진 형식이면 요약을 덧붙인다
    pub fn stats(&mut self, stats: &Stats) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(stats);
        }

        writeln!(self.out, "{}", stats.to_display_string())?;

        if let Some(summary) = stats.summary() {
            writeln!(
                self.out,
                "참석 {} / 불참 {} / 미응답 {} (총 {})",
                summary.sum_true,
                summary.sum_false,
                summary.sum_unknown,
                summary.total()
            )?;
            for (menu, count) in &summary.menu_answers {
                writeln!(self.out, "  {menu}: {count}")?;
            }
        }
        Ok(())
    }

    pub fn guests(&mut self, guests: &[Guest]) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(guests);
        }

        if guests.is_empty() {
            return writeln!(self.out, "게스트 없음");
        }

        for guest in guests {
            writeln!(
                self.out,
                "- {} [{}]",
                guest.full_name(),
                answer_label(guest.answer)
            )?;
        }
        Ok(())
    }

    /// 설정 파일 경로와 내용
    pub fn config(&mut self, path: &Path, config: &AppConfig) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(&serde_json::json!({ "path": path, "config": config }));
        }

        writeln!(self.out, "설정 파일: {}", path.display())?;
        writeln!(self.out, "server.base_url = {}", config.server.base_url)?;
        writeln!(
            self.out,
            "server.request_timeout_ms = {}",
            config.server.request_timeout_ms
        )?;
        writeln!(self.out, "storage.token_key = {}", config.storage.token_key)?;
        match &config.storage.db_path {
            Some(db_path) => writeln!(self.out, "storage.db_path = {}", db_path.display()),
            None => writeln!(self.out, "storage.db_path = (기본 경로)"),
        }
    }

    pub fn guest(&mut self, guest: &Guest) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => self.json(guest),
            OutputFormat::Text => {
                writeln!(self.out, "{} [{}]", guest.full_name(), answer_label(guest.answer))?;
                if let Some(menu) = &guest.menu {
                    writeln!(self.out, "  메뉴: {menu}")?;
                }
                if let Some(comments) = &guest.comments {
                    writeln!(self.out, "  {comments}")?;
                }
                Ok(())
            }
        }
    }
}
