//! # rsvp-storage
//!
//! 로컬 저장소 어댑터.
//! 브라우저 localStorage를 대신하는 SQLite 키-값 저장소와
//! 세션 토큰 영속화(`TokenStore` 구현)를 담당한다.
//!
//! ## 모듈
//! - `sqlite`: SQLite 키-값 저장소 (TokenStore 구현)
//! - `memory`: 프로세스 수명 동안만 유지되는 인메모리 저장소
//! - `migration`: 스키마 마이그레이션

pub mod memory;
pub mod migration;
pub mod sqlite;
