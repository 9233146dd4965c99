//! # rsvp-network
//!
//! HTTP 네트워크 어댑터.
//! 이벤트 서버 REST API와의 통신을 담당하며
//! 세션 토큰 관리(로그인/로그아웃/영속화)와 Bearer 인증 조회를 제공한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use rsvp_network::auth::TokenManager;
//! use rsvp_network::http_client::HttpApiClient;
//!
//! let tm = Arc::new(TokenManager::new(base_url, store, timeout)?);
//! tm.restore().await?;
//! let api = HttpApiClient::new(base_url, tm.clone(), timeout)?;
//! let events = api.get_events().await?;
//! ```

pub mod auth;
pub mod endpoint;
pub mod http_client;
