//! RSVP 도메인 모델.
//!
//! 원격 API가 반환하는 엔티티와 클라이언트 세션 상태를 정의한다.
//! 알려진 필드만 타입으로 정의하고, 나머지 필드는 `extra`에 그대로 보존한다.

pub mod event;
pub mod guest;
pub mod session;
pub mod stats;
pub mod user;
