//! RSVP 핵심 에러 타입.
//!
//! 어댑터 crate(network, storage)는 모두 `CoreError`를 반환한다.
//! 바이너리 경계에서만 `anyhow`로 감싼다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 인증 실패 (토큰 없음, 401/403, 잘못된 자격증명)
    #[error("인증 에러: {0}")]
    Auth(String),

    /// 네트워크 에러 (연결 실패, 타임아웃, 예상치 못한 상태 코드)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 응답 본문이 기대한 형태로 파싱되지 않음
    #[error("디코딩 에러: {0}")]
    Decode(String),

    /// 호출자가 넘긴 인자 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 로컬 저장소 에러 (토큰 영속화)
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// 인증 에러 여부
    pub fn is_auth(&self) -> bool {
        matches!(self, CoreError::Auth(_))
    }

    /// 필드 검증 에러 생성 헬퍼
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
