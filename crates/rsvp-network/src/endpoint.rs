//! 엔드포인트 URL 조립.
//!
//! 기본 URL의 경로 접두사를 유지한 채 경로 세그먼트를 덧붙인다.
//! 세그먼트(이벤트 UUID 등)는 퍼센트 인코딩된다.

use rsvp_core::error::CoreError;
use url::Url;

/// 기본 URL 파싱 및 검증 (http/https만 허용)
pub fn parse_base_url(base_url: &str) -> Result<Url, CoreError> {
    let url = Url::parse(base_url)
        .map_err(|e| CoreError::Config(format!("잘못된 서버 URL '{base_url}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(CoreError::Config(format!(
            "지원하지 않는 서버 URL: {base_url}"
        )));
    }

    Ok(url)
}

/// `base`에 경로 세그먼트를 이어 붙인 URL
pub fn join(base: &Url, segments: &[&str]) -> Result<Url, CoreError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| CoreError::Config(format!("경로를 붙일 수 없는 URL: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
