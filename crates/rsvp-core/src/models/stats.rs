//! 이벤트 통계 모델.
//!
//! 통계 응답은 불투명 JSON으로 그대로 보관한다.
//! 서버의 현재 형식과 일치하면 [`StatsSummary`]로 해석할 수 있다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 이벤트 통계 (`/events/{uuid}/stats`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats(pub Value);

/// 참석 응답 집계
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// 참석
    pub sum_true: u64,
    /// 불참
    pub sum_false: u64,
    /// 미응답 (서버 키 철자 그대로)
    #[serde(rename = "sum_unkown")]
    pub sum_unknown: u64,
    /// 메뉴별 선택 수
    #[serde(default)]
    pub menu_answers: BTreeMap<String, u64>,
}

impl Stats {
    /// 원본 JSON
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// 표시용 직렬화 (원본 그대로)
    pub fn to_display_string(&self) -> String {
        self.0.to_string()
    }

    /// 알려진 집계 형식으로 해석 (형식이 다르면 None)
    pub fn summary(&self) -> Option<StatsSummary> {
        StatsSummary::deserialize(&self.0).ok()
    }
}

impl StatsSummary {
    /// 전체 게스트 수
    pub fn total(&self) -> u64 {
        self.sum_true + self.sum_false + self.sum_unknown
    }
}
