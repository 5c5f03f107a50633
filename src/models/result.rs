//! # 匹配结果数据模型
//!
//! ## 依赖关系
//! - 由 `matching/engine.rs` 创建
//! - 被 `report/` 和 `commands/` 使用

use crate::models::{CrystalEntry, PlaneLabel};
use serde::Serialize;

/// 单个晶面的得分
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaneScore {
    pub label: PlaneLabel,
    pub score: f64,
}

/// 一个晶体条目的匹配结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// 最小相似度 M
    pub score: f64,

    /// 与衬底最相似的晶面
    pub predicted: PlaneLabel,

    /// 相对面积最大的晶面（未约化）
    pub low_energy_plane: String,

    /// 约化后的最大面积晶面，用于比较
    pub reduced_plane: String,

    /// 预测晶面是否等于约化后的最大面积晶面
    pub is_match: bool,

    /// 六个候选晶面各自的得分（固定顺序）
    pub plane_scores: Vec<PlaneScore>,
}

/// 报告中的一行：条目 + 结果
#[derive(Debug, Clone)]
pub struct EntryReport {
    pub entry: CrystalEntry,
    pub result: MatchResult,
}
