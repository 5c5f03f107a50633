//! # 匹配引擎
//!
//! 对一个晶体条目：
//! 1. 重建晶胞坐标并推导六个候选晶面
//! 2. 逐个计算与衬底的相似度，取最小者（并列时取先出现的）
//! 3. 找出形貌中相对面积最大的晶面
//! 4. 比较两者是否一致
//!
//! 条目之间没有共享状态，`MatchEngine` 可在多个线程间共享。
//!
//! ## 依赖关系
//! - 被 `commands/matching.rs` 调用
//! - 使用 `geometry/`, `matching/dominant.rs`, `source/`

use crate::error::SkipReason;
use crate::geometry::{derive_planes, similarity, CoordinateFrame};
use crate::matching::dominant::dominant_facet;
use crate::models::{
    CellParameters, CrystalEntry, LatticeTriplet, MatchResult, MillerPlane, PlaneScore,
};
use crate::source::CrystalSource;

/// 匹配引擎
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine {
    /// 衬底晶格面
    substrate: LatticeTriplet,
}

impl MatchEngine {
    /// 创建匹配引擎
    pub fn new(substrate: LatticeTriplet) -> Self {
        Self { substrate }
    }

    /// 计算六个候选晶面的得分（固定顺序）
    pub fn score_planes(&self, cell: &CellParameters) -> Result<Vec<PlaneScore>, SkipReason> {
        let frame = CoordinateFrame::reconstruct(cell)?;

        Ok(derive_planes(&frame)
            .iter()
            .map(|plane| PlaneScore {
                label: plane.label,
                score: similarity::score(&self.substrate, &plane.triplet),
            })
            .collect())
    }

    /// 评估一个晶胞与其形貌
    pub fn evaluate(
        &self,
        cell: &CellParameters,
        morphology: &[MillerPlane],
    ) -> Result<MatchResult, SkipReason> {
        let plane_scores = self.score_planes(cell)?;

        let best = best_index(&plane_scores).ok_or(SkipReason::NoFiniteScore)?;
        let PlaneScore {
            label: predicted,
            score,
        } = plane_scores[best];

        let facet = dominant_facet(morphology).ok_or(SkipReason::MorphologyUnavailable)?;
        let reduced_plane = facet.reduced.to_string();

        Ok(MatchResult {
            score,
            predicted,
            low_energy_plane: facet.index.to_string(),
            is_match: predicted.as_str() == reduced_plane,
            reduced_plane,
            plane_scores,
        })
    }

    /// 从数据源取形貌并评估一个条目
    pub fn evaluate_entry(
        &self,
        entry: &CrystalEntry,
        source: &dyn CrystalSource,
    ) -> Result<MatchResult, SkipReason> {
        let morphology = source
            .morphology(&entry.identifier)
            .ok_or(SkipReason::MorphologyUnavailable)?;
        self.evaluate(&entry.cell, &morphology)
    }
}

/// 得分最小的晶面下标
///
/// 只在严格更小时更新，因此并列时取先出现者；NaN 永不胜出。
pub fn best_index(scores: &[PlaneScore]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold((f64::INFINITY, None), |(best, index), (i, s)| {
            if s.score < best {
                (s.score, Some(i))
            } else {
                (best, index)
            }
        })
        .1
}
