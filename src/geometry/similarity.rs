//! # 晶格面相似度
//!
//! 相似度 M = |S.area + T.area - 2 (S ∩ T).area| / S.area，
//! 即对称差面积相对于衬底面积 S 的比值。0 表示形状相同，数值越大差异越大，
//! 没有上界（T 可以比 S 大得多）。
//!
//! T 的两条边可以任意排列，因此总是取两种排列中较小的 M。
//!
//! ## 依赖关系
//! - 被 `matching/engine.rs` 和 `commands/score.rs` 使用
//! - 使用 `geometry/polygon.rs`

use crate::geometry::polygon::LatticePolygon;
use crate::models::LatticeTriplet;

/// 单一边序下的 M
///
/// 衬底面积为零时返回 +∞。
pub fn raw_score(substrate: &LatticeTriplet, candidate: &LatticeTriplet) -> f64 {
    let ps = LatticePolygon::from_triplet(substrate);
    raw_score_with(&ps, candidate)
}

fn raw_score_with(substrate: &LatticePolygon, candidate: &LatticeTriplet) -> f64 {
    let area_s = substrate.area();
    if area_s == 0.0 {
        return f64::INFINITY;
    }
    let pt = LatticePolygon::from_triplet(candidate);
    ((area_s + pt.area() - 2.0 * substrate.intersection_area(&pt)) / area_s).abs()
}

/// 衬底与候选晶面的相似度（两种边序取最小）
pub fn score(substrate: &LatticeTriplet, candidate: &LatticeTriplet) -> f64 {
    let ps = LatticePolygon::from_triplet(substrate);
    let m1 = raw_score_with(&ps, candidate);
    let m2 = raw_score_with(&ps, &candidate.swapped());
    m1.min(m2)
}
