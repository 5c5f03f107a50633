//! # 最大面积晶面选择
//!
//! 从形貌中找出相对面积最大的晶面（经验上的最低表面能晶面）。
//!
//! 相对面积先舍入到 3 位小数再比较。多个晶面并列最大时，
//! 按顺序扫描并覆盖，最后一个并列者胜出。
//!
//! ## 依赖关系
//! - 被 `matching/engine.rs` 使用
//! - 使用 `models/morphology.rs`, `geometry/angle.rs` 的舍入

use crate::geometry::angle::round_to;
use crate::models::{MillerIndex, MillerPlane};

/// 最大面积晶面
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantFacet {
    /// 原始 Miller 指数（报告中的 "low energy plane"）
    pub index: MillerIndex,
    /// 按 order 约化后的 Miller 指数（用于与预测晶面比较）
    pub reduced: MillerIndex,
    /// 舍入后的相对面积
    pub relative_area: f64,
}

fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

/// 选择最大面积晶面；形貌为空时返回 None
pub fn dominant_facet(morphology: &[MillerPlane]) -> Option<DominantFacet> {
    let max_area = morphology
        .iter()
        .map(|p| round3(p.relative_area))
        .fold(f64::NEG_INFINITY, f64::max);

    morphology
        .iter()
        .filter(|p| round3(p.relative_area) == max_area)
        .last()
        .map(|p| DominantFacet {
            index: p.index,
            reduced: p.index.reduced(p.order),
            relative_area: max_area,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(h: i32, k: i32, l: i32, order: u32, area: f64) -> MillerPlane {
        MillerPlane::new(MillerIndex::new(h, k, l), order, area)
    }

    #[test]
    fn test_single_facet() {
        let facet = dominant_facet(&[plane(0, 0, 1, 1, 0.9)]).unwrap();
        assert_eq!(facet.index, MillerIndex::new(0, 0, 1));
        assert_eq!(facet.reduced, MillerIndex::new(0, 0, 1));
    }

    #[test]
    fn test_largest_area_wins() {
        let morphology = [
            plane(0, 1, 1, 1, 0.21),
            plane(0, 0, 2, 2, 0.45),
            plane(1, 0, 0, 1, 0.34),
        ];
        let facet = dominant_facet(&morphology).unwrap();
        assert_eq!(facet.index.to_string(), "(002)");
        assert_eq!(facet.reduced.to_string(), "(001)");
        assert_eq!(facet.relative_area, 0.45);
    }

    #[test]
    fn test_tie_resolves_to_last() {
        let morphology = [
            plane(0, 0, 1, 1, 0.4),
            plane(1, 0, 0, 1, 0.2),
            plane(0, 1, 0, 1, 0.4),
        ];
        let facet = dominant_facet(&morphology).unwrap();
        assert_eq!(facet.index, MillerIndex::new(0, 1, 0));
    }

    #[test]
    fn test_tie_after_rounding() {
        // 0.4001 与 0.3996 舍入后均为 0.400
        let morphology = [plane(0, 1, 0, 1, 0.4001), plane(1, 1, 0, 1, 0.3996)];
        let facet = dominant_facet(&morphology).unwrap();
        assert_eq!(facet.index, MillerIndex::new(1, 1, 0));
    }

    #[test]
    fn test_halfway_area_rounds_down_to_tie() {
        // 0.3015 舍入为 0.301，与后一个晶面并列，后者胜出
        let morphology = [plane(0, 0, 1, 1, 0.3015), plane(0, 1, 0, 1, 0.301)];
        let facet = dominant_facet(&morphology).unwrap();
        assert_eq!(facet.index, MillerIndex::new(0, 1, 0));
        assert_eq!(facet.relative_area, 0.301);
    }

    #[test]
    fn test_empty_morphology() {
        assert!(dominant_facet(&[]).is_none());
    }
}
