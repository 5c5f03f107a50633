//! # 二维晶格面数据模型
//!
//! `LatticeTriplet` 用 (边长, 边长, 夹角) 描述一个二维晶格面；
//! `PlaneLabel` 是六个候选低指数晶面的固定标签。
//!
//! ## 依赖关系
//! - 被 `geometry/` 和 `matching/` 使用
//! - 无外部模块依赖

use crate::error::{FacetMatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 二维晶格面 (a, b, γ)
///
/// 两条边的先后顺序没有物理意义，比较时两种顺序都要尝试。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeTriplet {
    /// 第一条边长 (Å)
    pub side_a: f64,
    /// 第二条边长 (Å)
    pub side_b: f64,
    /// 夹角（度）
    pub angle: f64,
}

impl LatticeTriplet {
    pub fn new(side_a: f64, side_b: f64, angle: f64) -> Self {
        Self {
            side_a,
            side_b,
            angle,
        }
    }

    /// 交换两条边
    pub fn swapped(&self) -> Self {
        Self::new(self.side_b, self.side_a, self.angle)
    }

    /// 检查是否为合法的晶格面（仅用于用户输入的衬底）
    pub fn validate(&self) -> Result<()> {
        let sides_ok = self.side_a.is_finite()
            && self.side_b.is_finite()
            && self.side_a > 0.0
            && self.side_b > 0.0;
        if !sides_ok {
            return Err(FacetMatchError::InvalidSubstrate(format!(
                "{} (side lengths must be positive)",
                self
            )));
        }
        if !(self.angle > 0.0 && self.angle < 180.0) {
            return Err(FacetMatchError::InvalidSubstrate(format!(
                "{} (angle must be in (0, 180) degrees)",
                self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for LatticeTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.side_a, self.side_b, self.angle)
    }
}

/// 六个候选晶面，顺序即平局时的优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneLabel {
    Plane001,
    Plane010,
    Plane100,
    Plane110,
    Plane101,
    Plane011,
}

impl PlaneLabel {
    /// 固定顺序的全部标签
    pub const ALL: [PlaneLabel; 6] = [
        PlaneLabel::Plane001,
        PlaneLabel::Plane010,
        PlaneLabel::Plane100,
        PlaneLabel::Plane110,
        PlaneLabel::Plane101,
        PlaneLabel::Plane011,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaneLabel::Plane001 => "(001)",
            PlaneLabel::Plane010 => "(010)",
            PlaneLabel::Plane100 => "(100)",
            PlaneLabel::Plane110 => "(110)",
            PlaneLabel::Plane101 => "(101)",
            PlaneLabel::Plane011 => "(011)",
        }
    }
}

impl fmt::Display for PlaneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped() {
        let t = LatticeTriplet::new(3.0, 4.0, 70.0);
        assert_eq!(t.swapped(), LatticeTriplet::new(4.0, 3.0, 70.0));
    }

    #[test]
    fn test_validate() {
        assert!(LatticeTriplet::new(19.313, 12.6864, 90.0).validate().is_ok());
        assert!(LatticeTriplet::new(0.0, 12.6864, 90.0).validate().is_err());
        assert!(LatticeTriplet::new(1.0, -2.0, 90.0).validate().is_err());
        assert!(LatticeTriplet::new(1.0, 2.0, 180.0).validate().is_err());
        assert!(LatticeTriplet::new(1.0, 2.0, 0.0).validate().is_err());
        assert!(LatticeTriplet::new(1.0, 2.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_plane_label_order_and_display() {
        let labels: Vec<String> = PlaneLabel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            labels,
            vec!["(001)", "(010)", "(100)", "(110)", "(101)", "(011)"]
        );
    }
}
