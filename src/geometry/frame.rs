//! # 晶胞坐标重建
//!
//! 由三斜晶胞参数 (a, b, c, α, β, γ) 重建晶胞棱的笛卡尔坐标：
//!
//! ```text
//! x1 = a cosγ;   y1 = sqrt(a² - x1²)
//! x3 = c cosα
//! y3 = (a c cosβ - x1 x3) / y1
//! z3 = sqrt(c² - x3² - y3²)
//! ```
//!
//! 第一条棱沿 x 轴，第二条在 xy 平面内，第三条由 α、β 定位。
//! 根号下为负（参数几何不自洽）时不会产生 NaN，而是返回跳过原因。
//!
//! ## 依赖关系
//! - 被 `geometry/planes.rs` 使用
//! - 使用 `geometry/angle.rs`, `models/cell.rs`

use crate::error::SkipReason;
use crate::geometry::angle::cos_deg;
use crate::models::CellParameters;

/// 重建后的晶胞坐标框架（只读）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateFrame {
    cell: CellParameters,
    pub x1: f64,
    pub y1: f64,
    pub x3: f64,
    pub y3: f64,
    pub z3: f64,
}

impl CoordinateFrame {
    /// 从晶胞参数重建
    pub fn reconstruct(cell: &CellParameters) -> Result<Self, SkipReason> {
        if cell.has_zero() {
            return Err(SkipReason::ZeroParameter);
        }

        let CellParameters {
            a,
            c,
            alpha,
            beta,
            gamma,
            ..
        } = *cell;

        let x1 = a * cos_deg(gamma);
        let y1 = checked_sqrt(a.powi(2) - x1.powi(2))?;
        if y1 == 0.0 {
            return Err(SkipReason::InconsistentCell);
        }

        let x3 = c * cos_deg(alpha);
        let y3 = (a * c * cos_deg(beta) - x1 * x3) / y1;
        let z3 = checked_sqrt(c.powi(2) - x3.powi(2) - y3.powi(2))?;

        let frame = Self {
            cell: *cell,
            x1,
            y1,
            x3,
            y3,
            z3,
        };

        if [x1, y1, x3, y3, z3].iter().all(|v| v.is_finite()) {
            Ok(frame)
        } else {
            Err(SkipReason::InconsistentCell)
        }
    }

    /// 原始晶胞参数
    pub fn cell(&self) -> &CellParameters {
        &self.cell
    }
}

fn checked_sqrt(value: f64) -> Result<f64, SkipReason> {
    if value < 0.0 || value.is_nan() {
        Err(SkipReason::InconsistentCell)
    } else {
        Ok(value.sqrt())
    }
}
