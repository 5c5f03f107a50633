//! # 候选晶面推导
//!
//! 从重建的坐标框架推导六个低指数晶面对应的二维晶格面：
//!
//! | 晶面 | 晶格面 |
//! |------|--------|
//! | (001) | [a, b, γ] |
//! | (010) | [a, c, β] |
//! | (100) | [b, c, α] |
//! | (110) | [c, s1, a1] |
//! | (101) | [b, s2, a2] |
//! | (011) | [a, s3, a3] |
//!
//! 其中 s1..s3 为面对角线长度，a1..a3 为对应夹角。输出顺序固定，
//! 得分相同时排在前面的晶面优先。
//!
//! ## 依赖关系
//! - 被 `matching/engine.rs` 和 `commands/planes.rs` 使用
//! - 使用 `geometry/frame.rs`, `geometry/angle.rs`

use crate::geometry::angle::arccos_deg;
use crate::geometry::frame::CoordinateFrame;
use crate::models::{LatticeTriplet, PlaneLabel};

/// 带标签的候选晶面
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePlane {
    pub label: PlaneLabel,
    pub triplet: LatticeTriplet,
}

/// 推导六个候选晶面（固定顺序）
pub fn derive_planes(frame: &CoordinateFrame) -> [CandidatePlane; 6] {
    let cell = frame.cell();
    let (a, b, c) = (cell.a, cell.b, cell.c);
    let CoordinateFrame {
        x1, y1, x3, y3, z3, ..
    } = *frame;

    // (110)
    let s1 = ((x1 - b).powi(2) + y1.powi(2)).sqrt();
    let a1 = arccos_deg((x3 * (x1 - b) + y3 * y1) / (c * s1));

    // (101)
    let s2 = ((x1 - x3).powi(2) + (y1 - y3).powi(2) + (-z3).powi(2)).sqrt();
    let a2 = arccos_deg((x1 - x3) / s2);

    // (011)
    let s3 = ((b - x3).powi(2) + y3.powi(2) + z3.powi(2)).sqrt();
    let a3 = arccos_deg((x1 * (b - x3) - y1 * y3) / (a * s3));

    let triplets = [
        LatticeTriplet::new(a, b, cell.gamma),
        LatticeTriplet::new(a, c, cell.beta),
        LatticeTriplet::new(b, c, cell.alpha),
        LatticeTriplet::new(c, s1, a1),
        LatticeTriplet::new(b, s2, a2),
        LatticeTriplet::new(a, s3, a3),
    ];

    std::array::from_fn(|i| CandidatePlane {
        label: PlaneLabel::ALL[i],
        triplet: triplets[i],
    })
}
