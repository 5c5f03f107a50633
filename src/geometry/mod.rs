//! # 晶格几何模块
//!
//! 晶格面多边形、相似度计算、晶胞坐标重建与候选晶面推导。
//!
//! ## 子模块
//! - `angle`: 带舍入的角度三角函数
//! - `polygon`: 平行四边形构建、面积与求交
//! - `similarity`: 对称差相似度 M
//! - `frame`: 从晶胞参数重建坐标
//! - `planes`: 六个候选晶面
//!
//! ## 依赖关系
//! - 被 `matching/` 和 `commands/` 使用
//! - 使用 `models/`

pub mod angle;
pub mod frame;
pub mod planes;
pub mod polygon;
pub mod similarity;

pub use frame::CoordinateFrame;
pub use planes::{derive_planes, CandidatePlane};
