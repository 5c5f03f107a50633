//! # 数据模型模块
//!
//! 定义晶格面、晶胞参数、形貌和匹配结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `geometry/`, `matching/`, `source/`, `report/` 和 `commands/` 使用
//! - 子模块: triplet, cell, morphology, result

pub mod cell;
pub mod morphology;
pub mod result;
pub mod triplet;

pub use cell::{CellParameters, CrystalEntry};
pub use morphology::{MillerIndex, MillerPlane};
pub use result::{EntryReport, MatchResult, PlaneScore};
pub use triplet::{LatticeTriplet, PlaneLabel};
