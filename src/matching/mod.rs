//! # 匹配模块
//!
//! 衬底与候选晶面的最佳匹配，以及与最大面积晶面的比较。
//!
//! ## 子模块
//! - `engine`: 匹配引擎
//! - `dominant`: 最大面积晶面选择
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `geometry/`, `models/`, `source/`

pub mod dominant;
pub mod engine;

pub use engine::{best_index, MatchEngine};
