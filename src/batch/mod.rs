//! # 批量处理模块
//!
//! 提供晶体条目的并行批量评估能力。
//!
//! ## 功能
//! - 并行处理，结果保持输入顺序
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/matching.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchResult, BatchRunner, EntryOutcome};
