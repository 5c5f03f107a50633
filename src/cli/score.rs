//! # score 子命令 CLI 定义
//!
//! 计算两个二维晶格面之间的相似度 M。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/score.rs`

use super::matching::parse_triplet;
use crate::models::LatticeTriplet;
use clap::Args;

/// score 子命令参数
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Substrate lattice: preset name or "a,b,gamma"
    #[arg(value_parser = parse_triplet)]
    pub substrate: LatticeTriplet,

    /// Candidate lattice: preset name or "a,b,gamma"
    #[arg(value_parser = parse_triplet)]
    pub candidate: LatticeTriplet,
}
