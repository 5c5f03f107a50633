//! # planes 子命令 CLI 定义
//!
//! 显示一个晶胞的六个候选晶面，可选与衬底打分并绘图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/planes.rs`

use super::matching::{parse_cell, parse_triplet};
use crate::models::{CellParameters, LatticeTriplet};
use clap::Args;
use std::path::PathBuf;

/// planes 子命令参数
#[derive(Args, Debug)]
pub struct PlanesArgs {
    /// Unit cell as "a,b,c,alpha,beta,gamma" (angles in degrees)
    #[arg(value_parser = parse_cell, allow_hyphen_values = true)]
    pub cell: CellParameters,

    /// Substrate to score the planes against: preset name or "a,b,gamma"
    #[arg(short, long, value_parser = parse_triplet)]
    pub substrate: Option<LatticeTriplet>,

    /// Save a bar chart of the plane scores (PNG, or SVG by extension); requires --substrate
    #[arg(long, requires = "substrate")]
    pub plot: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
