//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `match`: 批量匹配衬底与晶体的候选晶面
//! - `planes`: 显示单个晶胞的六个候选晶面
//! - `score`: 计算两个晶格面的相似度
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: matching, planes, score

pub mod matching;
pub mod planes;
pub mod score;

use clap::{Parser, Subcommand};

/// facetmatch - 衬底晶格与晶体生长晶面匹配工具
#[derive(Parser)]
#[command(name = "facetmatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Match a substrate lattice against low-index crystal planes and predicted growth facets",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Match a substrate against every crystal in a cells file and compare with its dominant facet
    Match(matching::MatchArgs),

    /// Show the six candidate planes derived from one unit cell
    Planes(planes::PlanesArgs),

    /// Compute the similarity M between two 2D lattices
    Score(score::ScoreArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatticeTriplet;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from(["facetmatch", "score", "tpbi", "12.6864,19.313,90"]).unwrap();
        match cli.command {
            Commands::Score(args) => {
                assert_eq!(args.candidate, LatticeTriplet::new(12.6864, 19.313, 90.0));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn test_plot_requires_substrate() {
        let result = Cli::try_parse_from([
            "facetmatch",
            "planes",
            "5,4,3,90,90,90",
            "--plot",
            "scores.png",
        ]);
        assert!(result.is_err());
    }
}
