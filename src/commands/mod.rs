//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `matching/`, `source/`, `report/`, `utils/`
//! - 子模块: matching, planes, score

pub mod matching;
pub mod planes;
pub mod score;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Match(args) => matching::execute(args),
        Commands::Planes(args) => planes::execute(args),
        Commands::Score(args) => score::execute(args),
    }
}
