//! # facetmatch - 有机晶体晶面与衬底晶格匹配工具
//!
//! 对每个晶体条目重建晶胞，推导六个低指数候选晶面，
//! 按与衬底二维晶格的几何相似度选出最佳晶面，
//! 再与形貌预测中面积最大的晶面比较。
//!
//! ## 子命令
//! - `match`  - 批量匹配 CSV 数据源中的所有条目并导出结果
//! - `planes` - 列出单个晶胞的候选晶面（可选打分与绘图）
//! - `score`  - 计算两个二维晶格面之间的相似度
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── source/    (晶胞与形貌数据源)
//!   │     ├── matching/  (匹配引擎)
//!   │     ├── geometry/  (晶胞重建、晶面推导、相似度)
//!   │     ├── batch/     (并行批处理)
//!   │     └── report/    (表格、CSV、图表)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod geometry;
mod matching;
mod models;
mod report;
mod source;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
