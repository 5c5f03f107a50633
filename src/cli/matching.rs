//! # match 子命令 CLI 定义
//!
//! 批量评估晶体条目：每个条目的最佳匹配晶面与最大面积晶面是否一致。
//! 同时定义衬底与晶胞参数的解析函数，供其他子命令共用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/planes.rs`, `cli/score.rs` 使用
//! - 参数传递给 `commands/matching.rs`

use crate::models::{CellParameters, LatticeTriplet};
use clap::Args;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────
// 衬底与晶胞解析
// ─────────────────────────────────────────────────────────────

/// 预定义衬底晶格面 (a, b, γ)
pub fn get_predefined_substrate(name: &str) -> Option<LatticeTriplet> {
    match name.to_lowercase().as_str() {
        "tpbi" => Some(LatticeTriplet::new(19.313, 12.6864, 90.0)),
        "rubrene" => Some(LatticeTriplet::new(7.175, 14.435, 90.0)),
        "npb" => Some(LatticeTriplet::new(11.34, 15.88, 87.68)),
        "4czipn" => Some(LatticeTriplet::new(9.0, 19.580, 89.86)),
        _ => None,
    }
}

/// 解析逗号或空白分隔的数字列表，允许外层方括号
fn parse_numbers(input: &str) -> Result<Vec<f64>, String> {
    input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", s))
        })
        .collect()
}

/// 解析二维晶格面（预定义名称或 "a,b,gamma"）
pub fn parse_triplet(input: &str) -> Result<LatticeTriplet, String> {
    // 先尝试解析为预定义衬底
    if let Some(t) = get_predefined_substrate(input.trim()) {
        return Ok(t);
    }

    let values = parse_numbers(input)?;
    if values.len() != 3 {
        return Err(format!(
            "Invalid lattice '{}'. Use 'a,b,gamma' (e.g., 19.313,12.6864,90) or a name: tpbi, rubrene, npb, 4czipn",
            input
        ));
    }

    let triplet = LatticeTriplet::new(values[0], values[1], values[2]);
    triplet.validate().map_err(|e| e.to_string())?;
    Ok(triplet)
}

/// 解析晶胞参数 "a,b,c,alpha,beta,gamma"
pub fn parse_cell(input: &str) -> Result<CellParameters, String> {
    let values = parse_numbers(input)?;
    if values.len() != 6 {
        return Err(format!(
            "Invalid cell '{}'. Use 'a,b,c,alpha,beta,gamma' (angles in degrees)",
            input
        ));
    }
    Ok(CellParameters::new(
        values[0], values[1], values[2], values[3], values[4], values[5],
    ))
}

// ─────────────────────────────────────────────────────────────
// match 子命令
// ─────────────────────────────────────────────────────────────

/// match 子命令参数
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// CSV file with unit cells (columns: refcode, a, b, c, alpha, beta, gamma; optional name, smiles)
    pub cells: PathBuf,

    /// CSV file with facet morphology (columns: refcode, hkl, order, relative_area)
    #[arg(short, long)]
    pub morphology: PathBuf,

    /// Substrate lattice: preset name (tpbi, rubrene, npb, 4czipn) or "a,b,gamma"
    #[arg(
        short,
        long,
        default_value = "tpbi",
        env = "FACETMATCH_SUBSTRATE",
        value_parser = parse_triplet
    )]
    pub substrate: LatticeTriplet,

    /// Field delimiter of the cells file (multi-character delimiters such as ';;;' are allowed)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Filename for the results CSV
    #[arg(short, long, default_value = "match_results.csv")]
    pub output: PathBuf,

    /// Append the score of every candidate plane to the results CSV
    #[arg(long, default_value_t = false)]
    pub all_scores: bool,

    /// Number of results to print in the summary table
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "FACETMATCH_JOBS")]
    pub jobs: usize,

    /// List every skipped entry with its reason
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
