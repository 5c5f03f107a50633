//! # 匹配结果导出
//!
//! 每个匹配成功的条目输出一行；被跳过的条目不输出占位行。
//!
//! ## 列
//! `refcode, name, a, b, c, alpha, beta, gamma, m, plane, low_energy_plane, match, smiles`，
//! 开启 `all_scores` 时追加六列 `m_(001)` ... `m_(011)`。
//!
//! ## 依赖关系
//! - 被 `commands/matching.rs` 调用
//! - 使用 `models/result.rs` 的 EntryReport
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{FacetMatchError, Result};
use crate::models::{EntryReport, PlaneLabel};

use std::io::Write;
use std::path::Path;

const BASE_COLUMNS: [&str; 13] = [
    "refcode",
    "name",
    "a",
    "b",
    "c",
    "alpha",
    "beta",
    "gamma",
    "m",
    "plane",
    "low_energy_plane",
    "match",
    "smiles",
];

/// 导出结果到 CSV 文件
pub fn to_csv(reports: &[EntryReport], output_path: &Path, all_scores: bool) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| FacetMatchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    write_csv(reports, file, all_scores)
}

/// 导出结果到任意 writer
pub fn write_csv<W: Write>(reports: &[EntryReport], writer: W, all_scores: bool) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = BASE_COLUMNS.iter().map(|s| s.to_string()).collect();
    if all_scores {
        header.extend(PlaneLabel::ALL.iter().map(|l| format!("m_{}", l)));
    }
    wtr.write_record(&header)?;

    for report in reports {
        let entry = &report.entry;
        let result = &report.result;
        let cell = &entry.cell;

        let mut row = vec![
            entry.identifier.clone(),
            entry.name.clone().unwrap_or_default(),
            cell.a.to_string(),
            cell.b.to_string(),
            cell.c.to_string(),
            cell.alpha.to_string(),
            cell.beta.to_string(),
            cell.gamma.to_string(),
            format!("{:.6}", result.score),
            result.predicted.to_string(),
            result.low_energy_plane.clone(),
            result.is_match.to_string(),
            entry.structure.clone().unwrap_or_default(),
        ];

        if all_scores {
            row.extend(result.plane_scores.iter().map(|s| format!("{:.6}", s.score)));
        }

        wtr.write_record(&row)?;
    }

    wtr.flush()
        .map_err(|e| FacetMatchError::Other(format!("Failed to flush CSV output: {}", e)))?;

    Ok(())
}
