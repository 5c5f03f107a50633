//! # 终端表格
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `tabled`

use crate::geometry::CandidatePlane;
use crate::models::{EntryReport, PlaneScore};
use tabled::{Table, Tabled};

/// 匹配结果行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Refcode")]
    refcode: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "M")]
    score: String,
    #[tabled(rename = "Plane")]
    plane: String,
    #[tabled(rename = "Low energy plane")]
    low_energy_plane: String,
    #[tabled(rename = "Match")]
    is_match: String,
}

/// 候选晶面行
#[derive(Debug, Clone, Tabled)]
struct PlaneRow {
    #[tabled(rename = "(hkl)")]
    label: String,
    #[tabled(rename = "Side 1 (Å)")]
    side_a: String,
    #[tabled(rename = "Side 2 (Å)")]
    side_b: String,
    #[tabled(rename = "Angle (°)")]
    angle: String,
    #[tabled(rename = "M")]
    score: String,
}

/// 渲染前 `count` 条匹配结果
pub fn results_table(reports: &[EntryReport], count: usize) -> Option<String> {
    let rows: Vec<ResultRow> = reports
        .iter()
        .take(count)
        .map(|r| ResultRow {
            refcode: r.entry.identifier.clone(),
            name: r.entry.name.clone().unwrap_or_default(),
            score: format!("{:.4}", r.result.score),
            plane: r.result.predicted.to_string(),
            low_energy_plane: r.result.low_energy_plane.clone(),
            is_match: if r.result.is_match { "yes" } else { "no" }.to_string(),
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table::new(&rows).to_string())
}

/// 渲染六个候选晶面，得分可选
pub fn planes_table(planes: &[CandidatePlane], scores: Option<&[PlaneScore]>) -> String {
    let rows: Vec<PlaneRow> = planes
        .iter()
        .enumerate()
        .map(|(i, p)| PlaneRow {
            label: p.label.to_string(),
            side_a: format!("{:.4}", p.triplet.side_a),
            side_b: format!("{:.4}", p.triplet.side_b),
            angle: format!("{:.3}", p.triplet.angle),
            score: scores
                .and_then(|s| s.get(i))
                .map(|s| format!("{:.4}", s.score))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    Table::new(&rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{derive_planes, CoordinateFrame};
    use crate::models::CellParameters;

    #[test]
    fn test_planes_table_without_scores() {
        let cell = CellParameters::new(5.0, 4.0, 3.0, 90.0, 90.0, 90.0);
        let planes = derive_planes(&CoordinateFrame::reconstruct(&cell).unwrap());
        let table = planes_table(&planes, None);

        assert!(table.contains("(hkl)"));
        assert!(table.contains("(011)"));
        assert!(table.contains("4.0000"));
    }

    #[test]
    fn test_results_table_empty() {
        assert!(results_table(&[], 10).is_none());
    }
}
