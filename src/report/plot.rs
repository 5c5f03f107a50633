//! # 晶面得分柱状图
//!
//! 使用 `plotters` 绘制六个候选晶面的相似度 M，最佳晶面高亮。
//! 支持 PNG 和 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/planes.rs` 调用
//! - 使用 `models/result.rs` 的 PlaneScore
//! - 使用 `plotters` 渲染图表

use crate::error::{FacetMatchError, Result};
use crate::models::PlaneScore;

use plotters::prelude::*;
use std::path::Path;

/// 生成得分柱状图
pub fn generate_score_plot(
    scores: &[PlaneScore],
    best: Option<usize>,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_score_chart(&root, scores, best, title)?;
        root.present()
            .map_err(|e| FacetMatchError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_score_chart(&root, scores, best, title)?;
        root.present()
            .map_err(|e| FacetMatchError::Other(e.to_string()))?;
    }
    Ok(())
}

fn draw_score_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    scores: &[PlaneScore],
    best: Option<usize>,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| FacetMatchError::Other(format!("{:?}", e)))?;

    let y_max = scores
        .iter()
        .map(|s| s.score)
        .filter(|s| s.is_finite())
        .fold(0.0_f64, f64::max)
        .max(0.1)
        * 1.15;

    let labels: Vec<String> = scores.iter().map(|s| s.label.to_string()).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(scores.len() as f64 - 0.5), 0.0..y_max)
        .map_err(|e| FacetMatchError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(scores.len())
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() < 1e-6 && i >= 0.0 {
                labels.get(i as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .x_desc("Plane (hkl)")
        .y_desc("Similarity M (lower is better)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| FacetMatchError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(
            scores
                .iter()
                .enumerate()
                .filter(|(_, s)| s.score.is_finite())
                .map(|(i, s)| {
                    let color = if Some(i) == best {
                        GREEN.filled()
                    } else {
                        BLUE.mix(0.6).filled()
                    };
                    let x = i as f64;
                    Rectangle::new([(x - 0.3, 0.0), (x + 0.3, s.score)], color)
                }),
        )
        .map_err(|e| FacetMatchError::Other(format!("{:?}", e)))?;

    Ok(())
}
