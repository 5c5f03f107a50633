//! # planes 命令实现
//!
//! 重建单个晶胞并列出六个候选晶面；给定衬底时附带得分、最佳晶面，
//! 以及可选的柱状图。
//!
//! ## 依赖关系
//! - 使用 `cli/planes.rs` 定义的 PlanesArgs
//! - 使用 `geometry/`, `matching/`, `report/`

use crate::cli::planes::PlanesArgs;
use crate::error::{FacetMatchError, Result};
use crate::geometry::{derive_planes, CoordinateFrame};
use crate::matching::{best_index, MatchEngine};
use crate::report::{plot, table};
use crate::utils::output;

/// 执行 planes 命令
pub fn execute(args: PlanesArgs) -> Result<()> {
    output::print_header("Candidate Lattice Planes");

    let cell = args.cell;
    output::print_info(&format!(
        "Cell: a={} b={} c={} α={} β={} γ={}",
        cell.a, cell.b, cell.c, cell.alpha, cell.beta, cell.gamma
    ));

    let frame = CoordinateFrame::reconstruct(&cell)
        .map_err(|reason| FacetMatchError::InvalidArgument(format!("cell rejected: {}", reason)))?;
    let planes = derive_planes(&frame);

    let substrate = match args.substrate {
        Some(s) => s,
        None => {
            println!("{}", table::planes_table(&planes, None));
            return Ok(());
        }
    };

    output::print_info(&format!("Matching against {}", substrate));

    let engine = MatchEngine::new(substrate);
    let scores = engine
        .score_planes(&cell)
        .map_err(|reason| FacetMatchError::InvalidArgument(format!("cell rejected: {}", reason)))?;

    println!("{}", table::planes_table(&planes, Some(&scores)));

    let best = best_index(&scores);

    match best {
        Some(i) => output::print_success(&format!(
            "Best plane: {} (M = {:.6})",
            scores[i].label, scores[i].score
        )),
        None => output::print_warning("No candidate plane produced a finite score."),
    }

    if let Some(ref path) = args.plot {
        plot::generate_score_plot(
            &scores,
            best,
            path,
            &format!("Plane similarity to {}", substrate),
            args.width,
            args.height,
        )?;
        output::print_success(&format!("Score chart saved to '{}'", path.display()));
    }

    Ok(())
}
