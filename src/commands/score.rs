//! # score 命令实现
//!
//! 输出两种边序下各自的 M 以及最终取值。
//!
//! ## 依赖关系
//! - 使用 `cli/score.rs` 定义的 ScoreArgs
//! - 使用 `geometry/similarity.rs`

use crate::cli::score::ScoreArgs;
use crate::error::Result;
use crate::geometry::similarity;
use crate::utils::output;

/// 执行 score 命令
pub fn execute(args: ScoreArgs) -> Result<()> {
    output::print_header("Lattice Similarity");

    let substrate = args.substrate;
    let candidate = args.candidate;

    output::print_info(&format!("Substrate: {}", substrate));
    output::print_info(&format!("Candidate: {}", candidate));
    output::print_separator();

    let swapped = candidate.swapped();
    println!(
        "  {:<28} M = {:.6}",
        candidate.to_string(),
        similarity::raw_score(&substrate, &candidate)
    );
    println!(
        "  {:<28} M = {:.6}",
        swapped.to_string(),
        similarity::raw_score(&substrate, &swapped)
    );

    let m = similarity::score(&substrate, &candidate);
    if m.is_finite() {
        output::print_success(&format!("M = {:.6}", m));
    } else {
        output::print_warning("Substrate has zero area; M is undefined.");
    }

    Ok(())
}
