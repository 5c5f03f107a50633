//! # match 命令实现
//!
//! 对数据源中的每个晶体条目评估衬底匹配，并导出结果。
//!
//! ## 功能
//! - 从 CSV 数据源读取晶胞与形貌
//! - 并行评估（rayon）
//! - 跳过不完整或不自洽的条目，不中断批处理
//! - 终端表格汇总，结果导出为 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/matching.rs` 定义的 MatchArgs
//! - 使用 `source/` 读取数据，`matching/` 计算，`batch/` 并行
//! - 使用 `report/` 输出

use crate::batch::{BatchResult, BatchRunner, EntryOutcome};
use crate::cli::matching::MatchArgs;
use crate::error::{Result, SkipReason};
use crate::matching::MatchEngine;
use crate::models::{CrystalEntry, EntryReport};
use crate::report::{export, table};
use crate::source::{CrystalSource, CsvSource};
use crate::utils::output;

/// 执行 match 命令
pub fn execute(args: MatchArgs) -> Result<()> {
    output::print_header("Substrate / Facet Matching");

    let source = CsvSource::open(&args.cells, &args.morphology, &args.delimiter)?;
    let entries = source.entries();

    output::print_info(&format!(
        "Loaded {} entries from '{}'",
        entries.len(),
        args.cells.display()
    ));
    output::print_info(&format!(
        "Loaded morphology for {} entries from '{}'",
        source.morphology_count(),
        args.morphology.display()
    ));
    output::print_info(&format!("Matching against {}", args.substrate));

    if entries.is_empty() {
        output::print_warning("No entries to match.");
        return Ok(());
    }

    let engine = MatchEngine::new(args.substrate);
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));
    let result = runner.run(entries, |entry| process_entry(&engine, entry, &source))?;

    // 跳过的条目
    if args.verbose {
        for (identifier, reason) in &result.skipped {
            output::print_skip(identifier, &reason.to_string());
        }
    }

    if let Some(table) = table::results_table(&result.reports, args.top_n) {
        output::print_header(&format!(
            "First {} Results",
            args.top_n.min(result.reports.len())
        ));
        println!("{}", table);
    }

    print_summary(&result);

    if result.reports.is_empty() {
        output::print_warning("No entries could be matched; no results written.");
        return Ok(());
    }

    export::to_csv(&result.reports, &args.output, args.all_scores)?;
    output::print_done(&format!(
        "{} results saved to '{}'",
        result.reports.len(),
        args.output.display()
    ));

    Ok(())
}

/// 评估单个条目
fn process_entry(
    engine: &MatchEngine,
    entry: &CrystalEntry,
    source: &dyn CrystalSource,
) -> EntryOutcome {
    match engine.evaluate_entry(entry, source) {
        Ok(result) => EntryOutcome::Matched(EntryReport {
            entry: entry.clone(),
            result,
        }),
        Err(reason) => EntryOutcome::Skipped(entry.identifier.clone(), reason),
    }
}

/// 打印统计
fn print_summary(result: &BatchResult) {
    output::print_separator();

    let matched = result.reports.len();
    let agree = result.match_count();
    let rate = if matched > 0 {
        agree as f64 * 100.0 / matched as f64
    } else {
        0.0
    };

    output::print_success(&format!(
        "Evaluated {} of {} entries: {} predicted planes agree with the dominant facet ({:.1}%)",
        matched,
        result.total(),
        agree,
        rate
    ));

    if !result.skipped.is_empty() {
        output::print_warning(&format!(
            "Skipped {} entries: {} zero parameters, {} inconsistent cells, {} without morphology, {} without finite score",
            result.skipped.len(),
            result.skip_count(SkipReason::ZeroParameter),
            result.skip_count(SkipReason::InconsistentCell),
            result.skip_count(SkipReason::MorphologyUnavailable),
            result.skip_count(SkipReason::NoFiniteScore),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellParameters, LatticeTriplet, PlaneLabel};

    const CELLS: &str = "\
refcode;;;name;;;a;;;b;;;c;;;alpha;;;beta;;;gamma
TPBIAA;;;TPBi;;;19.313;;;12.6864;;;10;;;90;;;90;;;90
ZEROED;;;;;;19.313;;;12.6864;;;10;;;0;;;90;;;90
NOMORPH;;;;;;19.313;;;12.6864;;;10;;;90;;;90;;;90
TWISTED;;;;;;5;;;5;;;5;;;30;;;30;;;120
";

    const MORPHOLOGY: &str = "\
refcode,hkl,order,relative_area
TPBIAA,(0 0 1),1,0.9
ZEROED,(0 0 1),1,0.9
TWISTED,(0 0 1),1,0.9
";

    #[test]
    fn test_batch_over_csv_source() {
        let source = CsvSource::from_content(CELLS, MORPHOLOGY, ";;;").unwrap();
        let engine = MatchEngine::new(LatticeTriplet::new(19.313, 12.6864, 90.0));

        let result = BatchRunner::new(2)
            .run(source.entries(), |e| process_entry(&engine, e, &source))
            .unwrap();

        assert_eq!(result.total(), 4);
        assert_eq!(result.reports.len(), 1);

        let report = &result.reports[0];
        assert_eq!(report.entry.identifier, "TPBIAA");
        assert_eq!(report.result.predicted, PlaneLabel::Plane001);
        assert_eq!(report.result.low_energy_plane, "(001)");
        assert!(report.result.is_match);

        assert_eq!(
            result.skipped,
            vec![
                ("ZEROED".to_string(), SkipReason::ZeroParameter),
                ("NOMORPH".to_string(), SkipReason::MorphologyUnavailable),
                ("TWISTED".to_string(), SkipReason::InconsistentCell),
            ]
        );
    }

    #[test]
    fn test_process_entry_keeps_passthrough_fields() {
        let entry = CrystalEntry::new(
            "TPBIAA",
            CellParameters::new(19.313, 12.6864, 10.0, 90.0, 90.0, 90.0),
        )
        .with_structure("c1ccccc1");
        let source = CsvSource::from_content(
            "refcode,a,b,c,alpha,beta,gamma\n",
            MORPHOLOGY,
            ",",
        )
        .unwrap();
        let engine = MatchEngine::new(LatticeTriplet::new(19.313, 12.6864, 90.0));

        match process_entry(&engine, &entry, &source) {
            EntryOutcome::Matched(report) => {
                assert_eq!(report.entry.structure.as_deref(), Some("c1ccccc1"));
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }
}
