//! # 批量执行器
//!
//! 并行评估晶体条目。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示
//! - 跳过原因收集与汇总
//!
//! ## 依赖关系
//! - 被 `commands/matching.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{FacetMatchError, Result, SkipReason};
use crate::models::EntryReport;
use crate::utils::progress;

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单个条目处理结果
#[derive(Debug, Clone)]
pub enum EntryOutcome {
    /// 得到匹配结果
    Matched(EntryReport),
    /// 跳过（数据不完整或不自洽）
    Skipped(String, SkipReason), // (标识符, 原因)
}

/// 批量处理结果
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 匹配结果（输入顺序）
    pub reports: Vec<EntryReport>,
    /// 跳过详情
    pub skipped: Vec<(String, SkipReason)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Matched(report) => self.reports.push(report),
            EntryOutcome::Skipped(id, reason) => self.skipped.push((id, reason)),
        }
    }

    /// 匹配成功（预测晶面 = 最大面积晶面）的数量
    pub fn match_count(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_match).count()
    }

    /// 按原因统计跳过数量
    pub fn skip_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|(_, r)| *r == reason).count()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.reports.len() + self.skipped.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 自动）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理条目列表
    pub fn run<T, F>(&self, items: Vec<T>, processor: F) -> Result<BatchResult>
    where
        T: Sync,
        F: Fn(&T) -> EntryOutcome + Sync + Send,
    {
        let total = items.len();
        let pb = progress::create_progress_bar(total as u64, "Matching");

        let matched_count = AtomicUsize::new(0);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| FacetMatchError::Other(format!("Failed to build thread pool: {}", e)))?;

        let outcomes: Vec<EntryOutcome> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let outcome = processor(item);

                    if let EntryOutcome::Matched(_) = &outcome {
                        matched_count.fetch_add(1, Ordering::Relaxed);
                    }

                    pb.inc(1);
                    pb.set_message(format!(
                        "{} matched",
                        matched_count.load(Ordering::Relaxed)
                    ));
                    outcome
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for outcome in outcomes {
            batch_result.merge(outcome);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchEngine;
    use crate::models::{CellParameters, CrystalEntry, LatticeTriplet, MillerIndex, MillerPlane};

    fn entry(id: &str, c: f64) -> CrystalEntry {
        CrystalEntry::new(id, CellParameters::new(19.313, 12.6864, c, 90.0, 90.0, 90.0))
    }

    fn process(engine: &MatchEngine, entry: &CrystalEntry) -> EntryOutcome {
        let morphology = [MillerPlane::new(MillerIndex::new(0, 0, 1), 1, 0.9)];
        match engine.evaluate(&entry.cell, &morphology) {
            Ok(result) => EntryOutcome::Matched(EntryReport {
                entry: entry.clone(),
                result,
            }),
            Err(reason) => EntryOutcome::Skipped(entry.identifier.clone(), reason),
        }
    }

    #[test]
    fn test_run_preserves_order_and_counts() {
        let engine = MatchEngine::new(LatticeTriplet::new(19.313, 12.6864, 90.0));
        let entries: Vec<CrystalEntry> = (0..40)
            .map(|i| {
                let c = if i % 5 == 0 { 0.0 } else { 5.0 + i as f64 };
                entry(&format!("E{:02}", i), c)
            })
            .collect();

        let result = BatchRunner::new(4)
            .run(entries, |e| process(&engine, e))
            .unwrap();

        assert_eq!(result.total(), 40);
        assert_eq!(result.skipped.len(), 8);
        assert_eq!(result.skip_count(SkipReason::ZeroParameter), 8);
        assert_eq!(result.reports.len(), 32);
        assert_eq!(result.match_count(), 32);

        let ids: Vec<&str> = result
            .reports
            .iter()
            .map(|r| r.entry.identifier.as_str())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(result.skipped[0].0, "E00");
    }

    #[test]
    fn test_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }
}
