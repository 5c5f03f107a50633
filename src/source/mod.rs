//! # 晶体数据源
//!
//! 匹配核心只依赖 `CrystalSource` trait：按条目提供晶胞参数，
//! 按标识符提供形貌。具体数据来自何处（文件、数据库、形貌预测服务）
//! 由实现决定。
//!
//! ## 子模块
//! - `csv_file`: 基于 CSV 文件的数据源
//!
//! ## 依赖关系
//! - 被 `matching/engine.rs` 和 `commands/matching.rs` 使用
//! - 使用 `models/`

pub mod csv_file;

pub use csv_file::CsvSource;

use crate::models::{CrystalEntry, MillerPlane};
#[cfg(test)]
use std::collections::HashMap;

/// 晶体数据源
pub trait CrystalSource: Sync {
    /// 全部条目（保持输入顺序）
    fn entries(&self) -> Vec<CrystalEntry>;

    /// 某个条目的形貌；无法获取时返回 None
    fn morphology(&self, identifier: &str) -> Option<Vec<MillerPlane>>;
}

/// 内存数据源（测试用）
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: Vec<CrystalEntry>,
    morphologies: HashMap<String, Vec<MillerPlane>>,
}

#[cfg(test)]
impl InMemorySource {
    pub fn new(entries: Vec<CrystalEntry>) -> Self {
        Self {
            entries,
            morphologies: HashMap::new(),
        }
    }

    /// 追加一个条目的形貌
    pub fn with_morphology(
        mut self,
        identifier: impl Into<String>,
        planes: Vec<MillerPlane>,
    ) -> Self {
        self.morphologies.insert(identifier.into(), planes);
        self
    }
}

#[cfg(test)]
impl CrystalSource for InMemorySource {
    fn entries(&self) -> Vec<CrystalEntry> {
        self.entries.clone()
    }

    fn morphology(&self, identifier: &str) -> Option<Vec<MillerPlane>> {
        self.morphologies
            .get(identifier)
            .filter(|planes| !planes.is_empty())
            .cloned()
    }
}
