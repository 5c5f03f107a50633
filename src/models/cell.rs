//! # 晶胞参数数据模型
//!
//! 三斜晶胞参数 (a, b, c, α, β, γ) 以及外部数据源提供的晶体条目。
//!
//! ## 依赖关系
//! - 被 `geometry/frame.rs`, `source/`, `matching/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 晶胞参数，长度单位 Å，角度单位度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CellParameters {
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    /// 任一参数恰好为零（数据缺失的标记），该条目应被跳过
    pub fn has_zero(&self) -> bool {
        [self.a, self.b, self.c, self.alpha, self.beta, self.gamma]
            .iter()
            .any(|&v| v == 0.0)
    }
}

/// 外部数据源中的一个晶体条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrystalEntry {
    /// 数据库标识符（如 CSD refcode）
    pub identifier: String,

    /// 可选：化合物名称
    pub name: Option<String>,

    /// 晶胞参数
    pub cell: CellParameters,

    /// 可选：分子结构字符串（如 SMILES），原样写入报告
    pub structure: Option<String>,
}

impl CrystalEntry {
    pub fn new(identifier: impl Into<String>, cell: CellParameters) -> Self {
        CrystalEntry {
            identifier: identifier.into(),
            name: None,
            cell,
            structure: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_structure(mut self, structure: impl Into<String>) -> Self {
        self.structure = Some(structure.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_zero() {
        let cell = CellParameters::new(5.0, 4.0, 3.0, 90.0, 90.0, 90.0);
        assert!(!cell.has_zero());

        let missing_c = CellParameters::new(5.0, 4.0, 0.0, 90.0, 90.0, 90.0);
        assert!(missing_c.has_zero());

        let missing_gamma = CellParameters::new(5.0, 4.0, 3.0, 90.0, 90.0, 0.0);
        assert!(missing_gamma.has_zero());
    }

    #[test]
    fn test_entry_builder() {
        let entry = CrystalEntry::new("TPBIAA", CellParameters::new(1.0, 1.0, 1.0, 90.0, 90.0, 90.0))
            .with_name("TPBi")
            .with_structure("c1ccccc1");
        assert_eq!(entry.identifier, "TPBIAA");
        assert_eq!(entry.name.as_deref(), Some("TPBi"));
        assert_eq!(entry.structure.as_deref(), Some("c1ccccc1"));
    }
}
