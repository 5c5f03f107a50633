//! # 统一错误处理模块
//!
//! 定义 facetmatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! - `FacetMatchError`: 致命错误，终止本次运行
//! - `SkipReason`: 单个条目被跳过的原因，不影响批处理
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// facetmatch 统一错误类型
#[derive(Error, Debug)]
pub enum FacetMatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Invalid Miller index: {0}")]
    InvalidMillerIndex(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid substrate: {0}")]
    InvalidSubstrate(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// 条目跳过原因（数据质量过滤，不是故障）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    #[error("cell has a zero parameter")]
    ZeroParameter,

    #[error("cell parameters are geometrically inconsistent")]
    InconsistentCell,

    #[error("morphology unavailable")]
    MorphologyUnavailable,

    #[error("no candidate plane produced a finite score")]
    NoFiniteScore,
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FacetMatchError>;
