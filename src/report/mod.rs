//! # 报告模块
//!
//! 匹配结果的导出与展示。
//!
//! ## 子模块
//! - `export`: CSV 导出
//! - `table`: 终端表格
//! - `plot`: 晶面得分柱状图
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod export;
pub mod plot;
pub mod table;
