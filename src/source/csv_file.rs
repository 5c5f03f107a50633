//! # CSV 数据源
//!
//! 从两个 CSV 文件读取晶体数据：
//!
//! ## 晶胞文件
//! ```text
//! refcode,name,a,b,c,alpha,beta,gamma,smiles
//! TPBIAA,TPBi,19.313,12.6864,10.0,90,90,90,c1ccc...
//! ```
//! `name` 与 `smiles` 列可省略。空值或非数字的晶胞参数按 0（缺失）处理，
//! 该条目随后被跳过。分隔符可以是多字符（如旧数据的 `;;;`），
//! 解析前统一替换为单字节分隔符。
//!
//! ## 形貌文件
//! ```text
//! refcode,hkl,order,relative_area
//! TPBIAA,(0 0 2),2,0.412
//! ```
//! `order` 列可省略（默认为 1）。同一 refcode 的晶面保持文件中的顺序。
//!
//! ## 依赖关系
//! - 被 `commands/matching.rs` 使用
//! - 使用 `csv` + `serde` 反序列化
//! - 使用 `models/`

use crate::error::{FacetMatchError, Result};
use crate::models::{CellParameters, CrystalEntry, MillerIndex, MillerPlane};
use crate::source::CrystalSource;

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 多字符分隔符替换成的单字节分隔符（ASCII Unit Separator）
const UNIT_SEPARATOR: u8 = 0x1f;

/// 晶胞文件的一行
#[derive(Debug, Deserialize)]
struct CellRecord {
    refcode: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(deserialize_with = "csv::invalid_option")]
    a: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    b: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    c: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    alpha: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    beta: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    gamma: Option<f64>,
    #[serde(default)]
    smiles: Option<String>,
}

impl CellRecord {
    fn into_entry(self) -> CrystalEntry {
        let value = |v: Option<f64>| v.unwrap_or(0.0);
        let cell = CellParameters::new(
            value(self.a),
            value(self.b),
            value(self.c),
            value(self.alpha),
            value(self.beta),
            value(self.gamma),
        );

        let mut entry = CrystalEntry::new(self.refcode, cell);
        if let Some(name) = self.name.filter(|s| !s.is_empty()) {
            entry = entry.with_name(name);
        }
        if let Some(smiles) = self.smiles.filter(|s| !s.is_empty()) {
            entry = entry.with_structure(smiles);
        }
        entry
    }
}

fn default_order() -> u32 {
    1
}

/// 形貌文件的一行
#[derive(Debug, Deserialize)]
struct MorphologyRecord {
    refcode: String,
    hkl: String,
    #[serde(default = "default_order")]
    order: u32,
    relative_area: f64,
}

/// 基于 CSV 文件的数据源
#[derive(Debug, Clone, Default)]
pub struct CsvSource {
    entries: Vec<CrystalEntry>,
    morphologies: HashMap<String, Vec<MillerPlane>>,
}

impl CsvSource {
    /// 读取晶胞文件与形貌文件
    pub fn open(cells_path: &Path, morphology_path: &Path, delimiter: &str) -> Result<Self> {
        let cells = read_file(cells_path)?;
        let morphology = read_file(morphology_path)?;

        Ok(Self {
            entries: parse_cells(&cells, delimiter, &cells_path.display().to_string())?,
            morphologies: parse_morphology(&morphology, &morphology_path.display().to_string())?,
        })
    }

    /// 从字符串内容构建
    #[cfg(test)]
    pub fn from_content(cells: &str, morphology: &str, delimiter: &str) -> Result<Self> {
        Ok(Self {
            entries: parse_cells(cells, delimiter, "<cells>")?,
            morphologies: parse_morphology(morphology, "<morphology>")?,
        })
    }

    /// 有形貌数据的 refcode 数量
    pub fn morphology_count(&self) -> usize {
        self.morphologies.len()
    }
}

impl CrystalSource for CsvSource {
    fn entries(&self) -> Vec<CrystalEntry> {
        self.entries.clone()
    }

    fn morphology(&self, identifier: &str) -> Option<Vec<MillerPlane>> {
        self.morphologies.get(identifier).cloned()
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(FacetMatchError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(path).map_err(|e| FacetMatchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 把任意分隔符规范化为 csv 可用的单字节分隔符
fn normalize_delimiter(content: &str, delimiter: &str) -> Result<(String, u8)> {
    match delimiter.as_bytes() {
        [] => Err(FacetMatchError::InvalidArgument(
            "delimiter must not be empty".to_string(),
        )),
        [single] => Ok((content.to_string(), *single)),
        _ => Ok((
            content.replace(delimiter, &(UNIT_SEPARATOR as char).to_string()),
            UNIT_SEPARATOR,
        )),
    }
}

fn parse_error(path: &str, err: &csv::Error) -> FacetMatchError {
    let reason = match err.position() {
        Some(pos) => format!("line {}: {}", pos.line(), err),
        None => err.to_string(),
    };
    FacetMatchError::ParseError {
        format: "csv".to_string(),
        path: path.to_string(),
        reason,
    }
}

fn parse_cells(content: &str, delimiter: &str, path: &str) -> Result<Vec<CrystalEntry>> {
    let (content, delimiter) = normalize_delimiter(content, delimiter)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();
    for record in reader.deserialize::<CellRecord>() {
        let record = record.map_err(|e| parse_error(path, &e))?;
        entries.push(record.into_entry());
    }

    Ok(entries)
}

fn parse_morphology(content: &str, path: &str) -> Result<HashMap<String, Vec<MillerPlane>>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut morphologies: HashMap<String, Vec<MillerPlane>> = HashMap::new();
    for record in reader.deserialize::<MorphologyRecord>() {
        let record = record.map_err(|e| parse_error(path, &e))?;

        let index: MillerIndex = record.hkl.parse().map_err(|_| FacetMatchError::ParseError {
            format: "csv".to_string(),
            path: path.to_string(),
            reason: format!(
                "invalid Miller index '{}' for {}",
                record.hkl, record.refcode
            ),
        })?;

        morphologies
            .entry(record.refcode)
            .or_default()
            .push(MillerPlane::new(index, record.order, record.relative_area));
    }

    Ok(morphologies)
}
