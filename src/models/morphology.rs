//! # 晶体形貌数据模型
//!
//! Miller 指数与形貌模型给出的晶面相对面积。
//!
//! ## 依赖关系
//! - 被 `source/`, `matching/dominant.rs` 使用
//! - 使用 `regex` 解析 Miller 指数字符串

use crate::error::{FacetMatchError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Miller 指数 (hkl)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MillerIndex {
    pub h: i32,
    pub k: i32,
    pub l: i32,
}

impl MillerIndex {
    pub fn new(h: i32, k: i32, l: i32) -> Self {
        Self { h, k, l }
    }

    /// 按对称约化因子整除（向下取整）
    ///
    /// 非整除时会截断，例如 (3 0 0) / 2 -> (1 0 0)。
    pub fn reduced(&self, order: u32) -> Self {
        if order <= 1 {
            return *self;
        }
        let n = order as i32;
        Self::new(self.h.div_euclid(n), self.k.div_euclid(n), self.l.div_euclid(n))
    }
}

/// 紧凑格式：各分量直接拼接，例如 "(1-10)"
impl fmt::Display for MillerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{}{})", self.h, self.k, self.l)
    }
}

fn separated_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\(?\s*(-?\d+)[\s,]+(-?\d+)[\s,]+(-?\d+)\s*\)?$").expect("valid regex")
    })
}

fn compact_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\(?(-?\d)(-?\d)(-?\d)\)?$").expect("valid regex"))
}

/// 解析 "(1 0 -1)"、"1,0,-1" 或紧凑的 "(10-1)"
impl FromStr for MillerIndex {
    type Err = FacetMatchError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let caps = separated_pattern()
            .captures(text)
            .or_else(|| compact_pattern().captures(text))
            .ok_or_else(|| FacetMatchError::InvalidMillerIndex(s.to_string()))?;

        let component = |i: usize| -> Result<i32> {
            caps[i]
                .parse()
                .map_err(|_| FacetMatchError::InvalidMillerIndex(s.to_string()))
        };

        Ok(MillerIndex::new(component(1)?, component(2)?, component(3)?))
    }
}

/// 形貌中的一个晶面
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MillerPlane {
    /// Miller 指数（未约化）
    pub index: MillerIndex,

    /// 对称约化因子
    pub order: u32,

    /// 相对面积 [0, 1]
    pub relative_area: f64,
}

impl MillerPlane {
    pub fn new(index: MillerIndex, order: u32, relative_area: f64) -> Self {
        Self {
            index,
            order,
            relative_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_compact() {
        assert_eq!(MillerIndex::new(0, 0, 1).to_string(), "(001)");
        assert_eq!(MillerIndex::new(1, -1, 0).to_string(), "(1-10)");
        assert_eq!(MillerIndex::new(0, 2, 0).to_string(), "(020)");
    }

    #[test]
    fn test_reduced() {
        assert_eq!(MillerIndex::new(0, 0, 2).reduced(2), MillerIndex::new(0, 0, 1));
        assert_eq!(MillerIndex::new(0, 2, 0).reduced(1), MillerIndex::new(0, 2, 0));
        assert_eq!(MillerIndex::new(0, 2, 0).reduced(0), MillerIndex::new(0, 2, 0));
        // 非整除截断
        assert_eq!(MillerIndex::new(3, 0, 0).reduced(2), MillerIndex::new(1, 0, 0));
        // 负数向下取整
        assert_eq!(MillerIndex::new(-1, 2, 0).reduced(2), MillerIndex::new(-1, 1, 0));
    }

    #[test]
    fn test_parse_separated() {
        assert_eq!("(1 0 -1)".parse::<MillerIndex>().unwrap(), MillerIndex::new(1, 0, -1));
        assert_eq!("1,0,-1".parse::<MillerIndex>().unwrap(), MillerIndex::new(1, 0, -1));
        assert_eq!(" 0 12 2 ".parse::<MillerIndex>().unwrap(), MillerIndex::new(0, 12, 2));
    }

    #[test]
    fn test_parse_compact() {
        assert_eq!("(001)".parse::<MillerIndex>().unwrap(), MillerIndex::new(0, 0, 1));
        assert_eq!("(1-10)".parse::<MillerIndex>().unwrap(), MillerIndex::new(1, -1, 0));
        assert_eq!("011".parse::<MillerIndex>().unwrap(), MillerIndex::new(0, 1, 1));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<MillerIndex>().is_err());
        assert!("(0 1)".parse::<MillerIndex>().is_err());
        assert!("abc".parse::<MillerIndex>().is_err());
        assert!("(0011)".parse::<MillerIndex>().is_err());
    }
}
