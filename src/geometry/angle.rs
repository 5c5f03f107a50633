//! # 角度三角函数工具
//!
//! 以度为单位的三角函数，结果统一保留 6 位小数。
//! 多边形求交对未舍入的浮点数很敏感，重合顶点处会产生近零面积的伪影。
//!
//! ## 依赖关系
//! - 被 `geometry/polygon.rs`, `geometry/frame.rs`, `geometry/planes.rs` 使用
//! - 无外部模块依赖

/// 舍入位数
const DECIMALS: usize = 6;

/// 按十进制精确值四舍五入到 `decimals` 位小数
///
/// 经由十进制格式化完成，0.3015（实际存储为 0.30149999...）舍入为 0.301，
/// 而不是先乘 10^n 得到 301.5 再进位。
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// 四舍五入到 6 位小数
pub fn round6(value: f64) -> f64 {
    round_to(value, DECIMALS)
}

/// cos(角度)，舍入到 6 位
pub fn cos_deg(angle: f64) -> f64 {
    round6(angle.to_radians().cos())
}

/// sin(角度)，舍入到 6 位
pub fn sin_deg(angle: f64) -> f64 {
    round6(angle.to_radians().sin())
}

/// arccos，返回角度
///
/// 弧度值先舍入到 6 位再换算为度。输入因浮点累积误差略超出 [-1, 1] 时
/// 截断到边界；非有限输入返回 NaN。
pub fn arccos_deg(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    round6(x.clamp(-1.0, 1.0).acos()).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_angle_is_exact() {
        assert_eq!(cos_deg(90.0), 0.0);
        assert_eq!(sin_deg(90.0), 1.0);
    }

    #[test]
    fn test_rounding_to_six_decimals() {
        // cos(60°) = 0.5000000000000001
        assert_eq!(cos_deg(60.0), 0.5);
        assert_eq!(sin_deg(30.0), 0.5);
        assert_eq!(cos_deg(45.0), 0.707107);
    }

    #[test]
    fn test_rounding_uses_exact_decimal_value() {
        // 0.3015 与 2.675 的存储值都略小于字面值
        assert_eq!(round_to(0.3015, 3), 0.301);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round6(0.0000005), 0.0);
        assert_eq!(round6(-0.1234564), -0.123456);
        assert!(round6(f64::NAN).is_nan());
        assert_eq!(round6(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_arccos_clamps_out_of_range() {
        assert_eq!(arccos_deg(1.0000001), 0.0);
        assert!((arccos_deg(-1.0000001) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_arccos_rounds_radians() {
        // acos(0) = 1.5707963..., rounded to 1.570796 rad
        let expected = 1.570796_f64.to_degrees();
        assert_eq!(arccos_deg(0.0), expected);
        assert!((arccos_deg(0.0) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_arccos_non_finite() {
        assert!(arccos_deg(f64::NAN).is_nan());
        assert!(arccos_deg(f64::INFINITY).is_nan());
    }
}
