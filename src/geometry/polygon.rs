//! # 晶格面多边形
//!
//! 把 (a, b, γ) 展开为平面平行四边形，并提供面积与求交面积计算。
//!
//! ## 算法
//! - 面积：鞋带公式
//! - 求交：Sutherland-Hodgman 裁剪（两个平行四边形都是凸多边形）
//!
//! ## 依赖关系
//! - 被 `geometry/similarity.rs` 使用
//! - 使用 `geometry/angle.rs` 的舍入三角函数

use crate::geometry::angle::{cos_deg, sin_deg};
use crate::models::LatticeTriplet;

type Point = [f64; 2];

/// 平面多边形（顶点按输入顺序保存）
#[derive(Debug, Clone, PartialEq)]
pub struct LatticePolygon {
    vertices: Vec<Point>,
}

impl LatticePolygon {
    /// 由晶格面构建平行四边形
    ///
    /// 钝角 γ 用其补角 180° - γ 代替，两者几何上全等。
    /// 顶点为 (0,0), (b cosγ, b sinγ), (a + b cosγ, b sinγ), (a, 0)。
    pub fn from_triplet(triplet: &LatticeTriplet) -> Self {
        let a = triplet.side_a;
        let b = triplet.side_b;
        let gamma = if triplet.angle > 90.0 {
            180.0 - triplet.angle
        } else {
            triplet.angle
        };

        let (cos_g, sin_g) = (cos_deg(gamma), sin_deg(gamma));

        Self {
            vertices: vec![
                [0.0, 0.0],
                [b * cos_g, b * sin_g],
                [a + b * cos_g, b * sin_g],
                [a, 0.0],
            ],
        }
    }

    /// 由任意顶点构建（须为凸多边形）
    #[cfg(test)]
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[cfg(test)]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// 多边形面积
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// 与另一个凸多边形的交集面积
    pub fn intersection_area(&self, other: &LatticePolygon) -> f64 {
        let clip = match counter_clockwise(&other.vertices) {
            Some(c) => c,
            None => return 0.0,
        };

        let mut output = self.vertices.clone();

        for i in 0..clip.len() {
            if output.is_empty() {
                break;
            }
            let edge_start = clip[i];
            let edge_end = clip[(i + 1) % clip.len()];
            output = clip_by_edge(&output, edge_start, edge_end);
        }

        if output.len() < 3 {
            return 0.0;
        }
        signed_area(&output).abs()
    }
}

fn cross(o: Point, p: Point, q: Point) -> f64 {
    (p[0] - o[0]) * (q[1] - o[1]) - (p[1] - o[1]) * (q[0] - o[0])
}

// 鞋带公式，逆时针为正
fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let [x_i, y_i] = vertices[i];
        let [x_j, y_j] = vertices[(i + 1) % n];
        sum += x_i * y_j - x_j * y_i;
    }
    0.5 * sum
}

// 统一为逆时针；退化多边形返回 None
fn counter_clockwise(vertices: &[Point]) -> Option<Vec<Point>> {
    let area = signed_area(vertices);
    if area > 0.0 {
        Some(vertices.to_vec())
    } else if area < 0.0 {
        Some(vertices.iter().rev().copied().collect())
    } else {
        None
    }
}

// 保留位于有向边 start -> end 左侧（含边上）的部分
fn clip_by_edge(polygon: &[Point], start: Point, end: Point) -> Vec<Point> {
    let mut clipped = Vec::with_capacity(polygon.len() + 1);

    let mut previous = polygon[polygon.len() - 1];
    let mut previous_side = cross(start, end, previous);

    for &current in polygon {
        let current_side = cross(start, end, current);
        let current_inside = current_side >= 0.0;

        // 边跨越裁剪线
        if current_inside != (previous_side >= 0.0) {
            let t = previous_side / (previous_side - current_side);
            clipped.push([
                previous[0] + (current[0] - previous[0]) * t,
                previous[1] + (current[1] - previous[1]) * t,
            ]);
        }

        if current_inside {
            clipped.push(current);
        }

        previous = current;
        previous_side = current_side;
    }

    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_lengths(polygon: &LatticePolygon) -> Vec<f64> {
        let v = polygon.vertices();
        (0..v.len())
            .map(|i| {
                let p = v[i];
                let q = v[(i + 1) % v.len()];
                ((q[0] - p[0]).powi(2) + (q[1] - p[1]).powi(2)).sqrt()
            })
            .collect()
    }

    #[test]
    fn test_rectangle_vertices() {
        let poly = LatticePolygon::from_triplet(&LatticeTriplet::new(3.0, 2.0, 90.0));
        assert_eq!(
            poly.vertices(),
            &[[0.0, 0.0], [0.0, 2.0], [3.0, 2.0], [3.0, 0.0]]
        );
        assert!((poly.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_obtuse_angle_canonicalized() {
        let obtuse = LatticePolygon::from_triplet(&LatticeTriplet::new(5.0, 3.0, 120.0));
        let acute = LatticePolygon::from_triplet(&LatticeTriplet::new(5.0, 3.0, 60.0));

        assert_eq!(obtuse, acute);
        assert!((obtuse.area() - acute.area()).abs() < 1e-12);
        assert_eq!(edge_lengths(&obtuse), edge_lengths(&acute));
    }

    #[test]
    fn test_obtuse_area_matches_parallelogram() {
        let poly = LatticePolygon::from_triplet(&LatticeTriplet::new(5.0, 3.0, 110.0));
        let expected = 5.0 * 3.0 * 70.0_f64.to_radians().sin();
        assert!((poly.area() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_self_intersection_is_full_area() {
        let poly = LatticePolygon::from_triplet(&LatticeTriplet::new(7.175, 14.435, 87.0));
        assert!((poly.intersection_area(&poly) - poly.area()).abs() < 1e-9);
    }

    #[test]
    fn test_nested_rectangles() {
        let outer = LatticePolygon::from_triplet(&LatticeTriplet::new(4.0, 4.0, 90.0));
        let inner = LatticePolygon::from_triplet(&LatticeTriplet::new(2.0, 2.0, 90.0));

        assert!((outer.intersection_area(&inner) - 4.0).abs() < 1e-12);
        assert!((inner.intersection_area(&outer) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_overlap() {
        // 3x1 与 1x3 矩形交于 1x1
        let wide = LatticePolygon::from_triplet(&LatticeTriplet::new(3.0, 1.0, 90.0));
        let tall = LatticePolygon::from_triplet(&LatticeTriplet::new(1.0, 3.0, 90.0));
        assert!((wide.intersection_area(&tall) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_polygons() {
        let a = LatticePolygon::from_vertices(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let b = LatticePolygon::from_vertices(vec![[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 3.0]]);
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn test_degenerate_clip_polygon() {
        let flat = LatticePolygon::from_vertices(vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        let square = LatticePolygon::from_triplet(&LatticeTriplet::new(1.0, 1.0, 90.0));
        assert_eq!(flat.area(), 0.0);
        assert_eq!(square.intersection_area(&flat), 0.0);
    }
}
