//! 基础数学类型
//!
//! 基于 nalgebra 的2D点/向量别名和通用数值工具。

/// 2D点
pub type Point2 = nalgebra::Point2<f64>;

/// 2D向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 浮点比较容差
pub const EPSILON: f64 = 1e-10;

/// 计算两点的中点
pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
