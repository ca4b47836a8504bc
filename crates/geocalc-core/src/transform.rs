//! 旋转坐标系变换
//!
//! 把原点 + 两个旋转角 + 极坐标偏移映射为笛卡尔坐标。
//!
//! 角度约定：角度 φ（度）对应的方向单位向量为 `(sin φ, cos φ)`，
//! 即 0° 指向世界 +Y，角度增大时顺时针旋转。这与常规的
//! `(cos, sin)` 参数化相反，是本引擎刻意采用的约定：局部坐标系的
//! "Y 轴"由世界上方向顺时针偏转 φ 得到。

use crate::math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// 计算角度（度）对应的方向单位向量 `(sin φ, cos φ)`
pub fn rotated_direction(angle_deg: f64) -> Vector2 {
    let rad = angle_deg.to_radians();
    Vector2::new(rad.sin(), rad.cos())
}

/// 计算旋转后的局部 Y 轴单位端点
///
/// 端点 = `origin + (sin φ, cos φ)`，φ = radians(axis_rotation_deg)。
pub fn rotated_axis_endpoint(origin: Point2, axis_rotation_deg: f64) -> Point2 {
    origin + rotated_direction(axis_rotation_deg)
}

/// 计算半径射线的端点
///
/// 端点 = `origin + radius·(sin φ, cos φ)`，φ = radians(total_angle_deg)。
/// 第一根半径的总角度为 axis + manual，第二根为 axis + manual + 圆心角。
pub fn radius_endpoint(origin: Point2, radius: f64, total_angle_deg: f64) -> Point2 {
    origin + radius * rotated_direction(total_angle_deg)
}

/// 旋转坐标系
///
/// 原点加两个旋转角：轴偏转角决定局部 Y 轴方向，手动旋转角在其上
/// 叠加，确定第一根半径的方向。两个角内部接受任意实数度值，直接
/// 转弧度，无需取模（sin/cos 周期性保证正确性，区间限制只属于 UI）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RotatedFrame {
    /// 局部坐标系原点
    pub origin: Point2,
    /// Y 轴方向偏转角（度）
    pub axis_rotation_deg: f64,
    /// 第一根半径相对 Y 轴的手动旋转角（度）
    pub manual_rotation_deg: f64,
}

impl RotatedFrame {
    pub fn new(origin: Point2, axis_rotation_deg: f64, manual_rotation_deg: f64) -> Self {
        Self {
            origin,
            axis_rotation_deg,
            manual_rotation_deg,
        }
    }

    /// 局部 Y 轴的单位端点
    pub fn axis_endpoint(&self) -> Point2 {
        rotated_axis_endpoint(self.origin, self.axis_rotation_deg)
    }

    /// 半径射线端点，`extra_deg` 在 axis + manual 之上继续叠加
    ///
    /// 第一根半径取 `extra_deg = 0`，第二根取圆心角。
    pub fn radius_endpoint(&self, radius: f64, extra_deg: f64) -> Point2 {
        radius_endpoint(
            self.origin,
            radius,
            self.axis_rotation_deg + self.manual_rotation_deg + extra_deg,
        )
    }
}

impl Default for RotatedFrame {
    /// 原点 (0, 0)、两个旋转角均为 0（未设置时的默认坐标系）
    fn default() -> Self {
        Self::new(Point2::origin(), 0.0, 0.0)
    }
}
