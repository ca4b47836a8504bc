//! 几何求解器
//!
//! 无状态纯函数：
//! - 两点距离
//! - 顶点夹角（点积/反余弦）
//! - 圆的弦长/圆心角/半径三元关系 `c = 2·r·sin(θ/2)`
//!
//! 同样的输入必然产生同样的输出，调用方可以并发调用。

use crate::error::SolveError;
use crate::math::{Point2, EPSILON};
use serde::{Deserialize, Serialize};

/// 弦长关系中被求解的未知量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordUnknown {
    Chord,
    Angle,
    Radius,
}

impl ChordUnknown {
    /// 获取未知量的名称
    pub fn name(&self) -> &'static str {
        match self {
            ChordUnknown::Chord => "chord",
            ChordUnknown::Angle => "angle",
            ChordUnknown::Radius => "radius",
        }
    }
}

/// 计算两点的欧氏距离
///
/// 对所有有限输入均有定义，不会失败。
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b - a).norm()
}

/// 计算顶点夹角（度，范围 [0, 180]）
///
/// 夹角由向量 (a − vertex) 与 (b − vertex) 的点积/反余弦恒等式给出。
/// a 或 b 与顶点重合时向量长度为零，夹角无定义，返回
/// [`SolveError::DegenerateVectors`]。
///
/// cos_theta 在反余弦之前被夹取到 [-1, 1]：接近共线的输入会因浮点
/// 误差略微越界，否则会产生 NaN。
pub fn vertex_angle(a: Point2, b: Point2, vertex: Point2) -> Result<f64, SolveError> {
    let u = a - vertex;
    let v = b - vertex;

    let mag_u = u.norm();
    let mag_v = v.norm();
    if mag_u < EPSILON || mag_v < EPSILON {
        return Err(SolveError::DegenerateVectors);
    }

    let cos_theta = (u.dot(&v) / (mag_u * mag_v)).clamp(-1.0, 1.0);
    Ok(cos_theta.acos().to_degrees())
}

/// 求解弦长/圆心角/半径三元关系
///
/// 三个参数中恰有一个为 `None`（未知量），其余两个为已知量，按
/// 弦长定律 `c = 2·r·sin(θ/2)` 求解：
/// - 未知弦长：`chord = 2·radius·sin(radians(angle)/2)`
/// - 未知角度：`angle = degrees(2·asin(chord/(2·radius)))`
/// - 未知半径：`radius = chord / (2·sin(radians(angle)/2))`
///
/// 返回求解值和被求解的未知量位置。
///
/// # 错误
///
/// - 未知量不是恰好一个 → [`SolveError::AmbiguousUnknown`]
/// - `radius <= 0` → [`SolveError::NonPositiveRadius`]
/// - `chord <= 0` → [`SolveError::NonPositiveChord`]
/// - `chord > 2·radius` → [`SolveError::ChordExceedsDiameter`]
///   （在调用反正弦之前校验，保证其参数落在 [-1, 1] 内）
/// - 角度不在开区间 (0°, 360°) → [`SolveError::AngleOutOfRange`]
pub fn chord_relation(
    chord: Option<f64>,
    angle_deg: Option<f64>,
    radius: Option<f64>,
) -> Result<(f64, ChordUnknown), SolveError> {
    match (chord, angle_deg, radius) {
        (None, Some(angle_deg), Some(radius)) => {
            check_radius(radius)?;
            check_angle(angle_deg)?;
            let chord = 2.0 * radius * (angle_deg.to_radians() / 2.0).sin();
            Ok((chord, ChordUnknown::Chord))
        }
        (Some(chord), None, Some(radius)) => {
            check_radius(radius)?;
            check_chord(chord, radius)?;
            let ratio = chord / (2.0 * radius);
            let angle_deg = (2.0 * ratio.asin()).to_degrees();
            Ok((angle_deg, ChordUnknown::Angle))
        }
        (Some(chord), Some(angle_deg), None) => {
            if chord <= 0.0 {
                return Err(SolveError::NonPositiveChord(chord));
            }
            check_angle(angle_deg)?;
            // θ ∈ (0°, 360°) 时 sin(θ/2) > 0，除法安全
            let radius = chord / (2.0 * (angle_deg.to_radians() / 2.0).sin());
            Ok((radius, ChordUnknown::Radius))
        }
        _ => Err(SolveError::AmbiguousUnknown),
    }
}

fn check_radius(radius: f64) -> Result<(), SolveError> {
    if radius <= 0.0 {
        return Err(SolveError::NonPositiveRadius(radius));
    }
    Ok(())
}

fn check_chord(chord: f64, radius: f64) -> Result<(), SolveError> {
    if chord <= 0.0 {
        return Err(SolveError::NonPositiveChord(chord));
    }
    let diameter = 2.0 * radius;
    if chord > diameter {
        return Err(SolveError::ChordExceedsDiameter { chord, diameter });
    }
    Ok(())
}

fn check_angle(angle_deg: f64) -> Result<(), SolveError> {
    if angle_deg <= 0.0 || angle_deg >= 360.0 {
        return Err(SolveError::AngleOutOfRange(angle_deg));
    }
    Ok(())
}
