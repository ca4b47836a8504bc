//! 场景几何
//!
//! 把求解输入转换为渲染器可直接消费的图元集合：
//! - 线段（半径、弦、距离段）
//! - 圆与角度标注弧
//! - 数值标签锚点和交点标记
//!
//! 图元是纯数据，不含任何绘制逻辑；文字格式化（保留两位小数等）
//! 由表示层完成，标签只携带原始数值。

use crate::error::SolveError;
use crate::math::{midpoint, Point2};
use crate::transform::RotatedFrame;
use serde::{Deserialize, Serialize};

/// 角度标注弧的扫掠半径与圆半径之比
pub const ANGLE_ARC_RATIO: f64 = 0.6;

/// 角度标签锚点的径向位置与圆半径之比
pub const ANGLE_LABEL_RATIO: f64 = 0.4;

/// 视图范围与圆半径之比
pub const EXTENT_MARGIN: f64 = 1.5;

/// 没有可参考尺寸时的视图半宽
pub const FALLBACK_HALF_EXTENT: f64 = 10.0;

/// 线段
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// 计算线段中点
    pub fn midpoint(&self) -> Point2 {
        midpoint(self.start, self.end)
    }
}

/// 圆
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// 角度标注弧
///
/// 起止角为旋转坐标系内的度数（0° 沿局部 Y 轴，顺时针增大），
/// 从手动旋转角扫到手动旋转角 + 圆心角。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArcPrimitive {
    pub center: Point2,
    /// 扫掠半径（= [`ANGLE_ARC_RATIO`] · 圆半径）
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
}

impl ArcPrimitive {
    /// 计算扫过的角度（度）
    pub fn sweep_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }
}

/// 标签语义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelKind {
    /// 两点距离
    Distance,
    /// 弦长
    ChordLength,
    /// 圆心角（度）
    IncludedAngle,
}

/// 数值标签
///
/// 只携带锚点和原始数值，由表示层负责格式化显示。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneLabel {
    pub anchor: Point2,
    pub value: f64,
    pub kind: LabelKind,
}

/// 坐标标记点（表示层以点本身的坐标作标注文字）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointMarker {
    pub point: Point2,
}

/// 方形视图范围
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewExtent {
    pub center: Point2,
    pub half_extent: f64,
}

impl ViewExtent {
    pub fn new(center: Point2, half_extent: f64) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// 范围左下角
    pub fn min(&self) -> Point2 {
        Point2::new(self.center.x - self.half_extent, self.center.y - self.half_extent)
    }

    /// 范围右上角
    pub fn max(&self) -> Point2 {
        Point2::new(self.center.x + self.half_extent, self.center.y + self.half_extent)
    }
}

/// 弦长模式的场景描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordScene {
    /// 完整的圆
    pub circle: Circle,
    /// 第一根半径（axis + manual 方向）
    pub radius1: Segment,
    /// 第二根半径（axis + manual + 圆心角方向）
    pub radius2: Segment,
    /// 两半径端点之间的弦
    pub chord: Segment,
    /// 圆心角标注弧
    pub angle_arc: ArcPrimitive,
    /// 弦长标签（锚在弦中点）
    pub chord_label: SceneLabel,
    /// 圆心角标签（锚在角平分方向 0.4·radius 处）
    pub angle_label: SceneLabel,
    /// 半径与圆周的两个交点
    pub intersections: [PointMarker; 2],
    /// 视图范围（原点 ± 1.5·radius）
    pub extent: ViewExtent,
}

/// 距离模式的场景描述
///
/// 与原点和旋转坐标系无关；原点标记由表示层自行绘制。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceScene {
    /// 被测线段 (a, b)
    pub segment: Segment,
    /// 距离标签（锚在线段中点）
    pub distance_label: SceneLabel,
}

impl DistanceScene {
    /// 以给定原点为中心计算视图范围
    ///
    /// 半宽取两端点到原点距离较大者的 [`EXTENT_MARGIN`] 倍，两端点
    /// 都落在原点上时退回 [`FALLBACK_HALF_EXTENT`]。
    pub fn extent_around(&self, origin: Point2) -> ViewExtent {
        let reach = (self.segment.start - origin)
            .norm()
            .max((self.segment.end - origin).norm());
        let half = if reach > 0.0 {
            reach * EXTENT_MARGIN
        } else {
            FALLBACK_HALF_EXTENT
        };
        ViewExtent::new(origin, half)
    }
}

/// 场景描述枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SceneGeometry {
    Chord(ChordScene),
    Distance(DistanceScene),
}

impl SceneGeometry {
    /// 获取场景的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            SceneGeometry::Chord(_) => "Chord",
            SceneGeometry::Distance(_) => "Distance",
        }
    }
}

impl From<ChordScene> for SceneGeometry {
    fn from(scene: ChordScene) -> Self {
        SceneGeometry::Chord(scene)
    }
}

impl From<DistanceScene> for SceneGeometry {
    fn from(scene: DistanceScene) -> Self {
        SceneGeometry::Distance(scene)
    }
}

/// 构造弦长模式的场景
///
/// 产生圆、两根半径、弦、圆心角标注弧、弦长/角度标签和交点标记。
/// 弦段长度与 [`crate::solver::chord_relation`] 对同一 (radius, angle)
/// 求出的弦长在浮点容差内一致。
///
/// `radius <= 0` 时返回 [`SolveError::NonPositiveRadius`]；圆心角由
/// 调用方先经求解器校验，这里接受任意实数值。
pub fn chord_scene(
    frame: &RotatedFrame,
    radius: f64,
    included_angle_deg: f64,
) -> Result<ChordScene, SolveError> {
    if radius <= 0.0 {
        return Err(SolveError::NonPositiveRadius(radius));
    }

    let origin = frame.origin;
    let p1 = frame.radius_endpoint(radius, 0.0);
    let p2 = frame.radius_endpoint(radius, included_angle_deg);

    let chord = Segment::new(p1, p2);
    let chord_label = SceneLabel {
        anchor: chord.midpoint(),
        value: chord.length(),
        kind: LabelKind::ChordLength,
    };
    let angle_label = SceneLabel {
        anchor: frame.radius_endpoint(radius * ANGLE_LABEL_RATIO, included_angle_deg / 2.0),
        value: included_angle_deg,
        kind: LabelKind::IncludedAngle,
    };
    let angle_arc = ArcPrimitive {
        center: origin,
        radius: radius * ANGLE_ARC_RATIO,
        start_angle_deg: frame.manual_rotation_deg,
        end_angle_deg: frame.manual_rotation_deg + included_angle_deg,
    };

    Ok(ChordScene {
        circle: Circle::new(origin, radius),
        radius1: Segment::new(origin, p1),
        radius2: Segment::new(origin, p2),
        chord,
        angle_arc,
        chord_label,
        angle_label,
        intersections: [PointMarker { point: p1 }, PointMarker { point: p2 }],
        extent: ViewExtent::new(origin, radius * EXTENT_MARGIN),
    })
}

/// 构造距离模式的场景
///
/// 只有被测线段和中点标签，对所有有限输入均有定义。
pub fn distance_scene(a: Point2, b: Point2) -> DistanceScene {
    let segment = Segment::new(a, b);
    DistanceScene {
        distance_label: SceneLabel {
            anchor: segment.midpoint(),
            value: segment.length(),
            kind: LabelKind::Distance,
        },
        segment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::chord_relation;

    fn frame(origin: Point2, axis: f64, manual: f64) -> RotatedFrame {
        RotatedFrame::new(origin, axis, manual)
    }

    #[test]
    fn test_chord_scene_matches_chord_relation() {
        // 交叉一致性：场景中的弦段长度 == 求解器的弦长
        let f = frame(Point2::new(2.0, -1.0), 25.0, 40.0);
        let scene = chord_scene(&f, 10.0, 60.0).unwrap();
        let (expected, _) = chord_relation(None, Some(60.0), Some(10.0)).unwrap();
        assert!((scene.chord.length() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_chord_scene_endpoints_on_circle() {
        let f = frame(Point2::new(1.0, 1.0), -30.0, 75.0);
        let scene = chord_scene(&f, 4.0, 110.0).unwrap();
        for marker in &scene.intersections {
            let dist = (marker.point - f.origin).norm();
            assert!((dist - 4.0).abs() < 1e-9);
        }
        assert_eq!(scene.radius1.start, f.origin);
        assert_eq!(scene.radius2.start, f.origin);
    }

    #[test]
    fn test_chord_scene_arc_spans_included_angle() {
        let f = frame(Point2::origin(), 15.0, 30.0);
        let scene = chord_scene(&f, 10.0, 45.0).unwrap();
        assert!((scene.angle_arc.start_angle_deg - 30.0).abs() < 1e-12);
        assert!((scene.angle_arc.end_angle_deg - 75.0).abs() < 1e-12);
        assert!((scene.angle_arc.sweep_deg() - 45.0).abs() < 1e-12);
        assert!((scene.angle_arc.radius - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_chord_scene_extent() {
        let f = frame(Point2::new(5.0, 5.0), 0.0, 0.0);
        let scene = chord_scene(&f, 10.0, 90.0).unwrap();
        assert!((scene.extent.half_extent - 15.0).abs() < 1e-12);
        let min = scene.extent.min();
        assert!((min.x + 10.0).abs() < 1e-12);
        assert!((min.y + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_chord_scene_rejects_bad_radius() {
        let f = RotatedFrame::default();
        assert!(matches!(
            chord_scene(&f, 0.0, 60.0),
            Err(SolveError::NonPositiveRadius(_))
        ));
        assert!(matches!(
            chord_scene(&f, -3.0, 60.0),
            Err(SolveError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn test_distance_scene_midpoint_label() {
        let scene = distance_scene(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert!((scene.distance_label.value - 5.0).abs() < 1e-12);
        assert!((scene.distance_label.anchor.x - 1.5).abs() < 1e-12);
        assert!((scene.distance_label.anchor.y - 2.0).abs() < 1e-12);
        assert_eq!(scene.distance_label.kind, LabelKind::Distance);
    }

    #[test]
    fn test_distance_scene_extent_fallback() {
        let scene = distance_scene(Point2::origin(), Point2::origin());
        let extent = scene.extent_around(Point2::origin());
        assert!((extent.half_extent - FALLBACK_HALF_EXTENT).abs() < 1e-12);

        let scene = distance_scene(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let extent = scene.extent_around(Point2::origin());
        assert!((extent.half_extent - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_scene_geometry_dispatch() {
        let chord: SceneGeometry = chord_scene(&RotatedFrame::default(), 1.0, 90.0)
            .unwrap()
            .into();
        let dist: SceneGeometry =
            distance_scene(Point2::origin(), Point2::new(1.0, 0.0)).into();
        assert_eq!(chord.type_name(), "Chord");
        assert_eq!(dist.type_name(), "Distance");
    }
}
