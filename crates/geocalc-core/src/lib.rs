//! GeoCalc 核心几何引擎
//!
//! 平面几何计算器的计算核心：距离/夹角/弦长求解与旋转坐标系变换。
//!
//! # 架构设计
//!
//! 两个互不依赖的组件：
//! - 几何求解器（`solver`）：无状态纯函数，计算距离、顶点夹角和
//!   弦长/圆心角/半径三元关系
//! - 坐标变换（`transform` + `scene`）：把原点、轴偏转角、手动旋转角
//!   和半径/角度映射为渲染器消费的场景图元
//!
//! 控制流：调用方提供原始数值 → 求解器校验并计算标量结果 →
//! 调用方按需请求场景描述。变换只以普通数值消费求解器的输出。
//!
//! # 示例
//!
//! ```rust
//! use geocalc_core::prelude::*;
//!
//! // 半径 10、圆心角 60° 的弦长
//! let (chord, which) = chord_relation(None, Some(60.0), Some(10.0)).unwrap();
//! assert_eq!(which, ChordUnknown::Chord);
//! assert!((chord - 10.0).abs() < 1e-9);
//!
//! // 同一组参数的可绘制场景
//! let frame = RotatedFrame::new(Point2::origin(), 0.0, 0.0);
//! let scene = chord_scene(&frame, 10.0, 60.0).unwrap();
//! assert!((scene.chord.length() - chord).abs() < 1e-9);
//! ```

pub mod error;
pub mod input;
pub mod math;
pub mod scene;
pub mod solver;
pub mod transform;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::error::SolveError;
    pub use crate::input::{parse_field, parse_field_or, InputError};
    pub use crate::math::{midpoint, Point2, Vector2, EPSILON};
    pub use crate::scene::{
        chord_scene, distance_scene, ArcPrimitive, ChordScene, Circle, DistanceScene, LabelKind,
        PointMarker, SceneGeometry, SceneLabel, Segment, ViewExtent,
    };
    pub use crate::solver::{chord_relation, distance, vertex_angle, ChordUnknown};
    pub use crate::transform::{radius_endpoint, rotated_axis_endpoint, RotatedFrame};
}
