//! 求解错误定义
//!
//! 所有校验在公式执行之前完成；求解器返回类型化错误，
//! 绝不把 NaN/Infinity 混入结果。

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("vertex coincides with an endpoint, the angle is undefined")]
    DegenerateVectors,

    #[error("radius must be greater than zero (got {0})")]
    NonPositiveRadius(f64),

    #[error("chord length must be greater than zero (got {0})")]
    NonPositiveChord(f64),

    #[error("chord length {chord} exceeds the diameter {diameter}")]
    ChordExceedsDiameter { chord: f64, diameter: f64 },

    #[error("angle must lie strictly between 0 and 360 degrees (got {0})")]
    AngleOutOfRange(f64),

    #[error("exactly one of chord, angle and radius must be unknown")]
    AmbiguousUnknown,
}
