//! 历史记录行
//!
//! 一条记录是总结一次计算的文本行。数值结果统一保留两位小数；
//! 输入值按原样写入。核心引擎从不创建记录，只返回数值，由这里
//! 把数值装配成记录文本。

use geocalc_core::math::Point2;
use serde::{Deserialize, Serialize};

/// 一条历史记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryRecord(String);

impl HistoryRecord {
    /// 距离计算记录
    pub fn distance(a: Point2, b: Point2, distance: f64) -> Self {
        Self(format!(
            "计算距离: 点A({}, {}) 点B({}, {}) -> 距离: {:.2}",
            a.x, a.y, b.x, b.y, distance
        ))
    }

    /// 由半径和弦长求角度的记录
    pub fn angle_from_chord(radius: f64, chord: f64, angle_deg: f64) -> Self {
        Self(format!(
            "计算角度: 半径={}, 弦长={} -> 角度={:.2}°",
            radius, chord, angle_deg
        ))
    }

    /// 由半径和角度求弦长的记录
    pub fn chord_from_angle(radius: f64, angle_deg: f64, chord: f64) -> Self {
        Self(format!(
            "计算弦长: 半径={}, 角度={}° -> 弦长={:.2}",
            radius, angle_deg, chord
        ))
    }

    /// 顶点夹角计算记录
    pub fn vertex_angle(a: Point2, b: Point2, vertex: Point2, angle_deg: f64) -> Self {
        Self(format!(
            "计算夹角: 点A({}, {}) 点B({}, {}) 顶点({}, {}) -> 夹角={:.2}°",
            a.x, a.y, b.x, b.y, vertex.x, vertex.y, angle_deg
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HistoryRecord {
    fn from(line: String) -> Self {
        Self(line)
    }
}

impl From<&str> for HistoryRecord {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}
