//! GeoCalc 历史记录存储
//!
//! 支持：
//! - 追加式计算日志（内存后端）
//! - JSON 字符串数组存档（固定文件名，原子重写）
//! - 单列 CSV 导出
//!
//! 核心引擎不持有任何历史状态；表示层把求解结果交给
//! [`HistoryRecord`] 的构造函数生成记录行，再通过 [`HistoryLog`]
//! 追加到所选后端。

pub mod csv_export;
pub mod error;
pub mod json_store;
pub mod log;
pub mod record;

pub use csv_export::{export_csv, CSV_HEADER};
pub use error::HistoryError;
pub use json_store::{JsonFileLog, HISTORY_FILE_NAME};
pub use log::{HistoryLog, MemoryLog, DISPLAY_WINDOW};
pub use record::HistoryRecord;
