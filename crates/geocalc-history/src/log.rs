//! 追加式历史日志
//!
//! 历史是调用方持有的有序记录序列，只增不改。后端通过统一的
//! `append` 接口保证原子性，核心引擎对存储机制一无所知。

use crate::error::HistoryError;
use crate::record::HistoryRecord;

/// 表示层一次展示的最大记录条数
pub const DISPLAY_WINDOW: usize = 100;

/// 追加式历史日志接口
pub trait HistoryLog {
    /// 追加一条记录
    ///
    /// 持久化后端在此保证原子性：要么整条记录落盘，要么存档不变。
    fn append(&mut self, record: HistoryRecord) -> Result<(), HistoryError>;

    /// 按追加顺序返回全部记录
    fn records(&self) -> &[HistoryRecord];

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// 返回最近的 `n` 条记录（展示窗口）
    fn recent(&self, n: usize) -> &[HistoryRecord] {
        let records = self.records();
        &records[records.len().saturating_sub(n)..]
    }
}

/// 内存日志后端
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Vec<HistoryRecord>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryLog for MemoryLog {
    fn append(&mut self, record: HistoryRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        Ok(())
    }

    fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}
