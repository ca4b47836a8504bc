//! JSON 文件历史存档
//!
//! 磁盘上的存档是一个 JSON 字符串数组，文件名固定。打开时整体
//! 读入，追加时整体重写：先写同目录的临时文件再重命名覆盖，
//! 存档在任何时刻都是完整的。

use crate::error::HistoryError;
use crate::log::HistoryLog;
use crate::record::HistoryRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// 历史存档的固定文件名
pub const HISTORY_FILE_NAME: &str = "history.json";

/// JSON 文件日志后端
#[derive(Debug)]
pub struct JsonFileLog {
    path: PathBuf,
    records: Vec<HistoryRecord>,
}

impl JsonFileLog {
    /// 打开目录下的历史存档（[`HISTORY_FILE_NAME`]）
    ///
    /// 文件存在时载入全部记录，不存在时从空日志开始。
    pub fn open(dir: &Path) -> Result<Self, HistoryError> {
        Self::open_path(dir.join(HISTORY_FILE_NAME))
    }

    /// 打开指定路径的历史存档
    pub fn open_path(path: PathBuf) -> Result<Self, HistoryError> {
        let records = if path.exists() {
            let file = File::open(&path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|source| HistoryError::InvalidStore {
                path: path.display().to_string(),
                source,
            })?
        } else {
            Vec::new()
        };

        tracing::debug!(
            "Loaded {} history records from {}",
            records.len(),
            path.display()
        );

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 整体重写存档：写临时文件，再原子重命名到目标路径
    fn write_store(&self) -> Result<(), HistoryError> {
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, &self.records)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl HistoryLog for JsonFileLog {
    fn append(&mut self, record: HistoryRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        self.write_store()?;
        tracing::debug!(
            "Appended history record, store now holds {} ({})",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}
