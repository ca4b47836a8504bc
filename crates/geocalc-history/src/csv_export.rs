//! CSV 导出
//!
//! 把历史记录导出为单列 CSV：一行 `record` 表头，之后每条记录
//! 一行。含引号、逗号或换行的记录按 RFC 4180 加引号转义。

use crate::error::HistoryError;
use crate::record::HistoryRecord;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 表头（单列）
pub const CSV_HEADER: &str = "record";

/// 导出记录到 CSV 文件
pub fn export_csv(records: &[HistoryRecord], path: &Path) -> Result<(), HistoryError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(writer, "{}", escape_field(record.as_str()))?;
    }
    writer.flush()?;

    tracing::info!(
        "Exported {} history records to {}",
        records.len(),
        path.display()
    );

    Ok(())
}

/// 按 RFC 4180 转义单元格：内部引号翻倍，整体加引号
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(['"', ',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_single_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let records = vec![
            HistoryRecord::from("计算距离: 点A(0, 0) 点B(3, 4) -> 距离: 5.00"),
            HistoryRecord::from("计算弦长: 半径=10, 角度=60° -> 弦长=10.00"),
        ];
        export_csv(&records, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "record");
        assert_eq!(lines[1], "计算距离: 点A(0, 0) 点B(3, 4) -> 距离: 5.00");
    }

    #[test]
    fn test_export_quotes_special_characters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let records = vec![HistoryRecord::from("a,b \"quoted\"")];
        export_csv(&records, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(1).unwrap(), "\"a,b \"\"quoted\"\"\"");
    }

    #[test]
    fn test_export_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        export_csv(&[], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "record\n");
    }
}
