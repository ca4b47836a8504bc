//! 历史记录存储错误定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid history store {path}: {source}")]
    InvalidStore {
        path: String,
        source: serde_json::Error,
    },
}
