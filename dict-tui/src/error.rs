//! 错误类型
//!
//! 路由状态机本身没有可恢复的错误，这里只覆盖启动阶段（数据目录、配置文件）。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictError {
    #[error("Home directory not found, use --data-path to choose a data directory")]
    NoHomeDir,

    #[error("Failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type DictResult<T> = Result<T, DictError>;
