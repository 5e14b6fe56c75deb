//! # Error Types Module / 错误类型模块
//!
//! This module defines the error taxonomy shared across the library.
//! Validation failures, failed commands and observer misuse each get their
//! own variant so callers can match on the outcome they care about.
//!
//! 此模块定义了整个库共享的错误分类。
//! 验证失败、命令失败和观察者误用各有自己的变体，
//! 以便调用者可以匹配他们关心的结果。

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shellkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in shellkit.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation path is missing, or present but below the minimum size.
    /// 验证路径缺失，或存在但小于最小大小。
    #[error("file not found or below minimum size: {}", path.display())]
    FileNotFound {
        /// Path that failed validation
        path: PathBuf,
    },

    /// The child process exited with a non-zero return code.
    /// 子进程以非零返回码退出。
    #[error("command failed: {command}\nreturn code: {code}\nstderr:\n{stderr}")]
    CommandFailed {
        /// The joined command line that was executed
        command: String,
        /// The child's exit code
        code: i32,
        /// Captured stderr, empty when the stream was redirected to a file
        stderr: String,
    },

    /// An observer was called before `run` completed.
    /// 在 `run` 完成之前调用了观察者。
    #[error("command has not been executed yet")]
    NotExecuted,

    /// Unknown compression name passed to an explicit-compression helper.
    #[error("unsupported compression type: {0}")]
    UnsupportedCompression(String),

    /// I/O error, including process-spawn failures which propagate unwrapped.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
