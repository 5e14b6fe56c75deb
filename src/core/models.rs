//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures used by the shell command runner:
//! the destination of a stream's output and the record of a completed run.
//!
//! 此模块定义了 shell 命令运行器使用的数据结构：
//! 流输出的目标以及已完成运行的记录。

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Where a child stream's output goes.
/// 子进程流输出的去向。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StreamSink {
    /// Capture the stream into an in-memory buffer (the default).
    /// 将流捕获到内存缓冲区（默认）。
    #[default]
    Capture,
    /// Redirect the stream to a file, opened in write mode.
    /// 将流重定向到以写模式打开的文件。
    File(PathBuf),
}

impl StreamSink {
    /// Returns the redirect path, if this sink is file-backed.
    pub fn redirect_path(&self) -> Option<&PathBuf> {
        match self {
            StreamSink::Capture => None,
            StreamSink::File(path) => Some(path),
        }
    }
}

/// Everything observed during one execution of a command.
/// Absent from a `ShellCommand` until `run` completes; a re-run
/// overwrites the previous record wholesale.
///
/// 一次命令执行期间观察到的所有内容。
/// 在 `run` 完成之前不存在于 `ShellCommand` 中；
/// 重新运行会整体覆盖之前的记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Captured stdout text; empty when the stream was redirected.
    /// 捕获的 stdout 文本；当流被重定向时为空。
    pub stdout: String,
    /// Captured stderr text; empty when the stream was redirected.
    /// 捕获的 stderr 文本；当流被重定向时为空。
    pub stderr: String,
    /// The child's exit code. -1 when the child was terminated by a signal.
    /// 子进程的退出码。当子进程被信号终止时为 -1。
    pub code: i32,
    /// Maximum resident-memory sample observed while the child ran, in bytes.
    /// Best effort: short-lived children may exit between samples.
    /// 子进程运行期间观察到的最大常驻内存采样值，以字节为单位。
    /// 尽力而为：生命周期很短的子进程可能在采样间隔之间退出。
    pub peak_rss_bytes: u64,
    /// Wall-clock time spent inside `run`.
    /// 在 `run` 内花费的墙钟时间。
    pub duration: Duration,
    /// File that received stdout, when it was redirected rather than captured.
    pub redirect_stdout: Option<PathBuf>,
    /// File that received stderr, when it was redirected rather than captured.
    pub redirect_stderr: Option<PathBuf>,
}

impl RunRecord {
    /// Checks whether the child exited successfully.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}
