//! # Shellkit Library / Shellkit 库
//!
//! This library provides utilities for executing shell commands with output
//! capture, wall-clock timing and best-effort peak-memory profiling, together
//! with the file and formatting helpers the runner itself relies on.
//!
//! 此库提供执行 shell 命令的实用工具，支持输出捕获、
//! 运行时长记录和尽力而为的峰值内存分析，
//! 以及运行器自身依赖的文件和格式化辅助功能。
//!
//! ## Modules / 模块
//!
//! - `core` - The shell command runner and its data models
//! - `infra` - Infrastructure services: compressed file I/O, filesystem checks, hashing, logging
//! - `reporting` - Human-readable formatting and directory-tree rendering
//! - `formats` - Sequence format writers
//!
//! - `core` - shell 命令运行器及其数据模型
//! - `infra` - 基础设施服务：压缩文件 I/O、文件系统检查、哈希、日志
//! - `reporting` - 人类可读的格式化和目录树渲染
//! - `formats` - 序列格式写入器

pub mod core;
pub mod error;
pub mod formats;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::command::ShellCommand;
pub use crate::core::models::{RunRecord, StreamSink};
pub use error::{Error, Result};
