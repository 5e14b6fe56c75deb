//! # Reporting Module / 报告模块
//!
//! Human-readable output: byte and duration formatters, console summaries
//! and directory-tree rendering.
//!
//! 人类可读的输出：字节和时长格式化器、控制台摘要和目录树渲染。

pub mod console;
pub mod format;
pub mod tree;
