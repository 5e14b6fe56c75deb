//! # Core Module / 核心模块
//!
//! This module contains the core functionality of shellkit:
//! the shell command runner, its data models, and the process
//! plumbing used to capture output and sample memory.
//!
//! 此模块包含 shellkit 的核心功能：
//! shell 命令运行器、其数据模型，
//! 以及用于捕获输出和采样内存的进程管道。

pub mod command;
pub mod models;
pub mod process;

// Re-exports
pub use command::ShellCommand;
pub use models::{RunRecord, StreamSink};
