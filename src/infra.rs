//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for shellkit,
//! including compression-aware file I/O, filesystem checks,
//! content hashing and logger construction.
//!
//! 此模块为 shellkit 提供基础设施服务，
//! 包括感知压缩的文件 I/O、文件系统检查、
//! 内容哈希和日志器构建。

pub mod fs;
pub mod hash;
pub mod io;
pub mod logging;
