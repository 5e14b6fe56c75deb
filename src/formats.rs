//! # Formats Module / 格式模块
//!
//! Writers for sequence file formats.
//!
//! 序列文件格式的写入器。

pub mod fasta;
