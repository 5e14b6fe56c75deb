//! # Compressed File I/O Module / 压缩文件 I/O 模块
//!
//! This module opens plain, gzip or bz2 files behind uniform reader/writer
//! trait objects. The compression scheme is resolved once, either explicitly
//! or from the file extension, then dispatched through a single match.
//! JSON read/write wrappers are layered on top.
//!
//! 此模块在统一的读写 trait 对象背后打开普通、gzip 或 bz2 文件。
//! 压缩方案只解析一次（显式指定或根据文件扩展名推断），
//! 然后通过单个 match 分派。JSON 读写包装器构建在其之上。

use bzip2::read::MultiBzDecoder;
use bzip2::write::BzEncoder;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// The compression scheme of a file.
/// 文件的压缩方案。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression
    #[default]
    None,
    /// gzip (`.gz`)
    Gzip,
    /// bzip2 (`.bz2`)
    Bzip2,
}

impl Compression {
    /// Resolves the scheme from a path's extension: `gz` is gzip, `bz2` is
    /// bzip2, anything else is plain. Matching is case-insensitive.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("gz") => Compression::Gzip,
            Some("bz2") => Compression::Bzip2,
            _ => Compression::None,
        }
    }

    /// Resolves the scheme from a name such as `"gzip"` or `"bz2"`.
    ///
    /// # Errors
    /// [`Error::UnsupportedCompression`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Compression::None),
            "gz" | "gzip" => Ok(Compression::Gzip),
            "bz2" | "bzip2" => Ok(Compression::Bzip2),
            other => Err(Error::UnsupportedCompression(other.to_string())),
        }
    }
}

/// Opens a file for reading, auto-detecting compression from its extension.
///
/// # Errors
/// [`Error::Io`] if the file cannot be opened.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    open_reader_with(path, Compression::from_path(path))
}

/// Opens a file for reading under an explicit compression scheme.
/// 使用显式压缩方案打开文件进行读取。
pub fn open_reader_with(path: &Path, compression: Compression) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    Ok(match compression {
        Compression::None => Box::new(BufReader::new(file)),
        Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        Compression::Bzip2 => Box::new(BufReader::new(MultiBzDecoder::new(file))),
    })
}

/// Opens a file for writing, auto-detecting compression from its extension.
/// An existing file is truncated.
///
/// # Errors
/// [`Error::Io`] if the file cannot be created.
pub fn open_writer(path: &Path) -> Result<Box<dyn Write>> {
    open_writer_with(path, Compression::from_path(path))
}

/// Opens a file for writing under an explicit compression scheme.
///
/// Encoders finish their stream when dropped; callers that need to observe
/// trailing write errors should `flush` first.
///
/// 使用显式压缩方案打开文件进行写入。
/// 编码器在被丢弃时结束其流；需要观察尾部写入错误的调用者应先 `flush`。
pub fn open_writer_with(path: &Path, compression: Compression) -> Result<Box<dyn Write>> {
    let file = File::create(path)?;
    Ok(match compression {
        Compression::None => Box::new(BufWriter::new(file)),
        Compression::Gzip => Box::new(GzEncoder::new(file, flate2::Compression::default())),
        Compression::Bzip2 => Box::new(BzEncoder::new(file, bzip2::Compression::default())),
    })
}

/// Reads a JSON value from a plain-text file.
///
/// # Errors
/// [`Error::Io`] on open failure, [`Error::Json`] on malformed content.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_reader_with(path, Compression::None)?;
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a value as pretty-printed JSON to a plain-text file.
///
/// # Errors
/// [`Error::Io`] on create/write failure, [`Error::Json`] on serialization
/// failure.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = open_writer_with(path, Compression::None)?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
