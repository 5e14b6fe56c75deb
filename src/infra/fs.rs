//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the filesystem checks used by the command runner's
//! validation paths, plus file- and directory-size helpers.
//!
//! 此模块提供命令运行器验证路径所使用的文件系统检查，
//! 以及文件和目录大小的辅助功能。

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::reporting::format::format_bytes;

/// The smallest size, in bytes, at which a validation path counts as present.
/// 验证路径被视为存在的最小字节数。
pub const MINIMUM_FILE_SIZE: u64 = 1;

/// Returns a file's size in bytes.
///
/// # Errors
/// [`Error::Io`] if the path cannot be stat'ed.
pub fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Returns a file's size as a human-readable string, e.g. `"1.50 KB"`.
pub fn file_size_formatted(path: &Path) -> Result<String> {
    Ok(format_bytes(file_size(path)?))
}

/// Asserts that a path exists and holds at least `minimum_size` bytes.
/// With `allow_empty`, only existence is checked.
///
/// Note: an empty gzip file still carries a header, so the size check does
/// not catch logically empty compressed files.
///
/// 断言路径存在且至少包含 `minimum_size` 字节。
/// 使用 `allow_empty` 时，仅检查存在性。
///
/// # Errors
/// [`Error::FileNotFound`] when the path is absent or undersized.
pub fn check_file(path: &Path, minimum_size: u64, allow_empty: bool) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if !allow_empty && file_size(path)? < minimum_size {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Sums the sizes of all regular files under `root`, recursively.
/// On Unix, hard-linked files are counted once, keyed by device and inode.
///
/// 递归地对 `root` 下所有常规文件的大小求和。
/// 在 Unix 上，硬链接文件只计算一次，以设备号和 inode 为键。
///
/// # Errors
/// [`Error::Io`] if a directory cannot be read. Files that vanish mid-walk
/// are skipped.
pub fn directory_size(root: &Path) -> Result<u64> {
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut total = 0u64;
    accumulate_size(root, &mut seen, &mut total)?;
    Ok(total)
}

fn accumulate_size(dir: &Path, seen: &mut HashSet<(u64, u64)>, total: &mut u64) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            accumulate_size(&path, seen, total)?;
        } else if file_type.is_file() {
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            if seen.insert(identity(&metadata)) {
                *total += metadata.len();
            }
        }
    }
    Ok(())
}

#[cfg(unix)]
fn identity(metadata: &fs::Metadata) -> (u64, u64) {
    use std::os::unix::fs::MetadataExt;
    (metadata.dev(), metadata.ino())
}

#[cfg(not(unix))]
fn identity(metadata: &fs::Metadata) -> (u64, u64) {
    // No stable inode; fall back to counting every entry.
    static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
    let _ = metadata;
    (0, COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
}
