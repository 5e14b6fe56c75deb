//! # Content Hashing Module / 内容哈希模块
//!
//! MD5 digests of single files and of whole directory trees, streamed in
//! fixed-size blocks so large files never load into memory at once.
//!
//! 单个文件和整个目录树的 MD5 摘要，以固定大小的块流式处理，
//! 因此大文件永远不会一次性加载到内存中。

use md5::{Digest, Md5};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Block size for streaming file reads (64 KiB).
const BLOCK_SIZE: usize = 65536;

/// Computes the MD5 hash of a file, returned as a lowercase hex string.
///
/// # Errors
/// [`crate::Error::Io`] if the file cannot be opened or read.
pub fn md5_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut block = vec![0u8; BLOCK_SIZE];

    loop {
        let read = file.read(&mut block)?;
        if read == 0 {
            break;
        }
        hasher.update(&block[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Computes the MD5 hash of every regular file under a directory,
/// recursively. The map is keyed by path and sorted, so iteration order is
/// deterministic.
///
/// 递归计算目录下每个常规文件的 MD5 哈希。
/// 映射以路径为键并排序，因此迭代顺序是确定的。
///
/// # Errors
/// [`crate::Error::Io`] if a directory or file cannot be read.
pub fn md5_directory(root: &Path) -> Result<BTreeMap<PathBuf, String>> {
    let mut hashes = BTreeMap::new();
    collect_hashes(root, &mut hashes)?;
    Ok(hashes)
}

fn collect_hashes(dir: &Path, hashes: &mut BTreeMap<PathBuf, String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_hashes(&path, hashes)?;
        } else if path.is_file() {
            let digest = md5_file(&path)?;
            hashes.insert(path, digest);
        }
    }
    Ok(())
}
