//! # File System Module Unit Tests / 文件系统模块单元测试
//!
//! This module contains unit tests for the `infra::fs` and `infra::hash`
//! modules: size queries, validation checks, directory sizing and MD5
//! digests.
//!
//! 此模块包含 `infra::fs` 和 `infra::hash` 模块的单元测试：
//! 大小查询、验证检查、目录大小统计和 MD5 摘要。

use shellkit::Error;
use shellkit::infra::fs::{MINIMUM_FILE_SIZE, check_file, directory_size, file_size, file_size_formatted};
use shellkit::infra::hash::{md5_directory, md5_file};
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod file_size_tests {
    use super::*;

    #[test]
    fn test_file_size_counts_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("five.txt");
        fs::write(&path, "12345").unwrap();
        assert_eq!(file_size(&path).unwrap(), 5);
    }

    #[test]
    fn test_file_size_formatted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kb.bin");
        fs::write(&path, vec![0u8; 1536]).unwrap();
        assert_eq!(file_size_formatted(&path).unwrap(), "1.50 KB");
    }

    #[test]
    fn test_file_size_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = file_size(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

#[cfg(test)]
mod check_file_tests {
    use super::*;

    #[test]
    fn test_check_file_passes_for_nonempty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.txt");
        fs::write(&path, "x").unwrap();
        assert!(check_file(&path, MINIMUM_FILE_SIZE, false).is_ok());
    }

    #[test]
    fn test_check_file_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");
        let err = check_file(&path, MINIMUM_FILE_SIZE, false).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { path: p } if p == path));
    }

    #[test]
    fn test_check_file_empty_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        let err = check_file(&path, MINIMUM_FILE_SIZE, false).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_check_file_empty_file_passes_when_allowed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(check_file(&path, MINIMUM_FILE_SIZE, true).is_ok());
    }

    #[test]
    fn test_check_file_custom_minimum_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("small.txt");
        fs::write(&path, "abc").unwrap();
        assert!(check_file(&path, 3, false).is_ok());
        assert!(check_file(&path, 4, false).is_err());
    }
}

#[cfg(test)]
mod directory_size_tests {
    use super::*;

    #[test]
    fn test_directory_size_sums_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub").join("nested")).unwrap();
        fs::write(dir.path().join("a.bin"), vec![0u8; 10]).unwrap();
        fs::write(dir.path().join("sub").join("b.bin"), vec![0u8; 20]).unwrap();
        fs::write(
            dir.path().join("sub").join("nested").join("c.bin"),
            vec![0u8; 30],
        )
        .unwrap();

        assert_eq!(directory_size(dir.path()).unwrap(), 60);
    }

    #[test]
    fn test_directory_size_empty_directory_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(directory_size(dir.path()).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_size_counts_hard_links_once() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("original.bin");
        fs::write(&original, vec![0u8; 100]).unwrap();
        fs::hard_link(&original, dir.path().join("link.bin")).unwrap();

        assert_eq!(directory_size(dir.path()).unwrap(), 100);
    }
}

#[cfg(test)]
mod hash_tests {
    use super::*;

    #[test]
    fn test_md5_file_known_digest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "hello world").unwrap();

        assert_eq!(
            md5_file(&path).unwrap(),
            "5eb63bbbe01eeed093cb22bb8f5acdc3"
        );
    }

    #[test]
    fn test_md5_file_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        // MD5 of the empty input
        assert_eq!(
            md5_file(&path).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_md5_directory_hashes_every_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "hello world").unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), "hello world").unwrap();

        let hashes = md5_directory(dir.path()).unwrap();
        assert_eq!(hashes.len(), 2);
        for digest in hashes.values() {
            assert_eq!(digest, "5eb63bbbe01eeed093cb22bb8f5acdc3");
        }
    }

    #[test]
    fn test_md5_directory_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(md5_directory(dir.path()).unwrap().is_empty());
    }
}
