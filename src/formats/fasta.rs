//! # FASTA Writer Module / FASTA 写入器模块
//!
//! Writes FASTA records: a `>`-prefixed header line followed by the sequence,
//! wrapped at a fixed column width.
//!
//! 写入 FASTA 记录：以 `>` 为前缀的标题行，后跟序列，
//! 在固定列宽处换行。

use std::io::Write;

use crate::error::Result;

/// Default sequence line width.
pub const DEFAULT_WRAP: usize = 1000;

/// Writes one FASTA record.
///
/// With `wrap` of `Some(n)` (n > 0) the sequence is split into lines of at
/// most `n` characters; `None` or `Some(0)` writes it as a single line.
/// An empty sequence produces a header with no sequence lines.
///
/// 写入一条 FASTA 记录。
/// `wrap` 为 `Some(n)`（n > 0）时序列被拆分为最多 `n` 个字符的行；
/// `None` 或 `Some(0)` 将其写为单行。
/// 空序列只产生标题而没有序列行。
///
/// # Errors
/// [`crate::Error::Io`] on a write failure.
///
/// # Examples
///
/// ```
/// use shellkit::formats::fasta::write_record;
///
/// let mut out = Vec::new();
/// write_record(&mut out, "seq1", "ACGTACGT", Some(4)).unwrap();
/// assert_eq!(out, b">seq1\nACGT\nACGT\n");
/// ```
pub fn write_record<W: Write>(
    writer: &mut W,
    header: &str,
    sequence: &str,
    wrap: Option<usize>,
) -> Result<()> {
    writeln!(writer, ">{header}")?;

    match wrap {
        Some(width) if width > 0 => {
            for chunk in sequence.as_bytes().chunks(width) {
                writer.write_all(chunk)?;
                writer.write_all(b"\n")?;
            }
        }
        _ => writeln!(writer, "{sequence}")?,
    }

    Ok(())
}
