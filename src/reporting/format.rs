//! # Formatting Module / 格式化模块
//!
//! Pure formatting helpers: 1024-based byte scaling, `HH:MM:SS` durations,
//! boxed headers and timestamps. Human readability is the only contract.
//!
//! 纯格式化辅助功能：基于 1024 的字节缩放、`HH:MM:SS` 时长、
//! 带框标题和时间戳。人类可读性是唯一的契约。

use chrono::Local;

const KB: u64 = 1024;
const MB: u64 = KB * KB;
const GB: u64 = KB * KB * KB;
const TB: u64 = KB * KB * KB * KB;

/// A byte-scaling unit for [`format_bytes_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteUnit {
    /// Bytes
    B,
    /// Kibibytes (1024 B)
    Kb,
    /// Mebibytes
    Mb,
    /// Gibibytes
    Gb,
    /// Tebibytes
    Tb,
}

impl ByteUnit {
    fn divisor(self) -> u64 {
        match self {
            ByteUnit::B => 1,
            ByteUnit::Kb => KB,
            ByteUnit::Mb => MB,
            ByteUnit::Gb => GB,
            ByteUnit::Tb => TB,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ByteUnit::B => "B",
            ByteUnit::Kb => "KB",
            ByteUnit::Mb => "MB",
            ByteUnit::Gb => "GB",
            ByteUnit::Tb => "TB",
        }
    }
}

/// Formats a byte count with an auto-selected unit, two decimals.
/// `1 KB = 1024 B`.
///
/// 使用自动选择的单位格式化字节数，保留两位小数。
///
/// # Examples
///
/// ```
/// use shellkit::reporting::format::format_bytes;
///
/// assert_eq!(format_bytes(0), "0.00 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    let unit = match bytes {
        b if b < KB => ByteUnit::B,
        b if b < MB => ByteUnit::Kb,
        b if b < GB => ByteUnit::Mb,
        b if b < TB => ByteUnit::Gb,
        _ => ByteUnit::Tb,
    };
    format_bytes_as(bytes, unit)
}

/// Formats a byte count in a caller-chosen unit, two decimals.
pub fn format_bytes_as(bytes: u64, unit: ByteUnit) -> String {
    let scaled = bytes as f64 / unit.divisor() as f64;
    format!("{:.2} {}", scaled, unit.label())
}

/// Formats whole seconds as `HH:MM:SS`. Hours widen past two digits when
/// needed rather than wrapping.
///
/// 将整秒格式化为 `HH:MM:SS`。需要时小时位扩展到两位以上而不是回绕。
///
/// # Examples
///
/// ```
/// use shellkit::reporting::format::format_duration;
///
/// assert_eq!(format_duration(65), "00:01:05");
/// assert_eq!(format_duration(3661), "01:01:01");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Boxes `text` between two rules of `line_char`. The rule width defaults to
/// the text's length.
pub fn format_header(text: &str, line_char: char, width: Option<usize>) -> String {
    let width = width.unwrap_or(text.len());
    let line: String = std::iter::repeat(line_char).take(width).collect();
    format!("{line}\n{text}\n{line}")
}

/// The current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
