//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints command reports to the console, using color coding to
//! highlight the outcome of an executed command.
//!
//! 此模块将命令报告打印到控制台，使用颜色编码突出显示
//! 已执行命令的结果。

use colored::*;

use crate::core::command::ShellCommand;

/// Prints a command's report followed by a colored status line.
/// Commands that have not run yet show only the header block.
///
/// 打印命令的报告，后跟彩色状态行。
/// 尚未运行的命令仅显示标题块。
///
/// # Output Format / 输出格式
/// ```text
/// ==========================
/// ShellCommand(name: demo)
/// ==========================
/// (/bin/bash)$ echo hello
/// __________________________
/// Properties:
///     - stdout: 6.00 B
///     - stderr: 0.00 B
///     - returncode: 0
///     - peak memory: 1.20 MB
///     - duration: 00:00:00
/// Status: passed
/// ```
pub fn print_report(command: &ShellCommand) {
    println!("{command}");

    if let Ok(record) = command.record() {
        let status = if record.success() {
            "passed".green()
        } else {
            format!("failed (exit {})", record.code).red()
        };
        println!("Status: {status}");
    }
}
