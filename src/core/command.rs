//! # Shell Command Runner Module / Shell 命令运行器模块
//!
//! This module provides `ShellCommand`, which joins command fragments into a
//! single shell line, executes it under a configurable interpreter, captures
//! or redirects its output, and records return code, wall-clock duration and
//! peak resident memory.
//!
//! 此模块提供 `ShellCommand`，它将命令片段合并为单个 shell 命令行，
//! 在可配置的解释器下执行，捕获或重定向其输出，
//! 并记录返回码、墙钟时长和峰值常驻内存。

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tracing::{debug, info};

use crate::core::models::{RunRecord, StreamSink};
use crate::core::process::{spawn_line_reader, spawn_rss_sampler};
use crate::error::{Error, Result};
use crate::infra::fs::{MINIMUM_FILE_SIZE, check_file, file_size};
use crate::infra::io::open_writer;
use crate::reporting::format::{format_bytes, format_duration, format_header};

/// The interpreter used when none is configured.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// A shell command with captured execution state.
///
/// The command text is accepted as-is: arbitrary shell syntax is allowed and
/// the caller is trusted. The one lifecycle transition is `run`, which moves
/// the command from not-executed to executed; `check_status`, `dump` and the
/// executed section of the display report are read-only observers that
/// return [`Error::NotExecuted`] until then. Re-running overwrites the whole
/// record, with no guard against double execution.
///
/// 带有捕获执行状态的 shell 命令。
///
/// 命令文本按原样接受：允许任意 shell 语法，调用者是受信任的。
/// 唯一的生命周期转换是 `run`，它将命令从未执行状态变为已执行状态；
/// `check_status`、`dump` 和显示报告的已执行部分是只读观察者，
/// 在此之前返回 [`Error::NotExecuted`]。
/// 重新运行会覆盖整个记录，没有防止重复执行的保护。
///
/// # Examples
///
/// ```no_run
/// use shellkit::ShellCommand;
///
/// # async fn demo() -> shellkit::Result<()> {
/// let mut cmd = ShellCommand::new(["echo", "hello world"]).with_name("demo");
/// cmd.run().await?;
/// cmd.check_status()?;
/// println!("{cmd}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShellCommand {
    command: String,
    name: Option<String>,
    shell: PathBuf,
    validate_input_paths: Vec<PathBuf>,
    validate_output_paths: Vec<PathBuf>,
    allow_empty: bool,
    stdout_sink: StreamSink,
    stderr_sink: StreamSink,
    record: Option<RunRecord>,
}

impl ShellCommand {
    /// Creates a command from fragments, dropping empty ones and joining the
    /// rest with single spaces.
    ///
    /// 从片段创建命令，丢弃空片段并用单个空格连接其余片段。
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let command = fragments
            .into_iter()
            .map(|fragment| fragment.as_ref().to_string())
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            command,
            name: None,
            shell: PathBuf::from(DEFAULT_SHELL),
            validate_input_paths: Vec::new(),
            validate_output_paths: Vec::new(),
            allow_empty: false,
            stdout_sink: StreamSink::Capture,
            stderr_sink: StreamSink::Capture,
            record: None,
        }
    }

    /// Sets the display label, also used as the stem for `dump` files.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the interpreter the command line is executed under.
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Declares paths that must exist (and be non-empty) before execution.
    pub fn validate_inputs<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.validate_input_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Declares paths that must exist (and be non-empty) after execution.
    pub fn validate_outputs<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.validate_output_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Lets zero-byte validation paths pass both checks.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Redirects stdout to a file instead of capturing it in memory.
    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout_sink = StreamSink::File(path.into());
        self
    }

    /// Redirects stderr to a file instead of capturing it in memory.
    pub fn stderr_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stderr_sink = StreamSink::File(path.into());
        self
    }

    /// The joined command line.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The display label, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether `run` has completed at least once.
    pub fn executed(&self) -> bool {
        self.record.is_some()
    }

    /// The record of the last run.
    ///
    /// # Errors
    /// [`Error::NotExecuted`] if `run` has not completed yet.
    pub fn record(&self) -> Result<&RunRecord> {
        self.record.as_ref().ok_or(Error::NotExecuted)
    }

    /// Executes the command and blocks (asynchronously) until the child
    /// terminates.
    ///
    /// Input validation paths are checked before the child is spawned, so a
    /// validation failure has no process side effects. While the call waits
    /// for the child, a background task samples the child's resident memory;
    /// the maximum sample is recorded as peak memory. There is no timeout: a
    /// hung child hangs the caller.
    ///
    /// 执行命令并（异步地）阻塞直到子进程终止。
    ///
    /// 输入验证路径在子进程派生之前检查，因此验证失败不会产生
    /// 进程副作用。在调用等待子进程期间，后台任务对子进程的
    /// 常驻内存进行采样；最大采样值被记录为峰值内存。
    /// 没有超时机制：挂起的子进程会挂起调用者。
    ///
    /// # Errors
    /// * [`Error::FileNotFound`] if an input validation path is missing or
    ///   below the minimum size.
    /// * [`Error::Io`] if the shell cannot be spawned or a redirect file
    ///   cannot be created.
    pub async fn run(&mut self) -> Result<()> {
        let started = Instant::now();

        // Fail fast, before any process side effects occur.
        // 快速失败，在产生任何进程副作用之前。
        for path in &self.validate_input_paths {
            check_file(path, MINIMUM_FILE_SIZE, self.allow_empty)?;
        }

        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.arg("-c").arg(&self.command).kill_on_drop(true);

        match &self.stdout_sink {
            StreamSink::Capture => {
                cmd.stdout(Stdio::piped());
            }
            StreamSink::File(path) => {
                cmd.stdout(Stdio::from(File::create(path)?));
            }
        }
        match &self.stderr_sink {
            StreamSink::Capture => {
                cmd.stderr(Stdio::piped());
            }
            StreamSink::File(path) => {
                cmd.stderr(Stdio::from(File::create(path)?));
            }
        }

        debug!(
            command = %self.command,
            shell = %self.shell.display(),
            "spawning child process"
        );
        let mut child = cmd.spawn()?;

        // Piped streams are drained concurrently so a full pipe can never
        // stall the child.
        // 管道流被并发排空，因此写满的管道永远不会使子进程停滞。
        let stdout_task = child.stdout.take().map(spawn_line_reader);
        let stderr_task = child.stderr.take().map(spawn_line_reader);
        let sampler = child.id().map(spawn_rss_sampler);

        let status = child.wait().await?;

        let stdout = match stdout_task {
            Some(task) => task.await.unwrap_or_default(),
            None => String::new(),
        };
        let stderr = match stderr_task {
            Some(task) => task.await.unwrap_or_default(),
            None => String::new(),
        };

        let peak_rss_bytes = match sampler {
            Some((stop, task)) => {
                let _ = stop.send(());
                task.await.unwrap_or(0)
            }
            None => 0,
        };

        let record = RunRecord {
            stdout,
            stderr,
            code: status.code().unwrap_or(-1),
            peak_rss_bytes,
            duration: started.elapsed(),
            redirect_stdout: self.stdout_sink.redirect_path().cloned(),
            redirect_stderr: self.stderr_sink.redirect_path().cloned(),
        };

        debug!(
            code = record.code,
            peak_rss_bytes = record.peak_rss_bytes,
            duration_secs = record.duration.as_secs_f64(),
            "child process finished"
        );

        self.record = Some(record);
        Ok(())
    }

    /// Asserts that the last run succeeded.
    ///
    /// A non-zero return code fails with [`Error::CommandFailed`] carrying
    /// the command text, the code, and the captured stderr. On a zero code,
    /// declared output paths are validated with the same existence and
    /// minimum-size check used for inputs.
    ///
    /// # Errors
    /// * [`Error::NotExecuted`] before `run` completes.
    /// * [`Error::CommandFailed`] on a non-zero return code.
    /// * [`Error::FileNotFound`] if an output validation path is missing or
    ///   below the minimum size.
    pub fn check_status(&self) -> Result<()> {
        let record = self.record()?;

        if !record.success() {
            return Err(Error::CommandFailed {
                command: self.command.clone(),
                code: record.code,
                stderr: record.stderr.clone(),
            });
        }

        for path in &self.validate_output_paths {
            check_file(path, MINIMUM_FILE_SIZE, self.allow_empty)?;
        }

        info!(command = %self.command, "command successful");
        Ok(())
    }

    /// Writes the run's artifacts into `output_directory`:
    /// `<name>.o` (stdout), `<name>.e` (stderr) and `<name>.returncode`.
    ///
    /// Files go through the compression-aware writer, so the fixed suffixes
    /// make them effectively plain text. Unnamed commands dump as `command.*`.
    ///
    /// 将运行产物写入 `output_directory`：
    /// `<name>.o`（stdout）、`<name>.e`（stderr）和 `<name>.returncode`。
    ///
    /// # Errors
    /// [`Error::NotExecuted`] before `run` completes, or [`Error::Io`] on a
    /// write failure.
    pub fn dump(&self, output_directory: &Path) -> Result<()> {
        let record = self.record()?;
        let stem = self.name.as_deref().unwrap_or("command");

        let mut out = open_writer(&output_directory.join(format!("{stem}.o")))?;
        out.write_all(record.stdout.as_bytes())?;
        out.flush()?;

        let mut err = open_writer(&output_directory.join(format!("{stem}.e")))?;
        err.write_all(record.stderr.as_bytes())?;
        err.flush()?;

        let mut code = open_writer(&output_directory.join(format!("{stem}.returncode")))?;
        writeln!(code, "{}", record.code)?;
        code.flush()?;

        Ok(())
    }
}

/// Formats one stream line of the properties block: either the captured
/// buffer's size, or the redirect file's path and on-disk size.
fn stream_property(label: &str, captured: &str, redirect: Option<&PathBuf>) -> String {
    match redirect {
        Some(path) => {
            let size = file_size(path)
                .map(format_bytes)
                .unwrap_or_else(|_| "?".to_string());
            format!("    - {label}({}): {size}", path.display())
        }
        None => format!("    - {label}: {}", format_bytes(captured.len() as u64)),
    }
}

impl fmt::Display for ShellCommand {
    /// Renders the human-readable report: a boxed header with the name and
    /// command line, and, once executed, a properties block with stream
    /// sizes, return code, peak memory and duration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_text = format!(
            "ShellCommand(name: {})",
            self.name.as_deref().unwrap_or("unnamed")
        );
        let command_text = format!("({})$ {}", self.shell.display(), self.command);
        let width = name_text.len().max(command_text.len());

        let mut lines = vec![format_header(&name_text, '=', Some(width))];
        // Keep the command's bottom rule only; the header rule above already
        // closes the name box.
        // 只保留命令的底部分隔线；上方的标题分隔线已经闭合了名称框。
        lines.push(command_text);
        lines.push("_".repeat(width));

        if let Ok(record) = self.record() {
            lines.push("Properties:".to_string());
            lines.push(stream_property(
                "stdout",
                &record.stdout,
                record.redirect_stdout.as_ref(),
            ));
            lines.push(stream_property(
                "stderr",
                &record.stderr,
                record.redirect_stderr.as_ref(),
            ));
            lines.push(format!("    - returncode: {}", record.code));
            lines.push(format!(
                "    - peak memory: {}",
                format_bytes(record.peak_rss_bytes)
            ));
            lines.push(format!(
                "    - duration: {}",
                format_duration(record.duration.as_secs())
            ));
        }

        write!(f, "{}", lines.join("\n"))
    }
}
