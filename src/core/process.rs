//! # Process Plumbing Module / 进程管道模块
//!
//! Low-level helpers shared by the command runner: line-buffered capture of
//! a child's output streams, and a background task that polls the child's
//! resident memory while it runs.
//!
//! 命令运行器共享的底层辅助功能：对子进程输出流的行缓冲捕获，
//! 以及在子进程运行期间轮询其常驻内存的后台任务。

use std::time::Duration;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// How often the sampler polls the child's resident memory.
/// 采样器轮询子进程常驻内存的频率。
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(50);

/// Spawns a task that reads a child stream line by line into an owned buffer.
/// Each line is terminated with a single `\n`, matching line-buffered text
/// capture. The task completes when the stream reaches EOF.
///
/// # Arguments
/// * `stream` - The piped stdout or stderr handle taken from the child.
///
/// # Returns
/// A `JoinHandle` resolving to the accumulated text.
///
/// 派生一个任务，将子进程流逐行读取到独立的缓冲区中。
/// 每行以单个 `\n` 结尾，匹配行缓冲文本捕获。
/// 当流到达 EOF 时任务完成。
pub fn spawn_line_reader<R>(stream: R) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let reader = BufReader::new(stream);
        let mut lines = reader.lines();
        let mut output = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            output.push_str(&line);
            output.push('\n');
        }
        output
    })
}

/// Spawns a task that samples the resident memory of `pid` at
/// [`SAMPLE_INTERVAL`] and retains the maximum observed value.
///
/// The task stops when the stop channel fires (sender used or dropped) or
/// when the process disappears from the process table. The first sample is
/// taken immediately so that short-lived children have a chance of being
/// observed at least once.
///
/// # Returns
/// The stop sender and a `JoinHandle` resolving to the peak sample in bytes.
///
/// 派生一个任务，以 [`SAMPLE_INTERVAL`] 的间隔对 `pid` 的常驻内存
/// 进行采样，并保留观察到的最大值。
///
/// 当停止通道触发（发送端被使用或丢弃）或进程从进程表中消失时，
/// 任务停止。第一次采样立即进行，
/// 以便生命周期很短的子进程至少有机会被观察一次。
pub fn spawn_rss_sampler(pid: u32) -> (oneshot::Sender<()>, JoinHandle<u64>) {
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let pid = Pid::from_u32(pid);
        let mut system = System::new();
        let mut peak: u64 = 0;
        let mut ticker = tokio::time::interval(SAMPLE_INTERVAL);

        loop {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {
                    system.refresh_processes_specifics(
                        ProcessesToUpdate::Some(&[pid]),
                        true,
                        ProcessRefreshKind::nothing().with_memory(),
                    );
                    match system.process(pid) {
                        Some(process) => peak = peak.max(process.memory()),
                        // The child is gone; nothing more to observe.
                        // 子进程已退出；没有更多可观察的内容。
                        None => break,
                    }
                }
            }
        }

        peak
    });

    (stop_tx, handle)
}
