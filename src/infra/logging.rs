//! # Logging Module / 日志模块
//!
//! Explicit, one-shot tracing initialization. Library code logs through the
//! `tracing` macros; embedding applications either call [`init_logging`] or
//! install their own subscriber, in which case this function backs off.
//!
//! 显式的一次性 tracing 初始化。库代码通过 `tracing` 宏记录日志；
//! 嵌入的应用程序要么调用 [`init_logging`]，
//! 要么安装自己的订阅者，此时该函数会让步。

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr subscriber with an env-filter taken from `RUST_LOG`
/// (default `info`). Idempotent: if a global dispatcher is already set, the
/// call is a no-op.
///
/// 安装一个 stderr 订阅者，env-filter 取自 `RUST_LOG`（默认 `info`）。
/// 幂等：如果已设置全局分发器，则该调用不执行任何操作。
pub fn init_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // try_init: a subscriber installed between the check above and here
    // (e.g. concurrent test threads) must not panic the caller.
    // try_init：在上面的检查和这里之间安装的订阅者
    // （例如并发测试线程）不得使调用者 panic。
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(fmt_layer)
        .try_init();
}
