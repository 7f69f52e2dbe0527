//! 定义 PrismLog 的内部诊断计数。
//!
//! 统计已输出、被级别过滤、写入各 Sink 的行数以及 Sink 错误次数。

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// 内部诊断数据结构。
///
/// 使用原子操作确保线程安全。
#[derive(Debug)]
pub struct Diagnostics {
    /// 创建时间
    start_time: Instant,

    /// 通过级别过滤并完成渲染的事件数
    events_logged: AtomicU64,

    /// 低于最低级别被丢弃的事件数
    events_filtered: AtomicU64,

    /// 终端写入次数
    terminal_writes: AtomicU64,

    /// 文件写入次数（共享文件与前缀日志器专属文件）
    file_writes: AtomicU64,

    /// Sink 写入失败次数
    sink_errors: AtomicU64,
}

/// 诊断数据的快照，用于外部查询。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsSnapshot {
    pub uptime: Duration,
    pub events_logged: u64,
    pub events_filtered: u64,
    pub terminal_writes: u64,
    pub file_writes: u64,
    pub sink_errors: u64,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    /// 创建新的诊断实例。
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            events_logged: AtomicU64::new(0),
            events_filtered: AtomicU64::new(0),
            terminal_writes: AtomicU64::new(0),
            file_writes: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
        }
    }

    pub fn increment_events_logged(&self) {
        self.events_logged.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_events_filtered(&self) {
        self.events_filtered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_terminal_writes(&self) {
        self.terminal_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_file_writes(&self) {
        self.file_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sink_errors(&self) {
        self.sink_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取诊断数据的快照。
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            uptime: self.start_time.elapsed(),
            events_logged: self.events_logged.load(Ordering::Relaxed),
            events_filtered: self.events_filtered.load(Ordering::Relaxed),
            terminal_writes: self.terminal_writes.load(Ordering::Relaxed),
            file_writes: self.file_writes.load(Ordering::Relaxed),
            sink_errors: self.sink_errors.load(Ordering::Relaxed),
        }
    }
}

/// 全局诊断实例
static GLOBAL_DIAGNOSTICS: Lazy<Diagnostics> = Lazy::new(Diagnostics::new);

/// 获取全局诊断实例的引用。
pub fn diagnostics() -> &'static Diagnostics {
    &GLOBAL_DIAGNOSTICS
}

/// 获取全局诊断数据快照
///
/// # 示例
///
/// ```rust
/// let before = prism_log::get_diagnostics();
/// prism_log::diagnostics::diagnostics().increment_events_filtered();
/// assert!(prism_log::get_diagnostics().events_filtered > before.events_filtered);
/// ```
pub fn get_diagnostics() -> DiagnosticsSnapshot {
    GLOBAL_DIAGNOSTICS.snapshot()
}
