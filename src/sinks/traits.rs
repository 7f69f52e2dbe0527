//! PrismLog Sink Traits
//!
//! 定义了统一的行输出接口，允许开发者实现自定义的日志输出目标。
//!
//! 每个 Sink 自行持有互斥锁：同一 Sink 上的写入全序，不同 Sink 之间互不阻塞。
//!
//! # 使用示例
//!
//! ```rust
//! use prism_log::sinks::traits::LineSink;
//! use prism_log::Result;
//! use std::sync::Mutex;
//!
//! #[derive(Debug, Default)]
//! struct MemorySink {
//!     lines: Mutex<Vec<String>>,
//! }
//!
//! impl LineSink for MemorySink {
//!     fn write_line(&self, line: &str) -> Result<()> {
//!         self.lines.lock().unwrap().push(line.to_string());
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "memory"
//!     }
//! }
//!
//! let sink = MemorySink::default();
//! sink.write_line("hello").unwrap();
//! assert_eq!(sink.lines.lock().unwrap().len(), 1);
//! ```

use crate::error::Result;
use std::fmt::Debug;

/// 行输出 Sink
///
/// 接收一条已渲染、不含换行符的日志行。实现负责追加换行并保证
/// 同一 Sink 上的并发写入不会交错。
pub trait LineSink: Send + Sync + Debug {
    /// 写入一行并在返回前使其可见
    fn write_line(&self, line: &str) -> Result<()>;

    /// 获取 sink 的名称
    ///
    /// 用于日志和调试目的
    fn name(&self) -> &'static str;
}
