//! PrismLog Sinks 模块
//!
//! 提供日志输出目标的实现：控制台（彩色行）与文件（纯文本行）。

pub mod console;
pub mod file;
pub mod traits;

// 重新导出主要类型
pub use console::ConsoleSink;
pub use file::FileSink;
pub use traits::LineSink;
