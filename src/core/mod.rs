//! PrismLog 核心模块
//!
//! 本模块包含日志事件、调用位置解析、格式化、分发器以及 tracing 桥接层。

pub mod event;
pub mod formatter;
pub mod layer;
pub mod locator;
pub mod logger;
pub mod prefixed;

// 重新导出核心类型
pub use event::{CallSite, LogRecord};
pub use formatter::{Formatter, Rendered};
pub use layer::PrismLayer;
pub use locator::{locate, Location};
pub use logger::Logger;
pub use prefixed::PrefixLogger;
