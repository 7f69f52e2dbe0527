//! PrismLog - 彩色控制台与文件日志库
//!
//! PrismLog 将每条日志渲染为两种形式：带 24 位 ANSI 颜色的行写入标准输出，
//! 纯文本行追加到日志文件。每一行包含时间、日期、相对于项目根目录的源文件路径、
//! 行号、级别与消息。
//!
//! # 快速开始
//!
//! ```rust
//! use prism_log::Level;
//!
//! fn main() -> prism_log::Result<()> {
//!     prism_log::set_level(Level::INFO)?;
//!
//!     prism_log::info("Application started", None)?;
//!     prism_log::warning("Disk almost full", Some("[storage]"))?;
//!     prism_log::error!("request {} failed", 42)?;
//!     Ok(())
//! }
//! ```
//!
//! # 独立的分发器
//!
//! ```rust
//! use prism_log::{Logger, LoggerConfig, Level};
//!
//! fn main() -> prism_log::Result<()> {
//!     let logger = Logger::new(LoggerConfig::detect()?.with_min_level(Level::WARNING));
//!     assert_eq!(logger.info("filtered", None)?, None);
//!
//!     let db = logger.prefixed("[db]");
//!     db.error("connection lost")?;
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod level;
pub mod palette;
pub mod sinks;
pub mod utils;

// 重新导出主要类型
pub use color::{Color, ColorPair};
pub use config::{
    detect_root_path, load_config_from_file, load_config_from_str, source_dir, FieldColors,
    LoggerConfig, Separators, StyleConfig,
};
pub use diagnostics::{get_diagnostics, DiagnosticsSnapshot};
pub use error::{PrismLogError, Result};
pub use level::Level;

// 重新导出核心功能
pub use core::event::CallSite;
pub use core::layer::PrismLayer;
pub use core::logger::Logger;
pub use core::prefixed::PrefixLogger;

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 全局分发器，首次使用时以当前工作目录作为项目根目录
static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(|| {
    let config = LoggerConfig::detect().unwrap_or_else(|e| {
        eprintln!("prism_log: failed to detect root path: {}", e);
        LoggerConfig::default()
    });
    Logger::new(config)
});

/// 获取进程级全局分发器
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// 整体替换全局分发器的配置
///
/// # 示例
///
/// ```rust
/// use prism_log::load_config_from_str;
///
/// let config = load_config_from_str(r#"min_level = "error""#).unwrap();
/// prism_log::configure(config).unwrap();
/// assert_eq!(prism_log::global().config().min_level, prism_log::Level::ERROR);
/// ```
pub fn configure(config: LoggerConfig) -> Result<Arc<LoggerConfig>> {
    global().reconfigure(|_| Ok(config))
}

/// 从 TOML 文件加载配置并应用到全局分发器
pub fn configure_from_file(path: impl AsRef<Path>) -> Result<Arc<LoggerConfig>> {
    configure(load_config_from_file(path.as_ref())?)
}

/// 设置全局最低输出级别
pub fn set_level(level: Level) -> Result<Arc<LoggerConfig>> {
    global().set_level(level)
}

/// 设置全局共享日志文件，相对路径基于项目根目录
pub fn set_log_file(path: impl AsRef<Path>) -> Result<Arc<LoggerConfig>> {
    global().set_log_file(path)
}

/// 设置全局项目根目录
pub fn set_root_path(path: impl Into<PathBuf>) -> Result<Arc<LoggerConfig>> {
    global().set_root_path(path)
}

/// 以调用方源文件所在目录作为全局项目根目录
#[track_caller]
pub fn set_root_path_here() -> Result<Arc<LoggerConfig>> {
    global().set_root_path_here()
}

/// 以全局分发器创建前缀日志器
pub fn prefixed(prefix: impl Into<String>) -> PrefixLogger {
    global().prefixed(prefix)
}

#[track_caller]
pub fn debug(message: &str, prefix: Option<&str>) -> Result<Option<String>> {
    global().debug(message, prefix)
}

#[track_caller]
pub fn info(message: &str, prefix: Option<&str>) -> Result<Option<String>> {
    global().info(message, prefix)
}

#[track_caller]
pub fn warning(message: &str, prefix: Option<&str>) -> Result<Option<String>> {
    global().warning(message, prefix)
}

#[track_caller]
pub fn error(message: &str, prefix: Option<&str>) -> Result<Option<String>> {
    global().error(message, prefix)
}

#[track_caller]
pub fn fatal(message: &str, prefix: Option<&str>) -> Result<Option<String>> {
    global().fatal(message, prefix)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __prism_log {
    ($lvl:expr, $($t:tt)+) => {
        $crate::global().log_at(
            ::core::option::Option::Some($crate::CallSite::new(file!(), line!())),
            &::std::format!($($t)+),
            &$lvl,
            ::core::option::Option::None,
        )
    };
}

/// 以格式化参数记录 DEBUG 消息
#[macro_export]
macro_rules! debug { ($($t:tt)+) => { $crate::__prism_log!($crate::Level::DEBUG, $($t)+) } }
/// 以格式化参数记录 INFO 消息
#[macro_export]
macro_rules! info { ($($t:tt)+) => { $crate::__prism_log!($crate::Level::INFO, $($t)+) } }
/// 以格式化参数记录 WARNING 消息
#[macro_export]
macro_rules! warning { ($($t:tt)+) => { $crate::__prism_log!($crate::Level::WARNING, $($t)+) } }
/// 以格式化参数记录 ERROR 消息
#[macro_export]
macro_rules! error { ($($t:tt)+) => { $crate::__prism_log!($crate::Level::ERROR, $($t)+) } }
/// 以格式化参数记录 FATAL 消息
#[macro_export]
macro_rules! fatal { ($($t:tt)+) => { $crate::__prism_log!($crate::Level::FATAL, $($t)+) } }
