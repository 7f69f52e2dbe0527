//! 前缀日志器
//!
//! 绑定固定前缀（已渲染，可含颜色）与可选专属日志文件的分发器。
//! 消息经共享分发器写入控制台与共享文件后，再追加到专属文件，
//! 因此同一条消息可能同时出现在两个文件中。

use crate::core::event::CallSite;
use crate::core::logger::Logger;
use crate::error::Result;
use crate::level::Level;
use crate::sinks::{FileSink, LineSink};

use std::path::Path;

/// 前缀日志器
///
/// 专属文件拥有独立的锁，与共享文件及其他前缀日志器互不阻塞。
#[derive(Debug)]
pub struct PrefixLogger {
    logger: Logger,
    prefix: String,
    file: Option<FileSink>,
}

impl PrefixLogger {
    /// 创建前缀日志器
    ///
    /// `prefix` 应为已经渲染好的文本，会原样出现在每一行开头。
    pub fn new(logger: &Logger, prefix: impl Into<String>) -> Self {
        Self {
            logger: logger.clone(),
            prefix: prefix.into(),
            file: None,
        }
    }

    /// 设置专属日志文件
    ///
    /// 相对路径在此时基于项目根目录解析，之后更改根目录不影响该路径；
    /// 根目录未设置时返回配置错误。
    pub fn with_log_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = self.logger.config().resolve_path(path)?;
        tracing::debug!(prefix = %self.prefix, log_file = %path.display(), "prefixed file sink created");
        self.file = Some(FileSink::new(path));
        Ok(self)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 专属日志文件路径
    pub fn log_file(&self) -> Option<&Path> {
        self.file.as_ref().map(FileSink::path)
    }

    /// 记录一条消息，调用位置取自调用者
    #[track_caller]
    pub fn log(&self, message: &str, level: &Level) -> Result<Option<String>> {
        self.log_at(Some(CallSite::caller()), message, level)
    }

    /// 使用显式给出的调用位置记录一条消息
    pub fn log_at(
        &self,
        call_site: Option<CallSite>,
        message: &str,
        level: &Level,
    ) -> Result<Option<String>> {
        if !self.logger.is_enabled(level) {
            crate::diagnostics::diagnostics().increment_events_filtered();
            return Ok(None);
        }

        let plain = self
            .logger
            .log_at(call_site, message, level, Some(self.prefix.as_str()))?;

        if let (Some(file), Some(plain)) = (&self.file, &plain) {
            file.write_line(plain)
                .inspect_err(|_| crate::diagnostics::diagnostics().increment_sink_errors())?;
        }

        Ok(plain)
    }

    #[track_caller]
    pub fn debug(&self, message: &str) -> Result<Option<String>> {
        self.log(message, &Level::DEBUG)
    }

    #[track_caller]
    pub fn info(&self, message: &str) -> Result<Option<String>> {
        self.log(message, &Level::INFO)
    }

    #[track_caller]
    pub fn warning(&self, message: &str) -> Result<Option<String>> {
        self.log(message, &Level::WARNING)
    }

    #[track_caller]
    pub fn error(&self, message: &str) -> Result<Option<String>> {
        self.log(message, &Level::ERROR)
    }

    #[track_caller]
    pub fn fatal(&self, message: &str) -> Result<Option<String>> {
        self.log(message, &Level::FATAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorPair;
    use crate::config::LoggerConfig;
    use crate::error::PrismLogError;
    use crate::palette;
    use crate::sinks::ConsoleSink;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn quiet_logger(config: LoggerConfig) -> Logger {
        Logger::with_console(config, ConsoleSink::with_writer(io::sink()))
    }

    #[test]
    fn test_prefix_is_prepended() {
        let logger = quiet_logger(LoggerConfig::default().with_root_path(env!("CARGO_MANIFEST_DIR")));
        let worker = logger.prefixed("[worker]");

        let plain = worker.info("ready").unwrap().unwrap();
        assert!(plain.starts_with("[worker] || "));
        assert!(plain.ends_with("INFO >>> ready"));
        assert!(plain.contains("src/core/prefixed.rs"));
        assert_eq!(worker.prefix(), "[worker]");
        assert!(worker.log_file().is_none());
    }

    #[test]
    fn test_threshold_applies() {
        let logger = quiet_logger(
            LoggerConfig::default()
                .with_root_path(env!("CARGO_MANIFEST_DIR"))
                .with_min_level(Level::ERROR),
        );
        let worker = logger.prefixed("p");
        assert_eq!(worker.warning("skip").unwrap(), None);
        assert!(worker.error("keep").unwrap().is_some());
    }

    #[test]
    fn test_writes_to_shared_and_dedicated_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggerConfig::default()
            .with_root_path(temp_dir.path())
            .with_log_file("shared.log")
            .unwrap();
        let logger = quiet_logger(config);
        let worker = logger
            .prefixed(ColorPair::fg(palette::GOLD).colorize("db"))
            .with_log_file("db.log")
            .unwrap();
        assert_eq!(worker.log_file(), Some(temp_dir.path().join("db.log").as_path()));

        let plain = worker.log_at(None, "connected", &Level::INFO).unwrap().unwrap();

        let shared = fs::read_to_string(temp_dir.path().join("shared.log")).unwrap();
        let dedicated = fs::read_to_string(temp_dir.path().join("db.log")).unwrap();
        assert_eq!(shared, format!("{}\n", plain));
        assert_eq!(dedicated, shared);
    }

    #[test]
    fn test_dedicated_file_resolved_at_construction() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let logger = quiet_logger(LoggerConfig::default().with_root_path(first.path()));

        let worker = logger.prefixed("p").with_log_file("own.log").unwrap();
        logger.set_root_path(second.path()).unwrap();

        worker.log_at(None, "x", &Level::INFO).unwrap();
        assert!(first.path().join("own.log").exists());
        assert!(!second.path().join("own.log").exists());
    }

    #[test]
    fn test_relative_file_without_root_fails() {
        let logger = quiet_logger(LoggerConfig::default());
        let err = logger.prefixed("p").with_log_file("own.log").unwrap_err();
        assert!(matches!(err, PrismLogError::ConfigError(_)));
    }
}
