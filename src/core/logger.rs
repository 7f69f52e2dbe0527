//! 日志分发器
//!
//! [`Logger`] 按最低级别过滤消息，将彩色行写入控制台、纯文本行写入共享日志文件。
//! 控制台与文件各有一把锁：同一 Sink 的写入全序，不同 Sink 互不阻塞。
//! 写入顺序固定为先控制台后文件，控制台失败时不会再写文件。

use crate::config::{source_dir, validate_config, LoggerConfig, StyleConfig};
use crate::core::event::{CallSite, LogRecord};
use crate::core::formatter::{Formatter, Rendered};
use crate::core::locator::locate;
use crate::core::prefixed::PrefixLogger;
use crate::diagnostics::diagnostics;
use crate::error::Result;
use crate::level::Level;
use crate::sinks::{ConsoleSink, LineSink};
use crate::utils::FileTools;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

struct LoggerInner {
    /// 当前配置快照，重新配置时整体替换
    config: RwLock<Arc<LoggerConfig>>,
    console: Box<dyn LineSink>,
    /// 共享日志文件的写锁
    file_lock: Mutex<()>,
}

/// 日志分发器
///
/// 克隆开销很小，克隆体共享同一份配置与锁。
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .field("console", &self.inner.console)
            .finish()
    }
}

impl Logger {
    /// 创建写入标准输出的分发器
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_console(config, ConsoleSink::stdout())
    }

    /// 使用自定义控制台 Sink 创建分发器
    pub fn with_console(config: LoggerConfig, console: impl LineSink + 'static) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                config: RwLock::new(Arc::new(config)),
                console: Box::new(console),
                file_lock: Mutex::new(()),
            }),
        }
    }

    /// 当前生效的配置快照
    pub fn config(&self) -> Arc<LoggerConfig> {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 基于当前配置生成新配置并替换，返回新的生效配置
    ///
    /// 新配置未通过校验时保持原配置不变。
    /// 与之并发的日志调用使用它们读取到的那一份快照。
    pub fn reconfigure<F>(&self, update: F) -> Result<Arc<LoggerConfig>>
    where
        F: FnOnce(LoggerConfig) -> Result<LoggerConfig>,
    {
        let mut current = self
            .inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let next = update(LoggerConfig::clone(&current))?;
        validate_config(&next)?;

        let next = Arc::new(next);
        *current = next.clone();
        // 已安装 PrismLayer 时下面的事件会回到本分发器，须先释放写锁
        drop(current);

        tracing::debug!(
            min_level = %next.min_level,
            log_file = ?next.log_file,
            root_path = ?next.root_path,
            "logger reconfigured"
        );
        Ok(next)
    }

    /// 设置最低输出级别
    pub fn set_level(&self, level: Level) -> Result<Arc<LoggerConfig>> {
        self.reconfigure(|config| Ok(config.with_min_level(level)))
    }

    /// 设置共享日志文件，相对路径基于项目根目录
    pub fn set_log_file(&self, path: impl AsRef<Path>) -> Result<Arc<LoggerConfig>> {
        self.reconfigure(|config| config.with_log_file(path))
    }

    /// 关闭共享日志文件输出
    pub fn clear_log_file(&self) -> Result<Arc<LoggerConfig>> {
        self.reconfigure(|config| Ok(config.without_log_file()))
    }

    /// 设置项目根目录
    pub fn set_root_path(&self, path: impl Into<PathBuf>) -> Result<Arc<LoggerConfig>> {
        let path = path.into();
        self.reconfigure(|config| Ok(config.with_root_path(path)))
    }

    /// 以调用方源文件所在目录作为项目根目录
    #[track_caller]
    pub fn set_root_path_here(&self) -> Result<Arc<LoggerConfig>> {
        let file = std::panic::Location::caller().file();
        self.set_root_path(source_dir(file)?)
    }

    /// 替换样式表
    pub fn set_style(&self, style: StyleConfig) -> Result<Arc<LoggerConfig>> {
        self.reconfigure(|config| Ok(config.with_style(style)))
    }

    /// 该级别的消息当前是否会输出
    pub fn is_enabled(&self, level: &Level) -> bool {
        *level >= self.config().min_level
    }

    /// 创建绑定固定前缀的日志器
    pub fn prefixed(&self, prefix: impl Into<String>) -> PrefixLogger {
        PrefixLogger::new(self, prefix)
    }

    /// 记录一条消息，调用位置取自调用者
    ///
    /// 低于最低级别时返回 `Ok(None)` 且不产生任何输出；
    /// 否则返回纯文本渲染结果。
    #[track_caller]
    pub fn log(&self, message: &str, level: &Level, prefix: Option<&str>) -> Result<Option<String>> {
        self.log_at(Some(CallSite::caller()), message, level, prefix)
    }

    /// 使用显式给出的调用位置记录一条消息
    pub fn log_at(
        &self,
        call_site: Option<CallSite>,
        message: &str,
        level: &Level,
        prefix: Option<&str>,
    ) -> Result<Option<String>> {
        let config = self.config();

        if *level < config.min_level {
            diagnostics().increment_events_filtered();
            return Ok(None);
        }

        let record = LogRecord::new(message, level, prefix, call_site);
        let rendered = render(&config, &record)?;
        diagnostics().increment_events_logged();

        self.inner
            .console
            .write_line(&rendered.colored)
            .inspect_err(|_| diagnostics().increment_sink_errors())?;

        if let Some(ref log_file) = config.log_file {
            self.append_shared(log_file, &rendered.plain)
                .inspect_err(|_| diagnostics().increment_sink_errors())?;
        }

        Ok(Some(rendered.plain))
    }

    fn append_shared(&self, path: &Path, line: &str) -> Result<()> {
        let _guard = self
            .inner
            .file_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        FileTools::append_line(path, line)?;
        diagnostics().increment_file_writes();
        Ok(())
    }

    #[track_caller]
    pub fn debug(&self, message: &str, prefix: Option<&str>) -> Result<Option<String>> {
        self.log(message, &Level::DEBUG, prefix)
    }

    #[track_caller]
    pub fn info(&self, message: &str, prefix: Option<&str>) -> Result<Option<String>> {
        self.log(message, &Level::INFO, prefix)
    }

    #[track_caller]
    pub fn warning(&self, message: &str, prefix: Option<&str>) -> Result<Option<String>> {
        self.log(message, &Level::WARNING, prefix)
    }

    #[track_caller]
    pub fn error(&self, message: &str, prefix: Option<&str>) -> Result<Option<String>> {
        self.log(message, &Level::ERROR, prefix)
    }

    #[track_caller]
    pub fn fatal(&self, message: &str, prefix: Option<&str>) -> Result<Option<String>> {
        self.log(message, &Level::FATAL, prefix)
    }
}

/// 解析调用位置并生成两种渲染
fn render(config: &LoggerConfig, record: &LogRecord<'_>) -> Result<Rendered> {
    let location = locate(record.call_site.as_ref(), config.root_path())?;
    Ok(Formatter::new(&config.style).render(record, &location))
}
