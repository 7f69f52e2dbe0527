//! tracing 桥接层
//!
//! 将 `tracing` 事件转交给 [`Logger`] 输出，调用位置取自事件元数据。

use crate::core::event::CallSite;
use crate::core::logger::Logger;
use crate::level::Level;

use std::fmt::Write as _;
use tracing_core::field::{Field, Visit};
use tracing_core::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// 将 tracing 事件转发到 PrismLog 的 Layer
///
/// # 示例
///
/// ```rust
/// use prism_log::{Logger, LoggerConfig, PrismLayer};
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let logger = Logger::new(LoggerConfig::detect().unwrap());
/// let subscriber = tracing_subscriber::registry().with(PrismLayer::new(&logger));
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!(port = 8080, "listening");
/// });
/// ```
#[derive(Debug, Clone)]
pub struct PrismLayer {
    logger: Logger,
}

impl PrismLayer {
    pub fn new(logger: &Logger) -> Self {
        Self {
            logger: logger.clone(),
        }
    }

    /// 使用进程级全局分发器
    pub fn global() -> Self {
        Self::new(crate::global())
    }
}

/// tracing 级别到 PrismLog 级别的映射：TRACE 归入 DEBUG
pub fn map_level(level: &tracing_core::Level) -> Level {
    match *level {
        tracing_core::Level::TRACE | tracing_core::Level::DEBUG => Level::DEBUG,
        tracing_core::Level::INFO => Level::INFO,
        tracing_core::Level::WARN => Level::WARNING,
        tracing_core::Level::ERROR => Level::ERROR,
    }
}

/// 提取 `message` 字段，其余字段以 ` key=value` 追加
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        let mut message = self.message;
        if message.is_empty() {
            return self.fields.trim_start().to_string();
        }
        message.push_str(&self.fields);
        message
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl<S> Layer<S> for PrismLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = map_level(metadata.level());

        if !self.logger.is_enabled(&level) {
            crate::diagnostics::diagnostics().increment_events_filtered();
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let call_site = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Some(CallSite::new(file, line)),
            _ => None,
        };

        // 订阅器内部不能把错误抛给调用方
        if let Err(e) = self
            .logger
            .log_at(call_site, &visitor.finish(), &level, None)
        {
            eprintln!("prism_log: failed to write tracing event: {}", e);
        }
    }
}
