//! PrismLog 事件定义
//!
//! 此模块定义了一次日志调用对应的记录结构，以及调用位置的捕获方式。

use crate::level::Level;
use chrono::{DateTime, Local};
use std::borrow::Cow;
use std::panic::Location;

/// 日志调用位置（源文件 + 行号）
///
/// 在公开接口处显式捕获，不依赖运行时栈回溯：
/// 函数入口通过 `#[track_caller]` 调用 [`CallSite::caller`]，
/// 宏通过 `file!()`/`line!()` 构造。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// 捕获调用者位置。沿 `#[track_caller]` 链上溯到第一个未标注的调用点。
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: Cow::Borrowed(location.file()),
            line: location.line(),
        }
    }
}

/// PrismLog 日志记录
///
/// 每次日志调用只构造一次，彩色与纯文本两种渲染共享同一时间与位置。
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    /// 本地时间
    pub timestamp: DateTime<Local>,
    pub level: &'a Level,
    /// 调用位置，未知时为 `None`
    pub call_site: Option<CallSite>,
    pub message: &'a str,
    /// 已渲染的前缀
    pub prefix: Option<&'a str>,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        message: &'a str,
        level: &'a Level,
        prefix: Option<&'a str>,
        call_site: Option<CallSite>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            call_site,
            message,
            prefix,
        }
    }

    /// 替换时间戳
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `HH:MM:SS`
    pub fn time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// `DD Mon YYYY`
    pub fn date(&self) -> String {
        self.timestamp.format("%d %b %Y").to_string()
    }
}
