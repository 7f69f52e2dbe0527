//! 格式化
//!
//! 将一条 [`LogRecord`] 渲染为彩色行（终端）与纯文本行（文件）。
//! 字段顺序固定：
//!
//! ```text
//! [前缀 ||] 时间 ~ 日期 || 路径 [行号] || 级别 >>> 消息
//! ```
//!
//! 只有颜色与分隔符文本可以通过 [`StyleConfig`] 替换。

use crate::config::StyleConfig;
use crate::core::event::LogRecord;
use crate::core::locator::Location;

/// 一条记录的两种渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub colored: String,
    pub plain: String,
}

/// 格式化器
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    style: &'a StyleConfig,
}

impl<'a> Formatter<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// 同时生成彩色与纯文本两种渲染
    pub fn render(&self, record: &LogRecord<'_>, location: &Location) -> Rendered {
        Rendered {
            colored: self.format(record, location),
            plain: self.raw_format(record, location),
        }
    }

    /// 彩色渲染
    ///
    /// 除消息与级别外的每个字段使用样式表中的颜色，级别使用自身颜色；
    /// 前缀视为已渲染内容，原样插入。
    pub fn format(&self, record: &LogRecord<'_>, location: &Location) -> String {
        let colors = &self.style.colors;
        let seps = &self.style.separators;
        let sep = |text: &str| colors.separator.colorize(text);

        let mut line = String::new();

        if let Some(prefix) = record.prefix {
            line.push_str(prefix);
            line.push_str(&sep(&seps.prefix_time));
        }

        line.push_str(&colors.time.colorize(&record.time()));
        line.push_str(&sep(&seps.time_date));
        line.push_str(&colors.date.colorize(&record.date()));
        line.push_str(&sep(&seps.date_path));
        line.push_str(&colors.path.colorize(&location.path));
        line.push_str(&sep(&seps.path_lineno));
        line.push_str(&colors.lineno.colorize(&location.line));
        line.push_str(&sep(&seps.lineno_level));
        line.push_str(&record.level.colorized());
        line.push_str(&sep(&seps.level_message));
        line.push_str(record.message);

        line
    }

    /// 纯文本渲染，不含任何转义序列
    pub fn raw_format(&self, record: &LogRecord<'_>, location: &Location) -> String {
        let seps = &self.style.separators;

        let mut line = String::new();

        if let Some(prefix) = record.prefix {
            line.push_str(prefix);
            line.push_str(&seps.prefix_time);
        }

        line.push_str(&record.time());
        line.push_str(&seps.time_date);
        line.push_str(&record.date());
        line.push_str(&seps.date_path);
        line.push_str(&location.path);
        line.push_str(&seps.path_lineno);
        line.push_str(&location.line);
        line.push_str(&seps.lineno_level);
        line.push_str(record.level.name());
        line.push_str(&seps.level_message);
        line.push_str(record.message);

        line
    }
}
