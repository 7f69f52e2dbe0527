//! 日志级别
//!
//! 级别由名称、颜色与序号组成。比较与相等只看序号：
//! 名称不同但序号相同的两个级别视为相等。

use crate::color::ColorPair;
use crate::error::{PrismLogError, Result};
use crate::palette;
use serde::Deserialize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 日志级别
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Level {
    name: Cow<'static, str>,
    color: ColorPair,
    rank: i32,
}

impl Level {
    pub const DEBUG: Level = Level::new_static("DEBUG", ColorPair::fg(palette::FOREST_GREEN), 0);
    pub const INFO: Level = Level::new_static("INFO", ColorPair::fg(palette::CYAN), 1);
    pub const WARNING: Level = Level::new_static("WARNING", ColorPair::fg(palette::ORANGE), 2);
    pub const ERROR: Level = Level::new_static("ERROR", ColorPair::fg(palette::RED), 3);
    pub const FATAL: Level =
        Level::new_static("FATAL", ColorPair::fg_on(palette::WHITE, palette::RED), 4);

    /// 全部内置级别，按序号升序
    pub const BUILTIN: [Level; 5] = [
        Level::DEBUG,
        Level::INFO,
        Level::WARNING,
        Level::ERROR,
        Level::FATAL,
    ];

    /// 创建自定义级别
    pub fn new(name: impl Into<Cow<'static, str>>, color: ColorPair, rank: i32) -> Self {
        Self {
            name: name.into(),
            color,
            rank,
        }
    }

    const fn new_static(name: &'static str, color: ColorPair, rank: i32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            color,
            rank,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> ColorPair {
        self.color
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// 使用级别自身颜色渲染名称
    pub fn colorized(&self) -> String {
        self.color.colorize(&self.name)
    }

    /// 返回颜色替换后的新级别，名称与序号不变
    pub fn with_color(mut self, color: ColorPair) -> Self {
        self.color = color;
        self
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl std::str::FromStr for Level {
    type Err = PrismLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::DEBUG),
            "INFO" => Ok(Level::INFO),
            "WARNING" | "WARN" => Ok(Level::WARNING),
            "ERROR" => Ok(Level::ERROR),
            "FATAL" => Ok(Level::FATAL),
            _ => Err(PrismLogError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = PrismLogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::DEBUG
    }
}
