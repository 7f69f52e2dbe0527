//! 颜色模型
//!
//! 提供 24 位 RGB 颜色与前景/背景颜色组合，并渲染为 ANSI 转义序列：
//! 前景 `\x1b[38;2;R;G;Bm`，背景 `\x1b[48;2;R;G;Bm`，复位 `\x1b[0m`。

use crate::error::{PrismLogError, Result};
use serde::Deserialize;
use std::fmt;

/// ANSI 复位序列
pub const RESET: &str = "\x1b[0m";

/// RGB 颜色，每个通道 0-255
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "ColorSpec")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// 由 8 位通道直接构造颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 由任意整数构造颜色，任一通道超出 0-255 时返回校验错误
    ///
    /// 超出范围的值不会被截断。
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
        })
    }

    /// 前景设置序列
    pub fn fg_escape(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// 背景设置序列
    pub fn bg_escape(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// 以该颜色作为前景色包裹文本，并以复位序列结尾
    pub fn colorize(&self, text: &str) -> String {
        format!("{}{}{}", self.fg_escape(), text, RESET)
    }
}

fn channel(name: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        PrismLogError::validation(format!(
            "color channel {}={} is outside 0-255",
            name, value
        ))
    })
}

impl TryFrom<[i64; 3]> for Color {
    type Error = PrismLogError;

    fn try_from([r, g, b]: [i64; 3]) -> Result<Self> {
        Self::try_new(r, g, b)
    }
}

/// 配置文件中的颜色写法：`[r, g, b]` 数组或调色板名称（如 `"slate_blue"`）
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorSpec {
    Rgb([i64; 3]),
    Name(String),
}

impl TryFrom<ColorSpec> for Color {
    type Error = PrismLogError;

    fn try_from(spec: ColorSpec) -> Result<Self> {
        match spec {
            ColorSpec::Rgb(channels) => Self::try_from(channels),
            ColorSpec::Name(name) => crate::palette::by_name(&name).ok_or_else(|| {
                PrismLogError::validation(format!("unknown color name: {}", name))
            }),
        }
    }
}

impl TryFrom<(i64, i64, i64)> for Color {
    type Error = PrismLogError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self> {
        Self::try_new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// 前景/背景颜色组合，任一方可缺省（透明）
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(deny_unknown_fields)]
pub struct ColorPair {
    #[serde(default)]
    pub fg: Option<Color>,
    #[serde(default)]
    pub bg: Option<Color>,
}

impl ColorPair {
    /// 不带任何颜色的组合，着色时原样返回文本
    pub const NONE: ColorPair = ColorPair { fg: None, bg: None };

    pub const fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        Self { fg, bg }
    }

    /// 仅前景色
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    /// 仅背景色
    pub const fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
        }
    }

    /// 前景色加背景色
    pub const fn fg_on(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }

    /// 着色文本
    ///
    /// 有背景色时文本前后各补一个空格，背景序列在前、前景序列在后，
    /// 最后追加单个复位序列。两者都缺省时原样返回。
    pub fn colorize(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }

        let mut result = String::with_capacity(text.len() + 48);

        if let Some(bg) = self.bg {
            result.push_str(&bg.bg_escape());
        }
        if let Some(fg) = self.fg {
            result.push_str(&fg.fg_escape());
        }

        if self.bg.is_some() {
            result.push(' ');
            result.push_str(text);
            result.push(' ');
        } else {
            result.push_str(text);
        }
        result.push_str(RESET);

        result
    }
}

impl From<Color> for ColorPair {
    fn from(color: Color) -> Self {
        Self::fg(color)
    }
}
