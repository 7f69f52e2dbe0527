//! 定义 PrismLog 日志库的所有配置结构体。
//!
//! 配置是不可变快照：[`Logger`](crate::core::logger::Logger) 持有当前快照，
//! 重新配置时整体替换，而不是原地修改共享状态。

use crate::color::ColorPair;
use crate::error::{PrismLogError, Result};
use crate::level::Level;
use crate::palette;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// --- 辅助函数，用于提供配置项的默认值 ---
fn default_min_level() -> Level {
    Level::DEBUG
}
fn default_time_color() -> ColorPair {
    ColorPair::fg(palette::SLATE_BLUE)
}
fn default_date_color() -> ColorPair {
    ColorPair::fg(palette::SLATE_BLUE)
}
fn default_path_color() -> ColorPair {
    ColorPair::fg(palette::ROYAL_BLUE)
}
fn default_lineno_color() -> ColorPair {
    ColorPair::fg(palette::KHAKI)
}
fn default_separator_color() -> ColorPair {
    ColorPair::fg(palette::GRAY)
}
fn default_prefix_time() -> String {
    " || ".to_string()
}
fn default_time_date() -> String {
    " ~ ".to_string()
}
fn default_date_path() -> String {
    " || ".to_string()
}
fn default_path_lineno() -> String {
    " ".to_string()
}
fn default_lineno_level() -> String {
    " || ".to_string()
}
fn default_level_message() -> String {
    " >>> ".to_string()
}

/// 各字段的颜色。消息本身不着色，级别使用自身颜色。
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FieldColors {
    #[serde(default = "default_time_color")]
    pub time: ColorPair,
    #[serde(default = "default_date_color")]
    pub date: ColorPair,
    #[serde(default = "default_path_color")]
    pub path: ColorPair,
    #[serde(default = "default_lineno_color")]
    pub lineno: ColorPair,
    #[serde(default = "default_separator_color")]
    pub separator: ColorPair,
}

impl Default for FieldColors {
    fn default() -> Self {
        Self {
            time: default_time_color(),
            date: default_date_color(),
            path: default_path_color(),
            lineno: default_lineno_color(),
            separator: default_separator_color(),
        }
    }
}

/// 字段之间的分隔符。字段顺序固定，只有分隔符文本可替换。
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Separators {
    #[serde(default = "default_prefix_time")]
    pub prefix_time: String,
    #[serde(default = "default_time_date")]
    pub time_date: String,
    #[serde(default = "default_date_path")]
    pub date_path: String,
    #[serde(default = "default_path_lineno")]
    pub path_lineno: String,
    #[serde(default = "default_lineno_level")]
    pub lineno_level: String,
    #[serde(default = "default_level_message")]
    pub level_message: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            prefix_time: default_prefix_time(),
            time_date: default_time_date(),
            date_path: default_date_path(),
            path_lineno: default_path_lineno(),
            lineno_level: default_lineno_level(),
            level_message: default_level_message(),
        }
    }
}

impl Separators {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("prefix_time", self.prefix_time.as_str()),
            ("time_date", self.time_date.as_str()),
            ("date_path", self.date_path.as_str()),
            ("path_lineno", self.path_lineno.as_str()),
            ("lineno_level", self.lineno_level.as_str()),
            ("level_message", self.level_message.as_str()),
        ]
        .into_iter()
    }
}

/// 样式表：字段颜色与分隔符。
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default)]
    pub colors: FieldColors,
    #[serde(default)]
    pub separators: Separators,
}

/// PrismLog 的顶层配置。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggerConfig {
    /// 最低输出级别，低于该级别的消息被静默丢弃
    pub min_level: Level,
    /// 共享日志文件，`None` 表示不写文件
    pub log_file: Option<PathBuf>,
    /// 项目根目录，用于显示相对路径
    pub root_path: Option<PathBuf>,
    pub style: StyleConfig,
}

impl LoggerConfig {
    /// 默认配置，并以当前工作目录作为项目根目录
    pub fn detect() -> Result<Self> {
        Ok(Self {
            root_path: Some(detect_root_path()?),
            ..Self::default()
        })
    }

    /// 读取项目根目录，未设置时返回配置错误
    pub fn root_path(&self) -> Result<&Path> {
        self.root_path.as_deref().ok_or_else(|| {
            PrismLogError::config("Root path not set. Call `set_root_path` first")
        })
    }

    /// 将相对路径解析到项目根目录下，绝对路径原样返回
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.root_path()?.join(path))
        }
    }

    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_root_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_path = Some(path.into());
        self
    }

    /// 设置共享日志文件，相对路径基于项目根目录
    pub fn with_log_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.log_file = Some(self.resolve_path(path)?);
        Ok(self)
    }

    pub fn without_log_file(mut self) -> Self {
        self.log_file = None;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }
}

/// 自动探测项目根目录：进程当前工作目录。
pub fn detect_root_path() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        PrismLogError::config(format!("Could not auto-detect root path: {}", e))
    })
}

/// 源文件所在目录，相对路径基于当前工作目录
///
/// 用于把调用方源文件的目录作为项目根目录。
pub fn source_dir(file: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = file.as_ref().parent().unwrap_or_else(|| Path::new(""));
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    Ok(detect_root_path()?.join(dir))
}

/// 配置文件的结构。
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct LoggerConfigFile {
    #[serde(default = "default_min_level")]
    min_level: Level,
    log_file: Option<PathBuf>,
    root_path: Option<PathBuf>,
    #[serde(default)]
    style: StyleConfig,
}

impl LoggerConfigFile {
    fn into_config(self) -> Result<LoggerConfig> {
        let root_path = match self.root_path {
            Some(path) => path,
            None => detect_root_path()?,
        };

        let mut config = LoggerConfig {
            min_level: self.min_level,
            log_file: None,
            root_path: Some(root_path),
            style: self.style,
        };
        if let Some(log_file) = self.log_file {
            config = config.with_log_file(log_file)?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// 用于从 TOML 文件加载 `LoggerConfig` 的辅助函数。
pub fn load_config_from_file(path: &Path) -> Result<LoggerConfig> {
    use std::fs;

    if !path.exists() {
        return Err(PrismLogError::ConfigFileMissing(
            path.to_string_lossy().into_owned(),
        ));
    }

    let config_str = fs::read_to_string(path)?;
    load_config_from_str(&config_str)
}

/// 用于从 TOML 字符串加载 `LoggerConfig` 的辅助函数。
///
/// 未给出 `root_path` 时以当前工作目录为根目录。
pub fn load_config_from_str(config_str: &str) -> Result<LoggerConfig> {
    let file: LoggerConfigFile = toml::from_str(config_str)?;
    file.into_config()
}

/// 验证配置的有效性。
pub fn validate_config(config: &LoggerConfig) -> Result<()> {
    // 分隔符中出现换行会把一条记录拆成多行
    for (name, separator) in config.style.separators.iter() {
        if separator.contains('\n') || separator.contains('\r') {
            return Err(PrismLogError::config(format!(
                "分隔符 {} 不能包含换行符",
                name
            )));
        }
    }

    if let Some(ref log_file) = config.log_file {
        if log_file.is_dir() {
            return Err(PrismLogError::config(format!(
                "日志文件路径是一个目录: {}",
                log_file.display()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use tempfile::TempDir;

    #[test]
    fn test_source_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(source_dir("src/core/logger.rs").unwrap(), cwd.join("src/core"));
        assert_eq!(source_dir("main.rs").unwrap(), cwd);
        assert_eq!(
            source_dir(cwd.join("app").join("main.rs")).unwrap(),
            cwd.join("app")
        );
    }

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, Level::DEBUG);
        assert!(config.log_file.is_none());
        assert!(config.root_path.is_none());
        assert_eq!(config.style, StyleConfig::default());
    }

    #[test]
    fn test_default_separators() {
        let separators = Separators::default();
        assert_eq!(separators.prefix_time, " || ");
        assert_eq!(separators.time_date, " ~ ");
        assert_eq!(separators.date_path, " || ");
        assert_eq!(separators.path_lineno, " ");
        assert_eq!(separators.lineno_level, " || ");
        assert_eq!(separators.level_message, " >>> ");
    }

    #[test]
    fn test_default_field_colors() {
        let colors = FieldColors::default();
        assert_eq!(colors.time, ColorPair::fg(palette::SLATE_BLUE));
        assert_eq!(colors.date, ColorPair::fg(palette::SLATE_BLUE));
        assert_eq!(colors.path, ColorPair::fg(palette::ROYAL_BLUE));
        assert_eq!(colors.lineno, ColorPair::fg(palette::KHAKI));
        assert_eq!(colors.separator, ColorPair::fg(palette::GRAY));
    }

    #[test]
    fn test_root_path_unset_is_config_error() {
        let config = LoggerConfig::default();
        let err = config.root_path().unwrap_err();
        assert!(matches!(err, PrismLogError::ConfigError(_)));

        assert!(config.resolve_path("out.log").is_err());
        assert!(LoggerConfig::default().with_log_file("out.log").is_err());
    }

    #[test]
    fn test_log_file_resolution() {
        let config = LoggerConfig::default()
            .with_root_path("/app")
            .with_log_file("logs/out.log")
            .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/app/logs/out.log")));

        let absolute = LoggerConfig::default().with_log_file("/var/log/app.log").unwrap();
        assert_eq!(absolute.log_file, Some(PathBuf::from("/var/log/app.log")));
    }

    #[test]
    fn test_detect_uses_current_dir() {
        let config = LoggerConfig::detect().unwrap();
        assert_eq!(config.root_path, Some(std::env::current_dir().unwrap()));
    }

    #[test]
    fn test_load_config_from_str_basic() {
        let toml_str = r#"
            min_level = "warning"
            root_path = "/app"
            log_file = "out.log"
        "#;

        let config = load_config_from_str(toml_str).unwrap();
        assert_eq!(config.min_level, Level::WARNING);
        assert_eq!(config.root_path, Some(PathBuf::from("/app")));
        assert_eq!(config.log_file, Some(PathBuf::from("/app/out.log")));
        assert_eq!(config.style, StyleConfig::default());
    }

    #[test]
    fn test_load_config_from_str_with_style() {
        let toml_str = r#"
            root_path = "/app"

            [style.colors]
            time = { fg = [1, 2, 3] }
            path = { fg = "gold", bg = "navy" }

            [style.separators]
            level_message = ": "
        "#;

        let config = load_config_from_str(toml_str).unwrap();
        assert_eq!(config.min_level, Level::DEBUG);
        assert_eq!(config.style.colors.time, ColorPair::fg(Color::rgb(1, 2, 3)));
        assert_eq!(
            config.style.colors.path,
            ColorPair::fg_on(palette::GOLD, palette::NAVY)
        );
        assert_eq!(config.style.colors.date, default_date_color());
        assert_eq!(config.style.separators.level_message, ": ");
        assert_eq!(config.style.separators.time_date, " ~ ");
    }

    #[test]
    fn test_load_config_without_root_detects_it() {
        let config = load_config_from_str("min_level = \"INFO\"").unwrap();
        assert_eq!(config.root_path, Some(std::env::current_dir().unwrap()));
    }

    #[test]
    fn test_load_config_rejects_bad_values() {
        assert!(matches!(
            load_config_from_str("min_level = \"LOUD\""),
            Err(PrismLogError::TomlError { .. })
        ));
        assert!(load_config_from_str("unknown_key = 1").is_err());
        assert!(load_config_from_str("[style.colors]\ntime = { fg = [0, 0, 256] }").is_err());
    }

    #[test]
    fn test_validate_rejects_newline_separator() {
        let mut config = LoggerConfig::default();
        config.style.separators.time_date = "\n".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("time_date"));
    }

    #[test]
    fn test_validate_rejects_directory_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggerConfig {
            log_file: Some(temp_dir.path().to_path_buf()),
            ..LoggerConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prism_log.toml");
        std::fs::write(
            &path,
            format!(
                "min_level = \"ERROR\"\nroot_path = {:?}\nlog_file = \"app.log\"\n",
                temp_dir.path().to_string_lossy()
            ),
        )
        .unwrap();

        let config = load_config_from_file(&path).unwrap();
        assert_eq!(config.min_level, Level::ERROR);
        assert_eq!(config.log_file, Some(temp_dir.path().join("app.log")));

        let missing = load_config_from_file(&temp_dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(PrismLogError::ConfigFileMissing(_))));
    }
}
