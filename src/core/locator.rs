//! 调用位置解析
//!
//! 将捕获的 [`CallSite`] 转换为用于显示的 `(路径, "[行号]")`。

use crate::core::event::CallSite;
use crate::error::Result;
use std::path::{Component, Path, PathBuf};

/// 位置未知时的路径
pub const UNKNOWN_PATH: &str = "<unknown>";
/// 位置未知时的行号
pub const UNKNOWN_LINE: &str = "[?]";

/// 解析后的调用位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub line: String,
}

impl Location {
    pub fn unknown() -> Self {
        Self {
            path: UNKNOWN_PATH.to_string(),
            line: UNKNOWN_LINE.to_string(),
        }
    }
}

/// 解析调用位置
///
/// - 没有调用位置时返回 `("<unknown>", "[?]")`
/// - 文件在磁盘上不存在时返回原始文件标识，不做相对化
/// - 否则返回相对于 `root` 的路径（以 `/` 连接）；位于根目录之外时返回绝对路径
///
/// `root` 为未设置的项目根目录时，错误原样向上传递。
pub fn locate(call_site: Option<&CallSite>, root: Result<&Path>) -> Result<Location> {
    let Some(site) = call_site else {
        return Ok(Location::unknown());
    };

    let line = format!("[{}]", site.line);
    let file = Path::new(site.file.as_ref());

    if !file.exists() {
        return Ok(Location {
            path: site.file.to_string(),
            line,
        });
    }

    let root = root?;
    let absolute = absolutize(file);
    let path = match relative_to(&absolute, &absolutize(root)) {
        Some(relative) => relative,
        None => absolute.display().to_string(),
    };

    Ok(Location { path, line })
}

/// 转为绝对路径，能规范化时使用规范化结果
fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// 以 `/` 连接的相对路径，`path` 不在 `root` 之下时返回 `None`
fn relative_to(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrismLogError;
    use std::fs;
    use tempfile::TempDir;

    fn root_ok(path: &Path) -> Result<&Path> {
        Ok(path)
    }

    #[test]
    fn test_unknown_call_site() {
        let location = locate(None, root_ok(Path::new("/"))).unwrap();
        assert_eq!(location, Location::unknown());
        assert_eq!(location.path, "<unknown>");
        assert_eq!(location.line, "[?]");
    }

    #[test]
    fn test_missing_file_keeps_raw_identifier() {
        let site = CallSite::new("<stdin>", 3);
        let location = locate(Some(&site), root_ok(Path::new("/app"))).unwrap();
        assert_eq!(location.path, "<stdin>");
        assert_eq!(location.line, "[3]");
    }

    #[test]
    fn test_missing_file_does_not_need_root() {
        let site = CallSite::new("does/not/exist.rs", 7);
        let err = Err(PrismLogError::config("Root path not set"));
        let location = locate(Some(&site), err).unwrap();
        assert_eq!(location.path, "does/not/exist.rs");
    }

    #[test]
    fn test_relative_to_root() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("src").join("bin");
        fs::create_dir_all(&nested).unwrap();
        let file = nested.join("main.rs");
        fs::write(&file, "fn main() {}\n").unwrap();

        let site = CallSite::new(file.to_string_lossy().into_owned(), 10);
        let location = locate(Some(&site), root_ok(root.path())).unwrap();
        assert_eq!(location.path, "src/bin/main.rs");
        assert_eq!(location.line, "[10]");
    }

    #[test]
    fn test_outside_root_falls_back_to_absolute() {
        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let file = elsewhere.path().join("lib.rs");
        fs::write(&file, "").unwrap();

        let site = CallSite::new(file.to_string_lossy().into_owned(), 1);
        let location = locate(Some(&site), root_ok(root.path())).unwrap();
        assert_eq!(
            location.path,
            file.canonicalize().unwrap().display().to_string()
        );
    }

    #[test]
    fn test_unset_root_propagates_for_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("main.rs");
        fs::write(&file, "").unwrap();

        let site = CallSite::new(file.to_string_lossy().into_owned(), 1);
        let err = locate(Some(&site), Err(PrismLogError::config("Root path not set")));
        assert!(matches!(err, Err(PrismLogError::ConfigError(_))));
    }

    #[test]
    fn test_this_source_file_relative_to_manifest_dir() {
        let site = CallSite::caller();
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let location = locate(Some(&site), root_ok(root)).unwrap();
        assert_eq!(location.path, "src/core/locator.rs");
    }
}
