//! 文件输出 Sink 实现
//!
//! 每次写入都执行一次「打开（追加）→ 写入 → 关闭」，不跨调用持有文件句柄。
//! 每个实例拥有独立的锁，不同路径的文件 Sink 之间互不阻塞。

use crate::diagnostics::diagnostics;
use crate::error::Result;
use crate::sinks::traits::LineSink;
use crate::utils::FileTools;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// 文件输出 Sink
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSink {
    /// 创建写入指定路径的 Sink，不会立即创建文件
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// 获取文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for FileSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        FileTools::append_line(&self.path, line)?;
        diagnostics().increment_file_writes();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_creation_is_lazy() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lazy.log");

        let sink = FileSink::new(&path);
        assert_eq!(sink.path(), path.as_path());
        assert_eq!(sink.name(), "file");
        assert!(!path.exists());
    }

    #[test]
    fn test_file_sink_appends_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.log");
        fs::write(&path, "existing\n").unwrap();

        let sink = FileSink::new(&path);
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\none\ntwo\n");
    }

    #[test]
    fn test_file_sink_does_not_hold_file_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rotated.log");

        let sink = FileSink::new(&path);
        sink.write_line("before").unwrap();

        // 外部移走文件后，下一次写入重新创建
        fs::rename(&path, temp_dir.path().join("moved.log")).unwrap();
        sink.write_line("after").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "after\n");
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileSink::new(temp_dir.path().join("nope").join("out.log"));
        assert!(sink.write_line("x").is_err());
    }

    #[test]
    fn test_file_sink_concurrent_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("concurrent.log");
        let sink = Arc::new(FileSink::new(&path));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        sink.write_line(&format!("{}:{}", t, i)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with('\n'));
        assert_eq!(contents.lines().count(), 800);
    }
}
