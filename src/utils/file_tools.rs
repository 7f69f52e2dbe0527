//! 文件工具模块
//!
//! 提供日志文件追加写入相关的实用工具函数。

use crate::error::{PrismLogError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// 文件工具结构体
///
/// 提供各种文件操作的静态方法
pub struct FileTools;

impl FileTools {
    /// 以追加模式打开文件，写入一行后关闭
    ///
    /// 文件不存在时创建，但不会创建父目录：目录缺失时返回 I/O 错误。
    /// 行内容与换行符在一次写入中完成。
    ///
    /// # 参数
    ///
    /// * `file_path` - 文件路径
    /// * `line` - 不含换行符的行内容
    pub fn append_line<P: AsRef<Path>>(file_path: P, line: &str) -> Result<()> {
        let file_path = file_path.as_ref();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .map_err(|e| PrismLogError::IoError {
                source: std::io::Error::new(
                    e.kind(),
                    format!("打开文件失败: {}: {}", file_path.display(), e),
                ),
            })?;

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        file.write_all(buf.as_bytes())
            .map_err(|e| PrismLogError::IoError {
                source: std::io::Error::new(
                    e.kind(),
                    format!("写入文件失败: {}: {}", file_path.display(), e),
                ),
            })?;

        Ok(())
    }
}
