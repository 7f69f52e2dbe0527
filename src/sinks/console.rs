//! 控制台输出 Sink 实现
//!
//! 将彩色日志行写入标准输出（或任意 `Write`），每行写完立即刷新。

use crate::diagnostics::diagnostics;
use crate::error::Result;
use crate::sinks::traits::LineSink;

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

enum Output {
    /// 进程标准输出，所有实例共用 `StdoutLock`
    Stdout,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// 控制台输出 Sink
///
/// 写入标准输出时持有进程级的 `StdoutLock`，多个分发器同时写终端也不会交错；
/// 自定义目标由实例内部的互斥锁保护。
pub struct ConsoleSink {
    output: Output,
    target: &'static str,
}

impl ConsoleSink {
    /// 创建写入标准输出的 Sink
    pub fn stdout() -> Self {
        Self {
            output: Output::Stdout,
            target: "stdout",
        }
    }

    /// 创建写入自定义目标的 Sink，常用于测试或重定向
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            output: Output::Writer(Mutex::new(Box::new(writer))),
            target: "custom",
        }
    }

    /// 输出目标名称
    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// 行内容与换行符一次写入后刷新
fn write_whole_line(writer: &mut dyn Write, buf: &[u8]) -> io::Result<()> {
    writer.write_all(buf)?;
    writer.flush()
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("target", &self.target)
            .finish()
    }
}

impl LineSink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        match &self.output {
            Output::Stdout => write_whole_line(&mut io::stdout().lock(), buf.as_bytes())?,
            Output::Writer(writer) => {
                // 其他线程在持锁期间 panic 不应让控制台永久失效
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                write_whole_line(&mut **writer, buf.as_bytes())?;
            }
        }

        diagnostics().increment_terminal_writes();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
