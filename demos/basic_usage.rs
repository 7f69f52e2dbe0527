//! PrismLog 基本用法示例
//!
//! 运行: cargo run --example basic_usage

use prism_log::{palette, ColorPair, Level, Logger, LoggerConfig, PrismLayer};
use tracing_subscriber::layer::SubscriberExt;

fn main() -> prism_log::Result<()> {
    println!("=== PrismLog 基本用法示例 ===");

    // 1. 全局分发器：根目录默认为当前工作目录
    prism_log::debug("Debug message", None)?;
    prism_log::info("Application started", None)?;
    prism_log::warning("Cache is cold", Some("[cache]"))?;
    prism_log::error!("request {} failed with status {}", 17, 503)?;

    // 2. 提高阈值后低级别消息被丢弃
    prism_log::set_level(Level::WARNING)?;
    let skipped = prism_log::info("You will not see this", None)?;
    assert!(skipped.is_none());
    prism_log::set_level(Level::DEBUG)?;

    // 3. 独立分发器 + 彩色前缀 + 专属日志文件
    let scratch = std::env::temp_dir().join("prism_log_demo");
    std::fs::create_dir_all(&scratch)?;
    let logger = Logger::new(LoggerConfig::detect()?.with_log_file(scratch.join("all.log"))?);
    let db = logger
        .prefixed(ColorPair::fg_on(palette::WHITE, palette::NAVY).colorize("db"))
        .with_log_file(scratch.join("db.log"))?;
    db.info("connection pool ready")?;
    db.fatal("replica unreachable")?;

    // 4. 自定义级别：排序只看 rank
    let notice = Level::new("NOTICE", ColorPair::fg(palette::GOLD), 1);
    logger.log("custom level", &notice, None)?;

    // 5. tracing 事件桥接
    let subscriber = tracing_subscriber::registry().with(PrismLayer::new(&logger));
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(retries = 3, "upstream slow");
    });

    println!("日志文件位于 {}", scratch.display());
    println!("{:#?}", prism_log::get_diagnostics());
    Ok(())
}
