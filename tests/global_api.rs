//! 全局分发器与宏测试
//!
//! 全局状态在同一进程内共享，所有断言放在同一个测试中顺序执行。

use prism_log::{Level, PrismLayer};
use std::fs;
use tempfile::TempDir;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn test_global_logger_and_macros() {
    let root = TempDir::new().unwrap();

    prism_log::set_root_path(root.path()).unwrap();
    let config = prism_log::set_log_file("global.log").unwrap();
    assert_eq!(config.log_file, Some(root.path().join("global.log")));
    prism_log::set_level(Level::INFO).unwrap();

    assert_eq!(prism_log::debug("hidden", None).unwrap(), None);
    let plain = prism_log::info("visible", Some("[app]")).unwrap().unwrap();
    assert!(plain.starts_with("[app] || "));
    assert!(plain.ends_with("INFO >>> visible"));

    assert_eq!(prism_log::debug!("hidden {}", 1).unwrap(), None);
    let plain = prism_log::warning!("disk at {}%", 93).unwrap().unwrap();
    assert!(plain.ends_with("WARNING >>> disk at 93%"));
    assert!(prism_log::error!("e").unwrap().is_some());
    assert!(prism_log::fatal!("f").unwrap().is_some());
    assert!(prism_log::info!("i").unwrap().is_some());

    let worker = prism_log::prefixed("[worker]");
    worker.info("from worker").unwrap();

    // tracing 事件经 PrismLayer 进入同一个全局分发器
    let subscriber = tracing_subscriber::registry().with(PrismLayer::global());
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(job = "sync", "bridged");
        tracing::debug!("dropped");
    });

    let contents = fs::read_to_string(root.path().join("global.log")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[5].starts_with("[worker] || "));
    assert!(lines[6].ends_with("INFO >>> bridged job=sync"));

    let snapshot = prism_log::get_diagnostics();
    assert!(snapshot.events_logged >= 7);
    assert!(snapshot.events_filtered >= 3);
}
