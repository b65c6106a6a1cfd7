//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 初始化日志系统
///
/// 控制台输出受 `RUST_LOG` 控制（默认 `info`）；指定 `log_file` 时额外写入该文件。
/// 重复初始化时保留已有的全局订阅者。
///
/// # 参数
/// - `verbose`: 是否输出 debug 级别日志
/// - `log_file`: 日志文件路径（可选）
pub fn init(verbose: bool, log_file: Option<&str>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    let file_layer = match log_file {
        Some(path) => {
            init_log_file(path)?;
            let file = OpenOptions::new()
                .append(true)
                .open(path)
                .with_context(|| format!("无法打开日志文件: {}", path))?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(EnvFilter::new(default_level)),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n试卷查重日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .with_context(|| format!("无法写入日志文件: {}", log_file_path))?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `file_count`: 待比较的试卷数量
pub fn log_startup(file_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 试卷题目查重开始");
    info!("📄 待比较试卷: {} 份", file_count);
    info!("📊 比较组数: {}", file_count * file_count.saturating_sub(1) / 2);
    info!("{}", "=".repeat(60));
}

/// 记录单份试卷的题目提取结果
pub fn log_document_loaded(index: usize, total: usize, name: &str, question_count: usize) {
    info!(
        "[{}/{}] ✓ {} 提取到 {} 道题目",
        index, total, name, question_count
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `comparisons`: 比较组数
/// - `duplicates`: 完全重复题目总数
/// - `similar`: 高度相似题目总数
pub fn print_final_stats(comparisons: usize, duplicates: usize, similar: usize) {
    info!("{}", "=".repeat(60));
    info!("📊 查重完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("比较组数: {}", comparisons);
    info!("完全重复: {}", duplicates);
    info!("高度相似: {}", similar);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 超出时保留前 `max_len` 个字符并追加 `...`
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 3), "abc");
        assert_eq!(truncate_text("abcd", 3), "abc...");
        assert_eq!(truncate_text("一二三四", 2), "一二...");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_init_log_file_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let path = path.to_str().unwrap();

        init_log_file(path).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        assert!(content.contains("试卷查重日志"));
    }
}
