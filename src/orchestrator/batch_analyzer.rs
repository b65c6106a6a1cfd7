//! 批量查重 - 编排层
//!
//! 提取全部试卷 → 两两比较 → 生成报告；`App` 额外负责保存报告与输出统计。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{write_json, write_report, DocumentReader, FileDocumentReader};
use crate::models::{ComparisonResult, DocumentQuestionSet};
use crate::orchestrator::paper_extractor::extract_paper;
use crate::services::{compare, format_report};
use crate::utils::logging::{log_document_loaded, log_startup, print_final_stats};
use crate::utils::truncate_text;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 至少需要比较的试卷数量
pub const MIN_DOCUMENTS: usize = 2;

/// 对给定试卷进行查重，返回报告文本
pub fn analyze<P: AsRef<Path>>(paths: &[P]) -> AppResult<String> {
    analyze_with(&FileDocumentReader, paths)
}

/// 使用指定的文档读取器查重，返回报告文本
pub fn analyze_with<P: AsRef<Path>>(
    reader: &dyn DocumentReader,
    paths: &[P],
) -> AppResult<String> {
    let results = collect_results(reader, paths)?;
    Ok(format_report(&results))
}

/// 提取全部试卷并两两比较
///
/// 任意一份试卷读取失败即终止整个批次
pub fn collect_results<P: AsRef<Path>>(
    reader: &dyn DocumentReader,
    paths: &[P],
) -> AppResult<Vec<ComparisonResult>> {
    if paths.len() < MIN_DOCUMENTS {
        return Err(AppError::InsufficientInput { count: paths.len() });
    }

    let documents = load_documents(reader, paths)?;
    Ok(compare(&documents))
}

/// 按输入顺序提取试卷；文件名重复时后者覆盖前者，但保留前者的位置
fn load_documents<P: AsRef<Path>>(
    reader: &dyn DocumentReader,
    paths: &[P],
) -> AppResult<Vec<DocumentQuestionSet>> {
    let total = paths.len();
    let mut documents: Vec<DocumentQuestionSet> = Vec::with_capacity(total);

    for (index, path) in paths.iter().enumerate() {
        let document = extract_paper(reader, path.as_ref())?;
        log_document_loaded(index + 1, total, &document.name, document.len());

        match documents.iter_mut().find(|d| d.name == document.name) {
            Some(existing) => {
                warn!("⚠️ 文件名重复: {}，使用后加载的内容", document.name);
                *existing = document;
            }
            None => documents.push(document),
        }
    }

    Ok(documents)
}

/// 一次查重的产出
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub results: Vec<ComparisonResult>,
    pub report: String,
}

/// 应用主结构
pub struct App {
    config: Config,
    reader: Box<dyn DocumentReader>,
}

impl App {
    /// 使用文件系统读取器初始化应用
    pub fn new(config: Config) -> Self {
        Self::with_reader(config, Box::new(FileDocumentReader))
    }

    pub fn with_reader(config: Config, reader: Box<dyn DocumentReader>) -> Self {
        Self { config, reader }
    }

    /// 运行查重：生成报告，并按配置保存报告与 JSON 结果
    pub fn run(&self, paths: &[PathBuf]) -> Result<RunOutput> {
        log_startup(paths.len());

        let results = collect_results(self.reader.as_ref(), paths)?;
        if self.config.verbose_logging {
            log_flagged_pairs(&results);
        }
        let report = format_report(&results);

        if let Some(report_file) = &self.config.report_file {
            write_report(&report, Path::new(report_file))
                .with_context(|| format!("无法保存报告: {}", report_file))?;
        }
        if let Some(json_file) = &self.config.json_file {
            write_json(&results, Path::new(json_file))
                .with_context(|| format!("无法导出结果: {}", json_file))?;
        }

        let total_dup = results.iter().map(ComparisonResult::dup_count).sum();
        let total_sim = results.iter().map(ComparisonResult::sim_count).sum();
        print_final_stats(results.len(), total_dup, total_sim);

        Ok(RunOutput { results, report })
    }
}

fn log_flagged_pairs(results: &[ComparisonResult]) {
    for result in results {
        for dup in &result.duplicates {
            info!(
                "[重复] {} 第{}题 ←→ {} 第{}题: {}",
                result.file1,
                dup.number_in_doc1,
                result.file2,
                dup.number_in_doc2,
                truncate_text(&dup.shared_text, 40)
            );
        }
        for sim in &result.similar {
            info!(
                "[相似 {:.2}] {} 第{}题 ←→ {} 第{}题",
                sim.similarity, result.file1, sim.number_in_doc1, result.file2, sim.number_in_doc2
            );
        }
    }
}
