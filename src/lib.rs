//! # Exam Dedup
//!
//! 一个用于试卷题目查重的 Rust 库：从 Word 文档中切分题目，两两比较试卷，
//! 标出完全重复与高度相似的题目并生成查重报告。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 文档读取（`.docx` / `.txt`）与报告保存（`.txt` / `.docx` / JSON）
//!
//! ### ② 业务能力层（Services）
//! - `segmenter` - 段落 → 题目（识别 `1.`、`(1)`、`一、` 等编号）
//! - `option_stripper` - 去除 `A.`～`E.` 选项行
//! - `similarity` - 最长匹配块相似度
//! - `comparator` - 试卷两两比较（重复 == 1.0，相似 > 0.9）
//! - `report_formatter` - 文本报告
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/paper_extractor` - 单份试卷：读取 → 切分
//! - `orchestrator/batch_analyzer` - 多份试卷：提取 → 比较 → 报告
//!
//! 全部计算同步完成，不持有任何共享可变状态。

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentReader, FileDocumentReader};
pub use models::{ComparisonResult, DocumentQuestionSet, DuplicatePair, QuestionRecord, SimilarPair};
pub use orchestrator::{analyze, analyze_with, collect_results, App};
