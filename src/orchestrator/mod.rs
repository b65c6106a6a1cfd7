//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_analyzer (处理 Vec<Path>：提取 → 两两比较 → 报告)
//!     ↓
//! paper_extractor (处理单份试卷：读取段落 → 切分题目)
//!     ↓
//! services (能力层：切分 / 去选项 / 相似度 / 比较 / 报告)
//!     ↓
//! infrastructure (基础设施：文档读取、报告保存)
//! ```
//!
//! 本层只做调度和统计，不做具体的文本判断。

pub mod batch_analyzer;
pub mod paper_extractor;

pub use batch_analyzer::{analyze, analyze_with, collect_results, App, RunOutput, MIN_DOCUMENTS};
pub use paper_extractor::{display_name, extract_paper};
