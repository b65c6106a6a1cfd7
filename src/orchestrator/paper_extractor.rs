//! 单份试卷题目提取 - 编排层
//!
//! 读取文档段落 → 切分题目（切分时已去除选项）

use crate::error::AppResult;
use crate::infrastructure::DocumentReader;
use crate::models::DocumentQuestionSet;
use crate::services::segment;
use crate::utils::truncate_text;
use std::path::Path;
use tracing::debug;

/// 试卷的显示名称（文件名）
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 提取单份试卷的全部题目
///
/// 读取失败时直接返回错误，不产生部分结果
pub fn extract_paper(reader: &dyn DocumentReader, path: &Path) -> AppResult<DocumentQuestionSet> {
    let paragraphs = reader.read_paragraphs(path)?;
    let questions = segment(&paragraphs);
    let name = display_name(path);

    for question in &questions {
        debug!(
            "[{}] 第{}题: {}",
            name,
            question.number,
            truncate_text(&question.body, 40)
        );
    }

    Ok(DocumentQuestionSet::new(name, questions))
}
