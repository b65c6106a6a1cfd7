//! 试卷两两比较
//!
//! 对每一对试卷做全量交叉比较（题目数量通常只有几十道，不做索引优化）

use crate::models::{ComparisonResult, DocumentQuestionSet, DuplicatePair, SimilarPair};
use crate::services::similarity::score;
use tracing::{debug, info};

/// 完全重复的相似度
pub const DUPLICATE_SCORE: f64 = 1.0;
/// 高度相似的相似度下限（不含）
pub const SIMILAR_THRESHOLD: f64 = 0.9;

/// 两两比较所有试卷，按输入顺序输出 C(N, 2) 个结果
pub fn compare(documents: &[DocumentQuestionSet]) -> Vec<ComparisonResult> {
    let mut results = Vec::new();
    for (i, doc1) in documents.iter().enumerate() {
        for doc2 in &documents[i + 1..] {
            results.push(compare_pair(doc1, doc2));
        }
    }
    results
}

/// 比较两份试卷
pub fn compare_pair(doc1: &DocumentQuestionSet, doc2: &DocumentQuestionSet) -> ComparisonResult {
    debug!(
        "比较 {} ({}题) 与 {} ({}题)",
        doc1.name,
        doc1.len(),
        doc2.name,
        doc2.len()
    );

    let mut duplicates = Vec::new();
    let mut similar = Vec::new();

    for q1 in &doc1.questions {
        for q2 in &doc2.questions {
            let similarity = score(&q1.body, &q2.body);
            if similarity == DUPLICATE_SCORE {
                duplicates.push(DuplicatePair {
                    number_in_doc1: q1.number,
                    number_in_doc2: q2.number,
                    shared_text: q1.body.clone(),
                });
            } else if similarity > SIMILAR_THRESHOLD {
                similar.push(SimilarPair {
                    number_in_doc1: q1.number,
                    number_in_doc2: q2.number,
                    text1: q1.body.clone(),
                    text2: q2.body.clone(),
                    similarity,
                });
            }
        }
    }

    let base = doc1.len().min(doc2.len());
    let dup_rate = rate(duplicates.len(), base);
    let sim_rate = rate(duplicates.len() + similar.len(), base);

    let result = ComparisonResult {
        file1: doc1.name.clone(),
        file2: doc2.name.clone(),
        total_q1: doc1.len(),
        total_q2: doc2.len(),
        duplicates,
        similar,
        dup_rate,
        sim_rate,
    };
    info!("✓ {}", result);
    result
}

/// 计数 / 基数，基数为 0 时为 0；重复题目可能使计数超过基数，结果截断到 1
fn rate(count: usize, base: usize) -> f64 {
    if base == 0 {
        return 0.0;
    }
    (count as f64 / base as f64).min(1.0)
}
