use serde::Serialize;

/// 完全重复的题目对（相似度 == 1.0）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicatePair {
    pub number_in_doc1: u32,
    pub number_in_doc2: u32,
    pub shared_text: String,
}

/// 高度相似的题目对（0.9 < 相似度 < 1.0）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPair {
    pub number_in_doc1: u32,
    pub number_in_doc2: u32,
    pub text1: String,
    pub text2: String,
    pub similarity: f64,
}

/// 两份试卷的比较结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub file1: String,
    pub file2: String,
    pub total_q1: usize,
    pub total_q2: usize,
    pub duplicates: Vec<DuplicatePair>,
    pub similar: Vec<SimilarPair>,
    pub dup_rate: f64,
    pub sim_rate: f64,
}

impl ComparisonResult {
    pub fn dup_count(&self) -> usize {
        self.duplicates.len()
    }

    pub fn sim_count(&self) -> usize {
        self.similar.len()
    }
}

impl std::fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ←→ {} [重复: {}, 相似: {}]",
            self.file1,
            self.file2,
            self.dup_count(),
            self.sim_count()
        )
    }
}
