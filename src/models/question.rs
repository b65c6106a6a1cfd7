use serde::{Deserialize, Serialize};

/// 单道题目记录
///
/// `number` 为题目在原试卷中的编号（无编号时为 0），同一试卷内可重复。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub number: u32,
    pub body: String,
}

impl QuestionRecord {
    pub fn new(number: u32, body: impl Into<String>) -> Self {
        Self {
            number,
            body: body.into(),
        }
    }
}

/// 一份试卷提取出的全部题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentQuestionSet {
    /// 显示名称（文件名）
    pub name: String,
    pub questions: Vec<QuestionRecord>,
}

impl DocumentQuestionSet {
    pub fn new(name: impl Into<String>, questions: Vec<QuestionRecord>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    /// 题目总数
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
