//! 题目切分 - 业务能力层
//!
//! 将文档段落序列切分为带编号的题目记录，支持的编号格式：
//! - `1.` / `1．` / `1、`
//! - `(1)` / `（1）`
//! - `一、` / `一．` / `一.`（一至十）

use crate::models::QuestionRecord;
use crate::services::option_stripper::strip_options;
use phf::phf_map;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<num>[0-9０-９]+)[.．、]|[(（](?P<paren>[0-9０-９]+)[)）]|(?P<cn>[一二三四五六七八九十])[、．.])",
    )
    .expect("valid heading pattern")
});

static CHINESE_NUMERALS: phf::Map<char, u32> = phf_map! {
    '一' => 1,
    '二' => 2,
    '三' => 3,
    '四' => 4,
    '五' => 5,
    '六' => 6,
    '七' => 7,
    '八' => 8,
    '九' => 9,
    '十' => 10,
};

/// 上一行的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// 上一行是题目标题行
    HeadingJustSeen,
    /// 上一行是题目内容（或尚未遇到任何行）
    Continuation,
}

/// 若该行是题目标题行，返回其编号
pub fn heading_number(line: &str) -> Option<u32> {
    let caps = HEADING.captures(line)?;
    if let Some(m) = caps.name("num").or_else(|| caps.name("paren")) {
        return Some(parse_digits(m.as_str()));
    }
    let numeral = caps.name("cn")?.as_str().chars().next()?;
    Some(CHINESE_NUMERALS.get(&numeral).copied().unwrap_or(0))
}

/// 解析半角/全角数字，溢出时取 `u32::MAX`
fn parse_digits(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| match c {
            '０'..='９' => Some(c as u32 - '０' as u32),
            _ => c.to_digit(10),
        })
        .try_fold(0u32, |acc, d| acc.checked_mul(10)?.checked_add(d))
        .unwrap_or(u32::MAX)
}

/// 正在累积的题目
struct Accumulator {
    number: u32,
    body: String,
    records: Vec<QuestionRecord>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            number: 0,
            body: String::new(),
            records: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        if !self.body.is_empty() {
            self.body.push('\n');
        }
        self.body.push_str(line);
    }

    /// 去除选项后保存当前题目
    fn finish_current(&mut self) {
        if self.body.is_empty() {
            return;
        }
        let body = strip_options(&std::mem::take(&mut self.body));
        if body.trim().is_empty() {
            debug!("第{}题去除选项后内容为空，已忽略", self.number);
            return;
        }
        self.records.push(QuestionRecord::new(self.number, body));
    }
}

/// 将段落序列切分为题目列表
///
/// 空行会被跳过；在第一个标题行之前出现的文字成为编号为 0 的题目。
/// 若没有任何标题行，整份文档作为一道编号为 0 的题目。
pub fn segment<S: AsRef<str>>(paragraphs: &[S]) -> Vec<QuestionRecord> {
    let mut acc = Accumulator::new();
    let mut state = LineState::Continuation;

    for paragraph in paragraphs {
        let text = paragraph.as_ref().trim();
        if text.is_empty() {
            continue;
        }

        state = match (heading_number(text), state) {
            (Some(number), _) => {
                acc.finish_current();
                acc.number = number;
                acc.body = text.to_string();
                LineState::HeadingJustSeen
            }
            // 题目内容或选项
            (None, LineState::HeadingJustSeen) => {
                acc.push_line(text);
                LineState::Continuation
            }
            // 没有编号的内容（如大题中的小题），同样并入当前题目
            (None, LineState::Continuation) => {
                acc.push_line(text);
                LineState::Continuation
            }
        };
    }
    acc.finish_current();

    debug!("切分得到 {} 道题目", acc.records.len());
    acc.records
}
