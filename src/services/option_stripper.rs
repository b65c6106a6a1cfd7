//! 选择题选项去除
//!
//! 处理 `A.` / `A．` / `A、` 等格式的选项行

use regex::Regex;
use std::sync::LazyLock;

static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-E][.．、]\s*.+$").expect("valid option pattern"));

/// 判断一行（去除首尾空白后）是否为选项行
pub fn is_option_line(line: &str) -> bool {
    OPTION_LINE.is_match(line.trim())
}

/// 去除题目中的选项行，其余行按原顺序以换行符拼接
pub fn strip_options(body: &str) -> String {
    body.split('\n')
        .filter(|line| !is_option_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
