//! 文档读取 - 基础设施层
//!
//! 只负责"给定路径，返回段落序列"，不关心题目切分。
//!
//! 支持的格式：
//! - `.docx`：解析 `word/document.xml`，只取正文中的段落（不含表格、文本框）
//! - `.txt`：每行一个段落

use crate::error::{AppError, AppResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// 文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// 根据扩展名判断格式（不区分大小写）
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }
}

/// 文档读取能力
pub trait DocumentReader {
    /// 读取文档，返回去除首尾空白后的非空段落（按文档顺序）
    fn read_paragraphs(&self, path: &Path) -> AppResult<Vec<String>>;
}

/// 从文件系统读取文档
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentReader;

impl DocumentReader for FileDocumentReader {
    fn read_paragraphs(&self, path: &Path) -> AppResult<Vec<String>> {
        let path_str = path.display().to_string();
        let raw = match DocumentFormat::from_path(path) {
            Some(DocumentFormat::Docx) => read_docx(path)?,
            Some(DocumentFormat::PlainText) => std::fs::read_to_string(path)
                .map_err(|e| AppError::document_read(&path_str, e))?
                .lines()
                .map(str::to_string)
                .collect(),
            None => return Err(AppError::document_read(&path_str, "不支持的文档格式")),
        };

        let paragraphs: Vec<String> = raw
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        debug!("{} 共读取 {} 个段落", path_str, paragraphs.len());
        Ok(paragraphs)
    }
}

/// 读取 DOCX 正文段落
fn read_docx(path: &Path) -> AppResult<Vec<String>> {
    let path_str = path.display().to_string();
    let file = File::open(path).map_err(|e| AppError::document_read(&path_str, e))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| AppError::document_read(&path_str, format!("无法作为 ZIP 打开: {e}")))?;

    let xml = {
        let mut document_xml = archive
            .by_name("word/document.xml")
            .map_err(|e| AppError::document_read(&path_str, format!("缺少 word/document.xml: {e}")))?;
        let mut content = String::new();
        document_xml
            .read_to_string(&mut content)
            .map_err(|e| AppError::document_read(&path_str, e))?;
        content
    };

    parse_body_paragraphs(&xml)
        .map_err(|e| AppError::document_read(&path_str, format!("XML 解析失败: {e}")))
}

/// 段落内的元素是否直接属于该段落的文字 run（允许外层包一层超链接）
fn is_paragraph_run(children: &[Vec<u8>]) -> bool {
    match children {
        [r] => r == b"w:r",
        [h, r] => h == b"w:hyperlink" && r == b"w:r",
        _ => false,
    }
}

/// 遍历 `word/document.xml`，提取 `w:body` 下每个 `w:p` 的文字
///
/// `w:t` 取文字，`w:tab` 转为制表符，`w:br` / `w:cr` 转为换行。
pub fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut paragraphs = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // 当前正文段落：(段落元素之下的栈深度, 已收集文字)
    let mut current: Option<(usize, String)> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                let top_level_paragraph = name == b"w:p"
                    && current.is_none()
                    && stack.last().is_some_and(|parent| parent == b"w:body");
                stack.push(name);
                if top_level_paragraph {
                    current = Some((stack.len(), String::new()));
                }
            }
            Event::Empty(e) => {
                if let Some((depth, text)) = current.as_mut() {
                    if is_paragraph_run(&stack[*depth..]) {
                        match e.name().as_ref() {
                            b"w:tab" => text.push('\t'),
                            b"w:br" | b"w:cr" => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            Event::Text(e) => {
                if let Some((depth, text)) = current.as_mut() {
                    if let Some((last, run)) = stack[*depth..].split_last() {
                        if last == b"w:t" && is_paragraph_run(run) {
                            text.push_str(&e.unescape()?);
                        }
                    }
                }
            }
            Event::End(_) => {
                let depth = stack.len();
                stack.pop();
                if current.as_ref().is_some_and(|(d, _)| *d == depth) {
                    if let Some((_, text)) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
