//! 报告保存 - 基础设施层
//!
//! 只负责把文本写到磁盘：`.docx` 写成只含一个段落的 Word 文档，其余扩展名按纯文本保存。

use crate::error::{AppError, AppResult};
use crate::infrastructure::document_reader::DocumentFormat;
use crate::models::ComparisonResult;
use quick_xml::escape::escape;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// 保存查重报告
///
/// # 参数
/// - `report`: 报告文本
/// - `path`: 保存路径，扩展名为 `.docx`（不区分大小写）时保存为 Word 文档
pub fn write_report(report: &str, path: &Path) -> AppResult<()> {
    let path_str = path.display().to_string();
    match DocumentFormat::from_path(path) {
        Some(DocumentFormat::Docx) => write_docx(report, path),
        _ => std::fs::write(path, report).map_err(|e| AppError::report_write(&path_str, e)),
    }?;
    info!("报告已保存到: {}", path_str);
    Ok(())
}

/// 导出比较结果为 JSON
pub fn write_json(results: &[ComparisonResult], path: &Path) -> AppResult<()> {
    let path_str = path.display().to_string();
    let json =
        serde_json::to_string_pretty(results).map_err(|e| AppError::report_write(&path_str, e))?;
    std::fs::write(path, json).map_err(|e| AppError::report_write(&path_str, e))?;
    info!("比较结果已导出到: {}", path_str);
    Ok(())
}

/// 生成只含一个段落的 `word/document.xml`，换行写为 `w:br`
fn document_xml(text: &str) -> String {
    let run = text
        .split('\n')
        .map(|line| format!(r#"<w:t xml:space="preserve">{}</w:t>"#, escape(line)))
        .collect::<Vec<_>>()
        .join("<w:br/>");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r>{run}</w:r></w:p><w:sectPr/></w:body></w:document>"#
    )
}

fn write_docx(text: &str, path: &Path) -> AppResult<()> {
    let path_str = path.display().to_string();
    let write_err = |e: &dyn std::fmt::Display| AppError::report_write(&path_str, e);

    let file = File::create(path).map_err(|e| write_err(&e))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        ("word/document.xml", document_xml(text)),
    ];
    for (name, content) in parts {
        zip.start_file(name, options).map_err(|e| write_err(&e))?;
        zip.write_all(content.as_bytes()).map_err(|e| write_err(&e))?;
    }
    zip.finish().map_err(|e| write_err(&e))?;
    Ok(())
}
