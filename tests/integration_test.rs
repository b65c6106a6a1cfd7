use exam_dedup::infrastructure::{write_report, DocumentReader, FileDocumentReader};
use exam_dedup::{analyze, collect_results, AppError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// 生成一个最小的 docx，每个字符串一个段落
fn create_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let body: String = paragraphs
        .iter()
        .map(|p| {
            format!(
                r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                quick_xml::escape::escape(*p)
            )
        })
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}

fn fixtures() -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let midterm = create_docx(
        dir.path(),
        "期中.docx",
        &[
            "2024学年第一学期期中考试",
            "一、选择题",
            "1. 下列关于光合作用的叙述，正确的是",
            "A. 只在白天进行",
            "B. 产生氧气",
            "2. 已知函数f(x)=x²+2x+1，求f(x)的最小值。",
            "（3）简述牛顿第一定律的内容，并举出一个生活中的实例。",
        ],
    );
    let final_exam = create_docx(
        dir.path(),
        "期末.docx",
        &[
            "1、下列关于光合作用的叙述，正确的是",
            "C. 不需要光",
            "D. 消耗二氧化碳",
            "2. 已知函数f(x)=x²+2x+3，求f(x)的最小值。",
            "3. 简述牛顿第一定律的内容，并举出一个生活中的实例。",
        ],
    );
    let unrelated = create_docx(
        dir.path(),
        "英语.docx",
        &["1. Translate the following sentence.", "2. Write an essay."],
    );
    (dir, vec![midterm, final_exam, unrelated])
}

#[test]
fn test_read_docx_paragraphs() {
    let (_dir, paths) = fixtures();
    let paragraphs = FileDocumentReader.read_paragraphs(&paths[2]).unwrap();
    assert_eq!(
        paragraphs,
        vec!["1. Translate the following sentence.", "2. Write an essay."]
    );
}

#[test]
fn test_collect_results_end_to_end() {
    let (_dir, paths) = fixtures();
    let results = collect_results(&FileDocumentReader, &paths).unwrap();
    assert_eq!(results.len(), 3);

    let pair = &results[0];
    assert_eq!((pair.file1.as_str(), pair.file2.as_str()), ("期中.docx", "期末.docx"));
    // 期中：前言、一、1、2、(3) 共 5 题；期末 3 题
    assert_eq!((pair.total_q1, pair.total_q2), (5, 3));
    // 编号不同导致不完全相同，但都高度相似
    assert!(pair.duplicates.is_empty());
    let numbers: Vec<(u32, u32)> = pair
        .similar
        .iter()
        .map(|s| (s.number_in_doc1, s.number_in_doc2))
        .collect();
    assert_eq!(numbers, vec![(1, 1), (2, 2), (3, 3)]);
    assert_eq!(pair.sim_rate, 1.0);

    for other in &results[1..] {
        assert!(other.duplicates.is_empty());
        assert!(other.similar.is_empty());
        assert_eq!(other.dup_rate, 0.0);
    }
}

#[test]
fn test_analyze_report() {
    let (dir, paths) = fixtures();
    let report = analyze(&paths).unwrap();

    assert!(report.contains("比较试卷对数: 3"));
    assert!(report.contains("完全重复题目总数: 0"));
    assert!(report.contains("高度相似题目总数: 3"));
    assert!(report.contains("对比文件1: 期中.docx (共5题)"));
    assert!(report.contains("高度相似题目数量: 3 (相似率: 100.00%)"));
    assert!(report.contains("├─ 期中.docx 第2题 ←→ 期末.docx 第2题 (相似度: "));

    // 报告另存为 docx 后可以再读回
    let saved = dir.path().join("查重报告.docx");
    write_report(&report, &saved).unwrap();
    let paragraphs = FileDocumentReader.read_paragraphs(&saved).unwrap();
    assert_eq!(paragraphs.len(), 1);
    assert!(paragraphs[0].starts_with(&"=".repeat(80)));
}

#[test]
fn test_exact_duplicate_documents() {
    let dir = tempfile::tempdir().unwrap();
    let a = create_docx(dir.path(), "a.docx", &["1. Define gravity.", "A. force", "B. mass"]);
    let b = create_docx(dir.path(), "b.docx", &["1. Define gravity."]);

    let results = collect_results(&FileDocumentReader, &[a, b]).unwrap();
    assert_eq!(results[0].dup_count(), 1);
    assert_eq!(results[0].dup_rate, 1.0);
    assert_eq!(results[0].duplicates[0].shared_text, "1. Define gravity.");
}

#[test]
fn test_errors() {
    let (dir, paths) = fixtures();
    assert!(matches!(
        analyze(&paths[..1]),
        Err(AppError::InsufficientInput { count: 1 })
    ));

    let missing = dir.path().join("missing.docx");
    assert!(matches!(
        analyze(&[paths[0].clone(), missing]),
        Err(AppError::DocumentRead { .. })
    ));
}
