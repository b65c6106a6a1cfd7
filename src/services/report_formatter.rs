//! 查重报告生成
//!
//! 将比较结果渲染为文本报告：先输出汇总统计，再逐组列出重复与相似题目。

use crate::models::ComparisonResult;
use crate::utils::logging::truncate_text;
use std::fmt::Write;

/// 重复题目内容的最大显示长度
const DUPLICATE_PREVIEW_CHARS: usize = 120;
/// 相似题目内容的最大显示长度
const SIMILAR_PREVIEW_CHARS: usize = 60;

/// 百分比，保留两位小数
fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// 生成查重报告
pub fn format_report(results: &[ComparisonResult]) -> String {
    let mut report = String::new();
    // 写入 String 不会失败
    render(&mut report, results).ok();
    report
}

fn render(out: &mut String, results: &[ComparisonResult]) -> std::fmt::Result {
    let banner = "=".repeat(80);
    writeln!(out, "{}", banner)?;
    writeln!(out, "试卷题目查重报告")?;
    writeln!(out, "{}\n", banner)?;

    // 汇总统计
    let total_dup: usize = results.iter().map(ComparisonResult::dup_count).sum();
    let total_sim: usize = results.iter().map(ComparisonResult::sim_count).sum();

    writeln!(out, "【汇总统计】")?;
    writeln!(out, "比较试卷对数: {}", results.len())?;
    writeln!(out, "完全重复题目总数: {}", total_dup)?;
    writeln!(out, "高度相似题目总数: {}\n", total_sim)?;

    // 详细比较结果
    for (i, result) in results.iter().enumerate() {
        write_group(out, i + 1, result)?;
        writeln!(out, "\n{}\n", banner)?;
    }

    Ok(())
}

fn write_group(out: &mut String, index: usize, r: &ComparisonResult) -> std::fmt::Result {
    writeln!(out, "【比较组 {}】", index)?;
    writeln!(out, "对比文件1: {} (共{}题)", r.file1, r.total_q1)?;
    writeln!(out, "对比文件2: {} (共{}题)", r.file2, r.total_q2)?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(
        out,
        "完全重复题目数量: {} (重复率: {})",
        r.dup_count(),
        percent(r.dup_rate)
    )?;
    writeln!(
        out,
        "高度相似题目数量: {} (相似率: {})",
        r.sim_count(),
        percent(r.sim_rate)
    )?;

    if !r.duplicates.is_empty() {
        writeln!(out, "\n◆ 完全重复题目:")?;
        for dup in &r.duplicates {
            writeln!(
                out,
                "├─ {} 第{}题 ←→ {} 第{}题",
                r.file1, dup.number_in_doc1, r.file2, dup.number_in_doc2
            )?;
            writeln!(
                out,
                "│  题目内容: {}",
                truncate_text(&dup.shared_text, DUPLICATE_PREVIEW_CHARS)
            )?;
        }
    }

    if !r.similar.is_empty() {
        writeln!(out, "\n◆ 高度相似题目(相似度>90%):")?;
        for sim in &r.similar {
            writeln!(
                out,
                "├─ {} 第{}题 ←→ {} 第{}题 (相似度: {})",
                r.file1,
                sim.number_in_doc1,
                r.file2,
                sim.number_in_doc2,
                percent(sim.similarity)
            )?;
            writeln!(
                out,
                "│  {}题目: {}",
                r.file1,
                truncate_text(&sim.text1, SIMILAR_PREVIEW_CHARS)
            )?;
            writeln!(
                out,
                "│  {}题目: {}",
                r.file2,
                truncate_text(&sim.text2, SIMILAR_PREVIEW_CHARS)
            )?;
        }
    }

    Ok(())
}
