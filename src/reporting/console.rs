//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the composed matrix and its warnings to the console,
//! colored and localized. Nothing printed here is parsed by CI.
//!
//! 此模块将生成的矩阵及其警告以彩色、本地化的形式打印到控制台。此处打印的内容不会被 CI 解析。

use crate::core::index::LabelConflict;
use crate::core::planner::MatrixPlan;
use crate::infra::t;
use colored::*;

/// Prints a table of the composed jobs followed by the total.
///
/// 打印生成的任务表格，随后打印任务总数。
///
/// # Output Format / 输出格式
/// ```text
/// --- Repro Matrix ---
///   - t1                                       | ubuntu-latest        | linux
///   - t1                                       | windows-latest       | windows
/// Total repro jobs: 2
/// ```
pub fn print_matrix(plan: &MatrixPlan, locale: &str) {
    println!("\n{}", t!("matrix_banner", locale = locale).bold());

    if plan.entries.is_empty() {
        println!("{}", t!("no_jobs", locale = locale).yellow());
    }

    for entry in &plan.entries {
        println!(
            "  - {:<40} | {:<20} | {}",
            entry.repro,
            entry.os.cyan(),
            entry.platform.dimmed()
        );
    }

    println!(
        "{}",
        t!("total_jobs", locale = locale, count = plan.count()).green().bold()
    );
}

/// Prints label conflicts, collapsed duplicates, skipped repros and unknown
/// references. Prints nothing when there is nothing to report.
///
/// 打印标签冲突、合并的重复任务、被跳过的复现用例以及未知引用。没有内容时不打印任何东西。
pub fn print_warnings(plan: &MatrixPlan, conflicts: &[LabelConflict], locale: &str) {
    for conflict in conflicts {
        println!(
            "{}",
            t!(
                "label_conflict",
                locale = locale,
                label = conflict.label.as_str(),
                previous = conflict.previous.as_str(),
                current = conflict.current.as_str()
            )
            .yellow()
        );
    }

    if plan.collapsed_duplicates > 0 {
        println!(
            "{}",
            t!(
                "duplicate_entries_collapsed",
                locale = locale,
                count = plan.collapsed_duplicates
            )
            .yellow()
        );
    }

    let diagnostics = &plan.diagnostics;
    if !diagnostics.skipped.is_empty() {
        println!("\n{}", t!("skipped_banner", locale = locale).yellow().bold());
        for skipped in &diagnostics.skipped {
            println!("  - {}", skipped);
        }
    }

    if !diagnostics.unknown_platforms.is_empty() {
        println!("\n{}", t!("unknown_platforms_banner", locale = locale).red());
        for platform in &diagnostics.unknown_platforms {
            println!("  - {}", platform);
        }
    }

    if !diagnostics.unknown_labels.is_empty() {
        println!("\n{}", t!("unknown_labels_banner", locale = locale).red());
        for label in &diagnostics.unknown_labels {
            println!("  - {}", label);
        }
    }
}
