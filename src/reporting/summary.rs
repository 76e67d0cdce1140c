//! # Step Summary Module / 步骤摘要模块
//!
//! Builds the plain-text summary appended to the CI step summary. The text is
//! never localized; workflows and reviewers rely on its exact wording.
//!
//! 构建追加到 CI 步骤摘要的纯文本摘要。该文本从不本地化，工作流和审阅者依赖其确切措辞。

use crate::core::planner::MatrixPlan;

/// Renders the step summary for `plan`.
///
/// The job total always comes first. The skipped, unknown-platform and
/// unknown-label sections follow only when non-empty, each preceded by a
/// blank line. The text ends with a newline.
///
/// 为 `plan` 渲染步骤摘要。
/// 任务总数总是最先出现；跳过、未知平台和未知标签部分仅在非空时出现，
/// 每部分前有一个空行。文本以换行符结尾。
///
/// # Output Format / 输出格式
/// ```text
/// Total repro jobs: 3
///
/// Skipped repros:
/// - t4 (supports=['bsd']; unknown platforms=['bsd'])
///
/// Unknown platforms encountered:
/// - bsd
/// ```
pub fn render_step_summary(plan: &MatrixPlan) -> String {
    let diagnostics = &plan.diagnostics;
    let mut lines = vec![format!("Total repro jobs: {}", plan.count())];

    let skipped = diagnostics.skipped_lines();
    push_section(&mut lines, "Skipped repros:", skipped.iter().map(String::as_str));
    push_section(
        &mut lines,
        "Unknown platforms encountered:",
        diagnostics.unknown_platforms.iter().map(String::as_str),
    );
    push_section(
        &mut lines,
        "Unknown labels encountered:",
        diagnostics.unknown_labels.iter().map(String::as_str),
    );

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn push_section<'a>(lines: &mut Vec<String>, title: &str, items: impl Iterator<Item = &'a str>) {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    lines.extend(items.map(|item| format!("- {}", item)));
}
