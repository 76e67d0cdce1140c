//! # Pipeline Outputs Module / 流水线输出模块
//!
//! Renders the `key=value` lines appended to the CI output file:
//!
//! ```text
//! matrix={"include": [{"os": "ubuntu-latest", "repro": "t1", "platform": "linux"}]}
//! count=1
//! skipped=[]
//! ```
//!
//! 渲染追加到 CI 输出文件的 `key=value` 行。

use crate::core::planner::MatrixPlan;
use crate::infra::format::to_spaced_json;
use anyhow::Result;

/// Renders the `matrix`, `count` and `skipped` output lines, each ending
/// with a newline.
///
/// 渲染 `matrix`、`count` 和 `skipped` 输出行，每行以换行符结尾。
pub fn render_pipeline_outputs(plan: &MatrixPlan) -> Result<String> {
    let matrix = to_spaced_json(&plan.matrix())?;
    let skipped = to_spaced_json(&plan.diagnostics.skipped_lines())?;

    Ok(format!(
        "matrix={}\ncount={}\nskipped={}\n",
        matrix,
        plan.count(),
        skipped
    ))
}
