//! # Reporting Module / 报告模块
//!
//! This module renders a [`MatrixPlan`](crate::core::MatrixPlan) for its three
//! audiences: the CI step summary, the pipeline output file read by later
//! jobs, and the colored console log.
//!
//! 此模块为三类受众渲染 [`MatrixPlan`](crate::core::MatrixPlan)：
//! CI 步骤摘要、后续任务读取的流水线输出文件，以及彩色控制台日志。

pub mod console;
pub mod outputs;
pub mod summary;

// Re-export common reporting functions
pub use console::{print_matrix, print_warnings};
pub use outputs::render_pipeline_outputs;
pub use summary::render_step_summary;
