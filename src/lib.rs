//! # Repro Matrix Library / Repro Matrix 库
//!
//! This library provides the core functionality for the Repro Matrix tool,
//! which turns a declarative platform map and a list of repro definitions
//! into the job matrix consumed by a CI workflow.
//!
//! 此库为 Repro Matrix 工具提供核心功能，
//! 它将声明式的平台映射和复现用例列表转换为 CI 工作流使用的任务矩阵。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, platform index, matrix resolution and planning
//! - `infra` - File system access and CI-compatible text rendering
//! - `reporting` - Step summary, pipeline outputs and console reports
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、平台索引、矩阵解析和规划
//! - `infra` - 文件系统访问和与 CI 兼容的文本渲染
//! - `reporting` - 步骤摘要、流水线输出和控制台报告
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::models;
pub use crate::core::planner;

/// Selects the best available locale for `requested`.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
///
/// 为 `requested` 选择最合适的可用语言区域。
/// 先尝试完整匹配（如 "zh-CN"），再尝试仅匹配语言代码（如 "en"），最后回退到 "en"。
pub fn select_locale(requested: &str) -> &'static str {
    let available_locales = rust_i18n::available_locales!();

    if let Some(exact) = available_locales.iter().find(|l| **l == requested) {
        return *exact;
    }

    requested
        .split(['-', '_'])
        .next()
        .and_then(|lang_code| available_locales.iter().find(|l| **l == lang_code))
        .copied()
        .unwrap_or("en")
}

/// Initializes the application's internationalization (i18n).
///
/// Uses `language` when given, otherwise the system locale, and returns the
/// locale that was activated.
///
/// 初始化应用程序的国际化（i18n）。
/// 优先使用 `language`，否则使用系统语言区域，并返回实际启用的语言区域。
pub fn init(language: Option<&str>) -> &'static str {
    let requested = language
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());

    let lang = select_locale(&requested);
    rust_i18n::set_locale(lang);
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
