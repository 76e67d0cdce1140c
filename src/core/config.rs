//! # Configuration Module / 配置模块
//!
//! Resolves where the composer reads its documents from and where it writes
//! its results. Every setting can come from a command-line flag or from the
//! environment a CI runner provides.
//!
//! 解析生成器读取文档的位置以及写入结果的位置。
//! 每个设置都可以来自命令行参数，也可以来自 CI 运行器提供的环境变量。

use std::path::{Path, PathBuf};

/// Environment variable naming the checked-out workspace.
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";
/// Environment variable naming the step summary file.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";
/// Environment variable naming the pipeline output file.
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Location of the platform map, relative to the workspace.
/// 平台映射相对于工作区的位置。
pub const PLATFORM_MAP_PATH: &str = ".github/os-matrix.json";
/// Location of the repro definitions, relative to the workspace.
/// 复现用例定义相对于工作区的位置。
pub const REPROS_PATH: &str = "repros.json";

/// Fully resolved settings for one composition run.
///
/// 一次生成运行的完整设置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeConfig {
    /// The workspace root / 工作区根目录
    pub workspace: PathBuf,
    /// The platform map document / 平台映射文档
    pub platform_map: PathBuf,
    /// The repro definitions document / 复现用例定义文档
    pub repros: PathBuf,
    /// File the step summary is appended to, if any.
    /// 追加步骤摘要的文件（如果有）。
    pub step_summary: Option<PathBuf>,
    /// File the pipeline outputs are appended to. Required at write time.
    /// 追加流水线输出的文件。写入时必须存在。
    pub output: Option<PathBuf>,
    /// Reject labels declared under more than one platform.
    /// 拒绝在多个平台下声明的标签。
    pub strict_labels: bool,
}

impl ComposeConfig {
    /// Creates a configuration rooted at `workspace` with the default
    /// document locations and no output files.
    pub fn for_workspace(workspace: impl Into<PathBuf>) -> Self {
        let workspace = workspace.into();
        Self {
            platform_map: workspace.join(PLATFORM_MAP_PATH),
            repros: workspace.join(REPROS_PATH),
            workspace,
            step_summary: None,
            output: None,
            strict_labels: false,
        }
    }

    /// Overrides the platform map location.
    pub fn with_platform_map(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = non_empty(path) {
            self.platform_map = path;
        }
        self
    }

    /// Overrides the repro definitions location.
    pub fn with_repros(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = non_empty(path) {
            self.repros = path;
        }
        self
    }

    pub fn with_step_summary(mut self, path: Option<PathBuf>) -> Self {
        self.step_summary = non_empty(path);
        self
    }

    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = non_empty(path);
        self
    }

    pub fn with_strict_labels(mut self, strict: bool) -> Self {
        self.strict_labels = strict;
        self
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}

/// Empty paths count as unset, matching how CI runners blank out variables.
fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}
