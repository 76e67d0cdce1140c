//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the composer:
//! the normalized repro definitions, the matrix entries produced for them and
//! the diagnostics gathered while resolving.
//!
//! 此模块定义了整个生成器中使用的核心数据结构：
//! 规范化后的复现用例定义、为其生成的矩阵条目以及解析过程中收集的诊断信息。

use crate::infra::format::quote_list;
use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;

/// The `supports` keyword meaning "every known platform".
/// 表示“所有已知平台”的 `supports` 关键字。
pub const ANY_PLATFORM: &str = "any";

/// The reason used when a skipped repro has nothing more specific to report.
/// 被跳过的复现用例没有更具体原因时使用的文本。
pub const NO_MATCHING_RUNNERS: &str = "no matching runners";

/// Platform and label overrides from a repro's `os` object.
///
/// Platform identifiers are stored lowercase; labels are kept verbatim since
/// label matching is case-sensitive.
///
/// 复现用例 `os` 对象中的平台和标签覆盖项。
/// 平台标识符以小写形式存储；标签保持原样，因为标签匹配区分大小写。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsConstraints {
    /// `true` when the `os` object was present and non-empty.
    /// 当 `os` 对象存在且非空时为 `true`。
    pub applied: bool,
    pub include_platforms: BTreeSet<String>,
    pub include_labels: BTreeSet<String>,
    pub exclude_platforms: BTreeSet<String>,
    pub exclude_labels: BTreeSet<String>,
}

impl OsConstraints {
    /// Normalizes the raw `os` value of a repro.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`) mean no
    /// constraints. Any other non-object value is rejected.
    ///
    /// 规范化复现用例的原始 `os` 值。假值（`null`、`false`、`0`、`""`、`[]`、`{}`）
    /// 表示没有约束，其他非对象值将被拒绝。
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        let map = match value {
            None => return Ok(Self::default()),
            Some(v) if is_falsy(v) => return Ok(Self::default()),
            Some(Value::Object(map)) => map,
            Some(other) => bail!(
                "`os` constraints must be an object, found {}",
                json_type_name(other)
            ),
        };

        Ok(Self {
            applied: !map.is_empty(),
            include_platforms: platform_set(map.get("includePlatforms")),
            include_labels: label_set(map.get("includeLabels")),
            exclude_platforms: platform_set(map.get("excludePlatforms")),
            exclude_labels: label_set(map.get("excludeLabels")),
        })
    }
}

/// A repro definition after normalization, ready for matrix resolution.
///
/// 规范化后的复现用例定义，可直接用于矩阵解析。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReproSpec {
    /// Display name, taken from `name` and falling back to `id`.
    /// 显示名称，取自 `name`，缺失时回退到 `id`。
    pub name: String,
    /// Lowercased platform identifiers from `supports`. Empty means every platform.
    /// 来自 `supports` 的小写平台标识符。为空表示所有平台。
    pub supports: BTreeSet<String>,
    pub os: OsConstraints,
}

impl ReproSpec {
    /// Creates a repro that supports every platform and has no overrides.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Normalizes one raw repro object.
    ///
    /// Returns `Ok(None)` for entries with neither a usable `name` nor `id`;
    /// those are dropped without being reported.
    ///
    /// 规范化一个原始复现用例对象。
    /// 对于既没有可用 `name` 也没有 `id` 的条目返回 `Ok(None)`，这些条目会被静默丢弃。
    pub fn from_object(object: &Map<String, Value>) -> Result<Option<Self>> {
        let Some(name) = display_name(object.get("name")).or_else(|| display_name(object.get("id")))
        else {
            return Ok(None);
        };

        let os = OsConstraints::from_value(object.get("os"))?;

        Ok(Some(Self {
            supports: platform_set(object.get("supports")),
            name,
            os,
        }))
    }

    /// Whether `supports` leaves every platform eligible.
    /// `supports` 是否允许所有平台。
    pub fn supports_any(&self) -> bool {
        self.supports.is_empty() || self.supports.contains(ANY_PLATFORM)
    }
}

/// One job of the final matrix: a repro running on a concrete runner label.
/// Field order is the key order of the emitted JSON objects.
///
/// 最终矩阵中的一个任务：在某个具体运行器标签上运行的复现用例。
/// 字段顺序即输出 JSON 对象的键顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixEntry {
    /// The runner label / 运行器标签
    pub os: String,
    /// The repro name / 复现用例名称
    pub repro: String,
    /// The platform owning the label / 标签所属的平台
    pub platform: String,
}

/// The `{"include": [...]}` wrapper a CI matrix expects.
/// CI 矩阵所需的 `{"include": [...]}` 包装结构。
#[derive(Debug, Clone, Serialize)]
pub struct MatrixInclude<'a> {
    pub include: &'a [MatrixEntry],
}

/// Why a repro produced no jobs.
///
/// Renders as the `;`-joined reason text, e.g.
/// `supports=['linux']; os constraints applied`.
///
/// 复现用例未生成任何任务的原因。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipReason {
    pub supports: BTreeSet<String>,
    pub os_constraints_applied: bool,
    pub unknown_platforms: BTreeSet<String>,
    pub unknown_labels: BTreeSet<String>,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = Vec::new();
        if !self.supports.is_empty() {
            segments.push(format!(
                "supports={}",
                quote_list(self.supports.iter().map(String::as_str))
            ));
        }
        if self.os_constraints_applied {
            segments.push("os constraints applied".to_string());
        }
        if !self.unknown_platforms.is_empty() {
            segments.push(format!(
                "unknown platforms={}",
                quote_list(self.unknown_platforms.iter().map(String::as_str))
            ));
        }
        if !self.unknown_labels.is_empty() {
            segments.push(format!(
                "unknown labels={}",
                quote_list(self.unknown_labels.iter().map(String::as_str))
            ));
        }

        if segments.is_empty() {
            f.write_str(NO_MATCHING_RUNNERS)
        } else {
            f.write_str(&segments.join("; "))
        }
    }
}

/// A repro that was left out of the matrix, with its reason.
/// Renders as `name (reason)`.
///
/// 被排除在矩阵之外的复现用例及其原因。渲染为 `name (reason)`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRepro {
    pub name: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedRepro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.reason)
    }
}

/// Diagnostics accumulated over one composition run.
///
/// 一次生成运行中累积的诊断信息。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Skipped repros in input order / 按输入顺序排列的被跳过复现用例
    pub skipped: Vec<SkippedRepro>,
    /// Every unknown platform referenced by any repro / 任意复现用例引用的所有未知平台
    pub unknown_platforms: BTreeSet<String>,
    /// Every unknown label referenced by any repro / 任意复现用例引用的所有未知标签
    pub unknown_labels: BTreeSet<String>,
}

impl Diagnostics {
    /// The skip lines as they appear in the `skipped` output.
    /// 在 `skipped` 输出中出现的跳过说明行。
    pub fn skipped_lines(&self) -> Vec<String> {
        self.skipped.iter().map(ToString::to_string).collect()
    }
}

/// Iterates the string items of a lenient list value.
///
/// `null` yields nothing, a lone string yields itself, an array yields its
/// string elements. Everything else is ignored.
fn string_items(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn platform_set(value: Option<&Value>) -> BTreeSet<String> {
    string_items(value)
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}

fn label_set(value: Option<&Value>) -> BTreeSet<String> {
    string_items(value).into_iter().map(str::to_string).collect()
}

/// Extracts a usable repro name. Empty strings, zero and `false` count as
/// missing; `true` is named `True`.
fn display_name(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        _ => None,
    }
}

/// Whether `value` counts as absent: `null`, `false`, zero, or an empty
/// string, array or object.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
