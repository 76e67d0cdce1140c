//! # Input Documents Module / 输入文档模块
//!
//! Parses the two JSON documents the composer consumes and normalizes them
//! into typed values:
//!
//! - the platform map, `{"<platform>": ["<label>", ...], ...}`
//! - the repro definitions, `{"repros": [{...}, ...]}`
//!
//! Shape errors are fatal. Leniency inside a repro (single strings instead of
//! lists, non-string items, missing names) is handled by
//! [`ReproSpec::from_object`].
//!
//! 解析生成器使用的两个 JSON 文档并将其规范化为类型化的值。
//! 结构错误是致命的；复现用例内部的宽松处理由 [`ReproSpec::from_object`] 负责。

use crate::core::models::{is_falsy, json_type_name, ReproSpec};
use crate::infra::{fs::read_document, t};
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// The platform map in document order.
/// 按文档顺序排列的平台映射。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformMap {
    pub platforms: Vec<(String, Vec<String>)>,
}

impl PlatformMap {
    pub fn label_count(&self) -> usize {
        self.platforms.iter().map(|(_, labels)| labels.len()).sum()
    }
}

/// Parses a platform map document.
///
/// The top level must be an object and every value an array of strings.
///
/// 解析平台映射文档。顶层必须是对象，每个值必须是字符串数组。
pub fn parse_platform_map(text: &str) -> Result<PlatformMap> {
    let object: Map<String, Value> =
        serde_json::from_str(text).context("Platform map must be a JSON object")?;

    let platforms = object
        .into_iter()
        .map(|(platform, labels)| {
            let labels: Vec<String> = serde_json::from_value(labels).with_context(|| {
                format!("Platform '{}' must map to an array of label strings", platform)
            })?;
            Ok((platform, labels))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PlatformMap { platforms })
}

/// Parses a repro definitions document into normalized repros.
///
/// A missing or falsy `repros` key (`null`, `false`, `0`, `""`, `{}`) means
/// no repros. Entries without a name or id are dropped.
///
/// 将复现用例定义文档解析为规范化的复现用例。
/// 缺失或为假值的 `repros` 键表示没有复现用例；没有名称或 id 的条目会被丢弃。
pub fn parse_repros(text: &str) -> Result<Vec<ReproSpec>> {
    let mut object: Map<String, Value> =
        serde_json::from_str(text).context("Repro definitions must be a JSON object")?;

    let items = match object.remove("repros") {
        None => return Ok(Vec::new()),
        Some(value) if is_falsy(&value) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => bail!(
            "`repros` must be an array, found {}",
            json_type_name(&other)
        ),
    };

    let mut repros = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let Value::Object(entry) = item else {
            bail!(
                "Repro #{} must be an object, found {}",
                position,
                json_type_name(item)
            );
        };
        let normalized = ReproSpec::from_object(entry)
            .with_context(|| format!("Invalid repro #{}", position))?;
        repros.extend(normalized);
    }

    Ok(repros)
}

/// Reads and parses the platform map at `path`.
pub fn load_platform_map(path: &Path) -> Result<PlatformMap> {
    let text = read_document(path)
        .with_context(|| t!("platform_map_read_failed", path = path.display()))?;
    parse_platform_map(&text)
        .with_context(|| t!("platform_map_parse_failed", path = path.display()))
}

/// Reads and parses the repro definitions at `path`.
pub fn load_repros(path: &Path) -> Result<Vec<ReproSpec>> {
    let text =
        read_document(path).with_context(|| t!("repros_read_failed", path = path.display()))?;
    parse_repros(&text).with_context(|| t!("repros_parse_failed", path = path.display()))
}
