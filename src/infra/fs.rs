//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the small set of file operations the composer needs:
//! reading input documents and appending to the files a CI runner collects.
//!
//! 此模块提供生成器所需的少量文件操作：
//! 读取输入文档，以及向 CI 运行器收集的文件追加内容。

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Reads a whole UTF-8 text document.
///
/// # Arguments
/// * `path` - Path of the document to read
///
/// # Returns
/// The file content, or an error naming the path
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Appends `text` to the file at `path`, creating the file if needed.
/// Existing content is never truncated; CI runners share these files across steps.
///
/// 将 `text` 追加到 `path` 处的文件，必要时创建该文件。
/// 不会截断已有内容；CI 运行器会在多个步骤之间共享这些文件。
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open file for appending: {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to append to file: {}", path.display()))?;
    Ok(())
}
