//! # CI Text Rendering Module / CI 文本渲染模块
//!
//! Workflows downstream of the composer match on the exact text it emits,
//! so every piece of text that leaves the process keeps a fixed layout:
//!
//! - lists inside skip reasons look like `['linux', 'macos']`
//! - JSON uses `", "` and `": "` separators and escapes all non-ASCII text
//!
//! 下游工作流会精确匹配生成器输出的文本，因此所有离开进程的文本都保持固定布局：
//! 跳过原因中的列表形如 `['linux', 'macos']`，
//! JSON 使用 `", "` 和 `": "` 分隔符并转义所有非 ASCII 文本。

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Renders a single string as a quoted literal.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quote. Backslashes, the chosen quote and non-printable characters
/// are escaped as `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
///
/// 将单个字符串渲染为带引号的字面量。
pub fn quote_str(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code < 0x100 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Separators other than the ASCII space, control, format, surrogate,
/// private-use and unassigned characters are not printable.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !matches!(
        get_general_category(ch),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Renders a sequence of strings as a bracketed list literal, e.g. `['a', 'b']`.
/// Items are rendered in the order given; callers pass sorted collections.
///
/// 将字符串序列渲染为方括号列表字面量，例如 `['a', 'b']`。
pub fn quote_list<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let rendered: Vec<String> = items.into_iter().map(quote_str).collect();
    format!("[{}]", rendered.join(", "))
}

/// A `serde_json` formatter writing single-line JSON with `", "` and `": "`
/// separators and `\uXXXX` escapes for everything outside printable ASCII.
///
/// 输出单行 JSON 的 `serde_json` 格式化器，使用 `", "` 和 `": "` 分隔符，
/// 并对可打印 ASCII 以外的字符使用 `\uXXXX` 转义。
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedJsonFormatter;

impl Formatter for SpacedJsonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // Fragments never contain quotes, backslashes or C0 controls; those
        // arrive through `write_char_escape`.
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serializes `value` to a JSON string using [`SpacedJsonFormatter`].
///
/// 使用 [`SpacedJsonFormatter`] 将 `value` 序列化为 JSON 字符串。
pub fn to_spaced_json<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedJsonFormatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON output")?;
    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}
