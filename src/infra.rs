//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Repro Matrix,
//! including file system operations, CI-compatible text rendering and i18n support.
//!
//! 此模块为 Repro Matrix 提供基础设施服务，
//! 包括文件系统操作、与 CI 兼容的文本渲染和国际化支持。

pub mod format;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
