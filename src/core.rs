//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Repro Matrix,
//! including configuration, input documents, the platform index and the
//! matrix resolution and planning logic.
//!
//! 此模块包含 Repro Matrix 的核心功能，
//! 包括配置、输入文档、平台索引以及矩阵解析和规划逻辑。

pub mod config;
pub mod documents;
pub mod index;
pub mod models;
pub mod planner;
pub mod resolver;

// Re-exports
pub use config::ComposeConfig;
pub use index::PlatformIndex;
pub use models::{MatrixEntry, ReproSpec};
pub use planner::{plan_matrix, MatrixPlan};
