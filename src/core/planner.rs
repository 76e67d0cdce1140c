//! # Matrix Planner Module / 矩阵规划模块
//!
//! This module drives the resolver over every repro and assembles the result
//! into a [`MatrixPlan`]: the sorted job list plus the run's diagnostics.
//!
//! 此模块对每个复现用例运行解析器，并将结果组装为 [`MatrixPlan`]：
//! 排好序的任务列表以及本次运行的诊断信息。

use crate::core::index::PlatformIndex;
use crate::core::models::{Diagnostics, MatrixEntry, MatrixInclude, ReproSpec};
use crate::core::resolver::{MatrixResolver, ResolverContext};

/// Represents the complete, deterministic matrix for one run.
/// 表示一次运行的完整、确定性的矩阵。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixPlan {
    /// Jobs sorted by `(repro, os)`, no pair repeated.
    /// 按 `(repro, os)` 排序的任务，没有重复的组合。
    pub entries: Vec<MatrixEntry>,
    pub diagnostics: Diagnostics,
    /// Jobs dropped because a repro name appeared more than once.
    /// 由于复现用例名称重复而被丢弃的任务数量。
    pub collapsed_duplicates: usize,
}

impl MatrixPlan {
    /// Total number of jobs / 任务总数
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The `{"include": [...]}` view of the jobs.
    pub fn matrix(&self) -> MatrixInclude<'_> {
        MatrixInclude {
            include: &self.entries,
        }
    }
}

/// Creates the matrix plan for `repros` against `index`.
///
/// Repros are resolved in input order, so the skipped list follows the input.
/// Entries are then sorted by `(repro, os)`.
///
/// 基于 `index` 为 `repros` 创建矩阵计划。
/// 复现用例按输入顺序解析，因此跳过列表与输入顺序一致；之后条目按 `(repro, os)` 排序。
///
/// # Arguments
/// * `index` - The platform index built from the platform map
/// * `repros` - Normalized repro definitions
///
/// # Returns
/// A `MatrixPlan` with the sorted jobs and the accumulated diagnostics
pub fn plan_matrix(index: &PlatformIndex, repros: &[ReproSpec]) -> MatrixPlan {
    let resolver = MatrixResolver::new(index);
    let mut ctx = ResolverContext::new();

    for repro in repros {
        let resolution = resolver.resolve(repro, &mut ctx);
        ctx.record(resolution);
    }

    let ResolverContext {
        mut entries,
        diagnostics,
    } = ctx;

    entries.sort_by(|a, b| a.repro.cmp(&b.repro).then_with(|| a.os.cmp(&b.os)));
    let before = entries.len();
    entries.dedup_by(|b, a| a.repro == b.repro && a.os == b.os);

    MatrixPlan {
        collapsed_duplicates: before - entries.len(),
        entries,
        diagnostics,
    }
}
