//! # Matrix Resolver Module / 矩阵解析模块
//!
//! Computes, for a single repro, the runner labels it should run on.
//!
//! Starting from the platforms in `supports`, the candidate set is narrowed
//! and widened in a fixed order:
//!
//! 1. `supports` (empty or `any` → every label)
//! 2. `includePlatforms` → intersect
//! 3. `includeLabels` → intersect with the known labels; none known → empty
//! 4. `excludePlatforms` → subtract
//! 5. `excludeLabels` → subtract the known labels
//! 6. intersect with every valid label
//!
//! Unknown platforms and labels are recorded both for the repro's skip reason
//! and in the run-wide [`ResolverContext`].
//!
//! 为单个复现用例计算它应运行的运行器标签。
//! 候选集合从 `supports` 中的平台开始，按固定顺序收窄或扩展。
//! 未知的平台和标签既记录在该用例的跳过原因中，也记录在整个运行的 [`ResolverContext`] 中。

use crate::core::index::PlatformIndex;
use crate::core::models::{Diagnostics, MatrixEntry, ReproSpec, SkipReason, SkippedRepro};
use std::collections::BTreeSet;

/// The outcome of resolving one repro.
/// 解析单个复现用例的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// At least one label survived; one entry per label, sorted by label.
    /// 至少有一个标签保留；每个标签一个条目，按标签排序。
    Scheduled(Vec<MatrixEntry>),
    /// No label survived.
    /// 没有任何标签保留。
    Skipped(SkippedRepro),
}

/// Accumulators for one composition run.
///
/// Built fresh per run and passed explicitly, so independent runs never share
/// state.
///
/// 一次生成运行的累加器。每次运行重新创建并显式传递，因此独立的运行之间从不共享状态。
#[derive(Debug, Default)]
pub struct ResolverContext {
    pub entries: Vec<MatrixEntry>,
    pub diagnostics: Diagnostics,
}

impl ResolverContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a resolution into the matrix or the skipped list.
    /// 将解析结果归档到矩阵或跳过列表中。
    pub fn record(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Scheduled(entries) => self.entries.extend(entries),
            Resolution::Skipped(skipped) => self.diagnostics.skipped.push(skipped),
        }
    }
}

/// Unknown references seen while resolving a single repro.
#[derive(Debug, Default)]
struct CaseUnknowns {
    platforms: BTreeSet<String>,
    labels: BTreeSet<String>,
}

/// Resolves repros against a [`PlatformIndex`].
///
/// 基于 [`PlatformIndex`] 解析复现用例。
#[derive(Debug, Clone, Copy)]
pub struct MatrixResolver<'a> {
    index: &'a PlatformIndex,
}

impl<'a> MatrixResolver<'a> {
    pub fn new(index: &'a PlatformIndex) -> Self {
        Self { index }
    }

    /// Resolves one repro, recording unknown platforms and labels in `ctx`.
    ///
    /// The resolution is returned rather than filed so callers can inspect it;
    /// pass it to [`ResolverContext::record`] to add it to the run.
    ///
    /// 解析单个复现用例，并将未知的平台和标签记录到 `ctx` 中。
    /// 结果会被返回而不是直接归档；调用 [`ResolverContext::record`] 将其加入本次运行。
    pub fn resolve(&self, repro: &ReproSpec, ctx: &mut ResolverContext) -> Resolution {
        let valid_labels = self.index.all_labels();
        let mut unknowns = CaseUnknowns::default();
        let os = &repro.os;

        let mut candidates = if repro.supports_any() {
            valid_labels.clone()
        } else {
            self.collect_labels(&repro.supports, &mut unknowns, ctx)
        };

        if !os.include_platforms.is_empty() {
            let included = self.collect_labels(&os.include_platforms, &mut unknowns, ctx);
            candidates.retain(|label| included.contains(label));
        }

        if !os.include_labels.is_empty() {
            // An include list with no known label empties the candidates.
            let known = self.partition_labels(&os.include_labels, &mut unknowns, ctx);
            candidates.retain(|label| known.contains(label.as_str()));
        }

        if !os.exclude_platforms.is_empty() {
            let excluded = self.collect_labels(&os.exclude_platforms, &mut unknowns, ctx);
            candidates.retain(|label| !excluded.contains(label));
        }

        if !os.exclude_labels.is_empty() {
            let known = self.partition_labels(&os.exclude_labels, &mut unknowns, ctx);
            candidates.retain(|label| !known.contains(label.as_str()));
        }

        candidates.retain(|label| valid_labels.contains(label));

        if candidates.is_empty() {
            return Resolution::Skipped(SkippedRepro {
                name: repro.name.clone(),
                reason: SkipReason {
                    supports: repro.supports.clone(),
                    os_constraints_applied: os.applied,
                    unknown_platforms: unknowns.platforms,
                    unknown_labels: unknowns.labels,
                },
            });
        }

        let entries = candidates
            .into_iter()
            .filter_map(|label| {
                let platform = self.index.platform_of(&label)?.to_string();
                Some(MatrixEntry {
                    os: label,
                    repro: repro.name.clone(),
                    platform,
                })
            })
            .collect();

        Resolution::Scheduled(entries)
    }

    /// Unions the labels of `platforms`, recording the unknown ones.
    fn collect_labels(
        &self,
        platforms: &BTreeSet<String>,
        unknowns: &mut CaseUnknowns,
        ctx: &mut ResolverContext,
    ) -> BTreeSet<String> {
        let mut labels = BTreeSet::new();
        for platform in platforms {
            match self.index.labels_for(platform) {
                Some(declared) => labels.extend(declared.iter().cloned()),
                None => {
                    unknowns.platforms.insert(platform.clone());
                    ctx.diagnostics.unknown_platforms.insert(platform.clone());
                }
            }
        }
        labels
    }

    /// Returns the known subset of `labels`, recording the unknown ones.
    fn partition_labels<'l>(
        &self,
        labels: &'l BTreeSet<String>,
        unknowns: &mut CaseUnknowns,
        ctx: &mut ResolverContext,
    ) -> BTreeSet<&'l str> {
        let mut known = BTreeSet::new();
        for label in labels {
            if self.index.is_known_label(label) {
                known.insert(label.as_str());
            } else {
                unknowns.labels.insert(label.clone());
                ctx.diagnostics.unknown_labels.insert(label.clone());
            }
        }
        known
    }
}
