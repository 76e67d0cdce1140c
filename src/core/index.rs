//! # Platform Index Module / 平台索引模块
//!
//! Builds the two lookups matrix resolution relies on: platform → labels and
//! label → platform. Platform identifiers are normalized to lowercase; labels
//! are kept verbatim.
//!
//! 构建矩阵解析所依赖的两个查找表：平台 → 标签、标签 → 平台。
//! 平台标识符规范化为小写；标签保持原样。

use std::collections::{BTreeMap, BTreeSet};

/// A label that the platform map declares under more than one platform.
/// The later platform owns the label.
///
/// 平台映射中在多个平台下声明的标签。以后出现的平台为准。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConflict {
    pub label: String,
    /// The platform that previously owned the label / 先前拥有该标签的平台
    pub previous: String,
    /// The platform that owns it now / 当前拥有该标签的平台
    pub current: String,
}

/// Lookup tables derived from the platform map.
///
/// 从平台映射派生的查找表。
#[derive(Debug, Clone, Default)]
pub struct PlatformIndex {
    platform_labels: BTreeMap<String, Vec<String>>,
    label_platform: BTreeMap<String, String>,
    conflicts: Vec<LabelConflict>,
}

impl PlatformIndex {
    /// Builds the index from `(platform, labels)` pairs in document order.
    ///
    /// A platform that normalizes to an already-seen identifier replaces that
    /// platform's label list. Labels keep the last platform they were listed
    /// under.
    ///
    /// 按文档顺序从 `(platform, labels)` 对构建索引。
    /// 规范化后与已出现的标识符相同的平台会替换该平台的标签列表；
    /// 标签归属于最后一次列出它的平台。
    pub fn build<I, P, L>(platforms: I) -> Self
    where
        I: IntoIterator<Item = (P, Vec<L>)>,
        P: AsRef<str>,
        L: Into<String>,
    {
        let mut index = Self::default();

        for (platform, labels) in platforms {
            let normalized = platform.as_ref().to_lowercase();
            let mut owned = Vec::with_capacity(labels.len());

            for label in labels {
                let label = label.into();
                if let Some(previous) = index.label_platform.insert(label.clone(), normalized.clone()) {
                    if previous != normalized {
                        index.conflicts.push(LabelConflict {
                            label: label.clone(),
                            previous,
                            current: normalized.clone(),
                        });
                    }
                }
                owned.push(label);
            }

            index.platform_labels.insert(normalized, owned);
        }

        index
    }

    /// Labels declared for `platform`, in declaration order.
    /// `platform` must already be lowercase.
    pub fn labels_for(&self, platform: &str) -> Option<&[String]> {
        self.platform_labels.get(platform).map(Vec::as_slice)
    }

    /// The platform owning `label`. Label lookup is case-sensitive.
    pub fn platform_of(&self, label: &str) -> Option<&str> {
        self.label_platform.get(label).map(String::as_str)
    }

    pub fn is_known_platform(&self, platform: &str) -> bool {
        self.platform_labels.contains_key(platform)
    }

    pub fn is_known_label(&self, label: &str) -> bool {
        self.label_platform.contains_key(label)
    }

    /// Every valid label, i.e. every label declared under some platform.
    /// 所有有效标签，即在某个平台下声明过的每个标签。
    pub fn all_labels(&self) -> BTreeSet<String> {
        self.label_platform.keys().cloned().collect()
    }

    pub fn platform_count(&self) -> usize {
        self.platform_labels.len()
    }

    pub fn label_count(&self) -> usize {
        self.label_platform.len()
    }

    /// Labels that were re-assigned to a different platform while building.
    /// 构建过程中被重新分配到其他平台的标签。
    pub fn conflicts(&self) -> &[LabelConflict] {
        &self.conflicts
    }
}
