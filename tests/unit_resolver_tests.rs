//! # Resolver Unit Tests / 解析器单元测试
//!
//! This module contains unit tests for matrix resolution and planning,
//! covering the documented scenarios and the ordering and monotonicity
//! guarantees of the resolver.
//!
//! 此模块包含矩阵解析和规划的单元测试，
//! 覆盖文档中的场景以及解析器的排序和单调性保证。

mod common;

use common::{compose, index_for, repros_doc, BASIC_PLATFORM_MAP, WIDE_PLATFORM_MAP};
use repro_matrix::core::models::{MatrixEntry, ReproSpec};
use repro_matrix::core::resolver::{MatrixResolver, Resolution, ResolverContext};

fn entry(os: &str, repro: &str, platform: &str) -> MatrixEntry {
    MatrixEntry {
        os: os.to_string(),
        repro: repro.to_string(),
        platform: platform.to_string(),
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_repro_without_constraints_runs_everywhere() {
        let plan = compose(BASIC_PLATFORM_MAP, &repros_doc(&[r#"{"name": "t1"}"#]));

        assert_eq!(
            plan.entries,
            vec![
                entry("ubuntu-latest", "t1", "linux"),
                entry("windows-latest", "t1", "windows"),
            ]
        );
        assert_eq!(plan.count(), 2);
        assert!(plan.diagnostics.skipped.is_empty());
    }

    #[test]
    fn test_supports_is_case_insensitive() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "t2", "supports": ["LINUX"]}"#]),
        );

        assert_eq!(plan.entries, vec![entry("ubuntu-latest", "t2", "linux")]);
    }

    #[test]
    fn test_excluding_every_label_skips_the_repro() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[
                r#"{"name": "t3", "supports": ["linux"], "os": {"excludeLabels": ["ubuntu-latest"]}}"#,
            ]),
        );

        assert!(plan.entries.is_empty());
        assert_eq!(
            plan.diagnostics.skipped_lines(),
            vec!["t3 (supports=['linux']; os constraints applied)"]
        );
        assert!(plan.diagnostics.unknown_labels.is_empty());
    }

    #[test]
    fn test_unknown_supported_platform_is_reported() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "t4", "supports": ["bsd"]}"#]),
        );

        assert!(plan.entries.is_empty());
        assert_eq!(
            plan.diagnostics.skipped_lines(),
            vec!["t4 (supports=['bsd']; unknown platforms=['bsd'])"]
        );
        assert!(plan.diagnostics.unknown_platforms.contains("bsd"));
    }

    #[test]
    fn test_unknown_include_label_empties_candidates() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"id": "t5", "os": {"includeLabels": ["ghost-runner"]}}"#]),
        );

        assert!(plan.entries.is_empty());
        assert_eq!(
            plan.diagnostics.skipped_lines(),
            vec!["t5 (os constraints applied; unknown labels=['ghost-runner'])"]
        );
        assert!(plan.diagnostics.unknown_labels.contains("ghost-runner"));
    }

    #[test]
    fn test_repro_without_name_or_id_is_dropped_silently() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"supports": ["bsd"], "os": {"includeLabels": ["ghost"]}}"#]),
        );

        assert!(plan.entries.is_empty());
        assert!(plan.diagnostics.skipped.is_empty());
        assert!(plan.diagnostics.unknown_platforms.is_empty());
        assert!(plan.diagnostics.unknown_labels.is_empty());
    }
}

#[cfg(test)]
mod constraint_tests {
    use super::*;

    #[test]
    fn test_include_platforms_narrows_candidates() {
        let plan = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "ip", "os": {"includePlatforms": ["WINDOWS", "macos"]}}"#]),
        );

        assert_eq!(
            plan.entries,
            vec![
                entry("macos-13", "ip", "macos"),
                entry("macos-14", "ip", "macos"),
                entry("windows-latest", "ip", "windows"),
            ]
        );
    }

    #[test]
    fn test_unknown_include_platform_contributes_nothing() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "ip", "os": {"includePlatforms": ["bsd"]}}"#]),
        );

        assert!(plan.entries.is_empty());
        assert_eq!(
            plan.diagnostics.skipped_lines(),
            vec!["ip (os constraints applied; unknown platforms=['bsd'])"]
        );
    }

    #[test]
    fn test_include_labels_keep_only_known_requested_labels() {
        let plan = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[
                r#"{"name": "il", "os": {"includeLabels": ["macos-14", "ghost", "ubuntu-22.04"]}}"#,
            ]),
        );

        assert_eq!(
            plan.entries,
            vec![
                entry("macos-14", "il", "macos"),
                entry("ubuntu-22.04", "il", "linux"),
            ]
        );
        assert!(plan.diagnostics.unknown_labels.contains("ghost"));
        assert!(plan.diagnostics.skipped.is_empty());
    }

    #[test]
    fn test_label_matching_is_case_sensitive() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "cs", "os": {"includeLabels": ["UBUNTU-LATEST"]}}"#]),
        );

        assert!(plan.entries.is_empty());
        assert!(plan.diagnostics.unknown_labels.contains("UBUNTU-LATEST"));
    }

    #[test]
    fn test_exclude_platforms_subtracts_labels() {
        let plan = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "ep", "os": {"excludePlatforms": ["Linux", "MacOS"]}}"#]),
        );

        assert_eq!(plan.entries, vec![entry("windows-latest", "ep", "windows")]);
    }

    #[test]
    fn test_unknown_exclude_label_is_recorded_but_ignored() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "el", "os": {"excludeLabels": ["ghost"]}}"#]),
        );

        assert_eq!(plan.count(), 2);
        assert!(plan.diagnostics.skipped.is_empty());
        assert!(plan.diagnostics.unknown_labels.contains("ghost"));
    }

    #[test]
    fn test_empty_os_object_is_not_reported_as_constraints() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "e", "supports": ["bsd"], "os": {}}"#]),
        );

        assert_eq!(
            plan.diagnostics.skipped_lines(),
            vec!["e (supports=['bsd']; unknown platforms=['bsd'])"]
        );
    }

    #[test]
    fn test_no_matching_runners_reason() {
        let plan = compose(r#"{"linux": []}"#, &repros_doc(&[r#"{"name": "n"}"#]));

        assert!(plan.entries.is_empty());
        assert_eq!(plan.diagnostics.skipped_lines(), vec!["n (no matching runners)"]);
    }

    #[test]
    fn test_supports_any_keeps_reason_segment() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "a", "supports": ["Any"], "os": {"includeLabels": []}, "x": 1}"#]),
        );

        // An empty include list is not a constraint; the repro runs everywhere.
        assert_eq!(plan.count(), 2);

        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "a", "supports": ["Any"], "os": {"excludePlatforms": ["linux", "windows"]}}"#]),
        );
        assert_eq!(
            plan.diagnostics.skipped_lines(),
            vec!["a (supports=['any']; os constraints applied)"]
        );
    }

    #[test]
    fn test_unknowns_accumulate_across_repros_sorted() {
        let plan = compose(
            BASIC_PLATFORM_MAP,
            &repros_doc(&[
                r#"{"name": "r1", "supports": ["zos", "linux"]}"#,
                r#"{"name": "r2", "supports": ["aix"], "os": {"excludeLabels": ["z-label", "a-label"]}}"#,
            ]),
        );

        assert_eq!(plan.entries, vec![entry("ubuntu-latest", "r1", "linux")]);
        let platforms: Vec<_> = plan.diagnostics.unknown_platforms.iter().cloned().collect();
        assert_eq!(platforms, vec!["aix", "zos"]);
        let labels: Vec<_> = plan.diagnostics.unknown_labels.iter().cloned().collect();
        assert_eq!(labels, vec!["a-label", "z-label"]);
        assert_eq!(
            plan.diagnostics.skipped_lines(),
            vec!["r2 (supports=['aix']; os constraints applied; unknown platforms=['aix']; unknown labels=['a-label', 'z-label'])"]
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_absent_supports_yields_full_label_universe() {
        let index = index_for(WIDE_PLATFORM_MAP);
        let resolver = MatrixResolver::new(&index);
        let mut ctx = ResolverContext::new();

        let Resolution::Scheduled(entries) = resolver.resolve(&ReproSpec::named("all"), &mut ctx) else {
            panic!("expected the repro to be scheduled");
        };

        let labels: Vec<_> = entries.iter().map(|e| e.os.clone()).collect();
        let universe: Vec<_> = index.all_labels().into_iter().collect();
        assert_eq!(labels, universe);
    }

    #[test]
    fn test_any_is_equivalent_to_omitting_supports() {
        let with_any = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "x", "supports": ["windows", "ANY"]}"#]),
        );
        let without = compose(WIDE_PLATFORM_MAP, &repros_doc(&[r#"{"name": "x"}"#]));

        assert_eq!(with_any.entries, without.entries);
    }

    #[test]
    fn test_composition_is_idempotent() {
        let doc = repros_doc(&[
            r#"{"name": "b", "supports": ["macos", "linux"]}"#,
            r#"{"name": "a", "os": {"excludeLabels": ["macos-13"]}}"#,
            r#"{"name": "c", "supports": ["bsd"]}"#,
        ]);

        assert_eq!(compose(WIDE_PLATFORM_MAP, &doc), compose(WIDE_PLATFORM_MAP, &doc));
    }

    #[test]
    fn test_unknown_exclude_platform_never_changes_result() {
        let base = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "x", "supports": ["linux", "macos"]}"#]),
        );
        let with_unknown = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "x", "supports": ["linux", "macos"], "os": {"excludePlatforms": ["plan9"]}}"#]),
        );

        assert_eq!(base.entries, with_unknown.entries);
        assert!(with_unknown.diagnostics.unknown_platforms.contains("plan9"));
    }

    #[test]
    fn test_unknown_include_label_never_grows_candidates() {
        let known_only = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "x", "os": {"includeLabels": ["windows-latest"]}}"#]),
        );
        let with_unknown = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[r#"{"name": "x", "os": {"includeLabels": ["windows-latest", "ghost"]}}"#]),
        );

        assert_eq!(known_only.entries, with_unknown.entries);
    }

    #[test]
    fn test_entries_strictly_sorted_and_duplicate_names_collapsed() {
        let plan = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[
                r#"{"name": "zeta", "supports": ["windows"]}"#,
                r#"{"name": "alpha", "supports": ["linux"]}"#,
                r#"{"name": "alpha", "supports": ["linux", "windows"]}"#,
            ]),
        );

        assert_eq!(
            plan.entries,
            vec![
                entry("ubuntu-22.04", "alpha", "linux"),
                entry("ubuntu-latest", "alpha", "linux"),
                entry("windows-latest", "alpha", "windows"),
                entry("windows-latest", "zeta", "windows"),
            ]
        );
        assert_eq!(plan.collapsed_duplicates, 2);
        assert!(plan
            .entries
            .windows(2)
            .all(|pair| (&pair[0].repro, &pair[0].os) < (&pair[1].repro, &pair[1].os)));
    }

    #[test]
    fn test_every_entry_label_belongs_to_its_platform() {
        let index = index_for(WIDE_PLATFORM_MAP);
        let plan = compose(
            WIDE_PLATFORM_MAP,
            &repros_doc(&[
                r#"{"name": "a"}"#,
                r#"{"name": "b", "supports": ["macos"], "os": {"includeLabels": ["macos-14"]}}"#,
            ]),
        );

        for entry in &plan.entries {
            let declared = index.labels_for(&entry.platform).expect("platform should be known");
            assert!(declared.contains(&entry.os), "{:?}", entry);
        }
    }

    #[test]
    fn test_unknowns_recorded_in_context() {
        let index = index_for(BASIC_PLATFORM_MAP);
        let resolver = MatrixResolver::new(&index);
        let mut ctx = ResolverContext::new();

        let mut repro = ReproSpec::named("ctx");
        repro.os.exclude_platforms.insert("bsd".to_string());
        repro.os.applied = true;

        let resolution = resolver.resolve(&repro, &mut ctx);
        assert!(matches!(resolution, Resolution::Scheduled(ref e) if e.len() == 2));
        assert!(ctx.entries.is_empty());
        assert!(ctx.diagnostics.unknown_platforms.contains("bsd"));

        ctx.record(resolution);
        assert_eq!(ctx.entries.len(), 2);
    }
}
