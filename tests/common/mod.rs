// Shared test helpers for unit and integration tests
#![allow(dead_code)]

use repro_matrix::core::documents::{parse_platform_map, parse_repros};
use repro_matrix::core::index::PlatformIndex;
use repro_matrix::core::planner::{plan_matrix, MatrixPlan};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// The two-platform map used by most scenarios.
pub const BASIC_PLATFORM_MAP: &str = r#"{"linux": ["ubuntu-latest"], "windows": ["windows-latest"]}"#;

/// A richer map with several labels per platform.
pub const WIDE_PLATFORM_MAP: &str = r#"{
    "Linux": ["ubuntu-latest", "ubuntu-22.04"],
    "windows": ["windows-latest"],
    "macos": ["macos-14", "macos-13"]
}"#;

/// Builds the index for a platform map document.
pub fn index_for(platform_map: &str) -> PlatformIndex {
    let map = parse_platform_map(platform_map).expect("platform map should parse");
    PlatformIndex::build(map.platforms)
}

/// Runs the whole composition on two in-memory documents.
pub fn compose(platform_map: &str, repros: &str) -> MatrixPlan {
    let index = index_for(platform_map);
    let repros = parse_repros(repros).expect("repros should parse");
    plan_matrix(&index, &repros)
}

/// Wraps repro objects into a repro definitions document.
pub fn repros_doc(repros: &[&str]) -> String {
    format!(r#"{{"repros": [{}]}}"#, repros.join(", "))
}

/// Creates a workspace with `.github/os-matrix.json` and `repros.json`.
pub fn setup_workspace(platform_map: &str, repros: &str) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let github_dir = temp_dir.path().join(".github");
    fs::create_dir_all(&github_dir).expect("Failed to create .github directory");
    fs::write(github_dir.join("os-matrix.json"), platform_map).expect("Failed to write os-matrix.json");
    fs::write(temp_dir.path().join("repros.json"), repros).expect("Failed to write repros.json");
    temp_dir
}

pub fn output_path(workspace: &TempDir) -> PathBuf {
    workspace.path().join("github_output.txt")
}

pub fn summary_path(workspace: &TempDir) -> PathBuf {
    workspace.path().join("step_summary.md")
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}
