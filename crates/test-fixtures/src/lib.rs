//! Test fixture loader for Folio golden datasets.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixture_path(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Ratings of the shared library dataset.
pub const LIBRARY_RATINGS: &str = "golden/library/ratings.json";
/// Catalog of the shared library dataset.
pub const LIBRARY_CATALOG: &str = "golden/library/catalog.json";
/// Directory of recommendation cases run against the library dataset.
pub const RECOMMEND_CASES: &str = "golden/recommend";

/// One expected entry of a golden recommendation list.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedEntry {
    pub title: String,
    pub score: f64,
}

/// A recommendation query against the library dataset and its expected
/// outcome: either a ranked list or an error code.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendCase {
    pub description: String,
    pub seed: String,
    pub strategy: String,
    pub top_n: usize,
    pub min_ratings: usize,
    pub min_support: f64,
    pub min_lift: f64,
    #[serde(default)]
    pub expected: Vec<ExpectedEntry>,
    #[serde(default)]
    pub expected_error: Option<String>,
}

/// Load every recommendation case, paired with its file name.
pub fn load_recommend_cases() -> Vec<(String, RecommendCase)> {
    list_fixtures(RECOMMEND_CASES)
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = format!("{}/{}", RECOMMEND_CASES, name);
            (name, load_fixture(&relative))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn library_files_exist() {
        for f in [LIBRARY_RATINGS, LIBRARY_CATALOG] {
            assert!(fixture_path(f).is_file(), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn library_files_are_json_arrays() {
        let ratings: serde_json::Value = load_fixture(LIBRARY_RATINGS);
        let catalog: serde_json::Value = load_fixture(LIBRARY_CATALOG);
        assert!(ratings.is_array());
        assert!(catalog.is_array());
    }

    #[test]
    fn every_case_expects_a_list_or_an_error() {
        let cases = load_recommend_cases();
        assert!(!cases.is_empty());
        for (name, case) in &cases {
            assert!(
                case.expected_error.is_none() || case.expected.is_empty(),
                "{name}: expects both results and an error"
            );
            assert!(!case.seed.is_empty(), "{name}: empty seed");
            assert!(!case.description.is_empty(), "{name}: missing description");
        }
    }

    #[test]
    fn list_fixtures_skips_missing_directories() {
        assert!(list_fixtures("golden/does-not-exist").is_empty());
        assert!(fixture_path(RECOMMEND_CASES).is_dir());
    }
}
