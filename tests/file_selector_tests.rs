use codeprep::selector::FileSelector;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(path: &Path, bytes: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x".repeat(bytes)).unwrap();
}

/// a.go (100 B), b.txt (50 B), sub/c.go (400 KB)
fn sample_tree() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.go"), 100);
    write_file(&dir.path().join("b.txt"), 50);
    write_file(&dir.path().join("sub").join("c.go"), 400_000);
    dir
}

fn root(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().canonicalize().unwrap()
}

fn names(files: &[codeprep::SelectedFile]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_recursive_pattern_selects_go_files_under_size_cap() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(
        vec![format!("{}/**/*.go", root.display())],
        vec![],
        1_048_576,
    );
    let files = selector.select_files().unwrap();

    assert_eq!(
        names(&files),
        vec!["a.go", "c.go"],
        "expected both .go files in walk order, got {:?}",
        files
    );
    assert_eq!(files[0].size, 100);
    assert_eq!(files[1].size, 400_000);
}

#[test]
fn test_size_filter_drops_oversized_regardless_of_pattern() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(vec![format!("{}/**/*.go", root.display())], vec![], 1000);
    let files = selector.select_files().unwrap();

    assert_eq!(names(&files), vec!["a.go"]);
}

#[test]
fn test_size_filter_zero_means_unlimited() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(vec![format!("{}/**", root.display())], vec![], 0);
    let files = selector.select_files().unwrap();

    assert_eq!(files.len(), 3, "all files expected, got {:?}", files);
}

#[test]
fn test_determinism() {
    let dir = sample_tree();
    let root = root(&dir);
    let patterns = vec![format!("{}/**", root.display())];

    let first = FileSelector::new(patterns.clone(), vec![], 0)
        .select_files()
        .unwrap();
    let second = FileSelector::new(patterns, vec![], 0)
        .select_files()
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_dedup_first_occurrence_wins() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(
        vec![
            format!("{}/a.go", root.display()),
            format!("{}/*.go", root.display()),
        ],
        vec![],
        0,
    );
    let files = selector.select_files().unwrap();

    assert_eq!(names(&files), vec!["a.go"], "a.go must appear exactly once");
}

#[test]
fn test_exclusion_precedence_over_include() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(
        vec![format!("{}/*.go", root.display())],
        vec!["*.go".to_owned()],
        0,
    );
    let files = selector.select_files().unwrap();

    assert!(files.is_empty(), "excluded files must never be returned");
}

#[test]
fn test_recursive_exclude_matches_basename_at_any_depth() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(
        vec![format!("{}/**", root.display())],
        vec!["**/*.go".to_owned()],
        0,
    );
    let files = selector.select_files().unwrap();

    assert_eq!(names(&files), vec!["b.txt"]);
}

#[test]
fn test_recursive_exclude_prefix_is_substring_containment() {
    // The prefix check is a plain substring match, so `vendor/**` also
    // catches paths like `abcvendor/x.go`.
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("abcvendor").join("x.go"), 10);
    write_file(&dir.path().join("keep.go"), 10);
    let root = root(&dir);

    let selector = FileSelector::new(
        vec![format!("{}/**/*.go", root.display())],
        vec!["vendor/**".to_owned()],
        0,
    );
    let files = selector.select_files().unwrap();

    assert_eq!(names(&files), vec!["keep.go"]);
}

#[test]
fn test_recursive_basename_fallback() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("src").join("a").join("b").join("x.go"), 10);
    let root = root(&dir);

    let scoped = FileSelector::new(vec![format!("{}/src/**/*.go", root.display())], vec![], 0)
        .select_files()
        .unwrap();
    assert_eq!(names(&scoped), vec!["x.go"]);

    let unrestricted = FileSelector::new(vec![format!("{}/**/*.go", root.display())], vec![], 0)
        .select_files()
        .unwrap();
    assert_eq!(names(&unrestricted), vec!["x.go"]);
}

#[test]
fn test_recursive_suffix_with_separator_uses_relative_path() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(vec![format!("{}/**/sub/*.go", root.display())], vec![], 0);
    let files = selector.select_files().unwrap();

    assert_eq!(names(&files), vec!["c.go"]);
}

#[test]
fn test_recursive_suffix_star_does_not_cross_directories() {
    // `sub/*.go` must not reach files nested deeper than one level below
    // `sub`, and the basename fallback must not resurrect them.
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("sub").join("deep").join("y.go"), 10);
    write_file(&dir.path().join("sub").join("top.go"), 10);
    let root = root(&dir);

    let selector = FileSelector::new(vec![format!("{}/**/sub/*.go", root.display())], vec![], 0);
    let files = selector.select_files().unwrap();

    assert_eq!(names(&files), vec!["top.go"]);
}

#[test]
fn test_malformed_simple_glob_is_fatal() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(vec![format!("{}/[", root.display())], vec![], 0);
    let result = selector.select_files();

    assert!(result.is_err(), "a bad simple glob must abort the selection");
}

#[test]
fn test_malformed_exclude_is_absorbed() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(
        vec![format!("{}/*.go", root.display())],
        vec!["[".to_owned()],
        0,
    );
    let files = selector.select_files().unwrap();

    assert_eq!(names(&files), vec!["a.go"]);
}

#[test]
fn test_directories_are_never_selected() {
    let dir = sample_tree();
    let root = root(&dir);

    let selector = FileSelector::new(vec![format!("{}/*", root.display())], vec![], 0);
    let files = selector.select_files().unwrap();

    assert_eq!(
        names(&files),
        vec!["a.go", "b.txt"],
        "the sub directory itself must be dropped"
    );
}

#[test]
#[serial]
fn test_empty_include_defaults_to_star() {
    let dir = sample_tree();
    std::env::set_current_dir(root(&dir)).unwrap();

    let defaulted = FileSelector::new(vec![], vec![], 0).select_files().unwrap();
    let explicit = FileSelector::new(vec!["*".to_owned()], vec![], 0)
        .select_files()
        .unwrap();

    assert_eq!(defaulted, explicit);
    assert_eq!(names(&defaulted), vec!["a.go", "b.txt"]);
}

#[test]
#[serial]
fn test_star_is_non_recursive_and_excludes_apply() {
    let dir = sample_tree();
    std::env::set_current_dir(root(&dir)).unwrap();

    let selector = FileSelector::new(vec!["*".to_owned()], vec!["*.txt".to_owned()], 0);
    let files = selector.select_files().unwrap();

    assert_eq!(
        names(&files),
        vec!["a.go"],
        "sub/c.go is out of reach for a non-recursive glob and b.txt is excluded"
    );
}
