use crate::errors::PromptError;
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// One file chosen for inclusion. The path was a statable regular file at
/// selection time; nothing guarantees it still is when it gets read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Expands include patterns, drops duplicates and excluded or oversized
/// candidates, and keeps only regular files.
pub struct FileSelector {
    patterns: Vec<String>,
    excludes: Vec<String>,
    max_file_size: u64,
}

/// Single-level matching: `*` and `?` never cross a `/`.
fn literal_separator() -> MatchOptions {
    MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    }
}

impl FileSelector {
    /// `max_file_size` of 0 disables the size ceiling.
    pub fn new(patterns: Vec<String>, excludes: Vec<String>, max_file_size: u64) -> Self {
        FileSelector {
            patterns,
            excludes,
            max_file_size,
        }
    }

    /// Returns the selected files in order of first match. Fails only when a
    /// simple glob pattern does not parse; every per-candidate rejection is
    /// silent.
    pub fn select_files(&self) -> Result<Vec<SelectedFile>, PromptError> {
        let mut selected = Vec::new();
        let mut seen: HashSet<PathBuf> = HashSet::new();

        let default_patterns = vec!["*".to_owned()];
        let patterns = if self.patterns.is_empty() {
            debug!("No patterns specified, using current directory pattern");
            &default_patterns
        } else {
            &self.patterns
        };

        for pattern in patterns {
            for candidate in self.expand_pattern(pattern)? {
                // First occurrence wins, even if that occurrence was rejected.
                if !seen.insert(candidate.clone()) {
                    continue;
                }

                if self.is_excluded(&candidate) {
                    trace!("Excluded by pattern: {}", candidate.display());
                    continue;
                }

                let metadata = match std::fs::metadata(&candidate) {
                    Ok(metadata) => metadata,
                    Err(_) => continue,
                };
                if !metadata.is_file() {
                    continue;
                }

                if self.max_file_size > 0 && metadata.len() > self.max_file_size {
                    debug!(
                        "Skipping oversized file: {} ({} bytes)",
                        candidate.display(),
                        metadata.len()
                    );
                    continue;
                }

                selected.push(SelectedFile {
                    path: candidate,
                    size: metadata.len(),
                });
            }
        }

        Ok(selected)
    }

    fn expand_pattern(&self, pattern: &str) -> Result<Vec<PathBuf>, PromptError> {
        if pattern.contains("**") {
            return Ok(Self::expand_recursive(pattern));
        }

        let entries = glob::glob(pattern).map_err(|e| {
            PromptError::PatternError(format!("failed to expand pattern '{}': {}", pattern, e))
        })?;

        let mut matches = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => {
                    if let Ok(abs) = std::path::absolute(&path) {
                        matches.push(abs);
                    }
                }
                Err(e) => trace!("Skipping unreadable match for '{}': {}", pattern, e),
            }
        }
        Ok(matches)
    }

    /// Walks the tree under the text before the first `**` and matches each
    /// file against the text after it, relative-path first with the base
    /// name as fallback. Walk errors and a malformed suffix are absorbed,
    /// never fatal.
    fn expand_recursive(pattern: &str) -> Vec<PathBuf> {
        let Some((prefix, suffix)) = pattern.split_once("**") else {
            return Vec::new();
        };
        let prefix = prefix.trim_end_matches('/');
        let suffix = suffix.trim_start_matches('/');

        let root = if prefix.is_empty() {
            Path::new(".")
        } else {
            Path::new(prefix)
        };

        let suffix_pattern = if suffix.is_empty() {
            None
        } else {
            match Pattern::new(suffix) {
                Ok(p) => Some(p),
                // An unparsable suffix matches nothing.
                Err(e) => {
                    trace!("Unusable recursive suffix '{}': {}", suffix, e);
                    return Vec::new();
                }
            }
        };

        let options = literal_separator();
        let mut matches = Vec::new();
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path();

            let matched = match &suffix_pattern {
                None => true,
                Some(p) => {
                    let rel_match = path
                        .strip_prefix(root)
                        .map(|rel| p.matches_path_with(rel, options))
                        .unwrap_or(false);
                    rel_match
                        || path
                            .file_name()
                            .map(|name| p.matches_with(&name.to_string_lossy(), options))
                            .unwrap_or(false)
                }
            };

            if matched {
                if let Ok(abs) = std::path::absolute(path) {
                    matches.push(abs);
                }
            }
        }
        matches
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes
            .iter()
            .any(|pattern| Self::matches_exclude(path, pattern))
    }

    /// A `**` exclude splits into prefix/suffix: the prefix must appear as a
    /// substring of the path and a non-empty suffix must glob-match the base
    /// name. A plain exclude matches the base name or the whole path. A
    /// pattern that does not parse matches nothing.
    fn matches_exclude(path: &Path, pattern: &str) -> bool {
        let options = literal_separator();
        let path_str = path.to_string_lossy();
        let base_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some((prefix, suffix)) = pattern.split_once("**") {
            let prefix = prefix.trim_end_matches('/');
            let suffix = suffix.trim_start_matches('/');

            if !prefix.is_empty() && !path_str.contains(prefix) {
                return false;
            }
            if !suffix.is_empty() {
                return Pattern::new(suffix)
                    .map(|p| p.matches_with(&base_name, options))
                    .unwrap_or(false);
            }
            true
        } else {
            Pattern::new(pattern)
                .map(|p| p.matches_with(&base_name, options) || p.matches_with(&path_str, options))
                .unwrap_or(false)
        }
    }
}
