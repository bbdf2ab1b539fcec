//! Directory traversal producing the sorted list of files to render

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::exclude::ExclusionRules;
use super::languages::{is_code_file, label_for};
use crate::domain::FileRecord;
use crate::error::{ConvertError, Result};
use crate::utils::paths::{lexical_absolute, relative_to};

/// Walks a directory tree and collects eligible files.
///
/// Excluded directories are pruned before descending, so large dependency
/// trees are never traversed.
pub struct FileScanner<'a> {
    root: PathBuf,
    rules: &'a ExclusionRules,
    follow_symlinks: bool,
    skip_files: Vec<PathBuf>,
}

impl<'a> FileScanner<'a> {
    pub fn new(root: impl Into<PathBuf>, rules: &'a ExclusionRules) -> Self {
        Self { root: root.into(), rules, follow_symlinks: false, skip_files: Vec::new() }
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Never collect `path`, even when it would otherwise be eligible.
    pub fn skip_file(mut self, path: impl AsRef<Path>) -> Self {
        self.skip_files.push(lexical_absolute(path.as_ref()));
        self
    }

    /// Scan the root and return eligible files sorted by relative path.
    pub fn scan(&self) -> Result<Vec<FileRecord>> {
        let root = std::path::absolute(&self.root).unwrap_or_else(|_| self.root.clone());
        let mut records = Vec::new();

        let walker = WalkDir::new(&root)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry, &root));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(ConvertError::Walk { path: root.clone(), source: err });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !is_file_like(&entry) {
                continue;
            }
            let Some(relative_path) = relative_to(entry.path(), &root) else {
                continue;
            };
            if let Some(pattern) = self.rules.matching_pattern(&relative_path) {
                tracing::debug!(path = %relative_path, pattern, "excluded file");
                continue;
            }
            if !is_code_file(entry.path()) {
                continue;
            }
            if !self.skip_files.is_empty()
                && self.skip_files.contains(&lexical_absolute(entry.path()))
            {
                tracing::debug!(path = %relative_path, "skipped config file");
                continue;
            }

            records.push(FileRecord {
                label: label_for(entry.path()),
                path: entry.into_path(),
                relative_path,
            });
        }

        records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(records)
    }

    fn is_pruned(&self, entry: &DirEntry, root: &Path) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let Some(relative_path) = relative_to(entry.path(), root) else {
            return false;
        };
        // Test both `vendor` and `vendor/` so that `vendor$` and `vendor/.*` each prune.
        let dir_path = format!("{relative_path}/");
        let matched = self
            .rules
            .matching_pattern(&relative_path)
            .or_else(|| self.rules.matching_pattern(&dir_path));
        match matched {
            Some(pattern) => {
                tracing::debug!(path = %dir_path, pattern, "pruned directory");
                true
            }
            None => false,
        }
    }
}

/// Regular files, and symlinks that do not point at a directory.
///
/// Dangling links are kept; reading them later yields a placeholder.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        return std::fs::metadata(entry.path()).map(|m| !m.is_dir()).unwrap_or(true);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x\n").unwrap();
    }

    fn scan_paths(root: &Path, extra: &[&str]) -> Vec<String> {
        let rules = ExclusionRules::new(extra).unwrap();
        FileScanner::new(root, &rules)
            .scan()
            .unwrap()
            .into_iter()
            .map(|r| r.relative_path)
            .collect()
    }

    #[test]
    fn collects_only_known_extensions_sorted() {
        let tmp = TempDir::new().unwrap();
        for rel in ["b.py", "a.rs", "notes.txt", "src/z.go", "src/lib/y.ts", "README"] {
            touch(tmp.path(), rel);
        }
        assert_eq!(scan_paths(tmp.path(), &[]), vec!["a.rs", "b.py", "src/lib/y.ts", "src/z.go"]);
    }

    #[test]
    fn sorting_is_by_path_string() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a/x.rs");
        touch(tmp.path(), "a-b/x.rs");
        // '-' sorts before '/'
        assert_eq!(scan_paths(tmp.path(), &[]), vec!["a-b/x.rs", "a/x.rs"]);
    }

    #[test]
    fn excluded_directories_are_pruned() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "node_modules/pkg/index.js");
        touch(tmp.path(), "web/node_modules/pkg/index.js");
        touch(tmp.path(), "vendor/lib.rs");
        touch(tmp.path(), "src/main.rs");

        assert_eq!(scan_paths(tmp.path(), &[]), vec!["src/main.rs", "vendor/lib.rs"]);
        assert_eq!(scan_paths(tmp.path(), &["^vendor/"]), vec!["src/main.rs"]);
    }

    #[test]
    fn end_anchored_pattern_prunes_directory() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "tests/a.py");
        touch(tmp.path(), "tests/unit/b.py");
        touch(tmp.path(), "vendor/c.rs");
        touch(tmp.path(), "main.py");

        assert_eq!(scan_paths(tmp.path(), &["tests$"]), vec!["main.py", "vendor/c.rs"]);
        assert_eq!(scan_paths(tmp.path(), &["^vendor$"]), vec!["main.py", "tests/a.py", "tests/unit/b.py"]);
    }

    #[test]
    fn skipped_file_is_not_collected() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "repo-to-md.toml");
        touch(tmp.path(), "Cargo.toml");
        let rules = ExclusionRules::new::<&str>(&[]).unwrap();

        let records = FileScanner::new(tmp.path(), &rules)
            .skip_file(tmp.path().join(".").join("repo-to-md.toml"))
            .scan()
            .unwrap();
        let paths: Vec<_> = records.into_iter().map(|r| r.relative_path).collect();
        assert_eq!(paths, vec!["Cargo.toml"]);
    }

    #[test]
    fn user_pattern_excludes_matching_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "test_foo.py");
        touch(tmp.path(), "foo.py");
        assert_eq!(scan_paths(tmp.path(), &["test_.*\\.py"]), vec!["foo.py"]);
    }

    #[test]
    fn adding_patterns_never_grows_result() {
        let tmp = TempDir::new().unwrap();
        for rel in ["a.py", "b/c.py", "b/d.rs", "e.json", "dist/f.js"] {
            touch(tmp.path(), rel);
        }
        let base = scan_paths(tmp.path(), &[]);
        let narrowed = scan_paths(tmp.path(), &["^b/", "json$"]);
        assert!(narrowed.iter().all(|p| base.contains(p)));
        assert_eq!(narrowed, vec!["a.py"]);
    }

    #[test]
    fn empty_tree_yields_no_records() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "only.txt");
        assert!(scan_paths(tmp.path(), &[]).is_empty());
    }

    #[test]
    fn records_carry_absolute_path_and_label() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "pkg/Mod.PY");
        let rules = ExclusionRules::new::<&str>(&[]).unwrap();
        let records = FileScanner::new(tmp.path(), &rules).scan().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].path.is_absolute());
        assert!(records[0].path.ends_with("pkg/Mod.PY"));
        assert_eq!(records[0].label, "python");
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let rules = ExclusionRules::new::<&str>(&[]).unwrap();
        let result = FileScanner::new(tmp.path().join("missing"), &rules).scan();
        assert!(matches!(result, Err(ConvertError::Walk { .. })));
    }
}
