//! Path normalization helpers

use std::path::{Component, Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `path` relative to `root`, '/'-separated.
pub fn relative_to(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Make `path` absolute and drop `.`/`..` components without touching the
/// filesystem, so symlinks keep the name they were given.
pub fn lexical_absolute(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Base name of the directory, resolved against the current directory.
///
/// `.` resolves to the name of the working directory; a filesystem root has
/// no name and yields an empty string.
pub fn repo_name(root: &Path) -> String {
    lexical_absolute(root).file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn relative_to_strips_root() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/main.rs");
        assert_eq!(relative_to(path, root), Some("src/main.rs".to_string()));
    }

    #[test]
    fn relative_to_rejects_foreign_path() {
        assert_eq!(relative_to(Path::new("/other/file.rs"), Path::new("/project")), None);
    }

    #[test]
    fn repo_name_uses_directory_base_name() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("my_project");
        std::fs::create_dir_all(root.join("src")).unwrap();
        assert_eq!(repo_name(&root), "my_project");
        assert_eq!(repo_name(&root.join("src").join("..")), "my_project");
    }

    #[cfg(unix)]
    #[test]
    fn repo_name_keeps_symlink_name() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real_dir");
        std::fs::create_dir(&real).unwrap();
        let link = tmp.path().join("link_name");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert_eq!(repo_name(&link), "link_name");
        assert_eq!(repo_name(&link.join("sub").join("..")), "link_name");
    }

    #[test]
    fn lexical_absolute_drops_dot_components() {
        let path = lexical_absolute(Path::new("/project/./src/../lib"));
        assert_eq!(path, PathBuf::from("/project/lib"));
    }

    #[test]
    fn repo_name_of_filesystem_root_is_empty() {
        assert_eq!(repo_name(Path::new("/")), "");
    }
}
