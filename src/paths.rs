//! Project path resolution.
//!
//! A single source of truth for the filesystem locations resolution reads:
//! project root, source tree, and the manifest file. All paths are
//! normalized to absolute form once, at startup.

use crate::cli::Cli;
use std::path::{Path, PathBuf};

/// Conventional name of the subtree holding page directories.
pub const PAGES_DIR: &str = "pages";

/// Resolved filesystem locations for one resolution pass.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    /// Project root (defaults to the working directory).
    pub root: PathBuf,

    /// Source tree scanned for pages (`<root>/src` by default).
    pub source: PathBuf,

    /// Manifest file (`<root>/package.json` by default).
    pub manifest: PathBuf,
}

impl ProjectPaths {
    /// Resolve paths from CLI arguments, expanding `~` in `--root`.
    pub fn from_cli(cli: &Cli) -> Self {
        let root = cli
            .root
            .as_ref()
            .map(|p| {
                let expanded = shellexpand::tilde(&p.to_string_lossy()).into_owned();
                PathBuf::from(expanded)
            })
            .unwrap_or_else(|| PathBuf::from("./"));

        Self::with_layout(&root, &cli.source, &cli.manifest)
    }

    /// Resolve paths for a root directory with explicit layout names.
    pub fn with_layout(root: &Path, source: &Path, manifest: &Path) -> Self {
        let root = normalize_path(root);
        Self {
            source: normalize_path(&root.join(source)),
            manifest: normalize_path(&root.join(manifest)),
            root,
        }
    }

    /// Resolve the conventional layout (`src`, `package.json`) under `root`.
    #[allow(unused)]
    pub fn conventional(root: &Path) -> Self {
        Self::with_layout(root, Path::new("src"), Path::new("package.json"))
    }

    /// The source directory name relative to the root, slash-separated.
    ///
    /// Used as the prefix of every emitted module path (`./src/...`) and
    /// as the base of the resolution aliases.
    pub fn source_name(&self) -> String {
        self.source
            .strip_prefix(&self.root)
            .unwrap_or(Path::new("src"))
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Absolute path backing a resolution alias (`<source>/<name>`).
    pub fn alias_target(&self, name: &str) -> PathBuf {
        self.source.join(name)
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        // For non-existent paths, manually make them absolute
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_conventional_layout() {
        let dir = tempdir().unwrap();
        let paths = ProjectPaths::conventional(dir.path());

        assert!(paths.root.is_absolute());
        assert_eq!(paths.source, paths.root.join("src"));
        assert_eq!(paths.manifest, paths.root.join("package.json"));
    }

    #[test]
    fn test_custom_layout() {
        let dir = tempdir().unwrap();
        let paths = ProjectPaths::with_layout(
            dir.path(),
            Path::new("frontend"),
            Path::new("pkg.json"),
        );

        assert_eq!(paths.source, paths.root.join("frontend"));
        assert_eq!(paths.manifest, paths.root.join("pkg.json"));
        assert_eq!(paths.source_name(), "frontend");
    }

    #[test]
    fn test_source_name_default() {
        let dir = tempdir().unwrap();
        let paths = ProjectPaths::conventional(dir.path());
        assert_eq!(paths.source_name(), "src");
    }

    #[test]
    fn test_alias_target() {
        let dir = tempdir().unwrap();
        let paths = ProjectPaths::conventional(dir.path());
        assert_eq!(
            paths.alias_target("components"),
            paths.root.join("src").join("components")
        );
    }

    #[test]
    fn test_normalize_nonexistent_relative() {
        let normalized = normalize_path(Path::new("does/not/exist"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("does/not/exist"));
    }

    #[test]
    fn test_normalize_existing_path_canonicalizes() {
        let dir = tempdir().unwrap();
        let normalized = normalize_path(dir.path());
        assert!(normalized.is_absolute());
    }
}
