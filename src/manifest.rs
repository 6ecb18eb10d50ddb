//! Project manifest reading.
//!
//! The manifest (`package.json`) is read once at startup for the optional
//! theme package declaration:
//!
//! ```json
//! {
//!   "buildConfig": { "theme": "@corp/theme-storefront" }
//! }
//! ```
//!
//! A missing or malformed manifest never fails resolution. The degraded
//! outcome is always "no theme": the stylesheet pipeline is simply left
//! without its injection stage.

use crate::log;
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};

/// The subset of the manifest that resolution cares about.
///
/// Unknown fields are expected (the manifest belongs to the package
/// manager), so nothing is denied here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectManifest {
    /// Package name, reported by `check`.
    #[serde(default)]
    pub name: Option<String>,

    /// Build-tool section carrying the theme declaration.
    #[serde(default, rename = "buildConfig")]
    pub build_config: Option<BuildSection>,
}

/// The `buildConfig` object inside the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildSection {
    /// Theme package identifier, e.g. `@corp/theme-storefront`.
    #[serde(default)]
    pub theme: Option<String>,
}

impl ProjectManifest {
    /// Parse a manifest from its JSON text.
    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The declared theme package, if any. Empty strings count as absent.
    pub fn theme(&self) -> Option<&str> {
        self.build_config
            .as_ref()
            .and_then(|section| section.theme.as_deref())
            .filter(|theme| !theme.is_empty())
    }
}

/// Read the manifest and resolve the theme package identifier.
///
/// Degrades to `None` on every anomaly: a missing file is silent, while an
/// unreadable or malformed manifest logs a warning with the expected shape.
/// This never aborts the build.
pub fn resolve_theme(manifest_path: &Path) -> Option<String> {
    let content = match fs::read_to_string(manifest_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return None,
        Err(err) => {
            warn_degraded(manifest_path, &err.to_string());
            return None;
        }
    };

    match ProjectManifest::from_str(&content) {
        Ok(manifest) => manifest.theme().map(ToOwned::to_owned),
        Err(err) => {
            warn_degraded(manifest_path, &err.to_string());
            None
        }
    }
}

/// Load the full manifest for inspection (`check` command).
///
/// Same degradation rules as [`resolve_theme`]: anomalies produce a default
/// manifest, never an error.
pub fn load(manifest_path: &Path) -> ProjectManifest {
    let Ok(content) = fs::read_to_string(manifest_path) else {
        return ProjectManifest::default();
    };
    ProjectManifest::from_str(&content).unwrap_or_default()
}

/// Warn about a degraded manifest and show the expected shape.
fn warn_degraded(path: &Path, detail: &str) {
    log!("warn"; "cannot use manifest {}: {detail}", path.display());
    log!("warn"; "declare the theme package as\n  \"buildConfig\": {{\n    \"theme\": \"@scope/theme-package\"\n  }}");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_manifest(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("package.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_theme_declared() {
        let dir = tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{
                "name": "storefront",
                "version": "1.0.0",
                "buildConfig": { "theme": "@corp/theme-storefront" }
            }"#,
        );

        assert_eq!(
            resolve_theme(&path).as_deref(),
            Some("@corp/theme-storefront")
        );
    }

    #[test]
    fn test_no_build_config_section() {
        let dir = tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{ "name": "storefront" }"#);

        assert_eq!(resolve_theme(&path), None);
    }

    #[test]
    fn test_build_config_without_theme() {
        let dir = tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{ "buildConfig": {} }"#);

        assert_eq!(resolve_theme(&path), None);
    }

    #[test]
    fn test_empty_theme_counts_as_absent() {
        let dir = tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{ "buildConfig": { "theme": "" } }"#);

        assert_eq!(resolve_theme(&path), None);
    }

    #[test]
    fn test_missing_manifest_is_silent_none() {
        let dir = tempdir().unwrap();
        assert_eq!(resolve_theme(&dir.path().join("package.json")), None);
    }

    #[test]
    fn test_malformed_manifest_degrades_to_none() {
        let dir = tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{ "buildConfig": { "theme": 42 "#);

        assert_eq!(resolve_theme(&path), None);
    }

    #[test]
    fn test_malformed_equals_missing() {
        // The degraded result must be indistinguishable from no manifest
        let dir = tempdir().unwrap();
        let malformed = write_manifest(dir.path(), "not json at all");

        assert_eq!(
            resolve_theme(&malformed),
            resolve_theme(&dir.path().join("absent.json"))
        );
    }

    #[test]
    fn test_unknown_fields_accepted() {
        let dir = tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{
                "name": "app",
                "dependencies": { "react": "^16.0.0" },
                "scripts": { "build": "bundler" },
                "buildConfig": { "theme": "@corp/theme-dark", "other": true }
            }"#,
        );

        assert_eq!(resolve_theme(&path).as_deref(), Some("@corp/theme-dark"));
    }

    #[test]
    fn test_load_full_manifest() {
        let dir = tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{ "name": "storefront" }"#);

        let manifest = load(&path);
        assert_eq!(manifest.name.as_deref(), Some("storefront"));
        assert!(manifest.theme().is_none());
    }

    #[test]
    fn test_load_missing_gives_default() {
        let dir = tempdir().unwrap();
        let manifest = load(&dir.path().join("package.json"));
        assert!(manifest.name.is_none());
    }
}
