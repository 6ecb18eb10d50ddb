//! Module-resolution section of the emitted configuration.
//!
//! Carries the recognized extensions and the fixed alias set pointing into
//! the source tree.

use super::defaults;
use crate::paths::ProjectPaths;
use educe::Educe;
use serde::Serialize;
use std::{collections::BTreeMap, path::PathBuf};

/// Directory names aliased into the source tree.
///
/// `import Button from "components/button"` resolves to
/// `<source>/components/button` through this set.
pub const ALIAS_DIRS: [&str; 4] = ["components", "utils", "styles", "pages"];

/// Extensions and aliases for module resolution.
#[derive(Debug, Clone, Educe, Serialize)]
#[educe(Default)]
pub struct ResolutionConfig {
    /// Extensions tried for extensionless imports, in order.
    #[educe(Default = defaults::resolve::extensions())]
    pub extensions: Vec<String>,

    /// Alias name to absolute directory.
    pub alias: BTreeMap<String, PathBuf>,
}

impl ResolutionConfig {
    /// Build the fixed alias set for a project's source tree.
    pub fn for_project(paths: &ProjectPaths) -> Self {
        let alias = ALIAS_DIRS
            .iter()
            .map(|name| ((*name).to_owned(), paths.alias_target(name)))
            .collect();

        Self {
            extensions: defaults::resolve::extensions(),
            alias,
        }
    }
}
