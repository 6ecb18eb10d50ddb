//! Project validation.
//!
//! `packwright check` verifies that the layout resolution relies on is in
//! place and reports what a subsequent `resolve` would use: the manifest
//! state, the theme, and the discovered pages.

use crate::{
    config::ResolveError,
    entries, log, manifest,
    paths::ProjectPaths,
};
use anyhow::{Result, bail};

/// Validate the project layout and report the resolved theme.
pub fn check_project(paths: &ProjectPaths) -> Result<()> {
    log!("check"; "root {}", paths.root.display());

    if !paths.source.is_dir() {
        bail!(ResolveError::Validation(format!(
            "source directory not found: {}",
            paths.source.display()
        )));
    }

    let manifest = manifest::load(&paths.manifest);
    if let Some(name) = &manifest.name {
        log!("check"; "project {name}");
    }
    match manifest.theme() {
        Some(theme) => log!("theme"; "{theme}"),
        None => log!("theme"; "no theme declared"),
    }

    let entries = entries::discover(paths)?;
    if entries.is_empty() {
        log!("warn"; "no pages found under {}", paths.source.display());
    } else {
        log!("entries"; "found {} pages", entries.len());
    }

    log!("check"; "ok");
    Ok(())
}
