//! Entry-point discovery.
//!
//! Pages live in directories under any `pages/` subtree of the source
//! directory. Each page directory contributes one entry keyed by its
//! relative path plus an `/index` suffix:
//!
//! ```text
//! src/pages/checkout/       -> "pages/checkout/index"
//! src/admin/pages/users/    -> "admin/pages/users/index"
//! ```
//!
//! Every entry maps to the page's index module. Live-reload mode prepends
//! the reload client to each module list, in place, after discovery.

use crate::{
    config::ResolveError,
    log,
    paths::{PAGES_DIR, ProjectPaths},
};
use std::{collections::BTreeMap, ffi::OsStr, path::Path};
use walkdir::WalkDir;

/// Mapping from logical page key to the ordered modules loaded for it.
///
/// Keys are unique per page directory; enumeration order carries no
/// semantic weight, but the sorted map keeps emitted configs diffable.
pub type EntryMap = BTreeMap<String, Vec<String>>;

/// Module reference for the live-reload client injected in liveload mode.
pub const LIVE_RELOAD_CLIENT: &str = "live-reload/client?/";

/// File name of a page's index module.
const INDEX_MODULE: &str = "index.jsx";

/// Scan the source tree for page directories.
///
/// An unreadable source tree is the one fatal failure of resolution: either
/// every page is discovered or the whole pass aborts.
pub fn discover(paths: &ProjectPaths) -> Result<EntryMap, ResolveError> {
    let source = &paths.source;
    let source_name = paths.source_name();
    let mut entries = EntryMap::new();

    for entry in WalkDir::new(source) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(source) else {
            continue;
        };
        if !is_page_dir(rel) {
            continue;
        }

        let rel = rel.to_string_lossy().replace('\\', "/");
        entries.insert(
            format!("{rel}/index"),
            vec![format!("./{source_name}/{rel}/{INDEX_MODULE}")],
        );
    }

    Ok(entries)
}

/// A page directory is any directory whose parent, within the source tree,
/// is named `pages`.
fn is_page_dir(rel: &Path) -> bool {
    rel.parent()
        .and_then(Path::file_name)
        .is_some_and(|name| name == OsStr::new(PAGES_DIR))
}

/// Prepend the live-reload client to every entry's module list.
pub fn prefix_live_reload(entries: &mut EntryMap) {
    for modules in entries.values_mut() {
        modules.insert(0, LIVE_RELOAD_CLIENT.to_owned());
    }
}

/// List discovered entry points (`packwright entries`).
pub fn list(paths: &ProjectPaths) -> Result<(), ResolveError> {
    let entries = discover(paths)?;

    if entries.is_empty() {
        log!("entries"; "no pages found under {}", paths.source.display());
        return Ok(());
    }

    for (key, modules) in &entries {
        log!("entries"; "{key} <- {}", modules.join(", "));
    }
    log!("entries"; "found {} pages", entries.len());

    Ok(())
}

/// The one-entry map used by the single-page override.
///
/// The key follows the conventional `pages/<name>/index` shape regardless of
/// what discovery found.
pub fn single_page_entry(page: &str, source_name: &str) -> EntryMap {
    let mut entries = EntryMap::new();
    entries.insert(
        format!("{PAGES_DIR}/{page}/index"),
        vec![format!("./{source_name}/{PAGES_DIR}/{page}/{INDEX_MODULE}")],
    );
    entries
}

// ============================================================================
// Tests
// ============================================================================
