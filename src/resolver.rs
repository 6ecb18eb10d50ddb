//! Configuration resolution.
//!
//! One deterministic, synchronous pass over the filesystem and the resolved
//! environment:
//!
//! ```text
//! resolve()
//!     │
//!     ├── manifest::resolve_theme()   → optional theme package (degrades)
//!     ├── entries::discover()         → entry map (fatal on unreadable tree)
//!     ├── pipeline::extend()          → stylesheet stages (+ theme last)
//!     ├── BundlerConfig::assemble()   → mode-independent sections
//!     └── apply_overrides()           → live-reload, mode branch, single page
//! ```

use crate::{
    cli::EmitFormat,
    config::{BundlerConfig, DevServerConfig, Devtool, PluginSpec, ResolveError},
    entries,
    env::BuildEnv,
    log, manifest, pipeline,
    paths::ProjectPaths,
};
use std::{fs, path::Path};

/// Produce the complete bundler configuration for a project.
///
/// The only fatal failure is an unreadable source tree; manifest anomalies
/// degrade to "no theme" inside [`manifest::resolve_theme`].
pub fn resolve(paths: &ProjectPaths, env: &BuildEnv) -> Result<BundlerConfig, ResolveError> {
    let theme = manifest::resolve_theme(&paths.manifest);
    if let Some(theme) = &theme {
        log!("theme"; "injecting {theme}/{} into every stylesheet", pipeline::THEME_VARIABLES);
    }

    let entry = entries::discover(paths)?;
    log!("entries"; "found {} pages", entry.len());

    let stages = pipeline::extend(pipeline::base_stages(), theme.as_deref());
    let mut config = BundlerConfig::assemble(paths, env, entry, stages);
    apply_overrides(&mut config, paths, env);

    Ok(config)
}

/// The three environment-driven overrides, evaluated unconditionally in
/// this fixed order.
fn apply_overrides(config: &mut BundlerConfig, paths: &ProjectPaths, env: &BuildEnv) {
    // 1. Live-reload: prefix every discovered entry with the reload client.
    if env.live_reload {
        entries::prefix_live_reload(&mut config.entry);
    }

    // 2. Mode branch: production optimizes stylesheet bundles; development
    //    gets a file server and inline source maps instead.
    if env.mode.is_dev() {
        config.dev_server = Some(DevServerConfig::default());
        config.devtool = Some(Devtool::InlineSourceMap);
    } else {
        config.plugins.push(PluginSpec::css_optimize());
    }

    // 3. Single-page override replaces the whole map last, after the
    //    live-reload prefix was applied, so the override entry never
    //    carries the reload client.
    if let Some(page) = &env.single_page {
        config.entry = entries::single_page_entry(page, &paths.source_name());
    }
}

/// Write or print the encoded configuration.
pub fn emit(
    config: &BundlerConfig,
    format: EmitFormat,
    pretty: bool,
    out: Option<&Path>,
) -> Result<(), ResolveError> {
    let encoded = match format {
        EmitFormat::Json => config.to_json_string(pretty)?,
        EmitFormat::Toml => config.to_toml_string()?,
    };

    match out {
        Some(path) => {
            fs::write(path, &encoded)
                .map_err(|err| ResolveError::Io(path.to_path_buf(), err))?;
            log!("resolve"; "wrote {}", path.display());
        }
        None => println!("{encoded}"),
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
