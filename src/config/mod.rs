//! The emitted bundler configuration.
//!
//! # Sections
//!
//! | Section        | Purpose                                             |
//! |----------------|-----------------------------------------------------|
//! | `entry`        | Discovered page entry points                        |
//! | `output`       | Bundle paths and naming templates                   |
//! | `resolve`      | Extensions and source-tree aliases                  |
//! | `module`       | Transformation rules for scripts and stylesheets    |
//! | `externals`    | Runtime libraries mapped to globals                 |
//! | `plugins`      | Worker pools, CSS extraction, definitions, ...      |
//! | `optimization` | Shared vendor chunk splitting                       |
//! | `devServer`    | Development file server (development mode only)     |
//!
//! Everything here is a declarative description consumed by the external
//! bundler; packwright executes none of it.

pub mod defaults;
mod error;
mod optimization;
mod output;
mod plugins;
mod resolve;
mod rules;
mod serve;

// Re-export public types used by other modules
pub use error::ResolveError;
pub use optimization::OptimizationConfig;
pub use output::{Devtool, OutputConfig};
pub use plugins::PluginSpec;
pub use resolve::ResolutionConfig;
pub use rules::{LoaderSpec, ModuleConfig, ModuleRule, UseEntry};
pub use serve::DevServerConfig;

use crate::{entries::EntryMap, env::{BuildEnv, BuildMode}, paths::ProjectPaths};
use serde::Serialize;
use std::{collections::BTreeMap, path::PathBuf};

/// Root configuration object handed to the external bundler.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    /// Build mode the bundler should run in.
    pub mode: BuildMode,

    /// Directory entry module paths are relative to.
    pub context: PathBuf,

    /// Page key to ordered module list.
    pub entry: EntryMap,

    /// Bundle output paths and naming.
    pub output: OutputConfig,

    /// Module resolution: extensions and aliases.
    pub resolve: ResolutionConfig,

    /// Transformation rules.
    pub module: ModuleConfig,

    /// Externalized runtime dependencies.
    pub externals: BTreeMap<String, String>,

    /// Plugin descriptors.
    pub plugins: Vec<PluginSpec>,

    /// Code-splitting settings.
    pub optimization: OptimizationConfig,

    /// Development file server (development mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerConfig>,

    /// Source-map emission (development mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,
}

impl BundlerConfig {
    /// Assemble the mode-independent configuration.
    ///
    /// The worker pools are sized from the available processor count; the
    /// count is a parameter for the external loader runner, nothing here
    /// schedules work. Mode-dependent overrides are applied afterwards by
    /// the resolver.
    pub fn assemble(
        paths: &ProjectPaths,
        env: &BuildEnv,
        entry: EntryMap,
        style_stages: Vec<LoaderSpec>,
    ) -> Self {
        let threads = num_cpus::get();

        Self {
            mode: env.mode,
            context: paths.root.clone(),
            entry,
            output: OutputConfig::default(),
            resolve: ResolutionConfig::for_project(paths),
            module: ModuleConfig::conventional(),
            externals: defaults::externals(),
            plugins: vec![
                PluginSpec::script_pool(threads),
                PluginSpec::style_pool(threads, style_stages),
                PluginSpec::css_extract(),
                PluginSpec::NoEmitOnErrors,
                PluginSpec::Progress,
                PluginSpec::define(env.mode),
            ],
            optimization: OptimizationConfig::default(),
            dev_server: None,
            devtool: None,
        }
    }

    /// Encode as JSON, optionally pretty-printed.
    pub fn to_json_string(&self, pretty: bool) -> Result<String, ResolveError> {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(encoded)
    }

    /// Encode as TOML.
    pub fn to_toml_string(&self) -> Result<String, ResolveError> {
        Ok(toml::to_string(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
