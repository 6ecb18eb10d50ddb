//! Plugin section of the emitted configuration.
//!
//! Declarative descriptors for the bundler's plugin instances. packwright
//! never runs any of these; the worker pools' thread count in particular is
//! a parameter handed to the external loader runner, sized from the
//! available processor count.

use super::defaults;
use crate::env::BuildMode;
use crate::config::rules::LoaderSpec;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Loader routing files into a worker pool.
pub const WORKER_POOL_LOADER: &str = "worker-pool/loader";
/// Pool id for script transpilation.
pub const POOL_SCRIPTS: &str = "js";
/// Pool id for stylesheet compilation.
pub const POOL_STYLES: &str = "scss";
/// Transpiler wrapped by the script pool.
pub const BABEL_LOADER: &str = "babel-loader";

/// One plugin instance in the emitted configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Thread-pool-backed loader runner hosting one loader chain.
    #[serde(rename_all = "camelCase")]
    WorkerPool {
        id: String,
        threads: usize,
        loaders: Vec<LoaderSpec>,
    },

    /// Extracts compiled CSS into standalone bundle files.
    #[serde(rename_all = "camelCase")]
    CssExtract {
        filename: String,
        chunk_filename: String,
    },

    /// Keeps broken output off disk when a compilation errors.
    NoEmitOnErrors,

    /// Build progress reporting.
    Progress,

    /// Compile-time constant definitions.
    Define { definitions: BTreeMap<String, Value> },

    /// Production-only CSS asset optimization (comment stripping,
    /// minification), restricted by asset name pattern.
    #[serde(rename_all = "camelCase")]
    CssOptimize {
        asset_pattern: String,
        discard_comments: bool,
    },
}

impl PluginSpec {
    /// The script transpile pool, with the transpiler cache enabled.
    pub fn script_pool(threads: usize) -> Self {
        Self::WorkerPool {
            id: POOL_SCRIPTS.to_owned(),
            threads,
            loaders: vec![LoaderSpec::with_options(
                BABEL_LOADER,
                json!({ "cacheDirectory": true }),
            )],
        }
    }

    /// The stylesheet pool carrying the assembled pipeline.
    pub fn style_pool(threads: usize, stages: Vec<LoaderSpec>) -> Self {
        Self::WorkerPool {
            id: POOL_STYLES.to_owned(),
            threads,
            loaders: stages,
        }
    }

    /// CSS extraction with the conventional bundle naming.
    pub fn css_extract() -> Self {
        Self::CssExtract {
            filename: defaults::plugins::css_filename(),
            chunk_filename: defaults::plugins::css_filename(),
        }
    }

    /// `NODE_ENV` and `__DEV__` definitions for the given mode.
    pub fn define(mode: BuildMode) -> Self {
        let definitions = [
            (
                "process.env.NODE_ENV".to_owned(),
                Value::String(mode.as_str().to_owned()),
            ),
            ("__DEV__".to_owned(), Value::Bool(mode.is_dev())),
        ]
        .into_iter()
        .collect();

        Self::Define { definitions }
    }

    /// The production CSS optimizer, restricted to compiled stylesheet
    /// bundles.
    pub fn css_optimize() -> Self {
        Self::CssOptimize {
            asset_pattern: defaults::plugins::css_asset_pattern(),
            discard_comments: true,
        }
    }

    /// `true` for the production CSS optimizer.
    #[allow(unused)]
    pub const fn is_css_optimize(&self) -> bool {
        matches!(self, Self::CssOptimize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_pool_wraps_transpiler() {
        let PluginSpec::WorkerPool { id, threads, loaders } = PluginSpec::script_pool(8) else {
            panic!("expected a worker pool");
        };

        assert_eq!(id, POOL_SCRIPTS);
        assert_eq!(threads, 8);
        assert_eq!(loaders.len(), 1);
        assert_eq!(loaders[0].loader, BABEL_LOADER);
        assert_eq!(loaders[0].options["cacheDirectory"], json!(true));
    }

    #[test]
    fn test_style_pool_carries_stages() {
        let stages = vec![LoaderSpec::new("sass-loader")];
        let PluginSpec::WorkerPool { id, loaders, .. } =
            PluginSpec::style_pool(4, stages) else {
            panic!("expected a worker pool");
        };

        assert_eq!(id, POOL_STYLES);
        assert_eq!(loaders[0].loader, "sass-loader");
    }

    #[test]
    fn test_css_extract_naming() {
        let PluginSpec::CssExtract { filename, chunk_filename } = PluginSpec::css_extract()
        else {
            panic!("expected css extraction");
        };

        assert_eq!(filename, "[name].bundle.css");
        assert_eq!(chunk_filename, "[name].bundle.css");
    }

    #[test]
    fn test_define_production() {
        let PluginSpec::Define { definitions } = PluginSpec::define(BuildMode::Production)
        else {
            panic!("expected definitions");
        };

        assert_eq!(
            definitions["process.env.NODE_ENV"],
            Value::String("production".into())
        );
        assert_eq!(definitions["__DEV__"], Value::Bool(false));
    }

    #[test]
    fn test_define_development() {
        let PluginSpec::Define { definitions } = PluginSpec::define(BuildMode::Development)
        else {
            panic!("expected definitions");
        };

        assert_eq!(
            definitions["process.env.NODE_ENV"],
            Value::String("development".into())
        );
        assert_eq!(definitions["__DEV__"], Value::Bool(true));
    }

    #[test]
    fn test_css_optimize_pattern() {
        let PluginSpec::CssOptimize { asset_pattern, discard_comments } =
            PluginSpec::css_optimize() else {
            panic!("expected css optimization");
        };

        assert_eq!(asset_pattern, r"\.bundle\.css$");
        assert!(discard_comments);
        assert!(PluginSpec::css_optimize().is_css_optimize());
        assert!(!PluginSpec::Progress.is_css_optimize());
    }

    #[test]
    fn test_plugin_tagged_serialization() {
        let value = serde_json::to_value(PluginSpec::css_optimize()).unwrap();

        assert_eq!(value["plugin"], json!("css-optimize"));
        assert_eq!(value["assetPattern"], json!(r"\.bundle\.css$"));
        assert_eq!(value["discardComments"], json!(true));

        let unit = serde_json::to_value(PluginSpec::NoEmitOnErrors).unwrap();
        assert_eq!(unit["plugin"], json!("no-emit-on-errors"));
    }
}
