//! Stylesheet loader pipeline assembly.
//!
//! The pipeline is an ordered sequence of stage descriptors handed to the
//! external loader runner: syntax lowering, vendor prefixing, pre-processor
//! compilation, and optionally theme-variable injection. [`extend`] is a
//! pure function so the conditional construction stays independent of any
//! execution concern.

use crate::config::LoaderSpec;
use serde_json::json;

/// Syntax-lowering stage (resolves imports/urls, minimizes).
pub const CSS_LOADER: &str = "css-loader";
/// Vendor-prefixing stage.
pub const POSTCSS_LOADER: &str = "postcss-loader";
/// Pre-processor compilation stage.
pub const SASS_LOADER: &str = "sass-loader";
/// Theme-variable injection stage.
pub const THEME_LOADER: &str = "theme-loader";

/// Stylesheet file the theme package exposes its variables in.
pub const THEME_VARIABLES: &str = "variables.scss";

/// The fixed base pipeline, in application order.
pub fn base_stages() -> Vec<LoaderSpec> {
    vec![
        LoaderSpec::with_options(
            CSS_LOADER,
            json!({
                "minimize": true,
                "sourceMap": false,
            }),
        ),
        LoaderSpec::with_options(
            POSTCSS_LOADER,
            json!({
                "ident": "postcss",
                "plugins": ["autoprefixer"],
                "sourceMap": false,
            }),
        ),
        LoaderSpec::with_options(
            SASS_LOADER,
            json!({
                "sourceMap": false,
            }),
        ),
    ]
}

/// Append the theme-injection stage when a theme was resolved.
///
/// The theme stage must come last: it injects variables that every
/// preceding stage's compiled output has to see.
pub fn extend(mut stages: Vec<LoaderSpec>, theme: Option<&str>) -> Vec<LoaderSpec> {
    if let Some(theme) = theme {
        stages.push(LoaderSpec::with_options(
            THEME_LOADER,
            json!({
                "theme": theme,
            }),
        ));
    }
    stages
}

// ============================================================================
// Tests
// ============================================================================
