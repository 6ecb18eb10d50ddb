//! Output section of the emitted configuration.
//!
//! Where bundles land and how they are named. The `[name]` placeholder is
//! substituted by the bundler with the entry key.

use super::defaults;
use educe::Educe;
use serde::Serialize;
use std::path::PathBuf;

/// Output paths and naming templates.
#[derive(Debug, Clone, Educe, Serialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Directory bundles are written to.
    #[educe(Default = defaults::output::path())]
    pub path: PathBuf,

    /// URL prefix bundles are served under.
    #[educe(Default = defaults::output::public_path())]
    pub public_path: String,

    /// Naming template for entry bundles.
    #[educe(Default = defaults::output::filename())]
    pub filename: String,

    /// Naming template for split chunks.
    #[educe(Default = defaults::output::chunk_filename())]
    pub chunk_filename: String,
}

/// Source-map style requested from the bundler.
///
/// Only attached in development mode; production builds emit no maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    InlineSourceMap,
}
