//! Default values for the emitted configuration.
//!
//! These functions back the `educe` defaults of the section structs.

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "build".into()
    }

    pub fn public_path() -> String {
        "build".into()
    }

    pub fn filename() -> String {
        "[name].js".into()
    }

    pub fn chunk_filename() -> String {
        "[name].js".into()
    }
}

// ============================================================================
// [resolve] Section Defaults
// ============================================================================

pub mod resolve {
    pub fn extensions() -> Vec<String> {
        vec![".js".into(), ".jsx".into()]
    }
}

// ============================================================================
// [externals] Defaults
// ============================================================================

/// Runtime libraries the bundler leaves out of every bundle, mapped to the
/// globals they are expected to live under.
pub fn externals() -> std::collections::BTreeMap<String, String> {
    [
        ("react", "React"),
        ("react-dom", "ReactDOM"),
        ("moment", "moment"),
    ]
    .into_iter()
    .map(|(package, global)| (package.to_owned(), global.to_owned()))
    .collect()
}

// ============================================================================
// [optimization] Section Defaults
// ============================================================================

pub mod optimization {
    pub fn chunk_test() -> String {
        r"[\\/]node_modules[\\/]".into()
    }

    pub fn chunk_name() -> String {
        "vendor".into()
    }

    pub fn chunks() -> String {
        "all".into()
    }
}

// ============================================================================
// [devServer] Section Defaults
// ============================================================================

pub mod dev_server {
    use std::collections::BTreeMap;

    /// Permissive cross-origin headers for local development.
    pub fn headers() -> BTreeMap<String, String> {
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Credentials", "true"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
    }
}

// ============================================================================
// [plugins] Defaults
// ============================================================================

pub mod plugins {
    /// Compiled stylesheet bundle name template.
    pub fn css_filename() -> String {
        "[name].bundle.css".into()
    }

    /// Name pattern the production CSS optimizer is restricted to.
    pub fn css_asset_pattern() -> String {
        r"\.bundle\.css$".into()
    }
}
