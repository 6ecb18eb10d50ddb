//! Module transformation rules of the emitted configuration.
//!
//! Script files are routed through the parallel transpile pool; stylesheet
//! files go through CSS extraction and the parallel stylesheet pool. The
//! pools themselves (and the stylesheet pipeline they carry) are declared in
//! the plugin section.

use super::plugins::{POOL_SCRIPTS, POOL_STYLES, WORKER_POOL_LOADER};
use serde::Serialize;
use serde_json::{Value, json};

/// File-name pattern matched by the script rule.
pub const SCRIPT_TEST: &str = r"\.jsx?$";
/// File-name pattern matched by the stylesheet rule.
pub const STYLE_TEST: &str = r"\.scss$";
/// Loader extracting compiled CSS into standalone bundle files.
pub const CSS_EXTRACT_LOADER: &str = "css-extract/loader";

/// One loader reference with its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderSpec {
    pub loader: String,

    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl LoaderSpec {
    /// A loader without options.
    #[allow(unused)]
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    /// A loader with a JSON options object.
    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

/// One element of a rule's `use` chain: a bare loader reference or a full
/// loader spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UseEntry {
    Loader(String),
    Spec(LoaderSpec),
}

/// One transformation rule: which files, which loaders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRule {
    /// File-name pattern this rule applies to.
    pub test: String,

    /// Pattern excluded from the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Ordered loader chain.
    #[serde(rename = "use")]
    pub use_: Vec<UseEntry>,
}

/// The module section: all transformation rules.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleConfig {
    pub rules: Vec<ModuleRule>,
}

impl ModuleConfig {
    /// The two conventional rules: scripts and stylesheets.
    pub fn conventional() -> Self {
        Self {
            rules: vec![script_rule(), style_rule()],
        }
    }
}

/// Scripts (excluding dependencies) go through the parallel transpile pool.
fn script_rule() -> ModuleRule {
    ModuleRule {
        test: SCRIPT_TEST.to_owned(),
        exclude: Some("node_modules".to_owned()),
        use_: vec![UseEntry::Spec(LoaderSpec::with_options(
            WORKER_POOL_LOADER,
            json!({ "id": POOL_SCRIPTS }),
        ))],
    }
}

/// Stylesheets are extracted, then compiled by the stylesheet pool.
fn style_rule() -> ModuleRule {
    ModuleRule {
        test: STYLE_TEST.to_owned(),
        exclude: None,
        use_: vec![
            UseEntry::Loader(CSS_EXTRACT_LOADER.to_owned()),
            UseEntry::Loader(format!("{WORKER_POOL_LOADER}?id={POOL_STYLES}")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_rules() {
        let module = ModuleConfig::conventional();

        assert_eq!(module.rules.len(), 2);
        assert_eq!(module.rules[0].test, SCRIPT_TEST);
        assert_eq!(module.rules[1].test, STYLE_TEST);
    }

    #[test]
    fn test_script_rule_excludes_dependencies() {
        let rule = script_rule();
        assert_eq!(rule.exclude.as_deref(), Some("node_modules"));
        assert_eq!(rule.use_.len(), 1);
    }

    #[test]
    fn test_style_rule_extracts_first() {
        let rule = style_rule();

        assert!(rule.exclude.is_none());
        assert_eq!(
            rule.use_[0],
            UseEntry::Loader(CSS_EXTRACT_LOADER.to_owned())
        );
        assert_eq!(
            rule.use_[1],
            UseEntry::Loader("worker-pool/loader?id=scss".to_owned())
        );
    }

    #[test]
    fn test_loader_spec_serialization_skips_null_options() {
        let bare = serde_json::to_value(LoaderSpec::new("sass-loader")).unwrap();
        assert_eq!(bare, serde_json::json!({ "loader": "sass-loader" }));

        let with = serde_json::to_value(LoaderSpec::with_options(
            "css-loader",
            json!({ "minimize": true }),
        ))
        .unwrap();
        assert_eq!(with["options"]["minimize"], serde_json::json!(true));
    }

    #[test]
    fn test_use_entry_untagged_serialization() {
        let rule = serde_json::to_value(style_rule()).unwrap();

        // Bare loaders serialize as plain strings
        assert_eq!(rule["use"][0], serde_json::json!("css-extract/loader"));
        // The rule's loader chain key is `use`
        assert!(rule.get("use_").is_none());
    }
}
