//! Development file-server section of the emitted configuration.
//!
//! Only attached in development mode. The server itself is run by the
//! bundler; this section just shapes it: permissive cross-origin headers
//! and reduced console verbosity.

use super::defaults;
use educe::Educe;
use serde::Serialize;
use std::collections::BTreeMap;

/// Development server settings.
#[derive(Debug, Clone, Educe, Serialize)]
#[educe(Default)]
pub struct DevServerConfig {
    /// Response headers added to every served asset.
    #[educe(Default = defaults::dev_server::headers())]
    pub headers: BTreeMap<String, String>,

    /// Console output reduction.
    pub stats: StatsConfig,
}

/// Which per-chunk details the dev server prints. Everything off keeps the
/// console output short.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsConfig {
    pub chunks: bool,
    pub children: bool,
    pub modules: bool,
    pub chunk_modules: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_headers_default() {
        let server = DevServerConfig::default();

        assert_eq!(server.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(server.headers["Access-Control-Allow-Credentials"], "true");
    }

    #[test]
    fn test_stats_all_quiet() {
        let stats = StatsConfig::default();

        assert!(!stats.chunks);
        assert!(!stats.children);
        assert!(!stats.modules);
        assert!(!stats.chunk_modules);
    }

    #[test]
    fn test_stats_serializes_camel_case() {
        let value = serde_json::to_value(DevServerConfig::default()).unwrap();
        assert_eq!(value["stats"]["chunkModules"], serde_json::json!(false));
    }
}
