//! Optimization section of the emitted configuration.
//!
//! One fixed code-splitting rule: every module under `node_modules` goes
//! into a shared `vendor` chunk.

use super::defaults;
use educe::Educe;
use serde::Serialize;
use std::collections::BTreeMap;

/// Optimization settings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    pub split_chunks: SplitChunksConfig,
}

/// Code-splitting configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunksConfig {
    pub cache_groups: BTreeMap<String, CacheGroup>,
}

impl Default for SplitChunksConfig {
    fn default() -> Self {
        let mut cache_groups = BTreeMap::new();
        cache_groups.insert("commons".to_owned(), CacheGroup::default());
        Self { cache_groups }
    }
}

/// One cache group: which modules, which chunk.
#[derive(Debug, Clone, Educe, Serialize)]
#[educe(Default)]
pub struct CacheGroup {
    /// Module path pattern selecting members of the group.
    #[educe(Default = defaults::optimization::chunk_test())]
    pub test: String,

    /// Name of the produced chunk.
    #[educe(Default = defaults::optimization::chunk_name())]
    pub name: String,

    /// Which chunk kinds participate.
    #[educe(Default = defaults::optimization::chunks())]
    pub chunks: String,
}
