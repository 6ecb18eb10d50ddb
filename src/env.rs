//! Build environment resolution.
//!
//! The three environment toggles are read once at startup into an immutable
//! [`BuildEnv`], then passed by value into resolution. Nothing else in the
//! crate touches process-wide environment state.
//!
//! | Variable      | Effect                                              |
//! |---------------|-----------------------------------------------------|
//! | `DEV`         | truthy -> development mode, otherwise production    |
//! | `LIVELOAD`    | truthy and not `"0"` -> inject live-reload client   |
//! | `SINGLE_PAGE` | set -> resolve only the named page                  |

use crate::cli::EnvArgs;
use serde::Serialize;
use std::env;

/// `DEV` selects between development and production behavior.
pub const ENV_DEV: &str = "DEV";
/// `LIVELOAD` prefixes every entry with the live-reload client.
pub const ENV_LIVELOAD: &str = "LIVELOAD";
/// `SINGLE_PAGE` replaces the entry map with one named page.
pub const ENV_SINGLE_PAGE: &str = "SINGLE_PAGE";

/// Build mode, fixed for the duration of a resolution.
///
/// Influences output optimization, source-map emission and whether a
/// dev-server section is attached to the emitted configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

impl BuildMode {
    /// `true` in development mode.
    pub const fn is_dev(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    /// The mode string as the bundler expects it (`NODE_ENV` convention).
    pub const fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

/// Immutable snapshot of the environment toggles.
///
/// Resolved once (env vars first, CLI flags second) and passed by value into
/// [`crate::resolver::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    /// Development or production build.
    pub mode: BuildMode,

    /// Prefix every discovered entry with the live-reload client module.
    pub live_reload: bool,

    /// Resolve exactly one page instead of the whole `pages` tree.
    pub single_page: Option<String>,
}

impl BuildEnv {
    /// Read the three toggles from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(ENV_DEV).ok().as_deref(),
            env::var(ENV_LIVELOAD).ok().as_deref(),
            env::var(ENV_SINGLE_PAGE).ok().as_deref(),
        )
    }

    /// Build from raw variable values. Pure; used by `from_env` and tests.
    ///
    /// Truthiness follows the original conventions: any non-empty `DEV`
    /// selects development mode, while `LIVELOAD` additionally treats the
    /// literal `"0"` as disabled.
    pub fn from_vars(dev: Option<&str>, liveload: Option<&str>, single_page: Option<&str>) -> Self {
        let mode = if dev.is_some_and(|v| !v.is_empty()) {
            BuildMode::Development
        } else {
            BuildMode::Production
        };

        let live_reload = liveload.is_some_and(|v| !v.is_empty() && v != "0");

        let single_page = single_page
            .filter(|v| !v.is_empty())
            .map(ToOwned::to_owned);

        Self {
            mode,
            live_reload,
            single_page,
        }
    }

    /// Apply CLI overrides on top of the environment values.
    ///
    /// A flag that was not given leaves the environment value untouched.
    pub fn update_with_cli(&mut self, args: &EnvArgs) {
        if let Some(dev) = args.dev {
            self.mode = if dev {
                BuildMode::Development
            } else {
                BuildMode::Production
            };
        }
        if let Some(liveload) = args.liveload {
            self.live_reload = liveload;
        }
        if let Some(page) = &args.single_page {
            self.single_page = Some(page.clone());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
