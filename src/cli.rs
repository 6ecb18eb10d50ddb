//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap. The three
//! environment toggles can each be overridden from the command line; a flag
//! that is not given leaves the environment value in charge.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Packwright configuration resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory (relative to project root)
    #[arg(short, long, default_value = "src")]
    pub source: PathBuf,

    /// Manifest file name (default: package.json)
    #[arg(short = 'C', long, default_value = "package.json")]
    pub manifest: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the environment toggles
#[derive(clap::Args, Debug, Clone)]
pub struct EnvArgs {
    /// Resolve in development mode (overrides DEV)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub dev: Option<bool>,

    /// Inject the live-reload client into every entry (overrides LIVELOAD)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub liveload: Option<bool>,

    /// Resolve only the named page (overrides SINGLE_PAGE)
    #[arg(long)]
    pub single_page: Option<String>,
}

/// Encoding of the emitted configuration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitFormat {
    #[default]
    Json,
    Toml,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the bundler configuration and emit it
    Resolve {
        #[command(flatten)]
        env_args: EnvArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = EmitFormat::Json)]
        format: EmitFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List discovered page entry points
    Entries,

    /// Validate the project layout and report the resolved theme
    Check,
}

#[allow(unused)]
impl Cli {
    pub const fn is_resolve(&self) -> bool {
        matches!(self.command, Commands::Resolve { .. })
    }
    pub const fn is_entries(&self) -> bool {
        matches!(self.command, Commands::Entries)
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}
