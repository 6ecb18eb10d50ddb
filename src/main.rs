//! Packwright - build configuration resolver for multi-page web bundles.

mod check;
mod cli;
mod config;
mod entries;
mod env;
mod logger;
mod manifest;
mod paths;
mod pipeline;
mod resolver;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, EnvArgs};
use env::BuildEnv;
use paths::ProjectPaths;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let paths = ProjectPaths::from_cli(cli);

    match &cli.command {
        Commands::Resolve {
            env_args,
            format,
            pretty,
            out,
        } => {
            let config = resolver::resolve(&paths, &build_env(env_args))?;
            resolver::emit(&config, *format, *pretty, out.as_deref())?;
            Ok(())
        }
        Commands::Entries => Ok(entries::list(&paths)?),
        Commands::Check => check::check_project(&paths),
    }
}

/// Environment toggles with CLI overrides applied.
///
/// The environment is read once here; resolution itself never touches
/// process-wide state.
fn build_env(args: &EnvArgs) -> BuildEnv {
    let mut env = BuildEnv::from_env();
    env.update_with_cli(args);
    env
}
