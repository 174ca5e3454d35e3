//! toolfit CLI: toolchain compatibility and build environment checks.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use toolfit_toolchain::ToolchainRecord;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use manifest::ToolfitManifest;

#[derive(Parser)]
#[command(
    name = "toolfit",
    version,
    about = "Match build toolchains to runtime versions and prepare build environments"
)]
struct Cli {
    /// Extra toolchain catalog (TOML with [[toolchain]] tables)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which toolchains support the configured runtime
    Check,
    /// Print the search path with the selected toolchain folded in
    Path {
        /// Search-path value to start from (default: the current PATH)
        #[arg(long)]
        current: Option<String>,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Print the variables a build process would receive
    Env {
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Parse version strings and print them in ascending order
    Parse {
        /// Version strings to parse
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print configuration and toolchain diagnostics
    Doctor,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = std::env::current_dir()
        .context("reading current directory")
        .and_then(|cwd| run(cli, &cwd));
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Library warnings are printed by the commands themselves, so the default
/// filter only lets errors through. `TOOLFIT_LOG` overrides it.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("TOOLFIT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli, cwd: &Path) -> anyhow::Result<()> {
    let catalog = cli.catalog.as_deref();
    match cli.command {
        Commands::Parse { versions } => commands::parse::run(&versions),
        Commands::Check => {
            let project = Project::load(cwd, catalog)?;
            commands::check::run(&project.manifest, &project.toolchains)
        }
        Commands::Path { current, format } => {
            let project = Project::load(cwd, catalog)?;
            commands::path::run(
                &project.manifest.build_settings(),
                &project.toolchains,
                current.as_deref(),
                format.as_deref(),
            )
        }
        Commands::Env { format } => {
            let project = Project::load(cwd, catalog)?;
            commands::env::run(
                &project.manifest.build_settings(),
                &project.toolchains,
                format.as_deref(),
            )
        }
        Commands::Doctor => {
            let project = Project::load(cwd, catalog)?;
            commands::doctor::run(&project.manifest, project.dir.as_deref(), &project.toolchains)
        }
    }
}

/// Resolved configuration for commands that need it.
struct Project {
    manifest: ToolfitManifest,
    /// Directory holding `toolfit.toml`, if one was found.
    dir: Option<PathBuf>,
    toolchains: Vec<ToolchainRecord>,
}

impl Project {
    /// Find the manifest above `cwd` (an absent manifest means defaults) and
    /// gather its toolchains plus any from `catalog`.
    fn load(cwd: &Path, catalog: Option<&Path>) -> anyhow::Result<Self> {
        let (manifest, dir) = match ToolfitManifest::find_and_load(cwd)? {
            Some((manifest, dir)) => (manifest, Some(dir)),
            None => (ToolfitManifest::default(), None),
        };
        let toolchains = collect_toolchains(&manifest, catalog)?;
        debug!(manifest_dir = ?dir, toolchains = toolchains.len(), "loaded configuration");
        Ok(Self {
            manifest,
            dir,
            toolchains,
        })
    }
}

/// Manifest toolchains first, then any from `--catalog`.
fn collect_toolchains(
    manifest: &ToolfitManifest,
    catalog: Option<&Path>,
) -> anyhow::Result<Vec<ToolchainRecord>> {
    let mut toolchains = manifest.toolchains.clone();
    if let Some(path) = catalog {
        let loaded = toolfit_toolchain::load_catalog_toml(path)
            .with_context(|| format!("loading catalog {}", path.display()))?;
        toolchains.extend(loaded.toolchains);
    }
    Ok(toolchains)
}
