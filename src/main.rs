//! assetrev CLI - content-addressed asset revisioning
//!
//! Usage: assetrev <COMMAND>
//!
//! Commands:
//!   rev     Fingerprint the output tree and write the manifest
//!   verify  Check the manifest against the files on disk

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Rev {
            root,
            dry_run,
            no_prune,
        } => commands::rev::cmd_rev(config, root, dry_run, no_prune, cli.json),
        Commands::Verify { root } => commands::verify::cmd_verify(config, root, cli.json),
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` raises the level one step per flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
