use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// assetrev - fingerprint built assets and write an SRI manifest
#[derive(Parser, Debug)]
#[command(name = "assetrev")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: assetrev.toml in the project root)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fingerprint the output tree and write the manifest
    Rev {
        /// Output tree to revision (overrides `output.root`)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Keep fingerprinted files left over from previous passes
        #[arg(long)]
        no_prune: bool,
    },

    /// Check the manifest against the files on disk
    Verify {
        /// Output tree holding the manifest (overrides `output.root`)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}
