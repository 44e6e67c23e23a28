//! siteindex CLI - regenerates the site's JSON manifests
//!
//! Each subcommand is one independent generator. Running without a
//! subcommand runs all of them in sequence.

use clap::{Parser, Subcommand};
use colored::Colorize;
use siteindex_core::config::GITHUB_USER;
use siteindex_core::SiteLayout;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "siteindex")]
#[command(author = "siteindex Contributors")]
#[command(version)]
#[command(about = "Regenerates the static site's JSON manifests", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Root of the site checkout
    #[arg(long, global = true, default_value = ".")]
    site_root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the file browser and its friend sub-sites
    Filesystem,

    /// Catalog the public library
    Library,

    /// List the gallery projects
    Gallery,

    /// Fetch repository metadata from GitHub
    Repos {
        /// GitHub account to list
        #[arg(short, long, default_value = GITHUB_USER)]
        user: String,
    },

    /// Run every generator (the default)
    All {
        /// GitHub account to list
        #[arg(short, long, default_value = GITHUB_USER)]
        user: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let layout = SiteLayout::new(cli.site_root);

    let result = match cli.command {
        Some(Commands::Filesystem) => commands::filesystem(&layout),
        Some(Commands::Library) => commands::library(&layout),
        Some(Commands::Gallery) => commands::gallery(&layout),
        Some(Commands::Repos { user }) => commands::repos(&layout, &user),
        Some(Commands::All { user }) => commands::all(&layout, &user),
        None => commands::all(&layout, GITHUB_USER),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
