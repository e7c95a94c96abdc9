//! # Folio CLI (`folio`)
//!
//! Inspect and export the content tree behind the portfolio site.
//!
//! ## Usage
//!
//! ```bash
//! folio --config ./config/folio.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio profile` | Print the profile from `myCV.json` |
//! | `folio list [websites\|apps]` | Table of loaded projects |
//! | `folio show <category> <slug>` | One project as JSON |
//! | `folio slugs` | Every addressable `<category>/<slug>` |
//! | `folio check` | Report content problems |
//! | `folio export [--output <path>]` | Write the catalog as JSON |

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use folio::analytics;
use folio::config::{self, Config};
use folio::export;
use folio::inspect;
use folio::models::Category;

/// Folio CLI: inspect and export portfolio content.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. When the file does not exist, defaults are used with the content
/// root at `./public`.
#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio: build-time content loader for a portfolio site",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/folio.toml")]
    config: PathBuf,

    /// Override `[content].root` from the config file.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the profile.
    Profile,

    /// List loaded projects.
    ///
    /// Without a category, websites are listed before apps.
    List {
        /// `websites` or `apps`.
        category: Option<Category>,
    },

    /// Print one project as JSON.
    Show {
        /// `websites` or `apps`.
        category: Category,
        /// Project slug from its `content.json`.
        slug: String,
    },

    /// Print every addressable `<category>/<slug>`.
    Slugs,

    /// Report folders without a usable descriptor, category mismatches,
    /// and projects without preview media.
    Check,

    /// Export profile and projects as JSON.
    Export {
        /// Output file. Falls back to `[export].output`, then stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let mut cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        debug!(path = %cli.config.display(), "config file not found, using defaults");
        Config::minimal()
    };
    if let Some(root) = cli.root {
        cfg.content.root = root;
    }
    debug!(root = %cfg.content.root.display(), "content root");

    let sink = analytics::sink_for(&cfg.analytics);

    match cli.command {
        Commands::Profile => inspect::run_profile(&cfg, sink.as_ref())?,
        Commands::List { category } => inspect::run_list(&cfg, category)?,
        Commands::Show { category, slug } => {
            inspect::run_show(&cfg, category, &slug, sink.as_ref())?
        }
        Commands::Slugs => inspect::run_slugs(&cfg)?,
        Commands::Check => inspect::run_check(&cfg)?,
        Commands::Export { output } => {
            let output = output.or_else(|| cfg.export.output.clone());
            export::run_export(&cfg, output.as_deref())?;
        }
    }

    Ok(())
}
