use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bundlegen")]
#[command(about = "Inspect bundle categories and catalogs")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.bundlegen)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every bundle category in declaration order
    Categories {
        /// Also print display labels
        #[arg(short, long)]
        labels: bool,
    },

    /// Validate category names (exact, case-sensitive)
    Check {
        /// Category names (e.g., DATABASES WEB_SERVICES)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List bundles in the catalog
    List {
        /// Bundle root (default: catalog.root from config)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Only bundles tagged with this category
        #[arg(short, long)]
        category: Option<String>,

        /// Include bundles in hidden categories
        #[arg(short, long)]
        all: bool,
    },

    /// Show metadata of a single bundle
    Show {
        /// Bundle id
        id: String,

        /// Bundle root (default: catalog.root from config)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Count bundles per category
    Summary {
        /// Bundle root (default: catalog.root from config)
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., catalog.hidden)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., catalog.hidden)
        key: String,

        /// Value to set (e.g., "DEMO,BETA" or "[DEMO, BETA]")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}
