use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use bundlegen_core::config::Config;
use bundlegen_core::{Bundle, BundlegenError, Catalog, Category, Result};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

/// Console output honoring --verbose / --quiet
#[derive(Clone, Copy)]
struct Ui {
    verbose: bool,
    quiet: bool,
}

impl Ui {
    fn info(&self, msg: impl AsRef<str>) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", "[INFO]".blue(), msg.as_ref());
        }
    }

    /// Headers and status lines; data lines always print
    fn status(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", msg.as_ref());
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = Ui {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let base_dir = resolve_base_dir(cli.base_dir);
    ui.info(format!("Base directory: {}", base_dir.display()));

    let result = match cli.command {
        Some(Commands::Categories { labels }) => {
            handle_categories(labels);
            Ok(())
        }
        Some(Commands::Check { names }) => handle_check(ui, &names),
        Some(Commands::List {
            root,
            category,
            all,
        }) => handle_list(ui, &base_dir, root, category.as_deref(), all),
        Some(Commands::Show { id, root }) => handle_show(ui, &base_dir, root, &id),
        Some(Commands::Summary { root }) => handle_summary(ui, &base_dir, root),
        Some(Commands::Config { action }) => handle_config(ui, action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "bundlegen", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("BUNDLEGEN_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".bundlegen"))
        .unwrap_or_else(|| PathBuf::from(".bundlegen"))
}

/// Load the catalog from --root, falling back to catalog.root in config
fn load_catalog(ui: Ui, config: &Config, root: Option<PathBuf>) -> Result<Catalog> {
    let root = root.unwrap_or_else(|| config.catalog.root.clone());
    ui.info(format!("Scanning bundles under {}", root.display()));
    let catalog = Catalog::load(&root)?;
    ui.info(format!(
        "Found {} bundle(s) in {}",
        catalog.len(),
        catalog.root().display()
    ));
    Ok(catalog)
}

fn handle_categories(labels: bool) {
    for category in Category::all() {
        if labels {
            println!("{:<22} {}", category.as_str().cyan(), category.label());
        } else {
            println!("{}", category);
        }
    }
}

fn handle_check(ui: Ui, names: &[String]) -> Result<()> {
    for name in names {
        let category: Category = name.parse()?;
        ui.status(format!("{} {}", "OK:".green(), category));
    }
    Ok(())
}

fn handle_list(
    ui: Ui,
    base_dir: &Path,
    root: Option<PathBuf>,
    category: Option<&str>,
    all: bool,
) -> Result<()> {
    let category = category.map(str::parse::<Category>).transpose()?;
    let config = Config::load(base_dir)?;
    let catalog = load_catalog(ui, &config, root)?;

    let hidden: &[Category] = if all { &[] } else { &config.catalog.hidden };
    let (bundles, hidden_count) = catalog.visible(category, hidden);

    if bundles.is_empty() {
        ui.status("No bundles found.");
    } else {
        ui.status("");
        for bundle in &bundles {
            print_bundle_line(bundle);
        }
        ui.status("");
    }

    if hidden_count > 0 {
        ui.status(format!(
            "{}",
            format!(
                "{} bundle(s) hidden by catalog.hidden (use --all)",
                hidden_count
            )
            .dimmed()
        ));
    }

    Ok(())
}

fn print_bundle_line(bundle: &Bundle) {
    let categories: Vec<_> = bundle.categories().iter().map(|c| c.as_str()).collect();
    let categories = if categories.is_empty() {
        "-".to_string()
    } else {
        categories.join(", ")
    };
    println!(
        "  {} {} {}",
        bundle.id().cyan().bold(),
        bundle.metadata.title,
        format!("[{}]", categories).dimmed()
    );
}

fn handle_show(ui: Ui, base_dir: &Path, root: Option<PathBuf>, id: &str) -> Result<()> {
    let config = Config::load(base_dir)?;
    let catalog = load_catalog(ui, &config, root)?;
    let bundle = catalog.require(id)?;
    let meta = &bundle.metadata;

    println!();
    println!("Bundle: {}", meta.id.cyan().bold());
    println!("Title: {}", meta.title);
    if let Some(vendor) = &meta.vendor {
        println!("Vendor: {}", vendor);
    }
    if let Some(version) = &meta.version {
        println!("Version: {}", version);
    }
    println!("Path: {}", bundle.path.display());
    if let Some(description) = &meta.description {
        println!();
        println!("{}", description);
    }
    println!();
    if let Some(primary) = meta.primary_category() {
        println!("Primary category: {}", primary.label());
    }
    println!("Categories:");
    if meta.categories.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for category in &meta.categories {
        println!("  {} {}", category.as_str().yellow(), category.label().dimmed());
    }
    println!();

    Ok(())
}

fn handle_summary(ui: Ui, base_dir: &Path, root: Option<PathBuf>) -> Result<()> {
    let config = Config::load(base_dir)?;
    let catalog = load_catalog(ui, &config, root)?;

    ui.status("");
    for (category, count) in catalog.counts() {
        let line = format!("{:<22} {:>4}", category.as_str(), count);
        if count == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }

    let uncategorized = catalog.uncategorized().len();
    if uncategorized > 0 {
        println!("{}", format!("{:<22} {:>4}", "(uncategorized)", uncategorized).yellow());
    }
    ui.status("");
    ui.status(format!("Total bundles: {}", catalog.len().to_string().bold()));

    Ok(())
}

fn handle_config(ui: Ui, action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(BundlegenError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            ui.status(format!("{} {} = {}", "Set:".green(), key, value));
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            ui.status("");
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            ui.status("");
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            ui.status(format!("{} {}", "Initialized:".green(), path.display()));
        }
    }

    Ok(())
}
