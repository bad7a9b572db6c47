// SPDX-License-Identifier: PMPL-1.0-or-later

//! fleetease: inspect and drive the FleetEase translation catalog
//!
//! Resolves keys the way the site does, manages the persisted language
//! preference, and audits partial catalogs against the default language.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use fleetease_i18n::admin::{FranchiseStatus, TicketCategory, TicketPriority, TicketStatus};
use fleetease_i18n::config::Config;
use fleetease_i18n::diagnostics;
use fleetease_i18n::i18n::coverage;
use fleetease_i18n::i18n::{Catalog, Lang, LanguageState, Resolved, Resolver, Selection};
use fleetease_i18n::storage::FileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fleetease")]
#[command(version)]
#[command(about = "Translation catalog and language preference tooling for FleetEase")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a dotted key path
    Lookup {
        /// Key path, e.g. pricing.packages.1.name
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to resolve in (default: the active language)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// List supported languages
    Languages,

    /// Make a language active and persist the choice
    Select {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Show the active language
    Current,

    /// Report keys partial catalogs fall back on
    Coverage {
        /// Only this language
        #[arg(short, long)]
        lang: Option<String>,

        /// List every missing key
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a language's content tree
    Export {
        #[arg(short, long)]
        lang: Option<String>,

        #[arg(short, long, value_enum, default_value = "yaml")]
        format: ExportFormat,
    },

    /// Show back-office status labels
    Statuses {
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Run self-diagnostics
    Doctor,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::discover(cli.config.as_deref())?;
    let catalog = Arc::new(Catalog::embedded()?.with_overrides(&config.locales_dir())?);
    let mut state = LanguageState::new(
        Arc::clone(&catalog),
        FileStore::new(config.preferences_path()),
    );

    match cli.command {
        Commands::Lookup { key, lang } => {
            let lang = pick_lang(lang.as_deref(), state.active())?;
            let resolver = Resolver::new(&catalog, lang);
            match resolver.lookup(&key) {
                Resolved::Found { node, source } => {
                    if node.is_scalar() {
                        println!("{}", node);
                    } else {
                        println!("{}", serde_json::to_string_pretty(node)?);
                    }
                    if source != lang {
                        eprintln!(
                            "{}",
                            format!("(no '{}' entry, served from '{}')", lang, source).dimmed()
                        );
                    }
                }
                Resolved::Missing(key) => {
                    println!("{}", key);
                    eprintln!("{}", "(missing in every catalog)".yellow());
                }
            }
        }

        Commands::Languages => {
            let active = state.active();
            for lang in Lang::all() {
                let marker = if *lang == active { "*" } else { " " };
                let default = if lang.is_default() { " (default)" } else { "" };
                println!("{} {} {} {}{}", marker, lang.flag(), lang.code(), lang.name(), default);
            }
        }

        Commands::Select { code } => {
            if state.select(&code) {
                let lang = state.active();
                println!(
                    "{} {} {} ({})",
                    "Active language:".green(),
                    lang.flag(),
                    lang.name(),
                    lang.code()
                );
            } else {
                println!(
                    "{} '{}' is not supported; still {}",
                    "Ignored:".yellow(),
                    code,
                    state.active()
                );
            }
        }

        Commands::Current => {
            let lang = state.active();
            let how = match state.selection() {
                Selection::Default => "default",
                Selection::Explicit(_) => "selected",
            };
            println!("{} {} {} ({})", lang.flag(), lang.code(), lang.name(), how);
        }

        Commands::Coverage { lang, verbose } => {
            let reports = match lang {
                Some(code) => vec![coverage::audit_language(&catalog, parse_lang(&code)?)],
                None => coverage::audit(&catalog),
            };
            for report in &reports {
                let summary = format!(
                    "{} {:>4}/{} ({:.0}%)",
                    report.lang,
                    report.covered(),
                    report.total,
                    report.percent()
                );
                if report.is_complete() {
                    println!("{}", summary.green());
                } else {
                    println!("{}", summary.yellow());
                }
                if verbose {
                    for path in &report.missing {
                        println!("    - {}", path);
                    }
                }
            }
        }

        Commands::Export { lang, format } => {
            let lang = pick_lang(lang.as_deref(), state.active())?;
            let tree = catalog.tree(lang);
            match format {
                ExportFormat::Json => println!("{}", serde_json::to_string_pretty(tree)?),
                ExportFormat::Yaml => print!("{}", serde_yaml::to_string(tree)?),
            }
        }

        Commands::Statuses { lang } => {
            let lang = pick_lang(lang.as_deref(), state.active())?;
            let resolver = Resolver::new(&catalog, lang);

            println!("{}", "Franchise applications".bold());
            for status in FranchiseStatus::all() {
                let action = status
                    .action_label(&resolver)
                    .map(|label| format!("  -> {}", label))
                    .unwrap_or_default();
                println!("  {:14} {}{}", status.code(), status.label(&resolver), action);
            }

            println!("{}", "Support tickets".bold());
            for status in TicketStatus::all() {
                println!("  {:16} {}", status.code(), status.label(&resolver));
            }
            for priority in TicketPriority::all() {
                println!("  {:16} {}", priority.code(), priority.label(&resolver));
            }
            for category in TicketCategory::all() {
                println!("  {:16} {}", category.code(), category.label(&resolver));
            }
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(&config, &catalog)?;
        }
    }

    Ok(())
}

fn parse_lang(code: &str) -> Result<Lang> {
    Lang::from_code(code).ok_or_else(|| {
        let supported: Vec<&str> = Lang::all().iter().map(|lang| lang.code()).collect();
        anyhow!(
            "unsupported language '{}' (supported: {})",
            code,
            supported.join(", ")
        )
    })
}

fn pick_lang(requested: Option<&str>, active: Lang) -> Result<Lang> {
    requested.map(parse_lang).unwrap_or(Ok(active))
}
