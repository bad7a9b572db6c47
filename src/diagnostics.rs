// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics for a FleetEase i18n deployment.

use crate::config::{Config, BACKEND_URL_ENV};
use crate::i18n::coverage;
use crate::i18n::{Catalog, Lang, PREFERENCE_KEY};
use crate::storage::{FileStore, PreferenceStore};
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::Path;

pub fn run_self_diagnostics(config: &Config, catalog: &Catalog) -> Result<()> {
    println!("fleetease self-diagnostics");

    let checks = collect_checks(config, catalog);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect_checks(config: &Config, catalog: &Catalog) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("fleetease {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(Diagnostic::ok(
        "default catalog",
        format!(
            "{} keys in '{}'",
            catalog.tree(Lang::DEFAULT).leaf_paths().len(),
            Lang::DEFAULT
        ),
    ));

    for report in coverage::audit(catalog) {
        let label = "catalog coverage";
        if report.is_complete() {
            checks.push(Diagnostic::ok(
                label,
                format!("{}: complete ({} keys)", report.lang, report.total),
            ));
        } else {
            checks.push(Diagnostic::warning(
                label,
                format!(
                    "{}: {}/{} keys ({:.0}%), rest falls back to '{}'",
                    report.lang,
                    report.covered(),
                    report.total,
                    report.percent(),
                    Lang::DEFAULT
                ),
            ));
        }
    }

    checks.push(check_preferences(&config.preferences_path()));
    checks.push(check_locales_dir(&config.locales_dir()));
    checks.push(check_backend(config));
    checks
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug)]
struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> colored::ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

fn check_preferences(path: &Path) -> Diagnostic {
    let label = "language preference";
    if !path.exists() {
        return Diagnostic::warning(
            label,
            format!(
                "{} not written yet ('{}' active)",
                path.display(),
                Lang::DEFAULT
            ),
        );
    }

    match FileStore::new(path).load(PREFERENCE_KEY) {
        Ok(Some(code)) => match Lang::from_code(&code) {
            Some(lang) => Diagnostic::ok(label, format!("{} ({})", lang, lang.name())),
            None => Diagnostic::warning(
                label,
                format!("stored code '{}' is not supported, default applies", code),
            ),
        },
        Ok(None) => Diagnostic::warning(
            label,
            format!("no '{}' entry in {}", PREFERENCE_KEY, path.display()),
        ),
        Err(err) => Diagnostic::error(label, format!("{:#}", err)),
    }
}

fn check_locales_dir(path: &Path) -> Diagnostic {
    let label = "locale overrides";
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::warning(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::warning(label, format!("{} missing (embedded catalog only)", path.display()))
    }
}

fn check_backend(config: &Config) -> Diagnostic {
    let url = config.backend_url();
    if url.is_empty() {
        Diagnostic::warning(
            "backend url",
            format!("not configured (set backend_url or {})", BACKEND_URL_ENV),
        )
    } else {
        Diagnostic::ok("backend url", url)
    }
}
