// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage audit of non-default catalogs against the default one.
//!
//! Gaps are expected (the partial catalogs lean on fallback) so they are
//! reported, never treated as failures.

use super::catalog::Catalog;
use super::lang::Lang;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub lang: Lang,
    /// Leaf paths present in the default catalog.
    pub total: usize,
    /// Leaf paths of the default catalog this language lacks.
    pub missing: Vec<String>,
}

impl CoverageReport {
    pub fn covered(&self) -> usize {
        self.total - self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.covered() as f64 * 100.0 / self.total as f64
    }
}

/// Audit a single language.
pub fn audit_language(catalog: &Catalog, lang: Lang) -> CoverageReport {
    let reference = catalog.tree(Lang::DEFAULT).leaf_paths();
    let tree = catalog.tree(lang);
    let missing = reference
        .iter()
        .filter(|path| tree.at_path(path).is_none())
        .cloned()
        .collect();
    CoverageReport {
        lang,
        total: reference.len(),
        missing,
    }
}

/// Audit every non-default language, in switcher order.
pub fn audit(catalog: &Catalog) -> Vec<CoverageReport> {
    Lang::all()
        .iter()
        .filter(|lang| !lang.is_default())
        .map(|lang| audit_language(catalog, *lang))
        .collect()
}
