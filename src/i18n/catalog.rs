// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the FleetEase site.
//!
//! Content is authored as one YAML tree per language under `locales/` and
//! embedded at compile time. The catalog is built once at startup and is
//! immutable afterwards; share it behind an `Arc`.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] and its arms in `code()`, `from_code()`,
//!    `name()` and `flag()`
//! 2. Create `locales/xx.yaml`
//! 3. Add it to `EMBEDDED` below
//!
//! ## Adding a new key
//!
//! 1. Add the Turkish entry to `tr.yaml`
//! 2. Add translations to the other files (missing keys fall back to Turkish)

use super::lang::Lang;
use super::node::Node;
use super::resolver::Resolved;
use anyhow::{anyhow, Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const EMBEDDED: &[(Lang, &str)] = &[
    (Lang::Tr, include_str!("../../locales/tr.yaml")),
    (Lang::En, include_str!("../../locales/en.yaml")),
    (Lang::De, include_str!("../../locales/de.yaml")),
    (Lang::Fr, include_str!("../../locales/fr.yaml")),
    (Lang::Ru, include_str!("../../locales/ru.yaml")),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    trees: HashMap<Lang, Node>,
}

impl Catalog {
    /// Build the catalog from the YAML assets compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_sources(EMBEDDED.iter().copied())
    }

    /// Build a catalog from `(language, yaml)` pairs.
    ///
    /// A non-default language whose source does not parse into a mapping is
    /// replaced by an empty tree and every lookup for it falls back. The
    /// default language has no such fallback, so its failure is an error.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Lang, &'a str)>,
    {
        let mut trees = HashMap::new();
        for (lang, source) in sources {
            match parse_tree(source) {
                Ok(tree) => {
                    trees.insert(lang, tree);
                }
                Err(err) if lang.is_default() => {
                    return Err(err.context(format!("parsing default catalog '{}'", lang)));
                }
                Err(err) => {
                    warn!(lang = %lang, error = %err, "ignoring malformed catalog");
                    trees.insert(lang, Node::empty());
                }
            }
        }

        if !trees.contains_key(&Lang::DEFAULT) {
            return Err(anyhow!(
                "catalog has no entry for default language '{}'",
                Lang::DEFAULT
            ));
        }
        for lang in Lang::all() {
            trees.entry(*lang).or_insert_with(Node::empty);
        }

        Ok(Self { trees })
    }

    /// Layer override files from `dir` over the current trees.
    ///
    /// Files are named by language code (`en.yaml`, `en.yml`, `en.json`).
    /// Files for unsupported languages, unknown extensions and files that
    /// fail to parse are skipped with a warning. A missing directory is not
    /// an error.
    pub fn with_overrides(mut self, dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "no locale override directory");
            return Ok(self);
        }

        let mut entries: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("reading locale overrides {}", dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        entries.sort();

        for path in entries {
            let Some(lang) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(Lang::from_code)
            else {
                warn!(path = %path.display(), "override file does not name a supported language");
                continue;
            };
            match load_override(&path) {
                Ok(overlay) => {
                    debug!(lang = %lang, path = %path.display(), "applying locale override");
                    self.trees.entry(lang).or_insert_with(Node::empty).merge(overlay);
                }
                Err(err) => warn!(path = %path.display(), error = %err, "skipping locale override"),
            }
        }

        Ok(self)
    }

    /// The tree for `lang`. Every supported language has one, possibly empty.
    pub fn tree(&self, lang: Lang) -> &Node {
        self.trees.get(&lang).unwrap_or(&EMPTY)
    }

    /// Resolve `key_path` for `lang`, falling back to the default language
    /// and finally to the key path itself. Never fails.
    pub fn lookup<'a>(&'a self, lang: Lang, key_path: &'a str) -> Resolved<'a> {
        if let Some(node) = self.tree(lang).at_path(key_path) {
            return Resolved::Found { node, source: lang };
        }
        if lang != Lang::DEFAULT {
            if let Some(node) = self.tree(Lang::DEFAULT).at_path(key_path) {
                return Resolved::Found {
                    node,
                    source: Lang::DEFAULT,
                };
            }
        }
        Resolved::Missing(key_path)
    }
}

static EMPTY: Node = Node::Map(BTreeMap::new());

fn parse_tree(source: &str) -> Result<Node> {
    let tree: Node = serde_yaml::from_str(source).context("invalid catalog yaml")?;
    match tree {
        Node::Map(_) => Ok(tree),
        other => Err(anyhow!("catalog root must be a mapping, found {}", other)),
    }
}

fn load_override(path: &Path) -> Result<Node> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading locale override {}", path.display()))?;
    let tree: Node = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("parsing json locale override {}", path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("parsing yaml locale override {}", path.display()))?,
        _ => {
            return Err(anyhow!(
                "unsupported locale override extension for {}",
                path.display()
            ))
        }
    };
    match tree {
        Node::Map(_) => Ok(tree),
        other => Err(anyhow!("override root must be a mapping, found {}", other)),
    }
}
