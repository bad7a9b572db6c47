// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key-path resolution with default-language fallback.
//!
//! Resolution is total: the requested language is tried first, then the
//! default language, and when both miss the key path itself is handed
//! back so there is always something to render. Presence is structural
//! (`Option`), so `""`, `0` and `false` are real values and never fall
//! through.

use super::catalog::Catalog;
use super::lang::Lang;
use super::node::Node;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::fmt;
use tracing::warn;

/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// The key resolved to a node, served by `source` (the requested
    /// language or the default).
    Found { node: &'a Node, source: Lang },
    /// Neither language has the key; carries the key path unchanged.
    Missing(&'a str),
}

impl<'a> Resolved<'a> {
    pub fn node(&self) -> Option<&'a Node> {
        match self {
            Resolved::Found { node, .. } => Some(node),
            Resolved::Missing(_) => None,
        }
    }

    pub fn source(&self) -> Option<Lang> {
        match self {
            Resolved::Found { source, .. } => Some(*source),
            Resolved::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing(_))
    }
}

impl fmt::Display for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Found { node, .. } => write!(f, "{}", node),
            Resolved::Missing(key) => f.write_str(key),
        }
    }
}

/// A resolver bound to one language.
///
/// Cheap to construct and `Copy`; hand one to each consumer that renders
/// text in the active language.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c Catalog,
    lang: Lang,
}

impl<'c> Resolver<'c> {
    pub fn new(catalog: &'c Catalog, lang: Lang) -> Self {
        Self { catalog, lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn lookup<'a>(&'a self, key_path: &'a str) -> Resolved<'a> {
        self.catalog.lookup(self.lang, key_path)
    }

    /// Resolve `key_path` to display text. Scalars render as text;
    /// structured values and misses render as the key path.
    pub fn text<'a>(&'a self, key_path: &'a str) -> Cow<'a, str> {
        match self.lookup(key_path) {
            Resolved::Found {
                node: Node::Text(text),
                ..
            } => Cow::Borrowed(text.as_str()),
            Resolved::Found { node, .. } if node.is_scalar() => Cow::Owned(node.to_string()),
            _ => Cow::Borrowed(key_path),
        }
    }

    /// Resolve a structured list into typed records. Misses and shape
    /// mismatches produce an empty list.
    pub fn records<T: DeserializeOwned>(&self, key_path: &str) -> Vec<T> {
        let Some(node) = self.lookup(key_path).node() else {
            return Vec::new();
        };
        match serde_json::to_value(node).and_then(serde_json::from_value) {
            Ok(records) => records,
            Err(err) => {
                warn!(lang = %self.lang, key = key_path, error = %err, "catalog records have an unexpected shape");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn catalog() -> Catalog {
        Catalog::from_sources([
            (
                Lang::Tr,
                r#"
title: "Başlık"
count: 0
blank: ""
visible: false
nested:
  deep:
    value: "derin"
items:
  - name: "bir"
  - name: "iki"
"#,
            ),
            (
                Lang::En,
                r#"
title: "Title"
count: 7
blank: ""
nested: "flattened"
"#,
            ),
        ])
        .unwrap()
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_own_language_wins() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::En);
        assert_eq!(resolver.text("title"), "Title");
        assert_eq!(resolver.lookup("title").source(), Some(Lang::En));
    }

    #[test]
    fn test_falls_back_to_default_language() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::En);
        assert_eq!(resolver.text("visible"), "false");
        assert_eq!(resolver.lookup("visible").source(), Some(Lang::Tr));
    }

    #[test]
    fn test_wrong_shape_falls_back_instead_of_failing() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::En);
        // "nested" is a string in en, so the walk cannot continue there
        assert_eq!(resolver.text("nested.deep.value"), "derin");
    }

    #[test]
    fn test_falsy_values_do_not_fall_back() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::En);
        assert_eq!(resolver.text("blank"), "");
        assert_eq!(resolver.lookup("blank").source(), Some(Lang::En));

        let default = Resolver::new(&catalog, Lang::Tr);
        assert_eq!(default.text("count"), "0");
    }

    #[test]
    fn test_total_miss_returns_key() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::Fr);
        let resolved = resolver.lookup("no.such.key");
        assert!(resolved.is_missing());
        assert_eq!(resolved.to_string(), "no.such.key");
        assert_eq!(resolver.text(""), "");
    }

    #[test]
    fn test_structured_values_render_as_key() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::Tr);
        assert_eq!(resolver.text("items"), "items");
        assert_eq!(resolver.text("nested"), "nested");
    }

    #[test]
    fn test_records_deserialize_lists() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::De);
        let items: Vec<Item> = resolver.records("items");
        assert_eq!(
            items,
            vec![
                Item { name: "bir".into() },
                Item { name: "iki".into() }
            ]
        );
    }

    #[test]
    fn test_records_shape_mismatch_is_empty() {
        let catalog = catalog();
        let resolver = Resolver::new(&catalog, Lang::Tr);
        let items: Vec<Item> = resolver.records("title");
        assert!(items.is_empty());
        let missing: Vec<Item> = resolver.records("absent");
        assert!(missing.is_empty());
    }
}
