// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog tree nodes.
//!
//! A translation tree is a nested mapping of segment names to either further
//! mappings or values. Values are text, numbers, booleans, or ordered
//! sequences (used for pricing packages, testimonials, FAQ entries and
//! similar record lists). Sequences are addressable by decimal index, so
//! `pricing.packages.1.name` walks into the second package.
//!
//! An explicit null (`key: ~`) is kept in the tree but reads as absent, so
//! only that key falls back and its siblings still resolve.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Node>),
    Map(BTreeMap<String, Node>),
}

impl Node {
    pub fn empty() -> Self {
        Node::Map(BTreeMap::new())
    }

    /// Step one segment down. Only mappings and sequences are traversable;
    /// every other shape yields `None`, as does a null child.
    pub fn child(&self, segment: &str) -> Option<&Node> {
        let found = match self {
            Node::Map(entries) => entries.get(segment),
            Node::List(items) => parse_index(segment).and_then(|index| items.get(index)),
            _ => None,
        };
        found.filter(|node| !node.is_null())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Walk a dotted key path from this node.
    pub fn at_path(&self, key_path: &str) -> Option<&Node> {
        key_path
            .split('.')
            .try_fold(self, |node, segment| node.child(segment))
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Node::List(_) | Node::Map(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Layer `other` on top of `self`. Mappings merge key by key; any other
    /// combination replaces the existing node wholesale.
    pub fn merge(&mut self, other: Node) {
        match (self, other) {
            (Node::Map(base), Node::Map(overlay)) => {
                for (key, value) in overlay {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (slot, other) => *slot = other,
        }
    }

    /// Dotted paths of every non-mapping node below this one. Sequences are
    /// reported as a single path rather than per element; nulls are skipped.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, &mut String::new(), &mut paths);
        paths
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => Ok(()),
            Node::Bool(value) => write!(f, "{}", value),
            Node::Int(value) => write!(f, "{}", value),
            Node::Float(value) => write!(f, "{}", value),
            Node::Text(value) => f.write_str(value),
            Node::List(items) => write!(f, "[{} items]", items.len()),
            Node::Map(entries) => write!(f, "{{{} keys}}", entries.len()),
        }
    }
}

// Indices must be canonical decimal: "1" addresses an element, "01" and "+1" do not.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

fn collect_leaf_paths(node: &Node, prefix: &mut String, out: &mut Vec<String>) {
    match node {
        Node::Map(entries) => {
            for (key, child) in entries {
                let restore = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(key);
                collect_leaf_paths(child, prefix, out);
                prefix.truncate(restore);
            }
        }
        Node::Null => {}
        _ => {
            if !prefix.is_empty() {
                out.push(prefix.clone());
            }
        }
    }
}
