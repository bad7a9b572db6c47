// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported content languages.

use serde::{Deserialize, Serialize};

/// Languages the landing site and back office are authored in.
///
/// Turkish is the source language: its catalog is complete and every other
/// language falls back to it. German, French and Russian catalogs are
/// partial by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Tr,
    En,
    De,
    Fr,
    Ru,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::Tr;

    /// ISO 639-1 two-letter code, also the persisted preference value.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
            Lang::De => "de",
            Lang::Fr => "fr",
            Lang::Ru => "ru",
        }
    }

    /// Parse a language code. Returns `None` for unsupported codes.
    /// Case-sensitive, matching what the preference store holds.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "tr" => Some(Lang::Tr),
            "en" => Some(Lang::En),
            "de" => Some(Lang::De),
            "fr" => Some(Lang::Fr),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    /// All supported languages, in switcher order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Tr, Lang::En, Lang::De, Lang::Fr, Lang::Ru]
    }

    /// Native name shown in the language switcher.
    pub fn name(&self) -> &'static str {
        match self {
            Lang::Tr => "Türkçe",
            Lang::En => "English",
            Lang::De => "Deutsch",
            Lang::Fr => "Français",
            Lang::Ru => "Русский",
        }
    }

    /// Flag glyph shown next to the name.
    pub fn flag(&self) -> &'static str {
        match self {
            Lang::Tr => "🇹🇷",
            Lang::En => "🇬🇧",
            Lang::De => "🇩🇪",
            Lang::Fr => "🇫🇷",
            Lang::Ru => "🇷🇺",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Lang::DEFAULT
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::DEFAULT
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
