// SPDX-License-Identifier: PMPL-1.0-or-later

//! Active-language state with a persisted preference.
//!
//! The state is constructed explicitly and passed to whoever renders text;
//! there is no process-wide instance. It starts in [`Selection::Default`]
//! unless the store holds a supported code, moves to
//! [`Selection::Explicit`] on the first selection, and writes every
//! selection through to the store immediately.

use super::catalog::Catalog;
use super::lang::Lang;
use super::resolver::Resolver;
use crate::storage::PreferenceStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed storage key for the language preference.
pub const PREFERENCE_KEY: &str = "fleetease_language";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No explicit choice recorded; the default language is active.
    Default,
    /// The user chose this language.
    Explicit(Lang),
}

impl Selection {
    pub fn lang(&self) -> Lang {
        match self {
            Selection::Default => Lang::DEFAULT,
            Selection::Explicit(lang) => *lang,
        }
    }
}

type Listener = Box<dyn FnMut(Lang)>;

pub struct LanguageState<S: PreferenceStore> {
    catalog: Arc<Catalog>,
    store: S,
    selection: Selection,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore> LanguageState<S> {
    /// Restore the selection from `store`. A missing, unsupported or
    /// unreadable preference leaves the default language active.
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        let selection = match store.load(PREFERENCE_KEY) {
            Ok(Some(code)) => match Lang::from_code(&code) {
                Some(lang) => Selection::Explicit(lang),
                None => {
                    warn!(code = %code, "stored language is not supported, using default");
                    Selection::Default
                }
            },
            Ok(None) => Selection::Default,
            Err(err) => {
                warn!(error = %err, "could not read language preference, using default");
                Selection::Default
            }
        };
        debug!(lang = %selection.lang(), "language state initialized");

        Self {
            catalog,
            store,
            selection,
            listeners: Vec::new(),
        }
    }

    pub fn active(&self) -> Lang {
        self.selection.lang()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Make `code` the active language and persist it.
    ///
    /// Unsupported codes are ignored: the active language and the store are
    /// left untouched and `false` is returned. A failed write is logged; the
    /// in-memory selection still changes.
    pub fn select(&mut self, code: &str) -> bool {
        match Lang::from_code(code) {
            Some(lang) => {
                self.select_lang(lang);
                true
            }
            None => {
                debug!(code, "ignoring unsupported language selection");
                false
            }
        }
    }

    pub fn select_lang(&mut self, lang: Lang) {
        let previous = self.active();
        self.selection = Selection::Explicit(lang);

        if let Err(err) = self.store.save(PREFERENCE_KEY, lang.code()) {
            warn!(lang = %lang, error = %err, "could not persist language preference");
        }

        if previous != lang {
            for listener in self.listeners.iter_mut() {
                listener(lang);
            }
        }
    }

    /// Register a callback run whenever the active language changes.
    pub fn subscribe(&mut self, listener: impl FnMut(Lang) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// A resolver bound to the active language.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.catalog, self.active())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::{anyhow, Result};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::embedded().unwrap())
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("disk on fire"))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("disk on fire"))
        }
    }

    #[test]
    fn test_starts_in_default_without_preference() {
        let state = LanguageState::new(catalog(), MemoryStore::new());
        assert_eq!(state.selection(), Selection::Default);
        assert_eq!(state.active(), Lang::Tr);
        assert!(state.store().is_empty(), "initialization must not write");
    }

    #[test]
    fn test_restores_stored_preference() {
        let mut store = MemoryStore::new();
        store.save(PREFERENCE_KEY, "fr").unwrap();
        let state = LanguageState::new(catalog(), store);
        assert_eq!(state.selection(), Selection::Explicit(Lang::Fr));
    }

    #[test]
    fn test_unsupported_stored_code_uses_default() {
        let mut store = MemoryStore::new();
        store.save(PREFERENCE_KEY, "xx").unwrap();
        let state = LanguageState::new(catalog(), store);
        assert_eq!(state.selection(), Selection::Default);
    }

    #[test]
    fn test_selection_persists_immediately() {
        let mut state = LanguageState::new(catalog(), MemoryStore::new());
        assert!(state.select("en"));
        assert_eq!(state.store().get(PREFERENCE_KEY), Some("en"));
        assert!(state.select("de"));
        assert_eq!(state.store().get(PREFERENCE_KEY), Some("de"));
        assert_eq!(state.selection(), Selection::Explicit(Lang::De));
    }

    #[test]
    fn test_selecting_default_is_still_explicit() {
        let mut state = LanguageState::new(catalog(), MemoryStore::new());
        assert!(state.select("tr"));
        assert_eq!(state.selection(), Selection::Explicit(Lang::Tr));
        assert_eq!(state.store().get(PREFERENCE_KEY), Some("tr"));
    }

    #[test]
    fn test_unsupported_selection_is_a_no_op() {
        let mut state = LanguageState::new(catalog(), MemoryStore::new());
        state.select("ru");
        assert!(!state.select("es"));
        assert_eq!(state.active(), Lang::Ru);
        assert_eq!(state.store().get(PREFERENCE_KEY), Some("ru"));
    }

    #[test]
    fn test_listeners_fire_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = LanguageState::new(catalog(), MemoryStore::new());
        let sink = Rc::clone(&seen);
        state.subscribe(move |lang| sink.borrow_mut().push(lang));

        state.select("tr");
        state.select("en");
        state.select("en");
        state.select("zz");

        assert_eq!(*seen.borrow(), vec![Lang::En]);
    }

    #[test]
    fn test_resolver_follows_active_language() {
        let mut state = LanguageState::new(catalog(), MemoryStore::new());
        assert_eq!(state.resolver().text("nav.login"), "Giriş Yap");
        state.select("en");
        assert_eq!(state.resolver().text("nav.login"), "Login");
    }

    #[test]
    fn test_broken_store_never_blocks_selection() {
        let mut state = LanguageState::new(catalog(), BrokenStore);
        assert_eq!(state.active(), Lang::Tr);
        assert!(state.select("ru"));
        assert_eq!(state.active(), Lang::Ru);
    }
}
