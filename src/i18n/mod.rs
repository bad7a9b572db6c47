// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation core for the FleetEase site.
//!
//! ## Supported languages
//!
//! | Code | Native name | Coverage |
//! |------|-------------|----------|
//! | tr   | Türkçe      | full (default) |
//! | en   | English     | full     |
//! | de   | Deutsch     | partial  |
//! | fr   | Français    | partial  |
//! | ru   | Русский     | partial  |
//!
//! ## Design
//!
//! Translation keys are dotted paths into a nested tree: `"hero.title"`,
//! `"pricing.packages.1.name"`. Lookups fall back to Turkish when a key is
//! missing in the requested language. If Turkish lacks it too, the key
//! string itself is returned (never panics, never errors).
//!
//! ```
//! use fleetease_i18n::i18n::{Catalog, Lang, Resolver};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let en = Resolver::new(&catalog, Lang::En);
//! assert_eq!(en.text("pricing.packages.1.name"), "Professional");
//!
//! let de = Resolver::new(&catalog, Lang::De);
//! assert_eq!(de.text("testimonials.title"), "Müşterilerimiz Ne Diyor?");
//! ```

mod catalog;
pub mod coverage;
mod lang;
mod node;
mod resolver;
mod selection;

pub use catalog::Catalog;
pub use lang::Lang;
pub use node::Node;
pub use resolver::{Resolved, Resolver};
pub use selection::{LanguageState, Selection, PREFERENCE_KEY};
