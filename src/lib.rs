// SPDX-License-Identifier: PMPL-1.0-or-later

//! FleetEase i18n: localized content for the FleetEase car-rental platform.
//!
//! The crate holds the landing-site translation catalog and the machinery
//! around it:
//! 1. **i18n**: the per-language content trees, a total key-path resolver
//!    that falls back to Turkish and then to the key itself, and the
//!    persisted active-language state.
//! 2. **content**: typed pricing, testimonial, FAQ and feature records.
//! 3. **admin**: back-office status lifecycles and their localized labels.

pub mod admin;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod i18n;
pub mod storage;
