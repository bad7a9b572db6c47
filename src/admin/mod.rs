// SPDX-License-Identifier: PMPL-1.0-or-later

//! Superadmin back-office vocabulary.
//!
//! The back office talks to the backend REST API; this module owns only
//! what the screens decide locally: status lifecycles, their localized
//! labels, list filters and endpoint URLs, form checks done before a
//! call, and the refresh policy (a failed call yields a one-shot notice
//! and leaves the view as it was).

pub mod franchise;
pub mod ticket;

pub use franchise::{
    ConvertForm, ConvertRejection, FranchiseApplicationForm, FranchiseApplicationPayload,
    FranchiseStatus, NotePayload,
};
pub use ticket::{category_label, ReplyPayload, TicketCategory, TicketPriority, TicketStatus};

use crate::i18n::Resolver;
use anyhow::Result;
use std::fmt;
use tracing::warn;
use url::form_urlencoded;

/// Page size the list screens request.
pub const LIST_LIMIT: u32 = 100;

/// A list filter: everything, or one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Filter<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Only(value) => Some(value),
        }
    }
}

pub fn franchise_list_url(base_url: &str, status: Filter<FranchiseStatus>) -> String {
    let mut url = format!(
        "{}/api/superadmin/franchises?limit={}",
        base_url.trim_end_matches('/'),
        LIST_LIMIT
    );
    if let Some(status) = status.value() {
        url.push_str("&status=");
        url.push_str(status.code());
    }
    url
}

pub fn franchise_status_url(base_url: &str, id: &str, status: FranchiseStatus) -> String {
    format!(
        "{}/api/superadmin/franchises/{}/status?status={}",
        base_url.trim_end_matches('/'),
        id,
        status.code()
    )
}

pub fn franchise_detail_url(base_url: &str, id: &str) -> String {
    format!(
        "{}/api/superadmin/franchises/{}",
        base_url.trim_end_matches('/'),
        id
    )
}

pub fn franchise_notes_url(base_url: &str, id: &str) -> String {
    format!("{}/notes", franchise_detail_url(base_url, id))
}

/// Conversion endpoint. Domain and password travel in the query string,
/// form-encoded.
pub fn franchise_convert_url(base_url: &str, id: &str, form: &ConvertForm) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("domain", form.domain.trim())
        .append_pair("admin_password", &form.password)
        .finish();
    format!(
        "{}/convert-to-company?{}",
        franchise_detail_url(base_url, id),
        query
    )
}

pub fn franchise_apply_url(base_url: &str) -> String {
    format!("{}/api/public/franchise/apply", base_url.trim_end_matches('/'))
}

pub fn ticket_list_url(
    base_url: &str,
    status: Filter<TicketStatus>,
    priority: Filter<TicketPriority>,
) -> String {
    let mut url = format!(
        "{}/api/superadmin/tickets?limit={}",
        base_url.trim_end_matches('/'),
        LIST_LIMIT
    );
    if let Some(status) = status.value() {
        url.push_str("&status=");
        url.push_str(status.code());
    }
    if let Some(priority) = priority.value() {
        url.push_str("&priority=");
        url.push_str(priority.code());
    }
    url
}

pub fn ticket_status_url(base_url: &str, id: &str, status: TicketStatus) -> String {
    format!(
        "{}/api/superadmin/tickets/{}/status?status={}",
        base_url.trim_end_matches('/'),
        id,
        status.code()
    )
}

pub fn ticket_detail_url(base_url: &str, id: &str) -> String {
    format!(
        "{}/api/support/tickets/{}",
        base_url.trim_end_matches('/'),
        id
    )
}

pub fn ticket_reply_url(base_url: &str, id: &str) -> String {
    format!("{}/reply", ticket_detail_url(base_url, id))
}

/// Error text the backend attached to a failed call. When a failed outcome
/// carries one, it is shown instead of the localized fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDetail(pub String);

impl fmt::Display for BackendDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for BackendDetail {}

/// Transient message shown after a back-office call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn error(resolver: &Resolver<'_>, key: &str) -> Self {
        Notice::Error(resolver.text(key).into_owned())
    }

    pub fn success(resolver: &Resolver<'_>, key: &str) -> Self {
        Notice::Success(resolver.text(key).into_owned())
    }

    /// Outcome of a one-off action such as adding a note or sending a reply.
    pub fn for_action(
        outcome: Result<()>,
        resolver: &Resolver<'_>,
        success_key: &str,
        failure_key: &str,
    ) -> Self {
        match outcome {
            Ok(()) => Notice::success(resolver, success_key),
            Err(err) => {
                warn!(error = %err, "back-office action failed");
                Notice::error(resolver, failure_key)
            }
        }
    }

    /// Outcome of a conversion. The backend's own message is shown on
    /// success; on failure its detail wins over the localized fallback.
    pub fn for_conversion(outcome: Result<String>, resolver: &Resolver<'_>) -> Self {
        match outcome {
            Ok(message) => Notice::Success(message),
            Err(err) => {
                warn!(error = %err, "conversion failed");
                match err.downcast_ref::<BackendDetail>() {
                    Some(detail) => Notice::Error(detail.0.clone()),
                    None => Notice::error(resolver, "admin.notice.convertFailed"),
                }
            }
        }
    }

    pub fn for_rejection(rejection: ConvertRejection, resolver: &Resolver<'_>) -> Self {
        Notice::error(resolver, rejection.notice_key())
    }
}

/// Result of opening a detail view: the record, or the notice to show
/// while the view stays closed.
pub fn load_detail<T>(
    outcome: Result<T>,
    resolver: &Resolver<'_>,
    failure_key: &str,
) -> std::result::Result<T, Notice> {
    outcome.map_err(|err| {
        warn!(error = %err, "detail load failed");
        Notice::error(resolver, failure_key)
    })
}

/// In-memory contents of a list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    items: Vec<T>,
    loaded: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
        }
    }
}

impl<T> ListView<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Apply the outcome of a fetch. On failure the previous items stay in
    /// place and an error notice carrying the localized `failure_key` text
    /// is returned; no retry is attempted.
    pub fn refresh(
        &mut self,
        outcome: Result<Vec<T>>,
        resolver: &Resolver<'_>,
        failure_key: &str,
    ) -> Option<Notice> {
        match outcome {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                None
            }
            Err(err) => {
                warn!(error = %err, "list refresh failed, keeping previous items");
                Some(Notice::error(resolver, failure_key))
            }
        }
    }

    /// Apply a status update for the item matching `matches`. The item is
    /// only changed when the call succeeded.
    pub fn update_status<F, S>(
        &mut self,
        outcome: Result<()>,
        resolver: &Resolver<'_>,
        mut matches: F,
        set_status: S,
    ) -> Notice
    where
        F: FnMut(&T) -> bool,
        S: FnOnce(&mut T),
    {
        match outcome {
            Ok(()) => {
                if let Some(item) = self.items.iter_mut().find(|item| matches(item)) {
                    set_status(item);
                }
                Notice::success(resolver, "admin.notice.statusUpdated")
            }
            Err(err) => {
                warn!(error = %err, "status update failed");
                Notice::error(resolver, "admin.notice.statusUpdateFailed")
            }
        }
    }
}
