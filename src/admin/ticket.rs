// SPDX-License-Identifier: PMPL-1.0-or-later

//! Support tickets: status, priority and category vocabularies.

use crate::i18n::Resolver;
use serde::{Deserialize, Serialize};

/// Ticket status. Any status can be set directly from the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    WaitingCustomer,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::WaitingCustomer => "waiting_customer",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(TicketStatus::Open),
            "in_progress" => Some(TicketStatus::InProgress),
            "waiting_customer" => Some(TicketStatus::WaitingCustomer),
            "resolved" => Some(TicketStatus::Resolved),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }

    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or(TicketStatus::Open)
    }

    pub fn all() -> &'static [TicketStatus] {
        &[
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::WaitingCustomer,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }

    /// Closed tickets take no further replies.
    pub fn accepts_replies(&self) -> bool {
        *self != TicketStatus::Closed
    }

    pub fn label(&self, resolver: &Resolver<'_>) -> String {
        let key = format!("admin.ticket.status.{}", self.code());
        resolver.text(&key).into_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "low" => Some(TicketPriority::Low),
            "medium" => Some(TicketPriority::Medium),
            "high" => Some(TicketPriority::High),
            "urgent" => Some(TicketPriority::Urgent),
            _ => None,
        }
    }

    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or(TicketPriority::Medium)
    }

    pub fn all() -> &'static [TicketPriority] {
        &[
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
            TicketPriority::Urgent,
        ]
    }

    pub fn label(&self, resolver: &Resolver<'_>) -> String {
        let key = format!("admin.ticket.priority.{}", self.code());
        resolver.text(&key).into_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Billing,
    FeatureRequest,
    BugReport,
    General,
    Account,
}

impl TicketCategory {
    pub fn code(&self) -> &'static str {
        match self {
            TicketCategory::Technical => "technical",
            TicketCategory::Billing => "billing",
            TicketCategory::FeatureRequest => "feature_request",
            TicketCategory::BugReport => "bug_report",
            TicketCategory::General => "general",
            TicketCategory::Account => "account",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "technical" => Some(TicketCategory::Technical),
            "billing" => Some(TicketCategory::Billing),
            "feature_request" => Some(TicketCategory::FeatureRequest),
            "bug_report" => Some(TicketCategory::BugReport),
            "general" => Some(TicketCategory::General),
            "account" => Some(TicketCategory::Account),
            _ => None,
        }
    }

    pub fn all() -> &'static [TicketCategory] {
        &[
            TicketCategory::Technical,
            TicketCategory::Billing,
            TicketCategory::FeatureRequest,
            TicketCategory::BugReport,
            TicketCategory::General,
            TicketCategory::Account,
        ]
    }

    pub fn label(&self, resolver: &Resolver<'_>) -> String {
        let key = format!("admin.ticket.category.{}", self.code());
        resolver.text(&key).into_owned()
    }
}

/// Label for a category code as it arrives from the backend. Codes with no
/// known category are shown verbatim.
pub fn category_label(resolver: &Resolver<'_>, code: &str) -> String {
    match TicketCategory::from_code(code) {
        Some(category) => category.label(resolver),
        None => code.to_string(),
    }
}

/// Body of `POST /api/support/tickets/{id}/reply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyPayload {
    pub message: String,
}

impl ReplyPayload {
    /// `None` when the text is blank or the ticket no longer takes replies.
    pub fn for_ticket(text: &str, status: TicketStatus) -> Option<Self> {
        if text.trim().is_empty() || !status.accepts_replies() {
            return None;
        }
        Some(Self {
            message: text.to_string(),
        })
    }
}
