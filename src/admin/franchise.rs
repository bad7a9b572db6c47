// SPDX-License-Identifier: PMPL-1.0-or-later

//! Franchise applications: status lifecycle and the public application form.

use crate::i18n::Resolver;
use serde::{Deserialize, Serialize};

/// Lifecycle of a franchise application.
///
/// The happy path is `application → under_review → approved → active`,
/// where the last step converts the franchisee into a tenant company.
/// `suspended` and `terminated` are set explicitly from the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FranchiseStatus {
    Application,
    UnderReview,
    Approved,
    Active,
    Suspended,
    Terminated,
}

impl FranchiseStatus {
    pub fn code(&self) -> &'static str {
        match self {
            FranchiseStatus::Application => "application",
            FranchiseStatus::UnderReview => "under_review",
            FranchiseStatus::Approved => "approved",
            FranchiseStatus::Active => "active",
            FranchiseStatus::Suspended => "suspended",
            FranchiseStatus::Terminated => "terminated",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "application" => Some(FranchiseStatus::Application),
            "under_review" => Some(FranchiseStatus::UnderReview),
            "approved" => Some(FranchiseStatus::Approved),
            "active" => Some(FranchiseStatus::Active),
            "suspended" => Some(FranchiseStatus::Suspended),
            "terminated" => Some(FranchiseStatus::Terminated),
            _ => None,
        }
    }

    /// Unknown wire values render as a fresh application.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or(FranchiseStatus::Application)
    }

    pub fn all() -> &'static [FranchiseStatus] {
        &[
            FranchiseStatus::Application,
            FranchiseStatus::UnderReview,
            FranchiseStatus::Approved,
            FranchiseStatus::Active,
            FranchiseStatus::Suspended,
            FranchiseStatus::Terminated,
        ]
    }

    /// The quick action offered in the list view, if any.
    pub fn next(&self) -> Option<FranchiseStatus> {
        match self {
            FranchiseStatus::Application => Some(FranchiseStatus::UnderReview),
            FranchiseStatus::UnderReview => Some(FranchiseStatus::Approved),
            FranchiseStatus::Approved => Some(FranchiseStatus::Active),
            _ => None,
        }
    }

    /// Only approved applications may be converted into a company.
    pub fn can_convert(&self) -> bool {
        *self == FranchiseStatus::Approved
    }

    pub fn is_final(&self) -> bool {
        *self == FranchiseStatus::Terminated
    }

    pub fn label(&self, resolver: &Resolver<'_>) -> String {
        let key = format!("admin.franchise.status.{}", self.code());
        resolver.text(&key).into_owned()
    }

    /// Label of the quick action that moves an application out of this
    /// status.
    pub fn action_label(&self, resolver: &Resolver<'_>) -> Option<String> {
        self.next().map(|next| {
            let key = format!("admin.franchise.action.{}", next.code());
            resolver.text(&key).into_owned()
        })
    }
}

impl std::fmt::Display for FranchiseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Raw values as typed into the public application form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub address: String,
    pub experience_years: String,
    pub current_vehicle_count: String,
    pub has_office: bool,
    pub investment_budget: String,
    pub message: String,
}

/// Body of `POST /api/public/franchise/apply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseApplicationPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub address: String,
    pub experience_years: i64,
    pub current_vehicle_count: i64,
    pub has_office: bool,
    pub investment_budget: String,
    pub message: String,
}

impl FranchiseApplicationForm {
    /// Names of required fields left blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let required = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("district", &self.district),
            ("experience_years", &self.experience_years),
            ("current_vehicle_count", &self.current_vehicle_count),
        ];
        required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Coerce numeric fields leniently: the leading integer is kept and
    /// anything unparsable becomes zero.
    pub fn into_payload(self) -> FranchiseApplicationPayload {
        FranchiseApplicationPayload {
            experience_years: leading_int_or_zero(&self.experience_years),
            current_vehicle_count: leading_int_or_zero(&self.current_vehicle_count),
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            city: self.city,
            district: self.district,
            address: self.address,
            has_office: self.has_office,
            investment_budget: self.investment_budget,
            message: self.message,
        }
    }
}

/// Body of `POST /api/superadmin/franchises/{id}/notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub content: String,
}

impl NotePayload {
    /// `None` for a blank note. Otherwise the text is sent as typed.
    pub fn from_text(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            content: text.to_string(),
        })
    }
}

/// Tenant domain and first admin password for turning an approved
/// application into a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertForm {
    pub domain: String,
    pub password: String,
}

/// Why a conversion was refused before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertRejection {
    NotApproved,
    MissingFields,
}

impl ConvertRejection {
    pub fn notice_key(&self) -> &'static str {
        match self {
            ConvertRejection::NotApproved => "admin.notice.convertNotApproved",
            ConvertRejection::MissingFields => "admin.notice.convertRequired",
        }
    }
}

impl ConvertForm {
    /// Only approved applications convert, and both fields are required.
    pub fn check(&self, status: FranchiseStatus) -> Result<(), ConvertRejection> {
        if !status.can_convert() {
            return Err(ConvertRejection::NotApproved);
        }
        if self.domain.trim().is_empty() || self.password.is_empty() {
            return Err(ConvertRejection::MissingFields);
        }
        Ok(())
    }
}

/// Leading signed integer of `raw`, zero when there is none. A digit run
/// past the `i64` range saturates at `i64::MAX` or `i64::MIN`.
fn leading_int_or_zero(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let saturated = if negative { i64::MIN } else { i64::MAX };
    digits[..end]
        .bytes()
        .try_fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            let shifted = acc.checked_mul(10)?;
            if negative {
                shifted.checked_sub(digit)
            } else {
                shifted.checked_add(digit)
            }
        })
        .unwrap_or(saturated)
}
