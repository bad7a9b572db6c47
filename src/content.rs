// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed views of the structured landing-page content.

use crate::i18n::Resolver;
use serde::{Deserialize, Serialize};

/// A subscription plan from `pricing.packages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPackage {
    pub name: String,
    pub description: String,
    pub price_monthly: u32,
    /// Per-month price when billed yearly.
    pub price_yearly: u32,
    /// Vehicle allowance label, e.g. "50 Vehicles".
    pub vehicles: String,
    pub features: Vec<String>,
}

impl PricingPackage {
    /// What a year of yearly billing saves over twelve monthly payments.
    pub fn yearly_savings(&self) -> u32 {
        self.price_monthly.saturating_sub(self.price_yearly) * 12
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub company: String,
    pub text: String,
    pub rating: Rating,
}

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(format!("rating must be between 1 and 5, got {}", value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
}

pub fn pricing_packages(resolver: &Resolver<'_>) -> Vec<PricingPackage> {
    resolver.records("pricing.packages")
}

pub fn testimonials(resolver: &Resolver<'_>) -> Vec<Testimonial> {
    resolver.records("testimonials.items")
}

pub fn faq(resolver: &Resolver<'_>) -> Vec<FaqEntry> {
    resolver.records("faq.items")
}

pub fn features(resolver: &Resolver<'_>) -> Vec<FeatureItem> {
    resolver.records("features.items")
}
