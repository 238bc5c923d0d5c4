//! Domain Models
//!
//! Value types for the pricing calculator. Uses `rust_decimal` for all
//! monetary values - never use f64 for money!

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AcademyError, Result};

/// A number of tutoring hours chosen on the calculator, always within
/// `0..=HourSelection::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct HourSelection(u32);

impl HourSelection {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 120;
    pub const STEP: u32 = 1;

    /// Hours preselected when the page loads
    pub const DEFAULT_HOURS: u32 = 15;

    /// Clamp any integer into the selectable range
    pub fn new(hours: i64) -> Self {
        let clamped = hours.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u32::try_from(clamped).unwrap_or(Self::MAX))
    }

    pub const fn hours(self) -> u32 {
        self.0
    }

    /// One hour more, saturating at the upper bound
    #[must_use]
    pub fn increment(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    /// One hour less, saturating at zero
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for HourSelection {
    fn default() -> Self {
        Self(Self::DEFAULT_HOURS)
    }
}

impl From<u32> for HourSelection {
    fn from(hours: u32) -> Self {
        Self(hours.min(Self::MAX))
    }
}

impl From<HourSelection> for u32 {
    fn from(selection: HourSelection) -> Self {
        selection.0
    }
}

impl FromStr for HourSelection {
    type Err = AcademyError;

    /// Parse a slider or text-box value. Out-of-range numbers are clamped,
    /// anything non-numeric is rejected.
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|_| AcademyError::InvalidHours(s.to_string()))
    }
}

impl fmt::Display for HourSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many payments the total is split into. `1` means pay in full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct InstallmentCount(u8);

impl InstallmentCount {
    pub const PAY_IN_FULL: Self = Self(1);
    pub const MAX: u8 = 6;

    pub fn try_new(n: u8) -> Result<Self> {
        if (1..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(AcademyError::InvalidInstallments(n))
        }
    }

    /// `None` is the pay-in-full choice
    pub fn from_option(n: Option<u8>) -> Result<Self> {
        n.map_or(Ok(Self::PAY_IN_FULL), Self::try_new)
    }

    /// Every selectable option in display order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::MAX).map(Self)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_pay_in_full(self) -> bool {
        self.0 == 1
    }

    pub fn label(self) -> String {
        if self.is_pay_in_full() {
            "One-time payment".into()
        } else {
            format!("{} installments", self.0)
        }
    }

    pub fn caption(self) -> String {
        if self.is_pay_in_full() {
            "Pay in full today".into()
        } else {
            format!("{} monthly payments", self.0)
        }
    }
}

impl Default for InstallmentCount {
    fn default() -> Self {
        Self::PAY_IN_FULL
    }
}

impl TryFrom<u8> for InstallmentCount {
    type Error = AcademyError;

    fn try_from(n: u8) -> Result<Self> {
        Self::try_new(n)
    }
}

impl From<InstallmentCount> for u8 {
    fn from(count: InstallmentCount) -> Self {
        count.0
    }
}

/// Full pricing breakdown for one hour selection. Only built by
/// `PricingEngine::quote`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Hours purchased
    pub hours: u32,

    /// Dollars per hour
    pub rate: Decimal,

    /// hours × rate
    pub subtotal: Decimal,

    /// Bundle discount in dollars
    pub discount: Decimal,

    /// max(0, subtotal − discount)
    pub total: Decimal,
}

/// A quote split into equal payments
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstallmentPlan {
    pub count: InstallmentCount,
    pub total: Decimal,
    pub per_payment: Decimal,
}
