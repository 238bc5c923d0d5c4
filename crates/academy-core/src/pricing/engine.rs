//! Pricing Engine
//!
//! Stateless calculator behind the "Build your plan" section. Every
//! method is a pure function of its arguments, so recomputing on each
//! slider move is always safe.

use rust_decimal::Decimal;

use crate::model::{HourSelection, InstallmentCount, InstallmentPlan, Quote};
use crate::pricing::schedule::{BUNDLE_DISCOUNTS, Schedule, TUTORING_RATES};

/// Maps an hour count to a rate, a bundle discount and a total
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingEngine {
    rates: Schedule,
    discounts: Schedule,
}

impl PricingEngine {
    pub const fn new(rates: Schedule, discounts: Schedule) -> Self {
        Self { rates, discounts }
    }

    /// The published tutoring price list
    pub const fn standard() -> Self {
        Self::new(TUTORING_RATES, BUNDLE_DISCOUNTS)
    }

    /// Dollars per hour for `hours`
    pub fn rate(&self, hours: u32) -> Decimal {
        self.rates.value_at(hours)
    }

    /// Bundle discount in dollars for `hours`
    pub fn discount(&self, hours: u32) -> Decimal {
        self.discounts.value_at(hours)
    }

    /// Full breakdown for an hour selection. The total never goes below zero.
    pub fn quote(&self, selection: HourSelection) -> Quote {
        let hours = selection.hours();
        let rate = self.rate(hours);
        let subtotal = Decimal::from(hours) * rate;
        let discount = self.discount(hours);
        let total = (subtotal - discount).max(Decimal::ZERO);

        tracing::trace!(hours, %rate, %subtotal, %discount, %total, "quote computed");

        Quote {
            hours,
            rate,
            subtotal,
            discount,
            total,
        }
    }

    /// Amount of each payment when `total` is split `count` ways
    pub fn installment(&self, total: Decimal, count: InstallmentCount) -> Decimal {
        if count.is_pay_in_full() {
            total
        } else {
            total / Decimal::from(count.get())
        }
    }

    /// Split a quote into equal payments
    pub fn plan(&self, quote: &Quote, count: InstallmentCount) -> InstallmentPlan {
        InstallmentPlan {
            count,
            total: quote.total,
            per_payment: self.installment(quote.total, count),
        }
    }

    /// Every payment option for a quote, pay-in-full first
    pub fn options(&self, quote: &Quote) -> Vec<InstallmentPlan> {
        InstallmentCount::all()
            .map(|count| self.plan(quote, count))
            .collect()
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
