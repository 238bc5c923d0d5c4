//! Tutoring price calculator
//!
//! - `schedule` - rate and bundle-discount tables
//! - `engine` - quotes and installment plans
//! - `breakdown` - the "Your Program" summary lines

mod breakdown;
mod engine;
mod schedule;

pub use breakdown::{LineItem, LineKind};
pub use engine::PricingEngine;
pub use schedule::{BUNDLE_DISCOUNTS, Curve, Point, Schedule, TUTORING_RATES, Tier};
