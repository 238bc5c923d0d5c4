//! # academy-core
//!
//! Pricing and form logic for the Future MD Academy landing page.
//!
//! ## Pricing
//!
//! Tutoring is sold by the hour. The hourly rate eases down as the bundle
//! grows, and bundles of 20 hours or more get a flat discount:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  hours      rate/hr              bundle discount              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  0-9        $195                 -                            │
//! │  10-19      $195 → $185          -                            │
//! │  20-40      $180 → $160          $600 → $400                  │
//! │  40-80      $160 → $150          $400                         │
//! │  80-120     $150 → $145          $400                         │
//! └──────────────────────────────────────────────────────────────┘
//!
//!   20 hrs × $180 = $3,600 − $600 = $3,000   (3 × $1,000/mo)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use academy_core::{HourSelection, InstallmentCount, PricingEngine};
//! use rust_decimal_macros::dec;
//!
//! let engine = PricingEngine::standard();
//! let quote = engine.quote(HourSelection::from(20));
//! assert_eq!(quote.total, dec!(3000));
//!
//! let plan = engine.plan(&quote, InstallmentCount::try_new(3)?);
//! assert_eq!(plan.per_payment, dec!(1000));
//! # Ok::<(), academy_core::AcademyError>(())
//! ```

pub mod carousel;
pub mod contact;
pub mod error;
pub mod model;
pub mod money;
pub mod pricing;

pub use carousel::Carousel;
pub use contact::ContactForm;
pub use error::{AcademyError, Result};
pub use model::{HourSelection, InstallmentCount, InstallmentPlan, Quote};
pub use money::{format_per_month, format_usd};
pub use pricing::{LineItem, LineKind, PricingEngine};
