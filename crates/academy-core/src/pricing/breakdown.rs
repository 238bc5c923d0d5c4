//! Quote Breakdown
//!
//! Summary lines shown next to the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::Quote;
use crate::money::format_usd;

/// How a summary line is styled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Charge,
    Discount,
    Total,
}

/// One row of the program summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    /// Signed amount; discounts are negative
    pub amount: Decimal,
    pub kind: LineKind,
}

impl LineItem {
    /// Amount as displayed, e.g. `-$600.00` for a discount
    pub fn display_amount(&self) -> String {
        format_usd(self.amount)
    }
}

impl Quote {
    /// Tutoring charge, bundle discount (only when non-zero) and total
    pub fn line_items(&self) -> Vec<LineItem> {
        let plural = if self.hours == 1 { "" } else { "s" };
        let mut items = vec![LineItem {
            label: format!(
                "Tutoring – {} hr{} @ {}/hr",
                self.hours,
                plural,
                format_usd(self.rate)
            ),
            amount: self.subtotal,
            kind: LineKind::Charge,
        }];

        if self.discount > Decimal::ZERO {
            items.push(LineItem {
                label: "Bundle Discount".into(),
                amount: -self.discount,
                kind: LineKind::Discount,
            });
        }

        items.push(LineItem {
            label: "Total".into(),
            amount: self.total,
            kind: LineKind::Total,
        });

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingEngine;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_items_without_discount() {
        let quote = PricingEngine::standard().quote(15.into());
        let items = quote.line_items();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Tutoring – 15 hrs @ $189.44/hr");
        assert_eq!(items[0].display_amount(), "$2,841.67");
        assert_eq!(items[1].kind, LineKind::Total);
    }

    #[test]
    fn test_line_items_with_discount() {
        let quote = PricingEngine::standard().quote(20.into());
        let items = quote.line_items();

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].label, "Bundle Discount");
        assert_eq!(items[1].amount, dec!(-600));
        assert_eq!(items[1].display_amount(), "-$600.00");
        assert_eq!(items[2].display_amount(), "$3,000.00");
    }

    #[test]
    fn test_single_hour_label() {
        let quote = PricingEngine::standard().quote(1.into());
        assert_eq!(quote.line_items()[0].label, "Tutoring – 1 hr @ $195.00/hr");
    }
}
