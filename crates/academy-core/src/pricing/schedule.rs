//! Price Schedules
//!
//! Rates and bundle discounts are both piecewise functions of the hour
//! count. Each is an ordered table of tiers sharing one interpolation
//! routine, so the segments cannot drift apart.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A `(hours, dollars)` anchor on a schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub hours: u32,
    pub value: Decimal,
}

impl Point {
    pub const fn new(hours: u32, value: Decimal) -> Self {
        Self { hours, value }
    }
}

/// Shape of a schedule inside one tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    /// Same value for every hour in the tier
    Flat(Decimal),

    /// Straight line through two anchors. The anchors need not coincide
    /// with the tier's bounds.
    Linear { from: Point, to: Point },
}

impl Curve {
    /// Evaluate at `hours`.
    ///
    /// Linear curves compute `from − (h − h_from) × (from − to) / (h_to − h_from)`,
    /// multiplying before dividing so integer anchors stay exact.
    pub fn eval(&self, hours: u32) -> Decimal {
        match *self {
            Self::Flat(value) => value,
            Self::Linear { from, to } => {
                if to.hours == from.hours {
                    return from.value;
                }
                let offset = Decimal::from(hours) - Decimal::from(from.hours);
                let span = Decimal::from(to.hours) - Decimal::from(from.hours);
                from.value - offset * (from.value - to.value) / span
            }
        }
    }
}

/// One row of a schedule: applies to every hour count up to and including
/// `upto`, or to everything left when `upto` is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    pub upto: Option<u32>,
    pub curve: Curve,
}

impl Tier {
    pub const fn upto(hours: u32, curve: Curve) -> Self {
        Self { upto: Some(hours), curve }
    }

    pub const fn rest(curve: Curve) -> Self {
        Self { upto: None, curve }
    }

    fn covers(&self, hours: u32) -> bool {
        self.upto.is_none_or(|upper| hours <= upper)
    }
}

/// Ordered tier table. The first tier whose bound covers the hour count wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    tiers: &'static [Tier],
}

impl Schedule {
    pub const fn new(tiers: &'static [Tier]) -> Self {
        Self { tiers }
    }

    pub const fn tiers(&self) -> &'static [Tier] {
        self.tiers
    }

    /// Dollar value for `hours`. A table without an open-ended tier yields
    /// zero past its last bound.
    pub fn value_at(&self, hours: u32) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| tier.covers(hours))
            .map_or(Decimal::ZERO, |tier| tier.curve.eval(hours))
    }
}

/// Hourly rate: $195 flat up to 9 hours, easing down to $145 at 120 hours.
pub const TUTORING_RATES: Schedule = Schedule::new(&[
    Tier::upto(9, Curve::Flat(dec!(195))),
    Tier::upto(19, Curve::Linear {
        from: Point::new(10, dec!(195)),
        to: Point::new(19, dec!(185)),
    }),
    Tier::upto(40, Curve::Linear {
        from: Point::new(20, dec!(180)),
        to: Point::new(40, dec!(160)),
    }),
    Tier::upto(80, Curve::Linear {
        from: Point::new(40, dec!(160)),
        to: Point::new(80, dec!(150)),
    }),
    Tier::upto(120, Curve::Linear {
        from: Point::new(80, dec!(150)),
        to: Point::new(120, dec!(145)),
    }),
    Tier::rest(Curve::Flat(dec!(145))),
]);

/// Bundle discount: nothing under 20 hours, $600 at 20 hours shrinking by
/// $10 an hour to $400 at 40, then $400 flat.
pub const BUNDLE_DISCOUNTS: Schedule = Schedule::new(&[
    Tier::upto(19, Curve::Flat(Decimal::ZERO)),
    Tier::upto(40, Curve::Linear {
        from: Point::new(20, dec!(600)),
        to: Point::new(40, dec!(400)),
    }),
    Tier::rest(Curve::Flat(dec!(400))),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_curve_hits_anchors() {
        let curve = Curve::Linear {
            from: Point::new(10, dec!(195)),
            to: Point::new(19, dec!(185)),
        };
        assert_eq!(curve.eval(10), dec!(195));
        assert_eq!(curve.eval(19), dec!(185));
    }

    #[test]
    fn test_linear_curve_degenerate_span() {
        let curve = Curve::Linear {
            from: Point::new(5, dec!(10)),
            to: Point::new(5, dec!(20)),
        };
        assert_eq!(curve.eval(7), dec!(10));
    }

    #[test]
    fn test_first_covering_tier_wins() {
        // 40 is the upper bound of the 20-40 tier and the anchor of the next
        assert_eq!(TUTORING_RATES.value_at(40), dec!(160));
        assert_eq!(TUTORING_RATES.value_at(41), dec!(160) - dec!(10) / dec!(40));
    }

    #[test]
    fn test_closed_schedule_yields_zero_past_end() {
        static TIERS: [Tier; 1] = [Tier::upto(3, Curve::Flat(dec!(1)))];
        let schedule = Schedule::new(&TIERS);
        assert_eq!(schedule.value_at(3), dec!(1));
        assert_eq!(schedule.value_at(4), Decimal::ZERO);
    }

    #[test]
    fn test_open_tail() {
        assert_eq!(TUTORING_RATES.value_at(500), dec!(145));
        assert_eq!(BUNDLE_DISCOUNTS.value_at(500), dec!(400));
    }
}
