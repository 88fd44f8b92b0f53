// ============================================================================
// Stock Counter
// Non-negative unit count shared by every product family
// ============================================================================

use super::outcome::RestockOutcome;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Units of one product on the shelf. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(transparent)]
pub struct Stock(u32);

impl Stock {
    /// Create a stock counter for a freshly baked product.
    ///
    /// # Panics
    /// If `initial` is zero. A product always enters a catalog with at least
    /// one unit; violating this is a programming error.
    #[inline]
    pub fn new(initial: u32) -> Self {
        assert!(initial >= 1, "initial stock must be at least 1, got {initial}");
        Self(initial)
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Remove one unit. Returns `false` (and changes nothing) when empty.
    #[inline]
    pub fn take_one(&mut self) -> bool {
        match self.0.checked_sub(1) {
            Some(rest) => {
                self.0 = rest;
                true
            },
            None => false,
        }
    }

    /// Add `amount` units; negative amounts remove units.
    ///
    /// The adjustment is ignored when the result would be negative or would
    /// not fit the counter.
    #[inline]
    pub fn adjust(&mut self, amount: i64) -> RestockOutcome {
        let adjusted = i64::from(self.0)
            .checked_add(amount)
            .and_then(|stock| u32::try_from(stock).ok());

        match adjusted {
            Some(stock) => {
                self.0 = stock;
                RestockOutcome::Applied { stock }
            },
            None => RestockOutcome::Ignored { stock: self.0 },
        }
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    #[should_panic(expected = "initial stock must be at least 1")]
    fn test_zero_initial_stock_panics() {
        let _ = Stock::new(0);
    }

    #[test]
    fn test_take_one_drains_to_zero() {
        let mut stock = Stock::new(2);
        assert!(stock.take_one());
        assert!(stock.take_one());
        assert!(stock.is_empty());
        assert!(!stock.take_one());
        assert_eq!(stock.count(), 0);
    }

    #[test]
    fn test_adjust_respects_floor() {
        let mut stock = Stock::new(3);
        assert_eq!(stock.adjust(-4), RestockOutcome::Ignored { stock: 3 });
        assert_eq!(stock.adjust(-3), RestockOutcome::Applied { stock: 0 });
        assert_eq!(stock.adjust(5), RestockOutcome::Applied { stock: 5 });
    }

    #[test]
    fn test_adjust_respects_ceiling() {
        let mut stock = Stock::new(u32::MAX);
        assert_eq!(stock.adjust(1), RestockOutcome::Ignored { stock: u32::MAX });
        assert_eq!(stock.adjust(i64::MAX), RestockOutcome::Ignored { stock: u32::MAX });
        assert_eq!(stock.adjust(i64::MIN), RestockOutcome::Ignored { stock: u32::MAX });
    }

    #[test]
    fn test_adjust_property() {
        fn prop(initial: u32, amount: i32) -> TestResult {
            if initial == 0 {
                return TestResult::discard();
            }
            let mut stock = Stock::new(initial);
            let expected = i64::from(initial) + i64::from(amount);
            let outcome = stock.adjust(i64::from(amount));

            if expected < 0 || expected > i64::from(u32::MAX) {
                TestResult::from_bool(!outcome.is_applied() && stock.count() == initial)
            } else {
                TestResult::from_bool(outcome.is_applied() && i64::from(stock.count()) == expected)
            }
        }
        quickcheck(prop as fn(u32, i32) -> TestResult);
    }
}
