// ============================================================================
// Operation Outcomes
// What a sale or restock actually did
// ============================================================================
//
// Selling an exhausted product and restocking below zero are not errors: the
// state is left untouched. These values only report which branch was taken,
// so callers no longer have to compare stock before and after.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Result of selling one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SaleOutcome<P> {
    /// One unit left the shelf at `price`.
    Sold { price: P, remaining: u32 },
    /// Stock was already zero; nothing changed.
    OutOfStock,
}

impl<P> SaleOutcome<P> {
    pub fn is_sold(&self) -> bool {
        matches!(self, SaleOutcome::Sold { .. })
    }

    /// Price of the sold unit, if any.
    pub fn price(self) -> Option<P> {
        match self {
            SaleOutcome::Sold { price, .. } => Some(price),
            SaleOutcome::OutOfStock => None,
        }
    }
}

/// Result of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RestockOutcome {
    /// The adjustment was applied; `stock` is the new count.
    Applied { stock: u32 },
    /// The adjustment would leave the valid range; `stock` is unchanged.
    Ignored { stock: u32 },
}

impl RestockOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RestockOutcome::Applied { .. })
    }

    /// Stock after the operation.
    pub fn stock(&self) -> u32 {
        match *self {
            RestockOutcome::Applied { stock } | RestockOutcome::Ignored { stock } => stock,
        }
    }
}
