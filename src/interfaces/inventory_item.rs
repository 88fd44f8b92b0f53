// ============================================================================
// Inventory Item Interfaces
// Capabilities a catalog can address: stock for everything, price for some
// ============================================================================

use crate::domain::{ProductDescriptor, ProductKey, RestockOutcome, SaleOutcome};
use crate::numeric::{RealNumber, WholeNumber};

/// Bare capability shared by every catalog member: a fixed footprint and a
/// stock count.
///
/// # Identity
/// `KEY` must be unique per implementing type. Catalogs rely on it to reject
/// duplicate registrations during compilation.
pub trait InventoryItem: 'static {
    /// Numeric type of the product's dimensions.
    type Size: WholeNumber;

    /// Stable identity of the type.
    const KEY: ProductKey;

    /// Shelf area occupied by this product type.
    const AREA: f64;

    /// Registration record folded by catalog validation.
    const DESCRIPTOR: ProductDescriptor = ProductDescriptor {
        key: Self::KEY,
        area: Self::AREA,
    };

    /// Units currently on the shelf.
    fn stock(&self) -> u32;

    /// Add (or, with a negative amount, remove) units.
    ///
    /// Ignored when the result would be negative.
    fn restock(&mut self, amount: i64) -> RestockOutcome;
}

/// Capability of products sold at a price.
pub trait PricedInventoryItem: InventoryItem {
    type Price: RealNumber;

    fn price(&self) -> Self::Price;

    /// Sell one unit. A no-op returning [`SaleOutcome::OutOfStock`] when the
    /// shelf is empty.
    fn sell(&mut self) -> SaleOutcome<Self::Price>;
}
