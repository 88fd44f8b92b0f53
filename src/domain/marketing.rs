// ============================================================================
// Marketing Capability
// Type-level flag deciding whether a product carries a price
// ============================================================================

use crate::numeric::{NumericKind, RealNumber};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Whether a product type can be sold, and in which price type.
///
/// The flag is part of the product type, so price access on a product that
/// is not for sale is rejected by the type checker rather than at runtime.
pub trait Marketing: 'static {
    const SELLABLE: bool;

    /// Price type for sellable products, `None` otherwise.
    const PRICE_KIND: Option<NumericKind>;

    /// Storage for the price: the price type itself, or `()`.
    type PriceSlot: Copy + Debug + PartialEq;
}

/// Products that are only stocked, never sold at a price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonSellable;

/// Products sold at a price of type `P`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sellable<P>(PhantomData<P>);

impl Marketing for NonSellable {
    const SELLABLE: bool = false;
    const PRICE_KIND: Option<NumericKind> = None;
    type PriceSlot = ();
}

impl<P: RealNumber> Marketing for Sellable<P> {
    const SELLABLE: bool = true;
    const PRICE_KIND: Option<NumericKind> = Some(P::KIND);
    type PriceSlot = P;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_flags() {
        assert!(!NonSellable::SELLABLE);
        assert_eq!(NonSellable::PRICE_KIND, None);
        assert!(<Sellable<f64>>::SELLABLE);
        assert_eq!(<Sellable<f32>>::PRICE_KIND, Some(NumericKind::F32));
        assert_eq!(<Sellable<Decimal>>::PRICE_KIND, Some(NumericKind::Decimal));
    }
}
