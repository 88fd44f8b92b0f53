// ============================================================================
// Product
// One inventory line: a shape, a marketing capability, and a stock count
// ============================================================================

use super::key::ProductKey;
use super::marketing::{Marketing, NonSellable, Sellable};
use super::outcome::{RestockOutcome, SaleOutcome};
use super::shape::{dimensions_valid, Circle, Rectangle, Shape};
use super::stock::Stock;
use crate::interfaces::{InventoryItem, PricedInventoryItem};
use crate::numeric::{RealNumber, WholeNumber};
use std::marker::PhantomData;

/// A product line parameterized by its geometry `Sh` and its marketing
/// capability `M`.
///
/// Area and identity are properties of the type; only stock (and the price,
/// for sellable products) live in the instance.
///
/// # Example
/// ```
/// use bakery_catalog::prelude::*;
///
/// let mut pie = ApplePie::<i32, 1, f64>::new(2, 21.37);
/// assert_eq!(pie.price(), 21.37);
/// assert!(pie.sell().is_sold());
/// assert_eq!(pie.stock(), 1);
/// ```
///
/// Prices only exist on sellable products:
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// let pie = CherryPie::<i32, 1>::new(1);
/// let _ = pie.price();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product<Sh, M: Marketing> {
    stock: Stock,
    price: M::PriceSlot,
    _shape: PhantomData<Sh>,
}

impl<Sh: Shape, M: Marketing> Product<Sh, M> {
    const SHAPE_CHECK: () = assert!(
        dimensions_valid(<Sh::Size as WholeNumber>::KIND, Sh::DIMENSIONS),
        "product dimensions must be non-negative and fit the size type"
    );

    fn from_parts(initial_stock: u32, price: M::PriceSlot) -> Self {
        let () = Self::SHAPE_CHECK;
        Self {
            stock: Stock::new(initial_stock),
            price,
            _shape: PhantomData,
        }
    }

    /// Shelf area of this product type.
    #[inline]
    pub const fn area() -> f64 {
        Sh::AREA
    }

    #[inline]
    pub const fn is_sellable() -> bool {
        M::SELLABLE
    }
}

impl<Sh: Shape> Product<Sh, NonSellable> {
    /// # Panics
    /// If `initial_stock` is zero.
    pub fn new(initial_stock: u32) -> Self {
        Self::from_parts(initial_stock, ())
    }
}

impl<Sh: Shape, P: RealNumber> Product<Sh, Sellable<P>> {
    /// # Panics
    /// If `initial_stock` is zero.
    pub fn new(initial_stock: u32, price: P) -> Self {
        Self::from_parts(initial_stock, price)
    }
}

impl<S: WholeNumber, const LENGTH: i128, const WIDTH: i128>
    Product<Rectangle<S, LENGTH, WIDTH>, NonSellable>
{
    /// Take one unit off the shelf. No price is involved, so catalogs cannot
    /// sell these; the method only drains stock.
    pub fn sell(&mut self) -> SaleOutcome<()> {
        if self.stock.take_one() {
            SaleOutcome::Sold {
                price: (),
                remaining: self.stock.count(),
            }
        } else {
            SaleOutcome::OutOfStock
        }
    }
}

impl<Sh: Shape, M: Marketing> InventoryItem for Product<Sh, M> {
    type Size = Sh::Size;

    const KEY: ProductKey = ProductKey {
        family: Sh::FAMILY,
        size: <Sh::Size as WholeNumber>::KIND,
        dimensions: Sh::DIMENSIONS,
        price: M::PRICE_KIND,
    };

    const AREA: f64 = Sh::AREA;

    #[inline]
    fn stock(&self) -> u32 {
        self.stock.count()
    }

    #[inline]
    fn restock(&mut self, amount: i64) -> RestockOutcome {
        self.stock.adjust(amount)
    }
}

impl<Sh: Shape, P: RealNumber> PricedInventoryItem for Product<Sh, Sellable<P>> {
    type Price = P;

    #[inline]
    fn price(&self) -> P {
        self.price
    }

    fn sell(&mut self) -> SaleOutcome<P> {
        if self.stock.take_one() {
            SaleOutcome::Sold {
                price: self.price,
                remaining: self.stock.count(),
            }
        } else {
            SaleOutcome::OutOfStock
        }
    }
}

// ============================================================================
// Bakery Product Families
// ============================================================================

/// Round bakery goods; the single dimension is the radius.
pub type Pie<S, const RADIUS: i128, M> = Product<Circle<S, RADIUS>, M>;

/// Pie kept on the shelf but never sold.
pub type CherryPie<S, const RADIUS: i128> = Pie<S, RADIUS, NonSellable>;

/// Pie sold at a price of type `P`.
pub type ApplePie<S, const RADIUS: i128, P> = Pie<S, RADIUS, Sellable<P>>;

/// Rectangular bakery goods with a length and a width.
pub type Cake<S, const LENGTH: i128, const WIDTH: i128, M> = Product<Rectangle<S, LENGTH, WIDTH>, M>;

/// Cake kept on the shelf but never sold.
pub type CheeseCake<S, const LENGTH: i128, const WIDTH: i128> = Cake<S, LENGTH, WIDTH, NonSellable>;

/// Cake sold at a price of type `P`.
pub type CreamCake<S, const LENGTH: i128, const WIDTH: i128, P> =
    Cake<S, LENGTH, WIDTH, Sellable<P>>;
