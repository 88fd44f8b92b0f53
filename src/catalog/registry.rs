// ============================================================================
// Catalog
// Compile-time validated registry of distinct products on a shared shelf
// ============================================================================

use super::list::{Contains, ProductList};
use super::snapshot::CatalogSnapshot;
use super::validation::expect_valid_layout;
use crate::domain::{RestockOutcome, SaleOutcome};
use crate::interfaces::{
    CatalogEvent, EventHandler, InventoryItem, NoOpEventHandler, PricedInventoryItem,
};
use crate::numeric::{RealNumber, WholeNumber};
use chrono::Utc;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Registry owning exactly one instance of every configured product type.
///
/// # Type Parameters
/// - `Profit`: real number type of the profit accumulator and of every
///   sellable product's price
/// - `Size`: whole number type of every product's dimensions
/// - `CAPACITY`: shelf area; the sum of all product areas may not exceed it
/// - `L`: tuple of the product types, in declaration order
///
/// The layout is validated while compiling the call to [`Catalog::new`]:
/// duplicates, numeric type mismatches and over-capacity shelves do not build.
///
/// # Example
/// ```
/// use bakery_catalog::prelude::*;
///
/// type Apple = ApplePie<i32, 1, f64>;
/// type Cherry = CherryPie<i32, 1>;
///
/// let mut bakery =
///     Catalog::<f64, i32, 100, (Apple, Cherry)>::new((Apple::new(2, 21.37), Cherry::new(1)));
///
/// assert_eq!(bakery.profits(), 0.0);
/// bakery.sell::<Apple, _>();
/// assert_eq!(bakery.product_stock::<Apple, _>(), 1);
/// assert_eq!(bakery.profits(), 21.37);
///
/// bakery.restock::<Cherry, _>(4);
/// assert_eq!(bakery.product_stock::<Cherry, _>(), 5);
/// ```
///
/// The same product type twice:
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// type Cherry = CherryPie<i32, 1>;
/// let _ = Catalog::<f64, i32, 100, (Cherry, Cherry)>::new((Cherry::new(1), Cherry::new(1)));
/// ```
///
/// A shelf too small for its products (PI > 3):
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// type Cherry = CherryPie<i32, 1>;
/// let _ = Catalog::<f64, i32, 3, (Cherry,)>::new((Cherry::new(1),));
/// ```
///
/// A sellable product priced in another type than the profits:
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// type Apple = ApplePie<i32, 1, f32>;
/// let _ = Catalog::<f64, i32, 100, (Apple,)>::new((Apple::new(1, 2.5),));
/// ```
///
/// A product measured in another size type:
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// type Cherry = CherryPie<i64, 1>;
/// let _ = Catalog::<f64, i32, 100, (Cherry,)>::new((Cherry::new(1),));
/// ```
///
/// Profits must be real numbers:
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// type Cherry = CherryPie<i32, 1>;
/// let _ = Catalog::<i32, i32, 100, (Cherry,)>::new((Cherry::new(1),));
/// ```
///
/// Products outside the catalog cannot be addressed:
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// type Cherry = CherryPie<i32, 1>;
/// let bakery = Catalog::<f64, i32, 100, (Cherry,)>::new((Cherry::new(1),));
/// let _ = bakery.product_stock::<CherryPie<i32, 2>, _>();
/// ```
///
/// Products without a price cannot be sold through a catalog:
/// ```compile_fail
/// use bakery_catalog::prelude::*;
///
/// type Cherry = CherryPie<i32, 1>;
/// let mut bakery = Catalog::<f64, i32, 100, (Cherry,)>::new((Cherry::new(1),));
/// bakery.sell::<Cherry, _>();
/// ```
pub struct Catalog<Profit, Size, const CAPACITY: i128, L>
where
    Profit: RealNumber,
    Size: WholeNumber,
    L: ProductList,
{
    /// One instance per configured product type
    products: L,

    /// Sum of the prices of every unit sold
    profits: Profit,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    _size: PhantomData<Size>,
}

impl<Profit, Size, const CAPACITY: i128, L> Catalog<Profit, Size, CAPACITY, L>
where
    Profit: RealNumber,
    Size: WholeNumber,
    L: ProductList,
{
    /// Sum of all product areas. Evaluating this constant validates the
    /// layout; an invalid one aborts compilation.
    pub const FOOTPRINT: f64 =
        expect_valid_layout(L::DESCRIPTORS, Profit::KIND, Size::KIND, CAPACITY);

    /// Create a catalog over already-constructed products.
    pub fn new(products: L) -> Self {
        Self::with_handler(products, Arc::new(NoOpEventHandler))
    }

    /// Create a catalog reporting every operation to `event_handler`.
    pub fn with_handler(products: L, event_handler: Arc<dyn EventHandler>) -> Self {
        let footprint = Self::FOOTPRINT;

        tracing::debug!(
            products = L::LEN,
            footprint,
            capacity = %CAPACITY,
            "catalog opened"
        );
        event_handler.on_event(CatalogEvent::CatalogOpened {
            products: L::LEN,
            footprint,
            capacity: CAPACITY,
            timestamp: Utc::now(),
        });

        Self {
            products,
            profits: Profit::ZERO,
            event_handler,
            _size: PhantomData,
        }
    }

    /// Declared shelf capacity
    #[inline]
    pub const fn capacity(&self) -> i128 {
        CAPACITY
    }

    /// Shelf area taken by the products
    #[inline]
    pub const fn footprint(&self) -> f64 {
        Self::FOOTPRINT
    }

    /// Shelf area left free
    #[inline]
    pub fn remaining_capacity(&self) -> f64 {
        CAPACITY as f64 - Self::FOOTPRINT
    }

    /// Number of product types
    #[inline]
    pub const fn len(&self) -> usize {
        L::LEN
    }

    /// Always `false`: a catalog holds at least one product type.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    /// Accumulated profit
    #[inline]
    pub fn profits(&self) -> Profit {
        self.profits
    }

    /// The single instance of product type `P`.
    #[inline]
    pub fn product<P, I>(&self) -> &P
    where
        L: Contains<P, I>,
    {
        self.products.product()
    }

    /// Current stock of product type `P`.
    #[inline]
    pub fn product_stock<P, I>(&self) -> u32
    where
        L: Contains<P, I>,
        P: InventoryItem,
    {
        self.products.product().stock()
    }

    /// Sell one unit of `P` and book its price.
    ///
    /// A no-op when `P` is out of stock: neither stock nor profits change.
    pub fn sell<P, I>(&mut self) -> SaleOutcome<Profit>
    where
        L: Contains<P, I>,
        P: PricedInventoryItem<Price = Profit>,
    {
        let outcome = self.products.product_mut().sell();

        let event = match outcome {
            SaleOutcome::Sold { price, remaining } => {
                self.profits += price;
                CatalogEvent::ProductSold {
                    product: P::KEY,
                    price: price.to_f64(),
                    remaining,
                    timestamp: Utc::now(),
                }
            },
            SaleOutcome::OutOfStock => CatalogEvent::SaleIgnored {
                product: P::KEY,
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);

        outcome
    }

    /// Adjust the stock of `P` by `amount` (negative to remove units).
    ///
    /// A no-op when the resulting stock would be negative.
    pub fn restock<P, I>(&mut self, amount: i64) -> RestockOutcome
    where
        L: Contains<P, I>,
        P: InventoryItem,
    {
        let outcome = self.products.product_mut().restock(amount);

        let event = match outcome {
            RestockOutcome::Applied { stock } => CatalogEvent::ProductRestocked {
                product: P::KEY,
                amount,
                stock,
                timestamp: Utc::now(),
            },
            RestockOutcome::Ignored { stock } => CatalogEvent::RestockIgnored {
                product: P::KEY,
                amount,
                stock,
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);

        outcome
    }

    /// Get catalog snapshot
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot::new(
            CAPACITY,
            self.profits.to_f64(),
            L::DESCRIPTORS,
            &self.products.stocks(),
        )
    }

    /// Dissolve the catalog, returning its products.
    pub fn into_products(self) -> L {
        self.products
    }
}

impl<Profit, Size, const CAPACITY: i128, L> fmt::Debug for Catalog<Profit, Size, CAPACITY, L>
where
    Profit: RealNumber,
    Size: WholeNumber,
    L: ProductList + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("capacity", &CAPACITY)
            .field("footprint", &Self::FOOTPRINT)
            .field("profits", &self.profits)
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}
