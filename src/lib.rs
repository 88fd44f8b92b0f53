// ============================================================================
// Bakery Catalog Library
// Compile-time validated registry of heterogeneous products
// ============================================================================

//! # Bakery Catalog
//!
//! A statically configured registry of distinct products sharing one shelf.
//!
//! ## Features
//!
//! - **Build-time validation**: duplicate product types, mismatched numeric
//!   types and over-capacity shelves are compilation errors
//! - **Capability-gated products**: only sellable products have a price
//! - **Type-addressed operations** resolved to a tuple field, no lookups
//! - **Const-evaluated geometry**: `PI` and `LN2` are series approximations
//!   computed during compilation
//! - **Event reporting** through a pluggable [`interfaces::EventHandler`]
//!
//! ## Example
//!
//! ```rust
//! use bakery_catalog::prelude::*;
//!
//! type Cherry = CherryPie<i32, 1>;
//! type Apple = ApplePie<i32, 1, f64>;
//!
//! let mut bakery = Catalog::<f64, i32, 100, (Cherry, Apple)>::new((
//!     Cherry::new(1),
//!     Apple::new(2, 21.37),
//! ));
//!
//! bakery.sell::<Apple, _>();
//! assert_eq!(bakery.product_stock::<Apple, _>(), 1);
//! assert_eq!(bakery.profits(), 21.37);
//!
//! let snapshot = bakery.snapshot();
//! println!("Free shelf area: {:.3}", snapshot.free_area());
//! ```

pub mod catalog;
pub mod domain;
pub mod interfaces;
pub mod numeric;

#[cfg(feature = "logging")]
pub mod telemetry;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogSnapshot, ConfigError, ProductSnapshot};
    pub use crate::domain::{
        ApplePie, Cake, CheeseCake, CherryPie, CreamCake, NonSellable, Pie, Product, ProductKey,
        RestockOutcome, SaleOutcome, Sellable,
    };
    pub use crate::interfaces::{
        CatalogEvent, EventHandler, InventoryItem, LoggingEventHandler, NoOpEventHandler,
        PricedInventoryItem,
    };
    pub use crate::numeric::{RealNumber, WholeNumber, LN2, PI};
}
