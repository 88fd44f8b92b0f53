// ============================================================================
// Catalog Module
// Compile-time validated product registries
// ============================================================================
//
// This module provides:
// - ProductList / Contains: type-indexed access into a tuple of products
// - validate_layout: the configuration pass run during compilation
// - Catalog: the registry and its sale and restock operations
// - CatalogSnapshot: point-in-time view for reporting

mod list;
mod registry;
mod snapshot;
pub mod validation;

pub use list::{Contains, ProductList, Slot};
pub use registry::Catalog;
pub use snapshot::{CatalogSnapshot, ProductSnapshot};
pub use validation::{expect_valid_layout, validate_layout, ConfigError};
