// ============================================================================
// Layout Validation
// Single configuration pass over a catalog's registration table
// ============================================================================
//
// Every check here is a `const fn` so that a catalog can run it inside an
// associated constant: an invalid configuration then fails to compile instead
// of failing at startup. The same function is public for use on plain data.

use crate::domain::shape::dimensions_valid;
use crate::domain::ProductDescriptor;
use crate::numeric::NumericKind;
use thiserror::Error;

/// Configuration error detected while validating a catalog layout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a catalog needs at least one product")]
    EmptyCatalog,

    #[error("profit type must be a non-integral real number type")]
    ProfitNotReal,

    #[error("size type must be a whole number type")]
    SizeNotWhole,

    #[error("capacity is not representable in the catalog size type")]
    CapacityOutOfRange,

    #[error("product #{index} does not use the catalog size type")]
    SizeTypeMismatch { index: usize },

    #[error("sellable product #{index} does not use the catalog price type")]
    PriceTypeMismatch { index: usize },

    #[error("product #{index} has a negative or out-of-range dimension")]
    InvalidDimension { index: usize },

    #[error("products #{first} and #{second} are the same product type")]
    DuplicateProduct { first: usize, second: usize },

    #[error("sum of product areas exceeds the catalog capacity")]
    CapacityExceeded,
}

impl ConfigError {
    /// Static description, usable in constant-evaluation panics.
    pub const fn message(&self) -> &'static str {
        match self {
            ConfigError::EmptyCatalog => "a catalog needs at least one product",
            ConfigError::ProfitNotReal => "profit type must be a non-integral real number type",
            ConfigError::SizeNotWhole => "size type must be a whole number type",
            ConfigError::CapacityOutOfRange => {
                "capacity is not representable in the catalog size type"
            },
            ConfigError::SizeTypeMismatch { .. } => {
                "size type of every product in a catalog must be the catalog size type"
            },
            ConfigError::PriceTypeMismatch { .. } => {
                "price type of every sellable product in a catalog must be the catalog profit type"
            },
            ConfigError::InvalidDimension { .. } => {
                "product dimensions must be non-negative and fit the size type"
            },
            ConfigError::DuplicateProduct { .. } => "product types in a catalog must be unique",
            ConfigError::CapacityExceeded => {
                "sum of product areas can't exceed the catalog's available shelf space"
            },
        }
    }
}

/// Validate a catalog layout and return its footprint (sum of areas).
///
/// Checks, in order: numeric categories of the catalog types, capacity range,
/// then for every product its size type, price type (sellable products only)
/// and dimensions, pairwise distinctness, and finally the footprint against
/// `capacity`.
pub const fn validate_layout(
    products: &[ProductDescriptor],
    profit: NumericKind,
    size: NumericKind,
    capacity: i128,
) -> Result<f64, ConfigError> {
    if !profit.is_real() {
        return Err(ConfigError::ProfitNotReal);
    }
    if !size.is_whole() {
        return Err(ConfigError::SizeNotWhole);
    }
    if !size.contains(capacity) {
        return Err(ConfigError::CapacityOutOfRange);
    }
    if products.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }

    let mut footprint = 0.0;
    let mut index = 0;
    while index < products.len() {
        let key = &products[index].key;

        if !key.size.same_as(size) {
            return Err(ConfigError::SizeTypeMismatch { index });
        }
        if let Some(price) = key.price {
            if !price.same_as(profit) {
                return Err(ConfigError::PriceTypeMismatch { index });
            }
        }
        if !dimensions_valid(key.size, key.dimensions) {
            return Err(ConfigError::InvalidDimension { index });
        }

        let mut earlier = 0;
        while earlier < index {
            if products[earlier].key.same_as(key) {
                return Err(ConfigError::DuplicateProduct {
                    first: earlier,
                    second: index,
                });
            }
            earlier += 1;
        }

        footprint += products[index].area;
        index += 1;
    }

    if footprint > capacity as f64 {
        return Err(ConfigError::CapacityExceeded);
    }

    Ok(footprint)
}

/// Panicking form of [`validate_layout`] for use in constant evaluation.
pub const fn expect_valid_layout(
    products: &[ProductDescriptor],
    profit: NumericKind,
    size: NumericKind,
    capacity: i128,
) -> f64 {
    match validate_layout(products, profit, size, capacity) {
        Ok(footprint) => footprint,
        Err(error) => panic!("{}", error.message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApplePie, CheeseCake, CherryPie, CreamCake};
    use crate::interfaces::InventoryItem;
    use crate::numeric::PI;

    const APPLE: ProductDescriptor = <ApplePie<i32, 1, f64> as InventoryItem>::DESCRIPTOR;
    const CHERRY: ProductDescriptor = <CherryPie<i32, 1> as InventoryItem>::DESCRIPTOR;
    const BIG_CHERRY: ProductDescriptor = <CherryPie<i32, 2> as InventoryItem>::DESCRIPTOR;

    fn validate(products: &[ProductDescriptor], capacity: i128) -> Result<f64, ConfigError> {
        validate_layout(products, NumericKind::F64, NumericKind::I32, capacity)
    }

    #[test]
    fn test_valid_layout_returns_footprint() {
        let footprint = validate(&[APPLE, CHERRY, BIG_CHERRY], 100).unwrap();
        assert!((footprint - 6.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_capacity_is_inclusive() {
        let exact = <CheeseCake<i32, 0, 5> as InventoryItem>::DESCRIPTOR;
        assert_eq!(validate(&[exact], 0), Ok(0.0));
    }

    #[test]
    fn test_capacity_exceeded() {
        // 6 * PI ~= 18.85
        assert_eq!(
            validate(&[APPLE, CHERRY, BIG_CHERRY], 18),
            Err(ConfigError::CapacityExceeded)
        );
        assert!(validate(&[APPLE, CHERRY, BIG_CHERRY], 19).is_ok());
    }

    #[test]
    fn test_duplicates_rejected() {
        assert_eq!(
            validate(&[APPLE, CHERRY, APPLE], 100),
            Err(ConfigError::DuplicateProduct {
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn test_size_type_mismatch() {
        let wide = <CherryPie<i64, 1> as InventoryItem>::DESCRIPTOR;
        assert_eq!(
            validate(&[APPLE, wide], 100),
            Err(ConfigError::SizeTypeMismatch { index: 1 })
        );
    }

    #[test]
    fn test_price_type_mismatch_only_for_sellable() {
        let cheap = <ApplePie<i32, 1, f32> as InventoryItem>::DESCRIPTOR;
        assert_eq!(
            validate(&[CHERRY, cheap], 100),
            Err(ConfigError::PriceTypeMismatch { index: 1 })
        );

        // Non-sellable products carry no price type to compare.
        let f32_catalog = validate_layout(&[CHERRY, cheap], NumericKind::F32, NumericKind::I32, 100);
        assert!(f32_catalog.is_ok());
    }

    #[test]
    fn test_catalog_numeric_categories() {
        assert_eq!(
            validate_layout(&[CHERRY], NumericKind::I32, NumericKind::I32, 100),
            Err(ConfigError::ProfitNotReal)
        );
        assert_eq!(
            validate_layout(&[CHERRY], NumericKind::F64, NumericKind::F32, 100),
            Err(ConfigError::SizeNotWhole)
        );
        assert_eq!(
            validate_layout(&[CHERRY], NumericKind::F64, NumericKind::U8, 256),
            Err(ConfigError::CapacityOutOfRange)
        );
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(validate(&[], 100), Err(ConfigError::EmptyCatalog));
    }

    #[test]
    fn test_invalid_dimension() {
        let negative = <CreamCake<i32, { -1 }, 2, f64> as InventoryItem>::DESCRIPTOR;
        assert_eq!(
            validate(&[APPLE, negative], 100),
            Err(ConfigError::InvalidDimension { index: 1 })
        );
    }

    #[test]
    fn test_expect_valid_layout_in_const() {
        const FOOTPRINT: f64 = expect_valid_layout(&[APPLE, CHERRY], NumericKind::F64, NumericKind::I32, 10);
        assert!((FOOTPRINT - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "product types in a catalog must be unique")]
    fn test_expect_valid_layout_panics() {
        let _ = expect_valid_layout(&[CHERRY, CHERRY], NumericKind::F64, NumericKind::I32, 10);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::DuplicateProduct { first: 0, second: 2 }.to_string(),
            "products #0 and #2 are the same product type"
        );
        assert_eq!(
            ConfigError::CapacityExceeded.to_string(),
            "sum of product areas exceeds the catalog capacity"
        );
    }
}
