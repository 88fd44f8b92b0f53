// ============================================================================
// Catalog Snapshot
// Point-in-time view of a catalog's shelf
// ============================================================================

use crate::domain::{ProductDescriptor, ProductKey};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One product line in a snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProductSnapshot {
    pub key: ProductKey,
    /// Shelf area of the product type
    pub area: f64,
    /// Units on the shelf when the snapshot was taken
    pub stock: u32,
}

/// Immutable snapshot of the catalog state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CatalogSnapshot {
    /// Declared shelf capacity
    pub capacity: i128,
    /// Sum of all product areas
    pub footprint: f64,
    /// Accumulated profit, converted to `f64`
    pub profits: f64,
    /// Product lines in declaration order
    pub products: SmallVec<[ProductSnapshot; 8]>,
}

impl CatalogSnapshot {
    pub fn new(
        capacity: i128,
        profits: f64,
        descriptors: &[ProductDescriptor],
        stocks: &[u32],
    ) -> Self {
        let products: SmallVec<[ProductSnapshot; 8]> = descriptors
            .iter()
            .zip(stocks)
            .map(|(descriptor, &stock)| ProductSnapshot {
                key: descriptor.key,
                area: descriptor.area,
                stock,
            })
            .collect();
        let footprint = products.iter().map(|p| p.area).sum();

        Self {
            capacity,
            footprint,
            profits,
            products,
        }
    }

    /// Shelf area not taken by any product.
    pub fn free_area(&self) -> f64 {
        self.capacity as f64 - self.footprint
    }

    pub fn total_stock(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.stock)).sum()
    }

    pub fn product(&self, key: &ProductKey) -> Option<&ProductSnapshot> {
        self.products.iter().find(|p| p.key == *key)
    }

    /// Product lines with no units left.
    pub fn sold_out(&self) -> impl Iterator<Item = &ProductSnapshot> {
        self.products.iter().filter(|p| p.stock == 0)
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApplePie, CherryPie};
    use crate::interfaces::InventoryItem;
    use crate::numeric::PI;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(
            100,
            21.37,
            &[
                <ApplePie<i32, 1, f64> as InventoryItem>::DESCRIPTOR,
                <CherryPie<i32, 2> as InventoryItem>::DESCRIPTOR,
            ],
            &[0, 3],
        )
    }

    #[test]
    fn test_snapshot_aggregates() {
        let snapshot = snapshot();
        assert_eq!(snapshot.products.len(), 2);
        assert!((snapshot.footprint - 5.0 * PI).abs() < 1e-12);
        assert!((snapshot.free_area() - (100.0 - 5.0 * PI)).abs() < 1e-12);
        assert_eq!(snapshot.total_stock(), 3);
    }

    #[test]
    fn test_snapshot_lookup() {
        let snapshot = snapshot();
        let cherry = <CherryPie<i32, 2> as InventoryItem>::KEY;
        assert_eq!(snapshot.product(&cherry).map(|p| p.stock), Some(3));
        assert_eq!(
            snapshot.product(&<CherryPie<i32, 1> as InventoryItem>::KEY),
            None
        );

        let sold_out: Vec<_> = snapshot.sold_out().map(|p| p.key).collect();
        assert_eq!(sold_out, vec![<ApplePie<i32, 1, f64> as InventoryItem>::KEY]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_json() {
        let json = snapshot().to_json().unwrap();
        assert!(json.contains("\"family\":\"circle\""));
        assert!(json.contains("\"stock\":3"));
    }
}
