// ============================================================================
// Event Handler Interface
// Defines the contract for observing catalog operations
// ============================================================================

use crate::domain::ProductKey;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by a catalog
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CatalogEvent {
    /// Catalog constructed and its layout validated
    CatalogOpened {
        products: usize,
        footprint: f64,
        capacity: i128,
        timestamp: DateTime<Utc>,
    },

    /// One unit sold, profit booked
    ProductSold {
        product: ProductKey,
        price: f64,
        remaining: u32,
        timestamp: DateTime<Utc>,
    },

    /// Sale requested on an empty shelf; nothing changed
    SaleIgnored {
        product: ProductKey,
        timestamp: DateTime<Utc>,
    },

    /// Stock adjusted
    ProductRestocked {
        product: ProductKey,
        amount: i64,
        stock: u32,
        timestamp: DateTime<Utc>,
    },

    /// Stock adjustment would leave the valid range; nothing changed
    RestockIgnored {
        product: ProductKey,
        amount: i64,
        stock: u32,
        timestamp: DateTime<Utc>,
    },
}

impl CatalogEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::CatalogOpened { timestamp, .. }
            | CatalogEvent::ProductSold { timestamp, .. }
            | CatalogEvent::SaleIgnored { timestamp, .. }
            | CatalogEvent::ProductRestocked { timestamp, .. }
            | CatalogEvent::RestockIgnored { timestamp, .. } => *timestamp,
        }
    }

    /// Product the event concerns, if any.
    pub fn product(&self) -> Option<&ProductKey> {
        match self {
            CatalogEvent::CatalogOpened { .. } => None,
            CatalogEvent::ProductSold { product, .. }
            | CatalogEvent::SaleIgnored { product, .. }
            | CatalogEvent::ProductRestocked { product, .. }
            | CatalogEvent::RestockIgnored { product, .. } => Some(product),
        }
    }
}

/// Event handler trait for processing catalog events
/// Implementations can handle logging, auditing, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a catalog event
    fn on_event(&self, event: CatalogEvent);
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CatalogEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CatalogEvent) {
        match &event {
            CatalogEvent::SaleIgnored { product, .. } => {
                tracing::trace!(%product, "sale ignored: out of stock");
            },
            CatalogEvent::RestockIgnored {
                product,
                amount,
                stock,
                ..
            } => {
                tracing::trace!(%product, amount, stock, "restock ignored: out of range");
            },
            _ => tracing::debug!("Catalog event: {:?}", event),
        }
    }
}
