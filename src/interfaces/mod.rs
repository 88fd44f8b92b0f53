// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod inventory_item;

pub use event_handler::{CatalogEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
pub use inventory_item::{InventoryItem, PricedInventoryItem};
