// ============================================================================
// Domain Models Module
// Products, their geometry and capabilities, and operation outcomes
// ============================================================================

pub mod key;
pub mod marketing;
pub mod outcome;
pub mod product;
pub mod shape;
pub mod stock;

pub use key::{ProductDescriptor, ProductKey};
pub use marketing::{Marketing, NonSellable, Sellable};
pub use outcome::{RestockOutcome, SaleOutcome};
pub use product::{ApplePie, Cake, CheeseCake, CherryPie, CreamCake, Pie, Product};
pub use shape::{Circle, Rectangle, Shape};
pub use stock::Stock;
