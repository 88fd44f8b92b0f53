// ============================================================================
// Numeric Module
// Numeric categories and compile-time mathematical constants
// ============================================================================
//
// This module provides:
// - WholeNumber / RealNumber: the numeric categories a catalog is configured with
// - NumericKind: const-comparable identity of a numeric type
// - PI / LN2: series approximations evaluated during compilation
//
// Design principles:
// - Everything a catalog validates must be usable in `const` context
// - No runtime re-evaluation of the constants

pub mod constants;
mod kinds;

pub use constants::{LN2, PI};
pub use kinds::{NumericKind, RealNumber, WholeNumber};
