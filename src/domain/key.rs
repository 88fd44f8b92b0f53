// ============================================================================
// Product Keys
// Stable, const-comparable identity of a product type
// ============================================================================

use crate::numeric::NumericKind;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Identity of a product type, built from everything that parameterizes it.
///
/// For products built from the provided shapes two types are the same type
/// exactly when their keys are equal, which lets a catalog detect duplicate
/// registrations during constant evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProductKey {
    /// Shape family, e.g. `"circle"`.
    pub family: &'static str,
    /// Numeric type of the dimensions.
    pub size: NumericKind,
    /// Dimension constants in declaration order.
    pub dimensions: &'static [i128],
    /// Price type for sellable products, `None` otherwise.
    pub price: Option<NumericKind>,
}

impl ProductKey {
    #[inline]
    pub const fn is_sellable(&self) -> bool {
        self.price.is_some()
    }

    /// `const` equality.
    pub const fn same_as(&self, other: &ProductKey) -> bool {
        str_eq(self.family, other.family)
            && self.size.same_as(other.size)
            && slice_eq(self.dimensions, other.dimensions)
            && option_kind_eq(self.price, other.price)
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>(", self.family, self.size)?;
        for (i, dimension) in self.dimensions.iter().enumerate() {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "{dimension}")?;
        }
        f.write_str(")")?;
        if let Some(price) = self.price {
            write!(f, " @ {price}")?;
        }
        Ok(())
    }
}

/// What a catalog needs to know about a product type before any instance
/// exists: its identity and the shelf area it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProductDescriptor {
    pub key: ProductKey,
    pub area: f64,
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn slice_eq(a: &[i128], b: &[i128]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn option_kind_eq(a: Option<NumericKind>, b: Option<NumericKind>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same_as(b),
        (None, None) => true,
        _ => false,
    }
}
