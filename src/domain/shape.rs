// ============================================================================
// Shapes
// Pluggable footprint computation for product families
// ============================================================================

use crate::numeric::{NumericKind, WholeNumber, LN2, PI};
use std::marker::PhantomData;

/// Compile-time geometry of a product family.
///
/// A shape is a pure type: it is never instantiated, and everything it
/// describes is an associated constant so catalogs can fold over it during
/// constant evaluation.
pub trait Shape: 'static {
    /// Numeric type the dimensions are declared in.
    type Size: WholeNumber;

    /// Family name; part of the product identity.
    const FAMILY: &'static str;

    /// Dimension constants in declaration order.
    const DIMENSIONS: &'static [i128];

    /// Shelf area one product of this shape occupies.
    const AREA: f64;
}

/// Round goods: one dimension, used as the radius. Area is `PI * r * r`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Circle<S, const RADIUS: i128>(PhantomData<S>);

impl<S: WholeNumber, const RADIUS: i128> Shape for Circle<S, RADIUS> {
    type Size = S;

    const FAMILY: &'static str = "circle";
    const DIMENSIONS: &'static [i128] = &[RADIUS];
    const AREA: f64 = PI * RADIUS as f64 * RADIUS as f64;
}

/// Rectangular goods: length and width. Area is `LN2 * length * width`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle<S, const LENGTH: i128, const WIDTH: i128>(PhantomData<S>);

impl<S: WholeNumber, const LENGTH: i128, const WIDTH: i128> Shape for Rectangle<S, LENGTH, WIDTH> {
    type Size = S;

    const FAMILY: &'static str = "rectangle";
    const DIMENSIONS: &'static [i128] = &[LENGTH, WIDTH];
    const AREA: f64 = LN2 * LENGTH as f64 * WIDTH as f64;
}

/// Whether every dimension is non-negative and representable in `kind`.
pub const fn dimensions_valid(kind: NumericKind, dimensions: &[i128]) -> bool {
    let mut i = 0;
    while i < dimensions.len() {
        if dimensions[i] < 0 || !kind.contains(dimensions[i]) {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        assert_eq!(<Circle<i32, 1> as Shape>::AREA, PI);
        assert_eq!(<Circle<i32, 2> as Shape>::AREA, 4.0 * PI);
        assert_eq!(<Circle<u8, 0> as Shape>::AREA, 0.0);
        assert_eq!(<Circle<i32, 3> as Shape>::DIMENSIONS, &[3i128]);
        assert_eq!(<Circle<i32, 3> as Shape>::FAMILY, "circle");
    }

    #[test]
    fn test_rectangle_area() {
        assert_eq!(<Rectangle<i32, 1, 1> as Shape>::AREA, LN2);
        assert!((<Rectangle<i64, 3, 4> as Shape>::AREA - 12.0 * std::f64::consts::LN_2).abs() < 1e-13);
        assert_eq!(<Rectangle<i64, 3, 4> as Shape>::DIMENSIONS, &[3i128, 4]);
    }

    #[test]
    fn test_dimensions_valid() {
        assert!(dimensions_valid(NumericKind::U8, &[0, 255]));
        assert!(!dimensions_valid(NumericKind::U8, &[256]));
        assert!(!dimensions_valid(NumericKind::I32, &[2, -1]));
        assert!(!dimensions_valid(NumericKind::F64, &[1]));
        assert!(dimensions_valid(NumericKind::I8, &[]));
    }
}
