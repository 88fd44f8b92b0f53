// ============================================================================
// Numeric Kinds
// Whole-number and real-number categories used to configure catalogs
// ============================================================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Identity of a primitive numeric type, comparable in `const` context.
///
/// Every [`WholeNumber`] and [`RealNumber`] carries one of these, so a
/// configuration pass can check type agreement without `TypeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Decimal,
}

impl NumericKind {
    /// `const` equality (derived `PartialEq` is not callable in const fns).
    #[inline]
    pub const fn same_as(self, other: NumericKind) -> bool {
        self as u8 == other as u8
    }

    /// Whether the kind is an integral type.
    pub const fn is_whole(self) -> bool {
        self.whole_range().is_some()
    }

    /// Whether the kind is a non-integral real type.
    pub const fn is_real(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64 | NumericKind::Decimal)
    }

    /// Inclusive value range of an integral kind, clamped to `i128`.
    ///
    /// Returns `None` for real kinds.
    pub const fn whole_range(self) -> Option<(i128, i128)> {
        match self {
            NumericKind::I8 => Some((i8::MIN as i128, i8::MAX as i128)),
            NumericKind::I16 => Some((i16::MIN as i128, i16::MAX as i128)),
            NumericKind::I32 => Some((i32::MIN as i128, i32::MAX as i128)),
            NumericKind::I64 => Some((i64::MIN as i128, i64::MAX as i128)),
            NumericKind::I128 => Some((i128::MIN, i128::MAX)),
            NumericKind::Isize => Some((isize::MIN as i128, isize::MAX as i128)),
            NumericKind::U8 => Some((0, u8::MAX as i128)),
            NumericKind::U16 => Some((0, u16::MAX as i128)),
            NumericKind::U32 => Some((0, u32::MAX as i128)),
            NumericKind::U64 => Some((0, u64::MAX as i128)),
            NumericKind::U128 => Some((0, i128::MAX)),
            NumericKind::Usize => Some((0, usize::MAX as i128)),
            NumericKind::F32 | NumericKind::F64 | NumericKind::Decimal => None,
        }
    }

    /// Whether `value` is representable in this kind. Always false for reals.
    pub const fn contains(self, value: i128) -> bool {
        match self.whole_range() {
            Some((min, max)) => value >= min && value <= max,
            None => false,
        }
    }

    /// Rust spelling of the type.
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::I128 => "i128",
            NumericKind::Isize => "isize",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::U128 => "u128",
            NumericKind::Usize => "usize",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
            NumericKind::Decimal => "Decimal",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integral types usable for product dimensions and catalog capacity.
///
/// Implemented for every primitive integer. Configuring a catalog or a shape
/// with anything else (e.g. `f64`) does not compile.
pub trait WholeNumber: Copy + Debug + Display + 'static {
    const KIND: NumericKind;
}

/// Non-integral real types usable for prices and profits.
pub trait RealNumber:
    Copy + PartialOrd + Add<Output = Self> + AddAssign + Debug + Display + 'static
{
    const KIND: NumericKind;

    /// Additive identity; the initial value of a profit accumulator.
    const ZERO: Self;

    /// Lossy conversion used for events and snapshots.
    fn to_f64(self) -> f64;
}

macro_rules! impl_whole_number {
    ($($t:ty => $kind:ident),+ $(,)?) => {
        $(
            impl WholeNumber for $t {
                const KIND: NumericKind = NumericKind::$kind;
            }
        )+
    };
}

impl_whole_number!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
);

impl RealNumber for f32 {
    const KIND: NumericKind = NumericKind::F32;
    const ZERO: Self = 0.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl RealNumber for f64 {
    const KIND: NumericKind = NumericKind::F64;
    const ZERO: Self = 0.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl RealNumber for Decimal {
    const KIND: NumericKind = NumericKind::Decimal;
    const ZERO: Self = Decimal::ZERO;

    #[inline]
    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories() {
        assert!(NumericKind::I32.is_whole());
        assert!(!NumericKind::I32.is_real());
        assert!(NumericKind::F64.is_real());
        assert!(!NumericKind::F64.is_whole());
        assert!(NumericKind::Decimal.is_real());
    }

    #[test]
    fn test_kind_ranges() {
        assert_eq!(NumericKind::U8.whole_range(), Some((0, 255)));
        assert_eq!(NumericKind::I8.whole_range(), Some((-128, 127)));
        assert_eq!(NumericKind::U128.whole_range(), Some((0, i128::MAX)));
        assert_eq!(NumericKind::F32.whole_range(), None);

        assert!(NumericKind::U8.contains(255));
        assert!(!NumericKind::U8.contains(256));
        assert!(!NumericKind::U8.contains(-1));
        assert!(!NumericKind::F64.contains(0));
    }

    #[test]
    fn test_const_equality() {
        const SAME: bool = NumericKind::I64.same_as(<i64 as WholeNumber>::KIND);
        const DIFFERENT: bool = NumericKind::I64.same_as(NumericKind::I32);
        assert!(SAME);
        assert!(!DIFFERENT);
    }

    #[test]
    fn test_real_zero_and_conversion() {
        assert_eq!(<f32 as RealNumber>::ZERO, 0.0);
        assert_eq!(<Decimal as RealNumber>::ZERO, Decimal::ZERO);
        assert!((RealNumber::to_f64(Decimal::new(2137, 2)) - 21.37).abs() < 1e-12);
        assert_eq!(RealNumber::to_f64(1.5f32), 1.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericKind::Usize.to_string(), "usize");
        assert_eq!(NumericKind::Decimal.to_string(), "Decimal");
    }
}
