// ============================================================================
// Product Lists
// Tuples of distinct products, addressed by type through positional slots
// ============================================================================
//
// A catalog stores its products in a plain tuple. `ProductList` exposes the
// registration table (one descriptor per position) and `Contains<P, Slot<N>>`
// resolves a product type to its tuple field. The slot parameter is inferred
// at the call site, so `list.product::<P, _>()` compiles to a field access.
//
// A type that appears twice would match two slots and make inference
// ambiguous; catalogs additionally reject duplicates during validation.

use crate::domain::ProductDescriptor;
use crate::interfaces::InventoryItem;
use smallvec::{smallvec, SmallVec};

/// Position marker for type-indexed lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Slot<const N: usize>;

/// A fixed, ordered collection of inventory items.
///
/// Implemented for tuples of one to twelve [`InventoryItem`]s.
pub trait ProductList: 'static {
    /// Registration table, in declaration order.
    const DESCRIPTORS: &'static [ProductDescriptor];

    /// Number of products.
    const LEN: usize = Self::DESCRIPTORS.len();

    /// Current stock of every product, in declaration order.
    fn stocks(&self) -> SmallVec<[u32; 8]>;
}

/// Type-indexed access to the product of type `P` stored at slot `I`.
pub trait Contains<P, I> {
    /// Position of `P` in the list.
    const INDEX: usize;

    fn product(&self) -> &P;

    fn product_mut(&mut self) -> &mut P;
}

macro_rules! impl_product_list {
    ($(($idx:tt $T:ident)),+) => {
        impl<$($T: InventoryItem),+> ProductList for ($($T,)+) {
            const DESCRIPTORS: &'static [ProductDescriptor] =
                &[$(<$T as InventoryItem>::DESCRIPTOR),+];

            fn stocks(&self) -> SmallVec<[u32; 8]> {
                smallvec![$(self.$idx.stock()),+]
            }
        }

        impl_contains!([$($T),+]; $(($idx $T))+);
    };
}

macro_rules! impl_contains {
    (@slot [$($all:ident),+]; $idx:tt $T:ident) => {
        impl<$($all: InventoryItem),+> Contains<$T, Slot<$idx>> for ($($all,)+) {
            const INDEX: usize = $idx;

            #[inline(always)]
            fn product(&self) -> &$T {
                &self.$idx
            }

            #[inline(always)]
            fn product_mut(&mut self) -> &mut $T {
                &mut self.$idx
            }
        }
    };
    ($all:tt; ) => {};
    ($all:tt; ($idx:tt $T:ident) $($rest:tt)*) => {
        impl_contains!(@slot $all; $idx $T);
        impl_contains!($all; $($rest)*);
    };
}

impl_product_list!((0 A));
impl_product_list!((0 A), (1 B));
impl_product_list!((0 A), (1 B), (2 C));
impl_product_list!((0 A), (1 B), (2 C), (3 D));
impl_product_list!((0 A), (1 B), (2 C), (3 D), (4 E));
impl_product_list!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F));
impl_product_list!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G));
impl_product_list!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G), (7 H));
impl_product_list!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G), (7 H), (8 I));
impl_product_list!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G), (7 H), (8 I), (9 J));
impl_product_list!(
    (0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G), (7 H), (8 I), (9 J), (10 K)
);
impl_product_list!(
    (0 A), (1 B), (2 C), (3 D), (4 E), (5 F), (6 G), (7 H), (8 I), (9 J), (10 K), (11 L)
);
