//! Cross-kind composition.
//!
//! Composing two optics of different kinds yields the weakest kind that
//! still supports both operands' capabilities:
//!
//! | first \ second | Iso       | Lens      | Prism     | Affine    | Traversal |
//! |----------------|-----------|-----------|-----------|-----------|-----------|
//! | **Iso**        | Iso       | Lens      | Prism     | Affine    | Traversal |
//! | **Lens**       | Lens      | Lens      | Affine    | Affine    | Traversal |
//! | **Prism**      | Prism     | Affine    | Prism     | Affine    | Traversal |
//! | **Affine**     | Affine    | Affine    | Affine    | Affine    | Traversal |
//! | **Traversal**  | Traversal | Traversal | Traversal | Traversal | Traversal |
//!
//! Same-kind composition lives on each kind trait as `compose`; the
//! extension traits here cover the off-diagonal pairs by widening both
//! operands to the join kind and composing there. The join is associative
//! because widening commutes with composition.
//!
//! # Example
//!
//! ```
//! use focal::lens;
//! use focal::optics::{LensCompose, Traversal, VecTraversal};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Basket { prices: Vec<u32> }
//!
//! let prices = lens!(Basket, prices);
//! let each_price = prices.compose_traversal(VecTraversal::new());
//! let basket = Basket { prices: vec![100, 250] };
//! assert_eq!(each_price.modify(basket, |p| p + 10).prices, vec![110, 260]);
//! ```

use super::affine::{Affine, AffineAsTraversal, ComposedAffine};
use super::iso::{Iso, IsoAsLens, IsoAsPrism};
use super::lens::{ComposedLens, Lens, LensAsAffine, LensAsTraversal};
use super::prism::{ComposedPrism, Prism, PrismAsAffine};
use super::traversal::{ComposedTraversal, Traversal, VecTraversal};

use static_assertions::assert_impl_all;

// Pin a handful of table entries that go through several widening layers.
assert_impl_all!(
    ComposedTraversal<VecTraversal, VecTraversal, Vec<u32>>:
    Traversal<Vec<Vec<u32>>, u32>
);
assert_impl_all!(
    AffineAsTraversal<
        PrismAsAffine<IsoAsPrism<super::standard::IdentityIso, Vec<u32>, Vec<u32>>, Vec<u32>, Vec<u32>>,
        Vec<u32>,
        Vec<u32>,
    >:
    Traversal<Vec<u32>, Vec<u32>>
);

/// Cross-kind composition with an iso on the outside.
pub trait IsoCompose<S, A>: Iso<S, A> {
    /// Iso then lens is a lens.
    fn compose_lens<B, L>(self, other: L) -> ComposedLens<IsoAsLens<Self, S, A>, L, A>
    where
        Self: Sized,
        S: Clone,
        L: Lens<A, B>,
    {
        ComposedLens::new(self.as_lens(), other)
    }

    /// Iso then prism is a prism.
    fn compose_prism<B, P>(self, other: P) -> ComposedPrism<IsoAsPrism<Self, S, A>, P, A>
    where
        Self: Sized,
        S: Clone,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self.as_prism(), other)
    }

    /// Iso then affine is an affine.
    fn compose_affine<B, O>(
        self,
        other: O,
    ) -> ComposedAffine<LensAsAffine<IsoAsLens<Self, S, A>, S, A>, O, A>
    where
        Self: Sized,
        S: Clone,
        O: Affine<A, B>,
    {
        ComposedAffine::new(self.as_lens().as_affine(), other)
    }

    /// Iso then traversal is a traversal.
    fn compose_traversal<B, T>(
        self,
        other: T,
    ) -> ComposedTraversal<LensAsTraversal<IsoAsLens<Self, S, A>, S, A>, T, A>
    where
        Self: Sized,
        S: Clone,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_lens().as_traversal(), other)
    }
}

impl<S, A, I> IsoCompose<S, A> for I where I: Iso<S, A> {}

/// Cross-kind composition with a lens on the outside.
pub trait LensCompose<S, A>: Lens<S, A> {
    /// Lens then iso is a lens.
    fn compose_iso<B, I>(self, other: I) -> ComposedLens<Self, IsoAsLens<I, A, B>, A>
    where
        Self: Sized,
        A: Clone,
        I: Iso<A, B>,
    {
        ComposedLens::new(self, other.as_lens())
    }

    /// Lens then prism is an affine.
    fn compose_prism<B, P>(
        self,
        other: P,
    ) -> ComposedAffine<LensAsAffine<Self, S, A>, PrismAsAffine<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedAffine::new(self.as_affine(), other.as_affine())
    }

    /// Lens then affine is an affine.
    fn compose_affine<B, O>(self, other: O) -> ComposedAffine<LensAsAffine<Self, S, A>, O, A>
    where
        Self: Sized,
        O: Affine<A, B>,
    {
        ComposedAffine::new(self.as_affine(), other)
    }

    /// Lens then traversal is a traversal.
    fn compose_traversal<B, T>(
        self,
        other: T,
    ) -> ComposedTraversal<LensAsTraversal<Self, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_traversal(), other)
    }
}

impl<S, A, L> LensCompose<S, A> for L where L: Lens<S, A> {}

/// Cross-kind composition with a prism on the outside.
pub trait PrismCompose<S, A>: Prism<S, A> {
    /// Prism then iso is a prism.
    fn compose_iso<B, I>(self, other: I) -> ComposedPrism<Self, IsoAsPrism<I, A, B>, A>
    where
        Self: Sized,
        A: Clone,
        I: Iso<A, B>,
    {
        ComposedPrism::new(self, other.as_prism())
    }

    /// Prism then lens is an affine.
    fn compose_lens<B, L>(
        self,
        other: L,
    ) -> ComposedAffine<PrismAsAffine<Self, S, A>, LensAsAffine<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedAffine::new(self.as_affine(), other.as_affine())
    }

    /// Prism then affine is an affine.
    fn compose_affine<B, O>(self, other: O) -> ComposedAffine<PrismAsAffine<Self, S, A>, O, A>
    where
        Self: Sized,
        O: Affine<A, B>,
    {
        ComposedAffine::new(self.as_affine(), other)
    }

    /// Prism then traversal is a traversal.
    fn compose_traversal<B, T>(
        self,
        other: T,
    ) -> ComposedTraversal<AffineAsTraversal<PrismAsAffine<Self, S, A>, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_affine().as_traversal(), other)
    }
}

impl<S, A, P> PrismCompose<S, A> for P where P: Prism<S, A> {}

/// Cross-kind composition with an affine on the outside.
pub trait AffineCompose<S, A>: Affine<S, A> {
    /// Affine then iso is an affine.
    fn compose_iso<B, I>(
        self,
        other: I,
    ) -> ComposedAffine<Self, LensAsAffine<IsoAsLens<I, A, B>, A, B>, A>
    where
        Self: Sized,
        A: Clone,
        I: Iso<A, B>,
    {
        ComposedAffine::new(self, other.as_lens().as_affine())
    }

    /// Affine then lens is an affine.
    fn compose_lens<B, L>(self, other: L) -> ComposedAffine<Self, LensAsAffine<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedAffine::new(self, other.as_affine())
    }

    /// Affine then prism is an affine.
    fn compose_prism<B, P>(self, other: P) -> ComposedAffine<Self, PrismAsAffine<P, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedAffine::new(self, other.as_affine())
    }

    /// Affine then traversal is a traversal.
    fn compose_traversal<B, T>(
        self,
        other: T,
    ) -> ComposedTraversal<AffineAsTraversal<Self, S, A>, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self.as_traversal(), other)
    }
}

impl<S, A, O> AffineCompose<S, A> for O where O: Affine<S, A> {}

/// Cross-kind composition with a traversal on the outside.
pub trait TraversalCompose<S, A>: Traversal<S, A> {
    /// Traversal then iso is a traversal.
    fn compose_iso<B, I>(
        self,
        other: I,
    ) -> ComposedTraversal<Self, LensAsTraversal<IsoAsLens<I, A, B>, A, B>, A>
    where
        Self: Sized,
        A: Clone,
        I: Iso<A, B>,
    {
        ComposedTraversal::new(self, other.as_lens().as_traversal())
    }

    /// Traversal then lens is a traversal.
    fn compose_lens<B, L>(self, other: L) -> ComposedTraversal<Self, LensAsTraversal<L, A, B>, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedTraversal::new(self, other.as_traversal())
    }

    /// Traversal then prism is a traversal.
    fn compose_prism<B, P>(
        self,
        other: P,
    ) -> ComposedTraversal<Self, AffineAsTraversal<PrismAsAffine<P, A, B>, A, B>, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedTraversal::new(self, other.as_affine().as_traversal())
    }

    /// Traversal then affine is a traversal.
    fn compose_affine<B, O>(self, other: O) -> ComposedTraversal<Self, AffineAsTraversal<O, A, B>, A>
    where
        Self: Sized,
        O: Affine<A, B>,
    {
        ComposedTraversal::new(self, other.as_traversal())
    }
}

impl<S, A, T> TraversalCompose<S, A> for T where T: Traversal<S, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::FunctionPrism;
    use crate::prism;

    #[derive(Clone, PartialEq, Debug)]
    struct Account {
        balance: Balance,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Balance {
        Open(i64),
        Frozen,
    }

    fn balance_lens() -> impl Lens<Account, Balance> + Clone {
        crate::lens!(Account, balance)
    }

    fn open_prism() -> impl Prism<Balance, i64> + Clone {
        FunctionPrism::new(
            |balance: &Balance| match balance {
                Balance::Open(amount) => Some(*amount),
                Balance::Frozen => None,
            },
            Balance::Open,
        )
    }

    #[test]
    fn lens_then_prism_is_partial_read_write() {
        let amount = balance_lens().compose_prism(open_prism());

        let open = Account {
            balance: Balance::Open(100),
        };
        assert_eq!(amount.get_optional(&open), Some(100));
        assert_eq!(amount.modify(open, |a| a + 50).balance, Balance::Open(150));

        let frozen = Account {
            balance: Balance::Frozen,
        };
        assert_eq!(amount.get_optional(&frozen), None);
        assert_eq!(amount.modify(frozen, |a| a + 50).balance, Balance::Frozen);
    }

    #[test]
    fn prism_then_lens_gates_on_the_case() {
        #[derive(Clone, PartialEq, Debug)]
        enum Entry {
            Pair(Point),
            Missing,
        }

        #[derive(Clone, PartialEq, Debug)]
        struct Point {
            x: i32,
        }

        let pair = prism!(Entry, Pair, Point);
        let x = crate::lens!(Point, x);
        let composed = pair.compose_lens(x);

        assert_eq!(composed.get_optional(&Entry::Pair(Point { x: 3 })), Some(3));
        assert_eq!(composed.get_optional(&Entry::Missing), None);
        assert_eq!(
            composed.set(Entry::Pair(Point { x: 3 }), 9),
            Entry::Pair(Point { x: 9 })
        );
        assert_eq!(composed.set(Entry::Missing, 9), Entry::Missing);
    }

    #[test]
    fn traversal_then_prism_skips_non_matching_elements() {
        let amounts = VecTraversal::new().compose_prism(open_prism());
        let balances = vec![Balance::Open(1), Balance::Frozen, Balance::Open(2)];
        assert_eq!(amounts.get_all(&balances), vec![1, 2]);
        assert_eq!(
            amounts.modify(balances, |a| a * 10),
            vec![Balance::Open(10), Balance::Frozen, Balance::Open(20)]
        );
    }
}
