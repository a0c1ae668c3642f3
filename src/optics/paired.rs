//! Atomic two-field updates under a shared invariant.
//!
//! Composing two sibling-field lenses sequentially passes through an
//! intermediate state holding one updated field and one stale one; when a
//! cross-field invariant binds the siblings, that intermediate state can be
//! invalid. [`paired`] extracts both fields as one pair and reconstructs
//! the source in a single step, so no intermediate state ever exists.
//!
//! The result is an ordinary lens over the pair and satisfies the ordinary
//! lens laws.
//!
//! # Example
//!
//! ```
//! use focal::lens;
//! use focal::optics::{paired, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Range { lo: i32, hi: i32 } // invariant: lo <= hi
//!
//! let both = paired(
//!     lens!(Range, lo),
//!     lens!(Range, hi),
//!     |_range, (lo, hi)| Range { lo, hi },
//! );
//! let shifted = both.modify(Range { lo: 1, hi: 2 }, |(lo, hi)| (lo + 10, hi + 10));
//! assert_eq!(shifted, Range { lo: 11, hi: 12 });
//! ```

use std::marker::PhantomData;

use super::lens::Lens;

/// A lens over a pair of sibling focuses, reconstructed atomically.
pub struct PairedLens<L1, L2, R, A, B> {
    first: L1,
    second: L2,
    reconstruct: R,
    _marker: PhantomData<(A, B)>,
}

impl<L1, L2, R, A, B> PairedLens<L1, L2, R, A, B> {
    /// Creates a paired lens from two sibling lenses and a reconstructor.
    #[must_use]
    pub const fn new(first: L1, second: L2, reconstruct: R) -> Self {
        Self {
            first,
            second,
            reconstruct,
            _marker: PhantomData,
        }
    }
}

impl<L1: Clone, L2: Clone, R: Clone, A, B> Clone for PairedLens<L1, L2, R, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            reconstruct: self.reconstruct.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2, R> Lens<S, (A, B)> for PairedLens<L1, L2, R, A, B>
where
    L1: Lens<S, A>,
    L2: Lens<S, B>,
    R: Fn(S, (A, B)) -> S,
{
    fn get(&self, source: &S) -> (A, B) {
        (self.first.get(source), self.second.get(source))
    }

    fn set(&self, source: S, value: (A, B)) -> S {
        (self.reconstruct)(source, value)
    }
}

/// Pairs two sibling lenses into one atomic lens over `(A, B)`.
///
/// `reconstruct` receives the whole source and both new focus values and
/// must rebuild the source in one step.
pub const fn paired<S, A, B, L1, L2, R>(
    first: L1,
    second: L2,
    reconstruct: R,
) -> PairedLens<L1, L2, R, A, B>
where
    L1: Lens<S, A>,
    L2: Lens<S, B>,
    R: Fn(S, (A, B)) -> S,
{
    PairedLens::new(first, second, reconstruct)
}
