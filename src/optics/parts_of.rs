//! Bridging a traversal to a lens over the sequence of its focuses.
//!
//! [`parts_of`] turns a `Traversal<S, A>` into a `Lens<S, Vec<A>>`: `get`
//! collects every focus in visitation order, `set` replaces them pairwise
//! by position. A shorter replacement leaves the trailing focuses
//! unchanged; extra replacement elements are ignored.
//!
//! That bridge is what makes list-level algorithms possible on any
//! traversal: collect, transform the list, write it back positionally.
//!
//! # Example
//!
//! ```
//! use focal::optics::{parts_of, sorted, Lens, VecTraversal};
//!
//! let parts = parts_of(VecTraversal::new());
//! assert_eq!(parts.get(&vec![3, 1, 2]), vec![3, 1, 2]);
//! assert_eq!(parts.set(vec![3, 1, 2], vec![9]), vec![9, 1, 2]);
//!
//! assert_eq!(sorted(VecTraversal::new(), vec![3, 1, 2]), vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;

use super::lens::Lens;
use super::traversal::Traversal;

/// A traversal bridged into a lens over the list of its focuses.
#[derive(Debug, Clone, Copy)]
pub struct PartsOf<T> {
    traversal: T,
}

impl<T> PartsOf<T> {
    /// Wraps a traversal.
    #[must_use]
    pub const fn new(traversal: T) -> Self {
        Self { traversal }
    }
}

/// Bridges a traversal to a lens over the ordered list of its focuses.
#[must_use]
pub const fn parts_of<T>(traversal: T) -> PartsOf<T> {
    PartsOf::new(traversal)
}

impl<S, A, T> Lens<S, Vec<A>> for PartsOf<T>
where
    S: Clone,
    T: Traversal<S, A>,
{
    fn get(&self, source: &S) -> Vec<A> {
        self.traversal.get_all(source)
    }

    fn set(&self, source: S, value: Vec<A>) -> S {
        let mut replacements = value.into_iter();
        self.traversal
            .modify(source, |old| replacements.next().unwrap_or(old))
    }
}

/// Sorts the focuses of a traversal in place, ascending.
pub fn sorted<S, A, T>(traversal: T, source: S) -> S
where
    S: Clone,
    A: Ord,
    T: Traversal<S, A>,
{
    sorted_by(traversal, source, Ord::cmp)
}

/// Sorts the focuses of a traversal by a comparator.
pub fn sorted_by<S, A, T, C>(traversal: T, source: S, compare: C) -> S
where
    S: Clone,
    T: Traversal<S, A>,
    C: FnMut(&A, &A) -> Ordering,
{
    let parts = parts_of(traversal);
    let mut focuses = parts.get(&source);
    focuses.sort_by(compare);
    parts.set(source, focuses)
}

/// Reverses the order of a traversal's focuses.
pub fn reversed<S, A, T>(traversal: T, source: S) -> S
where
    S: Clone,
    T: Traversal<S, A>,
{
    let parts = parts_of(traversal);
    let mut focuses = parts.get(&source);
    focuses.reverse();
    parts.set(source, focuses)
}

/// Deduplicates the focuses, keeping the first occurrence of each value.
///
/// The deduplicated list is written back positionally, so focuses past its
/// end keep their previous values.
pub fn deduped<S, A, T>(traversal: T, source: S) -> S
where
    S: Clone,
    A: Ord + Clone,
    T: Traversal<S, A>,
{
    let parts = parts_of(traversal);
    let focuses = parts.get(&source);

    let mut seen = std::collections::BTreeSet::new();
    let distinct: Vec<A> = focuses
        .into_iter()
        .filter(|focus| seen.insert(focus.clone()))
        .collect();
    parts.set(source, distinct)
}
