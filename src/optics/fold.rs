//! Fold optics for read-only access to zero or more values.
//!
//! A Fold aggregates every focus through a [`Monoid`] instead of
//! materialising an intermediate list. Every read-only query (`get_all`,
//! `preview`, `length`, `exists`, ...) derives from [`Fold::fold_map`] with
//! a suitable monoid, so an instance cannot disagree with its own
//! visitation order.
//!
//! # Example
//!
//! ```
//! use focal::optics::{Fold, FunctionFold};
//!
//! let chars = FunctionFold::new(|s: &String| {
//!     Box::new(s.chars().collect::<Vec<_>>().into_iter())
//!         as Box<dyn Iterator<Item = char>>
//! });
//! let word = "abc".to_string();
//! assert_eq!(chars.get_all(&word), vec!['a', 'b', 'c']);
//! assert_eq!(chars.length(&word), 3);
//! assert!(chars.exists(&word, |c| *c == 'b'));
//! ```

use std::marker::PhantomData;

use crate::monoid::{All, Any, First, Monoid, Sum};

/// A read-only focus on zero or more values, visited left to right.
pub trait Fold<S, A> {
    /// Maps every focus into a monoid and combines the results in
    /// visitation order.
    fn fold_map<M, F>(&self, source: &S, f: F) -> M
    where
        M: Monoid,
        F: FnMut(&A) -> M;

    /// Collects every focus, in visitation order.
    fn get_all(&self, source: &S) -> Vec<A>
    where
        A: Clone,
    {
        self.fold_map(source, |a| vec![a.clone()])
    }

    /// Returns the first focus, if any.
    fn preview(&self, source: &S) -> Option<A>
    where
        A: Clone,
    {
        self.fold_map(source, |a| First(Some(a.clone()))).0
    }

    /// Returns the first focus satisfying the predicate.
    fn find<P>(&self, source: &S, mut predicate: P) -> Option<A>
    where
        A: Clone,
        P: FnMut(&A) -> bool,
    {
        self.fold_map(source, |a| {
            First(predicate(a).then(|| a.clone()))
        })
        .0
    }

    /// Counts the focuses.
    fn length(&self, source: &S) -> usize {
        self.fold_map(source, |_| Sum(1_usize)).0
    }

    /// Returns `true` when there are no focuses.
    fn is_empty(&self, source: &S) -> bool {
        self.length(source) == 0
    }

    /// Returns `true` when any focus satisfies the predicate.
    fn exists<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_map(source, |a| Any(predicate(a))).0
    }

    /// Returns `true` when every focus satisfies the predicate.
    ///
    /// Vacuously `true` on zero focuses.
    fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_map(source, |a| All(predicate(a))).0
    }

    /// Composes this fold with a fold on the focus type.
    fn compose<B, F>(self, other: F) -> ComposedFold<Self, F, A>
    where
        Self: Sized,
        F: Fold<A, B>,
    {
        ComposedFold::new(self, other)
    }
}

/// A fold backed by an iterator-producing function.
pub struct FunctionFold<S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = A> + 'a>,
{
    focuses: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionFold<S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = A> + 'a>,
{
    /// Creates a fold from a function enumerating the focuses.
    #[must_use]
    pub const fn new(focuses: G) -> Self {
        Self {
            focuses,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Fold<S, A> for FunctionFold<S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = A> + 'a>,
{
    fn fold_map<M, F>(&self, source: &S, mut f: F) -> M
    where
        M: Monoid,
        F: FnMut(&A) -> M,
    {
        M::combine_all((self.focuses)(source).map(|a| f(&a)))
    }
}

impl<S, A, G> Clone for FunctionFold<S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = A> + 'a> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            focuses: self.focuses.clone(),
            _marker: PhantomData,
        }
    }
}

/// A fold composed of two folds.
pub struct ComposedFold<F1, F2, A> {
    first: F1,
    second: F2,
    _marker: PhantomData<A>,
}

impl<F1, F2, A> ComposedFold<F1, F2, A> {
    /// Creates a composed fold.
    #[must_use]
    pub const fn new(first: F1, second: F2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, F1, F2> Fold<S, B> for ComposedFold<F1, F2, A>
where
    F1: Fold<S, A>,
    F2: Fold<A, B>,
{
    fn fold_map<M, F>(&self, source: &S, mut f: F) -> M
    where
        M: Monoid,
        F: FnMut(&B) -> M,
    {
        self.first
            .fold_map(source, |mid| self.second.fold_map(mid, &mut f))
    }
}

impl<F1: Clone, F2: Clone, A> Clone for ComposedFold<F1, F2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> impl Fold<Vec<i32>, i32> + Clone {
        FunctionFold::new(|source: &Vec<i32>| {
            Box::new(source.clone().into_iter()) as Box<dyn Iterator<Item = i32>>
        })
    }

    #[test]
    fn queries_agree_with_visitation_order() {
        let fold = digits();
        let source = vec![3, 1, 2];
        assert_eq!(fold.get_all(&source), vec![3, 1, 2]);
        assert_eq!(fold.preview(&source), Some(3));
        assert_eq!(fold.find(&source, |x| *x < 3), Some(1));
        assert_eq!(fold.length(&source), 3);
        assert!(!fold.is_empty(&source));
    }

    #[test]
    fn predicates_on_empty_source() {
        let fold = digits();
        let empty: Vec<i32> = vec![];
        assert!(fold.is_empty(&empty));
        assert!(!fold.exists(&empty, |_| true));
        assert!(fold.for_all(&empty, |_| false));
    }

    #[test]
    fn composed_fold_flattens_in_order() {
        let outer = FunctionFold::new(|source: &Vec<Vec<i32>>| {
            Box::new(source.clone().into_iter()) as Box<dyn Iterator<Item = Vec<i32>>>
        });
        let composed = outer.compose(digits());
        let nested = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(composed.get_all(&nested), vec![1, 2, 3]);
    }
}
