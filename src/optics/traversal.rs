//! Traversal optics for effectful access to zero or more values.
//!
//! A Traversal visits every focus of a structure in a fixed left-to-right
//! order. Its single required operation, [`Traversal::modify_f`], threads an
//! [`Effect`] context through the visit; everything else — pure rewrites,
//! queries, folds — derives from it, so an instance cannot disagree with its
//! own visitation order.
//!
//! # Laws
//!
//! ```text
//! modify_f::<Identity>(s, pure) == s                       // identity
//! two passes fuse into one through effect composition      // fusion
//! ```
//!
//! # Example
//!
//! ```
//! use focal::optics::{Traversal, VecTraversal};
//!
//! let each = VecTraversal::new();
//! assert_eq!(each.modify(vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
//! assert_eq!(each.get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(each.length(&vec![1, 2, 3]), 3);
//! ```

use std::marker::PhantomData;

use super::fold::Fold;
use super::setter::Setter;
use crate::effect::{Const, ConstEffect, Effect, Identity};
use crate::monoid::{All, Any, First, Monoid, Sum};

/// A focus on zero or more values, visited left to right, supporting
/// effectful rewrites.
pub trait Traversal<S, A> {
    /// Rewrites every focus inside an effect context, visiting left to
    /// right and combining per-focus results with `map2` in that order.
    ///
    /// With zero focuses the source is returned via `pure` and the
    /// per-focus function is never called.
    fn modify_f<F, Func>(&self, source: S, f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>;

    /// Rewrites every focus with a pure function.
    fn modify<F>(&self, source: S, mut f: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.modify_f::<Identity, _>(source, |a| f(a))
    }

    /// Overwrites every focus with the same value.
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Maps every focus into a monoid and combines in visitation order.
    fn fold_map<M, F>(&self, source: &S, mut f: F) -> M
    where
        S: Clone,
        M: Monoid,
        F: FnMut(&A) -> M,
    {
        self.modify_f::<ConstEffect<M>, _>(source.clone(), |a| Const::new(f(&a)))
            .into_inner()
    }

    /// Collects every focus, in visitation order.
    fn get_all(&self, source: &S) -> Vec<A>
    where
        S: Clone,
    {
        self.modify_f::<ConstEffect<Vec<A>>, _>(source.clone(), |a| Const::new(vec![a]))
            .into_inner()
    }

    /// Returns the first focus, if any.
    fn preview(&self, source: &S) -> Option<A>
    where
        S: Clone,
    {
        self.modify_f::<ConstEffect<First<A>>, _>(source.clone(), |a| Const::new(First(Some(a))))
            .into_inner()
            .0
    }

    /// Returns the first focus satisfying the predicate.
    fn find<P>(&self, source: &S, mut predicate: P) -> Option<A>
    where
        S: Clone,
        P: FnMut(&A) -> bool,
    {
        self.modify_f::<ConstEffect<First<A>>, _>(source.clone(), |a| {
            Const::new(First(predicate(&a).then_some(a)))
        })
        .into_inner()
        .0
    }

    /// Counts the focuses.
    fn length(&self, source: &S) -> usize
    where
        S: Clone,
    {
        self.modify_f::<ConstEffect<Sum<usize>>, _>(source.clone(), |_| Const::new(Sum(1_usize)))
            .into_inner()
            .0
    }

    /// Returns `true` when there are no focuses.
    fn is_empty(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.length(source) == 0
    }

    /// Returns `true` when any focus satisfies the predicate.
    fn exists<P>(&self, source: &S, mut predicate: P) -> bool
    where
        S: Clone,
        P: FnMut(&A) -> bool,
    {
        self.modify_f::<ConstEffect<Any>, _>(source.clone(), |a| Const::new(Any(predicate(&a))))
            .into_inner()
            .0
    }

    /// Returns `true` when every focus satisfies the predicate.
    ///
    /// Vacuously `true` on zero focuses.
    fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        S: Clone,
        P: FnMut(&A) -> bool,
    {
        self.modify_f::<ConstEffect<All>, _>(source.clone(), |a| Const::new(All(predicate(&a))))
            .into_inner()
            .0
    }

    /// Composes this traversal with a traversal on the focus type.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Narrows this traversal to its read side.
    fn as_fold(self) -> TraversalAsFold<Self, S, A>
    where
        Self: Sized,
    {
        TraversalAsFold::new(self)
    }

    /// Narrows this traversal to its write side.
    fn as_setter(self) -> TraversalAsSetter<Self, S, A>
    where
        Self: Sized,
    {
        TraversalAsSetter::new(self)
    }
}

/// Threads an effect through a `Vec` element by element, left to right.
///
/// This is the accumulation step every list-shaped traversal shares: start
/// from `pure` of an empty vector and push each rewritten element with
/// `map2`.
pub fn traverse_vec<F, A, Func>(items: Vec<A>, f: &mut Func) -> F::Repr<Vec<A>>
where
    F: Effect,
    Func: FnMut(A) -> F::Repr<A>,
{
    let mut accumulated = F::pure(Vec::with_capacity(items.len()));
    for item in items {
        accumulated = F::map2(accumulated, f(item), |mut rebuilt, value| {
            rebuilt.push(value);
            rebuilt
        });
    }
    accumulated
}

/// A traversal over every element of a `Vec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecTraversal;

impl VecTraversal {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<A> Traversal<Vec<A>, A> for VecTraversal {
    fn modify_f<F, Func>(&self, source: Vec<A>, mut f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        traverse_vec::<F, _, _>(source, &mut f)
    }
}

/// A traversal over the `Some` value of an `Option`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionTraversal;

impl OptionTraversal {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<A> Traversal<Option<A>, A> for OptionTraversal {
    fn modify_f<F, Func>(&self, source: Option<A>, mut f: Func) -> F::Repr<Option<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        match source {
            Some(value) => F::map(f(value), Some),
            None => F::pure(None),
        }
    }
}

/// A traversal over the `Ok` value of a `Result`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultTraversal;

impl ResultTraversal {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<A, E> Traversal<Result<A, E>, A> for ResultTraversal {
    fn modify_f<F, Func>(&self, source: Result<A, E>, mut f: Func) -> F::Repr<Result<A, E>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        match source {
            Ok(value) => F::map(f(value), Ok),
            Err(error) => F::pure(Err(error)),
        }
    }
}

/// A traversal built on demand, for recursive structures.
pub struct LazyTraversal<G, T> {
    thunk: G,
    _marker: PhantomData<T>,
}

impl<G, T> LazyTraversal<G, T> {
    /// Wraps a thunk producing the traversal.
    #[must_use]
    pub const fn new(thunk: G) -> Self {
        Self {
            thunk,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, T> Traversal<S, A> for LazyTraversal<G, T>
where
    G: Fn() -> T,
    T: Traversal<S, A>,
{
    fn modify_f<F, Func>(&self, source: S, f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        (self.thunk)().modify_f::<F, _>(source, f)
    }
}

impl<G: Clone, T> Clone for LazyTraversal<G, T> {
    fn clone(&self) -> Self {
        Self {
            thunk: self.thunk.clone(),
            _marker: PhantomData,
        }
    }
}

/// Defers construction of a traversal until it is used.
pub const fn lazy<G, T>(thunk: G) -> LazyTraversal<G, T>
where
    G: Fn() -> T,
{
    LazyTraversal::new(thunk)
}

/// A traversal composed of two traversals.
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a composed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn modify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(B) -> F::Repr<B>,
    {
        self.first
            .modify_f::<F, _>(source, |mid| self.second.modify_f::<F, _>(mid, &mut f))
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A traversal narrowed to its read side.
pub struct TraversalAsFold<T, S, A> {
    traversal: T,
    _marker: PhantomData<(S, A)>,
}

impl<T, S, A> TraversalAsFold<T, S, A> {
    /// Wraps a traversal.
    #[must_use]
    pub const fn new(traversal: T) -> Self {
        Self {
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<T, S, A> Fold<S, A> for TraversalAsFold<T, S, A>
where
    T: Traversal<S, A>,
    S: Clone,
{
    fn fold_map<M, F>(&self, source: &S, f: F) -> M
    where
        M: Monoid,
        F: FnMut(&A) -> M,
    {
        self.traversal.fold_map(source, f)
    }
}

impl<T: Clone, S, A> Clone for TraversalAsFold<T, S, A> {
    fn clone(&self) -> Self {
        Self {
            traversal: self.traversal.clone(),
            _marker: PhantomData,
        }
    }
}

/// A traversal narrowed to its write side.
pub struct TraversalAsSetter<T, S, A> {
    traversal: T,
    _marker: PhantomData<(S, A)>,
}

impl<T, S, A> TraversalAsSetter<T, S, A> {
    /// Wraps a traversal.
    #[must_use]
    pub const fn new(traversal: T) -> Self {
        Self {
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<T, S, A> Setter<S, A> for TraversalAsSetter<T, S, A>
where
    T: Traversal<S, A>,
{
    fn modify<F>(&self, source: S, f: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.traversal.modify(source, f)
    }
}

impl<T: Clone, S, A> Clone for TraversalAsSetter<T, S, A> {
    fn clone(&self) -> Self {
        Self {
            traversal: self.traversal.clone(),
            _marker: PhantomData,
        }
    }
}
