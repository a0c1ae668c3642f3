//! Indexed optics: every focus pairs with the index it sits at.
//!
//! An [`IndexedTraversal`] visits `(index, value)` pairs in the same fixed
//! left-to-right order as its unindexed counterpart. Composing two indexed
//! traversals pairs their indices; narrowing by index keeps the surviving
//! focuses' original indices rather than renumbering them.
//!
//! # Example
//!
//! ```
//! use focal::optics::{IndexedTraversal, IndexedVecTraversal};
//!
//! let each = IndexedVecTraversal::new();
//! let labelled = each.imodify(vec!["a", "b"], |i, s| {
//!     if i == 0 { s } else { "rest" }
//! });
//! assert_eq!(labelled, vec!["a", "rest"]);
//! assert_eq!(
//!     each.to_indexed_list(&vec![10, 20]),
//!     vec![(0, 10), (1, 20)]
//! );
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::traversal::Traversal;
use crate::effect::{Const, ConstEffect, Effect, Identity};
use crate::monoid::{Monoid, Sum};

/// A traversal whose focuses carry their index.
pub trait IndexedTraversal<I, S, A> {
    /// Rewrites every `(index, value)` pair inside an effect context,
    /// visiting left to right.
    fn imodify_f<F, Func>(&self, source: S, f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(I, A) -> F::Repr<A>;

    /// Rewrites every `(index, value)` pair with a pure function.
    fn imodify<F>(&self, source: S, mut f: F) -> S
    where
        F: FnMut(I, A) -> A,
    {
        self.imodify_f::<Identity, _>(source, |index, value| f(index, value))
    }

    /// Collects every `(index, value)` pair, in visitation order.
    fn to_indexed_list(&self, source: &S) -> Vec<(I, A)>
    where
        S: Clone,
    {
        self.imodify_f::<ConstEffect<Vec<(I, A)>>, _>(source.clone(), |index, value| {
            Const::new(vec![(index, value)])
        })
        .into_inner()
    }

    /// Maps every `(index, value)` pair into a monoid and combines in
    /// visitation order.
    fn ifold_map<M, F>(&self, source: &S, mut f: F) -> M
    where
        S: Clone,
        M: Monoid,
        F: FnMut(&I, &A) -> M,
    {
        self.imodify_f::<ConstEffect<M>, _>(source.clone(), |index, value| {
            Const::new(f(&index, &value))
        })
        .into_inner()
    }

    /// Composes with an indexed traversal on the focus type, pairing the
    /// indices.
    fn icompose<J, B, T>(self, other: T) -> ComposedIndexedTraversal<Self, T, A>
    where
        Self: Sized,
        T: IndexedTraversal<J, A, B>,
    {
        ComposedIndexedTraversal::new(self, other)
    }

    /// Narrows to the focuses whose index satisfies the predicate.
    ///
    /// Surviving focuses keep their original indices.
    fn filter_index<P>(self, predicate: P) -> FilteredIndex<Self, P>
    where
        Self: Sized,
        P: Fn(&I) -> bool,
    {
        FilteredIndex::new(self, predicate)
    }

    /// Narrows to the focuses whose `(index, value)` pair satisfies the
    /// predicate, keeping original indices.
    fn filtered_with_index<P>(self, predicate: P) -> FilteredWithIndex<Self, P>
    where
        Self: Sized,
        P: Fn(&I, &A) -> bool,
    {
        FilteredWithIndex::new(self, predicate)
    }

    /// Forgets the indices, leaving a plain traversal.
    fn unindexed(self) -> Unindexed<Self, I>
    where
        Self: Sized,
    {
        Unindexed::new(self)
    }

    /// Narrows this indexed traversal to its read side.
    fn as_indexed_fold(self) -> IndexedTraversalAsFold<Self, I>
    where
        Self: Sized,
    {
        IndexedTraversalAsFold::new(self)
    }
}

/// A read-only focus on zero or more `(index, value)` pairs.
pub trait IndexedFold<I, S, A> {
    /// Maps every `(index, value)` pair into a monoid and combines the
    /// results in visitation order.
    fn ifold_map<M, F>(&self, source: &S, f: F) -> M
    where
        M: Monoid,
        F: FnMut(&I, &A) -> M;

    /// Collects every `(index, value)` pair, in visitation order.
    fn ito_list(&self, source: &S) -> Vec<(I, A)>
    where
        I: Clone,
        A: Clone,
    {
        self.ifold_map(source, |index, value| vec![(index.clone(), value.clone())])
    }

    /// Counts the focuses.
    fn ilength(&self, source: &S) -> usize {
        self.ifold_map(source, |_, _| Sum(1_usize)).0
    }
}

/// A fold backed by an indexed-pair-producing function.
pub struct FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, A)> + 'a>,
{
    focuses: G,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, G> FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, A)> + 'a>,
{
    /// Creates an indexed fold from a function enumerating the pairs.
    #[must_use]
    pub const fn new(focuses: G) -> Self {
        Self {
            focuses,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G> IndexedFold<I, S, A> for FunctionIndexedFold<I, S, A, G>
where
    G: for<'a> Fn(&'a S) -> Box<dyn Iterator<Item = (I, A)> + 'a>,
{
    fn ifold_map<M, F>(&self, source: &S, mut f: F) -> M
    where
        M: Monoid,
        F: FnMut(&I, &A) -> M,
    {
        M::combine_all((self.focuses)(source).map(|(index, value)| f(&index, &value)))
    }
}

/// An indexed traversal narrowed to its read side.
pub struct IndexedTraversalAsFold<T, I> {
    inner: T,
    _marker: PhantomData<I>,
}

impl<T, I> IndexedTraversalAsFold<T, I> {
    /// Wraps an indexed traversal.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, T> IndexedFold<I, S, A> for IndexedTraversalAsFold<T, I>
where
    T: IndexedTraversal<I, S, A>,
    S: Clone,
{
    fn ifold_map<M, F>(&self, source: &S, f: F) -> M
    where
        M: Monoid,
        F: FnMut(&I, &A) -> M,
    {
        self.inner.ifold_map(source, f)
    }
}

impl<T: Clone, I> Clone for IndexedTraversalAsFold<T, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

/// A lens whose focus carries its index.
pub trait IndexedLens<I, S, A> {
    /// Extracts the index and the focused value.
    fn iget(&self, source: &S) -> (I, A);

    /// Replaces the focused value.
    fn set(&self, source: S, value: A) -> S;

    /// Rewrites the focused value with access to its index.
    fn imodify<F>(&self, source: S, f: F) -> S
    where
        F: FnOnce(I, A) -> A,
    {
        let (index, value) = self.iget(&source);
        self.set(source, f(index, value))
    }
}

/// An indexed lens backed by a pair of functions.
pub struct FunctionIndexedLens<I, S, A, G, T>
where
    G: Fn(&S) -> (I, A),
    T: Fn(S, A) -> S,
{
    getter: G,
    setter: T,
    _marker: PhantomData<(I, S, A)>,
}

impl<I, S, A, G, T> FunctionIndexedLens<I, S, A, G, T>
where
    G: Fn(&S) -> (I, A),
    T: Fn(S, A) -> S,
{
    /// Creates an indexed lens from an indexed getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: T) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, G, T> IndexedLens<I, S, A> for FunctionIndexedLens<I, S, A, G, T>
where
    G: Fn(&S) -> (I, A),
    T: Fn(S, A) -> S,
{
    fn iget(&self, source: &S) -> (I, A) {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

/// An indexed traversal over a `Vec`, indexed by position.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedVecTraversal;

impl IndexedVecTraversal {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<A> IndexedTraversal<usize, Vec<A>, A> for IndexedVecTraversal {
    fn imodify_f<F, Func>(&self, source: Vec<A>, mut f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(usize, A) -> F::Repr<A>,
    {
        let mut accumulated = F::pure(Vec::with_capacity(source.len()));
        for (index, item) in source.into_iter().enumerate() {
            accumulated = F::map2(accumulated, f(index, item), |mut rebuilt, value| {
                rebuilt.push(value);
                rebuilt
            });
        }
        accumulated
    }
}

/// An indexed traversal over a `BTreeMap`, indexed by key and visited in
/// key order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedMapTraversal;

impl IndexedMapTraversal {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<K, V> IndexedTraversal<K, BTreeMap<K, V>, V> for IndexedMapTraversal
where
    K: Ord + Clone,
{
    fn imodify_f<F, Func>(&self, source: BTreeMap<K, V>, mut f: Func) -> F::Repr<BTreeMap<K, V>>
    where
        F: Effect,
        Func: FnMut(K, V) -> F::Repr<V>,
    {
        let mut accumulated = F::pure(BTreeMap::new());
        for (key, value) in source {
            let slot = key.clone();
            accumulated = F::map2(accumulated, f(key, value), move |mut rebuilt, updated| {
                rebuilt.insert(slot, updated);
                rebuilt
            });
        }
        accumulated
    }
}

/// An indexed traversal composed of two, with paired indices.
pub struct ComposedIndexedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedIndexedTraversal<T1, T2, A> {
    /// Creates a composed indexed traversal.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<I, J, S, A, B, T1, T2> IndexedTraversal<(I, J), S, B> for ComposedIndexedTraversal<T1, T2, A>
where
    I: Clone,
    T1: IndexedTraversal<I, S, A>,
    T2: IndexedTraversal<J, A, B>,
{
    fn imodify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut((I, J), B) -> F::Repr<B>,
    {
        self.first.imodify_f::<F, _>(source, |outer, mid| {
            self.second.imodify_f::<F, _>(mid, |inner, value| {
                f((outer.clone(), inner), value)
            })
        })
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedIndexedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// An indexed traversal narrowed by a predicate on the index.
#[derive(Clone)]
pub struct FilteredIndex<T, P> {
    inner: T,
    predicate: P,
}

impl<T, P> FilteredIndex<T, P> {
    /// Wraps an indexed traversal with an index predicate.
    #[must_use]
    pub const fn new(inner: T, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<I, S, A, T, P> IndexedTraversal<I, S, A> for FilteredIndex<T, P>
where
    T: IndexedTraversal<I, S, A>,
    P: Fn(&I) -> bool,
{
    fn imodify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(I, A) -> F::Repr<A>,
    {
        self.inner.imodify_f::<F, _>(source, |index, value| {
            if (self.predicate)(&index) {
                f(index, value)
            } else {
                F::pure(value)
            }
        })
    }
}

/// An indexed traversal narrowed by a predicate on index and value.
#[derive(Clone)]
pub struct FilteredWithIndex<T, P> {
    inner: T,
    predicate: P,
}

impl<T, P> FilteredWithIndex<T, P> {
    /// Wraps an indexed traversal with an `(index, value)` predicate.
    #[must_use]
    pub const fn new(inner: T, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<I, S, A, T, P> IndexedTraversal<I, S, A> for FilteredWithIndex<T, P>
where
    T: IndexedTraversal<I, S, A>,
    P: Fn(&I, &A) -> bool,
{
    fn imodify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(I, A) -> F::Repr<A>,
    {
        self.inner.imodify_f::<F, _>(source, |index, value| {
            if (self.predicate)(&index, &value) {
                f(index, value)
            } else {
                F::pure(value)
            }
        })
    }
}

/// An indexed traversal with its indices forgotten.
pub struct Unindexed<T, I> {
    inner: T,
    _marker: PhantomData<I>,
}

impl<T, I> Unindexed<T, I> {
    /// Wraps an indexed traversal.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A, T> Traversal<S, A> for Unindexed<T, I>
where
    T: IndexedTraversal<I, S, A>,
{
    fn modify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        self.inner
            .imodify_f::<F, _>(source, |_index, value| f(value))
    }
}

impl<T: Clone, I> Clone for Unindexed<T, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::OptionEffect;

    #[test]
    fn imodify_sees_positions() {
        let each = IndexedVecTraversal::new();
        let updated = each.imodify(vec![10, 20, 30], |i, x| x + i as i32);
        assert_eq!(updated, vec![10, 21, 32]);
    }

    #[test]
    fn map_traversal_visits_in_key_order() {
        let each = IndexedMapTraversal::new();
        let mut source = BTreeMap::new();
        source.insert("b", 2);
        source.insert("a", 1);
        assert_eq!(
            each.to_indexed_list(&source),
            vec![("a", 1), ("b", 2)]
        );
    }

    #[test]
    fn composed_indices_pair_up() {
        let nested = IndexedVecTraversal::new().icompose(IndexedVecTraversal::new());
        let source = vec![vec![5], vec![6, 7]];
        assert_eq!(
            nested.to_indexed_list(&source),
            vec![((0, 0), 5), ((1, 0), 6), ((1, 1), 7)]
        );
    }

    #[test]
    fn filter_index_keeps_original_indices() {
        let evens = <IndexedVecTraversal as IndexedTraversal<usize, Vec<i32>, i32>>::filter_index(
            IndexedVecTraversal::new(),
            |i: &usize| i % 2 == 0,
        );
        assert_eq!(
            evens.to_indexed_list(&vec![10, 11, 12, 13]),
            vec![(0, 10), (2, 12)]
        );
        assert_eq!(
            evens.imodify(vec![10, 11, 12, 13], |_, x| x + 100),
            vec![110, 11, 112, 13]
        );
    }

    #[test]
    fn filtered_with_index_tests_both() {
        let picked = IndexedVecTraversal::new()
            .filtered_with_index(|i: &usize, x: &i32| i % 2 == 0 && *x > 5);
        assert_eq!(
            picked.to_indexed_list(&vec![10, 11, 2, 13]),
            vec![(0, 10)]
        );
    }

    #[test]
    fn unindexed_behaves_like_plain_traversal() {
        use crate::optics::Traversal as _;

        let plain = <IndexedVecTraversal as IndexedTraversal<usize, Vec<i32>, i32>>::unindexed(
            IndexedVecTraversal::new(),
        );
        assert_eq!(plain.get_all(&vec![1, 2]), vec![1, 2]);
        let failed = plain.modify_f::<OptionEffect, _>(vec![1, 2], |_| None);
        assert_eq!(failed, None);
    }

    #[test]
    fn indexed_fold_reads_without_writing() {
        let fold =
            <IndexedVecTraversal as IndexedTraversal<usize, Vec<i32>, i32>>::as_indexed_fold(
                IndexedVecTraversal::new(),
            );
        assert_eq!(fold.ito_list(&vec![7, 8]), vec![(0, 7), (1, 8)]);
        assert_eq!(fold.ilength(&vec![7, 8]), 2);

        let pairs = FunctionIndexedFold::new(|source: &Vec<i32>| {
            Box::new(source.clone().into_iter().enumerate())
                as Box<dyn Iterator<Item = (usize, i32)>>
        });
        assert_eq!(pairs.ito_list(&vec![3, 4]), vec![(0, 3), (1, 4)]);
        assert_eq!(pairs.ilength(&Vec::new()), 0);
    }

    #[test]
    fn indexed_lens_exposes_its_index() {
        let first = FunctionIndexedLens::new(
            |source: &Vec<i32>| (0_usize, source[0]),
            |mut source: Vec<i32>, value| {
                source[0] = value;
                source
            },
        );
        assert_eq!(first.iget(&vec![9, 8]), (0, 9));
        assert_eq!(first.imodify(vec![9, 8], |i, x| x + i as i32), vec![9, 8]);
    }
}
