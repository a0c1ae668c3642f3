//! Getter optics for read-only access to exactly one value.
//!
//! A Getter is the read side of a [`Lens`](crate::optics::Lens) with the
//! write capability stripped away: a total function from a structure to one
//! focused value. Getters compose with each other and widen into
//! [`Fold`](crate::optics::Fold).
//!
//! Reads return owned values rather than references so that profunctor
//! adaptation can rewrite the output through arbitrary functions.
//!
//! # Example
//!
//! ```
//! use focal::optics::{FunctionGetter, Getter};
//!
//! #[derive(Clone)]
//! struct Person { name: String }
//!
//! let name = FunctionGetter::new(|person: &Person| person.name.clone());
//! let alice = Person { name: "Alice".to_string() };
//! assert_eq!(name.get(&alice), "Alice");
//! ```

use std::marker::PhantomData;

use super::fold::Fold;
use crate::monoid::Monoid;

/// A total read-only focus on exactly one value.
pub trait Getter<S, A> {
    /// Extracts the focused value.
    fn get(&self, source: &S) -> A;

    /// Composes this getter with another getter for a nested value.
    fn compose<B, G>(self, other: G) -> ComposedGetter<Self, G, A>
    where
        Self: Sized,
        G: Getter<A, B>,
    {
        ComposedGetter::new(self, other)
    }

    /// Widens this getter into a one-focus fold.
    fn as_fold(self) -> GetterAsFold<Self, S, A>
    where
        Self: Sized,
    {
        GetterAsFold::new(self)
    }
}

/// A getter backed by a function.
pub struct FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    getter: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    /// Creates a getter from an extraction function.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Getter<S, A> for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }
}

impl<S, A, G> Clone for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> std::fmt::Debug for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

/// A getter composed of two getters.
pub struct ComposedGetter<G1, G2, A> {
    first: G1,
    second: G2,
    _marker: PhantomData<A>,
}

impl<G1, G2, A> ComposedGetter<G1, G2, A> {
    /// Creates a composed getter.
    #[must_use]
    pub const fn new(first: G1, second: G2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, G1, G2> Getter<S, B> for ComposedGetter<G1, G2, A>
where
    G1: Getter<S, A>,
    G2: Getter<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }
}

impl<G1: Clone, G2: Clone, A> Clone for ComposedGetter<G1, G2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A getter widened into a fold that yields exactly one value.
pub struct GetterAsFold<G, S, A> {
    getter: G,
    _marker: PhantomData<(S, A)>,
}

impl<G, S, A> GetterAsFold<G, S, A> {
    /// Wraps a getter.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<G, S, A> Fold<S, A> for GetterAsFold<G, S, A>
where
    G: Getter<S, A>,
{
    fn fold_map<M, F>(&self, source: &S, mut f: F) -> M
    where
        M: Monoid,
        F: FnMut(&A) -> M,
    {
        f(&self.getter.get(source))
    }
}

impl<G: Clone, S, A> Clone for GetterAsFold<G, S, A> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn function_getter_extracts() {
        let x_getter = FunctionGetter::new(|point: &Point| point.x);
        assert_eq!(x_getter.get(&Point { x: 10, y: 20 }), 10);
    }

    #[test]
    fn composed_getter_reads_through() {
        #[derive(Clone)]
        struct Wrapper {
            point: Point,
        }

        let point_getter = FunctionGetter::new(|wrapper: &Wrapper| wrapper.point.clone());
        let y_getter = FunctionGetter::new(|point: &Point| point.y);
        let composed = point_getter.compose(y_getter);

        let wrapper = Wrapper {
            point: Point { x: 1, y: 2 },
        };
        assert_eq!(composed.get(&wrapper), 2);
    }

    #[test]
    fn getter_as_fold_yields_one_focus() {
        let x_getter = FunctionGetter::new(|point: &Point| point.x);
        let fold = x_getter.as_fold();
        assert_eq!(fold.get_all(&Point { x: 7, y: 0 }), vec![7]);
        assert_eq!(fold.length(&Point { x: 7, y: 0 }), 1);
    }
}
