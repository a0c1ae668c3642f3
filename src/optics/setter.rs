//! Setter optics for write-only bulk rewrites.
//!
//! A Setter applies a pure function to every focus without offering any way
//! to read them back. It is the write-only end of the optic hierarchy:
//! every writable kind widens into it.
//!
//! # Law
//!
//! `modify` with the identity function returns the source unchanged.
//!
//! # Example
//!
//! ```
//! use focal::optics::{FunctionSetter, Setter};
//!
//! let each = FunctionSetter::new(|source: Vec<i32>, f: &mut dyn FnMut(i32) -> i32| {
//!     source.into_iter().map(|x| f(x)).collect()
//! });
//! assert_eq!(each.modify(vec![1, 2, 3], |x| x * 10), vec![10, 20, 30]);
//! assert_eq!(each.set(vec![1, 2, 3], 0), vec![0, 0, 0]);
//! ```

use std::marker::PhantomData;

/// A write-only bulk rewrite over zero or more focuses.
pub trait Setter<S, A> {
    /// Rewrites every focus with the function.
    fn modify<F>(&self, source: S, f: F) -> S
    where
        F: FnMut(A) -> A;

    /// Overwrites every focus with the same value.
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Composes this setter with a setter on the focus type.
    fn compose<B, T>(self, other: T) -> ComposedSetter<Self, T, A>
    where
        Self: Sized,
        T: Setter<A, B>,
    {
        ComposedSetter::new(self, other)
    }
}

/// A setter backed by a modification function.
pub struct FunctionSetter<S, A, G>
where
    G: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    modifier: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionSetter<S, A, G>
where
    G: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Creates a setter from a modification function.
    #[must_use]
    pub const fn new(modifier: G) -> Self {
        Self {
            modifier,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Setter<S, A> for FunctionSetter<S, A, G>
where
    G: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn modify<F>(&self, source: S, mut f: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.modifier)(source, &mut f)
    }
}

impl<S, A, G> Clone for FunctionSetter<S, A, G>
where
    G: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            modifier: self.modifier.clone(),
            _marker: PhantomData,
        }
    }
}

/// A setter composed of two setters.
pub struct ComposedSetter<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedSetter<T1, T2, A> {
    /// Creates a composed setter.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Setter<S, B> for ComposedSetter<T1, T2, A>
where
    T1: Setter<S, A>,
    T2: Setter<A, B>,
{
    fn modify<F>(&self, source: S, mut f: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first
            .modify(source, |mid| self.second.modify(mid, &mut f))
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedSetter<T1, T2, A> {
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

    fn each_element() -> impl Setter<Vec<i32>, i32> + Clone {
        FunctionSetter::new(|source: Vec<i32>, f: &mut dyn FnMut(i32) -> i32| {
            source.into_iter().map(|x| f(x)).collect()
        })
    }

    #[test]
    fn identity_modification_is_identity() {
        let setter = each_element();
        assert_eq!(setter.modify(vec![1, 2, 3], |x| x), vec![1, 2, 3]);
    }

    #[test]
    fn set_overwrites_every_focus() {
        let setter = each_element();
        assert_eq!(setter.set(vec![1, 2, 3], 9), vec![9, 9, 9]);
    }

    #[test]
    fn composed_setter_rewrites_nested_focuses() {
        let outer = FunctionSetter::new(
            |source: Vec<Vec<i32>>, f: &mut dyn FnMut(Vec<i32>) -> Vec<i32>| {
                source.into_iter().map(|x| f(x)).collect()
            },
        );
        let composed = outer.compose(each_element());
        assert_eq!(
            composed.modify(vec![vec![1], vec![2, 3]], |x| x + 1),
            vec![vec![2], vec![3, 4]]
        );
    }
}
