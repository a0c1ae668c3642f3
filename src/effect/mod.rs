//! The effect capability threaded through bulk updates.
//!
//! [`Traversal::modify_f`] is polymorphic over the computational context the
//! caller wants to thread through a structure: plain values, optional
//! results, short-circuiting errors, accumulated validation errors, or a
//! read-only aggregation. Rust has no native higher-kinded generics, so the
//! context is named by a zero-sized *witness type* implementing [`Effect`],
//! whose generic associated type [`Effect::Repr`] maps a value type to its
//! in-context representation.
//!
//! [`Traversal::modify_f`]: crate::optics::Traversal::modify_f
//!
//! # Laws
//!
//! For every witness `F`:
//!
//! ```text
//! F::map(fa, |x| x) == fa
//! F::map(F::map(fa, f), g) == F::map(fa, |x| g(f(x)))
//! F::map2(F::pure(a), fb, f) == F::map(fb, |b| f(a, b))
//! F::map2(fa, F::pure(b), f) == F::map(fa, |a| f(a, b))
//! ```
//!
//! # Example
//!
//! ```
//! use focal::effect::OptionEffect;
//! use focal::optics::{Traversal, VecTraversal};
//!
//! let traversal = VecTraversal::new();
//! let halved = traversal.modify_f::<OptionEffect, _>(vec![2, 4, 6], |x: i32| {
//!     (x % 2 == 0).then_some(x / 2)
//! });
//! assert_eq!(halved, Some(vec![1, 2, 3]));
//!
//! let failed = traversal.modify_f::<OptionEffect, _>(vec![2, 3], |x: i32| {
//!     (x % 2 == 0).then_some(x / 2)
//! });
//! assert_eq!(failed, None);
//! ```

mod validated;

pub use validated::Validated;
pub use validated::ValidatedEffect;

use std::marker::PhantomData;

use crate::monoid::Monoid;

/// The minimal applicative capability: `pure`, `map`, and `map2`.
///
/// Implementors are zero-sized witness types; all methods are static. The
/// traversal engine only ever calls these three operations, in a fixed
/// left-to-right order, so the witness fully determines failure and
/// accumulation semantics without the engine taking part in either.
pub trait Effect {
    /// The representation of a `T` inside this context.
    type Repr<T>;

    /// Lifts a plain value into the context.
    fn pure<T>(value: T) -> Self::Repr<T>;

    /// Applies a function to the value inside the context.
    fn map<T, U, F>(fa: Self::Repr<T>, f: F) -> Self::Repr<U>
    where
        F: FnOnce(T) -> U;

    /// Combines two contextual values with a binary function.
    fn map2<T, U, V, F>(fa: Self::Repr<T>, fb: Self::Repr<U>, f: F) -> Self::Repr<V>
    where
        F: FnOnce(T, U) -> V;
}

/// The trivial context: values are themselves.
///
/// Running a traversal under `Identity` is a plain pure bulk update.
#[derive(Debug, Clone, Copy)]
pub struct Identity;

impl Effect for Identity {
    type Repr<T> = T;

    fn pure<T>(value: T) -> T {
        value
    }

    fn map<T, U, F>(fa: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(fa)
    }

    fn map2<T, U, V, F>(fa: T, fb: U, f: F) -> V
    where
        F: FnOnce(T, U) -> V,
    {
        f(fa, fb)
    }
}

/// Optional results: any absent per-focus result makes the whole run absent.
#[derive(Debug, Clone, Copy)]
pub struct OptionEffect;

impl Effect for OptionEffect {
    type Repr<T> = Option<T>;

    fn pure<T>(value: T) -> Option<T> {
        Some(value)
    }

    fn map<T, U, F>(fa: Option<T>, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        fa.map(f)
    }

    fn map2<T, U, V, F>(fa: Option<T>, fb: Option<U>, f: F) -> Option<V>
    where
        F: FnOnce(T, U) -> V,
    {
        fa.and_then(|a| fb.map(|b| f(a, b)))
    }
}

/// Short-circuiting errors: the first `Err` in visitation order wins.
pub struct ResultEffect<E>(PhantomData<E>);

impl<E> Effect for ResultEffect<E> {
    type Repr<T> = Result<T, E>;

    fn pure<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    fn map<T, U, F>(fa: Result<T, E>, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        fa.map(f)
    }

    fn map2<T, U, V, F>(fa: Result<T, E>, fb: Result<U, E>, f: F) -> Result<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        let a = fa?;
        let b = fb?;
        Ok(f(a, b))
    }
}

/// A read-only aggregation context: carries a monoidal summary and a phantom
/// value type.
///
/// `Const` is how every query on a traversal derives from `modify_f` alone:
/// the per-focus function contributes a monoid value, `map` rebuilds
/// nothing, and `map2` combines summaries in visitation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Const<M, T> {
    value: M,
    _marker: PhantomData<T>,
}

impl<M, T> Const<M, T> {
    /// Wraps a summary value.
    #[must_use]
    pub const fn new(value: M) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Unwraps the summary value.
    pub fn into_inner(self) -> M {
        self.value
    }

    fn retag<U>(self) -> Const<M, U> {
        Const::new(self.value)
    }
}

/// The witness for [`Const`]-based aggregation over a monoid `M`.
pub struct ConstEffect<M>(PhantomData<M>);

impl<M: Monoid> Effect for ConstEffect<M> {
    type Repr<T> = Const<M, T>;

    fn pure<T>(_value: T) -> Const<M, T> {
        Const::new(M::empty())
    }

    fn map<T, U, F>(fa: Const<M, T>, _f: F) -> Const<M, U>
    where
        F: FnOnce(T) -> U,
    {
        fa.retag()
    }

    fn map2<T, U, V, F>(fa: Const<M, T>, fb: Const<M, U>, _f: F) -> Const<M, V>
    where
        F: FnOnce(T, U) -> V,
    {
        Const::new(fa.value.combine(fb.value))
    }
}
