//! Affine optics for partial access to at most one value.
//!
//! An Affine focuses zero or one value: `get_optional` reads it when
//! present, `set` replaces it when present and is the identity otherwise.
//! Unlike a [`Prism`](super::Prism) it cannot construct a whole source from
//! a focus, so composing a lens after a prism lands here.
//!
//! # Laws (on a matching source)
//!
//! ```text
//! set(s, a') then get_optional == Some(a')
//! get_optional(&s) == Some(a) => set(s, a) == s
//! ```
//!
//! # Example
//!
//! ```
//! use focal::optics::{Affine, FunctionAffine};
//!
//! let head = FunctionAffine::new(
//!     |source: &Vec<i32>| source.first().copied(),
//!     |mut source: Vec<i32>, value| {
//!         if let Some(slot) = source.first_mut() {
//!             *slot = value;
//!         }
//!         source
//!     },
//! );
//! assert_eq!(head.get_optional(&vec![1, 2]), Some(1));
//! assert_eq!(head.set(vec![], 9), vec![]);
//! ```

use std::marker::PhantomData;

use super::traversal::Traversal;
use crate::effect::Effect;

/// A partial focus on at most one value, readable and writable.
pub trait Affine<S, A> {
    /// Reads the focused value when present.
    fn get_optional(&self, source: &S) -> Option<A>;

    /// Replaces the focused value when present; identity otherwise.
    fn set(&self, source: S, value: A) -> S;

    /// Removes the focus from the source, where the instance supports
    /// removal. The default is the identity.
    fn remove(&self, source: S) -> S {
        source
    }

    /// Returns `true` when the focus is present.
    fn is_matching(&self, source: &S) -> bool {
        self.get_optional(source).is_some()
    }

    /// Rewrites the focus when present; identity otherwise.
    fn modify<F>(&self, source: S, f: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_optional(&source) {
            Some(focus) => self.set(source, f(focus)),
            None => source,
        }
    }

    /// Rewrites the focus inside an effect context; an absent focus is
    /// returned via `pure` with the per-focus function never called.
    fn modify_f<F, Func>(&self, source: S, f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnOnce(A) -> F::Repr<A>,
    {
        match self.get_optional(&source) {
            Some(focus) => F::map(f(focus), |value| self.set(source, value)),
            None => F::pure(source),
        }
    }

    /// Composes this affine with an affine on the focus type.
    fn compose<B, O>(self, other: O) -> ComposedAffine<Self, O, A>
    where
        Self: Sized,
        O: Affine<A, B>,
    {
        ComposedAffine::new(self, other)
    }

    /// Widens this affine into a traversal of at most one focus.
    fn as_traversal(self) -> AffineAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        AffineAsTraversal::new(self)
    }
}

/// An affine backed by a partial getter and a setter function.
pub struct FunctionAffine<S, A, G, T>
where
    G: Fn(&S) -> Option<A>,
    T: Fn(S, A) -> S,
{
    getter: G,
    setter: T,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, T> FunctionAffine<S, A, G, T>
where
    G: Fn(&S) -> Option<A>,
    T: Fn(S, A) -> S,
{
    /// Creates an affine from a partial getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: T) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, T> Affine<S, A> for FunctionAffine<S, A, G, T>
where
    G: Fn(&S) -> Option<A>,
    T: Fn(S, A) -> S,
{
    fn get_optional(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, T> Clone for FunctionAffine<S, A, G, T>
where
    G: Fn(&S) -> Option<A> + Clone,
    T: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

/// An affine composed of two affines.
pub struct ComposedAffine<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedAffine<O1, O2, A> {
    /// Creates a composed affine.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Affine<S, B> for ComposedAffine<O1, O2, A>
where
    O1: Affine<S, A>,
    O2: Affine<A, B>,
{
    fn get_optional(&self, source: &S) -> Option<B> {
        self.first
            .get_optional(source)
            .and_then(|mid| self.second.get_optional(&mid))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_optional(&source) {
            Some(mid) => {
                let updated = self.second.set(mid, value);
                self.first.set(source, updated)
            }
            None => source,
        }
    }

    fn remove(&self, source: S) -> S {
        match self.first.get_optional(&source) {
            Some(mid) => {
                let removed = self.second.remove(mid);
                self.first.set(source, removed)
            }
            None => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedAffine<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// An affine widened into a traversal with zero or one focus.
pub struct AffineAsTraversal<O, S, A> {
    affine: O,
    _marker: PhantomData<(S, A)>,
}

impl<O, S, A> AffineAsTraversal<O, S, A> {
    /// Wraps an affine.
    #[must_use]
    pub const fn new(affine: O) -> Self {
        Self {
            affine,
            _marker: PhantomData,
        }
    }
}

impl<O, S, A> Traversal<S, A> for AffineAsTraversal<O, S, A>
where
    O: Affine<S, A>,
{
    fn modify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        match self.affine.get_optional(&source) {
            Some(focus) => F::map(f(focus), |value| self.affine.set(source, value)),
            None => F::pure(source),
        }
    }
}

impl<O: Clone, S, A> Clone for AffineAsTraversal<O, S, A> {
    fn clone(&self) -> Self {
        Self {
            affine: self.affine.clone(),
            _marker: PhantomData,
        }
    }
}
