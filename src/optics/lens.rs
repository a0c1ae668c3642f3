//! Lens optics for total access to exactly one value.
//!
//! A Lens focuses a value that is always present, such as a struct field:
//! `get` extracts it, `set` replaces it, and `modify_f` threads an effectful
//! rewrite through it. A lens widens into [`Getter`], [`Affine`],
//! [`Traversal`], and [`Setter`](super::Setter).
//!
//! # Laws
//!
//! ```text
//! set(s, get(&s)) == s          // get-set
//! get(&set(s, a)) == a          // set-get
//! set(set(s, a), b) == set(s, b) // set-set
//! ```
//!
//! # Example
//!
//! ```
//! use focal::lens;
//! use focal::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: u32 }
//!
//! let age = lens!(Person, age);
//! let alice = Person { name: "Alice".to_string(), age: 30 };
//! assert_eq!(age.get(&alice), 30);
//! let older = age.modify(alice, |a| a + 1);
//! assert_eq!(older.age, 31);
//! ```

use std::marker::PhantomData;

use super::affine::Affine;
use super::getter::Getter;
use super::traversal::Traversal;
use crate::effect::Effect;

/// A total focus on exactly one value, readable and writable.
pub trait Lens<S, A> {
    /// Extracts the focused value.
    fn get(&self, source: &S) -> A;

    /// Replaces the focused value.
    fn set(&self, source: S, value: A) -> S;

    /// Rewrites the focused value with a pure function.
    fn modify<F>(&self, source: S, f: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let focus = self.get(&source);
        self.set(source, f(focus))
    }

    /// Rewrites the focused value inside an effect context.
    fn modify_f<F, Func>(&self, source: S, f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnOnce(A) -> F::Repr<A>,
    {
        let focus = self.get(&source);
        F::map(f(focus), |value| self.set(source, value))
    }

    /// Composes this lens with a lens on the focus type.
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Widens this lens into a getter.
    fn as_getter(self) -> LensAsGetter<Self, S, A>
    where
        Self: Sized,
    {
        LensAsGetter::new(self)
    }

    /// Widens this lens into an affine that always matches.
    fn as_affine(self) -> LensAsAffine<Self, S, A>
    where
        Self: Sized,
    {
        LensAsAffine::new(self)
    }

    /// Widens this lens into a one-focus traversal.
    fn as_traversal(self) -> LensAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

/// A lens backed by a getter and a setter function.
pub struct FunctionLens<S, A, G, T>
where
    G: Fn(&S) -> A,
    T: Fn(S, A) -> S,
{
    getter: G,
    setter: T,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, T> FunctionLens<S, A, G, T>
where
    G: Fn(&S) -> A,
    T: Fn(S, A) -> S,
{
    /// Creates a lens from a getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: T) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, T> Lens<S, A> for FunctionLens<S, A, G, T>
where
    G: Fn(&S) -> A,
    T: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, T> Clone for FunctionLens<S, A, G, T>
where
    G: Fn(&S) -> A + Clone,
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

impl<S, A, G, T> std::fmt::Debug for FunctionLens<S, A, G, T>
where
    G: Fn(&S) -> A,
    T: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let mid = self.first.get(&source);
        self.first.set(source, self.second.set(mid, value))
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A lens narrowed to its read side.
pub struct LensAsGetter<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsGetter<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Getter<S, A> for LensAsGetter<L, S, A>
where
    L: Lens<S, A>,
{
    fn get(&self, source: &S) -> A {
        self.lens.get(source)
    }
}

impl<L: Clone, S, A> Clone for LensAsGetter<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

/// A lens widened into an affine that always matches.
pub struct LensAsAffine<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsAffine<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Affine<S, A> for LensAsAffine<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_optional(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

impl<L: Clone, S, A> Clone for LensAsAffine<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

/// A lens widened into a traversal with exactly one focus.
pub struct LensAsTraversal<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsTraversal<L, S, A> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
{
    fn modify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let focus = self.lens.get(&source);
        F::map(f(focus), |value| self.lens.set(source, value))
    }
}

impl<L: Clone, S, A> Clone for LensAsTraversal<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

/// Builds a lens focusing a named field of a cloneable struct.
///
/// ```
/// use focal::lens;
/// use focal::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = lens!(Point, x);
/// assert_eq!(x.set(Point { x: 1, y: 2 }, 10), Point { x: 10, y: 2 });
/// ```
#[macro_export]
macro_rules! lens {
    ($source:ty, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$source| source.$field.clone(),
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
}
