//! Prism optics for partial matching with total construction.
//!
//! A Prism focuses one case of a sum type: `get_optional` matches it,
//! `build` constructs the whole source from a focus. On a non-matching
//! source every write is the identity.
//!
//! # Laws
//!
//! ```text
//! get_optional(&build(a)) == Some(a)               // build-match
//! get_optional(&s) == Some(a) => build(a) == s     // match-build
//! ```
//!
//! # Example
//!
//! ```
//! use focal::optics::{FunctionPrism, Prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape { Circle(f64), Square(f64) }
//!
//! let circle = FunctionPrism::new(
//!     |shape: &Shape| match shape {
//!         Shape::Circle(radius) => Some(*radius),
//!         Shape::Square(_) => None,
//!     },
//!     Shape::Circle,
//! );
//! assert_eq!(circle.get_optional(&Shape::Circle(2.0)), Some(2.0));
//! assert_eq!(circle.modify(Shape::Square(1.0), |r| r * 2.0), Shape::Square(1.0));
//! ```

use std::marker::PhantomData;

use super::affine::Affine;
use crate::effect::Effect;

/// A partial focus on one case of a source, with total construction.
pub trait Prism<S, A> {
    /// Matches the focused case, if the source is in it.
    fn get_optional(&self, source: &S) -> Option<A>;

    /// Constructs a whole source from a focus.
    fn build(&self, focus: A) -> S;

    /// Returns `true` when the source is in the focused case.
    fn is_matching(&self, source: &S) -> bool {
        self.get_optional(source).is_some()
    }

    /// Rewrites the focus when it matches; identity otherwise.
    fn modify<F>(&self, source: S, f: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_optional(&source) {
            Some(focus) => self.build(f(focus)),
            None => source,
        }
    }

    /// Rewrites the focus inside an effect context; a non-matching source
    /// is returned via `pure` with the per-focus function never called.
    fn modify_f<F, Func>(&self, source: S, f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnOnce(A) -> F::Repr<A>,
    {
        match self.get_optional(&source) {
            Some(focus) => F::map(f(focus), |value| self.build(value)),
            None => F::pure(source),
        }
    }

    /// Composes this prism with a prism on the focus type.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Widens this prism into an affine, forgetting construction.
    fn as_affine(self) -> PrismAsAffine<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsAffine::new(self)
    }
}

/// A prism backed by a matcher and a constructor function.
pub struct FunctionPrism<S, A, G, B>
where
    G: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    matcher: G,
    builder: B,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, B> FunctionPrism<S, A, G, B>
where
    G: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    /// Creates a prism from a matcher and a constructor.
    #[must_use]
    pub const fn new(matcher: G, builder: B) -> Self {
        Self {
            matcher,
            builder,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, B> Prism<S, A> for FunctionPrism<S, A, G, B>
where
    G: Fn(&S) -> Option<A>,
    B: Fn(A) -> S,
{
    fn get_optional(&self, source: &S) -> Option<A> {
        (self.matcher)(source)
    }

    fn build(&self, focus: A) -> S {
        (self.builder)(focus)
    }
}

impl<S, A, G, B> Clone for FunctionPrism<S, A, G, B>
where
    G: Fn(&S) -> Option<A> + Clone,
    B: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
            builder: self.builder.clone(),
            _marker: PhantomData,
        }
    }
}

/// A prism composed of two prisms.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn get_optional(&self, source: &S) -> Option<B> {
        self.first
            .get_optional(source)
            .and_then(|mid| self.second.get_optional(&mid))
    }

    fn build(&self, focus: B) -> S {
        self.first.build(self.second.build(focus))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A prism widened into an affine.
///
/// Writes reconstruct through `build`, so the non-matching identity is
/// preserved.
pub struct PrismAsAffine<P, S, A> {
    prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsAffine<P, S, A> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Affine<S, A> for PrismAsAffine<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_optional(&self, source: &S) -> Option<A> {
        self.prism.get_optional(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.prism.is_matching(&source) {
            self.prism.build(value)
        } else {
            source
        }
    }
}

impl<P: Clone, S, A> Clone for PrismAsAffine<P, S, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

/// Builds a prism for one tuple-style variant of an enum.
///
/// ```
/// use focal::prism;
/// use focal::optics::Prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Event { Click(u32), Scroll(i32) }
///
/// let click = prism!(Event, Click, u32);
/// assert_eq!(click.get_optional(&Event::Click(3)), Some(3));
/// assert_eq!(click.get_optional(&Event::Scroll(-1)), None);
/// assert_eq!(click.build(5), Event::Click(5));
/// ```
#[macro_export]
macro_rules! prism {
    ($source:ident, $variant:ident, $focus:ty) => {
        $crate::optics::FunctionPrism::new(
            |source: &$source| match source {
                $source::$variant(focus) => Some(focus.clone()),
                _ => None,
            },
            |focus: $focus| $source::$variant(focus),
        )
    };
}
