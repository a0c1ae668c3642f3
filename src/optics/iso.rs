//! Iso optics for lossless two-way conversions.
//!
//! An Iso witnesses that two types carry the same information: `get`
//! converts one way, `reverse_get` converts back, and the round trip in
//! either direction is the identity. Because nothing is lost, an Iso widens
//! into every other kind.
//!
//! # Laws
//!
//! ```text
//! reverse_get(get(s)) == s
//! get(reverse_get(a)) == a
//! ```
//!
//! # Example
//!
//! ```
//! use focal::optics::{FunctionIso, Iso};
//!
//! let celsius_kelvin = FunctionIso::new(|c: f64| c + 273.15, |k: f64| k - 273.15);
//! assert!((celsius_kelvin.get(0.0) - 273.15).abs() < f64::EPSILON);
//! assert!((celsius_kelvin.reverse().get(273.15)).abs() < f64::EPSILON);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// A lossless, total, invertible conversion between two types.
pub trait Iso<S, A> {
    /// Converts forward.
    fn get(&self, source: S) -> A;

    /// Converts backward.
    fn reverse_get(&self, focus: A) -> S;

    /// Swaps the two directions.
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Composes this iso with an iso on the focus type.
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Widens this iso into a lens.
    fn as_lens(self) -> IsoAsLens<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Widens this iso into a prism that always matches.
    fn as_prism(self) -> IsoAsPrism<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

/// An iso backed by a pair of conversion functions.
pub struct FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    getter: G,
    reverser: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, R> FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    /// Creates an iso from forward and backward conversions.
    #[must_use]
    pub const fn new(getter: G, reverser: R) -> Self {
        Self {
            getter,
            reverser,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> Iso<S, A> for FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.getter)(source)
    }

    fn reverse_get(&self, focus: A) -> S {
        (self.reverser)(focus)
    }
}

impl<S, A, G, R> Clone for FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            reverser: self.reverser.clone(),
            _marker: PhantomData,
        }
    }
}

/// An iso with its directions swapped.
#[derive(Clone)]
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Unwraps back to the original orientation.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, focus: S) -> A {
        self.inner.get(focus)
    }
}

/// An iso composed of two isos.
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a composed iso.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, focus: B) -> S {
        self.first.reverse_get(self.second.reverse_get(focus))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// An iso widened into a lens.
pub struct IsoAsLens<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsLens<I, S, A> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Lens<S, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source.clone())
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

impl<I: Clone, S, A> Clone for IsoAsLens<I, S, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

/// An iso widened into a prism that matches every source.
pub struct IsoAsPrism<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsPrism<I, S, A> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Prism<S, A> for IsoAsPrism<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn get_optional(&self, source: &S) -> Option<A> {
        Some(self.iso.get(source.clone()))
    }

    fn build(&self, focus: A) -> S {
        self.iso.reverse_get(focus)
    }
}

impl<I: Clone, S, A> Clone for IsoAsPrism<I, S, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

/// Builds an iso from forward and backward conversion expressions.
///
/// ```
/// use focal::iso;
/// use focal::optics::Iso;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Meters(f64);
///
/// let meters = iso!(|raw: f64| Meters(raw), |wrapped: Meters| wrapped.0);
/// assert_eq!(meters.get(2.0), Meters(2.0));
/// assert_eq!(meters.reverse_get(Meters(2.0)), 2.0);
/// ```
#[macro_export]
macro_rules! iso {
    ($getter:expr, $reverser:expr $(,)?) => {
        $crate::optics::FunctionIso::new($getter, $reverser)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negate() -> impl Iso<i32, i32> + Clone {
        FunctionIso::new(|x: i32| -x, |x: i32| -x)
    }

    #[test]
    fn round_trips_both_ways() {
        let iso = negate();
        assert_eq!(iso.reverse_get(iso.get(5)), 5);
        assert_eq!(iso.get(iso.reverse_get(5)), 5);
    }

    #[test]
    fn reverse_swaps_directions() {
        let iso = negate();
        let reversed = iso.clone().reverse();
        assert_eq!(reversed.get(7), iso.reverse_get(7));
        assert_eq!(reversed.reverse_get(7), iso.get(7));
    }

    #[test]
    fn composed_iso_chains_conversions() {
        let double = FunctionIso::new(|x: i32| x * 2, |x: i32| x / 2);
        let composed = negate().compose(double);
        assert_eq!(composed.get(3), -6);
        assert_eq!(composed.reverse_get(-6), 3);
    }

    #[test]
    fn widened_lens_obeys_lens_contract() {
        let lens = negate().as_lens();
        assert_eq!(lens.get(&4), -4);
        assert_eq!(lens.set(4, -9), 9);
    }

    #[test]
    fn widened_prism_always_matches() {
        let prism = negate().as_prism();
        assert_eq!(prism.get_optional(&4), Some(-4));
        assert_eq!(prism.build(-4), 4);
    }
}
