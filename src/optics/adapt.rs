//! Profunctor adaptation: reusing an optic across structurally equivalent
//! type pairs.
//!
//! [`map`] rewrites the focus side: reads pass through `post: A -> B`,
//! writes pass through `back: B -> A`. [`contramap`] rewrites the source
//! side: extraction goes through `pre: &S2 -> S1`, and any produced `S1` is
//! folded back into the adapted source via `reconstruct: (S2, S1) -> S2`.
//! [`dimap`] applies both at once.
//!
//! Adaptation never changes cardinality. It is kind-preserving on the focus
//! side; on the source side a one-way `pre` cannot carry total construction,
//! so a prism is widened to an affine (and an iso to a lens) before
//! adapting:
//!
//! ```
//! use focal::optics::{contramap, Affine, FunctionPrism, Prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Wire { payload: Option<u32> }
//!
//! let some = FunctionPrism::new(|o: &Option<u32>| *o, Some);
//! let payload = contramap(
//!     some.as_affine(),
//!     |wire: &Wire| wire.payload,
//!     |_wire, payload| Wire { payload },
//! );
//! assert_eq!(payload.get_optional(&Wire { payload: Some(7) }), Some(7));
//! ```

use std::marker::PhantomData;

use super::affine::Affine;
use super::fold::Fold;
use super::getter::Getter;
use super::iso::Iso;
use super::lens::Lens;
use super::prism::Prism;
use super::setter::Setter;
use super::traversal::Traversal;
use crate::effect::Effect;
use crate::monoid::Monoid;

/// An optic with its focus side rewritten through `post`/`back`.
pub struct Mapped<O, Post, Back, A> {
    optic: O,
    post: Post,
    back: Back,
    _marker: PhantomData<A>,
}

impl<O, Post, Back, A> Mapped<O, Post, Back, A> {
    /// Wraps an optic with a focus-side adapter pair.
    #[must_use]
    pub const fn new(optic: O, post: Post, back: Back) -> Self {
        Self {
            optic,
            post,
            back,
            _marker: PhantomData,
        }
    }
}

impl<O: Clone, Post: Clone, Back: Clone, A> Clone for Mapped<O, Post, Back, A> {
    fn clone(&self) -> Self {
        Self {
            optic: self.optic.clone(),
            post: self.post.clone(),
            back: self.back.clone(),
            _marker: PhantomData,
        }
    }
}

/// Rewrites an optic's focus side: reads through `post`, writes through
/// `back`. Kind-preserving.
pub const fn map<O, Post, Back, A, B>(optic: O, post: Post, back: Back) -> Mapped<O, Post, Back, A>
where
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    Mapped::new(optic, post, back)
}

impl<S, A, B, O, Post, Back> Getter<S, B> for Mapped<O, Post, Back, A>
where
    O: Getter<S, A>,
    Post: Fn(A) -> B,
{
    fn get(&self, source: &S) -> B {
        (self.post)(self.optic.get(source))
    }
}

impl<S, A, B, O, Post, Back> Fold<S, B> for Mapped<O, Post, Back, A>
where
    O: Fold<S, A>,
    A: Clone,
    Post: Fn(A) -> B,
{
    fn fold_map<M, F>(&self, source: &S, mut f: F) -> M
    where
        M: Monoid,
        F: FnMut(&B) -> M,
    {
        self.optic
            .fold_map(source, |a| f(&(self.post)(a.clone())))
    }
}

impl<S, A, B, O, Post, Back> Setter<S, B> for Mapped<O, Post, Back, A>
where
    O: Setter<S, A>,
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    fn modify<F>(&self, source: S, mut f: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.optic
            .modify(source, |a| (self.back)(f((self.post)(a))))
    }
}

impl<S, A, B, O, Post, Back> Iso<S, B> for Mapped<O, Post, Back, A>
where
    O: Iso<S, A>,
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    fn get(&self, source: S) -> B {
        (self.post)(self.optic.get(source))
    }

    fn reverse_get(&self, focus: B) -> S {
        self.optic.reverse_get((self.back)(focus))
    }
}

impl<S, A, B, O, Post, Back> Lens<S, B> for Mapped<O, Post, Back, A>
where
    O: Lens<S, A>,
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    fn get(&self, source: &S) -> B {
        (self.post)(self.optic.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        self.optic.set(source, (self.back)(value))
    }
}

impl<S, A, B, O, Post, Back> Prism<S, B> for Mapped<O, Post, Back, A>
where
    O: Prism<S, A>,
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    fn get_optional(&self, source: &S) -> Option<B> {
        self.optic.get_optional(source).map(&self.post)
    }

    fn build(&self, focus: B) -> S {
        self.optic.build((self.back)(focus))
    }
}

impl<S, A, B, O, Post, Back> Affine<S, B> for Mapped<O, Post, Back, A>
where
    O: Affine<S, A>,
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    fn get_optional(&self, source: &S) -> Option<B> {
        self.optic.get_optional(source).map(&self.post)
    }

    fn set(&self, source: S, value: B) -> S {
        self.optic.set(source, (self.back)(value))
    }

    fn remove(&self, source: S) -> S {
        self.optic.remove(source)
    }
}

impl<S, A, B, O, Post, Back> Traversal<S, B> for Mapped<O, Post, Back, A>
where
    O: Traversal<S, A>,
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    fn modify_f<F, Func>(&self, source: S, mut f: Func) -> F::Repr<S>
    where
        F: Effect,
        Func: FnMut(B) -> F::Repr<B>,
    {
        self.optic.modify_f::<F, _>(source, |a| {
            F::map(f((self.post)(a)), &self.back)
        })
    }
}

/// An optic with its source side rewritten through `pre`/`reconstruct`.
pub struct Contramapped<O, Pre, Rec, S1> {
    optic: O,
    pre: Pre,
    rec: Rec,
    _marker: PhantomData<S1>,
}

impl<O, Pre, Rec, S1> Contramapped<O, Pre, Rec, S1> {
    /// Wraps an optic with a source-side adapter pair.
    #[must_use]
    pub const fn new(optic: O, pre: Pre, rec: Rec) -> Self {
        Self {
            optic,
            pre,
            rec,
            _marker: PhantomData,
        }
    }
}

impl<O: Clone, Pre: Clone, Rec: Clone, S1> Clone for Contramapped<O, Pre, Rec, S1> {
    fn clone(&self) -> Self {
        Self {
            optic: self.optic.clone(),
            pre: self.pre.clone(),
            rec: self.rec.clone(),
            _marker: PhantomData,
        }
    }
}

/// Rewrites an optic's source side: extraction through `pre`, produced
/// sources folded back via `rec`.
///
/// Total construction cannot survive a one-way source adapter, so widen a
/// prism to an affine (and an iso to a lens) before adapting.
pub const fn contramap<O, Pre, Rec, S1, S2>(
    optic: O,
    pre: Pre,
    rec: Rec,
) -> Contramapped<O, Pre, Rec, S1>
where
    Pre: Fn(&S2) -> S1,
    Rec: Fn(S2, S1) -> S2,
{
    Contramapped::new(optic, pre, rec)
}

impl<S2, S1, A, O, Pre, Rec> Getter<S2, A> for Contramapped<O, Pre, Rec, S1>
where
    O: Getter<S1, A>,
    Pre: Fn(&S2) -> S1,
{
    fn get(&self, source: &S2) -> A {
        self.optic.get(&(self.pre)(source))
    }
}

impl<S2, S1, A, O, Pre, Rec> Fold<S2, A> for Contramapped<O, Pre, Rec, S1>
where
    O: Fold<S1, A>,
    Pre: Fn(&S2) -> S1,
{
    fn fold_map<M, F>(&self, source: &S2, f: F) -> M
    where
        M: Monoid,
        F: FnMut(&A) -> M,
    {
        self.optic.fold_map(&(self.pre)(source), f)
    }
}

impl<S2, S1, A, O, Pre, Rec> Setter<S2, A> for Contramapped<O, Pre, Rec, S1>
where
    O: Setter<S1, A>,
    Pre: Fn(&S2) -> S1,
    Rec: Fn(S2, S1) -> S2,
{
    fn modify<F>(&self, source: S2, f: F) -> S2
    where
        F: FnMut(A) -> A,
    {
        let inner = self.optic.modify((self.pre)(&source), f);
        (self.rec)(source, inner)
    }
}

impl<S2, S1, A, O, Pre, Rec> Lens<S2, A> for Contramapped<O, Pre, Rec, S1>
where
    O: Lens<S1, A>,
    Pre: Fn(&S2) -> S1,
    Rec: Fn(S2, S1) -> S2,
{
    fn get(&self, source: &S2) -> A {
        self.optic.get(&(self.pre)(source))
    }

    fn set(&self, source: S2, value: A) -> S2 {
        let inner = self.optic.set((self.pre)(&source), value);
        (self.rec)(source, inner)
    }
}

impl<S2, S1, A, O, Pre, Rec> Affine<S2, A> for Contramapped<O, Pre, Rec, S1>
where
    O: Affine<S1, A>,
    Pre: Fn(&S2) -> S1,
    Rec: Fn(S2, S1) -> S2,
{
    fn get_optional(&self, source: &S2) -> Option<A> {
        self.optic.get_optional(&(self.pre)(source))
    }

    fn set(&self, source: S2, value: A) -> S2 {
        let inner = self.optic.set((self.pre)(&source), value);
        (self.rec)(source, inner)
    }

    fn remove(&self, source: S2) -> S2 {
        let inner = self.optic.remove((self.pre)(&source));
        (self.rec)(source, inner)
    }
}

impl<S2, S1, A, O, Pre, Rec> Traversal<S2, A> for Contramapped<O, Pre, Rec, S1>
where
    O: Traversal<S1, A>,
    Pre: Fn(&S2) -> S1,
    Rec: Fn(S2, S1) -> S2,
{
    fn modify_f<F, Func>(&self, source: S2, f: Func) -> F::Repr<S2>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let inner = self.optic.modify_f::<F, _>((self.pre)(&source), f);
        F::map(inner, |rebuilt| (self.rec)(source, rebuilt))
    }
}

/// Rewrites both sides at once: `dimap(pre, rec, post, back)` is
/// `contramap(map(optic, post, back), pre, rec)`.
pub const fn dimap<O, Pre, Rec, Post, Back, S1, S2, A, B>(
    optic: O,
    pre: Pre,
    rec: Rec,
    post: Post,
    back: Back,
) -> Contramapped<Mapped<O, Post, Back, A>, Pre, Rec, S1>
where
    Pre: Fn(&S2) -> S1,
    Rec: Fn(S2, S1) -> S2,
    Post: Fn(A) -> B,
    Back: Fn(B) -> A,
{
    contramap(map(optic, post, back), pre, rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens;
    use crate::optics::{FunctionLens, VecTraversal};

    #[derive(Clone, PartialEq, Debug)]
    struct Celsius {
        degrees: f64,
    }

    #[test]
    fn map_rewrites_both_directions_of_a_lens() {
        let degrees = lens!(Celsius, degrees);
        let kelvin = map(degrees, |c: f64| c + 273.15, |k: f64| k - 273.15);

        let freezing = Celsius { degrees: 0.0 };
        assert!((Lens::get(&kelvin, &freezing) - 273.15).abs() < f64::EPSILON);

        let set = Lens::set(&kelvin, freezing, 274.15);
        assert!((set.degrees - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn map_preserves_traversal_cardinality() {
        let doubled = map(VecTraversal::new(), |x: i32| x * 2, |x: i32| x / 2);
        assert_eq!(Traversal::get_all(&doubled, &vec![1, 2, 3]), vec![2, 4, 6]);
        assert_eq!(
            Traversal::modify(&doubled, vec![1, 2, 3], |x| x + 2),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn contramap_folds_updates_back_into_the_adapted_source() {
        #[derive(Clone, PartialEq, Debug)]
        struct Tagged {
            tag: &'static str,
            degrees: f64,
        }

        let degrees: FunctionLens<Celsius, f64, _, _> = lens!(Celsius, degrees);
        let adapted = contramap(
            degrees,
            |tagged: &Tagged| Celsius {
                degrees: tagged.degrees,
            },
            |tagged: Tagged, celsius: Celsius| Tagged {
                degrees: celsius.degrees,
                ..tagged
            },
        );

        let reading = Tagged {
            tag: "probe-1",
            degrees: 20.0,
        };
        assert!((Lens::get(&adapted, &reading) - 20.0).abs() < f64::EPSILON);

        let updated = Lens::set(&adapted, reading, 25.0);
        assert_eq!(updated.tag, "probe-1");
        assert!((updated.degrees - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dimap_rewrites_both_boundaries() {
        #[derive(Clone, PartialEq, Debug)]
        struct Wrapper {
            inner: Celsius,
        }

        let degrees: FunctionLens<Celsius, f64, _, _> = lens!(Celsius, degrees);
        let adapted = dimap(
            degrees,
            |wrapper: &Wrapper| wrapper.inner.clone(),
            |wrapper: Wrapper, inner: Celsius| Wrapper { inner, ..wrapper },
            |c: f64| c + 273.15,
            |k: f64| k - 273.15,
        );

        let wrapped = Wrapper {
            inner: Celsius { degrees: 0.0 },
        };
        assert!((Lens::get(&adapted, &wrapped) - 273.15).abs() < f64::EPSILON);
        let set = Lens::set(&adapted, wrapped, 273.15);
        assert!(set.inner.degrees.abs() < f64::EPSILON);
    }
}
