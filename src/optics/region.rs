//! Region and predicate traversals over sequences.
//!
//! Index-bounded regions (`taking`, `dropping`, `taking_last`,
//! `dropping_last`, `slicing`) clamp out-of-range bounds instead of
//! erroring: a negative count focuses nothing, a count past the end focuses
//! everything available, and an inverted slice is empty.
//!
//! The predicate pair differs in shape: [`taking_while`] and
//! [`dropping_while`] are prefix-based and stop at the first failing
//! element, while [`filtered`] tests every element independently.
//!
//! # Example
//!
//! ```
//! use focal::optics::{taking, taking_while, Traversal};
//!
//! assert_eq!(taking(2).modify(vec![1, 2, 3], |x| x * 10), vec![10, 20, 3]);
//! assert_eq!(taking(100).get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(
//!     taking_while(|x: &i32| *x < 20).get_all(&vec![10, 15, 25, 12]),
//!     vec![10, 15]
//! );
//! ```

use super::ixed::VecIx;
use super::traversal::{traverse_vec, Traversal};
use crate::effect::Effect;

fn clamp_count(count: isize, len: usize) -> usize {
    usize::try_from(count).map_or(0, |count| count.min(len))
}

/// Splits off the suffix at `at`, threads the effect through the prefix,
/// and reattaches the suffix inside the context.
fn traverse_prefix<F, A, Func>(mut source: Vec<A>, at: usize, mut f: Func) -> F::Repr<Vec<A>>
where
    F: Effect,
    Func: FnMut(A) -> F::Repr<A>,
{
    let suffix = source.split_off(at);
    F::map(traverse_vec::<F, _, _>(source, &mut f), |mut prefix| {
        prefix.extend(suffix);
        prefix
    })
}

/// Keeps the prefix at `at` untouched and threads the effect through the
/// suffix.
fn traverse_suffix<F, A, Func>(mut source: Vec<A>, at: usize, mut f: Func) -> F::Repr<Vec<A>>
where
    F: Effect,
    Func: FnMut(A) -> F::Repr<A>,
{
    let suffix = source.split_off(at);
    F::map(traverse_vec::<F, _, _>(suffix, &mut f), move |rebuilt| {
        source.extend(rebuilt);
        source
    })
}

/// Focuses the first `count` elements.
#[derive(Debug, Clone, Copy)]
pub struct Taking {
    count: isize,
}

/// Focuses the first `count` elements; negative counts focus nothing.
#[must_use]
pub const fn taking(count: isize) -> Taking {
    Taking { count }
}

impl<A> Traversal<Vec<A>, A> for Taking {
    fn modify_f<F, Func>(&self, source: Vec<A>, f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let at = clamp_count(self.count, source.len());
        traverse_prefix::<F, _, _>(source, at, f)
    }
}

/// Focuses everything after the first `count` elements.
#[derive(Debug, Clone, Copy)]
pub struct Dropping {
    count: isize,
}

/// Skips the first `count` elements; negative counts skip nothing.
#[must_use]
pub const fn dropping(count: isize) -> Dropping {
    Dropping { count }
}

impl<A> Traversal<Vec<A>, A> for Dropping {
    fn modify_f<F, Func>(&self, source: Vec<A>, f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let at = clamp_count(self.count, source.len());
        traverse_suffix::<F, _, _>(source, at, f)
    }
}

/// Focuses the last `count` elements.
#[derive(Debug, Clone, Copy)]
pub struct TakingLast {
    count: isize,
}

/// Focuses the last `count` elements; negative counts focus nothing.
#[must_use]
pub const fn taking_last(count: isize) -> TakingLast {
    TakingLast { count }
}

impl<A> Traversal<Vec<A>, A> for TakingLast {
    fn modify_f<F, Func>(&self, source: Vec<A>, f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let kept = clamp_count(self.count, source.len());
        let at = source.len() - kept;
        traverse_suffix::<F, _, _>(source, at, f)
    }
}

/// Focuses everything before the last `count` elements.
#[derive(Debug, Clone, Copy)]
pub struct DroppingLast {
    count: isize,
}

/// Skips the last `count` elements; negative counts skip nothing.
#[must_use]
pub const fn dropping_last(count: isize) -> DroppingLast {
    DroppingLast { count }
}

impl<A> Traversal<Vec<A>, A> for DroppingLast {
    fn modify_f<F, Func>(&self, source: Vec<A>, f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let dropped = clamp_count(self.count, source.len());
        let at = source.len() - dropped;
        traverse_prefix::<F, _, _>(source, at, f)
    }
}

/// Focuses the half-open index range `from..to`.
#[derive(Debug, Clone, Copy)]
pub struct Slicing {
    from: isize,
    to: isize,
}

/// Focuses `from..to`; bounds are clamped and an inverted range is empty.
#[must_use]
pub const fn slicing(from: isize, to: isize) -> Slicing {
    Slicing { from, to }
}

impl<A> Traversal<Vec<A>, A> for Slicing {
    fn modify_f<F, Func>(&self, mut source: Vec<A>, mut f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let from = clamp_count(self.from, source.len());
        let to = clamp_count(self.to, source.len()).max(from);

        let mut focused = source.split_off(from);
        let suffix = focused.split_off(to - from);
        F::map(
            traverse_vec::<F, _, _>(focused, &mut f),
            move |rebuilt| {
                source.extend(rebuilt);
                source.extend(suffix);
                source
            },
        )
    }
}

/// Focuses the longest prefix whose elements satisfy the predicate.
#[derive(Debug, Clone, Copy)]
pub struct TakingWhile<P> {
    predicate: P,
}

/// Focuses the prefix up to the first element failing the predicate.
///
/// Later elements satisfying the predicate are not revisited; this is the
/// prefix-based counterpart of [`filtered`].
#[must_use]
pub const fn taking_while<P>(predicate: P) -> TakingWhile<P> {
    TakingWhile { predicate }
}

impl<A, P> Traversal<Vec<A>, A> for TakingWhile<P>
where
    P: Fn(&A) -> bool,
{
    fn modify_f<F, Func>(&self, source: Vec<A>, f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let at = source
            .iter()
            .position(|item| !(self.predicate)(item))
            .unwrap_or(source.len());
        traverse_prefix::<F, _, _>(source, at, f)
    }
}

/// Focuses everything after the longest satisfying prefix.
#[derive(Debug, Clone, Copy)]
pub struct DroppingWhile<P> {
    predicate: P,
}

/// Skips the prefix up to the first element failing the predicate.
#[must_use]
pub const fn dropping_while<P>(predicate: P) -> DroppingWhile<P> {
    DroppingWhile { predicate }
}

impl<A, P> Traversal<Vec<A>, A> for DroppingWhile<P>
where
    P: Fn(&A) -> bool,
{
    fn modify_f<F, Func>(&self, source: Vec<A>, f: Func) -> F::Repr<Vec<A>>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        let at = source
            .iter()
            .position(|item| !(self.predicate)(item))
            .unwrap_or(source.len());
        traverse_suffix::<F, _, _>(source, at, f)
    }
}

/// Focuses the single element at `index`, or nothing when out of range.
#[must_use]
pub const fn element<A>(index: usize) -> VecIx<A> {
    VecIx::new(index)
}

/// A guard traversal over a single value: the value is its own focus when
/// it satisfies the predicate.
#[derive(Debug, Clone, Copy)]
pub struct Filtered<P> {
    predicate: P,
}

/// Focuses a value on itself when the predicate holds.
///
/// Every element is tested independently, so composing this after a
/// collection traversal rewrites all matching elements wherever they sit.
#[must_use]
pub const fn filtered<P>(predicate: P) -> Filtered<P> {
    Filtered { predicate }
}

impl<A, P> Traversal<A, A> for Filtered<P>
where
    P: Fn(&A) -> bool,
{
    fn modify_f<F, Func>(&self, source: A, mut f: Func) -> F::Repr<A>
    where
        F: Effect,
        Func: FnMut(A) -> F::Repr<A>,
    {
        if (self.predicate)(&source) {
            f(source)
        } else {
            F::pure(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::ResultEffect;
    use crate::optics::{Affine, VecTraversal};
    use rstest::rstest;

    #[rstest]
    #[case(100, vec![1, 2, 3], vec![1, 2, 3])]
    #[case(-5, vec![1, 2, 3], vec![])]
    #[case(2, vec![1, 2, 3], vec![1, 2])]
    #[case(0, vec![1, 2, 3], vec![])]
    fn taking_clamps(#[case] count: isize, #[case] source: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(taking(count).get_all(&source), expected);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3], vec![1, 2, 3])]
    #[case(-5, vec![1, 2, 3], vec![1, 2, 3])]
    #[case(2, vec![1, 2, 3], vec![3])]
    #[case(100, vec![1, 2, 3], vec![])]
    fn dropping_clamps(#[case] count: isize, #[case] source: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(dropping(count).get_all(&source), expected);
    }

    #[rstest]
    #[case(1, 3, vec![10, 20, 30, 40], vec![20, 30])]
    #[case(3, 1, vec![10, 20, 30, 40], vec![])]
    #[case(-2, 100, vec![10, 20], vec![10, 20])]
    fn slicing_clamps(
        #[case] from: isize,
        #[case] to: isize,
        #[case] source: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(slicing(from, to).get_all(&source), expected);
    }

    #[test]
    fn last_regions_anchor_at_the_tail() {
        assert_eq!(taking_last(2).get_all(&vec![1, 2, 3]), vec![2, 3]);
        assert_eq!(taking_last(100).get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(dropping_last(2).get_all(&vec![1, 2, 3]), vec![1]);
        assert_eq!(dropping_last(-1).get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn taking_while_stops_at_first_failure() {
        let prefix = taking_while(|x: &i32| *x < 20);
        assert_eq!(prefix.get_all(&vec![10, 15, 25, 12]), vec![10, 15]);
        assert_eq!(
            prefix.modify(vec![10, 15, 25, 12], |x| x + 1),
            vec![11, 16, 25, 12]
        );
    }

    #[test]
    fn dropping_while_keeps_the_failing_suffix() {
        let suffix = dropping_while(|x: &i32| *x < 20);
        assert_eq!(suffix.get_all(&vec![10, 15, 25, 12]), vec![25, 12]);
    }

    #[test]
    fn regions_preserve_untouched_elements_under_effects() {
        let outcome = taking(2).modify_f::<ResultEffect<&str>, _>(vec![1, 2, 3], Ok);
        assert_eq!(outcome, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn element_is_an_affine_that_never_errors() {
        let third = element::<i32>(2);
        assert_eq!(third.get_optional(&vec![1, 2, 3]), Some(3));
        assert_eq!(third.get_optional(&vec![1]), None);
        assert_eq!(third.set(vec![1], 9), vec![1]);
    }

    #[test]
    fn filtered_tests_every_element_independently() {
        let big = VecTraversal::new().compose(filtered(|x: &i32| *x >= 20));
        assert_eq!(big.get_all(&vec![10, 25, 5, 30]), vec![25, 30]);
        assert_eq!(
            big.modify(vec![10, 25, 5, 30], |x| x + 1),
            vec![10, 26, 5, 31]
        );
    }
}
