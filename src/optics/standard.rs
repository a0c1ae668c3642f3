//! Ready-made optics for std shapes.
//!
//! A pure namespace populated once: identity and swap isos, the `Option`
//! and `Result` case prisms, and the container traversals re-exported as
//! `each_*` constructors.
//!
//! # Example
//!
//! ```
//! use focal::optics::{each_vec, some_prism, Traversal, TraversalCompose};
//!
//! let present = each_vec().compose_prism(some_prism());
//! let source = vec![Some(1), None, Some(3)];
//! assert_eq!(present.get_all(&source), vec![1, 3]);
//! assert_eq!(
//!     present.modify(source, |x| x * 10),
//!     vec![Some(10), None, Some(30)]
//! );
//! ```

use super::iso::Iso;
use super::prism::Prism;
use super::traversal::{OptionTraversal, ResultTraversal, VecTraversal};

/// The identity iso: both directions are the value itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityIso;

impl<T> Iso<T, T> for IdentityIso {
    fn get(&self, source: T) -> T {
        source
    }

    fn reverse_get(&self, focus: T) -> T {
        focus
    }
}

/// The identity optic.
#[must_use]
pub const fn identity() -> IdentityIso {
    IdentityIso
}

/// The iso between `(A, B)` and `(B, A)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapIso;

impl<A, B> Iso<(A, B), (B, A)> for SwapIso {
    fn get(&self, source: (A, B)) -> (B, A) {
        (source.1, source.0)
    }

    fn reverse_get(&self, focus: (B, A)) -> (A, B) {
        (focus.1, focus.0)
    }
}

/// Swaps the components of a pair.
#[must_use]
pub const fn swap() -> SwapIso {
    SwapIso
}

/// The prism onto the `Some` case of an `Option`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SomePrism;

impl<A: Clone> Prism<Option<A>, A> for SomePrism {
    fn get_optional(&self, source: &Option<A>) -> Option<A> {
        source.clone()
    }

    fn build(&self, focus: A) -> Option<A> {
        Some(focus)
    }
}

/// The `Some` case prism.
#[must_use]
pub const fn some_prism() -> SomePrism {
    SomePrism
}

/// The prism onto the `Ok` case of a `Result`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkPrism;

impl<A: Clone, E> Prism<Result<A, E>, A> for OkPrism {
    fn get_optional(&self, source: &Result<A, E>) -> Option<A> {
        source.as_ref().ok().cloned()
    }

    fn build(&self, focus: A) -> Result<A, E> {
        Ok(focus)
    }
}

/// The `Ok` case prism.
#[must_use]
pub const fn ok_prism() -> OkPrism {
    OkPrism
}

/// The prism onto the `Err` case of a `Result`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrPrism;

impl<A, E: Clone> Prism<Result<A, E>, E> for ErrPrism {
    fn get_optional(&self, source: &Result<A, E>) -> Option<E> {
        source.as_ref().err().cloned()
    }

    fn build(&self, focus: E) -> Result<A, E> {
        Err(focus)
    }
}

/// The `Err` case prism.
#[must_use]
pub const fn err_prism() -> ErrPrism {
    ErrPrism
}

/// The traversal over every element of a `Vec`.
#[must_use]
pub const fn each_vec() -> VecTraversal {
    VecTraversal::new()
}

/// The traversal over the `Some` value of an `Option`.
#[must_use]
pub const fn each_option() -> OptionTraversal {
    OptionTraversal::new()
}

/// The traversal over the `Ok` value of a `Result`.
#[must_use]
pub const fn each_result() -> ResultTraversal {
    ResultTraversal::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips() {
        let id = identity();
        assert_eq!(Iso::<i32, i32>::get(&id, 5), 5);
        assert_eq!(Iso::<i32, i32>::reverse_get(&id, 5), 5);
    }

    #[test]
    fn swap_is_its_own_inverse() {
        let iso = swap();
        assert_eq!(iso.get((1, "a")), ("a", 1));
        assert_eq!(iso.reverse_get(("a", 1)), (1, "a"));
    }

    #[test]
    fn case_prisms_match_their_case_only() {
        assert_eq!(some_prism().get_optional(&Some(1)), Some(1));
        assert_eq!(some_prism().get_optional(&None::<i32>), None);

        let ok: Result<i32, String> = Ok(1);
        let err: Result<i32, String> = Err("e".to_string());
        assert_eq!(ok_prism().get_optional(&ok), Some(1));
        assert_eq!(ok_prism().get_optional(&err), None);
        assert_eq!(err_prism().get_optional(&err), Some("e".to_string()));
        assert_eq!(err_prism().get_optional(&ok), None);
    }
}
