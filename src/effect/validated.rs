//! An error-accumulating validation context.
//!
//! [`Validated`] is the accumulating counterpart of `Result`: where
//! [`ResultEffect`](super::ResultEffect) stops at the first error,
//! [`ValidatedEffect`] visits every focus and unions every error, in
//! visitation order.
//!
//! # Example
//!
//! ```
//! use focal::effect::{Validated, ValidatedEffect};
//! use focal::optics::{Traversal, VecTraversal};
//!
//! fn check(x: i32) -> Validated<String, i32> {
//!     if x >= 0 {
//!         Validated::valid(x)
//!     } else {
//!         Validated::invalid(format!("{x} is negative"))
//!     }
//! }
//!
//! let traversal = VecTraversal::new();
//! let outcome = traversal.modify_f::<ValidatedEffect<String>, _>(vec![1, -2, 3, -4], check);
//! assert_eq!(
//!     outcome.into_errors(),
//!     Some(vec!["-2 is negative".to_string(), "-4 is negative".to_string()])
//! );
//! ```

use std::marker::PhantomData;

use super::Effect;

/// Either a valid value or at least one accumulated error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<E, T> {
    /// A successful value.
    Valid(T),
    /// One or more errors; never constructed empty.
    Invalid(Vec<E>),
}

impl<E, T> Validated<E, T> {
    /// Wraps a successful value.
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Wraps a single error.
    pub fn invalid(error: E) -> Self {
        Self::Invalid(vec![error])
    }

    /// Returns `true` for a valid value.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Converts into a `Result`, surrendering the accumulated errors.
    pub fn into_result(self) -> Result<T, Vec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Returns the accumulated errors, if any.
    pub fn into_errors(self) -> Option<Vec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Applies a function to the valid value, passing errors through.
    pub fn map<U, F>(self, f: F) -> Validated<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validated::Valid(f(value)),
            Self::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Combines two validations, accumulating errors from both sides.
    pub fn zip_with<U, V, F>(self, other: Validated<E, U>, f: F) -> Validated<E, V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Valid(a), Validated::Valid(b)) => Validated::Valid(f(a, b)),
            (Self::Invalid(mut left), Validated::Invalid(mut right)) => {
                left.append(&mut right);
                Validated::Invalid(left)
            }
            (Self::Invalid(errors), Validated::Valid(_))
            | (Self::Valid(_), Validated::Invalid(errors)) => Validated::Invalid(errors),
        }
    }
}

impl<E, T> From<Result<T, E>> for Validated<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::valid(value),
            Err(error) => Self::invalid(error),
        }
    }
}

/// The witness for [`Validated`]-based accumulation.
pub struct ValidatedEffect<E>(PhantomData<E>);

impl<E> Effect for ValidatedEffect<E> {
    type Repr<T> = Validated<E, T>;

    fn pure<T>(value: T) -> Validated<E, T> {
        Validated::valid(value)
    }

    fn map<T, U, F>(fa: Validated<E, T>, f: F) -> Validated<E, U>
    where
        F: FnOnce(T) -> U,
    {
        fa.map(f)
    }

    fn map2<T, U, V, F>(fa: Validated<E, T>, fb: Validated<E, U>, f: F) -> Validated<E, V>
    where
        F: FnOnce(T, U) -> V,
    {
        fa.zip_with(fb, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_with_accumulates_both_sides_in_order() {
        let left: Validated<&str, i32> = Validated::invalid("first");
        let right: Validated<&str, i32> = Validated::invalid("second");
        assert_eq!(
            left.zip_with(right, |a, b| a + b),
            Validated::Invalid(vec!["first", "second"])
        );
    }

    #[test]
    fn zip_with_keeps_errors_over_values() {
        let bad: Validated<&str, i32> = Validated::invalid("bad");
        let good: Validated<&str, i32> = Validated::valid(1);
        assert_eq!(
            good.zip_with(bad, |a, b| a + b),
            Validated::Invalid(vec!["bad"])
        );
    }

    #[test]
    fn from_result_round_trips() {
        let ok: Validated<&str, i32> = Ok(5).into();
        assert_eq!(ok.into_result(), Ok(5));
        let err: Validated<&str, i32> = Err("e").into();
        assert_eq!(err.into_result(), Err(vec!["e"]));
    }
}
