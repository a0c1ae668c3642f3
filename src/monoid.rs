//! Semigroup and Monoid type classes.
//!
//! A monoid is an associative binary operation together with an identity
//! element. Folds aggregate their focuses through a monoid instead of
//! materialising an intermediate list, and the [`ConstEffect`] read-only
//! context combines per-focus results the same way.
//!
//! [`ConstEffect`]: crate::effect::ConstEffect
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of a monoid `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))   // associativity
//! T::empty().combine(a) == a                             // left identity
//! a.combine(T::empty()) == a                             // right identity
//! ```
//!
//! # Examples
//!
//! ```
//! use focal::monoid::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
//! assert_eq!(Sum(3).combine(Sum(4)), Sum(7));
//! assert_eq!(Sum::<i32>::empty(), Sum(0));
//! ```

/// A type with an associative `combine` operation.
pub trait Semigroup {
    /// Combines two values associatively.
    fn combine(self, other: Self) -> Self;
}

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Additive wrapper: `combine` is `+`, `empty` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sum<A>(pub A);

/// Multiplicative wrapper: `combine` is `*`, `empty` is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Product<A>(pub A);

macro_rules! numeric_wrapper_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Semigroup for Sum<$ty> {
                fn combine(self, other: Self) -> Self {
                    Sum(self.0 + other.0)
                }
            }

            impl Monoid for Sum<$ty> {
                fn empty() -> Self {
                    Sum(0)
                }
            }

            impl Semigroup for Product<$ty> {
                fn combine(self, other: Self) -> Self {
                    Product(self.0 * other.0)
                }
            }

            impl Monoid for Product<$ty> {
                fn empty() -> Self {
                    Product(1)
                }
            }

            #[cfg(test)]
            paste::paste! {
                mod [<wrapper_laws_ $ty>] {
                    use super::{Monoid, Product, Semigroup, Sum};

                    #[test]
                    fn sum_identity() {
                        assert_eq!(Sum::<$ty>::empty().combine(Sum(3)), Sum(3));
                        assert_eq!(Sum::<$ty>(3).combine(Sum::empty()), Sum(3));
                    }

                    #[test]
                    fn product_identity() {
                        assert_eq!(Product::<$ty>::empty().combine(Product(3)), Product(3));
                        assert_eq!(Product::<$ty>(3).combine(Product::empty()), Product(3));
                    }
                }
            }
        )*
    };
}

numeric_wrapper_impls!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Disjunctive boolean wrapper: `combine` is `||`, `empty` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

/// Conjunctive boolean wrapper: `combine` is `&&`, `empty` is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct All(pub bool);

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

/// Keeps the leftmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct First<A>(pub Option<A>);

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        match self.0 {
            Some(value) => Self(Some(value)),
            None => other,
        }
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

/// Keeps the rightmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Last<A>(pub Option<A>);

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        match other.0 {
            Some(value) => Self(Some(value)),
            None => self,
        }
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_monoid_combines_in_order() {
        let combined = String::combine_all(vec![
            String::from("a"),
            String::from("b"),
            String::from("c"),
        ]);
        assert_eq!(combined, "abc");
    }

    #[test]
    fn vec_monoid_concatenates() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
        assert!(Vec::<i32>::empty().is_empty());
    }

    #[test]
    fn first_keeps_leftmost() {
        assert_eq!(First(Some(1)).combine(First(Some(2))), First(Some(1)));
        assert_eq!(First(None).combine(First(Some(2))), First(Some(2)));
    }

    #[test]
    fn last_keeps_rightmost() {
        assert_eq!(Last(Some(1)).combine(Last(Some(2))), Last(Some(2)));
        assert_eq!(Last(Some(1)).combine(Last(None)), Last(Some(1)));
    }

    #[test]
    fn any_all_identities() {
        assert_eq!(Any::empty().combine(Any(true)), Any(true));
        assert_eq!(All::empty().combine(All(false)), All(false));
    }
}
