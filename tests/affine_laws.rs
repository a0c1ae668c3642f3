//! Property-based tests for Affine laws.
//!
//! On a matching source:
//!
//! - `get_optional(&set(s, a)) == Some(a)`
//! - `get_optional(&s) == Some(a)` implies `set(s, a) == s`
//! - `set(set(s, a1), a2) == set(s, a2)`
//!
//! On a non-matching source every write is the identity.

use focal::optics::{ix, Affine, AffineCompose, LensCompose, Prism, SomePrism, VecIx};
use focal::{lens, prism};
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
enum Slot {
    Filled(i32),
    Empty,
}

fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop_oneof![
        any::<i32>().prop_map(Slot::Filled),
        Just(Slot::Empty),
    ]
}

proptest! {
    /// Set-then-get on a vector position.
    #[test]
    fn vec_ix_set_get(source in proptest::collection::vec(any::<i32>(), 0..8), index in 0_usize..10, value in any::<i32>()) {
        let affine: VecIx<i32> = ix::<Vec<i32>, _, _>(index);
        let updated = affine.set(source.clone(), value);
        if index < source.len() {
            prop_assert_eq!(affine.get_optional(&updated), Some(value));
        } else {
            prop_assert_eq!(updated, source);
        }
    }

    /// Setting back the current focus changes nothing.
    #[test]
    fn vec_ix_get_set(source in proptest::collection::vec(any::<i32>(), 0..8), index in 0_usize..10) {
        let affine: VecIx<i32> = ix::<Vec<i32>, _, _>(index);
        if let Some(focus) = affine.get_optional(&source) {
            prop_assert_eq!(affine.set(source.clone(), focus), source);
        }
    }

    /// The second set wins.
    #[test]
    fn vec_ix_set_set(source in proptest::collection::vec(any::<i32>(), 0..8), index in 0_usize..10, v1 in any::<i32>(), v2 in any::<i32>()) {
        let affine: VecIx<i32> = ix::<Vec<i32>, _, _>(index);
        prop_assert_eq!(
            affine.set(affine.set(source.clone(), v1), v2),
            affine.set(source, v2)
        );
    }

    /// A prism-shaped affine is the identity off its case.
    #[test]
    fn prism_affine_identity_off_case(slot in slot_strategy(), value in any::<i32>()) {
        let affine = prism!(Slot, Filled, i32).as_affine();
        let updated = affine.set(slot.clone(), value);
        match slot {
            Slot::Filled(_) => prop_assert_eq!(affine.get_optional(&updated), Some(value)),
            Slot::Empty => prop_assert_eq!(updated, Slot::Empty),
        }
    }

    /// Lens-then-prism lands on a lawful affine.
    #[test]
    fn lens_then_prism_affine_laws(payload in proptest::option::of(any::<i32>()), value in any::<i32>()) {
        #[derive(Clone, PartialEq, Debug)]
        struct Message {
            payload: Option<i32>,
        }

        let affine = lens!(Message, payload).compose_prism(SomePrism);
        let message = Message { payload };

        if let Some(focus) = affine.get_optional(&message) {
            prop_assert_eq!(affine.set(message.clone(), focus), message.clone());
        }

        let updated = affine.set(message.clone(), value);
        match message.payload {
            Some(_) => prop_assert_eq!(affine.get_optional(&updated), Some(value)),
            None => prop_assert_eq!(updated, message),
        }
    }

    /// Composed affines gate on the outer match.
    #[test]
    fn composed_affine_laws(source in proptest::collection::vec(proptest::option::of(any::<i32>()), 0..6), index in 0_usize..8, value in any::<i32>()) {
        let affine = ix::<Vec<Option<i32>>, _, _>(index).compose_prism(SomePrism);

        let updated = affine.set(source.clone(), value);
        match source.get(index) {
            Some(Some(_)) => prop_assert_eq!(affine.get_optional(&updated), Some(value)),
            _ => prop_assert_eq!(updated, source),
        }
    }
}
