//! The full 5x5 composition table, pinned at compile time.
//!
//! For every ordered pair of kinds the composition lands on the join kind
//! of the table in the `compose` module docs. Each entry below names the
//! concrete composed type an extension-trait method produces and asserts
//! it implements the join kind's trait; a kind regression fails the build,
//! not the test run.

use focal::optics::{
    Affine, AffineAsTraversal, AffineCompose, ComposedAffine, ComposedIso, ComposedLens,
    ComposedPrism, ComposedTraversal, FunctionAffine, FunctionIso, FunctionLens, FunctionPrism,
    Iso, IsoAsLens, IsoAsPrism, Lens, LensAsAffine, LensAsTraversal, LensCompose, Prism,
    PrismAsAffine, PrismCompose, Traversal,
};
use static_assertions::assert_impl_all;

type IsoSA = FunctionIso<u64, u32, fn(u64) -> u32, fn(u32) -> u64>;
type IsoAB = FunctionIso<u32, u16, fn(u32) -> u16, fn(u16) -> u32>;
type LensSA = FunctionLens<u64, u32, fn(&u64) -> u32, fn(u64, u32) -> u64>;
type LensAB = FunctionLens<u32, u16, fn(&u32) -> u16, fn(u32, u16) -> u32>;
type PrismSA = FunctionPrism<u64, u32, fn(&u64) -> Option<u32>, fn(u32) -> u64>;
type PrismAB = FunctionPrism<u32, u16, fn(&u32) -> Option<u16>, fn(u16) -> u32>;
type AffineSA = FunctionAffine<u64, u32, fn(&u64) -> Option<u32>, fn(u64, u32) -> u64>;
type AffineAB = FunctionAffine<u32, u16, fn(&u32) -> Option<u16>, fn(u32, u16) -> u32>;
type TraversalSA = AffineAsTraversal<AffineSA, u64, u32>;
type TraversalAB = AffineAsTraversal<AffineAB, u32, u16>;

// Row 1: iso first.
assert_impl_all!(ComposedIso<IsoSA, IsoAB, u32>: Iso<u64, u16>);
assert_impl_all!(ComposedLens<IsoAsLens<IsoSA, u64, u32>, LensAB, u32>: Lens<u64, u16>);
assert_impl_all!(ComposedPrism<IsoAsPrism<IsoSA, u64, u32>, PrismAB, u32>: Prism<u64, u16>);
assert_impl_all!(
    ComposedAffine<LensAsAffine<IsoAsLens<IsoSA, u64, u32>, u64, u32>, AffineAB, u32>:
    Affine<u64, u16>
);
assert_impl_all!(
    ComposedTraversal<LensAsTraversal<IsoAsLens<IsoSA, u64, u32>, u64, u32>, TraversalAB, u32>:
    Traversal<u64, u16>
);

// Row 2: lens first.
assert_impl_all!(ComposedLens<LensSA, IsoAsLens<IsoAB, u32, u16>, u32>: Lens<u64, u16>);
assert_impl_all!(ComposedLens<LensSA, LensAB, u32>: Lens<u64, u16>);
assert_impl_all!(
    ComposedAffine<LensAsAffine<LensSA, u64, u32>, PrismAsAffine<PrismAB, u32, u16>, u32>:
    Affine<u64, u16>
);
assert_impl_all!(
    ComposedAffine<LensAsAffine<LensSA, u64, u32>, AffineAB, u32>: Affine<u64, u16>
);
assert_impl_all!(
    ComposedTraversal<LensAsTraversal<LensSA, u64, u32>, TraversalAB, u32>: Traversal<u64, u16>
);

// Row 3: prism first.
assert_impl_all!(ComposedPrism<PrismSA, IsoAsPrism<IsoAB, u32, u16>, u32>: Prism<u64, u16>);
assert_impl_all!(
    ComposedAffine<PrismAsAffine<PrismSA, u64, u32>, LensAsAffine<LensAB, u32, u16>, u32>:
    Affine<u64, u16>
);
assert_impl_all!(ComposedPrism<PrismSA, PrismAB, u32>: Prism<u64, u16>);
assert_impl_all!(
    ComposedAffine<PrismAsAffine<PrismSA, u64, u32>, AffineAB, u32>: Affine<u64, u16>
);
assert_impl_all!(
    ComposedTraversal<AffineAsTraversal<PrismAsAffine<PrismSA, u64, u32>, u64, u32>, TraversalAB, u32>:
    Traversal<u64, u16>
);

// Row 4: affine first.
assert_impl_all!(
    ComposedAffine<AffineSA, LensAsAffine<IsoAsLens<IsoAB, u32, u16>, u32, u16>, u32>:
    Affine<u64, u16>
);
assert_impl_all!(
    ComposedAffine<AffineSA, LensAsAffine<LensAB, u32, u16>, u32>: Affine<u64, u16>
);
assert_impl_all!(
    ComposedAffine<AffineSA, PrismAsAffine<PrismAB, u32, u16>, u32>: Affine<u64, u16>
);
assert_impl_all!(ComposedAffine<AffineSA, AffineAB, u32>: Affine<u64, u16>);
assert_impl_all!(
    ComposedTraversal<AffineAsTraversal<AffineSA, u64, u32>, TraversalAB, u32>: Traversal<u64, u16>
);

// Row 5: traversal first.
assert_impl_all!(
    ComposedTraversal<TraversalSA, LensAsTraversal<IsoAsLens<IsoAB, u32, u16>, u32, u16>, u32>:
    Traversal<u64, u16>
);
assert_impl_all!(
    ComposedTraversal<TraversalSA, LensAsTraversal<LensAB, u32, u16>, u32>: Traversal<u64, u16>
);
assert_impl_all!(
    ComposedTraversal<TraversalSA, AffineAsTraversal<PrismAsAffine<PrismAB, u32, u16>, u32, u16>, u32>:
    Traversal<u64, u16>
);
assert_impl_all!(
    ComposedTraversal<TraversalSA, AffineAsTraversal<AffineAB, u32, u16>, u32>: Traversal<u64, u16>
);
assert_impl_all!(ComposedTraversal<TraversalSA, TraversalAB, u32>: Traversal<u64, u16>);

#[derive(Clone, PartialEq, Debug)]
struct Order {
    status: Status,
}

#[derive(Clone, PartialEq, Debug)]
enum Status {
    Shipped(Tracking),
    Pending,
}

#[derive(Clone, PartialEq, Debug)]
struct Tracking {
    codes: Vec<String>,
}

#[test]
fn three_kind_chain_lands_on_a_traversal() {
    let status = focal::lens!(Order, status);
    let shipped = FunctionPrism::new(
        |status: &Status| match status {
            Status::Shipped(tracking) => Some(tracking.clone()),
            Status::Pending => None,
        },
        Status::Shipped,
    );
    let codes = focal::lens!(Tracking, codes);

    let each_code = status
        .compose_prism(shipped)
        .compose_lens(codes)
        .compose_traversal(focal::optics::VecTraversal::new());

    let order = Order {
        status: Status::Shipped(Tracking {
            codes: vec!["a1".to_string(), "b2".to_string()],
        }),
    };
    assert_eq!(
        each_code.get_all(&order),
        vec!["a1".to_string(), "b2".to_string()]
    );

    let upper = each_code.modify(order, |code| code.to_uppercase());
    assert_eq!(
        upper.status,
        Status::Shipped(Tracking {
            codes: vec!["A1".to_string(), "B2".to_string()],
        })
    );

    let pending = Order {
        status: Status::Pending,
    };
    assert!(each_code.get_all(&pending).is_empty());
    assert_eq!(
        each_code.modify(pending.clone(), |code| code.to_uppercase()),
        pending
    );
}

#[test]
fn join_is_associative_in_behaviour() {
    let first = focal::lens!(Order, status);
    let shipped = FunctionPrism::new(
        |status: &Status| match status {
            Status::Shipped(tracking) => Some(tracking.clone()),
            Status::Pending => None,
        },
        Status::Shipped,
    );
    let codes = focal::lens!(Tracking, codes);

    let left_assoc = first
        .clone()
        .compose_prism(shipped.clone())
        .compose_lens(codes.clone());
    let right_assoc = first.compose_affine(shipped.compose_lens(codes));

    let order = Order {
        status: Status::Shipped(Tracking {
            codes: vec!["x".to_string()],
        }),
    };
    assert_eq!(
        left_assoc.get_optional(&order),
        right_assoc.get_optional(&order)
    );
    assert_eq!(
        left_assoc.set(order.clone(), vec!["y".to_string()]),
        right_assoc.set(order, vec!["y".to_string()])
    );
}
