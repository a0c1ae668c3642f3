//! The optic kind hierarchy and everything built on it.
//!
//! Kinds by cardinality and capability:
//!
//! - exactly one focus: [`Iso`] (reversible), [`Lens`] (read/write),
//!   [`Getter`] (read only)
//! - zero or one: [`Prism`] (with total construction), [`Affine`]
//! - zero or more: [`Traversal`] (read/write), [`Fold`] (read only),
//!   [`Setter`] (write only)
//!
//! Widening between kinds is explicit (`as_lens`, `as_affine`,
//! `as_traversal`, ...); cross-kind composition lives in the `*Compose`
//! extension traits and always lands on the weakest kind that supports
//! both operands.

mod adapt;
mod affine;
mod at;
mod compose;
mod fold;
mod getter;
mod indexed;
mod iso;
mod ixed;
mod lens;
mod paired;
mod parts_of;
mod prism;
mod region;
mod setter;
mod standard;
mod traversal;

pub use adapt::{contramap, dimap, map, Contramapped, Mapped};
pub use affine::{Affine, AffineAsTraversal, ComposedAffine, FunctionAffine};
pub use at::{at, At, MapAt, VecAt};
pub use compose::{AffineCompose, IsoCompose, LensCompose, PrismCompose, TraversalCompose};
pub use fold::{ComposedFold, Fold, FunctionFold};
pub use getter::{ComposedGetter, FunctionGetter, Getter, GetterAsFold};
pub use indexed::{
    ComposedIndexedTraversal, FilteredIndex, FilteredWithIndex, FunctionIndexedFold,
    FunctionIndexedLens, IndexedFold, IndexedLens, IndexedMapTraversal, IndexedTraversal,
    IndexedTraversalAsFold, IndexedVecTraversal, Unindexed,
};
pub use iso::{ComposedIso, FunctionIso, Iso, IsoAsLens, IsoAsPrism, ReversedIso};
pub use ixed::{ix, Ixed, MapIx, VecIx};
pub use lens::{
    ComposedLens, FunctionLens, Lens, LensAsAffine, LensAsGetter, LensAsTraversal,
};
pub use paired::{paired, PairedLens};
pub use parts_of::{deduped, parts_of, reversed, sorted, sorted_by, PartsOf};
pub use prism::{ComposedPrism, FunctionPrism, Prism, PrismAsAffine};
pub use region::{
    dropping, dropping_last, dropping_while, element, filtered, slicing, taking, taking_last,
    taking_while, Dropping, DroppingLast, DroppingWhile, Filtered, Slicing, Taking, TakingLast,
    TakingWhile,
};
pub use setter::{ComposedSetter, FunctionSetter, Setter};
pub use standard::{
    each_option, each_result, each_vec, err_prism, identity, ok_prism, some_prism, ErrPrism,
    IdentityIso, OkPrism, SomePrism, SwapIso, swap,
};
pub use traversal::{
    lazy, traverse_vec, ComposedTraversal, LazyTraversal, OptionTraversal, ResultTraversal,
    Traversal, TraversalAsFold, TraversalAsSetter, VecTraversal,
};
