//! An optics composition algebra for immutable data.
//!
//! `focal` provides a family of accessor contracts — [`Getter`], [`Fold`],
//! [`Setter`], [`Iso`], [`Lens`], [`Prism`], [`Affine`], [`Traversal`] and
//! their indexed variants — together with the rules for composing any two
//! kinds, an effect-polymorphic bulk-update engine (`modify_f`), and
//! profunctor adaptation for reusing an optic across structurally
//! equivalent type pairs.
//!
//! Every optic is an immutable bundle of functions: build it once, share
//! it freely, apply it anywhere. The crate is purely functional and
//! single-threaded by construction; any concurrency or suspension lives in
//! the effect type a caller threads through `modify_f`.
//!
//! [`Getter`]: optics::Getter
//! [`Fold`]: optics::Fold
//! [`Setter`]: optics::Setter
//! [`Iso`]: optics::Iso
//! [`Lens`]: optics::Lens
//! [`Prism`]: optics::Prism
//! [`Affine`]: optics::Affine
//! [`Traversal`]: optics::Traversal
//!
//! # Example
//!
//! ```
//! use focal::lens;
//! use focal::optics::{LensCompose, Traversal, TraversalCompose, VecTraversal};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Invoice { lines: Vec<Line> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Line { amount: i64 }
//!
//! let lines = lens!(Invoice, lines);
//! let amount = lens!(Line, amount);
//! let each_amount = lines
//!     .compose_traversal(VecTraversal::new())
//!     .compose_lens(amount);
//!
//! let invoice = Invoice {
//!     lines: vec![Line { amount: 100 }, Line { amount: 250 }],
//! };
//! assert_eq!(each_amount.get_all(&invoice), vec![100, 250]);
//!
//! let discounted = each_amount.modify(invoice, |a| a - 50);
//! assert_eq!(discounted.lines[1].amount, 200);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod effect;
pub mod monoid;
pub mod optics;
