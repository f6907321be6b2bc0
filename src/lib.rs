//! # setkit
//!
//! A generic, in-memory set with classic set algebra and functional
//! combinators.
//!
//! ## Overview
//!
//! This library provides [`Set`], an unordered collection of unique
//! elements keyed by value equality. On top of the usual membership and
//! mutation operations it offers:
//!
//! - **Set Algebra**: union, intersection, difference, symmetric
//!   difference, subset/superset/disjointness tests
//! - **Functional Combinators**: `map`, `filter`, `fold`, `reduce`,
//!   `find`, and the `any`/`all`/`none` quantifiers
//! - **Construction Helpers**: the [`set!`] macro, `FromIterator`,
//!   `Extend`, and array conversions
//!
//! The set is unordered by contract: no operation guarantees any element
//! order, and iteration order may differ between otherwise equal sets.
//!
//! All operations are total. Absence is reported through ordinary values
//! (`bool`, `Option`, empty `Vec`); nothing in this crate panics on any
//! input, including operations on an empty set.
//!
//! There is no internal synchronization. A `Set` used from multiple
//! threads must be protected by the caller.
//!
//! ## Feature Flags
//!
//! - `fxhash`: the [`FxSet`] alias backed by `rustc-hash`
//! - `ahash`: the [`ARandomSet`] alias backed by `ahash`
//!
//! ## Example
//!
//! ```rust
//! use setkit::{Set, set};
//!
//! let mut evens = set![2, 4, 6];
//! evens.insert(8);
//!
//! let small: Set<i32> = (1..=4).collect();
//!
//! let both = evens.intersection(&small);
//! assert_eq!(both, set![2, 4]);
//! assert!(both.is_subset(&evens));
//! assert!(both.all(|x| x % 2 == 0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use setkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;

mod macros;

pub use set::{IntoIter, Iter, Set};

#[cfg(feature = "fxhash")]
pub use set::FxSet;

#[cfg(feature = "ahash")]
pub use set::ARandomSet;
