//! # super-iterables
//!
//! Chainable, functional-style wrappers around the standard list, map and
//! set containers, plus a monadic optional value.
//!
//! ## Overview
//!
//! - [`SuperList`]: ordered sequence with `map`, `filter`, `reduce`,
//!   `partition`, `group_by`, `sort_by`, `flat_map`, `pluck`, ...
//! - [`SuperDict`]: insertion-ordered mapping with key/value projections
//! - [`SuperSet`]: unique elements with set algebra
//! - [`Optional`]: `Present(T)` / `Absent`, returned by lookups
//! - [`CollectionError`]: failures of `head`, `reduce`, `get`, `pluck`
//!
//! Every transformation returns an enhanced container again, so calls chain.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Functor`, `Foldable`, `Semigroup`, `Monoid`
//! - `serde`: serialization support
//! - `fxhash` / `ahash`: alternative hashers for `SuperDict` and `SuperSet`
//! - `full`: `typeclass` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use super_iterables::prelude::*;
//!
//! let value = superlist![1, 2, 3]
//!     .find(|x| *x == 2)
//!     .copied()
//!     .map(|x| x + 1)
//!     .get_or_else(3);
//! assert_eq!(value, 3);
//!
//! let descending = superlist![1, 2, 3].sort_by(|x| -x, false);
//! assert_eq!(descending, [3, 2, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use super_iterables::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::{StarArgs, SuperDict, SuperList, SuperSet};
    pub use crate::error::{CollectionError, Result};
    pub use crate::optional::Optional;
    pub use crate::{superdict, superlist, superset};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

mod collections;
mod error;
mod macros;
mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use collections::{HashBuilder, StarArgs, SuperDict, SuperList, SuperSet};
pub use error::{CollectionError, Result};
pub use optional::Optional;
