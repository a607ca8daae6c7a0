//! Type class traits implemented by the enhanced containers.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over container values
//! - [`Foldable`]: Folding structures into a summary value
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! These let generic code treat [`SuperList`](crate::SuperList),
//! [`SuperSet`](crate::SuperSet), [`SuperDict`](crate::SuperDict) and
//! [`Optional`](crate::Optional) uniformly.
//!
//! # Examples
//!
//! ```rust
//! use super_iterables::{Optional, superlist, superset};
//! use super_iterables::typeclass::{Foldable, Monoid};
//!
//! fn total<F: Foldable<Inner = i32>>(container: F) -> i32 {
//!     container.fold_left(0, |accumulator, element| accumulator + element)
//! }
//!
//! assert_eq!(total(superlist![1, 2, 3]), 6);
//! assert_eq!(total(superset![4, 5]), 9);
//! assert_eq!(total(Optional::Present(7)), 7);
//!
//! let words = superlist!["ab".to_string(), "cd".to_string()];
//! assert_eq!(String::combine_all(words), "abcd");
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
