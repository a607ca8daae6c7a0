//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `SuperList<_>`
//! directly. [`TypeConstructor`] records the applied type and lets a trait
//! name "the same constructor applied to `B`", which is what [`Functor`]
//! and [`Foldable`] need.
//!
//! [`Functor`]: super::Functor
//! [`Foldable`]: super::Foldable

use crate::collections::{SuperList, SuperSet};
use crate::optional::Optional;

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use super_iterables::SuperList;
/// use super_iterables::typeclass::TypeConstructor;
///
/// fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let strings: SuperList<String> = rewrap(SuperList::from(vec![1, 2]));
/// assert!(strings.is_empty());
/// ```
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for SuperList<T> {
    type Inner = T;
    type WithType<B> = SuperList<B>;
}

impl<T> TypeConstructor for SuperSet<T> {
    type Inner = T;
    type WithType<B> = SuperSet<B>;
}

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}
