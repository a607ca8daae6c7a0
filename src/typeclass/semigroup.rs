//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Instances
//!
//! | Type            | `combine`                                   |
//! |-----------------|---------------------------------------------|
//! | `String`        | concatenation                               |
//! | `SuperList<T>`  | concatenation                               |
//! | `SuperSet<T>`   | union                                       |
//! | `SuperDict<K,V>`| merge, values from the right operand win    |
//! | `Optional<T>`   | combines held values, `Absent` is neutral   |

use std::hash::Hash;

use crate::collections::{SuperDict, SuperList, SuperSet};
use crate::optional::Optional;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{superdict, superlist};
/// use super_iterables::typeclass::Semigroup;
///
/// assert_eq!(superlist![1, 2].combine(superlist![3]), superlist![1, 2, 3]);
///
/// let merged = superdict! {"a" => 1, "b" => 2}.combine(superdict! {"b" => 20});
/// assert_eq!(merged, superdict! {"a" => 1, "b" => 20});
/// ```
pub trait Semigroup {
    /// Combines two values associatively.
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, leaving both intact.
    #[inline]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every item of `iterator` from left to right.
    ///
    /// Returns `Absent` for an empty iterator, since a semigroup has no
    /// identity element to fall back on.
    fn reduce_all<I>(iterator: I) -> Optional<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine).into()
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for SuperList<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

impl<T: Hash + Eq> Semigroup for SuperSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<K: Hash + Eq, V> Semigroup for SuperDict<K, V> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (present @ Self::Present(_), Self::Absent) | (Self::Absent, present) => present,
        }
    }
}
