//! Foldable type class - folding over data structures.
//!
//! A `Foldable` reduces its elements, in iteration order, into a single
//! summary value.
//!
//! # Consistency between `fold_left` and `fold_right`
//!
//! For associative operations both folds agree:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! # Examples
//!
//! ```rust
//! use super_iterables::{Optional, superlist};
//! use super_iterables::typeclass::Foldable;
//!
//! let sum = superlist![1, 2, 3, 4, 5].fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none: Optional<i32> = Optional::Absent;
//! assert_eq!(none.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::collections::{SuperList, SuperSet};
use crate::optional::Optional;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`, `fold_right`
/// - `length`
/// - `exists`
///
/// # Examples
///
/// ```rust
/// use super_iterables::superlist;
/// use super_iterables::typeclass::Foldable;
///
/// let words = superlist!["a".to_string(), "b".to_string()];
/// assert_eq!(words.fold_map(|word| word), "ab");
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a [`Monoid`] and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns `true` if the structure has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Returns `true` if every element satisfies `predicate`.
    #[inline]
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// SuperList<T> Implementation
// =============================================================================

impl<T> Foldable for SuperList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }
}

// =============================================================================
// SuperSet<T> Implementation
// =============================================================================

impl<T> Foldable for SuperSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }
}

// =============================================================================
// Optional<T> Implementation
// =============================================================================

impl<T> Foldable for Optional<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Optional::Present(value) => function(init, value),
            Optional::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Optional::Present(value) => function(value, init),
            Optional::Absent => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_defined())
    }

    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self {
            Optional::Present(value) => predicate(value),
            Optional::Absent => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{superlist, superset};
    use rstest::rstest;

    #[rstest]
    fn super_list_fold_right_visits_from_the_end() {
        let rendered = superlist![1, 2, 3].fold_right(String::new(), |element, accumulator| {
            format!("{accumulator}{element}")
        });
        assert_eq!(rendered, "321");
    }

    #[rstest]
    fn super_set_for_all_and_exists() {
        let set = superset![2, 4, 6];
        assert!(set.for_all(|x| x % 2 == 0));
        assert!(!set.exists(|x| *x > 6));
    }

    #[rstest]
    fn optional_length() {
        assert_eq!(Optional::Present(1).length(), 1);
        assert_eq!(Optional::<i32>::Absent.length(), 0);
    }

    #[rstest]
    fn empty_list_is_empty() {
        let list: SuperList<i32> = SuperList::new();
        assert!(Foldable::is_empty(&list));
    }
}
