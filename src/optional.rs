//! Optional type - a value that may be present or absent.
//!
//! This module provides [`Optional<T>`], a two-variant sum type returned by
//! the lookup-style operations of the enhanced containers (`head_option`,
//! `find`, `get`). It supports monadic composition so that callers can
//! transform a possibly missing value without checking for presence at each
//! step.
//!
//! # Examples
//!
//! ```rust
//! use super_iterables::{Optional, superlist};
//!
//! let result = superlist![1, 2, 3]
//!     .find(|x| *x == 2)
//!     .copied()
//!     .map(|x| x + 1)
//!     .get_or_else(3);
//! assert_eq!(result, 3);
//!
//! let value = Optional::Present(3)
//!     .map(|x| x + 1)
//!     .filter(|x| *x > 3)
//!     .get_or_else(0);
//! assert_eq!(value, 4);
//! ```

use std::fmt;

use crate::error::{CollectionError, Result};

/// A value that is either `Present(T)` or `Absent`.
///
/// Two `Absent` values are always equal and hash identically; two `Present`
/// values are equal iff the values they hold are equal.
///
/// # Examples
///
/// ```rust
/// use super_iterables::Optional;
///
/// let present = Optional::Present(42);
/// let absent: Optional<i32> = Optional::Absent;
///
/// assert!(present.is_defined());
/// assert!(absent.is_empty());
/// assert_eq!(absent.get_or_else(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// Holds exactly one value.
    Present(T),
    /// Holds nothing.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::Optional;
    ///
    /// assert!(Optional::Present(1).is_defined());
    /// assert!(!Optional::<i32>::Absent.is_defined());
    /// ```
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyOptional`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::{CollectionError, Optional};
    ///
    /// assert_eq!(Optional::Present(7).get(), Ok(7));
    /// assert_eq!(
    ///     Optional::<i32>::Absent.get(),
    ///     Err(CollectionError::EmptyOptional)
    /// );
    /// ```
    pub fn get(self) -> Result<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(CollectionError::empty_optional()),
        }
    }

    /// Returns the held value, or `default` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::Optional;
    ///
    /// assert_eq!(Optional::Present(3).get_or_else(0), 3);
    /// assert_eq!(Optional::Absent.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or computes one from `function` if this is `Absent`.
    #[inline]
    pub fn get_or_else_with<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// `Absent` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::Optional;
    ///
    /// assert_eq!(Optional::Present(2).map(|x| x * 10), Optional::Present(20));
    /// assert_eq!(Optional::<i32>::Absent.map(|x| x * 10), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies a function returning an `Optional` to the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::Optional;
    ///
    /// let half = |x: i32| {
    ///     if x % 2 == 0 { Optional::Present(x / 2) } else { Optional::Absent }
    /// };
    /// assert_eq!(Optional::Present(8).flat_map(half), Optional::Present(4));
    /// assert_eq!(Optional::Present(3).flat_map(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the held value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Keeps the held value only if `predicate` does not hold for it.
    #[inline]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Returns `self` if a value is present, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative,
        }
    }

    // =========================================================================
    // Borrowing
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns an iterator over the held value (zero or one item).
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::from(self.as_ref()).into_iter()
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Clone> Optional<&T> {
    /// Maps an `Optional<&T>` to an `Optional<T>` by cloning the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::{Optional, superlist};
    ///
    /// let names = superlist!["ada".to_string(), "grace".to_string()];
    /// assert_eq!(names.head_option().cloned(), Optional::Present("ada".to_string()));
    /// ```
    #[inline]
    pub fn cloned(self) -> Optional<T> {
        self.map(Clone::clone)
    }
}

impl<T: Copy> Optional<&T> {
    /// Maps an `Optional<&T>` to an `Optional<T>` by copying the held value.
    #[inline]
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => write!(formatter, "Absent"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Optional<i32>: Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_absent_values_are_equal_and_share_hash() {
        let first: Optional<String> = Optional::Absent;
        let second: Optional<String> = Optional::Absent;
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[rstest]
    fn test_present_equality_follows_value() {
        assert_eq!(Optional::Present(1), Optional::Present(1));
        assert_ne!(Optional::Present(1), Optional::Present(2));
        assert_ne!(Optional::Present(1), Optional::Absent);
        assert_eq!(hash_of(&Optional::Present(5)), hash_of(&Optional::Present(5)));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Optional::Present(3).to_string(), "Present(3)");
        assert_eq!(Optional::<i32>::Absent.to_string(), "Absent");
    }

    #[rstest]
    fn test_default_is_absent() {
        assert_eq!(Optional::<i32>::default(), Optional::Absent);
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let present: Optional<i32> = Some(4).into();
        assert_eq!(present, Optional::Present(4));
        assert_eq!(present.into_option(), Some(4));

        let absent: Optional<i32> = None.into();
        assert_eq!(Option::<i32>::from(absent), None);
    }

    #[rstest]
    fn test_get_or_else_with_is_lazy_for_present() {
        let mut called = false;
        let value = Optional::Present(1).get_or_else_with(|| {
            called = true;
            0
        });
        assert_eq!(value, 1);
        assert!(!called);
    }

    #[rstest]
    fn test_iter_yields_zero_or_one() {
        assert_eq!(Optional::Present(9).iter().count(), 1);
        assert_eq!(Optional::<i32>::Absent.iter().count(), 0);
        assert_eq!(Optional::Present(9).into_iter().collect::<Vec<_>>(), vec![9]);
    }

    #[rstest]
    fn test_optional_crosses_thread_boundary() {
        let value = Optional::Present("shared".to_string());
        let handle = std::thread::spawn(move || value.map(|text| text.len()));
        assert_eq!(handle.join().unwrap(), Optional::Present(6));
    }
}
