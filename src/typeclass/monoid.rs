//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use std::hash::Hash;

use super::semigroup::Semigroup;
use crate::collections::{SuperDict, SuperList, SuperSet};
use crate::optional::Optional;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{SuperList, superlist};
/// use super_iterables::typeclass::Monoid;
///
/// let all = SuperList::combine_all(vec![superlist![1], superlist![], superlist![2, 3]]);
/// assert_eq!(all, superlist![1, 2, 3]);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every item of `iterator`, starting from [`empty`](Self::empty).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for SuperList<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> Monoid for SuperSet<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> Monoid for SuperDict<K, V> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Optional<T> {
    #[inline]
    fn empty() -> Self {
        Self::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superdict;
    use rstest::rstest;

    #[rstest]
    fn super_dict_identity() {
        let dict = superdict! {"a" => 1};
        assert_eq!(SuperDict::empty().combine(dict.clone()), dict);
        assert_eq!(dict.clone().combine(SuperDict::empty()), dict);
    }

    #[rstest]
    fn optional_combine_all_skips_absent() {
        let values = vec![
            Optional::Present("x".to_string()),
            Optional::Absent,
            Optional::Present("y".to_string()),
        ];
        assert_eq!(Optional::combine_all(values), Optional::Present("xy".to_string()));
    }
}
