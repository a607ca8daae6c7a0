//! Enhanced set - unique elements with set algebra and a chainable surface.
//!
//! [`SuperSet<T>`] owns an `IndexSet`. Membership semantics are those of a
//! hash set, while iteration follows insertion order. Operations that depend
//! on order, such as [`group_by`](SuperSet::group_by) and
//! [`reduce`](SuperSet::reduce), are therefore deterministic.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::{IndexSet, SuperList, group_consecutive, sort_by_key_stable};
use crate::error::{CollectionError, Result};
use crate::optional::Optional;

/// A collection of unique elements with chainable transformations.
///
/// Equality ignores iteration order.
///
/// # Examples
///
/// ```rust
/// use super_iterables::superset;
///
/// let primes = superset![2, 3, 5, 7];
/// let odds = superset![1, 3, 5, 7, 9];
///
/// assert_eq!(primes.intersection([&odds]), superset![3, 5, 7]);
/// assert_eq!(primes.difference([&odds]), superset![2]);
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(deserialize = "T: serde::Deserialize<'de> + Hash + Eq")
    )
)]
pub struct SuperSet<T> {
    elements: IndexSet<T>,
}

impl<T> SuperSet<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: IndexSet::default(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Calls `function` on every element, for side effects only.
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(function);
    }

    /// Folds the set from the left without a seed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the set is empty.
    pub fn reduce<F>(self, function: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.elements
            .into_iter()
            .reduce(function)
            .ok_or_else(|| CollectionError::empty_container("reduce"))
    }

    /// Folds the set from the left, starting from `init`.
    pub fn fold<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }

    /// Returns the first element, in insertion order, satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Optional<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().find(|element| predicate(element)).into()
    }

    /// Converts into a list in insertion order.
    pub fn to_list(self) -> SuperList<T> {
        self.elements.into_iter().collect()
    }

    /// Sorts the elements by a projected key into a list.
    ///
    /// Ties keep insertion order; `reverse` flips the comparison.
    pub fn sort_by<K, F>(self, key_function: F, reverse: bool) -> SuperList<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        SuperList::from(sort_by_key_stable(
            self.elements.into_iter().collect(),
            key_function,
            reverse,
        ))
    }

    /// Sorts the elements by their natural order into a list.
    pub fn sorted(self, reverse: bool) -> SuperList<T>
    where
        T: Ord,
    {
        self.to_list().sorted(reverse)
    }
}

impl<T: Hash + Eq> SuperSet<T> {
    // =========================================================================
    // Base Set Contract
    // =========================================================================

    /// Adds `element`, returning `false` if it was already present.
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Removes `element`, returning `true` if it was present.
    ///
    /// The remaining elements keep their relative order.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.shift_remove(element)
    }

    /// Returns `true` if `element` is in the set.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to every element; images that coincide are merged.
    pub fn map<U, F>(self, function: F) -> SuperSet<U>
    where
        U: Hash + Eq,
        F: FnMut(T) -> U,
    {
        self.elements.into_iter().map(function).collect()
    }

    /// Keeps the elements for which `predicate` holds.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.elements
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    /// Keeps the elements for which `predicate` does not hold.
    pub fn filter_not<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }

    /// Splits the set into the elements satisfying `predicate` and the rest.
    pub fn partition<P>(self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.into_iter().partition(predicate)
    }

    /// Groups runs of adjacent elements, in insertion order, that share a key.
    ///
    /// As with [`SuperList::group_by`], equal keys that are not adjacent
    /// produce separate groups.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superset;
    ///
    /// let groups = superset![1, 3, 2, 5].group_by(|x| x % 2);
    /// assert_eq!(groups.len(), 3);
    /// assert_eq!(groups[0], (1, superset![1, 3]));
    /// ```
    pub fn group_by<K, F>(self, key_function: F) -> SuperList<(K, Self)>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        group_consecutive(self.elements, key_function)
            .into_iter()
            .map(|(key, run)| (key, run.into_iter().collect()))
            .collect()
    }

    // =========================================================================
    // Set Algebra
    // =========================================================================

    /// Returns the elements that are in `self` or in any of `others`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superset;
    ///
    /// let a = superset![1, 2];
    /// let b = superset![2, 3];
    /// let c = superset![4];
    /// assert_eq!(a.union([&b, &c]), superset![1, 2, 3, 4]);
    /// ```
    pub fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let mut elements = self.elements.clone();
        for other in others {
            elements.extend(other.elements.iter().cloned());
        }
        Self { elements }
    }

    /// Returns the elements of `self` that are in every one of `others`.
    pub fn intersection<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let mut elements = self.elements.clone();
        for other in others {
            elements.retain(|element| other.elements.contains(element));
        }
        Self { elements }
    }

    /// Returns the elements of `self` that are in none of `others`.
    pub fn difference<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let mut elements = self.elements.clone();
        for other in others {
            elements.retain(|element| !other.elements.contains(element));
        }
        Self { elements }
    }

    /// Returns the elements in an odd number of the sets, folding left to right.
    pub fn symmetric_difference<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: Clone + 'a,
    {
        let mut elements = self.elements.clone();
        for other in others {
            elements = elements
                .symmetric_difference(&other.elements)
                .cloned()
                .collect();
        }
        Self { elements }
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.elements.is_superset(&other.elements)
    }

    /// Returns `true` if `self` and `other` share no element.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.elements.is_disjoint(&other.elements)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SuperSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for SuperSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Hash + Eq> Eq for SuperSet<T> {}

impl<T: Hash + Eq> FromIterator<T> for SuperSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for SuperSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for SuperSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, S> From<std::collections::HashSet<T, S>> for SuperSet<T> {
    fn from(set: std::collections::HashSet<T, S>) -> Self {
        set.into_iter().collect()
    }
}

impl<T> IntoIterator for SuperSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SuperSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SuperSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SuperSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{superlist, superset};
    use rstest::rstest;

    #[rstest]
    fn test_display_empty_set() {
        let set: SuperSet<i32> = SuperSet::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_follows_insertion_order() {
        let set = superset![3, 1, 2];
        assert_eq!(format!("{set}"), "{3, 1, 2}");
        assert_eq!(format!("{set:?}"), "{3, 1, 2}");
    }

    #[rstest]
    fn test_equality_ignores_order() {
        assert_eq!(superset![1, 2, 3], superset![3, 2, 1]);
    }

    #[rstest]
    fn test_remove_keeps_remaining_order() {
        let mut set = superset![1, 2, 3];
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.to_list(), superlist![2, 3]);
    }

    #[rstest]
    fn test_algebra_with_no_others_copies() {
        let set = superset![1, 2];
        let none: [&SuperSet<i32>; 0] = [];
        assert_eq!(set.union(none), set);
        assert_eq!(set.intersection(none), set);
    }

    #[rstest]
    fn test_symmetric_difference_folds_pairwise() {
        let a = superset![1, 2];
        let b = superset![2, 3];
        let c = superset![3, 4];
        assert_eq!(a.symmetric_difference([&b, &c]), superset![1, 4]);
    }

    #[rstest]
    fn test_reduce_on_empty_set_fails() {
        let set: SuperSet<i32> = SuperSet::new();
        assert_eq!(
            set.reduce(|a, b| a + b),
            Err(CollectionError::EmptyContainer { operation: "reduce" })
        );
    }
}
