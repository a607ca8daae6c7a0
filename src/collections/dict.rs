//! Enhanced mapping - an insertion-ordered dictionary with projections.
//!
//! [`SuperDict<K, V>`] owns an `IndexMap`, so iteration follows insertion
//! order and assigning an existing key replaces its value in place.
//!
//! # Collisions
//!
//! [`map_keys`](SuperDict::map_keys) and [`reverse`](SuperDict::reverse) can
//! produce the same output key twice. The later entry (in iteration order)
//! then overwrites the earlier one, keeping the position where the key first
//! appeared. Use [`try_map_keys`](SuperDict::try_map_keys) or
//! [`try_reverse`](SuperDict::try_reverse) to fail on collision instead.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::{IndexMap, SuperList, SuperSet};
use crate::error::{CollectionError, Result};
use crate::optional::Optional;

/// A key-unique, insertion-ordered mapping with chainable transformations.
///
/// Equality ignores iteration order, like two dictionaries holding the
/// same entries.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{SuperDict, superdict};
///
/// let prices: SuperDict<&str, u32> = superdict! {"tea" => 3, "cake" => 5};
/// let doubled = prices.map_values(|price| price * 2);
///
/// assert_eq!(doubled, superdict! {"cake" => 10, "tea" => 6});
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(deserialize = "K: serde::Deserialize<'de> + Hash + Eq, V: serde::Deserialize<'de>")
    )
)]
pub struct SuperDict<K, V> {
    entries: IndexMap<K, V>,
}

impl<K, V> SuperDict<K, V> {
    /// Creates an empty mapping.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }

    pub(crate) const fn from_index_map(entries: IndexMap<K, V>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates over the values in insertion order.
    #[inline]
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Calls `function` on every entry in insertion order.
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in &self.entries {
            function(key, value);
        }
    }
}

impl<K: Hash + Eq, V> SuperDict<K, V> {
    // =========================================================================
    // Base Mapping Contract
    // =========================================================================

    /// Assigns `value` to `key`, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Optional<V> {
        self.entries.insert(key, value).into()
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Optional<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key).into()
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::{Optional, superdict};
    ///
    /// let ages = superdict! {"ada" => 36};
    /// assert_eq!(ages.get("ada"), Optional::Present(&36));
    /// assert_eq!(ages.get("alan"), Optional::Absent);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Optional<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).into()
    }

    /// Returns `true` if `key` has a value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Replaces every value with `function(key, value)`, keeping the keys.
    pub fn map<U, F>(self, mut function: F) -> SuperDict<K, U>
    where
        F: FnMut(&K, V) -> U,
    {
        self.entries
            .into_iter()
            .map(|(key, value)| {
                let mapped = function(&key, value);
                (key, mapped)
            })
            .collect()
    }

    /// Replaces every key with `function(key)`.
    ///
    /// When two keys map to the same output key, the later entry wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superdict;
    ///
    /// let dict = superdict! {1 => "a", 2 => "b", 3 => "c"};
    /// let by_parity = dict.map_keys(|key| key % 2);
    /// assert_eq!(by_parity, superdict! {1 => "c", 0 => "b"});
    /// ```
    pub fn map_keys<U, F>(self, mut function: F) -> SuperDict<U, V>
    where
        U: Hash + Eq,
        F: FnMut(K) -> U,
    {
        self.entries
            .into_iter()
            .map(|(key, value)| (function(key), value))
            .collect()
    }

    /// Replaces every key with `function(key)`, failing if two keys collide.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] naming the first output key
    /// produced twice.
    pub fn try_map_keys<U, F>(self, mut function: F) -> Result<SuperDict<U, V>>
    where
        U: Hash + Eq + fmt::Debug,
        F: FnMut(K) -> U,
    {
        let mut remapped: IndexMap<U, V> = IndexMap::default();
        for (key, value) in self.entries {
            let key = function(key);
            if remapped.contains_key(&key) {
                return Err(CollectionError::duplicate_key("try_map_keys", &key));
            }
            remapped.insert(key, value);
        }
        Ok(SuperDict::from_index_map(remapped))
    }

    /// Replaces every value with `function(value)`, keeping the keys.
    pub fn map_values<U, F>(self, mut function: F) -> SuperDict<K, U>
    where
        F: FnMut(V) -> U,
    {
        self.entries
            .into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }

    /// Keeps the entries for which `predicate` holds.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.entries
            .into_iter()
            .filter(|(key, value)| predicate(key, value))
            .collect()
    }

    /// Keeps the entries for which `predicate` does not hold.
    pub fn filter_not<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.filter(|key, value| !predicate(key, value))
    }

    /// Swaps keys and values.
    ///
    /// Lossy when values repeat: the later entry wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superdict;
    ///
    /// let dict = superdict! {"a" => 1, "b" => 2, "c" => 1};
    /// assert_eq!(dict.reverse(), superdict! {1 => "c", 2 => "b"});
    /// ```
    pub fn reverse(self) -> SuperDict<V, K>
    where
        V: Hash + Eq,
    {
        self.entries
            .into_iter()
            .map(|(key, value)| (value, key))
            .collect()
    }

    /// Swaps keys and values, failing if two entries share a value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] naming the repeated value.
    pub fn try_reverse(self) -> Result<SuperDict<V, K>>
    where
        V: Hash + Eq + fmt::Debug,
    {
        let mut reversed: IndexMap<V, K> = IndexMap::default();
        for (key, value) in self.entries {
            if reversed.contains_key(&value) {
                return Err(CollectionError::duplicate_key("try_reverse", &value));
            }
            reversed.insert(value, key);
        }
        Ok(SuperDict::from_index_map(reversed))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Returns the keys in insertion order.
    pub fn key_list(&self) -> SuperList<K>
    where
        K: Clone,
    {
        self.entries.keys().cloned().collect()
    }

    /// Returns the values in insertion order.
    pub fn value_list(&self) -> SuperList<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }

    /// Returns the keys as a set.
    pub fn key_set(&self) -> SuperSet<K>
    where
        K: Clone,
    {
        self.entries.keys().cloned().collect()
    }

    /// Returns the distinct values as a set.
    pub fn value_set(&self) -> SuperSet<V>
    where
        V: Clone + Hash + Eq,
    {
        self.entries.values().cloned().collect()
    }

    /// Returns the keys in their natural order.
    pub fn sorted_keys(&self) -> SuperList<K>
    where
        K: Clone + Ord,
    {
        self.key_list().sorted(false)
    }

    /// Returns the values in their natural order.
    pub fn sorted_values(&self) -> SuperList<V>
    where
        V: Clone + Ord,
    {
        self.value_list().sorted(false)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a list of `(key, value)` pairs in insertion order.
    pub fn to_list(self) -> SuperList<(K, V)> {
        self.entries.into_iter().collect()
    }

    /// Converts into a set of `(key, value)` pairs.
    pub fn to_set(self) -> SuperSet<(K, V)>
    where
        V: Hash + Eq,
    {
        self.entries.into_iter().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for SuperDict<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for SuperDict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for SuperDict<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for SuperDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for SuperDict<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for SuperDict<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, S> From<std::collections::HashMap<K, V, S>> for SuperDict<K, V> {
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> IntoIterator for SuperDict<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a SuperDict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SuperDict<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for SuperDict<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in &self.entries {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{superdict, superlist};
    use rstest::rstest;

    #[rstest]
    fn test_insert_existing_key_keeps_position() {
        let mut dict = superdict! {"a" => 1, "b" => 2};
        assert_eq!(dict.insert("a", 10), Optional::Present(1));
        assert_eq!(dict.to_list(), superlist![("a", 10), ("b", 2)]);
    }

    #[rstest]
    fn test_remove_preserves_order() {
        let mut dict = superdict! {"a" => 1, "b" => 2, "c" => 3};
        assert_eq!(dict.remove("a"), Optional::Present(1));
        assert_eq!(dict.remove("z"), Optional::Absent);
        assert_eq!(dict.key_list(), superlist!["b", "c"]);
    }

    #[rstest]
    fn test_display_follows_insertion_order() {
        let dict = superdict! {2 => "b", 1 => "a"};
        assert_eq!(dict.to_string(), "{2: b, 1: a}");
        assert_eq!(format!("{dict:?}"), "{2: \"b\", 1: \"a\"}");
    }

    #[rstest]
    fn test_try_reverse_reports_repeated_value() {
        let dict = superdict! {"a" => 1, "b" => 1};
        assert_eq!(
            dict.try_reverse(),
            Err(CollectionError::DuplicateKey {
                operation: "try_reverse",
                key: "1".to_string()
            })
        );
    }

    #[rstest]
    fn test_from_hash_map() {
        let mut map = std::collections::HashMap::new();
        map.insert("x", 1);
        let dict = SuperDict::from(map);
        assert_eq!(dict.get("x"), Optional::Present(&1));
    }
}
