//! Enhanced sequence - an ordered list with a chainable method surface.
//!
//! [`SuperList<T>`] owns a `Vec<T>` and derefs to `[T]`, so indexing,
//! `len`, `iter` and the other slice methods behave exactly as on a vector.
//! On top of that it offers transformations that return a `SuperList` again.
//!
//! # Examples
//!
//! ```rust
//! use super_iterables::{Optional, superlist};
//!
//! let list = superlist![3, 1, 2];
//! assert_eq!(list.head_option(), Optional::Present(&3));
//!
//! let sorted = list.sort_by(|x| -x, false);
//! assert_eq!(sorted, [3, 2, 1]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Bound, Deref, DerefMut, Mul, MulAssign, RangeBounds};

use super::{IndexMap, StarArgs, SuperDict, SuperSet, group_consecutive, sort_by_key_stable};
use crate::error::{CollectionError, Result};
use crate::optional::Optional;

/// An ordered, duplicate-permitting sequence with chainable transformations.
///
/// Order is preserved by every transformation except the explicit sorts.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{SuperList, superlist};
///
/// let words: SuperList<&str> = superlist!["apple", "avocado", "banana"];
/// let (a_words, others) = words.partition(|word| word.starts_with('a'));
///
/// assert_eq!(a_words, ["apple", "avocado"]);
/// assert_eq!(others, ["banana"]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SuperList<T> {
    items: Vec<T>,
}

impl<T> SuperList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Unwraps the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Appends an element to the end of the list.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Moves every element of `other` to the end of this list, leaving `other` empty.
    #[inline]
    pub fn append(&mut self, other: &mut Self) {
        self.items.append(&mut other.items);
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to every element, preserving order and length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// let lengths = superlist!["a", "bb", "ccc"].map(str::len);
    /// assert_eq!(lengths, [1, 2, 3]);
    /// ```
    pub fn map<U, F>(self, function: F) -> SuperList<U>
    where
        F: FnMut(T) -> U,
    {
        self.items.into_iter().map(function).collect()
    }

    /// Calls `function` on every element in order, for side effects only.
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(function);
    }

    /// Keeps the elements for which `predicate` holds, preserving order.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    /// Keeps the elements for which `predicate` does not hold, preserving order.
    pub fn filter_not<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }

    /// Folds the list from the left without a seed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::{SuperList, superlist};
    ///
    /// assert_eq!(superlist![1, 2, 3, 4].reduce(|a, b| a * b), Ok(24));
    /// assert!(SuperList::<i32>::new().reduce(|a, b| a + b).is_err());
    /// ```
    pub fn reduce<F>(self, function: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.items
            .into_iter()
            .reduce(function)
            .ok_or_else(|| CollectionError::empty_container("reduce"))
    }

    /// Folds the list from the left, starting from `init`.
    pub fn fold<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.items.into_iter().fold(init, function)
    }

    /// Splits the list into the elements satisfying `predicate` and the rest.
    ///
    /// Both parts keep the relative order of the original list.
    pub fn partition<P>(self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let (matching, rest): (Vec<T>, Vec<T>) = self.items.into_iter().partition(predicate);
        (Self::from(matching), Self::from(rest))
    }

    /// Groups runs of adjacent elements that share the same key.
    ///
    /// Only consecutive elements are merged: equal keys separated by a
    /// different key produce separate groups. Sort by the same key first, or
    /// use [`bucket_by`](Self::bucket_by), to group across the whole list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// let groups = superlist![1, 1, 2, 2, 1].group_by(|x| *x);
    /// assert_eq!(
    ///     groups,
    ///     [(1, superlist![1, 1]), (2, superlist![2, 2]), (1, superlist![1])]
    /// );
    /// ```
    pub fn group_by<K, F>(self, key_function: F) -> SuperList<(K, Self)>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        group_consecutive(self.items, key_function)
            .into_iter()
            .map(|(key, run)| (key, Self::from(run)))
            .collect()
    }

    /// Buckets every element under its key, regardless of adjacency.
    ///
    /// Keys appear in the order of their first occurrence and each bucket
    /// keeps the relative order of its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::{Optional, superlist};
    ///
    /// let buckets = superlist![1, 1, 2, 2, 1].bucket_by(|x| *x);
    /// assert_eq!(buckets.len(), 2);
    /// assert_eq!(buckets.get(&1), Optional::Present(&superlist![1, 1, 1]));
    /// ```
    pub fn bucket_by<K, F>(self, mut key_function: F) -> SuperDict<K, Self>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut buckets: IndexMap<K, Self> = IndexMap::default();
        for element in self.items {
            buckets
                .entry(key_function(&element))
                .or_insert_with(Self::new)
                .push(element);
        }
        SuperDict::from_index_map(buckets)
    }

    /// Maps every element to an iterable and concatenates the results in order.
    ///
    /// Equivalent to `self.map(function).flatten()`.
    pub fn flat_map<I, F>(self, function: F) -> SuperList<I::Item>
    where
        I: IntoIterator,
        F: FnMut(T) -> I,
    {
        self.items.into_iter().flat_map(function).collect()
    }

    /// Applies `function` to each tuple element by spreading its fields as arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// let sums = superlist![(1, 2), (3, 4)].star_map(|a: i32, b: i32| a + b);
    /// assert_eq!(sums, [3, 7]);
    /// ```
    pub fn star_map<F, R>(self, mut function: F) -> SuperList<R>
    where
        T: StarArgs<F, R>,
    {
        self.items
            .into_iter()
            .map(|arguments| arguments.apply_to(&mut function))
            .collect()
    }

    /// Sorts by a projected key, stably.
    ///
    /// `reverse` flips the comparison rather than reversing the result, so
    /// elements with equal keys keep their original relative order either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// let words = superlist!["bb", "a", "cc", "d"];
    /// assert_eq!(words.clone().sort_by(|w| w.len(), false), ["a", "d", "bb", "cc"]);
    /// assert_eq!(words.sort_by(|w| w.len(), true), ["bb", "cc", "a", "d"]);
    /// ```
    pub fn sort_by<K, F>(self, key_function: F, reverse: bool) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Self::from(sort_by_key_stable(self.items, key_function, reverse))
    }

    /// Sorts by the elements' natural order, stably.
    pub fn sorted(self, reverse: bool) -> Self
    where
        T: Ord,
    {
        let mut items = self.items;
        if reverse {
            items.sort_by(|left, right| right.cmp(left));
        } else {
            items.sort();
        }
        Self::from(items)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    pub fn head(&self) -> Result<&T> {
        self.items
            .first()
            .ok_or_else(|| CollectionError::empty_container("head"))
    }

    /// Returns the first element, or `Absent` if the list is empty.
    #[inline]
    pub fn head_option(&self) -> Optional<&T> {
        self.items.first().into()
    }

    /// Returns the last element, or `Absent` if the list is empty.
    #[inline]
    pub fn last_option(&self) -> Optional<&T> {
        self.items.last().into()
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::{Optional, superlist};
    ///
    /// let list = superlist![1, 2, 3];
    /// assert_eq!(list.find(|x| *x > 1), Optional::Present(&2));
    /// assert_eq!(list.find(|x| *x > 5), Optional::Absent);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Optional<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|element| predicate(element)).into()
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Collects the elements into a set, dropping duplicates.
    pub fn to_set(self) -> SuperSet<T>
    where
        T: Hash + Eq,
    {
        self.items.into_iter().collect()
    }

    /// Joins the elements' `Display` output with `sep`, wrapped in `start` and `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// assert_eq!(superlist![1, 2, 3].make_string("[", "]", ", "), "[1, 2, 3]");
    /// ```
    pub fn make_string(&self, start: &str, end: &str, sep: &str) -> String
    where
        T: fmt::Display,
    {
        self.make_string_with(start, end, sep, ToString::to_string)
    }

    /// Like [`make_string`](Self::make_string), with a custom stringify function.
    pub fn make_string_with<F>(&self, start: &str, end: &str, sep: &str, function: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let body = self.items.iter().map(function).collect::<Vec<_>>().join(sep);
        format!("{start}{body}{end}")
    }

    /// Returns a copy of the elements in `range`, clamped to the list bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// let list = superlist![1, 2, 3, 4];
    /// assert_eq!(list.slice(1..3), [2, 3]);
    /// assert_eq!(list.slice(2..10), [3, 4]);
    /// assert!(list.slice(5..).is_empty());
    /// ```
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
        T: Clone,
    {
        let length = self.items.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(length);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        }
        .min(length);

        if start >= end {
            return Self::new();
        }
        Self::from(self.items[start..end].to_vec())
    }

    /// Returns the list repeated `count` times.
    pub fn repeat(&self, count: usize) -> Self
    where
        T: Clone,
    {
        std::iter::repeat_n(&self.items, count)
            .flatten()
            .cloned()
            .collect()
    }
}

impl<K: Hash + Eq, V> SuperList<(K, V)> {
    /// Builds a mapping from key-value pairs.
    ///
    /// When a key occurs more than once the last value wins, at the position
    /// of the key's first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// let dict = superlist![(1, "a"), (2, "b"), (1, "c")].to_dict();
    /// assert_eq!(dict.key_list(), [1, 2]);
    /// assert_eq!(dict.value_list(), ["c", "b"]);
    /// ```
    pub fn to_dict(self) -> SuperDict<K, V> {
        self.items.into_iter().collect()
    }
}

impl<I: IntoIterator> SuperList<I> {
    /// Concatenates the sub-sequences in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::superlist;
    ///
    /// let nested = superlist![vec![1, 2], vec![3], vec![]];
    /// assert_eq!(nested.flatten(), [1, 2, 3]);
    /// ```
    pub fn flatten(self) -> SuperList<I::Item> {
        self.items.into_iter().flatten().collect()
    }
}

impl<K: Hash + Eq, V: Clone> SuperList<SuperDict<K, V>> {
    /// Projects the value stored under `key` from every element mapping.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if any element lacks `key`;
    /// no partial result is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use super_iterables::{superdict, superlist};
    ///
    /// let rows = superlist![
    ///     superdict! {"name" => "ada", "lang" => "rust"},
    ///     superdict! {"name" => "grace", "lang" => "cobol"},
    /// ];
    /// assert_eq!(rows.pluck("name"), Ok(superlist!["ada", "grace"]));
    /// assert!(rows.pluck("age").is_err());
    /// ```
    pub fn pluck<Q>(&self, key: &Q) -> Result<SuperList<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.items
            .iter()
            .map(|mapping| {
                mapping
                    .get(key)
                    .cloned()
                    .into_option()
                    .ok_or_else(|| CollectionError::key_not_found(key))
            })
            .collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SuperList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SuperList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for SuperList<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for SuperList<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for SuperList<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T> From<SuperList<T>> for Vec<T> {
    #[inline]
    fn from(list: SuperList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for SuperList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for SuperList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for SuperList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SuperList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SuperList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SuperList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.items == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SuperList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == *other
    }
}

impl<T: fmt::Debug> fmt::Debug for SuperList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SuperList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.make_string("[", "]", ", "))
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T> Add for SuperList<T> {
    type Output = Self;

    fn add(mut self, mut other: Self) -> Self {
        self.items.append(&mut other.items);
        self
    }
}

impl<T: Clone> Add<&SuperList<T>> for SuperList<T> {
    type Output = Self;

    fn add(mut self, other: &Self) -> Self {
        self.items.extend_from_slice(&other.items);
        self
    }
}

impl<T> AddAssign for SuperList<T> {
    fn add_assign(&mut self, mut other: Self) {
        self.items.append(&mut other.items);
    }
}

impl<T: Clone> Mul<usize> for SuperList<T> {
    type Output = Self;

    fn mul(self, count: usize) -> Self {
        self.repeat(count)
    }
}

impl<T: Clone> Mul<SuperList<T>> for usize {
    type Output = SuperList<T>;

    fn mul(self, list: SuperList<T>) -> SuperList<T> {
        list.repeat(self)
    }
}

impl<T: Clone> MulAssign<usize> for SuperList<T> {
    fn mul_assign(&mut self, count: usize) {
        *self = self.repeat(count);
    }
}
