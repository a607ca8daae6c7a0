//! Enhanced containers with a chainable, functional method surface.
//!
//! This module provides three wrappers that own a standard container and
//! expose transformations returning the enhanced type again, so that calls
//! can be chained without converting back and forth:
//!
//! - [`SuperList`]: ordered, duplicate-permitting sequence (backed by `Vec`)
//! - [`SuperDict`]: key-unique, insertion-ordered mapping (backed by `IndexMap`)
//! - [`SuperSet`]: unique elements with set algebra (backed by `IndexSet`)
//!
//! Lookups that may find nothing return [`Optional`](crate::Optional).
//!
//! # Ownership
//!
//! Transformations (`map`, `filter`, `sort_by`, ...) take `self` by value and
//! return a new container. Clone first to keep the original around.
//! Lookups, rendering and set algebra borrow `&self`.
//!
//! # Examples
//!
//! ```rust
//! use super_iterables::superlist;
//!
//! let by_tens = superlist![1, 2, 3, 4, 5, 6]
//!     .filter(|x| *x > 1)
//!     .map(|x| x * 10)
//!     .bucket_by(|x| x % 20 == 0);
//!
//! assert_eq!(by_tens.key_list(), superlist![true, false]);
//! ```

mod dict;
mod hasher;
mod list;
mod set;
mod star_args;

pub use dict::SuperDict;
pub use hasher::HashBuilder;
pub use list::SuperList;
pub use set::SuperSet;
pub use star_args::StarArgs;

use hasher::{IndexMap, IndexSet};

/// Splits `elements` into runs of adjacent elements sharing the same key.
///
/// Equal keys that are not adjacent start a new run.
fn group_consecutive<T, K, I, F>(elements: I, mut key_function: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut runs: Vec<(K, Vec<T>)> = Vec::new();
    for element in elements {
        let key = key_function(&element);
        match runs.last_mut() {
            Some((run_key, run)) if *run_key == key => run.push(element),
            _ => runs.push((key, vec![element])),
        }
    }
    runs
}

/// Orders `elements` by the key computed once per element.
///
/// The sort is stable. With `reverse` the comparison is flipped, so elements
/// with equal keys keep their original relative order in both directions.
fn sort_by_key_stable<T, K, F>(elements: Vec<T>, mut key_function: F, reverse: bool) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, T)> = elements
        .into_iter()
        .map(|element| (key_function(&element), element))
        .collect();
    if reverse {
        keyed.sort_by(|(left, _), (right, _)| right.cmp(left));
    } else {
        keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
    }
    keyed.into_iter().map(|(_, element)| element).collect()
}

static_assertions::assert_impl_all!(SuperList<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SuperDict<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SuperSet<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_group_consecutive_splits_non_adjacent_runs() {
        let runs = group_consecutive(vec![1, 1, 2, 2, 1], |x| *x);
        assert_eq!(runs, vec![(1, vec![1, 1]), (2, vec![2, 2]), (1, vec![1])]);
    }

    #[rstest]
    fn test_group_consecutive_empty() {
        let runs = group_consecutive(Vec::<i32>::new(), |x| *x);
        assert!(runs.is_empty());
    }

    #[rstest]
    #[case(false, vec![("a", 1), ("c", 1), ("b", 2)])]
    #[case(true, vec![("b", 2), ("a", 1), ("c", 1)])]
    fn test_sort_by_key_stable_keeps_ties_in_order(
        #[case] reverse: bool,
        #[case] expected: Vec<(&str, i32)>,
    ) {
        let input = vec![("a", 1), ("b", 2), ("c", 1)];
        assert_eq!(sort_by_key_stable(input, |(_, key)| *key, reverse), expected);
    }
}
