//! Hasher selection for the hash-backed containers.
//!
//! [`SuperDict`](super::SuperDict) and [`SuperSet`](super::SuperSet) are
//! backed by `indexmap` collections parameterized with [`HashBuilder`].
//! The concrete hasher is chosen at compile time:
//!
//! | Feature  | `HashBuilder`                              |
//! |----------|--------------------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`                |
//! | `ahash`  | `ahash::RandomState` (unless `fxhash`)     |
//! | neither  | `std::collections::hash_map::RandomState`  |

#[cfg(feature = "fxhash")]
/// Hasher used by the hash-backed containers.
pub type HashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Hasher used by the hash-backed containers.
pub type HashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Hasher used by the hash-backed containers.
pub type HashBuilder = std::collections::hash_map::RandomState;

pub(crate) type IndexMap<K, V> = indexmap::IndexMap<K, V, HashBuilder>;
pub(crate) type IndexSet<T> = indexmap::IndexSet<T, HashBuilder>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_hash_builder_is_deterministic_per_instance() {
        let builder = HashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
    }

    #[rstest]
    fn test_index_map_uses_selected_hasher() {
        let mut map: IndexMap<&str, i32> = IndexMap::default();
        map.insert("one", 1);
        assert_eq!(map.get("one"), Some(&1));
    }

    #[cfg(all(feature = "ahash", not(feature = "fxhash")))]
    #[rstest]
    fn test_ahash_selected_without_fxhash() {
        static_assertions::assert_type_eq_all!(HashBuilder, ahash::RandomState);
        let set: IndexSet<u32> = [3, 1, 3].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[cfg(not(any(feature = "fxhash", feature = "ahash")))]
    #[rstest]
    fn test_std_hasher_selected_by_default() {
        static_assertions::assert_type_eq_all!(
            HashBuilder,
            std::collections::hash_map::RandomState
        );
    }
}
