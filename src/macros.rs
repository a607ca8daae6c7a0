//! Construction macros for the enhanced containers.

/// Creates a [`SuperList`](crate::SuperList) containing the arguments.
///
/// Accepts the same forms as `vec!`.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{SuperList, superlist};
///
/// let list = superlist![1, 2, 3];
/// assert_eq!(list.len(), 3);
///
/// let zeros = superlist![0; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let empty: SuperList<i32> = superlist![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! superlist {
    () => {
        $crate::SuperList::new()
    };
    ($element:expr; $count:expr) => {
        $crate::SuperList::from(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::SuperList::from(::std::vec![$($element),+])
    };
}

/// Creates a [`SuperSet`](crate::SuperSet) containing the arguments.
///
/// Duplicates collapse; the first occurrence fixes the iteration position.
///
/// # Examples
///
/// ```rust
/// use super_iterables::superset;
///
/// let set = superset![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
/// ```
#[macro_export]
macro_rules! superset {
    () => {
        $crate::SuperSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::SuperSet::from([$($element),+])
    };
}

/// Creates a [`SuperDict`](crate::SuperDict) from `key => value` pairs.
///
/// A repeated key keeps its first position and its last value.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{Optional, superdict};
///
/// let dict = superdict! {"one" => 1, "two" => 2};
/// assert_eq!(dict.get("two"), Optional::Present(&2));
/// ```
#[macro_export]
macro_rules! superdict {
    () => {
        $crate::SuperDict::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::SuperDict::from([$(($key, $value)),+])
    };
}
