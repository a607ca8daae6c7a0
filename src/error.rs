//! Error types for operations that cannot produce a value.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is [`CollectionError`]. Failures are atomic: an operation either
//! returns a fully built value or fails before producing anything.

use thiserror::Error;

/// Represents the ways a collection or optional operation can fail.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{CollectionError, SuperList};
///
/// let empty: SuperList<i32> = SuperList::new();
/// assert_eq!(
///     empty.head(),
///     Err(CollectionError::EmptyContainer { operation: "head" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// `head` or `reduce` was called on a container with no elements.
    #[error("{operation}: empty container")]
    EmptyContainer {
        /// The name of the operation that required an element.
        operation: &'static str,
    },

    /// `get` was called on an [`Optional::Absent`](crate::Optional::Absent).
    #[error("get: optional value is absent")]
    EmptyOptional,

    /// `pluck` found an element mapping without the requested key.
    #[error("pluck: key not found: {key}")]
    KeyNotFound {
        /// The missing key, rendered with its `Debug` representation.
        key: String,
    },

    /// A checked re-keying produced the same key twice.
    #[error("{operation}: duplicate key: {key}")]
    DuplicateKey {
        /// The name of the operation that detected the collision.
        operation: &'static str,
        /// The colliding key, rendered with its `Debug` representation.
        key: String,
    },
}

impl CollectionError {
    pub(crate) fn empty_container(operation: &'static str) -> Self {
        tracing::debug!(operation, "operation requires a non-empty container");
        Self::EmptyContainer { operation }
    }

    pub(crate) fn empty_optional() -> Self {
        tracing::debug!("get called on an absent optional");
        Self::EmptyOptional
    }

    pub(crate) fn key_not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        let key = format!("{key:?}");
        tracing::debug!(%key, "pluck: element mapping lacks key");
        Self::KeyNotFound { key }
    }

    pub(crate) fn duplicate_key<K: std::fmt::Debug + ?Sized>(
        operation: &'static str,
        key: &K,
    ) -> Self {
        let key = format!("{key:?}");
        tracing::debug!(operation, %key, "re-keying produced a duplicate key");
        Self::DuplicateKey { operation, key }
    }
}

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, CollectionError>;
