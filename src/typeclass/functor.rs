//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```

use super::higher::TypeConstructor;
use crate::collections::SuperList;
use crate::optional::Optional;

/// A type class for types that can have a function mapped over their contents.
///
/// The function is `FnMut` so that multi-element containers can call it once
/// per element.
///
/// # Examples
///
/// ```rust
/// use super_iterables::{Optional, superlist};
/// use super_iterables::typeclass::Functor;
///
/// assert_eq!(superlist![1, 2].fmap(|n| n * 3), superlist![3, 6]);
/// assert_eq!(Optional::Present(5).fmap(|n| n.to_string()), Optional::Present("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every value inside the functor with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the values, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<T> Functor for SuperList<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> SuperList<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Optional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superlist;
    use rstest::rstest;

    #[rstest]
    fn super_list_replace_keeps_length() {
        assert_eq!(superlist![1, 2, 3].replace('x'), superlist!['x', 'x', 'x']);
    }

    #[rstest]
    fn optional_void_preserves_absent() {
        assert_eq!(Optional::<i32>::Absent.void(), Optional::Absent);
        assert_eq!(Optional::Present(1).void(), Optional::Present(()));
    }

    #[rstest]
    fn super_list_fmap_composition() {
        let list = superlist![1, 2, 3];
        let composed = list.clone().fmap(|x| (x + 1) * 2);
        let chained = list.fmap(|x| x + 1).fmap(|x| x * 2);
        assert_eq!(composed, chained);
    }
}
