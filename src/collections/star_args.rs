//! Argument unpacking for [`SuperList::star_map`](super::SuperList::star_map).

/// Tuples whose fields can be spread into the arguments of a function.
///
/// Implemented for tuples of one to four elements. The function type `F`
/// is taken as a trait parameter so that each arity selects the matching
/// `FnMut` signature.
///
/// # Examples
///
/// ```rust
/// use super_iterables::StarArgs;
///
/// let mut add = |left: i32, right: i32| left + right;
/// assert_eq!((2, 3).apply_to(&mut add), 5);
/// ```
pub trait StarArgs<F, R> {
    /// Calls `function` with the tuple's fields as separate arguments.
    fn apply_to(self, function: &mut F) -> R;
}

macro_rules! impl_star_args {
    ($($argument:ident),+) => {
        impl<F, R, $($argument),+> StarArgs<F, R> for ($($argument,)+)
        where
            F: FnMut($($argument),+) -> R,
        {
            #[allow(non_snake_case)]
            #[inline]
            fn apply_to(self, function: &mut F) -> R {
                let ($($argument,)+) = self;
                function($($argument),+)
            }
        }
    };
}

impl_star_args!(A);
impl_star_args!(A, B);
impl_star_args!(A, B, C);
impl_star_args!(A, B, C, D);
