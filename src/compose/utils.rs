//! Helpers for feeding data into curried functions.
//!
//! - [`identity`]: returns its argument, handy as a key function
//! - [`Pipe`]: method-call form of [`pipe!`](crate::pipe)

/// Returns the value unchanged.
///
/// As a key function it counts items by themselves.
///
/// # Examples
///
/// ```
/// use fpkeys::compose::identity;
/// use fpkeys::count_by;
///
/// assert_eq!(identity(42), 42);
///
/// let counts = count_by(&['a', 'b', 'a'], |item| identity(*item));
/// assert_eq!(counts[&'a'], 2);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Applies a function to `self`, so a curried function can close a method
/// chain.
///
/// `value.pipe(f)` is `f(value)`, the same as `pipe!(value, f)`.
///
/// # Examples
///
/// ```
/// use fpkeys::compose::Pipe;
/// use fpkeys::count_by_curried;
///
/// let counts = vec!["x", "y", "x"]
///     .as_slice()
///     .pipe(count_by_curried(|item: &&str| item.to_string()));
///
/// assert_eq!(counts["x"], 2);
/// ```
pub trait Pipe: Sized {
    /// Transforms the value by applying `function` to it.
    fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R;
}

impl<T> Pipe for T {
    #[inline]
    fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }
}
