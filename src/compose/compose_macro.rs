//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left into a new function.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`, and
/// `pipe!(x, h, g, f)` computes the same value. Where `pipe!` needs the data
/// at hand, `compose!` builds a reusable stage out of curried utilities.
///
/// # Examples
///
/// ```
/// use fpkeys::{compose, count_by_curried, Counts};
///
/// let distinct_lengths = compose!(
///     |counts: Counts<usize>| counts.len(),
///     count_by_curried(|word: &&str| word.len())
/// );
///
/// assert_eq!(distinct_lengths(&["a", "bb", "cc"]), 2);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
