//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. The curried utilities of this crate
/// are built for this: each stage is configured up front and receives the
/// data last.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function is called exactly once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// ```
/// use fpkeys::{count_by_curried, pipe, remap_keys_curried, Counts};
///
/// let words = ["tea", "coffee", "tea", "water"];
///
/// let labelled = pipe!(
///     words.as_slice(),
///     count_by_curried(|word: &&str| word.to_string()),
///     |counts: Counts<String>| remap_keys_curried(
///         |count: &usize, word: &String, _: &Counts<String>| format!("{word}x{count}")
///     )(&counts)
/// );
///
/// let keys: Vec<_> = labelled.keys().cloned().collect();
/// assert_eq!(keys, vec!["teax2", "coffeex1", "waterx1"]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{count_by_curried, remap_keys_curried};
    use indexmap::IndexMap;
    use rstest::rstest;

    #[rstest]
    fn pipe_value_only() {
        assert_eq!(pipe!(42), 42);
    }

    #[rstest]
    fn pipe_into_curried_count() {
        let items = [1, 1, 2];
        let counts = pipe!(items.as_slice(), count_by_curried(|item: &i32| *item));
        assert_eq!(counts[&1], 2);
    }

    #[rstest]
    fn pipe_through_remap_then_len() {
        let container = IndexMap::from([("a".to_string(), 1), ("b".to_string(), 1)]);
        let size = pipe!(
            &container,
            remap_keys_curried(|value: &i32, _: &String, _: &IndexMap<String, i32>| *value),
            |remapped: crate::Remapped<i32, i32>| remapped.len()
        );
        assert_eq!(size, 1);
    }
}
