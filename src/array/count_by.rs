//! Counting items by a derived key.

use std::hash::Hash;

use crate::adapter::{Adapter, TOOLKIT};
use crate::toolkit::{CountElements, Counts};

impl<D: CountElements> Adapter<D> {
    /// Counts `items` by the key `mapper` derives from each of them.
    ///
    /// See [`count_by`](crate::count_by).
    pub fn count_by<T, K, F>(&self, items: &[T], mapper: F) -> Counts<K>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        self.delegate.count_elements(items, mapper)
    }

    /// Returns a function counting the items it is given by `mapper`.
    ///
    /// See [`count_by_curried`](crate::count_by_curried).
    pub fn count_by_curried<T, K, F>(self, mapper: F) -> impl Fn(&[T]) -> Counts<K>
    where
        K: Hash + Eq,
        F: Fn(&T) -> K,
    {
        move |items: &[T]| self.count_by(items, &mapper)
    }

    /// Counts `items` by a fallible key function.
    ///
    /// See [`try_count_by`](crate::try_count_by).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    pub fn try_count_by<T, K, E, F>(&self, items: &[T], mapper: F) -> Result<Counts<K>, E>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> Result<K, E>,
    {
        self.delegate.try_count_elements(items, mapper)
    }

    /// Returns a function counting the items it is given by a fallible key
    /// function.
    ///
    /// See [`try_count_by_curried`](crate::try_count_by_curried).
    pub fn try_count_by_curried<T, K, E, F>(
        self,
        mapper: F,
    ) -> impl Fn(&[T]) -> Result<Counts<K>, E>
    where
        K: Hash + Eq,
        F: Fn(&T) -> Result<K, E>,
    {
        move |items: &[T]| self.try_count_by(items, &mapper)
    }
}

/// Counts the items of a slice by the key `mapper` derives from each of them.
///
/// Every distinct key appears exactly once, with the number of items that
/// produced it. Keys are ordered by first occurrence; keys no item produced
/// are absent. `mapper` is called once per item, in order.
///
/// # Examples
///
/// ```rust
/// use fpkeys::count_by;
///
/// let counts = count_by(&["a", "b", "c", "a", "b", "a"], |item| *item);
/// let entries: Vec<_> = counts.into_iter().collect();
/// assert_eq!(entries, vec![("a", 3), ("b", 2), ("c", 1)]);
///
/// let parity = count_by(&[1, 2, 3, 4, 5], |n| if n % 2 == 0 { "even" } else { "odd" });
/// assert_eq!(parity["odd"], 3);
/// assert_eq!(parity["even"], 2);
/// ```
pub fn count_by<T, K, F>(items: &[T], mapper: F) -> Counts<K>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    TOOLKIT.count_by(items, mapper)
}

/// Curried form of [`count_by`]: takes the key function now and the items
/// later.
///
/// The returned function can be called any number of times.
///
/// # Examples
///
/// ```rust
/// use fpkeys::{count_by, count_by_curried};
///
/// let by_length = count_by_curried(|word: &&str| word.len());
///
/// let words = ["one", "two", "three"];
/// assert_eq!(by_length(&words), count_by(&words, |word| word.len()));
/// assert_eq!(by_length(&words)[&3], 2);
/// ```
///
/// ## In a pipeline
///
/// With the `compose` feature:
///
/// ```rust
/// # #[cfg(feature = "compose")]
/// # {
/// use fpkeys::{count_by_curried, pipe};
///
/// let scores = [90, 72, 85, 64, 98];
/// let grades = pipe!(
///     scores.as_slice(),
///     count_by_curried(|score: &i32| if *score >= 80 { 'A' } else { 'B' })
/// );
/// assert_eq!(grades[&'A'], 3);
/// # }
/// ```
pub fn count_by_curried<T, K, F>(mapper: F) -> impl Fn(&[T]) -> Counts<K>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    TOOLKIT.count_by_curried(mapper)
}

/// Counts the items of a slice by a fallible key function.
///
/// The traversal stops at the first `Err`, which is returned unchanged; no
/// partial counts are returned.
///
/// # Errors
///
/// Returns the first error produced by `mapper`.
///
/// # Examples
///
/// ```rust
/// use fpkeys::try_count_by;
///
/// let parsed = try_count_by(&["1", "2", "1"], |text| text.parse::<u8>());
/// assert_eq!(parsed.map(|counts| counts[&1]), Ok(2));
///
/// let failed = try_count_by(&["1", "x", "1"], |text| text.parse::<u8>());
/// assert!(failed.is_err());
/// ```
pub fn try_count_by<T, K, E, F>(items: &[T], mapper: F) -> Result<Counts<K>, E>
where
    K: Hash + Eq,
    F: FnMut(&T) -> Result<K, E>,
{
    TOOLKIT.try_count_by(items, mapper)
}

/// Curried form of [`try_count_by`].
///
/// # Examples
///
/// ```rust
/// use fpkeys::try_count_by_curried;
///
/// let by_digit = try_count_by_curried(|text: &&str| text.parse::<u8>());
///
/// assert_eq!(by_digit(&["7", "7"]).map(|counts| counts[&7]), Ok(2));
/// assert!(by_digit(&["7", "seven"]).is_err());
/// ```
pub fn try_count_by_curried<T, K, E, F>(mapper: F) -> impl Fn(&[T]) -> Result<Counts<K>, E>
where
    K: Hash + Eq,
    F: Fn(&T) -> Result<K, E>,
{
    TOOLKIT.try_count_by_curried(mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn counts_follow_first_occurrence_order() {
        let counts = count_by(&[3, 1, 3, 2, 1, 3], |item| *item);

        let entries: Vec<_> = counts.into_iter().collect();
        assert_eq!(entries, vec![(3, 3), (1, 2), (2, 1)]);
    }

    #[rstest]
    fn parity_example() {
        let counts = count_by(&[1, 2, 3, 4, 5], |n| if n % 2 == 0 { "even" } else { "odd" });

        let entries: Vec<_> = counts.into_iter().collect();
        assert_eq!(entries, vec![("odd", 3), ("even", 2)]);
    }

    #[rstest]
    fn curried_matches_direct() {
        let items = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let first_letter = |item: &&str| item.chars().next();

        assert_eq!(count_by_curried(first_letter)(&items), count_by(&items, first_letter));
    }

    #[rstest]
    fn curried_function_is_reusable() {
        let lengths = count_by_curried(|item: &String| item.len());

        let first = lengths(&["ab".to_string(), "cd".to_string()]);
        let second = lengths(&["abc".to_string()]);

        assert_eq!(first[&2], 2);
        assert_eq!(second[&3], 1);
        assert!(!second.contains_key(&2));
    }

    #[rstest]
    fn direct_form_accepts_stateful_mapper() {
        let mut calls = 0;
        let counts = count_by(&['x', 'y', 'x'], |item| {
            calls += 1;
            *item
        });

        assert_eq!(calls, 3);
        assert_eq!(counts[&'x'], 2);
    }

    #[rstest]
    fn try_curried_returns_first_error() {
        let checked = try_count_by_curried(|item: &i32| {
            if *item > 0 { Ok(*item) } else { Err(format!("bad item {item}")) }
        });

        assert_eq!(checked(&[1, 0, -1]), Err("bad item 0".to_string()));
        assert_eq!(checked(&[1, 1]).map(|counts| counts[&1]), Ok(2));
    }
}
