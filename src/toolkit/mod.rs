//! Delegate transforms.
//!
//! The adapters in [`array`](crate::array) and [`object`](crate::object) only
//! decide between the direct and the curried calling form; the counting and
//! remapping themselves happen here, behind two traits:
//!
//! - [`CountElements`]: counts the items of a slice by a derived key
//! - [`RemapEntries`]: rebuilds a mapping under derived keys
//!
//! [`Toolkit`] is the default delegate and implements both. Any other type
//! implementing the traits can be injected through
//! [`Adapter::new`](crate::Adapter::new), for example a stand-in that records
//! its calls in tests. A shared reference to a delegate is a delegate too.
//!
//! # Result Mappings
//!
//! Results are [`IndexMap`]s, so their enumeration order is the order in
//! which keys were first produced during the traversal. The hasher is chosen
//! by feature flag, see [`KeyHasher`].
//!
//! # Laws
//!
//! For every delegate:
//!
//! - **Count total**: the values of `count_elements(items, f)` sum to
//!   `items.len()`
//! - **Remap size**: `remap_entries(map, g).len()` is the number of distinct
//!   keys `g` produces over `map`
//! - **Fail fast**: the fallible variants return the first error and no
//!   partial result

mod error;

use std::convert::Infallible;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::mapping::Mapping;

pub use error::RemapError;

/// Hasher used by every result mapping, `fxhash` build.
#[cfg(feature = "fxhash")]
pub type KeyHasher = rustc_hash::FxBuildHasher;

/// Hasher used by every result mapping, `ahash` build.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHasher = ahash::RandomState;

/// Hasher used by every result mapping.
///
/// `rustc_hash::FxBuildHasher` with the `fxhash` feature, `ahash::RandomState`
/// with the `ahash` feature (`fxhash` takes precedence), and the standard
/// library's `RandomState` otherwise.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHasher = std::collections::hash_map::RandomState;

/// Occurrence counts per derived key, in first-occurrence order.
pub type Counts<K> = IndexMap<K, usize, KeyHasher>;

/// Values of a source mapping under derived keys, in first-occurrence order.
pub type Remapped<K, V> = IndexMap<K, V, KeyHasher>;

/// Counting primitive behind [`count_by`](crate::count_by).
///
/// Only [`try_count_elements`](Self::try_count_elements) is required; the
/// infallible form is derived from it.
pub trait CountElements {
    /// Counts `items` by the key `mapper` derives from each of them.
    ///
    /// `mapper` is invoked once per item, in slice order. The first `Err` stops
    /// the traversal and is returned as is.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapper`.
    fn try_count_elements<T, K, E, F>(&self, items: &[T], mapper: F) -> Result<Counts<K>, E>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> Result<K, E>;

    /// Counts `items` by the key `mapper` derives from each of them.
    fn count_elements<T, K, F>(&self, items: &[T], mut mapper: F) -> Counts<K>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        into_ok(self.try_count_elements(items, |item| Ok::<_, Infallible>(mapper(item))))
    }
}

/// Key-remapping primitive behind [`remap_keys`](crate::remap_keys).
///
/// Only [`try_remap_entries`](Self::try_remap_entries) is required; the
/// infallible form is derived from it.
pub trait RemapEntries {
    /// Rebuilds `container` with each key replaced by
    /// `get_new_key(value, key, container)`.
    ///
    /// Entries are visited in the container's enumeration order. When two
    /// entries produce the same key, the later value replaces the earlier one
    /// and the key keeps its first position.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `get_new_key`.
    fn try_remap_entries<M, K, E, F>(
        &self,
        container: &M,
        get_new_key: F,
    ) -> Result<Remapped<K, M::Value>, E>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq,
        F: FnMut(&M::Value, &M::Key, &M) -> Result<K, E>;

    /// Rebuilds `container` with each key replaced by
    /// `get_new_key(value, key, container)`.
    fn remap_entries<M, K, F>(&self, container: &M, mut get_new_key: F) -> Remapped<K, M::Value>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq,
        F: FnMut(&M::Value, &M::Key, &M) -> K,
    {
        into_ok(self.try_remap_entries(container, |value, key, container| {
            Ok::<_, Infallible>(get_new_key(value, key, container))
        }))
    }
}

impl<D: CountElements + ?Sized> CountElements for &D {
    fn try_count_elements<T, K, E, F>(&self, items: &[T], mapper: F) -> Result<Counts<K>, E>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> Result<K, E>,
    {
        (**self).try_count_elements(items, mapper)
    }
}

impl<D: RemapEntries + ?Sized> RemapEntries for &D {
    fn try_remap_entries<M, K, E, F>(
        &self,
        container: &M,
        get_new_key: F,
    ) -> Result<Remapped<K, M::Value>, E>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq,
        F: FnMut(&M::Value, &M::Key, &M) -> Result<K, E>,
    {
        (**self).try_remap_entries(container, get_new_key)
    }
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// The default delegate: a single pass over the source, building the result
/// mapping as it goes.
///
/// # Examples
///
/// ```rust
/// use fpkeys::toolkit::{CountElements, Toolkit};
///
/// let counts = Toolkit.count_elements(&[1, 2, 3, 4, 5], |number| number % 2 == 0);
///
/// assert_eq!(counts[&false], 3);
/// assert_eq!(counts[&true], 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Toolkit;

static_assertions::assert_impl_all!(Toolkit: Send, Sync, Copy);

impl CountElements for Toolkit {
    fn try_count_elements<T, K, E, F>(&self, items: &[T], mut mapper: F) -> Result<Counts<K>, E>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> Result<K, E>,
    {
        let mut counts = Counts::with_hasher(KeyHasher::default());
        for item in items {
            *counts.entry(mapper(item)?).or_insert(0) += 1;
        }
        log::trace!(
            "counted {} items into {} keys",
            items.len(),
            counts.len()
        );
        Ok(counts)
    }
}

impl RemapEntries for Toolkit {
    fn try_remap_entries<M, K, E, F>(
        &self,
        container: &M,
        mut get_new_key: F,
    ) -> Result<Remapped<K, M::Value>, E>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq,
        F: FnMut(&M::Value, &M::Key, &M) -> Result<K, E>,
    {
        let mut remapped =
            Remapped::with_capacity_and_hasher(container.entry_count(), KeyHasher::default());
        for (key, value) in container.entries() {
            // insert keeps the slot of an existing key and replaces its value
            remapped.insert(get_new_key(value, key, container)?, value.clone());
        }
        log::trace!(
            "remapped {} entries onto {} keys",
            container.entry_count(),
            remapped.len()
        );
        Ok(remapped)
    }
}
