//! Remapping the keys of a mapping.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::adapter::{Adapter, TOOLKIT};
use crate::mapping::Mapping;
use crate::toolkit::{KeyHasher, RemapEntries, RemapError, Remapped};

impl<D: RemapEntries> Adapter<D> {
    /// Rebuilds `container` under the keys `get_new_key` derives.
    ///
    /// See [`remap_keys`](crate::remap_keys).
    pub fn remap_keys<M, K, F>(&self, container: &M, get_new_key: F) -> Remapped<K, M::Value>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq,
        F: FnMut(&M::Value, &M::Key, &M) -> K,
    {
        self.delegate.remap_entries(container, get_new_key)
    }

    /// Returns a function rebuilding the mapping it is given under the keys
    /// `get_new_key` derives.
    ///
    /// See [`remap_keys_curried`](crate::remap_keys_curried).
    pub fn remap_keys_curried<M, K, F>(self, get_new_key: F) -> impl Fn(&M) -> Remapped<K, M::Value>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq,
        F: Fn(&M::Value, &M::Key, &M) -> K,
    {
        move |container: &M| self.remap_keys(container, &get_new_key)
    }

    /// Rebuilds `container` under the keys a fallible `get_new_key` derives.
    ///
    /// See [`try_remap_keys`](crate::try_remap_keys).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `get_new_key`.
    pub fn try_remap_keys<M, K, E, F>(
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
        self.delegate.try_remap_entries(container, get_new_key)
    }

    /// Curried form of [`Adapter::try_remap_keys`].
    pub fn try_remap_keys_curried<M, K, E, F>(
        self,
        get_new_key: F,
    ) -> impl Fn(&M) -> Result<Remapped<K, M::Value>, E>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq,
        F: Fn(&M::Value, &M::Key, &M) -> Result<K, E>,
    {
        move |container: &M| self.try_remap_keys(container, &get_new_key)
    }

    /// Rebuilds `container` under derived keys, refusing key collisions.
    ///
    /// See [`remap_keys_strict`](crate::remap_keys_strict).
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::DuplicateKey`] for the first key produced twice.
    pub fn remap_keys_strict<M, K, F>(
        &self,
        container: &M,
        mut get_new_key: F,
    ) -> Result<Remapped<K, M::Value>, RemapError<K>>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq + Clone,
        F: FnMut(&M::Value, &M::Key, &M) -> K,
    {
        let mut seen = IndexSet::with_hasher(KeyHasher::default());
        self.delegate
            .try_remap_entries(container, |value, key, whole| {
                let new_key = get_new_key(value, key, whole);
                // no collision so far, so positions in `seen` are entry indices
                if let Some(first_index) = seen.get_index_of(&new_key) {
                    return Err(RemapError::DuplicateKey {
                        key: new_key,
                        first_index,
                        second_index: seen.len(),
                    });
                }
                seen.insert(new_key.clone());
                Ok(new_key)
            })
    }

    /// Curried form of [`Adapter::remap_keys_strict`].
    pub fn remap_keys_strict_curried<M, K, F>(
        self,
        get_new_key: F,
    ) -> impl Fn(&M) -> Result<Remapped<K, M::Value>, RemapError<K>>
    where
        M: Mapping,
        M::Value: Clone,
        K: Hash + Eq + Clone,
        F: Fn(&M::Value, &M::Key, &M) -> K,
    {
        move |container: &M| self.remap_keys_strict(container, &get_new_key)
    }
}

/// Rebuilds a mapping with each key replaced by
/// `get_new_key(value, key, container)`.
///
/// `get_new_key` is called once per entry, in the container's enumeration
/// order (see [`Mapping`]). The container is left untouched and its values
/// are cloned into the result.
///
/// When two entries produce the same key, the value of the later entry wins
/// and the key keeps the position of its first occurrence. Use
/// [`remap_keys_strict`] to reject collisions instead.
///
/// # Examples
///
/// ```rust
/// use fpkeys::remap_keys;
/// use indexmap::IndexMap;
///
/// let object = IndexMap::from([("a", 1), ("b", 2)]);
/// let remapped = remap_keys(&object, |value, key, _| format!("{key}{value}"));
///
/// let entries: Vec<_> = remapped.into_iter().collect();
/// assert_eq!(entries, vec![("a1".to_string(), 1), ("b2".to_string(), 2)]);
/// ```
///
/// ## Collisions
///
/// ```rust
/// use fpkeys::remap_keys;
/// use indexmap::IndexMap;
///
/// let object = IndexMap::from([("a", 1), ("b", 1)]);
/// let remapped = remap_keys(&object, |value, _, _| format!("x{value}"));
///
/// assert_eq!(remapped.len(), 1);
/// assert_eq!(remapped["x1"], 1);
/// ```
pub fn remap_keys<M, K, F>(container: &M, get_new_key: F) -> Remapped<K, M::Value>
where
    M: Mapping,
    M::Value: Clone,
    K: Hash + Eq,
    F: FnMut(&M::Value, &M::Key, &M) -> K,
{
    TOOLKIT.remap_keys(container, get_new_key)
}

/// Curried form of [`remap_keys`]: takes the key function now and the
/// mapping later.
///
/// The container type is fixed by the key function's third parameter, so
/// annotate it when it cannot be inferred.
///
/// # Examples
///
/// ```rust
/// use fpkeys::remap_keys_curried;
/// use std::collections::BTreeMap;
///
/// let prefixed = remap_keys_curried(|_: &u32, key: &String, _: &BTreeMap<String, u32>| {
///     format!("user.{key}")
/// });
///
/// let settings = BTreeMap::from([("name".to_string(), 1), ("age".to_string(), 2)]);
/// let remapped = prefixed(&settings);
///
/// assert_eq!(remapped["user.age"], 2);
/// assert_eq!(remapped["user.name"], 1);
/// ```
pub fn remap_keys_curried<M, K, F>(get_new_key: F) -> impl Fn(&M) -> Remapped<K, M::Value>
where
    M: Mapping,
    M::Value: Clone,
    K: Hash + Eq,
    F: Fn(&M::Value, &M::Key, &M) -> K,
{
    TOOLKIT.remap_keys_curried(get_new_key)
}

/// Rebuilds a mapping under keys derived by a fallible function.
///
/// The traversal stops at the first `Err`, which is returned unchanged; no
/// partial mapping is returned.
///
/// # Errors
///
/// Returns the first error produced by `get_new_key`.
///
/// # Examples
///
/// ```rust
/// use fpkeys::try_remap_keys;
/// use std::collections::BTreeMap;
///
/// let by_label = BTreeMap::from([("10", 'a'), ("20", 'b')]);
/// let by_number = try_remap_keys(&by_label, |_, key, _| key.parse::<u16>());
///
/// assert_eq!(by_number.map(|remapped| remapped[&20]), Ok('b'));
/// ```
pub fn try_remap_keys<M, K, E, F>(container: &M, get_new_key: F) -> Result<Remapped<K, M::Value>, E>
where
    M: Mapping,
    M::Value: Clone,
    K: Hash + Eq,
    F: FnMut(&M::Value, &M::Key, &M) -> Result<K, E>,
{
    TOOLKIT.try_remap_keys(container, get_new_key)
}

/// Curried form of [`try_remap_keys`].
pub fn try_remap_keys_curried<M, K, E, F>(
    get_new_key: F,
) -> impl Fn(&M) -> Result<Remapped<K, M::Value>, E>
where
    M: Mapping,
    M::Value: Clone,
    K: Hash + Eq,
    F: Fn(&M::Value, &M::Key, &M) -> Result<K, E>,
{
    TOOLKIT.try_remap_keys_curried(get_new_key)
}

/// Like [`remap_keys`], but two entries producing the same key is an error.
///
/// # Errors
///
/// Returns [`RemapError::DuplicateKey`] naming the key and the enumeration
/// indices of both entries. No partial mapping is returned.
///
/// # Examples
///
/// ```rust
/// use fpkeys::{RemapError, remap_keys_strict};
/// use indexmap::IndexMap;
///
/// let object = IndexMap::from([("a", 1), ("b", 1)]);
/// let result = remap_keys_strict(&object, |value, _, _| format!("x{value}"));
///
/// assert_eq!(
///     result,
///     Err(RemapError::DuplicateKey {
///         key: "x1".to_string(),
///         first_index: 0,
///         second_index: 1,
///     })
/// );
/// ```
pub fn remap_keys_strict<M, K, F>(
    container: &M,
    get_new_key: F,
) -> Result<Remapped<K, M::Value>, RemapError<K>>
where
    M: Mapping,
    M::Value: Clone,
    K: Hash + Eq + Clone,
    F: FnMut(&M::Value, &M::Key, &M) -> K,
{
    TOOLKIT.remap_keys_strict(container, get_new_key)
}

/// Curried form of [`remap_keys_strict`].
pub fn remap_keys_strict_curried<M, K, F>(
    get_new_key: F,
) -> impl Fn(&M) -> Result<Remapped<K, M::Value>, RemapError<K>>
where
    M: Mapping,
    M::Value: Clone,
    K: Hash + Eq + Clone,
    F: Fn(&M::Value, &M::Key, &M) -> K,
{
    TOOLKIT.remap_keys_strict_curried(get_new_key)
}
