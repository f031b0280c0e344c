//! Key-value containers accepted by the remapping utilities.
//!
//! A [`Mapping`] has unique keys and a defined enumeration order. Only the
//! container's own entries are enumerated.
//!
//! | Container | Enumeration order |
//! |-----------|-------------------|
//! | [`IndexMap`] | insertion order |
//! | [`BTreeMap`] | ascending key order |
//! | [`HashMap`] | the map's own iteration order |

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

/// A container of unique keys with a defined enumeration order.
///
/// # Examples
///
/// ```rust
/// use fpkeys::Mapping;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("b", 2), ("a", 1)]);
/// let keys: Vec<_> = map.entries().map(|(key, _)| *key).collect();
///
/// assert_eq!(keys, vec!["a", "b"]);
/// assert_eq!(map.entry_count(), 2);
/// ```
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns the number of entries.
    fn entry_count(&self) -> usize;

    /// Returns `true` if there is at least one entry.
    fn has_entries(&self) -> bool {
        self.entry_count() > 0
    }

    /// Enumerates the entries in the container's order.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> Mapping for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn index_map_enumerates_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("z", 1);
        map.insert("a", 2);
        map.insert("m", 3);

        let keys: Vec<_> = map.entries().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[rstest]
    fn btree_map_enumerates_in_key_order() {
        let map = BTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);

        let values: Vec<_> = map.entries().map(|(_, value)| *value).collect();
        assert_eq!(values, vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn hash_map_enumerates_every_entry_once() {
        let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);

        let mut keys: Vec<_> = map.entries().map(|(key, _)| *key).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[rstest]
    #[case(BTreeMap::new(), false)]
    #[case(BTreeMap::from([(1, 1)]), true)]
    fn has_entries_follows_entry_count(#[case] map: BTreeMap<i32, i32>, #[case] expected: bool) {
        assert_eq!(map.has_entries(), expected);
    }

    #[rstest]
    fn entry_count_matches_inherent_len() {
        let map = HashMap::from([("a", 1), ("b", 2)]);
        assert_eq!(map.entry_count(), map.len());
    }
}
