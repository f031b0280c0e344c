//! Tests for injecting a delegate transform into the adapter.
//!
//! A stand-in delegate records what the adapter forwards, so the adapter can
//! be checked independently of the default toolkit.

use fpkeys::toolkit::{CountElements, RemapEntries};
use fpkeys::{Adapter, Counts, KeyHasher, Mapping, Remapped, Toolkit};
use indexmap::IndexMap;
use rstest::rstest;
use std::cell::Cell;
use std::hash::Hash;

/// Records how often it is called and how many items it was handed, then
/// delegates to the toolkit.
#[derive(Debug, Default)]
struct Recording {
    calls: Cell<usize>,
    items_seen: Cell<usize>,
}

impl CountElements for Recording {
    fn try_count_elements<T, K, E, F>(&self, items: &[T], mapper: F) -> Result<Counts<K>, E>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> Result<K, E>,
    {
        self.calls.set(self.calls.get() + 1);
        self.items_seen.set(self.items_seen.get() + items.len());
        Toolkit.try_count_elements(items, mapper)
    }
}

impl RemapEntries for Recording {
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
        self.calls.set(self.calls.get() + 1);
        self.items_seen.set(self.items_seen.get() + container.entry_count());
        Toolkit.try_remap_entries(container, get_new_key)
    }
}

/// Counts every item under the key of the first one.
#[derive(Debug, Clone, Copy)]
struct Lumping;

impl CountElements for Lumping {
    fn try_count_elements<T, K, E, F>(&self, items: &[T], mut mapper: F) -> Result<Counts<K>, E>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> Result<K, E>,
    {
        let mut counts = Counts::with_hasher(KeyHasher::default());
        if let Some(first) = items.first() {
            counts.insert(mapper(first)?, items.len());
        }
        Ok(counts)
    }
}

// =============================================================================
// Forwarding
// =============================================================================

#[rstest]
fn test_direct_form_forwards_once() {
    let adapter = Adapter::new(Recording::default());

    let counts = adapter.count_by(&[1, 2, 1], |item| *item);

    assert_eq!(counts[&1], 2);
    assert_eq!(adapter.delegate().calls.get(), 1);
    assert_eq!(adapter.delegate().items_seen.get(), 3);
}

#[rstest]
fn test_curried_form_forwards_on_each_application() {
    let recording = Recording::default();
    let count_parity = Adapter::new(&recording).count_by_curried(|item: &i32| item % 2);

    let _ = count_parity(&[1, 2]);
    let _ = count_parity(&[3, 4, 5]);

    assert_eq!(recording.calls.get(), 2);
    assert_eq!(recording.items_seen.get(), 5);
}

#[rstest]
fn test_curried_form_defers_until_applied() {
    let recording = Recording::default();
    let pending = Adapter::new(&recording).count_by_curried(|item: &i32| *item);

    assert_eq!(recording.calls.get(), 0);

    let _ = pending(&[1]);
    assert_eq!(recording.calls.get(), 1);
}

#[rstest]
fn test_remap_forwards_container() {
    let adapter = Adapter::new(Recording::default());
    let container = IndexMap::from([("a", 1), ("b", 2), ("c", 3)]);

    let remapped = adapter.remap_keys(&container, |value, _, _| *value);

    assert_eq!(remapped.len(), 3);
    assert_eq!(adapter.delegate().calls.get(), 1);
    assert_eq!(adapter.delegate().items_seen.get(), 3);
}

#[rstest]
fn test_strict_remap_goes_through_delegate() {
    let recording = Recording::default();
    let container = IndexMap::from([("a", 1), ("b", 1)]);

    let result = Adapter::new(&recording).remap_keys_strict(&container, |value, _, _| *value);

    assert!(result.is_err());
    assert_eq!(recording.calls.get(), 1);
}

// =============================================================================
// Substitution
// =============================================================================

#[rstest]
fn test_adapter_returns_whatever_delegate_returns() {
    let adapter = Adapter::new(Lumping);

    let counts = adapter.count_by(&["x", "y", "z"], |item| *item);

    assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![("x", 3)]);
}

#[rstest]
fn test_substituted_delegate_in_curried_form() {
    let lumped = Adapter::new(Lumping).count_by_curried(|item: &char| *item);

    assert_eq!(lumped(&['q', 'r']).get(&'q'), Some(&2));
    assert!(lumped(&[]).is_empty());
}
