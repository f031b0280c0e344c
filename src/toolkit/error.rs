//! Error type for strict key remapping.
//!
//! [`remap_keys`](crate::remap_keys) resolves key collisions by letting the
//! later entry win. [`remap_keys_strict`](crate::remap_keys_strict) refuses
//! them instead and reports the collision with [`RemapError`].

use std::fmt;

/// Represents a failed strict remapping.
///
/// # Examples
///
/// ```rust
/// use fpkeys::RemapError;
///
/// let error = RemapError::DuplicateKey {
///     key: "x1",
///     first_index: 0,
///     second_index: 1,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "duplicate key \"x1\": produced by entries 0 and 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RemapError<K> {
    /// Two entries of the source mapping produced the same new key.
    DuplicateKey {
        /// The key produced twice.
        key: K,
        /// Enumeration index of the entry that produced the key first.
        first_index: usize,
        /// Enumeration index of the entry that produced it again.
        second_index: usize,
    },
}

impl<K> RemapError<K> {
    /// Returns the key the error is about.
    pub const fn key(&self) -> &K {
        match self {
            Self::DuplicateKey { key, .. } => key,
        }
    }
}

impl<K: fmt::Debug> fmt::Display for RemapError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey {
                key,
                first_index,
                second_index,
            } => write!(
                formatter,
                "duplicate key {key:?}: produced by entries {first_index} and {second_index}"
            ),
        }
    }
}

impl<K: fmt::Debug> std::error::Error for RemapError<K> {}
