//! # fpkeys
//!
//! Small collection utilities offered in two calling forms each: a direct
//! (data-first) form and a curried (data-last) form for function-composition
//! pipelines.
//!
//! ## Overview
//!
//! - **Counting**: [`count_by`] groups the items of a slice by a derived key
//!   and counts each group.
//! - **Key remapping**: [`remap_keys`] rebuilds a mapping with every key
//!   replaced by a derived key, keeping the values.
//! - **Delegates**: the adapters forward the real work to a delegate
//!   transform ([`toolkit::CountElements`], [`toolkit::RemapEntries`]).
//!   [`Toolkit`] is the default one; [`Adapter`] accepts any other.
//! - **Composition**: `pipe!`, `compose!` and the `compose::Pipe` trait
//!   for chaining the curried forms (`compose` feature).
//!
//! ## Feature Flags
//!
//! - `compose` (default): composition macros and helpers
//! - `serde`: result mappings serialize as maps, in enumeration order
//! - `fxhash`: result mappings hash keys with `rustc_hash::FxBuildHasher`
//! - `ahash`: result mappings hash keys with `ahash::RandomState`
//! - `full`: `compose` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use fpkeys::prelude::*;
//!
//! let words = ["a", "b", "c", "a", "b", "a"];
//!
//! let direct = count_by(&words, |word| *word);
//! let curried = count_by_curried(|word: &&str| *word)(&words);
//!
//! assert_eq!(direct, curried);
//! assert_eq!(direct["a"], 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the entry points, the adapter and the delegate traits.
///
/// # Usage
///
/// ```rust
/// use fpkeys::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::Adapter;
    pub use crate::array::*;
    pub use crate::mapping::Mapping;
    pub use crate::object::*;
    pub use crate::toolkit::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod adapter;
pub mod array;
pub mod mapping;
pub mod object;
pub mod toolkit;

#[cfg(feature = "compose")]
pub mod compose;

pub use adapter::Adapter;
pub use array::{count_by, count_by_curried, try_count_by, try_count_by_curried};
pub use mapping::Mapping;
pub use object::{
    RemapError, remap_keys, remap_keys_curried, remap_keys_strict, remap_keys_strict_curried,
    try_remap_keys, try_remap_keys_curried,
};
pub use toolkit::{Counts, KeyHasher, Remapped, Toolkit};
