//! Utilities over key-value mappings.
//!
//! - [`remap_keys`] / [`remap_keys_curried`]: same values under derived keys,
//!   later entries win on collision
//! - [`try_remap_keys`] / [`try_remap_keys_curried`]: the same with a
//!   fallible key function
//! - [`remap_keys_strict`] / [`remap_keys_strict_curried`]: collisions are
//!   reported as [`RemapError`] instead

mod remap_keys;

pub use crate::toolkit::RemapError;
pub use remap_keys::{
    remap_keys, remap_keys_curried, remap_keys_strict, remap_keys_strict_curried, try_remap_keys,
    try_remap_keys_curried,
};
