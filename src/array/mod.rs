//! Utilities over sequences.
//!
//! - [`count_by`] / [`count_by_curried`]: occurrences per derived key
//! - [`try_count_by`] / [`try_count_by_curried`]: the same with a fallible
//!   key function

mod count_by;

pub use count_by::{count_by, count_by_curried, try_count_by, try_count_by_curried};
