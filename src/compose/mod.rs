//! Composition utilities for the curried forms.
//!
//! The curried utilities return one-argument functions; this module provides
//! the glue to chain them.
//!
//! - [`pipe!`]: apply functions left to right to a value
//! - [`compose!`]: build a function from others, right to left
//! - [`Pipe`]: `value.pipe(f)`, the method-call form of `pipe!`
//! - [`identity`]: the identity function
//!
//! # Examples
//!
//! ```
//! use fpkeys::{count_by_curried, pipe};
//!
//! let hits = ["/", "/about", "/", "/contact", "/"];
//! let per_page = pipe!(hits.as_slice(), count_by_curried(|path: &&str| *path));
//!
//! assert_eq!(per_page["/"], 3);
//! ```
//!
//! # Laws
//!
//! - **Pipe/compose duality**: `pipe!(x, f, g) == compose!(g, f)(x)`
//! - **Identity**: `compose!(identity, f)(x) == f(x)`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{Pipe, identity};

pub use crate::compose;
pub use crate::pipe;
