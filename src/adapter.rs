//! The calling-form adapter.
//!
//! Every utility in this crate comes in two forms:
//!
//! - **direct** (data-first): `count_by(items, mapper)` computes immediately
//! - **curried** (data-last): `count_by_curried(mapper)` returns a
//!   one-argument function awaiting the data
//!
//! Both forms are methods on [`Adapter`], which owns the delegate transform
//! doing the actual work. The free functions such as
//! [`count_by`](crate::count_by) are shorthands for an
//! `Adapter<Toolkit>`.
//!
//! # Laws
//!
//! - **Curry equivalence**: `adapter.count_by_curried(f)(items) ==
//!   adapter.count_by(items, f)`, likewise for every other pair
//! - **Purity**: no form mutates its input or keeps state between calls

use crate::toolkit::Toolkit;

/// Resolves the direct and curried calling forms and forwards to a delegate.
///
/// The counting methods are available when `D` implements
/// [`CountElements`](crate::toolkit::CountElements), the remapping methods
/// when it implements [`RemapEntries`](crate::toolkit::RemapEntries).
///
/// Curried methods take the adapter by value; the returned function owns it.
///
/// # Examples
///
/// ```rust
/// use fpkeys::{Adapter, Toolkit};
///
/// let adapter = Adapter::new(Toolkit);
/// let parity = adapter.count_by_curried(|number: &i32| number % 2 == 0);
///
/// assert_eq!(parity(&[1, 2, 3])[&false], 2);
/// assert_eq!(parity(&[2, 4])[&true], 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Adapter<D = Toolkit> {
    pub(crate) delegate: D,
}

static_assertions::assert_impl_all!(Adapter: Send, Sync, Copy);

impl<D> Adapter<D> {
    /// Creates an adapter forwarding to `delegate`.
    pub const fn new(delegate: D) -> Self {
        Self { delegate }
    }

    /// Returns the delegate.
    pub const fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Consumes the adapter, returning the delegate.
    pub fn into_delegate(self) -> D {
        self.delegate
    }
}

/// The adapter behind the free functions.
pub(crate) const TOOLKIT: Adapter = Adapter::new(Toolkit);
