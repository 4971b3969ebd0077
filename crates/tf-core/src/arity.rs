//! Arity of a template instantiation.

use std::fmt;

use serde::Serialize;

/// Number of extra parameters (beyond the functor and the context) that one
/// instantiation of the template family accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Arity(u32);

impl Arity {
    /// Arity with no extra parameters.
    pub const ZERO: Arity = Arity(0);

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// All arities from zero up to and including `max`, in increasing order.
    pub fn up_to(max: Arity) -> impl DoubleEndedIterator<Item = Arity> {
        (0..=max.0).map(Arity)
    }

    /// Parameter indices `1..=n` used to synthesize `P1 p1`, `P2 p2`, ...
    pub fn param_indices(self) -> impl DoubleEndedIterator<Item = u32> {
        1..=self.0
    }
}

impl From<u32> for Arity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
