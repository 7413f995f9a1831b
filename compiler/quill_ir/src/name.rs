//! Interned identifier handles.

use std::fmt;

/// Interned string handle.
///
/// A `Name` is a `u32` index into the owning [`StringInterner`]. Equality
/// and hashing are single-word operations; the textual form is recovered
/// through the interner.
///
/// [`StringInterner`]: crate::StringInterner
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Name(u32);

impl Name {
    /// The pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create a `Name` from a raw index.
    ///
    /// Only meaningful for indices produced by the owning interner; used by
    /// the interner itself and by tests that fabricate handles.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Index into the interner's storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
