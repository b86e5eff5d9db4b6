//! Interned type and trait identifiers.

use std::fmt;

/// Identifies an interned type.
///
/// A plain index into the front end's type interner. The interner itself
/// never crosses into the backend; the backend only compares and stores
/// these ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create an id from a raw interner index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// The raw interner index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Identifies a trait declaration.
///
/// Same shape as [`TypeId`]; kept distinct so a trait can never be passed
/// where a type is expected.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TraitId(u32);

impl TraitId {
    /// Create an id from a raw declaration index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TraitId(raw)
    }

    /// The raw declaration index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraitId({})", self.0)
    }
}
