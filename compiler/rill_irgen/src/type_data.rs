//! Keys and entries for the scoped local type data cache.

use rill_ir::{TraitId, TypeId, ValueId};

/// Which derived structure an entry caches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeDataKind {
    /// Pointer to the type's runtime metadata.
    Metadata,
    /// Witness table binding the type to an implemented trait.
    WitnessTable(TraitId),
}

/// Cache key: one derived structure for one type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeDataKey {
    /// The type the cached structure describes.
    pub ty: TypeId,
    /// Which structure is cached.
    pub kind: TypeDataKind,
}

impl TypeDataKey {
    /// Key for the type's metadata pointer.
    #[inline]
    pub const fn metadata(ty: TypeId) -> Self {
        TypeDataKey {
            ty,
            kind: TypeDataKind::Metadata,
        }
    }

    /// Key for the type's witness table for `tr`.
    #[inline]
    pub const fn witness_table(ty: TypeId, tr: TraitId) -> Self {
        TypeDataKey {
            ty,
            kind: TypeDataKind::WitnessTable(tr),
        }
    }
}

/// One cached entry on the scoped stack.
///
/// Entries never outlive the [`FunctionCx`](crate::FunctionCx) that owns
/// the stack, and truncation is the only way they are removed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TypeDataEntry {
    pub key: TypeDataKey,
    pub value: ValueId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_distinguish_kind_and_trait() {
        let ty = TypeId::from_raw(1);
        let meta = TypeDataKey::metadata(ty);
        let wt_a = TypeDataKey::witness_table(ty, TraitId::from_raw(1));
        let wt_b = TypeDataKey::witness_table(ty, TraitId::from_raw(2));

        assert_eq!(meta, TypeDataKey::metadata(ty));
        assert_ne!(meta, wt_a);
        assert_ne!(wt_a, wt_b);
    }
}
