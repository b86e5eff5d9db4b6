//! Per-function code-generation context.

use tracing::trace;

use rill_ir::ValueId;

use crate::type_data::{TypeDataEntry, TypeDataKey};

/// State that lives for exactly one function body's generation.
///
/// Owns the scoped local type data stack: an ordered sequence of cached
/// entries, newest last, where each entry belongs to the lexical region
/// that was innermost when it was pushed. A [`Scope`](crate::Scope)
/// records the stack length on entry and truncates back to it when the
/// region ends, so entries can never leak past the region whose register
/// and dominance assumptions they depend on.
#[derive(Debug, Default)]
pub struct FunctionCx {
    /// Scoped cache, truncated to a scope's watermark when it ends.
    scoped_type_data: Vec<TypeDataEntry>,
}

impl FunctionCx {
    /// Create a context with an empty type data stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current length of the scoped type data stack.
    ///
    /// [`Scope`](crate::Scope) captures this as its watermark on entry.
    #[inline]
    pub fn type_data_depth(&self) -> usize {
        self.scoped_type_data.len()
    }

    /// Cache a derived value for `key` in the innermost live region.
    ///
    /// The new entry shadows any earlier entry with the same key until the
    /// enclosing scope ends.
    pub fn cache_type_data(&mut self, key: TypeDataKey, value: ValueId) {
        trace!(
            ?key,
            value = value.raw(),
            depth = self.scoped_type_data.len(),
            "cache type data"
        );
        self.scoped_type_data.push(TypeDataEntry { key, value });
    }

    /// Look up the most recently cached live entry for `key`.
    pub fn lookup_type_data(&self, key: TypeDataKey) -> Option<ValueId> {
        self.scoped_type_data
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }

    /// Truncate the stack to `depth`, evicting every entry at or beyond it.
    ///
    /// Only [`Scope`](crate::Scope) calls this, with a watermark it
    /// captured itself; the guard has already checked that the stack is at
    /// least `depth` long.
    pub(crate) fn end_type_data_scope(&mut self, depth: usize) {
        debug_assert!(depth <= self.scoped_type_data.len());
        let evicted = self.scoped_type_data.len() - depth;
        trace!(depth, evicted, "end type data scope");
        self.scoped_type_data.truncate(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_data::TypeDataKey;
    use pretty_assertions::assert_eq;
    use rill_ir::{TraitId, TypeId};

    fn meta(n: u32) -> TypeDataKey {
        TypeDataKey::metadata(TypeId::from_raw(n))
    }

    fn val(n: u32) -> ValueId {
        ValueId::from_raw(n)
    }

    #[test]
    fn empty_context_has_zero_depth() {
        let cx = FunctionCx::new();
        assert_eq!(cx.type_data_depth(), 0);
        assert_eq!(cx.lookup_type_data(meta(1)), None);
    }

    #[test]
    fn cache_grows_depth_and_lookup_finds_entry() {
        let mut cx = FunctionCx::new();
        cx.cache_type_data(meta(1), val(10));
        cx.cache_type_data(meta(2), val(20));

        assert_eq!(cx.type_data_depth(), 2);
        assert_eq!(cx.lookup_type_data(meta(1)), Some(val(10)));
        assert_eq!(cx.lookup_type_data(meta(2)), Some(val(20)));
        assert_eq!(cx.lookup_type_data(meta(3)), None);
    }

    #[test]
    fn newest_entry_shadows_older_one() {
        let mut cx = FunctionCx::new();
        cx.cache_type_data(meta(1), val(10));
        cx.cache_type_data(meta(1), val(11));

        assert_eq!(cx.lookup_type_data(meta(1)), Some(val(11)));
    }

    #[test]
    fn lookup_distinguishes_metadata_from_witness_table() {
        let ty = TypeId::from_raw(1);
        let wt = TypeDataKey::witness_table(ty, TraitId::from_raw(4));

        let mut cx = FunctionCx::new();
        cx.cache_type_data(TypeDataKey::metadata(ty), val(10));
        cx.cache_type_data(wt, val(20));

        assert_eq!(
            cx.lookup_type_data(TypeDataKey::metadata(ty)),
            Some(val(10))
        );
        assert_eq!(cx.lookup_type_data(wt), Some(val(20)));
    }

    #[test]
    fn truncation_evicts_entries_at_or_beyond_depth() {
        let mut cx = FunctionCx::new();
        cx.cache_type_data(meta(1), val(10));
        cx.cache_type_data(meta(2), val(20));
        cx.cache_type_data(meta(3), val(30));

        cx.end_type_data_scope(1);

        assert_eq!(cx.type_data_depth(), 1);
        assert_eq!(cx.lookup_type_data(meta(1)), Some(val(10)));
        assert_eq!(cx.lookup_type_data(meta(2)), None);
        assert_eq!(cx.lookup_type_data(meta(3)), None);
    }

    #[test]
    fn truncation_unshadows_outer_entry() {
        let mut cx = FunctionCx::new();
        cx.cache_type_data(meta(1), val(10));
        cx.cache_type_data(meta(1), val(11));

        cx.end_type_data_scope(1);

        assert_eq!(cx.lookup_type_data(meta(1)), Some(val(10)));
    }

    #[test]
    fn truncation_to_current_depth_is_a_no_op() {
        let mut cx = FunctionCx::new();
        cx.cache_type_data(meta(1), val(10));

        cx.end_type_data_scope(1);

        assert_eq!(cx.type_data_depth(), 1);
        assert_eq!(cx.lookup_type_data(meta(1)), Some(val(10)));
    }
}
