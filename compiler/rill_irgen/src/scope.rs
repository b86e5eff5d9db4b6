//! RAII scope for bounding the lifetime of cached local type data.
//!
//! Generation enters a [`Scope`] when it descends into a lexical region
//! (a block or a full expression), and every type data entry cached inside
//! the region is evicted when the scope ends, whether the region exits
//! normally or unwinds through an error path.
//!
//! # Design
//!
//! The guard records the stack length at entry as its watermark and holds
//! `&mut FunctionCx`, implementing `Deref`/`DerefMut` so generation keeps
//! working through it. Ending the scope truncates the stack back to the
//! watermark, exactly once; `Drop` performs the truncation if [`Scope::pop`]
//! was never called.
//!
//! Misuse is a bug in the surrounding generator, not a runtime condition.
//! Popping twice, or popping after the stack was truncated below the
//! watermark by something other than nested scope disposal, halts with an
//! assertion naming the broken invariant. Continuing past either would let
//! unrelated code observe stale cached entries, which is far harder to
//! diagnose than an immediate crash.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::function_cx::FunctionCx;

/// RAII guard binding cached type data to a lexical region.
///
/// Created by [`FunctionCx::enter_scope`]. Dropping the guard evicts every
/// entry cached since entry; [`Scope::pop`] does the same eagerly, for
/// regions that want to release their entries before doing more work.
///
/// Nested scopes reborrow the outer guard through `DerefMut`, so the
/// borrow checker already forces inner scopes to end before outer ones.
/// The watermark check in [`Scope::pop`] still guards against the stack
/// shrinking behind a live guard's back.
#[must_use = "dropping the guard immediately ends the scope it just entered"]
pub struct Scope<'cx> {
    cx: &'cx mut FunctionCx,
    saved_depth: usize,
    popped: bool,
}

impl Scope<'_> {
    /// End the scope now, evicting everything cached inside it.
    ///
    /// After this the guard is inert: entries cached through it belong to
    /// the parent region, and dropping it does nothing further.
    ///
    /// # Panics
    ///
    /// If the scope was already popped, or if the stack is shorter than
    /// the watermark captured at entry. Both are contract violations in
    /// the surrounding generator.
    pub fn pop(&mut self) {
        assert!(!self.popped, "scope popped twice");
        // Mark popped before the depth check: if the assertion unwinds,
        // Drop must not attempt a second disposal.
        self.popped = true;
        assert!(
            self.cx.type_data_depth() >= self.saved_depth,
            "type data stack truncated below a live scope's watermark ({} < {})",
            self.cx.type_data_depth(),
            self.saved_depth,
        );
        self.cx.end_type_data_scope(self.saved_depth);
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if !self.popped {
            self.pop();
        }
    }
}

impl Deref for Scope<'_> {
    type Target = FunctionCx;

    fn deref(&self) -> &Self::Target {
        self.cx
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cx
    }
}

impl FunctionCx {
    /// Enter a lexical region, capturing the current stack depth as the
    /// returned guard's watermark.
    ///
    /// Recording the watermark is the only effect; nothing is pushed. The
    /// guard derefs to `FunctionCx`, so generation continues through it
    /// until the region ends.
    pub fn enter_scope(&mut self) -> Scope<'_> {
        let saved_depth = self.type_data_depth();
        trace!(watermark = saved_depth, "enter scope");
        Scope {
            cx: self,
            saved_depth,
            popped: false,
        }
    }

    /// Run `f` inside a fresh scope, ending it when `f` returns.
    ///
    /// Convenience wrapper over [`FunctionCx::enter_scope`] for regions
    /// that map cleanly onto one closure body.
    pub fn with_scope<T>(&mut self, f: impl FnOnce(&mut Scope<'_>) -> T) -> T {
        let mut scope = self.enter_scope();
        f(&mut scope)
    }
}
