//! Function-level IR generation state for the Rill compiler.
//!
//! While generating a function body, the backend derives per-type
//! structures (runtime metadata pointers, trait witness tables) that are
//! expensive to recompute. They are cached so later expressions in the
//! same region can reuse them. An entry's validity is bounded by the
//! lexical region that produced it: the registers it lives in and the
//! dominance facts it relies on hold only there, so the entry must become
//! unreachable the moment generation leaves that region, no matter which
//! exit path is taken.
//!
//! Two pieces enforce that bound:
//!
//! - [`FunctionCx`]: per-function context owning the scoped local type
//!   data stack.
//! - [`Scope`]: RAII guard that records the stack depth on entry and
//!   truncates back to it exactly once when the region ends.
//!
//! # Usage
//!
//! ```text
//! let mut scope = cx.enter_scope();
//! scope.cache_type_data(TypeDataKey::metadata(ty), metadata_ptr);
//! emit_block_body(&mut scope)?;
//! // entries cached above are evicted here, on every exit path
//! ```

mod function_cx;
mod scope;
mod type_data;

pub use function_cx::FunctionCx;
pub use scope::Scope;
pub use type_data::{TypeDataKey, TypeDataKind};
