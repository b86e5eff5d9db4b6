//! Shared IR handle types for the Rill compiler.
//!
//! Backends refer to front-end and emitter entities through opaque `Copy`
//! ids instead of borrowing their internals. Each id is a `u32` newtype:
//! equality and hashing are O(1), and the id carries no lifetime, so it can
//! be stored freely in caches and side tables.
//!
//! - [`TypeId`]: an interned type.
//! - [`TraitId`]: a trait declaration.
//! - [`ValueId`]: an IR value produced by the instruction emitter.

mod type_id;
mod value_id;

pub use type_id::{TraitId, TypeId};
pub use value_id::ValueId;
