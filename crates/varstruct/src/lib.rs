//! ## Crate layout
//! - `assign`: checked value conversion used by `set` and `try_set`.
//! - `field`: per-field storage, name markers and descriptors.
//! - `hash`: compile-time field identities.
//! - `list`: heterogeneous argument and value lists.
//! - `obs`: assignment counters and event sinks (recording needs the `obs` feature).
//! - `reflect`: const and runtime queries over declared fields.
//! - `traits`: `VarStruct` and the access and construction traits.
//!
//! Declare types with `#[varstruct(...)]` and bring accessors into scope
//! with `use varstruct::prelude::*`.

pub use varstruct_core::{
    MAX_NAME_LEN, MAX_TUPLE_ARITY, assign, error, field, hash, hlist, id, init, is_struct, list,
    literal, obs, reflect, traits,
};
pub use varstruct_derive::varstruct;

#[doc(hidden)]
pub use varstruct_core::__private;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::varstruct;
    pub use varstruct_core::prelude::*;
}
