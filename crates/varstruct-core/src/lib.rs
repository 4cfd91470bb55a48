//! Core runtime for varstruct: field storage, identity hashing, checked
//! assignment, argument lists, and the struct and reflection traits that
//! `#[varstruct]` implements.

extern crate self as varstruct;

// public exports are one module level down
pub mod assign;
pub mod error;
pub mod field;
pub mod hash;
pub mod init;
pub mod list;
pub mod literal;
pub mod obs;
pub mod reflect;
pub mod traits;

#[doc(hidden)]
pub mod __private;

///
/// CONSTANTS
///

pub use list::MAX_TUPLE_ARITY;
pub use literal::MAX_NAME_LEN;

/// Identity of a field name, usable as a const generic argument:
/// `s.value::<{ id!("field0") }, _>()`.
#[macro_export]
macro_rules! id {
    ($name:expr) => {
        $crate::hash::field_id($name)
    };
}

///
/// Prelude
///
/// Traits needed to call accessors on `#[varstruct]` types, plus the
/// construction markers.
///

pub mod prelude {
    pub use crate::{
        field::{Field, FieldName, FieldTraits, NullDescriptor},
        hlist, id,
        init::{DefaultInitialized, Init},
        is_struct,
        traits::{EmptyStruct, HasParent, VarStruct},
    };
}
