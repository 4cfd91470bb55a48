//! `#[varstruct(...)]`: declares a variadic struct and generates its field
//! storage together with construction, access and reflection impls.

mod r#gen;
mod helper;
mod imp;
mod node;
mod validate;

use proc_macro::TokenStream;

#[deny(unused_imports)]
mod prelude {
    pub use crate::{
        r#gen::Implementor,
        helper::*,
        imp::{Imp, TraitStrategy},
        node::*,
        validate::*,
    };
    pub use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
    pub use proc_macro2::TokenStream;
    pub use quote::{ToTokens, format_ident, quote};
    pub use syn::{Ident, Path, Type};
}

/// Declare a variadic struct.
///
/// ```ignore
/// #[varstruct(
///     parent = "Base",
///     fields(
///         field(ident = "name", value = "String"),
///         field(ident = "level", value = "u8", descriptor = "LevelTag"),
///     )
/// )]
/// #[derive(Clone, Debug)]
/// pub struct Player {}
/// ```
#[proc_macro_attribute]
pub fn varstruct(args: TokenStream, input: TokenStream) -> TokenStream {
    node::VarStruct::expand(args.into(), input.into())
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}
