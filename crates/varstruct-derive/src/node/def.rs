use crate::prelude::*;
use syn::{Attribute, Visibility};

///
/// Def
///
/// The parts of the annotated item that survive expansion unchanged.
///

#[derive(Clone, Debug)]
pub struct Def {
    pub ident: Ident,
    pub vis: Visibility,
    pub attrs: Vec<Attribute>,
}

impl Def {
    pub const fn ident(&self) -> &Ident {
        &self.ident
    }

    /// Hidden module that holds the per-field name markers.
    pub fn module_ident(&self) -> Ident {
        format_ident!("__varstruct_{}", self.ident)
    }

    pub fn path_lit(&self) -> TokenStream {
        let name = self.ident.to_string();

        quote!(::core::concat!(::core::module_path!(), "::", #name))
    }
}
