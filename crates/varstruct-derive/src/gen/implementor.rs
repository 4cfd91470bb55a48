use crate::prelude::*;

///
/// Implementor
///
/// Builds one `impl` block for a declared struct: optional impl generics,
/// a trait path (with arguments), optional where clauses and the body.
///

pub struct Implementor<'a> {
    def: &'a Def,
    trait_path: TokenStream,
    impl_generics: Vec<TokenStream>,
    where_clauses: Vec<TokenStream>,
    tokens: TokenStream,
}

impl<'a> Implementor<'a> {
    pub fn new(def: &'a Def, trait_path: TokenStream) -> Self {
        Self {
            def,
            trait_path,
            impl_generics: Vec::new(),
            where_clauses: Vec::new(),
            tokens: TokenStream::new(),
        }
    }

    pub fn add_impl_generic(mut self, generic: TokenStream) -> Self {
        self.impl_generics.push(generic);
        self
    }

    pub fn add_where(mut self, clause: TokenStream) -> Self {
        self.where_clauses.push(clause);
        self
    }

    pub fn set_tokens(mut self, tokens: TokenStream) -> Self {
        self.tokens = tokens;
        self
    }
}

impl ToTokens for Implementor<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = &self.def.ident;
        let trait_path = &self.trait_path;
        let body = &self.tokens;

        let generics = if self.impl_generics.is_empty() {
            quote!()
        } else {
            let g = &self.impl_generics;
            quote!(<#(#g),*>)
        };

        let where_clause = if self.where_clauses.is_empty() {
            quote!()
        } else {
            let w = &self.where_clauses;
            quote!(where #(#w),*)
        };

        tokens.extend(quote! {
            impl #generics #trait_path for #ident #where_clause {
                #body
            }
        });
    }
}
