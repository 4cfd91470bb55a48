use crate::prelude::*;

///
/// DefaultTrait
/// Default construction: every field empty.
///

pub struct DefaultTrait {}

impl Imp<VarStruct> for DefaultTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let parent = node
            .parent
            .as_ref()
            .map(|_| quote!(__parent: ::core::default::Default::default(),));
        let assignments = node.fields.iter().map(|f| {
            let ident = &f.ident;

            quote!(#ident: ::varstruct::field::Field::empty())
        });

        let q = quote! {
            fn default() -> Self {
                Self {
                    #parent
                    #(#assignments,)*
                }
            }
        };

        let tokens = Implementor::new(&node.def, quote!(::core::default::Default))
            .set_tokens(q)
            .to_token_stream();

        Some(TraitStrategy::from_impl(tokens))
    }
}

///
/// FromTrait
/// `From<DefaultInitialized>` forwards to `default_initialized`.
///

pub struct FromTrait {}

impl Imp<VarStruct> for FromTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let q = quote! {
            fn from(_: ::varstruct::init::DefaultInitialized) -> Self {
                <Self as ::varstruct::traits::VarStruct>::default_initialized()
            }
        };

        let tokens = Implementor::new(
            &node.def,
            quote!(::core::convert::From<::varstruct::init::DefaultInitialized>),
        )
        .set_tokens(q)
        .to_token_stream();

        Some(TraitStrategy::from_impl(tokens))
    }
}
