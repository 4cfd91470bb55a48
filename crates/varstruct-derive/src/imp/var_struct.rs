use crate::prelude::*;

///
/// VarStructTrait
///
/// Reflection constants, default initialization and whole-struct
/// decomposition. Value lists are the parent's list with this level's
/// fields appended.
///

pub struct VarStructTrait {}

impl Imp<VarStruct> for VarStructTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let inherits = node.inherits();
        let has_parent = node.parent.is_some();
        let inherited_size = node.inherited_size();
        let own_len = usize_lit(node.fields.len());
        let path = node.def.path_lit();

        let own_fields = node
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let name = f.name();
                let value_tokens = to_str_lit(&f.value);
                let position = node.position(i);

                quote!(::varstruct::reflect::FieldInfo::new(#name, #value_tokens, #position))
            })
            .collect::<Vec<_>>();
        let own_fields = quote_slice(&own_fields, Clone::clone);

        // per-level value lists
        let values = own_list_type(node, |v| quote!(#v));
        let refs = own_list_type(node, |v| quote!(&'__a #v));
        let muts = own_list_type(node, |v| quote!(&'__a mut #v));

        let (values_ty, refs_ty, muts_ty) = match &node.parent {
            Some(parent) => (
                concat_type(quote!(<#parent as ::varstruct::traits::VarStruct>::Values), &values),
                concat_type(quote!(<#parent as ::varstruct::traits::VarStruct>::Refs<'__a>), &refs),
                concat_type(quote!(<#parent as ::varstruct::traits::VarStruct>::Muts<'__a>), &muts),
            ),
            None => (values, refs, muts),
        };

        let into_values = decompose(node, quote!(into_values(self.__parent)), |ident| {
            quote!(self.#ident.into_value())
        });
        let values_fn = decompose(node, quote!(values(&self.__parent)), |ident| {
            quote!(self.#ident.value())
        });
        let values_mut_fn = decompose(node, quote!(values_mut(&mut self.__parent)), |ident| {
            quote!(self.#ident.value_mut())
        });

        // default initialization
        let parent_default = node.parent.as_ref().map(|p| {
            quote!(__parent: <#p as ::varstruct::traits::VarStruct>::default_initialized(),)
        });
        let field_defaults = node.fields.iter().map(|f| {
            let ident = &f.ident;
            let expr = f.default_expr();

            quote!(#ident: ::varstruct::field::Field::with_value(#expr))
        });

        let q = quote! {
            type Inherits = #inherits;
            type Values = #values_ty;
            type Refs<'__a> = #refs_ty where Self: '__a;
            type Muts<'__a> = #muts_ty where Self: '__a;

            const HAS_PARENT: bool = #has_parent;
            const SIZE: usize = #inherited_size + #own_len;
            const OWN_FIELDS: &'static [::varstruct::reflect::FieldInfo] = #own_fields;
            const PATH: &'static str = #path;

            fn default_initialized() -> Self {
                Self {
                    #parent_default
                    #(#field_defaults,)*
                }
            }

            fn into_values(self) -> <Self as ::varstruct::traits::VarStruct>::Values {
                #into_values
            }

            fn values(&self) -> <Self as ::varstruct::traits::VarStruct>::Refs<'_> {
                #values_fn
            }

            fn values_mut(&mut self) -> <Self as ::varstruct::traits::VarStruct>::Muts<'_> {
                #values_mut_fn
            }
        };

        let tokens = Implementor::new(&node.def, quote!(::varstruct::traits::VarStruct))
            .set_tokens(q)
            .to_token_stream();

        Some(TraitStrategy::from_impl(tokens))
    }
}

// HCons list type over this level's value types
fn own_list_type(node: &VarStruct, wrap: impl Fn(&Type) -> TokenStream) -> TokenStream {
    let items: Vec<_> = node.fields.iter().map(|f| wrap(&f.value)).collect();

    quote_hlist_type(&items, quote!(::varstruct::list::HNil))
}

fn concat_type(parent: TokenStream, own: &TokenStream) -> TokenStream {
    quote!(<#parent as ::varstruct::list::Concat<#own>>::Output)
}

// parent list (when present) concatenated with one expression per own field
fn decompose(
    node: &VarStruct,
    parent_call: TokenStream,
    field_expr: impl Fn(&Ident) -> TokenStream,
) -> TokenStream {
    let items: Vec<_> = node.fields.iter().map(|f| field_expr(&f.ident)).collect();
    let own = quote_hlist_value(&items, quote!(::varstruct::list::HNil));

    if node.parent.is_some() {
        quote! {
            ::varstruct::list::Concat::concat(
                ::varstruct::traits::VarStruct::#parent_call,
                #own,
            )
        }
    } else {
        own
    }
}
