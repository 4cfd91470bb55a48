use crate::prelude::*;

///
/// ConstructTrait
///
/// Positional construction. The hidden `__Fields` marker gets one
/// `ConstructFields` impl per accepted argument count (0 through all own
/// fields); the full-length impl hands any surplus on as `Rest`. The
/// struct's `Construct` lets the parent consume first.
///

pub struct ConstructTrait {}

impl Imp<VarStruct> for ConstructTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let mut tokens = group_impl(node);
        let count = node.fields.len();

        for taken in 0..=count {
            tokens.extend(construct_fields_impl(node, taken));
        }
        tokens.extend(construct_impl(node));

        Some(TraitStrategy::from_impl(tokens))
    }
}

fn group_marker(node: &VarStruct) -> TokenStream {
    let module = node.def.module_ident();

    quote!(#module::__Fields)
}

fn field_binding(i: usize) -> Ident {
    format_ident!("__f{i}")
}

// FieldGroup
fn group_impl(node: &VarStruct) -> TokenStream {
    let marker = group_marker(node);
    let storage = node.fields.iter().map(|f| f.storage_type(&node.def));

    quote! {
        impl ::varstruct::traits::FieldGroup for #marker {
            type Fields = (#(#storage,)*);
        }
    }
}

// ConstructFields for the first `taken` own fields
fn construct_fields_impl(node: &VarStruct, taken: usize) -> TokenStream {
    let marker = group_marker(node);
    let full = taken == node.fields.len();

    let arg_tys: Vec<TokenStream> = (0..taken)
        .map(|i| format_ident!("__A{i}").to_token_stream())
        .collect();
    let arg_names: Vec<TokenStream> = (0..taken)
        .map(|i| format_ident!("__a{i}").to_token_stream())
        .collect();

    let (tail_ty, tail_pat, rest_ty, rest_generic) = if full {
        (
            quote!(__Rest),
            quote!(__rest),
            quote!(__Rest),
            Some(quote!(__Rest)),
        )
    } else {
        (
            quote!(::varstruct::list::HNil),
            quote!(::varstruct::list::HNil),
            quote!(::varstruct::list::HNil),
            None,
        )
    };

    let args_ty = quote_hlist_type(&arg_tys, tail_ty);
    let args_pat = quote_hlist_value(&arg_names, tail_pat);
    let rest_value = if full {
        quote!(__rest)
    } else {
        quote!(::varstruct::list::HNil)
    };

    let generics = arg_tys.iter().cloned().chain(rest_generic);
    let bounds = node.fields.iter().zip(&arg_tys).map(|(f, a)| {
        let value = &f.value;

        quote!(#a: ::varstruct::init::IntoInit<#value>)
    });

    let values = node.fields.iter().enumerate().map(|(i, f)| {
        let storage = f.storage_type(&node.def);

        if i < taken {
            let arg = &arg_names[i];
            let default_expr = f.default_expr();

            quote! {
                <#storage>::from_init(
                    ::varstruct::init::IntoInit::into_init(#arg),
                    || #default_expr,
                )
            }
        } else {
            quote!(<#storage>::empty())
        }
    });

    quote! {
        impl<#(#generics),*> ::varstruct::traits::ConstructFields<#args_ty> for #marker
        where
            #(#bounds,)*
        {
            type Rest = #rest_ty;

            #[inline]
            fn construct_fields(args: #args_ty) -> (
                <Self as ::varstruct::traits::FieldGroup>::Fields,
                Self::Rest,
            ) {
                let #args_pat = args;

                ((#(#values,)*), #rest_value)
            }
        }
    }
}

// Construct for the struct itself
fn construct_impl(node: &VarStruct) -> TokenStream {
    let marker = group_marker(node);
    let bindings: Vec<Ident> = (0..node.fields.len()).map(field_binding).collect();
    let idents = node.fields.iter().map(|f| &f.ident);

    let (parent_step, parent_init, fields_args, parent_bound) = match &node.parent {
        Some(parent) => (
            quote! {
                let (__parent, args) =
                    <#parent as ::varstruct::traits::Construct<__Args>>::construct(args);
            },
            quote!(__parent,),
            quote!(<#parent as ::varstruct::traits::Construct<__Args>>::Rest),
            Some(quote!(#parent: ::varstruct::traits::Construct<__Args>)),
        ),
        None => (quote!(), quote!(), quote!(__Args), None),
    };

    let fields_trait = quote!(::varstruct::traits::ConstructFields<#fields_args>);

    let q = quote! {
        type Rest = <#marker as #fields_trait>::Rest;

        fn construct(args: __Args) -> (Self, Self::Rest) {
            #parent_step
            let ((#(#bindings,)*), rest) = <#marker as #fields_trait>::construct_fields(args);

            (
                Self {
                    #parent_init
                    #(#idents: #bindings,)*
                },
                rest,
            )
        }
    };

    let mut imp = Implementor::new(&node.def, quote!(::varstruct::traits::Construct<__Args>))
        .add_impl_generic(quote!(__Args));
    if let Some(bound) = parent_bound {
        imp = imp.add_where(bound);
    }

    imp.add_where(quote!(#marker: #fields_trait))
        .set_tokens(q)
        .to_token_stream()
}

///
/// TESTS
///
