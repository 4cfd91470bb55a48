use crate::prelude::*;

///
/// FieldAccessTrait
///
/// One `FieldAccess<ID, Here>` impl per own field, plus a blanket
/// `FieldAccess<ID, There<R>>` that forwards to the parent.
///

pub struct FieldAccessTrait {}

impl Imp<VarStruct> for FieldAccessTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let mut tokens = TokenStream::new();

        for f in node.fields.iter() {
            let id = f.id_lit();
            let trait_path = quote!(::varstruct::traits::FieldAccess<#id, ::varstruct::traits::Here>);

            Implementor::new(&node.def, trait_path)
                .set_tokens(own_field_body(node, f))
                .to_tokens(&mut tokens);
        }

        if let Some(parent) = &node.parent {
            let trait_path = quote!(::varstruct::traits::FieldAccess<__ID, ::varstruct::traits::There<__R>>);
            let parent_trait = quote!(::varstruct::traits::FieldAccess<__ID, __R>);
            let field_ty = quote!(::varstruct::traits::FieldOf<#parent, __ID, __R>);

            Implementor::new(&node.def, trait_path)
                .add_impl_generic(quote!(const __ID: u64))
                .add_impl_generic(quote!(__R))
                .add_where(quote!(#parent: #parent_trait))
                .set_tokens(forward_body(parent, &parent_trait, &field_ty))
                .to_tokens(&mut tokens);
        }

        Some(TraitStrategy::from_impl(tokens))
    }
}

///
/// FieldAtTrait
///
/// Positional access. Own fields sit after every inherited field.
///

pub struct FieldAtTrait {}

impl Imp<VarStruct> for FieldAtTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let mut tokens = TokenStream::new();

        for (i, f) in node.fields.iter().enumerate() {
            let position = node.position(i);
            let trait_path =
                quote!(::varstruct::traits::FieldAt<{ #position }, ::varstruct::traits::Here>);

            Implementor::new(&node.def, trait_path)
                .set_tokens(own_field_body(node, f))
                .to_tokens(&mut tokens);
        }

        if let Some(parent) = &node.parent {
            let trait_path = quote!(::varstruct::traits::FieldAt<__I, ::varstruct::traits::There<__R>>);
            let parent_trait = quote!(::varstruct::traits::FieldAt<__I, __R>);
            let field_ty = quote!(::varstruct::traits::FieldAtOf<#parent, __I, __R>);

            Implementor::new(&node.def, trait_path)
                .add_impl_generic(quote!(const __I: usize))
                .add_impl_generic(quote!(__R))
                .add_where(quote!(#parent: #parent_trait))
                .set_tokens(forward_body(parent, &parent_trait, &field_ty))
                .to_tokens(&mut tokens);
        }

        Some(TraitStrategy::from_impl(tokens))
    }
}

///
/// HasParentTrait
///

pub struct HasParentTrait {}

impl Imp<VarStruct> for HasParentTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let parent = node.parent.as_ref()?;

        let tokens = Implementor::new(&node.def, quote!(::varstruct::traits::HasParent))
            .set_tokens(quote!(type Parent = #parent;))
            .to_token_stream();

        Some(TraitStrategy::from_impl(tokens))
    }
}

// shared body of FieldAccess / FieldAt for a field this struct declares
fn own_field_body(node: &VarStruct, f: &Field) -> TokenStream {
    let ident = &f.ident;
    let marker = f.marker(&node.def);
    let value = &f.value;
    let descriptor = f.descriptor_type();
    let storage = f.storage_type(&node.def);

    quote! {
        type Name = #marker;
        type Value = #value;
        type Descriptor = #descriptor;

        #[inline]
        fn field_ref(this: &Self) -> &#storage {
            &this.#ident
        }

        #[inline]
        fn field_mut(this: &mut Self) -> &mut #storage {
            &mut this.#ident
        }

        #[inline]
        fn into_field(this: Self) -> #storage {
            this.#ident
        }
    }
}

// shared body of the parent-forwarding impls
fn forward_body(parent: &Path, parent_trait: &TokenStream, field_ty: &TokenStream) -> TokenStream {
    quote! {
        type Name = <#parent as #parent_trait>::Name;
        type Value = <#parent as #parent_trait>::Value;
        type Descriptor = <#parent as #parent_trait>::Descriptor;

        #[inline]
        fn field_ref(this: &Self) -> &#field_ty {
            <#parent as #parent_trait>::field_ref(&this.__parent)
        }

        #[inline]
        fn field_mut(this: &mut Self) -> &mut #field_ty {
            <#parent as #parent_trait>::field_mut(&mut this.__parent)
        }

        #[inline]
        fn into_field(this: Self) -> #field_ty {
            <#parent as #parent_trait>::into_field(this.__parent)
        }
    }
}
