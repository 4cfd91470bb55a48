use crate::{imp::*, prelude::*};
use syn::{Fields, ItemStruct};

///
/// VarStructArgs
/// Attribute arguments of `#[varstruct(...)]`.
///

#[derive(Debug, FromMeta)]
pub struct VarStructArgs {
    #[darling(default)]
    pub parent: Option<Path>,

    #[darling(default)]
    pub fields: FieldList,
}

///
/// VarStruct
///

#[derive(Debug)]
pub struct VarStruct {
    pub def: Def,
    pub parent: Option<Path>,
    pub fields: FieldList,
}

impl VarStruct {
    pub fn expand(args: TokenStream, input: TokenStream) -> Result<TokenStream, DarlingError> {
        let node = Self::parse(args, input)?;
        node.validate()?;

        Ok(node.to_token_stream())
    }

    pub fn parse(args: TokenStream, input: TokenStream) -> Result<Self, DarlingError> {
        let list = NestedMeta::parse_meta_list(args)?;
        let args = VarStructArgs::from_list(&list)?;
        let item: ItemStruct = syn::parse2(input)?;

        if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
            return Err(
                DarlingError::custom("variadic structs cannot be generic")
                    .with_span(&item.generics),
            );
        }

        let has_body_fields = match &item.fields {
            Fields::Named(fields) => !fields.named.is_empty(),
            Fields::Unnamed(fields) => !fields.unnamed.is_empty(),
            Fields::Unit => false,
        };
        if has_body_fields {
            return Err(DarlingError::custom(
                "variadic struct fields are declared in the attribute: \
                 fields(field(ident = \"..\", value = \"..\"))",
            )
            .with_span(&item.fields));
        }

        Ok(Self {
            def: Def {
                ident: item.ident,
                vis: item.vis,
                attrs: item.attrs,
            },
            parent: args.parent,
            fields: args.fields,
        })
    }

    pub fn validate(&self) -> Result<(), DarlingError> {
        self.fields.validate()
    }

    /// Declared parent, or `EmptyStruct` for roots.
    pub fn inherits(&self) -> TokenStream {
        self.parent.as_ref().map_or_else(
            || quote!(::varstruct::traits::EmptyStruct),
            ToTokens::to_token_stream,
        )
    }

    /// Number of fields contributed by ancestors, as a const expression.
    pub fn inherited_size(&self) -> TokenStream {
        match &self.parent {
            Some(parent) => quote!(<#parent as ::varstruct::traits::VarStruct>::SIZE),
            None => quote!(0usize),
        }
    }

    /// Flattened position of the own field at `local`.
    pub fn position(&self, local: usize) -> TokenStream {
        let local = usize_lit(local);

        match &self.parent {
            Some(_) => {
                let inherited = self.inherited_size();
                quote!(#inherited + #local)
            }
            None => quote!(#local),
        }
    }

    /// Hidden module with one name marker per field and the field group
    /// marker used by positional construction. The `FieldName` impls sit
    /// beside the struct so `module_path!` names the declaring module.
    fn marker_part(&self) -> TokenStream {
        let vis = &self.def.vis;
        let module = self.def.module_ident();
        let owner = self.def.path_lit();

        let markers = self.fields.iter().map(|f| {
            let ident = &f.ident;

            quote!(pub struct #ident;)
        });

        let names = self.fields.iter().map(|f| {
            let ident = &f.ident;
            let name = f.name();

            quote! {
                impl ::varstruct::field::FieldName for #module::#ident {
                    const NAME: &'static str = #name;
                    const OWNER: &'static str = #owner;
                }
            }
        });

        quote! {
            #[doc(hidden)]
            #[allow(non_camel_case_types, non_snake_case)]
            #vis mod #module {
                #(#markers)*

                pub struct __Fields;
            }

            #(#names)*
        }
    }

    /// The struct itself: parent storage first, then one `Field` per own field.
    fn type_part(&self) -> TokenStream {
        let Def { ident, vis, attrs } = &self.def;

        let parent = self.parent.as_ref().map(|p| quote!(__parent: #p,));
        let fields = self.fields.iter().map(|f| {
            let ident = &f.ident;
            let ty = f.storage_type(&self.def);

            quote!(#ident: #ty)
        });

        quote! {
            #(#attrs)*
            #vis struct #ident {
                #parent
                #(#fields,)*
            }
        }
    }

    fn impl_part(&self) -> TokenStream {
        let strategies = [
            DefaultTrait::strategy(self),
            VarStructTrait::strategy(self),
            FieldAccessTrait::strategy(self),
            FieldAtTrait::strategy(self),
            HasParentTrait::strategy(self),
            ConstructTrait::strategy(self),
            FromTrait::strategy(self),
            InherentTrait::strategy(self),
            UniqueFieldsCheck::strategy(self),
        ];

        strategies
            .into_iter()
            .flatten()
            .map(|strategy| strategy.imp)
            .collect()
    }
}

impl ToTokens for VarStruct {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.marker_part());
        tokens.extend(self.type_part());
        tokens.extend(self.impl_part());
    }
}

///
/// TESTS
///
