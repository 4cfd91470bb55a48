use crate::prelude::*;
use convert_case::{Case, Casing};
use derive_more::{Deref, IntoIterator};
use varstruct_core::hash::field_id;

///
/// FieldList
///

#[derive(Clone, Debug, Default, Deref, FromMeta, IntoIterator)]
pub struct FieldList {
    #[deref]
    #[into_iterator(ref)]
    #[darling(multiple, rename = "field")]
    pub fields: Vec<Field>,
}

impl FieldList {
    pub fn validate(&self) -> Result<(), DarlingError> {
        let mut errors = DarlingError::accumulator();

        for field in &self.fields {
            errors.handle(field.validate());
        }
        errors.handle(validate_unique(&self.fields));

        errors.finish()
    }
}

///
/// Field
///

#[derive(Clone, Debug, FromMeta)]
pub struct Field {
    pub ident: Ident,
    pub value: Type,

    #[darling(default)]
    pub descriptor: Option<Type>,
}

impl Field {
    pub fn validate(&self) -> Result<(), DarlingError> {
        validate_field_name(&self.ident)
    }

    pub fn name(&self) -> String {
        self.ident.to_string()
    }

    pub fn id(&self) -> u64 {
        field_id(&self.name())
    }

    pub fn id_lit(&self) -> TokenStream {
        let lit = u64_lit(self.id());

        quote!(#lit)
    }

    /// Inherent constant carrying this field's identity.
    pub fn const_ident(&self) -> Ident {
        let constant = self
            .name()
            .from_case(Case::Snake)
            .to_case(Case::Constant);

        format_ident!("{constant}")
    }

    /// Path to the name marker inside the struct's hidden module.
    pub fn marker(&self, def: &Def) -> TokenStream {
        let module = def.module_ident();
        let ident = &self.ident;

        quote!(#module::#ident)
    }

    pub fn descriptor_type(&self) -> TokenStream {
        self.descriptor.as_ref().map_or_else(
            || quote!(::varstruct::field::NullDescriptor),
            ToTokens::to_token_stream,
        )
    }

    /// `Field<Marker, Value, Descriptor>` storage type.
    pub fn storage_type(&self, def: &Def) -> TokenStream {
        let marker = self.marker(def);
        let value = &self.value;
        let descriptor = self.descriptor_type();

        quote!(::varstruct::field::Field<#marker, #value, #descriptor>)
    }

    /// Expression producing the default value: `default_initialized()` for
    /// struct-typed values, `Default::default()` otherwise.
    pub fn default_expr(&self) -> TokenStream {
        let value = &self.value;

        quote! {{
            #[allow(unused_imports)]
            use ::varstruct::__private::{ViaDefault as _, ViaVarStruct as _};

            (&::varstruct::__private::Probe::<#value>::new()).default_value()
        }}
    }
}
