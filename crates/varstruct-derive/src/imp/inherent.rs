use crate::prelude::*;

///
/// InherentTrait
///
/// Identity constants for own fields, plus `new` and `default_initialized`
/// so callers don't need the traits in scope to build a value.
///

pub struct InherentTrait {}

impl Imp<VarStruct> for InherentTrait {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let ident = &node.def.ident;

        let consts = node.fields.iter().map(|f| {
            let const_ident = f.const_ident();
            let id = f.id_lit();
            let doc = format!("Identity of field `{}`.", f.name());

            quote! {
                #[doc = #doc]
                pub const #const_ident: u64 = #id;
            }
        });

        let tokens = quote! {
            impl #ident {
                #(#consts)*

                /// Build from positional arguments, parent fields first.
                #[must_use]
                pub fn new<__T>(args: __T) -> Self
                where
                    __T: ::varstruct::list::IntoHList,
                    Self: ::varstruct::traits::Construct<
                        <__T as ::varstruct::list::IntoHList>::List,
                        Rest: ::varstruct::list::Exhausted,
                    >,
                {
                    ::varstruct::traits::construct(args)
                }

                #[must_use]
                pub fn default_initialized() -> Self {
                    <Self as ::varstruct::traits::VarStruct>::default_initialized()
                }
            }
        };

        Some(TraitStrategy::from_impl(tokens))
    }
}

///
/// UniqueFieldsCheck
///
/// Build-time assertion that no own field repeats a name declared by any
/// ancestor. Roots are covered by attribute validation.
///

pub struct UniqueFieldsCheck {}

impl Imp<VarStruct> for UniqueFieldsCheck {
    fn strategy(node: &VarStruct) -> Option<TraitStrategy> {
        let parent = node.parent.as_ref()?;

        let checks = node.fields.iter().map(|f| {
            let id = f.id_lit();
            let msg = format!(
                "duplicate variadic struct field `{}`: already declared by a parent struct",
                f.name()
            );

            quote! {
                const _: () = ::core::assert!(
                    !::varstruct::reflect::has_field_id::<#parent>(#id),
                    #msg
                );
            }
        });

        Some(TraitStrategy::from_impl(quote!(#(#checks)*)))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_constants_are_upper_case() {
        let node = VarStruct::parse(
            quote!(fields(field(ident = "hit_points", value = "u32"))),
            quote!(pub struct Unit {}),
        )
        .unwrap();
        let out = InherentTrait::strategy(&node).unwrap().imp.to_string();

        assert!(out.contains("pub const HIT_POINTS : u64"));
        assert!(out.contains("pub fn new < __T >"));
    }

    #[test]
    fn roots_skip_the_parent_check() {
        let node = VarStruct::parse(
            quote!(fields(field(ident = "a", value = "u8"))),
            quote!(pub struct Root {}),
        )
        .unwrap();

        assert!(UniqueFieldsCheck::strategy(&node).is_none());
    }

    #[test]
    fn children_assert_against_the_parent() {
        let node = VarStruct::parse(
            quote!(parent = "Root", fields(field(ident = "a", value = "u8"))),
            quote!(pub struct Leaf {}),
        )
        .unwrap();
        let out = UniqueFieldsCheck::strategy(&node).unwrap().imp.to_string();

        assert!(out.contains("has_field_id :: < Root >"));
        assert!(out.contains("duplicate variadic struct field `a`"));
    }
}
