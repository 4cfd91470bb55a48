use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};

// Quoting helpers

/// Quote a slice by transforming each element and returning a token array.
pub fn quote_slice<T, F>(vec: &[T], transform: F) -> TokenStream
where
    F: Fn(&T) -> TokenStream,
{
    let items: Vec<TokenStream> = vec
        .iter()
        .map(transform)
        .filter(|ts| !ts.is_empty())
        .collect();

    quote! {
        &[#(#items),*]
    }
}

/// Nest types into an `HCons` list type ending in `tail`.
pub fn quote_hlist_type(items: &[TokenStream], tail: TokenStream) -> TokenStream {
    items.iter().rev().fold(tail, |acc, item| {
        quote!(::varstruct::list::HCons<#item, #acc>)
    })
}

/// Nest expressions (or patterns) into an `HCons` list value ending in `tail`.
pub fn quote_hlist_value(items: &[TokenStream], tail: TokenStream) -> TokenStream {
    items.iter().rev().fold(tail, |acc, item| {
        quote!(::varstruct::list::HCons { head: #item, tail: #acc })
    })
}

// Transform helpers

/// Convert a tokenizable value into a string literal token.
pub fn to_str_lit<T: ToTokens>(t: &T) -> TokenStream {
    let s = quote!(#t).to_string();

    quote!(#s)
}

pub fn usize_lit(n: usize) -> Literal {
    Literal::usize_suffixed(n)
}

pub fn u64_lit(n: u64) -> Literal {
    Literal::u64_suffixed(n)
}

///
/// TESTS
///
