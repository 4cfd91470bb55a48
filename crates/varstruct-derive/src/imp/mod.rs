mod access;
mod construct;
mod default;
mod inherent;
mod var_struct;

pub use access::*;
pub use construct::*;
pub use default::*;
pub use inherent::*;
pub use var_struct::*;

use proc_macro2::TokenStream;

///
/// Imp
/// One generated concern for a node.
///

pub trait Imp<N> {
    fn strategy(node: &N) -> Option<TraitStrategy>;
}

///
/// TraitStrategy
///

pub struct TraitStrategy {
    pub imp: TokenStream,
}

impl TraitStrategy {
    pub const fn from_impl(imp: TokenStream) -> Self {
        Self { imp }
    }
}
