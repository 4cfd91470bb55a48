// error: variadic struct has no parent
use varstruct::{prelude::*, traits::ParentOf};

#[varstruct(fields(field(ident = "field0", value = "u16")))]
pub struct Base {}

fn main() {
    let _ = std::mem::size_of::<ParentOf<Base>>();
}
