// error: duplicate variadic struct field `field0`
use varstruct::prelude::*;

#[varstruct(fields(field(ident = "field0", value = "u16")))]
pub struct Base {}

#[varstruct(parent = "Base", fields(field(ident = "field0", value = "u32")))]
pub struct Child {}

fn main() {}
