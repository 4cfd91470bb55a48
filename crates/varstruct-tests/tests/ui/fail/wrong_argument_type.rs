// error: argument can't be converted to variadic struct field value
use varstruct::prelude::*;

#[varstruct(fields(field(ident = "field0", value = "u16")))]
pub struct Base {}

fn main() {
    let _ = Base::new((1u8,));
}
