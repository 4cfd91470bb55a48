// error: invalid arguments count in variadic struct constructor
use varstruct::prelude::*;

#[varstruct(fields(field(ident = "field0", value = "u16")))]
pub struct Base {}

fn main() {
    let _ = Base::new((1u16, 2u16));
}
