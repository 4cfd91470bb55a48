// error: variadic struct field index is out of range
use varstruct::prelude::*;

#[varstruct(fields(field(ident = "field0", value = "u16")))]
pub struct Base {}

fn main() {
    let base = Base::default();
    let _ = base.get::<1, _>();
}
