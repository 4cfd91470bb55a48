// error: unknown variadic struct field
use varstruct::prelude::*;

#[varstruct(fields(field(ident = "field0", value = "u16")))]
pub struct Base {}

fn main() {
    let base = Base::default();
    let _ = base.value::<{ id!("field9") }, _>();
}
