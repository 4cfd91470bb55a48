// error: argument can't be converted to variadic struct field value
use varstruct::prelude::*;

#[varstruct(fields(field(ident = "count", value = "u32")))]
pub struct Base {}

fn main() {
    let mut base = Base::default();
    base.set::<{ id!("count") }, _>("seven");
}
