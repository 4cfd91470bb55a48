// error: dangerous argument conversion to variadic struct field value
use varstruct::prelude::*;

#[varstruct(fields(field(ident = "ratio", value = "f32")))]
pub struct Base {}

fn main() {
    let mut base = Base::default();
    base.set::<{ id!("ratio") }, _>(1.0f64);
}
