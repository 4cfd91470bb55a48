// error: exceeds max length 50
use varstruct::prelude::*;

#[varstruct(fields(field(
    ident = "a_field_name_that_is_much_longer_than_fifty_characters_in_total",
    value = "u16"
)))]
pub struct Base {}

fn main() {}
