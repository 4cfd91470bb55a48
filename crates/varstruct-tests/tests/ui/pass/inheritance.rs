use varstruct::prelude::*;

#[varstruct(fields(field(ident = "id", value = "u32")))]
pub struct Record {}

#[varstruct(parent = "Record", fields(field(ident = "name", value = "String")))]
pub struct Named {}

#[varstruct(parent = "Named", fields(field(ident = "level", value = "u8")))]
pub struct Ranked {}

fn main() {
    let mut ranked = Ranked::new((1u32, "a".to_string(), Init::Default));

    assert!(ranked.set::<{ id!("id") }, _>(7u8));
    assert!(!ranked.set::<{ id!("level") }, _>(-1i32));
    assert_eq!(ranked.value::<{ id!("name") }, _>(), "a");
    assert_eq!(*ranked.get::<0, _>(), 7);
}
