use varstruct::{prelude::*, reflect};

#[varstruct(fields(field(ident = "x", value = "i32"), field(ident = "y", value = "i32")))]
pub struct Point {}

#[varstruct(parent = "Point", fields(field(ident = "z", value = "i32")))]
pub struct Point3 {}

const SIZE: usize = Point3::SIZE;
const HAS_Z: bool = reflect::has_field::<Point3>("z");
const IS_STRUCT: bool = is_struct!(Point3);
const IS_NOT_STRUCT: bool = is_struct!(i32);

const _: () = assert!(SIZE == 3);
const _: () = assert!(HAS_Z && IS_STRUCT && !IS_NOT_STRUCT);

fn main() {
    let (x, y, z) = Point3::new((1, 2, 3)).into_tuple();
    assert_eq!(x + y + z, 6);
}
