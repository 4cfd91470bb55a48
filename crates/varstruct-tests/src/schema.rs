use crate::prelude::*;

///
/// ValueWithDefault
/// Plain value type whose default is not all-zero.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueWithDefault {
    pub value: i32,
}

impl Default for ValueWithDefault {
    fn default() -> Self {
        Self { value: 42 }
    }
}

///
/// SimpleDescriptor
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SimpleDescriptor;

///
/// Base
///

#[varstruct(fields(
    field(ident = "field0", value = "ValueWithDefault"),
    field(ident = "field1", value = "u16"),
))]
#[derive(Clone, Debug, PartialEq)]
pub struct Base {}

///
/// Child
///

#[varstruct(parent = "Base", fields(field(ident = "field2", value = "String")))]
#[derive(Clone, Debug, PartialEq)]
pub struct Child {}

///
/// GrandChild
///

#[varstruct(
    parent = "Child",
    fields(
        field(ident = "field3", value = "i64", descriptor = "SimpleDescriptor"),
        field(ident = "field4", value = "f64"),
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GrandChild {}

///
/// Hollow
/// Inherits every field and adds none.
///

#[varstruct(parent = "Base")]
#[derive(Clone, Debug, PartialEq)]
pub struct Hollow {}

///
/// Empty
///

#[varstruct]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Empty {}

///
/// Holder
/// Struct-typed field values.
///

#[varstruct(fields(
    field(ident = "position", value = "Base"),
    field(ident = "label", value = "String"),
))]
#[derive(Debug)]
pub struct Holder {}

///
/// Counter
///

#[varstruct(fields(
    field(ident = "hits", value = "u8"),
    field(ident = "misses", value = "i8"),
    field(ident = "ratio", value = "f32"),
))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {}

///
/// Narrow
/// Declares `field1` independently of `Base`, with a narrower type.
///

#[varstruct(fields(field(ident = "field1", value = "u8")))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Narrow {}
