use crate::{prelude::*, schema::*};
use std::any::TypeId;
use varstruct::{
    error::ReflectError,
    field::FieldTraits,
    reflect,
    traits::{FieldAccess, Here, ParentOf},
};

const GRAND_SIZE: usize = GrandChild::SIZE;
const HOLDER_IS_STRUCT: bool = is_struct!(Holder);

#[test]
fn struct_detection() {
    assert!(HOLDER_IS_STRUCT);
    assert!(is_struct!(Empty));
    assert!(is_struct!(Child));
    assert!(!is_struct!(ValueWithDefault));
    assert!(!is_struct!(u16));
}

#[test]
fn sizes() {
    assert_eq!(GRAND_SIZE, 5);
    assert_eq!(reflect::size::<Base>(), 2);
    assert_eq!(reflect::size::<Child>(), 3);
    assert_eq!(reflect::size::<Hollow>(), 2);
    assert_eq!(reflect::size::<Empty>(), 0);
    assert_eq!(reflect::inherited_size::<GrandChild>(), 3);
}

#[test]
fn parents() {
    assert_eq!(TypeId::of::<ParentOf<Child>>(), TypeId::of::<Base>());
    assert_eq!(TypeId::of::<ParentOf<GrandChild>>(), TypeId::of::<Child>());
    assert!(Hollow::HAS_PARENT);
    assert!(!Base::HAS_PARENT);
}

#[test]
fn written_and_resolved_value_types() {
    let info = reflect::find_field_info::<GrandChild>("field0").unwrap();
    let spec = reflect::field_spec_at::<GrandChild, 0, _>();

    assert_eq!(info.value_tokens, "ValueWithDefault");
    assert_eq!(spec.value_type(), std::any::type_name::<ValueWithDefault>());
    assert_eq!(spec.name(), info.name);
    assert_eq!(spec.id(), info.id);
}

#[test]
fn field_lookup() {
    const HAS_FIELD3: bool = reflect::has_field::<GrandChild>("field3");

    assert!(HAS_FIELD3);
    assert!(reflect::has_field::<GrandChild>("field0"));
    assert!(!reflect::has_field::<Child>("field3"));
    assert!(!reflect::has_field::<Empty>("field0"));

    let info = reflect::find_field_info::<GrandChild>("field2").unwrap();
    assert_eq!((info.name, info.index, info.value_tokens), ("field2", 2, "String"));
    assert_eq!(
        reflect::find_field_info_by_id::<GrandChild>(id!("field4")).map(|f| f.index),
        Some(4)
    );
}

#[test]
fn flattened_field_list() {
    let names: Vec<_> = reflect::fields::<GrandChild>()
        .into_iter()
        .map(|f| f.name)
        .collect();

    assert_eq!(names, ["field0", "field1", "field2", "field3", "field4"]);
    assert_eq!(
        reflect::field_info_at::<Child>(1).map(|f| f.name),
        Some("field1")
    );
}

#[test]
fn runtime_lookup_errors() {
    let err = reflect::require_field::<Child>("field9").unwrap_err();
    assert!(matches!(err, ReflectError::UnknownField { ref name, .. } if name == "field9"));

    let err = reflect::require_field_at::<Child>(3).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn paths_name_the_declaring_module() {
    assert!(Child::PATH.ends_with("schema::Child"));
}

#[test]
fn type_level_queries() {
    fn value_type_of<T: FieldTraits>(_: T) -> TypeId
    where
        T::Value: 'static,
    {
        TypeId::of::<T::Value>()
    }

    assert_eq!(
        value_type_of(reflect::field_spec_at::<GrandChild, 3, _>()),
        TypeId::of::<i64>()
    );
    assert_eq!(
        value_type_of(reflect::find_field_spec::<GrandChild, { id!("field0") }, _>()),
        TypeId::of::<ValueWithDefault>()
    );

    type Field3Descriptor =
        <GrandChild as FieldAccess<{ id!("field3") }, Here>>::Descriptor;
    assert_eq!(
        TypeId::of::<Field3Descriptor>(),
        TypeId::of::<SimpleDescriptor>()
    );
}
