//!
//! Reflection over declared fields.
//!
//! The `const fn` queries walk the parent chain through
//! `VarStruct::Inherits`, stopping at roots (`HAS_PARENT == false`), so
//! they can be evaluated inside `const` items and assertions. Type-level
//! queries return a `FieldSpec` whose `FieldTraits` carry the field's
//! name, identity, value type and descriptor.
//!

use crate::{
    error::ReflectError,
    field::FieldSpec,
    hash::field_id,
    traits::{FieldAccess, FieldAt, VarStruct},
};

///
/// FieldInfo
///
/// Static record for one declared field. `index` is the flattened position,
/// counting every ancestor's fields first. `value_tokens` is the value type
/// as written in the attribute (`"Vec < u8 >"`); `FieldSpec::value_type`
/// gives the resolved `type_name`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FieldInfo {
    pub name: &'static str,
    pub id: u64,
    pub value_tokens: &'static str,
    pub index: usize,
}

impl FieldInfo {
    #[must_use]
    pub const fn new(name: &'static str, value_tokens: &'static str, index: usize) -> Self {
        Self {
            name,
            id: field_id(name),
            value_tokens,
            index,
        }
    }
}

/// Number of fields of `S`, ancestors included.
#[must_use]
pub const fn size<S: VarStruct>() -> usize {
    S::SIZE
}

/// Number of fields the parent chain of `S` contributes.
#[must_use]
pub const fn inherited_size<S: VarStruct>() -> usize {
    if S::HAS_PARENT {
        <S::Inherits as VarStruct>::SIZE
    } else {
        0
    }
}

const fn own_position(fields: &[FieldInfo], id: u64) -> Option<usize> {
    let mut i = 0;
    while i < fields.len() {
        if fields[i].id == id {
            return Some(i);
        }
        i += 1;
    }

    None
}

/// Whether `S` or any ancestor declares a field called `name`.
#[must_use]
pub const fn has_field<S: VarStruct>(name: &str) -> bool {
    has_field_id::<S>(field_id(name))
}

/// Whether `S` or any ancestor declares a field with identity `id`.
/// Own fields are checked before the parent.
#[must_use]
pub const fn has_field_id<S: VarStruct>(id: u64) -> bool {
    if own_position(S::OWN_FIELDS, id).is_some() {
        return true;
    }

    S::HAS_PARENT && has_field_id::<S::Inherits>(id)
}

#[must_use]
pub const fn find_field_info<S: VarStruct>(name: &str) -> Option<FieldInfo> {
    find_field_info_by_id::<S>(field_id(name))
}

/// Field record for identity `id`. Ancestors are searched first.
#[must_use]
pub const fn find_field_info_by_id<S: VarStruct>(id: u64) -> Option<FieldInfo> {
    if S::HAS_PARENT {
        let inherited = find_field_info_by_id::<S::Inherits>(id);
        if inherited.is_some() {
            return inherited;
        }
    }

    match own_position(S::OWN_FIELDS, id) {
        Some(i) => Some(S::OWN_FIELDS[i]),
        None => None,
    }
}

/// Field record at flattened position `index`.
#[must_use]
pub const fn field_info_at<S: VarStruct>(index: usize) -> Option<FieldInfo> {
    let inherited = inherited_size::<S>();
    if index < inherited {
        return field_info_at::<S::Inherits>(index);
    }

    let local = index - inherited;
    if local < S::OWN_FIELDS.len() {
        Some(S::OWN_FIELDS[local])
    } else {
        None
    }
}

/// Every field record of `S` in flattened order.
#[must_use]
pub fn fields<S: VarStruct>() -> Vec<FieldInfo> {
    let mut out = Vec::with_capacity(S::SIZE);
    collect_fields::<S>(&mut out);

    out
}

fn collect_fields<S: VarStruct>(out: &mut Vec<FieldInfo>) {
    if S::HAS_PARENT {
        collect_fields::<S::Inherits>(out);
    }
    out.extend_from_slice(S::OWN_FIELDS);
}

/// Runtime lookup by name.
pub fn require_field<S: VarStruct>(name: &str) -> Result<FieldInfo, ReflectError> {
    find_field_info::<S>(name).ok_or_else(|| ReflectError::UnknownField {
        path: S::PATH,
        name: name.to_string(),
    })
}

/// Runtime lookup by position.
pub fn require_field_at<S: VarStruct>(index: usize) -> Result<FieldInfo, ReflectError> {
    field_info_at::<S>(index).ok_or(ReflectError::IndexOutOfRange {
        path: S::PATH,
        index,
        size: S::SIZE,
    })
}

//
// type level
//

/// Traits record of the field with identity `ID`.
#[must_use]
pub const fn find_field_spec<S, const ID: u64, R>() -> FieldSpec<
    <S as FieldAccess<ID, R>>::Name,
    <S as FieldAccess<ID, R>>::Value,
    <S as FieldAccess<ID, R>>::Descriptor,
>
where
    S: FieldAccess<ID, R>,
{
    FieldSpec::new()
}

/// Traits record of the field at flattened position `INDEX`.
#[must_use]
pub const fn field_spec_at<S, const INDEX: usize, R>() -> FieldSpec<
    <S as FieldAt<INDEX, R>>::Name,
    <S as FieldAt<INDEX, R>>::Value,
    <S as FieldAt<INDEX, R>>::Descriptor,
>
where
    S: FieldAt<INDEX, R>,
{
    FieldSpec::new()
}

/// `true` when the type is a `#[varstruct]` (or `EmptyStruct`).
/// Only meaningful for concrete types.
#[macro_export]
macro_rules! is_struct {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::__private::NotVarStruct as _;

        <$crate::__private::IsVarStruct<$ty>>::VALUE
    }};
}

///
/// TESTS
///
