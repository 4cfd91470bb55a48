use crate::{
    assign::{Assign, SafeConversion},
    error::AssignError,
    field::{Field, FieldName},
    list::{Exhausted, HNil, IntoHList, IntoTuple},
    reflect::FieldInfo,
};
use std::marker::PhantomData;

///
/// Here
/// Route marker: the field is declared by this struct.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Here;

///
/// There
/// Route marker: the field is reached through the parent along `R`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct There<R>(PhantomData<R>);

///
/// VarStruct
///
/// Implemented by every `#[varstruct]` type. Field lookups are keyed on a
/// const identity (`id!("name")`) or a const position plus an inferred
/// route, so call sites read `s.value::<{ id!("name") }, _>()` and
/// `s.get::<0, _>()`.
///

pub trait VarStruct: Default + Sized {
    /// Declared parent, or `EmptyStruct` for roots.
    type Inherits: VarStruct;

    /// All field values, parent first, as an `HCons` list.
    type Values;
    type Refs<'a>
    where
        Self: 'a;
    type Muts<'a>
    where
        Self: 'a;

    const HAS_PARENT: bool;

    /// Total number of fields including every ancestor's.
    const SIZE: usize;

    /// Fields declared by this struct, in declaration order.
    const OWN_FIELDS: &'static [FieldInfo];

    const PATH: &'static str;

    /// Every field set to its default; struct-typed fields recursively.
    fn default_initialized() -> Self;

    fn into_values(self) -> Self::Values;
    fn values(&self) -> Self::Refs<'_>;
    fn values_mut(&mut self) -> Self::Muts<'_>;

    //
    // decomposition
    //

    fn into_tuple(self) -> <Self::Values as IntoTuple>::Tuple
    where
        Self::Values: IntoTuple,
    {
        self.into_values().into_tuple()
    }

    fn as_tuple<'a>(&'a self) -> <Self::Refs<'a> as IntoTuple>::Tuple
    where
        Self::Refs<'a>: IntoTuple,
    {
        self.values().into_tuple()
    }

    fn as_tuple_mut<'a>(&'a mut self) -> <Self::Muts<'a> as IntoTuple>::Tuple
    where
        Self::Muts<'a>: IntoTuple,
    {
        self.values_mut().into_tuple()
    }

    //
    // access by identity
    //

    fn field<const ID: u64, R>(&self) -> &FieldOf<Self, ID, R>
    where
        Self: FieldAccess<ID, R>,
    {
        <Self as FieldAccess<ID, R>>::field_ref(self)
    }

    fn field_mut<const ID: u64, R>(&mut self) -> &mut FieldOf<Self, ID, R>
    where
        Self: FieldAccess<ID, R>,
    {
        <Self as FieldAccess<ID, R>>::field_mut(self)
    }

    fn into_field<const ID: u64, R>(self) -> FieldOf<Self, ID, R>
    where
        Self: FieldAccess<ID, R>,
    {
        <Self as FieldAccess<ID, R>>::into_field(self)
    }

    /// Current value; never changes presence.
    fn value<const ID: u64, R>(&self) -> &<Self as FieldAccess<ID, R>>::Value
    where
        Self: FieldAccess<ID, R>,
    {
        self.field::<ID, R>().value()
    }

    fn value_mut<const ID: u64, R>(&mut self) -> &mut <Self as FieldAccess<ID, R>>::Value
    where
        Self: FieldAccess<ID, R>,
    {
        self.field_mut::<ID, R>().value_mut()
    }

    fn into_value<const ID: u64, R>(self) -> <Self as FieldAccess<ID, R>>::Value
    where
        Self: FieldAccess<ID, R>,
    {
        self.into_field::<ID, R>().into_value()
    }

    fn is_set<const ID: u64, R>(&self) -> bool
    where
        Self: FieldAccess<ID, R>,
    {
        self.field::<ID, R>().is_set()
    }

    fn is_set_mut<const ID: u64, R>(&mut self) -> &mut bool
    where
        Self: FieldAccess<ID, R>,
    {
        self.field_mut::<ID, R>().is_set_mut()
    }

    /// Checked assignment; see `Field::set`.
    fn set<const ID: u64, R>(
        &mut self,
        candidate: impl Assign<<Self as FieldAccess<ID, R>>::Value, Safety: SafeConversion>,
    ) -> bool
    where
        Self: FieldAccess<ID, R, Value: Default>,
    {
        self.field_mut::<ID, R>().set(candidate)
    }

    fn try_set<const ID: u64, R>(
        &mut self,
        candidate: impl Assign<<Self as FieldAccess<ID, R>>::Value, Safety: SafeConversion>,
    ) -> Result<(), AssignError>
    where
        Self: FieldAccess<ID, R, Value: Default>,
    {
        self.field_mut::<ID, R>().try_set(candidate)
    }

    fn clear<const ID: u64, R>(&mut self)
    where
        Self: FieldAccess<ID, R, Value: Default>,
    {
        self.field_mut::<ID, R>().clear();
    }

    //
    // access by position
    //

    fn field_at<const INDEX: usize, R>(&self) -> &FieldAtOf<Self, INDEX, R>
    where
        Self: FieldAt<INDEX, R>,
    {
        <Self as FieldAt<INDEX, R>>::field_ref(self)
    }

    fn field_at_mut<const INDEX: usize, R>(&mut self) -> &mut FieldAtOf<Self, INDEX, R>
    where
        Self: FieldAt<INDEX, R>,
    {
        <Self as FieldAt<INDEX, R>>::field_mut(self)
    }

    fn get<const INDEX: usize, R>(&self) -> &<Self as FieldAt<INDEX, R>>::Value
    where
        Self: FieldAt<INDEX, R>,
    {
        self.field_at::<INDEX, R>().value()
    }

    fn get_mut<const INDEX: usize, R>(&mut self) -> &mut <Self as FieldAt<INDEX, R>>::Value
    where
        Self: FieldAt<INDEX, R>,
    {
        self.field_at_mut::<INDEX, R>().value_mut()
    }

    fn into_value_at<const INDEX: usize, R>(self) -> <Self as FieldAt<INDEX, R>>::Value
    where
        Self: FieldAt<INDEX, R>,
    {
        <Self as FieldAt<INDEX, R>>::into_field(self).into_value()
    }

    fn is_set_at<const INDEX: usize, R>(&self) -> bool
    where
        Self: FieldAt<INDEX, R>,
    {
        self.field_at::<INDEX, R>().is_set()
    }
}

///
/// FieldAccess
///
/// Field lookup by identity. `#[varstruct]` implements it with route
/// `Here` for every declared field and forwards every other identity to
/// the parent with route `There<R>`.
///

#[diagnostic::on_unimplemented(
    message = "unknown variadic struct field on `{Self}`",
    label = "no field with this identity is declared by `{Self}` or its parents",
    note = "field identities are written `id!(\"name\")`"
)]
pub trait FieldAccess<const ID: u64, R>: Sized {
    type Name: FieldName;
    type Value: 'static;
    type Descriptor: 'static;

    fn field_ref(this: &Self) -> &Field<Self::Name, Self::Value, Self::Descriptor>;
    fn field_mut(this: &mut Self) -> &mut Field<Self::Name, Self::Value, Self::Descriptor>;
    fn into_field(this: Self) -> Field<Self::Name, Self::Value, Self::Descriptor>;
}

///
/// FieldAt
///
/// Field lookup by flattened position, parent fields first.
///

#[diagnostic::on_unimplemented(
    message = "variadic struct field index is out of range for `{Self}`",
    label = "`{Self}` has no field at this position",
    note = "positions count every ancestor's fields first, starting at 0"
)]
pub trait FieldAt<const INDEX: usize, R>: Sized {
    type Name: FieldName;
    type Value: 'static;
    type Descriptor: 'static;

    fn field_ref(this: &Self) -> &Field<Self::Name, Self::Value, Self::Descriptor>;
    fn field_mut(this: &mut Self) -> &mut Field<Self::Name, Self::Value, Self::Descriptor>;
    fn into_field(this: Self) -> Field<Self::Name, Self::Value, Self::Descriptor>;
}

/// The `Field` reached through `FieldAccess<ID, R>`.
pub type FieldOf<S, const ID: u64, R> = Field<
    <S as FieldAccess<ID, R>>::Name,
    <S as FieldAccess<ID, R>>::Value,
    <S as FieldAccess<ID, R>>::Descriptor,
>;

/// The `Field` reached through `FieldAt<INDEX, R>`.
pub type FieldAtOf<S, const INDEX: usize, R> = Field<
    <S as FieldAt<INDEX, R>>::Name,
    <S as FieldAt<INDEX, R>>::Value,
    <S as FieldAt<INDEX, R>>::Descriptor,
>;

///
/// HasParent
///

#[diagnostic::on_unimplemented(
    message = "variadic struct has no parent",
    label = "`{Self}` is declared without `parent = ..`"
)]
pub trait HasParent: VarStruct {
    type Parent: VarStruct;
}

/// Declared parent of `S`.
pub type ParentOf<S> = <S as HasParent>::Parent;

///
/// Construct
///
/// Positional construction: consume a prefix of `Args` and hand back the
/// rest. Parents consume first.
///

pub trait Construct<Args>: Sized {
    type Rest;

    fn construct(args: Args) -> (Self, Self::Rest);
}

///
/// FieldGroup
///
/// Implemented by the hidden per-struct marker for the fields one
/// declaration adds. `Fields` is a tuple of those `Field`s.
///

pub trait FieldGroup {
    type Fields;
}

///
/// ConstructFields
/// Consume a prefix of `Args` into this group's fields.
///

#[diagnostic::on_unimplemented(
    message = "argument can't be converted to variadic struct field value",
    label = "`{Args}` does not start with arguments these fields accept",
    note = "each argument must have the field type (text fields also take `&str` and `char`) or be an `Init` marker"
)]
pub trait ConstructFields<Args>: FieldGroup {
    type Rest;

    fn construct_fields(args: Args) -> (Self::Fields, Self::Rest);
}

/// Build `S` from a tuple or `hlist![..]` of positional arguments.
pub fn construct<S, T>(args: T) -> S
where
    T: IntoHList,
    S: Construct<T::List, Rest: Exhausted>,
{
    S::construct(args.into_hlist()).0
}

///
/// EmptyStruct
///
/// The struct with no fields. Roots report it as their `Inherits`, which
/// keeps parent recursion total.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct EmptyStruct;

impl VarStruct for EmptyStruct {
    type Inherits = Self;
    type Values = HNil;
    type Refs<'a> = HNil;
    type Muts<'a> = HNil;

    const HAS_PARENT: bool = false;
    const SIZE: usize = 0;
    const OWN_FIELDS: &'static [FieldInfo] = &[];
    const PATH: &'static str = "varstruct::traits::EmptyStruct";

    fn default_initialized() -> Self {
        Self
    }

    fn into_values(self) -> HNil {
        HNil
    }

    fn values(&self) -> HNil {
        HNil
    }

    fn values_mut(&mut self) -> HNil {
        HNil
    }
}

impl<Args> Construct<Args> for EmptyStruct {
    type Rest = Args;

    fn construct(args: Args) -> (Self, Args) {
        (Self, args)
    }
}
