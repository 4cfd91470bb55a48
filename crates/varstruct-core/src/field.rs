use crate::{
    assign::{Assign, SafeConversion},
    error::AssignError,
    init::Init,
    hash::field_id,
    literal::{MAX_NAME_LEN, NameLiteral},
    obs::sink::{self, AssignEvent},
};
use std::{
    any::type_name,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// FieldName
///
/// Compile-time name of a field. `#[varstruct]` emits one zero-sized marker
/// type per declared field that implements this trait, with `OWNER` set
/// to the declaring struct's path.
///
/// `ID` hashes the whole of `NAME` and fails to evaluate when `NAME` is
/// longer than [`MAX_NAME_LEN`] bytes, so it always agrees with `id!`.
///

pub trait FieldName: 'static {
    const NAME: &'static str;
    const OWNER: &'static str;
    const LITERAL: NameLiteral = NameLiteral::new(Self::NAME);
    const ID: u64 = {
        assert!(
            Self::NAME.len() <= MAX_NAME_LEN,
            "variadic struct field name exceeds MAX_NAME_LEN"
        );
        field_id(Self::NAME)
    };
}

///
/// NullDescriptor
/// Descriptor used when a field declares none.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NullDescriptor;

///
/// FieldTraits
///
/// Static description of a field: its name, identity, value type and
/// user-supplied descriptor type.
///

pub trait FieldTraits {
    type Name: FieldName;
    type Value;
    type Descriptor;

    const NAME: &'static str = <Self::Name as FieldName>::NAME;
    const ID: u64 = <Self::Name as FieldName>::ID;
}

///
/// FieldSpec
/// Zero-sized carrier of a field's `FieldTraits`.
///

pub struct FieldSpec<N, V, D = NullDescriptor>(PhantomData<fn() -> (N, V, D)>);

impl<N, V, D> FieldSpec<N, V, D> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<N: FieldName, V, D> FieldSpec<N, V, D> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        N::NAME
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        N::ID
    }

    /// Path of the struct that declares the field.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        N::OWNER
    }

    #[must_use]
    pub fn value_type(&self) -> &'static str {
        type_name::<V>()
    }

    #[must_use]
    pub fn descriptor_type(&self) -> &'static str {
        type_name::<D>()
    }
}

impl<N: FieldName, V, D> FieldTraits for FieldSpec<N, V, D> {
    type Name = N;
    type Value = V;
    type Descriptor = D;
}

impl<N, V, D> Clone for FieldSpec<N, V, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, V, D> Copy for FieldSpec<N, V, D> {}

impl<N, V, D> Default for FieldSpec<N, V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: FieldName, V, D> Debug for FieldSpec<N, V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &N::NAME)
            .field("value", &type_name::<V>())
            .field("descriptor", &type_name::<D>())
            .finish()
    }
}

///
/// Field
///
/// A value plus a presence flag. The flag records whether the value was
/// explicitly provided; reading the value never changes it.
///

pub struct Field<N, V, D = NullDescriptor> {
    value: V,
    is_set: bool,
    _marker: PhantomData<fn() -> (N, D)>,
}

impl<N, V, D> Field<N, V, D> {
    /// Field holding `value` and marked as set.
    #[must_use]
    pub const fn with_value(value: V) -> Self {
        Self::from_parts(value, true)
    }

    #[must_use]
    pub const fn from_parts(value: V, is_set: bool) -> Self {
        Self {
            value,
            is_set,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value. Does not touch the presence flag.
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    #[must_use]
    pub fn into_parts(self) -> (V, bool) {
        (self.value, self.is_set)
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.is_set
    }

    /// Raw access to the presence flag.
    pub const fn is_set_mut(&mut self) -> &mut bool {
        &mut self.is_set
    }

    #[must_use]
    pub const fn spec(&self) -> FieldSpec<N, V, D> {
        FieldSpec::new()
    }
}

impl<N: FieldName, V: Default, D> Field<N, V, D> {
    /// Field holding `V::default()` and marked as not set.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts(V::default(), false)
    }

    /// Field holding `V::default()` and marked as set.
    #[must_use]
    pub fn defaulted() -> Self {
        Self::with_value(V::default())
    }

    /// Build a field from a positional construction instruction.
    /// `default_value` is only evaluated for `Init::Default`.
    pub fn from_init(init: Init<V>, default_value: impl FnOnce() -> V) -> Self {
        match init {
            Init::Null => Self::empty(),
            Init::Default => Self::with_value(default_value()),
            Init::Value(value) => Self::with_value(value),
        }
    }

    /// Checked assignment. Returns whether the field ended up set.
    pub fn set(&mut self, candidate: impl Assign<V, Safety: SafeConversion>) -> bool {
        self.try_set(candidate).is_ok()
    }

    /// Checked assignment. On failure the field is reset to empty.
    pub fn try_set(
        &mut self,
        candidate: impl Assign<V, Safety: SafeConversion>,
    ) -> Result<(), AssignError> {
        let value_type = type_name::<V>();

        if let Some(value) = candidate.assign() {
            self.value = value;
            self.is_set = true;
            sink::record(AssignEvent::Accepted {
                owner: N::OWNER,
                field: N::NAME,
                value_type,
            });

            Ok(())
        } else {
            self.value = V::default();
            self.is_set = false;
            sink::record(AssignEvent::Rejected {
                owner: N::OWNER,
                field: N::NAME,
                value_type,
            });

            Err(AssignError::OutOfRange {
                field: N::NAME,
                value_type,
            })
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.value = V::default();
        self.is_set = false;
    }
}

impl<N: FieldName, V: Default, D> Default for Field<N, V, D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N, V: Clone, D> Clone for Field<N, V, D> {
    fn clone(&self) -> Self {
        Self::from_parts(self.value.clone(), self.is_set)
    }
}

impl<N, V: Copy, D> Copy for Field<N, V, D> {}

impl<N: FieldName, V: Debug, D> Debug for Field<N, V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &N::NAME)
            .field("value", &self.value)
            .field("is_set", &self.is_set)
            .finish()
    }
}

impl<N, V: PartialEq, D> PartialEq for Field<N, V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.is_set == other.is_set && self.value == other.value
    }
}

impl<N, V: Eq, D> Eq for Field<N, V, D> {}

impl<N, V: Hash, D> Hash for Field<N, V, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.is_set.hash(state);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "field::tests::Sample";

    struct Count;

    impl FieldName for Count {
        const NAME: &'static str = "count";
        const OWNER: &'static str = OWNER;
    }

    struct Label;

    impl FieldName for Label {
        const NAME: &'static str = "label";
        const OWNER: &'static str = OWNER;
    }

    struct Widest;

    impl FieldName for Widest {
        const NAME: &'static str = "abcdefghijabcdefghijabcdefghijabcdefghijabcdefghij";
        const OWNER: &'static str = OWNER;
    }

    #[derive(Debug, Default, PartialEq)]
    struct Tag;

    type CountField = Field<Count, u16>;

    #[test]
    fn names_resolve_to_identity() {
        assert_eq!(Count::ID, field_id("count"));
        assert_eq!(Count::LITERAL.as_str(), "count");

        let spec = CountField::empty().spec();
        assert_eq!(spec.name(), "count");
        assert_eq!(spec.id(), field_id("count"));
        assert_eq!(<FieldSpec<Count, u16> as FieldTraits>::ID, field_id("count"));
    }

    #[test]
    fn longest_name_hashes_in_full() {
        assert_eq!(Widest::NAME.len(), MAX_NAME_LEN);
        assert_eq!(Widest::ID, field_id(Widest::NAME));
        assert_eq!(Widest::ID, Widest::LITERAL.id());
        assert!(!Widest::LITERAL.is_truncated());
    }

    #[test]
    fn descriptor_defaults_to_null() {
        let spec = FieldSpec::<Label, String>::new();

        assert_eq!(spec.descriptor_type(), type_name::<NullDescriptor>());
        assert_eq!(FieldSpec::<Label, String, Tag>::new().descriptor_type(), type_name::<Tag>());
    }

    #[test]
    fn empty_field_is_not_set() {
        let field = CountField::empty();

        assert!(!field.is_set());
        assert_eq!(*field.value(), 0);
    }

    #[test]
    fn with_value_marks_set() {
        let field = CountField::with_value(3);

        assert!(field.is_set());
        assert_eq!(field.into_value(), 3);
    }

    #[test]
    fn value_access_does_not_change_presence() {
        let mut field = CountField::empty();
        *field.value_mut() = 9;

        assert!(!field.is_set());
        assert_eq!(*field.value(), 9);
    }

    #[test]
    fn set_in_range_succeeds() {
        let mut field = CountField::empty();

        assert!(field.set(100));
        assert!(field.is_set());
        assert_eq!(*field.value(), 100);
    }

    #[test]
    fn set_out_of_range_resets_field() {
        let mut field = CountField::with_value(5);

        assert!(!field.set(100_000));
        assert!(!field.is_set());
        assert_eq!(*field.value(), 0);
    }

    #[test]
    fn negative_source_resets_forced_presence() {
        let mut field = CountField::empty();
        *field.is_set_mut() = true;

        assert!(!field.set(-1i16));
        assert!(!field.is_set());
    }

    #[test]
    fn try_set_reports_field_and_type() {
        let mut field = CountField::empty();
        let err = field.try_set(-1i64).unwrap_err();

        assert_eq!(
            err,
            AssignError::OutOfRange {
                field: "count",
                value_type: "u16",
            }
        );
    }

    #[test]
    fn string_field_accepts_str() {
        let mut field = Field::<Label, String>::empty();

        assert!(field.set("hello"));
        assert_eq!(field.value(), "hello");
    }

    #[test]
    fn from_init_follows_instruction() {
        let null = CountField::from_init(Init::Null, || 7);
        let default = CountField::from_init(Init::Default, || 7);
        let value = CountField::from_init(Init::Value(3), || 7);

        assert!(!null.is_set());
        assert_eq!((default.is_set(), *default.value()), (true, 7));
        assert_eq!((value.is_set(), *value.value()), (true, 3));
    }

    #[test]
    fn equality_includes_presence() {
        assert_eq!(CountField::with_value(0), CountField::defaulted());
        assert_ne!(CountField::empty(), CountField::defaulted());
    }

    #[test]
    fn clear_empties_field() {
        let mut field = CountField::with_value(4);
        field.clear();

        assert_eq!(field, CountField::empty());
    }

    #[cfg(feature = "obs")]
    #[test]
    fn assignments_are_reported() {
        use crate::obs::{assign_report, assign_reset};

        assign_reset();
        let mut field = CountField::empty();
        field.set(1);
        field.set(70_000);
        field.set(2);

        let report = assign_report();
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(
            report.field(OWNER, "count").map(|c| (c.accepted, c.rejected)),
            Some((2, 1))
        );
    }
}
