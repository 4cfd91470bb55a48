//!
//! Checked assignment into field values.
//!
//! `Assign<V>` describes which argument types may be stored into a field of
//! type `V` and how. Integer conversions are range checked and fail softly;
//! conversions that can silently lose information (floating-point
//! narrowing, integer/floating-point mixing) are implemented with
//! `Safety = Dangerous` so that the call site is rejected at build time.
//!

///
/// Assign
///
/// `assign` returns `None` when the argument does not fit the target.
///

#[diagnostic::on_unimplemented(
    message = "argument can't be converted to variadic struct field value",
    label = "`{Self}` can't be stored into a field of type `{V}`",
    note = "implement `Assign<{V}>` for `{Self}` to allow this conversion"
)]
pub trait Assign<V> {
    type Safety;

    fn assign(self) -> Option<V>;
}

///
/// Checked
/// The conversion either preserves the value or reports failure.
///

#[derive(Clone, Copy, Debug)]
pub struct Checked;

///
/// Dangerous
/// The conversion may silently change the value and is never allowed.
///

#[derive(Clone, Copy, Debug)]
pub struct Dangerous;

///
/// SafeConversion
///

#[diagnostic::on_unimplemented(
    message = "dangerous argument conversion to variadic struct field value",
    label = "this conversion can silently change the stored value",
    note = "floating-point narrowing and integer/floating-point mixing are rejected; convert explicitly first"
)]
pub trait SafeConversion {}

impl SafeConversion for Checked {}

// identity
impl<V> Assign<V> for V {
    type Safety = Checked;

    fn assign(self) -> Option<V> {
        Some(self)
    }
}

//
// Integers
//

macro_rules! impl_integer_assign {
    ($from:ty => $($to:ty),* $(,)?) => {
        $(
            impl Assign<$to> for $from {
                type Safety = Checked;

                fn assign(self) -> Option<$to> {
                    <$to>::try_from(self).ok()
                }
            }
        )*
    };
}

impl_integer_assign!(i8 => i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_integer_assign!(i16 => i8, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_integer_assign!(i32 => i8, i16, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_integer_assign!(i64 => i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize);
impl_integer_assign!(i128 => i8, i16, i32, i64, isize, u8, u16, u32, u64, u128, usize);
impl_integer_assign!(isize => i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize);
impl_integer_assign!(u8 => i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);
impl_integer_assign!(u16 => i8, i16, i32, i64, i128, isize, u8, u32, u64, u128, usize);
impl_integer_assign!(u32 => i8, i16, i32, i64, i128, isize, u8, u16, u64, u128, usize);
impl_integer_assign!(u64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u128, usize);
impl_integer_assign!(u128 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_integer_assign!(usize => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128);

//
// Floating point
//

impl Assign<f64> for f32 {
    type Safety = Checked;

    fn assign(self) -> Option<f64> {
        Some(f64::from(self))
    }
}

macro_rules! impl_dangerous_assign {
    ($from:ty => $($to:ty),* $(,)?) => {
        $(
            impl Assign<$to> for $from {
                type Safety = Dangerous;

                fn assign(self) -> Option<$to> {
                    None
                }
            }
        )*
    };
}

impl_dangerous_assign!(f64 => f32);
impl_dangerous_assign!(f32 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_dangerous_assign!(f64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_dangerous_assign!(i8 => f32, f64);
impl_dangerous_assign!(i16 => f32, f64);
impl_dangerous_assign!(i32 => f32, f64);
impl_dangerous_assign!(i64 => f32, f64);
impl_dangerous_assign!(i128 => f32, f64);
impl_dangerous_assign!(isize => f32, f64);
impl_dangerous_assign!(u8 => f32, f64);
impl_dangerous_assign!(u16 => f32, f64);
impl_dangerous_assign!(u32 => f32, f64);
impl_dangerous_assign!(u64 => f32, f64);
impl_dangerous_assign!(u128 => f32, f64);
impl_dangerous_assign!(usize => f32, f64);

//
// Text
//

impl Assign<String> for &str {
    type Safety = Checked;

    fn assign(self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl Assign<String> for &String {
    type Safety = Checked;

    fn assign(self) -> Option<String> {
        Some(self.clone())
    }
}

impl Assign<String> for char {
    type Safety = Checked;

    fn assign(self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Run an assignment only when its safety class allows it.
pub fn checked_assign<V, T>(candidate: T) -> Option<V>
where
    T: Assign<V, Safety: SafeConversion>,
{
    candidate.assign()
}

///
/// TESTS
///
