///
/// Init
///
/// Per-argument instruction for positional construction. A raw value of
/// the field type is accepted wherever an `Init` is, via `IntoInit`, and
/// text fields also take `&str`, `&String` and `char`.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Init<V> {
    /// Leave the field empty.
    #[default]
    Null,

    /// Set the field to its default value (default-initialized for
    /// struct-typed fields).
    Default,

    /// Set the field to this value.
    Value(V),
}

impl<V> Init<V> {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl<V> From<Option<V>> for Init<V> {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

///
/// IntoInit
///

#[diagnostic::on_unimplemented(
    message = "argument can't be converted to variadic struct field value",
    label = "expected `{V}`, `Init::Null` or `Init::Default`",
    note = "positional arguments must have the field type (text fields also take `&str` and `char`); use `Init::Value` or `.into()` to convert"
)]
pub trait IntoInit<V> {
    fn into_init(self) -> Init<V>;
}

impl<V> IntoInit<V> for V {
    fn into_init(self) -> Init<V> {
        Init::Value(self)
    }
}

impl<V> IntoInit<V> for Init<V> {
    fn into_init(self) -> Init<V> {
        self
    }
}

// text conveniences, matching `Assign<String>`

impl IntoInit<String> for &str {
    fn into_init(self) -> Init<String> {
        Init::Value(self.to_string())
    }
}

impl IntoInit<String> for &String {
    fn into_init(self) -> Init<String> {
        Init::Value(self.clone())
    }
}

impl IntoInit<String> for char {
    fn into_init(self) -> Init<String> {
        Init::Value(self.to_string())
    }
}

///
/// DefaultInitialized
///
/// Construction marker: `S::from(DefaultInitialized)` sets every field of
/// `S` to its default.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct DefaultInitialized;

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn lift<V, A: IntoInit<V>>(arg: A) -> Init<V> {
        arg.into_init()
    }

    #[test]
    fn raw_values_become_value_instructions() {
        assert_eq!(lift::<u16, _>(7u16), Init::Value(7));
        assert_eq!(
            lift::<String, _>("hello".to_string()),
            Init::Value("hello".to_string())
        );
    }

    #[test]
    fn text_arguments_fill_string_fields() {
        let owned = String::from("owned");

        assert_eq!(lift::<String, _>("hello"), Init::Value("hello".to_string()));
        assert_eq!(lift::<String, _>(&owned), Init::Value("owned".to_string()));
        assert_eq!(lift::<String, _>('x'), Init::Value("x".to_string()));
    }

    #[test]
    fn markers_pass_through() {
        assert_eq!(lift::<u16, _>(Init::Null), Init::Null);
        assert_eq!(lift::<u16, _>(Init::Default), Init::Default);
        assert!(Init::<u8>::default().is_null());
    }

    #[test]
    fn options_map_to_null_or_value() {
        assert_eq!(Init::from(Some(3u8)), Init::Value(3));
        assert_eq!(Init::<u8>::from(None), Init::Null);
    }
}
