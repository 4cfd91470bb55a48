use thiserror::Error as ThisError;

///
/// AssignError
///
/// Soft failure of a checked field assignment. The field is left empty
/// (value reset, presence cleared) whenever this is returned.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AssignError {
    #[error("value out of range for field '{field}' of type {value_type}")]
    OutOfRange {
        field: &'static str,
        value_type: &'static str,
    },
}

impl AssignError {
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } => *field,
        }
    }
}

///
/// ReflectError
///
/// Runtime lookup failures for code that only knows a field by name or
/// position at run time. Compile-time lookups reject these cases instead.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReflectError {
    #[error("unknown variadic struct field '{name}' on {path}")]
    UnknownField {
        path: &'static str,
        name: String,
    },

    #[error("variadic struct field index {index} is out of range for {path} (size {size})")]
    IndexOutOfRange {
        path: &'static str,
        index: usize,
        size: usize,
    },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = AssignError::OutOfRange {
            field: "field1",
            value_type: "u16",
        };

        assert_eq!(err.field(), "field1");
        assert_eq!(
            err.to_string(),
            "value out of range for field 'field1' of type u16"
        );
    }

    #[test]
    fn reflect_messages_include_path() {
        let err = ReflectError::IndexOutOfRange {
            path: "demo::Base",
            index: 4,
            size: 2,
        };

        assert_eq!(
            err.to_string(),
            "variadic struct field index 4 is out of range for demo::Base (size 2)"
        );
    }
}
