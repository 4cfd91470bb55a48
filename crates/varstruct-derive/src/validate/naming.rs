use crate::{node::Field, validate::is_reserved_word};
use darling::Error as DarlingError;
use std::collections::{HashMap, HashSet};
use syn::Ident;
use varstruct_core::{MAX_NAME_LEN, hash::field_id};

/// Field names must fit a name literal, be plain identifiers and avoid
/// the reserved prefix.
pub fn validate_field_name(ident: &Ident) -> Result<(), DarlingError> {
    let name = ident.to_string();

    if name.len() > MAX_NAME_LEN {
        return Err(DarlingError::custom(format!(
            "field name '{name}' exceeds max length {MAX_NAME_LEN}"
        ))
        .with_span(ident));
    }

    if name.starts_with("r#") {
        return Err(
            DarlingError::custom(format!("field name '{name}' must not be a raw identifier"))
                .with_span(ident),
        );
    }

    if is_reserved_word(&name) {
        return Err(
            DarlingError::custom(format!("the word '{name}' is reserved")).with_span(ident),
        );
    }

    Ok(())
}

/// Reject duplicate names, identity collisions and colliding inherent
/// constants within one declaration.
pub fn validate_unique(fields: &[Field]) -> Result<(), DarlingError> {
    let mut errors = DarlingError::accumulator();
    let mut names = HashSet::new();
    let mut ids = HashMap::new();
    let mut consts = HashMap::new();

    for field in fields {
        let name = field.name();

        if !names.insert(name.clone()) {
            errors.push(
                DarlingError::custom(format!("duplicate variadic struct field '{name}'"))
                    .with_span(&field.ident),
            );
            continue;
        }

        if let Some(other) = ids.insert(field_id(&name), name.clone()) {
            errors.push(
                DarlingError::custom(format!(
                    "field identity of '{name}' collides with '{other}'"
                ))
                .with_span(&field.ident),
            );
        }

        if let Some(other) = consts.insert(field.const_ident().to_string(), name.clone()) {
            errors.push(
                DarlingError::custom(format!(
                    "field '{name}' and '{other}' map to the same constant name"
                ))
                .with_span(&field.ident),
            );
        }
    }

    errors.finish()
}

///
/// TESTS
///
