///
/// RESERVED_PREFIX
/// Generated members and markers start with this prefix.
///

pub const RESERVED_PREFIX: &str = "__";

/// Names the generated code uses for its own items.
const RESERVED_WORDS: [&str; 3] = ["Self", "self", "super"];

#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    word.starts_with(RESERVED_PREFIX) || RESERVED_WORDS.contains(&word)
}

///
/// TESTS
///
