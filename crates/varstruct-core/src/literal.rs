use crate::hash::fnv1a_64;
use std::fmt::{self, Debug, Display};

///
/// MAX_NAME_LEN
///
/// Capacity of a [`NameLiteral`] in bytes. Declared field names longer
/// than this are rejected by `#[varstruct]`.
///

pub const MAX_NAME_LEN: usize = 50;

///
/// NameLiteral
///
/// Fixed-capacity, zero-padded copy of a field name that can be built and
/// compared in `const` context. Input longer than [`MAX_NAME_LEN`] bytes is
/// truncated on a character boundary; the identity is always computed over
/// the stored characters.
///

#[derive(Clone, Copy)]
pub struct NameLiteral {
    bytes: [u8; MAX_NAME_LEN],
    len: usize,
    truncated: bool,
}

impl NameLiteral {
    #[must_use]
    pub const fn new(name: &str) -> Self {
        let src = name.as_bytes();
        let mut len = if src.len() > MAX_NAME_LEN {
            MAX_NAME_LEN
        } else {
            src.len()
        };

        // never split a multi-byte sequence
        while len > 0 && len < src.len() && (src[len] & 0xC0) == 0x80 {
            len -= 1;
        }

        let mut bytes = [0u8; MAX_NAME_LEN];
        let mut i = 0;
        while i < len {
            bytes[i] = src[i];
            i += 1;
        }

        Self {
            bytes,
            len,
            truncated: len < src.len(),
        }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        self.bytes.split_at(self.len).0
    }

    #[must_use]
    pub const fn as_str(&self) -> &str {
        match std::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(_) => "",
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the source name did not fit and was cut short.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Identity of the stored characters.
    #[must_use]
    pub const fn id(&self) -> u64 {
        fnv1a_64(self.as_bytes())
    }

    /// Const-evaluable equality on the stored characters.
    #[must_use]
    pub const fn eq_literal(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut i = 0;
        while i < self.len {
            if self.bytes[i] != other.bytes[i] {
                return false;
            }
            i += 1;
        }

        true
    }
}

impl Debug for NameLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NameLiteral").field(&self.as_str()).finish()
    }
}

impl Display for NameLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for NameLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.eq_literal(other)
    }
}

impl Eq for NameLiteral {}

impl PartialEq<str> for NameLiteral {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NameLiteral {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::hash::Hash for NameLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

///
/// TESTS
///
