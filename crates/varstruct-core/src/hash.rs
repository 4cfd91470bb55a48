//!
//! Field identity hashing.
//!
//! Every declared field name is reduced to a 64-bit identity at compile
//! time. The identity is what const-generic field lookups key on, so the
//! same name always addresses the same field regardless of which struct in
//! a parent chain declares it.
//!

/// FNV-1a 64-bit offset basis.
#[allow(clippy::unreadable_literal)]
pub const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;

/// FNV-1a 64-bit prime.
#[allow(clippy::unreadable_literal)]
pub const FNV_PRIME: u64 = 0x100000001b3;

///
/// FNV-1a 64-bit hash (compile-time safe).
///
/// Deterministic across compilers and platforms and usable in `const`
/// position, which is what lets a field identity appear as a const generic
/// argument. Bytes are consumed as unsigned values with no terminator.
///
/// Not cryptographically secure. Identities are only compared against other
/// identities produced by this same function.
///
#[must_use]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }

    hash
}

/// Identity of a field name: the FNV-1a hash of its UTF-8 bytes.
#[must_use]
pub const fn field_id(name: &str) -> u64 {
    fnv1a_64(name.as_bytes())
}

///
/// TESTS
///
