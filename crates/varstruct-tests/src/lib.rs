//! Fixture structs and behavioural tests for `#[varstruct]`.
//!
//! The fixtures in `schema` are also compiled as part of the normal build,
//! so a regression in the generated code fails `cargo build` before any
//! test runs.

pub mod schema;

#[cfg(test)]
mod test;

mod prelude {
    pub use varstruct::prelude::*;
}
