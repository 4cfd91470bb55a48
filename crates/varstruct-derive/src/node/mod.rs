mod def;
mod field;
mod var_struct;

pub use self::def::*;
pub use self::field::*;
pub use self::var_struct::*;
