mod naming;
mod reserved;

pub use naming::*;
pub use reserved::*;
