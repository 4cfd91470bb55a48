mod implementor;

pub use implementor::*;
