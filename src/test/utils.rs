mod compiler;
mod misc;

pub use compiler::*;
pub(crate) use misc::*;
