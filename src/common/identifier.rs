use derive_more::{Constructor, Deref, Display};

/// Identifier text, copied out of the source buffer so that no later stage borrows the buffer.
#[derive(Constructor, Deref, Display, Clone, PartialEq, Eq, Hash, Debug)]
pub struct RawIdentifier(String);
