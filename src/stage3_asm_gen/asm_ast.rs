pub use crate::common::identifier::RawIdentifier;

#[derive(PartialEq, Eq, Debug)]
pub struct Program {
    pub fun: Function,
}

/// The instruction sequence ends in exactly one [`Instruction::Ret`].
#[derive(PartialEq, Eq, Debug)]
pub struct Function {
    pub ident: RawIdentifier,
    pub instrs: Vec<Instruction>,
}

#[derive(PartialEq, Eq, Debug)]
pub enum Instruction {
    Mov { src: Operand, dst: Operand },
    Ret,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operand {
    ImmediateValue(i32),
    Register(Register),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register {
    /// The accumulator. Holds the return value.
    AX,
}
