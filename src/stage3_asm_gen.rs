//! Lowering of the C AST into the assembly intermediate representation (AIR).

pub mod asm_ast;
mod generate;

pub use generate::AsmCodeGenerator;
