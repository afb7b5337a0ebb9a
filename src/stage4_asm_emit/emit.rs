use crate::stage3_asm_gen::asm_ast::{Function, Instruction, Operand, Program, Register};
use std::io::{self, Write};

const TAB: &str = "\t";

/// Decides symbol naming and trailing sections.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TargetOs {
    Linux,
    /// Symbols are prefixed with `_`.
    MacOs,
}
impl TargetOs {
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    fn symbol_pfx(&self) -> &'static str {
        match self {
            Self::MacOs => "_",
            Self::Linux => "",
        }
    }
}

/// Writes AT&T-syntax x86-64 assembly. No validation is done here; the AIR is trusted as is.
pub struct AsmCodeEmitter<W: Write> {
    w: W,
    target_os: TargetOs,
}
impl<W: Write> AsmCodeEmitter<W> {
    pub fn new(w: W, target_os: TargetOs) -> Self {
        Self { w, target_os }
    }

    /// @return the sink, flushed.
    pub fn emit_program(mut self, Program { fun }: Program) -> Result<W, io::Error> {
        self.write_fun(fun)?;

        if self.target_os == TargetOs::Linux {
            /* Don't request an executable stack from the linker. */
            writeln!(&mut self.w, "{TAB}.section{TAB}.note.GNU-stack,\"\",@progbits")?;
        }

        self.w.flush()?;
        Ok(self.w)
    }
    fn write_fun(&mut self, Function { ident, instrs }: Function) -> Result<(), io::Error> {
        let pfx = self.target_os.symbol_pfx();
        writeln!(&mut self.w, "{TAB}.globl{TAB}{pfx}{ident}")?;
        writeln!(&mut self.w, "{pfx}{ident}:")?;
        for instr in instrs {
            self.write_instr(instr)?;
        }
        Ok(())
    }
    fn write_instr(&mut self, instr: Instruction) -> Result<(), io::Error> {
        match instr {
            Instruction::Mov { src, dst } => {
                write!(&mut self.w, "{TAB}movl{TAB}")?;
                self.write_operand(src)?;
                write!(&mut self.w, ", ")?;
                self.write_operand(dst)?;
                writeln!(&mut self.w)?;
            }
            Instruction::Ret => {
                writeln!(&mut self.w, "{TAB}ret")?;
            }
        }
        Ok(())
    }
    fn write_operand(&mut self, operand: Operand) -> Result<(), io::Error> {
        match operand {
            Operand::ImmediateValue(val) => {
                write!(&mut self.w, "${val}")?;
            }
            Operand::Register(reg) => {
                let reg_str = match reg {
                    Register::AX => "%eax",
                };
                write!(&mut self.w, "{reg_str}")?;
            }
        }
        Ok(())
    }
}
