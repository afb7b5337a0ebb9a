pub mod config;
pub mod files;

use self::{
    config::{Args, CliArgs, CompilerUntil, DriverUntil, Downstream},
    files::{AsmFilepath, ObjectFilepath, PreprocessedFilepath, ProgramFilepath, SrcFilepath},
};
use crate::{
    common::{error::CompileError, span::LineIndex},
    stage1_lex::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    stage2_parse::{c_ast, parser::Parser},
    stage3_asm_gen::{AsmCodeGenerator, asm_ast},
    stage4_asm_emit::emit::AsmCodeEmitter,
};
use anyhow::{Context, Result, anyhow};
use clap::Parser as ClapParser;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn driver_main() -> Result<()> {
    env_logger::init();

    let cli_args = CliArgs::parse();
    log::info!("{cli_args:?}");

    let driver = Driver::from(Args::from(cli_args));
    driver.run()
}

#[derive(Debug)]
pub enum CompilationResult<W> {
    Lexed(Vec<Token>),
    Parsed(c_ast::Program),
    AsmCode(asm_ast::Program),
    AsmEmitted(W),
}

pub struct Driver {
    args: Args,
}
impl From<Args> for Driver {
    fn from(args: Args) -> Self {
        Self { args }
    }
}
impl Driver {
    pub fn run(self) -> Result<()> {
        let mut asm_filepaths = vec![];
        for src_filepath in self.args.src_filepaths.iter() {
            let src_filepath = SrcFilepath::try_from(src_filepath.clone())?;

            let pp_src = Self::preprocess(&src_filepath)?;
            log::info!("Preprocessor done -> {} bytes", pp_src.len());

            let asm_filepath = self.compile_file(&src_filepath, &pp_src)?;
            log::info!("Compiler done -> {asm_filepath:?}");
            if let Some(asm_filepath) = asm_filepath {
                asm_filepaths.push(asm_filepath);
            }
        }

        match self.args.until {
            DriverUntil::Compiler(_) => {}
            DriverUntil::Downstream(Downstream::Assembler) => {
                for asm_filepath in asm_filepaths {
                    Self::assemble(asm_filepath)?;
                }
            }
            DriverUntil::Downstream(Downstream::Linker) => {
                Self::assemble_and_link_program(asm_filepaths)?;
            }
        }

        Ok(())
    }

    /// Runs the compiler proper over one preprocessed translation unit, up to the configured stage.
    ///
    /// The assembly text, if any, is written to `asm_sink`, which is handed back flushed.
    pub fn compile<W: Write>(
        &self,
        pp_src: &[u8],
        asm_sink: W,
    ) -> Result<CompilationResult<W>, CompileError> {
        let lexer = Lexer::new(pp_src);
        if self.args.until.compiler_until() == CompilerUntil::Lexer {
            let tokens = lexer.collect::<Vec<_>>();
            if let Some(invalid) = tokens.iter().find(|t| t.kind() == TokenKind::Invalid) {
                return Err(CompileError::LexicalInvalid { span: invalid.span() });
            }
            return Ok(CompilationResult::Lexed(tokens));
        }

        let mut parser = Parser::new(lexer);
        let c_prog = parser.parse_program()?;
        log::debug!("Parsed function {}", c_prog.fun.ident);
        if self.args.until.compiler_until() == CompilerUntil::Parser {
            return Ok(CompilationResult::Parsed(c_prog));
        }

        let asm_prog = AsmCodeGenerator::gen_program(c_prog);
        if self.args.until.compiler_until() == CompilerUntil::AsmGen {
            return Ok(CompilationResult::AsmCode(asm_prog));
        }

        let asm_emitter = AsmCodeEmitter::new(asm_sink, self.args.target_os);
        let asm_sink = asm_emitter.emit_program(asm_prog)?;
        Ok(CompilationResult::AsmEmitted(asm_sink))
    }

    fn compile_file(&self, src_filepath: &SrcFilepath, pp_src: &[u8]) -> Result<Option<AsmFilepath>> {
        let locate = |e: CompileError| Self::locate_err(e, src_filepath, pp_src);

        if self.args.until.compiler_until() != CompilerUntil::AsmEmit {
            match self.compile(pp_src, io::sink()).map_err(locate)? {
                CompilationResult::Lexed(tokens) => println!("tokens: {tokens:#?}"),
                CompilationResult::Parsed(c_prog) => println!("c_prog: {c_prog:#?}"),
                CompilationResult::AsmCode(asm_prog) => println!("asm_prog: {asm_prog:#?}"),
                CompilationResult::AsmEmitted(_) => {}
            }
            return Ok(None);
        }

        /* The asm file is only created once every stage has succeeded. */
        let asm_code = match self.compile(pp_src, Vec::new()).map_err(locate)? {
            CompilationResult::AsmEmitted(asm_code) => asm_code,
            actual => return Err(anyhow!("Expected assembly code but got {actual:?}")),
        };
        let asm_filepath = AsmFilepath::from(src_filepath);
        fs::write(&*asm_filepath, asm_code)
            .with_context(|| format!("Failed to write {asm_filepath:?}"))?;

        if self.args.until == DriverUntil::Compiler(CompilerUntil::AsmEmit) {
            println!("asm file: {asm_filepath:?}");
        }
        Ok(Some(asm_filepath))
    }

    /// Offsets are reported against the preprocessed text.
    fn locate_err(e: CompileError, src_filepath: &SrcFilepath, pp_src: &[u8]) -> anyhow::Error {
        let location = match e.span() {
            Some(span) => {
                let line_col = LineIndex::new(pp_src).line_col(span.start());
                format!("{}:{line_col}", src_filepath.display())
            }
            None => format!("{}", src_filepath.display()),
        };
        log::error!("{location}: {e}");
        anyhow::Error::new(e).context(location)
    }

    fn preprocess(src_filepath: &SrcFilepath) -> Result<Vec<u8>> {
        let pp_filepath = PreprocessedFilepath::from(src_filepath);

        let cmd = duct::cmd!("gcc", "-E", "-P", &**src_filepath, "-o", &**pp_filepath);
        log::info!("Preprocessor: {cmd:?}");
        cmd.run().context("The preprocessor process did not succeed.")?;

        let pp_src =
            fs::read(&*pp_filepath).with_context(|| format!("Failed to read {pp_filepath:?}"))?;
        fs::remove_file(&*pp_filepath)?;

        Ok(pp_src)
    }

    fn assemble(asm_filepath: AsmFilepath) -> Result<ObjectFilepath> {
        /* Run separate gcc command per foo.s file, so that we can specify each `-o foo.o` filepath. */
        let obj_filepath = ObjectFilepath::from(&asm_filepath);
        Self::use_gcc_on_asms(&["-c"], vec![asm_filepath], &obj_filepath, "assembler")?;
        Ok(obj_filepath)
    }
    fn assemble_and_link_program(
        asm_filepaths: Vec<AsmFilepath>,
    ) -> Result<Option<ProgramFilepath>> {
        /* We assume `main()` is inside the first asm input. */
        match asm_filepaths.first() {
            None => Ok(None),
            Some(asm0) => {
                let prog_filepath = ProgramFilepath::from(asm0);
                Self::use_gcc_on_asms(&[], asm_filepaths, &prog_filepath, "assembler and linker")?;
                Ok(Some(prog_filepath))
            }
        }
    }
    fn use_gcc_on_asms(
        gcc_flags: &[&str],
        asm_filepaths: Vec<AsmFilepath>,
        out_path: &Path,
        descr: &str,
    ) -> Result<()> {
        let mut gcc_args = gcc_flags.iter().map(OsString::from).collect::<Vec<_>>();
        gcc_args.extend(asm_filepaths.iter().map(|p| p.as_os_str().to_owned()));
        gcc_args.extend([OsString::from("-o"), out_path.as_os_str().to_owned()]);

        let cmd = duct::cmd("gcc", gcc_args);
        log::info!("{descr} command: {cmd:?}");
        cmd.run()
            .with_context(|| format!("The {descr} process did not succeed."))?;
        log::info!("{descr} done -> {out_path:?}");

        for asm_filepath in asm_filepaths {
            fs::remove_file(&*asm_filepath)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stage4_asm_emit::emit::TargetOs;
    use std::path::PathBuf;

    fn emitting_driver() -> Driver {
        Driver::from(Args {
            src_filepaths: Vec::with_capacity(0),
            until: DriverUntil::Compiler(CompilerUntil::AsmEmit),
            target_os: TargetOs::Linux,
        })
    }

    fn scratch_dir(name: &str) -> Result<PathBuf> {
        let dir_name = format!("compiler-c-unary-{}-{name}", std::process::id());
        let dir = std::env::temp_dir().join(dir_name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    #[test]
    fn no_asm_file_after_failure() -> Result<()> {
        let dir = scratch_dir("failure")?;
        let src_filepath = SrcFilepath::try_from(dir.join("bad.c"))?;
        let asm_filepath = AsmFilepath::from(&src_filepath);

        let res = emitting_driver().compile_file(&src_filepath, b"int main(void) { return 2 }");
        let asm_exists = asm_filepath.exists();
        fs::remove_dir_all(&dir)?;

        let e = res.err().ok_or_else(|| anyhow!("Expected a compilation failure"))?;
        assert!(e.to_string().ends_with("bad.c:1:27"));
        assert!(matches!(
            e.downcast_ref::<CompileError>(),
            Some(CompileError::UnexpectedToken { .. })
        ));
        assert!(asm_exists == false);
        Ok(())
    }

    #[test]
    fn asm_file_after_success() -> Result<()> {
        let dir = scratch_dir("success")?;
        let src_filepath = SrcFilepath::try_from(dir.join("ret2.c"))?;

        let res = emitting_driver().compile_file(&src_filepath, b"int main(void) { return 2; }");
        let asm = match &res {
            Ok(Some(asm_filepath)) => fs::read_to_string(&**asm_filepath),
            _ => Ok(String::new()),
        };
        fs::remove_dir_all(&dir)?;

        let asm_filepath = res?.ok_or_else(|| anyhow!("Expected an asm file"))?;
        assert_eq!(*asm_filepath, dir.join("ret2.s"));
        assert!(asm?.contains("\tmovl\t$2, %eax\n"));
        Ok(())
    }
}
