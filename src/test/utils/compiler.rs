use crate::{
    common::error::CompileError,
    driver::{
        CompilationResult, Driver,
        config::{Args, CompilerUntil, DriverUntil},
    },
    stage1_lex::tokens::Token,
    stage2_parse::c_ast,
    stage3_asm_gen::asm_ast,
    stage4_asm_emit::emit::TargetOs,
};
use anyhow::{Result, anyhow};
use std::io::Write;

fn compile(
    pre_processed_src_code: &str,
    until: CompilerUntil,
    target_os: TargetOs,
) -> Result<CompilationResult<Vec<u8>>, CompileError> {
    compile_into(pre_processed_src_code, until, target_os, Vec::new())
}

fn compile_into<W: Write>(
    pre_processed_src_code: &str,
    until: CompilerUntil,
    target_os: TargetOs,
    asm_sink: W,
) -> Result<CompilationResult<W>, CompileError> {
    let args = Args {
        src_filepaths: Vec::with_capacity(0),
        until: DriverUntil::Compiler(until),
        target_os,
    };
    let driver = Driver::from(args);

    driver.compile(pre_processed_src_code.as_bytes(), asm_sink)
}

pub fn compile_until_lexer(pp: &str) -> Result<Vec<Token>> {
    let compil_res = compile(pp, CompilerUntil::Lexer, TargetOs::Linux)?;
    match compil_res {
        CompilationResult::Lexed(tokens) => Ok(tokens),
        actual => Err(anyhow!("{actual:#?}")),
    }
}

pub fn compile_until_parser(pp: &str) -> Result<c_ast::Program> {
    let compil_res = compile(pp, CompilerUntil::Parser, TargetOs::Linux)?;
    match compil_res {
        CompilationResult::Parsed(prog) => Ok(prog),
        actual => Err(anyhow!("{actual:#?}")),
    }
}

pub fn compile_until_asm_gen(pp: &str) -> Result<asm_ast::Program> {
    let compil_res = compile(pp, CompilerUntil::AsmGen, TargetOs::Linux)?;
    match compil_res {
        CompilationResult::AsmCode(prog) => Ok(prog),
        actual => Err(anyhow!("{actual:#?}")),
    }
}

pub fn compile_until_asm_emit(pp: &str, target_os: TargetOs) -> Result<String> {
    let compil_res = compile(pp, CompilerUntil::AsmEmit, target_os)?;
    match compil_res {
        CompilationResult::AsmEmitted(bytes) => Ok(String::from_utf8(bytes)?),
        actual => Err(anyhow!("{actual:#?}")),
    }
}

/// Expects the full compilation to fail.
pub fn compile_expecting_err(pp: &str) -> Result<CompileError> {
    match compile(pp, CompilerUntil::AsmEmit, TargetOs::Linux) {
        Err(e) => Ok(e),
        Ok(actual) => Err(anyhow!("Expected an error but got {actual:#?}")),
    }
}

/// Emits into the given sink, and expects the compilation to fail.
pub fn compile_into_expecting_err<W: Write>(pp: &str, asm_sink: W) -> Result<CompileError> {
    match compile_into(pp, CompilerUntil::AsmEmit, TargetOs::Linux, asm_sink) {
        Err(e) => Ok(e),
        Ok(_) => Err(anyhow!("Expected an error")),
    }
}
