use crate::{
    stage2_parse::c_ast as c,
    stage3_asm_gen::asm_ast::*,
    test::utils::{self, fail},
};
use anyhow::Result;

fn returned_imm(pp: &str) -> Result<i32> {
    let asm_prog = utils::compile_until_asm_gen(pp)?;
    let instrs = asm_prog.fun.instrs;
    match &instrs[..] {
        [
            Instruction::Mov {
                src: Operand::ImmediateValue(val),
                dst: Operand::Register(Register::AX),
            },
            Instruction::Ret,
        ] => Ok(*val),
        _ => fail!("{instrs:?}"),
    }
}

#[test]
fn parse_nested() -> Result<()> {
    let c_prog = utils::compile_until_parser("int foo(void) { return ~(-25); }")?;
    let c::Function { ident, body } = c_prog.fun;
    assert_eq!(ident.as_str(), "foo");
    assert_eq!(
        body,
        vec![c::Statement::Return(c::Expression::new_unary(
            c::UnaryOperator::Complement,
            c::Expression::new_unary(c::UnaryOperator::Negate, c::Expression::Const(25)),
        ))]
    );
    Ok(())
}

#[test]
fn parens_leave_no_trace() -> Result<()> {
    let bare = utils::compile_until_parser("int f(void) { return -2; }")?;
    let wrapped = utils::compile_until_parser("int f(void) { return ((-((2)))); }")?;
    assert_eq!(bare, wrapped);
    Ok(())
}

#[test]
fn fold() -> Result<()> {
    assert_eq!(returned_imm("int foo(void) { return ~(-25); }")?, 24);
    assert_eq!(returned_imm("int foo(void) { return -(~25); }")?, 26);
    assert_eq!(returned_imm("int foo(void) { return ~0; }")?, -1);
    assert_eq!(returned_imm("int foo(void) { return - -2; }")?, 2);
    assert_eq!(returned_imm("int foo(void) { return -(-2); }")?, 2);
    assert_eq!(returned_imm("int foo(void) { return ~~~7; }")?, -8);
    assert_eq!(returned_imm("int foo(void) { return -2147483647; }")?, -2147483647);
    Ok(())
}

#[test]
fn fold_wraps_around() -> Result<()> {
    /* ~2147483647 is the minimum int, whose negation is itself. */
    assert_eq!(returned_imm("int foo(void) { return ~2147483647; }")?, i32::MIN);
    assert_eq!(returned_imm("int foo(void) { return -~2147483647; }")?, i32::MIN);
    Ok(())
}

#[test]
fn nesting_up_to_limit() -> Result<()> {
    use crate::stage2_parse::parser::MAX_EXP_NESTING;

    /* The constant itself sits at the deepest level. */
    let tildes = "~".repeat(MAX_EXP_NESTING - 1);
    let pp = format!("int foo(void) {{ return {tildes}2; }}");
    let expected = if (MAX_EXP_NESTING - 1) % 2 == 0 { 2 } else { !2 };
    assert_eq!(returned_imm(&pp)?, expected);
    Ok(())
}
