use crate::{stage2_parse::c_ast as c, stage3_asm_gen::asm_ast::*};

/// Every expression the grammar currently admits is a chain of unary operators over a constant,
/// so each one is folded at compile time into a single immediate value.
pub struct AsmCodeGenerator;
impl AsmCodeGenerator {
    pub fn gen_program(c::Program { fun }: c::Program) -> Program {
        let fun = Self::gen_fun(fun);
        Program { fun }
    }

    fn gen_fun(c::Function { ident, body }: c::Function) -> Function {
        let mut instrs = Vec::with_capacity(2);

        /* Anything after the first `return` is unreachable. */
        let ret_exp = body.into_iter().find_map(|stmt| match stmt {
            c::Statement::Return(exp) => Some(exp),
        });
        if let Some(exp) = ret_exp {
            let val = Self::fold_exp(exp);
            instrs.push(Instruction::Mov {
                src: Operand::ImmediateValue(val),
                dst: Operand::Register(Register::AX),
            });
        }
        instrs.push(Instruction::Ret);

        Function { ident, instrs }
    }

    /* C Expression */

    /// Iterative, so that the nesting depth doesn't cost stack frames.
    fn fold_exp(mut exp: c::Expression) -> i32 {
        let mut ops_rootward = vec![];
        let konst = loop {
            match exp {
                c::Expression::Const(konst) => break konst,
                c::Expression::Unary(c::Unary { op, sub_exp }) => {
                    ops_rootward.push(op);
                    exp = *sub_exp;
                }
            }
        };

        /* The innermost operator applies first. */
        ops_rootward
            .into_iter()
            .rev()
            .fold(konst, |val, op| Self::fold_unary(op, val))
    }

    fn fold_unary(op: c::UnaryOperator, val: i32) -> i32 {
        match op {
            /* -(i32::MIN) wraps around to itself. */
            c::UnaryOperator::Negate => val.wrapping_neg(),
            c::UnaryOperator::Complement => !val,
        }
    }
}
