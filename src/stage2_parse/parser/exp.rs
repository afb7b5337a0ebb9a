use super::{MAX_EXP_NESTING, Parser};
use crate::{
    common::{error::CompileError, span::Span},
    stage1_lex::tokens as t,
    stage2_parse::c_ast::*,
};

impl Parser<'_> {
    pub(super) fn parse_exp(&mut self) -> Result<Expression, CompileError> {
        self.do_parse_exp(0)
    }
    fn do_parse_exp(&mut self, depth: usize) -> Result<Expression, CompileError> {
        let token = self.next_token()?;

        if depth >= MAX_EXP_NESTING {
            return Err(CompileError::ResourceExhausted {
                limit: MAX_EXP_NESTING,
                span: token.span(),
            });
        }

        match token.kind() {
            t::TokenKind::IntConstant => self.parse_const(token.span()).map(Expression::Const),
            t::TokenKind::Operator(t_op) => {
                let op = match t_op {
                    t::Operator::Minus => UnaryOperator::Negate,
                    t::Operator::Tilde => UnaryOperator::Complement,
                };

                let sub_exp = self.do_parse_exp(depth + 1)?;

                Ok(Expression::new_unary(op, sub_exp))
            }
            t::TokenKind::Demarcator(t::Demarcator::ParenOpen) => {
                let exp = self.do_parse_exp(depth + 1)?;

                self.expect(t::Demarcator::ParenClose)?;

                Ok(exp)
            }
            found => Err(CompileError::UnexpectedExpression {
                found,
                span: token.span(),
            }),
        }
    }

    /// The lexer only checked the digits' shape. The range is checked here.
    fn parse_const(&self, span: Span) -> Result<i32, CompileError> {
        self.text(span)
            .parse::<i32>()
            .map_err(|source| CompileError::InvalidConstant { span, source })
    }
}
