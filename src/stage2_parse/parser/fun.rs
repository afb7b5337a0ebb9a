use super::Parser;
use crate::{common::error::CompileError, stage1_lex::tokens as t, stage2_parse::c_ast::*};

impl Parser<'_> {
    pub(super) fn parse_fun(&mut self) -> Result<Function, CompileError> {
        self.expect(t::Keyword::Int)?;

        let ident_token = self.expect(t::TokenKind::Identifier)?;
        let ident = self.identifier(ident_token.span());

        self.expect_exact(&[
            t::Demarcator::ParenOpen.into(),
            t::Keyword::Void.into(),
            t::Demarcator::ParenClose.into(),
            t::Demarcator::BraceOpen.into(),
        ])?;

        let stmt = self.parse_stmt()?;

        self.expect(t::Demarcator::BraceClose)?;

        Ok(Function {
            ident,
            body: vec![stmt],
        })
    }

    fn parse_stmt(&mut self) -> Result<Statement, CompileError> {
        self.expect(t::Keyword::Return)?;

        let exp = self.parse_exp()?;

        self.expect(t::Demarcator::Semicolon)?;

        Ok(Statement::Return(exp))
    }
}
