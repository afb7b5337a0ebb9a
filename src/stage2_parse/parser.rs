#![doc = include_str!("./parser/ebnf.md")]

mod exp;
mod fun;

use crate::{
    common::{error::CompileError, identifier::RawIdentifier, span::Span},
    stage1_lex::{lexer::Lexer, tokens as t},
    stage2_parse::c_ast::*,
};

/// How deep unary operators and parentheses may nest within one expression.
/// Parsing recurses once per level, so this bounds the host call stack usage.
pub const MAX_EXP_NESTING: usize = 256;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    pub fn parse_program(&mut self) -> Result<Program, CompileError> {
        let fun = self.parse_fun()?;

        self.expect(t::TokenKind::Eof)?;

        Ok(Program { fun })
    }
}

/// Helpers
impl Parser<'_> {
    /// The first invalid token aborts the parse.
    fn next_token(&mut self) -> Result<t::Token, CompileError> {
        let token = self.lexer.next_token();
        match token.kind() {
            t::TokenKind::Invalid => Err(CompileError::LexicalInvalid { span: token.span() }),
            _ => Ok(token),
        }
    }

    fn expect(&mut self, expected: impl Into<t::TokenKind>) -> Result<t::Token, CompileError> {
        let expected = expected.into();
        let actual = self.next_token()?;
        if actual.kind() == expected {
            Ok(actual)
        } else {
            Err(CompileError::UnexpectedToken {
                expected,
                found: actual.kind(),
                span: actual.span(),
            })
        }
    }

    fn expect_exact(&mut self, next_tokens: &[t::TokenKind]) -> Result<(), CompileError> {
        for expected in next_tokens {
            self.expect(*expected)?;
        }
        Ok(())
    }

    fn text(&self, span: Span) -> String {
        String::from_utf8_lossy(span.slice(self.lexer.src())).into_owned()
    }

    fn identifier(&self, span: Span) -> RawIdentifier {
        RawIdentifier::new(self.text(span))
    }
}
