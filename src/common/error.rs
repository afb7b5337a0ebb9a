use crate::{common::span::Span, stage1_lex::tokens::TokenKind};
use derive_more::{Display, Error};
use std::io;
use std::num::ParseIntError;

/// The first failure encountered while compiling one translation unit.
/// There is no recovery: whichever stage raises it aborts the rest of the pipeline.
#[derive(Display, Error, Debug)]
pub enum CompileError {
    #[display("Invalid token at {span}")]
    LexicalInvalid { span: Span },

    #[display("Expected {expected} but found {found} at {span}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[display("Expected <exp> but found {found} at {span}")]
    UnexpectedExpression { found: TokenKind, span: Span },

    #[display("Invalid integer constant at {span}: {source}")]
    InvalidConstant { span: Span, source: ParseIntError },

    #[display("Expression nested deeper than {limit} levels at {span}")]
    ResourceExhausted { limit: usize, span: Span },

    #[display("Failed to write assembly: {_0}")]
    Io(#[error(source)] io::Error),
}
impl CompileError {
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::LexicalInvalid { span }
            | Self::UnexpectedToken { span, .. }
            | Self::UnexpectedExpression { span, .. }
            | Self::InvalidConstant { span, .. }
            | Self::ResourceExhausted { span, .. } => Some(*span),
            Self::Io(_) => None,
        }
    }
}
impl From<io::Error> for CompileError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
