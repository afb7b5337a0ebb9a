use crate::common::span::Span;
use derive_more::{Constructor, Display, From};
use getset::CopyGetters;

#[derive(Constructor, CopyGetters, Clone, Copy, PartialEq, Eq, Debug)]
#[getset(get_copy = "pub")]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

#[derive(From, Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    #[display("<identifier>")]
    Identifier,
    #[display("<int>")]
    IntConstant,
    #[from]
    #[display("{_0}")]
    Keyword(Keyword),
    #[from]
    #[display("{_0}")]
    Demarcator(Demarcator),
    #[from]
    #[display("{_0}")]
    Operator(Operator),
    #[display("<invalid>")]
    Invalid,
    #[display("<EOF>")]
    Eof,
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Keyword {
    #[display("'int'")]
    Int,
    #[display("'return'")]
    Return,
    #[display("'void'")]
    Void,
}
impl Keyword {
    const TABLE: [(&'static [u8], Keyword); 3] = [
        (b"int", Keyword::Int),
        (b"return", Keyword::Return),
        (b"void", Keyword::Void),
    ];

    pub fn lookup(word: &[u8]) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(text, _)| *text == word)
            .map(|(_, kw)| *kw)
    }
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Demarcator {
    #[display("'('")]
    ParenOpen,
    #[display("')'")]
    ParenClose,
    #[display("'{{'")]
    BraceOpen,
    #[display("'}}'")]
    BraceClose,
    #[display("';'")]
    Semicolon,
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    #[display("'-'")]
    Minus,
    #[display("'~'")]
    Tilde,
}
