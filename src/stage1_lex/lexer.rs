use crate::{common::span::Span, stage1_lex::tokens::*};
use derivative::Derivative;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Pulls one token at a time out of a preprocessed source buffer.
///
/// Never fails. Malformed input becomes a [`TokenKind::Invalid`] token, and it is up to the consumer to reject it.
/// Once the buffer is exhausted, every further call returns the same zero-width [`TokenKind::Eof`] token.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Lexer<'a> {
    #[derivative(Debug = "ignore")]
    src: &'a [u8],

    /// Byte offset of the next unconsumed byte.
    pos: usize,
}
impl<'a> Lexer<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        let pos = if src.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        Self { src, pos }
    }

    pub fn src(&self) -> &'a [u8] {
        self.src
    }

    pub fn next_token(&mut self) -> Token {
        self.advance_while(is_whitespace);

        let start = self.pos;
        let kind: TokenKind = match self.peek_byte() {
            None => TokenKind::Eof,
            Some(b'(') => self.single(Demarcator::ParenOpen),
            Some(b')') => self.single(Demarcator::ParenClose),
            Some(b'{') => self.single(Demarcator::BraceOpen),
            Some(b'}') => self.single(Demarcator::BraceClose),
            Some(b';') => self.single(Demarcator::Semicolon),
            Some(b'~') => self.single(Operator::Tilde),
            Some(b'-') => {
                self.pos += 1;
                match self.peek_byte() {
                    /* Decrement. */
                    Some(b'-') => self.invalid_run(),
                    _ => Operator::Minus.into(),
                }
            }
            Some(b) if is_word_start(b) => {
                self.advance_while(is_word_continue);
                match Keyword::lookup(&self.src[start..self.pos]) {
                    Some(kw) => kw.into(),
                    None => TokenKind::Identifier,
                }
            }
            Some(b) if b.is_ascii_digit() => {
                self.advance_while(|b| b.is_ascii_digit());
                match self.peek_byte() {
                    /* A suffix glued onto the digits, eg `123abc` or `1_000`. */
                    Some(b) if is_word_start(b) => self.invalid_run(),
                    _ => TokenKind::IntConstant,
                }
            }
            Some(_) => self.invalid_run(),
        };

        Token::new(kind, Span::new(start, self.pos))
    }

    fn single(&mut self, kind: impl Into<TokenKind>) -> TokenKind {
        self.pos += 1;
        kind.into()
    }

    /// Consumes until the next whitespace or the end of input.
    fn invalid_run(&mut self) -> TokenKind {
        self.advance_while(|b| !is_whitespace(b));
        TokenKind::Invalid
    }

    fn peek_byte(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek_byte() {
            if pred(b) == false {
                break;
            }
            self.pos += 1;
        }
    }
}
/// Yields every token before [`TokenKind::Eof`].
impl Iterator for Lexer<'_> {
    type Item = Token;
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        match token.kind() {
            TokenKind::Eof => None,
            _ => Some(token),
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}
fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}
fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
