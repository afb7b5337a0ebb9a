pub use crate::common::identifier::RawIdentifier;

#[derive(PartialEq, Eq, Debug)]
pub struct Program {
    pub fun: Function,
}

#[derive(PartialEq, Eq, Debug)]
pub struct Function {
    pub ident: RawIdentifier,
    pub body: Vec<Statement>,
}

#[derive(PartialEq, Eq, Debug)]
pub enum Statement {
    Return(Expression),
}

#[derive(PartialEq, Eq, Debug)]
pub enum Expression {
    Const(i32),
    Unary(Unary),
}
impl Expression {
    pub fn new_unary(op: UnaryOperator, sub_exp: Expression) -> Self {
        Self::Unary(Unary {
            op,
            sub_exp: Box::new(sub_exp),
        })
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct Unary {
    pub op: UnaryOperator,
    pub sub_exp: Box<Expression>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryOperator {
    /// `~`
    Complement,
    /// `-`
    Negate,
}
