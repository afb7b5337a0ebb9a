pub mod c_ast;
pub mod parser;
