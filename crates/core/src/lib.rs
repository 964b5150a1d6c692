pub mod ast;
pub mod token;

pub use ast::*;
pub use token::*;
