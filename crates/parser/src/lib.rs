mod expressions;
mod parser;
mod statements;

pub use parser::Parser;
