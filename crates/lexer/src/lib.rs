mod keywords;
mod lexer;

pub use lexer::Lexer;
