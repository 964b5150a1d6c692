use cnsh_core::ast::{Expr, Program, Stmt};
use cnsh_core::{Kw, Token, TokenType};
use cnsh_diagnostics::{DiagResult, Diagnostic, DiagnosticKind, Span};

use crate::expressions;
use crate::statements;

/// Recursive-descent parser over the lexer's token stream. One-token
/// lookahead, no backtracking; the first structural mismatch aborts the
/// whole parse with a diagnostic.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    pub fn parse(&mut self) -> DiagResult<Program> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            statements.push(self.statement()?);
        }
        Ok(statements)
    }

    pub fn statement(&mut self) -> DiagResult<Stmt> {
        statements::statement(self)
    }

    pub fn expression(&mut self) -> DiagResult<Expr> {
        expressions::expression(self)
    }

    pub(crate) fn match_token(&mut self, tt: TokenType) -> bool {
        if self.check(tt) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn consume(&mut self, tt: TokenType, message: &str) -> DiagResult<Token> {
        if self.check(tt) {
            return Ok(self.advance());
        }
        Err(self.error(format!("{}, got {}", message, self.peek())))
    }

    pub(crate) fn check(&self, tt: TokenType) -> bool {
        self.peek().token_type == tt
    }

    pub(crate) fn check_keyword(&self, kw: Kw) -> bool {
        self.peek().token_type == TokenType::Keyword(kw)
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek().token_type, TokenType::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> Diagnostic {
        let t = self.peek();
        Diagnostic::new(DiagnosticKind::Parse, message, Span::new(t.line, t.col))
    }
}
