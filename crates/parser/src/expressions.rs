//! Expression grammar as a cascade of precedence levels, loosest binding
//! first. Each level calls the next-tighter level for its operands; binary
//! levels are left-associative, assignment is right-associative.

use cnsh_core::ast::Expr;
use cnsh_core::{Kw, Token, TokenType};
use cnsh_diagnostics::DiagResult;

use crate::parser::Parser;

pub fn expression(parser: &mut Parser) -> DiagResult<Expr> {
    assignment(parser)
}

fn assignment(parser: &mut Parser) -> DiagResult<Expr> {
    let target = logical_or(parser)?;
    if parser.match_token(TokenType::Equal) {
        let value = assignment(parser)?;
        return Ok(Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        });
    }
    Ok(target)
}

fn logical_or(parser: &mut Parser) -> DiagResult<Expr> {
    let mut left = logical_and(parser)?;
    while parser.check(TokenType::OrOr) {
        let operator = parser.advance();
        let right = logical_and(parser)?;
        left = binary(left, operator, right);
    }
    Ok(left)
}

fn logical_and(parser: &mut Parser) -> DiagResult<Expr> {
    let mut left = equality(parser)?;
    while parser.check(TokenType::AndAnd) {
        let operator = parser.advance();
        let right = equality(parser)?;
        left = binary(left, operator, right);
    }
    Ok(left)
}

fn equality(parser: &mut Parser) -> DiagResult<Expr> {
    let mut left = comparison(parser)?;
    while matches!(
        parser.peek().token_type,
        TokenType::EqualEqual | TokenType::BangEqual
    ) {
        let operator = parser.advance();
        let right = comparison(parser)?;
        left = binary(left, operator, right);
    }
    Ok(left)
}

fn comparison(parser: &mut Parser) -> DiagResult<Expr> {
    let mut left = term(parser)?;
    while matches!(
        parser.peek().token_type,
        TokenType::Greater | TokenType::Less | TokenType::GreaterEqual | TokenType::LessEqual
    ) {
        let operator = parser.advance();
        let right = term(parser)?;
        left = binary(left, operator, right);
    }
    Ok(left)
}

fn term(parser: &mut Parser) -> DiagResult<Expr> {
    let mut left = factor(parser)?;
    while matches!(
        parser.peek().token_type,
        TokenType::Plus | TokenType::Minus
    ) {
        let operator = parser.advance();
        let right = factor(parser)?;
        left = binary(left, operator, right);
    }
    Ok(left)
}

fn factor(parser: &mut Parser) -> DiagResult<Expr> {
    let mut left = unary(parser)?;
    while matches!(
        parser.peek().token_type,
        TokenType::Star | TokenType::Slash | TokenType::Percent
    ) {
        let operator = parser.advance();
        let right = unary(parser)?;
        left = binary(left, operator, right);
    }
    Ok(left)
}

fn unary(parser: &mut Parser) -> DiagResult<Expr> {
    if matches!(
        parser.peek().token_type,
        TokenType::Minus | TokenType::Bang
    ) {
        let operator = parser.advance();
        let operand = unary(parser)?;
        return Ok(Expr::Unary {
            operator,
            operand: Box::new(operand),
        });
    }
    primary(parser)
}

fn primary(parser: &mut Parser) -> DiagResult<Expr> {
    let token = parser.peek().clone();
    match token.token_type {
        TokenType::Number => {
            parser.advance();
            Ok(Expr::Number(token.text))
        }
        TokenType::Str => {
            parser.advance();
            Ok(Expr::Str(token.text))
        }
        TokenType::Keyword(Kw::True) => {
            parser.advance();
            Ok(Expr::Bool(true))
        }
        TokenType::Keyword(Kw::False) => {
            parser.advance();
            Ok(Expr::Bool(false))
        }
        TokenType::Keyword(Kw::Null) => {
            parser.advance();
            Ok(Expr::Null)
        }
        TokenType::Identifier => {
            parser.advance();
            if parser.match_token(TokenType::LeftParen) {
                finish_call(parser, token)
            } else {
                Ok(Expr::Variable { name: token })
            }
        }
        TokenType::LeftParen => {
            parser.advance();
            let expr = expression(parser)?;
            parser.consume(TokenType::RightParen, "expected ')' after expression")?;
            Ok(expr)
        }
        _ => Err(parser.error(format!("unexpected token {}", token))),
    }
}

fn finish_call(parser: &mut Parser, name: Token) -> DiagResult<Expr> {
    let mut arguments = Vec::new();
    while !parser.check(TokenType::RightParen) {
        arguments.push(expression(parser)?);
        parser.match_token(TokenType::Comma);
    }
    parser.consume(TokenType::RightParen, "expected ')' after arguments")?;
    Ok(Expr::Call { name, arguments })
}

fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
    Expr::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
}
