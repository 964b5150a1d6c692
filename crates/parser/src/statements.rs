use cnsh_core::ast::{Param, Stmt};
use cnsh_core::{Kw, TokenType};
use cnsh_diagnostics::DiagResult;

use crate::parser::Parser;

pub fn statement(parser: &mut Parser) -> DiagResult<Stmt> {
    if let TokenType::Keyword(kw) = parser.peek().token_type {
        if kw.is_value_type() {
            return var_declaration(parser);
        }
        match kw {
            Kw::Func => return function_declaration(parser),
            Kw::If => return if_statement(parser),
            Kw::Loop => return loop_statement(parser),
            Kw::Return => return return_statement(parser),
            Kw::Print => return print_statement(parser),
            // Reserved keywords without grammar rules fall through and hit
            // the expression parser's error path.
            _ => {}
        }
    }
    expression_statement(parser)
}

fn var_declaration(parser: &mut Parser) -> DiagResult<Stmt> {
    let ty = parser.advance();
    let name = parser.consume(TokenType::Identifier, "expected variable name")?;
    let initializer = if parser.match_token(TokenType::Equal) {
        Some(parser.expression()?)
    } else {
        None
    };
    parser.match_token(TokenType::Semicolon);
    Ok(Stmt::VarDecl {
        ty,
        name,
        initializer,
    })
}

fn function_declaration(parser: &mut Parser) -> DiagResult<Stmt> {
    parser.advance();
    let name = parser.consume(TokenType::Identifier, "expected function name")?;
    parser.consume(TokenType::LeftParen, "expected '(' after function name")?;

    let mut params = Vec::new();
    while !parser.check(TokenType::RightParen) {
        // The parameter list ends at the first token that is not a value
        // type keyword; that token must then be the ')'.
        let is_type = matches!(
            parser.peek().token_type,
            TokenType::Keyword(kw) if kw.is_value_type()
        );
        if !is_type {
            break;
        }
        let ty = parser.advance();
        let param_name = parser.consume(TokenType::Identifier, "expected parameter name")?;
        params.push(Param {
            ty,
            name: param_name,
        });
        parser.match_token(TokenType::Comma);
    }
    parser.consume(TokenType::RightParen, "expected ')' after parameters")?;

    // The clause takes the next token verbatim; the code generator decides
    // whether it maps to a C type.
    let return_type = if parser.check_keyword(Kw::ReturnType) {
        parser.advance();
        Some(parser.advance())
    } else {
        None
    };

    parser.consume(TokenType::LeftBrace, "expected '{' before function body")?;
    let body = block(parser)?;
    Ok(Stmt::Function {
        name,
        params,
        return_type,
        body,
    })
}

fn if_statement(parser: &mut Parser) -> DiagResult<Stmt> {
    parser.advance();
    // Conditions live in bracket punctuation, not parentheses.
    parser.consume(TokenType::LeftBracket, "expected '[' before condition")?;
    let condition = parser.expression()?;
    parser.consume(TokenType::RightBracket, "expected ']' after condition")?;
    parser.consume(TokenType::LeftBrace, "expected '{' before branch body")?;
    let then_branch = block(parser)?;

    let else_branch = if parser.check_keyword(Kw::Else) {
        parser.advance();
        parser.consume(TokenType::LeftBrace, "expected '{' after else keyword")?;
        Some(block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If {
        condition,
        then_branch,
        else_branch,
    })
}

fn loop_statement(parser: &mut Parser) -> DiagResult<Stmt> {
    parser.advance();
    parser.consume(TokenType::LeftBracket, "expected '[' before repeat count")?;
    let count = parser.expression()?;
    parser.consume(TokenType::RightBracket, "expected ']' after repeat count")?;
    parser.consume(TokenType::LeftBrace, "expected '{' before loop body")?;
    let body = block(parser)?;
    Ok(Stmt::Loop { count, body })
}

fn return_statement(parser: &mut Parser) -> DiagResult<Stmt> {
    parser.advance();
    let value = if parser.check(TokenType::Semicolon) {
        None
    } else {
        Some(parser.expression()?)
    };
    parser.match_token(TokenType::Semicolon);
    Ok(Stmt::Return { value })
}

fn print_statement(parser: &mut Parser) -> DiagResult<Stmt> {
    parser.advance();
    let value = parser.expression()?;
    parser.match_token(TokenType::Semicolon);
    Ok(Stmt::Print { value })
}

fn expression_statement(parser: &mut Parser) -> DiagResult<Stmt> {
    let expr = parser.expression()?;
    parser.match_token(TokenType::Semicolon);
    Ok(Stmt::Expression(expr))
}

fn block(parser: &mut Parser) -> DiagResult<Vec<Stmt>> {
    let mut statements = Vec::new();
    while !parser.check(TokenType::RightBrace) && !parser.is_at_end() {
        statements.push(statement(parser)?);
    }
    parser.consume(TokenType::RightBrace, "expected '}' after block")?;
    Ok(statements)
}
