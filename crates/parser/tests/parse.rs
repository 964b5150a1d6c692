use cnsh_core::ast::{Expr, Program, Stmt};
use cnsh_core::{Kw, TokenType};
use cnsh_diagnostics::{DiagResult, DiagnosticKind};
use cnsh_lexer::Lexer;
use cnsh_parser::Parser;

fn parse(source: &str) -> DiagResult<Program> {
    let tokens = Lexer::new(source).scan_tokens();
    Parser::new(tokens).parse()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let program = parse("2 + 3 * 4").expect("parse");
    assert_eq!(program.len(), 1);
    let Stmt::Expression(Expr::Binary {
        left,
        operator,
        right,
    }) = &program[0]
    else {
        panic!("expected binary expression statement");
    };
    assert_eq!(operator.text, "+");
    assert_eq!(**left, Expr::Number("2".to_string()));
    let Expr::Binary {
        left: mul_left,
        operator: mul_op,
        right: mul_right,
    } = &**right
    else {
        panic!("multiplication must nest as the right operand");
    };
    assert_eq!(mul_op.text, "*");
    assert_eq!(**mul_left, Expr::Number("3".to_string()));
    assert_eq!(**mul_right, Expr::Number("4".to_string()));
}

#[test]
fn assignment_is_right_associative() {
    let program = parse("a = b = 1").expect("parse");
    let Stmt::Expression(Expr::Assign { target, value }) = &program[0] else {
        panic!("expected assignment");
    };
    assert!(matches!(**target, Expr::Variable { .. }));
    assert!(matches!(**value, Expr::Assign { .. }));
}

#[test]
fn var_declaration_with_and_without_initializer() {
    let program = parse("整数 x = 1; 小数 y").expect("parse");
    assert_eq!(program.len(), 2);
    let Stmt::VarDecl {
        ty,
        name,
        initializer,
    } = &program[0]
    else {
        panic!("expected declaration");
    };
    assert_eq!(ty.token_type, TokenType::Keyword(Kw::Int));
    assert_eq!(name.text, "x");
    assert!(initializer.is_some());
    let Stmt::VarDecl { initializer, .. } = &program[1] else {
        panic!("expected declaration");
    };
    assert!(initializer.is_none());
}

#[test]
fn statement_separators_are_optional() {
    let program = parse("整数 x = 1 整数 y = 2").expect("parse");
    assert_eq!(program.len(), 2);
}

#[test]
fn function_declaration_full_form() {
    let program = parse("函数 加(整数 a, 整数 b) 返回类型 整数 { 返回 a + b; }").expect("parse");
    let Stmt::Function {
        name,
        params,
        return_type,
        body,
    } = &program[0]
    else {
        panic!("expected function");
    };
    assert_eq!(name.text, "加");
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].ty.token_type, TokenType::Keyword(Kw::Int));
    assert_eq!(params[1].name.text, "b");
    let ret = return_type.as_ref().expect("return type");
    assert_eq!(ret.token_type, TokenType::Keyword(Kw::Int));
    assert_eq!(body.len(), 1);
    assert!(matches!(body[0], Stmt::Return { value: Some(_) }));
}

#[test]
fn omitted_return_type_defaults_to_none() {
    let program = parse("函数 f() { }").expect("parse");
    let Stmt::Function { return_type, .. } = &program[0] else {
        panic!("expected function");
    };
    assert!(return_type.is_none());
}

#[test]
fn parameter_commas_are_optional() {
    let program = parse("函数 f(整数 a 整数 b) { }").expect("parse");
    let Stmt::Function { params, .. } = &program[0] else {
        panic!("expected function");
    };
    assert_eq!(params.len(), 2);
}

#[test]
fn if_condition_uses_brackets_not_parens() {
    let program = parse("如果 [真] { 打印 1 } 否则 { 打印 2 }").expect("parse");
    let Stmt::If {
        condition,
        then_branch,
        else_branch,
    } = &program[0]
    else {
        panic!("expected if");
    };
    assert_eq!(*condition, Expr::Bool(true));
    assert_eq!(then_branch.len(), 1);
    assert_eq!(else_branch.as_ref().expect("else branch").len(), 1);

    let err = parse("如果 (真) { }").expect_err("parens must be rejected");
    assert_eq!(err.kind, DiagnosticKind::Parse);
    assert!(err.message.contains("expected '['"));
}

#[test]
fn fullwidth_brackets_accepted_for_conditions() {
    assert!(parse("如果 【x > 1】 { }").is_ok());
}

#[test]
fn loop_takes_a_repeat_count() {
    let program = parse("循环 [3] { 打印 1 }").expect("parse");
    let Stmt::Loop { count, body } = &program[0] else {
        panic!("expected loop");
    };
    assert_eq!(*count, Expr::Number("3".to_string()));
    assert_eq!(body.len(), 1);
}

#[test]
fn return_without_value_needs_separator() {
    let program = parse("函数 f() { 返回; }").expect("parse");
    let Stmt::Function { body, .. } = &program[0] else {
        panic!("expected function");
    };
    assert!(matches!(body[0], Stmt::Return { value: None }));
}

#[test]
fn call_arguments_allow_loose_commas() {
    for source in ["加(1, 2)", "加(1 2)"] {
        let program = parse(source).expect(source);
        let Stmt::Expression(Expr::Call { arguments, .. }) = &program[0] else {
            panic!("expected call");
        };
        assert_eq!(arguments.len(), 2, "source: {}", source);
    }
}

#[test]
fn identifier_without_parens_stays_a_variable() {
    let program = parse("x").expect("parse");
    assert!(matches!(
        program[0],
        Stmt::Expression(Expr::Variable { .. })
    ));
}

#[test]
fn string_literal_keeps_decoded_value() {
    let program = parse("打印 \"a\\nb\"").expect("parse");
    let Stmt::Print { value } = &program[0] else {
        panic!("expected print");
    };
    assert_eq!(*value, Expr::Str("a\nb".to_string()));
}

#[test]
fn syntax_error_reports_line_and_actual_token() {
    let err = parse("整数\n整数 1").expect_err("should fail");
    assert_eq!(err.kind, DiagnosticKind::Parse);
    // The second type keyword is the offending token, on line 2.
    assert_eq!(err.span.line, 2);
    assert!(err.message.contains("expected variable name"));
}

#[test]
fn reserved_keywords_have_no_productions() {
    for source in ["跳出", "当 [1] { }", "类 点 { }", "分配 x"] {
        let err = parse(source).expect_err(source);
        assert!(err.message.contains("unexpected token"), "source: {}", source);
    }
}

#[test]
fn unknown_token_is_rejected_here_not_in_the_lexer() {
    let err = parse("整数 x = @").expect_err("should fail");
    assert_eq!(err.kind, DiagnosticKind::Parse);
    assert!(err.message.contains("Unknown"));
}

#[test]
fn unary_operators_nest() {
    let program = parse("-!x").expect("parse");
    let Stmt::Expression(Expr::Unary { operator, operand }) = &program[0] else {
        panic!("expected unary");
    };
    assert_eq!(operator.text, "-");
    assert!(matches!(**operand, Expr::Unary { .. }));
}

#[test]
fn grouping_overrides_precedence() {
    let program = parse("(2 + 3) * 4").expect("parse");
    let Stmt::Expression(Expr::Binary { left, operator, .. }) = &program[0] else {
        panic!("expected binary");
    };
    assert_eq!(operator.text, "*");
    assert!(matches!(**left, Expr::Binary { .. }));
}
