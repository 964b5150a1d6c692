use cnsh_core::ast::{Expr, Program, Stmt};
use cnsh_core::{Kw, Token, TokenType};
use cnsh_diagnostics::{DiagResult, Diagnostic, DiagnosticKind, Span};

/// Reserved name of the user-defined entry function. The emitted C `main`
/// calls it unconditionally; a program without it fails at link time, not
/// here.
pub const MAIN_FUNCTION: &str = "主函数";

const HEADER: &[&str] = &[
    "// Generated by the CNSH compiler v0.1.0",
    "// Edit the .cnsh source instead of this file.",
];

const INCLUDES: &[&str] = &[
    "#include <stdio.h>",
    "#include <stdlib.h>",
    "#include <string.h>",
    "#include <stdbool.h>",
];

/// Walks a parsed program and emits C source text. Assumes a well-formed
/// tree; the only failure mode is a declared type with no C mapping.
pub struct CGenerator {
    indent: usize,
    lines: Vec<String>,
}

impl CGenerator {
    pub fn new() -> Self {
        CGenerator {
            indent: 0,
            lines: Vec::new(),
        }
    }

    pub fn generate(mut self, program: &Program) -> DiagResult<String> {
        for line in HEADER {
            self.lines.push((*line).to_string());
        }
        self.lines.push(String::new());
        for line in INCLUDES {
            self.lines.push((*line).to_string());
        }
        self.lines.push(String::new());

        for stmt in program {
            self.gen_statement(stmt)?;
        }

        self.lines.push(String::new());
        self.lines.push("int main() {".to_string());
        self.lines.push(format!("    {}();", MAIN_FUNCTION));
        self.lines.push("    return 0;".to_string());
        self.lines.push("}".to_string());

        let mut out = self.lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn gen_statement(&mut self, stmt: &Stmt) -> DiagResult<()> {
        match stmt {
            Stmt::VarDecl {
                ty,
                name,
                initializer,
            } => {
                let c_ty = c_type(ty)?;
                let value = match initializer {
                    Some(expr) => gen_expression(expr),
                    // Uninitialized declarations get the per-type zero
                    // value, never void.
                    None => zero_value(c_ty).to_string(),
                };
                self.emit(format!("{} {} = {};", c_ty, name.text, value));
            }
            Stmt::Function {
                name,
                params,
                return_type,
                body,
            } => {
                let ret = match return_type {
                    Some(ty) => c_type(ty)?,
                    None => "void",
                };
                let mut sig = Vec::new();
                for p in params {
                    sig.push(format!("{} {}", c_type(&p.ty)?, p.name.text));
                }
                self.emit(format!("{} {}({}) {{", ret, name.text, sig.join(", ")));
                self.indent += 1;
                for s in body {
                    self.gen_statement(s)?;
                }
                self.indent -= 1;
                self.emit("}");
                self.emit("");
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.emit(format!("if ({}) {{", gen_expression(condition)));
                self.indent += 1;
                for s in then_branch {
                    self.gen_statement(s)?;
                }
                self.indent -= 1;
                if let Some(else_branch) = else_branch {
                    self.emit("} else {");
                    self.indent += 1;
                    for s in else_branch {
                        self.gen_statement(s)?;
                    }
                    self.indent -= 1;
                }
                self.emit("}");
            }
            Stmt::Loop { count, body } => {
                // Counted loop over a compiler-owned induction name,
                // exclusive upper bound.
                self.emit(format!(
                    "for (int __i = 0; __i < {}; __i++) {{",
                    gen_expression(count)
                ));
                self.indent += 1;
                for s in body {
                    self.gen_statement(s)?;
                }
                self.indent -= 1;
                self.emit("}");
            }
            Stmt::Return { value } => match value {
                Some(expr) => self.emit(format!("return {};", gen_expression(expr))),
                None => self.emit("return;"),
            },
            Stmt::Print { value } => {
                let code = gen_expression(value);
                // The format specifier follows the literal AST shape of the
                // printed expression, not any declared type: identifiers
                // and computed expressions always print as %d.
                match value {
                    Expr::Str(_) => self.emit(format!("printf(\"%s\\n\", {});", code)),
                    Expr::Number(_) => {
                        self.emit(format!("printf(\"%g\\n\", (double){});", code))
                    }
                    _ => self.emit(format!("printf(\"%d\\n\", {});", code)),
                }
            }
            Stmt::Expression(expr) => {
                self.emit(format!("{};", gen_expression(expr)));
            }
        }
        Ok(())
    }

    fn emit(&mut self, line: impl Into<String>) {
        let mut s = "    ".repeat(self.indent);
        s.push_str(&line.into());
        self.lines.push(s);
    }
}

impl Default for CGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed type-name mapping. Anything outside the table is rejected;
/// the parser only accepts type keywords in declarations, but the return
/// type clause captures an arbitrary token, so this is reachable.
fn c_type(ty: &Token) -> DiagResult<&'static str> {
    if let TokenType::Keyword(kw) = ty.token_type {
        let mapped = match kw {
            Kw::Int => Some("int"),
            Kw::Float => Some("double"),
            Kw::Text => Some("char*"),
            Kw::Bool => Some("bool"),
            Kw::Void => Some("void"),
            _ => None,
        };
        if let Some(c_ty) = mapped {
            return Ok(c_ty);
        }
    }
    Err(Diagnostic::new(
        DiagnosticKind::Type,
        format!("no C mapping for type '{}'", ty.text),
        Span::new(ty.line, ty.col),
    ))
}

fn zero_value(c_ty: &str) -> &'static str {
    match c_ty {
        "int" => "0",
        "double" => "0.0",
        "char*" => "NULL",
        "bool" => "false",
        _ => "",
    }
}

fn gen_expression(expr: &Expr) -> String {
    match expr {
        Expr::Number(text) => text.clone(),
        // Decoded text goes out between straight double quotes with no
        // re-escaping (known edge case for embedded quotes/backslashes).
        Expr::Str(value) => format!("\"{}\"", value),
        Expr::Bool(true) => "true".to_string(),
        Expr::Bool(false) => "false".to_string(),
        Expr::Null => "NULL".to_string(),
        Expr::Variable { name } => name.text.clone(),
        Expr::Binary {
            left,
            operator,
            right,
        } => format!(
            "({} {} {})",
            gen_expression(left),
            operator.text,
            gen_expression(right)
        ),
        Expr::Unary { operator, operand } => {
            format!("({}{})", operator.text, gen_expression(operand))
        }
        Expr::Assign { target, value } => {
            format!("{} = {}", gen_expression(target), gen_expression(value))
        }
        Expr::Call { name, arguments } => {
            let args: Vec<String> = arguments.iter().map(gen_expression).collect();
            format!("{}({})", name.text, args.join(", "))
        }
    }
}
