//! Sequences the pipeline: content gate, lexer, parser, code generator,
//! file write. Every failure is converted into a uniform outcome; nothing
//! is retried.

use std::fs;
use std::path::{Path, PathBuf};

use cnsh_codegen::CGenerator;
use cnsh_diagnostics::format_diagnostic;
use cnsh_lexer::Lexer;
use cnsh_parser::Parser;
use serde::Serialize;

use crate::audit::{self, AuditLevel};

#[derive(Debug, Serialize)]
pub struct CompileOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompileOutcome {
    fn ok(output_path: PathBuf) -> Self {
        CompileOutcome {
            success: true,
            output_path: Some(output_path),
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        CompileOutcome {
            success: false,
            output_path: None,
            error: Some(error.into()),
        }
    }
}

pub fn compile(source: &str, source_path: &Path) -> CompileOutcome {
    let gate = audit::classify(source);
    match gate.level {
        AuditLevel::Red => {
            eprintln!("[audit] blocked: {}", gate.reason);
            return CompileOutcome::fail(format!("audit blocked: {}", gate.reason));
        }
        AuditLevel::Yellow => eprintln!("[audit] warning: {}", gate.reason),
        AuditLevel::Green => {}
    }

    let mut lexer = Lexer::new(source);
    let tokens = lexer.scan_tokens();
    eprintln!("[lex] {} tokens", tokens.len());

    let mut parser = Parser::new(tokens);
    let program = match parser.parse() {
        Ok(program) => program,
        Err(d) => {
            eprint!("{}", format_diagnostic(source, &d));
            return CompileOutcome::fail(d.message);
        }
    };
    eprintln!("[parse] {} top-level statements", program.len());

    let c_code = match CGenerator::new().generate(&program) {
        Ok(code) => code,
        Err(d) => {
            eprint!("{}", format_diagnostic(source, &d));
            return CompileOutcome::fail(d.message);
        }
    };

    let output_path = source_path.with_extension("c");
    if let Err(e) = fs::write(&output_path, &c_code) {
        return CompileOutcome::fail(format!("cannot write {}: {}", output_path.display(), e));
    }
    eprintln!("[codegen] wrote {}", output_path.display());
    eprintln!(
        "next: gcc {} -o {}",
        output_path.display(),
        output_path.with_extension("").display()
    );
    CompileOutcome::ok(output_path)
}
