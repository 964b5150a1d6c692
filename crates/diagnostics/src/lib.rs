#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub fn dummy() -> Self {
        Self { line: 0, col: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    Parse,
    Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}

pub type DiagResult<T> = Result<T, Diagnostic>;

/// Renders a diagnostic against its source text: a one-line summary, the
/// offending source line, and a caret under the reported column.
pub fn format_diagnostic(source: &str, d: &Diagnostic) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    let kind_str = match d.kind {
        DiagnosticKind::Parse => "syntax",
        DiagnosticKind::Type => "type",
    };
    let _ = writeln!(
        out,
        "{} error ({}:{}): {}",
        kind_str, d.span.line, d.span.col, d.message
    );
    let line_idx = d.span.line.saturating_sub(1);
    if let Some(line_text) = source.lines().nth(line_idx) {
        let _ = writeln!(out, "{}", line_text);
        let col = if d.span.col == 0 { 1 } else { d.span.col };
        let caret_line: String = (1..col).map(|_| ' ').collect::<String>() + "^";
        let _ = writeln!(out, "{}", caret_line);
    }
    out
}
