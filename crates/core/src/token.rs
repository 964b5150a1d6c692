use std::fmt;

/// The closed keyword set of the CNSH language.
///
/// Several of these are reserved without any grammar rule behind them
/// (`While`, `Break`, `Continue`, `Class`, `Struct`, `DnaTrace`, `Audit`,
/// `Input`, `Alloc`, `Free`, `SafetyCheck`); they still lex as keywords, so
/// using one where an identifier is required is a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kw {
    Int,
    Float,
    Text,
    Bool,
    Void,
    If,
    Else,
    Loop,
    While,
    Return,
    Break,
    Continue,
    Func,
    Class,
    Struct,
    ReturnType,
    DnaTrace,
    Audit,
    Print,
    Input,
    True,
    False,
    Null,
    Alloc,
    Free,
    SafetyCheck,
}

impl Kw {
    /// The source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Kw::Int => "整数",
            Kw::Float => "小数",
            Kw::Text => "文本",
            Kw::Bool => "真假",
            Kw::Void => "空值",
            Kw::If => "如果",
            Kw::Else => "否则",
            Kw::Loop => "循环",
            Kw::While => "当",
            Kw::Return => "返回",
            Kw::Break => "跳出",
            Kw::Continue => "继续",
            Kw::Func => "函数",
            Kw::Class => "类",
            Kw::Struct => "结构",
            Kw::ReturnType => "返回类型",
            Kw::DnaTrace => "DNA追溯",
            Kw::Audit => "三色审计",
            Kw::Print => "打印",
            Kw::Input => "输入",
            Kw::True => "真",
            Kw::False => "假",
            Kw::Null => "空",
            Kw::Alloc => "分配",
            Kw::Free => "释放",
            Kw::SafetyCheck => "安全检查",
        }
    }

    /// True for the four declarable value types. `Void` is excluded: it is
    /// only legal as a return-type marker.
    pub fn is_value_type(self) -> bool {
        matches!(self, Kw::Int | Kw::Float | Kw::Text | Kw::Bool)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Keyword(Kw),
    Identifier,
    Number,
    Str,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqualEqual,
    BangEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    AndAnd,
    OrOr,
    Bang,
    Equal,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,
    Dot,
    Eof,
    Unknown,
}

/// One lexical token. `text` is the raw lexeme, except for string literals
/// where it holds the escape-decoded value (decoding happens once, in the
/// lexer). Number literals keep their text verbatim so the code generator
/// can emit them unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub text: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>, line: usize, col: usize) -> Self {
        Token {
            token_type,
            text: text.into(),
            line,
            col,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} '{}'", self.token_type, self.text)
    }
}
