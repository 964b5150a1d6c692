use cnsh_core::{Token, TokenType};

use crate::keywords::keyword;

/// Converts CNSH source text into a flat token stream.
///
/// Tokenization is total: it never fails on any input. Characters the
/// lexer does not recognize become single-character `Unknown` tokens and
/// are left for the parser to reject with a proper diagnostic.
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            tokens: Vec::new(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }
        let (line, col) = (self.line, self.col);
        self.push(TokenType::Eof, "", line, col);
        self.tokens.clone()
    }

    fn scan_token(&mut self) {
        let (line, col) = (self.line, self.col);
        let c = self.advance();
        match c {
            ' ' | '\t' | '\r' | '\n' => {}
            '#' => self.skip_comment(),
            '"' | '\'' | '「' | '『' => {
                let value = self.read_string(c);
                self.push(TokenType::Str, value, line, col);
            }
            '(' => self.push(TokenType::LeftParen, c, line, col),
            ')' => self.push(TokenType::RightParen, c, line, col),
            '{' => self.push(TokenType::LeftBrace, c, line, col),
            '}' => self.push(TokenType::RightBrace, c, line, col),
            // ASCII and fullwidth brackets are the same token kind.
            '[' | '【' => self.push(TokenType::LeftBracket, c, line, col),
            ']' | '】' => self.push(TokenType::RightBracket, c, line, col),
            ';' => self.push(TokenType::Semicolon, c, line, col),
            ',' => self.push(TokenType::Comma, c, line, col),
            '.' => self.push(TokenType::Dot, c, line, col),
            '+' => self.push(TokenType::Plus, c, line, col),
            '-' => self.push(TokenType::Minus, c, line, col),
            '*' => self.push(TokenType::Star, c, line, col),
            '/' => self.push(TokenType::Slash, c, line, col),
            '%' => self.push(TokenType::Percent, c, line, col),
            '=' => {
                if self.match_char('=') {
                    self.push(TokenType::EqualEqual, "==", line, col);
                } else {
                    self.push(TokenType::Equal, "=", line, col);
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.push(TokenType::BangEqual, "!=", line, col);
                } else {
                    self.push(TokenType::Bang, "!", line, col);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.push(TokenType::GreaterEqual, ">=", line, col);
                } else {
                    self.push(TokenType::Greater, ">", line, col);
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.push(TokenType::LessEqual, "<=", line, col);
                } else {
                    self.push(TokenType::Less, "<", line, col);
                }
            }
            // `&` and `|` only exist as halves of `&&` / `||`.
            '&' => {
                if self.match_char('&') {
                    self.push(TokenType::AndAnd, "&&", line, col);
                } else {
                    self.push(TokenType::Unknown, "&", line, col);
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.push(TokenType::OrOr, "||", line, col);
                } else {
                    self.push(TokenType::Unknown, "|", line, col);
                }
            }
            c if c.is_ascii_digit() => {
                let value = self.read_number(c);
                self.push(TokenType::Number, value, line, col);
            }
            c if is_ident_start(c) => {
                let text = self.read_identifier(c);
                let token_type = match keyword(&text) {
                    Some(kw) => TokenType::Keyword(kw),
                    None => TokenType::Identifier,
                };
                self.push(token_type, text, line, col);
            }
            _ => self.push(TokenType::Unknown, c, line, col),
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.current_char() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Reads a string opened by `open`, decoding escapes as it goes. If the
    /// input ends before the matching close glyph, whatever accumulated is
    /// returned silently (lenient by design).
    fn read_string(&mut self, open: char) -> String {
        let close = match open {
            '「' => '」',
            '『' => '』',
            _ => open,
        };
        let mut value = String::new();
        while let Some(c) = self.current_char() {
            if c == close {
                self.advance();
                break;
            }
            if c == '\\' {
                self.advance();
                if let Some(escaped) = self.current_char() {
                    value.push(decode_escape(escaped));
                    self.advance();
                }
            } else {
                value.push(c);
                self.advance();
            }
        }
        value
    }

    /// Maximal run of digits with at most one decimal point; a second point
    /// ends the literal without being consumed. No sign handling.
    fn read_number(&mut self, first: char) -> String {
        let mut text = String::new();
        text.push(first);
        let mut has_decimal = false;
        while let Some(c) = self.current_char() {
            if c.is_ascii_digit() {
                text.push(c);
                self.advance();
            } else if c == '.' && !has_decimal {
                has_decimal = true;
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_identifier(&mut self, first: char) -> String {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.current_char() {
            if !is_ident_continue(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    fn current_char(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.pos];
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, token_type: TokenType, text: impl Into<String>, line: usize, col: usize) {
        self.tokens.push(Token::new(token_type, text, line, col));
    }
}

fn decode_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        // Anything else after a backslash is copied through literally.
        _ => c,
    }
}

fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

fn is_ident_start(c: char) -> bool {
    is_han(c) || c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    is_han(c) || c.is_ascii_alphanumeric() || c == '_'
}
