// src/eval/token.rs

//! Lexer for the restricted configuration language.
//!
//! Newlines separate statements at bracket depth 0 and are ignored inside
//! brackets, so multi-line mapping literals read the way they did in the
//! original configuration format.

use crate::errors::EvalError;

/// One lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Tok {
    Ident(String),
    Str(String),
    Int(i64),
    Float(f64),
    True,
    False,
    Lambda,
    Eq,
    Colon,
    Comma,
    Minus,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Newline,
    Eof,
}

/// A token plus its 1-based source position, used for syntax errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub tok: Tok,
    pub line: u32,
    pub col: u32,
}

/// Lex `source` into a token stream terminated by a single `Eof` token.
pub fn lex(source: &str) -> Result<Vec<Token>, EvalError> {
    Lexer::new(source).run()
}

fn syntax(line: u32, col: u32, msg: impl Into<String>) -> EvalError {
    EvalError::Syntax {
        line,
        col,
        msg: msg.into(),
    }
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    col: u32,
    /// Current bracket nesting; newlines are only significant at depth 0.
    depth: u32,
    out: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            depth: 0,
            out: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn push(&mut self, tok: Tok, line: u32, col: u32) {
        self.out.push(Token { tok, line, col });
    }

    fn run(mut self) -> Result<Vec<Token>, EvalError> {
        while let Some(c) = self.peek() {
            let (line, col) = (self.line, self.col);
            match c {
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '\n' => {
                    self.bump();
                    if self.depth == 0 {
                        self.push(Tok::Newline, line, col);
                    }
                }
                '#' => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                '\'' | '"' => {
                    let s = self.string(c)?;
                    self.push(Tok::Str(s), line, col);
                }
                '0'..='9' => {
                    let tok = self.number()?;
                    self.push(tok, line, col);
                }
                c if c.is_ascii_alphabetic() || c == '_' => {
                    let tok = self.ident();
                    self.push(tok, line, col);
                }
                '=' => {
                    self.bump();
                    self.push(Tok::Eq, line, col);
                }
                ':' => {
                    self.bump();
                    self.push(Tok::Colon, line, col);
                }
                ',' => {
                    self.bump();
                    self.push(Tok::Comma, line, col);
                }
                '-' => {
                    self.bump();
                    self.push(Tok::Minus, line, col);
                }
                '{' => {
                    self.bump();
                    self.depth += 1;
                    self.push(Tok::LBrace, line, col);
                }
                '[' => {
                    self.bump();
                    self.depth += 1;
                    self.push(Tok::LBracket, line, col);
                }
                '(' => {
                    self.bump();
                    self.depth += 1;
                    self.push(Tok::LParen, line, col);
                }
                '}' => {
                    self.bump();
                    self.depth = self.depth.saturating_sub(1);
                    self.push(Tok::RBrace, line, col);
                }
                ']' => {
                    self.bump();
                    self.depth = self.depth.saturating_sub(1);
                    self.push(Tok::RBracket, line, col);
                }
                ')' => {
                    self.bump();
                    self.depth = self.depth.saturating_sub(1);
                    self.push(Tok::RParen, line, col);
                }
                other => {
                    return Err(syntax(
                        line,
                        col,
                        format!("unexpected character {other:?}"),
                    ));
                }
            }
        }

        let (line, col) = (self.line, self.col);
        self.push(Tok::Eof, line, col);
        Ok(self.out)
    }

    /// Lex a quoted string. Strings do not span lines.
    fn string(&mut self, quote: char) -> Result<String, EvalError> {
        let (start_line, start_col) = (self.line, self.col);
        self.bump(); // opening quote
        let mut s = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(syntax(start_line, start_col, "unterminated string literal"));
                }
                Some('\\') => {
                    let (line, col) = (self.line, self.col);
                    self.bump();
                    let escaped = match self.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('\\') => '\\',
                        Some('\'') => '\'',
                        Some('"') => '"',
                        Some(other) => {
                            return Err(syntax(
                                line,
                                col,
                                format!("unsupported escape sequence '\\{other}'"),
                            ));
                        }
                        None => {
                            return Err(syntax(
                                start_line,
                                start_col,
                                "unterminated string literal",
                            ));
                        }
                    };
                    s.push(escaped);
                }
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(s);
                }
                Some(c) => {
                    self.bump();
                    s.push(c);
                }
            }
        }
    }

    fn number(&mut self) -> Result<Tok, EvalError> {
        let (line, col) = (self.line, self.col);
        let mut digits = String::new();

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.bump();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            digits.push('.');
            self.bump();
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    digits.push(c);
                    self.bump();
                } else {
                    break;
                }
            }
            let value: f64 = digits
                .parse()
                .map_err(|_| syntax(line, col, "invalid float literal"))?;
            return Ok(Tok::Float(value));
        }

        if self.peek() == Some('.') {
            return Err(syntax(line, col, "expected digit after decimal point"));
        }

        let value: i64 = digits
            .parse()
            .map_err(|_| syntax(line, col, "integer literal too large"))?;
        Ok(Tok::Int(value))
    }

    fn ident(&mut self) -> Tok {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match name.as_str() {
            "lambda" => Tok::Lambda,
            "True" => Tok::True,
            "False" => Tok::False,
            _ => Tok::Ident(name),
        }
    }
}
