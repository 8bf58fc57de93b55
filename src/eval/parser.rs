// src/eval/parser.rs

//! Recursive-descent parser producing the statement list walked by the
//! interpreter.
//!
//! The grammar is deliberately tiny: a program is a sequence of
//! `NAME = value` assignments, and a value is a literal, a collection, a
//! helper call or a single-parameter lambda. Nesting depth is capped so
//! adversarial input cannot blow the parse stack.

use crate::errors::EvalError;
use crate::eval::token::{Tok, Token};

/// Maximum bracket/lambda nesting accepted by the parser.
pub const MAX_NESTING: usize = 64;

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Reference to a top-level binding or a lambda parameter.
    Name(String),
    List(Vec<Expr>),
    Dict(Vec<(Expr, Expr)>),
    Call { name: String, args: Vec<Expr> },
    Lambda { param: String, body: Box<Expr> },
}

/// One top-level assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub name: String,
    pub value: Expr,
}

/// Parse a lexed token stream into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, EvalError> {
    Parser { tokens, pos: 0 }.program()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // `lex` always terminates the stream with Eof, and `bump` never
        // advances past it.
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.tok != Tok::Eof {
            self.pos += 1;
        }
        token
    }

    fn err(&self, msg: impl Into<String>) -> EvalError {
        let token = self.peek();
        EvalError::Syntax {
            line: token.line,
            col: token.col,
            msg: msg.into(),
        }
    }

    fn skip_newlines(&mut self) {
        while self.peek().tok == Tok::Newline {
            self.pos += 1;
        }
    }

    fn program(mut self) -> Result<Vec<Stmt>, EvalError> {
        let mut stmts = Vec::new();

        loop {
            self.skip_newlines();
            if self.peek().tok == Tok::Eof {
                break;
            }

            let name = match self.peek().tok.clone() {
                Tok::Ident(name) => {
                    self.bump();
                    name
                }
                other => {
                    return Err(self.err(format!(
                        "expected a top-level assignment (NAME = value), found {}",
                        describe(&other)
                    )));
                }
            };

            if self.peek().tok != Tok::Eq {
                return Err(self.err(format!("expected '=' after name '{name}'")));
            }
            self.bump();

            let value = self.expr(0)?;

            match self.peek().tok.clone() {
                Tok::Newline => {
                    self.bump();
                }
                Tok::Eof => {}
                other => {
                    return Err(self.err(format!(
                        "unexpected {} after expression; one assignment per line",
                        describe(&other)
                    )));
                }
            }

            stmts.push(Stmt { name, value });
        }

        Ok(stmts)
    }

    fn expr(&mut self, depth: usize) -> Result<Expr, EvalError> {
        if depth > MAX_NESTING {
            return Err(self.err("expression nesting too deep"));
        }

        match self.peek().tok.clone() {
            Tok::Lambda => {
                self.bump();
                let param = match self.peek().tok.clone() {
                    Tok::Ident(param) => {
                        self.bump();
                        param
                    }
                    _ => return Err(self.err("expected parameter name after 'lambda'")),
                };
                if self.peek().tok != Tok::Colon {
                    return Err(self.err("expected ':' after lambda parameter"));
                }
                self.bump();
                let body = self.expr(depth + 1)?;
                Ok(Expr::Lambda {
                    param,
                    body: Box::new(body),
                })
            }
            Tok::Str(s) => {
                self.bump();
                Ok(Expr::Str(s))
            }
            Tok::Int(v) => {
                self.bump();
                Ok(Expr::Int(v))
            }
            Tok::Float(v) => {
                self.bump();
                Ok(Expr::Float(v))
            }
            Tok::True => {
                self.bump();
                Ok(Expr::Bool(true))
            }
            Tok::False => {
                self.bump();
                Ok(Expr::Bool(false))
            }
            Tok::Minus => {
                self.bump();
                match self.peek().tok.clone() {
                    Tok::Int(v) => {
                        self.bump();
                        Ok(Expr::Int(-v))
                    }
                    Tok::Float(v) => {
                        self.bump();
                        Ok(Expr::Float(-v))
                    }
                    _ => Err(self.err("'-' must be followed by a numeric literal")),
                }
            }
            Tok::Ident(name) => {
                self.bump();
                if self.peek().tok == Tok::LParen {
                    let args = self.call_args(depth)?;
                    Ok(Expr::Call { name, args })
                } else {
                    Ok(Expr::Name(name))
                }
            }
            Tok::LBracket => self.list(depth),
            Tok::LBrace => self.dict(depth),
            Tok::LParen => {
                self.bump();
                let inner = self.expr(depth + 1)?;
                if self.peek().tok != Tok::RParen {
                    return Err(self.err("expected ')'"));
                }
                self.bump();
                Ok(inner)
            }
            other => Err(self.err(format!("expected a value, found {}", describe(&other)))),
        }
    }

    fn call_args(&mut self, depth: usize) -> Result<Vec<Expr>, EvalError> {
        self.bump(); // '('
        let mut args = Vec::new();

        loop {
            if self.peek().tok == Tok::RParen {
                self.bump();
                return Ok(args);
            }
            args.push(self.expr(depth + 1)?);
            match self.peek().tok.clone() {
                Tok::Comma => {
                    self.bump();
                }
                Tok::RParen => {}
                other => {
                    return Err(self.err(format!(
                        "expected ',' or ')' in argument list, found {}",
                        describe(&other)
                    )));
                }
            }
        }
    }

    fn list(&mut self, depth: usize) -> Result<Expr, EvalError> {
        self.bump(); // '['
        let mut items = Vec::new();

        loop {
            if self.peek().tok == Tok::RBracket {
                self.bump();
                return Ok(Expr::List(items));
            }
            items.push(self.expr(depth + 1)?);
            match self.peek().tok.clone() {
                Tok::Comma => {
                    self.bump();
                }
                Tok::RBracket => {}
                other => {
                    return Err(self.err(format!(
                        "expected ',' or ']' in list, found {}",
                        describe(&other)
                    )));
                }
            }
        }
    }

    fn dict(&mut self, depth: usize) -> Result<Expr, EvalError> {
        self.bump(); // '{'
        let mut entries = Vec::new();

        loop {
            if self.peek().tok == Tok::RBrace {
                self.bump();
                return Ok(Expr::Dict(entries));
            }
            let key = self.expr(depth + 1)?;
            if self.peek().tok != Tok::Colon {
                return Err(self.err("expected ':' after mapping key"));
            }
            self.bump();
            let value = self.expr(depth + 1)?;
            entries.push((key, value));
            match self.peek().tok.clone() {
                Tok::Comma => {
                    self.bump();
                }
                Tok::RBrace => {}
                other => {
                    return Err(self.err(format!(
                        "expected ',' or '}}' in mapping, found {}",
                        describe(&other)
                    )));
                }
            }
        }
    }
}

fn describe(tok: &Tok) -> String {
    match tok {
        Tok::Ident(name) => format!("'{name}'"),
        Tok::Str(_) => "string literal".to_string(),
        Tok::Int(_) | Tok::Float(_) => "numeric literal".to_string(),
        Tok::True | Tok::False => "boolean literal".to_string(),
        Tok::Lambda => "'lambda'".to_string(),
        Tok::Eq => "'='".to_string(),
        Tok::Colon => "':'".to_string(),
        Tok::Comma => "','".to_string(),
        Tok::Minus => "'-'".to_string(),
        Tok::LBrace => "'{'".to_string(),
        Tok::RBrace => "'}'".to_string(),
        Tok::LBracket => "'['".to_string(),
        Tok::RBracket => "']'".to_string(),
        Tok::LParen => "'('".to_string(),
        Tok::RParen => "')'".to_string(),
        Tok::Newline => "end of line".to_string(),
        Tok::Eof => "end of input".to_string(),
    }
}
