//! Recursive-descent parser over the literal token stream.

use std::collections::BTreeMap;

use super::lexer::{Token, TokenKind};
use crate::errors::LiteralError;
use crate::model::{ErrorValue, Value};

/// Same nesting limit as `serde_json`, so expected values nest no deeper
/// than recorded results can.
const MAX_DEPTH: usize = 128;

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses one value and requires the input to end after it.
    pub(crate) fn parse_document(mut self) -> Result<Value, LiteralError> {
        let value = self.parse_value()?;
        if !matches!(self.current().kind, TokenKind::Eof) {
            return Err(self.error("unexpected input after value"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, LiteralError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let value = self.parse_nested();
        self.depth -= 1;
        value
    }

    fn parse_nested(&mut self) -> Result<Value, LiteralError> {
        let token = self.bump();
        match token.kind {
            TokenKind::Int(i) => Ok(Value::Int(i)),
            TokenKind::Float(f) => Ok(Value::Float(f)),
            TokenKind::Str(s) => Ok(Value::Text(s)),
            TokenKind::LBracket => Ok(Value::List(self.parse_items(TokenKind::RBracket)?)),
            TokenKind::LBrace => self.parse_map(),
            TokenKind::Ident(name) => match name.as_str() {
                "null" | "nil" | "None" => Ok(Value::Null),
                "true" | "True" => Ok(Value::Bool(true)),
                "false" | "False" => Ok(Value::Bool(false)),
                _ if self.current().kind == TokenKind::LParen => {
                    self.bump();
                    let args = self.parse_items(TokenKind::RParen)?;
                    build_call(&name, args, token.span.start)
                }
                _ => Err(LiteralError::new(
                    token.span.start,
                    format!("unknown identifier `{}`", name),
                )),
            },
            TokenKind::Eof => Err(LiteralError::new(token.span.start, "expected a value")),
            other => Err(LiteralError::new(
                token.span.start,
                format!("unexpected {}", describe(&other)),
            )),
        }
    }

    /// Comma-separated values up to `close`; a trailing comma is allowed.
    fn parse_items(&mut self, close: TokenKind) -> Result<Vec<Value>, LiteralError> {
        let mut items = Vec::new();
        loop {
            if self.current().kind == close {
                self.bump();
                return Ok(items);
            }
            items.push(self.parse_value()?);
            if self.current().kind == TokenKind::Comma {
                self.bump();
            } else if self.current().kind != close {
                return Err(self.error(&format!("expected `,` or {}", describe(&close))));
            }
        }
    }

    fn parse_map(&mut self) -> Result<Value, LiteralError> {
        let mut entries = BTreeMap::new();
        loop {
            if self.current().kind == TokenKind::RBrace {
                self.bump();
                return Ok(Value::Map(entries));
            }
            let key = self.parse_key()?;
            match self.current().kind {
                TokenKind::Colon | TokenKind::FatArrow => {
                    self.bump();
                }
                _ => return Err(self.error("expected `:` or `=>` after key")),
            }
            let value = self.parse_value()?;
            entries.insert(key, value);
            if self.current().kind == TokenKind::Comma {
                self.bump();
            } else if self.current().kind != TokenKind::RBrace {
                return Err(self.error("expected `,` or `}`"));
            }
        }
    }

    /// Keys are normalized to strings: `"a"`, `a`, `:a` and `1` all work.
    fn parse_key(&mut self) -> Result<String, LiteralError> {
        let token = self.bump();
        match token.kind {
            TokenKind::Str(s) | TokenKind::Ident(s) => Ok(s),
            TokenKind::Int(i) => Ok(i.to_string()),
            TokenKind::Colon => match self.bump().kind {
                TokenKind::Ident(s) => Ok(s),
                _ => Err(LiteralError::new(token.span.start, "expected a symbol name")),
            },
            other => Err(LiteralError::new(
                token.span.start,
                format!("expected a map key, found {}", describe(&other)),
            )),
        }
    }

    fn current(&self) -> &Token {
        // tokenize() always ends the stream with Eof, and bump() never moves past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn error(&self, message: &str) -> LiteralError {
        LiteralError::new(self.current().span.start, message)
    }
}

fn build_call(name: &str, args: Vec<Value>, offset: usize) -> Result<Value, LiteralError> {
    let arity = |min: usize, max: usize| -> Result<(), LiteralError> {
        if args.len() < min || args.len() > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{} to {}", min, max)
            };
            return Err(LiteralError::new(
                offset,
                format!("{}() takes {} argument(s), got {}", name, expected, args.len()),
            ));
        }
        Ok(())
    };

    match name {
        "bag" => {
            arity(1, 1)?;
            match args.into_iter().next() {
                Some(Value::List(items)) | Some(Value::Bag(items)) => Ok(Value::Bag(items)),
                _ => Err(LiteralError::new(offset, "bag() takes a list")),
            }
        }
        "err" | "err_regex" => {
            arity(1, 3)?;
            let regex = name == "err_regex";
            let mut args = args.into_iter();
            let kind = match args.next() {
                Some(Value::Text(kind)) => kind,
                _ => return Err(LiteralError::new(offset, format!("{}() kind must be a string", name))),
            };
            // A third argument (backtrace frames) is accepted and not compared.
            let err = match (args.next(), regex) {
                (Some(Value::Text(message)), false) => ErrorValue::new(kind, message),
                (Some(Value::Text(message)), true) => ErrorValue::regex(kind, message),
                (None | Some(Value::Null), false) => ErrorValue::any_message(&kind),
                (None | Some(Value::Null), true) => ErrorValue::regex(kind, ""),
                _ => {
                    return Err(LiteralError::new(
                        offset,
                        format!("{}() message must be a string", name),
                    ))
                }
            };
            Ok(Value::Error(err))
        }
        "uuid" => {
            arity(0, 0)?;
            Ok(Value::AnyUuid)
        }
        "int_cmp" => {
            arity(1, 1)?;
            match args[0] {
                Value::Int(n) => Ok(Value::IntTag(n)),
                _ => Err(LiteralError::new(offset, "int_cmp() takes an integer")),
            }
        }
        "float_cmp" => {
            arity(1, 1)?;
            match args[0] {
                Value::Float(n) => Ok(Value::FloatTag(n)),
                Value::Int(n) => Ok(Value::FloatTag(n as f64)),
                _ => Err(LiteralError::new(offset, "float_cmp() takes a number")),
            }
        }
        "arrlen" => {
            arity(1, 2)?;
            let mut args = args.into_iter();
            let len = match args.next() {
                Some(Value::Int(n)) if n >= 0 => n as usize,
                _ => {
                    return Err(LiteralError::new(
                        offset,
                        "arrlen() length must be a non-negative integer",
                    ))
                }
            };
            Ok(Value::ArrLen {
                len,
                item: args.next().map(Box::new),
            })
        }
        _ => Err(LiteralError::new(
            offset,
            format!("unknown function `{}`", name),
        )),
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::LParen => "`(`".into(),
        TokenKind::RParen => "`)`".into(),
        TokenKind::LBracket => "`[`".into(),
        TokenKind::RBracket => "`]`".into(),
        TokenKind::LBrace => "`{`".into(),
        TokenKind::RBrace => "`}`".into(),
        TokenKind::Comma => "`,`".into(),
        TokenKind::Colon => "`:`".into(),
        TokenKind::FatArrow => "`=>`".into(),
        TokenKind::Int(i) => format!("integer {}", i),
        TokenKind::Float(f) => format!("float {:?}", f),
        TokenKind::Str(s) => format!("string {:?}", s),
        TokenKind::Ident(s) => format!("`{}`", s),
        TokenKind::Eof => "end of input".into(),
    }
}
