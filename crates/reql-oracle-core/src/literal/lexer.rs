//! Character scanner for expected-value literals.

use std::ops::Range;

use crate::errors::LiteralError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    /// `=>` in hash literals.
    FatArrow,
    Int(i64),
    Float(f64),
    Str(String),
    Ident(String),
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

pub(crate) struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source; the last token is always `Eof`.
    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>, LiteralError> {
        loop {
            self.skip_whitespace_and_comments();
            if self.is_at_end() {
                break;
            }
            self.scan_token()?;
        }
        let end = self.source.len();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            span: end..end,
        });
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LiteralError> {
        let start = self.pos;
        let ch = self.advance();
        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '=' if self.match_char('>') => TokenKind::FatArrow,
            '"' | '\'' => TokenKind::Str(self.scan_string(ch, start)?),
            '-' | '+' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number(start)?
            }
            c if c.is_ascii_digit() => self.scan_number(start)?,
            c if is_ident_start(c) => {
                while self.peek().is_some_and(is_ident_continue) {
                    self.advance();
                }
                TokenKind::Ident(self.source[start..self.pos].to_string())
            }
            other => {
                return Err(LiteralError::new(
                    start,
                    format!("unexpected character {:?}", other),
                ))
            }
        };
        self.tokens.push(Token {
            kind,
            span: start..self.pos,
        });
        Ok(())
    }

    fn scan_string(&mut self, quote: char, start: usize) -> Result<String, LiteralError> {
        let mut out = String::new();
        loop {
            if self.is_at_end() {
                return Err(LiteralError::new(start, "unterminated string"));
            }
            let ch = self.advance();
            if ch == quote {
                return Ok(out);
            }
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            if self.is_at_end() {
                return Err(LiteralError::new(start, "unterminated string"));
            }
            let escape_at = self.pos;
            match self.advance() {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                '0' => out.push('\0'),
                'u' => out.push(self.scan_unicode_escape(escape_at)?),
                // \\, \", \' and anything unknown stand for themselves.
                other => out.push(other),
            }
        }
    }

    fn scan_unicode_escape(&mut self, escape_at: usize) -> Result<char, LiteralError> {
        let digits = self.source.get(self.pos..self.pos + 4).unwrap_or("");
        let code = u32::from_str_radix(digits, 16)
            .ok()
            .filter(|_| digits.len() == 4)
            .and_then(char::from_u32)
            .ok_or_else(|| LiteralError::new(escape_at, "invalid \\u escape"))?;
        self.pos += 4;
        Ok(code)
    }

    fn scan_number(&mut self, start: usize) -> Result<TokenKind, LiteralError> {
        self.eat_digits();
        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            self.eat_digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let mark = self.pos;
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                self.eat_digits();
            } else {
                self.pos = mark;
            }
        }

        let text: String = self.source[start..self.pos]
            .chars()
            .filter(|c| *c != '_')
            .collect();
        if is_float {
            text.parse::<f64>()
                .map(TokenKind::Float)
                .map_err(|e| LiteralError::new(start, format!("invalid float {}: {}", text, e)))
        } else {
            text.parse::<i64>()
                .map(TokenKind::Int)
                .map_err(|e| LiteralError::new(start, format!("invalid integer {}: {}", text, e)))
        }
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '_') {
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '#' {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> char {
        let ch = self.peek().unwrap_or('\0');
        self.pos += ch.len_utf8();
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
