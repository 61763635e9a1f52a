//! Expected-value literals as written in test definitions.
//!
//! The syntax is the common subset of the Ruby and Python drivers' test
//! vocabulary: JSON-like data (`nil`/`None`, `True`, single quotes, `=>` and
//! symbol keys are accepted too) plus the matcher constructors
//!
//! | literal                        | value                                  |
//! |--------------------------------|----------------------------------------|
//! | `bag([..])`                    | [`Value::Bag`]                         |
//! | `err(kind[, msg[, frames]])`   | [`Value::Error`], any message if none  |
//! | `err_regex(kind[, msg[, ..]])` | regex [`Value::Error`]                 |
//! | `uuid()`                       | [`Value::AnyUuid`]                     |
//! | `int_cmp(n)` / `float_cmp(n)`  | [`Value::IntTag`] / [`Value::FloatTag`]|
//! | `arrlen(n[, item])`            | [`Value::ArrLen`]                      |
//!
//! An empty literal means the query must simply not fail ([`Value::NoError`]).

mod lexer;
mod parser;

use crate::errors::LiteralError;
use crate::model::Value;

pub fn parse_expected(source: &str) -> Result<Value, LiteralError> {
    if source.trim().is_empty() {
        return Ok(Value::NoError);
    }
    let tokens = lexer::Lexer::new(source).tokenize()?;
    parser::Parser::new(tokens).parse_document()
}
