//! Deep-equality oracle for ReQL driver test suites.
//!
//! The heart of the crate is [`matcher::compare`], which decides whether a
//! query result matches the value a test case expects. Everything else turns
//! recorded suites into calls to it and reports the outcome.

pub mod config;
pub mod display;
pub mod errors;
pub mod literal;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod report;
pub mod runner;

pub use errors::{ConfigError, LiteralError, MatchError};
pub use matcher::{compare, matches};
pub use model::{ErrorValue, RaisedError, Value};
