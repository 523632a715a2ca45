//! Lexical diagnostics.
//!
//! Every error the lexer can report is line-scoped and non-fatal:
//!
//! - Unterminated string literals
//! - Unterminated comments
//! - Unexpected characters, including a `:` that does not start `:=`
//!
//! Errors are collected by the lexer and rendered as `Error on line N: ...`.

pub mod errors;

#[cfg(test)]
mod tests;
