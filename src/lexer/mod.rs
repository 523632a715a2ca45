//! Lexical analysis.
//!
//! This module contains the lexer (tokenizer) that turns source text into a
//! sequence of tokens. It handles:
//!
//! - Keywords (matched case-insensitively), identifiers and integer literals
//! - String literals and brace-delimited comments
//! - The `:=` assignment operator and single-character symbols
//! - Line tracking and line-oriented error recovery

pub mod lexer;
pub mod tokens;
