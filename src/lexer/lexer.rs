use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOL_LOOKUP};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap();
}

type ScanResult = Result<String, ErrorImpl>;

/// Outcome of a single [`Lexer::next_token`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    Token(Token),
    /// A malformed lexeme was reported and the rest of its line skipped.
    Rejected,
    EndOfInput,
}

/// A scanning session over one complete source buffer.
///
/// `pos` is a byte offset that only moves forward; `line` is always the number
/// of newlines consumed so far plus one.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    errors: Vec<Error>,
    status: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            errors: vec![],
            status: true,
        }
    }

    /// Drains the input, keeping every successfully scanned token in order.
    pub fn get_tokens(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        loop {
            match self.next_token() {
                Scan::Token(token) => tokens.push(token),
                Scan::Rejected => continue,
                Scan::EndOfInput => break,
            }
        }

        tokens
    }

    pub fn next_token(&mut self) -> Scan {
        self.skip_whitespace();

        let Some(ch) = self.at() else {
            return Scan::EndOfInput;
        };

        let scanned = if ch == '"' {
            self.match_string().map(|value| (TokenKind::String, value))
        } else if ch == '{' {
            self.match_comment().map(|value| (TokenKind::Comment, value))
        } else if ch == ':' {
            self.match_assign().map(|value| (TokenKind::Assign, value))
        } else if let Some(kind) = SYMBOL_LOOKUP.get(&ch) {
            self.advance_n(1);
            Ok((*kind, ch.to_string()))
        } else if ch.is_ascii_digit() {
            self.match_run(&NUMBER_PATTERN, ch)
                .map(|value| (TokenKind::Number, value))
        } else if ch.is_ascii_alphabetic() {
            self.match_run(&IDENTIFIER_PATTERN, ch)
                .map(|word| (classify_word(&word), word))
        } else {
            Err(ErrorImpl::UnexpectedCharacter { character: ch })
        };

        match scanned {
            Ok((kind, value)) => {
                let token = MK_TOKEN!(kind, value, self.line);
                trace!(line = token.line, kind = %token.kind, "scanned token");
                Scan::Token(token)
            }
            Err(error) => {
                self.log_error(error);
                self.skip_line();
                Scan::Rejected
            }
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch @ (' ' | '\t' | '\n')) = self.at() {
            if ch == '\n' {
                self.line += 1;
            }
            self.advance_n(1);
        }
    }

    // Stops on the newline so that `skip_whitespace` is the only place a
    // newline between tokens gets counted.
    fn skip_line(&mut self) {
        match self.remainder().find('\n') {
            Some(offset) => self.advance_n(offset),
            None => self.pos = self.source.len(),
        }
    }

    fn log_error(&mut self, error: ErrorImpl) {
        debug!(line = self.line, %error, "lexical error");
        self.status = false;
        self.errors.push(Error::new(error, self.line));
    }

    fn match_string(&mut self) -> ScanResult {
        self.advance_n(1);
        let start = self.pos;

        while let Some(ch) = self.at() {
            if ch == '"' || ch == '\n' {
                break;
            }
            self.advance_n(ch.len_utf8());
        }

        if self.at() != Some('"') {
            return Err(ErrorImpl::UnterminatedString);
        }

        let value = self.source[start..self.pos].to_string();
        self.advance_n(1);
        Ok(value)
    }

    fn match_comment(&mut self) -> ScanResult {
        self.advance_n(1);
        let start = self.pos;

        loop {
            match self.at() {
                None => return Err(ErrorImpl::UnterminatedComment),
                Some('}') => break,
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.advance_n(ch.len_utf8());
                }
            }
        }

        let value = self.source[start..self.pos].to_string();
        self.advance_n(1);
        Ok(value)
    }

    fn match_assign(&mut self) -> ScanResult {
        self.advance_n(1);

        match self.at() {
            Some('=') => {
                self.advance_n(1);
                Ok(String::from(":="))
            }
            Some(ch) if ch != '\n' => Err(ErrorImpl::UnexpectedCharacter { character: ch }),
            _ => Err(ErrorImpl::UnexpectedCharacter { character: ':' }),
        }
    }

    fn match_run(&mut self, pattern: &Regex, first: char) -> ScanResult {
        let value = match pattern.find(self.remainder()) {
            Some(found) => found.as_str().to_string(),
            None => return Err(ErrorImpl::UnexpectedCharacter { character: first }),
        };

        self.advance_n(value.len());
        Ok(value)
    }
}

fn classify_word(word: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(word.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

/// Tokenizes a whole buffer, returning the tokens only if no lexical error
/// was reported.
pub fn tokenize(source: impl Into<String>) -> Result<Vec<Token>, Vec<Error>> {
    let mut lex = Lexer::new(source);
    let tokens = lex.get_tokens();

    if lex.status() {
        Ok(tokens)
    } else {
        Err(lex.errors)
    }
}
