#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::Token},
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub const TOO_MANY_ERRORS: &str = "Can't parse: too many errors";

/// Presentation choices that belong to whoever prints the tokens, not the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub display_comments: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            display_comments: true,
        }
    }
}

pub fn display_tokens(tokens: &[Token], options: &RenderOptions) -> String {
    let mut result = String::new();

    for token in tokens {
        if token.is_comment() && !options.display_comments {
            continue;
        }
        let _ = writeln!(result, "{}", token);
    }

    result
}

pub fn display_errors(errors: &[Error]) -> String {
    let mut result = String::new();

    let _ = writeln!(result, "{}", TOO_MANY_ERRORS);
    for error in errors {
        let _ = writeln!(result, "{}", error);
    }

    result
}

/// Renders the outcome of a finished lexer run. The token list is only shown
/// when the lexer reported no errors.
pub fn render(lexer: &Lexer, tokens: &[Token], options: &RenderOptions) -> String {
    if lexer.status() {
        display_tokens(tokens, options)
    } else {
        display_errors(lexer.errors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokens::TokenKind;

    fn token(kind: TokenKind, value: &str, line: u32) -> Token {
        Token {
            kind,
            value: value.to_string(),
            line,
        }
    }

    #[test]
    fn test_display_tokens_hides_comments() {
        let tokens = vec![
            token(TokenKind::Comment, " note ", 1),
            token(TokenKind::Identifier, "x", 2),
        ];

        let shown = display_tokens(&tokens, &RenderOptions::default());
        assert_eq!(
            shown,
            "line 1: <type: comment /> <value: \" note \" />\nline 2: <type: identifier /> <value: \"x\" />\n"
        );

        let hidden = display_tokens(&tokens, &RenderOptions { display_comments: false });
        assert_eq!(hidden, "line 2: <type: identifier /> <value: \"x\" />\n");
    }

    #[test]
    fn test_render_prefers_errors_on_failure() {
        let mut lexer = Lexer::new("x := 1\n@\ny");
        let tokens = lexer.get_tokens();
        assert!(!tokens.is_empty());

        let output = render(&lexer, &tokens, &RenderOptions::default());
        assert_eq!(
            output,
            "Can't parse: too many errors\nError on line 2: Unexpected character: '@'\n"
        );
    }

    #[test]
    fn test_render_success() {
        let mut lexer = Lexer::new("WRITE 7");
        let tokens = lexer.get_tokens();

        let output = render(&lexer, &tokens, &RenderOptions::default());
        assert_eq!(
            output,
            "line 1: <type: keyword /> <value: \"WRITE\" />\nline 1: <type: number /> <value: 7 />\n"
        );
    }
}
