//! Unit tests for lexical diagnostics.

use crate::errors::errors::{Error, ErrorImpl};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 4);

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_line(), 4);
    assert_eq!(error.get_kind(), &ErrorImpl::UnexpectedCharacter { character: '@' });
}

#[test]
fn test_error_messages() {
    assert_eq!(ErrorImpl::UnterminatedString.to_string(), "Unterminated string");
    assert_eq!(ErrorImpl::UnterminatedComment.to_string(), "Unterminated comment");
    assert_eq!(
        ErrorImpl::UnexpectedCharacter { character: ':' }.to_string(),
        "Unexpected character: ':'"
    );
}

#[test]
fn test_error_display_prefixes_line() {
    let error = Error::new(ErrorImpl::UnterminatedComment, 12);

    assert_eq!(error.get_message(), "Unterminated comment");
    assert_eq!(error.to_string(), "Error on line 12: Unterminated comment");
}

#[test]
fn test_error_names() {
    assert_eq!(
        Error::new(ErrorImpl::UnterminatedString, 1).get_error_name(),
        "UnterminatedString"
    );
    assert_eq!(
        Error::new(ErrorImpl::UnterminatedComment, 1).get_error_name(),
        "UnterminatedComment"
    );
}
