use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Position;

lazy_static! {
    /// A name made only of letters, digits and underscores, starting with a letter.
    static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").unwrap();
}

/// A literal captured by the parser that cannot be turned into a value.
#[derive(Error, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum LiteralFormatError {
    #[error("Empty char literal {literal} at {position}")]
    EmptyChar { literal: String, position: Position },
    #[error("Unrecognized escape sequence in char literal {literal} at {position}")]
    UnknownEscape { literal: String, position: Position },
    #[error("Char literal {literal} at {position} has more than one character")]
    TooManyChars { literal: String, position: Position },
}

impl LiteralFormatError {
    /// Where the malformed literal is.
    pub fn position(&self) -> &Position {
        match self {
            LiteralFormatError::EmptyChar { position, .. }
            | LiteralFormatError::UnknownEscape { position, .. }
            | LiteralFormatError::TooManyChars { position, .. } => position,
        }
    }
}

/// A single character, decoded from a single-quoted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Char(pub char);

impl Char {
    /// Decode the raw text of a char literal, with or without the surrounding single quotes.
    ///
    /// The supported escape sequences are `\' \" \\ \a \b \f \n \r \t \v`.
    pub fn capture(literal: &str, position: &Position) -> Result<Char, LiteralFormatError> {
        let body = literal
            .strip_prefix('\'')
            .and_then(|body| body.strip_suffix('\''))
            .unwrap_or(literal);
        let error_data = || (literal.to_string(), position.clone());

        let mut chars = body.chars();
        let first = match chars.next() {
            Some(first) => first,
            None => {
                let (literal, position) = error_data();
                return Err(LiteralFormatError::EmptyChar { literal, position });
            }
        };
        let rest: Vec<char> = chars.collect();

        if first != '\\' {
            if !rest.is_empty() {
                let (literal, position) = error_data();
                return Err(LiteralFormatError::TooManyChars { literal, position });
            }
            return Ok(Char(first));
        }

        match rest.as_slice() {
            [escape] => {
                let decoded = match escape {
                    '\'' => '\'',
                    '"' => '"',
                    '\\' => '\\',
                    'a' => '\x07',
                    'b' => '\x08',
                    'f' => '\x0c',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'v' => '\x0b',
                    _ => {
                        let (literal, position) = error_data();
                        return Err(LiteralFormatError::UnknownEscape { literal, position });
                    }
                };
                Ok(Char(decoded))
            }
            [] => {
                let (literal, position) = error_data();
                Err(LiteralFormatError::UnknownEscape { literal, position })
            }
            _ => {
                let (literal, position) = error_data();
                Err(LiteralFormatError::TooManyChars { literal, position })
            }
        }
    }
}

impl Display for Char {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a function, which is either an identifier or an operator symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FunctionName {
    pub name: String,
    pub is_operator: bool,
}

impl FunctionName {
    /// Capture a function name as written in the source: anything that is not an identifier is
    /// an operator.
    pub fn capture(name: impl Into<String>) -> FunctionName {
        let name = name.into();
        let is_operator = !IDENTIFIER.is_match(&name);
        FunctionName { name, is_operator }
    }
}

impl From<String> for FunctionName {
    fn from(name: String) -> Self {
        FunctionName::capture(name)
    }
}

impl From<FunctionName> for String {
    fn from(name: FunctionName) -> Self {
        name.name
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn capture(literal: &str) -> Result<Char, LiteralFormatError> {
        Char::capture(literal, &Position::new("test.dfl", 0, 1, 1))
    }

    #[test]
    fn test_plain_char() {
        assert_eq!(capture("'a'"), Ok(Char('a')));
        assert_eq!(capture("'è'"), Ok(Char('è')));
        assert_eq!(capture("z"), Ok(Char('z')));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(capture(r"'\n'"), Ok(Char('\n')));
        assert_eq!(capture(r"'\t'"), Ok(Char('\t')));
        assert_eq!(capture(r"'\''"), Ok(Char('\'')));
        assert_eq!(capture(r"'\\'"), Ok(Char('\\')));
        assert_eq!(capture(r"'\v'"), Ok(Char('\x0b')));
        assert_eq!(capture(r"'\a'"), Ok(Char('\x07')));
    }

    #[test]
    fn test_empty_char() {
        assert!(matches!(
            capture("''"),
            Err(LiteralFormatError::EmptyChar { .. })
        ));
    }

    #[test]
    fn test_unknown_escape() {
        assert!(matches!(
            capture(r"'\q'"),
            Err(LiteralFormatError::UnknownEscape { .. })
        ));
        assert!(matches!(
            capture(r"'\'"),
            Err(LiteralFormatError::UnknownEscape { .. })
        ));
    }

    #[test]
    fn test_too_many_chars() {
        let error = capture("'ab'").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Char literal 'ab' at test.dfl:1:1 has more than one character"
        );
        assert!(matches!(
            capture(r"'\nn'"),
            Err(LiteralFormatError::TooManyChars { .. })
        ));
    }

    #[test]
    fn test_function_name() {
        assert!(!FunctionName::capture("sum").is_operator);
        assert!(!FunctionName::capture("to_string2").is_operator);
        assert!(FunctionName::capture("+").is_operator);
        assert!(FunctionName::capture("<=>").is_operator);
        assert!(FunctionName::capture("2x").is_operator);
    }

    #[test]
    fn test_function_name_from_json() {
        let name: FunctionName = serde_json::from_str("\"&&\"").unwrap();
        assert_eq!(name, FunctionName::capture("&&"));
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"&&\"");
    }
}
