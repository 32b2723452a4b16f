//! Lexical units of a property value.
//!
//! Property values are tokenized with `cssparser` and copied into owned
//! [`LexicalUnit`]s, so readers never hold on to the source text. Whitespace
//! and comments are dropped; function arguments are tokenized recursively.

use std::fmt;

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

use crate::{Error, Result};

/// The kind of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalKind {
    Ident,
    Function,
    Number,
    Percentage,
    Dimension,
    String,
    Hash,
    Comma,
    Delim,
}

/// One token of a property value.
#[derive(Debug, Clone, PartialEq)]
pub enum LexicalUnit {
    /// An identifier such as `primary`.
    Ident(String),
    /// A function call such as `rgb(0, 255, 0)`.
    Function {
        name: String,
        arguments: Vec<LexicalUnit>,
    },
    /// A plain number.
    Number(f32),
    /// A percentage; `50%` is stored as `50.0`.
    Percentage(f32),
    /// A number with a unit such as `12px`.
    Dimension { value: f32, unit: String },
    /// A quoted string.
    String(String),
    /// A hash token without its `#`.
    Hash(String),
    /// A `,` separator.
    Comma,
    /// Any other single delimiter character.
    Delim(char),
}

impl LexicalUnit {
    /// The unit's kind.
    pub fn kind(&self) -> LexicalKind {
        match self {
            LexicalUnit::Ident(_) => LexicalKind::Ident,
            LexicalUnit::Function { .. } => LexicalKind::Function,
            LexicalUnit::Number(_) => LexicalKind::Number,
            LexicalUnit::Percentage(_) => LexicalKind::Percentage,
            LexicalUnit::Dimension { .. } => LexicalKind::Dimension,
            LexicalUnit::String(_) => LexicalKind::String,
            LexicalUnit::Hash(_) => LexicalKind::Hash,
            LexicalUnit::Comma => LexicalKind::Comma,
            LexicalUnit::Delim(_) => LexicalKind::Delim,
        }
    }

    /// Identifier text, if this is an identifier.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            LexicalUnit::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for LexicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalUnit::Ident(name) => f.write_str(name),
            LexicalUnit::Function { name, arguments } => {
                write!(f, "{}(", name)?;
                for arg in arguments {
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            LexicalUnit::Number(value) => write!(f, "{}", value),
            LexicalUnit::Percentage(value) => write!(f, "{}%", value),
            LexicalUnit::Dimension { value, unit } => write!(f, "{}{}", value, unit),
            LexicalUnit::String(s) => write!(f, "\"{}\"", s),
            LexicalUnit::Hash(h) => write!(f, "#{}", h),
            LexicalUnit::Comma => f.write_str(","),
            LexicalUnit::Delim(c) => write!(f, "{}", c),
        }
    }
}

/// Tokenize a standalone property value such as `domain primary 1`.
///
/// # Example
///
/// ```
/// use chartkit_style::parser::{tokenize, LexicalUnit};
///
/// let units = tokenize("domain primary 1").unwrap();
/// assert_eq!(units.len(), 3);
/// assert_eq!(units[2], LexicalUnit::Number(1.0));
/// ```
pub fn tokenize(text: &str) -> Result<Vec<LexicalUnit>> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(|p| tokenize_value(p))
        .map_err(|e: CssParseError<'_, ()>| {
            Error::parse(
                format!("Failed to tokenize value '{}': {:?}", text, e.kind),
                e.location.line + 1,
                e.location.column,
            )
        })
}

/// Tokenize the rest of the parser's input into lexical units.
///
/// Blocks (`{}`, `[]`, `()`) and bad tokens are rejected.
pub(crate) fn tokenize_value<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<LexicalUnit>, CssParseError<'i, ()>> {
    let mut units = vec![];

    while !parser.is_exhausted() {
        let token = parser.next()?.clone();
        let unit = match token {
            Token::Ident(name) => LexicalUnit::Ident(name.to_string()),
            Token::Function(name) => {
                let arguments = parser.parse_nested_block(|p| tokenize_value(p))?;
                LexicalUnit::Function {
                    name: name.to_string(),
                    arguments,
                }
            }
            Token::Number { value, .. } => LexicalUnit::Number(value),
            Token::Percentage { unit_value, .. } => LexicalUnit::Percentage(unit_value * 100.0),
            Token::Dimension { value, unit, .. } => LexicalUnit::Dimension {
                value,
                unit: unit.to_string(),
            },
            Token::QuotedString(s) => LexicalUnit::String(s.to_string()),
            Token::Hash(h) | Token::IDHash(h) => LexicalUnit::Hash(h.to_string()),
            Token::Comma => LexicalUnit::Comma,
            Token::Delim(c) => LexicalUnit::Delim(c),
            _ => return Err(parser.new_custom_error(())),
        };
        units.push(unit);
    }

    Ok(units)
}
