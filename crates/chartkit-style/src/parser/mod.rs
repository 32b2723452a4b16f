//! Tokenizing and parsing of style text.

mod css_parser;
mod stream;
mod token;

pub use css_parser::{
    ParseOptions, parse_declarations, parse_declarations_with, parse_selector, parse_stylesheet,
    parse_stylesheet_with,
};
pub use stream::{StreamState, TokenStream};
pub use token::{LexicalKind, LexicalUnit, tokenize};

pub(crate) use token::tokenize_value;
