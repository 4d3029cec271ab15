//! # GraphQL Lexer
//!
//! The `graphql_wire::lexer` module contains a hand-written lexer over UTF-8 byte buffers. It's
//! shared by the GraphQL document parser and the request envelope parser. The latter reads JSON
//! with a lexer from [`Lexer::new_json`], which emits commas and follows JSON's string rules.
//!
//! ```
//! use graphql_wire::lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(b"{ field }");
//! lexer.move_next().unwrap();
//! assert_eq!(lexer.kind(), TokenKind::LeftBrace);
//! lexer.move_next().unwrap();
//! assert_eq!(lexer.value(), b"field");
//! ```

pub mod classify;
pub(crate) mod decode;
mod reader;
mod token;

pub use reader::Lexer;
pub use token::{FloatFormat, TokenKind};
