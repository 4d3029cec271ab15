//! # GraphQL Language AST
//!
//! The `graphql_wire::ast` module contains the GraphQL language AST and traits to parse and
//! print the AST. Executable documents, type system definitions and extensions, and schema
//! coordinates are all supported.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its three main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`PrintNode`], a trait using which AST Nodes are printed into source text
//!
//! Parsing is limited by [`ParserOptions`], which by default cap the number of fields and the
//! nesting depth of a document.
//!
//! ```
//! use graphql_wire::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = Document::parse(&ctx, "{ field }").unwrap();
//!
//! // Print the Document node to an output String
//! let output = ast.print();
//! assert_eq!(output, "{\n  field\n}");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod options;
mod parser;
mod printer;

pub use ast::*;
pub use ast_conversion::DefaultIn;
pub use ast_kind::ASTKind;
pub use options::ParserOptions;
pub use parser::{
    parse_document, parse_field, parse_schema_coordinate, parse_type, parse_value, ParseNode,
};
pub use printer::PrintNode;
