//! `graphql_wire`
//! =========
//!
//! _Zero-copy GraphQL lexing, parsing and request envelope handling._
//!
//! The **`graphql_wire`** library turns raw UTF-8 bytes into GraphQL ASTs and GraphQL requests:
//!
//! - [The `lexer` module](lexer) scans a byte buffer one token at a time without copying it
//! - [The `ast` module](ast) parses documents, type system definitions, values, types and schema
//!   coordinates into an arena-allocated AST, and prints them back into source text
//! - [The `request` module](request) reads single and batched JSON request bodies and socket
//!   messages and resolves their queries through an optional document cache
//!
//! Parsing is guarded by configurable ceilings on tokens, nodes, fields and nesting depth, so that
//! adversarial documents are rejected before they can exhaust CPU time, memory or the stack.
//!
//! The crate neither validates documents against a schema nor executes them. It's meant to sit
//! in front of the layers that do, in GraphQL gateways, proxies and servers.
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;
pub mod lexer;
pub mod request;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
