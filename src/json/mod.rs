//! # JSON Conversion
//!
//! The `graphql_wire::json` module contains utilities to convert from and to `serde_json` values.
//! Any values that are converted into this crate's structures are represented as AST values, which
//! is also how the request parser stores a request's `variables` and `extensions`.
//!
//! The [ValueFromNode] trait allows conversion to `serde_json` values using a `to_json` method on
//! any given value. This method converts without using any type information.
//!
//! The module otherwise only contains a handful of utility functions:
//!
//! - [ast_from_value_untyped] is used to convert any given JSON value to AST values.
//! - [ast_variables_from_value] is used to create a `Variables` map from a JSON object.
//! - [value_from_ast_variables] is used to convert AST `Variables` back to a JSON object.

mod conversion;
mod values;

pub use conversion::*;
pub use values::*;
