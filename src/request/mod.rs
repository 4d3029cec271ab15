//! # GraphQL Requests
//!
//! The `graphql_wire::request` module reads the JSON envelope that GraphQL documents are sent in
//! over HTTP and websockets, and parses the documents it contains.
//! [Reference](https://graphql.github.io/graphql-over-http/draft/#sec-Request)
//!
//! A request body is either a single object or a batch, an array of objects. Each object may
//! contain a `query`, an `id`, an `operationName`, `variables` and `extensions`. Other keys are
//! skipped. The JSON is read with the same [Lexer](crate::lexer::Lexer) as documents are, and
//! values in `variables` and `extensions` are represented as AST [Value]s.
//!
//! Documents may be memoized with a [DocumentCache], keyed by the hash a [DocumentHashProvider]
//! computes from the query text. Requests that only send a persisted query `id` are looked up in
//! the cache by that id. Neither trait is implemented by this crate.
//!
//! ```
//! use graphql_wire::{ast::*, request::*};
//!
//! let ctx = ASTContext::new();
//! let body = r#"{ "query": "query Name { field }", "operationName": "Name" }"#;
//! let requests = RequestParser::new(&ctx, body).parse().unwrap();
//!
//! let operation = requests[0].operation().unwrap();
//! assert_eq!(operation.selection_set.print(), "{\n  field\n}");
//! ```

use crate::ast::*;
use crate::error::{Error, ErrorType, Result};

mod message;
mod parser;

pub use message::GraphQLSocketMessage;
pub use parser::{parse_request, RequestParser};

/// A store of parsed documents that is shared between requests.
///
/// Documents in the cache live in the cache's own [ASTContext] for its lifetime `'c`, so a cache
/// can outlive the contexts of the requests that use it. When a hash provider is set, the request
/// parser parses documents that aren't found into [`DocumentCache::context`] and then adds them.
///
/// Implementations are responsible for their own synchronization. The request parser calls
/// [`DocumentCache::try_get`] at most once and [`DocumentCache::try_add`] at most once per request.
pub trait DocumentCache<'c> {
    /// The context that documents are parsed into before they're added to the cache.
    fn context(&self) -> &'c ASTContext;

    /// Looks up a document by its persisted query id or hash.
    fn try_get(&self, key: &str) -> Option<&'c Document<'c>>;

    /// Stores a document that has just been parsed for a hash that wasn't found.
    fn try_add(&self, key: &str, document: &'c Document<'c>);

    /// Removes all documents from the cache.
    fn clear(&self);
}

/// Computes content hashes of query texts, e.g. for automatic persisted queries.
pub trait DocumentHashProvider {
    /// The name of the hash, which is also the key that's looked up in a request's
    /// `extensions.persistedQuery` object, e.g. `sha256Hash`.
    fn name(&self) -> &str;

    /// Hashes the raw bytes of a query text.
    fn compute_hash(&self, query: &[u8]) -> String;
}

/// A single GraphQL request as read from a request body.
///
/// Either a `document` or a `query_id` is set. When only an id is sent and no cached document is
/// found for it, `document` is `None` and it's up to the caller to respond accordingly.
#[derive(Debug, Clone)]
pub struct GraphQLRequest<'a> {
    /// The parsed document of the request's `query`, or a cached document.
    pub document: Option<&'a Document<'a>>,
    /// The persisted query id, from `id` or `extensions.persistedQuery`.
    pub query_id: Option<&'a str>,
    /// The hash of the query text if a [DocumentHashProvider] was used.
    pub query_hash: Option<&'a str>,
    pub operation_name: Option<&'a str>,
    pub variables: Option<Variables<'a>>,
    pub extensions: Option<Variables<'a>>,
}

impl<'a> GraphQLRequest<'a> {
    /// Selects the operation that this request executes, using its `operationName` if it has one.
    pub fn operation(&self) -> Result<&'a OperationDefinition<'a>> {
        match self.document {
            Some(document) => document.operation(self.operation_name),
            None => Err(Error::new(
                "Request does not contain a document",
                Some(ErrorType::GraphQL),
            )),
        }
    }

    /// Returns the value of a variable, if it was passed.
    pub fn variable(&self, name: &str) -> Option<&Value<'a>> {
        self.variables.as_ref().and_then(|variables| variables.get(name))
    }

    /// Converts this request's variables to a JSON object.
    #[cfg(feature = "json")]
    pub fn variables_json(&self) -> serde_json::Map<String, serde_json::Value> {
        match &self.variables {
            Some(variables) => crate::json::value_from_ast_variables(variables),
            None => serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests;
