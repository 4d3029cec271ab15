use super::*;
use crate::error::RequestErrorKind;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

struct TestCache<'c> {
    ctx: &'c ASTContext,
    documents: RefCell<HashMap<String, &'c Document<'c>>>,
    adds: Cell<usize>,
}

impl<'c> TestCache<'c> {
    fn new(ctx: &'c ASTContext) -> Self {
        TestCache {
            ctx,
            documents: RefCell::new(HashMap::new()),
            adds: Cell::new(0),
        }
    }
}

impl<'c> DocumentCache<'c> for TestCache<'c> {
    fn context(&self) -> &'c ASTContext {
        self.ctx
    }

    fn try_get(&self, key: &str) -> Option<&'c Document<'c>> {
        self.documents.borrow().get(key).copied()
    }

    fn try_add(&self, key: &str, document: &'c Document<'c>) {
        self.adds.set(self.adds.get() + 1);
        self.documents.borrow_mut().insert(key.to_string(), document);
    }

    fn clear(&self) {
        self.documents.borrow_mut().clear();
    }
}

struct LengthHash;

impl DocumentHashProvider for LengthHash {
    fn name(&self) -> &str {
        "lengthHash"
    }

    fn compute_hash(&self, query: &[u8]) -> String {
        format!("len:{}", query.len())
    }
}

fn first_field<'a>(request: &GraphQLRequest<'a>) -> &'a str {
    let operation = request.operation().unwrap();
    operation.selection_set.selections[0].field().unwrap().name
}

fn request_error(source: &str) -> crate::error::Error {
    let ctx = ASTContext::new();
    let result = match RequestParser::new(&ctx, source).parse() {
        Ok(_) => panic!("expected request to fail: {}", source),
        Err(error) => error,
    };
    result
}

#[test]
fn single_request() {
    let ctx = ASTContext::new();
    let requests = parse_request(&ctx, r#"{"query": "{ a }"}"#).unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].document.is_some());
    assert_eq!(requests[0].query_id, None);
    assert_eq!(requests[0].query_hash, None);
    assert_eq!(first_field(&requests[0]), "a");
}

#[test]
fn id_only_request() {
    let ctx = ASTContext::new();
    let requests = parse_request(&ctx, r#"{"id": "abc"}"#).unwrap();
    assert!(requests[0].document.is_none());
    assert_eq!(requests[0].query_id, Some("abc"));
    assert!(requests[0].operation().is_err());
}

#[test]
fn batched_requests() {
    let ctx = ASTContext::new();
    let requests = parse_request(&ctx, r#"[{"query":"{a}"},{"query":"{b}"}]"#).unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(first_field(&requests[0]), "a");
    assert_eq!(first_field(&requests[1]), "b");

    let requests = parse_request(&ctx, " [ ] ").unwrap();
    assert!(requests.is_empty());
}

#[test]
fn request_fields() {
    let ctx = ASTContext::new();
    let body = r#"{
        "query": "query Q($id: ID) { node(id: $id) { id } } query Other { b }",
        "operationName": "Q",
        "unknown": {"deep": [1, {"x": null}, "é"], "more": -1.5e-3},
        "variables": {"id": "1", "n": [1, 2.5e1, true, null, {"k": "v"}]},
        "extensions": null
    }"#;
    let requests = parse_request(&ctx, body).unwrap();
    let request = &requests[0];
    assert_eq!(request.operation_name, Some("Q"));
    assert_eq!(request.operation().unwrap().name.unwrap().name, "Q");
    assert_eq!(request.variable("id"), Some(&Value::String("1".into())));
    assert_eq!(request.variable("missing"), None);
    assert!(request.extensions.is_none());
    assert_eq!(
        serde_json::Value::Object(request.variables_json()),
        json!({ "id": "1", "n": [1, 25.0, true, null, { "k": "v" }] })
    );
}

#[test]
fn escaped_query_text() {
    let ctx = ASTContext::new();
    let requests = parse_request(&ctx, r#"{"query": "{ a(s: \"x\\ny\") }"}"#).unwrap();
    let operation = requests[0].operation().unwrap();
    let field = operation.selection_set.selections[0].field().unwrap();
    assert_eq!(
        field.arguments.children[0].value,
        Value::String("x\ny".into())
    );
}

#[test]
fn request_errors() {
    let error = request_error(r#"{"operationName": "A"}"#);
    assert_eq!(
        error.error_type(),
        ErrorType::Request(RequestErrorKind::MissingQueryOrId)
    );
    assert_eq!(error.message(), "Request must contain a `query` or an `id`");

    let error = request_error(r#"{"query": 1}"#);
    assert_eq!(
        error.error_type(),
        ErrorType::Request(RequestErrorKind::InvalidQueryType)
    );
    assert_eq!(
        error.message(),
        "Invalid request: expected a string or `null` as the query, found Int `1`"
    );

    for source in [
        r#"{"query": "{ a }"} {}"#,
        r#""query""#,
        "",
        r#"{"query": "{ a }", "variables": [1]}"#,
        r#"{"query": "{ a }", "id": 1}"#,
        r#"{"query": "{ a }", "unknown": [}"#,
        r#"{"query": "{ a }", "unknown": undefined}"#,
        r#"{query: "{ a }"}"#,
        r#"{"query": "{ a }" "id": "1"}"#,
        r#"{"query": "{ a }", "unknown": {"a" "b"}}"#,
        r#"{"query": "{ a }", "unknown": [1:2]}"#,
        r#"{"query": "{ a }", "unknown": [1,]}"#,
        r#"{"query": "{ a }", "variables": {"a": 1,}}"#,
        r#"[{"query": "{ a }"} {"query": "{ b }"}]"#,
    ] {
        assert_eq!(
            request_error(source).error_type(),
            ErrorType::Request(RequestErrorKind::InvalidStructure),
            "{}",
            source
        );
    }

    let error = request_error(r#"{"query": "{ a "}"#);
    assert_eq!(error.error_type(), ErrorType::Syntax);

    let error = request_error(r#"{"query": "\q"}"#);
    assert_eq!(error.error_type(), ErrorType::Lexical);

    let error = request_error("{\"query\": \"{ a }\" # comment\n}");
    assert_eq!(error.error_type(), ErrorType::Lexical);
    let error = request_error("{\"query\": \"{ a(s: \\\"\t\\\") }\"}");
    assert_eq!(error.message(), "Invalid character within String: U+0009");
}

#[test]
fn json_strings_allow_delete() {
    let ctx = ASTContext::new();
    let body = "{\"query\": \"{ a }\", \"variables\": {\"s\": \"a\x7fb\"}}";
    let requests = parse_request(&ctx, body).unwrap();
    assert_eq!(
        requests[0].variable("s"),
        Some(&Value::String("a\x7fb".into()))
    );
}

#[test]
fn nesting_limit() {
    let ctx = ASTContext::new();
    let options = ParserOptions {
        max_allowed_depth: 3,
        ..ParserOptions::default()
    };
    let parser = RequestParser::new(&ctx, r#"{"query": "{ a }", "variables": {"a": [[1]]}}"#)
        .with_options(options);
    assert!(parser.parse().is_ok());

    let parser = RequestParser::new(&ctx, r#"{"query": "{ a }", "variables": {"a": [[[1]]]}}"#)
        .with_options(options);
    assert_eq!(parser.parse().unwrap_err().error_type(), ErrorType::Limit);
}

#[test]
fn document_cache_by_hash() {
    let cache_ctx = ASTContext::new();
    let ctx = ASTContext::new();
    let cache = TestCache::new(&cache_ctx);
    let parser = |source: &'static str| {
        RequestParser::new(&ctx, source)
            .with_cache(&cache)
            .with_hash_provider(&LengthHash)
    };

    let first = parser(r#"{"query": "{ a }"}"#).parse().unwrap();
    let second = parser(r#"{"query": "{ a }"}"#).parse().unwrap();
    assert_eq!(first[0].query_hash, Some("len:5"));
    assert_eq!(second[0].query_hash, Some("len:5"));
    assert!(std::ptr::eq(
        first[0].document.unwrap(),
        second[0].document.unwrap()
    ));
    assert_eq!(cache.adds.get(), 1);

    let persisted = parser(
        r#"{"extensions": {"persistedQuery": {"version": 1, "lengthHash": "len:5"}}}"#,
    )
    .parse()
    .unwrap();
    assert_eq!(persisted[0].query_id, Some("len:5"));
    assert_eq!(first_field(&persisted[0]), "a");

    let unknown = parser(
        r#"{"extensions": {"persistedQuery": {"version": 1, "lengthHash": "len:0"}}}"#,
    )
    .parse()
    .unwrap();
    assert_eq!(unknown[0].query_id, Some("len:0"));
    assert!(unknown[0].document.is_none());

    cache.clear();
    let cleared = parser(r#"{"query": "{ a }"}"#).parse().unwrap();
    assert!(cleared[0].document.is_some());
    assert_eq!(cache.adds.get(), 2);
}

#[test]
fn persisted_query_requires_hash_provider() {
    let error =
        request_error(r#"{"extensions": {"persistedQuery": {"version": 1, "lengthHash": "x"}}}"#);
    assert_eq!(
        error.error_type(),
        ErrorType::Request(RequestErrorKind::MissingQueryOrId)
    );
}

#[test]
fn query_text_wins_over_id() {
    let cache_ctx = ASTContext::new();
    let ctx = ASTContext::new();
    let cache = TestCache::new(&cache_ctx);
    let requests = RequestParser::new(
        &ctx,
        r#"[{"id": "q1", "query": "{ a }"}, {"id": "q1", "query": "{ b }"}]"#,
    )
    .with_cache(&cache)
    .parse()
    .unwrap();
    assert_eq!(first_field(&requests[0]), "a");
    assert_eq!(first_field(&requests[1]), "b");
    assert_eq!(requests[1].query_id, Some("q1"));
    assert_eq!(requests[1].query_hash, None);
    assert_eq!(cache.adds.get(), 0);
}

#[test]
fn cache_outlives_request_contexts() {
    let cache_ctx = ASTContext::new();
    let cache = TestCache::new(&cache_ctx);

    for _ in 0..2 {
        let ctx = ASTContext::new();
        let body = String::from(r#"{"query": "query Q { a }"}"#);
        let requests = RequestParser::new(&ctx, &body)
            .with_cache(&cache)
            .with_hash_provider(&LengthHash)
            .parse()
            .unwrap();
        assert_eq!(first_field(&requests[0]), "a");
    }
    assert_eq!(cache.adds.get(), 1);

    let document = cache.try_get("len:13").unwrap();
    assert_eq!(document.print(), "query Q {\n  a\n}");
}

#[test]
fn socket_messages() {
    let ctx = ASTContext::new();
    let source = r#"{"type": "subscribe", "id": "1", "payload": {"query": "subscription { s }"}}"#;
    let parser = RequestParser::new(&ctx, source);
    let message = parser.parse_message().unwrap();
    assert_eq!(message.message_type, "subscribe");
    assert_eq!(message.id, Some("1"));
    assert_eq!(
        message.payload,
        Some(&br#"{"query": "subscription { s }"}"#[..])
    );
    let request = message.parse_payload(&parser).unwrap().unwrap();
    assert_eq!(
        request.operation().unwrap().operation,
        OperationKind::Subscription
    );

    let message = RequestParser::new(&ctx, r#"{"type": "ping", "payload": null}"#)
        .parse_message()
        .unwrap();
    assert_eq!(message.id, None);
    assert!(message.parse_payload(&parser).unwrap().is_none());

    let message = RequestParser::new(&ctx, r#"{"id": null, "type": "connection_ack"}"#)
        .parse_message()
        .unwrap();
    assert_eq!(message.payload, None);
    assert!(message.parse_payload(&parser).unwrap().is_none());

    let error = RequestParser::new(&ctx, r#"{"id": "1"}"#)
        .parse_message()
        .unwrap_err();
    assert_eq!(
        error.error_type(),
        ErrorType::Request(RequestErrorKind::InvalidStructure)
    );
}
