use super::{DocumentCache, DocumentHashProvider, GraphQLRequest, GraphQLSocketMessage};
use crate::ast::*;
use crate::error::{Error, ErrorType, RequestErrorKind, Result};
use crate::lexer::{decode::decode_string, Lexer, TokenKind};
use bumpalo::collections::Vec;
use hashbrown::HashMap;

/// Reads JSON values using the [Lexer] in its JSON mode.
///
/// `true`, `false` and `null` are read as names. Elements of arrays and objects must be separated
/// by commas, and trailing commas aren't accepted.
struct JsonReader<'a> {
    arena: &'a bumpalo::Bump,
    lexer: Lexer<'a>,
    max_depth: usize,
    depth: usize,
    last_end: usize,
}

impl<'a> JsonReader<'a> {
    fn new(arena: &'a bumpalo::Bump, source: &'a [u8], max_depth: usize) -> Result<Self> {
        let mut reader = JsonReader {
            arena,
            lexer: Lexer::new_json(source),
            max_depth,
            depth: 0,
            last_end: 0,
        };
        reader.advance()?;
        Ok(reader)
    }

    #[inline]
    fn kind(&self) -> TokenKind {
        self.lexer.kind()
    }

    #[inline]
    fn advance(&mut self) -> Result<()> {
        self.last_end = self.lexer.end();
        self.lexer.move_next()?;
        Ok(())
    }

    #[inline]
    fn skip(&mut self, kind: TokenKind) -> Result<bool> {
        if self.kind() == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.lexer.is_keyword(b"null")
    }

    fn invalid(&self, kind: RequestErrorKind, expected: &str) -> Error {
        Error::at_span(
            format!(
                "Invalid request: expected {}, found {}",
                expected,
                self.lexer.describe_token()
            ),
            self.lexer.source(),
            self.lexer.start(),
            self.lexer.end(),
            ErrorType::Request(kind),
        )
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<()> {
        if self.skip(kind)? {
            Ok(())
        } else {
            Err(self.invalid(RequestErrorKind::InvalidStructure, expected))
        }
    }

    fn expect_end(&self) -> Result<()> {
        if self.kind() == TokenKind::EndOfFile {
            Ok(())
        } else {
            Err(self.invalid(RequestErrorKind::InvalidStructure, "<end of file>"))
        }
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            log::debug!("aborted reading request nested deeper than {}", self.max_depth);
            Err(Error::at_span(
                format!(
                    "Request exceeds the maximum allowed nesting depth of {}. Parsing aborted.",
                    self.max_depth
                ),
                self.lexer.source(),
                self.lexer.start(),
                self.lexer.end(),
                ErrorType::Limit,
            ))
        } else {
            Ok(())
        }
    }

    /// Reads and decodes a string.
    fn string(&mut self) -> Result<&'a str> {
        if self.kind() != TokenKind::String {
            return Err(self.invalid(RequestErrorKind::InvalidStructure, "a string"));
        }
        let lexer = &self.lexer;
        let value = decode_string(self.arena, lexer.value(), TokenKind::String, lexer.has_escapes())
            .map_err(|error| {
                let start = lexer.value_start() + error.offset;
                Error::at_span(
                    error.message,
                    lexer.source(),
                    start,
                    start + error.len,
                    ErrorType::Lexical,
                )
            })?;
        self.advance()?;
        Ok(value)
    }

    fn nullable_string(&mut self) -> Result<Option<&'a str>> {
        if self.skip_null()? {
            Ok(None)
        } else {
            self.string().map(Some)
        }
    }

    fn skip_null(&mut self) -> Result<bool> {
        if self.is_null() {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Moves to the next element of an array or object whose opening bracket has already been
    /// consumed, expecting a comma before every element but the first.
    /// Returns `false` once the closing bracket has been consumed instead.
    fn next_element(&mut self, close: TokenKind, first: &mut bool) -> Result<bool> {
        if self.skip(close)? {
            Ok(false)
        } else if std::mem::replace(first, false) || self.skip(TokenKind::Comma)? {
            Ok(true)
        } else {
            Err(self.invalid(
                RequestErrorKind::InvalidStructure,
                &format!("`,` or {}", close),
            ))
        }
    }

    /// Reads the next key of an object whose `{` has already been consumed.
    /// Returns `None` once the closing `}` has been consumed instead.
    fn next_key(&mut self, first: &mut bool) -> Result<Option<&'a str>> {
        if !self.next_element(TokenKind::RightBrace, first)? {
            return Ok(None);
        }
        if self.kind() != TokenKind::String {
            return Err(self.invalid(RequestErrorKind::InvalidStructure, "a key"));
        }
        let key = self.string()?;
        self.expect(TokenKind::Colon, "`:`")?;
        Ok(Some(key))
    }

    fn number(&self) -> Result<&'a str> {
        std::str::from_utf8(self.lexer.value())
            .map_err(|_| self.invalid(RequestErrorKind::InvalidStructure, "a number"))
    }

    /// Reads any JSON value into an AST value.
    fn value(&mut self) -> Result<Value<'a>> {
        let value = match self.kind() {
            TokenKind::LeftBrace => return self.object().map(Value::Object),
            TokenKind::LeftBracket => return self.list().map(Value::List),
            TokenKind::String => return self.string().map(|value| Value::String(StringValue { value })),
            TokenKind::Integer => Value::Int(IntValue {
                value: self.number()?,
            }),
            TokenKind::Float => Value::Float(FloatValue {
                value: self.number()?,
                format: self.lexer.float_format().unwrap_or(FloatFormat::FixedPoint),
            }),
            TokenKind::Name => match self.lexer.value() {
                b"true" => Value::Boolean(true.into()),
                b"false" => Value::Boolean(false.into()),
                b"null" => Value::Null,
                _ => return Err(self.invalid(RequestErrorKind::InvalidStructure, "a JSON value")),
            },
            _ => return Err(self.invalid(RequestErrorKind::InvalidStructure, "a JSON value")),
        };
        self.advance()?;
        Ok(value)
    }

    fn list(&mut self) -> Result<ListValue<'a>> {
        self.enter()?;
        self.expect(TokenKind::LeftBracket, "a list")?;
        let mut children = Vec::new_in(self.arena);
        let mut first = true;
        while self.next_element(TokenKind::RightBracket, &mut first)? {
            children.push(self.value()?);
        }
        self.depth -= 1;
        Ok(ListValue { children })
    }

    fn object(&mut self) -> Result<ObjectValue<'a>> {
        self.enter()?;
        self.expect(TokenKind::LeftBrace, "an object")?;
        let mut children = Vec::new_in(self.arena);
        let mut first = true;
        while let Some(name) = self.next_key(&mut first)? {
            children.push(ObjectField {
                name,
                value: self.value()?,
            });
        }
        self.depth -= 1;
        Ok(ObjectValue { children })
    }

    /// Reads an object into a map, or `null`.
    fn map(&mut self) -> Result<Option<Variables<'a>>> {
        if self.skip_null()? {
            return Ok(None);
        } else if self.kind() != TokenKind::LeftBrace {
            return Err(self.invalid(RequestErrorKind::InvalidStructure, "an object or `null`"));
        }
        self.enter()?;
        self.advance()?;
        let mut map = HashMap::new_in(self.arena);
        let mut first = true;
        while let Some(key) = self.next_key(&mut first)? {
            let value = self.value()?;
            map.insert(key, value);
        }
        self.depth -= 1;
        Ok(Some(map))
    }

    /// Consumes a JSON value without decoding or allocating any of it.
    fn skip_value(&mut self) -> Result<()> {
        let mut first = true;
        match self.kind() {
            TokenKind::LeftBrace => {
                self.enter()?;
                self.advance()?;
                while self.next_element(TokenKind::RightBrace, &mut first)? {
                    self.expect(TokenKind::String, "a key")?;
                    self.expect(TokenKind::Colon, "`:`")?;
                    self.skip_value()?;
                }
                self.depth -= 1;
            }
            TokenKind::LeftBracket => {
                self.enter()?;
                self.advance()?;
                while self.next_element(TokenKind::RightBracket, &mut first)? {
                    self.skip_value()?;
                }
                self.depth -= 1;
            }
            TokenKind::String | TokenKind::Integer | TokenKind::Float => self.advance()?,
            TokenKind::Name if matches!(self.lexer.value(), b"true" | b"false" | b"null") => {
                self.advance()?
            }
            _ => return Err(self.invalid(RequestErrorKind::InvalidStructure, "a JSON value")),
        }
        Ok(())
    }
}

/// Parser for GraphQL request bodies and socket messages.
///
/// The parser borrows its source for the lifetime of the AST context, just like the document
/// parser, and allocates all requests, documents and values into the context's arena. Documents
/// that are added to a [DocumentCache] are parsed into the cache's own context instead, which may
/// outlive the request's context.
#[derive(Clone, Copy)]
pub struct RequestParser<'a, 'c: 'a> {
    ctx: &'a ASTContext,
    source: &'a [u8],
    options: ParserOptions,
    cache: Option<&'a dyn DocumentCache<'c>>,
    hash_provider: Option<&'a dyn DocumentHashProvider>,
}

impl<'a, 'c: 'a> RequestParser<'a, 'c> {
    pub fn new<S: AsRef<[u8]> + ?Sized>(ctx: &'a ASTContext, source: &'a S) -> Self {
        RequestParser {
            ctx,
            source: source.as_ref(),
            options: ParserOptions::DEFAULT,
            cache: None,
            hash_provider: None,
        }
    }

    /// Sets the options that documents are parsed with. The maximum depth also applies to JSON
    /// values in the request.
    pub fn with_options(self, options: ParserOptions) -> Self {
        RequestParser { options, ..self }
    }

    /// Sets the cache that documents are looked up in by their hash or persisted query id.
    ///
    /// Queries sent as text only go through the cache when a hash provider is set as well.
    pub fn with_cache(self, cache: &'a dyn DocumentCache<'c>) -> Self {
        RequestParser {
            cache: Some(cache),
            ..self
        }
    }

    pub fn with_hash_provider(self, hash_provider: &'a dyn DocumentHashProvider) -> Self {
        RequestParser {
            hash_provider: Some(hash_provider),
            ..self
        }
    }

    /// Parses a request body, which is either a single request object or a batch of requests.
    ///
    /// Requests are returned in the order they were sent in. An empty batch results in no requests.
    pub fn parse(&self) -> Result<Vec<'a, GraphQLRequest<'a>>> {
        let mut reader = self.reader(self.source)?;
        let mut requests = Vec::new_in(&self.ctx.arena);
        if reader.skip(TokenKind::LeftBracket)? {
            let mut first = true;
            while reader.next_element(TokenKind::RightBracket, &mut first)? {
                requests.push(self.request(&mut reader)?);
            }
            log::debug!("parsed batch of {} requests", requests.len());
        } else {
            requests.push(self.request(&mut reader)?);
        }
        reader.expect_end()?;
        Ok(requests)
    }

    /// Parses a socket message of the shape `{"type": ..., "id": ..., "payload": ...}`.
    ///
    /// The payload isn't parsed but kept as a slice of the source, see
    /// [`GraphQLSocketMessage::parse_payload`].
    pub fn parse_message(&self) -> Result<GraphQLSocketMessage<'a>> {
        let mut reader = self.reader(self.source)?;
        reader.expect(TokenKind::LeftBrace, "a message object")?;
        let mut message_type = None;
        let mut id = None;
        let mut payload = None;
        let mut first = true;
        while let Some(key) = reader.next_key(&mut first)? {
            match key {
                "type" => message_type = Some(reader.string()?),
                "id" => id = reader.nullable_string()?,
                "payload" => {
                    let start = reader.lexer.start();
                    reader.skip_value()?;
                    payload = Some(&self.source[start..reader.last_end]);
                }
                _ => reader.skip_value()?,
            }
        }
        reader.expect_end()?;
        match message_type {
            Some(message_type) => Ok(GraphQLSocketMessage {
                message_type,
                id,
                payload,
            }),
            None => Err(Error::at_span(
                "Socket message must contain a `type`",
                self.source,
                0,
                reader.last_end,
                ErrorType::Request(RequestErrorKind::InvalidStructure),
            )),
        }
    }

    /// Parses a single request object from `source`, or `null`.
    pub(super) fn parse_single(&self, source: &'a [u8]) -> Result<Option<GraphQLRequest<'a>>> {
        let mut reader = self.reader(source)?;
        let request = if reader.skip_null()? {
            None
        } else {
            Some(self.request(&mut reader)?)
        };
        reader.expect_end()?;
        Ok(request)
    }

    fn reader(&self, source: &'a [u8]) -> Result<JsonReader<'a>> {
        JsonReader::new(&self.ctx.arena, source, self.options.max_allowed_depth)
    }

    fn request(&self, reader: &mut JsonReader<'a>) -> Result<GraphQLRequest<'a>> {
        let start = reader.lexer.start();
        if reader.kind() != TokenKind::LeftBrace {
            return Err(reader.invalid(RequestErrorKind::InvalidStructure, "a request object"));
        }
        reader.advance()?;

        let mut query = None;
        let mut request = GraphQLRequest {
            document: None,
            query_id: None,
            query_hash: None,
            operation_name: None,
            variables: None,
            extensions: None,
        };
        let mut first = true;
        while let Some(key) = reader.next_key(&mut first)? {
            match key {
                "query" => {
                    query = if reader.kind() == TokenKind::String {
                        Some(reader.string()?)
                    } else if reader.skip_null()? {
                        None
                    } else {
                        return Err(reader.invalid(
                            RequestErrorKind::InvalidQueryType,
                            "a string or `null` as the query",
                        ));
                    }
                }
                "id" => request.query_id = reader.nullable_string()?,
                "operationName" => request.operation_name = reader.nullable_string()?,
                "variables" => request.variables = reader.map()?,
                "extensions" => request.extensions = reader.map()?,
                _ => reader.skip_value()?,
            }
        }

        if let Some(query) = query {
            self.resolve_query(&mut request, query)?;
            return Ok(request);
        }

        if request.query_id.is_none() {
            if let Some(hash) = self.persisted_query_hash(request.extensions.as_ref()) {
                request.query_id = Some(hash);
                request.query_hash = Some(hash);
            }
        }
        match (request.query_id, self.cache) {
            (Some(id), Some(cache)) => {
                request.document = cache.try_get(id);
                log::trace!(
                    "document cache {} for persisted query {}",
                    if request.document.is_some() { "hit" } else { "miss" },
                    id
                );
                Ok(request)
            }
            (Some(_), None) => Ok(request),
            (None, _) => Err(Error::at_span(
                "Request must contain a `query` or an `id`",
                reader.lexer.source(),
                start,
                reader.last_end,
                ErrorType::Request(RequestErrorKind::MissingQueryOrId),
            )),
        }
    }

    /// Finds the hash in `extensions.persistedQuery` under the hash provider's name.
    fn persisted_query_hash(&self, extensions: Option<&Variables<'a>>) -> Option<&'a str> {
        let provider = self.hash_provider?;
        match extensions?.get("persistedQuery")? {
            Value::Object(persisted_query) => persisted_query
                .children
                .iter()
                .find(|field| field.name == provider.name())
                .and_then(|field| match field.value {
                    Value::String(StringValue { value }) => Some(value),
                    _ => None,
                }),
            _ => None,
        }
    }

    /// Parses a request's query, going through the document cache when a hash provider is set.
    ///
    /// The cache is keyed by the hash of the query text only, so a document found in it always
    /// matches the query that was sent. The request's `id` is never used as a key for query text.
    fn resolve_query(&self, request: &mut GraphQLRequest<'a>, query: &'a str) -> Result<()> {
        let hash = self.hash_provider.map(|provider| {
            let hash = self
                .ctx
                .alloc_string(provider.compute_hash(query.as_bytes()));
            log::trace!("computed {} of query: {}", provider.name(), hash);
            hash
        });
        request.query_hash = hash;

        let document: &'a Document<'a> = match (self.cache, hash) {
            (Some(cache), Some(hash)) => match cache.try_get(hash) {
                Some(document) => {
                    log::trace!("document cache hit for {}", hash);
                    document
                }
                None => {
                    log::trace!("document cache miss for {}", hash);
                    let context = cache.context();
                    let query = context.alloc_str(query);
                    let document = Document::parse_with_options(context, query, self.options)?;
                    cache.try_add(hash, document);
                    document
                }
            },
            _ => Document::parse_with_options(self.ctx, query, self.options)?,
        };
        request.document = Some(document);
        Ok(())
    }
}

/// Parses a request body with the default [`ParserOptions`] and without a document cache.
pub fn parse_request<'a, S: AsRef<[u8]> + ?Sized>(
    ctx: &'a ASTContext,
    source: &'a S,
) -> Result<Vec<'a, GraphQLRequest<'a>>> {
    RequestParser::new(ctx, source).parse()
}
