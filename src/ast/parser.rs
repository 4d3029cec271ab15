use super::ast::*;
use super::ast_kind::ASTKind;
use super::options::ParserOptions;
use crate::error::{Error, ErrorType, Result};
use crate::lexer::{decode::decode_string, Lexer, TokenKind};
use bumpalo::collections::Vec;

pub(crate) mod private {
    use super::{ASTContext, ASTKind, Error, ErrorType, Lexer, Location, ParserOptions, Result, TokenKind};

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [Lexer] positioned on the current token.
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) lexer: Lexer<'a>,
        pub(crate) options: ParserOptions,
        /// Set while parsing values that may not contain variables.
        pub(crate) constant: bool,
        last_end: usize,
        tokens: usize,
        nodes: usize,
        fields: usize,
        depth: usize,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// buffer to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a [u8], options: ParserOptions) -> Self {
            ParserContext {
                arena: &ctx.arena,
                lexer: Lexer::new(source),
                options,
                constant: false,
                last_end: 0,
                tokens: 0,
                nodes: 0,
                fields: 0,
                depth: 0,
            }
        }

        #[inline]
        pub(crate) fn kind(&self) -> TokenKind {
            self.lexer.kind()
        }

        /// Moves on to the next significant token.
        #[inline]
        pub(crate) fn advance(&mut self) -> Result<()> {
            self.last_end = self.lexer.end();
            self.lexer.move_next()?;
            if self.lexer.kind() != TokenKind::EndOfFile {
                self.tokens += 1;
                if self.tokens > self.options.max_allowed_tokens {
                    return Err(self.limit("tokens", self.options.max_allowed_tokens));
                }
            }
            Ok(())
        }

        /// Advances past the current token if it's of the given kind.
        #[inline]
        pub(crate) fn skip(&mut self, kind: TokenKind) -> Result<bool> {
            if self.lexer.kind() == kind {
                self.advance()?;
                Ok(true)
            } else {
                Ok(false)
            }
        }

        #[inline]
        pub(crate) fn expect(&mut self, kind: TokenKind, node: ASTKind) -> Result<()> {
            if self.lexer.kind() == kind {
                self.advance()
            } else {
                Err(self.unexpected(node, &kind.to_string()))
            }
        }

        #[inline]
        pub(crate) fn is_keyword(&self, keyword: &str) -> bool {
            self.lexer.is_keyword(keyword.as_bytes())
        }

        #[inline]
        pub(crate) fn skip_keyword(&mut self, keyword: &str) -> Result<bool> {
            if self.is_keyword(keyword) {
                self.advance()?;
                Ok(true)
            } else {
                Ok(false)
            }
        }

        #[inline]
        pub(crate) fn expect_keyword(&mut self, keyword: &str, node: ASTKind) -> Result<()> {
            if self.is_keyword(keyword) {
                self.advance()
            } else {
                Err(self.unexpected(node, &format!("`{}`", keyword)))
            }
        }

        /// Consumes a name token and returns it as a slice of the source.
        #[inline]
        pub(crate) fn expect_name(&mut self, node: ASTKind) -> Result<&'a str> {
            if self.lexer.kind() != TokenKind::Name {
                return Err(self.unexpected(node, "Name"));
            }
            let name = self.token_str()?;
            self.advance()?;
            Ok(name)
        }

        /// The current token's value as a string slice. Only names and numbers are passed here,
        /// which only ever consist of ASCII bytes.
        #[inline]
        pub(crate) fn token_str(&self) -> Result<&'a str> {
            std::str::from_utf8(self.lexer.value()).map_err(|_| {
                Error::at_span(
                    "Invalid UTF-8 sequence",
                    self.lexer.source(),
                    self.lexer.start(),
                    self.lexer.end(),
                    ErrorType::Lexical,
                )
            })
        }

        /// Returns a lexer that's moved on to the token after the current one.
        pub(crate) fn lookahead(&self) -> Result<Lexer<'a>> {
            let mut lexer = self.lexer.clone();
            lexer.move_next()?;
            Ok(lexer)
        }

        /// Starts a node's location at the current token, unless locations are disabled.
        #[inline]
        pub(crate) fn start(&self) -> Option<Location> {
            if self.options.no_locations {
                None
            } else {
                Some(self.lexer.location())
            }
        }

        /// Ends a node's location at the last consumed token.
        #[inline]
        pub(crate) fn finish(&self, start: Option<Location>) -> Option<Location> {
            start.map(|location| Location {
                end: self.last_end,
                ..location
            })
        }

        /// Counts a new AST Node against the node ceiling.
        #[inline]
        pub(crate) fn node(&mut self) -> Result<()> {
            self.nodes += 1;
            if self.nodes > self.options.max_allowed_nodes {
                Err(self.limit("nodes", self.options.max_allowed_nodes))
            } else {
                Ok(())
            }
        }

        /// Counts a new Field against the field ceiling.
        #[inline]
        pub(crate) fn field(&mut self) -> Result<()> {
            self.fields += 1;
            if self.fields > self.options.max_allowed_fields {
                Err(self.limit("fields", self.options.max_allowed_fields))
            } else {
                Ok(())
            }
        }

        /// Enters a nested selection set, list, object, or list type.
        #[inline]
        pub(crate) fn enter(&mut self) -> Result<()> {
            self.depth += 1;
            if self.depth > self.options.max_allowed_depth {
                log::debug!(
                    "aborted parsing at a nesting depth of {}",
                    self.options.max_allowed_depth
                );
                Err(Error::at_span(
                    format!(
                        "Document exceeds the maximum allowed nesting depth of {}. Parsing aborted.",
                        self.options.max_allowed_depth
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

        #[inline]
        pub(crate) fn exit(&mut self) {
            self.depth -= 1;
        }

        /// Runs `parse` with variables disallowed in values.
        #[inline]
        pub(crate) fn constant<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
            let previous = std::mem::replace(&mut self.constant, true);
            let result = parse(self);
            self.constant = previous;
            result
        }

        pub(crate) fn unexpected(&self, node: ASTKind, expected: &str) -> Error {
            self.unexpected_at(&self.lexer, node, expected)
        }

        pub(crate) fn unexpected_at(&self, lexer: &Lexer<'a>, node: ASTKind, expected: &str) -> Error {
            Error::at_span(
                format!("Invalid {}: expected {}, found {}", node, expected, lexer.describe_token()),
                lexer.source(),
                lexer.start(),
                lexer.end(),
                ErrorType::Syntax,
            )
        }

        /// Fails unless the whole input has been consumed.
        pub(crate) fn expect_end(&self) -> Result<()> {
            if self.lexer.kind() == TokenKind::EndOfFile {
                Ok(())
            } else {
                Err(Error::at_span(
                    format!("Unexpected {}, expected <end of file>", self.lexer.describe_token()),
                    self.lexer.source(),
                    self.lexer.start(),
                    self.lexer.end(),
                    ErrorType::Syntax,
                ))
            }
        }

        fn limit(&self, what: &str, max: usize) -> Error {
            log::debug!("aborted parsing after exceeding {} allowed {}", max, what);
            Error::at_span(
                format!("Document contains more than {} {}. Parsing aborted.", max, what),
                self.lexer.source(),
                self.lexer.start(),
                self.lexer.end(),
                ErrorType::Limit,
            )
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Self>;
    }
}

use private::ParseNode as _;
use private::ParserContext;

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse`. The source is borrowed for the lifetime
/// of the AST Context and is never copied, and it must be consumed entirely by the parsed node.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    fn parse<S: AsRef<[u8]> + ?Sized>(ctx: &'a ASTContext, source: &'a S) -> Result<&'a Self> {
        Self::parse_with_options(ctx, source, ParserOptions::DEFAULT)
    }

    /// Parse an input source text with the given [`ParserOptions`].
    fn parse_with_options<S: AsRef<[u8]> + ?Sized>(
        ctx: &'a ASTContext,
        source: &'a S,
        options: ParserOptions,
    ) -> Result<&'a Self> {
        let mut parser_ctx = ParserContext::new(ctx, source.as_ref(), options);
        parser_ctx.advance()?;
        let node = Self::new_with_ctx(&mut parser_ctx)?;
        parser_ctx.expect_end()?;
        Ok(ctx.alloc(node))
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

/// Parses a full GraphQL document.
pub fn parse_document<'a, S: AsRef<[u8]> + ?Sized>(
    ctx: &'a ASTContext,
    source: &'a S,
) -> Result<&'a Document<'a>> {
    Document::parse(ctx, source)
}

/// Parses a standalone value literal, which may contain variables.
pub fn parse_value<'a, S: AsRef<[u8]> + ?Sized>(
    ctx: &'a ASTContext,
    source: &'a S,
) -> Result<&'a Value<'a>> {
    Value::parse(ctx, source)
}

/// Parses a standalone type reference, e.g. `[String!]!`.
pub fn parse_type<'a, S: AsRef<[u8]> + ?Sized>(
    ctx: &'a ASTContext,
    source: &'a S,
) -> Result<&'a Type<'a>> {
    Type::parse(ctx, source)
}

/// Parses a single field selection, including its arguments, directives and sub-selections.
pub fn parse_field<'a, S: AsRef<[u8]> + ?Sized>(
    ctx: &'a ASTContext,
    source: &'a S,
) -> Result<&'a Field<'a>> {
    Field::parse(ctx, source)
}

/// Parses a schema coordinate, e.g. `Type.field(argument:)`.
pub fn parse_schema_coordinate<'a, S: AsRef<[u8]> + ?Sized>(
    ctx: &'a ASTContext,
    source: &'a S,
) -> Result<&'a SchemaCoordinate<'a>> {
    SchemaCoordinate::parse(ctx, source)
}

impl<'a> private::ParseNode<'a> for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<BooleanValue> {
        let value = if ctx.is_keyword("true") {
            true
        } else if ctx.is_keyword("false") {
            false
        } else {
            return Err(ctx.unexpected(ASTKind::Boolean, "`true` or `false`"));
        };
        ctx.node()?;
        ctx.advance()?;
        Ok(BooleanValue { value })
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<EnumValue<'a>> {
        if ctx.is_keyword("true") || ctx.is_keyword("false") || ctx.is_keyword("null") {
            return Err(ctx.unexpected(ASTKind::Enum, "an enum value"));
        }
        ctx.node()?;
        let value = ctx.expect_name(ASTKind::Enum)?;
        Ok(EnumValue { value })
    }
}

impl<'a> private::ParseNode<'a> for FloatValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FloatValue<'a>> {
        if ctx.kind() != TokenKind::Float {
            return Err(ctx.unexpected(ASTKind::Float, "Float"));
        }
        ctx.node()?;
        let value = ctx.token_str()?;
        let format = ctx.lexer.float_format().unwrap_or(FloatFormat::FixedPoint);
        ctx.advance()?;
        Ok(FloatValue { value, format })
    }
}

impl<'a> private::ParseNode<'a> for IntValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<IntValue<'a>> {
        if ctx.kind() != TokenKind::Integer {
            return Err(ctx.unexpected(ASTKind::Int, "Int"));
        }
        ctx.node()?;
        let value = ctx.token_str()?;
        ctx.advance()?;
        Ok(IntValue { value })
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<StringValue<'a>> {
        let kind = ctx.kind();
        if !kind.is_string() {
            return Err(ctx.unexpected(ASTKind::String, "String"));
        }
        ctx.node()?;
        let value = decode_string(ctx.arena, ctx.lexer.value(), kind, ctx.lexer.has_escapes())
            .map_err(|error| {
                let start = ctx.lexer.value_start() + error.offset;
                Error::at_span(
                    error.message,
                    ctx.lexer.source(),
                    start,
                    start + error.len,
                    ErrorType::Lexical,
                )
            })?;
        ctx.advance()?;
        Ok(StringValue { value })
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Variable<'a>> {
        ctx.node()?;
        ctx.expect(TokenKind::Dollar, ASTKind::Variable)?;
        let name = ctx.expect_name(ASTKind::Variable)?;
        Ok(Variable { name })
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Value<'a>> {
        match ctx.kind() {
            TokenKind::Dollar if ctx.constant => {
                Err(ctx.unexpected(ASTKind::Value, "a constant value"))
            }
            TokenKind::Dollar => Variable::new_with_ctx(ctx).map(Value::Variable),
            TokenKind::Name if ctx.is_keyword("null") => {
                ctx.node()?;
                ctx.advance()?;
                Ok(Value::Null)
            }
            TokenKind::Name if ctx.is_keyword("true") || ctx.is_keyword("false") => {
                BooleanValue::new_with_ctx(ctx).map(Value::Boolean)
            }
            TokenKind::Name => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            TokenKind::Integer => IntValue::new_with_ctx(ctx).map(Value::Int),
            TokenKind::Float => FloatValue::new_with_ctx(ctx).map(Value::Float),
            TokenKind::String | TokenKind::BlockString => {
                StringValue::new_with_ctx(ctx).map(Value::String)
            }
            TokenKind::LeftBracket => ListValue::new_with_ctx(ctx).map(Value::List),
            TokenKind::LeftBrace => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            _ => Err(ctx.unexpected(ASTKind::Value, "a value")),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ObjectField<'a>> {
        ctx.node()?;
        let name = ctx.expect_name(ASTKind::ObjectField)?;
        ctx.expect(TokenKind::Colon, ASTKind::ObjectField)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(ObjectField { name, value })
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ObjectValue<'a>> {
        ctx.node()?;
        ctx.enter()?;
        ctx.expect(TokenKind::LeftBrace, ASTKind::Object)?;
        let mut children = Vec::new_in(ctx.arena);
        while !ctx.skip(TokenKind::RightBrace)? {
            children.push(ObjectField::new_with_ctx(ctx)?);
        }
        ctx.exit();
        Ok(ObjectValue { children })
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ListValue<'a>> {
        ctx.node()?;
        ctx.enter()?;
        ctx.expect(TokenKind::LeftBracket, ASTKind::List)?;
        let mut children = Vec::new_in(ctx.arena);
        while !ctx.skip(TokenKind::RightBracket)? {
            children.push(Value::new_with_ctx(ctx)?);
        }
        ctx.exit();
        Ok(ListValue { children })
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Argument<'a>> {
        ctx.node()?;
        let name = ctx.expect_name(ASTKind::Argument)?;
        ctx.expect(TokenKind::Colon, ASTKind::Argument)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(Argument { name, value })
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Arguments<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        if ctx.skip(TokenKind::LeftParenthesis)? {
            while !ctx.skip(TokenKind::RightParenthesis)? {
                children.push(Argument::new_with_ctx(ctx)?);
            }
        }
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Directive<'a>> {
        ctx.node()?;
        let start = ctx.start();
        ctx.expect(TokenKind::At, ASTKind::Directive)?;
        let name = ctx.expect_name(ASTKind::Directive)?;
        let arguments = Arguments::new_with_ctx(ctx)?;
        Ok(Directive {
            name,
            arguments,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Directives<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        while ctx.kind() == TokenKind::At {
            children.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Field<'a>> {
        ctx.node()?;
        ctx.field()?;
        let start = ctx.start();
        let name_or_alias = ctx.expect_name(ASTKind::Field)?;
        let (alias, name) = if ctx.skip(TokenKind::Colon)? {
            (Some(name_or_alias), ctx.expect_name(ASTKind::Field)?)
        } else {
            (None, name_or_alias)
        };
        let arguments = Arguments::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: ctx.finish(start),
        })
    }
}

/// Parses the remainder of a fragment spread after its `...` has been consumed.
fn fragment_spread<'a>(
    ctx: &mut ParserContext<'a>,
    start: Option<Location>,
) -> Result<FragmentSpread<'a>> {
    if ctx.is_keyword("on") {
        return Err(ctx.unexpected(ASTKind::FragmentSpread, "a fragment name"));
    }
    let name = NamedType::new_with_ctx(ctx)?;
    let directives = Directives::new_with_ctx(ctx)?;
    Ok(FragmentSpread {
        name,
        directives,
        location: ctx.finish(start),
    })
}

/// Parses the remainder of an inline fragment after its `...` has been consumed.
fn inline_fragment<'a>(
    ctx: &mut ParserContext<'a>,
    start: Option<Location>,
) -> Result<InlineFragment<'a>> {
    let type_condition = if ctx.skip_keyword("on")? {
        Some(NamedType::new_with_ctx(ctx)?)
    } else {
        None
    };
    let directives = Directives::new_with_ctx(ctx)?;
    if ctx.kind() != TokenKind::LeftBrace {
        return Err(ctx.unexpected(ASTKind::InlineFragment, "`{`"));
    }
    let selection_set = SelectionSet::new_with_ctx(ctx)?;
    Ok(InlineFragment {
        type_condition,
        directives,
        selection_set,
        location: ctx.finish(start),
    })
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FragmentSpread<'a>> {
        ctx.node()?;
        let start = ctx.start();
        ctx.expect(TokenKind::Spread, ASTKind::FragmentSpread)?;
        fragment_spread(ctx, start)
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InlineFragment<'a>> {
        ctx.node()?;
        let start = ctx.start();
        ctx.expect(TokenKind::Spread, ASTKind::InlineFragment)?;
        inline_fragment(ctx, start)
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<NamedType<'a>> {
        ctx.node()?;
        let name = ctx.expect_name(ASTKind::NamedType)?;
        Ok(NamedType { name })
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Selection<'a>> {
        match ctx.kind() {
            TokenKind::Name => Field::new_with_ctx(ctx).map(Selection::Field),
            TokenKind::Spread => {
                ctx.node()?;
                let start = ctx.start();
                ctx.advance()?;
                match ctx.kind() {
                    TokenKind::At | TokenKind::LeftBrace => {
                        inline_fragment(ctx, start).map(Selection::InlineFragment)
                    }
                    TokenKind::Name if ctx.is_keyword("on") => {
                        inline_fragment(ctx, start).map(Selection::InlineFragment)
                    }
                    TokenKind::Name => fragment_spread(ctx, start).map(Selection::FragmentSpread),
                    _ => Err(ctx.unexpected(ASTKind::Selection, "a fragment name or `on`")),
                }
            }
            _ => Err(ctx.unexpected(ASTKind::Selection, "a field or fragment")),
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<SelectionSet<'a>> {
        let mut selections = Vec::new_in(ctx.arena);
        if ctx.kind() == TokenKind::LeftBrace {
            ctx.enter()?;
            ctx.advance()?;
            loop {
                selections.push(Selection::new_with_ctx(ctx)?);
                if ctx.skip(TokenKind::RightBrace)? {
                    break;
                }
            }
            ctx.exit();
        }
        Ok(SelectionSet { selections })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Type<'a>> {
        ctx.node()?;
        let of_type = if ctx.kind() == TokenKind::LeftBracket {
            ctx.enter()?;
            ctx.advance()?;
            let inner = Type::new_with_ctx(ctx)?;
            ctx.expect(TokenKind::RightBracket, ASTKind::ListType)?;
            ctx.exit();
            Type::ListType(ctx.arena.alloc(inner))
        } else {
            let name = ctx.expect_name(ASTKind::Type)?;
            Type::NamedType(NamedType { name })
        };
        if ctx.skip(TokenKind::Bang)? {
            if ctx.kind() == TokenKind::Bang {
                return Err(ctx.unexpected(ASTKind::NonNullType, "a nullable type before `!`"));
            }
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<VariableDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let variable = Variable::new_with_ctx(ctx)?;
        ctx.expect(TokenKind::Colon, ASTKind::VariableDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.skip(TokenKind::Equal)? {
            ctx.constant(Value::new_with_ctx)?
        } else {
            Value::Null
        };
        let directives = ctx.constant(Directives::new_with_ctx)?;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<VariableDefinitions<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        if ctx.skip(TokenKind::LeftParenthesis)? {
            loop {
                children.push(VariableDefinition::new_with_ctx(ctx)?);
                if ctx.skip(TokenKind::RightParenthesis)? {
                    break;
                }
            }
        }
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FragmentDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        ctx.expect_keyword("fragment", ASTKind::FragmentDefinition)?;
        if ctx.is_keyword("on") {
            return Err(ctx.unexpected(ASTKind::FragmentDefinition, "a fragment name"));
        }
        let name = NamedType::new_with_ctx(ctx)?;
        let variable_definitions = if ctx.options.allow_fragment_variables {
            VariableDefinitions::new_with_ctx(ctx)?
        } else {
            VariableDefinitions::default_in(ctx.arena)
        };
        ctx.expect_keyword("on", ASTKind::FragmentDefinition)?;
        let type_condition = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        if ctx.kind() != TokenKind::LeftBrace {
            return Err(ctx.unexpected(ASTKind::FragmentDefinition, "`{`"));
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(FragmentDefinition {
            name,
            variable_definitions,
            type_condition,
            directives,
            selection_set,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<OperationKind> {
        let operation = match ctx.lexer.value() {
            b"query" => OperationKind::Query,
            b"mutation" => OperationKind::Mutation,
            b"subscription" => OperationKind::Subscription,
            _ => {
                return Err(ctx.unexpected(
                    ASTKind::OperationKind,
                    "`query`, `mutation` or `subscription`",
                ))
            }
        };
        if ctx.kind() != TokenKind::Name {
            return Err(ctx.unexpected(
                ASTKind::OperationKind,
                "`query`, `mutation` or `subscription`",
            ));
        }
        ctx.advance()?;
        Ok(operation)
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<OperationDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        if ctx.kind() == TokenKind::LeftBrace {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            return Ok(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: VariableDefinitions::default_in(ctx.arena),
                directives: Directives::default_in(ctx.arena),
                selection_set,
                location: ctx.finish(start),
            });
        }
        if ctx.kind() != TokenKind::Name {
            return Err(ctx.unexpected(ASTKind::OperationDefinition, "`{`"));
        }
        let operation = OperationKind::new_with_ctx(ctx)?;
        let name = if ctx.kind() == TokenKind::Name {
            Some(NamedType::new_with_ctx(ctx)?)
        } else {
            None
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        if ctx.kind() != TokenKind::LeftBrace {
            return Err(ctx.unexpected(ASTKind::OperationDefinition, "`{`"));
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            location: ctx.finish(start),
        })
    }
}

/// Parses an optional description preceding a type system definition.
#[inline]
fn description<'a>(ctx: &mut ParserContext<'a>) -> Result<Option<StringValue<'a>>> {
    if ctx.kind().is_string() {
        StringValue::new_with_ctx(ctx).map(Some)
    } else {
        Ok(None)
    }
}

/// Parses an optional `implements A & B` clause.
fn implements_interfaces<'a>(ctx: &mut ParserContext<'a>) -> Result<Vec<'a, NamedType<'a>>> {
    let mut interfaces = Vec::new_in(ctx.arena);
    if ctx.skip_keyword("implements")? {
        ctx.skip(TokenKind::Ampersand)?;
        loop {
            interfaces.push(NamedType::new_with_ctx(ctx)?);
            if !ctx.skip(TokenKind::Ampersand)? {
                break;
            }
        }
    }
    Ok(interfaces)
}

/// Parses an optional, non-empty list of nodes wrapped in `open` and `close` tokens.
#[inline]
fn optional_block<'a, T: private::ParseNode<'a>>(
    ctx: &mut ParserContext<'a>,
    open: TokenKind,
    close: TokenKind,
) -> Result<Vec<'a, T>> {
    let mut children = Vec::new_in(ctx.arena);
    if ctx.skip(open)? {
        loop {
            children.push(T::new_with_ctx(ctx)?);
            if ctx.skip(close)? {
                break;
            }
        }
    }
    Ok(children)
}

#[inline]
fn fields_definition<'a>(ctx: &mut ParserContext<'a>) -> Result<Vec<'a, FieldDefinition<'a>>> {
    optional_block(ctx, TokenKind::LeftBrace, TokenKind::RightBrace)
}

#[inline]
fn input_fields_definition<'a>(
    ctx: &mut ParserContext<'a>,
) -> Result<Vec<'a, InputValueDefinition<'a>>> {
    optional_block(ctx, TokenKind::LeftBrace, TokenKind::RightBrace)
}

#[inline]
fn arguments_definition<'a>(
    ctx: &mut ParserContext<'a>,
) -> Result<Vec<'a, InputValueDefinition<'a>>> {
    optional_block(ctx, TokenKind::LeftParenthesis, TokenKind::RightParenthesis)
}

/// Parses an optional `= A | B` clause of a union type.
fn union_member_types<'a>(ctx: &mut ParserContext<'a>) -> Result<Vec<'a, NamedType<'a>>> {
    let mut types = Vec::new_in(ctx.arena);
    if ctx.skip(TokenKind::Equal)? {
        ctx.skip(TokenKind::Pipe)?;
        loop {
            types.push(NamedType::new_with_ctx(ctx)?);
            if !ctx.skip(TokenKind::Pipe)? {
                break;
            }
        }
    }
    Ok(types)
}

/// Parses the shared head of an extension, `extend <keyword> <Name>`.
fn extension_name<'a>(ctx: &mut ParserContext<'a>, keyword: &str) -> Result<&'a str> {
    ctx.expect_keyword("extend", ASTKind::TypeExtension)?;
    ctx.expect_keyword(keyword, ASTKind::TypeExtension)?;
    ctx.expect_name(ASTKind::TypeExtension)
}

impl<'a> private::ParseNode<'a> for OperationTypeDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<OperationTypeDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let operation = OperationKind::new_with_ctx(ctx)?;
        ctx.expect(TokenKind::Colon, ASTKind::OperationTypeDefinition)?;
        let named_type = NamedType::new_with_ctx(ctx)?;
        Ok(OperationTypeDefinition {
            operation,
            named_type,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for SchemaDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<SchemaDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("schema", ASTKind::SchemaDefinition)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        if ctx.kind() != TokenKind::LeftBrace {
            return Err(ctx.unexpected(ASTKind::SchemaDefinition, "`{`"));
        }
        let operation_types = optional_block(ctx, TokenKind::LeftBrace, TokenKind::RightBrace)?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for SchemaExtension<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<SchemaExtension<'a>> {
        ctx.node()?;
        let start = ctx.start();
        ctx.expect_keyword("extend", ASTKind::SchemaExtension)?;
        ctx.expect_keyword("schema", ASTKind::SchemaExtension)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let operation_types = optional_block(ctx, TokenKind::LeftBrace, TokenKind::RightBrace)?;
        if directives.is_empty() && operation_types.is_empty() {
            return Err(ctx.unexpected(ASTKind::SchemaExtension, "directives or operation types"));
        }
        Ok(SchemaExtension {
            directives,
            operation_types,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for ScalarTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ScalarTypeDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("scalar", ASTKind::ScalarTypeDefinition)?;
        let name = ctx.expect_name(ASTKind::ScalarTypeDefinition)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for ScalarTypeExtension<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ScalarTypeExtension<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let name = extension_name(ctx, "scalar")?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        if directives.is_empty() {
            return Err(ctx.unexpected(ASTKind::TypeExtension, "directives"));
        }
        Ok(ScalarTypeExtension {
            name,
            directives,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for ObjectTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ObjectTypeDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("type", ASTKind::ObjectTypeDefinition)?;
        let name = ctx.expect_name(ASTKind::ObjectTypeDefinition)?;
        let interfaces = implements_interfaces(ctx)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let fields = fields_definition(ctx)?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for ObjectTypeExtension<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ObjectTypeExtension<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let name = extension_name(ctx, "type")?;
        let interfaces = implements_interfaces(ctx)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let fields = fields_definition(ctx)?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(ctx.unexpected(
                ASTKind::TypeExtension,
                "interfaces, directives or fields",
            ));
        }
        Ok(ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InterfaceTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InterfaceTypeDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("interface", ASTKind::InterfaceTypeDefinition)?;
        let name = ctx.expect_name(ASTKind::InterfaceTypeDefinition)?;
        let interfaces = implements_interfaces(ctx)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let fields = fields_definition(ctx)?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InterfaceTypeExtension<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InterfaceTypeExtension<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let name = extension_name(ctx, "interface")?;
        let interfaces = implements_interfaces(ctx)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let fields = fields_definition(ctx)?;
        if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(ctx.unexpected(
                ASTKind::TypeExtension,
                "interfaces, directives or fields",
            ));
        }
        Ok(InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for UnionTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<UnionTypeDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("union", ASTKind::UnionTypeDefinition)?;
        let name = ctx.expect_name(ASTKind::UnionTypeDefinition)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let types = union_member_types(ctx)?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for UnionTypeExtension<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<UnionTypeExtension<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let name = extension_name(ctx, "union")?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let types = union_member_types(ctx)?;
        if directives.is_empty() && types.is_empty() {
            return Err(ctx.unexpected(ASTKind::TypeExtension, "directives or member types"));
        }
        Ok(UnionTypeExtension {
            name,
            directives,
            types,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<EnumValueDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        if ctx.is_keyword("true") || ctx.is_keyword("false") || ctx.is_keyword("null") {
            return Err(ctx.unexpected(ASTKind::EnumValueDefinition, "an enum value"));
        }
        let name = ctx.expect_name(ASTKind::EnumValueDefinition)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<EnumTypeDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("enum", ASTKind::EnumTypeDefinition)?;
        let name = ctx.expect_name(ASTKind::EnumTypeDefinition)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let values = optional_block(ctx, TokenKind::LeftBrace, TokenKind::RightBrace)?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumTypeExtension<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<EnumTypeExtension<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let name = extension_name(ctx, "enum")?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let values = optional_block(ctx, TokenKind::LeftBrace, TokenKind::RightBrace)?;
        if directives.is_empty() && values.is_empty() {
            return Err(ctx.unexpected(ASTKind::TypeExtension, "directives or enum values"));
        }
        Ok(EnumTypeExtension {
            name,
            directives,
            values,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InputObjectTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InputObjectTypeDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("input", ASTKind::InputObjectTypeDefinition)?;
        let name = ctx.expect_name(ASTKind::InputObjectTypeDefinition)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let fields = input_fields_definition(ctx)?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InputObjectTypeExtension<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InputObjectTypeExtension<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let name = extension_name(ctx, "input")?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        let fields = input_fields_definition(ctx)?;
        if directives.is_empty() && fields.is_empty() {
            return Err(ctx.unexpected(ASTKind::TypeExtension, "directives or input fields"));
        }
        Ok(InputObjectTypeExtension {
            name,
            directives,
            fields,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for FieldDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FieldDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        let name = ctx.expect_name(ASTKind::FieldDefinition)?;
        let arguments = arguments_definition(ctx)?;
        ctx.expect(TokenKind::Colon, ASTKind::FieldDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            of_type,
            directives,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InputValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InputValueDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        let name = ctx.expect_name(ASTKind::InputValueDefinition)?;
        ctx.expect(TokenKind::Colon, ASTKind::InputValueDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.skip(TokenKind::Equal)? {
            Some(ctx.constant(Value::new_with_ctx)?)
        } else {
            None
        };
        let directives = ctx.constant(Directives::new_with_ctx)?;
        Ok(InputValueDefinition {
            description,
            name,
            of_type,
            default_value,
            directives,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for DirectiveLocation {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<DirectiveLocation> {
        let location = if ctx.kind() == TokenKind::Name {
            DirectiveLocation::from_bytes(ctx.lexer.value())
        } else {
            None
        };
        match location {
            Some(location) => {
                ctx.advance()?;
                Ok(location)
            }
            None => Err(ctx.unexpected(ASTKind::DirectiveLocation, "a directive location")),
        }
    }
}

impl<'a> private::ParseNode<'a> for DirectiveDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<DirectiveDefinition<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let description = description(ctx)?;
        ctx.expect_keyword("directive", ASTKind::DirectiveDefinition)?;
        ctx.expect(TokenKind::At, ASTKind::DirectiveDefinition)?;
        let name = ctx.expect_name(ASTKind::DirectiveDefinition)?;
        let arguments = arguments_definition(ctx)?;
        let is_repeatable = ctx.skip_keyword("repeatable")?;
        ctx.expect_keyword("on", ASTKind::DirectiveDefinition)?;
        ctx.skip(TokenKind::Pipe)?;
        let mut locations = Vec::new_in(ctx.arena);
        loop {
            locations.push(DirectiveLocation::new_with_ctx(ctx)?);
            if !ctx.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            is_repeatable,
            locations,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for SchemaCoordinate<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<SchemaCoordinate<'a>> {
        ctx.node()?;
        let start = ctx.start();
        let of_directive = ctx.skip(TokenKind::At)?;
        let name = ctx.expect_name(ASTKind::SchemaCoordinate)?;
        let member_name = if !of_directive && ctx.skip(TokenKind::Dot)? {
            Some(ctx.expect_name(ASTKind::SchemaCoordinate)?)
        } else {
            None
        };
        let argument_name = if ctx.kind() == TokenKind::LeftParenthesis {
            if !of_directive && member_name.is_none() {
                return Err(ctx.unexpected(ASTKind::SchemaCoordinate, "`.` or <end of file>"));
            }
            ctx.advance()?;
            let argument_name = ctx.expect_name(ASTKind::SchemaCoordinate)?;
            ctx.expect(TokenKind::Colon, ASTKind::SchemaCoordinate)?;
            ctx.expect(TokenKind::RightParenthesis, ASTKind::SchemaCoordinate)?;
            Some(argument_name)
        } else {
            None
        };
        Ok(SchemaCoordinate {
            of_directive,
            name,
            member_name,
            argument_name,
            location: ctx.finish(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Definition<'a>> {
        let has_description = ctx.kind().is_string();
        let keyword_lexer = if has_description {
            ctx.lookahead()?
        } else {
            ctx.lexer.clone()
        };
        let keyword = if keyword_lexer.kind() == TokenKind::Name {
            keyword_lexer.value()
        } else {
            b""
        };
        match keyword {
            b"schema" => SchemaDefinition::new_with_ctx(ctx).map(Definition::Schema),
            b"scalar" => ScalarTypeDefinition::new_with_ctx(ctx).map(Definition::Scalar),
            b"type" => ObjectTypeDefinition::new_with_ctx(ctx).map(Definition::Object),
            b"interface" => InterfaceTypeDefinition::new_with_ctx(ctx).map(Definition::Interface),
            b"union" => UnionTypeDefinition::new_with_ctx(ctx).map(Definition::Union),
            b"enum" => EnumTypeDefinition::new_with_ctx(ctx).map(Definition::Enum),
            b"input" => InputObjectTypeDefinition::new_with_ctx(ctx).map(Definition::InputObject),
            b"directive" => DirectiveDefinition::new_with_ctx(ctx).map(Definition::Directive),
            _ if has_description => Err(ctx.unexpected_at(
                &keyword_lexer,
                ASTKind::Definition,
                "a type system definition after a description",
            )),
            b"fragment" => FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment),
            b"extend" => {
                let mut extended = keyword_lexer;
                extended.move_next()?;
                let keyword = if extended.kind() == TokenKind::Name {
                    extended.value()
                } else {
                    b""
                };
                match keyword {
                    b"schema" => SchemaExtension::new_with_ctx(ctx).map(Definition::SchemaExtension),
                    b"scalar" => {
                        ScalarTypeExtension::new_with_ctx(ctx).map(Definition::ScalarExtension)
                    }
                    b"type" => {
                        ObjectTypeExtension::new_with_ctx(ctx).map(Definition::ObjectExtension)
                    }
                    b"interface" => InterfaceTypeExtension::new_with_ctx(ctx)
                        .map(Definition::InterfaceExtension),
                    b"union" => UnionTypeExtension::new_with_ctx(ctx).map(Definition::UnionExtension),
                    b"enum" => EnumTypeExtension::new_with_ctx(ctx).map(Definition::EnumExtension),
                    b"input" => InputObjectTypeExtension::new_with_ctx(ctx)
                        .map(Definition::InputObjectExtension),
                    _ => Err(ctx.unexpected_at(
                        &extended,
                        ASTKind::TypeExtension,
                        "an extendable type system definition",
                    )),
                }
            }
            // Operations and anything unrecognized, which fails as an invalid shorthand query
            _ => OperationDefinition::new_with_ctx(ctx).map(Definition::Operation),
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Document<'a>> {
        let mut definitions = Vec::new_in(ctx.arena);
        while ctx.kind() != TokenKind::EndOfFile {
            definitions.push(Definition::new_with_ctx(ctx)?);
        }
        Ok(Document {
            definitions,
            size_hint: ctx.lexer.source().len(),
        })
    }
}

#[cfg(test)]
mod tests;
