/// Options that change how source text is parsed into an AST.
///
/// The limits are ceilings that abort parsing with a [`Limit`](crate::error::ErrorType::Limit)
/// error as soon as they're exceeded, which bounds the work spent on adversarial documents before
/// any validation happens.
///
/// ```
/// use graphql_wire::ast::*;
///
/// let ctx = ASTContext::new();
/// let options = ParserOptions {
///     max_allowed_fields: 2,
///     ..ParserOptions::DEFAULT
/// };
/// assert!(Document::parse_with_options(&ctx, "{ a b }", options).is_ok());
/// assert!(Document::parse_with_options(&ctx, "{ a b c }", options).is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct ParserOptions {
    /// Don't record source [`Location`](crate::error::Location)s on AST Nodes.
    pub no_locations: bool,
    /// Accept variable definitions on fragment definitions, e.g. `fragment A($x: Int) on B`.
    pub allow_fragment_variables: bool,
    /// The maximum number of AST Nodes a document may consist of.
    pub max_allowed_nodes: usize,
    /// The maximum number of tokens the lexer may read, not counting comments.
    pub max_allowed_tokens: usize,
    /// The maximum number of fields a document may select.
    pub max_allowed_fields: usize,
    /// The maximum nesting of selection sets, list and object values, and list types.
    pub max_allowed_depth: usize,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions {
        no_locations: false,
        allow_fragment_variables: false,
        max_allowed_nodes: usize::MAX,
        max_allowed_tokens: usize::MAX,
        max_allowed_fields: 2048,
        max_allowed_depth: 64,
    };
}

impl Default for ParserOptions {
    #[inline]
    fn default() -> Self {
        ParserOptions::DEFAULT
    }
}
