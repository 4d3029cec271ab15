use std::fmt;

/// The kind of a token as produced by the [`Lexer`](super::Lexer).
///
/// Tokens don't carry their values. Instead the lexer exposes the byte range of the current
/// token and its value, which point back into the source buffer.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    /// The lexer hasn't read any token yet.
    StartOfFile,
    EndOfFile,
    /// `!`
    Bang,
    /// `?`
    QuestionMark,
    /// `$`
    Dollar,
    /// `&`
    Ampersand,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `...`
    Spread,
    /// A lone `.`, only valid inside schema coordinates.
    Dot,
    /// `:`
    Colon,
    /// `=`
    Equal,
    /// `@`
    At,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `|`
    Pipe,
    /// `,`, which is only a token when reading JSON and whitespace otherwise.
    Comma,
    Name,
    Integer,
    Float,
    String,
    BlockString,
    Comment,
}

impl TokenKind {
    /// Maps a single punctuator byte to its token kind.
    #[inline]
    pub(crate) fn from_punctuator(byte: u8) -> Option<TokenKind> {
        match byte {
            b'!' => Some(TokenKind::Bang),
            b'?' => Some(TokenKind::QuestionMark),
            b'$' => Some(TokenKind::Dollar),
            b'&' => Some(TokenKind::Ampersand),
            b'(' => Some(TokenKind::LeftParenthesis),
            b')' => Some(TokenKind::RightParenthesis),
            b':' => Some(TokenKind::Colon),
            b'=' => Some(TokenKind::Equal),
            b'@' => Some(TokenKind::At),
            b'[' => Some(TokenKind::LeftBracket),
            b']' => Some(TokenKind::RightBracket),
            b'{' => Some(TokenKind::LeftBrace),
            b'}' => Some(TokenKind::RightBrace),
            b'|' => Some(TokenKind::Pipe),
            _ => None,
        }
    }

    /// Whether tokens of this kind are string literals, which can also start a description.
    #[inline]
    pub fn is_string(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::BlockString)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::StartOfFile => f.write_str("<start of file>"),
            TokenKind::EndOfFile => f.write_str("<end of file>"),
            TokenKind::Bang => f.write_str("`!`"),
            TokenKind::QuestionMark => f.write_str("`?`"),
            TokenKind::Dollar => f.write_str("`$`"),
            TokenKind::Ampersand => f.write_str("`&`"),
            TokenKind::LeftParenthesis => f.write_str("`(`"),
            TokenKind::RightParenthesis => f.write_str("`)`"),
            TokenKind::Spread => f.write_str("`...`"),
            TokenKind::Dot => f.write_str("`.`"),
            TokenKind::Colon => f.write_str("`:`"),
            TokenKind::Equal => f.write_str("`=`"),
            TokenKind::At => f.write_str("`@`"),
            TokenKind::LeftBracket => f.write_str("`[`"),
            TokenKind::RightBracket => f.write_str("`]`"),
            TokenKind::LeftBrace => f.write_str("`{`"),
            TokenKind::RightBrace => f.write_str("`}`"),
            TokenKind::Pipe => f.write_str("`|`"),
            TokenKind::Comma => f.write_str("`,`"),
            TokenKind::Name => f.write_str("Name"),
            TokenKind::Integer => f.write_str("Int"),
            TokenKind::Float => f.write_str("Float"),
            TokenKind::String => f.write_str("String"),
            TokenKind::BlockString => f.write_str("Block String"),
            TokenKind::Comment => f.write_str("Comment"),
        }
    }
}

/// How a float literal was written.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FloatFormat {
    /// A fractional part but no exponent, e.g. `1.5`.
    FixedPoint,
    /// An exponent, with or without a fractional part, e.g. `1e10` or `1.5E-3`.
    Exponential,
}
