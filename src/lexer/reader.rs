use super::classify::*;
use super::token::{FloatFormat, TokenKind};
use crate::error::{Error, ErrorType, Location, Result};

const BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

/// A stateful lexer over a UTF-8 byte buffer.
///
/// The lexer only ever holds its current token. Calling [`Lexer::read`] or [`Lexer::move_next`]
/// replaces it, and the accessors then describe the new token. Token values are byte ranges into
/// the source and are never copied.
///
/// Line terminators inside block strings are counted while the block string is scanned but only
/// applied to the line counter when the next token is read, so that the block string token itself
/// reports the line it starts on.
///
/// A lexer created with [`Lexer::new_json`] reads JSON text instead. Commas are then emitted as
/// tokens, while comments and block strings don't exist.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a [u8],
    json: bool,
    position: usize,
    line: usize,
    line_start: usize,
    pending_newlines: usize,
    pending_line_start: usize,

    kind: TokenKind,
    start: usize,
    end: usize,
    value_start: usize,
    value_end: usize,
    token_line: usize,
    token_column: usize,
    float_format: Option<FloatFormat>,
    has_escapes: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for a source buffer. A leading byte order mark is skipped.
    pub fn new(source: &'a [u8]) -> Self {
        let position = if source.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len()
        } else {
            0
        };
        Lexer {
            source,
            json: false,
            position,
            line: 1,
            line_start: position,
            pending_newlines: 0,
            pending_line_start: 0,
            kind: TokenKind::StartOfFile,
            start: position,
            end: position,
            value_start: position,
            value_end: position,
            token_line: 1,
            token_column: 1,
            float_format: None,
            has_escapes: false,
        }
    }

    /// Create a new lexer for JSON text, e.g. a request body.
    ///
    /// Strings follow JSON's rules, which reject all unescaped characters below U+0020 but allow
    /// U+007F.
    pub fn new_json(source: &'a [u8]) -> Self {
        Lexer {
            json: true,
            ..Lexer::new(source)
        }
    }

    /// The source buffer this lexer reads from.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// The kind of the current token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte offset at which the current token starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset right after the current token.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The 1-indexed line of the current token's first byte.
    #[inline]
    pub fn line(&self) -> usize {
        self.token_line
    }

    /// The 1-indexed column of the current token's first byte.
    #[inline]
    pub fn column(&self) -> usize {
        self.token_column
    }

    /// The raw value of the current token.
    ///
    /// For names and numbers this is the token itself, for strings the content between the
    /// quotes with escape sequences still in place, and for comments the text after `#` without
    /// its leading whitespace.
    #[inline]
    pub fn value(&self) -> &'a [u8] {
        &self.source[self.value_start..self.value_end]
    }

    /// Byte offset at which the current token's value starts.
    #[inline]
    pub fn value_start(&self) -> usize {
        self.value_start
    }

    /// The format of the current token if it's a float.
    #[inline]
    pub fn float_format(&self) -> Option<FloatFormat> {
        self.float_format
    }

    /// Whether the current string token contains escape sequences that must be decoded.
    #[inline]
    pub fn has_escapes(&self) -> bool {
        self.has_escapes
    }

    /// The location of the current token.
    #[inline]
    pub fn location(&self) -> Location {
        Location {
            start: self.start,
            end: self.end,
            line: self.token_line,
            column: self.token_column,
        }
    }

    /// Whether the current token is a name with exactly the given bytes.
    #[inline]
    pub fn is_keyword(&self, keyword: &[u8]) -> bool {
        self.kind == TokenKind::Name && self.value() == keyword
    }

    /// Describes the current token for error messages, e.g. ``Name `field` `` or `` `{` ``.
    pub(crate) fn describe_token(&self) -> String {
        match self.kind {
            kind @ (TokenKind::Name | TokenKind::Integer | TokenKind::Float) => {
                format!("{} `{}`", kind, String::from_utf8_lossy(self.value()))
            }
            kind => kind.to_string(),
        }
    }

    /// Reads the next significant token, skipping over comments.
    ///
    /// Returns `false` once the end of the input has been reached.
    pub fn move_next(&mut self) -> Result<bool> {
        while self.read()? && self.kind == TokenKind::Comment {}
        Ok(self.kind != TokenKind::EndOfFile)
    }

    /// Reads the next token, including comments.
    ///
    /// Returns `false` once the end of the input has been reached.
    pub fn read(&mut self) -> Result<bool> {
        if self.pending_newlines > 0 {
            self.line += self.pending_newlines;
            self.line_start = self.pending_line_start;
            self.pending_newlines = 0;
        }

        self.skip_whitespace();
        self.start = self.position;
        self.token_line = self.line;
        self.token_column = self.position - self.line_start + 1;
        self.float_format = None;
        self.has_escapes = false;

        let byte = match self.source.get(self.position) {
            Some(byte) => *byte,
            None => {
                self.kind = TokenKind::EndOfFile;
                self.end = self.position;
                self.value_start = self.position;
                self.value_end = self.position;
                return Ok(false);
            }
        };

        match byte {
            b',' if self.json => {
                self.position += 1;
                self.finish(TokenKind::Comma, self.start, self.position);
            }
            b'#' if !self.json => self.read_comment(),
            b'"' if !self.json && self.source[self.position..].starts_with(b"\"\"\"") => {
                self.read_block_string()?
            }
            b'"' => self.read_string()?,
            b'.' => self.read_dot()?,
            b'-' => self.read_number()?,
            byte if is_digit(byte) => self.read_number()?,
            byte if is_name_start(byte) => self.read_name(),
            byte => match TokenKind::from_punctuator(byte) {
                Some(kind) => {
                    self.position += 1;
                    self.finish(kind, self.start, self.position);
                }
                None => {
                    return Err(self.error_at(
                        format!("Unexpected character {}", describe_byte(self.source, self.position)),
                        self.position,
                        self.position + 1,
                    ))
                }
            },
        }
        Ok(true)
    }

    #[inline]
    fn finish(&mut self, kind: TokenKind, value_start: usize, value_end: usize) {
        self.kind = kind;
        self.end = self.position;
        self.value_start = value_start;
        self.value_end = value_end;
    }

    #[inline]
    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.source.get(self.position) {
            match byte {
                b'\n' => {
                    self.position += 1;
                    self.line += 1;
                    self.line_start = self.position;
                }
                b'\r' => {
                    self.position += 1;
                    if self.source.get(self.position) == Some(&b'\n') {
                        self.position += 1;
                    }
                    self.line += 1;
                    self.line_start = self.position;
                }
                b',' if self.json => break,
                byte if is_whitespace(*byte) => self.position += 1,
                _ => break,
            }
        }
    }

    fn read_comment(&mut self) {
        self.position += 1;
        while let Some(byte) = self.source.get(self.position) {
            if *byte == b' ' || *byte == b'\t' {
                self.position += 1;
            } else {
                break;
            }
        }
        let value_start = self.position;
        while let Some(byte) = self.source.get(self.position) {
            if is_newline(*byte) {
                break;
            }
            self.position += 1;
        }
        self.finish(TokenKind::Comment, value_start, self.position);
    }

    fn read_name(&mut self) {
        self.position += 1;
        while let Some(byte) = self.source.get(self.position) {
            if is_name_continue(*byte) {
                self.position += 1;
            } else {
                break;
            }
        }
        self.finish(TokenKind::Name, self.start, self.position);
    }

    fn read_dot(&mut self) -> Result<()> {
        match (self.peek_byte(1), self.peek_byte(2)) {
            (Some(b'.'), Some(b'.')) => {
                self.position += 3;
                self.finish(TokenKind::Spread, self.start, self.position);
                Ok(())
            }
            (Some(b'.'), _) => Err(self.error_at(
                "Unexpected `..`, expected a spread (`...`)",
                self.position,
                self.position + 2,
            )),
            _ => {
                self.position += 1;
                self.finish(TokenKind::Dot, self.start, self.position);
                Ok(())
            }
        }
    }

    /// Reads a run of one or more digits.
    fn read_digits(&mut self) -> Result<()> {
        match self.source.get(self.position) {
            Some(byte) if is_digit(*byte) => self.position += 1,
            _ => {
                return Err(self.error_at(
                    format!(
                        "Invalid number, expected digit but got {}",
                        describe_byte(self.source, self.position)
                    ),
                    self.position,
                    self.position + 1,
                ))
            }
        }
        while let Some(byte) = self.source.get(self.position) {
            if is_digit(*byte) {
                self.position += 1;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn read_number(&mut self) -> Result<()> {
        if self.peek_byte(0) == Some(b'-') {
            self.position += 1;
        }

        if self.peek_byte(0) == Some(b'0') {
            self.position += 1;
            if let Some(byte) = self.peek_byte(0) {
                if is_digit(byte) {
                    return Err(self.error_at(
                        format!(
                            "Invalid number, unexpected digit after 0: {}",
                            describe_byte(self.source, self.position)
                        ),
                        self.position,
                        self.position + 1,
                    ));
                }
            }
        } else {
            self.read_digits()?;
        }

        let mut float_format = None;
        if self.peek_byte(0) == Some(b'.') {
            self.position += 1;
            self.read_digits()?;
            float_format = Some(FloatFormat::FixedPoint);
        }

        if let Some(b'e' | b'E') = self.peek_byte(0) {
            self.position += 1;
            if let Some(b'+' | b'-') = self.peek_byte(0) {
                self.position += 1;
            }
            self.read_digits()?;
            float_format = Some(FloatFormat::Exponential);
        }

        if let Some(byte) = self.peek_byte(0) {
            if byte == b'.' || is_name_start(byte) {
                return Err(self.error_at(
                    format!(
                        "Invalid number, expected digit but got {}",
                        describe_byte(self.source, self.position)
                    ),
                    self.position,
                    self.position + 1,
                ));
            }
        }

        let kind = if float_format.is_some() {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.finish(kind, self.start, self.position);
        self.float_format = float_format;
        Ok(())
    }

    fn read_string(&mut self) -> Result<()> {
        self.position += 1;
        let value_start = self.position;
        loop {
            let byte = match self.source.get(self.position) {
                Some(byte) => *byte,
                None => return Err(self.unterminated()),
            };
            match byte {
                b'"' => {
                    let value_end = self.position;
                    self.position += 1;
                    self.finish(TokenKind::String, value_start, value_end);
                    return Ok(());
                }
                b'\\' => {
                    self.has_escapes = true;
                    self.read_escape()?;
                }
                b'\n' | b'\r' => return Err(self.unterminated()),
                byte if self.is_invalid_in_string(byte) => {
                    return Err(self.error_at(
                        format!(
                            "Invalid character within String: {}",
                            describe_byte(self.source, self.position)
                        ),
                        self.position,
                        self.position + 1,
                    ))
                }
                _ => self.position += 1,
            }
        }
    }

    /// Validates the escape sequence starting at the current backslash and skips over it.
    fn read_escape(&mut self) -> Result<()> {
        let escape_start = self.position;
        match self.peek_byte(1) {
            Some(b'u') => {
                let digits = self
                    .source
                    .get(self.position + 2..self.position + 6)
                    .filter(|digits| digits.iter().all(|byte| is_hex_digit(*byte)));
                match digits {
                    Some(_) => {
                        self.position += 6;
                        Ok(())
                    }
                    None => Err(self.error_at(
                        "Invalid Unicode escape sequence",
                        escape_start,
                        (escape_start + 6).min(self.source.len()),
                    )),
                }
            }
            Some(byte) if is_escape(byte) => {
                self.position += 2;
                Ok(())
            }
            _ => Err(self.error_at(
                "Invalid character escape sequence",
                escape_start,
                (escape_start + 2).min(self.source.len()),
            )),
        }
    }

    fn read_block_string(&mut self) -> Result<()> {
        self.position += 3;
        let value_start = self.position;
        let mut newlines = 0;
        let mut line_start = 0;
        loop {
            let byte = match self.source.get(self.position) {
                Some(byte) => *byte,
                None => return Err(self.unterminated()),
            };
            match byte {
                b'"' if self.source[self.position..].starts_with(b"\"\"\"") => {
                    let value_end = self.position;
                    self.position += 3;
                    self.finish(TokenKind::BlockString, value_start, value_end);
                    if newlines > 0 {
                        self.pending_newlines = newlines;
                        self.pending_line_start = line_start;
                    }
                    return Ok(());
                }
                b'\\' if self.source[self.position + 1..].starts_with(b"\"\"\"") => {
                    self.has_escapes = true;
                    self.position += 4;
                }
                b'\n' => {
                    self.position += 1;
                    newlines += 1;
                    line_start = self.position;
                }
                b'\r' => {
                    self.position += 1;
                    if self.peek_byte(0) == Some(b'\n') {
                        self.position += 1;
                    }
                    newlines += 1;
                    line_start = self.position;
                }
                byte if is_control(byte) => {
                    return Err(self.error_at(
                        format!(
                            "Invalid character within String: {}",
                            describe_byte(self.source, self.position)
                        ),
                        self.position,
                        self.position + 1,
                    ))
                }
                _ => self.position += 1,
            }
        }
    }

    #[inline]
    fn is_invalid_in_string(&self, byte: u8) -> bool {
        if self.json {
            byte < 0x20
        } else {
            is_control(byte)
        }
    }

    fn unterminated(&self) -> Error {
        self.error_at("Unterminated string", self.start, self.position)
    }

    fn error_at<S: Into<String>>(&self, message: S, start: usize, end: usize) -> Error {
        Error::at_span(message, self.source, start, end, ErrorType::Lexical)
    }
}

/// Describes the character at `position` for error messages.
pub(crate) fn describe_byte(source: &[u8], position: usize) -> String {
    let byte = match source.get(position) {
        Some(byte) => *byte,
        None => return "<end of file>".to_string(),
    };
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("`{}`", byte as char)
    } else if byte.is_ascii() {
        format!("U+{:04X}", byte)
    } else {
        let tail = &source[position..(position + 4).min(source.len())];
        let decoded = match std::str::from_utf8(tail) {
            Ok(text) => text.chars().next(),
            Err(error) => std::str::from_utf8(&tail[..error.valid_up_to()])
                .ok()
                .and_then(|text| text.chars().next()),
        };
        match decoded {
            Some(ch) => format!("`{}` (U+{:04X})", ch, ch as u32),
            None => format!("byte 0x{:02X}", byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source.as_bytes());
        let mut kinds = vec![];
        while lexer.read().unwrap() {
            kinds.push(lexer.kind());
        }
        kinds
    }

    fn lex_error(source: &str) -> Error {
        let mut lexer = Lexer::new(source.as_bytes());
        loop {
            match lexer.read() {
                Ok(true) => continue,
                Ok(false) => panic!("expected {source:?} to fail lexing"),
                Err(error) => return error,
            }
        }
    }

    #[test]
    fn punctuators() {
        assert_eq!(
            kinds("! ? $ & ( ) ... : = @ [ ] { } | ."),
            vec![
                TokenKind::Bang,
                TokenKind::QuestionMark,
                TokenKind::Dollar,
                TokenKind::Ampersand,
                TokenKind::LeftParenthesis,
                TokenKind::RightParenthesis,
                TokenKind::Spread,
                TokenKind::Colon,
                TokenKind::Equal,
                TokenKind::At,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Pipe,
                TokenKind::Dot,
            ]
        );
        assert_eq!(lex_error("..").message(), "Unexpected `..`, expected a spread (`...`)");
    }

    #[test]
    fn names_and_values() {
        let mut lexer = Lexer::new(b"  _name2 , \"text\"");
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::Name);
        assert_eq!(lexer.value(), b"_name2");
        assert_eq!((lexer.start(), lexer.end()), (2, 8));
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::String);
        assert_eq!(lexer.value(), b"text");
        assert!(!lexer.has_escapes());
        assert!(!lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::EndOfFile);
        assert!(!lexer.move_next().unwrap());
    }

    #[test]
    fn numbers() {
        let mut lexer = Lexer::new(b"0 -12 1.5 1e10 -1.5E-3 0.0");
        let mut tokens = vec![];
        while lexer.move_next().unwrap() {
            tokens.push((lexer.kind(), lexer.value().to_vec(), lexer.float_format()));
        }
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Integer, b"0".to_vec(), None),
                (TokenKind::Integer, b"-12".to_vec(), None),
                (TokenKind::Float, b"1.5".to_vec(), Some(FloatFormat::FixedPoint)),
                (TokenKind::Float, b"1e10".to_vec(), Some(FloatFormat::Exponential)),
                (TokenKind::Float, b"-1.5E-3".to_vec(), Some(FloatFormat::Exponential)),
                (TokenKind::Float, b"0.0".to_vec(), Some(FloatFormat::FixedPoint)),
            ]
        );
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(
            lex_error("007").message(),
            "Invalid number, unexpected digit after 0: `0`"
        );
        assert_eq!(
            lex_error("1.").message(),
            "Invalid number, expected digit but got <end of file>"
        );
        assert_eq!(
            lex_error("1e").message(),
            "Invalid number, expected digit but got <end of file>"
        );
        assert_eq!(
            lex_error("- 1").message(),
            "Invalid number, expected digit but got ` `"
        );
        assert_eq!(
            lex_error("123abc").message(),
            "Invalid number, expected digit but got `a`"
        );
        assert_eq!(lex_error("1.5.1").error_type(), ErrorType::Lexical);
    }

    #[test]
    fn strings() {
        let mut lexer = Lexer::new(br#""a\"b\u00e9""#);
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::String);
        assert_eq!(lexer.value(), br#"a\"b\u00e9"#);
        assert!(lexer.has_escapes());

        assert_eq!(lex_error("\"abc").message(), "Unterminated string");
        assert_eq!(lex_error("\"ab\nc\"").message(), "Unterminated string");
        assert_eq!(
            lex_error("\"\\x\"").message(),
            "Invalid character escape sequence"
        );
        assert_eq!(
            lex_error("\"\\u12G4\"").message(),
            "Invalid Unicode escape sequence"
        );
        assert_eq!(
            lex_error("\"a\u{1}b\"").message(),
            "Invalid character within String: U+0001"
        );
        assert_eq!(
            lex_error("\"a\u{7f}b\"").message(),
            "Invalid character within String: U+007F"
        );
    }

    #[test]
    fn block_strings() {
        let mut lexer = Lexer::new(b"\"\"\"a\n\\\"\"\"b\"\"\"");
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::BlockString);
        assert_eq!(lexer.value(), b"a\n\\\"\"\"b");
        assert!(lexer.has_escapes());
        assert_eq!(lex_error("\"\"\"abc\"\"").message(), "Unterminated string");
    }

    #[test]
    fn block_string_lines_apply_after_token() {
        let mut lexer = Lexer::new(b"\n  \"\"\"a\n\nb\"\"\" name");
        assert!(lexer.move_next().unwrap());
        assert_eq!((lexer.line(), lexer.column()), (2, 3));
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::Name);
        assert_eq!((lexer.line(), lexer.column()), (4, 6));
    }

    #[test]
    fn comments() {
        let mut lexer = Lexer::new(b"#   hello world\r\nname # trailing");
        assert!(lexer.read().unwrap());
        assert_eq!(lexer.kind(), TokenKind::Comment);
        assert_eq!(lexer.value(), b"hello world");
        assert!(lexer.read().unwrap());
        assert_eq!(lexer.kind(), TokenKind::Name);
        assert_eq!((lexer.line(), lexer.column()), (2, 1));

        let mut lexer = Lexer::new(b"# only a comment\nname");
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::Name);
    }

    #[test]
    fn json_tokens() {
        let mut lexer = Lexer::new_json(br#"[1, "aA", {}]"#);
        let mut kinds = vec![];
        while lexer.move_next().unwrap() {
            kinds.push(lexer.kind());
        }
        assert_eq!(
            kinds,
            vec![
                TokenKind::LeftBracket,
                TokenKind::Integer,
                TokenKind::Comma,
                TokenKind::String,
                TokenKind::Comma,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::RightBracket,
            ]
        );

        let mut lexer = Lexer::new_json(b"\"a\x7fb\"");
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.value(), b"a\x7fb");

        let mut lexer = Lexer::new_json(b"\"\"\"a\"");
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.kind(), TokenKind::String);
        assert_eq!(lexer.value(), b"");

        let error = Lexer::new_json(b"\"a\tb\"").move_next().unwrap_err();
        assert_eq!(error.message(), "Invalid character within String: U+0009");
        let error = Lexer::new_json(b"# comment").move_next().unwrap_err();
        assert_eq!(error.message(), "Unexpected character `#`");
    }

    #[test]
    fn byte_order_mark() {
        let mut lexer = Lexer::new(b"\xEF\xBB\xBFquery");
        assert!(lexer.move_next().unwrap());
        assert_eq!(lexer.value(), b"query");
        assert_eq!(lexer.column(), 1);
        assert_eq!(
            lex_error("query \u{FEFF}").message(),
            "Unexpected character `\u{FEFF}` (U+FEFF)"
        );
    }

    #[test]
    fn unexpected_characters() {
        let error = lex_error("query {\n  ^ }");
        assert_eq!(error.message(), "Unexpected character `^`");
        let location = error.location().unwrap();
        assert_eq!((location.line, location.column), (2, 3));
        assert_eq!(lex_error("\u{0}").message(), "Unexpected character U+0000");
    }
}
