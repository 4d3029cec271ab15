//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate. Lexing, parsing,
//! resource ceilings and request envelope parsing all report failures as an [Error], carrying an
//! [ErrorType] that tells them apart.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// Upper bound of source bytes that an error's context excerpt is rendered from.
const MAX_EXCERPT_LEN: usize = 512;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For parsing, the context
/// string is populated with a snippet of the source text around the failure.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The category of an [Error].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// Document-level errors that aren't tied to a position in the source, like a missing operation.
    GraphQL,
    /// A malformed token, like an unterminated string or an invalid escape sequence.
    Lexical,
    /// A well-formed token that the grammar doesn't accept at its position.
    Syntax,
    /// One of the parser's resource ceilings was exceeded.
    Limit,
    /// The request envelope around a GraphQL document was malformed.
    Request(RequestErrorKind),
}

/// Conditions under which a GraphQL request envelope is rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RequestErrorKind {
    /// A request carried neither a `query` nor an `id`, nor a persisted query hash.
    MissingQueryOrId,
    /// A request's `query` was neither a string nor `null`.
    InvalidQueryType,
    /// The request JSON didn't have the expected structure.
    InvalidStructure,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            location: None,
            context: None,
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<Location>,
        context: S,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Create an Error pointing at a byte range of a source buffer.
    ///
    /// The line and column are recomputed from the source and the context excerpt is rendered
    /// here, since this is only ever called once a failure has already occurred.
    pub(crate) fn at_span<S: Into<String>>(
        message: S,
        source: &[u8],
        start: usize,
        end: usize,
        error_type: ErrorType,
    ) -> Self {
        let start = start.min(source.len());
        let end = end.clamp(start, source.len());
        let location = get_location(source, start, end);
        Self {
            message: message.into(),
            location: Some(location),
            context: Some(print_span(source, start, end)),
            error_type,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the source excerpt of the current error, if any was captured.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns the category of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::GraphQL => format!("GraphQL Error: {}", self.message),
            ErrorType::Lexical => format!("Lexical Error: {}", self.message),
            ErrorType::Syntax => format!("Syntax Error: {}", self.message),
            ErrorType::Limit => format!("Limit Error: {}", self.message),
            ErrorType::Request(_) => format!("Request Error: {}", self.message),
        };

        let formatted = match self.location {
            Some(ref location) => format!("{} ({}:{})", formatted, location.line, location.column),
            None => formatted,
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

/// A position inside a source buffer.
///
/// `start` and `end` are byte offsets, `line` and `column` are 1-indexed and refer to `start`.
/// Columns count bytes from the start of the line.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

/// Returns the byte offset at which the line containing `offset` begins and the line's number.
fn line_start(source: &[u8], offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut start = 0;
    let mut index = 0;
    while index < offset {
        match source[index] {
            b'\r' if source.get(index + 1) == Some(&b'\n') && index + 1 < offset => {
                index += 2;
                line += 1;
                start = index;
            }
            b'\n' | b'\r' => {
                index += 1;
                line += 1;
                start = index;
            }
            _ => index += 1,
        }
    }
    (start, line)
}

pub(crate) fn get_location(source: &[u8], start: usize, end: usize) -> Location {
    let (line_offset, line) = line_start(source, start);
    Location {
        start,
        end,
        line,
        column: start - line_offset + 1,
    }
}

/// Renders an excerpt of `source` around `start..end` with line numbers and a caret marker.
///
/// At most [MAX_EXCERPT_LEN] bytes around the span are considered, so huge single-line inputs
/// don't produce huge errors.
pub(crate) fn print_span(source: &[u8], start: usize, end: usize) -> String {
    let window_start = start.saturating_sub(MAX_EXCERPT_LEN / 2);
    let window_end = (start + MAX_EXCERPT_LEN / 2).min(source.len());
    let (line_offset, start_line) = line_start(source, start);

    // Show the preceding line for context, if it fits inside the window
    let mut snippet_start = line_offset.max(window_start);
    let mut first_line = start_line;
    if line_offset > 0 && line_offset > window_start {
        let (previous_offset, previous_line) = line_start(source, line_offset - 1);
        if previous_offset >= window_start {
            snippet_start = previous_offset;
            first_line = previous_line;
        }
    }

    let snippet_end = source[start..window_end]
        .iter()
        .position(|byte| *byte == b'\n' || *byte == b'\r')
        .map_or(window_end, |idx| idx + start);

    let snippet = String::from_utf8_lossy(&source[snippet_start..snippet_end]);
    let lines: Vec<&str> = snippet.lines().collect();
    let line_num_pad = (first_line + lines.len().max(1) - 1).to_string().len();

    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (first_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line.trim_end_matches('\r'));
    }

    let marker_start = line_offset.max(window_start);
    let marker_len = end.min(snippet_end).saturating_sub(start).max(1);
    out.push('\n');
    out.push_str(&" ".repeat(line_num_pad + 1));
    out.push_str(" | ");
    out.push_str(&" ".repeat(start - marker_start));
    out.push_str(&"^".repeat(marker_len));
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}
