//! Decoding of string token values into their semantic values.
//!
//! Escape sequences are decoded into a [ScratchBuffer] first, which lives on the stack for short
//! strings and rents a pooled heap buffer otherwise. Block strings are then dedented into the
//! arena.

use super::token::TokenKind;
use bumpalo::Bump;
use std::cell::RefCell;

const STACK_BUFFER_LEN: usize = 256;
const MAX_POOLED_BUFFERS: usize = 8;

thread_local! {
    static BUFFER_POOL: RefCell<Vec<Vec<u8>>> = RefCell::new(Vec::new());
}

fn rent_buffer(capacity: usize) -> Vec<u8> {
    let mut buffer = BUFFER_POOL
        .with(|pool| pool.borrow_mut().pop())
        .unwrap_or_default();
    buffer.reserve(capacity);
    buffer
}

fn return_buffer(mut buffer: Vec<u8>) {
    buffer.fill(0);
    buffer.clear();
    BUFFER_POOL.with(|pool| {
        let mut pool = pool.borrow_mut();
        if pool.len() < MAX_POOLED_BUFFERS {
            pool.push(buffer);
        }
    });
}

/// A temporary byte buffer for decoding a single string value.
///
/// Up to 256 bytes are kept inline. Larger contents spill into a heap buffer that's rented from a
/// thread-local pool. All used bytes are zeroed on drop and rented buffers are returned to the
/// pool.
pub(crate) struct ScratchBuffer {
    inline: [u8; STACK_BUFFER_LEN],
    len: usize,
    heap: Option<Vec<u8>>,
}

impl ScratchBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        ScratchBuffer {
            inline: [0; STACK_BUFFER_LEN],
            len: 0,
            heap: if capacity > STACK_BUFFER_LEN {
                Some(rent_buffer(capacity))
            } else {
                None
            },
        }
    }

    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) {
        if let Some(heap) = &mut self.heap {
            heap.extend_from_slice(bytes);
        } else if self.len + bytes.len() <= STACK_BUFFER_LEN {
            self.inline[self.len..self.len + bytes.len()].copy_from_slice(bytes);
            self.len += bytes.len();
        } else {
            let mut heap = rent_buffer(self.len + bytes.len());
            heap.extend_from_slice(&self.inline[..self.len]);
            heap.extend_from_slice(bytes);
            self.inline[..self.len].fill(0);
            self.len = 0;
            self.heap = Some(heap);
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        self.extend_from_slice(&[byte]);
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        match &self.heap {
            Some(heap) => heap.as_slice(),
            None => &self.inline[..self.len],
        }
    }

    #[inline]
    pub(crate) fn is_inline(&self) -> bool {
        self.heap.is_none()
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        self.inline[..self.len].fill(0);
        if let Some(heap) = self.heap.take() {
            return_buffer(heap);
        }
    }
}

/// A failure while decoding a string value.
///
/// The `offset` is relative to the start of the raw token value.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DecodeError {
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) message: &'static str,
}

const HEX_FORMAT: u128 = lexical_core::NumberFormatBuilder::hexadecimal();
const HEX_OPTIONS: lexical_core::ParseIntegerOptions = lexical_core::ParseIntegerOptions::new();

/// Decodes a `\uXXXX` code unit from its four hex digits.
fn parse_code_unit(digits: &[u8], offset: usize) -> Result<u32, DecodeError> {
    lexical_core::parse_with_options::<u32, HEX_FORMAT>(digits, &HEX_OPTIONS).map_err(|_| {
        DecodeError {
            offset,
            len: 6,
            message: "Invalid Unicode escape sequence",
        }
    })
}

/// Decodes the escape sequences of a single-line string's raw value into `out`.
pub(crate) fn unescape_string(raw: &[u8], out: &mut ScratchBuffer) -> Result<(), DecodeError> {
    let mut index = 0;
    while index < raw.len() {
        let run_end = raw[index..]
            .iter()
            .position(|byte| *byte == b'\\')
            .map_or(raw.len(), |position| index + position);
        out.extend_from_slice(&raw[index..run_end]);
        index = run_end;
        if index >= raw.len() {
            break;
        }

        let escape = raw.get(index + 1).copied();
        match escape {
            Some(b'"') => out.push(b'"'),
            Some(b'\\') => out.push(b'\\'),
            Some(b'/') => out.push(b'/'),
            Some(b'b') => out.push(0x08),
            Some(b'f') => out.push(0x0C),
            Some(b'n') => out.push(b'\n'),
            Some(b'r') => out.push(b'\r'),
            Some(b't') => out.push(b'\t'),
            Some(b'u') => {
                let digits = raw.get(index + 2..index + 6).ok_or(DecodeError {
                    offset: index,
                    len: raw.len() - index,
                    message: "Invalid Unicode escape sequence",
                })?;
                let code_unit = parse_code_unit(digits, index)?;
                if (0xD800..=0xDBFF).contains(&code_unit) {
                    return Err(DecodeError {
                        offset: index,
                        len: 6,
                        message: "Unicode escapes that encode to four UTF-8 bytes are not supported",
                    });
                }
                let ch = char::from_u32(code_unit).ok_or(DecodeError {
                    offset: index,
                    len: 6,
                    message: "Invalid Unicode escape sequence",
                })?;
                let mut encoded = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut encoded).as_bytes());
                index += 6;
                continue;
            }
            _ => {
                return Err(DecodeError {
                    offset: index,
                    len: 2.min(raw.len() - index),
                    message: "Invalid character escape sequence",
                })
            }
        }
        index += 2;
    }
    Ok(())
}

/// Replaces every `\"""` in a block string's raw value with `"""`.
pub(crate) fn unescape_block_string(raw: &[u8], out: &mut ScratchBuffer) {
    let mut index = 0;
    while index < raw.len() {
        if raw[index] == b'\\' && raw[index + 1..].starts_with(b"\"\"\"") {
            out.extend_from_slice(b"\"\"\"");
            index += 4;
        } else {
            out.push(raw[index]);
            index += 1;
        }
    }
}

/// Iterates the lines of a block string, splitting on `\r\n`, `\n`, and `\r`.
struct Lines<'b> {
    bytes: &'b [u8],
    position: usize,
    done: bool,
}

impl<'b> Lines<'b> {
    fn new(bytes: &'b [u8]) -> Self {
        Lines {
            bytes,
            position: 0,
            done: false,
        }
    }
}

impl<'b> Iterator for Lines<'b> {
    type Item = &'b [u8];

    fn next(&mut self) -> Option<&'b [u8]> {
        if self.done {
            return None;
        }
        let rest = &self.bytes[self.position..];
        match rest.iter().position(|byte| *byte == b'\n' || *byte == b'\r') {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end] == b'\r' && rest.get(end + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.position += end + skip;
                Some(line)
            }
            None => {
                self.done = true;
                Some(rest)
            }
        }
    }
}

#[inline]
fn leading_whitespace(line: &[u8]) -> usize {
    line.iter()
        .take_while(|byte| **byte == b' ' || **byte == b'\t')
        .count()
}

/// Computes the value of a block string from its unescaped contents.
///
/// The common indentation of all lines but the first is removed, leading and trailing lines that
/// only contain whitespace are dropped, and the remaining lines are joined with line feeds.
pub(crate) fn dedent_block_string<'a>(
    arena: &'a Bump,
    raw: &[u8],
) -> bumpalo::collections::Vec<'a, u8> {
    let mut common_indent: Option<usize> = None;
    let mut first_line = None;
    let mut last_line = 0;
    for (index, line) in Lines::new(raw).enumerate() {
        let indent = leading_whitespace(line);
        if indent < line.len() {
            first_line.get_or_insert(index);
            last_line = index;
            if index > 0 && common_indent.map_or(true, |common| indent < common) {
                common_indent = Some(indent);
            }
        }
    }

    let mut out = bumpalo::collections::Vec::with_capacity_in(raw.len(), arena);
    let first_line = match first_line {
        Some(first_line) => first_line,
        None => return out,
    };
    let common_indent = common_indent.unwrap_or(0);
    for (index, line) in Lines::new(raw)
        .enumerate()
        .skip(first_line)
        .take(last_line - first_line + 1)
    {
        if index > first_line {
            out.push(b'\n');
        }
        if index == 0 {
            out.extend_from_slice(line);
        } else {
            out.extend_from_slice(&line[common_indent.min(line.len())..]);
        }
    }
    out
}

/// Decodes the raw value of a string or block string token into an arena string.
///
/// Single-line strings without escape sequences are borrowed from the source buffer directly.
pub(crate) fn decode_string<'a>(
    arena: &'a Bump,
    raw: &'a [u8],
    kind: TokenKind,
    has_escapes: bool,
) -> Result<&'a str, DecodeError> {
    let invalid_utf8 = |error: std::str::Utf8Error| DecodeError {
        offset: error.valid_up_to(),
        len: 1,
        message: "Invalid UTF-8 sequence in string",
    };

    if kind == TokenKind::BlockString {
        let value = if has_escapes {
            let mut buffer = ScratchBuffer::with_capacity(raw.len());
            unescape_block_string(raw, &mut buffer);
            dedent_block_string(arena, buffer.as_bytes())
        } else {
            dedent_block_string(arena, raw)
        };
        let value = value.into_bump_slice();
        return std::str::from_utf8(value).map_err(|error| DecodeError {
            offset: 0,
            ..invalid_utf8(error)
        });
    }

    if !has_escapes {
        return std::str::from_utf8(raw).map_err(invalid_utf8);
    }

    let mut buffer = ScratchBuffer::with_capacity(raw.len());
    unescape_string(raw, &mut buffer)?;
    let value = std::str::from_utf8(buffer.as_bytes()).map_err(|error| DecodeError {
        offset: 0,
        ..invalid_utf8(error)
    })?;
    Ok(arena.alloc_str(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(raw: &str) -> Result<String, DecodeError> {
        let mut buffer = ScratchBuffer::with_capacity(raw.len());
        unescape_string(raw.as_bytes(), &mut buffer)?;
        Ok(String::from_utf8(buffer.as_bytes().to_vec()).unwrap())
    }

    fn block(raw: &str) -> String {
        let arena = Bump::new();
        let value = decode_string(&arena, raw.as_bytes(), TokenKind::BlockString, true).unwrap();
        value.to_string()
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(unescape(r#"a\"b\\c\/d"#).unwrap(), "a\"b\\c/d");
        assert_eq!(unescape(r"\b\f\n\r\t").unwrap(), "\u{8}\u{c}\n\r\t");
        assert_eq!(unescape("plain").unwrap(), "plain");
    }

    #[test]
    fn scratch_buffer_spills() {
        let mut buffer = ScratchBuffer::with_capacity(10);
        assert!(buffer.is_inline());
        let chunk = [b'x'; 200];
        buffer.extend_from_slice(&chunk);
        assert!(buffer.is_inline());
        buffer.extend_from_slice(&chunk);
        assert!(!buffer.is_inline());
        assert_eq!(buffer.as_bytes().len(), 400);
        drop(buffer);

        let buffer = ScratchBuffer::with_capacity(1024);
        assert!(!buffer.is_inline());
        assert!(buffer.as_bytes().is_empty());
    }

    #[test]
    fn long_strings_decode() {
        let raw = r"\u0041".repeat(100);
        assert_eq!(unescape(&raw).unwrap(), "A".repeat(100));
    }

    #[test]
    fn block_string_dedent() {
        assert_eq!(
            block("\n  Hello,\n    World!\n\n  Yours,\n    GraphQL.\n"),
            "Hello,\n  World!\n\nYours,\n  GraphQL."
        );
        assert_eq!(block("  first\n    second\n    third"), "  first\nsecond\nthird");
        assert_eq!(block("\n\n   \n"), "");
        assert_eq!(block(""), "");
        assert_eq!(block("a\r\n  b\r  c"), "a\nb\nc");
        assert_eq!(block("\\\"\"\" quoted"), "\"\"\" quoted");
        assert_eq!(block("\t\n\tindented\n\t\tmore\n"), "indented\n\tmore");
    }

    #[test]
    fn borrowed_strings() {
        let arena = Bump::new();
        let source = b"no escapes here";
        let value = decode_string(&arena, source, TokenKind::String, false).unwrap();
        assert_eq!(value.as_ptr(), source.as_ptr());
    }

    #[test]
    fn unicode_escapes() {
        assert_eq!(unescape(r"\u0041").unwrap(), "A");
        assert_eq!(unescape(r"\u00e9").unwrap(), "é");
        assert_eq!(unescape(r"\u00E9").unwrap(), "é");
        assert_eq!(unescape(r"\u20AC").unwrap(), "€");
        assert_eq!(unescape(r"x\u0000y").unwrap(), "x\u{0}y");
        assert_eq!(unescape(r"\u00e9").unwrap().len(), 2);
        assert_eq!(unescape(r"\u20AC").unwrap().len(), 3);
    }

    #[test]
    fn unsupported_escapes() {
        let error = unescape(r"ab\uD83D\uDE00").unwrap_err();
        assert_eq!(error.offset, 2);
        assert_eq!(
            error.message,
            "Unicode escapes that encode to four UTF-8 bytes are not supported"
        );
        assert_eq!(
            unescape(r"\uDE00").unwrap_err().message,
            "Invalid Unicode escape sequence"
        );
        assert_eq!(
            unescape(r"\q").unwrap_err().message,
            "Invalid character escape sequence"
        );
    }

    #[test]
    fn invalid_utf8() {
        let arena = Bump::new();
        let error = decode_string(&arena, b"ab\xFF", TokenKind::String, false).unwrap_err();
        assert_eq!(error.offset, 2);
        assert_eq!(error.message, "Invalid UTF-8 sequence in string");
    }
}
