//! Byte classification for the lexer's hot path.
//!
//! Every byte is looked up in a single 256-entry table of category flags. The tables are built at
//! compile time from explicit byte sets. The tests check them against range predicates for the
//! same categories.

const LETTER: u16 = 1 << 0;
const DIGIT: u16 = 1 << 1;
const NAME_START: u16 = 1 << 2;
const NAME_CONTINUE: u16 = 1 << 3;
const PUNCTUATOR: u16 = 1 << 4;
const WHITESPACE: u16 = 1 << 5;
const NEWLINE: u16 = 1 << 6;
const ESCAPE: u16 = 1 << 7;
const HEX_DIGIT: u16 = 1 << 8;
const CONTROL: u16 = 1 << 9;

const LETTER_BYTES: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT_BYTES: &[u8] = b"0123456789";
const PUNCTUATOR_BYTES: &[u8] = b"!?$&():=@[]{}|";
const WHITESPACE_BYTES: &[u8] = b" \t,";
const NEWLINE_BYTES: &[u8] = b"\n\r";
const ESCAPE_BYTES: &[u8] = b"\"\\/bfnrtu";
const HEX_DIGIT_BYTES: &[u8] = b"0123456789abcdefABCDEF";

const fn mark(mut table: [u16; 256], bytes: &[u8], flag: u16) -> [u16; 256] {
    let mut index = 0;
    while index < bytes.len() {
        table[bytes[index] as usize] |= flag;
        index += 1;
    }
    table
}

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    table = mark(table, LETTER_BYTES, LETTER | NAME_START | NAME_CONTINUE);
    table = mark(table, DIGIT_BYTES, DIGIT | NAME_CONTINUE);
    table = mark(table, b"_", NAME_START | NAME_CONTINUE);
    table = mark(table, PUNCTUATOR_BYTES, PUNCTUATOR);
    table = mark(table, WHITESPACE_BYTES, WHITESPACE);
    table = mark(table, NEWLINE_BYTES, NEWLINE);
    table = mark(table, ESCAPE_BYTES, ESCAPE);
    table = mark(table, HEX_DIGIT_BYTES, HEX_DIGIT);

    let mut byte = 0;
    while byte < 0x20 {
        if byte != b'\t' as usize && byte != b'\n' as usize && byte != b'\r' as usize {
            table[byte] |= CONTROL;
        }
        byte += 1;
    }
    table[0x7F] |= CONTROL;
    table
}

static TABLE: [u16; 256] = build_table();

#[inline(always)]
fn has(byte: u8, flag: u16) -> bool {
    TABLE[byte as usize] & flag != 0
}

#[inline]
pub fn is_letter(byte: u8) -> bool {
    has(byte, LETTER)
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    has(byte, DIGIT)
}

#[inline]
pub fn is_name_start(byte: u8) -> bool {
    has(byte, NAME_START)
}

#[inline]
pub fn is_name_continue(byte: u8) -> bool {
    has(byte, NAME_CONTINUE)
}

#[inline]
pub fn is_punctuator(byte: u8) -> bool {
    has(byte, PUNCTUATOR)
}

/// Insignificant whitespace that isn't a line terminator. Commas count as whitespace in GraphQL.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    has(byte, WHITESPACE)
}

#[inline]
pub fn is_newline(byte: u8) -> bool {
    has(byte, NEWLINE)
}

/// Bytes that may follow a backslash inside a string.
#[inline]
pub fn is_escape(byte: u8) -> bool {
    has(byte, ESCAPE)
}

#[inline]
pub fn is_hex_digit(byte: u8) -> bool {
    has(byte, HEX_DIGIT)
}

/// Control characters that may never appear unescaped inside a string. Tab, line feed and
/// carriage return are excluded.
#[inline]
pub fn is_control(byte: u8) -> bool {
    has(byte, CONTROL)
}

/// Range based predicates for the same categories as the lookup table.
#[cfg(test)]
mod ranges {
    #[inline]
    pub fn is_letter(byte: u8) -> bool {
        matches!(byte, b'a'..=b'z' | b'A'..=b'Z')
    }

    #[inline]
    pub fn is_digit(byte: u8) -> bool {
        matches!(byte, b'0'..=b'9')
    }

    #[inline]
    pub fn is_name_start(byte: u8) -> bool {
        is_letter(byte) || byte == b'_'
    }

    #[inline]
    pub fn is_name_continue(byte: u8) -> bool {
        is_name_start(byte) || is_digit(byte)
    }

    #[inline]
    pub fn is_punctuator(byte: u8) -> bool {
        matches!(
            byte,
            b'!' | b'?' | b'$' | b'&' | b'(' | b')' | b':' | b'=' | b'@' | b'[' | b']' | b'{'
                | b'}' | b'|'
        )
    }

    #[inline]
    pub fn is_whitespace(byte: u8) -> bool {
        matches!(byte, b' ' | b'\t' | b',')
    }

    #[inline]
    pub fn is_newline(byte: u8) -> bool {
        matches!(byte, b'\n' | b'\r')
    }

    #[inline]
    pub fn is_escape(byte: u8) -> bool {
        matches!(
            byte,
            b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u'
        )
    }

    #[inline]
    pub fn is_hex_digit(byte: u8) -> bool {
        matches!(byte, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
    }

    #[inline]
    pub fn is_control(byte: u8) -> bool {
        matches!(byte, 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F | 0x7F)
    }
}
