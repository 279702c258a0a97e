/// Byte serializer classification for `application/x-www-form-urlencoded`
/// Returns: 0=percent-encode, 1=literal passthrough, 2=space (emitted as `+`)
const FORM_BYTE_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Literal passthrough: * - . _ 0-9 A-Z a-z
    table[b'*' as usize] = 1;
    table[b'-' as usize] = 1;
    table[b'.' as usize] = 1;
    table[b'_' as usize] = 1;

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }

    table[b' ' as usize] = 2;

    table
};

pub const FORM_LITERAL: u8 = 1;
pub const FORM_SPACE: u8 = 2;

/// Classify a byte for the urlencoded byte serializer
pub fn classify_form_byte(b: u8) -> u8 {
    FORM_BYTE_TABLE[b as usize]
}

/// Check if a character is an ASCII whitespace character per the Infra standard
pub fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}
