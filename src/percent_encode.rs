use crate::compat::{Cow, String, Vec};

/// Percent-encode a single byte as `%XX` (uppercase hex, zero-padded)
///
/// <https://url.spec.whatwg.org/#percent-encode>
pub fn percent_encode_byte(byte: u8) -> &'static str {
    percent_encoding::percent_encode_byte(byte)
}

/// Percent-decode a byte sequence.
///
/// A `%` followed by two ASCII hex digits is replaced by the byte they
/// denote. Any other `%` (too close to the end, or followed by a non hex
/// digit) is copied through unchanged. The output is raw bytes and need
/// not be valid UTF-8.
///
/// Borrows the input when it contains no `%` at all.
///
/// <https://url.spec.whatwg.org/#percent-decode>
pub fn percent_decode(input: &[u8]) -> Cow<'_, [u8]> {
    if memchr::memchr(b'%', input).is_none() {
        return Cow::Borrowed(input);
    }
    percent_encoding::percent_decode(input).into()
}

/// Percent-encode every UTF-8 byte of `input`.
///
/// ```
/// assert_eq!(formurl::percent_encoder("aあ"), "%61%E3%81%82");
/// ```
pub fn percent_encoder(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        result.push_str(percent_encode_byte(byte));
    }
    result
}

/// Percent-decode `input` and decode the resulting bytes as UTF-8.
/// Invalid sequences become U+FFFD.
///
/// ```
/// assert_eq!(formurl::percent_decoder("%E3%81%82%zz"), "あ%zz");
/// ```
pub fn percent_decoder(input: &str) -> String {
    match percent_decode(input.as_bytes()) {
        Cow::Borrowed(_) => String::from(input),
        Cow::Owned(bytes) => utf8_decode(bytes),
    }
}

/// UTF-8 decode without BOM handling, replacing invalid sequences
pub(crate) fn utf8_decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
