use super::SerializeOptions;
use crate::character_sets::{FORM_LITERAL, FORM_SPACE, classify_form_byte};
use crate::compat::String;
use crate::error::Result;
use crate::percent_encode::percent_encode_byte;
use crate::types::{Encoding, Pair};

/// Write the urlencoded byte serialization of `input` into `buffer`.
///
/// Space becomes `+`; `*`, `-`, `.`, `_` and ASCII alphanumerics are kept;
/// every other byte is percent-encoded.
///
/// <https://url.spec.whatwg.org/#concept-urlencoded-byte-serializer>
pub fn byte_serialize_into(buffer: &mut String, input: &[u8]) {
    buffer.reserve(input.len());
    for &byte in input {
        match classify_form_byte(byte) {
            FORM_LITERAL => buffer.push(char::from(byte)),
            FORM_SPACE => buffer.push('+'),
            _ => buffer.push_str(percent_encode_byte(byte)),
        }
    }
}

pub fn byte_serialize(input: &[u8]) -> String {
    let mut result = String::with_capacity(input.len());
    byte_serialize_into(&mut result, input);
    result
}

/// Serialize name/value pairs as UTF-8 `name=value` joined with `&`
pub fn serialize_pairs<I, N, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut result = String::new();
    for (i, (name, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            result.push('&');
        }
        byte_serialize_into(&mut result, name.as_ref().as_bytes());
        result.push('=');
        byte_serialize_into(&mut result, value.as_ref().as_bytes());
    }
    result
}

/// Serialize a pair list as UTF-8
pub fn serialize(pairs: &[Pair]) -> String {
    log::trace!("serializing {} urlencoded pairs", pairs.len());
    serialize_pairs(
        pairs
            .iter()
            .map(|pair| (pair.name.as_str(), pair.value.as_str())),
    )
}

/// Serialize with an encoding override.
///
/// # Errors
///
/// Returns [`crate::Error::UnsupportedEncoding`] for any non UTF-8 label.
pub fn serialize_with(pairs: &[Pair], options: SerializeOptions<'_>) -> Result<String> {
    Encoding::resolve(options.encoding)?;
    Ok(serialize(pairs))
}
