use super::ParseOptions;
use crate::compat::{Cow, String, Vec};
use crate::error::{Error, Result};
use crate::percent_encode::{percent_decode, utf8_decode};
use crate::types::{Encoding, Pair};

/// Reserved field name used for charset sniffing
const CHARSET_FIELD: &[u8] = b"_charset_";

/// Parse `application/x-www-form-urlencoded` bytes as UTF-8.
///
/// Empty sequences between `&` are skipped, `+` becomes a space, and
/// malformed percent escapes pass through literally, so this never fails.
pub fn parse(input: &[u8]) -> Vec<Pair> {
    log::trace!("parsing {} bytes of urlencoded input", input.len());
    sequences(input)
        .filter(|sequence| !sequence.is_empty())
        .map(parse_sequence)
        .collect()
}

/// Parse with an encoding override and the legacy `_charset_`/isindex flags.
///
/// # Errors
///
/// Returns [`Error::UnsupportedEncoding`] when the encoding label is not
/// UTF-8, or when `use_charset` is set and a pair is named `_charset_`.
pub fn parse_with(input: &[u8], options: ParseOptions<'_>) -> Result<Vec<Pair>> {
    Encoding::resolve(options.encoding)?;
    log::trace!(
        "parsing {} bytes of urlencoded input (is_index: {}, use_charset: {})",
        input.len(),
        options.is_index,
        options.use_charset
    );

    let mut pairs = Vec::new();
    for (index, sequence) in sequences(input).enumerate() {
        let sequence = if index == 0 && options.is_index {
            prefix_index_sequence(sequence)
        } else {
            Cow::Borrowed(sequence)
        };
        if sequence.is_empty() {
            continue;
        }
        let (name, value) = split_sequence(&sequence);
        let name = replace_plus(name);
        if options.use_charset && *name == *CHARSET_FIELD {
            log::debug!("rejecting `_charset_` field: charset sniffing is unsupported");
            return Err(Error::UnsupportedEncoding(String::from("_charset_")));
        }
        pairs.push(Pair {
            name: decode_component(&name),
            value: decode_component(&replace_plus(value)),
        });
    }
    Ok(pairs)
}

/// Split on `&`, keeping empty sequences
fn sequences(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    memchr::memchr_iter(b'&', input)
        .chain(core::iter::once(input.len()))
        .map(move |end| {
            let sequence = &input[start..end];
            start = end + 1;
            sequence
        })
}

/// isindex: a first sequence without `=` gets one prepended
fn prefix_index_sequence(sequence: &[u8]) -> Cow<'_, [u8]> {
    if memchr::memchr(b'=', sequence).is_some() {
        return Cow::Borrowed(sequence);
    }
    let mut prefixed = Vec::with_capacity(sequence.len() + 1);
    prefixed.push(b'=');
    prefixed.extend_from_slice(sequence);
    Cow::Owned(prefixed)
}

/// Split at the first `=`; later `=` bytes stay in the value
fn split_sequence(sequence: &[u8]) -> (&[u8], &[u8]) {
    match memchr::memchr(b'=', sequence) {
        Some(pos) => (&sequence[..pos], &sequence[pos + 1..]),
        None => (sequence, &[][..]),
    }
}

fn parse_sequence(sequence: &[u8]) -> Pair {
    let (name, value) = split_sequence(sequence);
    Pair {
        name: decode_component(&replace_plus(name)),
        value: decode_component(&replace_plus(value)),
    }
}

fn replace_plus(input: &[u8]) -> Cow<'_, [u8]> {
    if memchr::memchr(b'+', input).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .iter()
            .map(|&b| if b == b'+' { b' ' } else { b })
            .collect(),
    )
}

fn decode_component(input: &[u8]) -> String {
    match percent_decode(input) {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Cow::Owned(bytes) => utf8_decode(bytes),
    }
}
