mod parser;
mod serializer;

pub use parser::{parse, parse_with};
pub use serializer::{
    byte_serialize, byte_serialize_into, serialize, serialize_pairs, serialize_with,
};

/// Options for the `application/x-www-form-urlencoded` parser
///
/// <https://url.spec.whatwg.org/#concept-urlencoded-parser>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions<'a> {
    /// Encoding label override; `None` means UTF-8
    pub encoding: Option<&'a str>,
    /// Reject a pair named `_charset_` (charset sniffing is unsupported)
    pub use_charset: bool,
    /// Treat a bare first field (no `=`) as a value with an empty name
    pub is_index: bool,
}

impl<'a> ParseOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn encoding(mut self, label: &'a str) -> Self {
        self.encoding = Some(label);
        self
    }

    #[must_use]
    pub fn use_charset(mut self, use_charset: bool) -> Self {
        self.use_charset = use_charset;
        self
    }

    #[must_use]
    pub fn is_index(mut self, is_index: bool) -> Self {
        self.is_index = is_index;
        self
    }
}

/// Options for the `application/x-www-form-urlencoded` serializer
///
/// <https://url.spec.whatwg.org/#concept-urlencoded-serializer>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions<'a> {
    /// Encoding label override; `None` means UTF-8
    pub encoding: Option<&'a str>,
}

impl<'a> SerializeOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn encoding(mut self, label: &'a str) -> Self {
        self.encoding = Some(label);
        self
    }
}
