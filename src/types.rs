use crate::character_sets::is_ascii_whitespace;
use crate::compat::{String, ToString};
use crate::error::{Error, Result};

/// A single name/value entry of a form-urlencoded list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pair {
    pub name: String,
    pub value: String,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Pair {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Character encodings understood by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
}

/// Encoding Standard labels that resolve to UTF-8
const UTF8_LABELS: [&str; 6] = [
    "unicode-1-1-utf-8",
    "unicode11utf8",
    "unicode20utf8",
    "utf-8",
    "utf8",
    "x-unicode20utf8",
];

impl Encoding {
    /// Resolve an encoding label. Labels match ASCII case-insensitively
    /// after trimming ASCII whitespace. Anything that is not a UTF-8 label
    /// is rejected.
    pub fn for_label(label: &str) -> Result<Self> {
        let trimmed = label.trim_matches(is_ascii_whitespace);
        if UTF8_LABELS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::Utf8);
        }
        log::debug!("rejecting encoding label {label:?}");
        Err(Error::UnsupportedEncoding(label.to_string()))
    }

    /// Resolve an optional override, defaulting to UTF-8
    pub fn resolve(label: Option<&str>) -> Result<Self> {
        label.map_or(Ok(Self::Utf8), Self::for_label)
    }
}
