use crate::compat::String;

/// Public `URLSearchParams` operations that validate their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Append,
    Delete,
    Get,
    GetAll,
    Set,
    Has,
}

impl Method {
    /// Name of the operation as exposed on the web platform interface
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Delete => "delete",
            Self::Get => "get",
            Self::GetAll => "getAll",
            Self::Set => "set",
            Self::Has => "has",
        }
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the codec and by `UrlSearchParams`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required name or value argument was absent
    MissingArgument(Method),
    /// An encoding other than UTF-8 (or the `_charset_` flag) was requested
    UnsupportedEncoding(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingArgument(method) => {
                write!(f, "Not enough arguments to URLSearchParams.{method}.")
            }
            Self::UnsupportedEncoding(label) => write!(f, "Unsupported encoding: {label}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for codec and `UrlSearchParams` operations
pub type Result<T> = core::result::Result<T, Error>;
