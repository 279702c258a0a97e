#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod error;
mod hook;
mod percent_encode;
mod types;
mod url_search_params;

pub mod urlencoded;

// Public API
pub use error::{Error, Method};
pub use hook::{NoopHook, UpdateHook};
pub use percent_encode::{percent_decode, percent_decoder, percent_encode_byte, percent_encoder};
pub use types::{Encoding, Pair};
pub use url_search_params::{Init, Iter, UrlSearchParams};
pub use urlencoded::{ParseOptions, SerializeOptions};

pub type Result<T> = core::result::Result<T, Error>;
