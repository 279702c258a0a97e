#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Form-urlencoded parser/serializer tests
///
/// This test suite covers:
/// - Parser options (encoding override, `_charset_`, isindex)
/// - Byte serializer alphabet over every byte value
/// - Agreement with the `url` crate's `form_urlencoded` implementation
use formurl::urlencoded::{self, ParseOptions, SerializeOptions};
use formurl::{Encoding, Error, Pair, UrlSearchParams};

const SAMPLES: &[&[u8]] = &[
    b"",
    b"a=b&c=d",
    b"&&&a=b&&&&c=d&",
    b"a==a&b",
    b"a+b=c+d%20e",
    b"%=a&%a=a&%a_=a&%61=a",
    b"b=%2sf%2a&b=%2%2af%2a&b=%%2a",
    b"%FE%FF=%C2x",
    b"\xFF\xFE=\xC3",
    b"q=URLUtils.s&topic=api",
    "name=Fran%C3%A7ois&city=東京".as_bytes(),
];

#[test]
fn test_parse_matches_url_crate() {
    for &input in SAMPLES {
        let ours: Vec<(String, String)> = urlencoded::parse(input)
            .into_iter()
            .map(|pair| (pair.name, pair.value))
            .collect();
        let reference: Vec<(String, String)> = url::form_urlencoded::parse(input)
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        assert_eq!(ours, reference, "input: {:?}", String::from_utf8_lossy(input));
    }
}

#[test]
fn test_byte_serialize_matches_url_crate() {
    let every_byte: Vec<u8> = (0..=255u8).collect();
    let reference: String = url::form_urlencoded::byte_serialize(&every_byte).collect();
    assert_eq!(urlencoded::byte_serialize(&every_byte), reference);
}

#[test]
fn test_serialize_matches_url_crate() {
    let pairs = [
        ("a b", "c&d"),
        ("", ""),
        ("あ", "🍻"),
        ("!~'()", "*-._"),
    ];
    let reference = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    assert_eq!(urlencoded::serialize_pairs(pairs), reference);
}

#[test]
fn test_serialize_pair_list() {
    let pairs = vec![Pair::new("a", "1"), Pair::new("b c", "2 3")];
    assert_eq!(urlencoded::serialize(&pairs), "a=1&b+c=2+3");
    assert_eq!(urlencoded::serialize(&[]), "");
}

#[test]
fn test_encoding_override() {
    let utf8 = ParseOptions::new().encoding("UTF-8");
    assert_eq!(
        urlencoded::parse_with(b"a=%E3%81%82", utf8).unwrap(),
        vec![Pair::new("a", "あ")]
    );

    let err = urlencoded::parse_with(b"a=b", ParseOptions::new().encoding("euc-jp")).unwrap_err();
    assert_eq!(err, Error::UnsupportedEncoding("euc-jp".to_string()));
    assert_eq!(err.to_string(), "Unsupported encoding: euc-jp");

    assert!(
        urlencoded::serialize_with(&[], SerializeOptions::new().encoding("gbk")).is_err()
    );
    assert_eq!(Encoding::for_label("x-unicode20utf8"), Ok(Encoding::Utf8));
}

#[test]
fn test_charset_flag() {
    let options = ParseOptions::new().use_charset(true);
    assert_eq!(
        urlencoded::parse_with(b"_charset_=shift_jis", options),
        Err(Error::UnsupportedEncoding("_charset_".to_string()))
    );
    // `+` is replaced before the name is checked
    assert!(urlencoded::parse_with(b"_charset_+=x", options).is_ok());
    assert!(urlencoded::parse_with(b"%5Fcharset%5F=x", options).is_ok());
}

#[test]
fn test_is_index() {
    let options = ParseOptions::new().is_index(true);
    assert_eq!(
        urlencoded::parse_with(b"search+terms", options).unwrap(),
        vec![Pair::new("", "search terms")]
    );
    assert_eq!(
        urlencoded::parse_with(b"&x", options).unwrap(),
        vec![Pair::new("", ""), Pair::new("x", "")]
    );
}

#[test]
fn test_url_search_params_parse_with() {
    let params =
        UrlSearchParams::parse_with("terms&page=2", ParseOptions::new().is_index(true)).unwrap();
    assert_eq!(params.get(""), Some("terms"));
    assert_eq!(params.get("page"), Some("2"));
    assert_eq!(params.to_string(), "=terms&page=2");

    assert!(UrlSearchParams::parse_with("a=b", ParseOptions::new().encoding("big5")).is_err());
}
