/// Parser and serializer conformance against the JSON fixtures
use super::loader::{ConformanceResult, TestCase, load_urlencoded_cases};
use formurl::{UrlSearchParams, urlencoded};

fn format_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> String {
    format!("{:?}", pairs.into_iter().collect::<Vec<_>>())
}

#[test]
fn test_urlencoded_parser_fixtures() {
    let mut result = ConformanceResult::default();

    for case in load_urlencoded_cases() {
        let TestCase::Parse {
            input,
            output,
            serialized,
        } = case
        else {
            continue;
        };

        let parsed = urlencoded::parse(input.as_bytes());
        result.record(
            &input,
            "pairs",
            format_pairs(output.clone()),
            format_pairs(parsed.into_iter().map(|pair| (pair.name, pair.value))),
        );

        let params = UrlSearchParams::parse(&input);
        let entries = params
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()));
        result.record(&input, "entries", format_pairs(output), format_pairs(entries));

        if let Some(expected) = serialized {
            result.record(&input, "toString", expected, params.to_string());
        }
    }

    assert!(
        result.failures.is_empty(),
        "{}\n{:#?}",
        result.summary(),
        result.failures
    );
}

#[test]
fn test_serialization_reparses_to_same_pairs() {
    for case in load_urlencoded_cases() {
        let TestCase::Parse { input, .. } = case else {
            continue;
        };
        let params = UrlSearchParams::parse(&input);
        let reparsed = UrlSearchParams::parse(&params.to_string());
        assert_eq!(reparsed, params, "input: {input:?}");
    }
}
