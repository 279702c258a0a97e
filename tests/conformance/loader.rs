/// Conformance fixture loader
///
/// Fixture format: a JSON array whose entries are either comment strings or
/// parser cases `{ input, output, serialized? }`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A parser test case
    Parse {
        input: String,
        output: Vec<(String, String)>,
        #[serde(default)]
        serialized: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct ConformanceResult {
    pub passed: usize,
    pub failures: Vec<ConformanceFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ConformanceFailure {
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl ConformanceResult {
    pub fn record(&mut self, input: &str, field: &'static str, expected: String, actual: String) {
        if expected == actual {
            self.passed += 1;
        } else {
            self.failures.push(ConformanceFailure {
                input: input.to_string(),
                field,
                expected,
                actual,
            });
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}",
            self.passed,
            self.failures.len()
        )
    }
}

pub fn load_urlencoded_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("urlencoded.json")).expect("fixture is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_loads() {
        let cases = load_urlencoded_cases();
        assert!(matches!(cases.first(), Some(TestCase::Comment(_))));
        assert!(cases.len() > 30);
    }

    #[test]
    fn test_result_summary() {
        let mut result = ConformanceResult::default();
        result.record("a", "pairs", "x".to_string(), "x".to_string());
        result.record("b", "pairs", "x".to_string(), "y".to_string());
        assert_eq!(result.summary(), "Passed: 1, Failed: 1");
    }
}
