//! Decoding of the test tool's `--show-only=json-v1` output

use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestDocument {
    #[serde(default)]
    tests: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
}

/// Extract the test names from a json-v1 test list document.
pub fn test_names(json: &str) -> Result<Vec<String>> {
    let document: TestDocument = serde_json::from_str(json)
        .map_err(|e| Error::TestList(format!("invalid test list document: {e}")))?;
    Ok(document.tests.into_iter().map(|t| t.name).collect())
}
