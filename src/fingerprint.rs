use crate::elements::{Dataset, Element};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Identity digest of a dataset's content, used as a cache key only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the fingerprint of an empty dataset
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the fingerprint of a dataset.
///
/// Elements are canonicalized (keys sorted at every depth) and the canonical forms are
/// sorted before hashing, so element order does not affect the result.
pub fn fingerprint(dataset: &Dataset) -> ContentFingerprint {
    if dataset.is_empty() {
        return ContentFingerprint::default();
    }

    let mut canonical: Vec<String> = dataset.elements().iter().map(canonical_element).collect();
    canonical.sort_unstable();

    let mut hasher = Sha256::new();
    for (i, element) in canonical.iter().enumerate() {
        if i > 0 {
            hasher.update(b"\n");
        }
        hasher.update(element.as_bytes());
    }

    let digest = ContentFingerprint(hex::encode(hasher.finalize()));
    ::log::debug!("Content fingerprint over {} elements: {}", dataset.len(), digest);
    digest
}

/// Compact JSON of one element with recursively sorted keys
pub fn canonical_element(element: &Element) -> String {
    canonical_value(element).to_string()
}

/// JSON value of one element with recursively sorted keys
pub fn canonical_value(element: &Element) -> Value {
    sort_keys(serde_json::to_value(element).unwrap_or(Value::Null))
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<_, _>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
