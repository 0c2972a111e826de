use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type tag of plain text elements
pub const TEXT_TYPE: &str = "TEXT";

/// Type tag of link elements
pub const LINK_TYPE: &str = "LINK";

/// Key of the CSS-like locator field
pub const SELECTOR_KEY: &str = "selector";

/// One scraped unit of page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Category tag, e.g. "TEXT" or "LINK"
    #[serde(rename = "type")]
    pub kind: String,

    /// Every other field (selector, text, href, location, ...) exactly as loaded
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Element {
    /// Create an element carrying only a type and a selector
    pub fn new(kind: &str, selector: &str) -> Self {
        Self::untagged(kind).with_field(SELECTOR_KEY, selector)
    }

    /// Create an element with no selector field at all
    pub fn untagged(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            fields: Map::new(),
        }
    }

    /// The selector, with absent and null read as empty
    pub fn selector(&self) -> &str {
        self.fields
            .get(SELECTOR_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Attach an opaque field
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn is_text(&self) -> bool {
        self.kind == TEXT_TYPE
    }

    pub fn is_link(&self) -> bool {
        self.kind == LINK_TYPE
    }
}

/// The ordered, read-only collection of elements of one page snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    elements: Vec<Element>,
}

impl Dataset {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Summary counts used in the prompt header
    pub fn stats(&self) -> DatasetStats {
        let mut selectors: Vec<&str> = self.elements.iter().map(Element::selector).collect();
        selectors.sort_unstable();
        selectors.dedup();

        DatasetStats {
            total: self.elements.len(),
            text: self.elements.iter().filter(|e| e.is_text()).count(),
            links: self.elements.iter().filter(|e| e.is_link()).count(),
            unique_selectors: selectors.len(),
        }
    }
}

impl From<Vec<Element>> for Dataset {
    fn from(elements: Vec<Element>) -> Self {
        Self::new(elements)
    }
}

/// Element counts of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    pub total: usize,
    pub text: usize,
    pub links: usize,
    /// Empty selectors count as one distinct value
    pub unique_selectors: usize,
}
