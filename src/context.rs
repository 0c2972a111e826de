use crate::elements::Dataset;
use crate::fingerprint::canonical_value;
use serde_json::Value;

/// Placeholder context used when there is nothing to analyze
pub const NO_DATA_CONTEXT: &str = "No data available for analysis.";

/// Marker that separates the statistics header from the JSON dump
pub const DATA_DELIMITER: &str = "FULL CONTENT DATA (JSON):";

/// Builds the statistics header followed by the full dataset as indented JSON.
///
/// An empty dataset yields [`NO_DATA_CONTEXT`] and nothing else.
pub fn assemble(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return NO_DATA_CONTEXT.to_string();
    }

    let stats = dataset.stats();
    let mut context = format!(
        "PAGE CONTEXT ANALYSIS:\n\
         - Total elements: {}\n\
         - Text elements: {}\n\
         - Links: {}\n\
         - Unique selectors: {}\n\
         \n\
         {}\n",
        stats.total, stats.text, stats.links, stats.unique_selectors, DATA_DELIMITER
    );
    context.push_str(&render_dataset(dataset));
    context
}

/// Pretty-printed JSON of the whole dataset, non-ASCII kept as-is
pub fn render_dataset(dataset: &Dataset) -> String {
    let records = Value::Array(dataset.elements().iter().map(canonical_value).collect());
    serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
}

/// Wraps an assembled context in the fixed instruction template.
///
/// Pure: the same context always produces the same prompt.
pub fn build_system_prompt(context: &str) -> String {
    format!(
        "You are a specialized web content analysis agent. You have access to the complete scraped content of a web page.

MISSION:
1. Analyze user questions about the page content
2. If information is directly available - provide the CSS selector and element text
3. If information is not found - check available links and suggest the most relevant ones
4. Always provide CSS selectors when possible
5. Analyze the COMPLETE JSON data provided below

RESPONSE FORMAT:
- ✅ Direct information: [selector] - \"text content\"
- 🔗 Suggested link: [selector] - \"link text\" (expected topic)
- ❌ Information not found: Explain why and suggest next steps

COMPLETE PAGE CONTEXT:
{context}
"
    )
}
